use super::links::SceneLinkBuilder;
use crate::domain::{Counterpart, Performer, RankedResult, Studio, StudioRef, TallyEntry};
use crate::services::partners::PartnerStats;
use crate::services::studios::StudioStats;
use crate::services::text_utils::{scenes_label, slugify};
use serde::{Deserialize, Serialize};

const SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayPart {
    Link { href: String, label: String },
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalData {
    pub id: String,
    pub value: String,
}

/// One labeled value block in the performer details panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailItem {
    pub id: String,
    pub title: String,
    pub value: Vec<DisplayPart>,
    pub additional_data: AdditionalData,
    pub collapsed: bool,
    pub wide: bool,
}

impl DetailItem {
    /// The value with links replaced by their labels.
    pub fn plain_value(&self) -> String {
        self.value
            .iter()
            .map(|part| match part {
                DisplayPart::Link { label, .. } => label.as_str(),
                DisplayPart::Text { text } => text.as_str(),
            })
            .collect()
    }
}

/// Detail items for the "appears most with" section.
pub fn partner_items(
    stats: &PartnerStats,
    featured: &Performer,
    links: &dyn SceneLinkBuilder,
    collapsed: bool,
) -> Vec<DetailItem> {
    let value_for = |result: &RankedResult<Performer>| {
        link_list(&result.leaders, 0, |partner: &Performer| {
            links.partner_scenes(featured, partner)
        })
    };

    match stats {
        PartnerStats::Overall(None) => Vec::new(),
        PartnerStats::Overall(Some(result)) => vec![DetailItem {
            id: "appears-most-with".to_string(),
            title: "Appears Most With".to_string(),
            value: value_for(result),
            additional_data: scene_count("scene-count", result.max_count),
            collapsed,
            wide: true,
        }],
        PartnerStats::ByCategory(results) => results
            .iter()
            .map(|category| {
                let label = category.category.label();
                DetailItem {
                    id: format!("appears-most-with-{}", slugify(label)),
                    title: format!("Appears Most With ({})", label),
                    value: value_for(&category.result),
                    additional_data: scene_count("scene-count", category.result.max_count),
                    collapsed,
                    wide: true,
                }
            })
            .collect(),
    }
}

/// Detail items for "top studio" and, when present, "top network".
pub fn studio_items(
    stats: &StudioStats,
    featured: &Performer,
    links: &dyn SceneLinkBuilder,
    collapsed: bool,
) -> Vec<DetailItem> {
    let mut items = Vec::new();

    if let (Some(primary), Some((shown, hidden))) = (&stats.primary, stats.primary_tops()) {
        items.push(DetailItem {
            id: "top-studio".to_string(),
            title: "Top Studio".to_string(),
            value: link_list(shown, hidden, |studio: &Studio| {
                links.studio_scenes(featured, studio)
            }),
            additional_data: scene_count("top-studio-scenes", primary.max_count),
            collapsed,
            wide: true,
        });
    }

    if let (Some(network), Some((shown, hidden))) = (&stats.network, stats.network_tops()) {
        items.push(DetailItem {
            id: "top-network".to_string(),
            title: "Top Network".to_string(),
            value: link_list(shown, hidden, |net: &StudioRef| {
                links.studio_scenes(featured, net)
            }),
            additional_data: scene_count("top-network-scenes", network.max_count),
            collapsed,
            wide: true,
        });
    }

    items
}

fn scene_count(id: &str, count: u32) -> AdditionalData {
    AdditionalData {
        id: id.to_string(),
        value: scenes_label(count),
    }
}

/// Links separated by " / ", followed by " and N more" when `hidden > 0`.
fn link_list<T, F>(entries: &[TallyEntry<T>], hidden: usize, href: F) -> Vec<DisplayPart>
where
    T: Counterpart,
    F: Fn(&T) -> String,
{
    let mut parts = Vec::with_capacity(entries.len() * 2);

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            parts.push(DisplayPart::Text {
                text: SEPARATOR.to_string(),
            });
        }
        parts.push(DisplayPart::Link {
            href: href(&entry.counterpart),
            label: entry.counterpart.name().to_string(),
        });
    }

    if hidden > 0 {
        parts.push(DisplayPart::Text {
            text: format!(" and {} more", hidden),
        });
    }

    parts
}
