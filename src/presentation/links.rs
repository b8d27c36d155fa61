use crate::domain::{Counterpart, Performer};
use urlencoding::encode;

/// Builds the "view these scenes" path behind each reported counterpart.
pub trait SceneLinkBuilder {
    /// The featured performer's scenes, filtered to those with the partner.
    fn partner_scenes(&self, featured: &Performer, partner: &Performer) -> String;
    /// Scenes of a studio (or network) featuring the performer.
    fn studio_scenes(&self, featured: &Performer, studio: &dyn Counterpart) -> String;
}

/// Stash-style relative paths with an encoded performer criterion.
#[derive(Debug, Clone, Copy, Default)]
pub struct StashLinks;

impl StashLinks {
    fn performer_item(performer: &Performer) -> String {
        format!(
            r#"("id":"{}","label":"{}")"#,
            performer.id,
            encode(&performer.name)
        )
    }

    fn performers_criterion(items: &[String], modifier: &str) -> String {
        format!(
            r#"c=("type":"performers","value":("items":%5B{}%5D,"excluded":%5B%5D),"modifier":"{}")"#,
            items.join(","),
            modifier
        )
    }
}

impl SceneLinkBuilder for StashLinks {
    fn partner_scenes(&self, featured: &Performer, partner: &Performer) -> String {
        let items = [Self::performer_item(partner)];
        format!(
            "/performers/{}/scenes?{}",
            featured.id,
            Self::performers_criterion(&items, "INCLUDES")
        )
    }

    fn studio_scenes(&self, featured: &Performer, studio: &dyn Counterpart) -> String {
        let items = [Self::performer_item(featured)];
        format!(
            "/studios/{}/scenes?{}",
            studio.id(),
            Self::performers_criterion(&items, "INCLUDES")
        )
    }
}
