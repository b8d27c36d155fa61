use affinity::services::ranking::rank;
use affinity::services::text_utils::NameCollator;
use affinity::{
    compute_partner_stats, compute_studio_stats, Gender, PartnerConfig, PartnerStats, Performer,
    Scene, Studio, StudioCatalog, StudioConfig, StudioRef,
};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;

const FEATURED: &str = "p0";
const NAMES: [&str; 6] = ["ada", "Ada", "bo", "Émile", "emile", "Zed"];

fn performer(index: usize) -> Performer {
    Performer {
        id: format!("p{}", index),
        name: if index == 0 {
            "Featured".to_string()
        } else {
            NAMES[index % NAMES.len()].to_string()
        },
        gender: match index % 3 {
            0 => None,
            1 => Some(Gender::Female),
            _ => Some(Gender::Male),
        },
    }
}

fn studio(index: usize) -> Studio {
    Studio {
        id: format!("s{}", index),
        name: NAMES[index % NAMES.len()].to_string(),
        parent_studio: (index % 2 == 1).then(|| StudioRef {
            id: "net".to_string(),
            name: "Network".to_string(),
        }),
    }
}

fn arb_scene() -> impl Strategy<Value = Scene> {
    (
        prop::collection::vec(0usize..8, 0..5),
        prop::option::of(0usize..5),
    )
        .prop_map(|(performers, studio_index)| {
            let mut performers: Vec<_> = performers.into_iter().map(performer).collect();
            performers.push(performer(0));
            Scene {
                id: "scene".to_string(),
                title: None,
                performers,
                studio: studio_index.map(studio),
            }
        })
}

fn arb_scenes() -> impl Strategy<Value = Vec<Scene>> {
    prop::collection::vec(arb_scene(), 0..12)
}

fn catalog() -> StudioCatalog {
    (0..4).map(studio).collect()
}

fn partner_config(minimum_appearances: u32) -> PartnerConfig {
    PartnerConfig {
        minimum_appearances,
        partition_by_category: false,
    }
}

fn studio_config(minimum_appearances: u32, maximum_tops: u32) -> StudioConfig {
    StudioConfig {
        minimum_appearances,
        maximum_tops,
        include_network: true,
    }
}

proptest! {
    #[test]
    fn raising_threshold_never_adds_results(scenes in arb_scenes(), low in 1u32..4, bump in 0u32..4) {
        let high = low + bump;
        let at_low = compute_partner_stats(&scenes, FEATURED, &partner_config(low)).unwrap();
        let at_high = compute_partner_stats(&scenes, FEATURED, &partner_config(high)).unwrap();

        if !at_high.is_empty() {
            prop_assert!(!at_low.is_empty());
        }

        let studios_low = compute_studio_stats(&scenes, FEATURED, &catalog(), &studio_config(low, 3)).unwrap();
        let studios_high = compute_studio_stats(&scenes, FEATURED, &catalog(), &studio_config(high, 3)).unwrap();
        if studios_high.primary.is_some() {
            prop_assert!(studios_low.primary.is_some());
        }
    }

    #[test]
    fn leaders_are_exactly_the_tied_maximum(ids in prop::collection::vec(0usize..6, 1..30)) {
        let observations: Vec<_> = ids.iter().map(|&i| studio(i)).collect();
        let result = rank(observations, 1);

        let mut counts: HashMap<usize, u32> = HashMap::new();
        for &i in &ids {
            *counts.entry(i).or_default() += 1;
        }
        let max = *counts.values().max().unwrap();
        let expected = counts.values().filter(|&&c| c == max).count();

        prop_assert_eq!(result.max_count, max);
        prop_assert_eq!(result.leaders.len(), expected);
        prop_assert!(result.leaders.iter().all(|entry| entry.count == max));
        for pair in result.leaders.windows(2) {
            prop_assert_ne!(
                NameCollator::compare(&pair[0].counterpart.name, &pair[1].counterpart.name),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn featured_performer_is_never_a_partner(scenes in arb_scenes(), partitioned in any::<bool>()) {
        let config = PartnerConfig { minimum_appearances: 1, partition_by_category: partitioned };
        let stats = compute_partner_stats(&scenes, FEATURED, &config).unwrap();

        let leaders: Vec<_> = match &stats {
            PartnerStats::Overall(result) => result.iter().flat_map(|r| r.leaders.iter()).collect(),
            PartnerStats::ByCategory(results) => results.iter().flat_map(|r| r.result.leaders.iter()).collect(),
        };
        prop_assert!(leaders.iter().all(|entry| entry.counterpart.id != FEATURED));
    }

    #[test]
    fn aggregation_is_idempotent(scenes in arb_scenes(), minimum in 1u32..3) {
        let config = PartnerConfig { minimum_appearances: minimum, partition_by_category: true };
        prop_assert_eq!(
            compute_partner_stats(&scenes, FEATURED, &config).unwrap(),
            compute_partner_stats(&scenes, FEATURED, &config).unwrap()
        );
        prop_assert_eq!(
            compute_studio_stats(&scenes, FEATURED, &catalog(), &studio_config(minimum, 2)).unwrap(),
            compute_studio_stats(&scenes, FEATURED, &catalog(), &studio_config(minimum, 2)).unwrap()
        );
    }

    #[test]
    fn overflow_counts_hidden_leaders(scenes in arb_scenes(), maximum_tops in 1u32..4) {
        let stats = compute_studio_stats(&scenes, FEATURED, &catalog(), &studio_config(1, maximum_tops)).unwrap();

        if let (Some(primary), Some((shown, hidden))) = (&stats.primary, stats.primary_tops()) {
            let total = primary.leaders.len();
            let cap = maximum_tops as usize;
            prop_assert_eq!(shown.len(), total.min(cap));
            prop_assert_eq!(hidden, total.saturating_sub(cap));
        }
    }

    #[test]
    fn parented_studios_count_toward_their_network(scenes in arb_scenes()) {
        let stats = compute_studio_stats(&scenes, FEATURED, &catalog(), &studio_config(1, 3)).unwrap();

        if let Some(network) = &stats.network {
            // s1 and s3 roll up into "net"; they can never lead the network tally themselves
            prop_assert!(network.leaders.iter().all(|entry| entry.counterpart.id != "s1" && entry.counterpart.id != "s3"));
        }
    }
}
