use crate::domain::{Counterpart, RankedResult, TallyEntry};
use crate::services::text_utils::NameCollator;
use rustc_hash::FxHashMap;
use std::hash::Hash;
use tracing::trace;

/// Per-counterpart occurrence counter.
///
/// Entries live in an arena in order of first appearance; the map only points into it,
/// which keeps ranking stable run-to-run for counterparts that share a display name.
pub struct Tally<T> {
    index: FxHashMap<String, usize>,
    entries: Vec<TallyEntry<T>>,
}

impl<T: Counterpart> Tally<T> {
    pub fn new() -> Self {
        Self {
            index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }

    pub fn observe(&mut self, counterpart: T) {
        match self.index.get(counterpart.id()) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                trace!("First observation of {} ({})", counterpart.name(), counterpart.id());
                self.index
                    .insert(counterpart.id().to_string(), self.entries.len());
                self.entries.push(TallyEntry {
                    counterpart,
                    count: 1,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps every entry sharing the highest count, ordered by name.
    pub fn rank(self, minimum_appearances: u32) -> RankedResult<T> {
        let Some(max_count) = self.entries.iter().map(|entry| entry.count).max() else {
            return RankedResult::empty();
        };

        let mut leaders: Vec<_> = self
            .entries
            .into_iter()
            .filter(|entry| entry.count == max_count)
            .collect();
        leaders.sort_by(|a, b| NameCollator::compare(a.counterpart.name(), b.counterpart.name()));

        RankedResult {
            leaders,
            max_count,
            satisfies_threshold: max_count >= minimum_appearances,
        }
    }
}

impl<T: Counterpart> Default for Tally<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts each observation once and ranks the result.
pub fn rank<T, I>(observations: I, minimum_appearances: u32) -> RankedResult<T>
where
    T: Counterpart,
    I: IntoIterator<Item = T>,
{
    let mut tally = Tally::new();
    for counterpart in observations {
        tally.observe(counterpart);
    }
    tally.rank(minimum_appearances)
}

/// Splits observations by `classify` and ranks every group on its own.
/// Observations classified as `None` are dropped.
pub fn rank_by<T, K, I, F>(
    observations: I,
    minimum_appearances: u32,
    classify: F,
) -> FxHashMap<K, RankedResult<T>>
where
    T: Counterpart,
    K: Eq + Hash,
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Option<K>,
{
    let mut groups: FxHashMap<K, Tally<T>> = FxHashMap::default();
    for counterpart in observations {
        if let Some(key) = classify(&counterpart) {
            groups.entry(key).or_default().observe(counterpart);
        }
    }

    groups
        .into_iter()
        .map(|(key, tally)| (key, tally.rank(minimum_appearances)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StudioRef;

    fn s(id: &str, name: &str) -> StudioRef {
        StudioRef {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn leader_names(result: &RankedResult<StudioRef>) -> Vec<&str> {
        result
            .leaders
            .iter()
            .map(|entry| entry.counterpart.name.as_str())
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let result = rank(Vec::<StudioRef>::new(), 1);

        assert!(result.is_empty());
        assert!(!result.satisfies_threshold);
    }

    #[test]
    fn test_single_leader() {
        let result = rank(vec![s("1", "A"), s("2", "B"), s("1", "A")], 2);

        assert_eq!(leader_names(&result), vec!["A"]);
        assert_eq!(result.max_count, 2);
        assert!(result.satisfies_threshold);
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let result = rank(
            vec![s("3", "charlie"), s("1", "Bravo"), s("2", "alpha"), s("4", "Zulu")],
            1,
        );

        assert_eq!(leader_names(&result), vec!["alpha", "Bravo", "charlie", "Zulu"]);
        assert_eq!(result.max_count, 1);
    }

    #[test]
    fn test_groups_by_id_not_name() {
        let result = rank(vec![s("1", "Same"), s("2", "Same"), s("1", "Same")], 1);

        assert_eq!(result.leaders.len(), 1);
        assert_eq!(result.leaders[0].counterpart.id, "1");
        assert_eq!(result.max_count, 2);
    }

    #[test]
    fn test_shared_names_keep_first_appearance_order() {
        let result = rank(vec![s("2", "Same"), s("1", "Same")], 1);
        let ids: Vec<_> = result
            .leaders
            .iter()
            .map(|entry| entry.counterpart.id.as_str())
            .collect();

        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_below_threshold_still_reports_leaders() {
        let result = rank(vec![s("1", "A")], 2);

        assert_eq!(leader_names(&result), vec!["A"]);
        assert!(!result.satisfies_threshold);
    }

    #[test]
    fn test_rank_by_partitions_independently() {
        let observations = vec![s("1", "a1"), s("2", "b1"), s("1", "a1"), s("3", "b2")];
        let groups = rank_by(observations, 2, |studio| {
            studio.name.chars().next()
        });

        assert_eq!(groups.len(), 2);
        assert!(groups[&'a'].satisfies_threshold);
        assert!(!groups[&'b'].satisfies_threshold);
        assert_eq!(groups[&'b'].leaders.len(), 2);
    }

    #[test]
    fn test_rank_by_drops_unclassified() {
        let groups = rank_by(vec![s("1", "A"), s("2", "B")], 1, |studio| {
            (studio.id == "1").then_some(())
        });

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[&()].leaders[0].counterpart.id, "1");
    }
}
