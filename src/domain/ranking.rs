use super::scene::{Performer, Studio, StudioRef};
use serde::Serialize;

/// Anything that can be tallied against the featured performer.
///
/// Grouping is always by `id`. `name` is only used to order tied leaders.
pub trait Counterpart {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl Counterpart for Performer {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Counterpart for Studio {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Counterpart for StudioRef {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyEntry<T> {
    pub counterpart: T,
    pub count: u32,
}

/// Outcome of one ranking pass.
///
/// Every entry in `leaders` has `count == max_count`. An empty result has no leaders,
/// a `max_count` of zero and never satisfies the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedResult<T> {
    pub leaders: Vec<TallyEntry<T>>,
    pub max_count: u32,
    pub satisfies_threshold: bool,
}

impl<T> RankedResult<T> {
    pub fn empty() -> Self {
        Self {
            leaders: Vec::new(),
            max_count: 0,
            satisfies_threshold: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.leaders.is_empty()
    }

    /// Consumes the result, keeping it only if it cleared its threshold.
    pub fn into_satisfying(self) -> Option<Self> {
        self.satisfies_threshold.then_some(self)
    }

    /// Leaders shown under a display cap, plus how many tied leaders were left out.
    pub fn capped(&self, maximum: usize) -> (&[TallyEntry<T>], usize) {
        let shown = self.leaders.len().min(maximum);
        (&self.leaders[..shown], self.leaders.len() - shown)
    }
}
