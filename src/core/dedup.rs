use crate::models::Cat;
use std::collections::HashSet;

/// Request-scoped set of already-gathered cat identifiers
///
/// Prevents the same cat surfacing twice across fallback tiers. Grows
/// monotonically over a single request and is dropped with it; never
/// shared between requests.
#[derive(Debug, Default)]
pub struct SeenSet {
    ids: HashSet<String>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Idempotent; returns true if the id was not seen before
    pub fn insert(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn extend<'a, I>(&mut self, cats: I)
    where
        I: IntoIterator<Item = &'a Cat>,
    {
        for cat in cats {
            self.ids.insert(cat.id.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
