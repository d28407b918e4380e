use std::collections::HashSet;

/// Links already merged into a crawl result
///
/// Owned by a single crawl invocation; the empty string is never a key.
#[derive(Debug, Default)]
pub struct DedupIndex {
    seen: HashSet<String>,
}

impl DedupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, link: &str) -> bool {
        self.seen.contains(link)
    }

    /// Records a link; returns `true` only if it was new and non-empty
    pub fn insert(&mut self, link: &str) -> bool {
        if link.is_empty() || self.seen.contains(link) {
            return false;
        }
        self.seen.insert(link.to_string())
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
