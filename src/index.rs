//! Accumulator merging checksum and archive facts per identity key.

use std::collections::HashMap;

use crate::manifest::ArchEntry;

/// Entries discovered during one traversal, keyed by identity key.
///
/// The index lives only for a single summarization and is consumed by
/// [`ArtifactIndex::into_sorted`].
#[derive(Debug, Default)]
pub struct ArtifactIndex {
    entries: HashMap<String, ArchEntry>,
}

impl ArtifactIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry for `key`, registering an empty one first if needed.
    ///
    /// This is the only way entries are created, so a checksum and its
    /// archive converge on the same entry whichever is seen first.
    pub fn get_or_create(&mut self, key: &str) -> &mut ArchEntry {
        self.entries.entry(key.to_string()).or_default()
    }

    /// Returns the number of distinct identity keys seen.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattens the index into entries sorted by URL, ascending.
    ///
    /// Entries without a URL sort first. Ties are broken by identity key so
    /// the output never depends on hash map iteration order.
    pub fn into_sorted(self) -> Vec<ArchEntry> {
        let mut entries: Vec<(String, ArchEntry)> = self.entries.into_iter().collect();
        entries.sort_by(|(a_key, a), (b_key, b)| a.url.cmp(&b.url).then_with(|| a_key.cmp(b_key)));
        entries.into_iter().map(|(_, entry)| entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_reuses_entry() {
        let mut index = ArtifactIndex::new();
        index.get_or_create("go.linux-amd64.tar.gz").sha256 = "abc".to_string();
        index.get_or_create("go.linux-amd64.tar.gz").url = "https://x/go.linux-amd64.tar.gz".into();

        assert_eq!(index.len(), 1);
        let entries = index.into_sorted();
        assert_eq!(entries[0].sha256, "abc");
        assert_eq!(entries[0].url, "https://x/go.linux-amd64.tar.gz");
    }

    #[test]
    fn test_into_sorted_orders_by_url() {
        let mut index = ArtifactIndex::new();
        index.get_or_create("b").url = "https://x/b.zip".to_string();
        index.get_or_create("a").url = "https://x/a.zip".to_string();
        index.get_or_create("orphan").sha256 = "123".to_string();

        let urls: Vec<_> = index.into_sorted().into_iter().map(|e| e.url).collect();
        assert_eq!(urls, vec!["", "https://x/a.zip", "https://x/b.zip"]);
    }

    #[test]
    fn test_into_sorted_breaks_ties_by_key() {
        let mut index = ArtifactIndex::new();
        index.get_or_create("z.tar.gz").sha256 = "zz".to_string();
        index.get_or_create("a.tar.gz").sha256 = "aa".to_string();
        index.get_or_create("m.tar.gz").sha256 = "mm".to_string();

        let digests: Vec<_> = index.into_sorted().into_iter().map(|e| e.sha256).collect();
        assert_eq!(digests, vec!["aa", "mm", "zz"]);
    }

    #[test]
    fn test_empty_index() {
        let index = ArtifactIndex::new();
        assert!(index.is_empty());
        assert!(index.into_sorted().is_empty());
    }
}
