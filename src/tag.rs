//! Positional tags and order-preserving deduplication.

use serde::{Deserialize, Serialize};

/// A Nostr tag: a sequence of positional string fields.
///
/// Field 0 is the tag kind (`"p"`, `"e"`, `"a"`, `"t"`), field 1 the primary
/// value (pubkey, event id, coordinate, hashtag word). Further fields are
/// kind-specific (relay hint, role marker).
pub type Tag = Vec<String>;

/// An ordered tag collection that rejects duplicates keyed on the first two
/// fields.
///
/// Seeded from the caller's existing tags (kept as-is, whatever their shape)
/// and mutated during one tagging operation. Insertion order is preserved;
/// the first tag with a given `(field0, field1)` pair wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `tag` unless a tag with the same first two fields is already
    /// present. Returns whether the tag was inserted.
    pub fn insert_if_new(&mut self, tag: Tag) -> bool {
        let key = (tag.first(), tag.get(1));
        if self.tags.iter().any(|t| (t.first(), t.get(1)) == key) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn into_inner(self) -> Vec<Tag> {
        self.tags
    }
}

impl From<Vec<Tag>> for TagSet {
    fn from(tags: Vec<Tag>) -> Self {
        Self { tags }
    }
}

impl IntoIterator for TagSet {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}
