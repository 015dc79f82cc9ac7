//! Active filter state, one controller per collection.
//!
//! A controller starts at [`Tag::All`] and moves to whatever tag is selected,
//! unconditionally. Re-selecting the current tag is not optimized away: the
//! caller re-renders on every selection.

use crate::types::Collection;
use std::fmt;
use tracing::debug;

/// Literal that selects every item.
pub const ALL_TAG: &str = "All";

/// The active filter of one collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    All,
    Named(String),
}

impl Tag {
    /// Parse a filter button value; `"All"` is the pass-through filter.
    pub fn parse(value: &str) -> Self {
        if value == ALL_TAG {
            Tag::All
        } else {
            Tag::Named(value.to_string())
        }
    }

    pub fn named(value: impl Into<String>) -> Self {
        Tag::Named(value.into())
    }

    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Tag::All => true,
            Tag::Named(name) => name == tag,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tag::All => ALL_TAG,
            Tag::Named(name) => name,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct FilterController {
    collection: Collection,
    active: Tag,
    vocabulary: Vec<String>,
}

impl FilterController {
    /// A controller at `All`. `vocabulary` is the collection's distinct tags
    /// in display order.
    pub fn new(collection: Collection, vocabulary: Vec<String>) -> Self {
        Self {
            collection,
            active: Tag::All,
            vocabulary,
        }
    }

    pub fn collection(&self) -> Collection {
        self.collection
    }

    pub fn active(&self) -> &Tag {
        &self.active
    }

    pub fn select(&mut self, tag: Tag) -> &Tag {
        debug!(collection = %self.collection, from = %self.active, to = %tag, "filter selected");
        self.active = tag;
        &self.active
    }

    /// Filter buttons: `All` followed by the vocabulary, with the active one
    /// flagged.
    pub fn buttons(&self) -> Vec<(Tag, bool)> {
        std::iter::once(Tag::All)
            .chain(self.vocabulary.iter().map(|t| Tag::Named(t.clone())))
            .map(|tag| {
                let active = tag == self.active;
                (tag, active)
            })
            .collect()
    }
}
