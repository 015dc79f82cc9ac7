//! Grid rendering: collection + active tag → card descriptors.
//!
//! Rendering is a pure projection. Filtering is stable (input relative
//! order is kept, nothing is re-sorted) and the output is 1:1 with the
//! filtered items. An empty result becomes [`GridView::Empty`] so the caller
//! always has something visible to show.

use crate::config::CardsConfig;
use crate::filter::Tag;
use crate::types::{Certification, Collection, ContentItem, Project};

/// Everything a grid card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDescriptor {
    pub id: String,
    pub title: String,
    pub tag: String,
    /// Thumbnail image.
    pub image: String,
    /// Issuer for certifications.
    pub subtitle: Option<String>,
    /// Short description (projects) or description excerpt (certifications).
    pub summary: String,
    /// Leading tech badges, projects only.
    pub badges: Vec<String>,
    /// Badges hidden behind a `+N` marker.
    pub hidden_badges: usize,
}

/// Per-type card construction.
pub trait Card: ContentItem {
    fn card(&self, cards: &CardsConfig) -> CardDescriptor;
}

impl Card for Project {
    fn card(&self, cards: &CardsConfig) -> CardDescriptor {
        let shown = self.tech.len().min(cards.tech_badge_limit);
        CardDescriptor {
            id: self.id.clone(),
            title: self.title.clone(),
            tag: self.category.clone(),
            image: self.image.clone(),
            subtitle: None,
            summary: self.short_desc.clone(),
            badges: self.tech[..shown].to_vec(),
            hidden_badges: self.tech.len() - shown,
        }
    }
}

impl Card for Certification {
    fn card(&self, cards: &CardsConfig) -> CardDescriptor {
        CardDescriptor {
            id: self.id.clone(),
            title: self.name.clone(),
            tag: self.kind.clone(),
            image: self.image.clone(),
            subtitle: Some(self.issuer.clone()),
            summary: excerpt(&self.description, cards.excerpt_chars),
            badges: Vec::new(),
            hidden_badges: 0,
        }
    }
}

/// First `max` characters of `text` followed by `...`.
///
/// The ellipsis is always appended, matching the card layout which clamps
/// the excerpt to three lines anyway.
pub fn excerpt(text: &str, max: usize) -> String {
    let cut = text
        .char_indices()
        .nth(max)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    format!("{}...", &text[..cut])
}

/// Filter `collection` by `active` and project each survivor to a card.
pub fn render<T: Card>(collection: &[T], active: &Tag, cards: &CardsConfig) -> Vec<CardDescriptor> {
    collection
        .iter()
        .filter(|item| active.matches(item.tag()))
        .map(|item| item.card(cards))
        .collect()
}

/// What a grid container displays.
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Cards(Vec<CardDescriptor>),
    /// No item matched; show the collection's placeholder message.
    Empty { message: &'static str },
}

impl GridView {
    pub fn from_cards(collection: Collection, cards: Vec<CardDescriptor>) -> Self {
        if cards.is_empty() {
            GridView::Empty {
                message: collection.empty_message(),
            }
        } else {
            GridView::Cards(cards)
        }
    }

    pub fn cards(&self) -> &[CardDescriptor] {
        match self {
            GridView::Cards(cards) => cards,
            GridView::Empty { .. } => &[],
        }
    }

    /// Placeholder text, when nothing matched.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GridView::Cards(_) => None,
            GridView::Empty { message } => Some(*message),
        }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.cards().iter().map(|c| c.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn ids(cards: &[CardDescriptor]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn filter_keeps_matching_in_order() {
        let portfolio = vec![
            project("a", "Web"),
            project("b", "ML"),
            project("c", "Web"),
        ];
        let cards = render(&portfolio, &Tag::named("Web"), &CardsConfig::default());
        assert_eq!(ids(&cards), vec!["a", "c"]);
    }

    #[test]
    fn all_passes_everything_through() {
        let portfolio = vec![
            project("c", "Web"),
            project("a", "ML"),
            project("b", "Data"),
        ];
        let cards = render(&portfolio, &Tag::All, &CardsConfig::default());
        assert_eq!(ids(&cards), vec!["c", "a", "b"]);
    }

    #[test]
    fn only_exact_tag_matches() {
        let portfolio = vec![project("a", "Web"), project("b", "web"), project("c", "Web ")];
        for tag in ["Web", "web", "Data", "All Web"] {
            let cards = render(&portfolio, &Tag::named(tag), &CardsConfig::default());
            assert!(cards.iter().all(|c| c.tag == tag), "tag {tag}");
        }
    }

    #[test]
    fn no_match_becomes_empty_view() {
        let portfolio = vec![project("a", "Web")];
        let cards = render(&portfolio, &Tag::named("Games"), &CardsConfig::default());
        let view = GridView::from_cards(Collection::Portfolio, cards);
        assert_eq!(
            view,
            GridView::Empty {
                message: "No projects found in this category."
            }
        );
        assert!(view.ids().is_empty());
    }

    #[test]
    fn project_card_truncates_badges() {
        let mut p = project("a", "Web");
        p.tech = vec!["Rust".into(), "Axum".into(), "SQLite".into(), "HTMX".into(), "Tailwind".into()];
        let card = p.card(&CardsConfig::default());
        assert_eq!(card.badges, vec!["Rust", "Axum", "SQLite"]);
        assert_eq!(card.hidden_badges, 2);
        assert_eq!(card.subtitle, None);
    }

    #[test]
    fn project_card_with_few_badges() {
        let mut p = project("a", "Web");
        p.tech = vec!["Rust".into()];
        let card = p.card(&CardsConfig::default());
        assert_eq!(card.badges, vec!["Rust"]);
        assert_eq!(card.hidden_badges, 0);
    }

    #[test]
    fn cert_card_has_issuer_and_excerpt() {
        let mut c = cert("c1", "Cloud", "c1-full.png");
        c.description = "x".repeat(200);
        let card = c.card(&CardsConfig::default());
        assert_eq!(card.subtitle.as_deref(), Some("Issuer"));
        assert_eq!(card.summary.len(), 123);
        assert!(card.summary.ends_with("..."));
    }

    #[test]
    fn excerpt_respects_char_boundaries() {
        assert_eq!(excerpt("héllo wörld", 4), "héll...");
        assert_eq!(excerpt("short", 120), "short...");
        assert_eq!(excerpt("", 10), "...");
    }
}
