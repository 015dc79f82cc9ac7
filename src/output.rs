//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Every entity leads with its positional index and title; ids, tags and
//! gallery details follow as indented context lines. This keeps `check`
//! output readable as a content inventory while still letting users trace
//! each card back to its JSON record.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! About
//!     Ada Rivera: Data Engineer & Web Developer
//!     Skills: Python, Rust, SQL
//!
//! Portfolio (2 projects)
//! 001 Atlas Dashboard [Web]
//!     Id: atlas
//!     Gallery: 3 images, carousel
//! 002 Review Sentiment [Machine Learning]
//!     Id: sentiment
//!     Gallery: 1 image
//! Filters: All | Web | Machine Learning
//!
//! Certifications (1 certification)
//! 001 Professional Data Engineer [Data]
//!     Id: gcp-de
//!     Issuer: Google Cloud
//! Filters: All | Data
//!
//! Socials
//!     Email → mailto:ada@example.com
//!     Skipped: mastodon
//! ```
//!
//! ## Replay
//!
//! ```text
//! [    0.000s] portfolio: Web → atlas, folio-site
//! [    0.000s] open portfolio/atlas (carousel)
//! [    4.000s] slide 1
//! [    4.100s] close atlas
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::controller::Update;
use crate::filter::FilterController;
use crate::store::DataStore;
use crate::types::{Collection, ContentItem, Platform};
use std::time::Duration;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an item header: positional index + title + tag.
///
/// ```text
/// 001 Atlas Dashboard [Web]
/// ```
fn item_header(index: usize, title: &str, tag: &str) -> String {
    format!("{} {} [{}]", format_index(index), title, tag)
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn format_filters(filter: &FilterController) -> String {
    let tags: Vec<String> = filter
        .buttons()
        .into_iter()
        .map(|(tag, _)| tag.to_string())
        .collect();
    format!("Filters: {}", tags.join(" | "))
}

/// Format a clock reading as seconds with millisecond precision.
fn timestamp(at: Duration) -> String {
    format!("[{:>9.3}s]", at.as_secs_f64())
}

// ============================================================================
// check: content inventory
// ============================================================================

/// Format the loaded content as an inventory.
pub fn format_inventory(store: &DataStore) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("About".to_string());
    match &store.about {
        Some(about) => {
            lines.push(format!("{}{}: {}", indent(1), about.name, about.headline));
            if !about.skills.is_empty() {
                lines.push(format!("{}Skills: {}", indent(1), about.skills.join(", ")));
            }
            if !about.short_bio.is_empty() {
                lines.push(format!(
                    "{}Bio: {}",
                    indent(1),
                    truncate_desc(&about.short_bio, 60)
                ));
            }
        }
        None => lines.push(format!("{}(not loaded)", indent(1))),
    }

    lines.push(String::new());
    lines.push(format!(
        "Portfolio ({})",
        plural(store.portfolio.len(), "project", "projects")
    ));
    for (i, project) in store.portfolio.iter().enumerate() {
        lines.push(item_header(i + 1, project.title(), project.tag()));
        lines.push(format!("{}Id: {}", indent(1), project.id));
        let gallery = match project.gallery.len() {
            0 => "none".to_string(),
            1 => "1 image".to_string(),
            n => format!("{n} images, carousel"),
        };
        lines.push(format!("{}Gallery: {}", indent(1), gallery));
    }
    lines.push(format_filters(&FilterController::new(
        Collection::Portfolio,
        store.tags_of(Collection::Portfolio),
    )));

    lines.push(String::new());
    lines.push(format!(
        "Certifications ({})",
        plural(store.certs.len(), "certification", "certifications")
    ));
    for (i, cert) in store.certs.iter().enumerate() {
        lines.push(item_header(i + 1, cert.title(), cert.tag()));
        lines.push(format!("{}Id: {}", indent(1), cert.id));
        lines.push(format!("{}Issuer: {}", indent(1), cert.issuer));
    }
    lines.push(format_filters(&FilterController::new(
        Collection::Certs,
        store.tags_of(Collection::Certs),
    )));

    lines.push(String::new());
    lines.push("Socials".to_string());
    for link in store.social_links() {
        lines.push(format!(
            "{}{} \u{2192} {}",
            indent(1),
            link.platform.label(),
            link.href
        ));
    }
    let skipped: Vec<&str> = store
        .socials
        .keys()
        .filter(|key| Platform::from_key(key).is_none())
        .collect();
    if !skipped.is_empty() {
        lines.push(format!("{}Skipped: {}", indent(1), skipped.join(", ")));
    }

    lines
}

/// Print the content inventory to stdout.
pub fn print_inventory(store: &DataStore) {
    for line in format_inventory(store) {
        println!("{}", line);
    }
}

// ============================================================================
// replay: controller updates
// ============================================================================

/// Format one controller update. `now` stamps updates that carry no time of
/// their own.
pub fn format_update(update: &Update, now: Duration) -> String {
    match update {
        Update::GridRendered {
            collection,
            tag,
            ids,
        } => {
            let shown = if ids.is_empty() {
                collection.empty_message().to_string()
            } else {
                ids.join(", ")
            };
            format!("{} {}: {} \u{2192} {}", timestamp(now), collection, tag, shown)
        }
        Update::ModalOpened {
            collection,
            id,
            carousel,
        } => {
            let media = if *carousel { " (carousel)" } else { "" };
            format!("{} open {}/{}{}", timestamp(now), collection, id, media)
        }
        Update::ModalClosed { id } => format!("{} close {}", timestamp(now), id),
        Update::SlideChanged { index, at } => format!("{} slide {}", timestamp(*at), index),
        Update::Ignored(reason) => format!("{} ignored: {}", timestamp(now), reason),
    }
}

/// Print updates to stdout.
pub fn print_updates(updates: &[Update], now: Duration) {
    for update in updates {
        println!("{}", format_update(update, now));
    }
}

// ============================================================================
// Tests
// ============================================================================
