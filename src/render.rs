//! HTML rendering of the page state.
//!
//! Turns the controller's state (grids, filter buttons, open modal) into a
//! single `index.html`. Uses [maud](https://maud.lambda.xyz/) for
//! compile-time templates, so every interpolated value is escaped.
//!
//! ## Page Layout
//!
//! ```text
//! header.hero        name, headline, short bio
//! section#about      long bio, skill badges
//! section#portfolio  filter buttons + project grid
//! section#certs      filter buttons + certification grid
//! div.modal          only when a modal is open
//! footer             social links
//! ```
//!
//! The stylesheet is embedded at compile time from `static/style.css`.

use crate::carousel::Carousel;
use crate::controller::App;
use crate::filter::FilterController;
use crate::grid::{CardDescriptor, GridView};
use crate::modal::{Media, ModalView};
use crate::timer::Scheduler;
use crate::types::{About, Collection, SocialLink};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS: &str = include_str!("../static/style.css");

/// Write `index.html` for the current state into `output_dir`.
pub fn build<S: Scheduler>(
    app: &App<S>,
    banner: Option<&str>,
    output_dir: &Path,
) -> Result<PathBuf, BuildError> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join("index.html");
    fs::write(&path, render_page(app, banner).into_string())?;
    info!(path = %path.display(), "page written");
    Ok(path)
}

/// Render the whole document.
pub fn render_page<S: Scheduler>(app: &App<S>, banner: Option<&str>) -> Markup {
    let store = app.store();
    let modal = app.modal().view();
    let site = &app.config().site;

    html! {
        (DOCTYPE)
        html lang=(site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (site.title) }
                style { (PreEscaped(CSS)) }
            }
            body class=[modal.is_some().then_some("modal-open")] {
                @if let Some(message) = banner {
                    (error_banner(message))
                }
                @if let Some(about) = &store.about {
                    (hero(about))
                    (about_section(about))
                }
                (collection_section(Collection::Portfolio, "Portfolio", app.filter(Collection::Portfolio), app.grid(Collection::Portfolio)))
                (collection_section(Collection::Certs, "Certifications", app.filter(Collection::Certs), app.grid(Collection::Certs)))
                @if let Some(view) = modal {
                    (render_modal(view))
                }
                (footer(store.about.as_ref().map(|a| a.name.as_str()), &store.social_links()))
            }
        }
    }
}

fn error_banner(message: &str) -> Markup {
    html! {
        div.error-banner role="alert" {
            p { (message) }
        }
    }
}

fn hero(about: &About) -> Markup {
    html! {
        header.hero #hero {
            h1 { (about.name) }
            p.headline { (about.headline) }
            p.short-bio { (about.short_bio) }
        }
    }
}

fn about_section(about: &About) -> Markup {
    html! {
        section #about {
            h2 { "About Me" }
            p.long-bio { (about.long_bio) }
            div.skills {
                @for skill in &about.skills {
                    span.skill { (skill) }
                }
            }
        }
    }
}

fn collection_section(
    collection: Collection,
    heading: &str,
    filter: &FilterController,
    grid: &GridView,
) -> Markup {
    html! {
        section id=(collection.as_str()) {
            h2 { (heading) }
            (render_filters(filter))
            (render_grid(collection, grid))
        }
    }
}

/// Filter buttons with the active one marked.
pub fn render_filters(filter: &FilterController) -> Markup {
    html! {
        div.filters data-collection=(filter.collection().as_str()) {
            @for (tag, active) in filter.buttons() {
                button.filter-btn.active[active] type="button" data-tag=(tag.as_str()) {
                    (tag.as_str())
                }
            }
        }
    }
}

/// A grid container: cards, or the placeholder when nothing matched.
pub fn render_grid(collection: Collection, grid: &GridView) -> Markup {
    html! {
        div.grid data-collection=(collection.as_str()) {
            @if let Some(message) = grid.message() {
                div.empty { p { (message) } }
            }
            @for card in grid.cards() {
                (render_card(collection, card))
            }
        }
    }
}

pub fn render_card(collection: Collection, card: &CardDescriptor) -> Markup {
    let is_cert = collection == Collection::Certs;
    html! {
        article.card.cert[is_cert] data-id=(card.id) {
            img src=(card.image) alt=(card.title) loading="lazy";
            div.card-body {
                span.tag { (card.tag) }
                h3 { (card.title) }
                @if let Some(subtitle) = &card.subtitle {
                    p.subtitle { (subtitle) }
                }
                p.summary { (card.summary) }
                @if !card.badges.is_empty() {
                    div.badges {
                        @for badge in &card.badges {
                            span.badge { (badge) }
                        }
                        @if card.hidden_badges > 0 {
                            span.badge { "+" (card.hidden_badges) }
                        }
                    }
                }
                button.details type="button" {
                    @if is_cert { "View Certificate" } @else { "View Details" }
                }
            }
        }
    }
}

/// The open modal.
pub fn render_modal(view: &ModalView) -> Markup {
    html! {
        div.modal #modal role="dialog" aria-modal="true" data-id=(view.id) {
            div.modal-panel {
                button.modal-close type="button" aria-label="Close" { "×" }
                div.modal-media {
                    @match &view.media {
                        Media::None => {}
                        Media::Static(src) => {
                            img src=(src) alt=(view.title);
                        }
                        Media::Carousel(carousel) => {
                            (render_carousel(carousel, &view.title))
                        }
                    }
                }
                h2 { (view.title) }
                @if let Some(subtitle) = &view.subtitle {
                    p.subtitle { (subtitle) }
                }
                p.description { (view.description) }
                @if !view.badges.is_empty() {
                    div.badges {
                        @for badge in &view.badges {
                            span.badge { (badge) }
                        }
                    }
                }
                a.modal-link href=(view.link) target="_blank" rel="noopener noreferrer" {
                    @if view.collection == Collection::Certs { "Verify Certificate" } @else { "View Project" }
                }
            }
        }
    }
}

/// Slide track positioned at the current slide, plus one bullet per slide.
pub fn render_carousel(carousel: &Carousel, alt: &str) -> Markup {
    let track_style = format!(
        "width:{}%;transform:translateX({}%)",
        carousel.track_width_percent(),
        carousel.track_offset_percent()
    );
    html! {
        div.carousel data-index=(carousel.current_index()) {
            div.carousel-track style=(track_style) {
                @for slide in carousel.slides() {
                    div.carousel-slide {
                        img src=(slide) alt=(alt);
                    }
                }
            }
            div.carousel-bullets {
                @for (i, active) in carousel.bullets().into_iter().enumerate() {
                    button.bullet.active[active] type="button" data-slide=(i) aria-label={ "Slide " (i + 1) } {}
                }
            }
        }
    }
}

fn footer(name: Option<&str>, links: &[SocialLink]) -> Markup {
    html! {
        footer {
            div.socials {
                @for link in links {
                    a href=(link.href) target="_blank" rel="noopener noreferrer" title=(link.platform.label()) {
                        (link.platform.label())
                    }
                }
            }
            @if let Some(name) = name {
                p.copyright { "© " (name) }
            }
        }
    }
}
