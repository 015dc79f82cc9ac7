//! # Folio
//!
//! The interaction logic of a single-page personal portfolio: a hero and
//! about section, a filterable project grid, a filterable certification grid,
//! a detail modal with an image carousel, and a footer of social links.
//!
//! Content lives in four JSON files under a data directory. The page state
//! is held by [`controller::App`] and driven entirely by [`controller::Command`]s,
//! so the same logic serves a static build, a scripted replay and the tests.
//!
//! # Architecture: Load → Dispatch → Render
//!
//! ```text
//! 1. Load      data/*.json  →  DataStore       (one pass, stop at first failure)
//! 2. Dispatch  Command      →  App state       (filters, grids, modal, timers)
//! 3. Render    App state    →  dist/index.html (Maud templates)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | Content records (`About`, `Project`, `Certification`) and social platforms |
//! | [`store`] | Loads the four collections; reports the first load failure |
//! | [`filter`] | Active tag per collection, `All` included |
//! | [`grid`] | Collection + tag → card descriptors, or a placeholder message |
//! | [`modal`] | Detail view for one item; owns at most one carousel |
//! | [`carousel`] | Slide index, track offset, bullets and the auto-advance timer |
//! | [`timer`] | `Scheduler` trait and the deterministic `VirtualClock` |
//! | [`controller`] | `App`: command dispatch over all of the above |
//! | [`script`] | Line-based session scripts parsed into commands |
//! | [`render`] | HTML output of the page state using Maud |
//! | [`config`] | `config.toml` loading, validation and stock defaults |
//! | [`output`] | CLI output formatting for `check` and `replay` |
//!
//! # Design Decisions
//!
//! ## Virtual Time
//!
//! Carousel timers are registered with a [`timer::Scheduler`] and only fire
//! when time is advanced explicitly. Timer handles are owned by the carousel
//! that started them, and closing or replacing a modal always clears the
//! handle first, so at most one interval is ever live.
//!
//! ## One Modal
//!
//! Opening an item while another modal is showing closes the first one
//! (stopping its carousel) before the new one opens.
//!
//! ## Bullet Clicks Keep The Timer
//!
//! Selecting a slide does not restart the auto-advance interval, so a tick
//! that was already due moves past the clicked slide. Set
//! `carousel.reset_on_select = true` to restart the interval on every click.

pub mod carousel;
pub mod config;
pub mod controller;
pub mod filter;
pub mod grid;
pub mod modal;
pub mod output;
pub mod render;
pub mod script;
pub mod store;
pub mod timer;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
