//! Application state and command dispatch.
//!
//! [`App`] owns everything the page mutates: the loaded data, one filter
//! controller and one rendered grid per collection, the modal presenter and
//! the scheduler driving carousel timers. UI events arrive as [`Command`]s
//! through [`App::dispatch`], which applies them in order and reports what
//! changed as a list of [`Update`]s.

use crate::config::SiteConfig;
use crate::filter::{FilterController, Tag};
use crate::grid::{self, GridView};
use crate::modal::ModalPresenter;
use crate::store::DataStore;
use crate::timer::{Scheduler, VirtualClock};
use crate::types::Collection;
use std::time::Duration;
use tracing::debug;

/// A discrete UI event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A filter button was clicked.
    SelectFilter { collection: Collection, tag: Tag },
    /// A grid card was clicked.
    SelectItem { collection: Collection, id: String },
    /// A carousel bullet was clicked.
    SelectSlide(usize),
    /// Close button or backdrop click.
    CloseModal,
    /// Escape key.
    Escape,
    /// Wall-clock time passed.
    Tick(Duration),
}

/// Something visible that changed while handling a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    GridRendered {
        collection: Collection,
        tag: Tag,
        ids: Vec<String>,
    },
    ModalOpened {
        collection: Collection,
        id: String,
        carousel: bool,
    },
    ModalClosed {
        id: String,
    },
    SlideChanged {
        index: usize,
        at: Duration,
    },
    /// The command had no effect.
    Ignored(String),
}

pub struct App<S: Scheduler = VirtualClock> {
    config: SiteConfig,
    store: DataStore,
    portfolio_filter: FilterController,
    cert_filter: FilterController,
    portfolio_grid: GridView,
    cert_grid: GridView,
    modal: ModalPresenter,
    scheduler: S,
}

impl App<VirtualClock> {
    pub fn new(store: DataStore, config: SiteConfig) -> Self {
        Self::with_scheduler(store, config, VirtualClock::new())
    }
}

impl<S: Scheduler> App<S> {
    /// Initial page state: both filters at `All`, both grids rendered, no
    /// modal.
    pub fn with_scheduler(store: DataStore, config: SiteConfig, scheduler: S) -> Self {
        let portfolio_filter =
            FilterController::new(Collection::Portfolio, store.tags_of(Collection::Portfolio));
        let cert_filter = FilterController::new(Collection::Certs, store.tags_of(Collection::Certs));
        let modal = ModalPresenter::new(&config.carousel);
        let mut app = Self {
            config,
            store,
            portfolio_filter,
            cert_filter,
            portfolio_grid: GridView::Cards(Vec::new()),
            cert_grid: GridView::Cards(Vec::new()),
            modal,
            scheduler,
        };
        for collection in Collection::ALL {
            app.rerender(collection);
        }
        app
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn filter(&self, collection: Collection) -> &FilterController {
        match collection {
            Collection::Portfolio => &self.portfolio_filter,
            Collection::Certs => &self.cert_filter,
        }
    }

    pub fn grid(&self, collection: Collection) -> &GridView {
        match collection {
            Collection::Portfolio => &self.portfolio_grid,
            Collection::Certs => &self.cert_grid,
        }
    }

    pub fn modal(&self) -> &ModalPresenter {
        &self.modal
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Apply one command.
    pub fn dispatch(&mut self, command: Command) -> Vec<Update> {
        debug!(?command, "dispatch");
        match command {
            Command::SelectFilter { collection, tag } => vec![self.on_select_filter(collection, tag)],
            Command::SelectItem { collection, id } => vec![self.on_select_item(collection, &id)],
            Command::SelectSlide(index) => vec![self.on_select_slide(index)],
            Command::CloseModal | Command::Escape => vec![self.on_close_modal()],
            Command::Tick(by) => self.on_tick(by),
        }
    }

    /// Apply commands in order, collecting every update.
    pub fn dispatch_all(&mut self, commands: impl IntoIterator<Item = Command>) -> Vec<Update> {
        let mut updates = Vec::new();
        for command in commands {
            updates.extend(self.dispatch(command));
        }
        updates
    }

    fn on_select_filter(&mut self, collection: Collection, tag: Tag) -> Update {
        let controller = match collection {
            Collection::Portfolio => &mut self.portfolio_filter,
            Collection::Certs => &mut self.cert_filter,
        };
        let tag = controller.select(tag).clone();
        let ids = self
            .rerender(collection)
            .ids()
            .into_iter()
            .map(str::to_string)
            .collect();
        Update::GridRendered {
            collection,
            tag,
            ids,
        }
    }

    fn on_select_item(&mut self, collection: Collection, id: &str) -> Update {
        let opened = match collection {
            Collection::Portfolio => self.modal.open(self.store.project(id), &mut self.scheduler),
            Collection::Certs => self
                .modal
                .open(self.store.certification(id), &mut self.scheduler),
        };
        match self.modal.view() {
            Some(view) if opened => Update::ModalOpened {
                collection,
                id: view.id.clone(),
                carousel: view.carousel().is_some(),
            },
            _ => Update::Ignored(format!("no {collection} item with id '{id}'")),
        }
    }

    fn on_select_slide(&mut self, index: usize) -> Update {
        let at = self.scheduler.now();
        match self.modal.select_slide(index, &mut self.scheduler) {
            Some(index) => Update::SlideChanged { index, at },
            None => Update::Ignored("no carousel is open".into()),
        }
    }

    fn on_close_modal(&mut self) -> Update {
        let Some(id) = self.modal.view().map(|view| view.id.clone()) else {
            return Update::Ignored("no modal is open".into());
        };
        self.modal.close(&mut self.scheduler);
        Update::ModalClosed { id }
    }

    fn on_tick(&mut self, by: Duration) -> Vec<Update> {
        let firings = self.scheduler.advance(by);
        firings
            .into_iter()
            .filter_map(|firing| {
                self.modal
                    .on_timer(firing.handle)
                    .map(|index| Update::SlideChanged {
                        index,
                        at: firing.at,
                    })
            })
            .collect()
    }

    fn rerender(&mut self, collection: Collection) -> &GridView {
        let cards = &self.config.cards;
        match collection {
            Collection::Portfolio => {
                let rendered =
                    grid::render(&self.store.portfolio, self.portfolio_filter.active(), cards);
                self.portfolio_grid = GridView::from_cards(collection, rendered);
                &self.portfolio_grid
            }
            Collection::Certs => {
                let rendered = grid::render(&self.store.certs, self.cert_filter.active(), cards);
                self.cert_grid = GridView::from_cards(collection, rendered);
                &self.cert_grid
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    fn app() -> App {
        App::new(sample_store(), SiteConfig::default())
    }

    fn select_filter(collection: Collection, tag: &str) -> Command {
        Command::SelectFilter {
            collection,
            tag: Tag::parse(tag),
        }
    }

    fn open(collection: Collection, id: &str) -> Command {
        Command::SelectItem {
            collection,
            id: id.to_string(),
        }
    }

    fn wait_ms(ms: u64) -> Command {
        Command::Tick(Duration::from_millis(ms))
    }

    #[test]
    fn initial_state_shows_everything() {
        let app = app();
        assert_eq!(app.grid(Collection::Portfolio).ids(), vec!["a", "b", "c"]);
        assert_eq!(app.grid(Collection::Certs).ids(), vec!["c1", "c2"]);
        assert_eq!(app.filter(Collection::Portfolio).active(), &Tag::All);
        assert!(!app.modal().is_open());
    }

    #[test]
    fn filter_web_renders_a_and_c() {
        let mut app = app();
        let updates = app.dispatch(select_filter(Collection::Portfolio, "Web"));
        assert_eq!(
            updates,
            vec![Update::GridRendered {
                collection: Collection::Portfolio,
                tag: Tag::named("Web"),
                ids: vec!["a".into(), "c".into()],
            }]
        );
    }

    #[test]
    fn filters_are_independent() {
        let mut app = app();
        app.dispatch(select_filter(Collection::Portfolio, "ML"));
        app.dispatch(select_filter(Collection::Certs, "Data"));

        assert_eq!(app.grid(Collection::Portfolio).ids(), vec!["b"]);
        assert_eq!(app.grid(Collection::Certs).ids(), vec!["c2"]);
        assert_eq!(app.filter(Collection::Portfolio).active(), &Tag::named("ML"));

        app.dispatch(select_filter(Collection::Certs, "All"));
        assert_eq!(app.grid(Collection::Portfolio).ids(), vec!["b"]);
        assert_eq!(app.grid(Collection::Certs).ids(), vec!["c1", "c2"]);
    }

    #[test]
    fn reselecting_same_tag_rerenders() {
        let mut app = app();
        let first = app.dispatch(select_filter(Collection::Portfolio, "Web"));
        let second = app.dispatch(select_filter(Collection::Portfolio, "Web"));
        assert_eq!(first, second);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn unknown_tag_shows_placeholder() {
        let mut app = app();
        app.dispatch(select_filter(Collection::Portfolio, "Games"));
        assert_eq!(
            app.grid(Collection::Portfolio),
            &GridView::Empty {
                message: "No projects found in this category."
            }
        );
    }

    #[test]
    fn open_unknown_id_is_ignored() {
        let mut app = app();
        let updates = app.dispatch(open(Collection::Portfolio, "zzz"));
        assert!(matches!(updates.as_slice(), [Update::Ignored(_)]));
        assert!(!app.modal().is_open());
    }

    #[test]
    fn carousel_advances_with_time() {
        let mut app = app();
        // "a" has a three-image gallery
        app.dispatch(open(Collection::Portfolio, "a"));
        let updates = app.dispatch(wait_ms(12_000));
        let indices: Vec<usize> = updates
            .iter()
            .filter_map(|u| match u {
                Update::SlideChanged { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn slide_changes_report_fire_time() {
        let mut app = app();
        app.dispatch(open(Collection::Portfolio, "a"));
        let updates = app.dispatch(wait_ms(9_000));
        assert_eq!(
            updates,
            vec![
                Update::SlideChanged {
                    index: 1,
                    at: Duration::from_millis(4000)
                },
                Update::SlideChanged {
                    index: 2,
                    at: Duration::from_millis(8000)
                },
            ]
        );
        assert_eq!(app.now(), Duration::from_millis(9000));
    }

    #[test]
    fn close_releases_timer() {
        let mut app = app();
        app.dispatch(open(Collection::Portfolio, "a"));
        assert_eq!(app.scheduler().active_timers(), 1);

        let updates = app.dispatch(Command::CloseModal);
        assert_eq!(updates, vec![Update::ModalClosed { id: "a".into() }]);
        assert_eq!(app.scheduler().active_timers(), 0);
        assert!(app.dispatch(wait_ms(20_000)).is_empty());
    }

    #[test]
    fn escape_closes_modal() {
        let mut app = app();
        app.dispatch(open(Collection::Certs, "c1"));
        let updates = app.dispatch(Command::Escape);
        assert_eq!(updates, vec![Update::ModalClosed { id: "c1".into() }]);
        assert!(matches!(
            app.dispatch(Command::Escape).as_slice(),
            [Update::Ignored(_)]
        ));
    }

    #[test]
    fn double_open_replaces_modal_and_timer() {
        let mut app = app();
        app.dispatch(open(Collection::Portfolio, "a"));
        app.dispatch(open(Collection::Portfolio, "c"));
        assert_eq!(app.modal().view().unwrap().id, "c");
        assert_eq!(app.scheduler().active_timers(), 1);

        app.dispatch(open(Collection::Certs, "c1"));
        assert_eq!(app.scheduler().active_timers(), 0);
    }

    #[test]
    fn cert_modal_never_starts_timer() {
        let mut app = app();
        let updates = app.dispatch(open(Collection::Certs, "c1"));
        assert_eq!(
            updates,
            vec![Update::ModalOpened {
                collection: Collection::Certs,
                id: "c1".into(),
                carousel: false,
            }]
        );
        assert_eq!(app.scheduler().active_timers(), 0);
    }

    #[test]
    fn bullet_click_races_with_timer() {
        let mut app = app();
        app.dispatch(open(Collection::Portfolio, "a"));
        app.dispatch(wait_ms(3_900));
        app.dispatch(Command::SelectSlide(2));
        // the untouched timer fires 100ms later and moves past the clicked slide
        let updates = app.dispatch(wait_ms(100));
        assert!(matches!(
            updates.as_slice(),
            [Update::SlideChanged { index: 0, .. }]
        ));
    }

    #[test]
    fn bullet_click_restarts_timer_when_configured() {
        let mut config = SiteConfig::default();
        config.carousel.reset_on_select = true;
        let mut app = App::new(sample_store(), config);
        app.dispatch(open(Collection::Portfolio, "a"));
        app.dispatch(wait_ms(3_900));
        app.dispatch(Command::SelectSlide(2));

        assert!(app.dispatch(wait_ms(100)).is_empty());
        let updates = app.dispatch(wait_ms(3_900));
        assert!(matches!(
            updates.as_slice(),
            [Update::SlideChanged { index: 0, .. }]
        ));
    }

    #[test]
    fn huge_waits_neither_panic_nor_flood() {
        let mut empty = App::new(DataStore::default(), SiteConfig::default());
        let updates = empty.dispatch_all((0..1001).map(|_| wait_ms(u64::MAX)));
        assert!(updates.is_empty());
        assert_eq!(empty.now(), Duration::MAX);

        let mut app = app();
        app.dispatch(open(Collection::Portfolio, "a"));
        let updates = app.dispatch(wait_ms(u64::MAX));
        assert_eq!(updates.len(), crate::timer::MAX_FIRINGS_PER_ADVANCE);
        // 1024 advances over three slides
        assert_eq!(app.modal().view().unwrap().carousel().unwrap().current_index(), 1);
        assert_eq!(app.dispatch(Command::CloseModal).len(), 1);
        assert_eq!(app.scheduler().active_timers(), 0);
    }

    #[test]
    fn slide_without_carousel_is_ignored() {
        let mut app = app();
        assert!(matches!(
            app.dispatch(Command::SelectSlide(1)).as_slice(),
            [Update::Ignored(_)]
        ));
    }

    #[test]
    fn dispatch_all_preserves_order() {
        let mut app = app();
        let updates = app.dispatch_all([
            select_filter(Collection::Portfolio, "ML"),
            select_filter(Collection::Portfolio, "Web"),
        ]);
        let tags: Vec<&Tag> = updates
            .iter()
            .filter_map(|u| match u {
                Update::GridRendered { tag, .. } => Some(tag),
                _ => None,
            })
            .collect();
        assert_eq!(tags, vec![&Tag::named("ML"), &Tag::named("Web")]);
        assert_eq!(app.grid(Collection::Portfolio).ids(), vec!["a", "c"]);
    }
}
