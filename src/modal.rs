//! Detail modal for one selected project or certification.
//!
//! At most one modal is open. Opening while another is open closes the
//! previous one first, so its carousel timer is released before the new
//! carousel acquires one. Closing always stops the carousel before the view
//! is dropped.
//!
//! Media is chosen from the item's gallery:
//!
//! | Gallery length | Media |
//! |----------------|-------|
//! | 0 | none |
//! | 1 | static image, no timer |
//! | > 1 | carousel, started on open |

use crate::carousel::Carousel;
use crate::config::CarouselConfig;
use crate::timer::{Scheduler, TimerHandle};
use crate::types::{Certification, Collection, ContentItem, Project};
use std::time::Duration;
use tracing::debug;

/// Fields a modal shows beyond what [`ContentItem`] already provides.
pub trait Detail: ContentItem {
    const COLLECTION: Collection;
    /// Issuer for certifications.
    fn subtitle(&self) -> Option<&str>;
    fn description(&self) -> &str;
    fn link(&self) -> &str;
    /// Tech badges for projects; all of them, unlike the grid card.
    fn badges(&self) -> &[String];
}

impl Detail for Project {
    const COLLECTION: Collection = Collection::Portfolio;

    fn subtitle(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> &str {
        &self.long_desc
    }

    fn link(&self) -> &str {
        &self.link
    }

    fn badges(&self) -> &[String] {
        &self.tech
    }
}

impl Detail for Certification {
    const COLLECTION: Collection = Collection::Certs;

    fn subtitle(&self) -> Option<&str> {
        Some(&self.issuer)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn link(&self) -> &str {
        &self.link
    }

    fn badges(&self) -> &[String] {
        &[]
    }
}

#[derive(Debug, Clone)]
pub enum Media {
    None,
    Static(String),
    Carousel(Carousel),
}

/// Content of the open modal.
#[derive(Debug, Clone)]
pub struct ModalView {
    pub collection: Collection,
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub link: String,
    pub badges: Vec<String>,
    pub media: Media,
}

impl ModalView {
    pub fn carousel(&self) -> Option<&Carousel> {
        match &self.media {
            Media::Carousel(carousel) => Some(carousel),
            _ => None,
        }
    }

    pub fn static_image(&self) -> Option<&str> {
        match &self.media {
            Media::Static(path) => Some(path),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModalPresenter {
    current: Option<ModalView>,
    interval: Duration,
    reset_on_select: bool,
}

impl ModalPresenter {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            current: None,
            interval: config.interval(),
            reset_on_select: config.reset_on_select,
        }
    }

    pub fn view(&self) -> Option<&ModalView> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Populate and show the modal for `item`. A missing item (stale or
    /// unknown id) is ignored and leaves any open modal untouched. Returns
    /// whether a modal was opened.
    pub fn open<T: Detail>(&mut self, item: Option<&T>, scheduler: &mut dyn Scheduler) -> bool {
        let Some(item) = item else {
            debug!("open ignored: no item");
            return false;
        };
        if self.close(scheduler) {
            debug!("closed previous modal before opening {}", item.id());
        }

        let gallery = item.gallery();
        let media = match gallery {
            [] => Media::None,
            [single] => Media::Static(single.clone()),
            _ => match Carousel::new(gallery.to_vec(), self.interval, self.reset_on_select) {
                Some(mut carousel) => {
                    carousel.start(scheduler);
                    Media::Carousel(carousel)
                }
                None => Media::None,
            },
        };

        let collection = T::COLLECTION;
        debug!(%collection, id = item.id(), images = gallery.len(), "modal opened");
        self.current = Some(ModalView {
            collection,
            id: item.id().to_string(),
            title: item.title().to_string(),
            subtitle: item.subtitle().map(str::to_string),
            description: item.description().to_string(),
            link: item.link().to_string(),
            badges: item.badges().to_vec(),
            media,
        });
        true
    }

    /// Stop any carousel and hide the modal. Returns whether a modal was
    /// open.
    pub fn close(&mut self, scheduler: &mut dyn Scheduler) -> bool {
        let Some(mut view) = self.current.take() else {
            return false;
        };
        if let Media::Carousel(carousel) = &mut view.media {
            carousel.stop(scheduler);
        }
        debug!(id = %view.id, "modal closed");
        true
    }

    /// Route a timer firing to the open carousel. Returns the new slide
    /// index if it advanced.
    pub fn on_timer(&mut self, handle: TimerHandle) -> Option<usize> {
        let carousel = self.carousel_mut()?;
        carousel.on_timer(handle).then(|| carousel.current_index())
    }

    /// A bullet click on the open carousel. Returns the new slide index, or
    /// `None` when no carousel is shown.
    pub fn select_slide(&mut self, index: usize, scheduler: &mut dyn Scheduler) -> Option<usize> {
        let carousel = self.carousel_mut()?;
        carousel.select(index, scheduler);
        Some(carousel.current_index())
    }

    fn carousel_mut(&mut self) -> Option<&mut Carousel> {
        match &mut self.current.as_mut()?.media {
            Media::Carousel(carousel) => Some(carousel),
            _ => None,
        }
    }
}
