//! Auto-advancing image carousel shown inside a modal.
//!
//! The carousel owns its timer handle. It acquires the handle in
//! [`Carousel::start`] and releases it in [`Carousel::stop`]; the modal
//! presenter calls `stop` on every exit path (close, escape, re-open), so a
//! detached carousel can never keep advancing in the background.
//!
//! Manual bullet selection goes straight to [`Carousel::go_to`] and leaves
//! the timer alone unless `reset_on_select` is set, so an automatic advance
//! may follow a click sooner than a full interval.

use crate::timer::{Scheduler, TimerHandle};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Carousel {
    slides: Vec<String>,
    current_index: usize,
    timer: Option<TimerHandle>,
    interval: Duration,
    reset_on_select: bool,
}

impl Carousel {
    /// Build a stopped carousel at slide 0. Returns `None` for an empty
    /// slide list, which has no valid index.
    pub fn new(slides: Vec<String>, interval: Duration, reset_on_select: bool) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        Some(Self {
            slides,
            current_index: 0,
            timer: None,
            interval,
            reset_on_select,
        })
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> &str {
        &self.slides[self.current_index]
    }

    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Jump to `index`, wrapping past the end.
    pub fn go_to(&mut self, index: usize) {
        self.current_index = index % self.slides.len();
    }

    pub fn advance(&mut self) {
        self.go_to(self.current_index + 1);
    }

    /// Begin periodic advancing. A running timer is cancelled first, so a
    /// carousel never holds more than one.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        self.stop(scheduler);
        let handle = scheduler.set_interval(self.interval);
        debug!(%handle, slides = self.slides.len(), "carousel started");
        self.timer = Some(handle);
    }

    pub fn stop(&mut self, scheduler: &mut dyn Scheduler) {
        if let Some(handle) = self.timer.take() {
            scheduler.clear_interval(handle);
            debug!(%handle, "carousel stopped");
        }
    }

    /// Handle a timer firing. Returns true when the firing belonged to this
    /// carousel and it advanced.
    pub fn on_timer(&mut self, handle: TimerHandle) -> bool {
        if self.timer != Some(handle) {
            return false;
        }
        self.advance();
        true
    }

    /// A bullet click.
    pub fn select(&mut self, index: usize, scheduler: &mut dyn Scheduler) {
        self.go_to(index);
        if self.reset_on_select && self.is_running() {
            self.start(scheduler);
        }
    }

    /// Horizontal offset of the slide track, in percent of one slide.
    pub fn track_offset_percent(&self) -> i64 {
        -100 * self.current_index as i64
    }

    /// Width of the slide track, in percent of the viewport.
    pub fn track_width_percent(&self) -> usize {
        self.slides.len() * 100
    }

    /// Bullet states; exactly one is active.
    pub fn bullets(&self) -> Vec<bool> {
        (0..self.slides.len())
            .map(|i| i == self.current_index)
            .collect()
    }
}
