//! Replay session driver
//!
//! Wires both controllers to one [`ManualScheduler`] the way a page would:
//! wheel/tap/viewport events go to the gallery, scroll offsets pass through a
//! [`FrameGate`] before reaching the header, and fired timers are routed back
//! to whichever component owns them. Everything the controllers emit is
//! recorded with the logical time it happened at.

use crate::config::FolioConfig;
use crate::controller::{
    CondensingHeader, GalleryIntent, GalleryItem, HeaderMode, HeaderThresholds, PagedGallery,
};
use crate::error::Result;
use crate::monitor::{FrameGate, ViewportObserver};
use crate::replay::trace::{InputEvent, Trace};
use crate::scheduler::{ManualScheduler, Scheduler};
use std::fmt;
use std::time::Duration;
use tracing::{debug, info};

/// Something a controller asked the rendering layer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emitted {
    /// Gallery intent
    Gallery(GalleryIntent),
    /// Header switched mode
    Header(HeaderMode),
}

/// An emitted intent stamped with logical time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayRecord {
    /// Time since mount
    pub at: Duration,
    /// What was emitted
    pub emitted: Emitted,
}

impl fmt::Display for ReplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = self.at.as_millis();
        match self.emitted {
            Emitted::Gallery(GalleryIntent::IndexChanged(index)) => {
                write!(f, "{at:>8} ms  gallery  index -> {index}")
            }
            Emitted::Gallery(GalleryIntent::CaptureScroll(capture)) => {
                let action = if capture { "capture" } else { "release" };
                write!(f, "{at:>8} ms  gallery  {action} scroll")
            }
            Emitted::Header(mode) => write!(f, "{at:>8} ms  header   {mode:?}"),
        }
    }
}

/// Both controllers mounted on one logical clock
#[derive(Debug)]
pub struct ReplaySession {
    scheduler: ManualScheduler,
    gallery: PagedGallery,
    header: CondensingHeader,
    frames: FrameGate,
    viewport: ViewportObserver,
    records: Vec<ReplayRecord>,
    prevented_wheel_events: usize,
    unmounted: bool,
}

impl ReplaySession {
    /// Mount a gallery of `items` and a header at `initial_scroll_y`
    pub fn new(config: &FolioConfig, items: Vec<GalleryItem>, initial_scroll_y: f64) -> Result<Self> {
        config.validate()?;
        let thresholds = HeaderThresholds::try_from(&config.header)?;

        Ok(Self {
            scheduler: ManualScheduler::new(),
            gallery: PagedGallery::new(items, &config.gallery),
            header: CondensingHeader::new(thresholds, initial_scroll_y),
            frames: FrameGate::new(config.header.frame_interval()),
            viewport: ViewportObserver::default(),
            records: Vec::new(),
            prevented_wheel_events: 0,
            unmounted: false,
        })
    }

    /// Mount from a trace and play all of its events
    ///
    /// Timers still pending after the last event are left unfired; call
    /// [`ReplaySession::run_until`] to let them play out.
    pub fn play(config: &FolioConfig, trace: &Trace) -> Result<Self> {
        trace.validate()?;
        let mut session = Self::new(config, trace.items.clone(), trace.initial_scroll_y)?;
        info!(events = trace.events.len(), "Replaying trace");

        for event in &trace.events {
            session.run_until(event.at());
            session.dispatch(&event.input);
        }

        Ok(session)
    }

    /// Fire every timer due up to `target` in order, then set the clock to `target`
    pub fn run_until(&mut self, target: Duration) {
        while let Some(handle) = self.scheduler.pop_due(target) {
            let at = self.scheduler.now();

            if !self.frames.owns(handle) {
                let intents = self.gallery.on_timer(handle, &mut self.scheduler);
                self.record_gallery(at, intents);
                continue;
            }

            if let Some(y) = self.frames.on_frame(handle)
                && let Some(mode) = self.header.on_scroll(y)
            {
                self.records.push(ReplayRecord {
                    at,
                    emitted: Emitted::Header(mode),
                });
            }
        }
        self.scheduler.advance_to(target);
    }

    /// Deliver one input at the current logical time
    pub fn dispatch(&mut self, input: &InputEvent) {
        let at = self.scheduler.now();
        debug!(?input, at = ?at, "Dispatching input");

        match *input {
            InputEvent::Wheel { delta_y } => {
                let outcome = self.gallery.on_wheel(delta_y, &mut self.scheduler);
                if outcome.prevent_default {
                    self.prevented_wheel_events += 1;
                }
                self.record_gallery(at, outcome.intents);
            }
            InputEvent::Scroll { y } => {
                self.frames.notify(y, &mut self.scheduler);
            }
            InputEvent::Viewport { ratio } => {
                if let Some(visible) = self.viewport.observe(ratio) {
                    let intents = self.gallery.set_in_viewport(visible, &mut self.scheduler);
                    self.record_gallery(at, intents);
                }
            }
            InputEvent::Tap => self.gallery.on_tap(&mut self.scheduler),
            InputEvent::Unmount => self.unmount(),
        }
    }

    /// Tear everything down. Idempotent.
    pub fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        let at = self.scheduler.now();
        let intents = self.gallery.teardown(&mut self.scheduler);
        self.record_gallery(at, intents);
        self.header.detach();
        self.frames.close(&mut self.scheduler);
        self.viewport.disconnect();
        self.unmounted = true;
        info!(records = self.records.len(), "Session unmounted");
    }

    /// Everything emitted so far, in order
    pub fn records(&self) -> &[ReplayRecord] {
        &self.records
    }

    /// Wheel events whose default page scroll had to be suppressed
    pub fn prevented_wheel_events(&self) -> usize {
        self.prevented_wheel_events
    }

    /// The gallery controller
    pub fn gallery(&self) -> &PagedGallery {
        &self.gallery
    }

    /// The header controller
    pub fn header(&self) -> &CondensingHeader {
        &self.header
    }

    /// The shared scheduler
    pub fn scheduler(&self) -> &ManualScheduler {
        &self.scheduler
    }

    /// Whether the session was unmounted
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    fn record_gallery(&mut self, at: Duration, intents: impl IntoIterator<Item = GalleryIntent>) {
        self.records.extend(intents.into_iter().map(|intent| ReplayRecord {
            at,
            emitted: Emitted::Gallery(intent),
        }));
    }
}
