//! Paged gallery controller
//!
//! Pages through a fixed, ordered list of labelled images. On pointer devices
//! paging is driven by wheel ticks, throttled so one physical gesture moves at
//! most one item. On touch devices a periodic timer advances and wraps, and a
//! tap pauses it for a cooldown.
//!
//! The controller never touches the page. It emits [`GalleryIntent`]s which the
//! rendering layer applies (repaint at a new index, lock or unlock background
//! scrolling).

use crate::config::{DeviceClass, GallerySettings};
use crate::scheduler::{Scheduler, TimerHandle, cancel_slot};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::Duration;
use tracing::{debug, info, trace};
use uuid::Uuid;

/// Throttle window after an accepted wheel tick, in milliseconds
pub const DEFAULT_THROTTLE_MS: u64 = 600;

/// Auto-advance period on touch devices, in milliseconds
pub const DEFAULT_AUTO_ADVANCE_INTERVAL_MS: u64 = 3500;

/// How long a tap pauses auto-advance, in milliseconds
pub const DEFAULT_PAUSE_COOLDOWN_MS: u64 = 6000;

/// One entry of the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Opaque reference to the image resource (URL, asset key, ...)
    pub image: String,
    /// Caption shown over the image
    pub label: String,
}

impl GalleryItem {
    /// Create an item
    pub fn new(image: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            label: label.into(),
        }
    }
}

/// Paging direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the last item
    Forward,
    /// Towards the first item
    Backward,
}

impl Direction {
    /// Map a vertical wheel delta to a direction; zero and NaN map to `None`
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Forward)
        } else if delta_y < 0.0 {
            Some(Self::Backward)
        } else {
            None
        }
    }
}

/// How the gallery moves between items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceMode {
    /// Throttled wheel ticks, clamped at both ends, with scroll capture
    Wheel,
    /// Periodic forward steps that wrap around, paused by taps
    Auto,
}

impl From<DeviceClass> for AdvanceMode {
    fn from(device: DeviceClass) -> Self {
        match device {
            DeviceClass::Pointer => Self::Wheel,
            DeviceClass::Touch => Self::Auto,
        }
    }
}

/// Instruction for the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryIntent {
    /// Paint the item at this index
    IndexChanged(usize),
    /// `true`: suppress page scrolling and route wheel deltas to the gallery.
    /// `false`: give scrolling back to the page.
    CaptureScroll(bool),
}

/// Intents produced by a single call, in the order they must be applied
pub type GalleryIntents = SmallVec<[GalleryIntent; 2]>;

/// Result of feeding one wheel event to the gallery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WheelOutcome {
    /// The consumer must call `preventDefault` (or equivalent) on the event
    pub prevent_default: bool,
    /// Intents produced by the event
    pub intents: GalleryIntents,
}

/// Gallery controller
///
/// Owns its state exclusively. Timers are requested from the [`Scheduler`]
/// passed into each call and are identified by handle; [`PagedGallery::on_timer`]
/// ignores handles it does not currently own, and after
/// [`PagedGallery::teardown`] ignores everything.
#[derive(Debug)]
pub struct PagedGallery {
    id: Uuid,
    items: Vec<GalleryItem>,
    current_index: usize,
    mode: AdvanceMode,
    throttle: Duration,
    auto_interval: Duration,
    pause_cooldown: Duration,
    in_view: bool,
    capturing: bool,
    paused: bool,
    torn_down: bool,
    throttle_timer: Option<TimerHandle>,
    auto_timer: Option<TimerHandle>,
    cooldown_timer: Option<TimerHandle>,
}

impl PagedGallery {
    /// Create a gallery at index 0 using the mode implied by `settings.device`
    pub fn new(items: Vec<GalleryItem>, settings: &GallerySettings) -> Self {
        Self::with_mode(items, settings, settings.device.into())
    }

    /// Create a gallery at index 0 with an explicit advance mode
    pub fn with_mode(items: Vec<GalleryItem>, settings: &GallerySettings, mode: AdvanceMode) -> Self {
        let id = Uuid::new_v4();
        if items.is_empty() {
            debug!(gallery = %id, "Gallery created without items; paging disabled");
        }
        info!(gallery = %id, items = items.len(), ?mode, "Gallery mounted");

        Self {
            id,
            items,
            current_index: 0,
            mode,
            throttle: settings.throttle(),
            auto_interval: settings.auto_advance_interval(),
            pause_cooldown: settings.pause_cooldown(),
            in_view: false,
            capturing: false,
            paused: false,
            torn_down: false,
            throttle_timer: None,
            auto_timer: None,
            cooldown_timer: None,
        }
    }

    /// Instance id used in log lines
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Items in display order
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the gallery has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item on screen; 0 for an empty gallery
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Item on screen
    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.items.get(self.current_index)
    }

    /// Advance mode in use
    pub fn mode(&self) -> AdvanceMode {
        self.mode
    }

    /// Whether a throttle window is open
    pub fn is_throttled(&self) -> bool {
        self.throttle_timer.is_some()
    }

    /// Whether the gallery currently asks for scroll capture
    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    /// Whether auto-advance is paused by a recent tap
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the gallery was last reported visible
    pub fn is_in_viewport(&self) -> bool {
        self.in_view
    }

    /// Whether [`PagedGallery::teardown`] has run
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// `true` at the first or last item (and always for 0 or 1 items)
    pub fn is_at_boundary(&self) -> bool {
        self.current_index == 0 || self.is_at_last()
    }

    fn is_at_last(&self) -> bool {
        self.current_index + 1 >= self.items.len()
    }

    /// Step one item in `direction`
    ///
    /// Dropped while a throttle window is open. Otherwise moves one step,
    /// clamped at both ends, and opens a new throttle window whether or not
    /// the index moved.
    pub fn advance<S>(&mut self, direction: Direction, scheduler: &mut S) -> GalleryIntents
    where
        S: Scheduler + ?Sized,
    {
        let mut intents = GalleryIntents::new();
        if self.torn_down || self.items.is_empty() {
            return intents;
        }
        if self.is_throttled() {
            debug!(gallery = %self.id, ?direction, "Throttle window open, advance dropped");
            return intents;
        }

        self.throttle_timer = Some(scheduler.schedule(self.throttle));

        let next = match direction {
            Direction::Forward if !self.is_at_last() => self.current_index + 1,
            Direction::Backward if self.current_index > 0 => self.current_index - 1,
            _ => {
                debug!(gallery = %self.id, ?direction, index = self.current_index, "Advance clamped at boundary");
                return intents;
            }
        };

        self.set_index(next, &mut intents);
        self.refresh_capture(&mut intents);
        intents
    }

    /// Feed one wheel event
    ///
    /// Paging happens only while the gallery captures scroll; otherwise the
    /// event belongs to the page and is left alone.
    pub fn on_wheel<S>(&mut self, delta_y: f64, scheduler: &mut S) -> WheelOutcome
    where
        S: Scheduler + ?Sized,
    {
        if self.torn_down || !self.capturing {
            return WheelOutcome::default();
        }

        let intents = match Direction::from_wheel_delta(delta_y) {
            Some(direction) => self.advance(direction, scheduler),
            None => GalleryIntents::new(),
        };

        WheelOutcome {
            prevent_default: true,
            intents,
        }
    }

    /// Record whether the gallery is visible
    ///
    /// In wheel mode this drives scroll capture. In auto mode it starts or
    /// stops the auto-advance timer.
    pub fn set_in_viewport<S>(&mut self, in_view: bool, scheduler: &mut S) -> GalleryIntents
    where
        S: Scheduler + ?Sized,
    {
        let mut intents = GalleryIntents::new();
        if self.torn_down {
            return intents;
        }

        if self.in_view != in_view {
            debug!(gallery = %self.id, in_view, "Viewport visibility changed");
        }
        self.in_view = in_view;
        self.refresh_capture(&mut intents);

        if self.mode == AdvanceMode::Auto {
            if in_view {
                self.arm_auto_advance(scheduler);
            } else {
                cancel_slot(scheduler, &mut self.auto_timer);
            }
        }

        intents
    }

    /// A tap or click on the gallery
    ///
    /// In auto mode this pauses auto-advance for the cooldown; a tap during an
    /// active cooldown restarts it. Ignored in wheel mode.
    pub fn on_tap<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        if self.torn_down || self.mode != AdvanceMode::Auto {
            return;
        }

        cancel_slot(scheduler, &mut self.auto_timer);
        cancel_slot(scheduler, &mut self.cooldown_timer);
        self.paused = true;
        self.cooldown_timer = Some(scheduler.schedule(self.pause_cooldown));
        debug!(gallery = %self.id, cooldown = ?self.pause_cooldown, "Auto-advance paused by tap");
    }

    /// Deliver a fired timer
    ///
    /// Handles not owned by this gallery are ignored, as is everything after
    /// teardown.
    pub fn on_timer<S>(&mut self, handle: TimerHandle, scheduler: &mut S) -> GalleryIntents
    where
        S: Scheduler + ?Sized,
    {
        let mut intents = GalleryIntents::new();
        if self.torn_down {
            debug!(gallery = %self.id, %handle, "Timer after teardown ignored");
            return intents;
        }

        if self.throttle_timer == Some(handle) {
            self.throttle_timer = None;
        } else if self.auto_timer == Some(handle) {
            self.auto_timer = None;
            if self.in_view && !self.paused {
                let next = (self.current_index + 1) % self.items.len().max(1);
                self.set_index(next, &mut intents);
                self.arm_auto_advance(scheduler);
            }
        } else if self.cooldown_timer == Some(handle) {
            self.cooldown_timer = None;
            self.paused = false;
            debug!(gallery = %self.id, "Auto-advance resumed");
            if self.in_view {
                self.arm_auto_advance(scheduler);
            }
        } else {
            trace!(gallery = %self.id, %handle, "Stale timer ignored");
        }

        intents
    }

    /// Cancel every pending timer and release scroll capture
    ///
    /// Idempotent: later calls return no intents and change nothing.
    pub fn teardown<S>(&mut self, scheduler: &mut S) -> GalleryIntents
    where
        S: Scheduler + ?Sized,
    {
        let mut intents = GalleryIntents::new();
        if self.torn_down {
            return intents;
        }

        cancel_slot(scheduler, &mut self.throttle_timer);
        cancel_slot(scheduler, &mut self.auto_timer);
        cancel_slot(scheduler, &mut self.cooldown_timer);
        self.torn_down = true;
        self.in_view = false;
        if self.capturing {
            self.capturing = false;
            intents.push(GalleryIntent::CaptureScroll(false));
        }

        info!(gallery = %self.id, "Gallery torn down");
        intents
    }

    fn set_index(&mut self, index: usize, intents: &mut GalleryIntents) {
        if index == self.current_index {
            return;
        }
        debug!(gallery = %self.id, from = self.current_index, to = index, "Index changed");
        self.current_index = index;
        intents.push(GalleryIntent::IndexChanged(index));
    }

    fn refresh_capture(&mut self, intents: &mut GalleryIntents) {
        let wanted = self.mode == AdvanceMode::Wheel && self.in_view && !self.is_at_last();
        if wanted != self.capturing {
            self.capturing = wanted;
            intents.push(GalleryIntent::CaptureScroll(wanted));
        }
    }

    fn arm_auto_advance<S>(&mut self, scheduler: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        if self.auto_timer.is_none() && !self.paused && self.items.len() > 1 {
            self.auto_timer = Some(scheduler.schedule(self.auto_interval));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use crate::test_utils::sample_items;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn wheel_gallery(count: usize) -> (PagedGallery, ManualScheduler) {
        let gallery = PagedGallery::with_mode(
            sample_items(count),
            &GallerySettings::default(),
            AdvanceMode::Wheel,
        );
        (gallery, ManualScheduler::new())
    }

    fn auto_gallery(count: usize) -> (PagedGallery, ManualScheduler) {
        let gallery = PagedGallery::with_mode(
            sample_items(count),
            &GallerySettings::default(),
            AdvanceMode::Auto,
        );
        (gallery, ManualScheduler::new())
    }

    /// Fire every timer due within `delta`, feeding each back to the gallery
    fn run_for(gallery: &mut PagedGallery, scheduler: &mut ManualScheduler, delta: Duration) -> Vec<GalleryIntent> {
        let target = scheduler.now() + delta;
        let mut intents = Vec::new();
        while let Some(handle) = scheduler.pop_due(target) {
            intents.extend(gallery.on_timer(handle, scheduler));
        }
        scheduler.advance_to(target);
        intents
    }

    #[test]
    fn test_starts_at_first_item() {
        let (gallery, _) = wheel_gallery(3);
        assert_eq!(gallery.current_index(), 0);
        assert_eq!(gallery.current_item().map(|i| i.label.as_str()), Some("item-0"));
        assert!(gallery.is_at_boundary());
    }

    #[test]
    fn test_five_item_scenario_clamps_last_advance() {
        let (mut gallery, mut scheduler) = wheel_gallery(5);
        let mut seen = vec![gallery.current_index()];

        for _ in 0..5 {
            gallery.advance(Direction::Forward, &mut scheduler);
            seen.push(gallery.current_index());
            run_for(&mut gallery, &mut scheduler, ms(601));
        }

        assert_eq!(seen, vec![0, 1, 2, 3, 4, 4]);
    }

    #[test]
    fn test_burst_within_window_moves_once() {
        let (mut gallery, mut scheduler) = wheel_gallery(5);

        let intents = gallery.advance(Direction::Forward, &mut scheduler);
        assert_eq!(intents.as_slice(), &[GalleryIntent::IndexChanged(1)]);

        for _ in 0..20 {
            assert!(gallery.advance(Direction::Forward, &mut scheduler).is_empty());
        }
        assert_eq!(gallery.current_index(), 1);

        run_for(&mut gallery, &mut scheduler, ms(599));
        assert!(gallery.is_throttled());
        run_for(&mut gallery, &mut scheduler, ms(1));
        assert!(!gallery.is_throttled());

        gallery.advance(Direction::Forward, &mut scheduler);
        assert_eq!(gallery.current_index(), 2);
    }

    #[test]
    fn test_backward_at_start_is_clamped() {
        let (mut gallery, mut scheduler) = wheel_gallery(3);
        let intents = gallery.advance(Direction::Backward, &mut scheduler);
        assert!(intents.is_empty());
        assert_eq!(gallery.current_index(), 0);
        // clamped requests still open a throttle window
        assert!(gallery.is_throttled());
    }

    #[test]
    fn test_backward_steps_down() {
        let (mut gallery, mut scheduler) = wheel_gallery(3);
        gallery.advance(Direction::Forward, &mut scheduler);
        run_for(&mut gallery, &mut scheduler, ms(600));
        let intents = gallery.advance(Direction::Backward, &mut scheduler);
        assert_eq!(intents.as_slice(), &[GalleryIntent::IndexChanged(0)]);
    }

    #[test]
    fn test_empty_gallery_is_inert() {
        let (mut gallery, mut scheduler) = wheel_gallery(0);
        assert!(gallery.is_empty());
        assert_eq!(gallery.current_index(), 0);
        assert!(gallery.current_item().is_none());
        assert!(gallery.is_at_boundary());

        assert!(gallery.advance(Direction::Forward, &mut scheduler).is_empty());
        assert!(gallery.set_in_viewport(true, &mut scheduler).is_empty());
        assert!(!gallery.on_wheel(120.0, &mut scheduler).prevent_default);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_capture_follows_viewport_and_boundary() {
        let (mut gallery, mut scheduler) = wheel_gallery(2);

        let intents = gallery.set_in_viewport(true, &mut scheduler);
        assert_eq!(intents.as_slice(), &[GalleryIntent::CaptureScroll(true)]);

        // Repeating the same signal emits nothing
        assert!(gallery.set_in_viewport(true, &mut scheduler).is_empty());

        let outcome = gallery.on_wheel(100.0, &mut scheduler);
        assert!(outcome.prevent_default);
        assert_eq!(
            outcome.intents.as_slice(),
            &[GalleryIntent::IndexChanged(1), GalleryIntent::CaptureScroll(false)]
        );

        // At the last item the page scrolls normally again
        run_for(&mut gallery, &mut scheduler, ms(600));
        let outcome = gallery.on_wheel(100.0, &mut scheduler);
        assert!(!outcome.prevent_default);
        assert!(outcome.intents.is_empty());
    }

    #[test]
    fn test_leaving_viewport_releases_capture() {
        let (mut gallery, mut scheduler) = wheel_gallery(4);
        gallery.set_in_viewport(true, &mut scheduler);
        let intents = gallery.set_in_viewport(false, &mut scheduler);
        assert_eq!(intents.as_slice(), &[GalleryIntent::CaptureScroll(false)]);
        assert!(!gallery.on_wheel(50.0, &mut scheduler).prevent_default);
    }

    #[test]
    fn test_zero_wheel_delta_is_consumed_without_paging() {
        let (mut gallery, mut scheduler) = wheel_gallery(3);
        gallery.set_in_viewport(true, &mut scheduler);
        let outcome = gallery.on_wheel(0.0, &mut scheduler);
        assert!(outcome.prevent_default);
        assert!(outcome.intents.is_empty());
        assert!(!gallery.is_throttled());
    }

    #[test]
    fn test_auto_advance_wraps_while_visible() {
        let (mut gallery, mut scheduler) = auto_gallery(3);
        assert!(gallery.set_in_viewport(true, &mut scheduler).is_empty());

        let intents = run_for(&mut gallery, &mut scheduler, ms(3500 * 3));
        assert_eq!(
            intents,
            vec![
                GalleryIntent::IndexChanged(1),
                GalleryIntent::IndexChanged(2),
                GalleryIntent::IndexChanged(0),
            ]
        );
    }

    #[test]
    fn test_auto_advance_stops_out_of_view() {
        let (mut gallery, mut scheduler) = auto_gallery(3);
        gallery.set_in_viewport(true, &mut scheduler);
        gallery.set_in_viewport(false, &mut scheduler);

        assert!(run_for(&mut gallery, &mut scheduler, ms(20_000)).is_empty());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_tap_pauses_then_resumes() {
        let (mut gallery, mut scheduler) = auto_gallery(4);
        gallery.set_in_viewport(true, &mut scheduler);
        run_for(&mut gallery, &mut scheduler, ms(3500));
        assert_eq!(gallery.current_index(), 1);

        gallery.on_tap(&mut scheduler);
        assert!(gallery.is_paused());
        assert!(run_for(&mut gallery, &mut scheduler, ms(5999)).is_empty());

        // cooldown ends at 6000, next step one interval later
        run_for(&mut gallery, &mut scheduler, ms(1));
        assert!(!gallery.is_paused());
        let intents = run_for(&mut gallery, &mut scheduler, ms(3500));
        assert_eq!(intents, vec![GalleryIntent::IndexChanged(2)]);
    }

    #[test]
    fn test_tap_during_cooldown_restarts_it() {
        let (mut gallery, mut scheduler) = auto_gallery(4);
        gallery.set_in_viewport(true, &mut scheduler);
        gallery.on_tap(&mut scheduler);
        run_for(&mut gallery, &mut scheduler, ms(5000));
        gallery.on_tap(&mut scheduler);
        run_for(&mut gallery, &mut scheduler, ms(5000));
        assert!(gallery.is_paused());
        run_for(&mut gallery, &mut scheduler, ms(1000));
        assert!(!gallery.is_paused());
    }

    #[test]
    fn test_tap_ignored_in_wheel_mode() {
        let (mut gallery, mut scheduler) = wheel_gallery(3);
        gallery.on_tap(&mut scheduler);
        assert!(!gallery.is_paused());
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_auto_mode_never_captures_scroll() {
        let (mut gallery, mut scheduler) = auto_gallery(3);
        assert!(gallery.set_in_viewport(true, &mut scheduler).is_empty());
        assert!(!gallery.on_wheel(100.0, &mut scheduler).prevent_default);
    }

    #[test]
    fn test_device_class_selects_mode() {
        let mut settings = GallerySettings::default();
        settings.device = DeviceClass::Touch;
        assert_eq!(PagedGallery::new(sample_items(2), &settings).mode(), AdvanceMode::Auto);
        settings.device = DeviceClass::Pointer;
        assert_eq!(PagedGallery::new(sample_items(2), &settings).mode(), AdvanceMode::Wheel);
    }

    #[test]
    fn test_teardown_cancels_timers_and_ignores_late_fires() {
        let (mut gallery, mut scheduler) = auto_gallery(3);
        gallery.set_in_viewport(true, &mut scheduler);
        gallery.on_tap(&mut scheduler);
        let pending = scheduler.next_deadline();
        assert!(pending.is_some());

        gallery.teardown(&mut scheduler);
        assert_eq!(scheduler.pending_count(), 0);

        // A handle that slipped through before cancellation must be ignored too
        for raw in 0..8 {
            assert!(gallery.on_timer(TimerHandle::from_raw(raw), &mut scheduler).is_empty());
        }
        assert_eq!(gallery.current_index(), 0);
        assert!(gallery.is_paused());
    }

    #[test]
    fn test_teardown_releases_capture_once() {
        let (mut gallery, mut scheduler) = wheel_gallery(3);
        gallery.set_in_viewport(true, &mut scheduler);
        gallery.advance(Direction::Forward, &mut scheduler);

        let intents = gallery.teardown(&mut scheduler);
        assert_eq!(intents.as_slice(), &[GalleryIntent::CaptureScroll(false)]);
        assert!(gallery.teardown(&mut scheduler).is_empty());
        assert!(gallery.is_torn_down());
        assert!(gallery.advance(Direction::Forward, &mut scheduler).is_empty());
        assert_eq!(gallery.current_index(), 1);
    }

    #[test]
    fn test_direction_from_wheel_delta() {
        assert_eq!(Direction::from_wheel_delta(3.0), Some(Direction::Forward));
        assert_eq!(Direction::from_wheel_delta(-0.5), Some(Direction::Backward));
        assert_eq!(Direction::from_wheel_delta(0.0), None);
        assert_eq!(Direction::from_wheel_delta(f64::NAN), None);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any burst inside one throttle window moves the index by at most one
            #[test]
            fn burst_moves_at_most_one(
                len in 1usize..10,
                start_steps in 0usize..10,
                burst in prop::collection::vec(any::<bool>(), 1..50),
            ) {
                let (mut gallery, mut scheduler) = wheel_gallery(len);
                for _ in 0..start_steps {
                    gallery.advance(Direction::Forward, &mut scheduler);
                    run_for(&mut gallery, &mut scheduler, ms(600));
                }

                let before = gallery.current_index();
                for forward in burst {
                    let direction = if forward { Direction::Forward } else { Direction::Backward };
                    gallery.advance(direction, &mut scheduler);
                    run_for(&mut gallery, &mut scheduler, ms(10));
                }
                prop_assert!(gallery.current_index().abs_diff(before) <= 1);
            }

            /// Property: the index always stays in range
            #[test]
            fn index_stays_in_range(
                len in 1usize..8,
                moves in prop::collection::vec((any::<bool>(), 0u64..1500), 0..60),
            ) {
                let (mut gallery, mut scheduler) = wheel_gallery(len);
                for (forward, gap) in moves {
                    let direction = if forward { Direction::Forward } else { Direction::Backward };
                    gallery.advance(direction, &mut scheduler);
                    run_for(&mut gallery, &mut scheduler, ms(gap));
                    prop_assert!(gallery.current_index() < len);
                }
            }
        }
    }
}
