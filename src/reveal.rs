//! One-shot "scrolled into view" latch for section entrance animations.

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RevealError {
    #[error("reveal threshold {0} is outside (0, 1]")]
    ThresholdOutOfRange(f64),
}

/// Fraction of the element that must overlap the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub const FULL: Self = Self(1.0);

    pub fn new(value: f64) -> Result<Self, RevealError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(RevealError::ThresholdOutOfRange(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(0.1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Unobserved,
    Observing,
    Revealed,
}

#[derive(Debug)]
pub struct RevealLatch {
    threshold: Threshold,
    phase: RevealPhase,
}

impl RevealLatch {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            phase: RevealPhase::Unobserved,
        }
    }

    pub fn observe(&mut self) {
        if self.phase == RevealPhase::Unobserved {
            self.phase = RevealPhase::Observing;
        }
    }

    /// Returns `true` only for the ratio that flips the latch.
    pub fn record(&mut self, ratio: f64) -> bool {
        if self.phase != RevealPhase::Observing || ratio < self.threshold.get() {
            return false;
        }

        self.phase = RevealPhase::Revealed;
        true
    }

    /// Teardown from any phase. The revealed flag is discarded; callers that
    /// render keep their own copy.
    pub fn detach(&mut self) {
        self.phase = RevealPhase::Unobserved;
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn visible(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }
}

/// Push-based viewport intersection. Dropping a registration deregisters it.
pub trait ViewportObserver {
    type Target: ?Sized;
    type Registration;

    /// `None` when the observation could not be started; callers treat that
    /// as "never fires".
    fn observe(
        &self,
        target: &Self::Target,
        threshold: Threshold,
        on_ratio: Box<dyn FnMut(f64)>,
    ) -> Option<Self::Registration>;
}

pub struct RevealController<O: ViewportObserver> {
    latch: Rc<RefCell<RevealLatch>>,
    registration: Option<O::Registration>,
}

impl<O: ViewportObserver> RevealController<O> {
    /// A `None` target (element not attached yet, or removed before mount
    /// completed) is a silent no-op.
    pub fn mount<F>(observer: &O, target: Option<&O::Target>, threshold: Threshold, on_reveal: F) -> Self
    where
        F: Fn(f64) + 'static,
    {
        let latch = Rc::new(RefCell::new(RevealLatch::new(threshold)));

        let registration = target.and_then(|target| {
            latch.borrow_mut().observe();
            let callback_latch = Rc::clone(&latch);
            observer.observe(
                target,
                threshold,
                Box::new(move |ratio| {
                    let fired = callback_latch.borrow_mut().record(ratio);
                    if fired {
                        on_reveal(ratio);
                    }
                }),
            )
        });

        if registration.is_none() {
            latch.borrow_mut().detach();
        }

        Self {
            latch,
            registration,
        }
    }

    pub fn visible(&self) -> bool {
        self.latch.borrow().visible()
    }

    pub fn phase(&self) -> RevealPhase {
        self.latch.borrow().phase()
    }

    pub fn is_registered(&self) -> bool {
        self.registration.is_some()
    }

    pub fn unmount(&mut self) {
        self.registration.take();
        self.latch.borrow_mut().detach();
    }
}

impl<O: ViewportObserver> Drop for RevealController<O> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offset {
    /// Starts below its resting place and rises.
    Rise(u32),
    /// Starts left of its resting place and slides right.
    Slide(u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    pub offset: Offset,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Motion {
    pub fn rise(duration_ms: u32) -> Self {
        Self {
            offset: Offset::Rise(20),
            duration_ms,
            delay_ms: 0,
        }
    }

    pub fn slide(duration_ms: u32) -> Self {
        Self {
            offset: Offset::Slide(20),
            duration_ms,
            delay_ms: 0,
        }
    }

    pub fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    /// Same end states, no transition.
    pub fn instant(self) -> Self {
        Self {
            duration_ms: 0,
            delay_ms: 0,
            ..self
        }
    }
}

pub fn stagger_delay_ms(index: usize, step_ms: u32, base_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

pub fn reveal_style(visible: bool, motion: Motion) -> String {
    let (transform, opacity) = match (visible, motion.offset) {
        (true, Offset::Rise(_)) => ("translateY(0)".to_string(), 1),
        (true, Offset::Slide(_)) => ("translateX(0)".to_string(), 1),
        (false, Offset::Rise(px)) => (format!("translateY({px}px)"), 0),
        (false, Offset::Slide(px)) => (format!("translateX(-{px}px)"), 0),
    };

    format!(
        "transform: {transform}; opacity: {opacity}; transition: transform {duration}ms ease-out, opacity {duration}ms ease-out; transition-delay: {delay}ms;",
        duration = motion.duration_ms,
        delay = motion.delay_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    struct Slot {
        callback: Box<dyn FnMut(f64)>,
        active: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct FakeObserver {
        slots: Rc<RefCell<Vec<Slot>>>,
        refuse: bool,
    }

    struct FakeRegistration {
        active: Rc<Cell<bool>>,
    }

    impl Drop for FakeRegistration {
        fn drop(&mut self) {
            self.active.set(false);
        }
    }

    impl FakeObserver {
        fn fire(&self, ratio: f64) {
            for slot in self.slots.borrow_mut().iter_mut() {
                if slot.active.get() {
                    (slot.callback)(ratio);
                }
            }
        }

        /// Delivers to every callback ever registered, as a host that queued
        /// an entry before teardown might.
        fn fire_late(&self, ratio: f64) {
            for slot in self.slots.borrow_mut().iter_mut() {
                (slot.callback)(ratio);
            }
        }

        fn active_count(&self) -> usize {
            self.slots
                .borrow()
                .iter()
                .filter(|slot| slot.active.get())
                .count()
        }
    }

    impl ViewportObserver for FakeObserver {
        type Target = str;
        type Registration = FakeRegistration;

        fn observe(
            &self,
            _target: &str,
            _threshold: Threshold,
            on_ratio: Box<dyn FnMut(f64)>,
        ) -> Option<FakeRegistration> {
            if self.refuse {
                return None;
            }

            let active = Rc::new(Cell::new(true));
            self.slots.borrow_mut().push(Slot {
                callback: on_ratio,
                active: Rc::clone(&active),
            });
            Some(FakeRegistration { active })
        }
    }

    fn counting_reveal() -> (Rc<Cell<u32>>, impl Fn(f64) + 'static) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, move |_| handle.set(handle.get() + 1))
    }

    #[test]
    fn threshold_rejects_zero_negative_and_above_one() {
        assert!(Threshold::new(0.0).is_err());
        assert!(Threshold::new(-0.5).is_err());
        assert!(Threshold::new(1.01).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
        assert_eq!(Threshold::new(1.0), Ok(Threshold::FULL));
    }

    #[test]
    fn latch_is_monotonic_once_threshold_is_met() {
        let mut latch = RevealLatch::new(Threshold::default());
        latch.observe();

        let fired: Vec<bool> = [0.0, 0.05, 0.1, 0.0, 0.9, 0.0]
            .into_iter()
            .map(|ratio| latch.record(ratio))
            .collect();

        assert_eq!(fired, vec![false, false, true, false, false, false]);
        assert!(latch.visible());
    }

    #[test]
    fn full_threshold_needs_complete_overlap() {
        let mut latch = RevealLatch::new(Threshold::FULL);
        latch.observe();

        let fired: Vec<bool> = [0.5, 0.999, 1.0, 0.0, 1.0]
            .into_iter()
            .map(|ratio| latch.record(ratio))
            .collect();

        assert_eq!(fired, vec![false, false, true, false, false]);
        assert!(latch.visible());
    }

    #[test]
    fn mid_threshold_fires_once_at_the_boundary() {
        let mut latch = RevealLatch::new(Threshold::new(0.5).unwrap());
        latch.observe();

        let fired: Vec<bool> = [0.1, 0.49, 0.5, 0.2, 0.8]
            .into_iter()
            .map(|ratio| latch.record(ratio))
            .collect();

        assert_eq!(fired, vec![false, false, true, false, false]);
        assert_eq!(latch.phase(), RevealPhase::Revealed);
    }

    #[test]
    fn detach_resets_a_revealed_latch() {
        let mut latch = RevealLatch::new(Threshold::default());
        latch.observe();
        assert!(latch.record(0.5));

        latch.detach();

        assert_eq!(latch.phase(), RevealPhase::Unobserved);
        assert!(!latch.record(1.0));
    }

    #[test]
    fn unobserved_latch_ignores_ratios() {
        let mut latch = RevealLatch::new(Threshold::default());

        assert!(!latch.record(1.0));
        assert_eq!(latch.phase(), RevealPhase::Unobserved);
    }

    #[test]
    fn controller_fires_once_on_first_qualifying_ratio() {
        let observer = FakeObserver::default();
        let (count, on_reveal) = counting_reveal();
        let controller = RevealController::mount(&observer, Some("skills"), Threshold::default(), on_reveal);

        assert_eq!(controller.phase(), RevealPhase::Observing);
        observer.fire(0.02);
        assert!(!controller.visible());

        observer.fire(0.4);
        observer.fire(0.0);
        observer.fire(1.0);

        assert!(controller.visible());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unmount_before_reveal_blocks_late_callbacks() {
        let observer = FakeObserver::default();
        let (count, on_reveal) = counting_reveal();
        let mut controller = RevealController::mount(&observer, Some("projects"), Threshold::default(), on_reveal);

        controller.unmount();
        observer.fire_late(1.0);

        assert!(!controller.visible());
        assert_eq!(controller.phase(), RevealPhase::Unobserved);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unmount_after_reveal_discards_the_flag() {
        let observer = FakeObserver::default();
        let (count, on_reveal) = counting_reveal();
        let mut controller = RevealController::mount(&observer, Some("hero"), Threshold::default(), on_reveal);

        observer.fire(0.5);
        controller.unmount();
        observer.fire_late(1.0);

        assert!(!controller.visible());
        assert_eq!(controller.phase(), RevealPhase::Unobserved);
        assert_eq!(observer.active_count(), 0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let observer = FakeObserver::default();
        let (count, on_reveal) = counting_reveal();
        let controller = RevealController::mount(&observer, None, Threshold::default(), on_reveal);

        observer.fire(1.0);

        assert!(!controller.is_registered());
        assert_eq!(observer.active_count(), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn refused_observation_never_fires() {
        let observer = FakeObserver {
            refuse: true,
            ..FakeObserver::default()
        };
        let (count, on_reveal) = counting_reveal();
        let controller = RevealController::mount(&observer, Some("hero"), Threshold::default(), on_reveal);

        assert_eq!(controller.phase(), RevealPhase::Unobserved);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn rapid_remounts_do_not_accumulate_registrations() {
        let observer = FakeObserver::default();

        for _ in 0..10 {
            let (_count, on_reveal) = counting_reveal();
            let controller = RevealController::mount(&observer, Some("education"), Threshold::default(), on_reveal);
            assert_eq!(observer.active_count(), 1);
            drop(controller);
        }

        assert_eq!(observer.active_count(), 0);
    }

    #[test]
    fn unmount_is_idempotent() {
        let observer = FakeObserver::default();
        let (_count, on_reveal) = counting_reveal();
        let mut controller = RevealController::mount(&observer, Some("experience"), Threshold::default(), on_reveal);

        controller.unmount();
        controller.unmount();

        assert_eq!(observer.active_count(), 0);
        assert!(!controller.is_registered());
    }

    #[test]
    fn stagger_delay_grows_by_step() {
        let delays: Vec<u32> = (0..4).map(|index| stagger_delay_ms(index, 50, 500)).collect();

        assert_eq!(delays, vec![500, 550, 600, 650]);
        assert_eq!(stagger_delay_ms(usize::MAX, 200, 0), u32::MAX);
    }

    #[test]
    fn hidden_and_shown_styles_differ_only_in_end_state() {
        let motion = Motion::rise(700).delayed(400);

        assert_eq!(
            reveal_style(false, motion),
            "transform: translateY(20px); opacity: 0; transition: transform 700ms ease-out, opacity 700ms ease-out; transition-delay: 400ms;"
        );
        assert_eq!(
            reveal_style(true, motion),
            "transform: translateY(0); opacity: 1; transition: transform 700ms ease-out, opacity 700ms ease-out; transition-delay: 400ms;"
        );
    }

    #[test]
    fn instant_motion_drops_duration_and_delay() {
        let style = reveal_style(true, Motion::slide(500).delayed(300).instant());

        assert_eq!(
            style,
            "transform: translateX(0); opacity: 1; transition: transform 0ms ease-out, opacity 0ms ease-out; transition-delay: 0ms;"
        );
    }
}
