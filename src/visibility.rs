use crate::runtime::Subscription;
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px";

/// Built through `Default` and the builders, which clamp the threshold and
/// replace a blank root margin.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub(crate) threshold: f64,
    pub(crate) root_margin: String,
    pub(crate) trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            trigger_once: false,
        }
    }
}

impl VisibilityOptions {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    pub fn root_margin(mut self, root_margin: impl Into<String>) -> Self {
        let root_margin = root_margin.into();
        self.root_margin = if root_margin.trim().is_empty() {
            DEFAULT_ROOT_MARGIN.to_string()
        } else {
            root_margin
        };
        self
    }

    pub fn trigger_once(mut self, trigger_once: bool) -> Self {
        self.trigger_once = trigger_once;
        self
    }
}

pub trait IntersectionSource {
    type Region;

    fn attach(
        &self,
        region: &Self::Region,
        options: &VisibilityOptions,
        on_change: Box<dyn Fn(bool)>,
    ) -> Subscription;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityTrigger {
    trigger_once: bool,
    visible: bool,
}

impl VisibilityTrigger {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Applies one observation; returns whether the exposed value changed.
    /// With `trigger_once` the value never falls back to `false`.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        let next = intersecting || (self.trigger_once && self.visible);
        let changed = next != self.visible;
        self.visible = next;
        changed
    }
}

pub struct VisibilityWatch {
    trigger: Rc<RefCell<VisibilityTrigger>>,
    _subscription: Subscription,
}

impl VisibilityWatch {
    pub fn attach<S>(
        source: &S,
        region: &S::Region,
        options: &VisibilityOptions,
        notify: impl Fn(bool) + 'static,
    ) -> Self
    where
        S: IntersectionSource,
    {
        let trigger = Rc::new(RefCell::new(VisibilityTrigger::new(options.trigger_once)));
        let observed: Weak<RefCell<VisibilityTrigger>> = Rc::downgrade(&trigger);

        let subscription = source.attach(
            region,
            options,
            Box::new(move |intersecting| {
                let Some(trigger) = observed.upgrade() else {
                    return;
                };
                let (changed, visible) = {
                    let mut trigger = trigger.borrow_mut();
                    (trigger.observe(intersecting), trigger.is_visible())
                };
                if changed {
                    notify(visible);
                }
            }),
        );

        Self {
            trigger,
            _subscription: subscription,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.trigger.borrow().is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ManualEmitter;

    impl IntersectionSource for ManualEmitter<bool> {
        type Region = ();

        fn attach(
            &self,
            _region: &(),
            _options: &VisibilityOptions,
            on_change: Box<dyn Fn(bool)>,
        ) -> Subscription {
            self.listen(on_change)
        }
    }

    fn watch(
        source: &ManualEmitter<bool>,
        options: VisibilityOptions,
    ) -> (VisibilityWatch, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let watch = VisibilityWatch::attach(source, &(), &options, move |visible| {
            sink.borrow_mut().push(visible)
        });
        (watch, seen)
    }

    #[test]
    fn defaults_match_reference_options() {
        let options = VisibilityOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin, "0px");
        assert!(!options.trigger_once);
    }

    #[test]
    fn option_builders_sanitize_input() {
        let options = VisibilityOptions::default()
            .threshold(1.5)
            .root_margin("  ");
        assert_eq!(options.threshold, 1.0);
        assert_eq!(options.root_margin, "0px");

        let options = VisibilityOptions::default().threshold(f64::NAN);
        assert_eq!(options.threshold, DEFAULT_THRESHOLD);
        assert_eq!(VisibilityOptions::default().threshold(-2.0).threshold, 0.0);
    }

    #[derive(Default)]
    struct RecordingSource {
        seen: RefCell<Vec<VisibilityOptions>>,
    }

    impl IntersectionSource for RecordingSource {
        type Region = ();

        fn attach(
            &self,
            _region: &(),
            options: &VisibilityOptions,
            _on_change: Box<dyn Fn(bool)>,
        ) -> Subscription {
            self.seen.borrow_mut().push(options.clone());
            Subscription::new(|| ())
        }
    }

    #[test]
    fn observer_receives_sanitized_options() {
        let source = RecordingSource::default();
        let options = VisibilityOptions::default()
            .threshold(-0.5)
            .root_margin("")
            .trigger_once(true);

        let _watch = VisibilityWatch::attach(&source, &(), &options, |_| {});

        let seen = source.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].threshold, 0.0);
        assert_eq!(seen[0].root_margin, DEFAULT_ROOT_MARGIN);
        assert!(seen[0].trigger_once);
    }

    #[test]
    fn follows_intersection_when_not_triggering_once() {
        let source = ManualEmitter::default();
        let (watch, seen) = watch(&source, VisibilityOptions::default());

        assert!(!watch.is_visible());
        source.emit(true);
        assert!(watch.is_visible());
        source.emit(false);
        assert!(!watch.is_visible());

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn trigger_once_latches_after_first_intersection() {
        let source = ManualEmitter::default();
        let (watch, seen) = watch(&source, VisibilityOptions::default().trigger_once(true));

        source.emit(false);
        assert!(!watch.is_visible());
        source.emit(true);
        source.emit(false);
        source.emit(false);

        assert!(watch.is_visible());
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn repeated_notifications_do_not_renotify() {
        let source = ManualEmitter::default();
        let (_watch, seen) = watch(&source, VisibilityOptions::default());

        source.emit(true);
        source.emit(true);
        source.emit(false);
        source.emit(false);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn dropping_the_watch_detaches_the_observer() {
        let source = ManualEmitter::default();
        let (watch, seen) = watch(&source, VisibilityOptions::default());
        assert_eq!(source.listener_count(), 1);

        drop(watch);
        assert_eq!(source.listener_count(), 0);
        source.emit(true);
        assert!(seen.borrow().is_empty());
    }
}
