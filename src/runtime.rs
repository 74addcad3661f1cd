use chrono::{DateTime, Utc};

/// Guard for a timer, event listener or observer registration.
///
/// Dropping the guard cancels the registration, so a component that owns its
/// subscriptions cannot receive callbacks after it has been torn down.
#[must_use = "dropping a Subscription cancels it immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

pub trait Scheduler {
    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Subscription;
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub(crate) use self::testing::{ManualEmitter, VirtualScheduler};

#[cfg(test)]
mod testing {
    use super::{Clock, Scheduler, Subscription};
    use chrono::{DateTime, Utc};
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        rc::{Rc, Weak},
    };

    const VIRTUAL_EPOCH_MS: i64 = 1_704_067_200_000;

    type TimerKey = (u64, u64);

    #[derive(Default)]
    struct VirtualTimers {
        now_ms: u64,
        next_id: u64,
        pending: BTreeMap<TimerKey, Box<dyn FnOnce()>>,
    }

    /// Deterministic scheduler: time only moves when `advance` is called.
    /// Timers due at the same instant fire in registration order.
    #[derive(Clone, Default)]
    pub(crate) struct VirtualScheduler {
        timers: Rc<RefCell<VirtualTimers>>,
    }

    impl VirtualScheduler {
        pub(crate) fn advance(&self, ms: u64) {
            let target = self.timers.borrow().now_ms + ms;

            loop {
                let next = {
                    let mut timers = self.timers.borrow_mut();
                    let due = timers
                        .pending
                        .keys()
                        .next()
                        .copied()
                        .filter(|(due_at, _)| *due_at <= target);

                    match due {
                        Some(key) => {
                            timers.now_ms = key.0;
                            timers.pending.remove(&key)
                        }
                        None => None,
                    }
                };

                match next {
                    Some(callback) => callback(),
                    None => break,
                }
            }

            self.timers.borrow_mut().now_ms = target;
        }

        pub(crate) fn now_ms(&self) -> u64 {
            self.timers.borrow().now_ms
        }

        pub(crate) fn pending(&self) -> usize {
            self.timers.borrow().pending.len()
        }
    }

    impl Scheduler for VirtualScheduler {
        fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Subscription {
            let key = {
                let mut timers = self.timers.borrow_mut();
                let key = (timers.now_ms + u64::from(delay_ms), timers.next_id);
                timers.next_id += 1;
                timers.pending.insert(key, callback);
                key
            };

            let timers: Weak<RefCell<VirtualTimers>> = Rc::downgrade(&self.timers);
            Subscription::new(move || {
                if let Some(timers) = timers.upgrade() {
                    let removed = timers.borrow_mut().pending.remove(&key);
                    drop(removed);
                }
            })
        }
    }

    impl Clock for VirtualScheduler {
        fn now(&self) -> DateTime<Utc> {
            let offset = i64::try_from(self.now_ms()).unwrap_or(i64::MAX);
            DateTime::from_timestamp_millis(VIRTUAL_EPOCH_MS.saturating_add(offset))
                .unwrap_or_default()
        }
    }

    type Listener<T> = Rc<dyn Fn(T)>;

    pub(crate) struct ManualEmitter<T> {
        listeners: Rc<RefCell<Vec<(u64, Listener<T>)>>>,
        next_id: RefCell<u64>,
    }

    impl<T> Default for ManualEmitter<T> {
        fn default() -> Self {
            Self {
                listeners: Rc::new(RefCell::new(Vec::new())),
                next_id: RefCell::new(0),
            }
        }
    }

    impl<T: Clone + 'static> ManualEmitter<T> {
        pub(crate) fn listen(&self, listener: Box<dyn Fn(T)>) -> Subscription {
            let id = {
                let mut next_id = self.next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            self.listeners.borrow_mut().push((id, Rc::from(listener)));

            let listeners = Rc::downgrade(&self.listeners);
            Subscription::new(move || {
                if let Some(listeners) = listeners.upgrade() {
                    listeners.borrow_mut().retain(|(entry_id, _)| *entry_id != id);
                }
            })
        }

        pub(crate) fn emit(&self, value: T) {
            let snapshot: Vec<Listener<T>> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();

            for listener in snapshot {
                listener(value.clone());
            }
        }

        pub(crate) fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }
}
