use crate::runtime::{Scheduler, Subscription};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

pub const COUNTER_STEPS: u32 = 50;

pub fn count_step(target: u32) -> u32 {
    target.div_ceil(COUNTER_STEPS).max(1)
}

pub fn next_count(current: u32, target: u32) -> u32 {
    current.saturating_add(count_step(target)).min(target)
}

struct CountState {
    value: u32,
    target: u32,
    tick_ms: u32,
    timer: Option<Subscription>,
    listener: Option<Rc<dyn Fn(u32)>>,
}

pub struct CountUp {
    state: Rc<RefCell<CountState>>,
    // Ticks only hold a weak handle to the scheduler.
    _scheduler: Rc<dyn Scheduler>,
}

impl CountUp {
    pub fn start(scheduler: Rc<dyn Scheduler>, target: u32, tick_ms: u32) -> Self {
        let state = Rc::new(RefCell::new(CountState {
            value: 0,
            target,
            tick_ms: tick_ms.max(1),
            timer: None,
            listener: None,
        }));

        if target > 0 {
            schedule_tick(&state, &scheduler);
        }

        Self {
            state,
            _scheduler: scheduler,
        }
    }

    pub fn on_change(&self, listener: impl Fn(u32) + 'static) {
        self.state.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn value(&self) -> u32 {
        self.state.borrow().value
    }

    pub fn is_complete(&self) -> bool {
        let state = self.state.borrow();
        state.value >= state.target
    }
}

impl Drop for CountUp {
    fn drop(&mut self) {
        let timer = self.state.borrow_mut().timer.take();
        drop(timer);
    }
}

fn schedule_tick(state: &Rc<RefCell<CountState>>, scheduler: &Rc<dyn Scheduler>) {
    let weak_state: Weak<RefCell<CountState>> = Rc::downgrade(state);
    let weak_scheduler: Weak<dyn Scheduler> = Rc::downgrade(scheduler);
    let tick_ms = state.borrow().tick_ms;

    let timer = scheduler.after(
        tick_ms,
        Box::new(move || {
            let (Some(state), Some(scheduler)) = (weak_state.upgrade(), weak_scheduler.upgrade())
            else {
                return;
            };

            let (value, complete, listener) = {
                let mut state = state.borrow_mut();
                state.value = next_count(state.value, state.target);
                (state.value, state.value >= state.target, state.listener.clone())
            };

            if let Some(listener) = listener {
                listener(value);
            }
            if !complete {
                schedule_tick(&state, &scheduler);
            }
        }),
    );

    let replaced = state.borrow_mut().timer.replace(timer);
    drop(replaced);
}
