use crate::runtime::{Scheduler, Subscription};
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

pub const DEFAULT_SPEED_MS: u32 = 50;
pub const DEFAULT_START_DELAY_MS: u32 = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterOptions {
    pub text: String,
    pub speed_ms: u32,
    pub start_delay_ms: u32,
}

impl TypewriterOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speed_ms: DEFAULT_SPEED_MS,
            start_delay_ms: DEFAULT_START_DELAY_MS,
        }
    }

    pub fn speed(mut self, speed_ms: u32) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn start_delay(mut self, start_delay_ms: u32) -> Self {
        self.start_delay_ms = start_delay_ms;
        self
    }
}

type Listener = Rc<dyn Fn(&str)>;

struct TypewriterState {
    target: String,
    revealed: usize,
    total: usize,
    speed_ms: u32,
    generation: u64,
    timer: Option<Subscription>,
    listener: Option<Listener>,
}

impl TypewriterState {
    fn displayed(&self) -> &str {
        match self.target.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.target[..end],
            None => &self.target,
        }
    }

    fn is_complete(&self) -> bool {
        self.revealed >= self.total
    }
}

/// Starts empty, waits `start_delay_ms`, then appends one character every
/// `speed_ms` until the whole text is shown. Dropping it stops the effect.
pub struct Typewriter {
    state: Rc<RefCell<TypewriterState>>,
    scheduler: Rc<dyn Scheduler>,
}

impl Typewriter {
    pub fn start(scheduler: Rc<dyn Scheduler>, options: TypewriterOptions) -> Self {
        let state = Rc::new(RefCell::new(TypewriterState {
            target: String::new(),
            revealed: 0,
            total: 0,
            speed_ms: 1,
            generation: 0,
            timer: None,
            listener: None,
        }));

        let typewriter = Self { state, scheduler };
        typewriter.restart(options);
        typewriter
    }

    pub fn on_change(&self, listener: impl Fn(&str) + 'static) {
        self.state.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn displayed(&self) -> String {
        self.state.borrow().displayed().to_string()
    }

    pub fn is_complete(&self) -> bool {
        self.state.borrow().is_complete()
    }

    pub fn restart(&self, options: TypewriterOptions) {
        let (stale_timer, generation) = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.total = options.text.chars().count();
            state.target = options.text;
            state.revealed = 0;
            state.speed_ms = options.speed_ms.max(1);
            (state.timer.take(), state.generation)
        };
        drop(stale_timer);

        publish(&self.state, generation);
        if is_current(&self.state, generation) {
            arm(&self.state, &self.scheduler, generation, options.start_delay_ms, begin);
        }
    }
}

impl Drop for Typewriter {
    fn drop(&mut self) {
        let timer = {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
            state.timer.take()
        };
        drop(timer);
    }
}

type Step = fn(&Rc<RefCell<TypewriterState>>, &Rc<dyn Scheduler>, u64);

fn arm(
    state: &Rc<RefCell<TypewriterState>>,
    scheduler: &Rc<dyn Scheduler>,
    generation: u64,
    delay_ms: u32,
    step: Step,
) {
    let weak_state: Weak<RefCell<TypewriterState>> = Rc::downgrade(state);
    let weak_scheduler: Weak<dyn Scheduler> = Rc::downgrade(scheduler);

    let timer = scheduler.after(
        delay_ms,
        Box::new(move || {
            let (Some(state), Some(scheduler)) = (weak_state.upgrade(), weak_scheduler.upgrade())
            else {
                return;
            };
            if is_current(&state, generation) {
                step(&state, &scheduler, generation);
            }
        }),
    );

    let replaced = state.borrow_mut().timer.replace(timer);
    drop(replaced);
}

fn begin(state: &Rc<RefCell<TypewriterState>>, scheduler: &Rc<dyn Scheduler>, generation: u64) {
    let (complete, speed_ms) = {
        let state = state.borrow();
        (state.is_complete(), state.speed_ms)
    };

    if !complete {
        arm(state, scheduler, generation, speed_ms, tick);
    }
}

fn tick(state: &Rc<RefCell<TypewriterState>>, scheduler: &Rc<dyn Scheduler>, generation: u64) {
    let (complete, speed_ms) = {
        let mut state = state.borrow_mut();
        if !state.is_complete() {
            state.revealed += 1;
        }
        (state.is_complete(), state.speed_ms)
    };

    publish(state, generation);

    if !complete && is_current(state, generation) {
        arm(state, scheduler, generation, speed_ms, tick);
    }
}

fn is_current(state: &Rc<RefCell<TypewriterState>>, generation: u64) -> bool {
    state.borrow().generation == generation
}

fn publish(state: &Rc<RefCell<TypewriterState>>, generation: u64) {
    let (listener, text) = {
        let state = state.borrow();
        if state.generation != generation {
            return;
        }
        (state.listener.clone(), state.displayed().to_string())
    };

    if let Some(listener) = listener {
        listener(&text);
    }
}
