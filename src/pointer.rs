use crate::runtime::Subscription;
use std::{cell::Cell, rc::Rc};

pub const GLOW_CORE_RADIUS: f64 = 16.0;
pub const GLOW_RING_RADIUS: f64 = 32.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn centered(self, radius: f64) -> (f64, f64) {
        (self.x - radius, self.y - radius)
    }
}

pub trait PointerSource {
    fn on_pointer_move(&self, listener: Box<dyn Fn(PointerPosition)>) -> Subscription;
}

pub struct PointerTracker {
    position: Rc<Cell<PointerPosition>>,
    _subscription: Subscription,
}

impl PointerTracker {
    pub fn attach<S>(source: &S, notify: impl Fn(PointerPosition) + 'static) -> Self
    where
        S: PointerSource + ?Sized,
    {
        let position = Rc::new(Cell::new(PointerPosition::default()));
        let latest = Rc::clone(&position);
        let subscription = source.on_pointer_move(Box::new(move |next| {
            latest.set(next);
            notify(next);
        }));

        Self {
            position,
            _subscription: subscription,
        }
    }

    pub fn position(&self) -> PointerPosition {
        self.position.get()
    }
}
