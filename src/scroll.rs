use crate::runtime::Subscription;
use std::{cell::Cell, rc::Rc};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Percentage of the scrollable range consumed, in `[0, 100]`. Zero when
/// the document does not scroll.
pub fn scroll_percent(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable.is_nan() || scrollable <= 0.0 {
        return 0.0;
    }

    let percent = metrics.scroll_y / scrollable * 100.0;
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

pub trait ScrollSource {
    fn on_scroll(&self, listener: Box<dyn Fn(ScrollMetrics)>) -> Subscription;
}

pub struct ScrollProgressMeter {
    percent: Rc<Cell<f64>>,
    _subscription: Subscription,
}

impl ScrollProgressMeter {
    pub fn attach<S>(source: &S, notify: impl Fn(f64) + 'static) -> Self
    where
        S: ScrollSource + ?Sized,
    {
        let percent = Rc::new(Cell::new(0.0));
        let latest = Rc::clone(&percent);
        let subscription = source.on_scroll(Box::new(move |metrics| {
            let next = scroll_percent(metrics);
            latest.set(next);
            notify(next);
        }));

        Self {
            percent,
            _subscription: subscription,
        }
    }

    pub fn percent(&self) -> f64 {
        self.percent.get()
    }
}
