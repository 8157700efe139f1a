use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};

use super::viewport::{ScrollListener, Subscription, ViewportSource};

/// Visual mode of the top navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    Translucent,
    Elevated,
}

impl NavMode {
    pub fn for_scroll(past_threshold: bool) -> Self {
        if past_threshold {
            NavMode::Elevated
        } else {
            NavMode::Translucent
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            NavMode::Translucent => "nav-translucent",
            NavMode::Elevated => "nav-elevated",
        }
    }
}

pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks whether the page is scrolled past a threshold and publishes the
/// flag only when it flips. Dropping the monitor detaches its listener.
pub struct ScrollMonitor {
    past: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl ScrollMonitor {
    pub fn attach<S: ViewportSource>(
        source: &S,
        threshold: f64,
        notify: impl Fn(bool) + 'static,
    ) -> Self {
        let past = Rc::new(Cell::new(false));
        let listener: ScrollListener = {
            let past = past.clone();
            Rc::new(move |offset| {
                let now = is_past_threshold(offset, threshold);
                if past.replace(now) != now {
                    debug!("scroll offset {offset} crossed threshold {threshold}: past={now}");
                    notify(now);
                }
            })
        };

        // Initial check, the page may be restored mid-scroll
        listener(source.scroll_offset());

        let subscription = match source.on_scroll(listener) {
            Ok(subscription) => Some(subscription),
            Err(err) => {
                warn!("scroll monitor inactive: {err}");
                None
            }
        };

        Self { past, subscription }
    }

    pub fn past_threshold(&self) -> bool {
        self.past.get()
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn detach(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::mock::MockViewport;
    use proptest::prelude::*;
    use std::cell::RefCell;

    fn recording_monitor(viewport: &MockViewport) -> (ScrollMonitor, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let monitor = {
            let seen = seen.clone();
            ScrollMonitor::attach(viewport, 50.0, move |past| seen.borrow_mut().push(past))
        };
        (monitor, seen)
    }

    #[test]
    fn starts_translucent_at_top() {
        let viewport = MockViewport::new(800.0);
        let (monitor, seen) = recording_monitor(&viewport);
        assert!(monitor.is_attached());
        assert!(!monitor.past_threshold());
        assert!(seen.borrow().is_empty());
        assert_eq!(NavMode::for_scroll(monitor.past_threshold()), NavMode::Translucent);
    }

    #[test]
    fn exactly_fifty_is_not_past() {
        assert!(!is_past_threshold(50.0, 50.0));
        assert!(is_past_threshold(50.5, 50.0));
    }

    #[test]
    fn publishes_once_per_crossing() {
        let viewport = MockViewport::new(800.0);
        let (monitor, seen) = recording_monitor(&viewport);

        for offset in [10.0, 49.0, 51.0, 120.0, 400.0, 30.0, 0.0, 60.0] {
            viewport.scroll_to(offset);
        }

        assert_eq!(*seen.borrow(), vec![true, false, true]);
        assert!(monitor.past_threshold());
    }

    #[test]
    fn initial_offset_past_threshold_is_published_on_attach() {
        let viewport = MockViewport::new(800.0);
        viewport.scroll_to(300.0);
        let (monitor, seen) = recording_monitor(&viewport);
        assert!(monitor.past_threshold());
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn detach_removes_listener() {
        let viewport = MockViewport::new(800.0);
        let (monitor, seen) = recording_monitor(&viewport);
        assert_eq!(viewport.scroll_listener_count(), 1);

        monitor.detach();
        assert_eq!(viewport.scroll_listener_count(), 0);

        viewport.scroll_to(500.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn drop_removes_listener() {
        let viewport = MockViewport::new(800.0);
        {
            let (_monitor, _seen) = recording_monitor(&viewport);
            assert_eq!(viewport.scroll_listener_count(), 1);
        }
        assert_eq!(viewport.scroll_listener_count(), 0);
        viewport.scroll_to(500.0);
    }

    proptest! {
        #[test]
        fn flag_matches_offset(offsets in prop::collection::vec(0.0f64..2000.0, 1..64)) {
            let viewport = MockViewport::new(800.0);
            let (monitor, seen) = recording_monitor(&viewport);

            let mut expected = Vec::new();
            let mut last = false;
            for offset in &offsets {
                viewport.scroll_to(*offset);
                let now = *offset > 50.0;
                prop_assert_eq!(monitor.past_threshold(), now);
                if now != last {
                    expected.push(now);
                    last = now;
                }
            }
            prop_assert_eq!(&*seen.borrow(), &expected);
        }
    }
}
