//! Scripted viewport for driving the engine without a browser.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::viewport::{
    IntersectionListener, MotionError, Observation, ScrollListener, Subscription, ViewportSource,
};

/// A block laid out at a fixed position in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockBlock {
    pub top: f64,
    pub height: f64,
}

impl MockBlock {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn intersects(&self, offset: f64, viewport_height: f64) -> bool {
        self.top < offset + viewport_height && self.top + self.height > offset
    }
}

#[derive(Default)]
struct Registry {
    next_id: Cell<u64>,
    scroll: RefCell<BTreeMap<u64, ScrollListener>>,
    observed: RefCell<BTreeMap<u64, (MockBlock, IntersectionListener)>>,
}

impl Registry {
    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

pub struct MockViewport {
    offset: Cell<f64>,
    viewport_height: f64,
    observation_supported: bool,
    registry: Rc<Registry>,
}

impl MockViewport {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            offset: Cell::new(0.0),
            viewport_height,
            observation_supported: true,
            registry: Rc::new(Registry::default()),
        }
    }

    pub fn without_observation(viewport_height: f64) -> Self {
        Self {
            observation_supported: false,
            ..Self::new(viewport_height)
        }
    }

    /// Moves the viewport and delivers a scroll event followed by one
    /// intersection event per observed block.
    pub fn scroll_to(&self, offset: f64) {
        self.offset.set(offset);

        let scroll: Vec<ScrollListener> = self.registry.scroll.borrow().values().cloned().collect();
        for listener in scroll {
            listener(offset);
        }

        let observed: Vec<(MockBlock, IntersectionListener)> =
            self.registry.observed.borrow().values().cloned().collect();
        for (block, listener) in observed {
            listener(block.intersects(offset, self.viewport_height));
        }
    }

    pub fn scroll_listener_count(&self) -> usize {
        self.registry.scroll.borrow().len()
    }

    pub fn observer_count(&self) -> usize {
        self.registry.observed.borrow().len()
    }
}

impl ViewportSource for MockViewport {
    type Target = MockBlock;

    fn scroll_offset(&self) -> f64 {
        self.offset.get()
    }

    fn on_scroll(&self, listener: ScrollListener) -> Result<Subscription, MotionError> {
        let id = self.registry.next_id();
        self.registry.scroll.borrow_mut().insert(id, listener);
        let registry = Rc::downgrade(&self.registry);
        Ok(Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.scroll.borrow_mut().remove(&id);
            }
        }))
    }

    fn observe(
        &self,
        target: &MockBlock,
        listener: IntersectionListener,
    ) -> Result<Observation, MotionError> {
        if !self.observation_supported {
            return Err(MotionError::ObservationUnavailable);
        }
        let id = self.registry.next_id();
        self.registry
            .observed
            .borrow_mut()
            .insert(id, (*target, listener));
        let registry = Rc::downgrade(&self.registry);
        Ok(Observation {
            subscription: Subscription::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.observed.borrow_mut().remove(&id);
                }
            }),
            initially_visible: target.intersects(self.offset.get(), self.viewport_height),
        })
    }
}
