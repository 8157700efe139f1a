use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};

use super::viewport::{IntersectionListener, Subscription, ViewportSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block#{}", self.0)
    }
}

struct RevealRecord {
    triggered: bool,
    on_reveal: Option<Box<dyn FnOnce()>>,
    // Held until unregister; events after the latch are ignored.
    observation: Option<Subscription>,
}

#[derive(Default)]
struct Arena {
    next_id: u64,
    records: HashMap<BlockId, RevealRecord>,
}

/// Latches each registered block from hidden to revealed on its first
/// viewport intersection. A latch never reverts.
pub struct RevealController<S: ViewportSource> {
    source: Rc<S>,
    arena: Rc<RefCell<Arena>>,
}

impl<S: ViewportSource> Clone for RevealController<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            arena: self.arena.clone(),
        }
    }
}

impl<S: ViewportSource> PartialEq for RevealController<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.arena, &other.arena)
    }
}

impl<S: ViewportSource> RevealController<S> {
    pub fn new(source: Rc<S>) -> Self {
        Self {
            source,
            arena: Rc::new(RefCell::new(Arena::default())),
        }
    }

    /// Starts observing `target`. `on_reveal` runs once, on the first
    /// intersection, or right away when the target is already on screen or
    /// the runtime cannot observe it.
    pub fn register(&self, target: &S::Target, on_reveal: impl FnOnce() + 'static) -> BlockId {
        let id = {
            let mut arena = self.arena.borrow_mut();
            let id = BlockId(arena.next_id);
            arena.next_id += 1;
            arena.records.insert(
                id,
                RevealRecord {
                    triggered: false,
                    on_reveal: Some(Box::new(on_reveal)),
                    observation: None,
                },
            );
            id
        };

        let listener: IntersectionListener = {
            let arena = Rc::downgrade(&self.arena);
            Rc::new(move |intersecting| {
                if !intersecting {
                    return;
                }
                if let Some(arena) = arena.upgrade() {
                    latch(&arena, id);
                }
            })
        };

        match self.source.observe(target, listener) {
            Ok(observation) if observation.initially_visible => {
                observation.subscription.unsubscribe();
                latch(&self.arena, id);
            }
            Ok(observation) => {
                if let Some(record) = self.arena.borrow_mut().records.get_mut(&id) {
                    record.observation = Some(observation.subscription);
                }
            }
            Err(err) => {
                warn!("{id}: {err}, revealing immediately");
                latch(&self.arena, id);
            }
        }
        id
    }

    /// Drops the block's record and its observation. Later events for the
    /// block have nothing to act on.
    pub fn unregister(&self, id: BlockId) {
        let record = self.arena.borrow_mut().records.remove(&id);
        if record.is_some() {
            debug!("{id} unregistered");
        }
    }

    pub fn is_triggered(&self, id: BlockId) -> bool {
        self.arena
            .borrow()
            .records
            .get(&id)
            .map_or(false, |record| record.triggered)
    }

    #[cfg(test)]
    pub fn is_registered(&self, id: BlockId) -> bool {
        self.arena.borrow().records.contains_key(&id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.arena.borrow().records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn latch(arena: &RefCell<Arena>, id: BlockId) -> bool {
    let on_reveal = {
        let mut arena = arena.borrow_mut();
        match arena.records.get_mut(&id) {
            Some(record) if !record.triggered => {
                record.triggered = true;
                record.on_reveal.take()
            }
            _ => return false,
        }
    };
    debug!("{id} revealed");
    if let Some(on_reveal) = on_reveal {
        on_reveal();
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::mock::{MockBlock, MockViewport};
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let hook = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, hook)
    }

    #[test]
    fn below_the_fold_block_waits_for_intersection() {
        let viewport = Rc::new(MockViewport::new(800.0));
        let controller = RevealController::new(viewport.clone());
        let (count, hook) = counter();

        let id = controller.register(&MockBlock::new(1500.0, 400.0), hook);
        assert!(!controller.is_triggered(id));

        viewport.scroll_to(300.0);
        assert!(!controller.is_triggered(id));

        viewport.scroll_to(900.0);
        assert!(controller.is_triggered(id));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn block_visible_at_mount_triggers_immediately() {
        let viewport = Rc::new(MockViewport::new(800.0));
        let controller = RevealController::new(viewport.clone());
        let (count, hook) = counter();

        let id = controller.register(&MockBlock::new(100.0, 300.0), hook);
        assert!(controller.is_triggered(id));
        assert_eq!(count.get(), 1);
        assert_eq!(viewport.observer_count(), 0);
    }

    #[test]
    fn latch_survives_scrolling_away_and_back() {
        let viewport = Rc::new(MockViewport::new(800.0));
        let controller = RevealController::new(viewport.clone());
        let (count, hook) = counter();
        let id = controller.register(&MockBlock::new(1500.0, 400.0), hook);

        for offset in [1000.0, 0.0, 5000.0, 1200.0, 0.0] {
            viewport.scroll_to(offset);
            if offset >= 1000.0 {
                assert!(controller.is_triggered(id));
            }
        }
        assert!(controller.is_triggered(id));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn missing_observation_reveals_everything() {
        let viewport = Rc::new(MockViewport::without_observation(800.0));
        let controller = RevealController::new(viewport.clone());

        let ids: Vec<BlockId> = [0.0, 2000.0, 9000.0]
            .into_iter()
            .map(|top| controller.register(&MockBlock::new(top, 200.0), || {}))
            .collect();

        assert!(ids.iter().all(|id| controller.is_triggered(*id)));
    }

    #[test]
    fn blocks_are_independent() {
        let viewport = Rc::new(MockViewport::new(800.0));
        let controller = RevealController::new(viewport.clone());
        let near = controller.register(&MockBlock::new(1000.0, 200.0), || {});
        let far = controller.register(&MockBlock::new(4000.0, 200.0), || {});

        viewport.scroll_to(500.0);
        assert!(controller.is_triggered(near));
        assert!(!controller.is_triggered(far));
    }

    #[test]
    fn unregister_stops_observation_and_forgets_state() {
        let viewport = Rc::new(MockViewport::new(800.0));
        let controller = RevealController::new(viewport.clone());
        let (count, hook) = counter();
        let id = controller.register(&MockBlock::new(1500.0, 400.0), hook);
        assert_eq!(viewport.observer_count(), 1);

        controller.unregister(id);
        assert_eq!(viewport.observer_count(), 0);
        assert!(!controller.is_registered(id));
        assert!(controller.is_empty());

        viewport.scroll_to(1500.0);
        assert_eq!(count.get(), 0);
        assert!(!controller.is_triggered(id));
    }

    #[test]
    fn unregistering_twice_is_harmless() {
        let viewport = Rc::new(MockViewport::new(800.0));
        let controller = RevealController::new(viewport);
        let id = controller.register(&MockBlock::new(1500.0, 400.0), || {});
        controller.unregister(id);
        controller.unregister(id);
        assert!(controller.is_empty());
    }

    #[test]
    fn dropped_controller_leaves_no_observers_behind() {
        let viewport = Rc::new(MockViewport::new(800.0));
        {
            let controller = RevealController::new(viewport.clone());
            controller.register(&MockBlock::new(1500.0, 400.0), || {});
            assert_eq!(viewport.observer_count(), 1);
        }
        assert_eq!(viewport.observer_count(), 0);
        viewport.scroll_to(1500.0);
    }

    #[test]
    fn reveal_hook_may_query_the_controller() {
        let viewport = Rc::new(MockViewport::new(800.0));
        let controller = RevealController::new(viewport.clone());
        let seen = Rc::new(Cell::new(false));
        let id_slot = Rc::new(Cell::new(None));
        {
            let controller = controller.clone();
            let seen = seen.clone();
            let slot = id_slot.clone();
            let id = controller.clone().register(&MockBlock::new(1500.0, 400.0), move || {
                if let Some(id) = slot.get() {
                    seen.set(controller.is_triggered(id));
                }
            });
            id_slot.set(Some(id));
        }
        viewport.scroll_to(1200.0);
        assert!(seen.get());
    }
}
