//! The landing page's scroll story, played against a scripted viewport.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::mock::{MockBlock, MockViewport};
use super::{MenuAction, MenuState, NavMode, RevealController, ScrollMonitor};
use crate::config::AnimationConfig;
use crate::motion::pose::{motion_style, Preset};
use crate::motion::stagger::cascade;

const VIEWPORT_HEIGHT: f64 = 800.0;

struct Page {
    viewport: Rc<MockViewport>,
    monitor: ScrollMonitor,
    nav_changes: Rc<RefCell<Vec<NavMode>>>,
    controller: RevealController<MockViewport>,
    hero: super::reveal::BlockId,
    services: super::reveal::BlockId,
    services_revealed: Rc<Cell<u32>>,
    menu: MenuState,
}

fn mount() -> Page {
    let viewport = Rc::new(MockViewport::new(VIEWPORT_HEIGHT));
    let nav_changes = Rc::new(RefCell::new(Vec::new()));
    let monitor = {
        let nav_changes = nav_changes.clone();
        ScrollMonitor::attach(viewport.as_ref(), 50.0, move |past| {
            nav_changes.borrow_mut().push(NavMode::for_scroll(past))
        })
    };

    let controller = RevealController::new(viewport.clone());
    let hero = controller.register(&MockBlock::new(80.0, 600.0), || {});
    let services_revealed = Rc::new(Cell::new(0));
    let services = {
        let services_revealed = services_revealed.clone();
        controller.register(&MockBlock::new(1400.0, 700.0), move || {
            services_revealed.set(services_revealed.get() + 1)
        })
    };

    Page {
        viewport,
        monitor,
        nav_changes,
        controller,
        hero,
        services,
        services_revealed,
        menu: MenuState::default(),
    }
}

#[test]
fn mount_scroll_and_reveal_services() {
    let page = mount();
    let config = AnimationConfig::default();

    assert_eq!(NavMode::for_scroll(page.monitor.past_threshold()), NavMode::Translucent);
    assert_eq!(page.menu, MenuState::Closed);
    assert!(page.controller.is_triggered(page.hero));
    assert!(!page.controller.is_triggered(page.services));

    page.viewport.scroll_to(120.0);
    assert_eq!(*page.nav_changes.borrow(), vec![NavMode::Elevated]);
    assert!(!page.controller.is_triggered(page.services));

    page.viewport.scroll_to(900.0);
    assert!(page.controller.is_triggered(page.services));
    assert_eq!(page.services_revealed.get(), 1);

    let cards = ["Facial Treatments", "Injectables", "Laser Therapy", "Body Contouring"];
    let styles: Vec<String> = cascade(&cards, config.stagger_unit_ms)
        .map(|(_, delay, _)| motion_style(Preset::FadeUp, &config, true, delay))
        .collect();
    for (style, delay) in styles.iter().zip(["0ms", "100ms", "200ms", "300ms"]) {
        assert!(style.contains(&format!("opacity 600ms ease-out {delay}")));
    }

    // Past and back again: nothing reverses, nav flips only on crossings
    page.viewport.scroll_to(4000.0);
    page.viewport.scroll_to(900.0);
    assert!(page.controller.is_triggered(page.services));
    assert_eq!(page.services_revealed.get(), 1);
    assert_eq!(*page.nav_changes.borrow(), vec![NavMode::Elevated]);
}

#[test]
fn menu_round_trip_during_scroll() {
    let mut page = mount();
    page.menu = page.menu.next(&MenuAction::Toggle);
    page.viewport.scroll_to(300.0);
    assert!(page.menu.is_open());

    page.menu = page.menu.next(&MenuAction::Select("#testimonials"));
    assert_eq!(page.menu, MenuState::Closed);
}

#[test]
fn unmounting_stops_all_reactions() {
    let page = mount();
    let Page {
        viewport,
        monitor,
        nav_changes,
        controller,
        services,
        services_revealed,
        ..
    } = page;

    controller.unregister(services);
    monitor.detach();
    assert_eq!(viewport.scroll_listener_count(), 0);
    assert_eq!(viewport.observer_count(), 0);

    viewport.scroll_to(1500.0);
    assert!(nav_changes.borrow().is_empty());
    assert_eq!(services_revealed.get(), 0);
    assert!(!controller.is_triggered(services));
}
