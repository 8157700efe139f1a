use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::use_animation_config;
use crate::icons::Icon;
use crate::motion::{
    BrowserViewport, MenuAction, MenuState, NavMode, OverlayPresence, ScrollMonitor,
};

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Services", "#services"),
    ("About", "#about"),
    ("Reviews", "#testimonials"),
    ("Contact", "#contact"),
];

/// Whether the window is scrolled past `threshold`, re-rendering only when
/// that flips.
#[hook]
pub fn use_scroll_threshold(threshold: f64) -> bool {
    let past = use_state(|| false);

    {
        let past = past.clone();
        use_effect_with_deps(
            move |threshold| {
                let setter = past.setter();
                let monitor =
                    ScrollMonitor::attach(&BrowserViewport, *threshold, move |now| setter.set(now));
                move || monitor.detach()
            },
            threshold,
        );
    }

    *past
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub mode: NavMode,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu = use_reducer(MenuState::default);
    let config = use_animation_config();
    // Keeps the overlay mounted while its exit transition plays
    let presence = use_state(OverlayPresence::default);
    let exit_timer = use_mut_ref(|| None::<Timeout>);

    {
        let presence = presence.clone();
        let exit_timer: Rc<RefCell<Option<Timeout>>> = exit_timer.clone();
        let overlay_ms = config.overlay_ms;
        use_effect_with_deps(
            move |state| {
                // Reopening cancels a pending unmount
                exit_timer.borrow_mut().take();
                let next = presence.follow(*state);
                presence.set(next);
                if next.exit_pending() {
                    let setter = presence.setter();
                    *exit_timer.borrow_mut() =
                        Some(Timeout::new(overlay_ms, move || setter.set(next.exit_elapsed())));
                }
                || ()
            },
            *menu,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    let overlay = if let Some(phase) = presence.phase(*menu).class() {
        html! {
            <div
                class={classes!("mobile-menu", phase)}
                style={format!("transition: max-height {0}ms ease, opacity {0}ms ease;", config.overlay_ms)}
            >
                {
                    for NAV_ITEMS.iter().map(|(label, anchor)| {
                        let menu = menu.clone();
                        let anchor: &'static str = *anchor;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            menu.dispatch(MenuAction::Select(anchor));
                        });
                        html! { <a href={anchor} class="mobile-link" onclick={onclick}>{*label}</a> }
                    })
                }
                <button class="book-button wide">{"Book Now"}</button>
            </div>
        }
    } else {
        html! {}
    };

    let toggle_glyph = if menu.is_open() { Icon::Close } else { Icon::Menu };

    html! {
        <nav class={classes!("top-nav", props.mode.class())}>
            <div class="nav-content">
                <span class="nav-logo">{ props.brand.clone() }</span>
                <div class="nav-links">
                    {
                        for NAV_ITEMS.iter().map(|(label, anchor)| html! {
                            <a href={*anchor} class="nav-link">{*label}</a>
                        })
                    }
                    <button class="book-button">{"Book Now"}</button>
                </div>
                <button class="menu-toggle" onclick={toggle_menu}>
                    { toggle_glyph.render("menu-glyph") }
                </button>
            </div>
            { overlay }
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        transition: all 0.3s ease;
                    }
                    .top-nav.nav-translucent {
                        background: transparent;
                    }
                    .top-nav.nav-elevated {
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 300;
                        letter-spacing: 0.3em;
                        color: #292524;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #57534e;
                        font-size: 0.875rem;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: #1c1917;
                    }
                    .book-button {
                        background: #292524;
                        color: white;
                        border: none;
                        padding: 0.625rem 1.5rem;
                        border-radius: 9999px;
                        cursor: pointer;
                    }
                    .book-button.wide {
                        width: 100%;
                        margin-top: 1rem;
                    }
                    .menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                        overflow: hidden;
                        background: white;
                        border-top: 1px solid #e7e5e4;
                        padding: 1.5rem 1rem;
                    }
                    .mobile-link {
                        display: block;
                        color: #57534e;
                        padding: 0.5rem 0;
                        text-decoration: none;
                    }
                    @keyframes menuIn {
                        from { max-height: 0; opacity: 0; }
                        to { max-height: 24rem; opacity: 1; }
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .menu-toggle {
                            display: block;
                        }
                        .mobile-menu {
                            display: block;
                        }
                        .mobile-menu.open {
                            max-height: 24rem;
                            opacity: 1;
                            animation: menuIn 0.25s ease;
                        }
                        .mobile-menu.closing {
                            max-height: 0;
                            opacity: 0;
                            padding-top: 0;
                            padding-bottom: 0;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
