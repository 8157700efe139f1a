use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod icons;
mod motion {
    pub mod browser;
    pub mod menu;
    pub mod pose;
    pub mod reveal;
    pub mod scroll;
    pub mod stagger;
    pub mod viewport;
    #[cfg(test)]
    pub mod mock;
    #[cfg(test)]
    mod scenario;

    pub use browser::BrowserViewport;
    pub use menu::{MenuAction, MenuState, OverlayPresence};
    pub use pose::{motion_style, Preset};
    pub use reveal::RevealController;
    pub use scroll::{NavMode, ScrollMonitor};
    pub use stagger::cascade;
}
mod components {
    pub mod cards;
    pub mod footer;
    pub mod nav;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
