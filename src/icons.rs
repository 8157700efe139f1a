use serde::Deserialize;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Sparkles,
    Heart,
    Shield,
    Leaf,
    Star,
    Phone,
    MapPin,
    Clock,
    Calendar,
    Instagram,
    Facebook,
    Menu,
    Close,
    ArrowRight,
    ChevronRight,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Sparkles => "✨",
            Icon::Heart => "♡",
            Icon::Shield => "🛡",
            Icon::Leaf => "🍃",
            Icon::Star => "★",
            Icon::Phone => "📞",
            Icon::MapPin => "📍",
            Icon::Clock => "🕘",
            Icon::Calendar => "📅",
            Icon::Instagram => "📷",
            Icon::Facebook => "ⓕ",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::ArrowRight => "→",
            Icon::ChevronRight => "›",
        }
    }

    pub fn render(self, class: &'static str) -> Html {
        html! {
            <span class={classes!("icon", class)} aria-hidden="true">{self.glyph()}</span>
        }
    }
}
