use log::error;
use serde::Deserialize;
use thiserror::Error;

use crate::config::AnimationConfig;
use crate::icons::Icon;

const SITE_JSON: &str = include_str!("content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed site content: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    /// Expected in 1..=5 but rendered clamped, never trusted.
    pub rating: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub icon: Icon,
    pub title: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpeningHours {
    pub days: String,
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Contact {
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
}

/// Everything the page shows that is not layout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub animation: AnimationConfig,
    pub brand: String,
    pub tagline: String,
    pub features: Vec<Feature>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub social: Vec<SocialLink>,
    pub quick_links: Vec<Link>,
    pub legal_links: Vec<Link>,
    pub contact: Contact,
    pub hours: Vec<OpeningHours>,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The bundled content, or an empty page skeleton if it fails to parse.
    pub fn load() -> Self {
        match Self::parse(SITE_JSON) {
            Ok(content) => content,
            Err(err) => {
                error!("{err}");
                Self::default()
            }
        }
    }
}
