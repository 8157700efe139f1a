use log::Level;
use serde::Deserialize;

/// Timing and distance knobs for the scroll-reactive animations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Scroll offset past which the nav bar turns opaque.
    pub threshold_px: f64,
    pub duration_ms: u32,
    pub hero_duration_ms: u32,
    pub stagger_unit_ms: u32,
    /// Height/opacity transition of the mobile menu overlay.
    pub overlay_ms: u32,
    /// Distance cards and side panels travel when revealed.
    pub reveal_offset_px: f64,
    /// Shorter rise for section headers and the feature strip.
    pub rise_offset_px: f64,
    pub hero_offset_px: f64,
    pub easing: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            threshold_px: 50.0,
            duration_ms: 600,
            hero_duration_ms: 800,
            stagger_unit_ms: 100,
            overlay_ms: 250,
            reveal_offset_px: 30.0,
            rise_offset_px: 20.0,
            hero_offset_px: 40.0,
            easing: "ease-out".to_string(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Engine transitions are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: AnimationConfig =
            serde_json::from_str(r#"{ "stagger_unit_ms": 150 }"#).unwrap();
        assert_eq!(config.stagger_unit_ms, 150);
        assert_eq!(config.threshold_px, 50.0);
        assert_eq!(config.duration_ms, 600);
        assert_eq!(config.easing, "ease-out");
        assert_eq!(config.rise_offset_px, 20.0);
        assert_eq!(config.hero_offset_px, 40.0);
    }
}
