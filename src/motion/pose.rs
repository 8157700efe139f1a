use crate::config::AnimationConfig;

/// Opacity and transform of a block at one end of its reveal transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const RESTING: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    fn hidden_at(x: f64, y: f64, scale: f64) -> Pose {
        Pose {
            opacity: 0.0,
            x,
            y,
            scale,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

/// How a block enters the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Cards: rise from `reveal_offset_px` below.
    FadeUp,
    /// Section headers and the feature strip, `rise_offset_px` below.
    Rise,
    SlideFromLeft,
    SlideFromRight,
    Zoom,
    /// Hero copy, animated on mount with a longer duration.
    Hero,
}

impl Preset {
    pub fn hidden(self, config: &AnimationConfig) -> Pose {
        let offset = config.reveal_offset_px;
        match self {
            Preset::FadeUp => Pose::hidden_at(0.0, offset, 1.0),
            Preset::Rise => Pose::hidden_at(0.0, config.rise_offset_px, 1.0),
            Preset::SlideFromLeft => Pose::hidden_at(-offset, 0.0, 1.0),
            Preset::SlideFromRight => Pose::hidden_at(offset, 0.0, 1.0),
            Preset::Zoom => Pose::hidden_at(0.0, 0.0, 0.95),
            Preset::Hero => Pose::hidden_at(0.0, config.hero_offset_px, 1.0),
        }
    }

    pub fn duration_ms(self, config: &AnimationConfig) -> u32 {
        match self {
            Preset::Hero => config.hero_duration_ms,
            _ => config.duration_ms,
        }
    }
}

/// Inline style for a block: the hidden pose until revealed, then the resting
/// pose with an eased transition starting after `delay_ms`.
pub fn motion_style(preset: Preset, config: &AnimationConfig, revealed: bool, delay_ms: u32) -> String {
    let pose = if revealed {
        Pose::RESTING
    } else {
        preset.hidden(config)
    };
    let duration = preset.duration_ms(config);
    let easing = &config.easing;
    format!(
        "{} transition: opacity {duration}ms {easing} {delay_ms}ms, transform {duration}ms {easing} {delay_ms}ms;",
        pose.css()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_poses_are_transparent_and_offset() {
        let config = AnimationConfig::default();
        assert_eq!(Preset::FadeUp.hidden(&config).y, 30.0);
        assert_eq!(Preset::SlideFromLeft.hidden(&config).x, -30.0);
        assert_eq!(Preset::SlideFromRight.hidden(&config).x, 30.0);
        assert_eq!(Preset::Zoom.hidden(&config).scale, 0.95);
        for preset in [Preset::FadeUp, Preset::Rise, Preset::Zoom, Preset::Hero] {
            assert_eq!(preset.hidden(&config).opacity, 0.0);
        }
    }

    #[test]
    fn style_carries_duration_and_delay() {
        let config = AnimationConfig::default();
        let style = motion_style(Preset::FadeUp, &config, true, 200);
        assert!(style.starts_with("opacity: 1;"));
        assert!(style.contains("opacity 600ms ease-out 200ms"));

        let hero = motion_style(Preset::Hero, &config, false, 0);
        assert!(hero.contains("translate3d(0px, 40px, 0)"));
        assert!(hero.contains("800ms"));
    }

    #[test]
    fn rise_and_hero_offsets_follow_config() {
        let config = AnimationConfig {
            rise_offset_px: 12.0,
            hero_offset_px: 64.0,
            ..AnimationConfig::default()
        };
        assert_eq!(Preset::Rise.hidden(&config).y, 12.0);
        assert_eq!(Preset::Hero.hidden(&config).y, 64.0);
        assert_eq!(Preset::Rise.hidden(&AnimationConfig::default()).y, 20.0);
    }
}
