//! Runtime constants for every page behavior.
//!
//! `LandingConfig::default()` carries the stock values. A page may override any
//! subset of them with a JSON document; missing fields keep their defaults.

use serde::Deserialize;

use crate::error::LandingError;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LandingConfig {
    pub theme: ThemeConfig,
    pub animator: AnimatorConfig,
    pub nav: NavConfig,
    pub pointer: PointerConfig,
    pub form: FormConfig,
    pub decor: DecorConfig,
}

impl LandingConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        serde_json::from_str(raw).map_err(LandingError::InvalidConfig)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Local storage key holding "light" or "dark"
    pub storage_key: String,
    /// Attribute set on the document element
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimatorConfig {
    /// Visible fraction that triggers a reveal
    pub reveal_threshold: f64,
    /// Root margin passed to the reveal observer
    pub reveal_root_margin: String,
    /// Initial downward offset of hidden elements, in pixels
    pub reveal_offset_px: f64,
    pub reveal_duration_s: f64,
    /// Extra transition delay per element index
    pub reveal_stagger_s: f64,
    /// Visible fraction that starts a counter
    pub counter_threshold: f64,
    pub counter_duration_ms: f64,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            reveal_offset_px: 30.0,
            reveal_duration_s: 0.6,
            reveal_stagger_s: 0.1,
            counter_threshold: 0.5,
            counter_duration_ms: 2000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Scroll distance past which the navbar is marked scrolled
    pub scrolled_threshold_px: f64,
    /// Fixed header height subtracted from smooth-scroll targets
    pub header_offset_px: f64,
    /// Lead applied to section tops when picking the active link
    pub section_pre_offset_px: f64,
    pub active_link_color: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 50.0,
            header_offset_px: 80.0,
            section_pre_offset_px: 100.0,
            active_link_color: "#00d4aa".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointerConfig {
    pub tilt_divisor: f64,
    pub tilt_perspective_px: f64,
    pub tilt_lift_px: f64,
    /// Parallax speed grows by this much per shape index
    pub parallax_speed_step: f64,
    pub stack_lift_px: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            tilt_divisor: 20.0,
            tilt_perspective_px: 1000.0,
            tilt_lift_px: 8.0,
            parallax_speed_step: 10.0,
            stack_lift_px: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub success_text: String,
    pub success_background: String,
    /// How long the success feedback stays up before the form resets
    pub feedback_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            success_text: "문의가 접수되었습니다!".to_string(),
            success_background: "linear-gradient(135deg, #22c55e, #16a34a)".to_string(),
            feedback_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecorConfig {
    pub intro_delay_ms: u32,
    pub mesh_pulse_period_ms: u32,
    pub mesh_pulse_hold_ms: u32,
    pub mesh_glow_shadow: String,
    pub mesh_rest_shadow: String,
    pub typewriter_speed_ms: u32,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            intro_delay_ms: 100,
            mesh_pulse_period_ms: 2000,
            mesh_pulse_hold_ms: 500,
            mesh_glow_shadow: "0 10px 60px rgba(0, 212, 170, 0.4)".to_string(),
            mesh_rest_shadow: "0 10px 40px rgba(0, 212, 170, 0.3)".to_string(),
            typewriter_speed_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_keeps_defaults() {
        let config = LandingConfig::from_json("{}").expect("should parse");
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn partial_override_touches_only_named_fields() {
        let config = LandingConfig::from_json(
            r#"{ "nav": { "header_offset_px": 64 }, "form": { "feedback_ms": 1500 } }"#,
        )
        .expect("should parse");

        assert_eq!(config.nav.header_offset_px, 64.0);
        assert_eq!(config.nav.scrolled_threshold_px, 50.0);
        assert_eq!(config.form.feedback_ms, 1500);
        assert_eq!(config.form.success_text, FormConfig::default().success_text);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = LandingConfig::from_json(r#"{ "nav": { "header_offset": 64 } }"#)
            .expect_err("must fail");
        assert!(matches!(err, LandingError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = LandingConfig::from_json("{ nav: ").expect_err("must fail");
        assert!(err.to_string().starts_with("invalid landing config"));
    }
}
