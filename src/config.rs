use crate::error::{BoardError, Result};
use serde::Deserialize;

/// Minimum pointer travel, in pixels, before a press counts as a drag
const DEFAULT_ACTIVATION_DISTANCE: f64 = 8.0;
const DEFAULT_CARD_TITLE: &str = "New card";

/// Decides when a pointer press turns into a drag gesture rather than a click
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationPolicy {
    pub distance: f64,
}

impl ActivationPolicy {
    pub fn new(distance: f64) -> Self {
        Self { distance }
    }

    /// Whether a pointer that has travelled `(dx, dy)` since the press
    /// should start a drag
    pub fn should_activate(&self, dx: f64, dy: f64) -> bool {
        dx.hypot(dy) >= self.distance
    }
}

impl Default for ActivationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub activation: ActivationPolicy,
    /// Whether keyboard sensors may start drags
    pub keyboard_enabled: bool,
    /// Title used by `add_card` when the host passes a blank one
    pub default_card_title: String,
}

impl EngineConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("KANBAN_ACTIVATION_DISTANCE") {
            let distance: f64 = raw.trim().parse().map_err(|_| {
                BoardError::ConfigError(format!("KANBAN_ACTIVATION_DISTANCE={raw} is not a number"))
            })?;
            config.activation = ActivationPolicy::new(distance);
        }
        if let Ok(raw) = std::env::var("KANBAN_KEYBOARD_ENABLED") {
            config.keyboard_enabled = parse_flag(&raw).ok_or_else(|| {
                BoardError::ConfigError(format!("KANBAN_KEYBOARD_ENABLED={raw} is not a boolean"))
            })?;
        }
        if let Ok(raw) = std::env::var("KANBAN_DEFAULT_CARD_TITLE") {
            if !raw.trim().is_empty() {
                config.default_card_title = raw;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.activation.distance.is_finite() || self.activation.distance < 0.0 {
            return Err(BoardError::ConfigError(format!(
                "activation distance must be a non-negative number, got {}",
                self.activation.distance
            )));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            activation: ActivationPolicy::default(),
            keyboard_enabled: true,
            default_card_title: DEFAULT_CARD_TITLE.into(),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
