use serde::{Deserialize, Serialize};

/// Hardware bridge wiring. Disabled by default; the toy is fully
/// playable from the keyboard alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub enabled: bool,
    /// Largest raw value the potentiometer channel reports (a 10-bit
    /// ADC by default).
    pub axis_max: u16,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            axis_max: 1023,
        }
    }
}
