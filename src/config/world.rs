use crate::config::ConfigError;
use crate::world::codec::ALPHABET;
use serde::{Deserialize, Serialize};

/// Lattice dimensions. The defaults are the classic toy world: a 24³
/// grid of half-unit studs and 0.6-unit brick courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Cells per axis.
    pub world_size: u32,
    /// Horizontal distance between adjacent studs.
    pub stud_spacing: f32,
    /// Height of one standard brick course.
    pub brick_height: f32,
    /// Height of a flat plate, used by the baseplate.
    pub flat_height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: 24,
            stud_spacing: 0.5,
            brick_height: 0.6,
            flat_height: 0.2,
        }
    }
}

impl WorldConfig {
    /// The terrain alphabet addresses one symbol per axis value, which
    /// caps the world size; spacings must leave the clamp range
    /// non-degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.world_size < 2 || self.world_size as usize > ALPHABET.len() {
            return Err(ConfigError::InvalidValue {
                field: "world_size",
                reason: format!(
                    "must be between 2 and {}, got {}",
                    ALPHABET.len(),
                    self.world_size
                ),
            });
        }
        for (field, value) in [
            ("stud_spacing", self.stud_spacing),
            ("brick_height", self.brick_height),
            ("flat_height", self.flat_height),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn test_world_size_is_capped_by_the_alphabet() {
        let mut config = WorldConfig::default();
        config.world_size = 36;
        assert!(config.validate().is_ok());
        config.world_size = 37;
        assert!(config.validate().is_err());
        config.world_size = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_spacings_must_be_positive() {
        let mut config = WorldConfig::default();
        config.brick_height = 0.0;
        assert!(config.validate().is_err());
        config.brick_height = -0.6;
        assert!(config.validate().is_err());
    }
}
