//! Layout configuration shared by every day-column in one pass.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Vertical pixel density used when none is configured.
pub const DEFAULT_PIXELS_PER_HOUR: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pixels per hour of the vertical time axis.
    pub pixels_per_hour: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_hour: DEFAULT_PIXELS_PER_HOUR,
        }
    }
}

impl LayoutConfig {
    pub fn with_pixels_per_hour(pixels_per_hour: f64) -> Result<Self> {
        let config = Self { pixels_per_hour };
        config.validate()?;
        Ok(config)
    }

    /// Reject non-finite or non-positive densities.
    pub fn validate(&self) -> Result<()> {
        if self.pixels_per_hour.is_finite() && self.pixels_per_hour > 0.0 {
            Ok(())
        } else {
            Err(LayoutError::InvalidPixelsPerHour(self.pixels_per_hour))
        }
    }
}
