/*
 * Mindset Module
 *
 * The behavioural configuration shared by every boid for a run: how strongly
 * a boid avoids its neighbours, conforms to their heading, and steers toward
 * their centre, plus the movement budget capping the combined decision.
 */

use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mindset {
    pub obstacle_avoiding_bias: f32,
    pub centering_bias: f32,
    pub conforming_bias: f32,
    /// Upper bound on the magnitude of a decided velocity. Never negative.
    pub maximum_movement: f32,
}

impl Default for Mindset {
    fn default() -> Self {
        Self {
            obstacle_avoiding_bias: 0.4,
            centering_bias: 0.08,
            conforming_bias: 0.95,
            maximum_movement: 0.5,
        }
    }
}

impl Mindset {
    pub fn new(
        obstacle_avoiding_bias: f32,
        centering_bias: f32,
        conforming_bias: f32,
        maximum_movement: f32,
    ) -> Result<Self> {
        let mindset = Self {
            obstacle_avoiding_bias,
            centering_bias,
            conforming_bias,
            maximum_movement,
        };
        mindset.validate()?;
        Ok(mindset)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("obstacle_avoiding_bias", self.obstacle_avoiding_bias),
            ("centering_bias", self.centering_bias),
            ("conforming_bias", self.conforming_bias),
            ("maximum_movement", self.maximum_movement),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(Error::NonFinite { field });
        }
        if self.maximum_movement < 0.0 {
            return Err(Error::NegativeMovement(self.maximum_movement));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let mindset: Self = serde_json::from_str(json)?;
        mindset.validate()?;
        Ok(mindset)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    // Slider ranges for the viewer UI
    pub fn bias_range() -> RangeInclusive<f32> {
        0.0..=2.0
    }

    pub fn maximum_movement_range() -> RangeInclusive<f32> {
        0.0..=5.0
    }
}
