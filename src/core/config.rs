//! Constellation configuration
//!
//! All tunables for the point field, tracker, line buffer, camera and
//! background stars. Every field has a default, so a partial JSON document
//! only overrides what it names.

use std::f32::consts::PI;
use std::path::Path;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{Error, Result};
use super::tracker::Selection;

/// Top-level configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationConfig {
    /// Number of interactive points generated at startup
    pub point_count: usize,
    /// Full extent of the field per axis; points are uniform in ±spread/2
    pub spread: Vec3,
    /// Pointer-to-point distance below which a point activates
    pub activation_radius: f32,
    /// Maximum number of live segments
    pub max_segments: usize,
    /// Opacity removed from every segment per frame
    pub fade_step: f32,
    /// Which in-radius point wins when several qualify
    pub selection: Selection,
    /// Fixed RNG seed for a reproducible field
    pub seed: Option<u64>,
    pub camera: CameraConfig,
    pub stars: StarsConfig,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            point_count: 50,
            spread: Vec3::new(25.0, 20.0, 10.0),
            activation_radius: 1.5,
            max_segments: 16,
            fade_step: 0.02,
            selection: Selection::FirstMatch,
            seed: None,
            camera: CameraConfig::default(),
            stars: StarsConfig::default(),
        }
    }
}

/// Orbit camera parameters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    /// Distance from the orbit target (origin)
    pub distance: f32,
    /// 1.0 = one full orbit per minute
    pub auto_rotate_speed: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            distance: 15.0,
            auto_rotate_speed: 0.5,
            min_polar: 0.0,
            max_polar: PI,
        }
    }
}

/// Distant background starfield
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    pub count: usize,
    /// Inner radius of the shell
    pub radius: f32,
    /// Shell thickness
    pub depth: f32,
    /// Size multiplier
    pub factor: f32,
    pub twinkle_speed: f32,
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            count: 2000,
            radius: 60.0,
            depth: 50.0,
            factor: 4.0,
            twinkle_speed: 1.0,
        }
    }
}

impl ConstellationConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        debug!(path = %path.display(), points = config.point_count, "Config loaded");
        Ok(config)
    }

    /// RNG for field generation: seeded when `seed` is set, entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.point_count == 0 {
            return Err(Error::invalid("point_count", "must be at least 1"));
        }
        if !self.spread.is_finite() || self.spread.min_element() < 0.0 {
            return Err(Error::invalid("spread", "must be finite and non-negative"));
        }
        if !(self.activation_radius.is_finite() && self.activation_radius > 0.0) {
            return Err(Error::invalid(
                "activation_radius",
                format!("must be positive, got {}", self.activation_radius),
            ));
        }
        if self.max_segments == 0 {
            return Err(Error::invalid("max_segments", "must be at least 1"));
        }
        if !(self.fade_step > 0.0 && self.fade_step <= 1.0) {
            return Err(Error::invalid(
                "fade_step",
                format!("must be in (0, 1], got {}", self.fade_step),
            ));
        }
        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(Error::invalid(
                "camera.fov_degrees",
                format!("must be in (0, 180), got {}", cam.fov_degrees),
            ));
        }
        if !(cam.distance.is_finite() && cam.distance > 0.0) {
            return Err(Error::invalid("camera.distance", "must be positive"));
        }
        if cam.min_polar > cam.max_polar {
            return Err(Error::invalid(
                "camera.min_polar",
                "must not exceed camera.max_polar",
            ));
        }
        Ok(())
    }
}
