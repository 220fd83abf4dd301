//! Runtime configuration with TOML preset support.
//!
//! All tweakable settings (window, projection, controller parameters)
//! are consolidated here. Options serialize to/from TOML; every
//! sub-struct uses `#[serde(default)]` so partial presets (e.g. only
//! overriding `[fly]`) work correctly. Angles are stored in degrees
//! for readable TOML and converted to radians when building the core
//! settings structs.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{FlySettings, OrbitSettings, Projection};
use crate::error::VantageError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window geometry and title.
    pub window: WindowOptions,
    /// Perspective projection parameters.
    pub camera: CameraOptions,
    /// Orbit controller parameters.
    pub orbit: OrbitOptions,
    /// Fly controller parameters.
    pub fly: FlyOptions,
}

impl Options {
    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, VantageError> {
        toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::Io`] if the file cannot be read and
    /// [`VantageError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::OptionsParse`] if serialization fails
    /// and [`VantageError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }
}

/// Window geometry and title for the demo viewer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowOptions {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "vantage".into(),
        }
    }
}

impl WindowOptions {
    /// Width / height as an aspect ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl CameraOptions {
    /// Build a perspective [`Projection`] for the given aspect ratio.
    #[must_use]
    pub fn to_projection(&self, aspect_ratio: f32) -> Projection {
        Projection::Perspective {
            vertical_fov: self.fovy.to_radians(),
            aspect_ratio,
            near_plane: self.znear,
            far_plane: self.zfar,
        }
    }
}

/// Orbit controller parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitOptions {
    /// Orbit target point.
    pub target: Vec3,
    /// Orbit radius with no key input.
    pub radius_base: f32,
    /// Maximum radius deviation in either direction.
    pub radius_max_delta: f32,
    /// Radius change per second while a steering key is held.
    pub radius_change_factor: f32,
    /// Angular speed in degrees per second.
    pub angular_speed: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            target: Vec3::ZERO,
            radius_base: 5.0,
            radius_max_delta: 1.0,
            radius_change_factor: 2.0,
            angular_speed: 30.0,
        }
    }
}

impl OrbitOptions {
    /// Convert to the controller's settings (radians).
    #[must_use]
    pub fn to_settings(&self) -> OrbitSettings {
        OrbitSettings {
            target: self.target,
            radius_base: self.radius_base,
            radius_max_delta: self.radius_max_delta,
            radius_change_factor: self.radius_change_factor,
            angular_speed: self.angular_speed.to_radians(),
        }
    }
}

/// Fly controller parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlyOptions {
    /// Translation speed in units per second.
    pub movement_speed: f32,
    /// Degrees of yaw/pitch per pixel of mouse motion.
    pub rotation_sensitivity: f32,
    /// Invert the vertical mouse axis.
    pub invert_pitch: bool,
    /// Lower zoom bound for the vertical FOV, degrees.
    pub min_fovy: f32,
    /// Upper zoom bound for the vertical FOV, degrees.
    pub max_fovy: f32,
    /// Degrees of FOV change per scroll line.
    pub zoom_sensitivity: f32,
}

impl Default for FlyOptions {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            rotation_sensitivity: 0.15,
            invert_pitch: false,
            min_fovy: 10.0,
            max_fovy: 90.0,
            zoom_sensitivity: 2.0,
        }
    }
}

impl FlyOptions {
    /// Convert to the controller's settings (radians).
    #[must_use]
    pub fn to_settings(&self) -> FlySettings {
        FlySettings {
            movement_speed: self.movement_speed,
            rotation_sensitivity: self.rotation_sensitivity.to_radians(),
            must_invert_pitch: self.invert_pitch,
            min_vertical_fov: self.min_fovy.to_radians(),
            max_vertical_fov: self.max_fovy.to_radians(),
            zoom_sensitivity: self.zoom_sensitivity.to_radians(),
        }
    }
}
