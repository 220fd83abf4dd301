//! Camera system for 3D scene viewing.
//!
//! Provides a view/projection [`Camera`] with lazily cached matrices and
//! two interchangeable controllers that mutate it once per simulation
//! tick: an auto-rotating orbit controller and a first-person fly
//! controller.

/// Core camera struct and look-at settings.
pub mod core;
/// First-person free-look controller.
pub mod fly;
/// Auto-rotating orbit controller.
pub mod orbit;
/// Orthographic/perspective projection parameters.
pub mod projection;

#[cfg(test)]
pub(crate) mod testing;

pub use self::core::{Camera, LookAtSettings};
pub use fly::{FlyCameraController, FlySettings};
pub use orbit::{OrbitCameraController, OrbitSettings};
pub use projection::Projection;
