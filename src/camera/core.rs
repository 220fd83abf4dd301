//! Core camera: look-at settings plus lazily cached matrices.

use std::cell::Cell;

use glam::{Mat4, Vec3};

use super::projection::Projection;

/// Eye position, look-at target, and world-up vector defining a view
/// transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAtSettings {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// World-up direction vector.
    pub up: Vec3,
}

impl LookAtSettings {
    /// Raw (unnormalized) look direction, `target - eye`.
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        self.target - self.eye
    }

    /// Unit-length look direction.
    ///
    /// The settings must describe a valid view (`target != eye`).
    #[must_use]
    pub fn normalized_look_direction(&self) -> Vec3 {
        self.look_direction().normalize()
    }

    /// Re-aim the view along `direction` (unit length) by moving the
    /// target to `eye + direction`.
    pub fn set_normalized_look_direction(&mut self, direction: Vec3) {
        self.target = self.eye + direction;
    }

    /// Build the view matrix for these settings.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// A camera owning look-at settings, a projection, and two independent
/// lazily computed matrix caches.
///
/// Matrix reads are `&self`; the caches live in [`Cell`]s and never
/// affect the logical settings. Every mutation path (the `set_*`
/// setters and the `*_mut` accessors) invalidates the corresponding
/// cache, so a matrix read always reflects the latest settings.
pub struct Camera {
    look_at: LookAtSettings,
    projection: Projection,

    look_at_matrix: Cell<Option<Mat4>>,
    projection_matrix: Cell<Option<Mat4>>,
}

impl Camera {
    /// Create a camera with empty matrix caches.
    #[must_use]
    pub fn new(look_at: LookAtSettings, projection: Projection) -> Self {
        Self {
            look_at,
            projection,
            look_at_matrix: Cell::new(None),
            projection_matrix: Cell::new(None),
        }
    }

    /// Current look-at settings. Does not invalidate anything.
    #[must_use]
    pub fn look_at(&self) -> &LookAtSettings {
        &self.look_at
    }

    /// Replace the look-at settings, invalidating the view-matrix cache.
    pub fn set_look_at(&mut self, look_at: LookAtSettings) {
        self.look_at = look_at;
        self.look_at_matrix.set(None);
    }

    /// Mutable access to the look-at settings.
    ///
    /// Invalidates the view-matrix cache unconditionally (the caller is
    /// assumed to mutate).
    pub fn look_at_mut(&mut self) -> &mut LookAtSettings {
        self.look_at_matrix.set(None);
        &mut self.look_at
    }

    /// Current projection. Does not invalidate anything.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Replace the projection, invalidating the projection-matrix cache.
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
        self.projection_matrix.set(None);
    }

    /// Mutable access to the projection.
    ///
    /// Invalidates the projection-matrix cache unconditionally (the
    /// caller is assumed to mutate).
    pub fn projection_mut(&mut self) -> &mut Projection {
        self.projection_matrix.set(None);
        &mut self.projection
    }

    /// View matrix for the current look-at settings, computed on first
    /// access after an invalidation and cached afterwards.
    #[must_use]
    pub fn look_at_matrix(&self) -> Mat4 {
        self.look_at_matrix.get().unwrap_or_else(|| {
            let matrix = self.look_at.to_matrix();
            self.look_at_matrix.set(Some(matrix));
            matrix
        })
    }

    /// Projection matrix for the current projection, computed on first
    /// access after an invalidation and cached afterwards.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix.get().unwrap_or_else(|| {
            let matrix = self.projection.to_matrix();
            self.projection_matrix.set(Some(matrix));
            matrix
        })
    }
}

impl Clone for Camera {
    // Duplicates the settings only; the copy starts with empty caches
    // and recomputes on first access.
    fn clone(&self) -> Self {
        Self::new(self.look_at, self.projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> Camera {
        Camera::new(
            LookAtSettings {
                eye: Vec3::new(0.0, 0.0, 5.0),
                target: Vec3::ZERO,
                up: Vec3::Y,
            },
            Projection::Perspective {
                vertical_fov: 45.0_f32.to_radians(),
                aspect_ratio: 4.0 / 3.0,
                near_plane: 0.1,
                far_plane: 100.0,
            },
        )
    }

    #[test]
    fn test_look_at_matrix_reflects_latest_settings() {
        let mut camera = test_camera();

        // Warm the cache, then mutate twice through the mutable accessor.
        let _ = camera.look_at_matrix();
        camera.look_at_mut().eye = Vec3::new(1.0, 2.0, 3.0);
        camera.look_at_mut().eye = Vec3::new(-4.0, 0.5, 9.0);

        let expected =
            Mat4::look_at_rh(Vec3::new(-4.0, 0.5, 9.0), Vec3::ZERO, Vec3::Y);
        assert_eq!(camera.look_at_matrix(), expected);
        // Second read serves the cache and must agree.
        assert_eq!(camera.look_at_matrix(), expected);
    }

    #[test]
    fn test_set_look_at_invalidates() {
        let mut camera = test_camera();
        let before = camera.look_at_matrix();

        let mut settings = *camera.look_at();
        settings.eye = Vec3::new(0.0, 10.0, 0.0);
        settings.up = Vec3::Z;
        camera.set_look_at(settings);

        assert_ne!(camera.look_at_matrix(), before);
        assert_eq!(camera.look_at_matrix(), settings.to_matrix());
    }

    #[test]
    fn test_caches_are_independent() {
        let mut camera = test_camera();
        let view = camera.look_at_matrix();
        let projection = camera.projection_matrix();

        // Mutating the projection must not disturb the view matrix.
        camera.set_projection(Projection::Orthographic {
            width: 2.0,
            height: 2.0,
            near_plane: 0.1,
            far_plane: 10.0,
        });
        assert_eq!(camera.look_at_matrix(), view);
        assert_ne!(camera.projection_matrix(), projection);

        // And vice versa.
        let projection = camera.projection_matrix();
        camera.look_at_mut().eye = Vec3::new(3.0, 3.0, 3.0);
        assert_eq!(camera.projection_matrix(), projection);
    }

    #[test]
    fn test_clone_does_not_share_cache() {
        let mut camera = test_camera();
        let _ = camera.look_at_matrix();

        let clone = camera.clone();
        camera.look_at_mut().eye = Vec3::new(7.0, 7.0, 7.0);

        // The clone keeps its own settings and computes from them.
        assert_eq!(
            clone.look_at_matrix(),
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y)
        );
        assert_ne!(clone.look_at_matrix(), camera.look_at_matrix());
    }

    #[test]
    fn test_set_normalized_look_direction_moves_target() {
        let mut settings = LookAtSettings {
            eye: Vec3::new(1.0, 2.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        };

        settings.set_normalized_look_direction(Vec3::X);
        assert_eq!(settings.target, Vec3::new(2.0, 2.0, 3.0));
        assert_eq!(settings.normalized_look_direction(), Vec3::X);
    }
}
