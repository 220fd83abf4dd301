//! Projection parameters and their matrix form.

use glam::Mat4;

/// Projection parameters for a [`Camera`](super::Camera).
///
/// Plane distances must satisfy `0 < near_plane < far_plane`; violating
/// that is a caller contract violation, not a runtime-checked error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Parallel projection of a symmetric box around the view axis.
    Orthographic {
        /// Full width of the view box.
        width: f32,
        /// Full height of the view box.
        height: f32,
        /// Near clipping plane distance.
        near_plane: f32,
        /// Far clipping plane distance.
        far_plane: f32,
    },
    /// Standard vertical-field-of-view frustum.
    Perspective {
        /// Vertical field of view in radians.
        vertical_fov: f32,
        /// Viewport aspect ratio (width / height).
        aspect_ratio: f32,
        /// Near clipping plane distance.
        near_plane: f32,
        /// Far clipping plane distance.
        far_plane: f32,
    },
}

impl Projection {
    /// Build the projection matrix (right-handed, like the view matrix
    /// produced by [`LookAtSettings`](super::LookAtSettings)).
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        match *self {
            Self::Orthographic {
                width,
                height,
                near_plane,
                far_plane,
            } => {
                let half_width = 0.5 * width;
                let half_height = 0.5 * height;

                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    near_plane,
                    far_plane,
                )
            }
            Self::Perspective {
                vertical_fov,
                aspect_ratio,
                near_plane,
                far_plane,
            } => Mat4::perspective_rh(
                vertical_fov,
                aspect_ratio,
                near_plane,
                far_plane,
            ),
        }
    }

    /// Whether this is the perspective variant.
    #[must_use]
    pub fn is_perspective(&self) -> bool {
        matches!(self, Self::Perspective { .. })
    }
}
