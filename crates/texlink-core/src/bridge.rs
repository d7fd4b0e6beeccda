// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The contract with the platform's surface-texture object.
//!
//! A surface texture buffers frames coming from an external producer (a camera,
//! a video decoder, a platform view) and exposes them to the consumer through a
//! texture the consumer allocates and binds. [`SurfaceTextureBridge`] is the
//! boundary where calls are marshalled to that platform object.

use crate::math::{Mat3, Vec3};
use crate::renderer::RawTextureName;
use thiserror::Error;

/// An error reported by the platform surface texture.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The surface texture has been released by its owner.
    #[error("The surface texture has been released.")]
    Released,
    /// The platform call itself failed.
    #[error("Surface texture call failed: {0}")]
    Platform(String),
}

/// The producer's texture-coordinate transform, exactly as the platform reports it.
///
/// Platforms hand out a 4x4 matrix in column-major order that maps
/// homogeneous texture coordinates `(s, t, 0, 1)` into the `0..1` lookup range.
/// Only its 2D projective part is meaningful for texture lookups; see
/// [`to_mat3`](Self::to_mat3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransformMatrix(pub [f32; 16]);

impl SurfaceTransformMatrix {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, //
    ]);

    /// Extracts the 2D projective transform.
    ///
    /// The Z row and column are dropped: elements `0, 4, 12` form the first
    /// row, `1, 5, 13` the second, and `3, 7, 15` the perspective row.
    pub fn to_mat3(&self) -> Mat3 {
        let m = &self.0;
        Mat3::from_rows(m[0], m[4], m[12], m[1], m[5], m[13], m[3], m[7], m[15])
    }

    /// Embeds a 2D projective transform into a platform 4x4 matrix, leaving Z untouched.
    pub fn from_mat3(matrix: &Mat3) -> Self {
        let [c0, c1, c2]: [Vec3; 3] = matrix.cols;
        Self([
            c0.x, c0.y, 0.0, c0.z, //
            c1.x, c1.y, 0.0, c1.z, //
            0.0, 0.0, 1.0, 0.0, //
            c2.x, c2.y, 0.0, c2.z, //
        ])
    }
}

impl Default for SurfaceTransformMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat3> for SurfaceTransformMatrix {
    fn from(matrix: Mat3) -> Self {
        Self::from_mat3(&matrix)
    }
}

/// Marshals calls to the platform surface-texture object.
///
/// All calls are synchronous. Implementations are shared between the render
/// thread and whatever thread owns the platform object, hence `&self`.
pub trait SurfaceTextureBridge: Send + Sync {
    /// Binds the producer's output to the texture named `name` in the current context.
    fn attach_to_context(&self, name: RawTextureName) -> Result<(), BridgeError>;

    /// Unbinds the producer from the current context.
    fn detach_from_context(&self) -> Result<(), BridgeError>;

    /// Latches the most recent producer frame into the bound texture.
    fn update_image(&self) -> Result<(), BridgeError>;

    /// Returns the lookup-space transform associated with the latched frame.
    fn transform_matrix(&self) -> Result<SurfaceTransformMatrix, BridgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use approx::assert_abs_diff_eq;

    #[test]
    fn identity_converts_to_identity() {
        assert!(SurfaceTransformMatrix::IDENTITY.to_mat3().is_identity());
        assert_eq!(
            SurfaceTransformMatrix::from_mat3(&Mat3::IDENTITY),
            SurfaceTransformMatrix::IDENTITY
        );
    }

    #[test]
    fn typical_vertical_flip_matrix() {
        // A producer flipping t and cropping to the top half:
        // t' = 1 - 0.5 * t, written column-major.
        let raw = SurfaceTransformMatrix([
            1.0, 0.0, 0.0, 0.0, //
            0.0, -0.5, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 1.0, 0.0, 1.0, //
        ]);
        let m = raw.to_mat3();
        assert_abs_diff_eq!(
            m,
            Mat3::from_rows(1.0, 0.0, 0.0, 0.0, -0.5, 1.0, 0.0, 0.0, 1.0)
        );
        assert_abs_diff_eq!(
            m.transform_point(Vec2::new(0.5, 0.0)).unwrap(),
            Vec2::new(0.5, 1.0)
        );
    }

    #[test]
    fn mat3_round_trips_through_platform_layout() {
        let m = Mat3::from_rows(0.9, 0.1, 0.05, -0.1, 0.8, 0.1, 0.01, 0.02, 1.0);
        let raw: SurfaceTransformMatrix = m.into();
        assert_eq!(raw.to_mat3(), m);
    }

    #[test]
    fn bridge_error_display() {
        assert_eq!(
            BridgeError::Released.to_string(),
            "The surface texture has been released."
        );
        assert_eq!(
            BridgeError::Platform("JNI exception".into()).to_string(),
            "Surface texture call failed: JNI exception"
        );
    }
}
