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
//! Correction of the producer's texture-space transform.

use crate::error::ExternalTextureError;
use texlink_core::bridge::SurfaceTransformMatrix;
use texlink_core::math::{Mat3, Vec2};

/// The image-space transform applied when drawing a producer frame.
///
/// A producer reports a *lookup-space* matrix that maps drawn coordinates to
/// the texel coordinates to sample. A canvas color source expects the
/// opposite: a matrix that places the image in drawn space. The two are
/// inverses of each other, so the stored transform is always the inverse of
/// what the producer reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureTransform {
    matrix: Mat3,
}

impl TextureTransform {
    /// The transform used before any frame has been latched.
    pub const IDENTITY: Self = Self {
        matrix: Mat3::IDENTITY,
    };

    /// Derives the image-space transform from the matrix a producer reported.
    ///
    /// ## Errors
    ///
    /// Returns [`ExternalTextureError::SingularTransform`] if the matrix cannot
    /// be inverted. There is no fallback to the identity.
    pub fn from_producer(raw: &SurfaceTransformMatrix) -> Result<Self, ExternalTextureError> {
        Self::from_lookup_matrix(raw.to_mat3())
    }

    /// Derives the image-space transform from a 3x3 lookup-space matrix.
    pub fn from_lookup_matrix(lookup: Mat3) -> Result<Self, ExternalTextureError> {
        lookup
            .inverse()
            .map(|matrix| Self { matrix })
            .ok_or(ExternalTextureError::SingularTransform { matrix: lookup })
    }

    /// The image-space matrix.
    #[inline]
    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Returns `true` if frames can be drawn without a color source.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.matrix.is_identity()
    }

    /// Maps a point from texel space back into unit drawn space.
    pub fn apply(&self, point: Vec2) -> Option<Vec2> {
        self.matrix.transform_point(point)
    }
}

impl Default for TextureTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
