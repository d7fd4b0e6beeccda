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
//! The error taxonomy of external textures.

use texlink_core::bridge::BridgeError;
use texlink_core::math::Mat3;
use texlink_core::renderer::{ResourceError, TextureId, TextureIdentity};
use thiserror::Error;

/// An error raised while painting or managing an external texture.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExternalTextureError {
    /// The device created a texture but exposes no raw name to bind it with.
    #[error("GPU device exposes no raw name for texture {0:?}")]
    MissingGpuHandle(TextureId),
    /// The GPU texture could not be allocated.
    #[error("Failed to allocate the GPU texture: {0}")]
    Allocation(#[source] ResourceError),
    /// The producer reported a transform that cannot be inverted.
    #[error("Producer transform is singular: {matrix:?}")]
    SingularTransform {
        /// The producer's matrix, as converted to 3x3.
        matrix: Mat3,
    },
    /// The latched frame could not be wrapped into a paintable image.
    #[error("Failed to create an image from the texture: {0}")]
    ImageCreation(#[source] ResourceError),
    /// The platform surface texture rejected a call.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
    /// No texture is registered under this identity.
    #[error("No texture registered as {0}")]
    UnknownTexture(TextureIdentity),
    /// A texture is already registered under this identity.
    #[error("A texture is already registered as {0}")]
    DuplicateTexture(TextureIdentity),
}

impl ExternalTextureError {
    /// Returns `true` if the texture that raised this error cannot continue.
    ///
    /// Callers are expected to unregister a texture after a fatal error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExternalTextureError::MissingGpuHandle(_)
                | ExternalTextureError::Allocation(_)
                | ExternalTextureError::SingularTransform { .. }
        )
    }
}
