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

use crate::renderer::api::{RawTextureName, TextureDescriptor, TextureId};
use crate::renderer::error::ResourceError;
use std::fmt::Debug;

/// A GPU device that manages texture objects on the caller's behalf.
///
/// This is the "device texture" side of the bridge: the device owns the
/// texture object and hands out a raw name only so the producer can bind to it.
pub trait GpuDevice: Send + Sync + Debug {
    /// Creates a new GPU texture.
    /// ## Arguments
    /// * `descriptor` - A reference to a `TextureDescriptor` containing the texture configuration.
    /// ## Returns
    /// A `Result` containing the ID of the created texture or an error if the creation fails.
    fn create_texture(&self, descriptor: &TextureDescriptor<'_>)
        -> Result<TextureId, ResourceError>;

    /// Destroys a GPU texture.
    /// ## Arguments
    /// * `id` - The ID of the texture to be destroyed.
    /// ## Returns
    /// A `Result` indicating success or failure of the operation.
    fn destroy_texture(&self, id: TextureId) -> Result<(), ResourceError>;

    /// Returns the raw backend name of a managed texture.
    ///
    /// `None` means the device has not (or can no longer) realise the texture
    /// as a backend object.
    fn raw_texture_name(&self, id: TextureId) -> Option<RawTextureName>;
}

/// Generates and deletes raw backend texture names directly
/// (`glGenTextures` / `glDeleteTextures`).
///
/// Used when no [`GpuDevice`] is available to manage textures.
pub trait RawTextureAllocator: Send + Sync + Debug {
    /// Generates a fresh texture name.
    fn generate_texture(&self) -> Result<RawTextureName, ResourceError>;

    /// Deletes a texture name previously returned by
    /// [`generate_texture`](Self::generate_texture).
    fn delete_texture(&self, name: RawTextureName);
}
