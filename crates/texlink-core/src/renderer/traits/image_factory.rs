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

use crate::renderer::api::{BackendTexture, ImageHandle, ImageInfo, TextureDescriptor, TextureId};
use crate::renderer::error::ResourceError;

/// Turns GPU textures into immutable, paintable images.
///
/// Implemented by the rendering context that is current while a frame is being
/// painted; an image is only valid for the context that made it.
pub trait ImageFactory {
    /// Wraps a texture managed by a [`GpuDevice`](super::GpuDevice).
    fn wrap_device_texture(
        &self,
        texture: TextureId,
        descriptor: &TextureDescriptor<'_>,
    ) -> Result<ImageHandle, ResourceError>;

    /// Wraps an existing backend texture without taking ownership of it.
    ///
    /// The returned image borrows `texture`; the caller keeps the responsibility
    /// of deleting the texture after every image made from it is gone.
    fn borrow_backend_texture(
        &self,
        texture: &BackendTexture,
        info: &ImageInfo,
    ) -> Result<ImageHandle, ResourceError>;
}
