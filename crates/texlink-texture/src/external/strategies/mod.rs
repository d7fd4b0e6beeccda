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
//! Strategies for owning the GPU texture an external producer renders into.
//!
//! Two backends exist: one where a managed [`GpuDevice`] creates and tracks
//! textures, and one where raw texture names are generated directly. The
//! [`GpuTextureHandleProvider`] trait lets the adapter drive either one
//! polymorphically; the choice is made once, when the adapter is built.
//!
//! [`GpuDevice`]: texlink_core::renderer::GpuDevice

mod device;
mod raw;

pub use self::device::DeviceTextureProvider;
pub use self::raw::RawHandleProvider;

use crate::error::ExternalTextureError;
use texlink_core::math::Extent2D;
use texlink_core::renderer::{ImageFactory, ImageHandle, RawTextureName, ResourceError};

/// Identifies which backend a provider allocates textures with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleStrategy {
    /// Textures are created and owned by a managed GPU device.
    Device,
    /// Raw texture names are generated and deleted directly.
    Raw,
}

/// The abstract contract for owning the GPU texture bound to a producer.
///
/// A provider holds at most one texture at a time.
pub trait GpuTextureHandleProvider: Send + Sync {
    /// Returns which backend this provider allocates with.
    fn strategy(&self) -> HandleStrategy;

    /// Allocates a texture for frames of `size` and returns the raw name the
    /// producer should be attached to.
    ///
    /// # Arguments
    /// * `size` - The pixel size of the paint bounds the texture is created for.
    ///
    /// # Returns
    /// The raw name of the new texture, or a fatal error if it could not be
    /// allocated. A texture still held from a previous allocation is released
    /// first.
    fn allocate(&mut self, size: Extent2D) -> Result<RawTextureName, ExternalTextureError>;

    /// Wraps the held texture into a paintable image.
    ///
    /// # Arguments
    /// * `images` - The image factory of the current rendering context.
    fn make_image(&self, images: &dyn ImageFactory) -> Result<ImageHandle, ExternalTextureError>;

    /// Frees the held texture, if any.
    ///
    /// The handle is dropped even when freeing fails; the returned error only
    /// reports that the resource may have leaked.
    fn release(&mut self) -> Result<(), ResourceError>;

    /// Drops the held texture without freeing it.
    ///
    /// Used when the rendering context that owned the texture is already gone.
    fn forget(&mut self);

    /// The raw name of the held texture, if any.
    fn raw_name(&self) -> Option<RawTextureName>;

    /// Returns `true` if a texture is currently held.
    fn is_allocated(&self) -> bool {
        self.raw_name().is_some()
    }
}
