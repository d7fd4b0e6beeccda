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
use super::{GpuTextureHandleProvider, HandleStrategy};
use crate::error::ExternalTextureError;
use std::sync::Arc;
use texlink_core::math::Extent2D;
use texlink_core::renderer::{
    BackendTexture, ImageFactory, ImageHandle, ImageInfo, RawTextureAllocator, RawTextureName,
    ResourceError,
};

/// Generates raw texture names and borrows them as external images.
///
/// Used when no managed device is available. The texture is described to the
/// image factory as a 1x1 `EXTERNAL_OES` texture without mipmaps; the
/// producer's real frame size never reaches this side of the bridge.
#[derive(Debug)]
pub struct RawHandleProvider {
    allocator: Arc<dyn RawTextureAllocator>,
    name: Option<RawTextureName>,
}

impl RawHandleProvider {
    /// Creates a provider generating names from `allocator`.
    pub fn new(allocator: Arc<dyn RawTextureAllocator>) -> Self {
        Self {
            allocator,
            name: None,
        }
    }
}

impl GpuTextureHandleProvider for RawHandleProvider {
    fn strategy(&self) -> HandleStrategy {
        HandleStrategy::Raw
    }

    fn allocate(&mut self, _size: Extent2D) -> Result<RawTextureName, ExternalTextureError> {
        let _ = self.release();

        let name = self
            .allocator
            .generate_texture()
            .map_err(ExternalTextureError::Allocation)?;
        if !name.is_valid() {
            return Err(ExternalTextureError::Allocation(ResourceError::InvalidHandle));
        }
        self.name = Some(name);
        Ok(name)
    }

    fn make_image(&self, images: &dyn ImageFactory) -> Result<ImageHandle, ExternalTextureError> {
        let name = self
            .name
            .ok_or(ExternalTextureError::ImageCreation(ResourceError::InvalidHandle))?;
        images
            .borrow_backend_texture(&BackendTexture::external_oes(name), &ImageInfo::EXTERNAL_FRAME)
            .map_err(ExternalTextureError::ImageCreation)
    }

    fn release(&mut self) -> Result<(), ResourceError> {
        if let Some(name) = self.name.take() {
            self.allocator.delete_texture(name);
        }
        Ok(())
    }

    fn forget(&mut self) {
        self.name = None;
    }

    fn raw_name(&self) -> Option<RawTextureName> {
        self.name
    }
}
