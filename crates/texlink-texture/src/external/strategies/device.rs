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
use std::borrow::Cow;
use std::sync::Arc;
use texlink_core::math::Extent2D;
use texlink_core::renderer::{
    GpuDevice, ImageFactory, ImageHandle, RawTextureName, ResourceError, TextureDescriptor,
    TextureId, TextureTarget,
};
use texlink_core::settings::ExternalTextureSettings;

#[derive(Debug, Clone, Copy)]
struct DeviceTexture {
    id: TextureId,
    name: RawTextureName,
    size: Extent2D,
}

/// Allocates external textures through a managed [`GpuDevice`].
///
/// The device owns the texture memory; the producer is attached to the raw
/// name the device reports for it, and frames are wrapped directly from the
/// managed texture.
#[derive(Debug)]
pub struct DeviceTextureProvider {
    device: Arc<dyn GpuDevice>,
    settings: ExternalTextureSettings,
    texture: Option<DeviceTexture>,
}

impl DeviceTextureProvider {
    /// Creates a provider allocating from `device` with the given settings.
    pub fn new(device: Arc<dyn GpuDevice>, settings: ExternalTextureSettings) -> Self {
        Self {
            device,
            settings,
            texture: None,
        }
    }

    /// The descriptor used to create a texture of `size`.
    pub fn descriptor(&self, size: Extent2D) -> TextureDescriptor<'static> {
        TextureDescriptor {
            label: Some(Cow::Borrowed("external texture")),
            storage_mode: self.settings.storage_mode,
            format: self.settings.pixel_format,
            size,
            mip_level_count: self.settings.mip_level_count,
            target: TextureTarget::ExternalOes,
        }
    }

    /// The device handle of the held texture, if any.
    pub fn texture_id(&self) -> Option<TextureId> {
        self.texture.map(|t| t.id)
    }
}

impl GpuTextureHandleProvider for DeviceTextureProvider {
    fn strategy(&self) -> HandleStrategy {
        HandleStrategy::Device
    }

    fn allocate(&mut self, size: Extent2D) -> Result<RawTextureName, ExternalTextureError> {
        // A failed release only means a leak; allocation can still proceed.
        let _ = self.release();

        let descriptor = self.descriptor(size);
        let id = self
            .device
            .create_texture(&descriptor)
            .map_err(ExternalTextureError::Allocation)?;

        let Some(name) = self.device.raw_texture_name(id) else {
            let _ = self.device.destroy_texture(id);
            return Err(ExternalTextureError::MissingGpuHandle(id));
        };

        self.texture = Some(DeviceTexture { id, name, size });
        Ok(name)
    }

    fn make_image(&self, images: &dyn ImageFactory) -> Result<ImageHandle, ExternalTextureError> {
        let texture = self
            .texture
            .ok_or(ExternalTextureError::ImageCreation(ResourceError::InvalidHandle))?;
        images
            .wrap_device_texture(texture.id, &self.descriptor(texture.size))
            .map_err(ExternalTextureError::ImageCreation)
    }

    fn release(&mut self) -> Result<(), ResourceError> {
        match self.texture.take() {
            Some(texture) => self.device.destroy_texture(texture.id),
            None => Ok(()),
        }
    }

    fn forget(&mut self) {
        self.texture = None;
    }

    fn raw_name(&self) -> Option<RawTextureName> {
        self.texture.map(|t| t.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use texlink_core::renderer::{PixelFormat, StorageMode};

    #[derive(Debug, Default)]
    struct FakeDevice {
        created: Mutex<Vec<TextureDescriptor<'static>>>,
        destroyed: Mutex<Vec<TextureId>>,
        no_raw_names: bool,
    }

    impl GpuDevice for FakeDevice {
        fn create_texture(
            &self,
            descriptor: &TextureDescriptor<'_>,
        ) -> Result<TextureId, ResourceError> {
            let mut created = self.created.lock().unwrap();
            created.push(TextureDescriptor {
                label: None,
                storage_mode: descriptor.storage_mode,
                format: descriptor.format,
                size: descriptor.size,
                mip_level_count: descriptor.mip_level_count,
                target: descriptor.target,
            });
            Ok(TextureId(created.len()))
        }

        fn destroy_texture(&self, id: TextureId) -> Result<(), ResourceError> {
            self.destroyed.lock().unwrap().push(id);
            Ok(())
        }

        fn raw_texture_name(&self, id: TextureId) -> Option<RawTextureName> {
            (!self.no_raw_names).then_some(RawTextureName(id.0 as u32 + 100))
        }
    }

    #[test]
    fn allocates_external_device_private_texture() {
        let device = Arc::new(FakeDevice::default());
        let mut provider =
            DeviceTextureProvider::new(device.clone(), ExternalTextureSettings::default());

        let name = provider.allocate(Extent2D::new(640, 480)).unwrap();
        assert_eq!(name, RawTextureName(101));
        assert_eq!(provider.texture_id(), Some(TextureId(1)));
        assert_eq!(provider.strategy(), HandleStrategy::Device);

        let created = device.created.lock().unwrap();
        let descriptor = &created[0];
        assert_eq!(descriptor.storage_mode, StorageMode::DevicePrivate);
        assert_eq!(descriptor.format, PixelFormat::Rgba8Unorm);
        assert_eq!(descriptor.size, Extent2D::new(640, 480));
        assert_eq!(descriptor.mip_level_count, 1);
        assert_eq!(descriptor.target, TextureTarget::ExternalOes);
    }

    #[test]
    fn missing_raw_name_is_fatal_and_frees_texture() {
        let device = Arc::new(FakeDevice {
            no_raw_names: true,
            ..Default::default()
        });
        let mut provider =
            DeviceTextureProvider::new(device.clone(), ExternalTextureSettings::default());

        let err = provider.allocate(Extent2D::new(4, 4)).unwrap_err();
        assert_eq!(err, ExternalTextureError::MissingGpuHandle(TextureId(1)));
        assert!(err.is_fatal());
        assert!(!provider.is_allocated());
        assert_eq!(*device.destroyed.lock().unwrap(), vec![TextureId(1)]);
    }

    #[test]
    fn release_and_forget() {
        let device = Arc::new(FakeDevice::default());
        let mut provider =
            DeviceTextureProvider::new(device.clone(), ExternalTextureSettings::default());

        provider.allocate(Extent2D::new(4, 4)).unwrap();
        provider.release().unwrap();
        assert!(!provider.is_allocated());

        provider.allocate(Extent2D::new(4, 4)).unwrap();
        provider.forget();
        assert!(!provider.is_allocated());
        provider.release().unwrap();

        assert_eq!(*device.destroyed.lock().unwrap(), vec![TextureId(1)]);
    }
}
