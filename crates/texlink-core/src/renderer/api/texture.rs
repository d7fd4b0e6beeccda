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

//! Defines data structures related to GPU texture resources.

use crate::math::Extent2D;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The identity under which a texture is known to the texture registry.
///
/// This is the value handed to the UI layer; it never changes for the lifetime
/// of the texture object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureIdentity(pub i64);

impl fmt::Display for TextureIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An opaque handle to a texture managed by a [`GpuDevice`](crate::renderer::GpuDevice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// A raw, backend-level texture name (e.g. a GL texture object name).
///
/// Zero is never a valid name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawTextureName(pub u32);

impl RawTextureName {
    /// Returns `true` if this is a real texture name rather than the null name.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Where a texture's memory lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    /// Memory that the host can map and write to.
    HostVisible,
    /// Memory only the device can access.
    DevicePrivate,
    /// Memory that only lives for the duration of a render pass.
    DeviceTransient,
}

/// The format of the texels in a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    /// Red, green, blue, and alpha channels. 8 bit integer per channel. [0, 255] converted to/from float [0, 1] in shader.
    Rgba8Unorm,
    /// Blue, green, red, and alpha channels. 8 bit integer per channel. [0, 255] converted to/from float [0, 1] in shader.
    Bgra8Unorm,
}

impl PixelFormat {
    /// Returns the number of bytes a single texel occupies.
    #[inline]
    pub const fn bytes_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Rgba8Unorm | PixelFormat::Bgra8Unorm => 4,
        }
    }
}

/// The binding target a texture is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    /// An ordinary 2D texture.
    Texture2D,
    /// An external image stream (`GL_TEXTURE_EXTERNAL_OES`), sampled through a
    /// platform-provided conversion.
    ExternalOes,
}

impl TextureTarget {
    /// The GL enum value for this target.
    #[inline]
    pub const fn gl_enum(self) -> u32 {
        match self {
            TextureTarget::Texture2D => 0x0DE1,
            TextureTarget::ExternalOes => 0x8D65,
        }
    }
}

/// A descriptor used to create a [`TextureId`] on a [`GpuDevice`](crate::renderer::GpuDevice).
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// Where the texture memory lives.
    pub storage_mode: StorageMode,
    /// The format of the texels in the texture.
    pub format: PixelFormat,
    /// The dimensions of the texture.
    pub size: Extent2D,
    /// The number of mipmap levels for the texture.
    pub mip_level_count: u32,
    /// The binding target of the texture.
    pub target: TextureTarget,
}

/// The sized internal format of a borrowed backend texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendInternalFormat {
    /// `GL_RGBA8_OES`.
    Rgba8Oes,
}

impl BackendInternalFormat {
    /// The GL enum value for this format.
    #[inline]
    pub const fn gl_enum(self) -> u32 {
        match self {
            BackendInternalFormat::Rgba8Oes => 0x8058,
        }
    }
}

/// Describes a texture that already exists on the backend and is only borrowed.
///
/// Nothing is allocated from this descriptor; it tells the
/// [`ImageFactory`](crate::renderer::ImageFactory) how to interpret a raw name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTexture {
    /// The binding target of the texture.
    pub target: TextureTarget,
    /// The raw texture name.
    pub name: RawTextureName,
    /// The sized internal format.
    pub internal_format: BackendInternalFormat,
    /// The logical size of the texture.
    pub size: Extent2D,
    /// Whether the texture carries a mipmap chain.
    pub mipmapped: bool,
}

impl BackendTexture {
    /// Describes an external-image texture bound to `name`.
    ///
    /// The real dimensions of an external image are only known to the producer,
    /// so the logical size is a 1x1 placeholder and sampling happens in unit
    /// texture space.
    pub const fn external_oes(name: RawTextureName) -> Self {
        Self {
            target: TextureTarget::ExternalOes,
            name,
            internal_format: BackendInternalFormat::Rgba8Oes,
            size: Extent2D::UNIT,
            mipmapped: false,
        }
    }
}
