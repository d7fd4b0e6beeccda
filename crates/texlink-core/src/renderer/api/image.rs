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

//! Paintable images backed by GPU textures.

use crate::math::Extent2D;
use std::fmt::Debug;
use std::sync::Arc;

/// Which corner of the image row zero refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceOrigin {
    /// Row zero is the top row.
    TopLeft,
    /// Row zero is the bottom row.
    BottomLeft,
}

/// The channel layout of a wrapped image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorType {
    /// 8 bits per channel, RGBA order.
    Rgba8888,
}

/// How the alpha channel of a wrapped image is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphaType {
    /// Every pixel is fully opaque.
    Opaque,
    /// Color channels are premultiplied by alpha.
    Premul,
    /// Color channels are independent of alpha.
    Unpremul,
}

/// Interpretation metadata for a borrowed backend texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageInfo {
    /// Which corner row zero refers to.
    pub origin: SurfaceOrigin,
    /// The channel layout.
    pub color_type: ColorType,
    /// The alpha interpretation.
    pub alpha_type: AlphaType,
}

impl ImageInfo {
    /// The interpretation used for external producer frames: top-left origin,
    /// RGBA8888, premultiplied alpha.
    pub const EXTERNAL_FRAME: Self = Self {
        origin: SurfaceOrigin::TopLeft,
        color_type: ColorType::Rgba8888,
        alpha_type: AlphaType::Premul,
    };
}

/// An immutable image a [`Canvas`](crate::renderer::Canvas) can draw.
pub trait GpuImage: Debug + Send + Sync {
    /// The logical size of the image.
    fn size(&self) -> Extent2D;

    /// Which corner row zero refers to.
    fn origin(&self) -> SurfaceOrigin;
}

/// A shared handle to a paintable image.
pub type ImageHandle = Arc<dyn GpuImage>;
