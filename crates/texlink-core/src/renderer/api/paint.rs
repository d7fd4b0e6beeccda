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

//! Defines sampling options, tile modes, and the paint used for canvas draws.

use super::image::ImageHandle;
use crate::math::Mat3;

/// Defines the filtering mode for texture sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Point sampling. Returns the value of the nearest texel.
    Nearest,
    /// Linear interpolation. Returns a weighted average of the four nearest texels.
    Linear,
}

/// Defines the filtering mode between mipmap levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MipmapMode {
    /// Always sample the base level.
    None,
    /// Use the nearest mipmap level.
    Nearest,
    /// Linearly interpolate between the two nearest mipmap levels.
    Linear,
}

/// How an image is sampled when it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplingOptions {
    /// Filtering within a level.
    pub filter: FilterMode,
    /// Filtering between levels.
    pub mipmap: MipmapMode,
}

impl SamplingOptions {
    /// Nearest-neighbour sampling of the base level.
    pub const NEAREST: Self = Self {
        filter: FilterMode::Nearest,
        mipmap: MipmapMode::None,
    };
    /// Bilinear sampling of the base level.
    pub const LINEAR: Self = Self {
        filter: FilterMode::Linear,
        mipmap: MipmapMode::None,
    };
    /// Trilinear sampling.
    pub const MIPMAP_LINEAR: Self = Self {
        filter: FilterMode::Linear,
        mipmap: MipmapMode::Linear,
    };
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self::NEAREST
    }
}

/// Defines how an image-backed color source behaves outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileMode {
    /// Coordinates are clamped to the edge.
    Clamp,
    /// Coordinates wrap around.
    Repeat,
    /// Coordinates wrap around, mirroring at each integer boundary.
    Mirror,
    /// Coordinates outside the image are transparent.
    Decal,
}

/// A color source that shades geometry with an image.
///
/// `matrix` is applied to the image itself (image space), as if it were
/// inscribed in the unit square.
#[derive(Debug, Clone)]
pub struct ImageColorSource {
    /// The image to sample.
    pub image: ImageHandle,
    /// Horizontal tiling.
    pub tile_x: TileMode,
    /// Vertical tiling.
    pub tile_y: TileMode,
    /// How the image is filtered.
    pub sampling: SamplingOptions,
    /// The image-space transform.
    pub matrix: Mat3,
}

/// Parameters for a canvas draw.
#[derive(Debug, Clone)]
pub struct Paint {
    /// Straight RGBA color used when no color source is set.
    pub color: [f32; 4],
    /// Whether edges are anti-aliased.
    pub anti_alias: bool,
    /// An optional image shader.
    pub color_source: Option<ImageColorSource>,
}

impl Paint {
    /// Returns a copy of this paint shaded by `source`.
    pub fn with_color_source(&self, source: ImageColorSource) -> Self {
        Self {
            color_source: Some(source),
            ..self.clone()
        }
    }

    /// The opacity of this paint.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.color[3]
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0, 1.0],
            anti_alias: false,
            color_source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Extent2D;
    use crate::renderer::api::image::{GpuImage, SurfaceOrigin};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Dummy;

    impl GpuImage for Dummy {
        fn size(&self) -> Extent2D {
            Extent2D::UNIT
        }
        fn origin(&self) -> SurfaceOrigin {
            SurfaceOrigin::TopLeft
        }
    }

    #[test]
    fn with_color_source_keeps_other_fields() {
        let base = Paint {
            color: [1.0, 0.0, 0.0, 0.5],
            anti_alias: true,
            color_source: None,
        };
        let source = ImageColorSource {
            image: Arc::new(Dummy),
            tile_x: TileMode::Repeat,
            tile_y: TileMode::Repeat,
            sampling: SamplingOptions::LINEAR,
            matrix: Mat3::IDENTITY,
        };
        let shaded = base.with_color_source(source);
        assert_eq!(shaded.color, base.color);
        assert!(shaded.anti_alias);
        assert_eq!(shaded.alpha(), 0.5);
        assert!(shaded.color_source.is_some());
        assert!(base.color_source.is_none());
    }

    #[test]
    fn default_paint_is_opaque() {
        let paint = Paint::default();
        assert_eq!(paint.alpha(), 1.0);
        assert!(paint.color_source.is_none());
    }
}
