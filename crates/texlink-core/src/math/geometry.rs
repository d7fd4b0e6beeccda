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

//! Axis-aligned rectangles in canvas space.

use super::{Extent2D, Vec2};

/// An axis-aligned rectangle described by its top-left corner and size.
///
/// Canvas space has its origin at the top-left with Y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x: f32,
    /// The y-coordinate of the top edge.
    pub y: f32,
    /// The width of the rectangle.
    pub width: f32,
    /// The height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// The unit square `(0, 0, 1, 1)`.
    pub const UNIT: Self = Self::from_xywh(0.0, 0.0, 1.0, 1.0);

    /// Creates a rectangle from its left, top, width and height.
    #[inline]
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_wh(width: f32, height: f32) -> Self {
        Self::from_xywh(0.0, 0.0, width, height)
    }

    /// The top-left corner.
    #[inline]
    pub const fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// The bottom-left corner (`y + height`).
    #[inline]
    pub fn bottom_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y + self.height)
    }

    /// The y-coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns `true` if the rectangle has no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// The size of this rectangle in whole pixels.
    ///
    /// Fractional sizes are truncated and negative sizes saturate to zero.
    #[inline]
    pub fn pixel_extent(&self) -> Extent2D {
        Extent2D::new(self.width as u32, self.height as u32)
    }
}
