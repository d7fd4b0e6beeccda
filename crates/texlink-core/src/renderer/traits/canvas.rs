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

use crate::math::{Rect, Vec2};
use crate::renderer::api::{ImageHandle, Paint, SamplingOptions};
use std::ops::{Deref, DerefMut};

/// A draw target with a transform stack.
///
/// Transform operations pre-concatenate onto the current matrix, so the last
/// call is the first one applied to geometry.
pub trait Canvas {
    /// Pushes the current transform onto the stack.
    fn save(&mut self);

    /// Pops the transform stack. Unbalanced restores are ignored.
    fn restore(&mut self);

    /// Translates the current transform.
    fn translate(&mut self, tx: f32, ty: f32);

    /// Scales the current transform.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Draws `image` with its top-left corner at `origin`.
    fn draw_image(
        &mut self,
        image: &ImageHandle,
        origin: Vec2,
        sampling: SamplingOptions,
        paint: Option<&Paint>,
    );

    /// Fills `rect` with `paint`.
    fn draw_rect(&mut self, rect: Rect, paint: &Paint);
}

/// Saves a canvas on creation and restores it when dropped.
///
/// ```
/// # use texlink_core::renderer::{Canvas, CanvasRestoreGuard};
/// fn draw_flipped(canvas: &mut dyn Canvas) {
///     let mut scoped = CanvasRestoreGuard::new(canvas);
///     scoped.scale(1.0, -1.0);
///     // ... draws ...
/// } // restored here
/// ```
pub struct CanvasRestoreGuard<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> CanvasRestoreGuard<'a, C> {
    /// Saves `canvas` and returns a guard that restores it on drop.
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.save();
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for CanvasRestoreGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for CanvasRestoreGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for CanvasRestoreGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
