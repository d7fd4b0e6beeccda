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
//! The contract the registry drives every texture through.

use crate::error::ExternalTextureError;
use crate::external::FrameSignal;
use texlink_core::math::Rect;
use texlink_core::renderer::{Canvas, ImageFactory, Paint, SamplingOptions, TextureIdentity};

/// Everything a texture needs from the caller to draw one frame.
pub struct PaintContext<'a> {
    /// The canvas to draw onto.
    pub canvas: &'a mut dyn Canvas,
    /// The image factory of the current rendering context.
    pub images: &'a dyn ImageFactory,
    /// An optional paint applied to the draw.
    pub paint: Option<&'a Paint>,
}

impl<'a> PaintContext<'a> {
    /// Creates a context without a paint.
    pub fn new(canvas: &'a mut dyn Canvas, images: &'a dyn ImageFactory) -> Self {
        Self {
            canvas,
            images,
            paint: None,
        }
    }

    /// Sets the paint applied to the draw.
    pub fn with_paint(mut self, paint: &'a Paint) -> Self {
        self.paint = Some(paint);
        self
    }
}

/// A texture that can be registered, painted, and notified of rendering
/// context events.
pub trait Texture: Send {
    /// The identity under which this texture is registered.
    fn id(&self) -> TextureIdentity;

    /// Draws the current frame into `bounds`.
    ///
    /// # Arguments
    /// * `context` - The canvas, image factory, and paint to draw with.
    /// * `bounds` - Where to draw, in canvas coordinates.
    /// * `freeze` - When set, keep showing the cached frame even if a new one
    ///   is available.
    /// * `sampling` - How the frame is filtered.
    fn paint(
        &mut self,
        context: &mut PaintContext<'_>,
        bounds: Rect,
        freeze: bool,
        sampling: SamplingOptions,
    ) -> Result<(), ExternalTextureError>;

    /// Called after a new rendering context was created.
    fn on_context_created(&mut self);

    /// Called when the rendering context is about to be destroyed.
    fn on_context_destroyed(&mut self);

    /// Signals that a new frame is available. May be called from any thread.
    fn mark_new_frame_available(&self);

    /// Called when the texture is removed from its registry, before it is dropped.
    fn on_unregistered(&mut self);

    /// A signal the producer side can raise without going through the registry.
    fn frame_signal(&self) -> Option<FrameSignal> {
        None
    }
}
