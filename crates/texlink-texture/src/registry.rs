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
//! Registry owning every texture known to the renderer.

use crate::error::ExternalTextureError;
use crate::external::FrameSignal;
use crate::texture::{PaintContext, Texture};
use std::collections::BTreeMap;
use texlink_core::math::Rect;
use texlink_core::renderer::{SamplingOptions, TextureIdentity};

/// Owns registered textures and fans rendering-context events out to them.
///
/// Textures are visited in identity order.
#[derive(Default)]
pub struct TextureRegistry {
    textures: BTreeMap<TextureIdentity, Box<dyn Texture>>,
}

impl TextureRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a texture under its own identity.
    ///
    /// ## Errors
    ///
    /// [`ExternalTextureError::DuplicateTexture`] if the identity is taken; the
    /// registered texture is kept and `texture` is dropped.
    pub fn register(&mut self, texture: Box<dyn Texture>) -> Result<(), ExternalTextureError> {
        let id = texture.id();
        if self.textures.contains_key(&id) {
            log::warn!("Texture {id} is already registered.");
            return Err(ExternalTextureError::DuplicateTexture(id));
        }
        self.textures.insert(id, texture);
        log::info!("Registered texture {id}.");
        Ok(())
    }

    /// Removes a texture, notifying it before it is dropped.
    pub fn unregister(&mut self, id: TextureIdentity) -> Result<(), ExternalTextureError> {
        let mut texture = self
            .textures
            .remove(&id)
            .ok_or(ExternalTextureError::UnknownTexture(id))?;
        texture.on_unregistered();
        log::info!("Unregistered texture {id}.");
        Ok(())
    }

    /// Returns `true` if a texture is registered under `id`.
    pub fn contains(&self, id: TextureIdentity) -> bool {
        self.textures.contains_key(&id)
    }

    /// The number of registered textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns `true` if no texture is registered.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// The identities of every registered texture, in order.
    pub fn ids(&self) -> impl Iterator<Item = TextureIdentity> + '_ {
        self.textures.keys().copied()
    }

    /// Notifies every texture that a new rendering context was created.
    pub fn on_context_created(&mut self) {
        log::debug!("Rendering context created, notifying {} textures.", self.len());
        for texture in self.textures.values_mut() {
            texture.on_context_created();
        }
    }

    /// Notifies every texture that the rendering context is being destroyed.
    pub fn on_context_destroyed(&mut self) {
        log::debug!("Rendering context destroyed, notifying {} textures.", self.len());
        for texture in self.textures.values_mut() {
            texture.on_context_destroyed();
        }
    }

    /// Signals a new frame on the texture registered under `id`.
    pub fn mark_new_frame_available(&self, id: TextureIdentity) -> Result<(), ExternalTextureError> {
        self.textures
            .get(&id)
            .ok_or(ExternalTextureError::UnknownTexture(id))?
            .mark_new_frame_available();
        Ok(())
    }

    /// A frame signal for `id` that can be moved to the producer's thread.
    pub fn frame_signal(&self, id: TextureIdentity) -> Option<FrameSignal> {
        self.textures.get(&id).and_then(|texture| texture.frame_signal())
    }

    /// Paints the texture registered under `id`.
    pub fn paint(
        &mut self,
        id: TextureIdentity,
        context: &mut PaintContext<'_>,
        bounds: Rect,
        freeze: bool,
        sampling: SamplingOptions,
    ) -> Result<(), ExternalTextureError> {
        self.textures
            .get_mut(&id)
            .ok_or(ExternalTextureError::UnknownTexture(id))?
            .paint(context, bounds, freeze, sampling)
    }
}

impl std::fmt::Debug for TextureRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureRegistry")
            .field("textures", &self.textures.keys().collect::<Vec<_>>())
            .finish()
    }
}
