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
//! Guarding of the platform surface texture against misuse.
//!
//! The platform object is shared between the render thread and its owner,
//! which can release it at any time. [`GuardedSurfaceTexture`] serializes
//! access and tracks the attachment and release flags so that late calls from
//! the render thread become harmless no-ops instead of platform errors.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use texlink_core::bridge::{BridgeError, SurfaceTextureBridge, SurfaceTransformMatrix};
use texlink_core::renderer::RawTextureName;

/// The raw platform surface-texture object.
///
/// Calls map one to one onto the platform API and perform no state checks.
pub trait SurfaceTexture: Send {
    /// Binds the producer to the texture named `name`.
    fn attach(&mut self, name: RawTextureName) -> Result<(), BridgeError>;

    /// Unbinds the producer from its texture.
    fn detach(&mut self) -> Result<(), BridgeError>;

    /// Latches the most recent frame.
    fn update_image(&mut self) -> Result<(), BridgeError>;

    /// The lookup-space transform of the latched frame.
    fn transform_matrix(&self) -> Result<SurfaceTransformMatrix, BridgeError>;

    /// Frees the platform object.
    fn release(&mut self);
}

struct Guarded<S> {
    surface: S,
    released: bool,
    attached: bool,
}

type FrameConsumedCallback = Box<dyn Fn() + Send + Sync>;

/// A [`SurfaceTexture`] made safe to drive from the render thread.
///
/// - updates on a released texture are ignored;
/// - attaching while attached detaches first;
/// - detaching only happens while attached and not released;
/// - releasing happens at most once.
pub struct GuardedSurfaceTexture<S: SurfaceTexture> {
    state: Mutex<Guarded<S>>,
    on_frame_consumed: Option<FrameConsumedCallback>,
}

impl<S: SurfaceTexture> GuardedSurfaceTexture<S> {
    /// Wraps `surface`.
    pub fn new(surface: S) -> Self {
        Self {
            state: Mutex::new(Guarded {
                surface,
                released: false,
                attached: false,
            }),
            on_frame_consumed: None,
        }
    }

    /// Wraps `surface`, calling `on_frame_consumed` after every latched frame.
    pub fn with_frame_consumed_callback<F>(surface: S, on_frame_consumed: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            on_frame_consumed: Some(Box::new(on_frame_consumed)),
            ..Self::new(surface)
        }
    }

    /// Releases the platform object. Later calls are no-ops.
    pub fn release(&self) {
        let mut state = self.lock();
        if !state.released {
            state.surface.release();
            state.released = true;
            state.attached = false;
            log::debug!("Surface texture released.");
        }
    }

    /// Returns `true` once [`release`](Self::release) has been called.
    pub fn is_released(&self) -> bool {
        self.lock().released
    }

    /// Returns `true` while the producer is bound to a texture.
    pub fn is_attached(&self) -> bool {
        self.lock().attached
    }

    /// Runs `f` with exclusive access to the wrapped object.
    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.lock().surface)
    }

    fn lock(&self) -> MutexGuard<'_, Guarded<S>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: SurfaceTexture> SurfaceTextureBridge for GuardedSurfaceTexture<S> {
    fn attach_to_context(&self, name: RawTextureName) -> Result<(), BridgeError> {
        let mut state = self.lock();
        if state.released {
            log::debug!("Ignoring attach to texture {}: surface texture released.", name.0);
            return Ok(());
        }
        // A recreated context leaves the producer bound to a texture that no
        // longer exists.
        if state.attached {
            state.surface.detach()?;
            state.attached = false;
        }
        state.surface.attach(name)?;
        state.attached = true;
        Ok(())
    }

    fn detach_from_context(&self) -> Result<(), BridgeError> {
        let mut state = self.lock();
        if state.attached && !state.released {
            state.surface.detach()?;
            state.attached = false;
        }
        Ok(())
    }

    fn update_image(&self) -> Result<(), BridgeError> {
        {
            let mut state = self.lock();
            if state.released {
                return Ok(());
            }
            state.surface.update_image()?;
        }
        if let Some(callback) = &self.on_frame_consumed {
            callback();
        }
        Ok(())
    }

    fn transform_matrix(&self) -> Result<SurfaceTransformMatrix, BridgeError> {
        self.lock().surface.transform_matrix()
    }
}

impl<S: SurfaceTexture> fmt::Debug for GuardedSurfaceTexture<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("GuardedSurfaceTexture")
            .field("released", &state.released)
            .field("attached", &state.attached)
            .field("on_frame_consumed", &self.on_frame_consumed.is_some())
            .finish()
    }
}
