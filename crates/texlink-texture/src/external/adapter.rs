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
//! The per-texture state machine bridging a producer into the canvas.

use super::signal::FrameSignal;
use super::strategies::{
    DeviceTextureProvider, GpuTextureHandleProvider, HandleStrategy, RawHandleProvider,
};
use super::transform::TextureTransform;
use crate::error::ExternalTextureError;
use crate::texture::{PaintContext, Texture};
use std::fmt;
use std::sync::Arc;
use texlink_core::bridge::SurfaceTextureBridge;
use texlink_core::math::{Extent2D, Rect, Vec2};
use texlink_core::renderer::{
    CanvasRestoreGuard, GpuDevice, ImageColorSource, ImageFactory, ImageHandle,
    RawTextureAllocator, SamplingOptions, TextureIdentity, TileMode,
};
use texlink_core::settings::ExternalTextureSettings;
use texlink_core::telemetry::{
    DiagnosticKind, DiagnosticObserver, NullObserver, TextureDiagnostic,
};

/// Where an adapter stands relative to the producer and the GPU context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentState {
    /// No GPU texture exists; the next paint allocates and attaches one.
    Uninitialized,
    /// A GPU texture exists and the producer renders into it.
    Attached,
    /// The producer was detached for good. Terminal.
    Detached,
}

/// The result of latching a producer frame.
#[derive(Debug, Clone)]
pub struct FrameUpdate {
    /// The image-space transform of the latched frame.
    pub transform: TextureTransform,
    /// The latched frame, ready to draw.
    pub image: ImageHandle,
}

/// Bridges frames from an external producer into a canvas.
///
/// The adapter allocates its GPU texture lazily, on the first paint, sized to
/// the paint bounds. Each paint latches a new frame if the producer signalled
/// one (unless frozen) and draws it flipped vertically into the bounds,
/// because the producer's rows run bottom-up relative to the canvas.
///
/// Context events move the adapter through [`AttachmentState`]:
///
/// ```text
/// Uninitialized --paint--> Attached --context destroyed--> Detached
///       ^                     |
///       +--context created----+
/// ```
///
/// Every method except [`mark_new_frame_available`](Self::mark_new_frame_available)
/// must be called from the rendering thread.
pub struct ExternalTextureAdapter {
    id: TextureIdentity,
    bridge: Arc<dyn SurfaceTextureBridge>,
    provider: Box<dyn GpuTextureHandleProvider>,
    settings: ExternalTextureSettings,
    observer: Arc<dyn DiagnosticObserver>,
    state: AttachmentState,
    frame_signal: FrameSignal,
    transform: TextureTransform,
    image: Option<ImageHandle>,
    allocated_size: Option<Extent2D>,
    last_reported_size: Option<Extent2D>,
    fatal_error: Option<ExternalTextureError>,
}

impl ExternalTextureAdapter {
    /// Creates an adapter, picking the allocation strategy from the backend.
    ///
    /// With a managed `device`, textures are created through it. Without one,
    /// raw texture names are generated through `allocator`.
    pub fn new(
        id: TextureIdentity,
        bridge: Arc<dyn SurfaceTextureBridge>,
        device: Option<Arc<dyn GpuDevice>>,
        allocator: Arc<dyn RawTextureAllocator>,
        settings: ExternalTextureSettings,
    ) -> Self {
        let provider: Box<dyn GpuTextureHandleProvider> = match device {
            Some(device) => Box::new(DeviceTextureProvider::new(device, settings)),
            None => Box::new(RawHandleProvider::new(allocator)),
        };
        Self::with_provider(id, bridge, provider, settings)
    }

    /// Creates an adapter with an explicit allocation strategy.
    pub fn with_provider(
        id: TextureIdentity,
        bridge: Arc<dyn SurfaceTextureBridge>,
        provider: Box<dyn GpuTextureHandleProvider>,
        settings: ExternalTextureSettings,
    ) -> Self {
        Self {
            id,
            bridge,
            provider,
            settings,
            observer: Arc::new(NullObserver),
            state: AttachmentState::Uninitialized,
            frame_signal: FrameSignal::new(),
            transform: TextureTransform::IDENTITY,
            image: None,
            allocated_size: None,
            last_reported_size: None,
            fatal_error: None,
        }
    }

    /// Routes this adapter's diagnostics to `observer`.
    pub fn with_observer(mut self, observer: Arc<dyn DiagnosticObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The identity of this texture.
    pub fn id(&self) -> TextureIdentity {
        self.id
    }

    /// The current attachment state.
    pub fn state(&self) -> AttachmentState {
        self.state
    }

    /// The transform applied to the last latched frame.
    pub fn transform(&self) -> TextureTransform {
        self.transform
    }

    /// Returns `true` if a latched frame is cached.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// The size the GPU texture was allocated with, while attached.
    pub fn allocated_size(&self) -> Option<Extent2D> {
        self.allocated_size
    }

    /// The fatal error that stopped this adapter from painting, if any.
    pub fn fatal_error(&self) -> Option<&ExternalTextureError> {
        self.fatal_error.as_ref()
    }

    /// The allocation backend in use.
    pub fn strategy(&self) -> HandleStrategy {
        self.provider.strategy()
    }

    /// The settings this adapter was built with.
    pub fn settings(&self) -> &ExternalTextureSettings {
        &self.settings
    }

    /// A handle the producer side can raise from any thread.
    pub fn frame_signal(&self) -> FrameSignal {
        self.frame_signal.clone()
    }

    /// Signals that the producer has a new frame.
    pub fn mark_new_frame_available(&self) {
        self.frame_signal.raise();
    }

    /// Draws the current frame into `bounds`.
    ///
    /// The first paint allocates a GPU texture sized to `bounds` and attaches
    /// the producer to it. A new frame is latched when one was signalled and
    /// `freeze` is off, or when no frame has been latched yet. A detached
    /// adapter draws nothing and touches neither the producer nor the GPU.
    ///
    /// ## Errors
    ///
    /// Any allocation, producer, or image error. After a fatal error (see
    /// [`ExternalTextureError::is_fatal`]) the cached frame is dropped and
    /// every later paint returns that same error without drawing; the texture
    /// should be unregistered.
    pub fn paint(
        &mut self,
        context: &mut PaintContext<'_>,
        bounds: Rect,
        freeze: bool,
        sampling: SamplingOptions,
    ) -> Result<(), ExternalTextureError> {
        if self.state == AttachmentState::Detached {
            self.emit(DiagnosticKind::PaintSkipped);
            return Ok(());
        }
        if let Some(error) = &self.fatal_error {
            return Err(error.clone());
        }

        match self.state {
            AttachmentState::Uninitialized => self.attach(bounds).map_err(|e| self.fail(e))?,
            AttachmentState::Attached => self.check_bounds(bounds),
            AttachmentState::Detached => {}
        }

        let needs_update = (!freeze && self.frame_signal.is_raised()) || self.image.is_none();
        if needs_update {
            // Cleared before pulling so that a frame signalled meanwhile is
            // picked up by the next paint.
            self.frame_signal.clear();
            match self.update(context.images) {
                Ok(FrameUpdate { transform, image }) => {
                    self.transform = transform;
                    self.image = Some(image);
                    self.emit(DiagnosticKind::FrameUpdated {
                        identity_transform: transform.is_identity(),
                    });
                }
                Err(error) => {
                    self.frame_signal.raise();
                    return Err(self.fail(error));
                }
            }
        }

        if let Some(image) = self.image.clone() {
            self.draw(context, image, bounds, sampling);
        }
        Ok(())
    }

    /// Latches the producer's most recent frame.
    ///
    /// Pulls the frame, reads and inverts the producer's transform, and wraps
    /// the texture into a fresh image. Nothing is stored; the caller decides
    /// what to keep.
    pub fn update(&self, images: &dyn ImageFactory) -> Result<FrameUpdate, ExternalTextureError> {
        self.bridge.update_image()?;
        let producer_matrix = self.bridge.transform_matrix()?;
        let transform = TextureTransform::from_producer(&producer_matrix)?;
        let image = self.provider.make_image(images)?;
        Ok(FrameUpdate { transform, image })
    }

    /// Handles a new rendering context.
    ///
    /// The GPU texture belonged to the previous context and may already be
    /// gone, so it is forgotten rather than freed. The next paint allocates a
    /// new one. A detached adapter stays detached.
    pub fn on_context_created(&mut self) {
        self.image = None;
        self.provider.forget();
        self.allocated_size = None;
        self.last_reported_size = None;
        if self.state != AttachmentState::Detached {
            self.state = AttachmentState::Uninitialized;
        }
        self.emit(DiagnosticKind::ContextCreated);
    }

    /// Handles the destruction of the rendering context.
    ///
    /// An attached producer is detached and the GPU texture freed. The
    /// adapter is detached afterwards, whatever state it was in.
    pub fn on_context_destroyed(&mut self) {
        self.emit(DiagnosticKind::ContextDestroyed);
        self.image = None;
        if self.state == AttachmentState::Attached {
            if let Err(error) = self.bridge.detach_from_context() {
                self.emit(DiagnosticKind::ResourceReleaseFailed {
                    reason: error.to_string(),
                });
            }
            self.release_texture();
            self.emit(DiagnosticKind::Detached);
        }
        self.allocated_size = None;
        self.state = AttachmentState::Detached;
    }

    /// Notifies the adapter that its registry dropped it.
    pub fn on_unregistered(&mut self) {
        self.emit(DiagnosticKind::Unregistered);
    }

    fn attach(&mut self, bounds: Rect) -> Result<(), ExternalTextureError> {
        let size = bounds.pixel_extent();
        let raw_name = self.provider.allocate(size)?;

        if let Err(error) = self.bridge.attach_to_context(raw_name) {
            self.release_texture();
            return Err(error.into());
        }

        self.state = AttachmentState::Attached;
        self.allocated_size = Some(size);
        self.last_reported_size = Some(size);
        self.emit(DiagnosticKind::Attached { raw_name, size });
        Ok(())
    }

    fn check_bounds(&mut self, bounds: Rect) {
        if !self.settings.report_bounds_changes {
            return;
        }
        let requested = bounds.pixel_extent();
        if self.last_reported_size == Some(requested) {
            return;
        }
        self.last_reported_size = Some(requested);
        if let Some(allocated) = self.allocated_size.filter(|&a| a != requested) {
            self.emit(DiagnosticKind::BoundsChanged {
                allocated,
                requested,
            });
        }
    }

    fn draw(
        &self,
        context: &mut PaintContext<'_>,
        image: ImageHandle,
        bounds: Rect,
        sampling: SamplingOptions,
    ) {
        let mut canvas = CanvasRestoreGuard::new(&mut *context.canvas);
        canvas.translate(bounds.x, bounds.bottom());
        canvas.scale(bounds.width, -bounds.height);

        if self.transform.is_identity() {
            canvas.draw_image(&image, Vec2::ZERO, sampling, context.paint);
        } else {
            let mut paint = context.paint.cloned().unwrap_or_default();
            paint.color_source = Some(ImageColorSource {
                image,
                tile_x: TileMode::Repeat,
                tile_y: TileMode::Repeat,
                sampling,
                matrix: self.transform.matrix(),
            });
            canvas.draw_rect(Rect::UNIT, &paint);
        }
    }

    fn release_texture(&mut self) {
        if let Err(error) = self.provider.release() {
            self.emit(DiagnosticKind::ResourceReleaseFailed {
                reason: error.to_string(),
            });
        }
    }

    /// Reports `error` and, if it is fatal, stops the adapter from drawing again.
    ///
    /// The GPU texture may already hold a frame the cached transform does not
    /// describe, so the cached image is dropped with it.
    fn fail(&mut self, error: ExternalTextureError) -> ExternalTextureError {
        if error.is_fatal() {
            self.image = None;
            self.fatal_error = Some(error.clone());
            self.emit(DiagnosticKind::Fatal {
                reason: error.to_string(),
            });
        }
        error
    }

    fn emit(&self, kind: DiagnosticKind) {
        self.observer.observe(&TextureDiagnostic::new(self.id, kind));
    }
}

impl fmt::Debug for ExternalTextureAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalTextureAdapter")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("strategy", &self.provider.strategy())
            .field("transform", &self.transform)
            .field("has_image", &self.image.is_some())
            .field("allocated_size", &self.allocated_size)
            .field("fatal_error", &self.fatal_error)
            .finish()
    }
}

impl Drop for ExternalTextureAdapter {
    fn drop(&mut self) {
        if self.state == AttachmentState::Attached {
            self.image = None;
            self.release_texture();
        }
    }
}

impl Texture for ExternalTextureAdapter {
    fn id(&self) -> TextureIdentity {
        self.id
    }

    fn paint(
        &mut self,
        context: &mut PaintContext<'_>,
        bounds: Rect,
        freeze: bool,
        sampling: SamplingOptions,
    ) -> Result<(), ExternalTextureError> {
        ExternalTextureAdapter::paint(self, context, bounds, freeze, sampling)
    }

    fn on_context_created(&mut self) {
        ExternalTextureAdapter::on_context_created(self);
    }

    fn on_context_destroyed(&mut self) {
        ExternalTextureAdapter::on_context_destroyed(self);
    }

    fn mark_new_frame_available(&self) {
        ExternalTextureAdapter::mark_new_frame_available(self);
    }

    fn on_unregistered(&mut self) {
        ExternalTextureAdapter::on_unregistered(self);
    }

    fn frame_signal(&self) -> Option<FrameSignal> {
        Some(ExternalTextureAdapter::frame_signal(self))
    }
}
