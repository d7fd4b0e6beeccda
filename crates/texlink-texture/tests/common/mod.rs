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
//! Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use texlink_core::bridge::{BridgeError, SurfaceTextureBridge, SurfaceTransformMatrix};
use texlink_core::math::{Extent2D, Rect, Vec2};
use texlink_core::renderer::{
    BackendTexture, Canvas, GpuDevice, GpuImage, ImageFactory, ImageHandle, ImageInfo, Paint,
    RawTextureAllocator, RawTextureName, ResourceError, SamplingOptions, SurfaceOrigin,
    TextureDescriptor, TextureId, TextureIdentity, TextureTarget,
};
use texlink_core::settings::ExternalTextureSettings;
use texlink_telemetry::EventBusObserver;
use texlink_texture::{ExternalTextureAdapter, PaintContext};

// --- BRIDGE ---

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BridgeCall {
    Attach(RawTextureName),
    Detach,
    UpdateImage,
    TransformMatrix,
}

/// A surface texture bridge that records every call and reports a
/// configurable producer matrix.
#[derive(Debug)]
pub struct RecordingBridge {
    calls: Mutex<Vec<BridgeCall>>,
    matrix: Mutex<SurfaceTransformMatrix>,
    fail_update: Mutex<Option<BridgeError>>,
}

impl Default for RecordingBridge {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            matrix: Mutex::new(SurfaceTransformMatrix::IDENTITY),
            fail_update: Mutex::new(None),
        }
    }
}

impl RecordingBridge {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_matrix(&self, matrix: SurfaceTransformMatrix) {
        *self.matrix.lock().unwrap() = matrix;
    }

    pub fn fail_next_update(&self, error: BridgeError) {
        *self.fail_update.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<BridgeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn update_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| **c == BridgeCall::UpdateImage)
            .count()
    }
}

impl SurfaceTextureBridge for RecordingBridge {
    fn attach_to_context(&self, name: RawTextureName) -> Result<(), BridgeError> {
        self.calls.lock().unwrap().push(BridgeCall::Attach(name));
        Ok(())
    }

    fn detach_from_context(&self) -> Result<(), BridgeError> {
        self.calls.lock().unwrap().push(BridgeCall::Detach);
        Ok(())
    }

    fn update_image(&self) -> Result<(), BridgeError> {
        self.calls.lock().unwrap().push(BridgeCall::UpdateImage);
        match self.fail_update.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn transform_matrix(&self) -> Result<SurfaceTransformMatrix, BridgeError> {
        self.calls.lock().unwrap().push(BridgeCall::TransformMatrix);
        Ok(*self.matrix.lock().unwrap())
    }
}

// --- IMAGES ---

#[derive(Debug)]
pub struct MockImage {
    pub serial: usize,
    pub size: Extent2D,
}

impl GpuImage for MockImage {
    fn size(&self) -> Extent2D {
        self.size
    }

    fn origin(&self) -> SurfaceOrigin {
        SurfaceOrigin::TopLeft
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageRequest {
    Wrapped {
        texture: TextureId,
        size: Extent2D,
        target: TextureTarget,
    },
    Borrowed {
        texture: BackendTexture,
        info: ImageInfo,
    },
}

/// An image factory that hands out numbered images.
#[derive(Debug, Default)]
pub struct MockImageFactory {
    requests: Mutex<Vec<ImageRequest>>,
    serial: AtomicUsize,
}

impl MockImageFactory {
    pub fn requests(&self) -> Vec<ImageRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn images_made(&self) -> usize {
        self.serial.load(Ordering::SeqCst)
    }

    fn make(&self, size: Extent2D, request: ImageRequest) -> ImageHandle {
        self.requests.lock().unwrap().push(request);
        let serial = self.serial.fetch_add(1, Ordering::SeqCst) + 1;
        Arc::new(MockImage { serial, size })
    }
}

impl ImageFactory for MockImageFactory {
    fn wrap_device_texture(
        &self,
        texture: TextureId,
        descriptor: &TextureDescriptor<'_>,
    ) -> Result<ImageHandle, ResourceError> {
        Ok(self.make(
            descriptor.size,
            ImageRequest::Wrapped {
                texture,
                size: descriptor.size,
                target: descriptor.target,
            },
        ))
    }

    fn borrow_backend_texture(
        &self,
        texture: &BackendTexture,
        info: &ImageInfo,
    ) -> Result<ImageHandle, ResourceError> {
        Ok(self.make(
            texture.size,
            ImageRequest::Borrowed {
                texture: *texture,
                info: *info,
            },
        ))
    }
}

// --- CANVAS ---

#[derive(Debug, Clone)]
pub enum CanvasOp {
    Save,
    Restore,
    Translate(f32, f32),
    Scale(f32, f32),
    DrawImage {
        image: ImageHandle,
        origin: Vec2,
        sampling: SamplingOptions,
        paint: Option<Paint>,
    },
    DrawRect {
        rect: Rect,
        paint: Paint,
    },
}

impl CanvasOp {
    pub fn is_draw(&self) -> bool {
        matches!(self, CanvasOp::DrawImage { .. } | CanvasOp::DrawRect { .. })
    }
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn draws(&self) -> Vec<&CanvasOp> {
        self.ops.iter().filter(|op| op.is_draw()).collect()
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.ops.push(CanvasOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(CanvasOp::Restore);
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.ops.push(CanvasOp::Translate(tx, ty));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.ops.push(CanvasOp::Scale(sx, sy));
    }

    fn draw_image(
        &mut self,
        image: &ImageHandle,
        origin: Vec2,
        sampling: SamplingOptions,
        paint: Option<&Paint>,
    ) {
        self.ops.push(CanvasOp::DrawImage {
            image: Arc::clone(image),
            origin,
            sampling,
            paint: paint.cloned(),
        });
    }

    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.ops.push(CanvasOp::DrawRect {
            rect,
            paint: paint.clone(),
        });
    }
}

// --- GPU RESOURCES ---

/// A managed device handing out sequential texture ids.
#[derive(Debug, Default)]
pub struct MockDevice {
    pub created: Mutex<Vec<TextureDescriptor<'static>>>,
    pub destroyed: Mutex<Vec<TextureId>>,
    pub fail_create: bool,
    pub withhold_raw_names: bool,
}

impl MockDevice {
    pub fn live_textures(&self) -> usize {
        self.created.lock().unwrap().len() - self.destroyed.lock().unwrap().len()
    }
}

impl GpuDevice for MockDevice {
    fn create_texture(&self, descriptor: &TextureDescriptor<'_>) -> Result<TextureId, ResourceError> {
        if self.fail_create {
            return Err(ResourceError::BackendError("out of memory".into()));
        }
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
        (!self.withhold_raw_names).then(|| RawTextureName(1000 + id.0 as u32))
    }
}

/// A raw allocator handing out sequential names starting at 1.
#[derive(Debug, Default)]
pub struct MockAllocator {
    next: AtomicUsize,
    pub deleted: Mutex<Vec<RawTextureName>>,
}

impl MockAllocator {
    pub fn generated(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }

    pub fn deleted(&self) -> Vec<RawTextureName> {
        self.deleted.lock().unwrap().clone()
    }
}

impl RawTextureAllocator for MockAllocator {
    fn generate_texture(&self) -> Result<RawTextureName, ResourceError> {
        Ok(RawTextureName(self.next.fetch_add(1, Ordering::SeqCst) as u32 + 1))
    }

    fn delete_texture(&self, name: RawTextureName) {
        self.deleted.lock().unwrap().push(name);
    }
}

// --- FIXTURE ---

pub const BOUNDS: Rect = Rect::from_xywh(10.0, 20.0, 320.0, 240.0);

/// An adapter on the raw-name strategy wired to recording collaborators.
pub struct Fixture {
    pub bridge: Arc<RecordingBridge>,
    pub allocator: Arc<MockAllocator>,
    pub images: MockImageFactory,
    pub observer: Arc<EventBusObserver>,
    pub adapter: ExternalTextureAdapter,
}

impl Fixture {
    pub fn raw() -> Self {
        Self::build(None)
    }

    pub fn with_device(device: Arc<MockDevice>) -> Self {
        Self::build(Some(device))
    }

    fn build(device: Option<Arc<MockDevice>>) -> Self {
        let bridge = RecordingBridge::new();
        let allocator = Arc::new(MockAllocator::default());
        let observer = Arc::new(EventBusObserver::new());
        let adapter = ExternalTextureAdapter::new(
            TextureIdentity(42),
            bridge.clone(),
            device.map(|d| d as Arc<dyn GpuDevice>),
            allocator.clone(),
            ExternalTextureSettings::default(),
        )
        .with_observer(observer.clone());
        Self {
            bridge,
            allocator,
            images: MockImageFactory::default(),
            observer,
            adapter,
        }
    }

    /// Paints into a fresh canvas and returns what was drawn.
    pub fn paint(&mut self, freeze: bool) -> (RecordingCanvas, Result<(), texlink_texture::ExternalTextureError>) {
        self.paint_into(BOUNDS, freeze, None)
    }

    pub fn paint_into(
        &mut self,
        bounds: Rect,
        freeze: bool,
        paint: Option<&Paint>,
    ) -> (RecordingCanvas, Result<(), texlink_texture::ExternalTextureError>) {
        let mut canvas = RecordingCanvas::default();
        let result = {
            let mut context = PaintContext {
                canvas: &mut canvas,
                images: &self.images,
                paint,
            };
            self.adapter
                .paint(&mut context, bounds, freeze, SamplingOptions::LINEAR)
        };
        (canvas, result)
    }
}
