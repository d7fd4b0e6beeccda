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
mod common;

use common::{MockAllocator, MockImageFactory, RecordingBridge, RecordingCanvas, BOUNDS};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use texlink_core::bridge::{BridgeError, SurfaceTextureBridge, SurfaceTransformMatrix};
use texlink_core::renderer::{RawTextureName, SamplingOptions, TextureIdentity};
use texlink_core::settings::ExternalTextureSettings;
use texlink_core::telemetry::DiagnosticKind;
use texlink_telemetry::{try_init_test_logging, EventBusObserver, FanOutObserver, LogObserver};
use texlink_texture::{
    AttachmentState, ExternalTextureAdapter, ExternalTextureError, GuardedSurfaceTexture,
    PaintContext, SurfaceTexture, TextureRegistry,
};

struct Harness {
    registry: TextureRegistry,
    allocator: Arc<MockAllocator>,
    observer: Arc<EventBusObserver>,
    images: MockImageFactory,
}

impl Harness {
    fn new() -> Self {
        try_init_test_logging();
        Self {
            registry: TextureRegistry::new(),
            allocator: Arc::new(MockAllocator::default()),
            observer: Arc::new(EventBusObserver::new()),
            images: MockImageFactory::default(),
        }
    }

    fn adapter(&self, id: i64, bridge: Arc<dyn SurfaceTextureBridge>) -> Box<ExternalTextureAdapter> {
        let observer = FanOutObserver::new()
            .with(self.observer.clone())
            .with(Arc::new(LogObserver::new()));
        Box::new(
            ExternalTextureAdapter::new(
                TextureIdentity(id),
                bridge,
                None,
                self.allocator.clone(),
                ExternalTextureSettings::default(),
            )
            .with_observer(Arc::new(observer)),
        )
    }

    fn paint(&mut self, id: i64) -> Result<RecordingCanvas, ExternalTextureError> {
        let mut canvas = RecordingCanvas::default();
        {
            let mut context = PaintContext::new(&mut canvas, &self.images);
            self.registry.paint(
                TextureIdentity(id),
                &mut context,
                BOUNDS,
                false,
                SamplingOptions::LINEAR,
            )?;
        }
        Ok(canvas)
    }
}

#[test]
fn registry_paints_by_identity() -> anyhow::Result<()> {
    let mut harness = Harness::new();
    let first = RecordingBridge::new();
    let second = RecordingBridge::new();
    let adapter = harness.adapter(1, first.clone());
    harness.registry.register(adapter)?;
    let adapter = harness.adapter(2, second.clone());
    harness.registry.register(adapter)?;

    let canvas = harness.paint(2)?;
    assert_eq!(canvas.draws().len(), 1);
    assert!(first.calls().is_empty());
    assert_eq!(second.update_count(), 1);

    assert_eq!(
        harness.paint(9).unwrap_err(),
        ExternalTextureError::UnknownTexture(TextureIdentity(9))
    );
    Ok(())
}

#[test]
fn registry_fans_out_context_loss() -> anyhow::Result<()> {
    let mut harness = Harness::new();
    let bridges = [RecordingBridge::new(), RecordingBridge::new()];
    for (id, bridge) in bridges.iter().enumerate() {
        let adapter = harness.adapter(id as i64, bridge.clone());
        harness.registry.register(adapter)?;
        harness.paint(id as i64)?;
    }

    harness.registry.on_context_destroyed();
    harness.registry.on_context_created();

    assert_eq!(harness.allocator.deleted().len(), 2);
    for bridge in &bridges {
        assert_eq!(bridge.calls().last(), Some(&common::BridgeCall::Detach));
    }
    let canvas = harness.paint(0)?;
    assert!(canvas.ops.is_empty(), "Detached textures stay detached");
    Ok(())
}

#[test]
fn frame_signal_crosses_threads_through_registry() -> anyhow::Result<()> {
    let mut harness = Harness::new();
    let bridge = RecordingBridge::new();
    let adapter = harness.adapter(3, bridge.clone());
    harness.registry.register(adapter)?;
    harness.paint(3)?;

    let signal = harness
        .registry
        .frame_signal(TextureIdentity(3))
        .expect("Adapters expose a frame signal");
    thread::spawn(move || signal.raise()).join().unwrap();
    harness.paint(3)?;

    harness.registry.mark_new_frame_available(TextureIdentity(3))?;
    harness.paint(3)?;

    assert_eq!(bridge.update_count(), 3);
    Ok(())
}

#[test]
fn unregister_notifies_then_releases() -> anyhow::Result<()> {
    let mut harness = Harness::new();
    let adapter = harness.adapter(4, RecordingBridge::new());
    harness.registry.register(adapter)?;
    harness.paint(4)?;
    harness.observer.drain();

    harness.registry.unregister(TextureIdentity(4))?;

    let events = harness.observer.drain();
    assert_eq!(events[0].kind, DiagnosticKind::Unregistered);
    assert_eq!(events[0].texture_id, TextureIdentity(4));
    assert_eq!(harness.allocator.deleted(), vec![RawTextureName(1)]);
    assert!(!harness.registry.contains(TextureIdentity(4)));
    Ok(())
}

#[test]
fn duplicate_registration_keeps_original() -> anyhow::Result<()> {
    let mut harness = Harness::new();
    let original = RecordingBridge::new();
    let adapter = harness.adapter(5, original.clone());
    harness.registry.register(adapter)?;
    let duplicate = harness.adapter(5, RecordingBridge::new());
    let err = harness.registry.register(duplicate).unwrap_err();
    assert_eq!(err, ExternalTextureError::DuplicateTexture(TextureIdentity(5)));

    harness.paint(5)?;
    assert_eq!(original.update_count(), 1);
    Ok(())
}

// --- GUARDED SURFACE TEXTURE END TO END ---

#[derive(Debug, Default)]
struct PlatformSurface {
    attached_to: Arc<Mutex<Option<RawTextureName>>>,
    released: Arc<Mutex<bool>>,
}

impl SurfaceTexture for PlatformSurface {
    fn attach(&mut self, name: RawTextureName) -> Result<(), BridgeError> {
        let mut attached = self.attached_to.lock().unwrap();
        if attached.is_some() {
            return Err(BridgeError::Platform("already attached".into()));
        }
        *attached = Some(name);
        Ok(())
    }

    fn detach(&mut self) -> Result<(), BridgeError> {
        *self.attached_to.lock().unwrap() = None;
        Ok(())
    }

    fn update_image(&mut self) -> Result<(), BridgeError> {
        if *self.released.lock().unwrap() {
            return Err(BridgeError::Released);
        }
        Ok(())
    }

    fn transform_matrix(&self) -> Result<SurfaceTransformMatrix, BridgeError> {
        Ok(SurfaceTransformMatrix::IDENTITY)
    }

    fn release(&mut self) {
        *self.released.lock().unwrap() = true;
    }
}

#[test]
fn guarded_surface_survives_context_recreation_and_release() -> anyhow::Result<()> {
    let mut harness = Harness::new();
    let platform = PlatformSurface::default();
    let attached_to = Arc::clone(&platform.attached_to);
    let consumed = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&consumed);
    let surface = Arc::new(GuardedSurfaceTexture::with_frame_consumed_callback(
        platform,
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    ));
    let adapter = harness.adapter(6, surface.clone());
    harness.registry.register(adapter)?;

    harness.paint(6)?;
    assert_eq!(*attached_to.lock().unwrap(), Some(RawTextureName(1)));

    // A recreated context re-attaches while the platform still holds the old
    // binding; the guard detaches first.
    harness.registry.on_context_created();
    harness.paint(6)?;
    assert_eq!(*attached_to.lock().unwrap(), Some(RawTextureName(2)));
    assert_eq!(consumed.load(Ordering::SeqCst), 2);

    // Once the owner releases the surface, frame pulls become no-ops.
    surface.release();
    harness.registry.mark_new_frame_available(TextureIdentity(6))?;
    let canvas = harness.paint(6)?;
    assert_eq!(canvas.draws().len(), 1);
    assert_eq!(consumed.load(Ordering::SeqCst), 2);

    harness.registry.on_context_destroyed();
    assert!(surface.is_released());
    Ok(())
}

#[test]
fn adapter_state_is_visible_before_registration() {
    let harness = Harness::new();
    let adapter = harness.adapter(7, RecordingBridge::new());
    assert_eq!(adapter.state(), AttachmentState::Uninitialized);
}
