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
//! # Texlink Texture
//!
//! Bridges frames from an external producer (camera, video decoder, platform
//! view) into a GPU-backed rendering pipeline.
//!
//! The central type is [`ExternalTextureAdapter`]: a per-texture state machine
//! that allocates a GPU texture on first paint, binds it to the producer's
//! surface texture, latches new frames on demand, corrects the producer's
//! texture-space transform, and draws the result onto a canvas. The
//! [`TextureRegistry`] owns adapters and fans out rendering-context events.

#![warn(missing_docs)]

pub mod error;
pub mod external;
pub mod registry;
pub mod surface_texture;
pub mod texture;

pub use error::ExternalTextureError;
pub use external::{
    AttachmentState, DeviceTextureProvider, ExternalTextureAdapter, FrameSignal, FrameUpdate,
    GpuTextureHandleProvider, HandleStrategy, PaintContext, RawHandleProvider, TextureTransform,
};
pub use registry::TextureRegistry;
pub use surface_texture::{GuardedSurfaceTexture, SurfaceTexture};
pub use texture::Texture;
