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

//! Provides the backend-agnostic rendering contracts consumed by the external texture bridge.
//!
//! This module defines the "common language" between the texture adapter and the
//! renderer around it: the data types ([`TextureDescriptor`], [`BackendTexture`],
//! [`Paint`], ...) and the traits ([`GpuDevice`], [`ImageFactory`], [`Canvas`])
//! the embedding implements. The adapter only ever sees these traits, which keeps
//! it testable without a GPU.

pub mod api;
pub mod error;
pub mod traits;

// Re-export the most important traits and types for easier use.
pub use self::api::*;
pub use self::error::ResourceError;
pub use self::traits::{Canvas, CanvasRestoreGuard, GpuDevice, ImageFactory, RawTextureAllocator};
