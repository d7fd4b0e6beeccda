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

//! Defines the collaborator traits the texture adapter drives.
//!
//! - [`GpuDevice`]: creates and destroys managed device textures.
//! - [`RawTextureAllocator`]: generates and deletes raw texture names.
//! - [`ImageFactory`]: wraps GPU textures as paintable images.
//! - [`Canvas`]: the draw target a frame is composited into.

mod canvas;
mod graphics_device;
mod image_factory;

pub use self::canvas::{Canvas, CanvasRestoreGuard};
pub use self::graphics_device::{GpuDevice, RawTextureAllocator};
pub use self::image_factory::ImageFactory;
