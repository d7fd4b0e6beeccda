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

//! # Texlink Core
//!
//! Foundational crate containing the math primitives, renderer contracts, and
//! diagnostic types shared by the external texture bridge.
//!
//! Everything that talks to the outside world (the platform surface texture,
//! the GPU device, the canvas) is expressed here as a trait. Concrete
//! implementations live with the platform embedding, not in this workspace.

#![warn(missing_docs)]

pub mod bridge;
pub mod event;
pub mod math;
pub mod renderer;
pub mod settings;
pub mod telemetry;

pub use bridge::{BridgeError, SurfaceTextureBridge, SurfaceTransformMatrix};
pub use settings::{ExternalTextureSettings, SettingsError};
