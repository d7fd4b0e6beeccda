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

//! Defines the error type for GPU resource operations.

use crate::renderer::api::TextureId;
use thiserror::Error;

/// An error related to the creation or use of a GPU resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The requested texture does not exist on the device.
    #[error("Texture not found for ID: {0:?}")]
    TextureNotFound(TextureId),
    /// The handle or ID used to reference a resource is invalid.
    #[error("Invalid resource handle or ID.")]
    InvalidHandle,
    /// The device has been lost or its context torn down.
    #[error("The graphics context is no longer available.")]
    ContextLost,
    /// The device does not support what was asked of it.
    #[error("Unsupported by the graphics backend: {0}")]
    Unsupported(String),
    /// An error originating from the specific graphics backend implementation.
    #[error("Backend-specific resource error: {0}")]
    BackendError(String),
}
