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
//! Tunables for external textures.
//!
//! Settings are plain data: they can be built in code through [`Default`] or
//! loaded from a JSON document in which every field is optional.

use crate::renderer::{PixelFormat, StorageMode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error produced while loading or validating [`ExternalTextureSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings document is not valid JSON or has mistyped fields.
    #[error("Failed to parse texture settings: {0}")]
    Json(#[from] serde_json::Error),
    /// A texture must have at least one mip level.
    #[error("mip_level_count must be at least 1, got {0}")]
    InvalidMipLevelCount(u32),
}

/// Settings applied to every GPU texture an external texture allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalTextureSettings {
    /// The texel format of device-managed textures.
    pub pixel_format: PixelFormat,
    /// Where device-managed texture memory lives.
    pub storage_mode: StorageMode,
    /// The number of mip levels of device-managed textures.
    pub mip_level_count: u32,
    /// Whether a paint whose bounds differ from the allocated size is reported.
    pub report_bounds_changes: bool,
}

impl Default for ExternalTextureSettings {
    fn default() -> Self {
        Self {
            pixel_format: PixelFormat::Rgba8Unorm,
            storage_mode: StorageMode::DevicePrivate,
            mip_level_count: 1,
            report_bounds_changes: true,
        }
    }
}

impl ExternalTextureSettings {
    /// Parses and validates settings from a JSON document.
    ///
    /// Fields missing from the document take their default value.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serializes the settings to a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that the settings describe a texture that can be allocated.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.mip_level_count == 0 {
            return Err(SettingsError::InvalidMipLevelCount(self.mip_level_count));
        }
        Ok(())
    }
}
