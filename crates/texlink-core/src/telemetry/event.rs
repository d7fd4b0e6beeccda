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

//! Diagnostic event types emitted by external textures.

use crate::math::Extent2D;
use crate::renderer::{RawTextureName, TextureIdentity};
use std::fmt;

/// The severity of a diagnostic, mirroring the `log` facade's levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Very verbose, per-frame information.
    Trace,
    /// Information useful while debugging an integration.
    Debug,
    /// Lifecycle milestones.
    Info,
    /// Something unexpected that the texture recovered from.
    Warn,
    /// Something the texture could not recover from.
    Error,
}

impl From<DiagnosticLevel> for log::Level {
    fn from(level: DiagnosticLevel) -> Self {
        match level {
            DiagnosticLevel::Trace => log::Level::Trace,
            DiagnosticLevel::Debug => log::Level::Debug,
            DiagnosticLevel::Info => log::Level::Info,
            DiagnosticLevel::Warn => log::Level::Warn,
            DiagnosticLevel::Error => log::Level::Error,
        }
    }
}

/// What happened to a texture.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// A GPU texture was allocated and bound to the producer.
    Attached {
        /// The raw name handed to the producer.
        raw_name: RawTextureName,
        /// The size the texture was allocated with.
        size: Extent2D,
    },
    /// The producer was unbound and the GPU texture released.
    Detached,
    /// A new producer frame was latched.
    FrameUpdated {
        /// Whether the corrected transform is the identity.
        identity_transform: bool,
    },
    /// The rendering context was (re)created.
    ContextCreated,
    /// The rendering context was destroyed.
    ContextDestroyed,
    /// The texture was removed from its registry.
    Unregistered,
    /// A paint was skipped because the texture is detached.
    PaintSkipped,
    /// Paint bounds no longer match the size the texture was allocated with.
    BoundsChanged {
        /// The size the GPU texture was allocated with.
        allocated: Extent2D,
        /// The size of the current paint bounds.
        requested: Extent2D,
    },
    /// Releasing a GPU resource failed; the resource is considered lost.
    ResourceReleaseFailed {
        /// Why the release failed.
        reason: String,
    },
    /// The texture hit an unrecoverable condition.
    Fatal {
        /// Why the texture cannot continue.
        reason: String,
    },
}

impl DiagnosticKind {
    /// The level this kind of event is reported at.
    pub fn default_level(&self) -> DiagnosticLevel {
        match self {
            DiagnosticKind::FrameUpdated { .. } | DiagnosticKind::PaintSkipped => {
                DiagnosticLevel::Trace
            }
            DiagnosticKind::BoundsChanged { .. } => DiagnosticLevel::Debug,
            DiagnosticKind::Attached { .. }
            | DiagnosticKind::Detached
            | DiagnosticKind::ContextCreated
            | DiagnosticKind::ContextDestroyed
            | DiagnosticKind::Unregistered => DiagnosticLevel::Info,
            DiagnosticKind::ResourceReleaseFailed { .. } => DiagnosticLevel::Warn,
            DiagnosticKind::Fatal { .. } => DiagnosticLevel::Error,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Attached { raw_name, size } => {
                write!(f, "attached texture name {} ({size})", raw_name.0)
            }
            DiagnosticKind::Detached => write!(f, "detached from producer"),
            DiagnosticKind::FrameUpdated { identity_transform } => {
                write!(f, "frame updated (identity transform: {identity_transform})")
            }
            DiagnosticKind::ContextCreated => write!(f, "rendering context created"),
            DiagnosticKind::ContextDestroyed => write!(f, "rendering context destroyed"),
            DiagnosticKind::Unregistered => write!(f, "unregistered"),
            DiagnosticKind::PaintSkipped => write!(f, "paint skipped, texture is detached"),
            DiagnosticKind::BoundsChanged {
                allocated,
                requested,
            } => write!(
                f,
                "paint bounds {requested} differ from allocated size {allocated}"
            ),
            DiagnosticKind::ResourceReleaseFailed { reason } => {
                write!(f, "failed to release GPU resource: {reason}")
            }
            DiagnosticKind::Fatal { reason } => write!(f, "fatal: {reason}"),
        }
    }
}

/// A structured diagnostic event about one texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureDiagnostic {
    /// The texture the event is about.
    pub texture_id: TextureIdentity,
    /// The severity of the event.
    pub level: DiagnosticLevel,
    /// What happened.
    pub kind: DiagnosticKind,
}

impl TextureDiagnostic {
    /// Creates an event at the kind's default level.
    pub fn new(texture_id: TextureIdentity, kind: DiagnosticKind) -> Self {
        Self {
            texture_id,
            level: kind.default_level(),
            kind,
        }
    }
}

impl fmt::Display for TextureDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "external texture {}: {}", self.texture_id, self.kind)
    }
}

/// Receives diagnostic events.
///
/// Observers are called synchronously on the thread that produced the event,
/// usually the render thread, and must not block.
pub trait DiagnosticObserver: Send + Sync {
    /// Handles one event.
    fn observe(&self, event: &TextureDiagnostic);
}

/// An observer that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl DiagnosticObserver for NullObserver {
    fn observe(&self, _event: &TextureDiagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_levels() {
        assert_eq!(
            DiagnosticKind::FrameUpdated {
                identity_transform: true
            }
            .default_level(),
            DiagnosticLevel::Trace
        );
        assert_eq!(
            DiagnosticKind::ContextDestroyed.default_level(),
            DiagnosticLevel::Info
        );
        assert_eq!(
            DiagnosticKind::Fatal {
                reason: "x".into()
            }
            .default_level(),
            DiagnosticLevel::Error
        );
    }

    #[test]
    fn level_maps_onto_log() {
        assert_eq!(log::Level::from(DiagnosticLevel::Warn), log::Level::Warn);
        assert!(DiagnosticLevel::Trace < DiagnosticLevel::Error);
    }

    #[test]
    fn diagnostic_display() {
        let event = TextureDiagnostic::new(
            TextureIdentity(9),
            DiagnosticKind::Attached {
                raw_name: RawTextureName(4),
                size: Extent2D::new(320, 240),
            },
        );
        assert_eq!(event.level, DiagnosticLevel::Info);
        assert_eq!(
            event.to_string(),
            "external texture #9: attached texture name 4 (320x240)"
        );
    }
}
