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
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use texlink_core::telemetry::{DiagnosticKind, DiagnosticObserver, TextureDiagnostic};

/// A point-in-time copy of the counters kept by [`FrameStatsObserver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// GPU textures allocated and bound to a producer.
    pub attaches: u64,
    /// Producers detached and GPU textures released.
    pub detaches: u64,
    /// Producer frames latched.
    pub frame_updates: u64,
    /// Frames latched with a non-identity transform.
    pub transformed_frames: u64,
    /// Paints skipped because the texture was detached.
    pub skipped_paints: u64,
    /// Paints whose bounds differed from the allocated size.
    pub bounds_changes: u64,
    /// GPU resources that could not be released.
    pub release_failures: u64,
    /// Unrecoverable errors.
    pub fatal_errors: u64,
}

impl FrameStats {
    /// Serializes the snapshot to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Counts diagnostics by kind.
///
/// Counters are relaxed atomics: a snapshot taken while events are being
/// observed on another thread may mix counts from before and after an event.
#[derive(Debug, Default)]
pub struct FrameStatsObserver {
    attaches: AtomicU64,
    detaches: AtomicU64,
    frame_updates: AtomicU64,
    transformed_frames: AtomicU64,
    skipped_paints: AtomicU64,
    bounds_changes: AtomicU64,
    release_failures: AtomicU64,
    fatal_errors: AtomicU64,
}

impl FrameStatsObserver {
    /// Creates an observer with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the current counters.
    pub fn snapshot(&self) -> FrameStats {
        FrameStats {
            attaches: self.attaches.load(Ordering::Relaxed),
            detaches: self.detaches.load(Ordering::Relaxed),
            frame_updates: self.frame_updates.load(Ordering::Relaxed),
            transformed_frames: self.transformed_frames.load(Ordering::Relaxed),
            skipped_paints: self.skipped_paints.load(Ordering::Relaxed),
            bounds_changes: self.bounds_changes.load(Ordering::Relaxed),
            release_failures: self.release_failures.load(Ordering::Relaxed),
            fatal_errors: self.fatal_errors.load(Ordering::Relaxed),
        }
    }

    /// Resets every counter to zero.
    pub fn reset(&self) {
        for counter in [
            &self.attaches,
            &self.detaches,
            &self.frame_updates,
            &self.transformed_frames,
            &self.skipped_paints,
            &self.bounds_changes,
            &self.release_failures,
            &self.fatal_errors,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

impl DiagnosticObserver for FrameStatsObserver {
    fn observe(&self, event: &TextureDiagnostic) {
        match &event.kind {
            DiagnosticKind::Attached { .. } => Self::bump(&self.attaches),
            DiagnosticKind::Detached => Self::bump(&self.detaches),
            DiagnosticKind::FrameUpdated { identity_transform } => {
                Self::bump(&self.frame_updates);
                if !identity_transform {
                    Self::bump(&self.transformed_frames);
                }
            }
            DiagnosticKind::PaintSkipped => Self::bump(&self.skipped_paints),
            DiagnosticKind::BoundsChanged { .. } => Self::bump(&self.bounds_changes),
            DiagnosticKind::ResourceReleaseFailed { .. } => Self::bump(&self.release_failures),
            DiagnosticKind::Fatal { .. } => Self::bump(&self.fatal_errors),
            DiagnosticKind::ContextCreated
            | DiagnosticKind::ContextDestroyed
            | DiagnosticKind::Unregistered => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use texlink_core::math::Extent2D;
    use texlink_core::renderer::{RawTextureName, TextureIdentity};

    fn emit(observer: &FrameStatsObserver, kind: DiagnosticKind) {
        observer.observe(&TextureDiagnostic::new(TextureIdentity(1), kind));
    }

    #[test]
    fn counts_by_kind() {
        let stats = FrameStatsObserver::new();
        emit(
            &stats,
            DiagnosticKind::Attached {
                raw_name: RawTextureName(1),
                size: Extent2D::new(4, 4),
            },
        );
        emit(
            &stats,
            DiagnosticKind::FrameUpdated {
                identity_transform: true,
            },
        );
        emit(
            &stats,
            DiagnosticKind::FrameUpdated {
                identity_transform: false,
            },
        );
        emit(&stats, DiagnosticKind::PaintSkipped);
        emit(&stats, DiagnosticKind::ContextCreated);

        assert_eq!(
            stats.snapshot(),
            FrameStats {
                attaches: 1,
                frame_updates: 2,
                transformed_frames: 1,
                skipped_paints: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn reset_clears_counters() {
        let stats = FrameStatsObserver::new();
        emit(
            &stats,
            DiagnosticKind::Fatal {
                reason: "x".into(),
            },
        );
        assert_eq!(stats.snapshot().fatal_errors, 1);
        stats.reset();
        assert_eq!(stats.snapshot(), FrameStats::default());
    }

    #[test]
    fn snapshot_serializes() {
        let stats = FrameStatsObserver::new();
        emit(&stats, DiagnosticKind::Detached);
        let json = stats.snapshot().to_json().unwrap();
        assert!(json.contains("\"detaches\":1"));
    }
}
