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
use crate::logging::LOG_TARGET;
use texlink_core::telemetry::{DiagnosticLevel, DiagnosticObserver, TextureDiagnostic};

/// Forwards diagnostics to the `log` facade.
///
/// Each event is logged at its own level under [`LOG_TARGET`], so the usual
/// `RUST_LOG=texlink::texture=debug` filtering applies.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    min_level: DiagnosticLevel,
}

impl LogObserver {
    /// Creates an observer that forwards every event.
    pub fn new() -> Self {
        Self {
            min_level: DiagnosticLevel::Trace,
        }
    }

    /// Creates an observer that drops events below `min_level` before they
    /// reach the logger.
    pub fn with_min_level(min_level: DiagnosticLevel) -> Self {
        Self { min_level }
    }

    /// Returns `true` if an event at `level` would be forwarded.
    pub fn accepts(&self, level: DiagnosticLevel) -> bool {
        level >= self.min_level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticObserver for LogObserver {
    fn observe(&self, event: &TextureDiagnostic) {
        if self.accepts(event.level) {
            let level: log::Level = event.level.into();
            log::log!(target: LOG_TARGET, level, "{event}");
        }
    }
}
