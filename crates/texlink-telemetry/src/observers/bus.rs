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
use texlink_core::event::EventBus;
use texlink_core::telemetry::{DiagnosticObserver, TextureDiagnostic};

/// Publishes every diagnostic on an [`EventBus`].
///
/// Useful when diagnostics must be consumed away from the render thread, and
/// in tests, which drain the bus to assert on the exact event sequence.
#[derive(Debug, Default)]
pub struct EventBusObserver {
    bus: EventBus<TextureDiagnostic>,
}

impl EventBusObserver {
    /// Creates an observer backed by an unbounded bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an observer whose bus keeps at most `capacity` pending events.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            bus: EventBus::bounded(capacity),
        }
    }

    /// The receiving end of the bus.
    pub fn receiver(&self) -> &flume::Receiver<TextureDiagnostic> {
        self.bus.receiver()
    }

    /// Takes every pending diagnostic, oldest first.
    pub fn drain(&self) -> Vec<TextureDiagnostic> {
        self.bus.drain()
    }
}

impl DiagnosticObserver for EventBusObserver {
    fn observe(&self, event: &TextureDiagnostic) {
        self.bus.publish(event.clone());
    }
}
