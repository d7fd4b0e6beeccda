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
use std::sync::Arc;
use texlink_core::telemetry::{DiagnosticObserver, TextureDiagnostic};

/// Forwards each diagnostic to several observers, in registration order.
#[derive(Default)]
pub struct FanOutObserver {
    observers: Vec<Arc<dyn DiagnosticObserver>>,
}

impl FanOutObserver {
    /// Creates an observer with no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sink, builder style.
    pub fn with(mut self, observer: Arc<dyn DiagnosticObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Adds a sink.
    pub fn push(&mut self, observer: Arc<dyn DiagnosticObserver>) {
        self.observers.push(observer);
    }

    /// The number of sinks.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns `true` if there are no sinks.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for FanOutObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanOutObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl DiagnosticObserver for FanOutObserver {
    fn observe(&self, event: &TextureDiagnostic) {
        for observer in &self.observers {
            observer.observe(event);
        }
    }
}
