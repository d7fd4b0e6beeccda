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
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shareable "new frame available" flag.
///
/// The producer side raises the flag from any thread; the render thread
/// consumes it when it decides to latch a frame. Raising is a single atomic
/// store and never blocks.
#[derive(Debug, Clone, Default)]
pub struct FrameSignal(Arc<AtomicBool>);

impl FrameSignal {
    /// Creates a lowered signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a new frame as available.
    #[inline]
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns `true` if a frame was signalled and not yet consumed.
    #[inline]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Lowers the signal.
    #[inline]
    pub fn clear(&self) {
        self.0.store(false, Ordering::Release);
    }
}
