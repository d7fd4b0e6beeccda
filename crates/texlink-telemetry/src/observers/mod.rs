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
//! Diagnostic observers.

mod bus;
mod fan_out;
mod log_observer;
mod stats;

pub use self::bus::EventBusObserver;
pub use self::fan_out::FanOutObserver;
pub use self::log_observer::LogObserver;
pub use self::stats::{FrameStats, FrameStatsObserver};
