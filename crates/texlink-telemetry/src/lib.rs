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
//! # Texlink Telemetry
//!
//! Ready-made [`DiagnosticObserver`](texlink_core::telemetry::DiagnosticObserver)
//! implementations and logger initialisation.
//!
//! External textures never log by themselves: they hand structured
//! [`TextureDiagnostic`](texlink_core::telemetry::TextureDiagnostic) events to an
//! observer. The observers here forward those events to the `log` facade,
//! capture them on an event bus, count them, or fan them out to several sinks.

#![warn(missing_docs)]

pub mod logging;
pub mod observers;

pub use logging::{init_logging, try_init_test_logging, LOG_TARGET};
pub use observers::{
    EventBusObserver, FanOutObserver, FrameStats, FrameStatsObserver, LogObserver,
};
