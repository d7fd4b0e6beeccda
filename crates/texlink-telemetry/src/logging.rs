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
//! Logger initialisation built on `env_logger`.

use env_logger::{Builder, Env};

/// The `log` target external-texture diagnostics are emitted under.
pub const LOG_TARGET: &str = "texlink::texture";

/// Installs `env_logger` as the global logger.
///
/// `RUST_LOG` takes precedence; `default_filter` is used when it is unset.
///
/// ## Errors
///
/// Fails if a global logger has already been installed.
pub fn init_logging(default_filter: &str) -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init()
}

/// Installs a test-friendly logger that writes through the test harness's
/// captured output.
///
/// Safe to call from every test: only the first call installs a logger.
pub fn try_init_test_logging() {
    let _ = Builder::from_env(Env::default().default_filter_or("trace"))
        .is_test(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_is_idempotent() {
        try_init_test_logging();
        try_init_test_logging();
        log::info!(target: LOG_TARGET, "logger ready");
        assert!(init_logging("info").is_err());
    }
}
