// Copyright (c) 2026 bin2verilog Authors.
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

/// Global debug flag and logger setup
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use std::sync::OnceLock;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Initialize the debug flag. Must be called once at startup.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.set(enabled).ok();
}

/// Check if debug mode is enabled
pub fn is_debug() -> bool {
    *DEBUG_ENABLED.get().unwrap_or(&false)
}

/// Start the logger. Everything goes to stderr; stdout is reserved for the
/// converted listing. `RUST_LOG` wins over the default spec unless debug
/// mode is on.
///
/// Keep the returned handle alive for the life of the program.
pub fn init_logging() -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = if is_debug() {
        Logger::try_with_str("debug")?
    } else {
        Logger::try_with_env_or_str("warn")?
    };
    logger.log_to_stderr().start()
}
