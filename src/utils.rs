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

use std::env;
use std::path::{Path, PathBuf};

/// Default input name, as written by the assembler.
pub const DEFAULT_INPUT: &str = "a.out";

/// Resolve `path` for diagnostics. Works for paths that do not exist, which
/// is exactly when we need to tell the user where we looked.
pub fn resolve_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().unwrap_or_default().join(path)
    };

    // dunce keeps Windows paths free of the \\?\ prefix
    dunce::canonicalize(&absolute).unwrap_or(absolute)
}

/// Same as `resolve_path`, with forward slashes on every platform.
pub fn display_path(path: &Path) -> String {
    resolve_path(path).to_string_lossy().replace('\\', "/")
}
