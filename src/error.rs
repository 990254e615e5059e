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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A complete record exists past the last index the label can address.
    #[error("record {index} does not fit in a {digits}-digit case label (at most {capacity} records)")]
    LabelOverflow {
        index: u64,
        digits: u32,
        capacity: u64,
    },

    #[error("label width must be between 1 and 8 hex digits, got {0}")]
    InvalidLabelDigits(u32),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
