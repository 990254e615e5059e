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

use std::fmt;

use crate::record::{InstructionWord, BIT_WIDTH};

/// Default number of hex digits in a case label.
pub const DEFAULT_LABEL_DIGITS: u32 = 2;

/// Widest label supported; 8 digits already covers a 32-bit address space.
pub const MAX_LABEL_DIGITS: u32 = 8;

/// Fixed-width lowercase hex selector for one case entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseLabel {
    pub index: u64,
    pub digits: u32,
}

impl CaseLabel {
    pub fn new(index: u64, digits: u32) -> Self {
        Self { index, digits }
    }

    /// Number of distinct labels representable with `digits` hex digits,
    /// saturating at `u64::MAX`.
    pub fn capacity(digits: u32) -> u64 {
        16u64.checked_pow(digits).unwrap_or(u64::MAX)
    }

    pub fn fits(&self) -> bool {
        self.index < Self::capacity(self.digits)
    }

    pub fn bit_width(&self) -> u32 {
        self.digits * 4
    }
}

impl fmt::Display for CaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.index, width = self.digits as usize)
    }
}

/// How a case entry is spelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// `0a:   data = 0101...;`
    #[default]
    Plain,
    /// Verilog sized literals: `8'h0a:   data = 32'b0101...;`
    Sized,
}

/// One emitted line: a label and the bit pattern of its instruction word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseLine {
    pub label: CaseLabel,
    pub word: InstructionWord,
    pub style: LineStyle,
}

impl CaseLine {
    pub fn new(label: CaseLabel, word: InstructionWord, style: LineStyle) -> Self {
        Self { label, word, style }
    }
}

impl fmt::Display for CaseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.word.bit_pattern();
        match self.style {
            LineStyle::Plain => write!(f, "{}:   data = {};", self.label, bits),
            LineStyle::Sized => write!(
                f,
                "{}'h{}:   data = {}'b{};",
                self.label.bit_width(),
                self.label,
                BIT_WIDTH,
                bits
            ),
        }
    }
}
