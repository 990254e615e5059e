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

//! Converts an assembler binary into case entries for a Verilog ROM.
//!
//! Each 4-byte record becomes one line, labelled with its position in the
//! file. Lines are produced lazily so callers can stream them straight to
//! their sink:
//!
//! ```text
//! 00:   data = 00000100000000110000001000000001;
//! 01:   data = 00000000000000000000000000000000;
//! ```

use log::{debug, info};
use std::io::{Read, Write};

use crate::error::{ConvertError, Result};
use crate::format::{CaseLabel, CaseLine, LineStyle, DEFAULT_LABEL_DIGITS, MAX_LABEL_DIGITS};
use crate::reader::Records;

/// Label width and line spelling used for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    label_digits: u32,
    style: LineStyle,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Totals reported once a conversion has run to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub records: u64,
    pub trailing_bytes: usize,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            label_digits: DEFAULT_LABEL_DIGITS,
            style: LineStyle::Plain,
        }
    }

    pub fn with_label_digits(mut self, digits: u32) -> Result<Self> {
        if digits == 0 || digits > MAX_LABEL_DIGITS {
            return Err(ConvertError::InvalidLabelDigits(digits));
        }
        self.label_digits = digits;
        Ok(self)
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn label_digits(&self) -> u32 {
        self.label_digits
    }

    /// Lazily convert `input`, one line per complete record.
    pub fn convert<R: Read>(&self, input: R) -> Lines<R> {
        Lines {
            records: Records::new(input),
            index: 0,
            digits: self.label_digits,
            style: self.style,
            done: false,
        }
    }

    /// Convert `input` and write each line to `out` as soon as it is produced.
    pub fn convert_to<R: Read, W: Write>(&self, input: R, mut out: W) -> Result<Summary> {
        let mut lines = self.convert(input);
        for line in lines.by_ref() {
            let line = line?;
            writeln!(out, "{}", line)?;
            out.flush()?;
        }
        let summary = Summary {
            records: lines.emitted(),
            trailing_bytes: lines.trailing_bytes(),
        };
        if summary.trailing_bytes > 0 {
            debug!(
                "Input ends with an incomplete record; {} byte(s) ignored",
                summary.trailing_bytes
            );
        }
        info!("Converted {} record(s)", summary.records);
        Ok(summary)
    }
}

/// Lazy, finite sequence of converted lines. Once it returns `None` or an
/// error it stays exhausted.
pub struct Lines<R> {
    records: Records<R>,
    index: u64,
    digits: u32,
    style: LineStyle,
    done: bool,
}

impl<R: Read> Lines<R> {
    /// Bytes dropped from an incomplete final record. Meaningful once the
    /// sequence has ended.
    pub fn trailing_bytes(&self) -> usize {
        self.records.trailing_bytes()
    }

    /// Number of lines produced so far.
    pub fn emitted(&self) -> u64 {
        self.index
    }
}

impl<R: Read> Iterator for Lines<R> {
    type Item = Result<CaseLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let word = match self.records.next() {
            Some(Ok(word)) => word,
            Some(Err(e)) => {
                self.done = true;
                return Some(Err(ConvertError::Io(e)));
            }
            None => {
                self.done = true;
                return None;
            }
        };

        let label = CaseLabel::new(self.index, self.digits);
        if !label.fits() {
            self.done = true;
            return Some(Err(ConvertError::LabelOverflow {
                index: self.index,
                digits: self.digits,
                capacity: CaseLabel::capacity(self.digits),
            }));
        }

        debug!("record {}: {:08x}", label, word.value());
        self.index += 1;
        Some(Ok(CaseLine::new(label, word, self.style)))
    }
}

impl<R: Read> std::iter::FusedIterator for Lines<R> {}
