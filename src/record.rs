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

/// Size of one instruction word in the assembler output, in bytes.
pub const RECORD_SIZE: usize = 4;

/// Number of characters in a rendered bit pattern.
pub const BIT_WIDTH: usize = RECORD_SIZE * 8;

/// One 32-bit instruction word, holding its bytes in stream order.
///
/// The assembler writes words least-significant byte first, so the last byte
/// in the stream is the most significant one when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionWord {
    bytes: [u8; RECORD_SIZE],
}

impl InstructionWord {
    pub fn from_bytes(bytes: [u8; RECORD_SIZE]) -> Self {
        Self { bytes }
    }

    /// Bytes as they appeared in the input stream.
    pub fn bytes(&self) -> [u8; RECORD_SIZE] {
        self.bytes
    }

    pub fn value(&self) -> u32 {
        u32::from_le_bytes(self.bytes)
    }

    /// Render the word as 32 '0'/'1' characters: bytes in reverse stream
    /// order, each byte MSB first.
    pub fn bit_pattern(&self) -> String {
        let mut s = String::with_capacity(BIT_WIDTH);
        for &b in self.bytes.iter().rev() {
            for bit in (0..8).rev() {
                s.push(if b & (1 << bit) != 0 { '1' } else { '0' });
            }
        }
        s
    }
}

impl From<[u8; RECORD_SIZE]> for InstructionWord {
    fn from(bytes: [u8; RECORD_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}
