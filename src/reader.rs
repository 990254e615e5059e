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

//! Sequential reader of fixed-size records.
//!
//! Record boundaries are purely positional: every `RECORD_SIZE` bytes is one
//! record. A short read at the end of the stream is the normal end of input,
//! the leftover bytes are counted and dropped.

use log::debug;
use std::io::{self, ErrorKind, Read};

use crate::record::{InstructionWord, RECORD_SIZE};

pub struct Records<R> {
    inner: R,
    trailing: usize,
    done: bool,
}

impl<R: Read> Records<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            trailing: 0,
            done: false,
        }
    }

    /// Bytes of an incomplete final record, if the stream ended mid-record.
    pub fn trailing_bytes(&self) -> usize {
        self.trailing
    }

    // Like read_exact, but EOF before the buffer is full is not an error.
    fn fill(&mut self, buf: &mut [u8; RECORD_SIZE]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for Records<R> {
    type Item = io::Result<InstructionWord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut buf = [0u8; RECORD_SIZE];
        match self.fill(&mut buf) {
            Ok(RECORD_SIZE) => Some(Ok(InstructionWord::from_bytes(buf))),
            Ok(n) => {
                self.done = true;
                self.trailing = n;
                if n > 0 {
                    debug!("Dropping {} trailing byte(s) of an incomplete record", n);
                }
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Records<R> {}
