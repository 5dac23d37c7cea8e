// Copyright 2026 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

//! Splits a byte blob into the PEM blocks it contains.
//!
//! The scanner is tolerant of noise: text outside of `-----BEGIN` /
//! `-----END` line pairs is ignored, and a block that fails to decode is
//! skipped without hiding any well-formed block that follows it. A `BEGIN`
//! marker only counts at the start of the input or of a line.

use log::debug;

const BEGIN_MARKER: &[u8] = b"-----BEGIN ";
const END_MARKER: &[u8] = b"-----END ";
const DASHES: &[u8] = b"-----";

/// A single decoded PEM block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PemBlock {
    /// Type label taken from the `BEGIN` line (e.g. `CERTIFICATE`).
    pub label: String,

    /// RFC 1421 style headers (`Proc-Type`, `DEK-Info`, ...).
    pub headers: Vec<(String, String)>,

    /// The base64-decoded body.
    pub contents: Vec<u8>,
}

impl From<pem::Pem> for PemBlock {
    fn from(pem: pem::Pem) -> Self {
        let label = pem.tag().to_owned();
        let headers = pem
            .headers()
            .iter()
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect();

        PemBlock {
            label,
            headers,
            contents: pem.into_contents(),
        }
    }
}

/// Lazy iterator over the PEM blocks of a byte slice.
///
/// Iteration ends when no further `BEGIN` marker is found, or when the last
/// marker has no complete `END` line after it. Neither case is an error.
#[derive(Clone, Debug)]
pub struct PemBlocks<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PemBlocks<'a> {
    /// Start scanning `data` from its first byte.
    pub fn new(data: &'a [u8]) -> Self {
        PemBlocks { data, pos: 0 }
    }

    /// Offset of the next `BEGIN` marker at or after `self.pos` that starts
    /// a line.
    fn next_begin(&self) -> Option<usize> {
        let mut from = self.pos;
        loop {
            let at = from + find(&self.data[from..], BEGIN_MARKER)?;
            if at == 0 || self.data[at - 1] == b'\n' {
                return Some(at);
            }
            from = at + 1;
        }
    }
}

impl Iterator for PemBlocks<'_> {
    type Item = PemBlock;

    fn next(&mut self) -> Option<PemBlock> {
        loop {
            let begin = self.next_begin()?;
            let candidate = &self.data[begin..];

            let Some(len) = framed_len(candidate) else {
                self.pos = self.data.len();
                return None;
            };

            match pem::parse(&candidate[..len]) {
                Ok(pem) => {
                    self.pos = begin + len;
                    return Some(pem.into());
                }
                Err(e) => {
                    debug!("skipping malformed PEM block at byte {begin}: {e}");
                    self.pos = begin + BEGIN_MARKER.len();
                }
            }
        }
    }
}

/// Length of the block starting at `candidate`, up to and including the line
/// break that closes its `END` line.
fn framed_len(candidate: &[u8]) -> Option<usize> {
    let end = find(candidate, END_MARKER)? + END_MARKER.len();
    let mut len = end + find(&candidate[end..], DASHES)? + DASHES.len();

    if candidate[len..].starts_with(b"\r") {
        len += 1;
    }
    if candidate[len..].starts_with(b"\n") {
        len += 1;
    }
    Some(len)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
