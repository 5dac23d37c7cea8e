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

//! Per-certificate payload compression.
//!
//! Every certificate is compressed on its own so that the runtime accessor
//! can inflate any single entry without touching the others.

use std::io::{self, Read, Write};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

use crate::{Error, Result};

/// Gzip `data` at the best compression level.
pub fn compress(data: &[u8]) -> io::Result<Vec<u8>> {
    compress_into(Vec::with_capacity(data.len()), data)
}

/// Gzip `data` at the best compression level into `writer`, returning the
/// writer once the stream is complete.
pub fn compress_into<W: Write>(writer: W, data: &[u8]) -> io::Result<W> {
    let mut encoder = GzEncoder::new(writer, Compression::best());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Inflate a payload produced by [`compress`].
///
/// This is the operation the generated `cert_uncompressor` accessor performs
/// at runtime.
pub fn uncompress(payload: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(payload);
    let mut data = Vec::new();
    decoder
        .read_to_end(&mut data)
        .map_err(Error::Decompression)?;
    Ok(data)
}
