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

use std::{io, path::PathBuf};

use thiserror::Error;

/// `Error` enumerates the failures that abort a bundle generation run.
///
/// Every variant is fatal: the generator stops at the first error and leaves
/// the output target untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The PEM bundle could not be read.
    #[error("unable to read {}: {source}", path.display())]
    InputRead {
        /// Path of the bundle.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// An accepted `CERTIFICATE` block does not hold a valid certificate.
    #[error("certificate #{index} could not be parsed: {reason}")]
    Decode {
        /// 0-based position among the accepted blocks.
        index: usize,
        /// Parser message.
        reason: String,
    },

    /// The compressor failed while encoding a certificate.
    #[error("certificate #{index} could not be compressed: {source}")]
    Compression {
        /// 0-based position among the accepted blocks.
        index: usize,
        /// Underlying writer failure.
        source: io::Error,
    },

    /// A payload is not a valid gzip stream.
    #[error("payload could not be decompressed: {0}")]
    Decompression(io::Error),

    /// The rendered module is not well-formed Rust.
    #[error("generated source is not well-formed: {0}")]
    RenderFormat(#[from] syn::Error),

    /// The output target could not be written.
    #[error("unable to write {}: {source}", path.display())]
    OutputWrite {
        /// Path of the output target.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

/// A specialized `Result` type for bundle generation.
pub type Result<T> = std::result::Result<T, Error>;
