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

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod certificate;
pub mod compress;
pub mod contract;
pub mod emitter;
mod error;
pub mod generator;
pub mod output;
pub mod pem_scanner;

pub use certificate::{select_certificates, CertificateRecord};
pub use compress::{compress, uncompress};
pub use contract::PoolContract;
pub use emitter::{EmissionUnit, GeneratedSource};
pub use error::{Error, Result};
pub use generator::{Generator, GeneratorConfig, Summary};
pub use pem_scanner::{PemBlock, PemBlocks};

#[cfg(test)]
pub(crate) mod tests;
