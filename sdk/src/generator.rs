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

//! Drives a bundle generation run.
//!
//! `certs.pem` -> PEM blocks -> certificates -> emission units -> formatted
//! module -> output file. The first failure aborts the run and nothing is
//! written.

use std::{fs, path::PathBuf};

use log::{debug, info};

use crate::{
    certificate::select_certificates,
    contract::PoolContract,
    emitter::{EmissionUnit, GeneratedSource},
    output::write_output,
    Error, Result,
};

/// Bundle read when no other input is configured.
pub const DEFAULT_INPUT: &str = "certs.pem";

/// File written when no other output is configured.
pub const DEFAULT_OUTPUT: &str = "bundled_roots.rs";

/// Command named by the "do not edit" marker.
pub const DEFAULT_COMMAND: &str = "roots-gen";

/// Settings for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// PEM bundle to read.
    pub input: PathBuf,

    /// File to write. Its display form is also recorded in the marker.
    pub output: PathBuf,

    /// Command recorded in the marker.
    pub command: String,

    /// Contract the generated code targets.
    pub contract: PoolContract,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            command: DEFAULT_COMMAND.to_owned(),
            contract: PoolContract::default(),
        }
    }
}

/// Outcome of a successful [`Generator::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// Number of registration statements emitted.
    pub certificates: usize,

    /// Size of the written file.
    pub bytes_written: usize,
}

/// Generates a bundled roots module.
#[derive(Clone, Debug, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator for `config`.
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    /// The configuration of this generator.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Select and compress the certificates of `pem_data`, keeping input
    /// order.
    pub fn build_source(&self, pem_data: &[u8]) -> Result<GeneratedSource> {
        let mut source = GeneratedSource::new(
            self.config.command.clone(),
            self.config.output.display().to_string(),
            self.config.contract,
        );

        for (index, cert) in select_certificates(pem_data)?.iter().enumerate() {
            let unit = EmissionUnit::from_record(index, cert)?;
            debug!(
                "emitting certificate #{index}: {} DER bytes compressed to {}",
                cert.raw_der.len(),
                unit.compressed_payload.len()
            );
            source.push(unit);
        }

        Ok(source)
    }

    /// Produce the formatted module text for `pem_data`.
    pub fn generate(&self, pem_data: &[u8]) -> Result<String> {
        self.build_source(pem_data)?.render()
    }

    /// Read the configured input, generate and write the configured output.
    pub fn run(&self) -> Result<Summary> {
        let input = &self.config.input;
        let pem_data = fs::read(input).map_err(|source| Error::InputRead {
            path: input.clone(),
            source,
        })?;

        let source = self.build_source(&pem_data)?;
        let text = source.render()?;
        write_output(&self.config.output, text.as_bytes())?;

        let summary = Summary {
            certificates: source.units.len(),
            bytes_written: text.len(),
        };
        info!(
            "wrote {} certificates ({} bytes) from {} to {}",
            summary.certificates,
            summary.bytes_written,
            input.display(),
            self.config.output.display()
        );

        Ok(summary)
    }
}
