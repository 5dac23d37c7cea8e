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

//! Generates the bundled trusted root certificate module.
//!
//! Reads `certs.pem` from the working directory and writes a Rust module that
//! rebuilds the trust pool from compressed certificates at runtime.
//! Set RUST_LOG=debug to see every block the generator keeps or skips.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bundled_roots::{generator::DEFAULT_OUTPUT, Generator, GeneratorConfig};
use clap::Parser;
use log::debug;

/// Generates the bundled trusted root certificate module from certs.pem.
#[derive(Debug, Parser)]
#[command(version, about)]
struct CliArgs {
    /// File name to write.
    #[arg(long, env = "ROOTS_GEN_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
    debug!("{args:?}");

    let config = GeneratorConfig {
        output: args.output,
        ..GeneratorConfig::default()
    };
    let generator = Generator::new(config);
    let output = generator.config().output.display().to_string();

    let summary = generator
        .run()
        .with_context(|| format!("failed to generate {output}"))?;

    println!("Wrote {} certificates to {output}", summary.certificates);
    Ok(())
}
