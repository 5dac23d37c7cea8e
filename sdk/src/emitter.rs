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

//! Renders the generated trust-pool module.
//!
//! A [`GeneratedSource`] is an ordered list of [`EmissionUnit`]s plus the
//! [`PoolContract`] they are emitted against. Rendering is a pure function of
//! that value, so the text can be checked without touching the filesystem.

use proc_macro2::Span;

use crate::{
    certificate::CertificateRecord, compress::compress, contract::PoolContract, Error, Result,
};

const LICENSE_HEADER: &str = "\
// Copyright 2026 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an \"AS IS\" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.
";

/// The literal data emitted for one certificate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmissionUnit {
    /// DER encoding of the subject distinguished name.
    pub subject_dn: Vec<u8>,

    /// Subject key identifier, possibly empty.
    pub subject_key_id: Vec<u8>,

    /// Gzip-compressed DER of the whole certificate.
    pub compressed_payload: Vec<u8>,
}

impl EmissionUnit {
    /// Compress `record` into an emission unit.
    ///
    /// `index` is only used to report [`Error::Compression`].
    pub fn from_record(index: usize, record: &CertificateRecord) -> Result<Self> {
        let compressed_payload =
            compress(&record.raw_der).map_err(|source| Error::Compression { index, source })?;

        Ok(EmissionUnit {
            subject_dn: record.subject_dn.clone(),
            subject_key_id: record.subject_key_id.clone(),
            compressed_payload,
        })
    }
}

/// A complete generated module, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedSource {
    /// Command named by the "do not edit" marker.
    pub command: String,

    /// Output flag value named by the "do not edit" marker.
    pub output: String,

    /// Contract the emitted calls target.
    pub contract: PoolContract,

    /// One unit per certificate, in input order.
    pub units: Vec<EmissionUnit>,
}

impl GeneratedSource {
    /// Create a source with no units.
    pub fn new(command: impl Into<String>, output: impl Into<String>, contract: PoolContract) -> Self {
        GeneratedSource {
            command: command.into(),
            output: output.into(),
            contract,
            units: Vec::new(),
        }
    }

    /// Append a unit after the existing ones.
    pub fn push(&mut self, unit: EmissionUnit) {
        self.units.push(unit);
    }

    /// The machine-generated-file marker line.
    pub fn marker(&self) -> String {
        format!(
            "// Code generated by {} --output {}; DO NOT EDIT.",
            self.command, self.output
        )
    }

    /// Render the module body (everything below the comment preamble)
    /// without formatting it.
    pub fn render_module(&self) -> String {
        let c = &self.contract;

        let mut imports = vec![c.pool_type, c.error_type, c.version_const];
        if !self.units.is_empty() {
            imports.insert(0, c.uncompressor);
        }

        let mut module = format!(
            "#![cfg(not(feature = \"{feature}\"))]\n\
             \n\
             use super::{{{imports}}};\n\
             \n\
             const _: () = assert!({version_const} == {version});\n\
             \n\
             #[allow(unused_mut)]\n\
             pub(crate) fn {entry}() -> Result<{pool}, {error}> {{\n\
             \x20   let mut p = {pool}::{constructor}();\n",
            feature = c.opt_out_feature,
            imports = imports.join(", "),
            pool = c.pool_type,
            error = c.error_type,
            version_const = c.version_const,
            version = c.version,
            entry = c.entry_point,
            constructor = c.pool_constructor,
        );

        for unit in &self.units {
            module.push_str(&format!(
                "    p.{}({}, {}, {}({}));\n",
                c.register,
                byte_string_literal(&unit.subject_dn),
                byte_string_literal(&unit.subject_key_id),
                c.uncompressor,
                byte_string_literal(&unit.compressed_payload),
            ));
        }

        module.push_str("    Ok(p)\n}\n");
        module
    }

    /// Render and format the complete file.
    ///
    /// Returns [`Error::RenderFormat`] if the marker spans more than one line
    /// or if the assembled file does not parse.
    pub fn render(&self) -> Result<String> {
        let marker = self.marker();
        if marker.contains(['\n', '\r']) {
            return Err(syn::Error::new(
                Span::call_site(),
                format!("marker line contains a line break: {marker:?}"),
            )
            .into());
        }

        let module = format_module(&self.render_module())?;
        let text = format!("{marker}\n\n{LICENSE_HEADER}\n{module}");
        syn::parse_file(&text)?;
        Ok(text)
    }
}

/// Parse `module` as a Rust source file and pretty-print it.
pub fn format_module(module: &str) -> Result<String> {
    let file = syn::parse_file(module)?;
    Ok(prettyplease::unparse(&file))
}

/// Encode `bytes` as a Rust byte string literal that evaluates to exactly
/// the same bytes.
pub fn byte_string_literal(bytes: &[u8]) -> String {
    let mut literal = String::with_capacity(bytes.len() * 2 + 3);
    literal.push_str("b\"");

    for &b in bytes {
        match b {
            b'"' => literal.push_str("\\\""),
            b'\\' => literal.push_str("\\\\"),
            b'\n' => literal.push_str("\\n"),
            b'\r' => literal.push_str("\\r"),
            b'\t' => literal.push_str("\\t"),
            0x20..=0x7e => literal.push(char::from(b)),
            _ => literal.push_str(&format!("\\x{b:02x}")),
        }
    }

    literal.push('"');
    literal
}
