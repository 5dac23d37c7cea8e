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

//! Selects the certificates of a PEM bundle.
//!
//! Only blocks labelled exactly `CERTIFICATE` and carrying no PEM headers
//! are kept. Everything else (private keys, `TRUSTED CERTIFICATE` blocks,
//! certificates annotated with headers) is dropped without error. A kept
//! block that does not decode as an X.509 certificate aborts selection.

use log::debug;
use x509_parser::{certificate::X509Certificate, extensions::ParsedExtension, prelude::FromDer};

use crate::{
    pem_scanner::{PemBlock, PemBlocks},
    Error, Result,
};

/// PEM label of the blocks that are kept.
pub const CERTIFICATE_LABEL: &str = "CERTIFICATE";

/// The parts of a certificate needed to reconstruct it lazily.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateRecord {
    /// The complete DER encoding of the certificate.
    pub raw_der: Vec<u8>,

    /// DER encoding of the subject distinguished name.
    pub subject_dn: Vec<u8>,

    /// Value of the subject key identifier extension, or empty when the
    /// certificate has none.
    pub subject_key_id: Vec<u8>,
}

impl CertificateRecord {
    /// Decode a DER certificate.
    ///
    /// `index` is the position of the block among the accepted blocks and is
    /// only used to report [`Error::Decode`].
    pub fn from_der(index: usize, raw_der: Vec<u8>) -> Result<Self> {
        let decode_error = |reason: String| Error::Decode { index, reason };

        let (subject_dn, subject_key_id) = {
            let (rem, cert) =
                X509Certificate::from_der(&raw_der).map_err(|e| decode_error(e.to_string()))?;
            if !rem.is_empty() {
                return Err(decode_error(format!(
                    "{} trailing bytes after certificate",
                    rem.len()
                )));
            }

            let subject_dn = cert.subject().as_raw().to_vec();
            let subject_key_id = cert
                .extensions()
                .iter()
                .find_map(|ext| match ext.parsed_extension() {
                    ParsedExtension::SubjectKeyIdentifier(key_id) => Some(key_id.0.to_vec()),
                    _ => None,
                })
                .unwrap_or_default();

            (subject_dn, subject_key_id)
        };

        Ok(CertificateRecord {
            raw_der,
            subject_dn,
            subject_key_id,
        })
    }
}

/// Returns `true` if `block` takes part in the bundle.
pub fn is_accepted(block: &PemBlock) -> bool {
    block.label == CERTIFICATE_LABEL && block.headers.is_empty()
}

/// Scan `pem_data` and decode every accepted block, in input order.
///
/// Returns [`Error::Decode`] for the first accepted block that is not a valid
/// certificate.
pub fn select_certificates(pem_data: &[u8]) -> Result<Vec<CertificateRecord>> {
    let mut certs = Vec::new();

    for block in PemBlocks::new(pem_data) {
        if !is_accepted(&block) {
            debug!(
                "skipping {} block with {} header(s)",
                block.label,
                block.headers.len()
            );
            continue;
        }

        let cert = CertificateRecord::from_der(certs.len(), block.contents)?;
        debug!(
            "certificate #{}: {} bytes, key id {}",
            certs.len(),
            cert.raw_der.len(),
            hex_key_id(&cert.subject_key_id)
        );
        certs.push(cert);
    }

    Ok(certs)
}

fn hex_key_id(key_id: &[u8]) -> String {
    if key_id.is_empty() {
        return "<none>".to_owned();
    }
    key_id.iter().map(|b| format!("{b:02x}")).collect()
}
