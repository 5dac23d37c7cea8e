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

use super::test_utils::*;
use crate::pem_scanner::PemBlocks;

fn labels(data: &[u8]) -> Vec<String> {
    PemBlocks::new(data).map(|block| block.label).collect()
}

#[test]
fn yields_blocks_in_input_order() {
    let data = bundle(&[ROOT_A, PRIVATE_KEY, ROOT_B]);

    let blocks: Vec<_> = PemBlocks::new(&data).collect();
    assert_eq!(blocks.len(), 3);

    assert_eq!(blocks[0].label, "CERTIFICATE");
    assert_eq!(blocks[0].contents, der_of(ROOT_A));
    assert!(blocks[0].headers.is_empty());

    assert_eq!(blocks[1].label, "PRIVATE KEY");

    assert_eq!(blocks[2].label, "CERTIFICATE");
    assert_eq!(blocks[2].contents, der_of(ROOT_B));
}

#[test]
fn empty_input() {
    assert_eq!(PemBlocks::new(b"").count(), 0);
    assert_eq!(PemBlocks::new(b"no pem here\n").count(), 0);
}

#[test]
fn ignores_text_around_blocks() {
    let data = bundle(&[
        "# Test Root A\nSHA1 fingerprint: not checked\n",
        ROOT_A,
        "trailing notes",
    ]);

    let blocks: Vec<_> = PemBlocks::new(&data).collect();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].contents, der_of(ROOT_A));
}

#[test]
fn skips_block_with_invalid_base64() {
    let data = bundle(&[BAD_BASE64, ROOT_A]);

    let blocks: Vec<_> = PemBlocks::new(&data).collect();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].contents, der_of(ROOT_A));
}

#[test]
fn skips_block_with_mismatched_end_label() {
    let body = ROOT_B
        .replace("-----END CERTIFICATE-----", "-----END PRIVATE KEY-----");
    let data = bundle(&[&body, ROOT_A]);

    let blocks: Vec<_> = PemBlocks::new(&data).collect();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].contents, der_of(ROOT_A));
}

#[test]
fn stops_at_truncated_trailer() {
    let truncated = &ROOT_B[..ROOT_B.len() / 2];
    let data = bundle(&[ROOT_A, truncated]);
    assert_eq!(labels(&data), vec!["CERTIFICATE"]);

    let unterminated = ROOT_B.trim_end().trim_end_matches('-');
    let data = bundle(&[ROOT_A, unterminated]);
    assert_eq!(labels(&data), vec!["CERTIFICATE"]);
}

#[test]
fn keeps_headers() {
    let data = bundle(&[CERT_WITH_HEADERS]);

    let blocks: Vec<_> = PemBlocks::new(&data).collect();
    assert_eq!(blocks.len(), 1);

    let block = &blocks[0];
    assert_eq!(block.label, "CERTIFICATE");
    assert_eq!(block.headers.len(), 2);
    assert_eq!(block.headers[0].0, "Proc-Type");
    assert_eq!(block.headers[1].0, "DEK-Info");
    assert_eq!(block.contents, der_of(ROOT_B));
}

#[test]
fn begin_marker_must_start_a_line() {
    let data = format!("junk{ROOT_A}");
    assert!(labels(data.as_bytes()).is_empty());

    let data = format!("junk{}{ROOT_B}", ROOT_A.trim_end());
    assert!(labels(data.as_bytes()).is_empty());

    let data = format!("junk{ROOT_A}{ROOT_B}");
    let blocks: Vec<_> = PemBlocks::new(data.as_bytes()).collect();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].contents, der_of(ROOT_B));

    let data = bundle(&[ROOT_A, ROOT_B]);
    assert_eq!(labels(&data), vec!["CERTIFICATE", "CERTIFICATE"]);
}

#[test]
fn accepts_crlf_line_endings() {
    let crlf = ROOT_A.replace('\n', "\r\n");
    let data = bundle(&[&crlf, ROOT_B]);

    let blocks: Vec<_> = PemBlocks::new(&data).collect();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].contents, der_of(ROOT_A));
    assert_eq!(blocks[1].contents, der_of(ROOT_B));
}
