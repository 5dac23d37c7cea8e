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

//! The interface between generated code and the trust pool that consumes it.
//!
//! Generated modules call into items the consuming module must provide.
//! Their names and arities are pinned here as a versioned contract. Any
//! change to a name, an arity or the meaning of an argument is a breaking
//! change: bump [`PoolContract::version`] and regenerate.

/// Names of the items a generated module expects from its parent module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolContract {
    /// Contract revision, asserted at compile time by generated code against
    /// the consumer's [`version_const`](Self::version_const).
    pub version: u32,

    /// Zero-argument function the generated module defines; returns
    /// `Result<pool_type, error_type>`.
    pub entry_point: &'static str,

    /// Trust pool type.
    pub pool_type: &'static str,

    /// Zero-argument associated function creating an empty pool.
    pub pool_constructor: &'static str,

    /// Pool method registering a certificate unless one with the same subject
    /// key id is already present. Takes the subject DN, the subject key id
    /// and an accessor built by [`uncompressor`](Self::uncompressor).
    pub register: &'static str,

    /// Function wrapping a compressed payload in an accessor that returns the
    /// original DER bytes when invoked.
    pub uncompressor: &'static str,

    /// Error type returned by the entry point.
    pub error_type: &'static str,

    /// Constant holding the contract revision the consumer implements.
    pub version_const: &'static str,

    /// Cargo feature that removes the generated module when enabled.
    pub opt_out_feature: &'static str,
}

impl PoolContract {
    /// Number of arguments taken by [`register`](Self::register).
    pub const REGISTER_ARITY: usize = 3;

    /// Number of arguments taken by [`uncompressor`](Self::uncompressor).
    pub const UNCOMPRESSOR_ARITY: usize = 1;

    /// First revision of the contract.
    pub const V1: PoolContract = PoolContract {
        version: 1,
        entry_point: "load_system_roots",
        pool_type: "CertPool",
        pool_constructor: "new",
        register: "add_cert_func_not_dup",
        uncompressor: "cert_uncompressor",
        error_type: "Error",
        version_const: "POOL_CONTRACT_VERSION",
        opt_out_feature: "omit_bundled_roots",
    };
}

impl Default for PoolContract {
    fn default() -> Self {
        PoolContract::V1
    }
}
