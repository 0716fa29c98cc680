//! # Data Transfer Objects (DTOs)
//!
//! Data structures handed to (and returned from) a Cosmos-family wallet's
//! amino signer.
//!
//! ## Module Organization
//!
//! - [`permit`] - Query permit sign document, signing options, signer response
//!
//! ## Example JSON Communication
//!
//! ```text
//! signAmino("secret-4", "secret1...", <doc>, {"preferNoSetFee":true,"preferNoSetMemo":true})
//! ```
//!
//! ```text
//! {
//!   "signed": { "chain_id": "secret-4", "account_number": "0", ... },
//!   "signature": {
//!     "pub_key": { "type": "tendermint/PubKeySecp256k1", "value": "A0r..." },
//!     "signature": "kX2..."
//!   }
//! }
//! ```

pub mod permit;

pub use permit::*;
