//! # Shared Data Transfer Objects Library
//!
//! This library defines the documents exchanged between the wallet section and
//! the wallet's amino signer. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for amino signing
//!   - **[`dto::permit`]**: Sign documents, signing options and query permits
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! Amino sign documents are signed over their canonical JSON encoding, so
//! field order and spelling matter:
//! - Field names stay **snake_case**, matching amino JSON
//! - Signing options use **camelCase**, matching the wallet API
//! - Struct field order is the serialization order
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::permit::{StdSignDoc, PERMIT_CHAIN_ID};
//! use shared::utils::truncate_address;
//!
//! let doc = StdSignDoc::query_permit();
//! assert_eq!(doc.chain_id, PERMIT_CHAIN_ID);
//!
//! let display = truncate_address("secret1ap26qrlp8mcq2pg6r47w43l0y8zkqm8a450s03");
//! assert_eq!(display, "secr...0s03");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
