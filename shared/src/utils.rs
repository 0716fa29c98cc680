//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting bech32 wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "secret1ap26qrlp8mcq2pg6r47w43l0y8zkqm8a450s03";
//! let formatted = format_address(address, 10, 6);
//! assert_eq!(formatted, "secret1ap2...450s03");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "secret1ap26qrlp8mcq2pg6r47w43l0y8zkqm8a450s03";
/// assert_eq!(format_address(addr, 4, 4), "secr...0s03");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    // bech32 is ASCII-only, byte indexing is safe here
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Format a bech32 address keeping its human-readable part visible.
///
/// Shows everything up to and including the `1` separator plus three data
/// characters, then the last six characters.
///
/// ```rust
/// use shared::utils::format_bech32;
///
/// assert_eq!(
///     format_bech32("secret1ap26qrlp8mcq2pg6r47w43l0y8zkqm8a450s03"),
///     "secret1ap2...450s03"
/// );
/// ```
pub fn format_bech32(address: &str) -> String {
    match address.rfind('1') {
        Some(separator) => format_address(address, separator + 4, 6),
        None => format_address(address, 6, 6),
    }
}
