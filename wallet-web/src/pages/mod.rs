//! Page modules

pub mod wallet;

pub use wallet::WalletSection;
