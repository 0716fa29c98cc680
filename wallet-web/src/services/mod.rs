//! Wallet services: Keplr interop, the session provider and wallet errors

pub mod error;
pub mod session;
pub mod wallet;
