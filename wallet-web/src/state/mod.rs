//! Session state: plain snapshots plus the reactive context that holds them

pub mod chain;
pub mod session;
pub mod wallet;
