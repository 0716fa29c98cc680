//! UI Components

pub mod address;
pub mod chain_card;
pub mod connect_button;
pub mod navbar;
pub mod user_info;
pub mod wallet_modal;
pub mod warning;

pub use address::ConnectedShowAddress;
pub use chain_card::ChainCard;
pub use connect_button::ConnectButton;
pub use navbar::Navbar;
pub use user_info::ConnectedUserInfo;
pub use wallet_modal::WalletModal;
pub use warning::WarningBanner;
