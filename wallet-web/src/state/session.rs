//! Wallet session snapshot
//!
//! Plain values describing where the wallet connection stands. The reactive
//! wrapper lives in [`crate::state::wallet`].

/// Connection status reported by the wallet session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Rejected,
    Error,
    NotExist,
}

impl ConnectionStatus {
    pub const ALL: [ConnectionStatus; 6] = [
        ConnectionStatus::Disconnected,
        ConnectionStatus::Connecting,
        ConnectionStatus::Connected,
        ConnectionStatus::Rejected,
        ConnectionStatus::Error,
        ConnectionStatus::NotExist,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Connecting => "Connecting",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Rejected => "Rejected",
            ConnectionStatus::Error => "Error",
            ConnectionStatus::NotExist => "NotExist",
        }
    }
}

/// Wallet metadata
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletInfo {
    pub pretty_name: String,
}

impl WalletInfo {
    pub fn new(pretty_name: impl Into<String>) -> Self {
        Self {
            pretty_name: pretty_name.into(),
        }
    }
}

/// Chain metadata
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainInfo {
    pub chain_name: String,
    pub pretty_name: String,
}

/// Read-only snapshot of the wallet session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub status: ConnectionStatus,
    pub username: Option<String>,
    pub address: Option<String>,
    pub message: Option<String>,
    pub wallet: Option<WalletInfo>,
    pub chain: ChainInfo,
}

impl Session {
    pub fn new(chain: ChainInfo) -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            username: None,
            address: None,
            message: None,
            wallet: None,
            chain,
        }
    }

    /// Address, treating an empty string as absent
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().filter(|addr| !addr.is_empty())
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    pub fn wallet_name(&self) -> Option<&str> {
        self.wallet.as_ref().map(|w| w.pretty_name.as_str())
    }

    pub fn begin_connect(&mut self, wallet: WalletInfo) {
        self.status = ConnectionStatus::Connecting;
        self.message = None;
        self.wallet = Some(wallet);
    }

    pub fn set_connected(&mut self, username: String, address: String) {
        self.status = ConnectionStatus::Connected;
        self.username = Some(username);
        self.address = Some(address);
        self.message = None;
    }

    /// Record a failed connection attempt.
    ///
    /// Account details from an earlier connection are cleared.
    pub fn set_failed(&mut self, status: ConnectionStatus, message: String) {
        self.status = status;
        self.username = None;
        self.address = None;
        self.message = Some(message);
    }

    pub fn disconnect(&mut self) {
        *self = Session::new(self.chain.clone());
    }
}
