//! # Status-to-View Mapping
//!
//! Pure mapping from the connection status to what the wallet section shows:
//!
//! | status | primary view | click | warning banner |
//! |---|---|---|---|
//! | Disconnected | "Connect Wallet" | connect | - |
//! | Connecting | connecting indicator | - | - |
//! | Connected | "My Wallet" | open view | - |
//! | Rejected | "Reconnect" | connect | `{wallet}: {message}` |
//! | Error | "Change Wallet" | open view | `{wallet}: {message}` |
//! | NotExist | "Install Wallet" | open view | - |

use crate::services::session::SessionProvider;
use crate::state::session::{ConnectionStatus, Session};

/// What the primary button does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WalletAction {
    Connect,
    OpenView,
}

/// Primary control of the wallet section
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimaryView {
    ConnectPrompt,
    Connecting,
    MyWallet,
    Reconnect,
    ChangeWallet,
    InstallWallet,
}

impl PrimaryView {
    pub fn for_status(status: ConnectionStatus) -> Self {
        match status {
            ConnectionStatus::Disconnected => PrimaryView::ConnectPrompt,
            ConnectionStatus::Connecting => PrimaryView::Connecting,
            ConnectionStatus::Connected => PrimaryView::MyWallet,
            ConnectionStatus::Rejected => PrimaryView::Reconnect,
            ConnectionStatus::Error => PrimaryView::ChangeWallet,
            ConnectionStatus::NotExist => PrimaryView::InstallWallet,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrimaryView::ConnectPrompt => "Connect Wallet",
            PrimaryView::Connecting => "Connecting...",
            PrimaryView::MyWallet => "My Wallet",
            PrimaryView::Reconnect => "Reconnect",
            PrimaryView::ChangeWallet => "Change Wallet",
            PrimaryView::InstallWallet => "Install Wallet",
        }
    }

    /// Action bound to the button; `None` while connecting
    pub fn action(&self) -> Option<WalletAction> {
        match self {
            PrimaryView::ConnectPrompt | PrimaryView::Reconnect => Some(WalletAction::Connect),
            PrimaryView::MyWallet | PrimaryView::ChangeWallet | PrimaryView::InstallWallet => {
                Some(WalletAction::OpenView)
            }
            PrimaryView::Connecting => None,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            PrimaryView::ConnectPrompt | PrimaryView::MyWallet => "btn",
            PrimaryView::Connecting => "btn btn-loading",
            PrimaryView::Reconnect | PrimaryView::ChangeWallet => "btn btn-warning",
            PrimaryView::InstallWallet => "btn btn-secondary",
        }
    }
}

/// Warning shown under the primary control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarningBanner {
    pub text: String,
}

/// Banner for rejected and failed connections.
///
/// A missing wallet name or message leaves its side of the text empty.
pub fn warning_banner(status: ConnectionStatus, wallet_name: Option<&str>, message: Option<&str>) -> Option<WarningBanner> {
    match status {
        ConnectionStatus::Rejected | ConnectionStatus::Error => Some(WarningBanner {
            text: format!("{}: {}", wallet_name.unwrap_or_default(), message.unwrap_or_default()),
        }),
        ConnectionStatus::Disconnected
        | ConnectionStatus::Connecting
        | ConnectionStatus::Connected
        | ConnectionStatus::NotExist => None,
    }
}

/// Everything the wallet section renders for one session snapshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletViewModel {
    pub primary: PrimaryView,
    pub warning: Option<WarningBanner>,
    pub username: Option<String>,
    /// Only set while connected
    pub address: Option<String>,
}

impl WalletViewModel {
    pub fn from_session(session: &Session) -> Self {
        let connected = session.status == ConnectionStatus::Connected;
        Self {
            primary: PrimaryView::for_status(session.status),
            warning: warning_banner(session.status, session.wallet_name(), session.message.as_deref()),
            username: session.username().map(str::to_string),
            address: session.address().filter(|_| connected).map(str::to_string),
        }
    }
}

/// Run a button action against the session provider
pub async fn dispatch<P: SessionProvider + ?Sized>(action: WalletAction, provider: &P) {
    log::debug!("[WALLET] dispatch {:?}", action);
    match action {
        WalletAction::Connect => provider.connect().await,
        WalletAction::OpenView => provider.open_view(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;

    use super::*;
    use crate::state::session::{ChainInfo, WalletInfo};

    struct MockProvider {
        session: RefCell<Session>,
        connects: Cell<usize>,
        opens: Cell<usize>,
    }

    impl MockProvider {
        fn with_status(status: ConnectionStatus) -> Self {
            let mut session = session();
            session.status = status;
            Self {
                session: RefCell::new(session),
                connects: Cell::new(0),
                opens: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl SessionProvider for MockProvider {
        fn session(&self) -> Session {
            self.session.borrow().clone()
        }

        async fn connect(&self) {
            self.connects.set(self.connects.get() + 1);
        }

        fn open_view(&self) {
            self.opens.set(self.opens.get() + 1);
        }
    }

    fn session() -> Session {
        Session::new(ChainInfo {
            chain_name: "secretnetwork".to_string(),
            pretty_name: "Secret Network".to_string(),
        })
    }

    async fn click(provider: &MockProvider) {
        let view = PrimaryView::for_status(provider.status());
        if let Some(action) = view.action() {
            dispatch(action, provider).await;
        }
    }

    #[test]
    fn test_status_table() {
        let expected = [
            (ConnectionStatus::Disconnected, PrimaryView::ConnectPrompt, "Connect Wallet", Some(WalletAction::Connect), false),
            (ConnectionStatus::Connecting, PrimaryView::Connecting, "Connecting...", None, false),
            (ConnectionStatus::Connected, PrimaryView::MyWallet, "My Wallet", Some(WalletAction::OpenView), false),
            (ConnectionStatus::Rejected, PrimaryView::Reconnect, "Reconnect", Some(WalletAction::Connect), true),
            (ConnectionStatus::Error, PrimaryView::ChangeWallet, "Change Wallet", Some(WalletAction::OpenView), true),
            (ConnectionStatus::NotExist, PrimaryView::InstallWallet, "Install Wallet", Some(WalletAction::OpenView), false),
        ];
        assert_eq!(expected.len(), ConnectionStatus::ALL.len());

        for (status, view, label, action, warns) in expected {
            assert_eq!(PrimaryView::for_status(status), view, "{:?}", status);
            assert_eq!(view.label(), label);
            assert_eq!(view.action(), action);
            assert_eq!(warning_banner(status, Some("Keplr"), Some("oops")).is_some(), warns, "{:?}", status);
        }
    }

    #[test]
    fn test_mapping_is_deterministic() {
        for status in ConnectionStatus::ALL {
            assert_eq!(PrimaryView::for_status(status), PrimaryView::for_status(status));
        }
    }

    #[test]
    fn test_rejected_banner_text() {
        let mut session = session();
        session.begin_connect(WalletInfo::new("Keplr"));
        session.set_failed(ConnectionStatus::Rejected, "user rejected".to_string());

        let vm = WalletViewModel::from_session(&session);
        assert_eq!(vm.primary, PrimaryView::Reconnect);
        assert_eq!(vm.warning.unwrap().text, "Keplr: user rejected");
    }

    #[test]
    fn test_banner_with_missing_parts() {
        let banner = warning_banner(ConnectionStatus::Error, None, None).unwrap();
        assert_eq!(banner.text, ": ");
    }

    #[test]
    fn test_not_exist_shows_install_without_banner() {
        let mut session = session();
        session.set_failed(ConnectionStatus::NotExist, "Keplr is not installed".to_string());

        let vm = WalletViewModel::from_session(&session);
        assert_eq!(vm.primary, PrimaryView::InstallWallet);
        assert!(vm.warning.is_none());
        assert_eq!(vm.primary.action(), Some(WalletAction::OpenView));
    }

    #[test]
    fn test_address_and_user_info_only_when_present() {
        let mut session = session();
        let vm = WalletViewModel::from_session(&session);
        assert!(vm.address.is_none());
        assert!(vm.username.is_none());

        session.set_connected("alice".to_string(), "secret1abc".to_string());
        let vm = WalletViewModel::from_session(&session);
        assert_eq!(vm.address.as_deref(), Some("secret1abc"));
        assert_eq!(vm.username.as_deref(), Some("alice"));

        session.status = ConnectionStatus::Connecting;
        assert!(WalletViewModel::from_session(&session).address.is_none());
    }

    #[tokio::test]
    async fn test_connect_statuses_invoke_connect_once_per_click() {
        for status in [ConnectionStatus::Disconnected, ConnectionStatus::Rejected] {
            let provider = MockProvider::with_status(status);
            click(&provider).await;
            assert_eq!(provider.connects.get(), 1, "{:?}", status);
            click(&provider).await;
            assert_eq!(provider.connects.get(), 2, "{:?}", status);
            assert_eq!(provider.opens.get(), 0, "{:?}", status);
        }
    }

    #[tokio::test]
    async fn test_view_statuses_invoke_open_view_once_per_click() {
        for status in [ConnectionStatus::Connected, ConnectionStatus::Error, ConnectionStatus::NotExist] {
            let provider = MockProvider::with_status(status);
            click(&provider).await;
            assert_eq!(provider.opens.get(), 1, "{:?}", status);
            assert_eq!(provider.connects.get(), 0, "{:?}", status);
        }
    }

    #[tokio::test]
    async fn test_connecting_has_no_action() {
        let provider = MockProvider::with_status(ConnectionStatus::Connecting);
        click(&provider).await;
        assert_eq!(provider.connects.get(), 0);
        assert_eq!(provider.opens.get(), 0);
    }
}
