//! Chain registry and chain card descriptor

use crate::state::session::ChainInfo;

/// Static chain registry entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainRecord {
    pub chain_name: &'static str,
    pub chain_id: &'static str,
    pub pretty_name: &'static str,
    pub logo: Option<&'static str>,
}

pub const CHAINS: &[ChainRecord] = &[
    ChainRecord {
        chain_name: "secretnetwork",
        chain_id: "secret-4",
        pretty_name: "Secret Network",
        logo: Some("https://raw.githubusercontent.com/cosmos/chain-registry/master/secretnetwork/images/scrt.png"),
    },
    ChainRecord {
        chain_name: "secretnetworktestnet",
        chain_id: "pulsar-3",
        pretty_name: "Secret Network Testnet",
        logo: Some("https://raw.githubusercontent.com/cosmos/chain-registry/master/testnets/secretnetworktestnet/images/scrt.png"),
    },
];

pub fn find_chain(chain_name: &str) -> Option<&'static ChainRecord> {
    CHAINS.iter().find(|chain| chain.chain_name == chain_name)
}

/// Logo URI for a chain, if the registry has one
pub fn chain_logo(chain_name: &str) -> Option<&'static str> {
    find_chain(chain_name).and_then(|chain| chain.logo)
}

/// Chain metadata for a session; unknown chains use their name as pretty name
pub fn chain_info(chain_name: &str) -> ChainInfo {
    ChainInfo {
        chain_name: chain_name.to_string(),
        pretty_name: find_chain(chain_name)
            .map(|chain| chain.pretty_name.to_string())
            .unwrap_or_else(|| chain_name.to_string()),
    }
}

/// What the chain card shows, derived on every render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainDescriptor {
    pub name: String,
    pub label: String,
    pub value: String,
    pub icon: Option<String>,
}

impl ChainDescriptor {
    pub fn new(chain: &ChainInfo, icon: Option<&str>) -> Self {
        Self {
            name: chain.chain_name.clone(),
            label: chain.pretty_name.clone(),
            value: chain.chain_name.clone(),
            icon: icon.map(str::to_string),
        }
    }

    pub fn from_registry(chain: &ChainInfo) -> Self {
        Self::new(chain, chain_logo(&chain.chain_name))
    }

    /// Card title, falling back to the chain name
    pub fn title(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }
}
