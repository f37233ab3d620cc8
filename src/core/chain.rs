use once_cell::sync::Lazy;

/// Display name used for any chain id missing from the table
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Known networks, keyed by their integer chain id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    Mainnet,
    Testnet,
    Local,
}

/// Static descriptor for a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    pub name: &'static str,
}

impl ChainInfo {
    pub const UNKNOWN: ChainInfo = ChainInfo { name: UNKNOWN_LABEL };
}

/// One entry of a `<datalist>`: the submitted value plus a readable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatalistOption {
    pub value: String,
    pub label: String,
}

impl Chain {
    /// Table order, used for option lists
    pub const ALL: [Chain; 3] = [Chain::Mainnet, Chain::Testnet, Chain::Local];

    pub fn from_id(chain_id: u64) -> Option<Chain> {
        match chain_id {
            1 => Some(Chain::Mainnet),
            2 => Some(Chain::Testnet),
            4 => Some(Chain::Local),
            _ => None,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Chain::Mainnet => 1,
            Chain::Testnet => 2,
            Chain::Local => 4,
        }
    }

    pub fn info(&self) -> ChainInfo {
        match self {
            Chain::Mainnet => ChainInfo { name: "Mainnet" },
            Chain::Testnet => ChainInfo { name: "Testnet" },
            Chain::Local => ChainInfo { name: "Local" },
        }
    }

    /// RPC endpoints offered for this chain, preferred first
    pub fn node_urls(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Chain::Mainnet => &[
                ("https://fullnode.mainnet.aptoslabs.com/v1", "Aptos Labs"),
                ("https://aptos-mainnet.pontem.network/v1", "Pontem"),
            ],
            Chain::Testnet => &[
                ("https://fullnode.testnet.aptoslabs.com/v1", "Aptos Labs"),
                ("https://aptos-testnet.pontem.network/v1", "Pontem"),
            ],
            Chain::Local => &[
                ("http://127.0.0.1:8080/v1", "Localhost"),
            ],
        }
    }

    /// Match a network name reported by a wallet ("Mainnet", "testnet", ...)
    pub fn from_name(name: &str) -> Option<Chain> {
        let name = name.trim();
        Chain::ALL
            .into_iter()
            .find(|chain| chain.info().name.eq_ignore_ascii_case(name))
    }
}

/// Accept a number as a chain id only when it is a positive integer
pub fn chain_id_from_f64(value: f64) -> Option<u64> {
    if value.is_finite() && value.fract() == 0.0 && value > 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

/// Look up a chain id, falling back to the unknown descriptor
pub fn chain_info(chain_id: u64) -> ChainInfo {
    Chain::from_id(chain_id)
        .map(|chain| chain.info())
        .unwrap_or(ChainInfo::UNKNOWN)
}

/// `Chain ID: 1 (Mainnet)`
pub fn chain_label(chain_id: u64) -> String {
    format!("Chain ID: {} ({})", chain_id, chain_info(chain_id).name)
}

/// Node URL options for the live chain; empty when the chain is absent or unknown
pub fn node_urls(chain_id: Option<u64>) -> Vec<DatalistOption> {
    chain_id
        .and_then(Chain::from_id)
        .map(|chain| {
            chain
                .node_urls()
                .iter()
                .map(|(url, label)| DatalistOption {
                    value: url.to_string(),
                    label: label.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

static CHAIN_ID_OPTIONS: Lazy<Vec<DatalistOption>> = Lazy::new(|| {
    Chain::ALL
        .iter()
        .map(|chain| DatalistOption {
            value: chain.id().to_string(),
            label: format!("{} (ChainId: {})", chain.info().name, chain.id()),
        })
        .collect()
});

/// One option per known chain for the chain id input
pub fn chain_id_options() -> &'static [DatalistOption] {
    &CHAIN_ID_OPTIONS
}
