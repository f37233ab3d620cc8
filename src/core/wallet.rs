use std::fmt;

use super::chain::{self, Chain};

#[derive(Debug, Clone, PartialEq)]
pub enum WalletError {
    NotInstalled(WalletType),
    ConnectionFailed(String),
    JavaScriptError(String),
    Unsupported,
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::NotInstalled(wallet) => write!(f, "{} wallet is not installed", wallet.info().label),
            WalletError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            WalletError::JavaScriptError(msg) => write!(f, "JavaScript error: {}", msg),
            WalletError::Unsupported => write!(f, "Browser wallets are only available in web builds"),
        }
    }
}

/// Browser wallet extensions the panel can connect to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletType {
    Petra,
    Martian,
    Fewcha,
    Pontem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletInfo {
    pub image_src: &'static str,
    pub label: &'static str,
}

impl WalletType {
    /// Table order, used for the wallet button list
    pub const ALL: [WalletType; 4] = [
        WalletType::Petra,
        WalletType::Martian,
        WalletType::Fewcha,
        WalletType::Pontem,
    ];

    /// Also the name of the object the extension injects into `window`
    pub fn key(&self) -> &'static str {
        match self {
            WalletType::Petra => "aptos",
            WalletType::Martian => "martian",
            WalletType::Fewcha => "fewcha",
            WalletType::Pontem => "pontem",
        }
    }

    pub fn info(&self) -> WalletInfo {
        match self {
            WalletType::Petra => WalletInfo {
                image_src: "/assets/wallets/petra.svg",
                label: "Petra",
            },
            WalletType::Martian => WalletInfo {
                image_src: "/assets/wallets/martian.svg",
                label: "Martian",
            },
            WalletType::Fewcha => WalletInfo {
                image_src: "/assets/wallets/fewcha.svg",
                label: "Fewcha",
            },
            WalletType::Pontem => WalletInfo {
                image_src: "/assets/wallets/pontem.svg",
                label: "Pontem",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signer {
    pub wallet_type: WalletType,
}

/// Live connection state, owned by the wallet provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletSession {
    pub account: Option<String>,
    pub chain_id: Option<u64>,
    pub signer: Option<Signer>,
}

impl WalletSession {
    pub fn signer_type(&self) -> Option<WalletType> {
        self.signer.map(|signer| signer.wallet_type)
    }
}

/// Resolve what a wallet reports from `network()` into a chain id.
/// Accepts a numeric id or a network name from the chain table.
pub fn chain_id_from_network(network: &str) -> Option<u64> {
    let network = network.trim();
    match network.parse::<f64>() {
        Ok(chain_id) => chain::chain_id_from_f64(chain_id),
        Err(_) => Chain::from_name(network).map(|chain| chain.id()),
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::window;

    use crate::core::chain::chain_id_from_f64;
    use super::{chain_id_from_network, Signer, WalletError, WalletSession, WalletType};

    fn wallet_object(wallet_type: WalletType) -> Result<JsValue, WalletError> {
        let window = window().ok_or(WalletError::JavaScriptError("No window object".to_string()))?;

        let wallet_obj = Reflect::get(&window, &JsValue::from_str(wallet_type.key()))
            .map_err(|e| WalletError::JavaScriptError(format!("Failed to get {}: {:?}", wallet_type.key(), e)))?;

        if wallet_obj.is_null() || wallet_obj.is_undefined() {
            return Err(WalletError::NotInstalled(wallet_type));
        }
        Ok(wallet_obj)
    }

    // Calls `wallet_obj[name]()` and awaits the result when it is a promise.
    // Returns `Ok(None)` when the wallet does not expose `name`.
    async fn call_method(wallet_obj: &JsValue, name: &str) -> Result<Option<JsValue>, WalletError> {
        let func = Reflect::get(wallet_obj, &JsValue::from_str(name))
            .map_err(|e| WalletError::JavaScriptError(format!("Failed to get {} function: {:?}", name, e)))?;

        if !func.is_function() {
            return Ok(None);
        }

        let result = Function::from(func)
            .call0(wallet_obj)
            .map_err(|e| WalletError::ConnectionFailed(format!("{:?}", e)))?;

        if result.is_instance_of::<Promise>() {
            let resolved = JsFuture::from(Promise::from(result))
                .await
                .map_err(|e| WalletError::ConnectionFailed(format!("{:?}", e)))?;
            Ok(Some(resolved))
        } else {
            Ok(Some(result))
        }
    }

    fn read_account(value: &JsValue) -> Option<String> {
        if let Some(address) = value.as_string() {
            return Some(address);
        }
        Reflect::get(value, &JsValue::from_str("address"))
            .ok()
            .and_then(|address| address.as_string())
    }

    fn read_chain_id(value: &JsValue) -> Option<u64> {
        if let Some(name) = value.as_string() {
            return chain_id_from_network(&name);
        }
        if let Some(chain_id) = value.as_f64() {
            return chain_id_from_f64(chain_id);
        }
        ["chainId", "name"].iter().find_map(|field| {
            Reflect::get(value, &JsValue::from_str(field))
                .ok()
                .and_then(|inner| {
                    inner
                        .as_f64()
                        .and_then(chain_id_from_f64)
                        .or_else(|| inner.as_string().and_then(|s| chain_id_from_network(&s)))
                })
        })
    }

    pub fn is_installed(wallet_type: WalletType) -> bool {
        wallet_object(wallet_type).is_ok()
    }

    pub async fn connect(wallet_type: WalletType) -> Result<WalletSession, WalletError> {
        let wallet_obj = wallet_object(wallet_type)?;

        let connected = call_method(&wallet_obj, "connect")
            .await?
            .ok_or(WalletError::JavaScriptError("connect is not a function".to_string()))?;

        let account = read_account(&connected)
            .ok_or(WalletError::ConnectionFailed("Wallet did not return an address".to_string()))?;

        let chain_id = call_method(&wallet_obj, "network")
            .await?
            .and_then(|network| read_chain_id(&network));

        Ok(WalletSession {
            account: Some(account),
            chain_id,
            signer: Some(Signer { wallet_type }),
        })
    }
}

/// Whether the extension for `wallet_type` has injected its object
pub fn is_installed(wallet_type: WalletType) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        browser::is_installed(wallet_type)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = wallet_type;
        false
    }
}

/// Ask the wallet extension for a connection and describe the resulting session
pub async fn connect(wallet_type: WalletType) -> Result<WalletSession, WalletError> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::connect(wallet_type).await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = wallet_type;
        Err(WalletError::Unsupported)
    }
}
