use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "chain-settings.values";

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    StorageNotAvailable,
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::StorageNotAvailable => write!(f, "Settings storage not available"),
            SettingsError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

/// Connection settings chosen by the user, overriding what the wallet reports
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_url: Option<String>,
}

/// Partial update for `SettingsValues`.
/// The outer `Option` says whether the key is present, the inner one carries the new value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub chain_id: Option<Option<u64>>,
    pub account: Option<Option<String>>,
    pub node_url: Option<Option<String>>,
}

impl SettingsPatch {
    pub fn chain_id(chain_id: Option<u64>) -> Self {
        Self { chain_id: Some(chain_id), ..Self::default() }
    }

    pub fn account(account: Option<String>) -> Self {
        Self { account: Some(account), ..Self::default() }
    }

    pub fn node_url(node_url: Option<String>) -> Self {
        Self { node_url: Some(node_url), ..Self::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.chain_id.is_none() && self.account.is_none() && self.node_url.is_none()
    }

    pub fn apply_to(self, values: &mut SettingsValues) {
        if let Some(chain_id) = self.chain_id {
            values.chain_id = chain_id;
        }
        if let Some(account) = self.account {
            values.account = account;
        }
        if let Some(node_url) = self.node_url {
            values.node_url = node_url;
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Persistence {
    /// Keeps the serialized record in the store itself
    Memory(Option<String>),
    #[cfg(target_arch = "wasm32")]
    LocalStorage,
}

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use web_sys::{window, Storage};

    use super::SettingsError;

    fn get_local_storage() -> Result<Storage, SettingsError> {
        let window = window().ok_or(SettingsError::StorageNotAvailable)?;
        window
            .local_storage()
            .map_err(|_| SettingsError::StorageNotAvailable)?
            .ok_or(SettingsError::StorageNotAvailable)
    }

    pub fn read(key: &str) -> Result<Option<String>, SettingsError> {
        get_local_storage()?
            .get_item(key)
            .map_err(|_| SettingsError::StorageNotAvailable)
    }

    pub fn write(key: &str, data: &str) -> Result<(), SettingsError> {
        get_local_storage()?
            .set_item(key, data)
            .map_err(|_| SettingsError::StorageNotAvailable)
    }
}

/// Holds the current `SettingsValues` and writes every update through to storage
#[derive(Clone, Debug, PartialEq)]
pub struct SettingsStore {
    values: SettingsValues,
    persistence: Persistence,
}

impl SettingsStore {
    /// A store that never touches persistent storage
    pub fn in_memory() -> Self {
        Self::load_from(Persistence::Memory(None))
    }

    /// Open the platform store and read any saved values.
    /// Browser builds use localStorage, host builds keep settings in memory.
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::load_from(Persistence::LocalStorage)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    /// A missing or unreadable record starts from defaults
    fn load_from(persistence: Persistence) -> Self {
        let mut store = Self {
            values: SettingsValues::default(),
            persistence,
        };

        match store.read() {
            Ok(Some(values)) => {
                log::debug!("Loaded settings: {:?}", values);
                store.values = values;
            }
            Ok(None) => log::debug!("No saved settings, using defaults"),
            Err(e) => log::warn!("Failed to load settings, using defaults: {}", e),
        }
        store
    }

    pub fn values(&self) -> &SettingsValues {
        &self.values
    }

    /// Merge `patch` into the current values, then persist them.
    /// The in-memory values are replaced even when saving fails.
    pub fn update_values(&mut self, patch: SettingsPatch) {
        if patch.is_empty() {
            return;
        }
        patch.apply_to(&mut self.values);
        log::info!("Settings updated: {:?}", self.values);

        if let Err(e) = self.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    fn read(&self) -> Result<Option<SettingsValues>, SettingsError> {
        let data: Option<String> = match &self.persistence {
            Persistence::Memory(record) => record.clone(),
            #[cfg(target_arch = "wasm32")]
            Persistence::LocalStorage => local_storage::read(STORAGE_KEY)?,
        };

        data.map(|data| {
            serde_json::from_str(&data).map_err(|e| SettingsError::SerializationError(e.to_string()))
        })
        .transpose()
    }

    fn save(&mut self) -> Result<(), SettingsError> {
        let serialized = serde_json::to_string(&self.values)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;

        match &mut self.persistence {
            Persistence::Memory(record) => {
                *record = Some(serialized);
                Ok(())
            }
            #[cfg(target_arch = "wasm32")]
            Persistence::LocalStorage => local_storage::write(STORAGE_KEY, &serialized),
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_survives_reload() {
        let mut store = SettingsStore::load();
        store.update_values(SettingsPatch::account(Some("0xfeed".to_string())));

        let reloaded = SettingsStore::load();
        assert_eq!(reloaded.values().account.as_deref(), Some("0xfeed"));
    }
}
