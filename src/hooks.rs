use leptos::*;

use crate::core::form::{FormField, SettingsForm};
use crate::core::settings::{SettingsStore, SettingsValues};
use crate::core::wallet::{self, WalletSession, WalletType};

/// Handle to the shared wallet session
#[derive(Clone, Copy)]
pub struct WalletHandle {
    session: RwSignal<WalletSession>,
}

impl WalletHandle {
    pub fn session(&self) -> RwSignal<WalletSession> {
        self.session
    }

    /// Start a connection in the background.
    /// Failures are logged and leave the current session untouched.
    pub fn connect(&self, wallet_type: WalletType) {
        let session = self.session;
        let label = wallet_type.info().label;
        log::info!("Connecting to {} wallet...", label);

        spawn_local(async move {
            match wallet::connect(wallet_type).await {
                Ok(connected) => {
                    log::info!(
                        "Connected to {}: {} (chain {:?})",
                        label,
                        connected.account.as_deref().unwrap_or_default(),
                        connected.chain_id
                    );
                    session.set(connected);
                }
                Err(e) => log::error!("Failed to connect to {}: {}", label, e),
            }
        });
    }
}

/// Handle to the shared settings store
#[derive(Clone, Copy)]
pub struct SettingsHandle {
    store: RwSignal<SettingsStore>,
}

impl SettingsHandle {
    pub fn values(&self) -> Signal<SettingsValues> {
        let store = self.store;
        Signal::derive(move || store.with(|store| store.values().clone()))
    }

    /// Commit one form field and clear it
    pub fn apply(&self, form: RwSignal<SettingsForm>, field: FormField) {
        let store = self.store;
        form.update(|form| store.update(|store| form.apply(field, store)));
    }
}

pub fn provide_wallet() {
    provide_context(create_rw_signal(WalletSession::default()));
}

pub fn provide_settings() {
    provide_context(create_rw_signal(SettingsStore::load()));
}

pub fn use_wallet() -> WalletHandle {
    WalletHandle {
        session: expect_context::<RwSignal<WalletSession>>(),
    }
}

pub fn use_settings() -> SettingsHandle {
    SettingsHandle {
        store: expect_context::<RwSignal<SettingsStore>>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_commits_form_field_to_shared_store() {
        let runtime = create_runtime();

        let settings = SettingsHandle {
            store: create_rw_signal(SettingsStore::in_memory()),
        };
        let values = settings.values();
        let form = create_rw_signal(SettingsForm::default());

        form.update(|form| form.set(FormField::ChainId, "0x89".to_string()));
        settings.apply(form, FormField::ChainId);
        assert_eq!(values.get().chain_id, Some(137));
        assert_eq!(form.get().chain_id, "");

        form.update(|form| form.set(FormField::ChainId, "not a number".to_string()));
        settings.apply(form, FormField::ChainId);
        assert_eq!(values.get().chain_id, None);

        runtime.dispose();
    }
}
