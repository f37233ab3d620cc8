//! Form state and derived conditions for the settings panel.
//!
//! Every input keeps its raw text until the matching apply button is pressed.
//! Applying coerces the text, sends a single-key `SettingsPatch` to the store
//! and clears the field, so submitted input never lingers in the form.

use super::chain::{self, DatalistOption};
use super::settings::{SettingsPatch, SettingsStore, SettingsValues};
use super::wallet::{WalletSession, WalletType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ChainId,
    Account,
    NodeUrl,
}

/// Unsubmitted text of each input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub chain_id: String,
    pub account: String,
    pub node_url: String,
}

/// Coerce free text into a chain id the way a numeric input would read it:
/// decimal or exponent notation with an integer value, or an unsigned
/// `0x`/`0o`/`0b` literal. Anything else, and zero, becomes `None`.
pub fn coerce_chain_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let radix = match raw.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };

    match radix {
        Some(radix) => {
            let digits = &raw[2..];
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            u64::from_str_radix(digits, radix).ok().filter(|chain_id| *chain_id != 0)
        }
        // f64 parsing also takes "inf"/"nan" spellings, which are rejected as non-finite
        None => raw.parse::<f64>().ok().and_then(chain::chain_id_from_f64),
    }
}

fn coerce_text(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

impl SettingsForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::ChainId => self.chain_id = value,
            FormField::Account => self.account = value,
            FormField::NodeUrl => self.node_url = value,
        }
    }

    /// Take the field's text as a patch, leaving the field empty
    pub fn take(&mut self, field: FormField) -> SettingsPatch {
        match field {
            FormField::ChainId => SettingsPatch::chain_id(coerce_chain_id(&std::mem::take(&mut self.chain_id))),
            FormField::Account => SettingsPatch::account(coerce_text(&std::mem::take(&mut self.account))),
            FormField::NodeUrl => SettingsPatch::node_url(coerce_text(&std::mem::take(&mut self.node_url))),
        }
    }

    /// Commit one field to the store, then clear it
    pub fn apply(&mut self, field: FormField, store: &mut SettingsStore) {
        let patch = self.take(field);
        store.update_values(patch);
    }
}

/// Read-only view over the live session and the persisted settings
pub struct PanelState<'a> {
    pub session: &'a WalletSession,
    pub values: &'a SettingsValues,
}

impl<'a> PanelState<'a> {
    pub fn new(session: &'a WalletSession, values: &'a SettingsValues) -> Self {
        Self { session, values }
    }

    /// Account line plus, when known, the live chain on a second line
    pub fn signer_summary(&self) -> Option<String> {
        let account = self.session.account.as_ref()?;
        Some(match self.session.chain_id {
            Some(chain_id) => format!("{}\n{}", account, chain::chain_label(chain_id)),
            None => account.clone(),
        })
    }

    /// Persisted chain id to warn about, when it differs from the wallet's chain
    pub fn chain_mismatch(&self) -> Option<u64> {
        match (self.values.chain_id, self.session.chain_id) {
            (Some(saved), Some(live)) if saved != live => Some(saved),
            _ => None,
        }
    }

    /// The account override needs some chain context first
    pub fn account_load_disabled(&self) -> bool {
        self.values.chain_id.is_none() && self.values.node_url.is_none() && self.session.chain_id.is_none()
    }

    pub fn wallet_button_disabled(&self, wallet_type: WalletType) -> bool {
        self.session.signer_type() == Some(wallet_type)
    }

    pub fn saved_chain_label(&self) -> Option<String> {
        self.values.chain_id.map(chain::chain_label)
    }

    pub fn node_url_options(&self) -> Vec<DatalistOption> {
        chain::node_urls(self.session.chain_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::wallet::Signer;

    fn session(chain_id: Option<u64>) -> WalletSession {
        WalletSession {
            account: Some("0x1d8727df513fa2a8785d0834e40b34223daff1affc079574082baadb74b66ee4".to_string()),
            chain_id,
            signer: Some(Signer { wallet_type: WalletType::Petra }),
        }
    }

    #[test]
    fn non_numeric_chain_id_applies_as_unset() {
        for raw in [
            "", "   ", "abc", "1.5", "-3", "0", "12abc", "0x+89", "0x", "0b12", "-0x10", "1e", "NaN", "Infinity",
        ] {
            let mut store = SettingsStore::in_memory();
            store.update_values(SettingsPatch::chain_id(Some(1)));

            let mut form = SettingsForm { chain_id: raw.to_string(), ..Default::default() };
            assert_eq!(form.take(FormField::ChainId), SettingsPatch::chain_id(None), "input {:?}", raw);

            form.chain_id = raw.to_string();
            form.apply(FormField::ChainId, &mut store);
            assert_eq!(store.values().chain_id, None, "input {:?}", raw);
        }
    }

    #[test]
    fn numeric_chain_id_applies_as_number() {
        let mut form = SettingsForm { chain_id: "137".to_string(), ..Default::default() };
        assert_eq!(form.take(FormField::ChainId), SettingsPatch::chain_id(Some(137)));

        assert_eq!(coerce_chain_id(" 2 "), Some(2));
        assert_eq!(coerce_chain_id("0x89"), Some(137));
        assert_eq!(coerce_chain_id("1e3"), Some(1000));
        assert_eq!(coerce_chain_id("1.0"), Some(1));
        assert_eq!(coerce_chain_id("+5"), Some(5));
        assert_eq!(coerce_chain_id("0b11"), Some(3));
        assert_eq!(coerce_chain_id("0o7"), Some(7));

        let mut store = SettingsStore::in_memory();
        form.chain_id = "1e3".to_string();
        form.apply(FormField::ChainId, &mut store);
        assert_eq!(store.values().chain_id, Some(1000));
    }

    #[test]
    fn apply_clears_only_its_field() {
        let mut store = SettingsStore::in_memory();
        let mut form = SettingsForm {
            chain_id: "2".to_string(),
            account: "0xabc".to_string(),
            node_url: "https://fullnode.testnet.aptoslabs.com/v1".to_string(),
        };

        form.apply(FormField::ChainId, &mut store);
        assert_eq!(form.chain_id, "");
        assert_eq!(form.account, "0xabc");

        form.apply(FormField::Account, &mut store);
        assert_eq!(form.account, "");

        form.apply(FormField::NodeUrl, &mut store);
        assert_eq!(form, SettingsForm::default());

        assert_eq!(
            store.values(),
            &SettingsValues {
                chain_id: Some(2),
                account: Some("0xabc".to_string()),
                node_url: Some("https://fullnode.testnet.aptoslabs.com/v1".to_string()),
            }
        );
    }

    #[test]
    fn empty_account_clears_override() {
        let mut store = SettingsStore::in_memory();
        store.update_values(SettingsPatch::account(Some("0xabc".to_string())));

        let mut form = SettingsForm::default();
        form.apply(FormField::Account, &mut store);
        assert_eq!(store.values().account, None);
    }

    #[test]
    fn account_load_needs_chain_context() {
        let no_session = WalletSession::default();
        let mut values = SettingsValues::default();
        assert!(PanelState::new(&no_session, &values).account_load_disabled());

        values.chain_id = Some(1);
        assert!(!PanelState::new(&no_session, &values).account_load_disabled());

        values.chain_id = None;
        values.node_url = Some("http://127.0.0.1:8080/v1".to_string());
        assert!(!PanelState::new(&no_session, &values).account_load_disabled());

        let live = session(Some(2));
        assert!(!PanelState::new(&live, &SettingsValues::default()).account_load_disabled());
    }

    #[test]
    fn mismatch_warning_only_when_both_set_and_different() {
        let saved = SettingsValues { chain_id: Some(1), ..Default::default() };

        assert_eq!(PanelState::new(&session(Some(2)), &saved).chain_mismatch(), Some(1));
        assert_eq!(PanelState::new(&session(Some(1)), &saved).chain_mismatch(), None);
        assert_eq!(PanelState::new(&session(None), &saved).chain_mismatch(), None);
        assert_eq!(
            PanelState::new(&session(Some(2)), &SettingsValues::default()).chain_mismatch(),
            None
        );
    }

    #[test]
    fn current_signer_button_is_disabled() {
        let live = session(Some(1));
        let values = SettingsValues::default();
        let panel = PanelState::new(&live, &values);

        for wallet in WalletType::ALL {
            assert_eq!(panel.wallet_button_disabled(wallet), wallet == WalletType::Petra);
        }

        let disconnected = WalletSession::default();
        let panel = PanelState::new(&disconnected, &values);
        assert!(WalletType::ALL.iter().all(|w| !panel.wallet_button_disabled(*w)));
    }

    #[test]
    fn signer_summary_appends_live_chain() {
        let values = SettingsValues::default();
        let live = WalletSession { account: Some("0xabc".to_string()), chain_id: Some(137), signer: None };
        assert_eq!(
            PanelState::new(&live, &values).signer_summary().as_deref(),
            Some("0xabc\nChain ID: 137 (Unknown)")
        );

        let no_chain = WalletSession { account: Some("0xabc".to_string()), ..Default::default() };
        assert_eq!(PanelState::new(&no_chain, &values).signer_summary().as_deref(), Some("0xabc"));
        assert_eq!(PanelState::new(&WalletSession::default(), &values).signer_summary(), None);
    }

    #[test]
    fn node_url_options_follow_live_chain() {
        let values = SettingsValues { chain_id: Some(1), ..Default::default() };
        let live = session(Some(4));
        let options = PanelState::new(&live, &values).node_url_options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "http://127.0.0.1:8080/v1");
    }
}
