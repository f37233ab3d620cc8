use leptos::*;

use crate::components::{InputWithDatalist, InvalidChainWarning, WalletButton};
use crate::core::chain::chain_id_options;
use crate::core::form::{FormField, PanelState, SettingsForm};
use crate::core::settings::SettingsValues;
use crate::core::wallet::{WalletSession, WalletType};
use crate::hooks::{use_settings, use_wallet};

fn with_panel<T>(
    session: RwSignal<WalletSession>,
    values: Signal<SettingsValues>,
    f: impl FnOnce(&PanelState) -> T,
) -> T {
    session.with(|session| values.with(|values| f(&PanelState::new(session, values))))
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let wallet = use_wallet();
    let settings = use_settings();
    let form = create_rw_signal(SettingsForm::default());

    let session = wallet.session();
    let values = settings.values();

    let node_url_options = Signal::derive(move || with_panel(session, values, |panel| panel.node_url_options()));

    view! {
        <section class="settings">
            <div class="settings-group">
                <span>"Signer"</span>
                {move || {
                    with_panel(session, values, |panel| panel.signer_summary())
                        .map(|summary| view! { <code>{summary}</code> })
                }}
                {move || {
                    with_panel(session, values, |panel| panel.chain_mismatch())
                        .map(|chain_id| view! { <InvalidChainWarning chain_id=chain_id/> })
                }}
                <div class="wallets">
                    <For
                        each=move || WalletType::ALL
                        key=|wallet_type| wallet_type.key()
                        children=move |wallet_type| {
                            view! {
                                <WalletButton
                                    wallet_type=wallet_type
                                    disabled=Signal::derive(move || {
                                        with_panel(session, values, |panel| panel.wallet_button_disabled(wallet_type))
                                    })
                                    on_connect=move |wallet_type: WalletType| wallet.connect(wallet_type)
                                />
                            }
                        }
                    />
                </div>
            </div>

            <label class="settings-group">
                <span>"Chain ID"</span>
                {move || {
                    with_panel(session, values, |panel| panel.saved_chain_label())
                        .map(|label| view! { <code>{label}</code> })
                }}
                <div class="settings-input">
                    <InputWithDatalist
                        list_id="chain-ids"
                        options=chain_id_options().to_vec()
                        value=Signal::derive(move || form.with(|form| form.chain_id.clone()))
                        on_input=move |value: String| form.update(|form| form.set(FormField::ChainId, value))
                    />
                    <button on:click=move |_| settings.apply(form, FormField::ChainId)>"Apply"</button>
                </div>
            </label>

            <label class="settings-group">
                <span>"Account"</span>
                {move || {
                    values.with(|values| values.account.clone())
                        .map(|account| view! { <code>{account}</code> })
                }}
                <div class="settings-input">
                    <input
                        type="text"
                        prop:value=move || form.with(|form| form.account.clone())
                        on:input=move |ev| form.update(|form| form.set(FormField::Account, event_target_value(&ev)))
                    />
                    <button
                        disabled=move || with_panel(session, values, |panel| panel.account_load_disabled())
                        on:click=move |_| settings.apply(form, FormField::Account)
                    >
                        "Load"
                    </button>
                </div>
            </label>

            <label class="settings-group">
                <span>"Node URL (Optional)"</span>
                {move || {
                    values.with(|values| values.node_url.clone())
                        .map(|node_url| view! { <code>{node_url}</code> })
                }}
                <div class="settings-input">
                    <InputWithDatalist
                        list_id="node-urls"
                        options=node_url_options
                        value=Signal::derive(move || form.with(|form| form.node_url.clone()))
                        on_input=move |value: String| form.update(|form| form.set(FormField::NodeUrl, value))
                    />
                    <button on:click=move |_| settings.apply(form, FormField::NodeUrl)>"Apply"</button>
                </div>
            </label>
        </section>
    }
}
