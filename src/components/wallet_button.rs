use leptos::*;

use crate::core::wallet::{self, WalletType};

#[component]
pub fn WalletButton(
    wallet_type: WalletType,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_connect: Callback<WalletType>,
) -> impl IntoView {
    let info = wallet_type.info();
    let title = if wallet::is_installed(wallet_type) {
        format!("Connect {}", info.label)
    } else {
        format!("{} extension not detected", info.label)
    };

    view! {
        <button
            class="wallet-button"
            title=title
            disabled=move || disabled.get()
            on:click=move |_| on_connect.call(wallet_type)
        >
            <img src=info.image_src alt=info.label width="24" height="24"/>
            {info.label}
        </button>
    }
}
