use leptos::*;

use crate::core::chain::chain_label;

/// Shown when the connected wallet is on a different chain than the saved one
#[component]
pub fn InvalidChainWarning(chain_id: u64) -> impl IntoView {
    let expected = chain_label(chain_id);

    view! {
        <p class="invalid-chain-warning">
            {format!(
                "Your wallet is connected to a different network. Switch it to {} or update the Chain ID below.",
                expected
            )}
        </p>
    }
}
