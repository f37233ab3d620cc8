use leptos::*;

use crate::hooks::{provide_settings, provide_wallet};
use crate::pages::SettingsPage;

// main app component
#[component]
pub fn App() -> impl IntoView {
    // shared state read through use_wallet / use_settings
    provide_wallet();
    provide_settings();

    view! {
        <main class="container">
            <SettingsPage/>
        </main>
    }
}
