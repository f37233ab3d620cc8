mod app;
mod components;
mod core;
mod hooks;
mod pages;

#[cfg(target_arch = "wasm32")]
fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting chain settings app");
    leptos::mount_to_body(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("chain settings app runs in the browser, build it for wasm32-unknown-unknown");
}
