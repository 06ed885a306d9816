pub mod app;
pub mod components;
pub mod config;
pub mod logging;

#[cfg_attr(not(test), wasm_bindgen::prelude::wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = config::AppConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("mounting resource form (log level {})", config.log_level);

    leptos::mount_to_body(app::App);
}
