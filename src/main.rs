//! Browser entry point. Trunk builds this binary for wasm with the `csr`
//! feature enabled; without it `main` is an empty shell so the host build
//! stays testable.

fn main() {
    #[cfg(feature = "csr")]
    {
        use bank_accounts_ui::app::App;
        use bank_accounts_ui::config::{self, Config};

        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        config::init(Config::from_env());
        log::info!("backend origin: {}", config::get().api_base);

        leptos::mount::mount_to_body(App);
    }
}
