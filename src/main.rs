//! FerroDocs - Main Entry Point
//!
//! Serves the fullstack documentation site with dioxus::serve(); the WASM
//! entry hydrates the same component tree in the browser.

use ferrodocs::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Set panic hook to print full backtrace
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("\n=== PANIC CAUGHT ===");
        eprintln!("Panic info: {}", panic_info);
        eprintln!("Backtrace:\n{}", backtrace);
        eprintln!("=== END PANIC ===\n");
    }));

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting FerroDocs...");

    // Touch the navigation model now so a broken route tree stops the server
    // at startup instead of on the first request
    let links = &*ferrodocs::domain::nav::NAV_LINKS;
    tracing::info!("Navigation model ready with {} header links", links.len());

    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] FerroDocs initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
