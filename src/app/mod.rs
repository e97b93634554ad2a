pub mod components;
pub mod layouts;
pub mod pages;

// Re-export the FerroDocs App
pub use pages::site_routes::App;
