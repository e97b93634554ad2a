pub mod blog;
pub mod docs;
pub mod site_routes;

pub use site_routes::{App, Route};
