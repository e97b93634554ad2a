pub mod errors;
pub mod hooks;
