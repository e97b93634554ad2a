pub mod leftbar;
pub mod navbar;

pub use leftbar::{DocsMenu, Leftbar, SheetLeftbar};
pub use navbar::{Logo, NavMenu, Navbar};
