// Site content model: framework-free data the UI renders from

pub mod blog;
pub mod nav;
pub mod sections;

pub use nav::{nav_links, NavLink, NAV_LINKS};
pub use sections::{page_routes, DocSection, PageRoute, SECTIONS};
