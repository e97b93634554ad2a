pub mod anchor;
pub mod docs_search;
pub mod icons;
pub mod markdown;
pub mod sheet;
pub mod theme_toggle;

pub use anchor::{Anchor, MatchPolicy};
pub use docs_search::DocsSearch;
pub use markdown::{render_markdown, Prose};
pub use sheet::{Sheet, SheetClose};
pub use theme_toggle::ThemeToggle;
