use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Helper function to render Markdown to HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Rendered markdown body with the site's typographic styles.
#[component]
pub fn Prose(source: &'static str) -> Element {
    let html_content = render_markdown(source);

    rsx! {
        div {
            class: "c-prose",
            dangerous_inner_html: "{html_content}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_paragraphs() {
        let html = render_markdown("# Title\n\nBody text.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Body text.</p>"));
    }

    #[test]
    fn test_renders_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_renders_strikethrough_and_tasklists() {
        let html = render_markdown("~~old~~\n\n- [x] done\n- [ ] open");
        assert!(html.contains("<del>old</del>"));
        assert!(html.contains("checked"));
    }

    #[test]
    fn test_renders_fenced_code() {
        let html = render_markdown("```rust\nfn main() {}\n```");
        assert!(html.contains("<code"));
        assert!(html.contains("fn main()"));
    }
}
