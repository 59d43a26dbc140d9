//! HTML to plain text rendering.

use crate::constants::RENDER_WIDTH;
use crate::error::Result;

/// Render an HTML email body as plain text.
///
/// Link targets are kept as footnotes, and the render width is wide enough
/// that paragraphs are not re-wrapped. Deterministic for a given input.
pub fn html_to_text(html: &str) -> Result<String> {
    Ok(html2text::from_read(html.as_bytes(), RENDER_WIDTH)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_and_link_target() {
        let text = html_to_text(r#"<p>Hello <a href="http://x.test">world</a></p>"#).unwrap();
        assert!(text.contains("Hello"));
        assert!(text.contains("http://x.test"));
    }

    #[test]
    fn keeps_every_link_target() {
        let text = html_to_text(
            r#"<p><a href="http://a.test/one">one</a> and <a href="http://b.test/two">two</a></p>"#,
        )
        .unwrap();
        assert!(text.contains("http://a.test/one"));
        assert!(text.contains("http://b.test/two"));
    }

    #[test]
    fn long_paragraphs_are_not_wrapped() {
        let sentence =
            "An unreasonably long sentence that a narrow renderer would have to wrap. ".repeat(20);
        let text = html_to_text(&format!("<p>{sentence}</p>")).unwrap();
        assert!(text.lines().any(|line| line.len() > 1000));
    }
}
