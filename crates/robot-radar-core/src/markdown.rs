//! Markdown-to-prose reduction.
//!
//! Code, headings, tables and raw HTML are not prose and would skew the
//! sentence statistics (a fenced block has no terminators, a heading is a
//! fragment), so they are dropped before scoring markdown input.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Reduce markdown to the prose a reader would see.
///
/// Keeps paragraph, list item, blockquote, emphasis and link text. Drops
/// YAML frontmatter, code (fenced, indented and inline), headings, tables,
/// images and HTML. Block boundaries become newlines.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let body = skip_frontmatter(text);
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;

    let mut prose = String::with_capacity(body.len());
    let mut hidden: usize = 0;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => hidden += 1,
            Event::End(
                TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image,
            ) => hidden = hidden.saturating_sub(1),

            Event::Text(t) if hidden == 0 => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak if hidden == 0 => prose.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Item) if hidden == 0 => prose.push('\n'),

            _ => {}
        }
    }

    prose
}

/// Return the text after a leading `---` frontmatter block, if any.
fn skip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(rest) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close) = rest.find("\n---") else {
        return text;
    };
    let after = &rest[close + "\n---".len()..];
    after.find('\n').map_or("", |nl| &after[nl + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_paragraph_text() {
        let prose = strip_to_prose("Plain *emphasis* and a [link](https://example.com).");
        assert_eq!(prose.trim(), "Plain emphasis and a link.");
    }

    #[test]
    fn drops_code_and_headings() {
        let md = "# Title\n\nThe cat sat.\n\n```rust\nlet x = 1;\n```\n\nUse `cargo` here.";
        let prose = strip_to_prose(md);
        assert!(!prose.contains("Title"));
        assert!(!prose.contains("let x"));
        assert!(!prose.contains("cargo"));
        assert!(prose.contains("The cat sat."));
        assert!(prose.contains("Use  here."));
    }

    #[test]
    fn drops_tables_and_images() {
        let md = "| alpha | beta |\n|---|---|\n| gamma | delta |\n\nText ![alt words](x.png) after.";
        let prose = strip_to_prose(md);
        assert!(!prose.contains("alt words"));
        assert!(!prose.contains("gamma"));
        assert!(prose.contains("Text"));
        assert!(prose.contains("after."));
    }

    #[test]
    fn skips_frontmatter() {
        let md = "---\ntitle: Notes\n---\nBody text here.";
        assert_eq!(strip_to_prose(md).trim(), "Body text here.");
    }

    #[test]
    fn unterminated_frontmatter_is_text() {
        assert_eq!(skip_frontmatter("---\nno closing"), "---\nno closing");
        assert_eq!(skip_frontmatter("no frontmatter"), "no frontmatter");
    }

    #[test]
    fn list_items_keep_their_text() {
        let prose = strip_to_prose("- first item\n- second item\n");
        assert!(prose.contains("first item"));
        assert!(prose.contains("second item"));
    }
}
