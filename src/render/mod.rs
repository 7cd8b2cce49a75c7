//! Line-based rendering of assistant output into display blocks.
//!
//! The chat markdown the service emits is a strict subset of Markdown: a
//! line wrapped in `**`/`**` is a heading, a line starting with `* ` is a
//! bullet item, anything else is a paragraph. No inline emphasis, no nested
//! lists, no code blocks.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    BulletItem(String),
    Paragraph(String),
}

/// Split `content` on line breaks and map every line to exactly one block,
/// in order. Empty lines become empty paragraphs.
pub fn render_blocks(content: &str) -> Vec<Block> {
    content.split('\n').map(render_line).collect()
}

fn render_line(line: &str) -> Block {
    if line.starts_with("**") && line.ends_with("**") {
        Block::Heading(line.replace("**", ""))
    } else if let Some(item) = line.strip_prefix("* ") {
        Block::BulletItem(item.to_string())
    } else {
        Block::Paragraph(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_markers_stripped() {
        assert_eq!(
            render_line("**Act One**"),
            Block::Heading("Act One".to_string())
        );
    }

    #[test]
    fn bare_double_star_is_an_empty_heading() {
        // A lone "**" both starts and ends with the marker.
        assert_eq!(render_line("**"), Block::Heading(String::new()));
    }

    #[test]
    fn bullet_marker_stripped() {
        assert_eq!(
            render_line("* a twist"),
            Block::BulletItem("a twist".to_string())
        );
    }

    #[test]
    fn star_without_space_is_a_paragraph() {
        assert_eq!(render_line("*note"), Block::Paragraph("*note".to_string()));
    }
}
