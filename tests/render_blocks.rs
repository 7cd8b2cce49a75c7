use writerai::render::{render_blocks, Block};

#[test]
fn test_mixed_content_maps_line_per_block() {
    let blocks = render_blocks("**Title**\n* item\nplain");
    assert_eq!(
        blocks,
        vec![
            Block::Heading("Title".to_string()),
            Block::BulletItem("item".to_string()),
            Block::Paragraph("plain".to_string()),
        ]
    );
}

#[test]
fn test_empty_lines_become_empty_paragraphs() {
    let blocks = render_blocks("first\n\nsecond");
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph("first".to_string()),
            Block::Paragraph(String::new()),
            Block::Paragraph("second".to_string()),
        ]
    );
}

#[test]
fn test_every_line_maps_to_exactly_one_block() {
    let content = "**Act One**\n* beat\n* beat two\n\nclosing line";
    assert_eq!(render_blocks(content).len(), content.split('\n').count());
}

#[test]
fn test_rendering_is_deterministic() {
    let content = "**Title**\n* item\nplain\n";
    assert_eq!(render_blocks(content), render_blocks(content));
}

#[test]
fn test_no_inline_emphasis() {
    // Markers inside a line are left untouched; only whole-line prefixes
    // are recognized.
    let blocks = render_blocks("some **bold** words");
    assert_eq!(
        blocks,
        vec![Block::Paragraph("some **bold** words".to_string())]
    );
}

#[test]
fn test_single_empty_input_is_one_empty_paragraph() {
    assert_eq!(render_blocks(""), vec![Block::Paragraph(String::new())]);
}
