use painter_core::{
    Editor, HighlighterSettings, MarkupEngine, MarkupSpec, Position, Selection, TextBuffer,
    ToggleOptions, erase_markup_matching,
};

fn main() {
    let mut buffer = TextBuffer::new("The cat sat\non the mat\n\nfn main() {}\nfn helper() {}")
        .with_selections(vec![
            Selection::caret(Position::new(0, 5)),
            Selection::caret(Position::new(1, 8)),
        ]);

    // Paint both words with the first palette colour.
    let settings = HighlighterSettings::default();
    let command = &settings.commands()[0];
    MarkupEngine::new(&mut buffer)
        .toggle(&command.spec, ToggleOptions::default())
        .unwrap();
    println!("{}: {}", command.id, buffer.text());

    // Fence the two code lines.
    buffer.set_selection(Position::new(3, 0), Position::new(4, 14));
    MarkupEngine::new(&mut buffer)
        .toggle(&MarkupSpec::code(), ToggleOptions::default())
        .unwrap();
    println!("fenced:\n{}", buffer.text());

    // Clear all highlights again.
    let end = buffer.offset_to_pos(buffer.len_chars());
    buffer.set_selection(Position::new(0, 0), end);
    erase_markup_matching(&mut buffer, settings.erase_selectors().as_slice(), false).unwrap();
    assert_eq!(
        buffer.text(),
        "The cat sat\non the mat\n\n```\nfn main() {}\nfn helper() {}\n```"
    );
}
