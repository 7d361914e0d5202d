//! Randomized apply/undo over a larger document.
//!
//! Every toggle at a caret inside a word must be undone by a second toggle at the caret the
//! first one left behind.

use painter_core::{Editor, MarkupSpec, Position, TextBuffer, ToggleOptions, apply_or_remove_markup};
use rand::Rng;

const WORDS: &[&str] = &["alpha", "beta", "gamma", "delta", "你好", "x", "naïve", "q1"];

fn random_document(rng: &mut impl Rng, line_count: usize) -> String {
    (0..line_count)
        .map(|_| {
            let count = rng.gen_range(1..8);
            (0..count)
                .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_random_apply_then_undo() {
    let specs = [
        MarkupSpec::bold(),
        MarkupSpec::italic(),
        MarkupSpec::highlight(),
        MarkupSpec::underline(),
        MarkupSpec::comment(),
        MarkupSpec::mark_with_class("hltr-b"),
    ];
    let mut rng = rand::thread_rng();
    let original = random_document(&mut rng, 40);
    let mut buffer = TextBuffer::new(&original);

    for _ in 0..300 {
        let line = rng.gen_range(0..40);
        let len = buffer.line(line).chars().count();
        let column = rng.gen_range(0..=len);
        let spec = &specs[rng.gen_range(0..specs.len())];

        buffer.set_cursor(Position::new(line, column));
        apply_or_remove_markup(&mut buffer, spec, ToggleOptions::default()).unwrap();
        assert_ne!(buffer.text(), original, "apply changed nothing at {line}:{column}");
        apply_or_remove_markup(&mut buffer, spec, ToggleOptions::default()).unwrap();
        assert_eq!(buffer.text(), original, "undo failed at {line}:{column}");
    }
}
