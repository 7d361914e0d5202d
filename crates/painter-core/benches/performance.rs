use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use painter_core::{
    Editor, MarkupEngine, MarkupSpec, Position, Selection, TextBuffer, ToggleOptions, TrimTables,
    trim,
};
use rand::Rng;

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "- [ ] {i:06} the quick brown fox jumps over the lazy dog ^id{i}\n"
        ));
    }
    out.pop();
    out
}

fn random_carets(line_count: usize, cursors: usize) -> Vec<Selection> {
    let mut rng = rand::thread_rng();
    let mut lines: Vec<usize> = (0..cursors).map(|_| rng.gen_range(0..line_count)).collect();
    lines.sort_unstable();
    lines.dedup();
    lines
        .into_iter()
        .map(|line| Selection::caret(Position::new(line, rng.gen_range(13..50))))
        .collect()
}

fn bench_multi_cursor_toggle(c: &mut Criterion) {
    let text = large_text(10_000);
    c.bench_function("multi_cursor_toggle/200_carets", |b| {
        b.iter_batched(
            || TextBuffer::new(&text).with_selections(random_carets(10_000, 200)),
            |mut buffer| {
                MarkupEngine::new(&mut buffer)
                    .toggle(&MarkupSpec::bold(), ToggleOptions::default())
                    .unwrap();
                black_box(buffer.len_chars());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_per_line_wrap(c: &mut Criterion) {
    let text = large_text(10_000);
    c.bench_function("per_line_wrap/1000_lines", |b| {
        b.iter_batched(
            || {
                let buffer = TextBuffer::new(&text);
                let end = Position::new(999, buffer.line(999).chars().count());
                buffer.with_selection(Position::new(0, 0), end)
            },
            |mut buffer| {
                MarkupEngine::new(&mut buffer)
                    .toggle(&MarkupSpec::highlight(), ToggleOptions::default())
                    .unwrap();
                black_box(buffer.len_chars());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_trim_long_selection(c: &mut Criterion) {
    let text = large_text(2_000);
    let buffer = TextBuffer::new(&text);
    let tables = TrimTables::default();
    let spec = MarkupSpec::bold();
    let selection = Selection::new(Position::new(0, 0), Position::new(1_999, 20));

    c.bench_function("trim/2000_lines", |b| {
        b.iter(|| black_box(trim(&buffer, black_box(&selection), &spec, &tables)))
    });
}

criterion_group!(
    benches,
    bench_multi_cursor_toggle,
    bench_per_line_wrap,
    bench_trim_long_selection
);
criterion_main!(benches);
