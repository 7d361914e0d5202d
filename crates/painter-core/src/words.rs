use unicode_segmentation::UnicodeSegmentation;

/// Character range of the UAX #29 word touching `column` in `line`.
///
/// A word strictly containing the column wins, then one starting at it, then one ending at it.
/// Ideographs are separate words, so a boundary between two of them resolves to the right-hand
/// one.
pub(crate) fn word_range_in_line(line: &str, column: usize) -> Option<(usize, usize)> {
    let mut starting = None;
    let mut ending = None;

    for (byte_start, word) in line.unicode_word_indices() {
        let start = line[..byte_start].chars().count();
        let end = start + word.chars().count();
        if start > column {
            break;
        }
        if start < column && column < end {
            return Some((start, end));
        }
        if start == column && starting.is_none() {
            starting = Some((start, end));
        } else if end == column {
            ending = Some((start, end));
        }
    }

    starting.or(ending)
}

/// Character range of the non-whitespace run touching `offset` in `chars`.
pub(crate) fn non_whitespace_run(chars: &[char], offset: usize) -> (usize, usize) {
    let offset = offset.min(chars.len());
    let mut start = offset;
    while start > 0 && !chars[start - 1].is_whitespace() {
        start -= 1;
    }
    let mut end = offset;
    while end < chars.len() && !chars[end].is_whitespace() {
        end += 1;
    }
    (start, end)
}
