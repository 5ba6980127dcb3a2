//! Word-to-text assembly.

use super::page::Word;

/// Vertical distance within which words are treated as one line.
pub const DEFAULT_Y_TOLERANCE: f32 = 3.0;

/// Join words into text: one line per row of words, left to right.
///
/// Words whose top edge lies within `y_tolerance` of the first word of the
/// current line join that line. Words are separated by a single space and
/// lines by `\n`.
pub fn words_to_text(words: &[&Word], y_tolerance: f32) -> String {
    if words.is_empty() {
        return String::new();
    }

    let mut sorted: Vec<&Word> = words.to_vec();
    sorted.sort_by(|a, b| {
        a.top
            .partial_cmp(&b.top)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut lines: Vec<Vec<&Word>> = Vec::new();
    let mut current: Vec<&Word> = Vec::new();
    let mut line_top: Option<f32> = None;

    for word in sorted {
        match line_top {
            Some(top) if (word.top - top).abs() <= y_tolerance => current.push(word),
            _ => {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                line_top = Some(word.top);
                current.push(word);
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .into_iter()
        .map(|mut line| {
            line.sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal));
            line.iter()
                .map(|w| w.text.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
