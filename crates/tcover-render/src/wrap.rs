//! Greedy per-character line wrapping
//!
//! Titles are broken between any two characters, not at word boundaries:
//! CJK titles have no spaces to break at, and each character is measured
//! on its own terms. Line-break characters get no special treatment.

use tcover_core::Face;

/// Splits `text` into lines no wider than `max_width` as measured by `face`
///
/// Characters are added to the current line while the line still fits.
/// A character that is wider than `max_width` by itself still gets a line
/// of its own. An empty title gives no lines.
pub fn wrap_lines(text: &str, face: &dyn Face, max_width: f32) -> Vec<String> {
    let (mut lines, last) = text.chars().fold(
        (Vec::new(), String::new()),
        |(mut lines, mut current), ch| {
            current.push(ch);
            if face.bbox(&current).width() > max_width {
                current.pop();
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
            }
            (lines, current)
        },
    );

    if !last.is_empty() {
        lines.push(last);
    }
    lines
}
