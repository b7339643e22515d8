//! Quote-aware splitting of a single line

pub const SEPARATOR: char = ',';
pub const QUOTE: char = '"';

/// Split one line into fields.
///
/// A quote toggles the inside-quotes state and is dropped from the output.
/// Separators inside quotes are kept as content. There is no escaped-quote
/// form, `""` simply toggles twice. The last field is always pushed, so `n`
/// separators give `n + 1` fields.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
        } else if ch == SEPARATOR && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    fields.push(current);
    fields
}
