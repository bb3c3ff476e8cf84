//! Selection-aware text transform
//!
//! Pure: reads a value and selection bounds, returns the new value. The
//! formatter itself is supplied by the caller and is not inspected here.

/// Apply `formatter` to the selected range of `value`, or to all of it.
///
/// A non-empty range (`end > start`) is formatted in place with the text
/// before and after it kept verbatim. A caret, an inverted range, or missing
/// offsets (treated as 0) format the whole value. Offsets are `char` indices
/// and are clamped to the value's length.
///
/// Panics raised by `formatter` are not caught.
pub fn compute_formatted_value<F>(
    value: &str,
    selection_start: Option<usize>,
    selection_end: Option<usize>,
    formatter: F,
) -> String
where
    F: FnOnce(&str) -> String,
{
    let start = selection_start.unwrap_or(0);
    let end = selection_end.unwrap_or(0);

    if end <= start {
        return formatter(value);
    }

    let start_byte = char_to_byte(value, start);
    let end_byte = char_to_byte(value, end);

    let (prefix, rest) = value.split_at(start_byte);
    let (selected, suffix) = rest.split_at(end_byte - start_byte);

    let formatted = formatter(selected);
    let mut result = String::with_capacity(prefix.len() + formatted.len() + suffix.len());
    result.push_str(prefix);
    result.push_str(&formatted);
    result.push_str(suffix);
    result
}

/// Fallible variant of [`compute_formatted_value`]; the formatter's error is returned as-is
pub fn try_compute_formatted_value<F, E>(
    value: &str,
    selection_start: Option<usize>,
    selection_end: Option<usize>,
    formatter: F,
) -> Result<String, E>
where
    F: FnOnce(&str) -> Result<String, E>,
{
    let mut error = None;
    let result = compute_formatted_value(value, selection_start, selection_end, |text| {
        match formatter(text) {
            Ok(formatted) => formatted,
            Err(e) => {
                error = Some(e);
                String::new()
            }
        }
    });
    match error {
        Some(e) => Err(e),
        None => Ok(result),
    }
}

/// Byte index of the `char_idx`-th char, clamped to the end of `text`
fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
