/// Reveal delay before the first character appears.
pub const TYPING_START_DELAY_SECS: f64 = 0.5;
/// Time between two revealed characters.
pub const TYPING_CHAR_INTERVAL_SECS: f64 = 0.1;

/// The part of `text` a typewriter would have printed after `elapsed_secs`.
pub fn typed_prefix(
    text: &str,
    elapsed_secs: f64,
    char_interval_secs: f64,
    start_delay_secs: f64,
) -> &str {
    let text = text.trim();
    let typing_secs = elapsed_secs - start_delay_secs;
    if typing_secs <= 0.0 {
        return "";
    }
    if char_interval_secs <= 0.0 {
        return text;
    }

    let revealed = (typing_secs / char_interval_secs).floor() as usize + 1;
    match text.char_indices().nth(revealed) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

pub fn typing_finished(text: &str, elapsed_secs: f64) -> bool {
    typed_prefix(
        text,
        elapsed_secs,
        TYPING_CHAR_INTERVAL_SECS,
        TYPING_START_DELAY_SECS,
    )
    .len()
        == text.trim().len()
}
