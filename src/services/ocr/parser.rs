use regex::Regex;

/// Symbols commonly seen in esports player tags, kept alongside alphanumerics.
const NAME_SYMBOLS: [char; 8] = ['#', '•', '!', '-', '|', ' ', '_', '.'];

/// Clean a recognized numeric field down to its digits.
/// Non-digit characters are discarded; an empty or digit-free field is 0.
pub fn clean_int(text: &str) -> u32 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Normalize a recognized survival time to "MM:SS".
///
/// OCR renders the minute/second separator inconsistently - `17'14"`,
/// `17.14`, stray spaces, curly quotes. Apostrophes and periods become the
/// canonical colon, quote marks and spaces are dropped, then the first
/// `M{1,2}:SS` occurrence wins. Anything unrecognizable is "00:00".
pub fn clean_time(text: &str) -> String {
    let canonical: String = text
        .chars()
        .filter_map(|c| match c {
            '\'' | '\u{2018}' | '\u{2019}' | '.' => Some(':'),
            '"' | '\u{201C}' | '\u{201D}' | ' ' => None,
            c => Some(c),
        })
        .collect();

    let re = Regex::new(r"\d{1,2}:\d{2}").unwrap();
    match re.find(&canonical) {
        Some(m) => m.as_str().to_string(),
        None => "00:00".to_string(),
    }
}

/// Clean a recognized player name.
/// Keeps alphanumerics plus the tag symbol set, trims surrounding whitespace.
pub fn clean_name(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || NAME_SYMBOLS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Row validity gate: a usable name has more than one character.
///
/// This is the only validation applied to a row. A damage-vs-kills
/// plausibility check was considered and deliberately left unenforced.
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() > 1
}
