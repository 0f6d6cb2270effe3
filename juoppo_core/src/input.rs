//! Parsing of console answers.

/// Parse a decimal number, accepting `,` as the decimal separator.
///
/// Surrounding whitespace is ignored. Returns `None` when the text is not a
/// number; no range checks are made.
pub fn parse_decimal(input: &str) -> Option<f64> {
    input.trim().replace(',', ".").parse::<f64>().ok()
}

/// Answer to the "did you drink more?" question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    /// `k` (kyllä)
    Yes,
    /// `e` (ei)
    No,
}

impl Answer {
    /// Parse an answer, case-insensitively. Only `k` and `e` are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "k" => Some(Answer::Yes),
            "e" => Some(Answer::No),
            _ => None,
        }
    }
}
