#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Semicolon,
    Comma,
}

impl Delimiter {
    /// Tab wins outright; otherwise semicolon only when it strictly
    /// outnumbers commas. A line with neither falls back to comma.
    pub fn detect(line: &str) -> Self {
        if line.contains('\t') {
            return Delimiter::Tab;
        }
        let semicolons = line.matches(';').count();
        let commas = line.matches(',').count();
        if semicolons > commas {
            Delimiter::Semicolon
        } else {
            Delimiter::Comma
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Semicolon => ';',
            Delimiter::Comma => ',',
        }
    }
}

/// Splits a line on its detected delimiter. Tokens are trimmed; empty ones
/// are kept so positions still line up with the source columns.
pub fn tokenize(line: &str) -> Vec<&str> {
    let delimiter = Delimiter::detect(line);
    line.split(delimiter.as_char()).map(str::trim).collect()
}
