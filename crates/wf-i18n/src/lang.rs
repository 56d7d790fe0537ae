//! Supported editor display languages.

/// Editor display language. Unrecognized codes fall back to English, whose
/// table is empty and therefore returns inputs unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    #[default]
    English,
    Japanese,
    Korean,
}

impl Lang {
    /// Parse a two-letter ISO code; anything unknown is English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ja" => Lang::Japanese,
            "ko" => Lang::Korean,
            _ => Lang::English,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::English => "en",
            Lang::Japanese => "ja",
            Lang::Korean => "ko",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for lang in [Lang::English, Lang::Japanese, Lang::Korean] {
            assert_eq!(Lang::from_code(lang.code()), lang);
        }
    }

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Lang::from_code("fr"), Lang::English);
        assert_eq!(Lang::from_code(""), Lang::English);
        assert_eq!(Lang::from_code("JA"), Lang::English);
    }
}
