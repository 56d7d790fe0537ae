//! Low-level recognizers for the suite naming grammars.

use nom::{
    bytes::complete::{take_while, take_while_m_n},
    combinator::recognize,
    sequence::pair,
    IResult,
};

/// Recognize an uppercase group code: one uppercase letter followed by
/// uppercase letters or digits.
pub fn upper_ident(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while_m_n(1, 1, |c: char| c.is_ascii_uppercase()),
        take_while(|c: char| c.is_ascii_uppercase() || c.is_ascii_digit()),
    ))(input)
}

/// Split a trailing `_<digits>` run off a property body. The body must stay
/// non-empty, so a suffix never swallows the whole name.
pub fn split_numeric_suffix(body: &str) -> (&str, &str) {
    if let Some(idx) = body.rfind('_') {
        if idx > 0 {
            let digits = &body[idx + 1..];
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return (&body[..idx], &body[idx..]);
            }
        }
    }
    (body, "")
}
