//! The three naming grammars: display names, property names, and ENABLE
//! keywords.

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    IResult,
};
use wf_core::{DisplayName, PropertyName};

use crate::lexer::{split_numeric_suffix, upper_ident};

/// `[LABEL] Name` — label is an uppercase group code, the remainder after
/// the whitespace run is the name.
fn labeled_display(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, _) = char('[')(input)?;
    let (input, label) = upper_ident(input)?;
    let (input, _) = char(']')(input)?;
    let (input, _) = take_while1(char::is_whitespace)(input)?;
    Ok(("", (label, input)))
}

/// `_PREFIX_` — the leading group code of a physical property name. Returns
/// the prefix and the remaining body.
fn prefixed_property(input: &str) -> IResult<&str, &str> {
    let (input, _) = char('_')(input)?;
    let (input, prefix) = upper_ident(input)?;
    let (input, _) = char('_')(input)?;
    Ok((input, prefix))
}

/// Decompose a GUI display name. Never fails; text without the `[LABEL]`
/// prefix comes back as `Plain`.
pub fn parse_display_name(text: &str) -> DisplayName {
    if let Ok((_, (label, name))) = labeled_display(text) {
        if !name.is_empty() {
            return DisplayName::Labeled {
                label: label.to_ascii_uppercase(),
                name: name.to_string(),
            };
        }
    }
    DisplayName::Plain(text.to_string())
}

/// Decompose a physical property name into prefix, name, and optional
/// numbered suffix. Never fails.
pub fn parse_property_name(text: &str) -> PropertyName {
    if let Ok((body, prefix)) = prefixed_property(text) {
        if !body.is_empty() {
            let (name, suffix) = split_numeric_suffix(body);
            return PropertyName::Prefixed {
                prefix: prefix.to_ascii_uppercase(),
                name: name.to_string(),
                suffix: suffix.to_string(),
            };
        }
    }
    PropertyName::Plain(text.to_string())
}

/// Whether a keyword string follows the `_PREFIX_FUNC_ENABLE` convention
/// (`FUNC_` optional, numbered suffix optional).
pub fn is_enable_keyword(text: &str) -> bool {
    let Ok((body, _prefix)) = prefixed_property(text) else {
        return false;
    };
    let (body, _suffix) = split_numeric_suffix(body);
    if body == "ENABLE" {
        return true;
    }
    match body.strip_suffix("_ENABLE") {
        Some(func) => {
            !func.is_empty()
                && func
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        }
        None => false,
    }
}

/// Whether a property is an enable toggle: prefixed, and named "enable"
/// case-insensitively.
pub fn is_enable_toggle_property(property_name: &str) -> bool {
    match parse_property_name(property_name) {
        PropertyName::Prefixed { name, .. } => name.eq_ignore_ascii_case("enable"),
        PropertyName::Plain(_) => false,
    }
}
