//! Tag-aware localization for suite display strings.
//!
//! Translation tables are supplied by the caller (the data lives outside
//! this core); this crate provides the lookup algorithm: label-tagged
//! entries take priority over wildcards, unmatched text passes through
//! unchanged, and `[LABEL] Name` display strings are translated on the name
//! portion with the label preserved.

mod lang;
mod prefs;
mod table;

pub use lang::Lang;
pub use prefs::{EditorSettings, MemoryPrefs, PrefStore, KEY_EDITOR_LANG, KEY_MENU_TO_BOTTOM};
pub use table::{Translation, TranslationTable};

use wf_core::DisplayName;
use wf_parser::parse_display_name;

/// Localizer over the three supported languages.
///
/// The active language is an explicit field, settable at any time; the
/// English table is the identity (no entries).
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    japanese: TranslationTable,
    korean: TranslationTable,
    english: TranslationTable,
    lang: Lang,
}

impl Localizer {
    pub fn new(japanese: TranslationTable, korean: TranslationTable) -> Self {
        Self {
            japanese,
            korean,
            english: TranslationTable::new(),
            lang: Lang::default(),
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
    }

    fn active_table(&self) -> &TranslationTable {
        match self.lang {
            Lang::Japanese => &self.japanese,
            Lang::Korean => &self.korean,
            Lang::English => &self.english,
        }
    }

    /// Wildcard translation; unmatched text passes through unchanged.
    pub fn translate<'a>(&'a self, text: &'a str) -> &'a str {
        self.active_table().translate(text).unwrap_or(text)
    }

    /// Label-aware translation; tagged entries win over wildcards.
    pub fn translate_tagged<'a>(&'a self, label: &str, text: &'a str) -> &'a str {
        self.active_table()
            .translate_tagged(label, text)
            .unwrap_or(text)
    }

    /// Translate a display string. `[LABEL] Name` keeps its label and
    /// translates the name under that label; anything else is translated
    /// as-is.
    pub fn translate_display(&self, text: &str) -> String {
        match parse_display_name(text) {
            DisplayName::Labeled { label, name } => {
                format!("[{}] {}", label, self.translate_tagged(&label, &name))
            }
            DisplayName::Plain(_) => self.translate(text).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn localizer() -> Localizer {
        let japanese = TranslationTable::from_entries([
            Translation::new("Foo", "Baz"),
            Translation::tagged("TAG", "Foo", "Qux"),
            Translation::tagged("CL", "Color", "色"),
        ]);
        let korean = TranslationTable::from_entries([Translation::new("Foo", "Ko")]);
        Localizer::new(japanese, korean)
    }

    #[test]
    fn english_is_identity() {
        let l = localizer();
        assert_eq!(l.lang(), Lang::English);
        assert_eq!(l.translate("Foo"), "Foo");
        assert_eq!(l.translate_display("[CL] Color"), "[CL] Color");
    }

    #[test]
    fn wildcard_translation() {
        let mut l = localizer();
        l.set_lang(Lang::Japanese);
        assert_eq!(l.translate("Foo"), "Baz");
        assert_eq!(l.translate("Missing"), "Missing");
    }

    #[test]
    fn tagged_beats_wildcard() {
        let mut l = localizer();
        l.set_lang(Lang::Japanese);
        assert_eq!(l.translate_tagged("TAG", "Foo"), "Qux");
        assert_eq!(l.translate_tagged("OTHER", "Foo"), "Baz");
    }

    #[test]
    fn display_translation_keeps_the_label() {
        let mut l = localizer();
        l.set_lang(Lang::Japanese);
        assert_eq!(l.translate_display("[CL] Color"), "[CL] 色");
        // Unlabeled text goes through the wildcard path.
        assert_eq!(l.translate_display("Foo"), "Baz");
        // Labeled but untranslated names pass through.
        assert_eq!(l.translate_display("[TS] Shade"), "[TS] Shade");
    }

    #[test]
    fn language_switch_is_immediate() {
        let mut l = localizer();
        l.set_lang(Lang::Korean);
        assert_eq!(l.translate("Foo"), "Ko");
        l.set_lang(Lang::English);
        assert_eq!(l.translate("Foo"), "Foo");
    }
}
