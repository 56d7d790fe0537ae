//! The host preference-store contract and the cached editor settings view.

use indexmap::IndexMap;

use crate::lang::Lang;

/// Preference key for the editor language.
pub const KEY_EDITOR_LANG: &str = "UnlitWF.ShaderEditor/Lang";
/// Preference key for the menu-at-bottom layout flag.
pub const KEY_MENU_TO_BOTTOM: &str = "UnlitWF.ShaderEditor/MenuToBottom";

/// Host preference storage. Any implementation satisfying this contract
/// works, including the in-memory one used in tests.
pub trait PrefStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);
    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn set_bool(&mut self, key: &str, value: bool);
    fn delete_key(&mut self, key: &str);
}

/// In-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    strings: IndexMap<String, String>,
    bools: IndexMap<String, bool>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get_string(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.strings.insert(key.to_string(), value.to_string());
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.bools.get(key).copied().unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.bools.insert(key.to_string(), value);
    }

    fn delete_key(&mut self, key: &str) {
        self.strings.shift_remove(key);
        self.bools.shift_remove(key);
    }
}

/// Cached view over the persisted editor settings.
///
/// Reads go to the store once and are cached for the session; writes update
/// both. The menu flag is stored only when set, deleting the key otherwise.
#[derive(Debug, Clone)]
pub struct EditorSettings<S: PrefStore> {
    store: S,
    lang: Option<Lang>,
    menu_to_bottom: Option<bool>,
}

impl<S: PrefStore> EditorSettings<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            lang: None,
            menu_to_bottom: None,
        }
    }

    /// The selected language. A stored code wins; otherwise `fallback`
    /// (the host locale, supplied by the caller) is used and cached.
    pub fn lang(&mut self, fallback: Lang) -> Lang {
        if let Some(lang) = self.lang {
            return lang;
        }
        match self.store.get_string(KEY_EDITOR_LANG) {
            Some(code) if !code.trim().is_empty() => Lang::from_code(&code),
            _ => {
                self.lang = Some(fallback);
                fallback
            }
        }
    }

    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = Some(lang);
        self.store.set_string(KEY_EDITOR_LANG, lang.code());
    }

    pub fn menu_to_bottom(&mut self) -> bool {
        if let Some(value) = self.menu_to_bottom {
            return value;
        }
        let value = self.store.get_bool(KEY_MENU_TO_BOTTOM, false);
        self.menu_to_bottom = Some(value);
        value
    }

    pub fn set_menu_to_bottom(&mut self, value: bool) {
        if self.menu_to_bottom == Some(value) {
            return;
        }
        self.menu_to_bottom = Some(value);
        if value {
            self.store.set_bool(KEY_MENU_TO_BOTTOM, true);
        } else {
            self.store.delete_key(KEY_MENU_TO_BOTTOM);
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
