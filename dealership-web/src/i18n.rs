//! Thin helpers over the core localization table for components
use dealership_core::{Key, Lang, LocalizationTable};

/// Text for `key` in `lang`.
#[must_use]
pub fn t(lang: Lang, key: Key) -> String {
    LocalizationTable::builtin().text(lang, key)
}

/// Text for `key` in `lang` with `{name}` placeholders filled.
#[must_use]
pub fn tr(lang: Lang, key: Key, args: &[(&str, &str)]) -> String {
    LocalizationTable::builtin().format(lang, key, args)
}

/// Reflect the active language on `<html lang>`.
pub fn apply_document_lang(lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    crate::dom::set_root_attribute("lang", lang.code());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = lang;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_resolve_through_builtin_table() {
        assert_eq!(t(Lang::En, Key::NavInventory), "Inventory");
        assert_eq!(t(Lang::Es, Key::NavInventory), "Inventario");
        assert_eq!(
            tr(Lang::En, Key::ErrorRequired, &[("field", "name")]),
            "Please fill in the name field."
        );
    }
}
