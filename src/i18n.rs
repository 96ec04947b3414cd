//! Localized UI strings
//!
//! Strings are looked up by their English source text. Unknown languages and
//! untranslated keys fall back to the source text.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Tooltip for the crop button when clicking will discard the selection
pub const CLEAR_CROP: &str = "Clear crop";

/// Tooltip for the crop button when clicking will toggle drawing mode
pub const TOGGLE_CROP_MODE: &str = "Toggle crop mode";

/// Hint shown on the overlay before the first drag
pub const CROP_INSTRUCTIONS: &str = "Click and drag to create a crop area";

/// Language used when a code is missing or unsupported
pub const DEFAULT_LANGUAGE: &str = "en";

type Table = HashMap<&'static str, &'static str>;

static TRANSLATIONS: Lazy<HashMap<&'static str, Table>> = Lazy::new(|| {
    let mut languages = HashMap::new();

    languages.insert(
        "no",
        HashMap::from([
            (CLEAR_CROP, "Fjern beskjæring"),
            (TOGGLE_CROP_MODE, "Slå beskjæringsmodus av/på"),
            (CROP_INSTRUCTIONS, "Klikk og dra for å lage et beskjæringsområde"),
        ]),
    );
    languages.insert(
        "da",
        HashMap::from([
            (CLEAR_CROP, "Ryd beskæring"),
            (TOGGLE_CROP_MODE, "Slå beskæringstilstand til/fra"),
            (CROP_INSTRUCTIONS, "Klik og træk for at oprette et beskæringsområde"),
        ]),
    );
    languages.insert(
        "fi",
        HashMap::from([
            (CLEAR_CROP, "Poista rajaus"),
            (TOGGLE_CROP_MODE, "Vaihda rajaustila"),
            (CROP_INSTRUCTIONS, "Napsauta ja vedä luodaksesi rajausalueen"),
        ]),
    );
    languages.insert(
        "de",
        HashMap::from([
            (CLEAR_CROP, "Zuschnitt entfernen"),
            (TOGGLE_CROP_MODE, "Zuschneidemodus umschalten"),
            (
                CROP_INSTRUCTIONS,
                "Klicken und ziehen, um einen Zuschnittbereich zu erstellen",
            ),
        ]),
    );

    languages
});

/// String catalog for a single language
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    language: &'static str,
    table: Option<&'static Table>,
}

impl Catalog {
    /// Catalog for a language code such as "en", "de" or "nb-NO"
    pub fn new(code: &str) -> Self {
        match TRANSLATIONS.get_key_value(primary_language(code).as_str()) {
            Some((language, table)) => Self {
                language: *language,
                table: Some(table),
            },
            None => Self::english(),
        }
    }

    /// The source-language catalog
    pub fn english() -> Self {
        Self {
            language: DEFAULT_LANGUAGE,
            table: None,
        }
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Translate a source string
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.table
            .and_then(|table| table.get(key).copied())
            .unwrap_or(key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

fn primary_language(code: &str) -> String {
    let primary = code
        .split(['-', '_'])
        .next()
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_ascii_lowercase();
    // Norwegian Bokmål and Nynorsk share the Norwegian table
    if primary == "nb" || primary == "nn" {
        "no".to_string()
    } else {
        primary
    }
}

/// True when `code` resolves to English or a built-in translation
pub fn is_supported(code: &str) -> bool {
    let primary = primary_language(code);
    primary == DEFAULT_LANGUAGE || TRANSLATIONS.contains_key(primary.as_str())
}

/// Language codes with a built-in translation, including the default
pub fn supported_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = TRANSLATIONS.keys().copied().collect();
    codes.push(DEFAULT_LANGUAGE);
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_returns_source_text() {
        let catalog = Catalog::english();
        assert_eq!(catalog.t(CLEAR_CROP), "Clear crop");
        assert_eq!(catalog.t(TOGGLE_CROP_MODE), "Toggle crop mode");
    }

    #[test]
    fn test_german_translation() {
        let catalog = Catalog::new("de");
        assert_eq!(catalog.language(), "de");
        assert_eq!(catalog.t(CLEAR_CROP), "Zuschnitt entfernen");
    }

    #[test]
    fn test_region_and_alias_codes() {
        assert_eq!(Catalog::new("de-AT").language(), "de");
        assert_eq!(Catalog::new("nb_NO").language(), "no");
        assert_eq!(Catalog::new("FI").language(), "fi");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let catalog = Catalog::new("xx");
        assert_eq!(catalog.language(), "en");
        assert_eq!(catalog.t(CROP_INSTRUCTIONS), CROP_INSTRUCTIONS);
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported("en-GB"));
        assert!(is_supported("nn"));
        assert!(is_supported("DE"));
        assert!(!is_supported("xx"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_unknown_key_passes_through() {
        assert_eq!(Catalog::new("da").t("Export"), "Export");
    }

    #[test]
    fn test_every_language_translates_every_key() {
        for code in supported_languages() {
            if code == DEFAULT_LANGUAGE {
                continue;
            }
            let catalog = Catalog::new(code);
            for key in [CLEAR_CROP, TOGGLE_CROP_MODE, CROP_INSTRUCTIONS] {
                assert_ne!(catalog.t(key), key, "{code} is missing {key:?}");
            }
        }
    }
}
