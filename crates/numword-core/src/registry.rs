use alloc::string::String;
use alloc::vec::Vec;

use crate::table::LinguisticTable;
use crate::types::{Number, Request};
use crate::{ConvertError, ConvertResult, arabic, english};

/// Closed set of supported rendering styles. Adding a language means adding
/// a variant and its table, not a new subclass hierarchy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Arabic,
}

struct LanguageEntry {
    language: Language,
    aliases: Vec<String>,
    table: LinguisticTable,
}

/// Explicit language registry: built once, passed by the caller, read-only
/// afterwards. There is no hidden process-wide singleton.
pub struct Registry {
    entries: Vec<LanguageEntry>,
    default_language: String,
}

// Phrases used when even the default language defines none.
const FALLBACK_POSITIVE_INFINITY: &str = "infinity";
const FALLBACK_NEGATIVE_INFINITY: &str = "negative infinity";
const FALLBACK_NAN: &str = "not a number";

#[derive(Copy, Clone)]
enum SpecialKind {
    PositiveInfinity,
    NegativeInfinity,
    Nan,
}

impl Registry {
    /// Registry with the builtin languages: English (`en`, `english`) and
    /// Arabic (`ar`, `arabic`). The builtin tables satisfy `validate`;
    /// their own test modules hold that invariant.
    pub fn builtin() -> Self {
        let mut registry = Registry {
            entries: Vec::new(),
            default_language: String::from("en"),
        };
        registry.push(Language::English, &["en", "english"], english::table());
        registry.push(Language::Arabic, &["ar", "arabic"], arabic::table());
        registry
    }

    /// Validates and adds a language table. Later registrations win alias
    /// lookups, so a builtin language can be overridden wholesale.
    pub fn register(
        &mut self,
        language: Language,
        aliases: &[&str],
        table: LinguisticTable,
    ) -> ConvertResult<()> {
        table.validate()?;
        self.push(language, aliases, table);
        Ok(())
    }

    fn push(&mut self, language: Language, aliases: &[&str], table: LinguisticTable) {
        self.entries.push(LanguageEntry {
            language,
            // Stored in the same form `resolve` normalizes lookup keys to.
            aliases: aliases
                .iter()
                .map(|alias| alias.trim().to_ascii_lowercase())
                .collect(),
            table,
        });
    }

    /// Every alias the registry answers to, in registration order.
    pub fn supported(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|entry| entry.aliases.iter().cloned())
            .collect()
    }

    fn resolve(&self, code: &str) -> Option<&LanguageEntry> {
        let key = code.trim().to_ascii_lowercase();
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.aliases.iter().any(|alias| *alias == key))
    }

    /// Converts `number` according to `request`. Infinities and NaN resolve
    /// to fixed per-language phrases before any mode, gender or currency
    /// handling; unknown language codes fall back to the default language
    /// for those phrases only.
    pub fn convert(&self, number: &Number, request: &Request) -> ConvertResult<String> {
        if let Number::Float(value) = number {
            if value.is_nan() {
                return Ok(self.special_phrase(&request.language, SpecialKind::Nan));
            }
            if value.is_infinite() {
                let kind = if *value > 0.0 {
                    SpecialKind::PositiveInfinity
                } else {
                    SpecialKind::NegativeInfinity
                };
                return Ok(self.special_phrase(&request.language, kind));
            }
        }
        let entry =
            self.resolve(&request.language)
                .ok_or_else(|| ConvertError::UnsupportedLanguage {
                    requested: request.language.clone(),
                    supported: self.supported(),
                })?;
        match entry.language {
            Language::English => english::render(&entry.table, number, request),
            Language::Arabic => arabic::render(&entry.table, number, request),
        }
    }

    fn special_phrase(&self, language: &str, kind: SpecialKind) -> String {
        let pick = |entry: &LanguageEntry| -> Option<String> {
            let special = &entry.table.special;
            match kind {
                SpecialKind::PositiveInfinity => special.positive_infinity.clone(),
                SpecialKind::NegativeInfinity => special.negative_infinity.clone(),
                SpecialKind::Nan => special.nan.clone(),
            }
        };
        self.resolve(language)
            .and_then(&pick)
            .or_else(|| self.resolve(&self.default_language).and_then(&pick))
            .unwrap_or_else(|| {
                String::from(match kind {
                    SpecialKind::PositiveInfinity => FALLBACK_POSITIVE_INFINITY,
                    SpecialKind::NegativeInfinity => FALLBACK_NEGATIVE_INFINITY,
                    SpecialKind::Nan => FALLBACK_NAN,
                })
            })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Language, Registry};
    use crate::types::{Gender, Mode, Number, Request};
    use crate::{ConvertError, english};

    #[test]
    fn converts_the_default_language() {
        let registry = Registry::builtin();
        assert_eq!(
            registry
                .convert(&Number::from(42), &Request::default())
                .expect("convert"),
            "forty-two"
        );
        assert_eq!(
            registry
                .convert(&Number::from(100), &Request::default())
                .expect("convert"),
            "one hundred"
        );
    }

    #[test]
    fn language_codes_are_case_insensitive_and_accept_full_names() {
        let registry = Registry::builtin();
        for code in ["ar", "AR", "Arabic", "arabic"] {
            assert_eq!(
                registry
                    .convert(&Number::from(0), &Request::new(code))
                    .expect("convert"),
                "صفر"
            );
        }
        assert_eq!(
            registry
                .convert(&Number::from(3), &Request::new("English"))
                .expect("convert"),
            "three"
        );
    }

    #[test]
    fn unknown_language_reports_the_supported_set() {
        let registry = Registry::builtin();
        let err = registry
            .convert(&Number::from(5), &Request::new("xx"))
            .expect_err("unknown language");
        match err {
            ConvertError::UnsupportedLanguage {
                requested,
                supported,
            } => {
                assert_eq!(requested, "xx");
                assert!(supported.contains(&"en".to_string()));
                assert!(supported.contains(&"arabic".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn conversion_is_deterministic() {
        let registry = Registry::builtin();
        let request = Request::new("ar").with_gender(Gender::Feminine);
        let first = registry
            .convert(&Number::from(42), &request)
            .expect("convert");
        let second = registry
            .convert(&Number::from(42), &request)
            .expect("convert");
        assert_eq!(first, second);
    }

    #[test]
    fn infinity_and_nan_bypass_mode_and_currency() {
        let registry = Registry::builtin();
        let request = Request::default()
            .with_mode(Mode::Currency)
            .with_currency("XTS");
        assert_eq!(
            registry
                .convert(&Number::Float(f64::INFINITY), &request)
                .expect("convert"),
            "infinity"
        );
        assert_eq!(
            registry
                .convert(&Number::Float(f64::NEG_INFINITY), &request)
                .expect("convert"),
            "negative infinity"
        );
        assert_eq!(
            registry
                .convert(&Number::Float(f64::NAN), &request)
                .expect("convert"),
            "not a number"
        );
    }

    #[test]
    fn arabic_infinity_phrases() {
        let registry = Registry::builtin();
        assert_eq!(
            registry
                .convert(&Number::Float(f64::INFINITY), &Request::new("ar"))
                .expect("convert"),
            "ما لا نهاية"
        );
        assert_eq!(
            registry
                .convert(&Number::Float(f64::NEG_INFINITY), &Request::new("ar"))
                .expect("convert"),
            "سالب ما لا نهاية"
        );
    }

    #[test]
    fn special_phrases_fall_back_for_unknown_languages() {
        let registry = Registry::builtin();
        assert_eq!(
            registry
                .convert(&Number::Float(f64::INFINITY), &Request::new("xx"))
                .expect("convert"),
            "infinity"
        );
    }

    #[test]
    fn later_registrations_override_builtins() {
        let mut registry = Registry::builtin();
        let mut table = english::table();
        table.zero = "nought".to_string();
        registry
            .register(Language::English, &["en"], table)
            .expect("register");
        assert_eq!(
            registry
                .convert(&Number::from(0), &Request::default())
                .expect("convert"),
            "nought"
        );
    }

    #[test]
    fn registered_aliases_are_case_insensitive_too() {
        let mut registry = Registry::builtin();
        let mut table = english::table();
        table.zero = "naught".to_string();
        registry
            .register(Language::English, &["PT", " Pirate "], table)
            .expect("register");
        for code in ["pt", "PT", "pirate"] {
            assert_eq!(
                registry
                    .convert(&Number::from(0), &Request::new(code))
                    .expect("convert"),
                "naught"
            );
        }
    }

    #[test]
    fn register_rejects_invalid_tables() {
        let mut registry = Registry::builtin();
        let mut table = english::table();
        table.ones.masculine.pop();
        let err = registry
            .register(Language::English, &["en"], table)
            .expect_err("invalid table");
        assert!(matches!(err, ConvertError::InvalidTable(_)));
    }

    #[test]
    fn negative_prefix_law_holds_for_sampled_values() {
        let registry = Registry::builtin();
        for value in [1i64, 19, 20, 42, 99, 100, 999, 1000, 1_000_001] {
            let positive = registry
                .convert(&Number::from(value), &Request::default())
                .expect("convert");
            let negative = registry
                .convert(&Number::from(-value), &Request::default())
                .expect("convert");
            assert_eq!(negative, alloc::format!("negative {positive}"));
        }
    }
}
