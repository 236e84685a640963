use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::types::Gender;
use crate::{ConvertError, ConvertResult};

pub const ONES_LEN: usize = 20;
pub const TENS_LEN: usize = 10;
pub const HUNDREDS_LEN: usize = 10;

/// Word list indexed by numeric value, with an optional feminine variant.
/// Languages without grammatical gender populate only the masculine list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderedForms {
    pub masculine: Vec<String>,
    pub feminine: Option<Vec<String>>,
}

impl GenderedForms {
    pub fn uniform(words: Vec<String>) -> Self {
        GenderedForms {
            masculine: words,
            feminine: None,
        }
    }

    pub fn get(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => self.feminine.as_deref().unwrap_or(&self.masculine),
        }
    }
}

/// How a language names the hundreds bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HundredsRule {
    /// A unit word composed after the ones word ("one hundred").
    UnitWord(String),
    /// A dedicated word per hundreds digit (index 1..=9; index 0 unused).
    PerDigit(Vec<String>),
}

/// Scale words for one base-1000 tier. Tier 0 (units) carries empty words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaleTier {
    pub singular: String,
    pub dual: Option<String>,
    pub plural: Option<String>,
    pub ordinal: Option<String>,
}

impl ScaleTier {
    pub fn singular(word: &str) -> Self {
        ScaleTier {
            singular: String::from(word),
            ..ScaleTier::default()
        }
    }

    /// Grammatical-number agreement for a chunk value against this tier:
    /// 1 takes the singular, 2 the dual, 3..=10 and everything above the
    /// plural; missing forms fall back to the singular.
    pub fn agreement_form(&self, value: u16) -> &str {
        match value {
            1 => &self.singular,
            2 => self.dual.as_deref().unwrap_or(&self.singular),
            _ => self.plural.as_deref().unwrap_or(&self.singular),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyEntry {
    pub name: String,
    pub plural: String,
    pub dual: Option<String>,
    pub subunit: String,
    pub subunit_plural: String,
    pub subunit_dual: Option<String>,
    /// Singular with tanween case-marking, used by Arabic for subunit
    /// values outside the dual and 3..=10 brackets when present.
    pub subunit_tanween: Option<String>,
    pub subunit_factor: u32,
    pub subunit_always_singular: bool,
}

/// Phrases that bypass the renderers entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialValues {
    pub positive_infinity: Option<String>,
    pub negative_infinity: Option<String>,
    pub nan: Option<String>,
}

/// Immutable word tables for one language. Validated once at registration;
/// renderers index into it without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticTable {
    pub ones: GenderedForms,
    pub tens: GenderedForms,
    pub hundreds: HundredsRule,
    pub scales: Vec<ScaleTier>,
    pub zero: String,
    pub zeroth: Option<String>,
    pub ordinal_ones: Option<Vec<String>>,
    pub ordinal_tens: Option<Vec<String>>,
    pub negative_prefix: String,
    pub decimal_separator: String,
    pub ordinal_prefix: Option<String>,
    pub conjunction: Option<String>,
    pub number_separator: String,
    pub scale_separator: String,
    pub currencies: BTreeMap<String, CurrencyEntry>,
    pub default_currency: String,
    pub special: SpecialValues,
}

impl LinguisticTable {
    pub fn scale_tier(&self, tier: u32) -> Option<&ScaleTier> {
        self.scales.get(tier as usize)
    }

    /// Fail-fast structural validation. Missing or wrong-length word lists
    /// are rejected here rather than tolerated at lookup time.
    pub fn validate(&self) -> ConvertResult<()> {
        if self.ones.masculine.len() != ONES_LEN {
            return Err(ConvertError::InvalidTable("ones list must have 20 entries"));
        }
        if let Some(feminine) = &self.ones.feminine {
            if feminine.len() != ONES_LEN {
                return Err(ConvertError::InvalidTable(
                    "feminine ones list must have 20 entries",
                ));
            }
        }
        if self.tens.masculine.len() != TENS_LEN {
            return Err(ConvertError::InvalidTable("tens list must have 10 entries"));
        }
        if let Some(feminine) = &self.tens.feminine {
            if feminine.len() != TENS_LEN {
                return Err(ConvertError::InvalidTable(
                    "feminine tens list must have 10 entries",
                ));
            }
        }
        if let HundredsRule::PerDigit(words) = &self.hundreds {
            if words.len() != HUNDREDS_LEN {
                return Err(ConvertError::InvalidTable(
                    "hundreds list must have 10 entries",
                ));
            }
        }
        if let Some(ordinal_ones) = &self.ordinal_ones {
            if ordinal_ones.len() != ONES_LEN {
                return Err(ConvertError::InvalidTable(
                    "ordinal ones list must have 20 entries",
                ));
            }
            if self.ordinal_tens.is_none() {
                return Err(ConvertError::InvalidTable(
                    "ordinal ones require an ordinal tens list",
                ));
            }
        }
        if let Some(ordinal_tens) = &self.ordinal_tens {
            if ordinal_tens.len() != TENS_LEN {
                return Err(ConvertError::InvalidTable(
                    "ordinal tens list must have 10 entries",
                ));
            }
        }
        for scale in self.scales.iter().skip(1) {
            if scale.singular.is_empty() {
                return Err(ConvertError::InvalidTable(
                    "scale tiers beyond units need a singular word",
                ));
            }
        }
        if self.zero.is_empty() {
            return Err(ConvertError::InvalidTable("zero word must not be empty"));
        }
        if self.negative_prefix.is_empty() {
            return Err(ConvertError::InvalidTable(
                "negative prefix must not be empty",
            ));
        }
        if self.decimal_separator.is_empty() {
            return Err(ConvertError::InvalidTable(
                "decimal separator must not be empty",
            ));
        }
        for entry in self.currencies.values() {
            if entry.subunit_factor == 0 {
                return Err(ConvertError::InvalidTable(
                    "currency subunit factor must be positive",
                ));
            }
        }
        if !self.currencies.is_empty() && !self.currencies.contains_key(&self.default_currency) {
            return Err(ConvertError::InvalidTable(
                "default currency must be present in the currency table",
            ));
        }
        Ok(())
    }
}
