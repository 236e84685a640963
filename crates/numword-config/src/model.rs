use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use numword_core::{
    ConvertError, CurrencyEntry, GenderedForms, HundredsRule, Language, LinguisticTable,
    ScaleTier, SpecialValues,
};

/// Rendering style a table file binds to. Word data comes from the file;
/// composition rules come from the named builtin renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageStyle {
    English,
    Arabic,
}

impl From<LanguageStyle> for Language {
    fn from(style: LanguageStyle) -> Self {
        match style {
            LanguageStyle::English => Language::English,
            LanguageStyle::Arabic => Language::Arabic,
        }
    }
}

/// On-disk shape of one language table. Scale entries start at the
/// thousands tier; the units tier is implicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFile {
    pub language: LanguageStyle,
    pub aliases: Vec<String>,
    pub ones: Vec<String>,
    #[serde(default)]
    pub ones_feminine: Option<Vec<String>>,
    pub tens: Vec<String>,
    #[serde(default)]
    pub tens_feminine: Option<Vec<String>>,
    /// Unit-word hundreds style ("one hundred"). Exclusive with `hundreds`.
    #[serde(default)]
    pub hundred: Option<String>,
    /// Per-digit hundreds style. Exclusive with `hundred`.
    #[serde(default)]
    pub hundreds: Option<Vec<String>>,
    #[serde(default)]
    pub scales: Vec<ScaleFileEntry>,
    pub zero: String,
    #[serde(default)]
    pub zeroth: Option<String>,
    #[serde(default)]
    pub ordinal_ones: Option<Vec<String>>,
    #[serde(default)]
    pub ordinal_tens: Option<Vec<String>>,
    pub negative_prefix: String,
    pub decimal_separator: String,
    #[serde(default)]
    pub ordinal_prefix: Option<String>,
    #[serde(default)]
    pub conjunction: Option<String>,
    #[serde(default = "default_number_separator")]
    pub number_separator: String,
    #[serde(default = "default_scale_separator")]
    pub scale_separator: String,
    #[serde(default)]
    pub currencies: BTreeMap<String, CurrencyFileEntry>,
    #[serde(default)]
    pub default_currency: Option<String>,
    #[serde(default)]
    pub positive_infinity: Option<String>,
    #[serde(default)]
    pub negative_infinity: Option<String>,
    #[serde(default)]
    pub nan: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleFileEntry {
    pub singular: String,
    #[serde(default)]
    pub dual: Option<String>,
    #[serde(default)]
    pub plural: Option<String>,
    #[serde(default)]
    pub ordinal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyFileEntry {
    pub name: String,
    pub plural: String,
    #[serde(default)]
    pub dual: Option<String>,
    pub subunit: String,
    pub subunit_plural: String,
    #[serde(default)]
    pub subunit_dual: Option<String>,
    #[serde(default)]
    pub subunit_tanween: Option<String>,
    #[serde(default = "default_subunit_factor")]
    pub subunit_factor: u32,
    #[serde(default)]
    pub subunit_always_singular: bool,
}

fn default_number_separator() -> String {
    String::from("-")
}

fn default_scale_separator() -> String {
    String::from(" ")
}

fn default_subunit_factor() -> u32 {
    100
}

impl TableFile {
    /// Builds the core table. Structural validation (list lengths, factor
    /// bounds) happens later at registration; only choices that cannot be
    /// expressed in the core model are rejected here.
    pub fn into_table(self) -> Result<(Language, Vec<String>, LinguisticTable), ConvertError> {
        let hundreds = match (self.hundred, self.hundreds) {
            (Some(word), None) => HundredsRule::UnitWord(word),
            (None, Some(words)) => HundredsRule::PerDigit(words),
            _ => {
                return Err(ConvertError::InvalidTable(
                    "table must define exactly one of hundred or hundreds",
                ));
            }
        };
        let mut scales = vec![ScaleTier::default()];
        scales.extend(self.scales.into_iter().map(|entry| ScaleTier {
            singular: entry.singular,
            dual: entry.dual,
            plural: entry.plural,
            ordinal: entry.ordinal,
        }));
        let currencies = self
            .currencies
            .into_iter()
            .map(|(code, entry)| {
                (
                    code,
                    CurrencyEntry {
                        name: entry.name,
                        plural: entry.plural,
                        dual: entry.dual,
                        subunit: entry.subunit,
                        subunit_plural: entry.subunit_plural,
                        subunit_dual: entry.subunit_dual,
                        subunit_tanween: entry.subunit_tanween,
                        subunit_factor: entry.subunit_factor,
                        subunit_always_singular: entry.subunit_always_singular,
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();
        let default_currency = match self.default_currency {
            Some(code) => code,
            None => currencies.keys().next().cloned().unwrap_or_default(),
        };
        let table = LinguisticTable {
            ones: GenderedForms {
                masculine: self.ones,
                feminine: self.ones_feminine,
            },
            tens: GenderedForms {
                masculine: self.tens,
                feminine: self.tens_feminine,
            },
            hundreds,
            scales,
            zero: self.zero,
            zeroth: self.zeroth,
            ordinal_ones: self.ordinal_ones,
            ordinal_tens: self.ordinal_tens,
            negative_prefix: self.negative_prefix,
            decimal_separator: self.decimal_separator,
            ordinal_prefix: self.ordinal_prefix,
            conjunction: self.conjunction,
            number_separator: self.number_separator,
            scale_separator: self.scale_separator,
            currencies,
            default_currency,
            special: SpecialValues {
                positive_infinity: self.positive_infinity,
                negative_infinity: self.negative_infinity,
                nan: self.nan,
            },
        };
        Ok((self.language.into(), self.aliases, table))
    }
}

#[cfg(test)]
mod tests {
    use numword_core::{ConvertError, HundredsRule};

    use super::{LanguageStyle, TableFile};

    fn minimal_file() -> TableFile {
        TableFile {
            language: LanguageStyle::English,
            aliases: vec!["xx".to_string()],
            ones: (0..20).map(|i| format!("o{i}")).collect(),
            ones_feminine: None,
            tens: (0..10).map(|i| format!("t{i}")).collect(),
            tens_feminine: None,
            hundred: Some("hundred".to_string()),
            hundreds: None,
            scales: Vec::new(),
            zero: "zero".to_string(),
            zeroth: None,
            ordinal_ones: None,
            ordinal_tens: None,
            negative_prefix: "minus".to_string(),
            decimal_separator: "point".to_string(),
            ordinal_prefix: None,
            conjunction: None,
            number_separator: "-".to_string(),
            scale_separator: " ".to_string(),
            currencies: Default::default(),
            default_currency: None,
            positive_infinity: None,
            negative_infinity: None,
            nan: None,
        }
    }

    #[test]
    fn into_table_inserts_the_implicit_units_tier() {
        let mut file = minimal_file();
        file.scales = vec![super::ScaleFileEntry {
            singular: "grand".to_string(),
            dual: None,
            plural: None,
            ordinal: None,
        }];
        let (_, _, table) = file.into_table().expect("table");
        assert_eq!(table.scales.len(), 2);
        assert_eq!(table.scales[1].singular, "grand");
        table.validate().expect("valid table");
    }

    #[test]
    fn into_table_requires_exactly_one_hundreds_style() {
        let mut file = minimal_file();
        file.hundred = None;
        let err = file.into_table().expect_err("missing hundreds");
        assert!(matches!(err, ConvertError::InvalidTable(_)));

        let mut file = minimal_file();
        file.hundreds = Some((0..10).map(|i| format!("h{i}")).collect());
        let err = file.into_table().expect_err("both hundreds styles");
        assert!(matches!(err, ConvertError::InvalidTable(_)));
    }

    #[test]
    fn into_table_maps_the_hundreds_rule() {
        let (_, _, table) = minimal_file().into_table().expect("table");
        assert_eq!(table.hundreds, HundredsRule::UnitWord("hundred".to_string()));
    }
}
