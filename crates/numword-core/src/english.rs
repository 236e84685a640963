use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::decompose::{DecomposedChunk, chunks};
use crate::normalize::{NormalizedNumber, normalize, split_subunits};
use crate::table::{
    CurrencyEntry, GenderedForms, HundredsRule, LinguisticTable, ScaleTier, SpecialValues,
};
use crate::types::{Mode, Number, Request};
use crate::{ConvertError, ConvertResult, Gender};

pub(crate) fn render(
    table: &LinguisticTable,
    number: &Number,
    request: &Request,
) -> ConvertResult<String> {
    if request.mode == Mode::Currency {
        let code = request.currency.as_deref().unwrap_or(&table.default_currency);
        return currency(table, number, code);
    }
    let normalized = normalize(number);
    let mut result = if normalized.integer.is_zero() {
        match request.mode {
            Mode::Ordinal => table.zeroth.clone().unwrap_or_else(|| table.zero.clone()),
            _ => table.zero.clone(),
        }
    } else {
        match request.mode {
            Mode::Ordinal => ordinal(table, &normalized.integer),
            _ => cardinal(table, &normalized.integer),
        }
    };
    if normalized.is_negative {
        result = format!("{} {}", table.negative_prefix, result);
    }
    if let Some(words) = decimal_words(table, &normalized) {
        result = format!("{} {} {}", result, table.decimal_separator, words);
    }
    Ok(result)
}

fn decimal_words(table: &LinguisticTable, normalized: &NormalizedNumber) -> Option<String> {
    let digits = normalized.decimal_digits.as_deref()?;
    if let Some(value) = normalized.decimal_as_number {
        if value == 0 {
            return None;
        }
        return Some(cardinal(table, &BigUint::from(value)));
    }
    let words: Vec<String> = digits.chars().map(|digit| digit_word(table, digit)).collect();
    Some(words.join(" "))
}

fn digit_word(table: &LinguisticTable, digit: char) -> String {
    match digit.to_digit(10) {
        Some(0) | None => table.zero.clone(),
        Some(value) => table.ones.get(Gender::Masculine)[value as usize].clone(),
    }
}

pub(crate) fn cardinal(table: &LinguisticTable, n: &BigUint) -> String {
    if n.is_zero() {
        return table.zero.clone();
    }
    let parts: Vec<DecomposedChunk> = chunks(n).collect();
    let mut rendered: Vec<String> = Vec::new();
    for chunk in parts.iter().rev() {
        if chunk.value == 0 {
            continue;
        }
        let mut words = small_cardinal(table, chunk.value);
        if chunk.tier > 0 {
            match table.scale_tier(chunk.tier) {
                Some(tier) => {
                    words.push_str(&table.scale_separator);
                    words.push_str(tier.agreement_form(chunk.value));
                }
                None => words.push_str(&scale_fallback(chunk.tier)),
            }
        }
        rendered.push(words);
    }
    rendered.join(" ")
}

/// Cardinal words for 1..=999.
fn small_cardinal(table: &LinguisticTable, n: u16) -> String {
    let ones = table.ones.get(Gender::Masculine);
    if n < 20 {
        return ones[n as usize].clone();
    }
    if n < 100 {
        let tens = table.tens.get(Gender::Masculine);
        let tens_word = &tens[(n / 10) as usize];
        let ones_digit = (n % 10) as usize;
        if ones_digit == 0 {
            return tens_word.clone();
        }
        return format!("{}{}{}", tens_word, table.number_separator, ones[ones_digit]);
    }
    let mut words = hundreds_words(table, (n / 100) as usize);
    let remainder = n % 100;
    if remainder > 0 {
        words.push(' ');
        words.push_str(&small_cardinal(table, remainder));
    }
    words
}

fn hundreds_words(table: &LinguisticTable, digit: usize) -> String {
    match &table.hundreds {
        HundredsRule::UnitWord(word) => {
            format!("{} {}", table.ones.get(Gender::Masculine)[digit], word)
        }
        HundredsRule::PerDigit(words) => words[digit].clone(),
    }
}

pub(crate) fn ordinal(table: &LinguisticTable, n: &BigUint) -> String {
    if n.is_zero() {
        return table.zeroth.clone().unwrap_or_else(|| table.zero.clone());
    }
    let parts: Vec<DecomposedChunk> = chunks(n).collect();
    // Two passes: the decomposition is collected first so the chunk that
    // carries the ordinal form is known before any words are produced.
    // Ordinality attaches to the number as a whole, expressed on its
    // least-significant non-zero chunk ("one thousand two hundredth").
    let target = parts
        .iter()
        .find(|chunk| chunk.value != 0)
        .map(|chunk| chunk.tier);
    let mut rendered: Vec<String> = Vec::new();
    for chunk in parts.iter().rev() {
        if chunk.value == 0 {
            continue;
        }
        let is_target = Some(chunk.tier) == target;
        let mut words = if is_target && chunk.tier == 0 {
            small_ordinal(table, chunk.value)
        } else {
            small_cardinal(table, chunk.value)
        };
        if chunk.tier > 0 {
            match table.scale_tier(chunk.tier) {
                Some(tier) => {
                    let scale = if is_target {
                        ordinal_scale_word(tier, chunk.value)
                    } else {
                        tier.agreement_form(chunk.value)
                    };
                    words.push_str(&table.scale_separator);
                    words.push_str(scale);
                }
                None => words.push_str(&scale_fallback(chunk.tier)),
            }
        }
        rendered.push(words);
    }
    rendered.join(" ")
}

fn ordinal_scale_word(tier: &ScaleTier, value: u16) -> &str {
    tier.ordinal
        .as_deref()
        .unwrap_or_else(|| tier.agreement_form(value))
}

/// Ordinal words for 1..=999. Falls back to the cardinal form for tables
/// without ordinal word lists.
fn small_ordinal(table: &LinguisticTable, n: u16) -> String {
    let (Some(ordinal_ones), Some(ordinal_tens)) = (&table.ordinal_ones, &table.ordinal_tens)
    else {
        return small_cardinal(table, n);
    };
    if n < 20 {
        return ordinal_ones[n as usize].clone();
    }
    if n < 100 {
        let tens_digit = (n / 10) as usize;
        let ones_digit = (n % 10) as usize;
        if ones_digit == 0 {
            return ordinal_tens[tens_digit].clone();
        }
        let tens = table.tens.get(Gender::Masculine);
        return format!(
            "{}{}{}",
            tens[tens_digit], table.number_separator, ordinal_ones[ones_digit]
        );
    }
    let mut words = hundreds_words(table, (n / 100) as usize);
    let remainder = n % 100;
    if remainder > 0 {
        words.push(' ');
        words.push_str(&small_ordinal(table, remainder));
    } else {
        words.push_str("th");
    }
    words
}

fn scale_fallback(tier: u32) -> String {
    format!(" (10^{})", tier * 3)
}

pub(crate) fn currency(
    table: &LinguisticTable,
    number: &Number,
    code: &str,
) -> ConvertResult<String> {
    let entry = table
        .currencies
        .get(code)
        .ok_or_else(|| ConvertError::UnsupportedCurrency {
            requested: code.to_string(),
            supported: table.currencies.keys().cloned().collect(),
        })?;
    let normalized = normalize(number);
    let (main_units, subunits) = split_subunits(&normalized, entry.subunit_factor);
    let mut parts: Vec<String> = Vec::new();
    if !main_units.is_zero() {
        let words = cardinal(table, &main_units);
        let name = if main_units.is_one() {
            &entry.name
        } else {
            &entry.plural
        };
        parts.push(format!("{words} {name}"));
    } else if subunits == 0 {
        parts.push(format!("{} {}", table.zero, entry.name));
    }
    if subunits > 0 {
        let words = cardinal(table, &BigUint::from(subunits));
        let name = if subunits == 1 {
            &entry.subunit
        } else {
            &entry.subunit_plural
        };
        parts.push(format!("{words} {name}"));
    }
    let conjunction = table.conjunction.as_deref().unwrap_or("and");
    let mut result = parts.join(&format!(" {conjunction} "));
    if normalized.is_negative {
        result = format!("{} {}", table.negative_prefix, result);
    }
    Ok(result)
}

fn word_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| String::from(*word)).collect()
}

/// Builtin English table.
pub(crate) fn table() -> LinguisticTable {
    let mut currencies = BTreeMap::new();
    currencies.insert(
        String::from("USD"),
        simple_currency("dollar", "dollars", "cent", "cents"),
    );
    currencies.insert(
        String::from("EUR"),
        simple_currency("euro", "euros", "cent", "cents"),
    );
    currencies.insert(
        String::from("GBP"),
        simple_currency("pound", "pounds", "penny", "pence"),
    );
    currencies.insert(
        String::from("SAR"),
        simple_currency("riyal", "riyals", "halala", "halalas"),
    );
    LinguisticTable {
        ones: GenderedForms::uniform(word_list(&[
            "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
            "eighteen", "nineteen",
        ])),
        tens: GenderedForms::uniform(word_list(&[
            "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
        ])),
        hundreds: HundredsRule::UnitWord(String::from("hundred")),
        scales: scale_tiers(),
        zero: String::from("zero"),
        zeroth: Some(String::from("zeroth")),
        ordinal_ones: Some(word_list(&[
            "", "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth",
            "ninth", "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth",
            "sixteenth", "seventeenth", "eighteenth", "nineteenth",
        ])),
        ordinal_tens: Some(word_list(&[
            "", "", "twentieth", "thirtieth", "fortieth", "fiftieth", "sixtieth", "seventieth",
            "eightieth", "ninetieth",
        ])),
        negative_prefix: String::from("negative"),
        decimal_separator: String::from("point"),
        ordinal_prefix: None,
        conjunction: Some(String::from("and")),
        number_separator: String::from("-"),
        scale_separator: String::from(" "),
        currencies,
        default_currency: String::from("USD"),
        special: SpecialValues {
            positive_infinity: Some(String::from("infinity")),
            negative_infinity: Some(String::from("negative infinity")),
            nan: Some(String::from("not a number")),
        },
    }
}

fn scale_tiers() -> Vec<ScaleTier> {
    let names = [
        ("", ""),
        ("thousand", "thousandth"),
        ("million", "millionth"),
        ("billion", "billionth"),
        ("trillion", "trillionth"),
        ("quadrillion", "quadrillionth"),
        ("quintillion", "quintillionth"),
        ("sextillion", "sextillionth"),
        ("septillion", "septillionth"),
        ("octillion", "octillionth"),
        ("nonillion", "nonillionth"),
        ("decillion", "decillionth"),
    ];
    names
        .iter()
        .map(|(singular, ordinal)| ScaleTier {
            singular: String::from(*singular),
            dual: None,
            plural: None,
            ordinal: if ordinal.is_empty() {
                None
            } else {
                Some(String::from(*ordinal))
            },
        })
        .collect()
}

fn simple_currency(name: &str, plural: &str, subunit: &str, subunit_plural: &str) -> CurrencyEntry {
    CurrencyEntry {
        name: String::from(name),
        plural: String::from(plural),
        dual: None,
        subunit: String::from(subunit),
        subunit_plural: String::from(subunit_plural),
        subunit_dual: None,
        subunit_tanween: None,
        subunit_factor: 100,
        subunit_always_singular: false,
    }
}
