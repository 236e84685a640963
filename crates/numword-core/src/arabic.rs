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
use crate::types::{Gender, Mode, Number, Request};
use crate::{ConvertError, ConvertResult};

pub(crate) fn render(
    table: &LinguisticTable,
    number: &Number,
    request: &Request,
) -> ConvertResult<String> {
    if request.mode == Mode::Currency {
        let code = request.currency.as_deref().unwrap_or(&table.default_currency);
        return currency(table, number, code, request.gender);
    }
    let normalized = normalize(number);
    let mut result = if normalized.integer.is_zero() {
        // Zero takes no ordinal prefix.
        table.zero.clone()
    } else {
        match request.mode {
            Mode::Ordinal => ordinal(table, &normalized.integer, request.gender),
            _ => cardinal(table, &normalized.integer, request.gender),
        }
    };
    if normalized.is_negative {
        result = format!("{} {}", table.negative_prefix, result);
    }
    if let Some(words) = decimal_words(table, &normalized, request.gender) {
        result = format!("{} {} {}", result, table.decimal_separator, words);
    }
    Ok(result)
}

fn decimal_words(
    table: &LinguisticTable,
    normalized: &NormalizedNumber,
    gender: Gender,
) -> Option<String> {
    let digits = normalized.decimal_digits.as_deref()?;
    if let Some(value) = normalized.decimal_as_number {
        if value == 0 {
            return None;
        }
        return Some(cardinal(table, &BigUint::from(value), gender));
    }
    let words: Vec<String> = digits
        .chars()
        .map(|digit| digit_word(table, digit, gender))
        .collect();
    Some(words.join(" "))
}

fn digit_word(table: &LinguisticTable, digit: char, gender: Gender) -> String {
    match digit.to_digit(10) {
        Some(0) | None => table.zero.clone(),
        Some(value) => table.ones.get(gender)[value as usize].clone(),
    }
}

fn conjunction(table: &LinguisticTable) -> &str {
    table.conjunction.as_deref().unwrap_or("و")
}

pub(crate) fn cardinal(table: &LinguisticTable, n: &BigUint, gender: Gender) -> String {
    if n.is_zero() {
        return table.zero.clone();
    }
    let parts: Vec<DecomposedChunk> = chunks(n).collect();
    let mut rendered: Vec<String> = Vec::new();
    for chunk in parts.iter().rev() {
        if chunk.value == 0 {
            continue;
        }
        rendered.push(chunk_words(table, *chunk, gender));
    }
    rendered.join(&format!(" {}", conjunction(table)))
}

fn chunk_words(table: &LinguisticTable, chunk: DecomposedChunk, gender: Gender) -> String {
    if chunk.tier == 0 {
        return small_cardinal(table, chunk.value, gender);
    }
    match table.scale_tier(chunk.tier) {
        // A chunk of one or two IS the scale word; no numeral is prefixed
        // ("thousand" alone for 1000, the dual form alone for 2000).
        Some(tier) => match chunk.value {
            1 => tier.singular.clone(),
            2 => tier.dual.clone().unwrap_or_else(|| tier.singular.clone()),
            _ => format!(
                "{}{}{}",
                small_cardinal(table, chunk.value, gender),
                table.scale_separator,
                tier.agreement_form(chunk.value)
            ),
        },
        None => {
            let fallback = format!("(10^{})", chunk.tier * 3);
            match chunk.value {
                1 | 2 => fallback,
                _ => format!(
                    "{}{}{}",
                    small_cardinal(table, chunk.value, gender),
                    table.scale_separator,
                    fallback
                ),
            }
        }
    }
}

/// Cardinal words for 1..=999. Ones precede tens, joined by the
/// conjunction: "three and twenty", never "twenty-three".
fn small_cardinal(table: &LinguisticTable, n: u16, gender: Gender) -> String {
    let ones = table.ones.get(gender);
    if n < 20 {
        return ones[n as usize].clone();
    }
    if n < 100 {
        let tens = table.tens.get(gender);
        let tens_word = &tens[(n / 10) as usize];
        let ones_digit = (n % 10) as usize;
        if ones_digit == 0 {
            return tens_word.clone();
        }
        return format!("{} {}{}", ones[ones_digit], conjunction(table), tens_word);
    }
    let hundreds_word = match &table.hundreds {
        HundredsRule::PerDigit(words) => words[(n / 100) as usize].clone(),
        HundredsRule::UnitWord(word) => format!("{} {}", ones[(n / 100) as usize], word),
    };
    let remainder = n % 100;
    if remainder == 0 {
        return hundreds_word;
    }
    format!(
        "{} {}{}",
        hundreds_word,
        conjunction(table),
        small_cardinal(table, remainder, gender)
    )
}

/// Simplified ordinal: the ordinal prefix attached to the cardinal form.
/// True Arabic ordinal morphology changes the word stem; callers should
/// treat large ordinals as approximate.
pub(crate) fn ordinal(table: &LinguisticTable, n: &BigUint, gender: Gender) -> String {
    let prefix = table.ordinal_prefix.as_deref().unwrap_or("");
    format!("{}{}", prefix, cardinal(table, n, gender))
}

pub(crate) fn currency(
    table: &LinguisticTable,
    number: &Number,
    code: &str,
    gender: Gender,
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
        parts.push(main_phrase(table, entry, &main_units, gender));
    } else if subunits == 0 {
        parts.push(format!("{} {}", table.zero, entry.name));
    }
    if subunits > 0 {
        parts.push(subunit_phrase(table, entry, subunits, gender));
    }
    let mut result = parts.join(&format!(" {}", conjunction(table)));
    if normalized.is_negative {
        result = format!("{} {}", table.negative_prefix, result);
    }
    Ok(result)
}

fn main_phrase(
    table: &LinguisticTable,
    entry: &CurrencyEntry,
    units: &BigUint,
    gender: Gender,
) -> String {
    if units.is_one() {
        // The currency name precedes the numeral for one unit.
        return format!("{} {}", entry.name, table.ones.get(gender)[1]);
    }
    if *units == BigUint::from(2u32) {
        if let Some(dual) = &entry.dual {
            return dual.clone();
        }
    }
    // Round hundreds and thousands take the singular: "مئة ريال".
    let name = if (units % 100u32).is_zero() {
        &entry.name
    } else {
        &entry.plural
    };
    format!("{} {}", cardinal(table, units, gender), name)
}

fn subunit_phrase(
    table: &LinguisticTable,
    entry: &CurrencyEntry,
    subunits: u32,
    gender: Gender,
) -> String {
    if subunits == 1 {
        return format!("{} {}", entry.subunit, table.ones.get(gender)[1]);
    }
    let words = cardinal(table, &BigUint::from(subunits), gender);
    if entry.subunit_always_singular {
        return format!("{} {}", words, entry.subunit);
    }
    if subunits == 2 {
        if let Some(dual) = &entry.subunit_dual {
            return dual.clone();
        }
    }
    let name = if subunits % 100 == 0 {
        &entry.subunit
    } else if (3..=10).contains(&subunits) {
        &entry.subunit_plural
    } else {
        entry
            .subunit_tanween
            .as_deref()
            .unwrap_or(&entry.subunit_plural)
    };
    format!("{words} {name}")
}

fn word_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| String::from(*word)).collect()
}

/// Builtin Arabic table.
pub(crate) fn table() -> LinguisticTable {
    let mut currencies = BTreeMap::new();
    currencies.insert(
        String::from("SAR"),
        arabic_currency(
            "ريال", "ريالان", "ريالات", "هللة", "هللتان", "هللات", "هللةً", 100,
        ),
    );
    currencies.insert(
        String::from("USD"),
        arabic_currency(
            "دولار", "دولاران", "دولارات", "سنت", "سنتان", "سنتات", "سنتًا", 100,
        ),
    );
    currencies.insert(
        String::from("KWD"),
        arabic_currency(
            "دينار", "ديناران", "دنانير", "فلس", "فلسان", "فلوس", "فلسًا", 1000,
        ),
    );
    currencies.insert(
        String::from("EGP"),
        arabic_currency(
            "جنيه", "جنيهان", "جنيهات", "قرش", "قرشان", "قروش", "قرشًا", 100,
        ),
    );
    LinguisticTable {
        ones: GenderedForms {
            masculine: word_list(&[
                "",
                "واحد",
                "اثنان",
                "ثلاثة",
                "أربعة",
                "خمسة",
                "ستة",
                "سبعة",
                "ثمانية",
                "تسعة",
                "عشرة",
                "أحد عشر",
                "اثنا عشر",
                "ثلاثة عشر",
                "أربعة عشر",
                "خمسة عشر",
                "ستة عشر",
                "سبعة عشر",
                "ثمانية عشر",
                "تسعة عشر",
            ]),
            feminine: Some(word_list(&[
                "",
                "واحدة",
                "اثنتان",
                "ثلاث",
                "أربع",
                "خمس",
                "ست",
                "سبع",
                "ثمان",
                "تسع",
                "عشر",
                "إحدى عشرة",
                "اثنتا عشرة",
                "ثلاث عشرة",
                "أربع عشرة",
                "خمس عشرة",
                "ست عشرة",
                "سبع عشرة",
                "ثماني عشرة",
                "تسع عشرة",
            ])),
        },
        tens: GenderedForms::uniform(word_list(&[
            "",
            "",
            "عشرون",
            "ثلاثون",
            "أربعون",
            "خمسون",
            "ستون",
            "سبعون",
            "ثمانون",
            "تسعون",
        ])),
        hundreds: HundredsRule::PerDigit(word_list(&[
            "",
            "مئة",
            "مئتان",
            "ثلاث مئة",
            "أربع مئة",
            "خمس مئة",
            "ست مئة",
            "سبع مئة",
            "ثمان مئة",
            "تسع مئة",
        ])),
        scales: scale_tiers(),
        zero: String::from("صفر"),
        zeroth: None,
        ordinal_ones: None,
        ordinal_tens: None,
        negative_prefix: String::from("سالب"),
        decimal_separator: String::from("فاصلة"),
        ordinal_prefix: Some(String::from("ال")),
        conjunction: Some(String::from("و")),
        number_separator: String::from(" "),
        scale_separator: String::from(" "),
        currencies,
        default_currency: String::from("SAR"),
        special: SpecialValues {
            positive_infinity: Some(String::from("ما لا نهاية")),
            negative_infinity: Some(String::from("سالب ما لا نهاية")),
            nan: Some(String::from("ليس رقمًا")),
        },
    }
}

fn scale_tiers() -> Vec<ScaleTier> {
    let names = [
        ("", "", ""),
        ("ألف", "ألفان", "آلاف"),
        ("مليون", "مليونان", "ملايين"),
        ("مليار", "ملياران", "مليارات"),
        ("تريليون", "تريليونان", "تريليونات"),
        ("كوادريليون", "كوادريليونان", "كوادريليونات"),
    ];
    names
        .iter()
        .map(|(singular, dual, plural)| ScaleTier {
            singular: String::from(*singular),
            dual: if dual.is_empty() {
                None
            } else {
                Some(String::from(*dual))
            },
            plural: if plural.is_empty() {
                None
            } else {
                Some(String::from(*plural))
            },
            ordinal: None,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn arabic_currency(
    name: &str,
    dual: &str,
    plural: &str,
    subunit: &str,
    subunit_dual: &str,
    subunit_plural: &str,
    subunit_tanween: &str,
    subunit_factor: u32,
) -> CurrencyEntry {
    CurrencyEntry {
        name: String::from(name),
        plural: String::from(plural),
        dual: Some(String::from(dual)),
        subunit: String::from(subunit),
        subunit_plural: String::from(subunit_plural),
        subunit_dual: Some(String::from(subunit_dual)),
        subunit_tanween: Some(String::from(subunit_tanween)),
        subunit_factor,
        subunit_always_singular: false,
    }
}
