use std::path::PathBuf;

use thiserror::Error;

use numword_config::ConfigError;
use numword_core::{ConvertError, Gender, Mode, Number, Registry, Request};

#[derive(Debug, Error)]
pub enum CliAppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn run() -> Result<(), CliAppError> {
    let options = parse_options(std::env::args().skip(1).collect())?;
    let mut registry = Registry::builtin();
    if let Some(dir) = &options.tables {
        numword_config::load_dir(dir, &mut registry)?;
    }
    let number = Number::parse(&options.number)?;
    let output = registry.convert(&number, &options.request)?;
    println!("{output}");
    Ok(())
}

#[derive(Debug)]
struct Options {
    number: String,
    request: Request,
    tables: Option<PathBuf>,
}

fn parse_options(args: Vec<String>) -> Result<Options, CliAppError> {
    let mut number = None;
    let mut request = Request::default();
    let mut tables = None;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => request.language = next_value("--lang", &mut iter)?,
            "--to" => request.mode = Mode::parse(&next_value("--to", &mut iter)?)?,
            "--gender" => request.gender = Gender::parse(&next_value("--gender", &mut iter)?)?,
            "--currency" => request.currency = Some(next_value("--currency", &mut iter)?),
            "--tables" => tables = Some(PathBuf::from(next_value("--tables", &mut iter)?)),
            "--help" | "-h" => return Err(CliAppError::Usage(usage())),
            _ if number.is_none() && !arg.starts_with("--") => number = Some(arg),
            _ => return Err(CliAppError::Usage(usage())),
        }
    }

    let number = number.ok_or_else(|| CliAppError::Usage(usage()))?;
    Ok(Options {
        number,
        request,
        tables,
    })
}

fn next_value(
    flag: &str,
    iter: &mut impl Iterator<Item = String>,
) -> Result<String, CliAppError> {
    iter.next()
        .ok_or_else(|| CliAppError::Usage(format!("missing value for {flag}\n\n{}", usage())))
}

fn usage() -> String {
    [
        "numword - write numbers out in words",
        "",
        "usage: numword <number> [options]",
        "",
        "options:",
        "  --lang <code>       language code or name (default: en)",
        "  --to <mode>         cardinal | ordinal | currency (default: cardinal)",
        "  --gender <g>        m | f, for languages with grammatical gender",
        "  --currency <code>   currency code for currency mode (default per language)",
        "  --tables <dir>      load extra language tables from a directory",
        "  --help              print this message",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use numword_core::{Gender, Mode};

    use super::{CliAppError, parse_options};

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn parses_number_and_defaults() {
        let options = parse_options(args(&["42"])).expect("options");
        assert_eq!(options.number, "42");
        assert_eq!(options.request.language, "en");
        assert_eq!(options.request.mode, Mode::Cardinal);
        assert!(options.tables.is_none());
    }

    #[test]
    fn parses_all_flags() {
        let options = parse_options(args(&[
            "12.5", "--lang", "ar", "--to", "currency", "--gender", "f", "--currency", "SAR",
            "--tables", "tables",
        ]))
        .expect("options");
        assert_eq!(options.number, "12.5");
        assert_eq!(options.request.language, "ar");
        assert_eq!(options.request.mode, Mode::Currency);
        assert_eq!(options.request.gender, Gender::Feminine);
        assert_eq!(options.request.currency.as_deref(), Some("SAR"));
        assert_eq!(options.tables.as_deref().and_then(|p| p.to_str()), Some("tables"));
    }

    #[test]
    fn negative_numbers_are_not_mistaken_for_flags() {
        let options = parse_options(args(&["-42"])).expect("options");
        assert_eq!(options.number, "-42");
    }

    #[test]
    fn missing_number_is_a_usage_error() {
        let err = parse_options(args(&["--lang", "en"])).expect_err("no number");
        assert!(matches!(err, CliAppError::Usage(_)));
    }

    #[test]
    fn bad_mode_is_reported_by_the_core() {
        let err = parse_options(args(&["5", "--to", "bogus"])).expect_err("bad mode");
        assert!(matches!(err, CliAppError::Convert(_)));
    }
}
