use std::fs;
use std::path::Path;

use numword_core::{Language, LinguisticTable, Registry};

use crate::error::ConfigError;
use crate::model::TableFile;

/// A table file resolved into core types, ready for registration.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub language: Language,
    pub aliases: Vec<String>,
    pub table: LinguisticTable,
}

/// Loads one table file, picking the parser from the extension.
pub fn load_table(path: &Path) -> Result<LoadedTable, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let file: TableFile = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)?,
        Some("toml") => toml::from_str(&contents)?,
        _ => return Err(ConfigError::UnknownFormat(path.display().to_string())),
    };
    let (language, aliases, table) = file.into_table()?;
    Ok(LoadedTable {
        language,
        aliases,
        table,
    })
}

/// Loads every `.json`/`.toml` table in a directory into the registry,
/// returning how many were registered. Other files are skipped. Loaded
/// tables override builtins sharing an alias.
pub fn load_dir(dir: &Path, registry: &mut Registry) -> Result<usize, ConfigError> {
    let mut loaded = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") | Some("toml") => {}
            _ => continue,
        }
        let table = load_table(&path)?;
        let aliases: Vec<&str> = table.aliases.iter().map(String::as_str).collect();
        registry.register(table.language, &aliases, table.table)?;
        loaded += 1;
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use numword_core::{Number, Registry, Request};

    use super::{load_dir, load_table};
    use crate::error::ConfigError;

    fn temp_dir() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("numword_tables_{nanos}"));
        fs::create_dir_all(&path).expect("dir");
        path
    }

    const PIRATE_TOML: &str = r#"
language = "english"
aliases = ["pt", "pirate"]
ones = ["", "oon", "twoo", "threy", "foor", "fiver", "sixer", "sevener", "eighter", "niner", "tenner", "eleveno", "twelvo", "thirteeno", "fourteeno", "fifteeno", "sixteeno", "seventeeno", "eighteeno", "nineteeno"]
tens = ["", "", "twenny", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"]
hundred = "hunnerd"
zero = "naught"
negative_prefix = "minus"
decimal_separator = "dot"

[[scales]]
singular = "grand"
"#;

    #[test]
    fn loads_a_toml_table_and_converts_with_it() {
        let dir = temp_dir();
        fs::write(dir.join("pirate.toml"), PIRATE_TOML).expect("write");

        let mut registry = Registry::builtin();
        let loaded = load_dir(&dir, &mut registry).expect("load");
        assert_eq!(loaded, 1);
        assert_eq!(
            registry
                .convert(&Number::from(42), &Request::new("pirate"))
                .expect("convert"),
            "forty-twoo"
        );
        assert_eq!(
            registry
                .convert(&Number::from(2000), &Request::new("pt"))
                .expect("convert"),
            "twoo grand"
        );

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn loads_a_json_table() {
        let dir = temp_dir();
        let json = serde_json::json!({
            "language": "english",
            "aliases": ["nn"],
            "ones": ["", "one", "two", "three", "four", "five", "six", "seven", "eight",
                     "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
                     "sixteen", "seventeen", "eighteen", "nineteen"],
            "tens": ["", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
                     "eighty", "ninety"],
            "hundred": "hundred",
            "zero": "nil",
            "negative_prefix": "minus",
            "decimal_separator": "point"
        });
        fs::write(dir.join("nn.json"), json.to_string()).expect("write");

        let loaded = load_table(&dir.join("nn.json")).expect("load");
        assert_eq!(loaded.aliases, ["nn"]);
        assert_eq!(loaded.table.zero, "nil");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn rejects_unknown_extensions() {
        let dir = temp_dir();
        fs::write(dir.join("table.yaml"), "language: english").expect("write");

        let err = load_table(&dir.join("table.yaml")).expect_err("unknown format");
        assert!(matches!(err, ConfigError::UnknownFormat(_)));
        // load_dir skips non-table files instead of failing.
        let mut registry = Registry::builtin();
        assert_eq!(load_dir(&dir, &mut registry).expect("load"), 0);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn invalid_tables_fail_at_load_time() {
        let dir = temp_dir();
        let short = PIRATE_TOML.replace(", \"nineteeno\"", "");
        fs::write(dir.join("short.toml"), short).expect("write");

        let mut registry = Registry::builtin();
        let err = load_dir(&dir, &mut registry).expect_err("short ones list");
        assert!(matches!(err, ConfigError::Table(_)));

        fs::remove_dir_all(&dir).ok();
    }
}
