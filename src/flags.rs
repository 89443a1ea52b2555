//! Command-line flag parsing.
//!
//! Turns the raw process argument vector into a [`ParsedFlags`] value.
//! Declared flags get their type and defaults applied, aliased names read
//! and write the same entry, unknown flags pass through as ordinary
//! entries, and positionals keep their arrival order. The parser never
//! rejects input.

use std::collections::BTreeMap;

/// Alias pairs. Either spelling resolves to the same underlying value.
const ALIASES: &[(&str, &str)] = &[("commit", "c"), ("tag", "t"), ("push", "p")];

/// Flags whose values stay text even when numeric-looking.
const STRING_FLAGS: &[&str] = &["commit", "mode", "tag", "config", "push"];

/// Flags that accumulate one value per occurrence.
const ARRAY_FLAGS: &[&str] = &["ignore"];

/// Declared boolean flags, negatable via a `no-` prefix.
const BOOL_FLAGS: &[&str] = &["print-commits"];

/// A single flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl FlagValue {
    /// Truthiness mirrors the loose convention the resolver relies on:
    /// a set boolean, a non-empty string, or any list counts as truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FlagValue::Bool(b) => *b,
            FlagValue::Str(s) => !s.is_empty(),
            FlagValue::List(_) => true,
        }
    }
}

/// Parsed view of one process invocation. Built once, read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct ParsedFlags {
    values: BTreeMap<String, FlagValue>,
    positionals: Vec<String>,
}

impl ParsedFlags {
    /// Look up a flag under any of its declared spellings.
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.values.get(canonical(name))
    }

    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(FlagValue::is_truthy)
    }

    /// String value of a flag, when it has one.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(FlagValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Accumulated values of an array flag; empty when never set.
    pub fn list(&self, name: &str) -> &[String] {
        match self.get(name) {
            Some(FlagValue::List(v)) => v,
            _ => &[],
        }
    }

    /// Positional argument by arrival index. Slot 0 is the executable path.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }
}

fn canonical(name: &str) -> &str {
    for (long, short) in ALIASES {
        if name == *short {
            return long;
        }
    }
    name
}

fn is_string_flag(name: &str) -> bool {
    STRING_FLAGS.contains(&name)
}

fn is_array_flag(name: &str) -> bool {
    ARRAY_FLAGS.contains(&name)
}

fn is_bool_flag(name: &str) -> bool {
    BOOL_FLAGS.contains(&name)
}

/// Parse the full process argument vector, executable path included.
pub fn parse_flags(args: &[String]) -> ParsedFlags {
    let mut values: BTreeMap<String, FlagValue> = BTreeMap::new();
    let mut positionals: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let token = &args[i];

        if token == "--" {
            // everything after a bare double dash is positional
            positionals.extend(args[i + 1..].iter().cloned());
            break;
        }

        let name_raw = if let Some(rest) = token.strip_prefix("--") {
            rest
        } else if token.len() > 1
            && token.starts_with('-')
            && !token[1..].starts_with(|c: char| c.is_ascii_digit())
        {
            &token[1..]
        } else {
            positionals.push(token.clone());
            i += 1;
            continue;
        };

        let (name_raw, inline) = match name_raw.split_once('=') {
            Some((n, v)) => (n, Some(v)),
            None => (name_raw, None),
        };

        // `--no-print-commits` style negation for declared booleans
        if inline.is_none() {
            if let Some(stripped) = name_raw.strip_prefix("no-") {
                let name = canonical(stripped);
                if is_bool_flag(name) {
                    values.insert(name.to_owned(), FlagValue::Bool(false));
                    i += 1;
                    continue;
                }
            }
        }

        let name = canonical(name_raw);

        if is_bool_flag(name) {
            let on = match inline {
                Some(v) => v != "false",
                None => true,
            };
            values.insert(name.to_owned(), FlagValue::Bool(on));
        } else if is_array_flag(name) {
            let item = match inline {
                Some(v) => Some(v.to_owned()),
                None => match args.get(i + 1) {
                    Some(next) if !next.starts_with('-') => {
                        i += 1;
                        Some(next.clone())
                    }
                    _ => None,
                },
            };
            if let Some(item) = item {
                let entry = values
                    .entry(name.to_owned())
                    .or_insert_with(|| FlagValue::List(Vec::new()));
                if let FlagValue::List(list) = entry {
                    list.push(item);
                }
            }
        } else {
            // declared string flags and unknown flags alike take the next
            // token as their value when one is available
            let value = match inline {
                Some(v) => Some(v.to_owned()),
                None => match args.get(i + 1) {
                    Some(next) if !next.starts_with('-') => {
                        i += 1;
                        Some(next.clone())
                    }
                    _ => None,
                },
            };
            let value = match value {
                Some(v) => FlagValue::Str(v),
                None if is_string_flag(name) => FlagValue::Str(String::new()),
                None => FlagValue::Bool(true),
            };
            values.insert(name.to_owned(), value);
        }

        i += 1;
    }

    // defaults for declared flags that never showed up
    values
        .entry("mode".to_owned())
        .or_insert_with(|| FlagValue::Str("monolith".to_owned()));
    values
        .entry("ignore".to_owned())
        .or_insert_with(|| FlagValue::List(Vec::new()));
    values
        .entry("print-commits".to_owned())
        .or_insert(FlagValue::Bool(true));

    tracing::debug!(
        flags = values.len(),
        positionals = positionals.len(),
        "parsed argument vector"
    );

    ParsedFlags {
        values,
        positionals,
    }
}
