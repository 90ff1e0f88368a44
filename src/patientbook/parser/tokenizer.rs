//! Splits command arguments of the form `PREAMBLE p1/value p2/value ...`.
//!
//! A prefix only counts when it starts the argument string or follows
//! whitespace, so `a/` inside `lv/` or in the middle of a word is plain text.
//! Values run until the next recognised prefix and are trimmed.

use crate::error::{BookError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_LAST_VISIT: Prefix = Prefix::new("lv/");
pub const PREFIX_REMARK: Prefix = Prefix::new("r/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

pub const MESSAGE_DUPLICATE_FIELDS: &str =
    "Multiple values specified for the following single-valued field(s): ";

/// Tokenized arguments: the preamble plus every prefixed value in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: Vec<(Prefix, String)>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }

    /// Fails when any of `prefixes` was given more than once.
    pub fn verify_no_duplicates(&self, prefixes: &[Prefix]) -> Result<()> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|&&prefix| self.all_values(prefix).len() > 1)
            .map(|p| p.to_string())
            .collect();
        if duplicated.is_empty() {
            return Ok(());
        }
        Err(BookError::InvalidField(format!(
            "{}{}",
            MESSAGE_DUPLICATE_FIELDS,
            duplicated.join(" ")
        )))
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let mut from = 0;
        while let Some(found) = args[from..].find(prefix.as_str()) {
            let pos = from + found;
            let at_boundary = args[..pos]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if at_boundary {
                positions.push((pos, prefix));
            }
            from = pos + prefix.as_str().len();
        }
    }
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: Vec::with_capacity(positions.len()),
    };

    for (i, &(pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.as_str().len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values.push((prefix, args[start..end].trim().to_string()));
    }
    map
}
