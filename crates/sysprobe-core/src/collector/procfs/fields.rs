//! Field extraction for key/value and columnar pseudo-file formats.
//!
//! Every extractor returns `Option`: `None` means the field was absent or
//! not a number. Accessors decide whether that becomes zero.

use std::collections::HashMap;

use tracing::trace;

/// Multiplier for the `kB` unit suffix used by meminfo-style files.
const KB: u64 = 1024;

/// Parses an unsigned decimal token.
pub fn parse_u64(token: &str) -> Option<u64> {
    token.parse().ok()
}

/// Parses a signed decimal token.
pub fn parse_i32(token: &str) -> Option<i32> {
    token.parse().ok()
}

/// Parses a floating-point token.
pub fn parse_f64(token: &str) -> Option<f64> {
    token.parse().ok()
}

/// Parses a resource limit token, where `unlimited` stands for `u64::MAX`.
pub fn parse_limit(token: &str) -> Option<u64> {
    if token == "unlimited" {
        Some(u64::MAX)
    } else {
        parse_u64(token)
    }
}

/// Whitespace-separated tokens of one line, addressed by position.
#[derive(Debug, Clone)]
pub struct Columns<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> Columns<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            tokens: line.split_whitespace().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&'a str> {
        self.tokens.get(idx).copied()
    }

    pub fn u64_at(&self, idx: usize) -> Option<u64> {
        self.get(idx).and_then(parse_u64)
    }

    pub fn i32_at(&self, idx: usize) -> Option<i32> {
        self.get(idx).and_then(parse_i32)
    }

    pub fn f64_at(&self, idx: usize) -> Option<f64> {
        self.get(idx).and_then(parse_f64)
    }
}

/// Splits a `Key:   value [unit]` line.
///
/// Returns `None` when the line has no colon. The value is `None` when it is
/// missing or not a number; a trailing `kB` unit multiplies it by 1024.
///
/// ```
/// use sysprobe_core::collector::procfs::fields::parse_kv_line;
///
/// assert_eq!(parse_kv_line("MemTotal: 2 kB"), Some(("MemTotal", Some(2048))));
/// assert_eq!(parse_kv_line("HugePages_Total:   4"), Some(("HugePages_Total", Some(4))));
/// assert_eq!(parse_kv_line("no separator"), None);
/// ```
pub fn parse_kv_line(line: &str) -> Option<(&str, Option<u64>)> {
    let (key, rest) = line.split_once(':')?;
    let key = key.trim();
    let mut tokens = rest.split_whitespace();

    let value = tokens.next().and_then(parse_u64).map(|v| match tokens.next() {
        Some("kB") => v.saturating_mul(KB),
        _ => v,
    });
    if value.is_none() {
        trace!(key, "unparsable value");
    }

    Some((key, value))
}

/// Key to value map built from a key/value pseudo-file, values in bytes
/// where the source carried a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KvTable {
    values: HashMap<String, u64>,
}

impl KvTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: u64) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    /// Value of `key`, or zero when the kernel did not report it.
    pub fn get_or_zero(&self, key: &str) -> u64 {
        self.get(key).unwrap_or(0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kv_line_units() {
        assert_eq!(
            parse_kv_line("MemTotal:       16384000 kB"),
            Some(("MemTotal", Some(16384000 * 1024)))
        );
        assert_eq!(
            parse_kv_line("HugePages_Free:       10"),
            Some(("HugePages_Free", Some(10)))
        );
    }

    #[test]
    fn test_parse_kv_line_trailing_whitespace() {
        assert_eq!(
            parse_kv_line("Cached:  12 kB   \t"),
            Some(("Cached", Some(12 * 1024)))
        );
    }

    #[test]
    fn test_parse_kv_line_missing_value() {
        assert_eq!(parse_kv_line("MemFree:"), Some(("MemFree", None)));
        assert_eq!(parse_kv_line("MemFree: lots kB"), Some(("MemFree", None)));
        assert_eq!(parse_kv_line("no colon here"), None);
    }

    #[test]
    fn test_columns() {
        let cols = Columns::new("  cpu0 10   20\t30 x ");
        assert_eq!(cols.len(), 5);
        assert_eq!(cols.get(0), Some("cpu0"));
        assert_eq!(cols.u64_at(2), Some(20));
        assert_eq!(cols.u64_at(4), None);
        assert_eq!(cols.u64_at(99), None);
        assert!(Columns::new("   ").is_empty());
    }

    #[test]
    fn test_columns_signed_and_float() {
        let cols = Columns::new("-1 0.75");
        assert_eq!(cols.i32_at(0), Some(-1));
        assert_eq!(cols.f64_at(1), Some(0.75));
        assert_eq!(cols.u64_at(0), None);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("unlimited"), Some(u64::MAX));
        assert_eq!(parse_limit("1024"), Some(1024));
        assert_eq!(parse_limit("files"), None);
    }

    #[test]
    fn test_kv_table() {
        let mut table = KvTable::new();
        assert!(table.is_empty());
        table.insert("MemTotal", 10);
        assert_eq!(table.get("MemTotal"), Some(10));
        assert_eq!(table.get_or_zero("MemFree"), 0);
        assert!(table.contains("MemTotal"));
        assert!(!table.contains("MemFree"));
    }
}
