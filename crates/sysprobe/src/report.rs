//! Collected metric outcomes and their text/JSON rendering.

use std::fmt::Write as _;

use anyhow::Context;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Result of reading one metric.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Value),
    /// The platform cannot produce the metric.
    Unavailable(String),
    Failed(String),
}

/// Ordered outcomes of one probe run.
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<(&'static str, Outcome)>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<T: Serialize>(
        &mut self,
        name: &'static str,
        result: sysprobe_core::Result<T>,
    ) -> anyhow::Result<()> {
        let outcome = match result {
            Ok(value) => Outcome::Value(
                serde_json::to_value(value).with_context(|| format!("serializing {name}"))?,
            ),
            Err(e) if e.is_not_implemented() => {
                debug!(metric = name, "{e}");
                Outcome::Unavailable(e.to_string())
            }
            Err(e) => {
                warn!(metric = name, error = %e, "read failed");
                Outcome::Failed(e.to_string())
            }
        };
        self.entries.push((name, outcome));
        Ok(())
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[(&'static str, Outcome)] {
        &self.entries
    }

    pub fn failures(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Failed(_)))
            .count()
    }

    /// One key per metric in collection order; unavailable or failed metrics
    /// carry `{"error": ...}`.
    pub fn to_json(&self) -> Value {
        let mut root = Map::new();
        for (name, outcome) in &self.entries {
            let value = match outcome {
                Outcome::Value(v) => v.clone(),
                Outcome::Unavailable(msg) | Outcome::Failed(msg) => {
                    let mut err = Map::new();
                    err.insert("error".to_string(), Value::String(msg.clone()));
                    Value::Object(err)
                }
            };
            root.insert((*name).to_string(), value);
        }
        Value::Object(root)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (name, outcome) in &self.entries {
            match outcome {
                Outcome::Value(value) => {
                    let _ = writeln!(out, "{name}:");
                    render_value(&mut out, 2, value);
                }
                Outcome::Unavailable(msg) | Outcome::Failed(msg) => {
                    let _ = writeln!(out, "{name}: {msg}");
                }
            }
        }
        out
    }
}

fn render_value(out: &mut String, indent: usize, value: &Value) {
    let pad = " ".repeat(indent);
    let Value::Object(map) = value else {
        let _ = writeln!(out, "{pad}{}", scalar(value));
        return;
    };

    let width = map.keys().map(String::len).max().unwrap_or(0);
    for (key, field) in map {
        match field {
            Value::Array(items) => {
                let _ = writeln!(out, "{pad}{key}:");
                for (i, item) in items.iter().enumerate() {
                    let _ = writeln!(out, "{pad}  [{i}] {}", inline(item));
                }
            }
            Value::Object(_) => {
                let _ = writeln!(out, "{pad}{key}:");
                render_value(out, indent + 2, field);
            }
            _ => {
                let _ = writeln!(out, "{pad}{key:<width$}  {}", scalar(field));
            }
        }
    }
}

fn inline(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}={}", scalar(v)))
            .collect::<Vec<_>>()
            .join(" "),
        other => scalar(other),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) if s.is_empty() => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
