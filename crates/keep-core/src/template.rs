//! Objective templates and the data pools behind their placeholders.
//!
//! A template label such as `"Defeat NIGHTLORD as the HERO"` carries
//! placeholder tokens. Each token maps to a [`DataSource`]: the pool of
//! candidate values and how many of them the host draws when it turns the
//! template into a concrete objective.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// The values a placeholder can be filled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Pool {
    /// A fixed list of strings.
    Values(Vec<String>),
    /// A half-open integer interval.
    Range(Range<i64>),
}

impl Pool {
    /// Build a value pool from string slices.
    pub fn values<S: AsRef<str>>(values: &[S]) -> Self {
        Pool::Values(values.iter().map(|s| s.as_ref().to_string()).collect())
    }

    /// Number of distinct values in the pool.
    pub fn len(&self) -> usize {
        match self {
            Pool::Values(values) => values.len(),
            Pool::Range(range) => usize::try_from(range.end - range.start).unwrap_or(0),
        }
    }

    /// Whether the pool has nothing to draw from.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every value in the pool as it would be substituted into a label.
    pub fn as_strings(&self) -> Vec<String> {
        match self {
            Pool::Values(values) => values.clone(),
            Pool::Range(range) => range.clone().map(|n| n.to_string()).collect(),
        }
    }

    /// Whether `value` is one of the pool's values.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Pool::Values(values) => values.iter().any(|v| v == value),
            Pool::Range(range) => value.parse::<i64>().is_ok_and(|n| range.contains(&n)),
        }
    }
}

impl From<Range<i64>> for Pool {
    fn from(range: Range<i64>) -> Self {
        Pool::Range(range)
    }
}

impl From<Vec<String>> for Pool {
    fn from(values: Vec<String>) -> Self {
        Pool::Values(values)
    }
}

/// A pool bound to a placeholder, with the number of values to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSource {
    /// Candidate values.
    pub pool: Pool,
    /// How many values the host draws for one objective.
    pub count: usize,
}

impl DataSource {
    /// Whether the pool can satisfy `count` distinct draws.
    pub fn can_draw(&self) -> bool {
        self.pool.len() >= self.count
    }
}

/// One objective sentence the host may hand to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectiveTemplate {
    /// Label text with placeholder tokens.
    pub label: String,
    /// Data for each placeholder token in the label.
    pub data: BTreeMap<String, DataSource>,
    /// Whether completing the objective takes a long time.
    pub is_time_consuming: bool,
    /// Whether the objective is hard.
    pub is_difficult: bool,
    /// Relative selection weight.
    pub weight: u32,
}

impl ObjectiveTemplate {
    /// Start a template with the given label, weight 1 and no placeholders.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: BTreeMap::new(),
            is_time_consuming: false,
            is_difficult: false,
            weight: 1,
        }
    }

    /// Bind a placeholder token to a pool.
    pub fn with_data(
        mut self,
        token: impl Into<String>,
        pool: impl Into<Pool>,
        count: usize,
    ) -> Self {
        self.data.insert(
            token.into(),
            DataSource {
                pool: pool.into(),
                count,
            },
        );
        self
    }

    /// Mark the objective as time-consuming.
    pub fn time_consuming(mut self) -> Self {
        self.is_time_consuming = true;
        self
    }

    /// Mark the objective as difficult.
    pub fn difficult(mut self) -> Self {
        self.is_difficult = true;
        self
    }

    /// Set the selection weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Placeholder tokens, in the order they first appear in the label.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.data.keys().map(String::as_str).collect();
        tokens.sort_by_key(|t| self.label.find(t).unwrap_or(usize::MAX));
        tokens
    }

    /// Check the template's structural invariants.
    ///
    /// Every data key must appear in the label, every placeholder must draw
    /// at least one value, and the weight must be positive.
    pub fn validate(&self) -> CoreResult<()> {
        if self.weight == 0 {
            return Err(CoreError::ZeroWeight(self.label.clone()));
        }
        for (token, source) in &self.data {
            if !self.label.contains(token.as_str()) {
                return Err(CoreError::UnusedPlaceholder {
                    label: self.label.clone(),
                    placeholder: token.clone(),
                });
            }
            if source.count == 0 {
                return Err(CoreError::ZeroCount {
                    label: self.label.clone(),
                    placeholder: token.clone(),
                });
            }
        }
        Ok(())
    }

    /// Whether every placeholder's pool has enough values to draw from.
    ///
    /// An emptied player option leaves a template undrawable. That is not an
    /// error; the host skips such templates.
    pub fn can_draw(&self) -> bool {
        self.data.values().all(DataSource::can_draw)
    }
}
