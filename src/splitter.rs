//! Splitter
//!
//! The split question asked at every decision node, the partition of a set of rows
//! by such a question, and the greedy search for the most informative question.
use crate::data::{default_feature_name, Row, Scalar};
use crate::errors::CartError;
use crate::utils::{gini, information_gain};
use hashbrown::HashSet;
use std::fmt::{self, Display};

/// A yes/no question about one feature column.
///
/// A numeric reference value matches rows whose value is greater than or equal
/// to it; a text reference value matches rows holding exactly that text.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub column: usize,
    pub value: Scalar,
}

impl Question {
    pub fn new(column: usize, value: Scalar) -> Self {
        Question { column, value }
    }

    /// Ask the question of a row.
    ///
    /// Comparing a numeric reference against a text value, or the reverse,
    /// is an error rather than a "no".
    pub fn matches(&self, row: &Row) -> Result<bool, CartError> {
        let value = row.value(self.column).ok_or_else(|| {
            CartError::InvalidInput(format!(
                "Row has {} values, column {} was requested.",
                row.len(),
                self.column
            ))
        })?;
        match (&self.value, value) {
            (Scalar::Numeric(reference), Scalar::Numeric(v)) => Ok(v >= reference),
            (Scalar::Text(reference), Scalar::Text(v)) => Ok(v == reference),
            _ => Err(CartError::TypeMismatch {
                column: self.column,
                reference: self.value.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn operator(&self) -> &'static str {
        match self.value {
            Scalar::Numeric(_) => ">=",
            Scalar::Text(_) => "==",
        }
    }

    /// Render as `Is <feature> <op> <value>?`, looking the feature name up by column.
    pub fn describe(&self, feature_names: &[String]) -> String {
        let name = feature_names
            .get(self.column)
            .cloned()
            .unwrap_or_else(|| default_feature_name(self.column));
        format!("Is {} {} {}?", name, self.operator(), self.value)
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.describe(&[]))
    }
}

/// Outcome of the split search on a set of rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitInfo {
    pub gain: f64,
    /// `None` when no question reduces the impurity.
    pub question: Option<Question>,
}

/// Split rows into those matching the question and the rest, preserving order.
pub fn partition<'a>(rows: &[&'a Row], question: &Question) -> Result<(Vec<&'a Row>, Vec<&'a Row>), CartError> {
    let mut true_rows = Vec::new();
    let mut false_rows = Vec::new();
    for row in rows {
        if question.matches(row)? {
            true_rows.push(*row);
        } else {
            false_rows.push(*row);
        }
    }
    Ok((true_rows, false_rows))
}

/// Distinct values of a column, in order of first appearance.
fn distinct_values(rows: &[&Row], column: usize) -> Result<Vec<Scalar>, CartError> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for row in rows {
        let value = row.value(column).ok_or_else(|| {
            CartError::InvalidInput(format!("Row has {} values, column {} was requested.", row.len(), column))
        })?;
        if seen.insert(value) {
            values.push(value.clone());
        }
    }
    Ok(values)
}

/// Find the question with the highest information gain.
///
/// Every feature column is tried with each of its observed values as reference.
/// Candidates leaving a branch empty are skipped. A candidate whose gain equals
/// the best so far replaces it, so among ties the last one examined wins.
pub fn find_best_split(rows: &[&Row]) -> Result<SplitInfo, CartError> {
    let current_impurity = gini(rows)?;
    let n_features = rows[0].len() - 1;

    let mut best = SplitInfo::default();
    for column in 0..n_features {
        for value in distinct_values(rows, column)? {
            let question = Question::new(column, value);
            let (true_rows, false_rows) = partition(rows, &question)?;
            if true_rows.is_empty() || false_rows.is_empty() {
                continue;
            }
            let gain = information_gain(&true_rows, &false_rows, current_impurity)?;
            if gain >= best.gain {
                best = SplitInfo {
                    gain,
                    question: Some(question),
                };
            }
        }
    }

    if best.gain == 0.0 {
        best.question = None;
    }
    Ok(best)
}
