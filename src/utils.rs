use crate::data::{Row, Scalar};
use crate::errors::CartError;
use crate::node::ClassCounts;
use hashbrown::HashMap;
use std::fmt::Display;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

/// Render a label keyed map as `{A: 2, B: 1}`, labels in ascending order.
///
/// * `map` - Mapping to render.
/// * `suffix` - Appended to every value, e.g. `"%"`.
pub fn fmt_label_map<V: Display>(map: &HashMap<Scalar, V>, suffix: &str) -> String {
    let mut entries: Vec<(&Scalar, &V)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let body = entries
        .iter()
        .map(|(k, v)| format!("{}: {}{}", k, v, suffix))
        .collect::<Vec<String>>()
        .join(", ");
    format!("{{{}}}", body)
}

/// Tally the occurrences of each distinct label (the last value of each row).
pub fn class_counts(rows: &[&Row]) -> ClassCounts {
    let mut counts = ClassCounts::new();
    for row in rows {
        *counts.entry(row.label().clone()).or_insert(0) += 1;
    }
    counts
}

/// Gini impurity of a set of rows, `1 - sum(p_k^2)` over the distinct labels.
pub fn gini(rows: &[&Row]) -> Result<f64, CartError> {
    if rows.is_empty() {
        return Err(CartError::InvalidInput(
            "Gini impurity of an empty set of rows is undefined.".to_string(),
        ));
    }
    // Summing integer squares keeps the result independent of map iteration order.
    let total = rows.len() as f64;
    let sum_sq: usize = class_counts(rows).values().map(|&count| count * count).sum();
    Ok(1.0 - sum_sq as f64 / (total * total))
}

/// Reduction in impurity obtained by splitting a node into `left` and `right`,
/// each side weighted by its share of the rows.
///
/// * `left` - Rows sent down one branch.
/// * `right` - Rows sent down the other branch.
/// * `current_impurity` - Impurity of the rows before the split.
pub fn information_gain(left: &[&Row], right: &[&Row], current_impurity: f64) -> Result<f64, CartError> {
    if left.is_empty() || right.is_empty() {
        return Err(CartError::InvalidInput(
            "Information gain requires two non-empty branches.".to_string(),
        ));
    }
    let p = left.len() as f64 / (left.len() + right.len()) as f64;
    Ok(current_impurity - p * gini(left)? - (1.0 - p) * gini(right)?)
}

/// Label with the highest count, the smallest label winning ties.
pub fn majority_label(counts: &ClassCounts) -> Option<&Scalar> {
    counts
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(label, _)| label)
}
