use crate::data::Scalar;
use crate::errors::CartError;
use crate::node::ClassCounts;
use hashbrown::HashMap;

/// Whole percentage per label.
pub type LabelPercentages = HashMap<Scalar, u32>;

/// Convert leaf counts to percentages, truncating toward zero.
///
/// The percentages of a leaf need not add up to 100, e.g. `{A: 1, B: 2}`
/// becomes `{A: 33, B: 66}`.
pub fn leaf_to_probabilities(counts: &ClassCounts) -> Result<LabelPercentages, CartError> {
    let total = counts.values().sum::<usize>() as f64;
    if total == 0.0 {
        return Err(CartError::InvalidInput(
            "Cannot convert label counts summing to zero into percentages.".to_string(),
        ));
    }
    Ok(counts
        .iter()
        .map(|(label, &count)| (label.clone(), (count as f64 / total * 100.0) as u32))
        .collect())
}

/// Share of predictions equal to the actual label.
pub fn accuracy(actual: &[Scalar], predicted: &[Scalar]) -> Result<f64, CartError> {
    if actual.len() != predicted.len() {
        return Err(CartError::InvalidInput(format!(
            "{} actual labels and {} predictions provided.",
            actual.len(),
            predicted.len()
        )));
    }
    if actual.is_empty() {
        return Err(CartError::InvalidInput("Accuracy of zero predictions is undefined.".to_string()));
    }
    let correct = actual.iter().zip(predicted).filter(|(a, p)| a == p).count();
    Ok(correct as f64 / actual.len() as f64)
}
