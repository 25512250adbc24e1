//! Tree Prediction Methods
//!
//! Routing rows from the root of a tree down to a leaf.
use super::tree::Tree;
use crate::data::{Dataset, Row, Scalar};
use crate::errors::CartError;
use crate::metric::{leaf_to_probabilities, LabelPercentages};
use crate::node::{ClassCounts, Node};
use crate::utils::majority_label;

/// Follow the answers to each question from `node` down to a leaf and
/// return that leaf's label counts.
pub fn classify<'a>(row: &Row, node: &'a Node) -> Result<&'a ClassCounts, CartError> {
    let mut node = node;
    loop {
        match node {
            Node::Leaf(leaf) => return Ok(&leaf.predictions),
            Node::Decision(d) => node = d.get_child(d.question.matches(row)?),
        }
    }
}

impl Tree {
    /// Label counts of the leaf a row ends up in.
    pub fn predict_counts(&self, row: &Row) -> Result<&ClassCounts, CartError> {
        classify(row, &self.root)
    }

    /// Label counts for every row of a dataset, in row order.
    pub fn predict_counts_dataset(&self, data: &Dataset) -> Result<Vec<&ClassCounts>, CartError> {
        data.rows().iter().map(|row| self.predict_counts(row)).collect()
    }

    /// Percentage of each label in the leaf a row ends up in.
    pub fn predict_probabilities(&self, row: &Row) -> Result<LabelPercentages, CartError> {
        leaf_to_probabilities(self.predict_counts(row)?)
    }

    /// Most frequent label in the leaf a row ends up in.
    pub fn predict_label(&self, row: &Row) -> Result<&Scalar, CartError> {
        let counts = self.predict_counts(row)?;
        majority_label(counts).ok_or_else(|| CartError::InvalidInput("Leaf holds no labels.".to_string()))
    }
}
