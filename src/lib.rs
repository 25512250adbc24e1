//! A CART classification tree grown with Gini impurity.
//!
//! Rows are sequences of numeric or text values whose last value is the label.
//! [`Tree::fit`] grows a binary tree by greedily picking, at every node, the
//! yes/no question with the highest information gain; [`Tree::predict_counts`]
//! routes a row to a leaf and returns the label counts stored there.

// Modules
pub mod config;
pub mod data;
pub mod errors;
pub mod metric;
pub mod node;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use config::{ConfigIO, ImportanceMethod, TreeConfig};
pub use data::{Dataset, Row, Scalar};
pub use errors::CartError;
pub use metric::leaf_to_probabilities;
pub use tree::Tree;
