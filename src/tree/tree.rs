use crate::config::ImportanceMethod;
use crate::data::{Dataset, Row};
use crate::errors::CartError;
use crate::node::{DecisionNode, Leaf, Node};
use crate::splitter::{find_best_split, partition};
use hashbrown::HashMap;
use log::{debug, info};
use std::fmt::{self, Display};

/// A classification tree grown on a [`Dataset`].
#[derive(Clone, Debug)]
pub struct Tree {
    pub root: Node,
    pub feature_names: Vec<String>,
    pub depth: usize,
    pub n_leaves: usize,
}

type ImportanceFn = fn(&DecisionNode) -> f64;

fn importance_weight(_: &DecisionNode) -> f64 {
    1.0
}

fn importance_gain(d: &DecisionNode) -> f64 {
    d.split_gain
}

fn importance_cover(d: &DecisionNode) -> f64 {
    d.cover as f64
}

impl Tree {
    /// Grow a tree on every row of the dataset.
    pub fn fit(data: &Dataset) -> Result<Self, CartError> {
        let rows = data.row_refs();
        let root = build_node(&rows)?;
        let tree = Tree {
            depth: root.depth(),
            n_leaves: root.n_leaves(),
            feature_names: data.feature_names().to_vec(),
            root,
        };
        info!(
            "Fitted tree on {} rows: {} leaves, depth {}.",
            rows.len(),
            tree.n_leaves,
            tree.depth
        );
        Ok(tree)
    }

    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }

    fn calc_feature_node_stats(&self, calc_stat: ImportanceFn, stats: &mut HashMap<usize, (f64, usize)>) {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let Node::Decision(d) = node {
                stats
                    .entry(d.question.column)
                    .and_modify(|(v, c)| {
                        *v += calc_stat(d);
                        *c += 1;
                    })
                    .or_insert((calc_stat(d), 1));
                stack.push(&d.false_branch);
                stack.push(&d.true_branch);
            }
        }
    }

    /// Importance of every feature used by at least one split, keyed by column.
    ///
    /// * `method` - Statistic to accumulate per feature.
    /// * `normalize` - Scale the values so they sum to one.
    pub fn calculate_feature_importance(&self, method: ImportanceMethod, normalize: bool) -> HashMap<usize, f64> {
        let (average, importance_fn): (bool, ImportanceFn) = match method {
            ImportanceMethod::Weight => (false, importance_weight),
            ImportanceMethod::Gain => (true, importance_gain),
            ImportanceMethod::TotalGain => (false, importance_gain),
            ImportanceMethod::Cover => (true, importance_cover),
            ImportanceMethod::TotalCover => (false, importance_cover),
        };
        let mut stats = HashMap::new();
        self.calc_feature_node_stats(importance_fn, &mut stats);

        let importance = stats
            .iter()
            .map(|(k, (v, c))| if average { (*k, v / (*c as f64)) } else { (*k, *v) })
            .collect::<HashMap<usize, f64>>();

        if normalize {
            // Sum in sorted order so the total does not depend on map order.
            let mut values: Vec<f64> = importance.values().copied().collect();
            values.sort_by(|a, b| a.total_cmp(b));
            let total: f64 = values.iter().sum();
            importance.iter().map(|(k, v)| (*k, v / total)).collect()
        } else {
            importance
        }
    }
}

/// Grow a (sub)tree on a set of rows.
///
/// Rows become a leaf when no question reduces their impurity; otherwise they are
/// partitioned by the best question and both halves are grown in turn.
pub fn build_node(rows: &[&Row]) -> Result<Node, CartError> {
    if rows.is_empty() {
        return Err(CartError::InvalidInput("Cannot grow a tree on an empty set of rows.".to_string()));
    }
    let split = find_best_split(rows)?;
    let question = match split.question {
        Some(q) if split.gain != 0.0 => q,
        _ => return Ok(Node::Leaf(Leaf::from_rows(rows))),
    };

    let (true_rows, false_rows) = partition(rows, &question)?;
    debug!(
        "Split {} rows on \"{}\" (gain {:.4}): {} true, {} false.",
        rows.len(),
        question,
        split.gain,
        true_rows.len(),
        false_rows.len()
    );
    let true_branch = build_node(&true_rows)?;
    let false_branch = build_node(&false_rows)?;

    Ok(Node::Decision(DecisionNode {
        question,
        split_gain: split.gain,
        cover: rows.len(),
        true_branch: Box::new(true_branch),
        false_branch: Box::new(false_branch),
    }))
}

enum PrintItem<'a> {
    Node(&'a Node, usize),
    Branch(&'static str, usize),
}

impl Display for Tree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer = vec![PrintItem::Node(&self.root, 0)];
        let mut r = String::new();
        while let Some(item) = print_buffer.pop() {
            match item {
                PrintItem::Branch(name, depth) => {
                    r += format!("{}--> {}:\n", "  ".repeat(depth), name).as_str();
                }
                PrintItem::Node(node @ Node::Leaf(_), depth) => {
                    r += format!("{}{}\n", "  ".repeat(depth), node).as_str();
                }
                PrintItem::Node(Node::Decision(d), depth) => {
                    r += format!("{}{}\n", "  ".repeat(depth), d.question.describe(&self.feature_names)).as_str();
                    print_buffer.push(PrintItem::Node(&d.false_branch, depth + 1));
                    print_buffer.push(PrintItem::Branch("False", depth));
                    print_buffer.push(PrintItem::Node(&d.true_branch, depth + 1));
                    print_buffer.push(PrintItem::Branch("True", depth));
                }
            }
        }
        write!(f, "{}", r)
    }
}
