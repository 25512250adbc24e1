use crate::data::{Row, Scalar};
use crate::splitter::Question;
use crate::utils::{class_counts, fmt_label_map};
use hashbrown::HashMap;
use std::fmt;

/// Number of training rows per label.
pub type ClassCounts = HashMap<Scalar, usize>;

/// Terminal node, holding the label counts of the training rows that reached it.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub predictions: ClassCounts,
}

impl Leaf {
    pub fn from_rows(rows: &[&Row]) -> Self {
        Leaf {
            predictions: class_counts(rows),
        }
    }

    /// Number of training rows that reached this leaf.
    pub fn n_rows(&self) -> usize {
        self.predictions.values().sum()
    }
}

/// Internal node. Rows answering "yes" to the question go down the true branch.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionNode {
    pub question: Question,
    pub split_gain: f64,
    /// Number of training rows that reached this node.
    pub cover: usize,
    pub true_branch: Box<Node>,
    pub false_branch: Box<Node>,
}

impl DecisionNode {
    /// Child a row is sent to, given the answer to the question.
    pub fn get_child(&self, answer: bool) -> &Node {
        if answer {
            &self.true_branch
        } else {
            &self.false_branch
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Leaf),
    Decision(DecisionNode),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Number of edges on the longest path from this node to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Decision(d) => 1 + d.true_branch.depth().max(d.false_branch.depth()),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Decision(d) => d.true_branch.n_leaves() + d.false_branch.n_leaves(),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Decision(d) => 1 + d.true_branch.n_nodes() + d.false_branch.n_nodes(),
        }
    }
}

impl fmt::Display for Node {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => write!(f, "Predict {}", fmt_label_map(&leaf.predictions, "")),
            Node::Decision(d) => write!(f, "{}", d.question),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(labels: &[&str]) -> Node {
        let rows: Vec<Row> = labels
            .iter()
            .map(|l| Row::new(vec![Scalar::from(0), Scalar::from(*l)]).unwrap())
            .collect();
        let refs: Vec<&Row> = rows.iter().collect();
        Node::Leaf(Leaf::from_rows(&refs))
    }

    fn decision(column: usize, t: Node, f: Node) -> Node {
        Node::Decision(DecisionNode {
            question: Question::new(column, Scalar::from(1)),
            split_gain: 0.1,
            cover: 0,
            true_branch: Box::new(t),
            false_branch: Box::new(f),
        })
    }

    #[test]
    fn test_leaf_counts() {
        match leaf(&["A", "B", "A"]) {
            Node::Leaf(l) => {
                assert_eq!(l.n_rows(), 3);
                assert_eq!(l.predictions[&Scalar::from("A")], 2);
            }
            Node::Decision(_) => panic!("expected a leaf"),
        }
    }

    #[test]
    fn test_node_shape() {
        let tree = decision(0, leaf(&["A"]), decision(1, leaf(&["B"]), leaf(&["C", "C"])));
        assert!(!tree.is_leaf());
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.n_leaves(), 3);
        assert_eq!(tree.n_nodes(), 5);
        assert_eq!(leaf(&["A"]).depth(), 0);
    }

    #[test]
    fn test_get_child() {
        if let Node::Decision(d) = decision(0, leaf(&["A"]), leaf(&["B"])) {
            assert_eq!(d.get_child(true), &leaf(&["A"]));
            assert_eq!(d.get_child(false), &leaf(&["B"]));
        } else {
            panic!("expected a decision node");
        }
    }

    #[test]
    fn test_node_display() {
        assert_eq!(leaf(&["B", "A", "B"]).to_string(), "Predict {A: 1, B: 2}");
        assert_eq!(decision(2, leaf(&["A"]), leaf(&["B"])).to_string(), "Is column_2 >= 1?");
    }
}
