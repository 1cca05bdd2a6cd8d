use crate::data::dataset::WholeNumber;
use std::fmt::{self, Display, Formatter};

/// Position of a node relative to its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Branch {
    Root,
    Left,
    Right,
    Named(String),
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Branch::Root => write!(f, "Root"),
            Branch::Left => write!(f, "Left"),
            Branch::Right => write!(f, "Right"),
            Branch::Named(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for Branch {
    fn from(name: &str) -> Self {
        match name {
            "Root" => Branch::Root,
            "Left" => Branch::Left,
            "Right" => Branch::Right,
            other => Branch::Named(other.to_string()),
        }
    }
}

/// Why a node was not split any further.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Empty,
    MaxDepth,
    Pure,
    NoValidSplit,
    InsufficientGain,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let reason = match self {
            StopReason::Empty => "empty node",
            StopReason::MaxDepth => "max depth reached",
            StopReason::Pure => "pure node",
            StopReason::NoValidSplit => "no valid split",
            StopReason::InsufficientGain => "insufficient gain",
        };
        write!(f, "{}", reason)
    }
}

/// Flat, pre-order view of one visited node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeRecord {
    pub branch: Branch,
    pub depth: u16,
    pub indices: Vec<usize>,
    pub feature_index: Option<usize>,
    pub information_gain: f64,
    pub stop: Option<StopReason>,
}

impl NodeRecord {
    pub fn is_leaf(&self) -> bool {
        self.feature_index.is_none()
    }
}

/// Decision tree node
///
/// Internal nodes carry `feature_index`, `information_gain` and both children;
/// leaves carry a `stop` reason and the majority label in `value`.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode<YT: WholeNumber> {
    pub branch: Branch,
    pub depth: u16,
    pub indices: Vec<usize>,
    pub feature_index: Option<usize>,
    pub information_gain: f64,
    pub stop: Option<StopReason>,
    pub left: Option<Box<TreeNode<YT>>>,
    pub right: Option<Box<TreeNode<YT>>>,
    pub value: Option<YT>,
}

impl<YT: WholeNumber> TreeNode<YT> {
    pub fn leaf(
        branch: Branch,
        depth: u16,
        indices: Vec<usize>,
        stop: StopReason,
        value: Option<YT>,
    ) -> Self {
        Self {
            branch,
            depth,
            indices,
            feature_index: None,
            information_gain: 0.0,
            stop: Some(stop),
            left: None,
            right: None,
            value,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.feature_index.is_none()
    }

    pub fn record(&self) -> NodeRecord {
        NodeRecord {
            branch: self.branch.clone(),
            depth: self.depth,
            indices: self.indices.clone(),
            feature_index: self.feature_index,
            information_gain: self.information_gain,
            stop: self.stop,
        }
    }

    /// Flattens the subtree into records, parents before their children and
    /// left subtrees before right ones.
    pub fn records(&self) -> Vec<NodeRecord> {
        let mut records = Vec::new();
        self.collect_records(&mut records);
        records
    }

    fn collect_records(&self, records: &mut Vec<NodeRecord>) {
        records.push(self.record());
        for child in [&self.left, &self.right].into_iter().flatten() {
            child.collect_records(records);
        }
    }

    pub fn n_leaves(&self) -> usize {
        match (&self.left, &self.right) {
            (None, None) => 1,
            (left, right) => {
                left.as_ref().map_or(0, |node| node.n_leaves())
                    + right.as_ref().map_or(0, |node| node.n_leaves())
            }
        }
    }

    /// Deepest depth of any node in the subtree.
    pub fn depth_reached(&self) -> u16 {
        [&self.left, &self.right]
            .into_iter()
            .flatten()
            .map(|child| child.depth_reached())
            .max()
            .unwrap_or(self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump() -> TreeNode<u8> {
        let left = TreeNode::leaf(Branch::Left, 1, vec![0, 1], StopReason::Pure, Some(1));
        let right = TreeNode::leaf(Branch::Right, 1, vec![2], StopReason::Pure, Some(0));
        TreeNode {
            branch: Branch::Root,
            depth: 0,
            indices: vec![0, 1, 2],
            feature_index: Some(0),
            information_gain: 0.9,
            stop: None,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
            value: None,
        }
    }

    #[test]
    fn test_branch_display() {
        assert_eq!(Branch::Root.to_string(), "Root");
        assert_eq!(Branch::from("Left"), Branch::Left);
        assert_eq!(Branch::from("Subtree").to_string(), "Subtree");
    }

    #[test]
    fn test_records_are_pre_order() {
        let records = stump().records();
        let branches: Vec<_> = records.iter().map(|r| r.branch.clone()).collect();
        assert_eq!(branches, vec![Branch::Root, Branch::Left, Branch::Right]);
        assert!(!records[0].is_leaf());
        assert!(records[1].is_leaf());
        assert_eq!(records[2].indices, vec![2]);
    }

    #[test]
    fn test_tree_shape() {
        let tree = stump();
        assert_eq!(tree.n_leaves(), 2);
        assert_eq!(tree.depth_reached(), 1);
        assert!(!tree.is_leaf());
    }
}
