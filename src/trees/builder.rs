//! Recursive tree building by maximum information gain.
use super::gain::{score_feature, SplitData};
use super::node::{Branch, NodeRecord, StopReason, TreeNode};
use super::params::TreeParams;
use crate::data::dataset::{Dataset, WholeNumber};
use crate::error::{Result, TreeError};

/// Finds the feature with the highest information gain at a node.
///
/// Features are scanned in ascending order and only a strictly greater gain
/// replaces the current best, so ties go to the lowest feature index.
/// Degenerate candidates are skipped.
///
/// # Returns
///
/// `None` if every feature leaves one side of the split empty.
pub fn best_split<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
) -> Result<Option<SplitData>> {
    dataset.check_indices(node_indices)?;
    find_best_split(dataset, node_indices)
}

/// Grows a tree over `node_indices` and returns it as an owned value.
///
/// # Arguments
///
/// * `dataset` - Binary features and labels, shared read-only by every node.
/// * `node_indices` - Examples belonging to the node to grow.
/// * `branch` - Label of the node, e.g. [`Branch::Root`].
/// * `params` - Depth limit, minimum gain and feature names.
/// * `current_depth` - Depth of the node about to be grown.
///
/// # Errors
///
/// Fails if an index is out of range or the feature names don't match the
/// dataset. Nothing is built in that case.
pub fn build_tree<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
    branch: Branch,
    params: &TreeParams,
    current_depth: u16,
) -> Result<TreeNode<YT>> {
    dataset.check_indices(node_indices)?;
    params.check_feature_names(dataset.nfeatures())?;
    grow(dataset, node_indices.to_vec(), branch, params, current_depth)
}

/// Grows a tree and appends one record per visited node to `tree`.
///
/// Records are appended in pre-order: a node comes before its left subtree,
/// which comes before its right subtree. Records already in `tree` are left
/// untouched.
pub fn build_tree_recursive<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
    branch: Branch,
    params: &TreeParams,
    current_depth: u16,
    tree: &mut Vec<NodeRecord>,
) -> Result<()> {
    let root = build_tree(dataset, node_indices, branch, params, current_depth)?;
    tree.extend(root.records());
    Ok(())
}

fn grow<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    indices: Vec<usize>,
    branch: Branch,
    params: &TreeParams,
    depth: u16,
) -> Result<TreeNode<YT>> {
    if indices.is_empty() {
        log::debug!("{:<32}{}", format!("depth {}, {}", depth, branch), StopReason::Empty);
        return Ok(TreeNode::leaf(branch, depth, indices, StopReason::Empty, None));
    }

    let value = Some(majority_label(dataset, &indices));

    let stop = if params.depth_exhausted(depth) {
        Some(StopReason::MaxDepth)
    } else if dataset.is_pure(&indices)? {
        Some(StopReason::Pure)
    } else {
        None
    };
    if let Some(stop) = stop {
        log::debug!("{:<32}{} {:?}", format!("depth {}, {}", depth, branch), stop, indices);
        return Ok(TreeNode::leaf(branch, depth, indices, stop, value));
    }

    let best = match find_best_split(dataset, &indices)? {
        Some(split) if split.information_gain > params.min_gain() => split,
        Some(split) => {
            log::debug!(
                "{:<32}{} ({:.4} <= {})",
                format!("depth {}, {}", depth, branch),
                StopReason::InsufficientGain,
                split.information_gain,
                params.min_gain()
            );
            let stop = StopReason::InsufficientGain;
            return Ok(TreeNode::leaf(branch, depth, indices, stop, value));
        }
        None => {
            let stop = StopReason::NoValidSplit;
            log::debug!("{:<32}{}", format!("depth {}, {}", depth, branch), stop);
            return Ok(TreeNode::leaf(branch, depth, indices, stop, value));
        }
    };

    log::debug!(
        "{:<32}split on {} (gain {:.4})",
        format!("depth {}, {}", depth, branch),
        params.feature_name(best.feature_index),
        best.information_gain
    );

    let SplitData {
        feature_index,
        left,
        right,
        information_gain,
    } = best;
    let child_depth = depth.saturating_add(1);
    let left_node = grow(dataset, left, Branch::Left, params, child_depth)?;
    let right_node = grow(dataset, right, Branch::Right, params, child_depth)?;

    Ok(TreeNode {
        branch,
        depth,
        indices,
        feature_index: Some(feature_index),
        information_gain,
        stop: None,
        left: Some(Box::new(left_node)),
        right: Some(Box::new(right_node)),
        value: None,
    })
}

fn find_best_split<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
) -> Result<Option<SplitData>> {
    let mut best_split: Option<SplitData> = None;
    let mut best_information_gain = f64::NEG_INFINITY;

    for feature_index in 0..dataset.nfeatures() {
        let split = match score_feature(dataset, node_indices, feature_index) {
            Ok(split) => split,
            Err(TreeError::DegenerateSplit { left, right }) => {
                log::trace!("feature {} degenerate ({} / {})", feature_index, left, right);
                continue;
            }
            Err(err) => return Err(err),
        };
        log::trace!("feature {} gain {:.6}", feature_index, split.information_gain);

        if split.information_gain > best_information_gain {
            best_information_gain = split.information_gain;
            best_split = Some(split);
        }
    }
    Ok(best_split)
}

/// Most common label in a non-empty subset. Ties go to the positive class.
fn majority_label<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    indices: &[usize],
) -> YT {
    if 2 * dataset.count_positive(indices) >= indices.len() {
        YT::one()
    } else {
        YT::zero()
    }
}
