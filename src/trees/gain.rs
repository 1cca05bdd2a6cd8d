//! Weighted entropy and information gain of a candidate split.
use super::entropy::entropy;
use super::split::partition;
use crate::data::dataset::{Dataset, WholeNumber};
use crate::error::{Result, TreeError};

/// A scored candidate split of one node.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitData {
    pub feature_index: usize,
    pub left: Vec<usize>,
    pub right: Vec<usize>,
    pub information_gain: f64,
}

/// Computes `w_left * H(p_left) + w_right * H(p_right)` for a split.
///
/// # Arguments
///
/// * `dataset` - The dataset the indices refer to.
/// * `left_indices` - Examples sent to the left child.
/// * `right_indices` - Examples sent to the right child.
///
/// # Errors
///
/// Returns [`TreeError::DegenerateSplit`] if either side is empty, or an
/// index error if any index is out of range.
pub fn weighted_entropy<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    left_indices: &[usize],
    right_indices: &[usize],
) -> Result<f64> {
    dataset.check_indices(left_indices)?;
    dataset.check_indices(right_indices)?;
    split_entropy(dataset, left_indices, right_indices)
}

/// Computes `H(p_node) - weighted_entropy(left, right)`.
///
/// No thresholding happens here; deciding whether the gain is worth a split
/// is left to the tree builder.
///
/// # Arguments
///
/// * `dataset` - The dataset the indices refer to.
/// * `node_indices` - Examples at the node being split.
/// * `left_indices` - Examples sent to the left child.
/// * `right_indices` - Examples sent to the right child.
///
/// # Errors
///
/// Returns [`TreeError::EmptyNode`] for an empty node,
/// [`TreeError::DegenerateSplit`] if either child is empty, or an index error.
pub fn information_gain<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
    left_indices: &[usize],
    right_indices: &[usize],
) -> Result<f64> {
    dataset.check_indices(node_indices)?;
    dataset.check_indices(left_indices)?;
    dataset.check_indices(right_indices)?;
    gain(dataset, node_indices, left_indices, right_indices)
}

/// Splits `node_indices` on `feature_index` and scores the result.
pub fn evaluate_split<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
    feature_index: usize,
) -> Result<SplitData> {
    dataset.check_feature(feature_index)?;
    dataset.check_indices(node_indices)?;
    score_feature(dataset, node_indices, feature_index)
}

/// Information gain of every feature at a node, in feature order.
///
/// Features whose split would leave one side empty have no gain and are
/// reported as `None`.
pub fn feature_gains<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
) -> Result<Vec<Option<f64>>> {
    dataset.check_indices(node_indices)?;
    (0..dataset.nfeatures())
        .map(|feature_index| {
            match score_feature(dataset, node_indices, feature_index) {
                Ok(split) => Ok(Some(split.information_gain)),
                Err(TreeError::DegenerateSplit { .. }) => Ok(None),
                Err(err) => Err(err),
            }
        })
        .collect()
}

pub(crate) fn score_feature<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
    feature_index: usize,
) -> Result<SplitData> {
    let (left, right) = partition(dataset, node_indices, feature_index);
    let information_gain = gain(dataset, node_indices, &left, &right)?;
    Ok(SplitData {
        feature_index,
        left,
        right,
        information_gain,
    })
}

fn split_entropy<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    left_indices: &[usize],
    right_indices: &[usize],
) -> Result<f64> {
    if left_indices.is_empty() || right_indices.is_empty() {
        return Err(TreeError::DegenerateSplit {
            left: left_indices.len(),
            right: right_indices.len(),
        });
    }

    let total = (left_indices.len() + right_indices.len()) as f64;
    let w_left = left_indices.len() as f64 / total;
    let w_right = right_indices.len() as f64 / total;
    let p_left = dataset.fraction_positive(left_indices)?;
    let p_right = dataset.fraction_positive(right_indices)?;

    Ok(w_left * entropy(p_left)? + w_right * entropy(p_right)?)
}

fn gain<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
    left_indices: &[usize],
    right_indices: &[usize],
) -> Result<f64> {
    let h_node = entropy(dataset.fraction_positive(node_indices)?)?;
    Ok(h_node - split_entropy(dataset, left_indices, right_indices)?)
}
