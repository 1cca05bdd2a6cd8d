use crate::data::dataset::{Dataset, WholeNumber};
use crate::error::Result;

/// Splits `node_indices` on a binary feature.
///
/// The left side holds the examples whose feature is `1`, the right side those
/// whose feature is `0`. Both sides keep the relative order of `node_indices`.
///
/// # Errors
///
/// Fails if `feature_index` or any of `node_indices` is out of range.
pub fn split_indices<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
    feature_index: usize,
) -> Result<(Vec<usize>, Vec<usize>)> {
    dataset.check_feature(feature_index)?;
    dataset.check_indices(node_indices)?;
    Ok(partition(dataset, node_indices, feature_index))
}

/// Unchecked split used by the builder once its inputs are validated.
pub(crate) fn partition<XT: WholeNumber, YT: WholeNumber>(
    dataset: &Dataset<XT, YT>,
    node_indices: &[usize],
    feature_index: usize,
) -> (Vec<usize>, Vec<usize>) {
    node_indices
        .iter()
        .copied()
        .partition(|&index| dataset.has_feature(index, feature_index))
}
