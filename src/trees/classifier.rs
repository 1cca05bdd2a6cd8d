//! Decision Tree Classifier
use super::builder::build_tree;
use super::node::{Branch, NodeRecord, TreeNode};
use super::params::TreeParams;
use crate::data::dataset::{Dataset, WholeNumber};
use crate::error::{Result, TreeError};
use crate::metrics::confusion::ClassificationMetrics;
use nalgebra::{DMatrix, DVector, RowDVector};
use std::marker::PhantomData;

/// Binary decision tree classifier grown by maximum information gain.
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<XT: WholeNumber, YT: WholeNumber> {
    root: Option<Box<TreeNode<YT>>>,
    n_features: usize,
    tree_params: TreeParams,

    _marker: PhantomData<XT>,
}

impl<XT: WholeNumber, YT: WholeNumber> ClassificationMetrics<YT>
    for DecisionTreeClassifier<XT, YT>
{
}

impl<XT: WholeNumber, YT: WholeNumber> Default for DecisionTreeClassifier<XT, YT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<XT: WholeNumber, YT: WholeNumber> DecisionTreeClassifier<XT, YT> {
    /// Creates a new classifier with an unbounded depth and a minimum gain of 0.
    pub fn new() -> Self {
        Self {
            root: None,
            n_features: 0,
            tree_params: TreeParams::new(),
            _marker: PhantomData,
        }
    }

    /// Creates a new classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - The maximum depth of the tree, `None` for no limit.
    /// * `min_gain` - The information gain a split has to exceed. Defaults to 0.
    /// * `feature_names` - Display names of the features, used only for reporting.
    ///
    /// # Errors
    ///
    /// This method will return an error if the maximum depth is less than 1 or
    /// the minimum gain is negative.
    pub fn with_params(
        max_depth: Option<u16>,
        min_gain: Option<f64>,
        feature_names: Option<Vec<String>>,
    ) -> Result<Self> {
        let mut tree = Self::new();

        tree.set_max_depth(max_depth)?;
        tree.set_min_gain(min_gain.unwrap_or(0.0))?;
        tree.tree_params.set_feature_names(feature_names);
        Ok(tree)
    }

    /// Sets the maximum depth of the tree.
    ///
    /// # Errors
    ///
    /// This method will return an error if the maximum depth is less than 1.
    pub fn set_max_depth(&mut self, max_depth: Option<u16>) -> Result<()> {
        self.tree_params.set_max_depth(max_depth)
    }

    /// Sets the information gain a split has to exceed.
    ///
    /// # Errors
    ///
    /// This method will return an error if `min_gain` is negative or not finite.
    pub fn set_min_gain(&mut self, min_gain: f64) -> Result<()> {
        self.tree_params.set_min_gain(min_gain)
    }

    pub fn max_depth(&self) -> Option<u16> {
        self.tree_params.max_depth()
    }

    pub fn min_gain(&self) -> f64 {
        self.tree_params.min_gain()
    }

    pub fn params(&self) -> &TreeParams {
        &self.tree_params
    }

    /// Root of the fitted tree.
    pub fn root(&self) -> Option<&TreeNode<YT>> {
        self.root.as_deref()
    }

    /// Builds the decision tree from a dataset.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The dataset containing binary features and labels.
    ///
    /// # Returns
    ///
    /// A string indicating that the tree was built successfully.
    ///
    /// # Errors
    ///
    /// This method will return an error if the dataset has no examples or the
    /// feature names don't match its columns.
    pub fn fit(&mut self, dataset: &Dataset<XT, YT>) -> Result<String> {
        if dataset.nrows() == 0 {
            return Err(TreeError::EmptyNode);
        }

        let root = build_tree(
            dataset,
            &dataset.all_indices(),
            Branch::Root,
            &self.tree_params,
            0,
        )?;
        log::info!(
            "{:<32}{} leaves, depth {}",
            "finished building tree",
            root.n_leaves(),
            root.depth_reached()
        );

        self.n_features = dataset.nfeatures();
        self.root = Some(Box::new(root));
        Ok("Finished building the tree.".into())
    }

    /// Predicts the labels for new data.
    ///
    /// # Arguments
    ///
    /// * `features` - The matrix of binary features for the new data.
    ///
    /// # Returns
    ///
    /// A vector containing the predicted labels for the new data.
    ///
    /// # Errors
    ///
    /// This method will return an error if the tree wasn't built yet, if the
    /// number of columns differs from the training data or a value isn't binary.
    pub fn predict(&self, prediction_features: &DMatrix<XT>) -> Result<DVector<YT>> {
        let root = self.root.as_ref().ok_or(TreeError::NotFitted)?;
        if prediction_features.ncols() != self.n_features {
            return Err(TreeError::FeatureCountMismatch {
                expected: self.n_features,
                got: prediction_features.ncols(),
            });
        }

        let predictions = prediction_features
            .row_iter()
            .enumerate()
            .map(|(row, features)| Self::make_prediction(row, &features.clone_owned(), root))
            .collect::<Result<Vec<_>>>()?;

        Ok(DVector::from_vec(predictions))
    }

    /// Pre-order records of the fitted tree.
    ///
    /// # Errors
    ///
    /// This method will return an error if the tree wasn't built yet.
    pub fn records(&self) -> Result<Vec<NodeRecord>> {
        self.root
            .as_ref()
            .map(|root| root.records())
            .ok_or(TreeError::NotFitted)
    }

    fn make_prediction(row: usize, features: &RowDVector<XT>, node: &TreeNode<YT>) -> Result<YT> {
        let Some(feature_index) = node.feature_index else {
            return node.value.ok_or(TreeError::EmptyNode);
        };

        let child = match features[feature_index] {
            x if x == XT::one() => &node.left,
            x if x == XT::zero() => &node.right,
            x => {
                return Err(TreeError::NonBinaryValue {
                    row,
                    column: feature_index.to_string(),
                    value: x.to_string(),
                })
            }
        };
        let child = child.as_ref().ok_or(TreeError::EmptyNode)?;
        Self::make_prediction(row, features, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trees::node::StopReason;

    fn cats() -> Dataset<u8, u8> {
        Dataset::from_rows(
            &[
                vec![1, 1, 1],
                vec![0, 0, 1],
                vec![0, 1, 0],
                vec![1, 0, 1],
                vec![1, 1, 1],
                vec![1, 1, 0],
                vec![0, 0, 0],
                vec![1, 1, 0],
                vec![0, 1, 0],
                vec![0, 1, 0],
            ],
            &[1, 1, 0, 0, 1, 1, 0, 1, 0, 0],
        )
        .unwrap()
    }

    #[test]
    fn test_with_params() {
        let classifier =
            DecisionTreeClassifier::<u8, u8>::with_params(Some(2), Some(0.1), None).unwrap();
        assert_eq!(classifier.max_depth(), Some(2));
        assert_eq!(classifier.min_gain(), 0.1);

        assert!(DecisionTreeClassifier::<u8, u8>::with_params(Some(0), None, None).is_err());
        assert!(DecisionTreeClassifier::<u8, u8>::with_params(None, Some(-1.0), None).is_err());
    }

    #[test]
    fn test_fit_and_predict_training_data() {
        let dataset = cats();
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&dataset).unwrap();

        let (x, y) = dataset.into_parts();
        let predictions = classifier.predict(x).unwrap();
        assert_eq!(&predictions, y);
        assert_eq!(classifier.accuracy(y, &predictions).unwrap(), 1.0);
    }

    #[test]
    fn test_stump_predicts_by_ear_shape() {
        let dataset = cats();
        let mut classifier = DecisionTreeClassifier::with_params(Some(1), None, None).unwrap();
        classifier.fit(&dataset).unwrap();

        let root = classifier.root().unwrap();
        assert_eq!(root.feature_index, Some(0));
        assert_eq!(root.left.as_ref().unwrap().stop, Some(StopReason::MaxDepth));

        let x = DMatrix::from_row_slice(2, 3, &[1u8, 0, 0, 0, 1, 1]);
        let predictions = classifier.predict(&x).unwrap();
        assert_eq!(predictions, DVector::from_vec(vec![1u8, 0]));
    }

    #[test]
    fn test_records_of_fitted_tree() {
        let dataset = cats();
        let mut classifier = DecisionTreeClassifier::with_params(Some(2), None, None).unwrap();
        assert!(matches!(classifier.records(), Err(TreeError::NotFitted)));

        classifier.fit(&dataset).unwrap();
        let records = classifier.records().unwrap();
        assert_eq!(records.len(), 7);
        assert_eq!(records[0].branch, Branch::Root);
    }

    #[test]
    fn test_predict_before_fit() {
        let classifier = DecisionTreeClassifier::<u8, u8>::new();
        let x = DMatrix::from_row_slice(1, 3, &[1u8, 0, 0]);
        assert!(matches!(classifier.predict(&x), Err(TreeError::NotFitted)));
    }

    #[test]
    fn test_predict_rejects_bad_input() {
        let dataset = cats();
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&dataset).unwrap();

        let narrow = DMatrix::from_row_slice(1, 2, &[1u8, 0]);
        assert!(matches!(
            classifier.predict(&narrow),
            Err(TreeError::FeatureCountMismatch {
                expected: 3,
                got: 2
            })
        ));

        let non_binary = DMatrix::from_row_slice(1, 3, &[5u8, 0, 0]);
        assert!(matches!(
            classifier.predict(&non_binary),
            Err(TreeError::NonBinaryValue { row: 0, .. })
        ));
    }

    #[test]
    fn test_fit_without_feature_columns() {
        let x = DMatrix::<u8>::zeros(2, 0);
        let y = DVector::from_vec(vec![1u8, 0]);
        let dataset = Dataset::new(x, y).unwrap();
        let mut classifier = DecisionTreeClassifier::new();
        classifier.fit(&dataset).unwrap();
        assert_eq!(
            classifier.root().unwrap().stop,
            Some(StopReason::NoValidSplit)
        );

        let empty = Dataset::<u8, u8>::new(DMatrix::zeros(0, 3), DVector::zeros(0)).unwrap();
        assert!(matches!(classifier.fit(&empty), Err(TreeError::EmptyNode)));
    }

    #[test]
    fn test_fit_rejects_mismatched_feature_names() {
        let dataset = cats();
        let names = Some(vec!["Ear Shape".into()]);
        let mut classifier = DecisionTreeClassifier::with_params(None, None, names).unwrap();
        assert!(matches!(
            classifier.fit(&dataset),
            Err(TreeError::FeatureNamesMismatch { .. })
        ));
        assert!(classifier.root().is_none());
    }
}
