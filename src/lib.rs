//! # infogain-tree
//!
//! `infogain-tree` grows binary decision tree classifiers over binary features,
//! choosing at every node the feature with the highest information gain.
//! Besides the classifier it exposes the building blocks on their own: binary
//! entropy, index splits, weighted entropy and information gain.
//!
//! ## Example Usage
//!
//! ```rust
//! use infogain_tree::data::dataset::Dataset;
//! use infogain_tree::trees::builder::build_tree_recursive;
//! use infogain_tree::trees::node::Branch;
//! use infogain_tree::trees::params::TreeParams;
//!
//! let dataset = Dataset::from_rows(
//!     &[vec![1u8, 1], vec![1, 0], vec![0, 1], vec![0, 0]],
//!     &[1u8, 1, 0, 0],
//! )
//! .unwrap();
//!
//! let mut params = TreeParams::new();
//! params.set_max_depth(Some(2)).unwrap();
//!
//! let mut tree = Vec::new();
//! build_tree_recursive(&dataset, &dataset.all_indices(), Branch::Root, &params, 0, &mut tree)
//!     .unwrap();
//!
//! assert_eq!(tree[0].feature_index, Some(0));
//! assert_eq!(tree.len(), 3);
//! ```

/// Dataset and data manipulation utilities
pub mod data;
/// Error type
pub mod error;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;
