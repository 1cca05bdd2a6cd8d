/// Recursive tree building
pub mod builder;
/// Decision tree classifier
pub mod classifier;
/// Binary entropy
pub mod entropy;
/// Weighted entropy and information gain
pub mod gain;
/// Tree nodes and node records
pub mod node;
/// Tree parameters
pub mod params;
/// Text rendering of node records
pub mod render;
/// Binary feature splits
pub mod split;
