/// Binary dataset container and number traits
pub mod dataset;
