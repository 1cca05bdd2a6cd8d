use crate::error::{Result, TreeError};

#[derive(Clone, Debug)]
pub struct TreeParams {
    max_depth: Option<u16>,
    min_gain: f64,
    feature_names: Option<Vec<String>>,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeParams {
    pub fn new() -> Self {
        Self {
            max_depth: None,
            min_gain: 0.0,
            feature_names: None,
        }
    }

    pub fn set_max_depth(&mut self, max_depth: Option<u16>) -> Result<()> {
        if max_depth.is_some_and(|depth| depth < 1) {
            return Err(TreeError::InvalidParameter(
                "The maximum depth must be greater than 0.".into(),
            ));
        }
        self.max_depth = max_depth;
        Ok(())
    }

    pub fn set_min_gain(&mut self, min_gain: f64) -> Result<()> {
        if !min_gain.is_finite() || min_gain < 0.0 {
            return Err(TreeError::InvalidParameter(
                "The minimum information gain must be a non-negative number.".into(),
            ));
        }
        self.min_gain = min_gain;
        Ok(())
    }

    pub fn set_feature_names(&mut self, feature_names: Option<Vec<String>>) {
        self.feature_names = feature_names;
    }

    pub fn max_depth(&self) -> Option<u16> {
        self.max_depth
    }

    pub fn min_gain(&self) -> f64 {
        self.min_gain
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    /// Display name of a feature, falling back to its index.
    pub fn feature_name(&self, feature_index: usize) -> String {
        self.feature_names
            .as_ref()
            .and_then(|names| names.get(feature_index).cloned())
            .unwrap_or_else(|| format!("feature {}", feature_index))
    }

    /// Checks that the configured feature names fit a dataset with `features` columns.
    pub fn check_feature_names(&self, features: usize) -> Result<()> {
        match &self.feature_names {
            Some(names) if names.len() != features => Err(TreeError::FeatureNamesMismatch {
                names: names.len(),
                features,
            }),
            _ => Ok(()),
        }
    }

    /// Depth exhausted for a node at `current_depth`.
    pub(crate) fn depth_exhausted(&self, current_depth: u16) -> bool {
        self.max_depth.is_some_and(|max| current_depth >= max)
    }
}
