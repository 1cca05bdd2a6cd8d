use nalgebra::{DMatrix, DVector};

use crate::data::dataset::WholeNumber;
use crate::error::{Result, TreeError};

type ConfusionMatrix = DMatrix<usize>;

pub trait ClassificationMetrics<T: WholeNumber> {
    /// Computes the 2x2 confusion matrix of binary labels.
    ///
    /// Rows are true labels and columns are predicted labels, both ordered
    /// `0`, `1`, so `matrix[(1, 1)]` counts the true positives.
    ///
    /// # Errors
    ///
    /// Fails if the vectors have different lengths or hold a non-binary label.
    fn confusion_matrix(
        &self,
        y_true: &DVector<T>,
        y_pred: &DVector<T>,
    ) -> Result<ConfusionMatrix> {
        if y_true.len() != y_pred.len() {
            return Err(TreeError::PredictionLengthMismatch {
                labels: y_true.len(),
                predictions: y_pred.len(),
            });
        }

        let class = |row: usize, label: T, column: &str| -> Result<usize> {
            if label == T::zero() {
                Ok(0)
            } else if label == T::one() {
                Ok(1)
            } else {
                Err(TreeError::NonBinaryValue {
                    row,
                    column: column.to_string(),
                    value: label.to_string(),
                })
            }
        };

        let mut matrix = DMatrix::zeros(2, 2);
        for (row, (&y_t, &y_p)) in y_true.iter().zip(y_pred.iter()).enumerate() {
            let matrix_row = class(row, y_t, "y_true")?;
            let matrix_col = class(row, y_p, "y_pred")?;
            matrix[(matrix_row, matrix_col)] += 1;
        }

        Ok(matrix)
    }

    /// Fraction of predictions equal to the true label.
    fn accuracy(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        if y_true.is_empty() {
            return Ok(0.0);
        }
        Ok(matrix.trace() as f64 / y_true.len() as f64)
    }

    /// `tp / (tp + fp)`, or `0` when nothing was predicted positive.
    fn precision(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fp = matrix[(0, 1)];
        Ok(ratio(tp, tp + fp))
    }

    /// `tp / (tp + fn)`, or `0` when there are no positive examples.
    fn recall(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let tp = matrix[(1, 1)];
        let fn_ = matrix[(1, 0)];
        Ok(ratio(tp, tp + fn_))
    }

    fn f1_score(&self, y_true: &DVector<T>, y_pred: &DVector<T>) -> Result<f64> {
        let precision = self.precision(y_true, y_pred)?;
        let recall = self.recall(y_true, y_pred)?;
        if precision + recall == 0.0 {
            return Ok(0.0);
        }
        Ok(2.0 * precision * recall / (precision + recall))
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
