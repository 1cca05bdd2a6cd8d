use crate::error::{Result, TreeError};
use nalgebra::{DMatrix, DVector};
use num_traits::{FromPrimitive, Num, ToPrimitive};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

pub trait DataValue:
    Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + Send + Sync + Display + 'static
{
}

impl<T> DataValue for T where
    T: Debug + Clone + Copy + Num + FromPrimitive + ToPrimitive + Send + Sync + Display + 'static
{
}

pub trait WholeNumber: DataValue + PartialOrd + Eq + Hash {}
impl<T> WholeNumber for T where T: DataValue + PartialOrd + Eq + Hash {}

/// Binary feature matrix with one binary label per row.
///
/// Every value in `x` and `y` is checked to be `0` or `1` on construction,
/// after which the dataset is never mutated.
pub struct Dataset<XT: WholeNumber, YT: WholeNumber> {
    x: DMatrix<XT>,
    y: DVector<YT>,
}

impl<XT: WholeNumber, YT: WholeNumber> Debug for Dataset<XT, YT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Dataset {{\n    x: [\n")?;

        for row in self.x.row_iter() {
            write!(f, "        [")?;
            for value in row.iter() {
                write!(f, "{:?}, ", value)?;
            }
            writeln!(f, "],")?;
        }

        write!(f, "    ],\n    y: [")?;
        for label in self.y.iter() {
            write!(f, "{:?}, ", label)?;
        }
        write!(f, "]\n}}")
    }
}

fn is_binary<T: WholeNumber>(value: T) -> bool {
    value == T::zero() || value == T::one()
}

impl<XT: WholeNumber, YT: WholeNumber> Dataset<XT, YT> {
    pub fn new(x: DMatrix<XT>, y: DVector<YT>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(TreeError::LengthMismatch {
                rows: x.nrows(),
                labels: y.len(),
            });
        }

        for (row, values) in x.row_iter().enumerate() {
            let bad = values.iter().enumerate().find(|&(_, &v)| !is_binary(v));
            if let Some((column, value)) = bad {
                return Err(TreeError::NonBinaryValue {
                    row,
                    column: column.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if let Some((row, label)) = y.iter().enumerate().find(|&(_, &v)| !is_binary(v)) {
            return Err(TreeError::NonBinaryValue {
                row,
                column: "label".to_string(),
                value: label.to_string(),
            });
        }

        Ok(Self { x, y })
    }

    /// Builds a dataset from row vectors, as they are usually written out by hand.
    pub fn from_rows(rows: &[Vec<XT>], labels: &[YT]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |row| row.len());
        if let Some((row, values)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(TreeError::RaggedRow {
                row,
                len: values.len(),
                expected: ncols,
            });
        }

        let x = DMatrix::from_row_iterator(rows.len(), ncols, rows.iter().flatten().copied());
        let y = DVector::from_column_slice(labels);
        Self::new(x, y)
    }

    pub fn into_parts(&self) -> (&DMatrix<XT>, &DVector<YT>) {
        (&self.x, &self.y)
    }

    pub fn is_not_empty(&self) -> bool {
        !(self.x.is_empty() || self.y.is_empty())
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.x.ncols()
    }

    /// Index subset covering every example, in order.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.nrows()).collect()
    }

    pub fn check_feature(&self, feature_index: usize) -> Result<()> {
        if feature_index >= self.nfeatures() {
            return Err(TreeError::FeatureOutOfRange {
                index: feature_index,
                features: self.nfeatures(),
            });
        }
        Ok(())
    }

    pub fn check_indices(&self, indices: &[usize]) -> Result<()> {
        match indices.iter().find(|&&index| index >= self.nrows()) {
            Some(&index) => Err(TreeError::IndexOutOfRange {
                index,
                rows: self.nrows(),
            }),
            None => Ok(()),
        }
    }

    /// Whether example `index` has feature `feature_index` set to 1.
    ///
    /// Both indices must already be in range.
    pub(crate) fn has_feature(&self, index: usize, feature_index: usize) -> bool {
        self.x[(index, feature_index)] == XT::one()
    }

    pub(crate) fn count_positive(&self, indices: &[usize]) -> usize {
        indices
            .iter()
            .filter(|&&index| self.y[index] == YT::one())
            .count()
    }

    pub(crate) fn fraction_positive(&self, indices: &[usize]) -> Result<f64> {
        if indices.is_empty() {
            return Err(TreeError::EmptyNode);
        }
        Ok(self.count_positive(indices) as f64 / indices.len() as f64)
    }

    pub fn positive_count(&self, indices: &[usize]) -> Result<usize> {
        self.check_indices(indices)?;
        Ok(self.count_positive(indices))
    }

    /// Fraction of positive labels among `indices`.
    ///
    /// Fails with [`TreeError::EmptyNode`] for an empty subset.
    pub fn positive_fraction(&self, indices: &[usize]) -> Result<f64> {
        self.check_indices(indices)?;
        self.fraction_positive(indices)
    }

    /// True when every label in the subset is the same. Empty subsets are pure.
    pub fn is_pure(&self, indices: &[usize]) -> Result<bool> {
        self.check_indices(indices)?;
        let positives = self.count_positive(indices);
        Ok(positives == 0 || positives == indices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dataset<u8, u8> {
        let x = DMatrix::from_row_slice(3, 2, &[1, 0, 0, 1, 1, 1]);
        let y = DVector::from_vec(vec![1, 0, 1]);
        Dataset::new(x, y).unwrap()
    }

    #[test]
    fn test_dataset_new() {
        let dataset = small();
        assert_eq!(dataset.nrows(), 3);
        assert_eq!(dataset.nfeatures(), 2);
        assert!(dataset.is_not_empty());
    }

    #[test]
    fn test_dataset_length_mismatch() {
        let x = DMatrix::from_row_slice(2, 2, &[1u8, 0, 0, 1]);
        let y = DVector::from_vec(vec![1u8, 0, 1]);
        let result = Dataset::new(x, y);
        assert!(matches!(
            result,
            Err(TreeError::LengthMismatch { rows: 2, labels: 3 })
        ));
    }

    #[test]
    fn test_dataset_rejects_non_binary_feature() {
        let x = DMatrix::from_row_slice(2, 2, &[1u8, 0, 2, 1]);
        let y = DVector::from_vec(vec![1u8, 0]);
        match Dataset::new(x, y) {
            Err(TreeError::NonBinaryValue { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "0");
                assert_eq!(value, "2");
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_dataset_rejects_non_binary_label() {
        let x = DMatrix::from_row_slice(2, 1, &[1u8, 0]);
        let y = DVector::from_vec(vec![1u8, 3]);
        assert!(matches!(
            Dataset::new(x, y),
            Err(TreeError::NonBinaryValue { row: 1, .. })
        ));
    }

    #[test]
    fn test_dataset_from_rows() {
        let dataset = Dataset::from_rows(&[vec![1u8, 0], vec![0, 1]], &[1u8, 0]).unwrap();
        let (x, y) = dataset.into_parts();
        assert_eq!(x[(0, 0)], 1);
        assert_eq!(x[(1, 1)], 1);
        assert_eq!(y[1], 0);
    }

    #[test]
    fn test_dataset_from_ragged_rows() {
        let result = Dataset::from_rows(&[vec![1u8, 0], vec![0]], &[1u8, 0]);
        assert!(matches!(
            result,
            Err(TreeError::RaggedRow {
                row: 1,
                len: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_dataset_formatting() {
        let x = DMatrix::from_row_slice(2, 2, &[1u8, 0, 0, 1]);
        let y = DVector::from_vec(vec![1u8, 0]);
        let dataset = Dataset::new(x, y).unwrap();

        let expected_str = "\
Dataset {
    x: [
        [1, 0, ],
        [0, 1, ],
    ],
    y: [1, 0, ]
}";
        assert_eq!(format!("{:?}", dataset), expected_str);
    }

    #[test]
    fn test_positive_fraction() {
        let dataset = small();
        assert_eq!(dataset.positive_count(&[0, 1, 2]).unwrap(), 2);
        assert_eq!(dataset.positive_fraction(&[0, 1]).unwrap(), 0.5);
        assert!(matches!(
            dataset.positive_fraction(&[]),
            Err(TreeError::EmptyNode)
        ));
        assert!(matches!(
            dataset.positive_fraction(&[7]),
            Err(TreeError::IndexOutOfRange { index: 7, rows: 3 })
        ));
    }

    #[test]
    fn test_is_pure() {
        let dataset = small();
        assert!(dataset.is_pure(&[0, 2]).unwrap());
        assert!(!dataset.is_pure(&[0, 1]).unwrap());
        assert!(dataset.is_pure(&[]).unwrap());
    }

    #[test]
    fn test_check_feature() {
        let dataset = small();
        assert!(dataset.check_feature(1).is_ok());
        assert!(matches!(
            dataset.check_feature(2),
            Err(TreeError::FeatureOutOfRange {
                index: 2,
                features: 2
            })
        ));
    }
}
