//! Homogeneous numeric arrays
//!
//! Provides [`NumericArray`], a row-major n-dimensional array of a single
//! [`Dtype`]. Lattice vectors, rotation matrices and atomic positions are
//! carried this way until the document is serialized.

use crate::scalar::{Dtype, Element, Scalar};

/// Row-major homogeneous numeric array
///
/// # Invariants
/// - Every element has dtype [`NumericArray::dtype`]
/// - `data.len()` equals the product of `shape` (1 for a zero-dimensional array)
#[derive(Debug, Clone, PartialEq)]
pub struct NumericArray {
    dtype: Dtype,
    shape: Vec<usize>,
    data: Vec<Scalar>,
}

impl NumericArray {
    /// Create array from a shape and flat row-major data
    ///
    /// # Errors
    /// Returns [`ValueError::ShapeOverflow`] if the element count does not fit
    /// `usize`, [`ValueError::ShapeMismatch`] if the data length does not match
    /// the shape
    pub fn from_shape_vec<T: Element>(shape: Vec<usize>, data: Vec<T>) -> Result<Self, ValueError> {
        let Some(expected) = shape.iter().try_fold(1_usize, |acc, &dim| acc.checked_mul(dim)) else {
            return Err(ValueError::ShapeOverflow { shape });
        };
        if expected != data.len() {
            return Err(ValueError::ShapeMismatch {
                shape,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            dtype: T::DTYPE,
            shape,
            data: data.into_iter().map(Into::into).collect(),
        })
    }

    /// One-dimensional array
    #[must_use]
    pub fn from_vec<T: Element>(data: Vec<T>) -> Self {
        Self {
            dtype: T::DTYPE,
            shape: vec![data.len()],
            data: data.into_iter().map(Into::into).collect(),
        }
    }

    /// Two-dimensional array from fixed-width rows
    ///
    /// # Examples
    /// ```
    /// # use kdict_value::NumericArray;
    /// let identity = NumericArray::from_rows(&[[1, 0, 0], [0, 1, 0], [0, 0, 1]]);
    /// assert_eq!(identity.shape(), &[3, 3]);
    /// ```
    #[must_use]
    pub fn from_rows<T: Element, const N: usize>(rows: &[[T; N]]) -> Self {
        Self {
            dtype: T::DTYPE,
            shape: vec![rows.len(), N],
            data: rows.iter().flatten().map(|&v| v.into()).collect(),
        }
    }

    /// Zero-dimensional array holding a single value
    #[must_use]
    pub fn scalar<T: Element>(value: T) -> Self {
        Self {
            dtype: T::DTYPE,
            shape: Vec::new(),
            data: vec![value.into()],
        }
    }

    /// Element type
    #[inline]
    #[must_use]
    pub fn dtype(&self) -> Dtype {
        self.dtype
    }

    /// Dimension sizes, outermost first
    #[inline]
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions
    #[inline]
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the array holds no elements
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat row-major elements
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[Scalar] {
        &self.data
    }
}

/// Errors constructing values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// Flat data does not fill the requested shape
    #[error("array shape {shape:?} needs {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Requested shape
        shape: Vec<usize>,
        /// Element count the shape needs
        expected: usize,
        /// Element count supplied
        actual: usize,
    },

    /// Product of the dimensions overflows `usize`
    #[error("array shape {shape:?} has more elements than fit in memory")]
    ShapeOverflow {
        /// Requested shape
        shape: Vec<usize>,
    },
}
