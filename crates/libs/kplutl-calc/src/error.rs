/// Errors reported at the construction boundaries of the containers.
///
/// Arithmetic on already constructed values never fails, dimension agreement
/// there is checked by the type system.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Wrong number of initializer values.
    #[error("Dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        /// Count the container requires.
        expected: usize,
        /// Count that was supplied.
        actual: usize,
    },

    /// A nested row initializer is longer than the row it fills.
    #[error("Row {row} has {len} elements but the matrix has only {cols} columns")]
    RowTooLong {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Number of columns of the matrix.
        cols: usize,
    },

    /// Input outside of the domain of a checked operation.
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
}
