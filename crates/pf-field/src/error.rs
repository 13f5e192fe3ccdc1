use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("obstacle grid dimensions do not match the computed {expected_rows}×{expected_cols} grid")]
    DimensionMismatch {
        expected_rows: usize,
        expected_cols: usize,
    },
}

pub type FieldResult<T> = Result<T, FieldError>;
