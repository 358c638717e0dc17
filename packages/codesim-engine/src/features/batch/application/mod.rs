//! Batch Application Layer (UseCase)

mod compare_batch;

pub use compare_batch::{CompareBatchInput, CompareBatchUseCase, CompareBatchUseCaseImpl};
