//! AI detection application layer (UseCase)

mod classify;

pub use classify::{ClassifyUseCase, ClassifyUseCaseImpl};
