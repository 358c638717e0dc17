//! Similarity Application Layer (UseCase)

mod score_pair;

pub use score_pair::{ScorePairInput, ScorePairUseCase, ScorePairUseCaseImpl};
