use thiserror::Error;

pub type TrainingResult<T> = std::result::Result<T, TrainingError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrainingError {
    #[error("invalid training parameters: {0}")]
    InvalidParams(String),

    #[error("cannot parse {kind} from '{input}'")]
    Parse { kind: &'static str, input: String },
}
