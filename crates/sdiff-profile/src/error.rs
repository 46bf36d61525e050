use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("could not decode profile payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("change set could not be applied: {0}")]
    Apply(#[from] sdiff_engine::ApplyError),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
