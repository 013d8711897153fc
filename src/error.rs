pub type FramespanResult<T> = Result<T, FramespanError>;

#[derive(thiserror::Error, Debug)]
pub enum FramespanError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramespanError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
