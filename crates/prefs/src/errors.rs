use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
