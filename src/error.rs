#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("log file error: {0}")]
    Log(#[from] tracing_appender::rolling::InitError),
    #[error("{0}")]
    Other(String),
}
