#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("existence query for `{full_name}` failed: {message}")]
    Request { full_name: String, message: String },
    #[error("existence query for `{full_name}` returned status {status}")]
    Status { full_name: String, status: u16 },
    #[error("existence query for `{full_name}` returned an invalid body: {message}")]
    Decode { full_name: String, message: String },
}

impl OracleError {
    pub fn full_name(&self) -> &str {
        match self {
            Self::Request { full_name, .. }
            | Self::Status { full_name, .. }
            | Self::Decode { full_name, .. } => full_name,
        }
    }
}
