/// Domain errors shared by the storage and HTTP layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// User input broke a domain rule; reported to the client as 400.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A setting could not be parsed. Fatal at startup.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
