use thiserror::Error;

/// Gateway failure.
///
/// Callers of the gateway never see these: every variant is recovered
/// locally by substituting an empty or absent result. The variants exist so
/// the logs can tell a transport problem from a reply the model got wrong.
#[derive(Debug, Error)]
pub enum AiError {
    /// Client misconfiguration (missing credential, bad base URL).
    #[error("gateway configuration error: {0}")]
    Config(String),

    /// The request never produced a usable HTTP response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("model endpoint returned status {status}: {body}")]
    Api { status: u16, body: String },

    /// The model produced no text at all.
    #[error("model returned no text")]
    EmptyReply,

    /// The reply text was not valid JSON for the expected shape.
    #[error("malformed model reply: {0}")]
    MalformedReply(String),

    /// The reply parsed but violates the declared output schema.
    #[error("reply violates the declared schema: {0}")]
    SchemaViolation(String),

    /// The request payload itself could not be serialized.
    #[error("failed to serialize prompt payload: {0}")]
    PromptPayload(String),
}
