use thiserror::Error;

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("Discord error: {0}")]
    /// Raised by the serenity HTTP client while acknowledging or answering an interaction.
    Discord(#[from] serenity::Error),
    #[error("Interaction was already acknowledged")]
    AlreadyAcknowledged,
}
