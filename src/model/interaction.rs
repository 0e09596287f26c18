use crate::model::InteractionError;
use serenity::all::ComponentInteractionDataKind;

/// The subtype of a received component interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Button,
    StringSelect,
    UserSelect,
    RoleSelect,
    MentionableSelect,
    ChannelSelect,
    Unknown,
}

impl From<&ComponentInteractionDataKind> for InteractionKind {
    fn from(kind: &ComponentInteractionDataKind) -> Self {
        match kind {
            ComponentInteractionDataKind::Button => InteractionKind::Button,
            ComponentInteractionDataKind::StringSelect { .. } => InteractionKind::StringSelect,
            ComponentInteractionDataKind::UserSelect { .. } => InteractionKind::UserSelect,
            ComponentInteractionDataKind::RoleSelect { .. } => InteractionKind::RoleSelect,
            ComponentInteractionDataKind::MentionableSelect { .. } => {
                InteractionKind::MentionableSelect
            }
            ComponentInteractionDataKind::ChannelSelect { .. } => InteractionKind::ChannelSelect,
            _ => InteractionKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferReplyOptions {
    pub ephemeral: bool,
}

/// What the deferral timer and the router need to know about an interaction.
///
/// Implementations must be shareable across tasks: the deferral timer holds a
/// clone of the interaction while the handler keeps working with it.
#[serenity::async_trait]
pub trait DeferrableInteraction: Send + Sync + 'static {
    fn custom_id(&self) -> &str;

    fn kind(&self) -> InteractionKind;

    fn replied(&self) -> bool;

    fn deferred(&self) -> bool;

    /// Acknowledge the interaction without a final response yet
    async fn defer_reply(&self, options: DeferReplyOptions) -> Result<(), InteractionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_button() {
        assert_eq!(
            InteractionKind::from(&ComponentInteractionDataKind::Button),
            InteractionKind::Button
        );
    }

    #[test]
    fn test_kind_from_string_select() {
        let kind = ComponentInteractionDataKind::StringSelect {
            values: vec!["red".to_string()],
        };
        assert_eq!(InteractionKind::from(&kind), InteractionKind::StringSelect);
    }

    #[test]
    fn test_kind_from_unknown() {
        assert_eq!(
            InteractionKind::from(&ComponentInteractionDataKind::Unknown(42)),
            InteractionKind::Unknown
        );
    }
}
