use crate::model::{DeferReplyOptions, DeferrableInteraction, InteractionError, InteractionKind};
use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EditInteractionResponse,
    Http,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Which Discord endpoint answers an interaction in its current state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// First acknowledgement: the initial interaction response
    Create,
    /// Fill in the placeholder left by a deferral
    EditDeferred,
    /// Anything after the placeholder was answered
    Followup,
}

impl ResponseKind {
    /// Pick the endpoint for an interaction that someone already acknowledged
    pub fn for_acknowledged(deferred: bool, replied: bool) -> Self {
        if deferred && !replied {
            ResponseKind::EditDeferred
        } else {
            ResponseKind::Followup
        }
    }
}

/// A serenity component interaction that remembers whether it was answered.
///
/// Discord rejects a second initial response, so every reply goes through
/// [`reply`](Self::reply), which picks the right endpoint for the current state.
/// `acknowledged` is claimed before the initial response or the deferral goes
/// out, so only one of them is ever sent.
pub struct ComponentReply {
    http: Arc<Http>,
    interaction: ComponentInteraction,
    acknowledged: AtomicBool,
    replied: AtomicBool,
    deferred: AtomicBool,
}

impl ComponentReply {
    pub fn new(http: Arc<Http>, interaction: ComponentInteraction) -> Self {
        Self {
            http,
            interaction,
            acknowledged: AtomicBool::new(false),
            replied: AtomicBool::new(false),
            deferred: AtomicBool::new(false),
        }
    }

    pub fn interaction(&self) -> &ComponentInteraction {
        &self.interaction
    }

    /// Values picked in a select menu; empty for buttons
    pub fn selected_values(&self) -> Vec<String> {
        match &self.interaction.data.kind {
            ComponentInteractionDataKind::StringSelect { values } => values.clone(),
            ComponentInteractionDataKind::UserSelect { values } => {
                values.iter().map(|id| id.to_string()).collect()
            }
            ComponentInteractionDataKind::RoleSelect { values } => {
                values.iter().map(|id| id.to_string()).collect()
            }
            ComponentInteractionDataKind::MentionableSelect { values } => {
                values.iter().map(|id| id.to_string()).collect()
            }
            ComponentInteractionDataKind::ChannelSelect { values } => {
                values.iter().map(|id| id.to_string()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Answer with plain text
    pub async fn reply(
        &self,
        content: impl Into<String>,
        ephemeral: bool,
    ) -> Result<(), InteractionError> {
        self.send(Some(content.into()), Vec::new(), ephemeral).await
    }

    /// Answer with a single embed
    pub async fn reply_embed(
        &self,
        embed: CreateEmbed,
        ephemeral: bool,
    ) -> Result<(), InteractionError> {
        self.send(None, vec![embed], ephemeral).await
    }

    /// Take the initial-response slot; `false` if a reply or deferral already has it
    fn claim_initial_response(&self) -> bool {
        !self.acknowledged.swap(true, Ordering::SeqCst)
    }

    /// A deferred interaction gets its placeholder edited (keeping the deferral's
    /// visibility), an already answered one gets a follow-up.
    async fn send(
        &self,
        content: Option<String>,
        embeds: Vec<CreateEmbed>,
        ephemeral: bool,
    ) -> Result<(), InteractionError> {
        let kind = if self.claim_initial_response() {
            self.replied.store(true, Ordering::SeqCst);
            ResponseKind::Create
        } else {
            ResponseKind::for_acknowledged(self.deferred(), self.replied())
        };

        let result = match kind {
            ResponseKind::Create => {
                let mut message = CreateInteractionResponseMessage::new()
                    .embeds(embeds)
                    .ephemeral(ephemeral);
                if let Some(content) = content {
                    message = message.content(content);
                }
                self.interaction
                    .create_response(
                        self.http.as_ref(),
                        CreateInteractionResponse::Message(message),
                    )
                    .await
            }
            ResponseKind::EditDeferred => {
                let mut edit = EditInteractionResponse::new().embeds(embeds);
                if let Some(content) = content {
                    edit = edit.content(content);
                }
                self.interaction
                    .edit_response(self.http.as_ref(), edit)
                    .await
                    .map(|_| ())
            }
            ResponseKind::Followup => {
                let mut followup = CreateInteractionResponseFollowup::new()
                    .embeds(embeds)
                    .ephemeral(ephemeral);
                if let Some(content) = content {
                    followup = followup.content(content);
                }
                self.interaction
                    .create_followup(self.http.as_ref(), followup)
                    .await
                    .map(|_| ())
            }
        };

        if let Err(e) = result {
            if kind == ResponseKind::Create {
                self.replied.store(false, Ordering::SeqCst);
                self.acknowledged.store(false, Ordering::SeqCst);
            }
            return Err(e.into());
        }

        self.replied.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[serenity::async_trait]
impl DeferrableInteraction for ComponentReply {
    fn custom_id(&self) -> &str {
        &self.interaction.data.custom_id
    }

    fn kind(&self) -> InteractionKind {
        InteractionKind::from(&self.interaction.data.kind)
    }

    fn replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }

    fn deferred(&self) -> bool {
        self.deferred.load(Ordering::SeqCst)
    }

    async fn defer_reply(&self, options: DeferReplyOptions) -> Result<(), InteractionError> {
        if self.replied() || !self.claim_initial_response() {
            return Err(InteractionError::AlreadyAcknowledged);
        }
        self.deferred.store(true, Ordering::SeqCst);

        let result = if options.ephemeral {
            self.interaction.defer_ephemeral(self.http.as_ref()).await
        } else {
            self.interaction.defer(self.http.as_ref()).await
        };

        if let Err(e) = result {
            self.deferred.store(false, Ordering::SeqCst);
            self.acknowledged.store(false, Ordering::SeqCst);
            return Err(e.into());
        }

        Ok(())
    }
}
