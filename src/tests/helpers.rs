use crate::model::{
    ComponentHandler, DeferReplyOptions, DeferrableInteraction, InteractionError,
    InteractionKind, InteractionModel,
};
use crate::utils::logging::{ExceptionLogger, Severity};
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory interaction that records every deferral attempt
pub struct MockInteraction {
    custom_id: String,
    kind: InteractionKind,
    pub replied: AtomicBool,
    pub deferred: AtomicBool,
    fail_defer: bool,
    defer_calls: Mutex<Vec<DeferReplyOptions>>,
}

impl MockInteraction {
    pub fn new(custom_id: &str, kind: InteractionKind) -> Self {
        Self {
            custom_id: custom_id.to_string(),
            kind,
            replied: AtomicBool::new(false),
            deferred: AtomicBool::new(false),
            fail_defer: false,
            defer_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(custom_id: &str, kind: InteractionKind) -> Self {
        Self {
            fail_defer: true,
            ..Self::new(custom_id, kind)
        }
    }

    pub fn defer_calls(&self) -> Vec<DeferReplyOptions> {
        self.defer_calls.lock().unwrap().clone()
    }
}

#[serenity::async_trait]
impl DeferrableInteraction for MockInteraction {
    fn custom_id(&self) -> &str {
        &self.custom_id
    }

    fn kind(&self) -> InteractionKind {
        self.kind
    }

    fn replied(&self) -> bool {
        self.replied.load(Ordering::SeqCst)
    }

    fn deferred(&self) -> bool {
        self.deferred.load(Ordering::SeqCst)
    }

    async fn defer_reply(&self, options: DeferReplyOptions) -> Result<(), InteractionError> {
        self.defer_calls.lock().unwrap().push(options);

        if self.fail_defer {
            return Err(InteractionError::AlreadyAcknowledged);
        }

        self.deferred.store(true, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(String, Severity)>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(String, Severity)> {
        self.entries.lock().unwrap().clone()
    }
}

impl ExceptionLogger for RecordingLogger {
    fn exception(&self, message: &str, _error: &dyn Display, severity: Severity) {
        self.entries
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// Handler that counts its calls and optionally answers or fails
pub struct RecordingHandler {
    model: InteractionModel,
    calls: AtomicUsize,
    reply_immediately: bool,
    fail: bool,
}

impl RecordingHandler {
    pub fn new(model: InteractionModel) -> Self {
        Self {
            model,
            calls: AtomicUsize::new(0),
            reply_immediately: false,
            fail: false,
        }
    }

    pub fn replying(model: InteractionModel) -> Self {
        Self {
            reply_immediately: true,
            ..Self::new(model)
        }
    }

    pub fn failing(model: InteractionModel) -> Self {
        Self {
            fail: true,
            ..Self::new(model)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[serenity::async_trait]
impl ComponentHandler<MockInteraction> for RecordingHandler {
    fn model(&self) -> &InteractionModel {
        &self.model
    }

    async fn handle(&self, interaction: Arc<MockInteraction>) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            anyhow::bail!("handler failed");
        }

        if self.reply_immediately {
            interaction.replied.store(true, Ordering::SeqCst);
        }

        Ok(())
    }
}
