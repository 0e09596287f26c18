use std::time::Duration;

/// Delay used by the legacy select menu model when nothing else is given
pub const DEFAULT_DEFER_DELAY: Duration = Duration::from_millis(2000);

/// When (and how) to defer a reply that the handler hasn't sent yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeferralConfig {
    delay: Option<Duration>,
    ephemeral: bool,
}

impl DeferralConfig {
    /// Never defer
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Defer after `delay`; a zero delay disables deferral
    pub fn after(delay: Duration) -> Self {
        Self {
            delay: Some(delay).filter(|d| !d.is_zero()),
            ephemeral: false,
        }
    }

    pub fn after_millis(millis: u64) -> Self {
        Self::after(Duration::from_millis(millis))
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    pub fn delay(&self) -> Option<Duration> {
        self.delay
    }

    pub fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }
}
