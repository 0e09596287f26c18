pub mod deferral;
pub mod error;
pub mod interaction;
pub mod interaction_model;
pub mod variant;

pub use deferral::DeferralConfig;
pub use error::InteractionError;
pub use interaction::{DeferReplyOptions, DeferrableInteraction, InteractionKind};
pub use interaction_model::{ComponentHandler, InteractionModel};
pub use variant::ComponentVariant;
