pub mod color_picker;
pub mod ping;

use crate::bot::ComponentReply;
use crate::bot::component_router::ComponentRouter;
use crate::model::DeferralConfig;
use std::sync::Arc;

/// Build the router with every component handler the bot ships with
pub fn build_router(deferral: DeferralConfig) -> ComponentRouter<ComponentReply> {
    ComponentRouter::<ComponentReply>::new()
        .register(Arc::new(ping::PingButton::new(deferral)))
        .register(Arc::new(color_picker::ColorPicker::new(deferral)))
}
