use crate::bot::ComponentReply;
use crate::bot::component_router::ComponentRouter;
use crate::components;
use crate::utils::config::Settings;

pub struct Handler {
    pub router: ComponentRouter<ComponentReply>,
}

impl Handler {
    pub fn new(settings: &Settings) -> Self {
        Handler {
            router: components::build_router(settings.deferral),
        }
    }
}
