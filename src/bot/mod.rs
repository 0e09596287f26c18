mod command_registry;
mod event_handler;
mod handler;

pub mod component_reply;
pub mod component_router;
pub mod helpers;
pub mod init;

pub use component_reply::ComponentReply;
pub use handler::Handler;
