use crate::commands;
use serenity::all::CreateCommand;

/// Get all slash commands to register
pub fn get_all_commands() -> Vec<CreateCommand> {
    vec![commands::components::register()]
}
