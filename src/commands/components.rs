use crate::components::color_picker::{COLOR_PICKER_ID, COLORS};
use crate::components::ping::PING_BUTTON_ID;
use serenity::all::{
    ButtonStyle, CommandInteraction, Context, CreateActionRow, CreateButton, CreateCommand,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption,
};

pub async fn run(context: &Context, interaction: &CommandInteraction) -> anyhow::Result<()> {
    let response = CreateInteractionResponseMessage::new()
        .content("Try the components below:")
        .components(demo_components());

    interaction
        .create_response(context, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

fn demo_components() -> Vec<CreateActionRow> {
    let options = COLORS
        .iter()
        .map(|(label, value)| CreateSelectMenuOption::new(*label, *value))
        .collect();

    let select = CreateSelectMenu::new(COLOR_PICKER_ID, CreateSelectMenuKind::String { options })
        .placeholder("Pick some colors")
        .min_values(1)
        .max_values(COLORS.len() as u8);

    vec![
        CreateActionRow::Buttons(vec![
            CreateButton::new(PING_BUTTON_ID)
                .label("Ping")
                .style(ButtonStyle::Primary),
        ]),
        CreateActionRow::SelectMenu(select),
    ]
}

pub fn register() -> CreateCommand {
    CreateCommand::new("components").description("Post a message with demo buttons and menus")
}
