use crate::model::InteractionKind;

/// Which kind of component a handler is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentVariant {
    Button,
    StringSelectMenu,
    UserSelectMenu,
    RoleSelectMenu,
    MentionableSelectMenu,
    ChannelSelectMenu,
}

impl ComponentVariant {
    /// Whether an interaction of `kind` satisfies this variant's subtype check
    pub fn accepts(self, kind: InteractionKind) -> bool {
        matches!(
            (self, kind),
            (ComponentVariant::Button, InteractionKind::Button)
                | (ComponentVariant::StringSelectMenu, InteractionKind::StringSelect)
                | (ComponentVariant::UserSelectMenu, InteractionKind::UserSelect)
                | (ComponentVariant::RoleSelectMenu, InteractionKind::RoleSelect)
                | (
                    ComponentVariant::MentionableSelectMenu,
                    InteractionKind::MentionableSelect
                )
                | (ComponentVariant::ChannelSelectMenu, InteractionKind::ChannelSelect)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [InteractionKind; 7] = [
        InteractionKind::Button,
        InteractionKind::StringSelect,
        InteractionKind::UserSelect,
        InteractionKind::RoleSelect,
        InteractionKind::MentionableSelect,
        InteractionKind::ChannelSelect,
        InteractionKind::Unknown,
    ];

    #[test]
    fn test_each_variant_accepts_exactly_one_kind() {
        for variant in [
            ComponentVariant::Button,
            ComponentVariant::StringSelectMenu,
            ComponentVariant::UserSelectMenu,
            ComponentVariant::RoleSelectMenu,
            ComponentVariant::MentionableSelectMenu,
            ComponentVariant::ChannelSelectMenu,
        ] {
            let accepted = ALL_KINDS.iter().filter(|k| variant.accepts(**k)).count();
            assert_eq!(accepted, 1, "{variant:?} accepts {accepted} kinds");
        }
    }

    #[test]
    fn test_unknown_is_never_accepted() {
        assert!(!ComponentVariant::Button.accepts(InteractionKind::Unknown));
        assert!(!ComponentVariant::StringSelectMenu.accepts(InteractionKind::Unknown));
    }

    #[test]
    fn test_button_rejects_select() {
        assert!(!ComponentVariant::Button.accepts(InteractionKind::StringSelect));
        assert!(!ComponentVariant::UserSelectMenu.accepts(InteractionKind::Button));
    }
}
