use super::models::{
    AVATAR_SIZE, DEFAULT_ASSISTANT_AVATAR, DisplayRole, RawMessage, Role, ThinkingStatus,
    ViewMessage,
};
use super::reasoning::{extract_final, extract_reasoning};

/// Display settings that don't depend on who is logged in.
#[derive(Clone, Debug)]
pub struct ViewOptions {
    pub assistant_avatar: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            assistant_avatar: DEFAULT_ASSISTANT_AVATAR.to_string(),
        }
    }
}

/// Builds the view record for a single history row using the default
/// assistant avatar.
pub fn build(raw: &RawMessage, current_user_avatar: &str) -> ViewMessage {
    build_with(raw, current_user_avatar, &ViewOptions::default())
}

pub fn build_with(raw: &RawMessage, current_user_avatar: &str, opts: &ViewOptions) -> ViewMessage {
    let is_user = raw.role() == Role::User;
    let raw_content = raw.content.as_deref().unwrap_or_default();

    // Users don't produce reasoning so there is nothing to extract
    let reasoning_content = if is_user {
        String::new()
    } else {
        extract_reasoning(raw_content)
    };
    let content = extract_final(raw_content);

    let role = DisplayRole::from(raw.role());
    let avatar = if is_user {
        current_user_avatar.to_string()
    } else {
        opts.assistant_avatar.clone()
    };

    let mut extra = raw.extra.clone();
    extra.retain(|k, _| !ViewMessage::RESERVED_FIELDS.contains(&k.as_str()));

    ViewMessage {
        id: raw.id.clone(),
        key: raw.id.clone(),
        role,
        placement: role.placement(),
        is_markdown: !is_user,
        avatar,
        avatar_size: AVATAR_SIZE.to_string(),
        typing: false,
        reasoning_content,
        thinking_status: ThinkingStatus::End,
        content,
        think_collapsed: false,
        extra,
    }
}

/// Builds view records for every row, keeping the order of the input.
pub fn build_all(
    rows: &[RawMessage],
    current_user_avatar: &str,
    opts: &ViewOptions,
) -> Vec<ViewMessage> {
    rows.iter()
        .map(|row| build_with(row, current_user_avatar, opts))
        .collect()
}
