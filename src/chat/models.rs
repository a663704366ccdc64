//! Message records as received from the history service and as handed
//! to the chat UI.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_ASSISTANT_AVATAR: &str =
    "https://cube.elemecdn.com/0/88/03b0d39583f48206768a7534e55bcpng.png";
pub const DEFAULT_USER_AVATAR: &str = "https://avatars.githubusercontent.com/u/76239030?v=4";
pub const AVATAR_SIZE: &str = "32px";

/// Who sent a message. The history service may use labels other than
/// `user` and `assistant` (e.g. `system`, `tool`) and all of them are
/// treated as the assistant.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn from_label(label: &str) -> Self {
        if label == "user" {
            Role::User
        } else {
            Role::Assistant
        }
    }
}

/// A message row exactly as the history service returns it. Fields
/// that aren't used to build the view are kept in `extra` and passed
/// through to the UI untouched.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawMessage {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawMessage {
    pub fn new(id: &str, role: &str, content: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            role: role.to_string(),
            content: content.map(|s| s.to_string()),
            extra: Map::new(),
        }
    }

    pub fn role(&self) -> Role {
        Role::from_label(&self.role)
    }
}

// Ids come back as JSON numbers from some backends and strings from
// others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Unsigned(n) => n.to_string(),
        Id::Signed(n) => n.to_string(),
    })
}

/// Role as shown in the UI. Assistant messages are rendered with the
/// `system` bubble style.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisplayRole {
    User,
    System,
}

impl DisplayRole {
    pub fn placement(&self) -> Placement {
        match self {
            DisplayRole::User => Placement::End,
            DisplayRole::System => Placement::Start,
        }
    }
}

impl From<Role> for DisplayRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => DisplayRole::User,
            Role::Assistant => DisplayRole::System,
        }
    }
}

/// Which side of the conversation a bubble is aligned to.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Start,
    End,
}

/// State of the reasoning panel in the UI. History is never streamed
/// so built messages are always `End`.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingStatus {
    Start,
    Thinking,
    End,
    Error,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewMessage {
    pub id: String,
    pub key: String,
    pub role: DisplayRole,
    pub placement: Placement,
    pub is_markdown: bool,
    pub avatar: String,
    pub avatar_size: String,
    pub typing: bool,
    pub reasoning_content: String,
    pub thinking_status: ThinkingStatus,
    pub content: String,
    pub think_collapsed: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ViewMessage {
    /// Field names set by the builder. Passthrough fields with the same
    /// name are dropped so they can't shadow the view metadata.
    pub const RESERVED_FIELDS: [&'static str; 12] = [
        "id",
        "key",
        "role",
        "placement",
        "isMarkdown",
        "avatar",
        "avatarSize",
        "typing",
        "reasoningContent",
        "thinkingStatus",
        "content",
        "thinkCollapsed",
    ];
}
