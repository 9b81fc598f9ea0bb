use serde::{Deserialize, Serialize};

use crate::schema::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub bot: bool,
}

impl User {
    pub fn new(id: impl Into<Snowflake>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            global_name: None,
            bot: false,
        }
    }

    /// Placeholder returned by user targets read without a bound invocation.
    pub fn empty() -> Self {
        Self::new(0, "")
    }

    pub fn display_name(&self) -> &str {
        self.global_name.as_deref().unwrap_or(&self.username)
    }
}

/// A guild member as delivered alongside an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionMember {
    pub user: User,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub role_ids: Vec<Snowflake>,
    #[serde(default)]
    pub joined_at: Option<String>,
}

impl InteractionMember {
    pub fn new(user: User) -> Self {
        Self {
            user,
            nickname: None,
            role_ids: Vec::new(),
            joined_at: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .unwrap_or_else(|| self.user.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub author: User,
    #[serde(default)]
    pub content: String,
}

impl Message {
    /// Placeholder returned by message targets read without a bound invocation.
    pub fn empty() -> Self {
        Self {
            id: Snowflake::default(),
            channel_id: Snowflake::default(),
            author: User::empty(),
            content: String::new(),
        }
    }
}

/// The target of a user context-menu command. Guild invocations carry the
/// richer member record; everywhere else only the plain user is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedUser {
    Member(InteractionMember),
    User(User),
}

impl ResolvedUser {
    pub fn user(&self) -> &User {
        match self {
            Self::Member(member) => &member.user,
            Self::User(user) => user,
        }
    }

    pub fn member(&self) -> Option<&InteractionMember> {
        match self {
            Self::Member(member) => Some(member),
            Self::User(_) => None,
        }
    }

    pub fn id(&self) -> Snowflake {
        self.user().id
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Member(member) => member.display_name(),
            Self::User(user) => user.display_name(),
        }
    }
}
