use async_trait::async_trait;
use serde_json::{json, Value};

use crate::command::CommandHandler;
use crate::core::CommandError;
use crate::define_command;
use crate::interaction::{Context, ResolvedUser};
use crate::options::ContextMenuOption;

define_command! {
    /// User context-menu command describing the targeted user.
    pub struct UserInfo(User, "User Info", "Show details about a user") {
        target: ResolvedUser = ContextMenuOption::user(),
    }
}

#[async_trait]
impl CommandHandler for UserInfo {
    async fn invoke(&self, _context: &Context) -> Result<Value, CommandError> {
        let target = self.target()?;
        let user = target.user();

        let mut lines = vec![format!("{} ({})", target.display_name(), user.id)];
        if user.bot {
            lines.push("Bot account".to_string());
        }
        if let Some(member) = target.member() {
            lines.push(format!("Roles: {}", member.role_ids.len()));
            if let Some(joined_at) = &member.joined_at {
                lines.push(format!("Joined: {joined_at}"));
            }
        }

        Ok(json!({
            "content": lines.join("\n"),
            "user": target,
        }))
    }
}
