use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Account, Media};
use crate::dao::BaseObject;
use crate::types::LocalizedString;

/// A conversation between accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Chat {
    #[serde(flatten)]
    pub base: BaseObject,
    pub messages: Vec<ChatMessage>,
    pub participants: Vec<Account>,
}

impl Chat {
    /// Append `message`, pointing its `chat_id` at this chat.
    pub fn add_message(&mut self, mut message: ChatMessage) {
        message.chat_id.clone_from(&self.base.id);
        self.messages.push(message);
    }

    #[must_use]
    pub fn has_participant(&self, account_id: &str) -> bool {
        self.participants.iter().any(|account| account.base.id == account_id)
    }
}

crate::impl_dao!(Chat, "chat", |this, r| {
    r.read("messages", &mut this.messages);
    r.read("participants", &mut this.participants);
});

/// One message in a [`Chat`]. `chat_id` refers back to the owning chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(flatten)]
    pub base: BaseObject,
    pub body: LocalizedString,
    pub chat_id: String,
    pub media: Option<Box<Media>>,
}

crate::impl_dao!(ChatMessage, "chat_message", |this, r| {
    r.read("body", &mut this.body);
    r.read_reference("chatId", "chat", &mut this.chat_id);
    r.read("media", &mut this.media);
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::Dao;

    #[test]
    fn add_message_stamps_chat_id() {
        let mut chat = Chat::with_id("chat-1");
        chat.add_message(ChatMessage::with_id("msg-1"));
        assert_eq!(chat.messages[0].chat_id, "chat-1");
    }
}
