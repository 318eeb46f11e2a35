// Decides which channel messages get cleaned up.
//
// Any message starting with the command prefix is deleted so channels don't
// fill up with `-build ...` invocations. Whether the bot's own prefixed
// messages are included is a configuration choice.
//
// NO Discord dependencies here - the event handler passes in plain values.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    /// This bot.
    OwnBot,
    /// Any user or other bot.
    Other,
}

pub struct CommandModerator {
    prefix: char,
    include_own_messages: bool,
}

impl CommandModerator {
    pub fn new(prefix: char, include_own_messages: bool) -> Self {
        Self {
            prefix,
            include_own_messages,
        }
    }

    pub fn should_delete(&self, content: &str, author: Author) -> bool {
        if author == Author::OwnBot && !self.include_own_messages {
            return false;
        }

        // Empty content (embeds, attachments) has no first character.
        content.chars().next() == Some(self.prefix)
    }
}
