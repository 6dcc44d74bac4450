//! Mention detection for group chats.
//!
//! Resolves mention entities against the bot's own username instead of
//! scanning the raw text for an `@username` substring, so a message
//! that merely contains the username inside a longer word or mentions
//! a different bot does not count.

use teloxide::types::{Message, MessageEntity, MessageEntityKind};

/// True when `msg` carries a mention entity that names `username`.
pub fn is_bot_mentioned(msg: &Message, username: &str) -> bool {
    match (msg.text(), msg.entities()) {
        (Some(text), Some(entities)) => mentions_username(text, entities, username),
        _ => false,
    }
}

/// Entity offsets are in UTF-16 code units, per the Bot API; the text
/// must be re-encoded before slicing.
pub fn mentions_username(text: &str, entities: &[MessageEntity], username: &str) -> bool {
    let expected = format!("@{}", username.trim_start_matches('@')).to_lowercase();
    let units: Vec<u16> = text.encode_utf16().collect();

    entities
        .iter()
        .filter(|entity| entity.kind == MessageEntityKind::Mention)
        .filter_map(|entity| units.get(entity.offset..entity.offset + entity.length))
        .filter_map(|slice| String::from_utf16(slice).ok())
        .any(|mention| mention.to_lowercase() == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(offset: usize, length: usize) -> MessageEntity {
        MessageEntity {
            kind: MessageEntityKind::Mention,
            offset,
            length,
        }
    }

    #[test]
    fn test_detects_own_mention() {
        let text = "hey @leechbot please";
        assert!(mentions_username(text, &[mention(4, 9)], "leechbot"));
        assert!(mentions_username(text, &[mention(4, 9)], "@leechbot"));
    }

    #[test]
    fn test_ignores_other_bots() {
        let text = "hey @otherbot please";
        assert!(!mentions_username(text, &[mention(4, 9)], "leechbot"));
    }

    #[test]
    fn test_substring_without_entity_does_not_count() {
        // The raw-text heuristic this replaces would match here.
        let text = "read about @leechbotfans today";
        assert!(!mentions_username(text, &[mention(11, 13)], "leechbot"));
        assert!(!mentions_username("plain leechbot text", &[], "leechbot"));
    }

    #[test]
    fn test_utf16_offsets_with_non_ascii_prefix() {
        // "héllo 🎉 " is 9 UTF-16 units before the mention.
        let text = "héllo 🎉 @leechbot";
        assert!(mentions_username(text, &[mention(9, 9)], "leechbot"));
    }

    #[test]
    fn test_case_insensitive_match() {
        let text = "@LeechBot";
        assert!(mentions_username(text, &[mention(0, 9)], "leechbot"));
    }

    #[test]
    fn test_out_of_range_entity_is_ignored() {
        let text = "@bot";
        assert!(!mentions_username(text, &[mention(2, 50)], "bot"));
    }
}
