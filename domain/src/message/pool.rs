//! Append-only, turn-indexed message store
//!
//! The pool owns every [`Message`] of a scene. The orchestrator never holds
//! messages outside it. Durable mirroring to the transcript log is the
//! engine's responsibility: each in-memory append is paired with exactly one
//! log record, so the log mirrors the sequence append-for-append.

use super::Message;
use crate::core::error::PoolError;
use crate::core::name::AgentName;

/// Ordered, append-only sequence of scene messages.
#[derive(Debug, Default, Clone)]
pub struct MessagePool {
    messages: Vec<Message>,
}

impl MessagePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, preserving insertion order. No deduplication.
    pub fn append(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        // Just pushed, cannot be empty
        self.messages.last().expect("pool non-empty after push")
    }

    /// Messages `agent` may observe, in insertion order.
    ///
    /// Filtered to `turn` exactly, unless `include_history` is set, in which
    /// case all turns up to and including `turn` are returned.
    pub fn visible_messages(
        &self,
        agent: &AgentName,
        turn: u64,
        include_history: bool,
    ) -> Vec<&Message> {
        self.messages
            .iter()
            .filter(|m| if include_history { m.turn <= turn } else { m.turn == turn })
            .filter(|m| m.visible_to(agent))
            .collect()
    }

    /// The observation text handed to a player: one `author: content` line
    /// per visible message, in insertion order.
    pub fn observation(&self, agent: &AgentName, turn: u64, include_history: bool) -> String {
        self.visible_messages(agent, turn, include_history)
            .iter()
            .map(|m| format!("{}: {}", m.author, m.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The most recently appended message.
    pub fn last_message(&self) -> Result<&Message, PoolError> {
        self.messages.last().ok_or(PoolError::Empty)
    }

    /// Rewrite the content of the pool's last message in place, marking it
    /// compressed. Used at rollover to collapse a turn's final output into a
    /// day summary. Pool length is unchanged; no other message is touched.
    pub fn compress_last_turn(&mut self, summary: String) -> Result<(), PoolError> {
        let last = self.messages.last_mut().ok_or(PoolError::Empty)?;
        last.content = summary;
        last.compressed = true;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Full transcript in insertion order (read-only).
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> AgentName {
        AgentName::new(s)
    }

    fn seeded_pool() -> MessagePool {
        let mut pool = MessagePool::new();
        pool.append(Message::system("prompt for a", name("a"), 0));
        pool.append(Message::from_agent(name("a"), "a says", 0));
        pool.append(Message::broadcast("everyone", 0));
        pool.append(Message::system("prompt for b", name("b"), 0));
        pool.append(Message::system("a turn 1", name("a"), 1));
        pool
    }

    #[test]
    fn test_visible_messages_filters_by_target_and_turn() {
        let pool = seeded_pool();
        let visible = pool.visible_messages(&name("a"), 0, false);
        let contents: Vec<_> = visible.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["prompt for a", "a says", "everyone"]);
    }

    #[test]
    fn test_visible_messages_history_includes_earlier_turns() {
        let pool = seeded_pool();
        let visible = pool.visible_messages(&name("a"), 1, true);
        let contents: Vec<_> = visible.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec!["prompt for a", "a says", "everyone", "a turn 1"]
        );
    }

    #[test]
    fn test_visible_messages_without_history_excludes_other_turns() {
        let pool = seeded_pool();
        let visible = pool.visible_messages(&name("a"), 1, false);
        let contents: Vec<_> = visible.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["a turn 1"]);
    }

    #[test]
    fn test_observation_joins_author_and_content() {
        let pool = seeded_pool();
        let obs = pool.observation(&name("b"), 0, false);
        assert_eq!(obs, "System: everyone\nSystem: prompt for b");
    }

    #[test]
    fn test_last_message_on_empty_pool() {
        let pool = MessagePool::new();
        assert_eq!(pool.last_message().unwrap_err(), PoolError::Empty);
    }

    #[test]
    fn test_compress_last_turn_rewrites_only_last() {
        let mut pool = seeded_pool();
        let before = pool.len();
        pool.compress_last_turn("Day0 summary: done".to_string()).unwrap();

        assert_eq!(pool.len(), before);
        let last = pool.last_message().unwrap();
        assert_eq!(last.content, "Day0 summary: done");
        assert!(last.compressed);
        // Earlier messages untouched
        assert_eq!(pool.messages()[0].content, "prompt for a");
        assert!(!pool.messages()[0].compressed);
    }

    #[test]
    fn test_compress_on_empty_pool_fails() {
        let mut pool = MessagePool::new();
        assert_eq!(
            pool.compress_last_turn("x".to_string()).unwrap_err(),
            PoolError::Empty
        );
    }
}
