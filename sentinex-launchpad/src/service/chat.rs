//! Chat service
//!
//! One request, one reply: the prompt goes to the agent's chat endpoint and
//! the reply is classified into a single transcript entry.

use sentinex_core::domain::reply::ChatReply;
use sentinex_core::domain::transcript::TranscriptEntry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info};

use crate::messages;
use crate::repository::ChatRepository;
use crate::service::busy::BusyFlag;
use crate::service::transcript::{NullSink, TranscriptSink, TranscriptStore};

/// How a call to [`ChatService::send`] ended
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    /// Blank prompt or another request in flight
    Skipped,
    Replied(ChatReply),
    Failed,
}

pub struct ChatService {
    repository: Arc<dyn ChatRepository>,
    transcript: Mutex<TranscriptStore>,
    busy: BusyFlag,
}

impl ChatService {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self::with_sink(repository, Arc::new(NullSink))
    }

    pub fn with_sink(repository: Arc<dyn ChatRepository>, sink: Arc<dyn TranscriptSink>) -> Self {
        Self {
            repository,
            transcript: Mutex::new(TranscriptStore::with_sink(messages::CHAT_GREETING, sink)),
            busy: BusyFlag::default(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        lock(&self.transcript).entries().to_vec()
    }

    /// Clears the conversation back to the greeting
    pub fn clear(&self) {
        lock(&self.transcript).reset();
    }

    /// Sends a prompt and appends the classified reply
    pub async fn send(&self, prompt: &str) -> ChatOutcome {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return ChatOutcome::Skipped;
        }
        let Some(_busy) = self.busy.try_acquire() else {
            debug!("Chat request already in flight, ignoring prompt");
            return ChatOutcome::Skipped;
        };

        self.append(TranscriptEntry::user(prompt));

        match self.repository.send_prompt(prompt).await {
            Ok(value) => {
                let reply = ChatReply::classify(value);
                info!("Chat reply received");
                self.append(reply.clone().into_entry());
                ChatOutcome::Replied(reply)
            }
            Err(e) => {
                error!("Chat request failed: {:#}", e);
                self.append(TranscriptEntry::error(messages::CHAT_FAILED));
                ChatOutcome::Failed
            }
        }
    }

    fn append(&self, entry: TranscriptEntry) {
        lock(&self.transcript).append(entry);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;
    use sentinex_core::domain::transcript::{EntryKind, Role};
    use serde_json::{Value, json};
    use tokio::sync::Notify;

    struct ScriptedChat {
        reply: Option<Value>,
        prompts: Mutex<Vec<String>>,
        /// Holds the reply back until notified
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedChat {
        fn replying(reply: Value) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply),
                prompts: Mutex::new(Vec::new()),
                gate: None,
            })
        }

        fn gated(reply: Value, gate: Arc<Notify>) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply),
                prompts: Mutex::new(Vec::new()),
                gate: Some(gate),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                prompts: Mutex::new(Vec::new()),
                gate: None,
            })
        }
    }

    #[async_trait]
    impl ChatRepository for ScriptedChat {
        async fn send_prompt(&self, prompt: &str) -> Result<Value> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.reply
                .clone()
                .ok_or_else(|| anyhow!("HTTP request failed: connection refused"))
        }
    }

    #[tokio::test]
    async fn test_balance_reply() {
        let repo = ScriptedChat::replying(json!("0.123456"));
        let chat = ChatService::new(repo.clone());

        let outcome = chat.send("  what is my balance?  ").await;

        assert_eq!(outcome, ChatOutcome::Replied(ChatReply::Balance(0.123456)));
        let transcript = chat.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].text, "what is my balance?");
        assert_eq!(transcript[0].role, Role::User);
        assert!(transcript[1].text.contains("0.1235 ETH"));
        assert_eq!(*repo.prompts.lock().unwrap(), vec!["what is my balance?"]);
    }

    #[tokio::test]
    async fn test_failure_appends_error_entry() {
        let chat = ChatService::new(ScriptedChat::failing());

        assert_eq!(chat.send("bridge 1 ETH").await, ChatOutcome::Failed);

        let last = chat.transcript().last().cloned().unwrap();
        assert_eq!(last.kind, EntryKind::Error);
        assert_eq!(last.text, messages::CHAT_FAILED);
        assert!(!chat.is_busy());
    }

    #[tokio::test]
    async fn test_blank_prompt_is_skipped() {
        let repo = ScriptedChat::replying(json!("hi"));
        let chat = ChatService::new(repo.clone());

        assert_eq!(chat.send("\n").await, ChatOutcome::Skipped);
        assert!(chat.transcript().is_empty());
        assert!(repo.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_leaves_greeting() {
        let chat = ChatService::new(ScriptedChat::replying(json!("hello there")));
        chat.send("hi").await;

        chat.clear();

        let transcript = chat.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].text, messages::CHAT_GREETING);
    }

    #[tokio::test]
    async fn test_concurrent_send_is_skipped() {
        let gate = Arc::new(Notify::new());
        let repo = ScriptedChat::gated(json!("0.5"), gate.clone());
        let chat = Arc::new(ChatService::new(repo.clone()));

        let first = tokio::spawn({
            let chat = chat.clone();
            async move { chat.send("what is my balance").await }
        });

        while repo.prompts().is_empty() {
            tokio::task::yield_now().await;
        }
        assert!(chat.is_busy());

        let transcript_before = chat.transcript();
        assert_eq!(chat.send("bridge 1 ETH").await, ChatOutcome::Skipped);
        assert_eq!(chat.transcript(), transcript_before);
        assert_eq!(repo.prompts(), vec!["what is my balance"]);

        gate.notify_one();
        assert_eq!(
            first.await.unwrap(),
            ChatOutcome::Replied(ChatReply::Balance(0.5))
        );
        assert!(!chat.is_busy());
        assert_eq!(chat.transcript().len(), 2);
    }
}
