//! Chat session state machine driving a front-end.
//!
//! ```text
//! Uninitialized ──begin_start──► Loading ──finish──► Ready
//!                                                    │  ▲
//!                                        begin_send  │  │ finish
//!                                                    ▼  │
//!                                                   Sending
//! ```
//!
//! At most one relay call is outstanding per session. `begin_*` hands out a
//! [`PendingReply`], which is the only way back to `Ready`; while it exists
//! every other `begin_*` is rejected without touching the conversation.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::application::AssistantBackend;
use crate::domain::{Conversation, DomainError, Profile, PromptLocale, Turn};

/// Content of the synthetic user turn that asks for the opening message.
pub const START_MESSAGE: &str = "Start";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Loading,
    Ready,
    Sending,
}

/// Why a `begin_*` call did not start a relay call. None of these are shown
/// to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Input was empty or whitespace only.
    EmptyInput,
    /// A relay call is already in flight.
    Busy,
    /// The session is not in a state that accepts this request.
    NotReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingKind {
    Opening,
    Reply,
}

/// Single-slot request token for one outstanding relay call.
#[derive(Debug)]
#[must_use = "a pending reply must be passed back to ChatSession::finish"]
pub struct PendingReply {
    kind: PendingKind,
    history: Vec<Turn>,
}

impl PendingReply {
    /// History to relay for this call.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn is_opening(&self) -> bool {
        self.kind == PendingKind::Opening
    }
}

pub struct ChatSession {
    id: Uuid,
    locale: PromptLocale,
    state: SessionState,
    conversation: Conversation,
    profile_loaded: bool,
}

impl ChatSession {
    pub fn new(locale: PromptLocale) -> Self {
        Self {
            id: Uuid::new_v4(),
            locale,
            state: SessionState::Uninitialized,
            conversation: Conversation::new(),
            profile_loaded: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn profile_loaded(&self) -> bool {
        self.profile_loaded
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, SessionState::Loading | SessionState::Sending)
    }

    /// Record the outcome of the profile fetch made during `Loading`.
    pub fn record_profile(&mut self, result: Result<Profile, DomainError>) {
        self.profile_loaded = match result {
            Ok(profile) => !profile.is_empty(),
            Err(e) => {
                warn!("Session {}: could not load user profile: {}", self.id, e);
                false
            }
        };
    }

    /// Enter `Loading` and return the synthetic opening request.
    pub fn begin_start(&mut self) -> Result<PendingReply, Rejection> {
        match self.state {
            SessionState::Uninitialized => {}
            SessionState::Loading | SessionState::Sending => return Err(Rejection::Busy),
            SessionState::Ready => return Err(Rejection::NotReady),
        }

        self.state = SessionState::Loading;
        debug!("Session {} loading", self.id);
        Ok(PendingReply {
            kind: PendingKind::Opening,
            history: vec![Turn::user(START_MESSAGE)],
        })
    }

    /// Append the trimmed `input` as a user turn, enter `Sending`, and return
    /// the request carrying the full conversation.
    pub fn begin_send(&mut self, input: &str) -> Result<PendingReply, Rejection> {
        let text = input.trim();
        if text.is_empty() {
            debug!("Session {}: ignoring empty input", self.id);
            return Err(Rejection::EmptyInput);
        }

        match self.state {
            SessionState::Ready => {}
            SessionState::Loading | SessionState::Sending => {
                debug!("Session {}: ignoring input while a reply is pending", self.id);
                return Err(Rejection::Busy);
            }
            SessionState::Uninitialized => return Err(Rejection::NotReady),
        }

        self.conversation.push(Turn::user(text));
        self.state = SessionState::Sending;
        Ok(PendingReply {
            kind: PendingKind::Reply,
            history: self.conversation.turns().to_vec(),
        })
    }

    /// Complete the outstanding call: append exactly one assistant turn (the
    /// reply, or the locale's fixed error text) and return to `Ready`.
    pub fn finish(
        &mut self,
        pending: PendingReply,
        result: Result<String, DomainError>,
    ) -> &Turn {
        let content = match result {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Session {}: relay call failed: {}", self.id, e);
                match pending.kind {
                    PendingKind::Opening => self.locale.init_error().to_string(),
                    PendingKind::Reply => self.locale.network_error().to_string(),
                }
            }
        };

        self.state = SessionState::Ready;
        self.conversation.push(Turn::assistant(content))
    }

    /// Run the opening exchange against `backend`. Does nothing unless the
    /// session is still uninitialized.
    pub async fn start(&mut self, backend: &dyn AssistantBackend) -> Option<&Turn> {
        let pending = self.begin_start().ok()?;

        self.record_profile(backend.fetch_profile().await);
        let result = backend.reply(pending.history()).await;
        info!("Session {} ready", self.id);
        Some(self.finish(pending, result))
    }

    /// Send `input` through `backend` and append the reply.
    pub async fn send(
        &mut self,
        backend: &dyn AssistantBackend,
        input: &str,
    ) -> Result<&Turn, Rejection> {
        let pending = self.begin_send(input)?;
        let result = backend.reply(pending.history()).await;
        Ok(self.finish(pending, result))
    }
}
