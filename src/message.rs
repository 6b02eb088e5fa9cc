//! Message types for the Elm Architecture

use crate::api::Comment;
use crate::dom::NodeId;

/// All possible user actions and backend events
#[derive(Debug, Clone)]
pub enum Message {
    // === Navigation ===
    /// A nav button was pressed. `trigger` is the element inside the button
    /// that received the click; the enclosing button is marked active.
    OpenPage { trigger: NodeId, page: String },

    // === Comment form ===
    /// The comment form was submitted.
    SubmitCommentForm,

    // === Backend responses ===
    /// `GET /comments` resolved.
    CommentsLoaded(Vec<Comment>),
    /// `GET /data` resolved (greeting-page variant).
    GreetingsLoaded(Vec<String>),
    /// `GET /login-status` resolved; the status code is the payload.
    LoginStatus(u16),
    /// `GET /login` resolved with login/logout control markup.
    LoginControlLoaded(String),

    /// No-op (ignore event)
    Noop,
}
