//! Application state model

use crate::dom::Dom;

/// The ids and classes the surrounding markup is expected to provide.
///
/// Kept as data rather than hard-coded strings at the call sites so the
/// markup contract lives in one place.
#[derive(Debug, Clone)]
pub struct UiSelectors {
    /// Class carried by every navigable page section.
    pub page_content_class: String,
    /// Class carried by every nav button (and its reset state).
    pub nav_button_class: String,
    /// Class appended to the button enclosing the navigation trigger.
    pub nav_button_active_class: String,
    /// Id of the container the comment (or greeting) list renders into.
    pub comment_list_id: String,
    /// Id of the comment form that is toggled and submitted.
    pub comment_form_id: String,
    /// Class carried by every login/logout control slot.
    pub login_logout_class: String,
}

impl Default for UiSelectors {
    fn default() -> Self {
        Self {
            page_content_class: "page-content".to_string(),
            nav_button_class: "nav-button".to_string(),
            nav_button_active_class: "nav-button_active".to_string(),
            comment_list_id: "comments-list".to_string(),
            comment_form_id: "comment-form".to_string(),
            login_logout_class: "login-logout-container".to_string(),
        }
    }
}

/// All UI state: the document plus pending effects flagged by `update`.
///
/// The client itself persists nothing; everything observable lives in the
/// document or on the backend.
#[derive(Debug, Clone)]
pub struct Model {
    pub dom: Dom,
    pub selectors: UiSelectors,
    /// Serialized form fields awaiting POST, recorded by the submit
    /// transition. The form is already cleared by the time this is set.
    pub pending_submission: Option<Vec<(String, String)>>,
    /// Set when the login/logout control markup must be (re)fetched.
    pub needs_login_control: bool,
}

impl Model {
    #[must_use]
    pub fn new(dom: Dom) -> Self {
        Self {
            dom,
            selectors: UiSelectors::default(),
            pending_submission: None,
            needs_login_control: false,
        }
    }
}
