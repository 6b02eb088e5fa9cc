//! State update logic (Elm Architecture)
//!
//! Every transition is a plain DOM mutation; network effects are only
//! *flagged* here (`pending_submission`, `needs_login_control`) and carried
//! out by the driver in `app`.

use crate::dom::{Display, NodeId};
use crate::form;
use crate::message::Message;
use crate::model::Model;

pub fn update(model: &mut Model, msg: Message) {
    match msg {
        // === Navigation ===
        Message::OpenPage { trigger, page } => {
            open_page(model, trigger, &page);
        }

        // === Comment form ===
        Message::SubmitCommentForm => {
            let Some(form_node) = model.dom.element_by_id(&model.selectors.comment_form_id)
            else {
                return;
            };
            let fields = form::serialize(&model.dom, form_node);
            // Cleared before the POST outcome is known: an empty form does
            // not imply the comment was persisted.
            form::clear(&mut model.dom, form_node);
            model.pending_submission = Some(fields);
        }

        // === Backend responses ===
        Message::CommentsLoaded(comments) => {
            let items: Vec<String> = comments
                .iter()
                .map(|c| format!("{} - {}", c.message, c.email))
                .collect();
            render_list(model, &items);
        }

        Message::GreetingsLoaded(greetings) => {
            render_list(model, &greetings);
        }

        Message::LoginStatus(code) => match code {
            200 => {
                set_comment_form_display(model, Display::Visible);
                model.needs_login_control = true;
            }
            401 => {
                set_comment_form_display(model, Display::Hidden);
                model.needs_login_control = true;
            }
            // Any other status: leave the UI as it is, fetch nothing.
            _ => {}
        },

        Message::LoginControlLoaded(markup) => {
            // Applied to every container so desktop and mobile nav stay in sync.
            for node in model
                .dom
                .elements_with_class(&model.selectors.login_logout_class)
            {
                model.dom.set_inner_markup(node, &markup);
            }
        }

        Message::Noop => {}
    }
}

/// Show the section whose id is `page`, hide every other one, and mark the
/// button enclosing `trigger` as the active nav button.
fn open_page(model: &mut Model, trigger: NodeId, page: &str) {
    for section in model
        .dom
        .elements_with_class(&model.selectors.page_content_class)
    {
        model.dom.set_display(section, Display::Hidden);
    }

    let nav_class = model.selectors.nav_button_class.clone();
    for button in model.dom.elements_with_class(&nav_class) {
        model.dom.set_classes(button, &[nav_class.as_str()]);
    }

    let active_class = model.selectors.nav_button_active_class.clone();
    if let Some(button) = model.dom.parent(trigger) {
        model.dom.add_class(button, &active_class);
    }

    // Unknown page id: nothing becomes visible, silently.
    if let Some(target) = model.dom.element_by_id(page) {
        model.dom.set_display(target, Display::Visible);
    }
}

/// Replace the list container's content with one `li` per item.
fn render_list(model: &mut Model, items: &[String]) {
    let Some(container) = model.dom.element_by_id(&model.selectors.comment_list_id) else {
        return;
    };

    // Remove the previous list so reloads never accumulate items.
    if let Some(previous) = model.dom.first_child(container) {
        model.dom.remove_child(container, previous);
    }

    let list = model.dom.create_element("ul");
    for item in items {
        let entry = model.dom.create_element("li");
        let text = model.dom.create_text(item);
        model.dom.append_child(entry, text);
        model.dom.append_child(list, entry);
    }
    model.dom.append_child(container, list);
}

fn set_comment_form_display(model: &mut Model, display: Display) {
    if let Some(form_node) = model.dom.element_by_id(&model.selectors.comment_form_id) {
        model.dom.set_display(form_node, display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Comment;
    use crate::dom::{Display, Dom, NodeId};

    /// A minimal portfolio page: three nav buttons (each with an inner label
    /// span `<id>-tab`), three page sections, a comment list, a comment form
    /// with named inputs, and two login/logout containers.
    fn page() -> Model {
        let mut dom = Dom::new();
        let root = dom.root();

        let nav = dom.create_element("nav");
        dom.append_child(root, nav);
        for id in ["about", "projects", "comments"] {
            let button = dom.create_element("button");
            dom.set_classes(button, &["nav-button"]);
            let label = dom.create_element("span");
            dom.set_id(label, &format!("{id}-tab"));
            dom.append_child(button, label);
            dom.append_child(nav, button);
        }

        for id in ["about", "projects", "comments"] {
            let section = dom.create_element("section");
            dom.set_id(section, id);
            dom.add_class(section, "page-content");
            dom.append_child(root, section);
        }

        let comments = dom.element_by_id("comments").unwrap();
        let list = dom.create_element("div");
        dom.set_id(list, "comments-list");
        dom.append_child(comments, list);

        let form_node = dom.create_element("form");
        dom.set_id(form_node, "comment-form");
        let message = dom.create_element("textarea");
        dom.set_name(message, "message");
        let email = dom.create_element("input");
        dom.set_name(email, "email");
        dom.append_child(form_node, message);
        dom.append_child(form_node, email);
        dom.append_child(comments, form_node);

        for _ in 0..2 {
            let slot = dom.create_element("div");
            dom.add_class(slot, "login-logout-container");
            dom.append_child(nav, slot);
        }

        Model::new(dom)
    }

    fn trigger(model: &Model, id: &str) -> NodeId {
        model.dom.element_by_id(&format!("{id}-tab")).unwrap()
    }

    fn open(model: &mut Model, id: &str) {
        let trigger = trigger(model, id);
        update(
            model,
            Message::OpenPage {
                trigger,
                page: id.to_string(),
            },
        );
    }

    fn list_items(model: &Model) -> Vec<String> {
        let container = model.dom.element_by_id("comments-list").unwrap();
        let list = model.dom.first_child(container).unwrap();
        model
            .dom
            .children(list)
            .iter()
            .map(|&li| model.dom.text_content(li))
            .collect()
    }

    #[test]
    fn open_page_shows_exactly_the_target_section() {
        let mut model = page();
        open(&mut model, "projects");

        for id in ["about", "projects", "comments"] {
            let section = model.dom.element_by_id(id).unwrap();
            let expected = if id == "projects" {
                Display::Visible
            } else {
                Display::Hidden
            };
            assert_eq!(model.dom.display(section), expected, "section {id}");
        }
    }

    #[test]
    fn open_page_marks_only_the_enclosing_button_active() {
        let mut model = page();
        open(&mut model, "about");
        open(&mut model, "comments");

        let active = model.dom.elements_with_class("nav-button_active");
        assert_eq!(active.len(), 1);
        let expected_button = model.dom.parent(trigger(&model, "comments")).unwrap();
        assert_eq!(active[0], expected_button);
    }

    #[test]
    fn open_page_is_idempotent() {
        let mut model = page();
        open(&mut model, "about");
        let first = model.dom.clone();
        open(&mut model, "about");

        let section = model.dom.element_by_id("about").unwrap();
        assert_eq!(model.dom.display(section), Display::Visible);
        assert_eq!(
            model.dom.elements_with_class("nav-button_active").len(),
            first.elements_with_class("nav-button_active").len()
        );
    }

    #[test]
    fn open_page_with_unknown_id_shows_nothing_and_does_not_panic() {
        let mut model = page();
        let trigger = trigger(&model, "about");
        update(
            &mut model,
            Message::OpenPage {
                trigger,
                page: "no-such-page".to_string(),
            },
        );

        for id in ["about", "projects", "comments"] {
            let section = model.dom.element_by_id(id).unwrap();
            assert_eq!(model.dom.display(section), Display::Hidden);
        }
    }

    #[test]
    fn comments_render_as_message_dash_email() {
        let mut model = page();
        update(
            &mut model,
            Message::CommentsLoaded(vec![Comment {
                message: "hi".to_string(),
                email: "a@b.com".to_string(),
            }]),
        );

        assert_eq!(list_items(&model), vec!["hi - a@b.com".to_string()]);
    }

    #[test]
    fn reload_replaces_the_previous_list_without_accumulating() {
        let mut model = page();
        update(
            &mut model,
            Message::CommentsLoaded(vec![
                Comment {
                    message: "first".to_string(),
                    email: "x@y.z".to_string(),
                },
                Comment {
                    message: "second".to_string(),
                    email: "x@y.z".to_string(),
                },
            ]),
        );
        update(
            &mut model,
            Message::CommentsLoaded(vec![Comment {
                message: "third".to_string(),
                email: "q@r.s".to_string(),
            }]),
        );

        let container = model.dom.element_by_id("comments-list").unwrap();
        assert_eq!(model.dom.children(container).len(), 1);
        assert_eq!(list_items(&model), vec!["third - q@r.s".to_string()]);
    }

    #[test]
    fn greetings_render_one_item_per_string() {
        let mut model = page();
        update(
            &mut model,
            Message::GreetingsLoaded(vec!["hello".to_string(), "hola".to_string()]),
        );

        assert_eq!(
            list_items(&model),
            vec!["hello".to_string(), "hola".to_string()]
        );
    }

    #[test]
    fn login_status_200_shows_the_comment_form() {
        let mut model = page();
        let form_node = model.dom.element_by_id("comment-form").unwrap();
        model.dom.set_display(form_node, Display::Hidden);

        update(&mut model, Message::LoginStatus(200));

        assert_eq!(model.dom.display(form_node), Display::Visible);
        assert_eq!(model.dom.display(form_node).css(), "block");
        assert!(model.needs_login_control);
    }

    #[test]
    fn login_status_401_hides_the_comment_form() {
        let mut model = page();
        let form_node = model.dom.element_by_id("comment-form").unwrap();

        update(&mut model, Message::LoginStatus(401));

        assert_eq!(model.dom.display(form_node), Display::Hidden);
        assert_eq!(model.dom.display(form_node).css(), "none");
        assert!(model.needs_login_control);
    }

    #[test]
    fn unexpected_login_status_changes_nothing() {
        let mut model = page();
        let form_node = model.dom.element_by_id("comment-form").unwrap();
        model.dom.set_display(form_node, Display::Hidden);

        update(&mut model, Message::LoginStatus(404));

        assert_eq!(model.dom.display(form_node), Display::Hidden);
        assert!(!model.needs_login_control);
    }

    #[test]
    fn login_control_markup_is_applied_to_every_container_verbatim() {
        let mut model = page();
        let markup = "<p><a id=\"login-button\" href=\"/login?continue=/index.html\">Login</a></p>";

        update(&mut model, Message::LoginControlLoaded(markup.to_string()));

        let containers = model.dom.elements_with_class("login-logout-container");
        assert_eq!(containers.len(), 2);
        for container in containers {
            assert_eq!(model.dom.inner_markup(container), Some(markup));
        }
    }

    #[test]
    fn submit_records_fields_and_clears_the_form_immediately() {
        let mut model = page();
        let form_node = model.dom.element_by_id("comment-form").unwrap();
        let message = model.dom.children(form_node)[0];
        let email = model.dom.children(form_node)[1];
        model.dom.set_value(message, "nice site");
        model.dom.set_value(email, "a@b.com");

        update(&mut model, Message::SubmitCommentForm);

        assert_eq!(
            model.pending_submission,
            Some(vec![
                ("message".to_string(), "nice site".to_string()),
                ("email".to_string(), "a@b.com".to_string()),
            ])
        );
        assert_eq!(model.dom.value(message), "");
        assert_eq!(model.dom.value(email), "");
    }

    #[test]
    fn submit_without_a_form_is_a_silent_noop() {
        let mut model = Model::new(Dom::new());
        update(&mut model, Message::SubmitCommentForm);
        assert_eq!(model.pending_submission, None);
    }
}
