//! Comment form serialization.
//!
//! Mirrors browser form submission: named form controls are collected in
//! document order into form-encoded field pairs.

use crate::dom::{Dom, NodeId};

const FORM_CONTROL_TAGS: &[&str] = &["input", "textarea", "select"];

fn controls(dom: &Dom, form: NodeId) -> Vec<NodeId> {
    dom.descendants(form)
        .into_iter()
        .filter(|&node| {
            dom.tag(node)
                .is_some_and(|tag| FORM_CONTROL_TAGS.contains(&tag))
                && dom.name(node).is_some()
        })
        .collect()
}

/// Current field values of the form, in document order.
#[must_use]
pub fn serialize(dom: &Dom, form: NodeId) -> Vec<(String, String)> {
    controls(dom, form)
        .into_iter()
        .filter_map(|node| {
            dom.name(node)
                .map(|name| (name.to_string(), dom.value(node).to_string()))
        })
        .collect()
}

/// Reset every named control of the form to an empty value.
pub fn clear(dom: &mut Dom, form: NodeId) {
    for node in controls(dom, form) {
        dom.set_value(node, "");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_form(dom: &mut Dom) -> NodeId {
        let form = dom.create_element("form");
        let message = dom.create_element("textarea");
        dom.set_name(message, "message");
        dom.set_value(message, "hello");
        let email = dom.create_element("input");
        dom.set_name(email, "email");
        dom.set_value(email, "a@b.com");
        let submit = dom.create_element("input"); // unnamed, not serialized
        dom.append_child(form, message);
        dom.append_child(form, email);
        dom.append_child(form, submit);
        dom.append_child(dom.root(), form);
        form
    }

    #[test]
    fn serialize_collects_named_controls_in_document_order() {
        let mut dom = Dom::new();
        let form = comment_form(&mut dom);

        assert_eq!(
            serialize(&dom, form),
            vec![
                ("message".to_string(), "hello".to_string()),
                ("email".to_string(), "a@b.com".to_string()),
            ]
        );
    }

    #[test]
    fn clear_resets_values_but_keeps_names() {
        let mut dom = Dom::new();
        let form = comment_form(&mut dom);

        clear(&mut dom, form);

        assert_eq!(
            serialize(&dom, form),
            vec![
                ("message".to_string(), String::new()),
                ("email".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn non_control_children_are_ignored() {
        let mut dom = Dom::new();
        let form = dom.create_element("form");
        let label = dom.create_element("label");
        dom.set_name(label, "not-a-control");
        dom.append_child(form, label);
        dom.append_child(dom.root(), form);

        assert!(serialize(&dom, form).is_empty());
    }
}
