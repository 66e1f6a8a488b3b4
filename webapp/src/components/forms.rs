use dioxus::prelude::*;

use bucketlist_common::form::{CONTACT_FIELDS, FieldKind, FormField, NEWSLETTER_FIELD, PlaceholderForm};

// inputs are left uncontrolled so a suppressed submit cannot clear what was typed

#[component]
pub fn NewsletterForm() -> Element {
    let field = NEWSLETTER_FIELD;

    rsx! {
        form {
            class: "newsletter-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                PlaceholderForm::Newsletter.submit();
            },
            input {
                class: "form-input",
                id: "{field.id}",
                name: "{field.id}",
                r#type: "{field.kind.input_type()}",
                placeholder: "{field.placeholder}",
                aria_label: "{field.label}",
            }
            button { class: "btn btn-primary", r#type: "submit", "Subscribe" }
        }
    }
}

#[component]
fn ContactField(field: FormField) -> Element {
    let input = match field.kind {
        FieldKind::TextArea { rows } => rsx! {
            textarea {
                class: "form-textarea",
                id: "{field.id}",
                name: "{field.id}",
                rows: "{rows}",
                required: true,
                placeholder: "{field.placeholder}",
            }
        },
        kind => rsx! {
            input {
                class: "form-input",
                id: "{field.id}",
                name: "{field.id}",
                r#type: "{kind.input_type()}",
                required: true,
                placeholder: "{field.placeholder}",
            }
        },
    };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{field.id}", "{field.label}" }
            {input}
        }
    }
}

#[component]
pub fn ContactForm() -> Element {
    let form = PlaceholderForm::Contact;

    rsx! {
        form {
            class: "contact-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                form.submit();
            },
            h2 { "Send Us a Message" }
            for field in CONTACT_FIELDS.iter().copied() {
                ContactField { key: "{field.id}", field }
            }
            button { class: "btn btn-primary btn-block", r#type: "submit", "Send Message" }
            if let Some(note) = form.notice() {
                p { class: "form-note", "{note}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus_core::VirtualDom;

    use super::*;
    use crate::common::testing::{listeners, submit, use_serialized_events};

    // submits once with the given values and checks the page is left exactly as it was
    fn assert_submit_is_inert(app: fn() -> Element, fields: &[(&str, &str)]) {
        use_serialized_events();

        let mut dom = VirtualDom::new(app);
        let edits = dom.rebuild_to_vec().edits;
        let before = dioxus_ssr::render(&dom);

        let forms = listeners(&edits, "submit");
        assert_eq!(forms.len(), 1);

        let event = submit(&dom, forms[0], fields);
        assert!(!event.default_action_enabled(), "browser submit was not prevented");

        assert!(dom.render_immediate_to_vec().edits.is_empty());
        assert_eq!(dioxus_ssr::render(&dom), before);
    }

    #[test]
    fn newsletter_submit_changes_nothing() {
        fn app() -> Element {
            rsx! { NewsletterForm {} }
        }

        assert_submit_is_inert(app, &[(NEWSLETTER_FIELD.id, "test@example.com")]);
    }

    #[test]
    fn contact_submit_changes_nothing() {
        fn app() -> Element {
            rsx! { ContactForm {} }
        }

        assert_submit_is_inert(
            app,
            &[
                ("name", "Jordan Ridge"),
                ("email", "test@example.com"),
                ("message", "Do the hoodies run large?"),
            ],
        );
    }

    #[test]
    fn newsletter_form_has_no_action() {
        let html = dioxus_ssr::render_element(rsx! { NewsletterForm {} });

        assert!(html.contains("placeholder=\"Enter your email\""));
        assert!(html.contains("type=\"email\""));
        assert!(!html.contains("action="));
        assert!(!html.contains("value="));
    }

    #[test]
    fn contact_form_renders_every_field() {
        let html = dioxus_ssr::render_element(rsx! { ContactForm {} });

        for field in CONTACT_FIELDS {
            assert!(html.contains(&format!("for=\"{}\"", field.id)));
            assert!(html.contains(field.label));
        }
        assert!(html.contains("<textarea"));
        assert!(html.contains("Send Message"));
        assert!(html.contains("demonstration purposes only"));
        assert!(!html.contains("action="));
    }
}
