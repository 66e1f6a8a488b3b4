use tracing::debug;

// placeholder forms
//
// neither form is wired to anything: submitting never navigates, never validates, and never
// touches what the visitor typed.  submit() deliberately takes no field values so there is
// nothing it could persist
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderForm {
    Newsletter,
    Contact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submission {
    Suppressed,
}

impl PlaceholderForm {
    pub fn submit(self) -> Submission {
        debug!(form = ?self, "form submission suppressed");
        Submission::Suppressed
    }

    pub fn notice(self) -> Option<&'static str> {
        match self {
            PlaceholderForm::Newsletter => None,
            PlaceholderForm::Contact => {
                Some("* This form is currently for demonstration purposes only.")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

pub const NEWSLETTER_FIELD: FormField = FormField {
    id: "newsletter-email",
    label: "Email address",
    kind: FieldKind::Email,
    placeholder: "Enter your email",
};

pub const CONTACT_FIELDS: &[FormField] = &[
    FormField {
        id: "name",
        label: "Full Name",
        kind: FieldKind::Text,
        placeholder: "Enter your name",
    },
    FormField {
        id: "email",
        label: "Email Address",
        kind: FieldKind::Email,
        placeholder: "you@example.com",
    },
    FormField {
        id: "message",
        label: "Message",
        kind: FieldKind::TextArea { rows: 5 },
        placeholder: "Write your message...",
    },
];

impl FieldKind {
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea { .. } => "text",
            FieldKind::Email => "email",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_submission_is_suppressed() {
        for form in [PlaceholderForm::Newsletter, PlaceholderForm::Contact] {
            assert_eq!(form.submit(), Submission::Suppressed);
        }
    }

    #[test]
    fn only_contact_form_carries_notice() {
        assert_eq!(PlaceholderForm::Newsletter.notice(), None);
        assert!(
            PlaceholderForm::Contact
                .notice()
                .is_some_and(|note| note.contains("demonstration"))
        );
    }

    #[test]
    fn contact_field_ids_are_unique() {
        let mut ids: Vec<_> = CONTACT_FIELDS.iter().map(|field| field.id).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), CONTACT_FIELDS.len());
        assert!(!ids.contains(&NEWSLETTER_FIELD.id));
    }
}
