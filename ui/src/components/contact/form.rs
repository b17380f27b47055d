//! Contact-form state machine. One phase enum instead of a pile of
//! booleans, so "submitting and succeeded at once" cannot be represented.
//! No DOM types in here; the component layer owns the signals and the
//! transport.

use serde::Deserialize;
use serde::Serialize;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const SUBMIT_FAILED: &str =
    "Something went wrong sending your message. Please try again.";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    message: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

/// What goes over the wire to the submission collaborator.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// `local@domain.tld`: exactly one `@`, no whitespace anywhere, and the
/// domain must contain a dot with non-empty labels on both sides of the
/// last one.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub errors: FieldErrors,
    pub phase: Phase,
    pub submit_error: Option<&'static str>,
}

impl ContactForm {
    /// Typing into a field clears only that field's error (and any stale
    /// submission error); other fields are not re-validated.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        *self.errors.slot(field) = None;
        self.submit_error = None;
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.name = Some(NAME_REQUIRED);
        }
        if self.email.trim().is_empty() {
            errors.email = Some(EMAIL_REQUIRED);
        } else if !is_valid_email(&self.email) {
            errors.email = Some(EMAIL_INVALID);
        }
        if self.message.trim().is_empty() {
            errors.message = Some(MESSAGE_REQUIRED);
        }
        errors
    }

    /// Submit attempt. On clean validation, moves to `Submitting` and hands
    /// back the message for the transport; otherwise records the per-field
    /// errors and stays in `Editing`.
    pub fn try_submit(&mut self) -> Option<ContactMessage> {
        if self.phase != Phase::Editing {
            return None;
        }
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.errors = FieldErrors::default();
        self.submit_error = None;
        self.phase = Phase::Submitting;
        Some(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Transport outcome. Success clears the fields; failure keeps them and
    /// surfaces a user-visible error line.
    pub fn submit_finished(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.phase = Phase::Succeeded;
            }
            Err(_) => {
                self.phase = Phase::Editing;
                self.submit_error = Some(SUBMIT_FAILED);
            }
        }
    }

    /// "Send another message" from the success panel.
    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada Lovelace".into());
        form.edit(Field::Email, "ada@example.com".into());
        form.edit(Field::Message, "Let's build an engine.".into());
        form
    }

    #[test]
    fn valid_form_submits_then_succeeds_and_clears() {
        let mut form = filled();

        let message = form.try_submit().expect("valid form must submit");
        assert_eq!(form.phase, Phase::Submitting);
        assert_eq!(message.name, "Ada Lovelace");

        form.submit_finished(Ok(()));
        assert_eq!(form.phase, Phase::Succeeded);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn empty_name_blocks_with_exact_message() {
        let mut form = filled();
        form.edit(Field::Name, "   ".into());

        assert!(form.try_submit().is_none());
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(form.errors.get(Field::Email), None);
        assert_eq!(form.errors.get(Field::Message), None);
    }

    #[test]
    fn malformed_email_blocks_with_exact_message() {
        let mut form = filled();
        form.edit(Field::Email, "not-an-email".into());

        assert!(form.try_submit().is_none());
        assert_eq!(form.errors.get(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn minimal_valid_email_passes() {
        let mut form = filled();
        form.edit(Field::Email, "a@b.com".into());

        assert!(form.try_submit().is_some());
        assert_eq!(form.errors.get(Field::Email), None);
    }

    #[test]
    fn email_predicate_edge_cases() {
        assert!(is_valid_email("x@y.z"));
        assert!(is_valid_email("first.last@sub.domain.dev"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@y.z"));
        assert!(!is_valid_email("x@"));
        assert!(!is_valid_email("x@y"));
        assert!(!is_valid_email("x@.z"));
        assert!(!is_valid_email("x@y."));
        assert!(!is_valid_email("x@@y.z"));
        assert!(!is_valid_email("x y@z.dev"));
        assert!(!is_valid_email(" x@y.z"));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = ContactForm::default();
        assert!(form.try_submit().is_none());
        assert_eq!(form.errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(form.errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(form.errors.get(Field::Message), Some(MESSAGE_REQUIRED));

        form.edit(Field::Name, "A".into());
        assert_eq!(form.errors.get(Field::Name), None);
        assert_eq!(form.errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(form.errors.get(Field::Message), Some(MESSAGE_REQUIRED));
    }

    #[test]
    fn transport_failure_returns_to_editing_with_visible_error() {
        let mut form = filled();
        form.try_submit().expect("valid form");

        form.submit_finished(Err("503 from relay".into()));
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.submit_error, Some(SUBMIT_FAILED));
        // fields survive so the user can retry without retyping
        assert_eq!(form.name, "Ada Lovelace");

        // retry is allowed and clears the error banner
        assert!(form.try_submit().is_some());
        assert_eq!(form.submit_error, None);
    }

    #[test]
    fn send_another_resets_to_pristine_state() {
        let mut form = filled();
        form.try_submit().expect("valid form");
        form.submit_finished(Ok(()));
        assert_eq!(form.phase, Phase::Succeeded);

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn no_double_submit_while_in_flight() {
        let mut form = filled();
        assert!(form.try_submit().is_some());
        assert!(form.try_submit().is_none());
        assert_eq!(form.phase, Phase::Submitting);
    }

    #[test]
    fn typing_during_error_does_not_touch_phase() {
        let mut form = filled();
        form.try_submit().expect("valid form");
        form.submit_finished(Err("boom".into()));

        form.edit(Field::Message, "updated".into());
        assert_eq!(form.phase, Phase::Editing);
        assert_eq!(form.submit_error, None);
    }
}
