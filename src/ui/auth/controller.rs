//! Reactive form state shared by the login and signup forms
//!
//! Wraps a [`FormSchema`] value and a [`SubmitFlow`] in signals. Validation
//! re-runs on every change; a field's message becomes visible once the field
//! was edited or a submit was attempted.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::core::{
    ErrorTransition, Field, FieldErrors, FormSchema, Settlement, SubmitError, SubmitFlow,
};

/// Form values, validation and submission state
pub struct FormController<T: FormSchema> {
    pub values: RwSignal<T>,
    pub flow: RwSignal<SubmitFlow>,
    errors: Memo<FieldErrors>,
    dirty: RwSignal<BTreeSet<Field>>,
    submitted: RwSignal<bool>,
}

impl<T: FormSchema> Clone for FormController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FormSchema> Copy for FormController<T> {}

impl<T: FormSchema> FormController<T> {
    pub fn new(on_error: ErrorTransition) -> Self {
        let values = RwSignal::new(T::default());
        let errors = Memo::new(move |_| values.with(|v| v.validate()));

        Self {
            values,
            flow: RwSignal::new(SubmitFlow::new(on_error)),
            errors,
            dirty: RwSignal::new(BTreeSet::new()),
            submitted: RwSignal::new(false),
        }
    }

    pub fn value(&self, field: Field) -> String {
        self.values.with(|v| v.field(field).to_string())
    }

    /// Update a field from user input; any edit clears the submit error
    pub fn set(&self, field: Field, value: String) {
        self.values.update(|v| v.set_field(field, value));
        self.dirty.update(|dirty| {
            dirty.insert(field);
        });
        self.flow.update(|flow| flow.field_changed());
    }

    /// Validation message to show for a field right now
    pub fn error(&self, field: Field) -> Option<String> {
        let visible = self.submitted.get() || self.dirty.with(|dirty| dirty.contains(&field));
        if !visible {
            return None;
        }
        self.errors.with(|errors| errors.get(field).map(str::to_string))
    }

    /// Whether a submission is in flight
    pub fn is_loading(&self) -> bool {
        self.flow.with(|flow| flow.is_submitting())
    }

    /// Form-level message from the last failed submission
    pub fn submit_error(&self) -> Option<String> {
        self.flow.with(|flow| flow.submit_error().map(str::to_string))
    }

    pub fn is_confirmed(&self) -> bool {
        self.flow.with(|flow| flow.is_confirmed())
    }

    /// Validate and enter `Submitting`; returns the value to send
    ///
    /// `None` when validation fails or a submission may not start.
    pub fn try_begin(&self) -> Option<T> {
        self.submitted.set(true);

        let valid = self.values.get_untracked().parse().ok()?;
        let mut started = false;
        self.flow.update(|flow| started = flow.begin());

        started.then_some(valid)
    }

    /// Apply the remote outcome and reset the fields when asked to
    pub fn settle(&self, outcome: Result<(), SubmitError>) -> Settlement {
        let mut settlement = Settlement {
            reset_fields: false,
            terminal: false,
        };
        self.flow.update(|flow| settlement = flow.settle(outcome));

        if settlement.reset_fields {
            self.reset();
        }
        settlement
    }

    /// Empty every field and forget edits and submit attempts
    pub fn reset(&self) {
        self.values.set(T::default());
        self.dirty.set(BTreeSet::new());
        self.submitted.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{INVALID_EMAIL, PASSWORD_TOO_SHORT, PASSWORDS_DONT_MATCH};
    use crate::core::{Credentials, SignupCredentials};

    fn with_owner(f: impl FnOnce()) {
        let owner = Owner::new();
        owner.with(f);
    }

    #[test]
    fn test_errors_hidden_until_edit() {
        with_owner(|| {
            let form = FormController::<Credentials>::new(ErrorTransition::Proceed);
            assert_eq!(form.error(Field::Email), None);

            form.set(Field::Email, "nope".to_string());
            assert_eq!(form.error(Field::Email).as_deref(), Some(INVALID_EMAIL));
            assert_eq!(form.error(Field::Password), None);
        });
    }

    #[test]
    fn test_errors_update_live() {
        with_owner(|| {
            let form = FormController::<Credentials>::new(ErrorTransition::Proceed);
            form.set(Field::Password, "short".to_string());
            assert_eq!(form.error(Field::Password).as_deref(), Some(PASSWORD_TOO_SHORT));

            form.set(Field::Password, "longenough".to_string());
            assert_eq!(form.error(Field::Password), None);
        });
    }

    #[test]
    fn test_invalid_submit_is_blocked_and_reveals_errors() {
        with_owner(|| {
            let form = FormController::<Credentials>::new(ErrorTransition::Proceed);
            form.set(Field::Email, "bad".to_string());

            assert!(form.try_begin().is_none());
            assert!(!form.is_loading());
            assert_eq!(form.error(Field::Password).as_deref(), Some(PASSWORD_TOO_SHORT));
        });
    }

    #[test]
    fn test_signup_mismatch_blocks_submit() {
        with_owner(|| {
            let form = FormController::<SignupCredentials>::new(ErrorTransition::Proceed);
            form.set(Field::Email, "x@y.com".to_string());
            form.set(Field::Password, "password1".to_string());
            form.set(Field::ConfirmPassword, "password2".to_string());

            assert!(form.try_begin().is_none());
            assert_eq!(
                form.error(Field::ConfirmPassword).as_deref(),
                Some(PASSWORDS_DONT_MATCH)
            );
        });
    }

    #[test]
    fn test_valid_submit_enters_loading_once() {
        with_owner(|| {
            let form = FormController::<Credentials>::new(ErrorTransition::Proceed);
            form.set(Field::Email, "a@b.com".to_string());
            form.set(Field::Password, "longenough".to_string());

            let sent = form.try_begin().unwrap();
            assert_eq!(sent, Credentials::new("a@b.com", "longenough"));
            assert!(form.is_loading());
            assert!(form.try_begin().is_none());
        });
    }

    #[test]
    fn test_failed_login_clears_fields_and_shows_message() {
        with_owner(|| {
            let form = FormController::<Credentials>::new(ErrorTransition::Proceed);
            form.set(Field::Email, "a@b.com".to_string());
            form.set(Field::Password, "longenough".to_string());
            form.try_begin().unwrap();

            let settlement =
                form.settle(Err(SubmitError::Rejected("Invalid credentials".to_string())));

            assert!(settlement.terminal);
            assert_eq!(form.value(Field::Email), "");
            assert_eq!(form.value(Field::Password), "");
            assert_eq!(form.submit_error().as_deref(), Some("Invalid credentials"));
            assert!(!form.is_loading());
            // Reset forgets edits, so no inline errors on the empty fields
            assert_eq!(form.error(Field::Email), None);
        });
    }

    #[test]
    fn test_edit_after_failure_clears_message() {
        with_owner(|| {
            let form = FormController::<Credentials>::new(ErrorTransition::Remain);
            form.set(Field::Email, "a@b.com".to_string());
            form.set(Field::Password, "longenough".to_string());
            form.try_begin().unwrap();
            form.settle(Err(SubmitError::Rejected("Invalid credentials".to_string())));
            assert!(form.submit_error().is_some());

            form.set(Field::Email, "a".to_string());
            assert_eq!(form.submit_error(), None);
            form.set(Field::Email, "a@".to_string());
            assert_eq!(form.submit_error(), None);
        });
    }

    #[test]
    fn test_successful_signup_confirms_without_reset() {
        with_owner(|| {
            let form = FormController::<SignupCredentials>::new(ErrorTransition::Proceed);
            form.set(Field::Email, "x@y.com".to_string());
            form.set(Field::Password, "password1".to_string());
            form.set(Field::ConfirmPassword, "password1".to_string());
            form.try_begin().unwrap();

            let settlement = form.settle(Ok(()));
            assert!(settlement.terminal);
            assert!(!settlement.reset_fields);
            assert!(form.is_confirmed());
            assert_eq!(form.value(Field::Email), "x@y.com");
        });
    }
}
