//! Landing-page contact form state.
//!
//! Submission is simulated: nothing leaves the browser and every valid submission succeeds.

use std::time::Duration;

/// Delay before a simulated submission reports success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactForm {
    /// Every field filled in and the address looks like one.
    pub fn is_complete(&self) -> bool {
        let email = self.email.trim();
        !self.name.trim().is_empty()
            && !self.message.trim().is_empty()
            && email
                .split_once('@')
                .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty())
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting && self.is_complete()
    }

    /// Starts a submission; returns `false` when the form is not ready.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Completes a pending submission and clears the fields.
    pub fn finish_submit(&mut self) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        *self = Self {
            status: SubmitStatus::Sent,
            ..Self::default()
        };
    }

    /// Editing after a successful send hides the confirmation.
    pub fn edited(&mut self) {
        if self.status == SubmitStatus::Sent {
            self.status = SubmitStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            status: SubmitStatus::Idle,
        }
    }

    #[test]
    fn incomplete_forms_are_not_submitted() {
        let mut form = filled();
        form.email = "not-an-address".to_string();
        assert!(!form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Idle);

        let mut form = filled();
        form.message = "   ".to_string();
        assert!(!form.can_submit());
    }

    #[test]
    fn submission_clears_fields_and_reports_success() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        form.finish_submit();
        assert_eq!(
            form,
            ContactForm {
                status: SubmitStatus::Sent,
                ..ContactForm::default()
            }
        );

        form.edited();
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut form = filled();
        form.finish_submit();
        assert_eq!(form, filled());
    }
}
