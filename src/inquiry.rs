use serde::Serialize;
use thiserror::Error;

/// How long the post-submit confirmation stays on screen.
pub const CONFIRMATION_MILLIS: u32 = 3_000;

/// A field on the contact inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

/// An in-progress inquiry, mirrored field-by-field from the form inputs.
///
/// Lives only inside the contact form component; it is never persisted and
/// never handed to another component.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InquiryDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl InquiryDraft {
    /// Overwrites one field. Fires on every keystroke/selection change.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Company => self.company = value,
            Field::Service => self.service = value,
            Field::Message => self.message = value,
        }
    }

    /// Completes the draft: returns the captured inquiry and leaves the
    /// draft all-empty, ready for the next visitor.
    pub fn finish(&mut self) -> Inquiry {
        let taken = std::mem::take(self);
        Inquiry {
            name: taken.name,
            email: taken.email,
            phone: taken.phone,
            company: taken.company,
            service: taken.service,
            message: taken.message,
        }
    }
}

/// A completed inquiry as captured at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

/// Visibility of the "thank you" notice shown after a submission.
///
/// Each submission arms a fresh timer generation, and the reset timer
/// reports back with the generation it was armed under. Only the most
/// recently armed generation may hide the notice, so a leftover timer from
/// an earlier submission cannot cut a newer confirmation short.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    visible: bool,
    generation: u32,
}

impl Confirmation {
    /// Shows the notice and returns the generation the reset timer must
    /// report back with.
    pub fn arm(&mut self) -> u32 {
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Hides the notice if `generation` is the one most recently armed.
    pub fn timer_elapsed(&mut self, generation: u32) {
        if generation == self.generation {
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Error)]
pub enum SendError {
    #[error("inquiry could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Acknowledgement from an inquiry sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack;

/// Where completed inquiries go.
///
/// The site has no backend, so the production sink is [`ConsoleSender`].
/// A real transport would implement this trait and slot in where the form
/// component constructs its sender.
pub trait InquirySender {
    fn send(&self, inquiry: Inquiry) -> Result<Ack, SendError>;
}

/// Writes the inquiry to the browser console and acknowledges it.
#[derive(Debug, Default)]
pub struct ConsoleSender;

impl InquirySender for ConsoleSender {
    fn send(&self, inquiry: Inquiry) -> Result<Ack, SendError> {
        let payload = serde_json::to_string(&inquiry)?;
        log::info!("Inquiry submitted: {payload}");
        Ok(Ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingSender {
        sent: RefCell<Vec<Inquiry>>,
    }

    impl RecordingSender {
        fn new() -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl InquirySender for RecordingSender {
        fn send(&self, inquiry: Inquiry) -> Result<Ack, SendError> {
            self.sent.borrow_mut().push(inquiry);
            Ok(Ack)
        }
    }

    #[test]
    fn fields_update_independently() {
        let mut a = InquiryDraft::default();
        a.set(Field::Name, "Asha".into());
        a.set(Field::Email, "a@b.com".into());

        let mut b = InquiryDraft::default();
        b.set(Field::Email, "a@b.com".into());
        b.set(Field::Name, "Asha".into());

        assert_eq!(a, b);
        assert_eq!(a.phone, "");
    }

    #[test]
    fn last_write_wins_per_field() {
        let mut draft = InquiryDraft::default();
        draft.set(Field::Message, "first".into());
        draft.set(Field::Message, "second".into());
        assert_eq!(draft.message, "second");
    }

    #[test]
    fn finish_captures_record_and_clears_draft() {
        let mut draft = InquiryDraft::default();
        draft.set(Field::Name, "Asha".into());
        draft.set(Field::Email, "a@b.com".into());
        draft.set(Field::Message, "Need a quote".into());

        let inquiry = draft.finish();
        assert_eq!(
            inquiry,
            Inquiry {
                name: "Asha".into(),
                email: "a@b.com".into(),
                phone: String::new(),
                company: String::new(),
                service: String::new(),
                message: "Need a quote".into(),
            }
        );
        assert_eq!(draft, InquiryDraft::default());
    }

    #[test]
    fn submit_arms_confirmation_synchronously() {
        let mut draft = InquiryDraft::default();
        draft.set(Field::Name, "Asha".into());
        let mut confirmation = Confirmation::default();

        let _inquiry = draft.finish();
        let generation = confirmation.arm();

        assert!(confirmation.is_visible());
        assert_eq!(draft, InquiryDraft::default());

        confirmation.timer_elapsed(generation);
        assert!(!confirmation.is_visible());
    }

    #[test]
    fn stale_timer_cannot_hide_newer_confirmation() {
        let mut confirmation = Confirmation::default();
        let first = confirmation.arm();
        let second = confirmation.arm();

        confirmation.timer_elapsed(first);
        assert!(confirmation.is_visible());

        confirmation.timer_elapsed(second);
        assert!(!confirmation.is_visible());
    }

    #[test]
    fn sender_seam_receives_completed_inquiry() {
        let sender = RecordingSender::new();
        let mut draft = InquiryDraft::default();
        draft.set(Field::Name, "Asha".into());
        draft.set(Field::Email, "a@b.com".into());
        draft.set(Field::Message, "Need a quote".into());

        let sink: &dyn InquirySender = &sender;
        sink.send(draft.finish()).unwrap();

        let sent = sender.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Asha");
        assert_eq!(sent[0].message, "Need a quote");
    }

    #[test]
    fn console_sender_acknowledges() {
        let inquiry = Inquiry {
            name: "Asha".into(),
            email: "a@b.com".into(),
            phone: String::new(),
            company: String::new(),
            service: String::new(),
            message: "Need a quote".into(),
        };
        assert!(ConsoleSender.send(inquiry).is_ok());
    }
}
