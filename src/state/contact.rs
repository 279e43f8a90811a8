/// Contact form draft and submission lifecycle
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The kind of occasion an inquiry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Wedding,
    Corporate,
    Festival,
    Portrait,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Wedding,
        EventType::Corporate,
        EventType::Festival,
        EventType::Portrait,
        EventType::Other,
    ];
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventType::Wedding => "Wedding",
            EventType::Corporate => "Corporate Event",
            EventType::Festival => "Festival",
            EventType::Portrait => "Portrait Session",
            EventType::Other => "Other",
        })
    }
}

/// Text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    EventDate,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::EventDate => "event date",
            Field::Message => "message",
        })
    }
}

/// What the visitor has typed so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: Option<EventType>,
    /// ISO date (YYYY-MM-DD) or empty
    pub event_date: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::EventDate => &self.event_date,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::EventDate => &mut self.event_date,
            Field::Message => &mut self.message,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Lifecycle of one submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submission did not start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("please fill in your {0}")]
    MissingField(Field),
    #[error("please choose an event type")]
    MissingEventType,
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("please enter the event date as YYYY-MM-DD")]
    InvalidDate,
    #[error("your inquiry is already being sent")]
    AlreadySubmitting,
}

/// A validated inquiry, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub event_type: EventType,
    pub event_date: Option<NaiveDate>,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    #[cfg(test)]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Proof of a completed delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Outbox row id, when the inquiry was stored
    pub reference: Option<i64>,
    pub delivered_at: DateTime<Utc>,
}

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one submission across every form in the process, so a
/// delivery outcome can only complete the submission that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    fn issue() -> Self {
        Ticket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Form state: the draft plus where the current submission stands
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: SubmissionPhase,
    notice: Option<String>,
    /// Set exactly while `phase` is `Submitting`
    in_flight: Option<Ticket>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Last validation or delivery message for the visitor
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The submit control is disabled while a submission is in flight
    pub fn submit_disabled(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// A keystroke in a text field
    pub fn edit(&mut self, field: Field, value: String) {
        *self.draft.field_mut(field) = value;
    }

    pub fn pick_event_type(&mut self, event_type: EventType) {
        self.draft.event_type = Some(event_type);
    }

    /// Check the draft the way the form's input constraints would
    pub fn validate(&self, now: DateTime<Utc>) -> Result<Inquiry, FormError> {
        let draft = &self.draft;
        for field in [Field::Name, Field::Email] {
            if draft.field(field).trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }
        if !is_email(draft.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        let event_type = draft.event_type.ok_or(FormError::MissingEventType)?;
        if draft.message.trim().is_empty() {
            return Err(FormError::MissingField(Field::Message));
        }
        let event_date = match draft.event_date.trim() {
            "" => None,
            date => Some(NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| FormError::InvalidDate)?),
        };
        let phone = match draft.phone.trim() {
            "" => None,
            phone => Some(phone.to_string()),
        };

        Ok(Inquiry {
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone,
            event_type,
            event_date,
            message: draft.message.trim().to_string(),
            submitted_at: now,
        })
    }

    /// Submit pressed. On success the form is `Submitting` and the returned
    /// inquiry should be handed to a delivery, with the ticket coming back
    /// alongside its outcome. A refused submission leaves the phase unchanged.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<(Ticket, Inquiry), FormError> {
        if self.phase == SubmissionPhase::Submitting {
            return Err(FormError::AlreadySubmitting);
        }
        match self.validate(now) {
            Ok(inquiry) => {
                let ticket = Ticket::issue();
                self.phase = SubmissionPhase::Submitting;
                self.in_flight = Some(ticket);
                self.notice = None;
                Ok((ticket, inquiry))
            }
            Err(err) => {
                self.notice = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// The delivery for `ticket` finished. Success clears every field; failure
    /// keeps the draft so the visitor can retry. Returns false, changing
    /// nothing, unless `ticket` is the submission currently in flight.
    pub fn finish_submit<E: fmt::Display>(&mut self, ticket: Ticket, outcome: &Result<Receipt, E>) -> bool {
        if self.phase != SubmissionPhase::Submitting || self.in_flight != Some(ticket) {
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(_) => {
                self.phase = SubmissionPhase::Succeeded;
                self.draft = ContactDraft::default();
                self.notice = Some("Thank you! We'll get back to you within 24 hours.".to_string());
            }
            Err(err) => {
                self.phase = SubmissionPhase::Failed;
                self.notice = Some(format!("Something went wrong: {err}. Please try again."));
            }
        }
        true
    }
}

/// `local@domain` with no whitespace, the shape an email input accepts
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Priya".to_string());
        form.edit(Field::Email, "priya@example.com".to_string());
        form.pick_event_type(EventType::Wedding);
        form.edit(Field::Message, "We are getting married in March.".to_string());
        form
    }

    fn receipt() -> Receipt {
        Receipt {
            reference: None,
            delivered_at: Utc::now(),
        }
    }

    #[test]
    fn test_keystrokes_update_draft_immediately() {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "P".to_string());
        assert_eq!(form.draft().name, "P");
        form.edit(Field::Name, "Pr".to_string());
        assert_eq!(form.draft().field(Field::Name), "Pr");
    }

    #[test]
    fn test_idle_to_submitting_to_succeeded_clears_fields() {
        let mut form = filled();
        form.edit(Field::Phone, "+1 555 0100".to_string());
        assert_eq!(form.phase(), SubmissionPhase::Idle);

        let (ticket, inquiry) = form.begin_submit(Utc::now()).unwrap();
        assert_eq!(inquiry.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
        assert!(form.submit_disabled());

        assert!(form.finish_submit::<String>(ticket, &Ok(receipt())));
        assert_eq!(form.phase(), SubmissionPhase::Succeeded);
        assert!(!form.submit_disabled());
        assert!(form.draft().is_empty());
    }

    #[test]
    fn test_second_submit_is_refused_while_in_flight() {
        let mut form = filled();
        form.begin_submit(Utc::now()).unwrap();
        assert_eq!(form.begin_submit(Utc::now()), Err(FormError::AlreadySubmitting));
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit(Utc::now()).unwrap();
        form.finish_submit(ticket, &Err::<Receipt, _>("outbox unavailable"));
        assert_eq!(form.phase(), SubmissionPhase::Failed);
        assert_eq!(form.draft().name, "Priya");
        assert!(form.notice().unwrap().contains("outbox unavailable"));

        // And the visitor can retry
        assert!(form.begin_submit(Utc::now()).is_ok());
    }

    #[test]
    fn test_required_fields() {
        let now = Utc::now();
        let mut form = filled();
        form.edit(Field::Name, "   ".to_string());
        assert_eq!(form.begin_submit(now), Err(FormError::MissingField(Field::Name)));
        assert_eq!(form.phase(), SubmissionPhase::Idle);

        let mut form = filled();
        form.edit(Field::Message, String::new());
        assert_eq!(form.validate(now), Err(FormError::MissingField(Field::Message)));

        let mut form = ContactForm::new();
        form.edit(Field::Name, "A".to_string());
        form.edit(Field::Email, "a@b".to_string());
        form.edit(Field::Message, "hi".to_string());
        assert_eq!(form.validate(now), Err(FormError::MissingEventType));
    }

    #[test]
    fn test_phone_and_date_are_optional() {
        let inquiry = filled().validate(Utc::now()).unwrap();
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.event_date, None);
    }

    #[test]
    fn test_email_shape() {
        assert!(is_email("a@b"));
        assert!(is_email("hello@maelstromframes.com"));
        assert!(!is_email("hello"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("hello@"));
        assert!(!is_email("a@b@c"));
        assert!(!is_email("a b@c"));

        let mut form = filled();
        form.edit(Field::Email, "not-an-address".to_string());
        assert_eq!(form.validate(Utc::now()), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_event_date_must_be_iso() {
        let mut form = filled();
        form.edit(Field::EventDate, "2025-03-14".to_string());
        let inquiry = form.validate(Utc::now()).unwrap();
        assert_eq!(inquiry.event_date, NaiveDate::from_ymd_opt(2025, 3, 14));

        form.edit(Field::EventDate, "14/03/2025".to_string());
        assert_eq!(form.validate(Utc::now()), Err(FormError::InvalidDate));
    }

    #[test]
    fn test_late_completion_is_ignored() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit(Utc::now()).unwrap();
        assert!(form.finish_submit::<String>(ticket, &Ok(receipt())));

        form.edit(Field::Name, "Priya".to_string());
        // The same outcome delivered twice completes nothing the second time
        assert!(!form.finish_submit::<String>(ticket, &Ok(receipt())));
        assert_eq!(form.draft().name, "Priya");
    }

    #[test]
    fn test_outcome_of_an_abandoned_form_does_not_complete_a_new_one() {
        let mut first = filled();
        let (first_ticket, _) = first.begin_submit(Utc::now()).unwrap();
        // Visitor leaves the contact page and comes back to a fresh form
        drop(first);

        let mut second = filled();
        let (second_ticket, _) = second.begin_submit(Utc::now()).unwrap();
        assert_ne!(first_ticket, second_ticket);

        assert!(!second.finish_submit::<String>(first_ticket, &Ok(receipt())));
        assert_eq!(second.phase(), SubmissionPhase::Submitting);
        assert!(second.submit_disabled());
        assert_eq!(second.draft().name, "Priya");

        assert!(second.finish_submit(second_ticket, &Err::<Receipt, _>("outbox unavailable")));
        assert_eq!(second.phase(), SubmissionPhase::Failed);
        assert!(second.notice().unwrap().contains("outbox unavailable"));
    }

    #[test]
    fn test_inquiry_json() {
        let inquiry = filled().validate(Utc::now()).unwrap();
        let json = inquiry.to_json().unwrap();
        assert!(json.contains("\"event_type\":\"wedding\""));
        assert_eq!(Inquiry::from_json(&json).unwrap(), inquiry);
    }
}
