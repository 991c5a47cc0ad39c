use std::fmt;
use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::toast::{Notification, Notifier};

/// Artificial round trip of the simulated transport.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_DESCRIPTION: &str = "Thanks for reaching out. I'll get back to you soon.";
pub const FAILED_TITLE: &str = "Message not sent";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => SUBMIT_LABEL,
            Self::Submitting => SENDING_LABEL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The `name`/`id` attribute of the form control.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "john@example.com",
            Self::Subject => "Project inquiry",
            Self::Message => "Tell me about your project...",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw values as currently entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// First required field without a value, in form order.
    ///
    /// Presence follows HTML `required`: any non-empty value counts, whitespace included.
    pub fn first_missing(&self) -> Option<ContactField> {
        first_blank(|f| self.get(f))
    }

    pub fn is_cleared(&self) -> bool {
        ContactField::ALL.into_iter().all(|f| self.get(f).is_empty())
    }

    pub fn into_message(self) -> Result<ContactMessage, ContactField> {
        if let Some(field) = self.first_missing() {
            return Err(field);
        }
        Ok(ContactMessage {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
        })
    }
}

/// A complete message, ready to hand to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Result<(), TransportError> {
        match first_blank(|f| self.get(f)) {
            Some(field) => Err(TransportError::MissingField(field)),
            None => Ok(()),
        }
    }
}

fn first_blank<'a>(value: impl Fn(ContactField) -> &'a str) -> Option<ContactField> {
    ContactField::ALL.into_iter().find(|f| value(*f).is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub received_at: DateTime<Utc>,
}

impl Ack {
    pub fn now() -> Self {
        Self {
            received_at: Utc::now(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("{0} is required")]
    MissingField(ContactField),
    #[error("{0}")]
    Server(String),
}

/// Delivers a contact message somewhere.
pub trait Transport {
    fn send(&self, message: ContactMessage) -> impl Future<Output = Result<Ack, TransportError>>;
}

/// Timed suspension, supplied by whichever runtime drives the flow.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Stands in for a network round trip: waits [`SUBMIT_DELAY`] and always acknowledges.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport<D> {
    delay: D,
}

impl<D: Delay> SimulatedTransport<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }
}

impl<D: Delay> Transport for SimulatedTransport<D> {
    async fn send(&self, message: ContactMessage) -> Result<Ack, TransportError> {
        log::debug!("simulating delivery of '{}' from {}", message.subject, message.email);
        self.delay.sleep(SUBMIT_DELAY).await;
        Ok(Ack::now())
    }
}

/// Where submitted messages go, chosen at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportKind {
    #[default]
    Simulated,
    Server,
}

impl TransportKind {
    /// Unknown names fall back to the simulated transport.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "server" => Self::Server,
            _ => Self::Simulated,
        }
    }
}

/// Server-side receipt of a message. Checks presence and acknowledges; nothing is stored.
pub fn receive_message(message: &ContactMessage) -> Result<Ack, TransportError> {
    message.validate()?;
    Ok(Ack::now())
}

/// The rendering host of the contact form.
pub trait FormSurface {
    fn state(&self) -> SubmissionState;
    fn set_state(&self, state: SubmissionState);
    fn fields(&self) -> ContactFields;
    fn reset(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    InFlight,
    Incomplete(ContactField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent(Ack),
    Failed(TransportError),
    Ignored(Ignored),
}

#[derive(Debug, Clone)]
pub struct ContactFlow<T, N> {
    transport: T,
    notifier: N,
}

impl<T: Transport, N: Notifier> ContactFlow<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            transport,
            notifier,
        }
    }

    /// Runs one submission against `form`.
    ///
    /// The state flips to `Submitting` before the first suspension point and
    /// returns to `Idle` once the transport resolves. Fields are cleared only
    /// after a successful send.
    pub async fn submit<F: FormSurface>(&self, form: &F) -> SubmitOutcome {
        if form.state().is_submitting() {
            return SubmitOutcome::Ignored(Ignored::InFlight);
        }
        let message = match form.fields().into_message() {
            Ok(message) => message,
            Err(field) => return SubmitOutcome::Ignored(Ignored::Incomplete(field)),
        };

        form.set_state(SubmissionState::Submitting);
        log::debug!("contact form: idle -> submitting");

        let res = self.transport.send(message).await;

        let outcome = match res {
            Ok(ack) => {
                self.notifier
                    .show(Notification::success(SENT_TITLE, SENT_DESCRIPTION));
                form.set_state(SubmissionState::Idle);
                form.reset();
                SubmitOutcome::Sent(ack)
            }
            Err(err) => {
                log::warn!("contact message failed: {err}");
                self.notifier
                    .show(Notification::error(FAILED_TITLE, err.to_string()));
                form.set_state(SubmissionState::Idle);
                SubmitOutcome::Failed(err)
            }
        };
        log::debug!("contact form: submitting -> idle");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use tokio::task::LocalSet;
    use tokio::time::Instant;

    use super::*;
    use crate::toast::NotificationKind;

    #[derive(Default)]
    struct FakeForm {
        state: Cell<SubmissionState>,
        fields: RefCell<ContactFields>,
    }

    impl FakeForm {
        fn filled(fields: ContactFields) -> Self {
            Self {
                state: Cell::new(SubmissionState::Idle),
                fields: RefCell::new(fields),
            }
        }
    }

    impl FormSurface for FakeForm {
        fn state(&self) -> SubmissionState {
            self.state.get()
        }

        fn set_state(&self, state: SubmissionState) {
            self.state.set(state);
        }

        fn fields(&self) -> ContactFields {
            self.fields.borrow().clone()
        }

        fn reset(&self) {
            *self.fields.borrow_mut() = ContactFields::default();
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Rc<RefCell<Vec<Notification>>>);

    impl RecordingNotifier {
        fn shown(&self) -> Vec<Notification> {
            self.0.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn show(&self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    #[derive(Clone, Copy, Default)]
    struct TokioDelay;

    impl Delay for TokioDelay {
        async fn sleep(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    #[derive(Clone)]
    struct FailingTransport(&'static str);

    impl Transport for FailingTransport {
        async fn send(&self, _message: ContactMessage) -> Result<Ack, TransportError> {
            Err(TransportError::Server(self.0.to_string()))
        }
    }

    fn ada() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    fn simulated_flow() -> (
        ContactFlow<SimulatedTransport<TokioDelay>, RecordingNotifier>,
        RecordingNotifier,
    ) {
        let notifier = RecordingNotifier::default();
        let flow = ContactFlow::new(SimulatedTransport::new(TokioDelay), notifier.clone());
        (flow, notifier)
    }

    #[test]
    fn test_mounts_idle() {
        let form = FakeForm::default();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.state().button_label(), "Send Message");
        assert!(form.fields().is_cleared());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_end_to_end() {
        let (flow, notifier) = simulated_flow();
        let form = Rc::new(FakeForm::filled(ada()));

        LocalSet::new()
            .run_until(async {
                let started = Instant::now();
                let handle = tokio::task::spawn_local({
                    let flow = flow.clone();
                    let form = form.clone();
                    async move { flow.submit(&*form).await }
                });

                // same tick: control disabled, label swapped
                tokio::task::yield_now().await;
                assert_eq!(form.state(), SubmissionState::Submitting);
                assert!(form.state().is_submitting());
                assert_eq!(form.state().button_label(), "Sending...");

                tokio::time::sleep(Duration::from_millis(999)).await;
                assert_eq!(form.state(), SubmissionState::Submitting);
                assert!(notifier.shown().is_empty());
                assert_eq!(form.fields(), ada());

                let outcome = handle.await.expect("submit task panicked");
                assert!(matches!(outcome, SubmitOutcome::Sent(_)));
                assert!(started.elapsed() >= SUBMIT_DELAY);

                let shown = notifier.shown();
                assert_eq!(shown.len(), 1);
                assert_eq!(shown[0].title, "Message sent!");
                assert_eq!(shown[0].kind, NotificationKind::Success);

                assert_eq!(form.state(), SubmissionState::Idle);
                assert_eq!(form.state().button_label(), "Send Message");
                assert!(form.fields().is_cleared());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_while_submitting_is_ignored() {
        let (flow, notifier) = simulated_flow();
        let form = Rc::new(FakeForm::filled(ada()));

        LocalSet::new()
            .run_until(async {
                let handle = tokio::task::spawn_local({
                    let flow = flow.clone();
                    let form = form.clone();
                    async move { flow.submit(&*form).await }
                });
                tokio::task::yield_now().await;

                let second = flow.submit(&*form).await;
                assert_eq!(second, SubmitOutcome::Ignored(Ignored::InFlight));
                assert_eq!(form.state(), SubmissionState::Submitting);

                handle.await.expect("submit task panicked");
                assert_eq!(notifier.shown().len(), 1);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifies_once_per_submission() {
        let (flow, notifier) = simulated_flow();
        let form = FakeForm::filled(ada());

        assert!(matches!(flow.submit(&form).await, SubmitOutcome::Sent(_)));
        *form.fields.borrow_mut() = ada();
        assert!(matches!(flow.submit(&form).await, SubmitOutcome::Sent(_)));

        assert_eq!(notifier.shown().len(), 2);
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_incomplete_fields_do_not_transition() {
        let (flow, notifier) = simulated_flow();

        for field in ContactField::ALL {
            let mut fields = ada();
            fields.set(field, "");
            let form = FakeForm::filled(fields.clone());

            let outcome = flow.submit(&form).await;
            assert_eq!(outcome, SubmitOutcome::Ignored(Ignored::Incomplete(field)));
            assert_eq!(form.state(), SubmissionState::Idle);
            assert_eq!(form.fields(), fields);
        }
        assert!(notifier.shown().is_empty());
    }

    #[tokio::test]
    async fn test_failed_transport_keeps_fields() {
        let notifier = RecordingNotifier::default();
        let flow = ContactFlow::new(FailingTransport("mail relay unavailable"), notifier.clone());
        let form = FakeForm::filled(ada());

        let outcome = flow.submit(&form).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(TransportError::Server("mail relay unavailable".to_string()))
        );

        let shown = notifier.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "Message not sent");
        assert_eq!(shown[0].description, "mail relay unavailable");
        assert_eq!(shown[0].kind, NotificationKind::Error);

        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.fields(), ada());
    }

    #[test]
    fn test_presence_matches_required_attribute() {
        let mut fields = ada();
        fields.set(ContactField::Subject, "   ");
        assert_eq!(fields.first_missing(), None);

        fields.set(ContactField::Email, "");
        fields.set(ContactField::Message, "");
        assert_eq!(fields.first_missing(), Some(ContactField::Email));
        assert_eq!(fields.into_message(), Err(ContactField::Email));
    }

    #[test]
    fn test_validate_agrees_with_form_presence() {
        let message = ada().into_message().unwrap();
        assert_eq!(message.validate(), Ok(()));

        for field in ContactField::ALL {
            let mut fields = ada();
            fields.set(field, "");
            let mut blank = message.clone();
            match field {
                ContactField::Name => blank.name.clear(),
                ContactField::Email => blank.email.clear(),
                ContactField::Subject => blank.subject.clear(),
                ContactField::Message => blank.message.clear(),
            }
            assert_eq!(blank.get(field), "");
            assert_eq!(fields.first_missing(), Some(field));
            assert_eq!(blank.validate(), Err(TransportError::MissingField(field)));
        }
    }

    #[test]
    fn test_receive_message() {
        let message = ada().into_message().unwrap();
        assert!(receive_message(&message).is_ok());

        let blank = ContactMessage {
            name: String::new(),
            ..message
        };
        let err = receive_message(&blank).unwrap_err();
        assert_eq!(err, TransportError::MissingField(ContactField::Name));
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_message_wire_shape() {
        let message = ada().into_message().unwrap();
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "subject": "Hi",
                "message": "Hello",
            })
        );

        let ack: Ack =
            serde_json::from_str(r#"{"received_at":"2025-01-02T03:04:05Z"}"#).unwrap();
        assert_eq!(ack.received_at.to_rfc3339(), "2025-01-02T03:04:05+00:00");
    }

    #[test]
    fn test_transport_kind_from_name() {
        assert_eq!(TransportKind::from_name("server"), TransportKind::Server);
        assert_eq!(TransportKind::from_name(" Server\n"), TransportKind::Server);
        assert_eq!(TransportKind::from_name("simulated"), TransportKind::Simulated);
        assert_eq!(TransportKind::from_name("smtp"), TransportKind::Simulated);
        assert_eq!(TransportKind::from_name(""), TransportKind::default());
    }

    #[test]
    fn test_field_attributes() {
        let names: Vec<&str> = ContactField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "email", "subject", "message"]);
        assert_eq!(ContactField::Email.to_string(), "Email");
    }
}
