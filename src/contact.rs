use crate::{
    logging::{log_event, LogLevel},
    runtime::{Clock, Scheduler, Subscription},
    storage::{KeyValueStore, StorageError, SubmissionLog},
};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    sync::LazyLock,
};
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully! Thank you for reaching out.";

// Deliberately lenient; not RFC 5322.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    #[serde(flatten)]
    pub form: ContactFormData,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Valid email is required")]
    InvalidEmail,
    #[error("Subject is required")]
    MissingSubject,
    #[error("Message is required")]
    MissingMessage,
}

impl ValidationError {
    pub fn field(self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::InvalidEmail => ContactField::Email,
            Self::MissingSubject => ContactField::Subject,
            Self::MissingMessage => ContactField::Message,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to submit form")]
    Storage(#[from] StorageError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub success: bool,
    pub message: String,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn validate(form: &ContactFormData) -> Result<(), ValidationError> {
    if form.name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if form.email.trim().is_empty() || !is_valid_email(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if form.subject.trim().is_empty() {
        return Err(ValidationError::MissingSubject);
    }
    if form.message.trim().is_empty() {
        return Err(ValidationError::MissingMessage);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactSettings {
    pub storage_key: String,
    pub success_reset_ms: u32,
    pub error_reset_ms: u32,
    pub log_level: LogLevel,
}

impl Default for ContactSettings {
    fn default() -> Self {
        crate::config::SiteConfig::default().contact_settings()
    }
}

#[derive(Default)]
struct ContactState {
    form: ContactFormData,
    status: SubmissionStatus,
    error: Option<String>,
    success: bool,
    message: Option<String>,
    reset_timer: Option<Subscription>,
    listener: Option<Rc<dyn Fn()>>,
}

/// Owns the form for one mounted contact section. Dropping the store cancels
/// its pending status reset.
pub struct ContactStore {
    state: Rc<RefCell<ContactState>>,
    log: SubmissionLog,
    scheduler: Rc<dyn Scheduler>,
    clock: Rc<dyn Clock>,
    settings: ContactSettings,
}

impl ContactStore {
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        scheduler: Rc<dyn Scheduler>,
        clock: Rc<dyn Clock>,
        settings: ContactSettings,
    ) -> Self {
        let log = SubmissionLog::new(store, settings.storage_key.clone(), settings.log_level);

        Self {
            state: Rc::new(RefCell::new(ContactState::default())),
            log,
            scheduler,
            clock,
            settings,
        }
    }

    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.state.borrow_mut().listener = Some(Rc::new(listener));
    }

    pub fn form(&self) -> ContactFormData {
        self.state.borrow().form.clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().status
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn is_success(&self) -> bool {
        self.state.borrow().success
    }

    pub fn message(&self) -> Option<String> {
        self.state.borrow().message.clone()
    }

    pub fn submissions(&self) -> Vec<SubmissionRecord> {
        self.log.records()
    }

    pub fn update_field(&self, field: ContactField, value: impl Into<String>) {
        self.state.borrow_mut().form.set(field, value.into());
        notify(&self.state);
    }

    pub fn submit(&self) -> SubmissionOutcome {
        let stale_timer = {
            let mut state = self.state.borrow_mut();
            state.status = SubmissionStatus::Submitting;
            state.error = None;
            state.success = false;
            state.reset_timer.take()
        };
        drop(stale_timer);
        notify(&self.state);

        let form = self.form();
        match self.persist(form) {
            Ok(count) => {
                log_event(
                    self.settings.log_level,
                    LogLevel::Info,
                    "contact_submit_accepted",
                    json!({ "key": self.log.key(), "records": count }),
                );

                {
                    let mut state = self.state.borrow_mut();
                    state.status = SubmissionStatus::Success;
                    state.success = true;
                    state.form = ContactFormData::default();
                    state.message = Some(SUCCESS_MESSAGE.to_string());
                }
                self.schedule_status_reset(self.settings.success_reset_ms);

                SubmissionOutcome {
                    success: true,
                    message: SUCCESS_MESSAGE.to_string(),
                }
            }
            Err(error) => {
                self.log_failure(&error);
                let message = error.to_string();

                {
                    let mut state = self.state.borrow_mut();
                    state.status = SubmissionStatus::Error;
                    state.error = Some(message.clone());
                    state.message = Some(message.clone());
                }
                self.schedule_status_reset(self.settings.error_reset_ms);

                SubmissionOutcome {
                    success: false,
                    message,
                }
            }
        }
    }

    pub fn reset(&self) {
        self.state.borrow_mut().form = ContactFormData::default();
        notify(&self.state);
    }

    /// Clears the error, success flag and outcome message; fields and status
    /// are untouched.
    pub fn clear_messages(&self) {
        {
            let mut state = self.state.borrow_mut();
            state.error = None;
            state.success = false;
            state.message = None;
        }
        notify(&self.state);
    }

    fn persist(&self, form: ContactFormData) -> Result<usize, SubmitError> {
        validate(&form)?;
        let record = SubmissionRecord {
            form,
            submitted_at: self.clock.now(),
        };
        Ok(self.log.append(record)?)
    }

    fn log_failure(&self, error: &SubmitError) {
        match error {
            SubmitError::Validation(rule) => log_event(
                self.settings.log_level,
                LogLevel::Debug,
                "contact_submit_rejected",
                json!({ "field": rule.field().as_str() }),
            ),
            SubmitError::Storage(cause) => log_event(
                self.settings.log_level,
                LogLevel::Warn,
                "contact_persist_failed",
                json!({ "key": self.log.key(), "error": cause.to_string() }),
            ),
        }
    }

    fn schedule_status_reset(&self, delay_ms: u32) {
        let state: Weak<RefCell<ContactState>> = Rc::downgrade(&self.state);
        let timer = self.scheduler.after(
            delay_ms,
            Box::new(move || {
                let Some(state) = state.upgrade() else {
                    return;
                };
                state.borrow_mut().status = SubmissionStatus::Idle;
                notify(&state);
            }),
        );

        let replaced = self.state.borrow_mut().reset_timer.replace(timer);
        drop(replaced);
        notify(&self.state);
    }
}

impl Drop for ContactStore {
    fn drop(&mut self) {
        let timer = self.state.borrow_mut().reset_timer.take();
        drop(timer);
    }
}

fn notify(state: &Rc<RefCell<ContactState>>) {
    let listener = state.borrow().listener.clone();
    if let Some(listener) = listener {
        listener();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        runtime::VirtualScheduler,
        storage::{MemoryStore, StorageError},
    };
    use proptest::prelude::*;

    struct RejectingStore;

    impl KeyValueStore for RejectingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteRejected {
                key: key.to_string(),
            })
        }
    }

    struct Harness {
        scheduler: VirtualScheduler,
        backend: Rc<MemoryStore>,
        store: ContactStore,
    }

    fn harness() -> Harness {
        let scheduler = VirtualScheduler::default();
        let backend = Rc::new(MemoryStore::default());
        let store = ContactStore::new(
            backend.clone(),
            Rc::new(scheduler.clone()),
            Rc::new(scheduler.clone()),
            ContactSettings {
                log_level: LogLevel::Warn,
                ..ContactSettings::default()
            },
        );

        Harness {
            scheduler,
            backend,
            store,
        }
    }

    fn fill(store: &ContactStore, form: &ContactFormData) {
        for field in ContactField::ALL {
            store.update_field(field, form.get(field));
        }
    }

    fn valid_form() -> ContactFormData {
        ContactFormData {
            name: "Grace Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            subject: "Compilers".to_string(),
            message: "Let's talk about COBOL.".to_string(),
        }
    }

    #[test]
    fn email_pattern_keeps_reference_leniency() {
        assert!(!is_valid_email("foo"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("@bar.com"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(is_valid_email("weird!#$@x.y"));
    }

    #[test]
    fn validation_reports_first_failing_rule_in_field_order() {
        let blank = ContactFormData::default();
        assert_eq!(validate(&blank), Err(ValidationError::MissingName));

        let form = ContactFormData {
            name: "Ada".to_string(),
            email: "ada@".to_string(),
            ..ContactFormData::default()
        };
        assert_eq!(validate(&form), Err(ValidationError::InvalidEmail));

        let form = ContactFormData {
            subject: "  \t".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ValidationError::MissingSubject));

        let form = ContactFormData {
            message: "\n".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn email_with_surrounding_whitespace_is_rejected() {
        let form = ContactFormData {
            email: " grace@navy.mil ".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn update_field_merges_without_validation() {
        let Harness { store, .. } = harness();

        store.update_field(ContactField::Email, "not-an-email");
        store.update_field(ContactField::Name, "Ada");

        let form = store.form();
        assert_eq!(form.email, "not-an-email");
        assert_eq!(form.name, "Ada");
        assert_eq!(store.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn successful_submit_persists_clears_and_resets_after_five_seconds() {
        let Harness {
            scheduler,
            store,
            ..
        } = harness();
        fill(&store, &valid_form());

        let outcome = store.submit();

        assert!(outcome.success);
        assert_eq!(outcome.message, SUCCESS_MESSAGE);
        assert_eq!(store.status(), SubmissionStatus::Success);
        assert!(store.is_success());
        assert_eq!(store.form(), ContactFormData::default());

        let records = store.submissions();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].form, valid_form());

        scheduler.advance(4_999);
        assert_eq!(store.status(), SubmissionStatus::Success);
        scheduler.advance(1);
        assert_eq!(store.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn failed_submit_keeps_form_and_resets_after_three_seconds() {
        let Harness {
            scheduler,
            backend,
            store,
        } = harness();
        let form = ContactFormData {
            email: "foo@bar".to_string(),
            ..valid_form()
        };
        fill(&store, &form);

        let outcome = store.submit();

        assert!(!outcome.success);
        assert_eq!(outcome.message, "Valid email is required");
        assert_eq!(store.status(), SubmissionStatus::Error);
        assert_eq!(store.error().as_deref(), Some("Valid email is required"));
        assert_eq!(store.form(), form);
        assert!(backend.get("formSubmissions").is_none());

        scheduler.advance(3_000);
        assert_eq!(store.status(), SubmissionStatus::Idle);
        assert_eq!(store.form(), form);
    }

    #[test]
    fn storage_failure_surfaces_generic_message() {
        let scheduler = VirtualScheduler::default();
        let store = ContactStore::new(
            Rc::new(RejectingStore),
            Rc::new(scheduler.clone()),
            Rc::new(scheduler.clone()),
            ContactSettings {
                log_level: LogLevel::Warn,
                ..ContactSettings::default()
            },
        );
        fill(&store, &valid_form());

        let outcome = store.submit();

        assert!(!outcome.success);
        assert_eq!(outcome.message, "Failed to submit form");
        assert_eq!(store.status(), SubmissionStatus::Error);
        assert_eq!(store.form(), valid_form());
    }

    #[test]
    fn resubmitting_cancels_the_previous_reset_timer() {
        let Harness {
            scheduler,
            store,
            ..
        } = harness();

        store.submit();
        assert_eq!(store.status(), SubmissionStatus::Error);
        scheduler.advance(2_000);

        fill(&store, &valid_form());
        store.submit();
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(1_500);
        assert_eq!(store.status(), SubmissionStatus::Success);
        scheduler.advance(3_500);
        assert_eq!(store.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn listener_observes_submitting_before_settling() {
        let Harness { store, .. } = harness();
        let store = Rc::new(store);
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            let observed = Rc::downgrade(&store);
            store.subscribe(move || {
                if let Some(store) = observed.upgrade() {
                    seen.borrow_mut().push(store.status());
                }
            });
        }
        fill(&store, &valid_form());
        seen.borrow_mut().clear();

        store.submit();

        let seen = seen.borrow();
        assert_eq!(seen.first(), Some(&SubmissionStatus::Submitting));
        assert_eq!(seen.last(), Some(&SubmissionStatus::Success));
    }

    #[test]
    fn reset_and_clear_messages_touch_only_their_own_state() {
        let Harness { store, .. } = harness();
        store.update_field(ContactField::Name, "Ada");
        store.submit();
        assert!(store.error().is_some());

        store.clear_messages();
        assert!(store.error().is_none());
        assert!(!store.is_success());
        assert_eq!(store.status(), SubmissionStatus::Error);
        assert_eq!(store.form().name, "Ada");

        store.reset();
        assert_eq!(store.form(), ContactFormData::default());
        assert_eq!(store.status(), SubmissionStatus::Error);
    }

    #[test]
    fn clear_messages_hides_the_rendered_outcome() {
        let Harness { store, .. } = harness();
        store.submit();
        assert_eq!(store.message().as_deref(), Some("Name is required"));

        store.clear_messages();
        assert!(store.message().is_none());

        fill(&store, &valid_form());
        store.submit();
        assert_eq!(store.message().as_deref(), Some(SUCCESS_MESSAGE));

        store.clear_messages();
        assert!(store.message().is_none());
        assert!(!store.is_success());
        assert_eq!(store.status(), SubmissionStatus::Success);
    }

    #[test]
    fn dropping_the_store_cancels_pending_reset() {
        let Harness {
            scheduler,
            store,
            ..
        } = harness();
        store.submit();
        assert_eq!(scheduler.pending(), 1);

        drop(store);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn records_are_stamped_with_the_injected_clock() {
        let Harness {
            scheduler,
            store,
            ..
        } = harness();
        scheduler.advance(42_000);
        let expected = scheduler.now();
        fill(&store, &valid_form());

        store.submit();

        assert_eq!(store.submissions()[0].submitted_at, expected);
    }

    #[test]
    fn field_names_round_trip() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(ContactField::from_name("phone"), None);
    }

    fn filled() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 .,!?]{0,40}"
    }

    fn email() -> impl Strategy<Value = String> {
        ("[a-z0-9._%+-]{1,12}", "[a-z0-9-]{1,12}", "[a-z]{2,6}")
            .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
    }

    proptest! {
        #[test]
        fn any_valid_form_is_persisted_exactly_once(
            name in filled(),
            email in email(),
            subject in filled(),
            message in filled(),
            prior in 0usize..4,
        ) {
            let Harness { store, .. } = harness();
            for _ in 0..prior {
                fill(&store, &valid_form());
                prop_assert!(store.submit().success);
            }
            let form = ContactFormData { name, email, subject, message };
            fill(&store, &form);

            let outcome = store.submit();

            prop_assert!(outcome.success);
            let records = store.submissions();
            prop_assert_eq!(records.len(), prior + 1);
            prop_assert_eq!(&records[prior].form, &form);
            prop_assert_eq!(store.form(), ContactFormData::default());
        }

        #[test]
        fn any_form_missing_a_field_leaves_the_log_unchanged(
            missing in 0usize..4,
            blank in "[ \t\n]{0,3}",
        ) {
            let Harness { store, .. } = harness();
            fill(&store, &valid_form());
            prop_assert!(store.submit().success);

            let mut form = valid_form();
            form.set(ContactField::ALL[missing], blank);
            fill(&store, &form);

            let outcome = store.submit();

            prop_assert!(!outcome.success);
            prop_assert_eq!(store.submissions().len(), 1);
        }
    }
}
