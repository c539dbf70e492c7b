use std::{collections::BTreeMap, fmt, str::FromStr, time::Duration};

use thiserror::Error;

use crate::{
    catalog::{budget_label, service_type_label, timeline_label, WHATSAPP_BASE, WHATSAPP_NUMBER},
    redirect::ExternalNavigator,
};

/// How long the success confirmation stays up before the form resets.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

const SIGNATURE: &str = "This message was sent from my portfolio website.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    Name,
    Phone,
    Message,
    ServiceType,
    Description,
    Budget,
    Timeline,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Message => "message",
            Self::ServiceType => "serviceType",
            Self::Description => "description",
            Self::Budget => "budget",
            Self::Timeline => "timeline",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "phone" => Ok(Self::Phone),
            "message" => Ok(Self::Message),
            "serviceType" => Ok(Self::ServiceType),
            "description" => Ok(Self::Description),
            "budget" => Ok(Self::Budget),
            "timeline" => Ok(Self::Timeline),
            other => Err(FormError::UnknownKey(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Contact,
    ServiceRequest,
}

impl FormKind {
    pub fn keys(&self) -> &'static [FieldKey] {
        use FieldKey::*;
        match self {
            Self::Contact => &[Name, Phone, Message],
            Self::ServiceRequest => &[Name, Phone, ServiceType, Description, Budget, Timeline],
        }
    }

    pub fn required(&self) -> &'static [FieldKey] {
        use FieldKey::*;
        match self {
            Self::Contact => &[Name, Phone, Message],
            Self::ServiceRequest => &[Name, Phone, ServiceType, Description],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Contact => "Contact Form Submission",
            Self::ServiceRequest => "Custom Service Request",
        }
    }

    pub fn body_key(&self) -> FieldKey {
        match self {
            Self::Contact => FieldKey::Message,
            Self::ServiceRequest => FieldKey::Description,
        }
    }

    pub fn body_label(&self) -> &'static str {
        match self {
            Self::Contact => "Message",
            Self::ServiceRequest => "Project Description",
        }
    }

    /// The service request modal closes itself once the form resets.
    pub fn closes_on_reset(&self) -> bool {
        matches!(self, Self::ServiceRequest)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field key: {0}")]
    UnknownKey(String),
    #[error("field {field} is not part of the {form:?} form")]
    UnknownField { field: FieldKey, form: FormKind },
    #[error("missing required fields: {}", join_keys(.0))]
    MissingRequired(Vec<FieldKey>),
    #[error("form was already submitted")]
    AlreadySubmitted,
}

fn join_keys(keys: &[FieldKey]) -> String {
    keys.iter()
        .map(FieldKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// What a successful submit handed to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    values: BTreeMap<FieldKey, String>,
    active_field: Option<FieldKey>,
    is_submitted: bool,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        let values = kind.keys().iter().map(|k| (*k, String::new())).collect();
        Self {
            kind,
            values,
            active_field: None,
            is_submitted: false,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn value(&self, key: FieldKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or_default()
    }

    pub fn values(&self) -> &BTreeMap<FieldKey, String> {
        &self.values
    }

    pub fn active_field(&self) -> Option<FieldKey> {
        self.active_field
    }

    pub fn is_active(&self, key: FieldKey) -> bool {
        self.active_field == Some(key)
    }

    pub fn is_submitted(&self) -> bool {
        self.is_submitted
    }

    pub fn handle_change(&mut self, key: FieldKey, value: impl Into<String>) -> Result<(), FormError> {
        let slot = self.values.get_mut(&key).ok_or(FormError::UnknownField {
            field: key,
            form: self.kind,
        })?;
        *slot = value.into();
        Ok(())
    }

    pub fn set_active_field(&mut self, key: Option<FieldKey>) {
        self.active_field = key;
    }

    /// Required keys whose value is empty or only whitespace.
    pub fn missing_required(&self) -> Vec<FieldKey> {
        self.kind
            .required()
            .iter()
            .copied()
            .filter(|k| self.value(*k).trim().is_empty())
            .collect()
    }

    pub fn compose_message(&self) -> String {
        let mut lines = vec![
            format!("*{}*", self.kind.title()),
            String::new(),
            format!("*Name:* {}", self.value(FieldKey::Name)),
            format!("*Phone:* {}", self.value(FieldKey::Phone)),
        ];
        if self.kind == FormKind::ServiceRequest {
            lines.push(format!(
                "*Service Type:* {}",
                service_type_label(self.value(FieldKey::ServiceType))
            ));
            lines.push(format!("*Budget:* {}", budget_label(self.value(FieldKey::Budget))));
            lines.push(format!(
                "*Timeline:* {}",
                timeline_label(self.value(FieldKey::Timeline))
            ));
        }
        lines.push(String::new());
        lines.push(format!("*{}:*", self.kind.body_label()));
        lines.push(self.value(self.kind.body_key()).to_string());
        lines.push(String::new());
        lines.push("---".to_string());
        lines.push(SIGNATURE.to_string());
        lines.join("\n")
    }

    pub fn redirect_url(&self) -> String {
        redirect_url_for(&self.compose_message())
    }

    pub fn submit(&mut self, navigator: &dyn ExternalNavigator) -> Result<Submission, FormError> {
        if self.is_submitted {
            return Err(FormError::AlreadySubmitted);
        }
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(FormError::MissingRequired(missing));
        }

        let message = self.compose_message();
        let url = redirect_url_for(&message);
        // the confirmation is optimistic either way
        if let Err(e) = navigator.open(&url) {
            log::warn!("couldn't open messaging link: {e}");
        }
        self.is_submitted = true;
        log::debug!("{:?} form submitted", self.kind);
        Ok(Submission { message, url })
    }

    /// Returns to idle once `elapsed` since the submit reaches [`RESET_DELAY`].
    pub fn poll_reset(&mut self, elapsed: Duration) -> bool {
        if !self.is_submitted || elapsed < RESET_DELAY {
            return false;
        }
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        self.values.values_mut().for_each(String::clear);
        self.active_field = None;
        self.is_submitted = false;
    }
}

pub fn redirect_url_for(message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::redirect::NavigationError;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ExternalNavigator for RecordingNavigator {
        fn open(&self, url: &str) -> Result<(), NavigationError> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                Err(NavigationError::Blocked)
            } else {
                Ok(())
            }
        }
    }

    fn filled_service_request() -> FormState {
        let mut form = FormState::new(FormKind::ServiceRequest);
        form.handle_change(FieldKey::Name, "Ama Boateng").unwrap();
        form.handle_change(FieldKey::Phone, "+233200000000").unwrap();
        form.handle_change(FieldKey::ServiceType, "web-development").unwrap();
        form.handle_change(FieldKey::Budget, "5k-10k").unwrap();
        form.handle_change(FieldKey::Timeline, "asap").unwrap();
        form.handle_change(FieldKey::Description, "Need a landing page").unwrap();
        form
    }

    #[test]
    fn test_field_key_round_trips_through_str() {
        for key in FormKind::ServiceRequest.keys().iter().chain(FormKind::Contact.keys()) {
            assert_eq!(key.as_str().parse::<FieldKey>(), Ok(*key));
        }
        assert!(matches!(
            "email".parse::<FieldKey>(),
            Err(FormError::UnknownKey(k)) if k == "email"
        ));
    }

    #[test]
    fn test_handle_change_touches_only_its_key() {
        let mut form = FormState::new(FormKind::Contact);
        form.handle_change(FieldKey::Phone, "0200000000").unwrap();
        assert_eq!(form.value(FieldKey::Phone), "0200000000");
        assert_eq!(form.value(FieldKey::Name), "");
        assert_eq!(form.value(FieldKey::Message), "");
        assert_eq!(form.values().len(), 3);
    }

    #[test]
    fn test_handle_change_rejects_foreign_key() {
        let mut form = FormState::new(FormKind::Contact);
        assert_eq!(
            form.handle_change(FieldKey::Budget, "5k-10k"),
            Err(FormError::UnknownField {
                field: FieldKey::Budget,
                form: FormKind::Contact
            })
        );
        assert_eq!(form.value(FieldKey::Budget), "");
    }

    #[test]
    fn test_single_active_field() {
        let mut form = FormState::new(FormKind::Contact);
        form.set_active_field(Some(FieldKey::Name));
        form.set_active_field(Some(FieldKey::Phone));
        assert!(form.is_active(FieldKey::Phone));
        assert!(!form.is_active(FieldKey::Name));
        form.set_active_field(None);
        assert_eq!(form.active_field(), None);
    }

    #[test]
    fn test_service_request_end_to_end() {
        let mut form = filled_service_request();
        let nav = RecordingNavigator::default();
        let submission = form.submit(&nav).unwrap();

        assert!(submission.message.contains("*Service Type:* Web Development"));
        assert!(submission.message.contains("*Budget:* ₵5,000 - ₵10,000"));
        assert!(submission.message.contains("*Timeline:* ASAP"));
        assert!(submission.message.contains("Need a landing page"));
        assert!(submission.url.starts_with("https://wa.me/233554572904?text="));
        assert_eq!(*nav.opened.borrow(), vec![submission.url.clone()]);
        assert!(form.is_submitted());
    }

    #[test]
    fn test_service_request_layout() {
        let form = filled_service_request();
        let expected = "*Custom Service Request*\n\
            \n\
            *Name:* Ama Boateng\n\
            *Phone:* +233200000000\n\
            *Service Type:* Web Development\n\
            *Budget:* ₵5,000 - ₵10,000\n\
            *Timeline:* ASAP\n\
            \n\
            *Project Description:*\n\
            Need a landing page\n\
            \n\
            ---\n\
            This message was sent from my portfolio website.";
        assert_eq!(form.compose_message(), expected);
    }

    #[test]
    fn test_contact_layout() {
        let mut form = FormState::new(FormKind::Contact);
        form.handle_change(FieldKey::Name, "Kofi").unwrap();
        form.handle_change(FieldKey::Phone, "0244000000").unwrap();
        form.handle_change(FieldKey::Message, "Hello\nthere").unwrap();
        let expected = "*Contact Form Submission*\n\n*Name:* Kofi\n*Phone:* 0244000000\n\n*Message:*\nHello\nthere\n\n---\nThis message was sent from my portfolio website.";
        assert_eq!(form.compose_message(), expected);
        assert_eq!(form.compose_message(), form.clone().compose_message());
    }

    #[test]
    fn test_unset_optional_choices_read_not_specified() {
        let mut form = filled_service_request();
        form.handle_change(FieldKey::Budget, "").unwrap();
        form.handle_change(FieldKey::Timeline, "next-year").unwrap();
        let message = form.compose_message();
        assert!(message.contains("*Budget:* Not specified"));
        assert!(message.contains("*Timeline:* next-year"));
    }

    #[test]
    fn test_empty_service_type_reads_not_specified() {
        let mut form = filled_service_request();
        form.handle_change(FieldKey::ServiceType, "").unwrap();
        let message = form.compose_message();
        assert!(message.contains("*Service Type:* Not specified\n"));
        assert!(!message.contains("*Service Type:* \n"));
    }

    #[test]
    fn test_redirect_url_decodes_to_message() {
        let form = filled_service_request();
        let url = form.redirect_url();
        let encoded = url
            .strip_prefix("https://wa.me/233554572904?text=")
            .unwrap();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert_eq!(urlencoding::decode(encoded).unwrap(), form.compose_message());
    }

    #[test]
    fn test_empty_message_blocks_submit() {
        let mut form = FormState::new(FormKind::Contact);
        form.handle_change(FieldKey::Name, "Kofi").unwrap();
        form.handle_change(FieldKey::Phone, "0244000000").unwrap();
        form.handle_change(FieldKey::Message, "   ").unwrap();
        let nav = RecordingNavigator::default();
        assert_eq!(
            form.submit(&nav),
            Err(FormError::MissingRequired(vec![FieldKey::Message]))
        );
        assert!(!form.is_submitted());
        assert!(nav.opened.borrow().is_empty());
    }

    #[test]
    fn test_service_request_budget_and_timeline_optional() {
        let mut form = filled_service_request();
        form.handle_change(FieldKey::Budget, "").unwrap();
        form.handle_change(FieldKey::Timeline, "").unwrap();
        assert!(form.missing_required().is_empty());
        form.handle_change(FieldKey::ServiceType, "").unwrap();
        assert_eq!(form.missing_required(), vec![FieldKey::ServiceType]);
    }

    #[test]
    fn test_blocked_navigation_still_confirms() {
        let mut form = filled_service_request();
        let nav = RecordingNavigator {
            fail: true,
            ..Default::default()
        };
        assert!(form.submit(&nav).is_ok());
        assert!(form.is_submitted());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled_service_request();
        let nav = RecordingNavigator::default();
        form.submit(&nav).unwrap();
        assert_eq!(form.submit(&nav), Err(FormError::AlreadySubmitted));
        assert_eq!(nav.opened.borrow().len(), 1);
    }

    #[test]
    fn test_reset_only_after_delay() {
        let mut form = filled_service_request();
        form.set_active_field(Some(FieldKey::Description));
        form.submit(&RecordingNavigator::default()).unwrap();

        assert!(!form.poll_reset(Duration::from_millis(2999)));
        assert!(form.is_submitted());
        assert_eq!(form.value(FieldKey::Name), "Ama Boateng");

        assert!(form.poll_reset(RESET_DELAY));
        assert!(!form.is_submitted());
        assert!(form.values().values().all(String::is_empty));
        assert_eq!(form.active_field(), None);
        assert_eq!(form, FormState::new(FormKind::ServiceRequest));
    }

    #[test]
    fn test_poll_reset_ignored_when_idle() {
        let mut form = filled_service_request();
        assert!(!form.poll_reset(RESET_DELAY));
        assert_eq!(form.value(FieldKey::Name), "Ama Boateng");
    }

    #[test]
    fn test_missing_required_error_lists_keys() {
        let err = FormError::MissingRequired(vec![FieldKey::Name, FieldKey::ServiceType]);
        assert_eq!(err.to_string(), "missing required fields: name, serviceType");
    }
}
