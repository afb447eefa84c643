use chrono::{NaiveDate, NaiveTime};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::auth::MAX_PASSWORD_BYTES;
use crate::booking::{self, DATE_FORMAT, TIME_FORMAT};
use crate::error::ValidationError;
use crate::models::{
    clamp_rating, Doctor, DoctorInput, Specialty, DEFAULT_RATING, MAX_RATING, MIN_RATING,
    RATING_STEP,
};

/// Width of the rating gauge drawn next to the numeric value.
const RATING_GAUGE_WIDTH: usize = 20;

/// Style shared by every form: active field in yellow, empty ones dimmed.
fn field_style(is_active: bool, is_empty: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Yellow)
    } else if is_empty {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    }
}

fn text_line(field_name: &str, value: &str, placeholder: &str, is_active: bool) -> Line<'static> {
    let display = if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    };
    Line::from(vec![
        Span::raw(format!("{field_name}: ")),
        Span::styled(display, field_style(is_active, value.is_empty())),
    ])
}

/// The two tabs of the login screen.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum AuthTab {
    #[default]
    Login,
    CreateAccount,
}

impl AuthTab {
    pub(crate) fn title(&self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::CreateAccount => "Create Account",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum CredentialsField {
    #[default]
    Email,
    Password,
}

/// Email and password buffers for either tab.
#[derive(Default, Clone, Debug)]
pub(crate) struct CredentialsForm {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) active: CredentialsField,
    pub(crate) error: Option<String>,
}

impl CredentialsForm {
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            CredentialsField::Email => CredentialsField::Password,
            CredentialsField::Password => CredentialsField::Email,
        };
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            CredentialsField::Email => self.email.push(ch),
            CredentialsField::Password => self.password.push(ch),
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            CredentialsField::Email => {
                self.email.pop();
            }
            CredentialsField::Password => {
                self.password.pop();
            }
        }
    }

    /// Both fields are required; the email is trimmed, the password is not.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String), ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(ValidationError::PasswordTooLong);
        }
        Ok((email.to_string(), self.password.clone()))
    }

    /// Drop the password after a submit so it does not linger on screen.
    pub(crate) fn clear_password(&mut self) {
        self.password.clear();
    }

    pub(crate) fn build_line(&self, field_name: &str, field: CredentialsField) -> Line<'static> {
        let is_active = self.active == field;
        match field {
            CredentialsField::Email => text_line(field_name, &self.email, "<required>", is_active),
            CredentialsField::Password => {
                let masked = "*".repeat(self.password.chars().count());
                text_line(field_name, &masked, "<required>", is_active)
            }
        }
    }

    pub(crate) fn value_len(&self, field: CredentialsField) -> usize {
        match field {
            CredentialsField::Email => self.email.chars().count(),
            CredentialsField::Password => self.password.chars().count(),
        }
    }
}

/// State of the login screen: which tab is showing and both forms.
#[derive(Default, Clone, Debug)]
pub(crate) struct AuthForms {
    pub(crate) tab: AuthTab,
    pub(crate) login: CredentialsForm,
    pub(crate) register: CredentialsForm,
}

impl AuthForms {
    pub(crate) fn switch_tab(&mut self) {
        self.tab = match self.tab {
            AuthTab::Login => AuthTab::CreateAccount,
            AuthTab::CreateAccount => AuthTab::Login,
        };
    }

    pub(crate) fn active_form(&self) -> &CredentialsForm {
        match self.tab {
            AuthTab::Login => &self.login,
            AuthTab::CreateAccount => &self.register,
        }
    }

    pub(crate) fn active_form_mut(&mut self) -> &mut CredentialsForm {
        match self.tab {
            AuthTab::Login => &mut self.login,
            AuthTab::CreateAccount => &mut self.register,
        }
    }
}

/// Fields of the add/edit doctor form, in focus order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum DoctorField {
    #[default]
    Name,
    Specialty,
    Rating,
    ImageUrl,
}

/// Buffers for the add-doctor modal and the edit page.
#[derive(Clone, Debug)]
pub(crate) struct DoctorForm {
    pub(crate) name: String,
    pub(crate) specialty: Specialty,
    pub(crate) rating: f64,
    pub(crate) image_url: String,
    pub(crate) active: DoctorField,
    pub(crate) error: Option<String>,
}

impl Default for DoctorForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            specialty: Specialty::default(),
            rating: DEFAULT_RATING,
            image_url: String::new(),
            active: DoctorField::Name,
            error: None,
        }
    }
}

impl DoctorForm {
    /// Pre-populate from an existing record. The rating is pulled onto the
    /// slider in case the stored value sits outside it.
    pub(crate) fn from_doctor(doctor: &Doctor) -> Self {
        Self {
            name: doctor.name.clone(),
            specialty: doctor.specialty,
            rating: clamp_rating(doctor.rating),
            image_url: doctor.image_url.clone(),
            active: DoctorField::Name,
            error: None,
        }
    }

    pub(crate) fn next_field(&mut self) {
        self.active = match self.active {
            DoctorField::Name => DoctorField::Specialty,
            DoctorField::Specialty => DoctorField::Rating,
            DoctorField::Rating => DoctorField::ImageUrl,
            DoctorField::ImageUrl => DoctorField::Name,
        };
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = match self.active {
            DoctorField::Name => DoctorField::ImageUrl,
            DoctorField::Specialty => DoctorField::Name,
            DoctorField::Rating => DoctorField::Specialty,
            DoctorField::ImageUrl => DoctorField::Rating,
        };
    }

    /// Typing only affects the two free-text fields.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            DoctorField::Name => self.name.push(ch),
            DoctorField::ImageUrl => self.image_url.push(ch),
            DoctorField::Specialty | DoctorField::Rating => return false,
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            DoctorField::Name => {
                self.name.pop();
            }
            DoctorField::ImageUrl => {
                self.image_url.pop();
            }
            DoctorField::Specialty | DoctorField::Rating => {}
        }
    }

    /// Left/Right on the selector fields: cycle the specialty or move the
    /// rating slider one step, clamped to its bounds.
    pub(crate) fn adjust(&mut self, forward: bool) {
        match self.active {
            DoctorField::Specialty => {
                self.specialty = if forward {
                    self.specialty.next()
                } else {
                    self.specialty.previous()
                };
            }
            DoctorField::Rating => {
                let delta = if forward { RATING_STEP } else { -RATING_STEP };
                self.rating = clamp_rating(self.rating + delta);
            }
            DoctorField::Name | DoctorField::ImageUrl => {}
        }
    }

    pub(crate) fn to_input(&self) -> DoctorInput {
        DoctorInput {
            name: self.name.clone(),
            specialty: self.specialty,
            rating: clamp_rating(self.rating),
            image_url: self.image_url.clone(),
        }
    }

    pub(crate) fn build_line(&self, field_name: &str, field: DoctorField) -> Line<'static> {
        let is_active = self.active == field;
        match field {
            DoctorField::Name => text_line(field_name, &self.name, "<name>", is_active),
            DoctorField::ImageUrl => {
                text_line(field_name, &self.image_url, "<default image>", is_active)
            }
            DoctorField::Specialty => Line::from(vec![
                Span::raw(format!("{field_name}: ")),
                Span::styled(
                    format!("< {} >", self.specialty),
                    field_style(is_active, false),
                ),
            ]),
            DoctorField::Rating => Line::from(vec![
                Span::raw(format!("{field_name}: ")),
                Span::styled(
                    format!("{:.1} {}", self.rating, rating_gauge(self.rating)),
                    field_style(is_active, false),
                ),
            ]),
        }
    }

    pub(crate) fn value_len(&self, field: DoctorField) -> usize {
        match field {
            DoctorField::Name => self.name.chars().count(),
            DoctorField::ImageUrl => self.image_url.chars().count(),
            DoctorField::Specialty | DoctorField::Rating => 0,
        }
    }
}

/// `[#####-----]` style slider for the rating field.
pub(crate) fn rating_gauge(rating: f64) -> String {
    let span = MAX_RATING - MIN_RATING;
    let fraction = ((rating - MIN_RATING) / span).clamp(0.0, 1.0);
    let filled = (fraction * RATING_GAUGE_WIDTH as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(RATING_GAUGE_WIDTH - filled)
    )
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub(crate) enum BookingField {
    #[default]
    Date,
    Time,
}

/// Date and time inputs of the booking page.
#[derive(Clone, Debug)]
pub(crate) struct BookingForm {
    pub(crate) date: String,
    pub(crate) time: String,
    pub(crate) active: BookingField,
    pub(crate) error: Option<String>,
}

impl BookingForm {
    /// Pre-fill with the current local date and time.
    pub(crate) fn now() -> Self {
        let (date, time) = booking::default_slot();
        Self::with_slot(date, time)
    }

    pub(crate) fn with_slot(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            time: time.format(TIME_FORMAT).to_string(),
            active: BookingField::Date,
            error: None,
        }
    }

    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            BookingField::Date => BookingField::Time,
            BookingField::Time => BookingField::Date,
        };
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if !(ch.is_ascii_digit() || ch == '-' || ch == ':') {
            return false;
        }
        match self.active {
            BookingField::Date => self.date.push(ch),
            BookingField::Time => self.time.push(ch),
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            BookingField::Date => {
                self.date.pop();
            }
            BookingField::Time => {
                self.time.pop();
            }
        }
    }

    pub(crate) fn parse_inputs(&self) -> Result<(NaiveDate, NaiveTime), ValidationError> {
        let date = booking::parse_date(&self.date)?;
        let time = booking::parse_time(&self.time)?;
        Ok((date, time))
    }

    pub(crate) fn build_line(&self, field_name: &str, field: BookingField) -> Line<'static> {
        let is_active = self.active == field;
        match field {
            BookingField::Date => text_line(field_name, &self.date, "YYYY-MM-DD", is_active),
            BookingField::Time => text_line(field_name, &self.time, "HH:MM", is_active),
        }
    }

    pub(crate) fn value_len(&self, field: BookingField) -> usize {
        match field {
            BookingField::Date => self.date.chars().count(),
            BookingField::Time => self.time.chars().count(),
        }
    }
}
