//! State-transition handlers. Every user action becomes an [`Action`];
//! [`dispatch`] applies it to the session and the store and returns the notice
//! to show plus the [`View`] to render next. Nothing in here knows how the view
//! gets drawn.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

use crate::auth;
use crate::booking;
use crate::db::Store;
use crate::directory;
use crate::error::ValidationError;
use crate::models::{Doctor, DoctorInput};
use crate::session::{Page, Session};

pub const LOGIN_OK: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Invalid email or password.";
pub const REGISTER_OK: &str = "Account created successfully! You can now log in.";
pub const REGISTER_DUPLICATE: &str = "Email already exists! Please try again.";
pub const DOCTOR_UPDATED: &str = "Doctor information updated successfully!";
pub const DOCTOR_NOT_FOUND: &str = "Doctor not found.";
pub const NO_DOCTOR_SELECTED: &str = "Please select a doctor first.";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login { email: String, password: String },
    Register { email: String, password: String },
    Logout,
    Search(String),
    ToggleAddDoctor,
    AddDoctor(DoctorInput),
    EditDoctor(i64),
    UpdateDoctor(DoctorInput),
    BookDoctor(i64),
    ConfirmBooking { date: NaiveDate, time: NaiveTime },
    BackHome,
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// One-line feedback for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Warning,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Everything a front-end needs to draw the current page.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Login,
    Home {
        query: String,
        doctors: Vec<Doctor>,
        show_add_doctor: bool,
    },
    Booking {
        doctor: Option<Doctor>,
    },
    EditDoctor {
        doctor: Doctor,
    },
}

impl View {
    /// Build the view for wherever the session currently is.
    pub fn build(store: &Store, session: &mut Session) -> Result<Self> {
        if !session.is_logged_in() {
            return Ok(View::Login);
        }

        match session.page() {
            Page::Home => home_view(store, session),
            Page::BookAppointment => {
                let doctor = match session.selected_doctor() {
                    Some(id) => directory::find_doctor(store, id)?,
                    None => None,
                };
                Ok(View::Booking { doctor })
            }
            Page::EditDoctor => {
                let doctor = match session.editing_doctor() {
                    Some(id) => directory::find_doctor(store, id)?,
                    None => None,
                };
                match doctor {
                    Some(doctor) => Ok(View::EditDoctor { doctor }),
                    None => {
                        session.return_home();
                        home_view(store, session)
                    }
                }
            }
        }
    }
}

fn home_view(store: &Store, session: &Session) -> Result<View> {
    let query = session.search_query().to_string();
    let doctors = directory::list_doctors(store, Some(&query))?;
    Ok(View::Home {
        query,
        doctors,
        show_add_doctor: session.show_add_doctor(),
    })
}

/// Result of one handled action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub notice: Option<Notice>,
    pub view: View,
}

/// Apply `action` and describe what to show next.
pub fn dispatch(store: &Store, session: &mut Session, action: Action) -> Result<Transition> {
    let notice = match action {
        Action::Login { email, password } => {
            if auth::login(store, session, &email, &password)? {
                Some(Notice::success(LOGIN_OK))
            } else {
                Some(Notice::error(LOGIN_FAILED))
            }
        }
        Action::Register { email, password } => match auth::register(store, &email, &password) {
            Ok(true) => Some(Notice::success(REGISTER_OK)),
            Ok(false) => Some(Notice::error(REGISTER_DUPLICATE)),
            Err(err) => match err.downcast_ref::<ValidationError>() {
                Some(invalid) => Some(Notice::error(invalid.to_string())),
                None => return Err(err),
            },
        },
        _ if !session.is_logged_in() => None,
        Action::Logout => {
            auth::logout(session);
            None
        }
        Action::Search(query) => {
            session.set_search_query(query);
            None
        }
        Action::ToggleAddDoctor => {
            session.toggle_add_doctor();
            None
        }
        Action::AddDoctor(input) => {
            let doctor = directory::add_doctor(store, &input)?;
            session.hide_add_doctor();
            Some(Notice::success(format!(
                "Doctor {} added successfully!",
                doctor.name
            )))
        }
        Action::EditDoctor(id) => match directory::find_doctor(store, id)? {
            Some(doctor) => {
                session.begin_edit(doctor.id);
                None
            }
            None => Some(Notice::error(DOCTOR_NOT_FOUND)),
        },
        Action::UpdateDoctor(input) => {
            let updated = match session.editing_doctor() {
                Some(id) => directory::update_doctor(store, id, &input)?,
                None => false,
            };
            session.return_home();
            if updated {
                Some(Notice::success(DOCTOR_UPDATED))
            } else {
                Some(Notice::error(DOCTOR_NOT_FOUND))
            }
        }
        Action::BookDoctor(id) => {
            session.begin_booking(id);
            None
        }
        Action::ConfirmBooking { date, time } => {
            let doctor = match session.selected_doctor() {
                Some(id) => directory::find_doctor(store, id)?,
                None => None,
            };
            match doctor {
                Some(doctor) => Some(Notice::success(
                    booking::confirm(&doctor, date, time).to_string(),
                )),
                None => Some(Notice::warning(NO_DOCTOR_SELECTED)),
            }
        }
        Action::BackHome => {
            session.return_home();
            None
        }
        Action::Refresh => None,
    };

    let view = View::build(store, session)?;
    Ok(Transition { notice, view })
}
