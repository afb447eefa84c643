//! Per-session navigation state. One `Session` lives for as long as the
//! program runs and is handed to every handler explicitly.

/// Pages reachable once logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    BookAppointment,
    EditDoctor,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    user: Option<String>,
    page: Page,
    selected_doctor: Option<i64>,
    editing_doctor: Option<i64>,
    show_add_doctor: bool,
    search_query: String,
}

impl Session {
    /// Logged out, on the home page, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Email of the logged-in user.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Doctor id the booking page is bound to.
    pub fn selected_doctor(&self) -> Option<i64> {
        self.selected_doctor
    }

    /// Doctor id the edit page is bound to.
    pub fn editing_doctor(&self) -> Option<i64> {
        self.editing_doctor
    }

    pub fn show_add_doctor(&self) -> bool {
        self.show_add_doctor
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub(crate) fn sign_in(&mut self, email: &str) {
        self.user = Some(email.to_string());
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn toggle_add_doctor(&mut self) {
        self.show_add_doctor = !self.show_add_doctor;
    }

    pub fn hide_add_doctor(&mut self) {
        self.show_add_doctor = false;
    }

    pub fn begin_booking(&mut self, doctor_id: i64) {
        self.selected_doctor = Some(doctor_id);
        self.page = Page::BookAppointment;
    }

    pub fn begin_edit(&mut self, doctor_id: i64) {
        self.editing_doctor = Some(doctor_id);
        self.page = Page::EditDoctor;
    }

    /// Back to the directory, dropping any booking or edit target.
    pub fn return_home(&mut self) {
        self.page = Page::Home;
        self.selected_doctor = None;
        self.editing_doctor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_logged_out_on_home() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.page(), Page::Home);
        assert_eq!(session.selected_doctor(), None);
        assert_eq!(session.editing_doctor(), None);
        assert!(!session.show_add_doctor());
    }

    #[test]
    fn return_home_clears_targets() {
        let mut session = Session::new();
        session.begin_edit(3);
        session.begin_booking(4);
        assert_eq!(session.page(), Page::BookAppointment);

        session.return_home();
        assert_eq!(session.page(), Page::Home);
        assert_eq!(session.selected_doctor(), None);
        assert_eq!(session.editing_doctor(), None);
    }
}
