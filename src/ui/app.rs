use std::mem;

use anyhow::Result;
use crossterm::event::KeyCode;
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::db::Store;
use crate::handlers::{dispatch, Action, Notice, NoticeKind, View, NO_DOCTOR_SELECTED};
use crate::models::{resolve_image_url, Doctor};
use crate::session::Session;

use super::forms::{
    AuthForms, AuthTab, BookingField, BookingForm, CredentialsField, DoctorField, DoctorForm,
};
use super::helpers::{
    centered_rect, cursor_position, doctor_card_lines, surface_error, visible_start,
};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Header space for the page title.
const HEADER_HEIGHT: u16 = 3;
/// Four text lines plus the card border.
const DOCTOR_CARD_HEIGHT: u16 = 6;
/// Label prefix of the search bar, also used to place the cursor.
const SEARCH_PREFIX: &str = "Search for a specialty or doctor: ";

/// Widget-level interaction state. Which variant is active always agrees with
/// the current [`View`]; see [`App::sync_mode`].
enum Mode {
    Auth(AuthForms),
    Browsing,
    Searching(String),
    AddingDoctor(DoctorForm),
    EditingDoctor { id: i64, form: DoctorForm },
    Booking(BookingForm),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Gray),
            StatusKind::Success => Style::default().fg(Color::Green),
            StatusKind::Warning => Style::default().fg(Color::Yellow),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

impl From<NoticeKind> for StatusKind {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Success => StatusKind::Success,
            NoticeKind::Warning => StatusKind::Warning,
            NoticeKind::Error => StatusKind::Error,
        }
    }
}

/// Terminal application state: the store handle, the session context, the
/// last view returned by the handlers, and widget state on top of it.
pub struct App {
    store: Store,
    session: Session,
    view: View,
    selected: usize,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(store: Store, mut session: Session) -> Result<Self> {
        let view = View::build(&store, &mut session)?;
        let mut app = Self {
            store,
            session,
            view,
            selected: 0,
            mode: Mode::Browsing,
            status: None,
        };
        app.sync_mode();
        Ok(app)
    }

    /// Route a key press to the active mode. Returns `true` when the user asked
    /// to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Browsing);

        self.mode = match mode {
            Mode::Auth(forms) => self.handle_auth(code, forms, &mut exit)?,
            Mode::Browsing => self.handle_browsing(code, &mut exit)?,
            Mode::Searching(query) => self.handle_search(code, query)?,
            Mode::AddingDoctor(form) => self.handle_add_doctor(code, form)?,
            Mode::EditingDoctor { id, form } => self.handle_edit_doctor(code, id, form)?,
            Mode::Booking(form) => self.handle_booking(code, form)?,
        };

        self.sync_mode();
        Ok(exit)
    }

    /// Send an action through the handlers and adopt the resulting view.
    fn apply(&mut self, action: Action) -> Result<Option<NoticeKind>> {
        let transition = dispatch(&self.store, &mut self.session, action)?;
        let kind = transition.notice.as_ref().map(|notice| notice.kind);
        if let Some(notice) = transition.notice {
            self.show_notice(notice);
        }
        self.view = transition.view;
        Ok(kind)
    }

    /// Bring the widget mode in line with the view after a transition: open
    /// the add form when the session says so, load the edit form for a new
    /// target, start a fresh booking form, and so on.
    fn sync_mode(&mut self) {
        let mode = mem::replace(&mut self.mode, Mode::Browsing);
        self.mode = match (&self.view, mode) {
            (View::Login, Mode::Auth(forms)) => Mode::Auth(forms),
            (View::Login, _) => Mode::Auth(AuthForms::default()),
            (
                View::Home {
                    show_add_doctor: true,
                    ..
                },
                Mode::AddingDoctor(form),
            ) => Mode::AddingDoctor(form),
            (
                View::Home {
                    show_add_doctor: true,
                    ..
                },
                _,
            ) => Mode::AddingDoctor(DoctorForm::default()),
            (View::Home { .. }, Mode::Searching(query)) => Mode::Searching(query),
            (View::Home { .. }, _) => Mode::Browsing,
            (View::EditDoctor { doctor }, Mode::EditingDoctor { id, form }) if id == doctor.id => {
                Mode::EditingDoctor { id, form }
            }
            (View::EditDoctor { doctor }, _) => Mode::EditingDoctor {
                id: doctor.id,
                form: DoctorForm::from_doctor(doctor),
            },
            (View::Booking { .. }, Mode::Booking(form)) => Mode::Booking(form),
            (View::Booking { .. }, _) => Mode::Booking(BookingForm::now()),
        };

        let len = self.doctors().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn handle_auth(&mut self, code: KeyCode, mut forms: AuthForms, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Esc => *exit = true,
            KeyCode::BackTab => {
                forms.switch_tab();
                self.clear_status();
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => forms.active_form_mut().toggle_field(),
            KeyCode::Backspace => forms.active_form_mut().backspace(),
            KeyCode::Enter => {
                let tab = forms.tab;
                let form = forms.active_form_mut();
                match form.parse_inputs() {
                    Ok((email, password)) => {
                        form.error = None;
                        form.clear_password();
                        let action = match tab {
                            AuthTab::Login => Action::Login {
                                email: email.clone(),
                                password,
                            },
                            AuthTab::CreateAccount => Action::Register {
                                email: email.clone(),
                                password,
                            },
                        };
                        let outcome = self.apply(action)?;
                        if tab == AuthTab::CreateAccount && outcome == Some(NoticeKind::Success) {
                            forms.register = Default::default();
                            forms.login.email = email;
                            forms.login.active = CredentialsField::Password;
                            forms.tab = AuthTab::Login;
                        }
                    }
                    Err(err) => {
                        let message = err.to_string();
                        form.error = Some(message.clone());
                        self.set_status(message, StatusKind::Error);
                    }
                }
            }
            KeyCode::Char(ch) => {
                let form = forms.active_form_mut();
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::Auth(forms))
    }

    fn handle_browsing(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => {
                if !self.session.search_query().is_empty() {
                    self.apply(Action::Search(String::new()))?;
                }
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-5),
            KeyCode::PageDown => self.move_selection(5),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.doctors().len().saturating_sub(1),
            KeyCode::Char('/') | KeyCode::Char('f') => {
                self.clear_status();
                return Ok(Mode::Searching(self.session.search_query().to_string()));
            }
            KeyCode::Char('+') | KeyCode::Char('a') => {
                self.clear_status();
                self.apply(Action::ToggleAddDoctor)?;
            }
            KeyCode::Char('e') | KeyCode::Char('E') => match self.current_doctor() {
                Some(id) => {
                    self.clear_status();
                    self.apply(Action::EditDoctor(id))?;
                }
                None => self.set_status("No doctor selected to edit.", StatusKind::Error),
            },
            KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Enter => {
                match self.current_doctor() {
                    Some(id) => {
                        self.clear_status();
                        self.apply(Action::BookDoctor(id))?;
                    }
                    None => self.set_status(NO_DOCTOR_SELECTED, StatusKind::Warning),
                }
            }
            KeyCode::Char('o') | KeyCode::Char('O') => self.open_current_image(),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.apply(Action::Refresh)?;
            }
            KeyCode::Char('L') => {
                self.apply(Action::Logout)?;
                self.set_status("Logged out.", StatusKind::Info);
            }
            _ => {}
        }
        Ok(Mode::Browsing)
    }

    fn handle_search(&mut self, code: KeyCode, mut query: String) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.apply(Action::Search(String::new()))?;
                return Ok(Mode::Browsing);
            }
            KeyCode::Enter => return Ok(Mode::Browsing),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Backspace => {
                query.pop();
                self.selected = 0;
                self.apply(Action::Search(query.clone()))?;
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                query.push(ch);
                self.selected = 0;
                self.apply(Action::Search(query.clone()))?;
            }
            _ => {}
        }
        Ok(Mode::Searching(query))
    }

    fn handle_add_doctor(&mut self, code: KeyCode, mut form: DoctorForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.apply(Action::ToggleAddDoctor)?;
                self.set_status("Add doctor cancelled.", StatusKind::Info);
            }
            KeyCode::Enter => match self.apply(Action::AddDoctor(form.to_input())) {
                Ok(_) => self.selected = self.doctors().len().saturating_sub(1),
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            _ => edit_doctor_form(&mut form, code),
        }
        Ok(Mode::AddingDoctor(form))
    }

    fn handle_edit_doctor(&mut self, code: KeyCode, id: i64, mut form: DoctorForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.apply(Action::BackHome)?;
                self.set_status("Edit cancelled.", StatusKind::Info);
            }
            KeyCode::Enter => match self.apply(Action::UpdateDoctor(form.to_input())) {
                Ok(_) => self.focus_doctor(id),
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            _ => edit_doctor_form(&mut form, code),
        }
        Ok(Mode::EditingDoctor { id, form })
    }

    fn handle_booking(&mut self, code: KeyCode, mut form: BookingForm) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.clear_status();
                self.apply(Action::BackHome)?;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok((date, time)) => {
                    form.error = None;
                    self.apply(Action::ConfirmBooking { date, time })?;
                }
                Err(err) => {
                    let message = err.to_string();
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Ok(Mode::Booking(form))
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT.min(area.height)),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT.min(area.height)),
            ])
            .split(area);
        let (header_area, content_area, footer_area) = (chunks[0], chunks[1], chunks[2]);

        self.draw_header(frame, header_area);

        match (&self.view, &self.mode) {
            (View::Login, Mode::Auth(forms)) => self.draw_login(frame, content_area, forms),
            (View::Home { query, doctors, .. }, mode) => {
                self.draw_home(frame, content_area, query, doctors, mode)
            }
            (View::EditDoctor { .. }, Mode::EditingDoctor { form, .. }) => {
                self.draw_doctor_form(frame, content_area, "Edit Doctor Information", form)
            }
            (View::Booking { doctor }, Mode::Booking(form)) => {
                self.draw_booking(frame, content_area, doctor.as_ref(), form)
            }
            _ => {}
        }

        self.draw_footer(frame, footer_area);

        if let Mode::AddingDoctor(form) = &self.mode {
            let popup_area = centered_rect(70, 50, area);
            frame.render_widget(Clear, popup_area);
            self.draw_doctor_form(frame, popup_area, "Add a New Doctor", form);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let title = match &self.view {
            View::Login => "Login / Sign Up",
            View::Home { .. } => "Medical Appointment Booking",
            View::EditDoctor { .. } => "Edit Doctor",
            View::Booking { .. } => "Book an Appointment",
        };

        let mut spans = vec![Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(email) = self.session.user() {
            spans.push(Span::styled(
                format!("   signed in as {email}"),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let header = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, area);
    }

    fn draw_login(&self, frame: &mut Frame, area: Rect, forms: &AuthForms) {
        let popup_area = centered_rect(60, 60, area);
        let block = Block::default().borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        let selected_tab = match forms.tab {
            AuthTab::Login => 0,
            AuthTab::CreateAccount => 1,
        };
        let tabs = Tabs::new(vec![AuthTab::Login.title(), AuthTab::CreateAccount.title()])
            .select(selected_tab)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, rows[0]);

        let (email_label, password_label) = match forms.tab {
            AuthTab::Login => ("Email", "Password"),
            AuthTab::CreateAccount => ("New Email", "New Password"),
        };
        let form = forms.active_form();
        let mut lines = vec![
            form.build_line(email_label, CredentialsField::Email),
            form.build_line(password_label, CredentialsField::Password),
            Line::from(""),
        ];
        let hint = match forms.tab {
            AuthTab::Login => "Enter to log in",
            AuthTab::CreateAccount => "Enter to register",
        };
        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("{hint} | Tab to switch field | Shift-Tab to switch tab"),
                Style::default().fg(Color::Gray),
            )));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[1]);

        let (label, field, row) = match form.active {
            CredentialsField::Email => (email_label, CredentialsField::Email, 0),
            CredentialsField::Password => (password_label, CredentialsField::Password, 1),
        };
        frame.set_cursor_position(cursor_position(
            rows[1],
            label.len() + 2 + form.value_len(field),
            row,
        ));
    }

    fn draw_home(&self, frame: &mut Frame, area: Rect, query: &str, doctors: &[Doctor], mode: &Mode) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let searching = matches!(mode, Mode::Searching(_));
        let query_text = match mode {
            Mode::Searching(current) => current.as_str(),
            _ => query,
        };
        let search_style = if searching {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let search_block = Block::default().borders(Borders::ALL).style(search_style);
        let search = Paragraph::new(format!("{SEARCH_PREFIX}{query_text}")).block(search_block.clone());
        frame.render_widget(search, chunks[0]);
        if searching {
            let inner = search_block.inner(chunks[0]);
            let offset = SEARCH_PREFIX.len() + query_text.chars().count();
            frame.set_cursor_position(cursor_position(inner, offset, 0));
        }

        let subtitle = Paragraph::new(Span::styled(
            "Available Doctors",
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(subtitle, chunks[1]);

        if doctors.is_empty() {
            let message = Paragraph::new(Span::styled(
                "No doctors found.",
                Style::default().fg(Color::Yellow),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(message, chunks[2]);
            return;
        }

        self.render_doctor_cards(frame, chunks[2], doctors);
    }

    fn render_doctor_cards(&self, frame: &mut Frame, area: Rect, doctors: &[Doctor]) {
        if area.height == 0 {
            return;
        }

        let capacity = (area.height / DOCTOR_CARD_HEIGHT).max(1) as usize;
        let start = visible_start(self.selected, capacity, doctors.len());
        let visible = &doctors[start..(start + capacity).min(doctors.len())];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(DOCTOR_CARD_HEIGHT); visible.len()])
            .split(area);

        for (offset, (doctor, chunk)) in visible.iter().zip(rows.iter()).enumerate() {
            let is_selected = start + offset == self.selected;
            let mut block = Block::default().borders(Borders::ALL);
            if is_selected {
                block = block.style(Style::default().fg(Color::Yellow));
            }
            let card = Paragraph::new(doctor_card_lines(doctor, is_selected))
                .block(block)
                .wrap(Wrap { trim: true });
            frame.render_widget(card, *chunk);
        }
    }

    fn draw_doctor_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &DoctorForm) {
        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let mut lines = vec![
            form.build_line("Doctor's Name", DoctorField::Name),
            form.build_line("Specialty", DoctorField::Specialty),
            form.build_line("Rating", DoctorField::Rating),
            form.build_line("Doctor's Image URL", DoctorField::ImageUrl),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save | Tab to switch field | Left/Right to change | Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        let cursor = match form.active {
            DoctorField::Name => Some(("Doctor's Name", DoctorField::Name, 0)),
            DoctorField::ImageUrl => Some(("Doctor's Image URL", DoctorField::ImageUrl, 3)),
            DoctorField::Specialty | DoctorField::Rating => None,
        };
        if let Some((label, field, row)) = cursor {
            frame.set_cursor_position(cursor_position(
                inner,
                label.len() + 2 + form.value_len(field),
                row,
            ));
        }
    }

    fn draw_booking(&self, frame: &mut Frame, area: Rect, doctor: Option<&Doctor>, form: &BookingForm) {
        let block = Block::default().borders(Borders::ALL);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let Some(doctor) = doctor else {
            let message = Paragraph::new(Span::styled(
                NO_DOCTOR_SELECTED,
                Style::default().fg(Color::Yellow),
            ));
            frame.render_widget(message, inner);
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::raw("Book an appointment with "),
                Span::styled(
                    doctor.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("{} | rating {}", doctor.specialty, doctor.rating_label()),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            form.build_line("Select Date", BookingField::Date),
            form.build_line("Select Time", BookingField::Time),
            Line::from(""),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to confirm booking | Tab to switch field | Esc to go back home",
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);

        let (label, row) = match form.active {
            BookingField::Date => ("Select Date", 3),
            BookingField::Time => ("Select Time", 4),
        };
        frame.set_cursor_position(cursor_position(
            inner,
            label.len() + 2 + form.value_len(form.active),
            row,
        ));
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let hints: &[(&'static str, &'static str)] = match &self.mode {
            Mode::Auth(_) => &[
                ("[Shift-Tab]", " Login/Create Account   "),
                ("[Enter]", " Submit   "),
                ("[Esc]", " Quit"),
            ],
            Mode::Browsing => &[
                ("[Up/Down]", " Navigate   "),
                ("[/]", " Search   "),
                ("[+]", " Add Doctor   "),
                ("[e]", " Edit   "),
                ("[b]", " Book   "),
                ("[o]", " Open Image   "),
                ("[L]", " Log Out   "),
                ("[q]", " Quit"),
            ],
            Mode::Searching(_) => &[
                ("[Type]", " Filter   "),
                ("[Enter]", " Done   "),
                ("[Esc]", " Clear"),
            ],
            Mode::AddingDoctor(_) | Mode::EditingDoctor { .. } => &[
                ("[Tab]", " Next Field   "),
                ("[Left/Right]", " Change   "),
                ("[Enter]", " Save   "),
                ("[Esc]", " Cancel"),
            ],
            Mode::Booking(_) => &[
                ("[Tab]", " Next Field   "),
                ("[Enter]", " Confirm Booking   "),
                ("[Esc]", " Back to Home"),
            ],
        };

        let spans: Vec<Span<'static>> = hints
            .iter()
            .flat_map(|(key, label)| [Span::styled(*key, key_style), Span::raw(*label)])
            .collect();
        Line::from(spans)
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn show_notice(&mut self, notice: Notice) {
        self.set_status(notice.text, notice.kind.into());
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    fn doctors(&self) -> &[Doctor] {
        match &self.view {
            View::Home { doctors, .. } => doctors,
            _ => &[],
        }
    }

    fn current_doctor(&self) -> Option<i64> {
        self.doctors().get(self.selected).map(|doctor| doctor.id)
    }

    fn focus_doctor(&mut self, id: i64) {
        if let Some(idx) = self.doctors().iter().position(|doctor| doctor.id == id) {
            self.selected = idx;
        }
    }

    fn move_selection(&mut self, offset: isize) {
        let len = self.doctors().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let next = self.selected as isize + offset;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    fn open_current_image(&mut self) {
        let Some(doctor) = self.doctors().get(self.selected).cloned() else {
            self.set_status("No doctor selected.", StatusKind::Error);
            return;
        };
        let url = resolve_image_url(&doctor.image_url).to_string();
        match open_link(&url) {
            Ok(()) => self.set_status(format!("Opened image for {}.", doctor.name), StatusKind::Info),
            Err(err) => self.set_status(format!("Failed to open image: {err}"), StatusKind::Error),
        }
    }
}

/// Keys shared by the add modal and the edit page.
fn edit_doctor_form(form: &mut DoctorForm, code: KeyCode) {
    match code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.previous_field(),
        KeyCode::Left => form.adjust(false),
        KeyCode::Right => form.adjust(true),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(ch) => {
            if form.push_char(ch) {
                form.error = None;
            }
        }
        _ => {}
    }
}
