//! Application state and core logic

use crate::config::ContactFormConfig;
use crate::state::{Clock, ContactForm, Form, FormView, SubmitOutcome, SystemClock};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// The contact form being edited
    pub form: ContactForm,
    /// Loaded user configuration
    pub config: ContactFormConfig,
    /// Outcome of the last submit attempt, shown in the status bar
    pub last_submit: Option<SubmitOutcome>,
    clock: Box<dyn Clock>,
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: ContactFormConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    pub fn with_clock(config: ContactFormConfig, clock: Box<dyn Clock>) -> Self {
        let mut form = ContactForm::new();
        form.focus(config.start_field());

        Self {
            form,
            config,
            last_submit: None,
            clock,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Current render projection of the form
    pub fn view(&self) -> FormView {
        FormView::from_form(&self.form)
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit()
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            KeyCode::Enter if self.form.is_submit_focused() => self.submit(),
            KeyCode::Enter => {
                // Enter in the message field adds a newline
                if self.form.is_active_field_multiline() {
                    self.edit(|form| form.input_char('\n'));
                } else {
                    self.form.next_field();
                }
            }
            KeyCode::Backspace => self.edit(ContactForm::backspace),
            KeyCode::Char(c) if !ctrl => self.edit(|form| form.input_char(c)),
            _ => {}
        }
        Ok(())
    }

    /// Apply an edit to the focused input; submit feedback is stale once the form changes
    fn edit(&mut self, apply: impl FnOnce(&mut ContactForm)) {
        if self.form.active_input().is_none() {
            return;
        }
        apply(&mut self.form);
        self.last_submit = None;
    }

    fn submit(&mut self) {
        self.last_submit = Some(self.form.submit(self.clock.as_ref()));
    }

    /// Feedback for the last submit attempt
    pub fn status_message(&self) -> Option<String> {
        self.last_submit.map(|outcome| match outcome {
            SubmitOutcome::Accepted => "Submitted!".to_string(),
            SubmitOutcome::Rejected { errors: 1 } => "Fix 1 error to submit".to_string(),
            SubmitOutcome::Rejected { errors } => format!("Fix {errors} errors to submit"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, FormMode, MockClock, SUBMIT_BUTTON_INDEX};
    use chrono::{Local, TimeZone};

    fn app() -> App {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap());
        App::with_clock(ContactFormConfig::default(), Box::new(clock))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Focus an input by tabbing from wherever focus is
    fn focus(app: &mut App, field: Field) {
        while app.form.active_input() != Some(field) {
            press(app, KeyCode::Tab);
        }
    }

    fn click_submit(app: &mut App) {
        while !app.form.is_submit_focused() {
            press(app, KeyCode::Tab);
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = app();
        type_text(&mut app, "Freddy");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Harris");
        assert_eq!(app.form.first_name.as_text(), "Freddy");
        assert_eq!(app.form.last_name.as_text(), "Harris");
    }

    #[test]
    fn test_short_first_name_renders_one_error() {
        let mut app = app();
        type_text(&mut app, "abc");
        assert_eq!(app.view().errors_matching("error").len(), 1);
    }

    #[test]
    fn test_empty_submit_renders_three_errors() {
        let mut app = app();
        click_submit(&mut app);
        assert_eq!(app.view().errors_matching("error").len(), 3);
        assert_eq!(
            app.status_message().as_deref(),
            Some("Fix 3 errors to submit")
        );
    }

    #[test]
    fn test_invalid_email_renders_error_before_submit() {
        let mut app = app();
        focus(&mut app, Field::Email);
        type_text(&mut app, "abc");
        let view = app.view();
        let errors = view.error_nodes();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "email must be a valid email address");
    }

    #[test]
    fn test_missing_last_name_on_submit() {
        let mut app = app();
        type_text(&mut app, "Freddy");
        focus(&mut app, Field::Email);
        type_text(&mut app, "fido@gmail.com");
        click_submit(&mut app);
        let view = app.view();
        let errors = view.error_nodes();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "lastName is a required field");
        assert_eq!(app.status_message().as_deref(), Some("Fix 1 error to submit"));
    }

    #[test]
    fn test_editing_clears_submit_feedback() {
        let mut app = app();
        click_submit(&mut app);
        assert!(app.status_message().is_some());

        focus(&mut app, Field::FirstName);
        type_text(&mut app, "F");
        assert_eq!(app.status_message(), None);
        assert_eq!(app.form.error_count(), 3);
    }

    #[test]
    fn test_navigation_keeps_submit_feedback() {
        let mut app = app();
        click_submit(&mut app);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.status_message().as_deref(), Some("Fix 3 errors to submit"));
    }

    #[test]
    fn test_backspace_clears_submitted_feedback() {
        let mut app = app();
        focus(&mut app, Field::FirstName);
        type_text(&mut app, "Freddy");
        focus(&mut app, Field::LastName);
        type_text(&mut app, "Harris");
        focus(&mut app, Field::Email);
        type_text(&mut app, "fido@gmail.com");
        ctrl(&mut app, 's');
        assert_eq!(app.status_message().as_deref(), Some("Submitted!"));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn test_full_submit_via_ctrl_s() {
        let mut app = app();
        type_text(&mut app, "Freddy");
        focus(&mut app, Field::LastName);
        type_text(&mut app, "Harris");
        focus(&mut app, Field::Email);
        type_text(&mut app, "fido@gmail.com");
        focus(&mut app, Field::Message);
        type_text(&mut app, "hello world!");
        ctrl(&mut app, 's');

        assert_eq!(app.form.mode(), FormMode::Submitted);
        assert_eq!(app.status_message().as_deref(), Some("Submitted!"));
        let view = app.view();
        assert_eq!(
            view.display_node("messageDisplay").unwrap().text,
            "hello world!"
        );
    }

    #[test]
    fn test_enter_in_message_inserts_newline() {
        let mut app = app();
        focus(&mut app, Field::Message);
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "b");
        assert_eq!(app.form.message.as_text(), "a\nb");
    }

    #[test]
    fn test_enter_in_single_line_field_moves_focus() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.form.active_input(), Some(Field::LastName));
    }

    #[test]
    fn test_up_and_down_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.form.active_field_index, SUBMIT_BUTTON_INDEX);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.form.active_input(), Some(Field::FirstName));
    }

    #[test]
    fn test_ctrl_chars_are_not_typed() {
        let mut app = app();
        ctrl(&mut app, 'x');
        assert!(app.form.first_name.is_empty());
    }

    #[test]
    fn test_backspace_revalidates() {
        let mut app = app();
        type_text(&mut app, "Freddy");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view().error_nodes().len(), 1);
    }

    #[test]
    fn test_esc_quits() {
        let mut app = app();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        ctrl(&mut app, 'c');
        assert!(app.should_quit());
    }

    #[test]
    fn test_start_field_from_config() {
        let config = ContactFormConfig {
            start_field: Some("email".to_string()),
            ..Default::default()
        };
        let app = App::new(config);
        assert_eq!(app.form.active_input(), Some(Field::Email));
    }

    #[test]
    fn test_identical_key_sequences_render_identically() {
        let run = || {
            let mut app = app();
            type_text(&mut app, "ab");
            focus(&mut app, Field::Email);
            type_text(&mut app, "abc");
            click_submit(&mut app);
            app.view()
        };
        assert_eq!(run(), run());
    }
}
