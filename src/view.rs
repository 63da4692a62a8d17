use crate::error::UserDeckError;
use crate::types::User;

/// What the page region is showing. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Populated(Vec<User>),
}

impl ViewState {
    pub fn failed(err: &UserDeckError) -> Self {
        ViewState::Error(format!("Error fetching user data: {err}"))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }
}

/// Something that can display the three visual states: a terminal, an HTML
/// document, a served page.
pub trait Surface {
    fn show_loading(&mut self);

    fn show_error(&mut self, message: &str);

    fn show_users(&mut self, users: &[User]);

    fn present(&mut self, state: &ViewState) {
        match state {
            ViewState::Loading => self.show_loading(),
            ViewState::Error(message) => self.show_error(message),
            ViewState::Populated(users) => self.show_users(users),
        }
    }
}
