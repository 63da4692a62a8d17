use colored::Colorize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::{Result, UserDeckError};
use crate::orchestrator::Orchestrator;
use crate::output::{self, truncate};
use crate::render::{EMPTY_PLACEHOLDER, LOADING_TEXT};
use crate::types::User;
use crate::view::Surface;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "City")]
    city: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            name: truncate(user.display_name(), 40),
            email: truncate(user.display_email(), 40),
            city: truncate(user.display_city(), 30),
        }
    }
}

fn compact_line(user: &User) -> String {
    format!(
        "{} <{}> ({})",
        user.display_name(),
        user.display_email(),
        user.display_city()
    )
}

/// Terminal rendition of the three regions: progress and errors on stderr,
/// the user list on stdout.
struct Terminal;

impl Surface for Terminal {
    fn show_loading(&mut self) {
        if !output::is_quiet() {
            eprintln!("{}", LOADING_TEXT.dimmed());
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn show_users(&mut self, users: &[User]) {
        // The placeholder is list content, so --quiet does not hide it.
        if let Some(placeholder) = empty_listing(users, output::format()) {
            println!("{placeholder}");
            return;
        }
        output::print_table(users, |u| UserRow::from(u), compact_line);
    }
}

/// Text shown instead of a table for an empty list. JSON output prints `[]`.
fn empty_listing(users: &[User], format: OutputFormat) -> Option<String> {
    if users.is_empty() && format != OutputFormat::Json {
        Some(plain_placeholder())
    } else {
        None
    }
}

fn plain_placeholder() -> String {
    EMPTY_PLACEHOLDER
        .trim_start_matches("<p class=\"error\">")
        .trim_end_matches("</p>")
        .to_string()
}

pub async fn list(orchestrator: &Orchestrator) -> Result<()> {
    let state = orchestrator.run(&mut Terminal).await;
    if state.is_error() {
        return Err(UserDeckError::Unavailable);
    }
    Ok(())
}
