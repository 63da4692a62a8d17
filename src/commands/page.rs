use std::io::{self, Write};

use crate::cli::PageArgs;
use crate::error::{Result, UserDeckError};
use crate::orchestrator::Orchestrator;
use crate::output;
use crate::page::Page;

/// Run the pipeline once and write the resulting page, whatever its state.
pub async fn render(orchestrator: &Orchestrator, args: PageArgs) -> Result<()> {
    let mut page = Page::new();
    let state = orchestrator.run(&mut page).await;

    match &args.out {
        Some(path) => {
            std::fs::write(path, page.document())?;
            output::print_message(&format!("Page written to {}", path.display()));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(page.document().as_bytes())?;
            stdout.flush()?;
        }
    }

    if state.is_error() {
        return Err(UserDeckError::Unavailable);
    }
    Ok(())
}
