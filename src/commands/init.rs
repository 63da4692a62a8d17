use std::io::{self, Write};

use url::Url;

use crate::config::{Config, DEFAULT_BIND, DEFAULT_ENDPOINT};
use crate::error::{Result, UserDeckError};

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("userdeck Configuration");
    println!("======================\n");

    let endpoint = prompt(&format!("Users endpoint [{DEFAULT_ENDPOINT}]: "))?;
    if !endpoint.is_empty() {
        Url::parse(&endpoint).map_err(|_| UserDeckError::InvalidUrl(endpoint.clone()))?;
    }

    let timeout = prompt("Request timeout in seconds [none]: ")?;
    let timeout = if timeout.is_empty() {
        None
    } else {
        Some(timeout.parse::<u64>().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("timeout must be a whole number of seconds, got {timeout:?}"),
            )
        })?)
    };

    let bind = prompt(&format!("Serve address [{DEFAULT_BIND}]: "))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| UserDeckError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let config_content = config_file_contents(&endpoint, timeout, &bind);
    std::fs::write(&config_path, config_content).map_err(|e| UserDeckError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());

    Ok(())
}

/// Only answered questions are written; the rest keep their defaults.
fn config_file_contents(endpoint: &str, timeout: Option<u64>, bind: &str) -> String {
    let mut contents = String::new();
    if !endpoint.is_empty() {
        contents.push_str(&format!("endpoint = {endpoint:?}\n"));
    }
    if let Some(secs) = timeout {
        contents.push_str(&format!("timeout_secs = {secs}\n"));
    }
    if !bind.is_empty() {
        contents.push_str(&format!("bind = {bind:?}\n"));
    }
    contents
}
