use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Compact,
}

#[derive(Parser)]
#[command(name = "userdeck")]
#[command(about = "Fetch a user directory and render it as cards", version)]
#[command(after_help = "EXAMPLES:
    userdeck list                     Show users in a table
    userdeck page --out users.html    Write the user cards page to a file
    userdeck serve --bind 0.0.0.0:8080  Serve the page over HTTP
    userdeck --endpoint http://localhost:3000/users list")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Users endpoint (overrides USERDECK_ENDPOINT and the config file)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format (table, json, compact)
    #[arg(long, short = 'o', global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Output as JSON (alias for --format json)
    #[arg(long, global = true, hide = true)]
    pub json: bool,

    /// Suppress progress and success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Get the effective output format, considering --json flag
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List users in the terminal
    #[command(
        alias = "ls",
        after_help = "EXAMPLES:
    userdeck list
    userdeck list -o compact
    userdeck list --json"
    )]
    List,
    /// Render the user cards page as HTML
    #[command(after_help = "EXAMPLES:
    userdeck page > users.html
    userdeck page --out users.html")]
    Page(PageArgs),
    /// Serve the user cards page, fetching fresh data on every load
    #[command(after_help = "EXAMPLES:
    userdeck serve
    userdeck serve --bind 0.0.0.0:8080")]
    Serve(ServeArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    userdeck completions bash > ~/.bash_completion.d/userdeck
    userdeck completions zsh > ~/.zfunc/_userdeck
    userdeck completions fish > ~/.config/fish/completions/userdeck.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    userdeck init")]
    Init,
}

#[derive(Args)]
pub struct PageArgs {
    /// Write the page to this file instead of stdout
    #[arg(long, short = 'O')]
    pub out: Option<PathBuf>,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (default: config `bind`, then 127.0.0.1:8080)
    #[arg(long)]
    pub bind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_json_flag_overrides_format() {
        let cli = Cli::parse_from(["userdeck", "list", "--json"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);

        let cli = Cli::parse_from(["userdeck", "-o", "compact", "list"]);
        assert_eq!(cli.output_format(), OutputFormat::Compact);
    }

    #[test]
    fn test_global_connection_flags() {
        let cli = Cli::parse_from([
            "userdeck",
            "page",
            "--endpoint",
            "http://localhost:3000/users",
            "--timeout",
            "5",
            "--out",
            "users.html",
        ]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:3000/users"));
        assert_eq!(cli.timeout, Some(5));
        match cli.command {
            Commands::Page(args) => assert_eq!(args.out, Some(PathBuf::from("users.html"))),
            _ => panic!("expected page command"),
        }
    }
}
