use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// "0.1.0" for builds outside git, "0.1.0@abc1234 2026-01-15" otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("TASK_GIT_HASH");
    const GIT_DATE: &str = env!("TASK_GIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "task",
    bin_name = "task",
    version = get_version(),
    disable_help_subcommand = true
)]
#[command(about = "Priority-ordered todo list kept in plain text files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding task.txt and completed.txt (defaults to the current directory)
    #[arg(long, global = true, env = "TASK_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Output format for ls and report
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// Positional arguments are optional on purpose: a missing one is reported
// by the command itself with a task-specific message.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task with a priority
    Add {
        /// Priority, lower numbers come first
        #[arg(allow_hyphen_values = true)]
        priority: Option<String>,

        /// Task text (remaining words are joined with spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        text: Vec<String>,
    },

    /// List pending tasks by priority
    Ls {
        #[arg(hide = true, trailing_var_arg = true, num_args = 0..)]
        rest: Vec<String>,
    },

    /// Delete the pending task at INDEX
    Del {
        #[arg(value_name = "INDEX", allow_hyphen_values = true)]
        position: Option<String>,
    },

    /// Mark the pending task at INDEX as done
    Done {
        #[arg(value_name = "INDEX", allow_hyphen_values = true)]
        position: Option<String>,
    },

    /// Show pending and completed tasks with counts
    Report {
        #[arg(hide = true, trailing_var_arg = true, num_args = 0..)]
        rest: Vec<String>,
    },

    /// Show usage
    Help,

    // Anything unrecognised falls back to usage
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("task").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn add_joins_trailing_words() {
        match parse(&["add", "2", "hello", "world"]).command {
            Some(Commands::Add { priority, text }) => {
                assert_eq!(priority.as_deref(), Some("2"));
                assert_eq!(text, vec!["hello", "world"]);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn add_accepts_negative_priority() {
        match parse(&["add", "-1", "soonest"]).command {
            Some(Commands::Add { priority, .. }) => assert_eq!(priority.as_deref(), Some("-1")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn missing_positionals_still_parse() {
        assert!(matches!(
            parse(&["add"]).command,
            Some(Commands::Add { priority: None, .. })
        ));
        assert!(matches!(
            parse(&["del"]).command,
            Some(Commands::Del { position: None })
        ));
        assert!(matches!(
            parse(&["done"]).command,
            Some(Commands::Done { position: None })
        ));
    }

    #[test]
    fn unknown_command_is_captured() {
        assert!(matches!(parse(&["frobnicate"]).command, Some(Commands::Other(_))));
        assert!(parse(&[]).command.is_none());
        assert!(matches!(parse(&["help"]).command, Some(Commands::Help)));
    }

    #[test]
    fn extra_words_after_listing_commands_are_ignored() {
        assert!(matches!(
            parse(&["ls", "extra", "words"]).command,
            Some(Commands::Ls { .. })
        ));
        assert!(matches!(
            parse(&["report", "extra"]).command,
            Some(Commands::Report { .. })
        ));
    }

    #[test]
    fn global_options() {
        let cli = parse(&["--dir", "/tmp/t", "ls", "--output", "json"]);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/t")));
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
