use super::app_config::LogLevel;
use crate::application::services::FailurePolicy;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "stashcord",
    version,
    about = "Downloads every custom emoji and sticker from the Discord guilds you belong to",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Discord authentication token.
    #[arg(short, long, env = "DISCORD_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Store the given token in the system keyring for later runs.
    #[arg(long)]
    pub save_token: bool,

    /// Root folder of the downloaded tree.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum number of simultaneous requests.
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// What happens to other requests when one download fails.
    #[arg(long, value_enum)]
    pub failure_policy: Option<FailurePolicy>,

    /// Discord REST API base URL.
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Discord CDN base URL.
    #[arg(long, value_name = "URL")]
    pub cdn_base_url: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_flags_are_optional() {
        let args = CliArgs::parse_from(["stashcord"]);

        assert!(args.output_dir.is_none());
        assert!(args.concurrency.is_none());
        assert!(!args.save_token);
    }

    #[test]
    fn test_short_flags() {
        let args = CliArgs::parse_from(["stashcord", "-t", "abc", "-o", "dump", "-j", "3"]);

        assert_eq!(args.token.as_deref(), Some("abc"));
        assert_eq!(args.output_dir, Some(PathBuf::from("dump")));
        assert_eq!(args.concurrency, Some(3));
    }
}
