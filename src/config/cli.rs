use crate::config::toml_config::TomlConfig;
use crate::config::ClientSettings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "arcadia")]
#[command(about = "Command-line client for the Arcadia tracker API")]
pub struct CliConfig {
    #[arg(long, short = 'c', help = "TOML config file with an [api] section")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "ARCADIA_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "ARCADIA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Collages and their entries
    #[command(subcommand)]
    Collage(CollageCommand),
    /// Forum browsing and search
    #[command(subcommand)]
    Forum(ForumCommand),
    /// Forum thread post notifications
    Notifications {
        #[arg(long)]
        include_read: bool,
    },
    #[command(subcommand)]
    Subscribe(SubscriptionTarget),
    #[command(subcommand)]
    Unsubscribe(SubscriptionTarget),
    #[command(subcommand)]
    Bookmark(BookmarkCommand),
    #[command(subcommand)]
    TitleGroupBookmark(BookmarkCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum CollageCommand {
    Get { id: i64 },
    Search(CollageSearchArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CollageSearchArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long, default_value = "1")]
    pub page: u32,
    #[arg(long, default_value = "25")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ForumCommand {
    Overview,
    SubCategory {
        id: i32,
    },
    Threads {
        id: i64,
    },
    Thread {
        id: i64,
    },
    Posts {
        thread_id: i64,
        #[arg(long, default_value = "20")]
        page_size: u32,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        post_id: Option<i64>,
    },
    Search {
        #[arg(long)]
        thread_name: Option<String>,
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, default_value = "25")]
        page_size: u32,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SubscriptionTarget {
    TitleGroup { id: i32 },
    ForumThread { id: i64 },
}

#[derive(Debug, Clone, Subcommand)]
pub enum BookmarkCommand {
    Get { id: i64 },
    Remove { id: i64 },
}

/// Everything `main` needs before it can start logging and talking to the API.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub settings: ClientSettings,
    pub json_logs: bool,
    pub verbose: bool,
}

impl CliConfig {
    /// Merges flags over the config file over defaults. The file is
    /// validated as a whole, `[logging]` included.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let json_logs = self.json_logs || file.as_ref().is_some_and(TomlConfig::json_logs);
        let verbose = self.verbose || file.as_ref().is_some_and(TomlConfig::verbose);

        let mut settings = file.map(ClientSettings::from).unwrap_or_default();

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            settings.token = Some(token.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = Some(timeout);
        }

        Ok(ResolvedConfig {
            settings,
            json_logs,
            verbose,
        })
    }
}
