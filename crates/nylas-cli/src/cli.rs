//! Command-line interface definition.

use clap::{Parser, Subcommand};
use nylas::Region;

/// nylas - inspect mail, calendars and contacts from the terminal
#[derive(Debug, Parser)]
#[command(name = "nylas")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key used for bearer authentication
    #[arg(long, env = "NYLAS_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Grant (connected account) to operate on
    #[arg(long, env = "NYLAS_GRANT_ID")]
    pub grant_id: Option<String>,

    /// Deployment region: "us" or "eu"
    #[arg(long, env = "NYLAS_REGION", default_value = "us")]
    pub region: Region,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Per-page size for list commands
    #[arg(long)]
    pub limit: Option<u32>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List messages in the grant's mailbox
    Messages {
        /// Only unread messages
        #[arg(long)]
        unread: bool,
    },
    /// Show one message as JSON
    Message { id: String },
    /// List conversation threads
    Threads,
    /// List events in one calendar
    Events {
        /// Calendar to read from
        #[arg(long, default_value = "primary")]
        calendar_id: String,
    },
    /// List the grant's calendars
    Calendars,
    /// List contacts
    Contacts,
    /// List mail folders
    Folders,
    /// List the application's connected accounts
    Grants,
}
