//! Command-line surface.
//!
//! Both spellings of the backend commands are accepted and normalise into
//! the same [`Command`]:
//!
//! ```text
//! dbg backends                 dbg backends
//! dbg backends list            dbg list-backends
//! dbg backends get <name>      dbg get-backend <name>
//! dbg general
//! dbg conf
//! ```
//!
//! Usage errors (unknown command, missing or extra `<name>`) are raised by
//! clap during parsing, before any configuration, network or file access.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::commands::Command;
use crate::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "dbg", version)]
#[command(about = "dbg is a tool for quickly inspecting the state of the nginx instance", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long, global = true, env = "DBG_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Control endpoint base URL [default: http://127.0.0.1:18080]
    #[arg(long, global = true, env = "DBG_ENDPOINT", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds [default: 5]
    #[arg(long, global = true, env = "DBG_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// nginx configuration file dumped by `conf` [default: /etc/nginx/nginx.conf]
    #[arg(long, global = true, env = "DBG_CONF_PATH", value_name = "PATH")]
    pub conf_path: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Output the dynamic backend information as a JSON array
    Backends {
        #[command(subcommand)]
        action: Option<BackendsAction>,
    },
    /// Output a newline-separated list of the backend names
    ListBackends,
    /// Output the backend information only for the backend that has this name
    GetBackend {
        /// Exact, case-sensitive backend name
        name: String,
    },
    /// Output the general dynamic lua state
    General,
    /// Dump the contents of the nginx configuration file
    Conf,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BackendsAction {
    /// Output a newline-separated list of the backend names
    List,
    /// Output the backend information only for the backend that has this name
    Get {
        /// Exact, case-sensitive backend name
        name: String,
    },
}

impl Cli {
    /// The action selected on the command line.
    pub fn to_command(&self) -> Command {
        match &self.command {
            Commands::Backends { action: None } => Command::Backends,
            Commands::Backends {
                action: Some(BackendsAction::List),
            }
            | Commands::ListBackends => Command::ListBackends,
            Commands::Backends {
                action: Some(BackendsAction::Get { name }),
            }
            | Commands::GetBackend { name } => Command::GetBackend { name: name.clone() },
            Commands::General => Command::General,
            Commands::Conf => Command::Conf,
        }
    }

    /// Flag and environment values that override the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.endpoint.clone(),
            timeout_secs: self.timeout,
            conf_path: self.conf_path.clone(),
        }
    }
}
