// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the udd command-line interface.
//!
//! Session commands (`login`, `register`, `logout`) talk to the auth
//! endpoints, `upload` and `search` need a stored session, and `tokenize`
//! and `highlight` run offline against the text core.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use udd::{Credentials, SearchFilters};

#[derive(Parser)]
#[command(
    name = "udd",
    about = "Upload, index and search incident reports",
    version
)]
pub struct Cli {
    /// Backend base URL
    #[arg(long = "api", env = "UDD_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Session file (defaults to <config dir>/udd/session.json)
    #[arg(long, env = "UDD_SESSION", global = true)]
    pub session: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "UDD_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login(CredentialArgs),

    /// Create an account (sign in with `login` afterwards)
    Register(CredentialArgs),

    /// Forget the stored session
    Logout,

    /// Parse a PDF report, review the extracted fields, then index it
    Upload {
        /// PDF file to upload
        file: PathBuf,

        /// Override a parsed field before indexing (e.g. `incidentSeverity=high`)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        edits: Vec<String>,

        /// Index without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Search indexed incidents (lists everything when no filter is given)
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Boolean expression, e.g. `employeeName:Ivan AND NOT incidentSeverity:low`
        #[arg(long = "bool", value_name = "EXPR", conflicts_with_all = FilterArgs::IDS)]
        expression: Option<String>,

        /// Print raw hits as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the token array for a boolean expression
    Tokenize {
        /// Boolean expression
        expression: String,
    },

    /// Render text with the terms emphasized in highlight snippets
    Highlight {
        /// Text to render
        #[arg(long)]
        text: String,

        /// Highlight snippet containing `<em>` markup (repeatable)
        #[arg(long = "snippet")]
        snippets: Vec<String>,

        /// Print the rendering plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct CredentialArgs {
    #[arg(short, long)]
    pub username: String,

    /// Password (read from UDD_PASSWORD when omitted)
    #[arg(short, long, env = "UDD_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub employee_name: Option<String>,

    #[arg(long)]
    pub incident_severity: Option<String>,

    #[arg(long)]
    pub organization_name: Option<String>,

    #[arg(long)]
    pub affected_organization_name: Option<String>,

    #[arg(long)]
    pub incident_description: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Radius around `--address`, e.g. `10km`
    #[arg(long)]
    pub distance: Option<String>,

    /// Use semantic (k-nearest-neighbour) matching for descriptions
    #[arg(long)]
    pub knn: bool,
}

impl FilterArgs {
    const IDS: [&'static str; 8] = [
        "employee_name",
        "incident_severity",
        "organization_name",
        "affected_organization_name",
        "incident_description",
        "address",
        "distance",
        "knn",
    ];
}

impl From<CredentialArgs> for Credentials {
    fn from(args: CredentialArgs) -> Self {
        Credentials {
            username: args.username,
            password: args.password,
        }
    }
}

impl From<FilterArgs> for SearchFilters {
    fn from(args: FilterArgs) -> Self {
        SearchFilters {
            employee_name: args.employee_name.unwrap_or_default(),
            incident_severity: args.incident_severity.unwrap_or_default(),
            organization_name: args.organization_name.unwrap_or_default(),
            affected_organization_name: args.affected_organization_name.unwrap_or_default(),
            incident_description: args.incident_description.unwrap_or_default(),
            address: args.address.unwrap_or_default(),
            distance: args.distance.unwrap_or_default(),
            knn: args.knn,
        }
    }
}
