// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Duration;

use udd::{
    build_rendering_plan, extract_emphasized, tokenize, BoolQuery, Client, ClientError, Config,
    Credentials, ParsedDocument, SearchFilters, Session, SessionStore,
};

mod cli;
use cli::{display, Cli, Commands, CredentialArgs, FilterArgs};

const NOT_LOGGED_IN: &str = "Not logged in. Run `udd login` first.";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(message) = run(cli) {
        display::failure(&message);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "udd=debug,warn" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    // Offline commands never touch the config directory.
    match cli.command {
        Commands::Tokenize { expression } => return print_tokens(&expression),
        Commands::Highlight {
            text,
            snippets,
            json,
        } => return print_highlight(&text, &snippets, json),
        _ => {}
    }

    let config = Config::new(cli.api_url, cli.session, cli.timeout).map_err(|e| e.to_string())?;
    let store = config.session_store();
    log::debug!(
        "api {} session {}",
        config.api_url,
        store.path().display()
    );

    if let Commands::Logout = cli.command {
        store.clear().map_err(|e| e.to_string())?;
        display::success("Logged out.");
        return Ok(());
    }

    let client = config.client().map_err(|e| e.to_string())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {}", e))?;

    runtime.block_on(async {
        match cli.command {
            Commands::Login(args) => login(&client, &store, args).await,
            Commands::Register(args) => register(&client, args).await,
            Commands::Upload { file, edits, yes } => {
                upload(&client, &store, &file, &edits, yes).await
            }
            Commands::Search {
                filters,
                expression,
                json,
            } => search(&client, &store, filters, expression, json).await,
            Commands::Logout | Commands::Tokenize { .. } | Commands::Highlight { .. } => Ok(()),
        }
    })
}

// ============================================================================
// OFFLINE COMMANDS
// ============================================================================

fn print_tokens(expression: &str) -> Result<(), String> {
    let json = serde_json::to_string(&tokenize(expression)).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn print_highlight(text: &str, snippets: &[String], json: bool) -> Result<(), String> {
    let terms = extract_emphasized(snippets);
    let plan = build_rendering_plan(text, terms.as_slice());
    if json {
        let out = serde_json::to_string_pretty(&plan).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        println!("{}", display::render_plan(&plan));
    }
    Ok(())
}

// ============================================================================
// BACKEND COMMANDS
// ============================================================================

async fn login(client: &Client, store: &SessionStore, args: CredentialArgs) -> Result<(), String> {
    let credentials = Credentials::from(args);
    let session = with_spinner("Signing in...", client.login(&credentials))
        .await
        .map_err(|e| {
            log::debug!("sign-in failed: {}", e);
            "Invalid username or password".to_string()
        })?;

    store.save(&session).map_err(|e| e.to_string())?;
    display::success(&format!("Signed in as {}.", credentials.username));
    Ok(())
}

/// Registration only creates the account; the user signs in afterwards.
async fn register(client: &Client, args: CredentialArgs) -> Result<(), String> {
    let credentials = Credentials::from(args);
    let message = with_spinner("Registering...", client.register(&credentials))
        .await
        .map_err(|e| {
            log::debug!("registration failed: {}", e);
            match e {
                ClientError::Api { body, .. } if !body.trim().is_empty() => body,
                _ => "Registration failed.".to_string(),
            }
        })?;

    display::success(&message);
    println!("Run `udd login -u {}` to sign in.", credentials.username);
    Ok(())
}

async fn upload(
    client: &Client,
    store: &SessionStore,
    file: &Path,
    edits: &[String],
    yes: bool,
) -> Result<(), String> {
    let session = require_session(store)?;

    let parsed = with_spinner("Parsing document...", client.upload(&session, file))
        .await
        .map_err(|e| report(e, store, "Error uploading file."))?;
    display::print_parsed(&parsed, "Parsed document");

    let document = match apply_edits(&parsed, edits)? {
        Some(edited) => {
            display::print_parsed(&edited, "Edited document");
            edited
        }
        None => parsed,
    };

    if !yes && !confirm("Confirm index? [y/N] ").map_err(|e| e.to_string())? {
        println!("Indexing canceled.");
        return Ok(());
    }

    with_spinner("Indexing...", client.index(&session, &document))
        .await
        .map_err(|e| report(e, store, "Indexing failed."))?;
    display::success("Document successfully indexed.");
    Ok(())
}

async fn search(
    client: &Client,
    store: &SessionStore,
    filters: FilterArgs,
    expression: Option<String>,
    json: bool,
) -> Result<(), String> {
    let session = require_session(store)?;
    let filters = SearchFilters::from(filters);
    let query = expression.as_deref().map(BoolQuery::parse);

    let hits = match query {
        Some(query) if !query.is_empty() => {
            with_spinner("Searching...", client.search_bool(&session, &query))
                .await
                .map_err(|e| report(e, store, "Search failed."))?
        }
        _ if !filters.is_empty() => {
            with_spinner("Searching...", client.search(&session, &filters))
                .await
                .map_err(|e| report(e, store, "Search failed."))?
        }
        _ => with_spinner("Fetching incidents...", client.fetch_all(&session))
            .await
            .map_err(|e| report(e, store, "Failed to fetch incidents"))?,
    };

    if json {
        let out = serde_json::to_string_pretty(&hits).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        display::print_hits(&hits);
    }
    Ok(())
}

// ============================================================================
// HELPERS
// ============================================================================

fn require_session(store: &SessionStore) -> Result<Session, String> {
    match store.load() {
        Ok(Some(session)) => Ok(session),
        Ok(None) => Err(NOT_LOGGED_IN.to_string()),
        Err(e) => {
            log::warn!("unreadable session file {}: {}", store.path().display(), e);
            Err(NOT_LOGGED_IN.to_string())
        }
    }
}

/// `--set` edits on top of the backend parse, or `None` when there are none.
/// The parse itself is left untouched so it can be shown as received.
fn apply_edits(parsed: &ParsedDocument, edits: &[String]) -> Result<Option<ParsedDocument>, String> {
    if edits.is_empty() {
        return Ok(None);
    }
    let mut edited = parsed.clone();
    for edit in edits {
        edited.apply_edit(edit).map_err(|e| e.to_string())?;
    }
    Ok(Some(edited))
}

/// Log the underlying error and return the user-facing message. A rejected
/// token is dropped so the next command asks for a fresh login.
fn report(error: ClientError, store: &SessionStore, message: &str) -> String {
    if store.clear_if_rejected(&error) {
        return format!("{} {}", message, NOT_LOGGED_IN);
    }
    log::debug!("{}", error);
    message.to_string()
}

fn confirm(prompt: &str) -> std::io::Result<bool> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

async fn with_spinner<F: Future>(message: &'static str, future: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    let output = future.await;
    spinner.finish_and_clear();
    output
}
