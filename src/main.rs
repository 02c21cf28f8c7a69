use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;

use modu_rank_hook::cli::Args;
use modu_rank_hook::config::{FileCredentials, FileSettings};
use modu_rank_hook::exclusion::ProjectExclusions;
use modu_rank_hook::hook::{SessionHook, error_line, status_line};
use modu_rank_hook::input::read_stdin;
use modu_rank_hook::logging;
use modu_rank_hook::submit::RankClient;

fn main() {
    // Exit 0 on every path: a failing hook must not disturb the host session.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version included: stdout stays reserved
            eprint!("{}", err.render());
            return;
        }
    };
    logging::init(args.debug);

    if let Err(err) = run(&args) {
        eprintln!("{}", error_line(&format!("{err:#}")));
    }
}

fn run(args: &Args) -> Result<()> {
    let stdin = read_stdin().context("read hook input")?;

    let credentials = match &args.credentials {
        Some(path) => FileCredentials::at(path),
        None => FileCredentials::default_location(),
    };
    let settings = match &args.config {
        Some(path) => FileSettings::at(path),
        None => FileSettings::default_location(),
    };
    let client = RankClient::new(Duration::from_secs(args.timeout_secs));
    let hook = SessionHook::new(&credentials, client)
        .with_exclusions(ProjectExclusions::from_settings(&settings.load()))
        .with_server_url(args.server_url.clone());

    if let Some(result) = hook.run(&stdin, Utc::now())? {
        if let Some(line) = status_line(&result) {
            eprintln!("{line}");
        }
    }
    Ok(())
}
