use std::path::PathBuf;

use crate::submit::DEFAULT_TIMEOUT_SECS;

#[derive(clap::Parser, Debug)]
#[command(
    name = "modu-rank-hook",
    version,
    about = "Submit session token usage to Modu Rank when a session ends"
)]
pub struct Args {
    /// Credentials file. Defaults to ~/.modu/rank/credentials.json
    #[arg(long, env = "MODU_RANK_CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Opt-out settings file. Defaults to ~/.modu/rank/config.yaml
    #[arg(long, env = "MODU_RANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the server base URL from the credentials file
    #[arg(long, env = "MODU_RANK_SERVER_URL")]
    pub server_url: Option<String>,

    /// Seconds to wait for the rank service before giving up
    #[arg(long, env = "MODU_RANK_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Debug mode: log pipeline decisions to stderr
    #[arg(long, env = "MODU_RANK_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Args as clap::Parser>::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn defaults() {
        let args = Args::try_parse_from(["modu-rank-hook"]).unwrap();
        assert_eq!(args.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(args.server_url.is_none());
        assert!(args.config.is_none());
        assert!(!args.debug);
    }

    #[test]
    #[serial]
    fn overrides() {
        let args = Args::try_parse_from([
            "modu-rank-hook",
            "--credentials",
            "/tmp/creds.json",
            "--config",
            "/tmp/config.yaml",
            "--server-url",
            "http://localhost:1234",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(args.credentials, Some(PathBuf::from("/tmp/creds.json")));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.yaml")));
        assert_eq!(args.server_url.as_deref(), Some("http://localhost:1234"));
        assert_eq!(args.timeout_secs, 3);
    }

    #[test]
    #[serial]
    fn environment_fills_unset_flags() {
        // SAFETY: serialized with every other env-reading test
        unsafe {
            env::set_var("MODU_RANK_SERVER_URL", "http://env-host:8080");
            env::set_var("MODU_RANK_TIMEOUT_SECS", "4");
        }
        let args = Args::try_parse_from(["modu-rank-hook"]).unwrap();
        let flagged =
            Args::try_parse_from(["modu-rank-hook", "--timeout-secs", "7"]).unwrap();
        unsafe {
            env::remove_var("MODU_RANK_SERVER_URL");
            env::remove_var("MODU_RANK_TIMEOUT_SECS");
        }

        assert_eq!(args.server_url.as_deref(), Some("http://env-host:8080"));
        assert_eq!(args.timeout_secs, 4);
        assert_eq!(flagged.timeout_secs, 7);
    }
}
