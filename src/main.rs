use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use overlaykit::replay::{run_script, Script};
use overlaykit::{build_engine, init_logging, Config};

#[derive(Parser, Debug)]
#[command(name = "overlaykit")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")"))]
#[command(about = "Replay a chart drawing session and print the resulting figures as JSON lines", long_about = None)]
struct Cli {
    /// Session script (JSON)
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Config file (.toml or .json); the platform default location when omitted
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => match Config::default_path() {
            Ok(path) => Ok(Config::load_or_default(&path)?),
            Err(e) => {
                tracing::warn!("{}; using default config", e);
                Ok(Config::default())
            }
        },
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    let config = load_config(cli.config.as_ref())?;
    let mut engine = build_engine(&config)?;
    let script = Script::load(&cli.script)?;

    let records = run_script(&mut engine, &script)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in records {
        writeln!(out, "{}", serde_json::to_string(&record)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_script_and_optional_config() {
        let cli = Cli::try_parse_from(["overlaykit", "session.json"]).unwrap();
        assert_eq!(cli.script, PathBuf::from("session.json"));
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from(["overlaykit", "session.json", "config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("config.toml")));
    }

    #[test]
    fn test_script_required() {
        assert!(Cli::try_parse_from(["overlaykit"]).is_err());
    }
}
