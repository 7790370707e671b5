use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;

pub const USAGE: &str = "Usage: prismforge <ACCESS_TOKEN> <FILE_KEY> [OUTPUT_FILENAME]";

#[derive(Debug, Parser)]
#[command(
    name = "prismforge",
    version,
    about = "Fetch a Figma file and keep only frames, components, instances and text layers"
)]
pub struct Cli {
    /// Figma personal access token (sent as X-Figma-Token)
    #[arg(value_name = "ACCESS_TOKEN")]
    pub access_token: String,

    /// File key, or a figma.com file/design URL
    #[arg(value_name = "FILE_KEY")]
    pub file_key: String,

    /// Output file [default: prismforge_simplified.json]
    #[arg(value_name = "OUTPUT_FILENAME")]
    pub output: Option<PathBuf>,

    /// Extra positional values are accepted and ignored
    #[arg(hide = true, value_name = "IGNORED")]
    pub ignored: Vec<String>,

    /// TOML config file (api_base, timeout, output)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Request timeout, e.g. 30s or 2m
    #[arg(long, value_name = "DURATION", value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    /// Print progress and a reduction summary to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_timeout(raw: &str) -> Result<Duration, String> {
    humantime_serde::re::humantime::parse_duration(raw).map_err(|e| e.to_string())
}

/// Parses process arguments; on failure returns the exit code to stop with.
pub fn parse() -> Result<Cli, ExitCode> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, ExitCode>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            println!("{USAGE}");
            eprintln!("{}", err.render());
            ExitCode::from(1)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_positionals_are_enough() {
        let cli = parse_from(["prismforge", "figd_token", "KEY"]).unwrap();
        assert_eq!(cli.access_token, "figd_token");
        assert_eq!(cli.file_key, "KEY");
        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn third_positional_and_flags_are_parsed() {
        let cli = parse_from([
            "prismforge",
            "--verbose",
            "tok",
            "KEY",
            "out.json",
            "--timeout",
            "90s",
            "--api-base",
            "http://localhost:1234",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.timeout, Some(Duration::from_secs(90)));
        assert_eq!(cli.api_base.as_deref(), Some("http://localhost:1234"));
        assert!(cli.verbose);
    }

    #[test]
    fn extra_positionals_are_ignored() {
        let cli = parse_from(["prismforge", "tok", "KEY", "out.json", "extra", "more", "-v"])
            .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert_eq!(cli.ignored, vec!["extra".to_string(), "more".to_string()]);
        assert!(cli.verbose);
    }

    #[test]
    fn missing_file_key_is_usage_error() {
        assert_eq!(parse_from(["prismforge", "tok"]).unwrap_err(), ExitCode::from(1));
        assert_eq!(parse_from(["prismforge"]).unwrap_err(), ExitCode::from(1));
    }

    #[test]
    fn bad_timeout_is_usage_error() {
        assert!(parse_from(["prismforge", "tok", "KEY", "--timeout", "soon"]).is_err());
    }
}
