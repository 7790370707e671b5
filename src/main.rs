mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cli::Cli;
use prismforge_lib::{
    parse_file_key, reduce_document, write_simplified, Config, FigmaApiClient, FigmaAuth,
    PrismError, ReduceStats,
};

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(code) => return code,
    };
    let verbose = args.verbose;

    match execute(args).await {
        Ok(output) => {
            println!("Simplified JSON saved to {}", output.display());
            ExitCode::SUCCESS
        }
        Err(err) => render_error(&err, verbose),
    }
}

async fn execute(args: Cli) -> Result<PathBuf, PrismError> {
    let file_config = load_config(args.config.as_deref())?;
    let config = resolve_config(&args, file_config)?;
    let file_key = parse_file_key(&args.file_key)?;
    if args.verbose {
        log_effective_config(args.config.as_deref(), &config);
    }

    let client = FigmaApiClient::from_config(FigmaAuth::new(args.access_token), &config)?;
    if args.verbose {
        eprintln!("Fetching {}…", client.file_url(&file_key)?);
    }
    let fetched = client.get_file(&file_key).await?;
    if args.verbose {
        eprintln!(
            "Received {} bytes for '{}' ({} top-level node(s))",
            fetched.body_len,
            fetched.file.file_name().unwrap_or("untitled"),
            fetched.file.top_level_nodes().len()
        );
    }

    let roots = reduce_document(&fetched.file);
    if args.verbose {
        eprintln!("{}", ReduceStats::collect(&roots).summary_line());
    }

    write_simplified(&config.output, &roots)?;
    Ok(config.output)
}

fn load_config(path: Option<&Path>) -> Result<Config, PrismError> {
    match path {
        Some(p) => Config::from_toml_file(p).map_err(|e| {
            PrismError::config(format!("Failed to read config {}: {}", p.display(), e))
        }),
        None => Ok(Config::default()),
    }
}

/// Layers command-line values over the file config, then validates the result.
fn resolve_config(args: &Cli, mut config: Config) -> Result<Config, PrismError> {
    if let Some(api_base) = &args.api_base {
        config.api_base = api_base.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout = timeout;
    }
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    config
        .validate()
        .map_err(|e| PrismError::config(format!("Invalid config: {}", e)))?;
    Ok(config)
}

fn log_effective_config(config_path: Option<&Path>, config: &Config) {
    let config_source = config_path
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "defaults/built-in".to_string());
    eprintln!(
        "Effective config (source: {}): api_base {}, timeout {}, output {}",
        config_source,
        config.api_base,
        humantime_serde::re::humantime::format_duration(config.timeout),
        config.output.display()
    );
}

fn render_error(err: &PrismError, verbose: bool) -> ExitCode {
    match err {
        PrismError::FigmaApi { .. } => println!("{err}"),
        _ => println!("Error: {err}"),
    }
    if verbose {
        eprintln!("Hint: {}", err.remediation());
    }
    ExitCode::from(1)
}
