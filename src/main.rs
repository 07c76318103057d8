use anyhow::Context as _;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use wordex_core::{
    config,
    diagnostics::{Diagnostics, SilentDiagnostics, TracingDiagnostics},
    lookup::LookupTable,
    Resolver,
};

#[derive(Parser)]
#[command(
    name = "wordex",
    version,
    about = "Exchange words through a lookup table, with optional text modifiers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "wordex.toml")]
    config: String,

    /// Lookup JSON file (overrides the config).
    #[arg(short, long)]
    lookup: Option<String>,

    /// Target locale inside the lookup (overrides the config).
    #[arg(short = 't', long)]
    locale: Option<String>,

    /// Suppress miss and unknown-modifier warnings.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a word and apply modifier codes in order (L, U, P|x, S|x, R|a|b, T).
    Resolve {
        /// The word to exchange.
        word: String,
        /// Modifier codes.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        modifiers: Vec<String>,
    },
    /// List the locales in the lookup.
    Locales,
    /// Validate the lookup and locale.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let loaded = config::load(&cli.config)?;
    let cfg = loaded.clone().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.log_level)),
        )
        .init();

    if loaded.is_none() {
        tracing::info!("Config file not found at {}, using defaults", cli.config);
    }

    let output = execute(&cli, &cfg)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn diagnostics(quiet: bool) -> Arc<dyn Diagnostics> {
    if quiet {
        Arc::new(SilentDiagnostics)
    } else {
        Arc::new(TracingDiagnostics)
    }
}

/// Run one command and return what it prints.
fn execute(cli: &Cli, cfg: &config::Config) -> anyhow::Result<String> {
    let lookup_path = cli
        .lookup
        .as_deref()
        .or(cfg.exchange.lookup.as_deref())
        .context("no lookup file. Pass --lookup or set exchange.lookup in the config.")?;
    let locale = cli.locale.as_deref().or(cfg.exchange.locale.as_deref());

    let table = LookupTable::load(lookup_path)
        .with_context(|| format!("failed to load lookup {lookup_path}"))?;

    match &cli.command {
        Commands::Resolve { word, modifiers } => {
            let resolver = Resolver::with_diagnostics(&table, locale, diagnostics(cli.quiet))?;
            Ok(resolver.resolve(word, modifiers))
        }
        Commands::Locales => Ok(table.locales().join("\n")),
        Commands::Check => {
            let resolver = wordex_core::build(&table, locale)?;
            Ok(match resolver.locale() {
                Some(locale) => format!("ok: {} words for locale '{locale}'", resolver.len()),
                None => format!("ok: {} words", resolver.len()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MULTI: &str = r#"{
        "French": { "Hello": "Bonjour" },
        "German": { "Hello": "Hallo", "World": "Welt" }
    }"#;

    fn write_lookup(name: &str, json: &str) -> String {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, json).unwrap();
        path.to_str().unwrap().to_string()
    }

    fn run(args: &[&str]) -> anyhow::Result<String> {
        let cli = Cli::try_parse_from(args).unwrap();
        execute(&cli, &config::Config::default())
    }

    #[test]
    fn test_resolve_with_modifiers() {
        let path = write_lookup("__wordex_cli_flat__.json", r#"{"test": "Test"}"#);
        let out = run(&["wordex", "--lookup", &path, "resolve", "test", "U", "S|s"]).unwrap();
        assert_eq!(out, "TESTs");
    }

    #[test]
    fn test_resolve_with_locale() {
        let path = write_lookup("__wordex_cli_multi__.json", MULTI);
        let out = run(&["wordex", "-l", &path, "-t", "German", "resolve", "World"]).unwrap();
        assert_eq!(out, "Welt");
    }

    #[test]
    fn test_locales_listed_sorted() {
        let path = write_lookup("__wordex_cli_locales__.json", MULTI);
        let out = run(&["wordex", "--lookup", &path, "locales"]).unwrap();
        assert_eq!(out, "French\nGerman");
    }

    #[test]
    fn test_check_reports_missing_locale() {
        let path = write_lookup("__wordex_cli_check__.json", MULTI);
        let err = run(&["wordex", "--lookup", &path, "--locale", "Spanish", "check"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The target localisation 'Spanish' was not found in the supplied lookup JSON."
        );
        let out = run(&["wordex", "--lookup", &path, "--locale", "French", "check"]).unwrap();
        assert_eq!(out, "ok: 1 words for locale 'French'");
    }

    #[test]
    fn test_lookup_falls_back_to_config() {
        let path = write_lookup("__wordex_cli_cfg__.json", r#"{"Hello": "Hi"}"#);
        let cli = Cli::try_parse_from(["wordex", "resolve", "Hello"]).unwrap();
        let mut cfg = config::Config::default();
        cfg.exchange.lookup = Some(path);
        assert_eq!(execute(&cli, &cfg).unwrap(), "Hi");
    }

    #[test]
    fn test_quiet_resolve_falls_back() {
        let path = write_lookup("__wordex_cli_quiet__.json", r#"{"Hello": "Hi"}"#);
        let out = run(&["wordex", "--quiet", "--lookup", &path, "resolve", "Bye", "U"]).unwrap();
        assert_eq!(out, "Bye");
        let cli = Cli::try_parse_from(["wordex", "-q", "check"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_missing_lookup_path_is_error() {
        assert!(run(&["wordex", "check"]).is_err());
    }
}
