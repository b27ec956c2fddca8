use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use codeflux_backend::client::config::DEFAULT_ENDPOINT;
use codeflux_backend::client::{
    ClientConfig, ConversionController, ConversionState, HttpTransport, LanguageCatalog,
    LanguagePicker, Locale, Messages,
};

/// Convert source code between programming languages through a CodeFlux backend
#[derive(Debug, Parser)]
#[command(name = "codeflux", version)]
struct Cli {
    /// Source file to convert; reads stdin when omitted
    input: Option<PathBuf>,

    /// Source language (exact name or an unambiguous search term)
    #[arg(short, long, default_value = "Python")]
    from: String,

    /// Target language (exact name or an unambiguous search term)
    #[arg(short, long, default_value = "JavaScript")]
    to: String,

    /// UI and model output locale, e.g. es-ES; defaults to the system locale
    #[arg(long, env = "CODEFLUX_LOCALE")]
    locale: Option<String>,

    /// Conversion endpoint of the backend
    #[arg(long, env = "CODEFLUX_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// List languages matching TERM (all when TERM is omitted) and exit
    #[arg(long, value_name = "TERM", num_args = 0..=1, default_missing_value = "")]
    list: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match run(Cli::parse()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let locale = Locale::detect(cli.locale.as_deref());
    let config = ClientConfig::new(cli.endpoint.clone(), locale);
    let messages = config.messages();
    let catalog = LanguageCatalog::builtin();

    if let Some(term) = cli.list.as_deref() {
        print_languages(catalog, term, messages);
        return Ok(ExitCode::SUCCESS);
    }

    let mut source = LanguagePicker::new(catalog, "Python")?;
    let mut target = LanguagePicker::new(catalog, "JavaScript")?;
    pick(&mut source, &cli.from, messages)?;
    pick(&mut target, &cli.to, messages)?;

    let code = read_source(cli.input.as_ref())?;

    let transport = HttpTransport::from_config(&config);
    let mut controller = ConversionController::new(transport, config);
    let request = controller.request(code, source.selected(), target.selected());

    eprintln!("{} ({} -> {})", messages.converting, source.selected(), target.selected());
    match controller.submit(request).await {
        ConversionState::Succeeded(result) => {
            println!("{}", result.text);
            Ok(ExitCode::SUCCESS)
        }
        ConversionState::Failed(failure) => {
            eprintln!("{}", failure.message());
            Ok(ExitCode::FAILURE)
        }
        state => anyhow::bail!("conversion ended in unexpected state: {:?}", state),
    }
}

/// Select by exact name, else by the single search match
fn pick(picker: &mut LanguagePicker, name: &str, messages: &Messages) -> Result<()> {
    if picker.select(name).is_ok() {
        return Ok(());
    }

    picker.search(name);
    let candidates = picker.visible();
    match candidates.as_slice() {
        [only] => {
            picker.select(only)?;
            Ok(())
        }
        [] => {
            picker.dismiss();
            anyhow::bail!("{}: {}", messages.no_languages_found, name)
        }
        many => {
            let listed = many.join(", ");
            picker.dismiss();
            anyhow::bail!("{} is ambiguous: {}", name, listed)
        }
    }
}

fn print_languages(catalog: LanguageCatalog, term: &str, messages: &Messages) {
    let matches = catalog.filter(term);
    if matches.is_empty() {
        println!("{}", messages.no_languages_found);
        return;
    }
    for language in matches {
        println!("{}", language);
    }
}

fn read_source(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read source code from stdin")?;
            Ok(code)
        }
    }
}
