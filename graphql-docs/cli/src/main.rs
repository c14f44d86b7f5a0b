use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use graphql_docs::Configuration;
use tracing_subscriber::EnvFilter;

/// CLI arguments. See <https://docs.rs/clap/latest/clap/_derive/index.html>
#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generates Markdown reference documentation for the query operations of a schema
    Markdown {
        /// The path to the schema file, or `-` for stdin
        schema: PathBuf,
        /// YAML configuration file
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Where to write the document; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Prints the JSON schema of the configuration file
    ConfigSchema,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Markdown {
            schema,
            config,
            output,
        } => markdown(&schema, config.as_deref(), output.as_deref()),
        Command::ConfigSchema => config_schema(),
    }
}

fn read_input(input_path: &Path) -> anyhow::Result<String> {
    if input_path == Path::new("-") {
        io::read_to_string(io::stdin()).context("reading schema from stdin")
    } else {
        fs::read_to_string(input_path)
            .with_context(|| format!("reading {}", input_path.display()))
    }
}

fn markdown(schema: &Path, config: Option<&Path>, output: Option<&Path>) -> anyhow::Result<()> {
    let configuration = match config {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?
            .parse::<Configuration>()?,
        None => Configuration::default(),
    };
    let sdl = read_input(schema)?;
    let document = graphql_docs::generate_docs(&sdl, &configuration)?;
    match output {
        Some(path) => {
            fs::write(path, document).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "documentation written");
        }
        None => print!("{document}"),
    }
    Ok(())
}

fn config_schema() -> anyhow::Result<()> {
    let schema = graphql_docs::configuration::generate_config_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
