use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use streamkit_codec::{
    CodecType, DEFAULT_MIME_TYPE, StaticRegistry, list_encoders, select_first_encoder,
};

#[derive(Parser)]
#[command(name = "streamkit-probe")]
#[command(about = "Query a device codec snapshot for video encoders", long_about = None)]
struct Cli {
    /// Log lookup diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every encoder supporting the MIME type, in registry order
    List(Query),
    /// Print the first encoder supporting the MIME type
    Select(Query),
}

#[derive(Args)]
struct Query {
    /// JSON snapshot of the device codec list
    #[arg(short, long)]
    registry: PathBuf,

    /// MIME type to look up
    #[arg(short, long, conflicts_with = "codec")]
    mime: Option<String>,

    /// Codec to look up instead of a raw MIME type
    #[arg(short, long, value_enum)]
    codec: Option<Codec>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Codec {
    H264,
    H265,
    Vp8,
    Vp9,
    Av1,
}

impl From<Codec> for CodecType {
    fn from(codec: Codec) -> Self {
        match codec {
            Codec::H264 => Self::H264,
            Codec::H265 => Self::H265,
            Codec::Vp8 => Self::Vp8,
            Codec::Vp9 => Self::Vp9,
            Codec::Av1 => Self::Av1,
        }
    }
}

impl Query {
    fn mime_type(&self) -> String {
        match (&self.mime, self.codec) {
            (Some(mime), _) => mime.clone(),
            (None, Some(codec)) => CodecType::from(codec).mime_type().to_owned(),
            (None, None) => DEFAULT_MIME_TYPE.to_owned(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::List(query) => run_list(&query),
        Commands::Select(query) => run_select(&query),
    }
}

fn load_registry(path: &Path) -> Result<StaticRegistry> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry snapshot {}", path.display()))?;
    let registry = StaticRegistry::from_json(&json)
        .with_context(|| format!("Failed to parse registry snapshot {}", path.display()))?;
    log::debug!("loaded {} codecs from {}", registry.codecs().len(), path.display());
    Ok(registry)
}

fn run_list(query: &Query) -> Result<()> {
    let registry = load_registry(&query.registry)?;
    let mime_type = query.mime_type();

    let encoders = list_encoders(&registry, &mime_type)
        .with_context(|| format!("Failed to list {mime_type} encoders"))?;

    println!(
        "{}",
        format!("{} encoder(s) for {mime_type}", encoders.len())
            .green()
            .bold()
    );
    for encoder in &encoders {
        println!("  {} [{}]", encoder.name, encoder.supported_types.join(", "));
    }
    Ok(())
}

fn run_select(query: &Query) -> Result<()> {
    let registry = load_registry(&query.registry)?;
    let mime_type = query.mime_type();

    let encoder = select_first_encoder(&registry, &mime_type)
        .with_context(|| format!("Failed to select {mime_type} encoder"))?;

    println!("{}", encoder.name);
    Ok(())
}
