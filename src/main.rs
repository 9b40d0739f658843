use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use discofy::{
    cli::{self, ConvertOptions},
    config, error,
    matching::MatchMode,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert a collection export into a Spotify playlist
    Convert(ConvertArgs),

    /// Show the first records of a collection export
    Preview(PreviewArgs),

    /// List stored conversion results, or show one of them
    Report(ReportArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Collection export (.csv)
    file: PathBuf,

    /// Match single tracks or whole releases
    #[clap(long, value_enum, default_value_t = MatchMode::Album)]
    mode: MatchMode,

    /// Playlist name
    #[clap(long)]
    name: Option<String>,

    /// Playlist description
    #[clap(long)]
    description: Option<String>,

    /// Make the playlist public
    #[clap(long)]
    public: bool,

    /// Spotify access token
    #[clap(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Match records without creating a playlist
    #[clap(long)]
    dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PreviewArgs {
    /// Collection export (.csv)
    file: PathBuf,

    /// Number of records to show
    #[clap(long, default_value_t = 5)]
    rows: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct ReportArgs {
    /// Playlist id of the run to show
    playlist_id: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert(opt) => {
            cli::convert(ConvertOptions {
                file: opt.file,
                mode: opt.mode,
                name: opt.name,
                description: opt.description,
                public: opt.public,
                token: opt.token,
                dry_run: opt.dry_run,
            })
            .await
        }
        Command::Preview(opt) => cli::preview(&opt.file, opt.rows).await,
        Command::Report(opt) => cli::report(opt.playlist_id).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
