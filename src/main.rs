use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use sporlshuffle::{cli, config, error};

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
    /// Play a playlist in random order without repeats
    Shuffle(ShuffleOptions),

    /// List the track links of a playlist
    Tracks(TracksOptions),

    /// Show the details of a single track
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ShuffleOptions {
    /// Playlist link (https://open.spotify.com/playlist/...); prompted for when omitted
    pub playlist_url: Option<String>,

    /// Only print the drawn track instead of starting it in Spotify
    #[clap(long)]
    pub no_play: bool,

    /// Show song info right away instead of after another Enter
    #[clap(long)]
    pub reveal: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Playlist link (https://open.spotify.com/playlist/...)
    pub playlist_url: String,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// Track link (https://open.spotify.com/track/...)
    pub track_url: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    )
    .init();

    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Shuffle(opt) => cli::shuffle(opt.playlist_url, opt.no_play, opt.reveal),
        Command::Tracks(opt) => cli::tracks(opt.playlist_url),
        Command::Info(opt) => cli::info(opt.track_url),
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
