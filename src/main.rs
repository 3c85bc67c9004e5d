use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use spotwrap::{cli, config, types::SearchType, utils, warning};

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
    /// Authorization code to exchange instead of running the browser flow
    #[clap(long, global = true)]
    code: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the Spotify authorization URL
    AuthUrl,

    /// Get an album
    Album(AlbumOptions),

    /// Get the tracks of an album
    AlbumTracks(PageOptions),

    /// Get an artist
    Artist(IdOption),

    /// Get an artist's top tracks in a country
    TopTracks(TopTracksOptions),

    /// Search the catalog
    Search(SearchOptions),

    /// Get the profile of the authorized user
    Me,

    /// Get a user's public profile
    User(UserOption),

    /// List a user's playlists
    Playlists(UserOption),

    #[clap(about = "Create a playlist for a user")]
    CreatePlaylist(CreatePlaylistOptions),

    /// Add tracks to a playlist
    AddTracks(AddTracksOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct IdOption {
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct UserOption {
    user: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumOptions {
    id: String,
    /// ISO 3166-1 alpha-2 country code
    #[clap(long)]
    market: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PageOptions {
    id: String,
    #[clap(long)]
    limit: Option<u32>,
    #[clap(long)]
    offset: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct TopTracksOptions {
    id: String,
    /// ISO 3166-1 alpha-2 country code
    #[clap(long)]
    country: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    query: String,
    /// Result type(s): album, artist, playlist, track; comma separated or repeated
    #[clap(
        long = "type",
        default_value = "track",
        value_parser = utils::parse_search_type,
        value_delimiter = ',',
        num_args = 1..
    )]
    types: Vec<SearchType>,
    #[clap(long)]
    market: Option<String>,
    #[clap(long)]
    limit: Option<u32>,
    #[clap(long)]
    offset: Option<u32>,
    /// Print the raw JSON response instead of a table
    #[clap(long)]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CreatePlaylistOptions {
    user: String,
    name: String,
    #[clap(long)]
    private: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct AddTracksOptions {
    user: String,
    playlist: String,
    /// Spotify track URIs, e.g. spotify:track:4iV5W9uYEdYUVa79Axb7Rh
    #[clap(required = true)]
    uris: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();
    let code = cli.code;

    match cli.command {
        Command::AuthUrl => cli::auth_url(),
        Command::Album(opt) => cli::album(code, opt.id, opt.market).await,
        Command::AlbumTracks(opt) => cli::album_tracks(code, opt.id, opt.limit, opt.offset).await,
        Command::Artist(opt) => cli::artist(code, opt.id).await,
        Command::TopTracks(opt) => cli::top_tracks(code, opt.id, opt.country).await,
        Command::Search(opt) => {
            cli::search(
                code,
                opt.query,
                opt.types,
                opt.market,
                opt.limit,
                opt.offset,
                opt.json,
            )
            .await
        }
        Command::Me => cli::me(code).await,
        Command::User(opt) => cli::user(code, opt.user).await,
        Command::Playlists(opt) => cli::playlists(code, opt.user).await,
        Command::CreatePlaylist(opt) => {
            cli::create_playlist(code, opt.user, opt.name, opt.private).await
        }
        Command::AddTracks(opt) => cli::add_tracks(code, opt.user, opt.playlist, opt.uris).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
