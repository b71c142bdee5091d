use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use watchlist_store::{JsonStore, SHOWS_FILE};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Track the shows and films you are watching.
#[derive(Debug, Parser)]
#[command(name = "watchlist", version)]
pub struct Cli {
    /// Directory holding shows.json and films.json.
    #[arg(long, env = "WATCHLIST_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the HTTP API.
    Serve {
        #[arg(long, env = "WATCHLIST_BIND", default_value = DEFAULT_BIND)]
        bind: String,
    },
    /// Interactive prompt (the default). Show indexes refer to positions in
    /// the full watchlist.
    Prompt,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Prompt)
    }

    pub fn store(&self) -> JsonStore {
        JsonStore::in_dir(resolve_data_dir(self.data_dir.as_deref()))
    }
}

/// An explicit directory wins; otherwise the executable's own directory when
/// it ships a `shows.json`, otherwise `./data`.
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .filter(|dir| dir.join(SHOWS_FILE).is_file())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_to_prompt() {
        let cli = parse(&["watchlist"]);
        assert_eq!(cli.command(), Command::Prompt);
    }

    #[test]
    fn serve_takes_bind_address() {
        let cli = parse(&["watchlist", "serve", "--bind", "127.0.0.1:9000"]);
        assert_eq!(
            cli.command(),
            Command::Serve {
                bind: "127.0.0.1:9000".into(),
            }
        );
    }

    #[test]
    fn data_dir_flag_is_global() {
        let cli = parse(&["watchlist", "prompt", "--data-dir", "/srv/watchlist"]);
        let store = cli.store();
        assert_eq!(store.shows_path(), Path::new("/srv/watchlist/shows.json"));
        assert_eq!(store.films_path(), Path::new("/srv/watchlist/films.json"));
    }

    #[test]
    fn explicit_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/elsewhere")));
        assert_eq!(dir, PathBuf::from("/tmp/elsewhere"));
    }
}
