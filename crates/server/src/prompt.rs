//! Interactive text prompt.
//!
//! [`run`] owns the terminal; everything it prints comes from [`open`] and
//! [`FollowUp::answer`], which work on plain strings.

use dialoguer::Input;
use dialoguer::console::Term;
use watchlist_store::JsonStore;

use crate::service;
use crate::table;

const MENU: &str = "What would you like to view?
1. Currently watching shows
2. Films
3. Unwatched shows by genre";

const INDEX_HELP: &str = "The Index is the show's position in your full watchlist.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Watching,
    Films,
    Genres,
}

impl MenuChoice {
    pub fn parse(reply: &str) -> Option<Self> {
        match reply.trim() {
            "1" => Some(Self::Watching),
            "2" => Some(Self::Films),
            "3" => Some(Self::Genres),
            _ => None,
        }
    }
}

/// The second question a view asks, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    MarkWatched,
    PickGenre(Vec<String>),
}

/// Text printed for a menu choice, plus its follow-up question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub follow_up: Option<FollowUp>,
}

impl Screen {
    fn done(text: String) -> Self {
        Self {
            text,
            follow_up: None,
        }
    }
}

pub async fn run(store: &JsonStore) -> anyhow::Result<()> {
    let term = Term::stdout();
    term.write_line(MENU)?;
    let reply = ask(&term, "Enter your choice (1, 2 or 3)")?;
    let Some(choice) = MenuChoice::parse(&reply) else {
        term.write_line("Invalid input. Please enter 1, 2 or 3.")?;
        return Ok(());
    };

    let screen = open(store, choice).await;
    term.write_str(&screen.text)?;
    if let Some(follow_up) = screen.follow_up {
        let reply = ask(&term, follow_up.question())?;
        term.write_str(&follow_up.answer(store, &reply).await)?;
    }
    Ok(())
}

fn ask(term: &Term, prompt: &str) -> anyhow::Result<String> {
    let reply: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text_on(term)?;
    Ok(reply.trim().to_string())
}

/// Load and render the view behind a menu choice.
pub async fn open(store: &JsonStore, choice: MenuChoice) -> Screen {
    match choice {
        MenuChoice::Watching => match service::currently_watching(store).await {
            Ok(rows) if rows.is_empty() => {
                Screen::done(format!("{}\n", table::watching_table(&rows)))
            }
            Ok(rows) => Screen {
                text: format!("{}\n{INDEX_HELP}\n", table::watching_table(&rows)),
                follow_up: Some(FollowUp::MarkWatched),
            },
            Err(e) => Screen::done(format!("Error: {e}\n")),
        },
        MenuChoice::Films => match service::all_films(store).await {
            Ok(films) => Screen::done(format!("{}\n", table::films_table(&films))),
            Err(e) => Screen::done(format!("Error: {e}\n")),
        },
        MenuChoice::Genres => match service::available_genres(store).await {
            Ok(genres) if genres.is_empty() => Screen::done("No genres found.\n".to_string()),
            Ok(genres) => {
                let mut text = String::from("Available genres:\n");
                for (i, genre) in genres.iter().enumerate() {
                    text.push_str(&format!("{}. {genre}\n", i + 1));
                }
                Screen {
                    text,
                    follow_up: Some(FollowUp::PickGenre(genres)),
                }
            }
            Err(e) => Screen::done(format!("Error: {e}\n")),
        },
    }
}

impl FollowUp {
    pub fn question(&self) -> &'static str {
        match self {
            Self::MarkWatched => "Enter the Index of the show you watched (0 to cancel)",
            Self::PickGenre(_) => "Enter the number of a genre (0 to cancel)",
        }
    }

    /// Act on the user's reply and return what to print.
    pub async fn answer(&self, store: &JsonStore, reply: &str) -> String {
        let reply = reply.trim();
        if reply.is_empty() || reply == "0" {
            return "No changes made.\n".to_string();
        }

        match self {
            Self::MarkWatched => {
                let Ok(index) = reply.parse::<i64>() else {
                    return format!("Invalid input: {reply}\n");
                };
                match service::mark_watched(store, index).await {
                    Ok(outcome) if outcome.is_completed() => {
                        format!("Show {index} marked as watched and completed!\n")
                    }
                    Ok(_) => format!("Show {index} marked as watched.\n"),
                    Err(e) => format!("Error: {e}\n"),
                }
            }
            Self::PickGenre(genres) => {
                let Some(genre) = reply
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| genres.get(i))
                else {
                    return format!("Invalid input: {reply}\n");
                };
                match service::unwatched_by_genre(store, genre).await {
                    Ok(found) => format!("{}\n", table::genre_shows_table(&found)),
                    Err(e) => format!("Error: {e}\n"),
                }
            }
        }
    }
}
