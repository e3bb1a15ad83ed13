use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::actions::{Action, DataPayload, FailurePayload, SideEffect};
use crate::app::state::{AppState, InputMode};
use crate::app::update::update;
use crate::app::view;
use crate::github::{GithubClient, GithubError, queries};
use crate::util::config::AppConfig;

pub async fn run(config: AppConfig, client: GithubClient, username: Option<String>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config, client, username).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    client: GithubClient,
    username: Option<String>,
) -> Result<()> {
    let mut state = AppState::new(config.ui.load_more_margin);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Handle of the in-flight language walk. Replacing a walk aborts the
    // old one so results for a previous user can never trickle in (the
    // session token on each payload is the second line of defense).
    let mut language_walk: Option<JoinHandle<()>> = None;

    // A username given on the command line skips the entry prompt.
    if let Some(username) = username {
        state.input = username;
        let effects = update(&mut state, Action::SubmitInput);
        for effect in effects {
            spawn_side_effect(effect, &config, &client, &action_tx, &mut language_walk);
        }
    }

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        // Render
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        // Wait for events
        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Some(action) = map_event_to_action(&event, &state) {
                        let effects = update(&mut state, action);
                        for effect in effects {
                            spawn_side_effect(effect, &config, &client, &action_tx, &mut language_walk);
                        }
                    }
            }
            // Actions from background tasks
            Some(action) = action_rx.recv() => {
                let effects = update(&mut state, action);
                for effect in effects {
                    spawn_side_effect(effect, &config, &client, &action_tx, &mut language_walk);
                }
            }
        }
    }

    if let Some(walk) = language_walk {
        walk.abort();
    }

    Ok(())
}

fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    if *code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match state.input_mode {
        InputMode::UserEntry => match code {
            KeyCode::Enter => Some(Action::SubmitInput),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Esc => {
                // Esc returns to the list when a user is already loaded,
                // otherwise there is nothing to go back to.
                if state.username.is_empty() {
                    Some(Action::Quit)
                } else {
                    Some(Action::Back)
                }
            }
            KeyCode::Char(c) => Some(Action::InputChar(*c)),
            _ => None,
        },
        InputMode::FilterEntry => match code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Enter => Some(Action::SubmitInput),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Tab => Some(Action::CycleLanguage),
            KeyCode::Char(c) => Some(Action::InputChar(*c)),
            _ => None,
        },
        InputMode::Normal => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Char('/') => Some(Action::StartFilter),
            KeyCode::Tab | KeyCode::Char('l') => Some(Action::CycleLanguage),
            KeyCode::Char('u') => Some(Action::StartUserEntry),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Enter | KeyCode::Char('o') => Some(Action::OpenInBrowser),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        },
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    config: &AppConfig,
    client: &GithubClient,
    action_tx: &mpsc::UnboundedSender<Action>,
    language_walk: &mut Option<JoinHandle<()>>,
) {
    match effect {
        SideEffect::FetchUser { session, username } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(user = %username, "Fetching user profile");
                match client.get_user(&username).await {
                    Ok(user) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::User { session, user }));
                    }
                    Err(e) => {
                        warn!(user = %username, error = %e, "Failed to fetch user profile");
                        let _ = tx.send(Action::LoadFailed(FailurePayload::InitialLoad {
                            session,
                            message: user_facing_message(&e, &username),
                        }));
                    }
                }
            });
        }
        SideEffect::FetchRepoPage {
            session,
            username,
            page,
        } => {
            let client = client.clone();
            let tx = action_tx.clone();
            let per_page = config.github.browse_per_page;

            tokio::spawn(async move {
                debug!(user = %username, page, "Fetching repository page");
                match client.get_repositories(&username, page, per_page).await {
                    Ok(fetched) => {
                        let has_more = fetched.has_more();
                        let _ = tx.send(Action::DataLoaded(DataPayload::RepoPage {
                            session,
                            page,
                            repos: fetched.items,
                            has_more,
                        }));
                    }
                    Err(e) if page == 1 => {
                        warn!(user = %username, error = %e, "Initial repository load failed");
                        let _ = tx.send(Action::LoadFailed(FailurePayload::InitialLoad {
                            session,
                            message: user_facing_message(&e, &username),
                        }));
                    }
                    Err(e) => {
                        warn!(user = %username, page, error = %e, "Load-more failed");
                        let _ = tx.send(Action::LoadFailed(FailurePayload::LoadMore {
                            session,
                            message: format!("Failed to load more repositories: {}", e),
                        }));
                    }
                }
            });
        }
        SideEffect::SearchRepositories {
            seq,
            username,
            text,
            language,
        } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                let query = queries::build_search_query(&username, &text, language.as_deref());
                debug!(query = %query, "Searching repositories");
                match client.search_repositories(&query).await {
                    Ok(results) => {
                        let _ = tx.send(Action::DataLoaded(DataPayload::FilterResults {
                            seq,
                            repos: results.items,
                        }));
                    }
                    Err(e) => {
                        warn!(query = %query, error = %e, "Repository search failed");
                        let _ = tx.send(Action::LoadFailed(FailurePayload::Filter {
                            seq,
                            message: format!("Error searching repositories: {}", e),
                        }));
                    }
                }
            });
        }
        SideEffect::WalkLanguages { session, username } => {
            if let Some(walk) = language_walk.take() {
                walk.abort();
            }

            let client = client.clone();
            let tx = action_tx.clone();
            let per_page = config.github.language_walk_per_page;

            *language_walk = Some(tokio::spawn(async move {
                debug!(user = %username, "Starting language walk");
                let pages = client.repo_pages(username.clone(), per_page);
                let mut pages = std::pin::pin!(pages);

                while let Some(result) = pages.next().await {
                    match result {
                        Ok(repos) => {
                            let languages =
                                repos.into_iter().map(|repo| repo.language).collect();
                            if tx
                                .send(Action::DataLoaded(DataPayload::LanguagesPage {
                                    session,
                                    languages,
                                }))
                                .is_err()
                            {
                                break;
                            }
                        }
                        Err(e) => {
                            // Terminal for the walk; pages already delivered
                            // stay accumulated.
                            warn!(user = %username, error = %e, "Language walk aborted");
                            break;
                        }
                    }
                }
                debug!(user = %username, "Language walk finished");
            }));
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_url(&url) {
                    warn!(error = %e, "Failed to open URL");
                }
            });
        }
    }
}

fn user_facing_message(error: &GithubError, username: &str) -> String {
    if error.is_not_found() {
        format!("No user named '{}' was found on GitHub", username)
    } else {
        format!("Error occurred: {}", error)
    }
}
