use crate::app::actions::{Action, DataPayload, FailurePayload, SideEffect};
use crate::app::state::{AppState, BrowseState, FilterCriteria, FilterState, InputMode};

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Tick => vec![],

        Action::InputChar(ch) => match state.input_mode {
            InputMode::UserEntry => {
                state.input.push(ch);
                vec![]
            }
            InputMode::FilterEntry => {
                state.criteria.text.push(ch);
                apply_filter(state)
            }
            InputMode::Normal => vec![],
        },
        Action::InputBackspace => match state.input_mode {
            InputMode::UserEntry => {
                state.input.pop();
                vec![]
            }
            InputMode::FilterEntry => {
                state.criteria.text.pop();
                apply_filter(state)
            }
            InputMode::Normal => vec![],
        },
        Action::SubmitInput => match state.input_mode {
            InputMode::UserEntry => {
                let username = state.input.trim().to_string();
                if username.is_empty() {
                    return vec![];
                }
                submit_username(state, username)
            }
            InputMode::FilterEntry => {
                // Keep the filter, leave entry mode.
                state.input_mode = InputMode::Normal;
                vec![]
            }
            InputMode::Normal => vec![],
        },
        Action::StartUserEntry => {
            state.input_mode = InputMode::UserEntry;
            state.input.clear();
            vec![]
        }
        Action::StartFilter => {
            // Filtering only makes sense once a user is loaded.
            if matches!(
                state.browse,
                BrowseState::Idle | BrowseState::LoadingInitial | BrowseState::Errored { .. }
            ) {
                return vec![];
            }
            state.input_mode = InputMode::FilterEntry;
            vec![]
        }
        Action::CycleLanguage => {
            if state.languages.is_empty() || state.username.is_empty() {
                return vec![];
            }
            state.criteria.language = state.next_language();
            apply_filter(state)
        }
        Action::Back => {
            if state.input_mode == InputMode::FilterEntry || state.filter_active() {
                state.input_mode = InputMode::Normal;
                state.criteria = FilterCriteria::default();
                deactivate_filter(state);
            } else if state.input_mode == InputMode::UserEntry && !state.username.is_empty() {
                state.input_mode = InputMode::Normal;
            } else if state.notice.is_some() {
                state.notice = None;
            }
            vec![]
        }

        Action::MoveUp => {
            state.cursor = state.cursor.saturating_sub(1);
            vec![]
        }
        Action::MoveDown => {
            let len = state.visible_repos().len();
            if state.cursor + 1 < len {
                state.cursor += 1;
            }
            maybe_load_more(state)
        }

        Action::Refresh => {
            if state.username.is_empty() {
                return vec![];
            }
            let username = state.username.clone();
            submit_username(state, username)
        }
        Action::OpenInBrowser => {
            let url = state
                .selected_repo()
                .map(|repo| repo.html_url.clone())
                .or_else(|| state.user.as_ref().map(|u| u.html_url.clone()));
            match url {
                Some(url) => vec![SideEffect::OpenUrl(url)],
                None => vec![],
            }
        }
        Action::DismissNotice => {
            state.notice = None;
            vec![]
        }

        Action::DataLoaded(payload) => {
            apply_data(state, payload);
            vec![]
        }
        Action::LoadFailed(payload) => {
            apply_failure(state, payload);
            vec![]
        }
    }
}

/// Reset everything tied to the previous target user and kick off the
/// initial load, the profile fetch, and the language walk. Bumping the
/// session token makes any in-flight results for the old user stale.
fn submit_username(state: &mut AppState, username: String) -> Vec<SideEffect> {
    state.session += 1;
    state.username = username.clone();
    state.user = None;
    state.languages.clear();
    state.criteria = FilterCriteria::default();
    state.filter = FilterState::Inactive;
    state.browse = BrowseState::LoadingInitial;
    state.cursor = 0;
    state.notice = None;
    state.input_mode = InputMode::Normal;

    vec![
        SideEffect::FetchUser {
            session: state.session,
            username: username.clone(),
        },
        SideEffect::FetchRepoPage {
            session: state.session,
            username: username.clone(),
            page: 1,
        },
        SideEffect::WalkLanguages {
            session: state.session,
            username,
        },
    ]
}

/// Re-apply the current filter criteria. Empty criteria deactivate the
/// filtered view without touching the network; anything else issues a
/// scoped search under a fresh sequence token.
fn apply_filter(state: &mut AppState) -> Vec<SideEffect> {
    state.cursor = 0;

    if state.criteria.is_empty() {
        deactivate_filter(state);
        return vec![];
    }

    state.filter_seq += 1;
    state.filter = FilterState::Loading;
    vec![SideEffect::SearchRepositories {
        seq: state.filter_seq,
        username: state.username.clone(),
        text: state.criteria.text.clone(),
        language: state.criteria.language.clone(),
    }]
}

fn deactivate_filter(state: &mut AppState) {
    // Invalidate any in-flight search so a late response cannot
    // re-activate the filtered view.
    state.filter_seq += 1;
    state.filter = FilterState::Inactive;
    state.clamp_cursor();
}

/// Issue the next browse page when the cursor is close to the end of a
/// fully loaded list. The `LoadingMore` tag gates re-entrancy: a second
/// request cannot be issued while one is in flight.
fn maybe_load_more(state: &mut AppState) -> Vec<SideEffect> {
    if state.filter_active() {
        return vec![];
    }
    let BrowseState::Ready { repos, page, has_more: true } = &state.browse else {
        return vec![];
    };
    if state.cursor + state.load_more_margin + 1 < repos.len() {
        return vec![];
    }

    let page = *page;
    let BrowseState::Ready { repos, .. } =
        std::mem::replace(&mut state.browse, BrowseState::Idle)
    else {
        unreachable!();
    };
    state.browse = BrowseState::LoadingMore { repos, page };

    vec![SideEffect::FetchRepoPage {
        session: state.session,
        username: state.username.clone(),
        page: page + 1,
    }]
}

fn apply_data(state: &mut AppState, payload: DataPayload) {
    match payload {
        DataPayload::User { session, user } => {
            if session == state.session {
                state.user = Some(user);
            }
        }
        DataPayload::RepoPage {
            session,
            page,
            repos,
            has_more,
        } => {
            if session != state.session {
                return;
            }
            let browse = std::mem::replace(&mut state.browse, BrowseState::Idle);
            state.browse = match browse {
                BrowseState::LoadingInitial if page == 1 => BrowseState::Ready {
                    repos,
                    page: 1,
                    has_more,
                },
                BrowseState::LoadingMore {
                    repos: mut existing,
                    page: current,
                } if page == current + 1 => {
                    existing.extend(repos);
                    BrowseState::Ready {
                        repos: existing,
                        page,
                        has_more,
                    }
                }
                other => other,
            };
        }
        DataPayload::FilterResults { seq, repos } => {
            if seq != state.filter_seq || !matches!(state.filter, FilterState::Loading) {
                return;
            }
            state.filter = FilterState::Active { repos };
            state.clamp_cursor();
        }
        DataPayload::LanguagesPage { session, languages } => {
            if session != state.session {
                return;
            }
            state.languages.extend(languages.into_iter().flatten());
        }
    }
}

fn apply_failure(state: &mut AppState, payload: FailurePayload) {
    match payload {
        FailurePayload::InitialLoad { session, message } => {
            if session != state.session
                || !matches!(state.browse, BrowseState::LoadingInitial)
            {
                return;
            }
            state.browse = BrowseState::Errored { message };
            state.user = None;
            state.languages.clear();
            state.criteria = FilterCriteria::default();
            state.filter = FilterState::Inactive;
            state.cursor = 0;
        }
        FailurePayload::LoadMore { session, message } => {
            if session != state.session {
                return;
            }
            let browse = std::mem::replace(&mut state.browse, BrowseState::Idle);
            state.browse = match browse {
                // Keep what is already displayed; stop trusting the
                // continuation signal until a fresh initial load.
                BrowseState::LoadingMore { repos, page } => BrowseState::Ready {
                    repos,
                    page,
                    has_more: false,
                },
                other => other,
            };
            state.notice = Some(message);
        }
        FailurePayload::Filter { seq, message } => {
            if seq != state.filter_seq {
                return;
            }
            state.filter = FilterState::Inactive;
            state.notice = Some(message);
            state.clamp_cursor();
        }
    }
}
