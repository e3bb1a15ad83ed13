use crate::github::models::{Repository, User};

#[derive(Debug)]
pub enum Action {
    // Input editing (username entry or filter entry, depending on mode)
    InputChar(char),
    InputBackspace,
    SubmitInput,
    StartUserEntry,
    StartFilter,
    CycleLanguage,
    Back,

    // List navigation
    MoveUp,
    MoveDown,

    Refresh,
    OpenInBrowser,
    DismissNotice,

    // Reports from background tasks
    DataLoaded(DataPayload),
    LoadFailed(FailurePayload),

    Quit,
    Tick,
}

/// Successful results from background fetches. Every payload carries the
/// token it was issued under so `update` can drop stale arrivals.
#[derive(Debug)]
pub enum DataPayload {
    User {
        session: u64,
        user: User,
    },
    RepoPage {
        session: u64,
        page: u32,
        repos: Vec<Repository>,
        has_more: bool,
    },
    FilterResults {
        seq: u64,
        repos: Vec<Repository>,
    },
    /// One page of the language walk, raw: one entry per repository,
    /// `None` where the repository has no primary language.
    LanguagesPage {
        session: u64,
        languages: Vec<Option<String>>,
    },
}

#[derive(Debug)]
pub enum FailurePayload {
    InitialLoad { session: u64, message: String },
    LoadMore { session: u64, message: String },
    Filter { seq: u64, message: String },
}

#[derive(Debug)]
pub enum SideEffect {
    FetchUser {
        session: u64,
        username: String,
    },
    FetchRepoPage {
        session: u64,
        username: String,
        page: u32,
    },
    SearchRepositories {
        seq: u64,
        username: String,
        text: String,
        language: Option<String>,
    },
    WalkLanguages {
        session: u64,
        username: String,
    },
    OpenUrl(String),
}
