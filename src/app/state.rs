use std::collections::BTreeSet;

use crate::github::models::{Repository, User};

/// What the keyboard is currently editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a username on the entry prompt.
    UserEntry,
    /// Browsing the repository list.
    Normal,
    /// Typing in the filter box; every keystroke re-applies the filter.
    FilterEntry,
}

/// The repository loader's state machine. One tag instead of separate
/// loading/loading-more/error flags, so the initial skeleton and the
/// trailing spinner can never show at the same time.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseState {
    Idle,
    LoadingInitial,
    Ready {
        repos: Vec<Repository>,
        page: u32,
        has_more: bool,
    },
    LoadingMore {
        repos: Vec<Repository>,
        page: u32,
    },
    Errored {
        message: String,
    },
}

/// The filtered view. While not `Inactive` it supersedes the browse list;
/// the browse collection is retained underneath, never merged.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterState {
    Inactive,
    Loading,
    Active { repos: Vec<Repository> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub text: String,
    pub language: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.language.is_none()
    }
}

#[derive(Debug)]
pub struct AppState {
    // Request tokens. `session` is bumped per submitted username and gates
    // every data-bearing action; `filter_seq` is bumped per filter
    // application so only the latest search response wins.
    pub session: u64,
    pub filter_seq: u64,

    // Data
    pub username: String,
    pub user: Option<User>,
    pub browse: BrowseState,
    pub filter: FilterState,
    pub criteria: FilterCriteria,
    pub languages: BTreeSet<String>,

    // Input
    pub input_mode: InputMode,
    pub input: String,
    pub cursor: usize,

    // Transient toast-style message (load-more and filter failures)
    pub notice: Option<String>,
    pub should_quit: bool,

    /// Trigger "load more" when the cursor comes within this many rows of
    /// the end of the browse list.
    pub load_more_margin: usize,
}

impl AppState {
    pub fn new(load_more_margin: usize) -> Self {
        Self {
            session: 0,
            filter_seq: 0,
            username: String::new(),
            user: None,
            browse: BrowseState::Idle,
            filter: FilterState::Inactive,
            criteria: FilterCriteria::default(),
            languages: BTreeSet::new(),
            input_mode: InputMode::UserEntry,
            input: String::new(),
            cursor: 0,
            notice: None,
            should_quit: false,
            load_more_margin,
        }
    }

    pub fn filter_active(&self) -> bool {
        !matches!(self.filter, FilterState::Inactive)
    }

    /// The browse-mode collection, regardless of the loading tag.
    pub fn browse_repos(&self) -> &[Repository] {
        match &self.browse {
            BrowseState::Ready { repos, .. } | BrowseState::LoadingMore { repos, .. } => repos,
            _ => &[],
        }
    }

    /// Whichever collection the view currently displays: exactly one of
    /// the filtered and browse collections, never both.
    pub fn visible_repos(&self) -> &[Repository] {
        match &self.filter {
            FilterState::Active { repos } => repos,
            FilterState::Loading => &[],
            FilterState::Inactive => self.browse_repos(),
        }
    }

    pub fn selected_repo(&self) -> Option<&Repository> {
        self.visible_repos().get(self.cursor)
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_repos().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Languages for the selector, in set order.
    pub fn language_list(&self) -> Vec<&str> {
        self.languages.iter().map(String::as_str).collect()
    }

    /// The next language in the cycle `None -> first -> ... -> last -> None`.
    pub fn next_language(&self) -> Option<String> {
        let mut iter = self.languages.iter();
        match &self.criteria.language {
            None => iter.next().cloned(),
            Some(current) => iter
                .skip_while(|lang| *lang != current)
                .nth(1)
                .cloned(),
        }
    }
}
