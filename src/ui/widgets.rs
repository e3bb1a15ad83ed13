use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::state::{AppState, BrowseState, FilterState, InputMode};
use crate::ui::theme;
use crate::util::time::relative_time;

pub fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let border_style = if state.input_mode == InputMode::UserEntry {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .title(" GitHub user ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let line = if state.input_mode == InputMode::UserEntry {
        Line::from(vec![
            Span::styled("> ", theme::DIM),
            Span::styled(state.input.as_str(), theme::HEADER),
            Span::styled("_", theme::DIM),
        ])
    } else if let Some(user) = &state.user {
        let display_name = user
            .name
            .as_deref()
            .map(|n| format!(" — {}", n))
            .unwrap_or_default();
        Line::from(vec![
            Span::styled(user.login.as_str(), theme::USER_LOGIN),
            Span::styled(display_name, theme::DIM),
            Span::styled(format!("  {}", user.html_url), theme::DIM),
        ])
    } else {
        Line::from(Span::styled(state.username.as_str(), theme::USER_LOGIN))
    };

    f.render_widget(Paragraph::new(line).block(block), area);
}

pub fn render_filter_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let border_style = if state.input_mode == InputMode::FilterEntry {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    };

    let language = state
        .criteria
        .language
        .as_deref()
        .unwrap_or("any language");

    let title = format!(" Find a repository ({} known languages) ", state.languages.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut spans = vec![
        Span::styled(state.criteria.text.as_str(), theme::HEADER),
    ];
    if state.input_mode == InputMode::FilterEntry {
        spans.push(Span::styled("_", theme::DIM));
    }
    spans.push(Span::styled(
        format!("  [{}]", language),
        theme::LANGUAGE,
    ));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub fn render_repo_list(f: &mut Frame, area: Rect, state: &AppState) {
    let repos = state.visible_repos();

    let title = match &state.filter {
        FilterState::Active { repos } => {
            format!(" {} matching repositories ", repos.len())
        }
        FilterState::Loading => " Searching... ".to_string(),
        FilterState::Inactive => match &state.browse {
            BrowseState::Ready { page, has_more, .. } => {
                let more = if *has_more { ", more available" } else { "" };
                format!(" Repositories ({}, page {}{}) ", repos.len(), page, more)
            }
            BrowseState::LoadingMore { page, .. } => {
                format!(" Repositories ({}, page {}) ", repos.len(), page)
            }
            _ => " Repositories ".to_string(),
        },
    };

    let block = Block::default().title(title).borders(Borders::ALL);

    if repos.is_empty() {
        let msg: String = match (&state.filter, &state.browse) {
            (FilterState::Loading, _) => "Searching...".into(),
            (FilterState::Active { .. }, _) => "0 results".into(),
            (_, BrowseState::LoadingInitial) => "Loading...".into(),
            (_, BrowseState::Errored { message }) => message.clone(),
            (_, BrowseState::Ready { .. }) => format!(
                "{} doesn't have any public repositories yet.",
                state.username
            ),
            _ => "Type a username and press Enter".into(),
        };
        let style = if matches!(state.browse, BrowseState::Errored { .. }) && !state.filter_active()
        {
            theme::ERROR
        } else {
            theme::DIM
        };
        f.render_widget(Paragraph::new(msg).style(style).block(block), area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name").style(theme::HEADER),
        Cell::from("Description").style(theme::HEADER),
        Cell::from("Language").style(theme::HEADER),
        Cell::from("Stars").style(theme::HEADER),
        Cell::from("Forks").style(theme::HEADER),
        Cell::from("License").style(theme::HEADER),
        Cell::from("Updated").style(theme::HEADER),
    ])
    .height(1);

    let mut rows: Vec<Row> = repos
        .iter()
        .enumerate()
        .map(|(i, repo)| {
            let selected = i == state.cursor && state.input_mode == InputMode::Normal;
            let style = if selected {
                theme::HIGHLIGHT
            } else {
                ratatui::style::Style::default()
            };

            Row::new(vec![
                Cell::from(repo.name.as_str()).style(if selected {
                    style
                } else {
                    theme::REPO_NAME
                }),
                Cell::from(repo.description.as_deref().unwrap_or("")).style(style),
                Cell::from(repo.language.as_deref().unwrap_or("")).style(if selected {
                    style
                } else {
                    theme::LANGUAGE
                }),
                Cell::from(format!("★ {}", repo.stargazers_count)).style(if selected {
                    style
                } else {
                    theme::STARS
                }),
                Cell::from(repo.forks_count.to_string()).style(style),
                Cell::from(
                    repo.license
                        .as_ref()
                        .map(|l| l.name.as_str())
                        .unwrap_or(""),
                )
                .style(if selected { style } else { theme::DIM }),
                Cell::from(
                    repo.updated_at
                        .as_ref()
                        .map(relative_time)
                        .unwrap_or_default(),
                )
                .style(if selected { style } else { theme::DIM }),
            ])
            .height(1)
        })
        .collect();

    // Trailing spinner row while the next page is in flight. Never shown
    // together with the initial placeholder: the list is non-empty here.
    if matches!(state.browse, BrowseState::LoadingMore { .. }) && !state.filter_active() {
        rows.push(
            Row::new(vec![Cell::from("Loading more...").style(theme::DIM)]).height(1),
        );
    }

    let widths = [
        Constraint::Length(24),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(18),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let key_hints = match state.input_mode {
        InputMode::UserEntry => "Enter: load user | Esc: back | Ctrl-C: quit",
        InputMode::FilterEntry => "Esc: clear filter | Tab: cycle language | Enter: done",
        InputMode::Normal => {
            "j/k: move | /: filter | Tab: language | u: user | r: refresh | o: open | q: quit"
        }
    };

    let status = if let Some(notice) = &state.notice {
        notice.clone()
    } else {
        String::new()
    };

    let total_width = area.width as usize;
    let left_len = key_hints.len();
    let center_width = total_width.saturating_sub(left_len + 2);
    let status_truncated = if status.chars().count() > center_width {
        let kept: String = status.chars().take(center_width.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        status
    };

    let line = Line::from(vec![
        Span::styled(key_hints, theme::STATUS_BAR),
        Span::styled("  ", theme::STATUS_BAR),
        Span::styled(
            status_truncated,
            if state.notice.is_some() {
                theme::NOTICE.bg(ratatui::style::Color::DarkGray)
            } else {
                theme::STATUS_BAR
            },
        ),
    ]);

    f.render_widget(Paragraph::new(line).style(theme::STATUS_BAR), area);
}
