//! Status bar rendering with keybindings and state indicators

use crate::session::{RunState, SortStats};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the status bar displays
pub struct StatusView<'a> {
    pub message: &'a str,
    pub state: RunState,
    pub stats: SortStats,
    /// Position of the displayed frame in the run
    pub position: usize,
    /// Frames recorded so far
    pub total: usize,
    /// Whether the displayed sequence is a finished sort
    pub completed: bool,
}

/// Badge text and color for the right-hand state indicator
fn state_badge(state: RunState, completed: bool) -> (&'static str, Color) {
    match state {
        RunState::Running => (" ▶ RUNNING ", DEFAULT_THEME.secondary),
        RunState::Paused => (" ⏸ PAUSED ", DEFAULT_THEME.primary),
        RunState::Terminal => (" QUIT ", DEFAULT_THEME.error),
        RunState::Idle if completed => (" SORTED ", DEFAULT_THEME.success),
        RunState::Idle => (" READY ", DEFAULT_THEME.comment),
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, view: &StatusView) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: run state, step info, counters and the last message
    let step_text = if view.total > 0 {
        format!(" Step {}/{} ", view.position, view.total.saturating_sub(1))
    } else {
        " Step -/- ".to_string()
    };

    let (badge, badge_color) = state_badge(view.state, view.completed);

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            step_text,
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " cmp {} · swp {} · wr {} ",
                view.stats.comparisons, view.stats.swaps, view.stats.writes
            ),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", view.message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in [
        (" ↵ ", " start "),
        (" r ", " reset "),
        (" ⇥ ", " algo "),
        (" +/- ", " size "),
        (" [/] ", " speed "),
        (" ⎵ ", " pause "),
        (" ←/→ ", " step "),
        (" q ", " quit "),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
