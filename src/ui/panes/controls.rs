//! Control readout: algorithm selector, size and delay

use crate::algorithms::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the control pane displays
pub struct ControlsView {
    pub selected: Algorithm,
    /// Algorithm of the active run, if it differs from the selection it is shown too
    pub running: Option<Algorithm>,
    pub size: usize,
    pub resize_pending: bool,
    pub delay_secs: f64,
}

/// Build the selector line: every algorithm, the selected one inverted
fn selector_spans(selected: Algorithm) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, algorithm) in Algorithm::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default()));
        }
        let style = if *algorithm == selected {
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        spans.push(Span::styled(format!(" {} ", algorithm.label()), style));
    }
    spans
}

/// Render the control pane
pub fn render_controls_pane(frame: &mut Frame, area: Rect, view: &ControlsView) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);

    let mut settings = vec![
        Span::styled("Size ", label),
        Span::styled(view.size.to_string(), value),
    ];
    if view.resize_pending {
        settings.push(Span::styled(
            " (after run)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    settings.push(Span::styled("   Delay ", label));
    settings.push(Span::styled(format!("{:.2}s", view.delay_secs), value));

    if let Some(running) = view.running.filter(|r| *r != view.selected) {
        settings.push(Span::styled("   Running ", label));
        settings.push(Span::styled(
            running.label(),
            Style::default().fg(DEFAULT_THEME.primary),
        ));
    }

    let text = vec![Line::from(selector_spans(view.selected)), Line::from(settings)];
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
