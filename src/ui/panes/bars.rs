//! Bar chart rendering
//!
//! Bars are drawn directly into the buffer so every element gets a column even
//! when the pane is narrow, and heights use eighth-block glyphs for sub-cell
//! precision.

use crate::array::{ArrayState, Highlight};
use crate::constants::VALUE_MAX;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
    Frame,
};

const PARTIAL_BLOCKS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL_BLOCK: &str = "█";

/// Horizontal extent `(x offset, width)` of each of `count` bars across `width` cells.
///
/// Bars get `width / count` cells each, with the remainder spread from the left so
/// the chart fills the pane. A one-cell gap separates bars three or more cells wide.
/// When there are more bars than cells, neighbouring bars share a column.
pub fn bar_columns(width: u16, count: usize) -> Vec<(u16, u16)> {
    if count == 0 || width == 0 {
        return Vec::new();
    }

    let width = width as usize;
    (0..count)
        .map(|i| {
            let start = i * width / count;
            let end = ((i + 1) * width / count).max(start + 1).min(width);
            let start = start.min(width - 1);
            let mut w = end - start;
            if w >= 3 {
                w -= 1;
            }
            (start as u16, w.max(1) as u16)
        })
        .collect()
}

/// Height of a bar in eighths of a cell, given `rows` available rows.
///
/// Non-zero values always get at least one eighth so they stay visible.
pub fn bar_eighths(value: u32, max_value: u32, rows: u16) -> u32 {
    if value == 0 || max_value == 0 || rows == 0 {
        return 0;
    }
    let total = rows as u64 * 8;
    let h = (value.min(max_value) as u64 * total) / max_value as u64;
    h.max(1) as u32
}

/// Bar chart widget over a sequence
pub struct Bars<'a> {
    values: &'a [u32],
    highlights: &'a Highlight,
    sorted: bool,
}

impl<'a> Bars<'a> {
    pub fn new(state: &'a ArrayState) -> Self {
        Bars {
            values: &state.values,
            highlights: &state.highlights,
            sorted: false,
        }
    }

    /// Paint every bar in the sorted color
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    fn color_for(&self, index: usize) -> Color {
        if self.highlights.contains(index) {
            DEFAULT_THEME.bar_highlight
        } else if self.sorted {
            DEFAULT_THEME.bar_sorted
        } else {
            DEFAULT_THEME.bar
        }
    }
}

impl Bars<'_> {
    fn paint(&self, index: usize, (x, w): (u16, u16), area: Rect, buf: &mut Buffer) {
        let eighths = bar_eighths(self.values[index], VALUE_MAX, area.height);
        let full_rows = (eighths / 8) as u16;
        let partial = (eighths % 8) as usize;
        let style = Style::default().fg(self.color_for(index));

        for dx in 0..w {
            let col = area.x + x + dx;
            for r in 0..full_rows {
                let row = area.bottom() - 1 - r;
                buf[(col, row)].set_symbol(FULL_BLOCK).set_style(style);
            }
            if partial > 0 && full_rows < area.height {
                let row = area.bottom() - 1 - full_rows;
                buf[(col, row)]
                    .set_symbol(PARTIAL_BLOCKS[partial])
                    .set_style(style);
            }
        }
    }
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let columns = bar_columns(area.width, self.values.len());

        // Highlighted bars go last so they win columns shared with a neighbour
        for (index, &extent) in columns.iter().enumerate() {
            if !self.highlights.contains(index) {
                self.paint(index, extent, area, buf);
            }
        }
        for &index in self.highlights.indices() {
            if let Some(&extent) = columns.get(index) {
                self.paint(index, extent, area, buf);
            }
        }
    }
}

/// Render the bar chart pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    state: &ArrayState,
    is_active: bool,
    sorted: bool,
) {
    let border_style = if is_active {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Array ({} elements) ", state.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Bars::new(state).sorted(sorted), inner);
}
