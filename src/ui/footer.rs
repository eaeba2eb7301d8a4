use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const KEY_HINTS: &str = " +/↑: Increment │ -/↓: Decrement │ R: Reset │ F: Refetch │ Q: Quit";

pub fn footer_widget(area: Rect) -> Paragraph<'static> {
    let version = format!("v{} ", VERSION);

    // Pad by char count; the hints contain multi-byte box characters
    let hints_width = KEY_HINTS.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(KEY_HINTS, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
