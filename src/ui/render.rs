use crate::ui::counter::CounterViewState;
use crate::ui::footer::footer_widget;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, state: &CounterViewState, animation_tick: u8) {
    let (header, body, footer) = layout_regions(frame.area());

    let title = Paragraph::new(Line::from(Span::styled(
        "Counter",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(title, header);

    frame.render_widget(Clear, body);
    frame.render_widget(body_widget(state, animation_tick), body);

    frame.render_widget(footer_widget(footer), footer);
}

fn body_widget(state: &CounterViewState, animation_tick: u8) -> Paragraph<'static> {
    let mut lines = vec![Line::from("")];

    // Loading replaces the value; an error is shown alongside either.
    if state.is_loading {
        let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled("Loading...", Style::default().fg(HEADER_TEXT)),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            format!("Count: {}", state.count),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(message) = &state.error_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
