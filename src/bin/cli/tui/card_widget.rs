use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use flashdrill_lib::drill::Side;

use super::app_state::Labels;

pub fn draw(f: &mut Frame, area: Rect, side: Side, labels: &Labels, show_help: bool) {
    let accent = match side {
        Side::Front => Color::Cyan,
        Side::Back => Color::Green,
    };

    let block = Block::default()
        .title(format!(" {} ", labels.side_label.borrow()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled(
            labels.card_text.borrow().clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            labels.hint.borrow().clone(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )),
    ];

    if show_help {
        text.push(Line::from(""));
        for help in [
            "f / Space   flip the card",
            "a / 1       again (missed it)",
            "g / 2 / ⏎   got it",
            "s           shuffle the deck",
            "q / Esc     quit",
        ] {
            text.push(Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))));
        }
    }

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
