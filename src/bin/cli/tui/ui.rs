use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;
use super::{card_widget, status_bar};

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Header, card, stats, status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let labels = &state.labels;
    let side = state.app.session.state().side;

    let header = Line::from(vec![
        Span::styled(" FlashDrill ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("[{}]", state.env_label),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(header), outer[0]);

    card_widget::draw(f, outer[1], side, labels, state.show_help);

    let stats = Line::from(vec![
        Span::styled(
            format!(" {}", labels.progress.borrow()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("   "),
        Span::styled(
            labels.streak.borrow().clone(),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(stats), outer[2]);

    status_bar::draw(f, outer[3], state);
}
