//! Rendering of the session onto display surfaces

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;

use super::deck::Deck;
use super::models::{SessionState, Side};

pub const FRONT_LABEL: &str = "Question";
pub const BACK_LABEL: &str = "Answer";
pub const FRONT_HINT: &str = "Tap Flip to see the answer.";
pub const BACK_HINT: &str = "Mark Again or Got it to move forward.";

/// Everything the user sees for the current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub side: Side,
    pub side_label: String,
    pub text: String,
    pub hint: String,
    pub progress: String,
    pub streak: String,
}

/// Render the current card and stats. Pure: reads state and deck only.
pub fn render(state: &SessionState, deck: &Deck) -> CardView {
    let card = deck
        .get(state.current_card_index())
        .or_else(|| deck.get(0));
    let (question, answer) = card
        .map(|c| (c.question.as_str(), c.answer.as_str()))
        .unwrap_or(("", ""));

    let (side_label, text, hint) = match state.side {
        Side::Front => (FRONT_LABEL, question, FRONT_HINT),
        Side::Back => (BACK_LABEL, answer, BACK_HINT),
    };

    CardView {
        side: state.side,
        side_label: side_label.to_string(),
        text: text.to_string(),
        hint: hint.to_string(),
        progress: progress_text(state, deck),
        streak: streak_text(state),
    }
}

pub fn progress_text(state: &SessionState, deck: &Deck) -> String {
    format!("{} / {} today", state.seen_today, deck.len())
}

pub fn streak_text(state: &SessionState) -> String {
    format!("Streak: {}", state.streak)
}

/// Something that displays a line of text
pub trait TextSurface {
    fn set_text(&mut self, text: &str);
}

impl TextSurface for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

impl TextSurface for Rc<RefCell<String>> {
    fn set_text(&mut self, text: &str) {
        self.borrow_mut().set_text(text);
    }
}

type Surface = Option<Box<dyn TextSurface>>;

/// Optional output surfaces. Writes to absent surfaces are skipped.
#[derive(Default)]
pub struct DisplaySurfaces {
    pub card_text: Surface,
    pub side_label: Surface,
    pub hint: Surface,
    pub progress: Surface,
    pub streak: Surface,
}

impl DisplaySurfaces {
    /// Surfaces that display nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Write the card face, label and hint
    pub fn paint_card(&mut self, view: &CardView) {
        write(&mut self.side_label, &view.side_label);
        write(&mut self.card_text, &view.text);
        write(&mut self.hint, &view.hint);
    }

    /// Write the progress and streak labels
    pub fn paint_stats(&mut self, view: &CardView) {
        write(&mut self.progress, &view.progress);
        write(&mut self.streak, &view.streak);
    }

    pub fn paint(&mut self, view: &CardView) {
        self.paint_card(view);
        self.paint_stats(view);
    }
}

fn write(surface: &mut Surface, text: &str) {
    if let Some(s) = surface.as_mut() {
        s.set_text(text);
    }
}
