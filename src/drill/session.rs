//! The drill session controller
//!
//! Owns the session state and applies user actions to it. After every
//! action the state is rendered onto the attached surfaces and written to
//! the state store. Storage failures are logged and never returned.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::clock::Clock;
use super::deck::Deck;
use super::models::{Outcome, SessionState, Side};
use super::shuffle::random_order;
use super::storage::StateStore;
use super::view::{self, CardView, DisplaySurfaces};

pub struct DrillSession<S, C> {
    deck: Deck,
    state: SessionState,
    store: S,
    clock: C,
    rng: StdRng,
    surfaces: DisplaySurfaces,
}

impl<S: StateStore, C: Clock> DrillSession<S, C> {
    /// Restore the session from `store`, seeding the shuffle from entropy
    pub fn initialize(deck: Deck, store: S, clock: C) -> Self {
        Self::with_rng(deck, store, clock, StdRng::from_entropy())
    }

    /// Restore the session with an explicit random number generator
    pub fn with_rng(deck: Deck, store: S, clock: C, rng: StdRng) -> Self {
        let mut session = Self {
            deck,
            state: SessionState::default(),
            store,
            clock,
            rng,
            surfaces: DisplaySurfaces::none(),
        };

        match session.store.load() {
            Ok(Some(persisted)) => session.state.merge_persisted(&persisted),
            Ok(None) => log::debug!("No saved drill state, starting fresh"),
            Err(e) => log::warn!("Failed to load drill state: {}", e),
        }

        let today = session.clock.today();
        session.roll_over(today);
        session.ensure_order();
        session.repair();
        session.render();
        session
    }

    /// Attach display surfaces and paint the current state onto them
    pub fn attach_surfaces(&mut self, surfaces: DisplaySurfaces) {
        self.surfaces = surfaces;
        self.render();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn view(&self) -> CardView {
        view::render(&self.state, &self.deck)
    }

    // ==================== Actions ====================

    /// Toggle between question and answer
    pub fn flip(&mut self) {
        self.state.side = self.state.side.flipped();
        self.render_card();
        self.persist();
    }

    /// Grade the card as missed if the answer is showing, then move on.
    /// On the question side this is an ungraded skip.
    pub fn mark_again(&mut self) {
        if self.state.side == Side::Back {
            self.mark_seen(Outcome::Again);
        }
        self.advance();
    }

    /// Grade the card as known if the answer is showing, then move on.
    /// On the question side this only reveals the answer.
    pub fn mark_got_it(&mut self) {
        if self.state.side == Side::Front {
            self.state.side = Side::Back;
            self.render_card();
            self.persist();
            return;
        }
        self.mark_seen(Outcome::GotIt);
        self.advance();
    }

    /// Start over from a fresh random order
    pub fn shuffle(&mut self) {
        self.reset_order();
        self.render();
        self.persist();
    }

    // ==================== Internals ====================

    fn advance(&mut self) {
        self.ensure_order();
        self.state.index = (self.state.index + 1) % self.state.order.len();
        self.state.side = Side::Front;
        self.render();
        self.persist();
    }

    fn mark_seen(&mut self, outcome: Outcome) {
        let today = self.clock.today();
        if self.state.last_session_date != Some(today) {
            self.roll_over(today);
        }

        self.state.seen_today = self.state.seen_today.saturating_add(1);
        if outcome == Outcome::GotIt {
            self.state.correct_today = self.state.correct_today.saturating_add(1);
        }
        self.state.last_session_date = Some(today);
        self.render_stats();
        self.persist();
    }

    /// Reset daily counters on a new day. A day with activity grows the
    /// streak; the streak is never reduced here.
    fn roll_over(&mut self, today: NaiveDate) {
        match self.state.last_session_date {
            None => {
                self.state.last_session_date = Some(today);
            }
            Some(last) if last != today => {
                if self.state.seen_today > 0 {
                    self.state.streak = self.state.streak.saturating_add(1);
                }
                log::info!(
                    "New drill day {} (last {}), streak {}",
                    today,
                    last,
                    self.state.streak
                );
                self.state.seen_today = 0;
                self.state.correct_today = 0;
                self.state.last_session_date = Some(today);
            }
            Some(_) => {}
        }
    }

    fn ensure_order(&mut self) {
        if !self.state.order_is_valid(self.deck.len()) {
            log::info!("Shuffle order does not match the deck, regenerating");
            self.reset_order();
        }
    }

    fn reset_order(&mut self) {
        self.state.order = random_order(self.deck.len(), &mut self.rng);
        self.state.index = 0;
        self.state.side = Side::Front;
    }

    fn repair(&mut self) {
        if self.state.index >= self.state.order.len() {
            self.state.index = 0;
        }
        if self.state.correct_today > self.state.seen_today {
            self.state.correct_today = self.state.seen_today;
        }
    }

    fn render(&mut self) {
        let view = self.view();
        self.surfaces.paint(&view);
    }

    fn render_card(&mut self) {
        let view = self.view();
        self.surfaces.paint_card(&view);
    }

    fn render_stats(&mut self) {
        let view = self.view();
        self.surfaces.paint_stats(&view);
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            log::warn!("Failed to save drill state: {}", e);
        }
    }
}
