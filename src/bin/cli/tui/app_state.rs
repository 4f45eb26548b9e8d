use std::cell::RefCell;
use std::rc::Rc;

use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::app::App;
use flashdrill_lib::drill::DisplaySurfaces;
use flashdrill_lib::host::{HostMode, STANDALONE_LABEL};

/// Text the session paints after every action
#[derive(Default)]
pub struct Labels {
    pub card_text: Rc<RefCell<String>>,
    pub side_label: Rc<RefCell<String>>,
    pub hint: Rc<RefCell<String>>,
    pub progress: Rc<RefCell<String>>,
    pub streak: Rc<RefCell<String>>,
}

impl Labels {
    fn surfaces(&self) -> DisplaySurfaces {
        DisplaySurfaces {
            card_text: Some(Box::new(Rc::clone(&self.card_text))),
            side_label: Some(Box::new(Rc::clone(&self.side_label))),
            hint: Some(Box::new(Rc::clone(&self.hint))),
            progress: Some(Box::new(Rc::clone(&self.progress))),
            streak: Some(Box::new(Rc::clone(&self.streak))),
        }
    }
}

pub struct TuiState {
    pub app: App,
    pub labels: Labels,

    // Environment label, standalone until the host answers
    pub env_label: String,
    host_rx: Option<oneshot::Receiver<Option<HostMode>>>,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(mut app: App, host_rx: oneshot::Receiver<Option<HostMode>>) -> Self {
        let labels = Labels::default();
        app.session.attach_surfaces(labels.surfaces());

        Self {
            app,
            labels,
            env_label: STANDALONE_LABEL.to_string(),
            host_rx: Some(host_rx),
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    /// Pick up the host detection result once it arrives
    pub fn poll_host(&mut self) {
        let Some(rx) = self.host_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(Some(mode)) => {
                self.env_label = mode.label().to_string();
                self.host_rx = None;
            }
            Ok(None) | Err(TryRecvError::Closed) => {
                self.host_rx = None;
            }
            Err(TryRecvError::Empty) => {}
        }
    }

    pub fn flip(&mut self) {
        self.app.session.flip();
    }

    pub fn again(&mut self) {
        self.app.session.mark_again();
    }

    pub fn got_it(&mut self) {
        self.app.session.mark_got_it();
    }

    pub fn shuffle(&mut self) {
        self.app.session.shuffle();
        self.flash_message = Some("Deck shuffled".to_string());
    }
}
