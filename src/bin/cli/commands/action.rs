use anyhow::Result;

use flashdrill_lib::drill::{CardView, Side};

use crate::app::App;
use crate::OutputFormat;

/// A user action on the current card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Show,
    Flip,
    Again,
    GotIt,
    Shuffle,
}

pub fn run(app: &mut App, action: Action, format: &OutputFormat, use_color: bool) -> Result<()> {
    let session = &mut app.session;
    match action {
        Action::Show => {}
        Action::Flip => session.flip(),
        Action::Again => session.mark_again(),
        Action::GotIt => session.mark_got_it(),
        Action::Shuffle => session.shuffle(),
    }

    let view = session.view();
    let state = session.state();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "card": view,
                "position": state.index + 1,
                "deckSize": session.deck().len(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            print_card(&view, use_color);
            println!(
                "{}  \u{2022}  {}  \u{2022}  card {} of {}",
                view.progress,
                view.streak,
                state.index + 1,
                session.deck().len()
            );
        }
    }

    Ok(())
}

fn print_card(view: &CardView, use_color: bool) {
    if use_color {
        let color = match view.side {
            Side::Front => "36",
            Side::Back => "32",
        };
        println!("\x1b[1;{}m{}\x1b[0m", color, view.side_label);
        println!("  {}", view.text);
        println!("\x1b[2m{}\x1b[0m", view.hint);
    } else {
        println!("{}", view.side_label);
        println!("  {}", view.text);
        println!("{}", view.hint);
    }
    println!();
}
