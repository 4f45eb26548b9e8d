use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let state = app.session.state();
    let deck_size = app.session.deck().len();
    let last = state
        .last_session_date
        .map(|d| d.format("%Y-%m-%d").to_string());

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "seenToday": state.seen_today,
                "correctToday": state.correct_today,
                "deckSize": deck_size,
                "streak": state.streak,
                "lastSessionDate": last,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Seen today:    {} / {}", state.seen_today, deck_size);
            println!("Correct today: {}", state.correct_today);
            println!("Streak:        {}", state.streak);
            println!("Last session:  {}", last.as_deref().unwrap_or("never"));
        }
    }

    Ok(())
}
