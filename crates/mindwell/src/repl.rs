//! Blocking console loop for the assistant
//!
//! One line in, one turn out. Reads until EOF or the session reports that the
//! user asked to exit.

use anyhow::Result;
use mindwell_common::display::Ui;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use crate::datasets::Datasets;
use crate::messages;
use crate::session::{Session, Utterance};

/// Delay before the resources prompt.
const PAUSE: Duration = Duration::from_secs(1);

/// Run the conversation loop until `exit` or EOF.
pub fn run(ui: &Ui, datasets: &Datasets) -> Result<()> {
    ui.chatbot(messages::GREETING);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::new(datasets);

    loop {
        ui.prompt();

        let input = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(e)) => {
                ui.error(&format!("failed to read input: {}", e));
                continue;
            }
            None => break, // EOF
        };
        ui.blank();

        let turn = session.handle_line(&input);
        for utterance in &turn.utterances {
            match utterance {
                Utterance::Say(message) => ui.chatbot(message),
                Utterance::Pause => thread::sleep(PAUSE),
            }
        }

        if turn.done {
            break;
        }
    }

    Ok(())
}
