use crate::domain::model::Route;
use crate::domain::ports::{Navigator, Prompt};
use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};

/// Terminal dialogs: y/N questions on stdin, alerts on stdout.
#[derive(Debug, Clone, Default)]
pub struct ConsolePrompt {
    assume_yes: bool,
}

impl ConsolePrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            tracing::debug!("Auto-confirmed: {}", message);
            return true;
        }

        let stdin = std::io::stdin();
        read_confirmation(&mut stdin.lock(), &mut std::io::stdout(), message)
    }

    fn alert(&self, message: &str) {
        println!("ℹ️  {}", message);
    }
}

fn read_confirmation<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> bool {
    if write!(output, "{} [y/N] ", message).and_then(|_| output.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Remembers the last requested route; the binary decides what to render.
#[derive(Debug, Clone, Default)]
pub struct ConsoleNavigator {
    last: Arc<Mutex<Option<Route>>>,
}

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_route(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|route| *route)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!("➡️  Navigating to {}", route);
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}
