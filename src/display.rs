//! Terminal output helpers
//!
//! Human readable output goes to stdout, diagnostics to stderr.

use colored::Colorize;

use crate::AppResult;
use crate::session::Session;

/// Print a diagnostic line on stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

/// Display the session chosen for a name
pub fn display_resolution(session: &Session) -> AppResult<()> {
    let state = if session.exists() {
        "attach".green()
    } else {
        "create".yellow()
    };

    println!("{} {}", state.bold(), session.name().bold());
    if !session.exists() {
        println!("   Directory: {}", session.directory().display());
    }

    Ok(())
}

/// Display running sessions, one per line
pub fn display_session_list(sessions: &[Session]) -> AppResult<()> {
    if sessions.is_empty() {
        println!("   (No running sessions)");
        return Ok(());
    }

    let width = sessions
        .iter()
        .map(|session| session.name().len())
        .max()
        .unwrap_or(0);

    for session in sessions {
        let name = format!("{:<width$}", session.name(), width = width);
        println!(
            "{}  {}",
            name.bold(),
            session.directory().display().to_string().dimmed()
        );
    }

    Ok(())
}

/// Display running sessions as a JSON array
pub fn display_session_list_json(sessions: &[Session]) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(sessions)?);
    Ok(())
}
