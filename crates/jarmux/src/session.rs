use std::time::Duration;

use anstream::println;
use crossterm::style::Stylize;
use tracing::info;

use crate::config::SessionConfig;
use crate::script;
use crate::tmux::{
    Multiplexer,
    TmuxError,
};

// Lets output from the tmux commands settle before the attach takes over
// the terminal. Purely cosmetic.
const ATTACH_DELAY: Duration = Duration::from_millis(500);

/// Probes for the named session, creates it running the restart loop if it
/// is missing, then hands the terminal over to tmux until the user detaches.
///
/// A concurrent invocation can still create the session between the probe
/// and new-session; tmux itself arbitrates the duplicate name.
pub async fn ensure_and_attach(mux: &impl Multiplexer, config: &SessionConfig) -> Result<(), TmuxError> {
    if mux.has_session(&config.name).await {
        println!(
            "{} session '{}' already exists, attaching instead",
            "warning:".yellow().bold(),
            config.name
        );
        tokio::time::sleep(ATTACH_DELAY).await;
        return mux.attach(&config.name).await;
    }

    let script = script::render(config);
    mux.new_session(&config.name, &script).await?;
    info!(session = %config.name, path = %config.path.display(), "session created");

    println!(
        "Session '{}' started in '{}'.",
        config.name.as_str().bold(),
        config.path.display()
    );
    println!("Attaching now... (detach with ctrl-b, then d)");
    tokio::time::sleep(ATTACH_DELAY).await;
    mux.attach(&config.name).await
}
