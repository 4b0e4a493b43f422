use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use eyre::Result;

use crate::config::SessionConfig;
use crate::session;
use crate::tmux::Tmux;

const OPTIONS_HELP: &str = "\
Options (taken as `--name value` pairs after the positionals):
  --jar <name>        jar file to run (default: server.jar)
  --min-ram <size>    initial java heap, passed as -Xms (default: 2G)
  --max-ram <size>    maximum java heap, passed as -Xmx (default: 6G)
  --wait-time <secs>  grace period before an automatic restart (default: 5)";

/// Run a Java game server inside a tmux session with automatic restarts.
///
/// If the named session already exists the tool attaches to it; otherwise it
/// starts the session running a restart loop and then attaches. Detaching
/// (ctrl-b d) leaves the server running.
#[derive(Debug, Parser)]
#[command(name = "jarmux", version, after_help = OPTIONS_HELP)]
pub struct Cli {
    /// Name for the tmux session
    pub session: String,
    /// Directory the server runs in
    pub path: PathBuf,
    /// `--option value` pairs resolved against built-in defaults
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub options: Vec<String>,
}

impl Cli {
    pub async fn execute(self) -> Result<ExitCode> {
        let config = SessionConfig::resolve(&self);
        session::ensure_and_attach(&Tmux, &config).await?;
        Ok(ExitCode::SUCCESS)
    }
}
