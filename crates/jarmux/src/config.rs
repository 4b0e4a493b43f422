use std::path::PathBuf;

use tracing::{
    debug,
    warn,
};

use crate::cli::Cli;

pub const DEFAULT_JAR: &str = "server.jar";
pub const DEFAULT_MIN_RAM: &str = "2G";
pub const DEFAULT_MAX_RAM: &str = "6G";
pub const DEFAULT_WAIT_SECS: i64 = 5;

/// Launch settings for one invocation. Never persisted; the only durable
/// state is the tmux session itself.
///
/// The RAM bounds are passed verbatim to the JVM, unit suffixes and all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub name: String,
    pub path: PathBuf,
    pub jar: String,
    pub min_ram: String,
    pub max_ram: String,
    pub wait_secs: i64,
}

impl SessionConfig {
    pub fn resolve(cli: &Cli) -> Self {
        let mut config = Self {
            name: cli.session.clone(),
            path: cli.path.clone(),
            jar: DEFAULT_JAR.into(),
            min_ram: DEFAULT_MIN_RAM.into(),
            max_ram: DEFAULT_MAX_RAM.into(),
            wait_secs: DEFAULT_WAIT_SECS,
        };
        config.apply_pairs(&cli.options);
        config
    }

    // The tail is consumed at a fixed stride of two. Unrecognized names,
    // trailing names without a value, and unparsable --wait-time values all
    // keep the prior setting without a user-facing diagnostic.
    fn apply_pairs(&mut self, options: &[String]) {
        let mut i = 0;
        while i < options.len() {
            let name = options[i].as_str();
            match (name, options.get(i + 1)) {
                ("--jar", Some(value)) => self.jar = value.clone(),
                ("--min-ram", Some(value)) => self.min_ram = value.clone(),
                ("--max-ram", Some(value)) => self.max_ram = value.clone(),
                ("--wait-time", Some(value)) => match value.parse() {
                    Ok(secs) => self.wait_secs = secs,
                    Err(err) => warn!(%value, %err, "keeping default --wait-time"),
                },
                (_, Some(value)) => debug!(option = name, %value, "skipping unrecognized option pair"),
                (_, None) => debug!(option = name, "option name without a value, ignoring"),
            }
            i += 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn resolve(args: &[&str]) -> SessionConfig {
        let argv = std::iter::once("jarmux").chain(args.iter().copied());
        SessionConfig::resolve(&Cli::parse_from(argv))
    }

    #[test]
    fn defaults_with_positionals_only() {
        let config = resolve(&["survival", "/srv/minecraft"]);
        assert_eq!(config.name, "survival");
        assert_eq!(config.path, PathBuf::from("/srv/minecraft"));
        assert_eq!(config.jar, "server.jar");
        assert_eq!(config.min_ram, "2G");
        assert_eq!(config.max_ram, "6G");
        assert_eq!(config.wait_secs, 5);
    }

    #[test]
    fn recognized_pairs_override_defaults() {
        let config = resolve(&["survival", "/srv/minecraft", "--jar", "paper.jar", "--max-ram", "4G"]);
        assert_eq!(config.jar, "paper.jar");
        assert_eq!(config.max_ram, "4G");
        assert_eq!(config.min_ram, "2G");
        assert_eq!(config.wait_secs, 5);
    }

    #[test]
    fn all_pairs_in_any_order() {
        let config = resolve(&[
            "s", "/srv", "--wait-time", "30", "--min-ram", "1G", "--max-ram", "8G", "--jar", "fabric.jar",
        ]);
        assert_eq!(config.jar, "fabric.jar");
        assert_eq!(config.min_ram, "1G");
        assert_eq!(config.max_ram, "8G");
        assert_eq!(config.wait_secs, 30);
    }

    #[test]
    fn unknown_pair_is_skipped_without_effect() {
        let config = resolve(&["s", "/srv", "--foo", "bar"]);
        assert_eq!(config.jar, "server.jar");
        assert_eq!(config.wait_secs, 5);
    }

    #[test]
    fn unknown_pair_keeps_the_stride() {
        // "--jar" lands on a value slot here, so it is never recognized.
        let config = resolve(&["s", "/srv", "stray", "--jar", "paper.jar"]);
        assert_eq!(config.jar, "server.jar");
    }

    #[test]
    fn malformed_wait_time_keeps_default() {
        let config = resolve(&["s", "/srv", "--wait-time", "abc"]);
        assert_eq!(config.wait_secs, 5);
    }

    #[test]
    fn later_pair_wins() {
        let config = resolve(&["s", "/srv", "--jar", "a.jar", "--jar", "b.jar"]);
        assert_eq!(config.jar, "b.jar");
    }

    #[test]
    fn trailing_name_without_value_is_ignored() {
        let config = resolve(&["s", "/srv", "--jar"]);
        assert_eq!(config.jar, "server.jar");
    }
}
