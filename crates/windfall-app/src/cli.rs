use std::path::PathBuf;

use clap::Parser;

/// windfall: floating windows fall, collide and pan their audio.
#[derive(Parser, Debug)]
#[command(name = "windfall", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// tracing directive.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Seed for spawn positions and velocities.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not touch audio nodes, whatever the config says.
    #[arg(long)]
    pub no_audio: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Turn a bare level into a directive scoped to windfall's crates.
pub fn log_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("windfall={level}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["windfall"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.print_config);
        assert!(!args.no_audio);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "windfall",
            "--config",
            "/tmp/w.toml",
            "--log-level",
            "debug",
            "--print-config",
            "--seed",
            "42",
            "--no-audio",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/w.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.print_config);
        assert_eq!(args.seed, Some(42));
        assert!(args.no_audio);
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Args::try_parse_from(["windfall", "--seed", "soon"]).is_err());
    }

    #[test]
    fn bare_level_is_scoped() {
        assert_eq!(log_directive("debug"), "windfall=debug");
        assert_eq!(log_directive("windfall_physics=trace"), "windfall_physics=trace");
    }
}
