use log::Level;

/// Environment variable selecting the log threshold, e.g.
/// `VFILE_LOG_LEVEL=debug`.
pub const PROGRAM_LOG_LEVEL: &str = "VFILE_LOG_LEVEL";

/// Threshold used when the variable is unset or unparseable.
pub(crate) const DEFAULT_LOG_LEVEL: Level = Level::Warn;
