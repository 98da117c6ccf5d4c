use env_logger::WriteStyle;
use log::LevelFilter;
use std::io::Write;

/// Installs the crate's default logger.
///
/// Detection only emits through the `log` facade and never installs a logger
/// itself. Standalone tools call this once at startup, before the first
/// `CollisionDispatcher::process_pair`, to see the dispatcher's skip warnings.
/// The filter is fixed at Info, so per-pair manifold traces need the embedding
/// engine's own logger. The call fails if a logger is already installed.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "[RPHYS | {}] {}", record.level(), record.args()))
        .write_style(WriteStyle::Always)
        .filter(None, LevelFilter::Info)
        .try_init()
}
