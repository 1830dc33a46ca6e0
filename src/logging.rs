use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs the terminal logger. Diagnostics go to stderr so rendered
/// boards on stdout stay clean.
pub fn initialize(level: LevelFilter) {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_time_level(LevelFilter::Debug)
        .build();

    // Ignore the error if a logger was already installed.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

/// Picks the effective level: each `-v` raises the configured level by one step.
pub fn level_for(base: LevelFilter, verbosity: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let start = LEVELS.iter().position(|level| *level == base).unwrap_or(2);
    let index = (start + usize::from(verbosity)).min(LEVELS.len() - 1);
    LEVELS[index]
}

#[cfg(test)]
pub fn initialize_for_tests() {
    initialize(LevelFilter::Debug);
}
