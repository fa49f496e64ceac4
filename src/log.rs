use std::io::Write;
use std::time::Instant;

use log::LevelFilter;

/// Builds the process-wide logger: `[elapsed level] message` lines on stderr.
/// Calling it twice is harmless; only the first initialization wins.
pub fn build_solver_logger_for_level(level: LevelFilter) {
    let start = Instant::now();
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{:9.3}s {:5}] {}",
                start.elapsed().as_secs_f64(),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}

pub fn build_solver_logger() {
    build_solver_logger_for_level(LevelFilter::Info);
}
