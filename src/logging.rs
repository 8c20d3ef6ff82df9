use std::io::Write;

/// Logs go to stderr so the result on stdout stays clean.
pub fn setup_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{0} {1} {2}] {3}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.module_path().unwrap_or(""),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}
