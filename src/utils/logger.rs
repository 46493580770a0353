use log::LevelFilter;
use std::io::Write;

/// Sends log records to stderr. `RUST_LOG` takes precedence over `level`.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();

    builder
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr);

    // A logger may already be installed when running inside another tool.
    let _ = builder.try_init();
}

/// Maps the `-v` / `-q` flags to a level filter.
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    match (verbose, quiet) {
        (true, _) => LevelFilter::Debug,
        (false, true) => LevelFilter::Warn,
        (false, false) => LevelFilter::Info,
    }
}
