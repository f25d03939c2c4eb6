use primaze::app::{App, config::AppConfig};
use tracing_appender::non_blocking::WorkerGuard;

/// Send logs to a file, since the terminal is taken over by the app.
/// The returned guard flushes pending log lines when dropped.
fn init_tracing(config: &AppConfig) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(&config.log_dir, AppConfig::LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    guard
}

fn main() -> std::io::Result<()> {
    let (config, warnings) = AppConfig::from_env();
    let _guard = init_tracing(&config);
    for warning in warnings {
        tracing::warn!("[config] {}", warning);
    }

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = App::new(config).run(&mut stdout);
    App::restore_terminal(&mut stdout)?;

    if let Err(e) = &result {
        tracing::error!("[app] Exited with error: {}", e);
    }
    result
}
