use tracing::Level;
use crate::core::domain::Configuration;

pub(crate) fn log_level(config: &Configuration) -> Level {
    config.log_level.trim().parse::<Level>().unwrap_or(Level::INFO)
}

pub(crate) fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(log_level(config))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // color codes only confuse log collectors.
        .with_ansi(false);
    if config.json_logs {
        // collectors add their own ingestion time.
        builder.without_time().json().init();
    } else {
        builder.init();
    }
}
