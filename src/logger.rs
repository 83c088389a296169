//! Logging setup for the `log` facade, backed by log4rs.
//!
//! Console output is always on. When a directory is configured, application
//! logs roll into `app.log` and per-request lines (target `emogo::access`)
//! roll into `access.log`.

use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::{
    CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::{Path, PathBuf};

pub const ACCESS_TARGET: &str = "emogo::access";

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";
const ROLL_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_RETENTION: usize = 7;

pub fn parse_level(level: Option<&str>) -> LevelFilter {
    match level.unwrap_or("info").to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn rolling(base: &Path, stem: &str, keep: u32) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
    let roller = FixedWindowRoller::builder()
        .build(&format!("{}", base.join(format!("{stem}.{{}}.log")).display()), keep)?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE)), Box::new(roller));
    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build(base.join(format!("{stem}.log")), Box::new(policy))?;
    Ok(appender)
}

/// Builds the log4rs config without installing it.
///
/// # Errors
/// Returns an error if the log directory cannot be created or an appender fails to open.
pub fn build_config(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<Config, Box<dyn std::error::Error>> {
    let lvl = parse_level(level);
    let keep = retention.unwrap_or(DEFAULT_RETENTION) as u32;
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let mut builder = Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root = Root::builder().appender("console");

    match dir {
        Some(base) => {
            std::fs::create_dir_all(base)?;
            builder = builder
                .appender(Appender::builder().build("app", Box::new(rolling(base, "app", keep)?)))
                .appender(Appender::builder().build("access", Box::new(rolling(base, "access", keep)?)))
                .logger(
                    Logger::builder()
                        .appender("console")
                        .appender("access")
                        .additive(false)
                        .build(ACCESS_TARGET, lvl),
                );
            root = root.appender("app");
        }
        None => {
            builder = builder.logger(Logger::builder().build(ACCESS_TARGET, lvl));
        }
    }

    Ok(builder.build(root.build(lvl))?)
}

/// Install logging for the process. A second call keeps the first config.
pub fn configure_logging(dir: Option<&Path>, level: Option<&str>, retention: Option<usize>) {
    match build_config(dir, level, retention) {
        Ok(config) => {
            let _ = log4rs::init_config(config);
        }
        Err(e) => eprintln!("logging disabled: {e}"),
    }
}

/// Configure logging from environment variables if present:
/// - EMOGO_LOG_DIR
/// - EMOGO_LOG_LEVEL
/// - EMOGO_LOG_RETENTION
pub fn configure_from_env() {
    let dir = std::env::var("EMOGO_LOG_DIR").ok().filter(|s| !s.is_empty()).map(PathBuf::from);
    let level = std::env::var("EMOGO_LOG_LEVEL").ok();
    let retention = std::env::var("EMOGO_LOG_RETENTION").ok().and_then(|s| s.parse::<usize>().ok());
    configure_logging(dir.as_deref(), level.as_deref(), retention);
}
