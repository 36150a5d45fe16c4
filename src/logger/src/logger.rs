use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use log::LevelFilter;
use log::Level;
use env_logger::{Builder, Env, fmt::Color};
use std::io::Write;
use once_cell::sync::OnceCell;
use thiserror::Error;

/// Environment variable overriding the command line verbosity. (e.g. `HEREDITY_LOG=inference=trace`)
pub const LOG_ENV_VAR: &str = "HEREDITY_LOG";

const PROGRESS_TEMPLATE: &str = "[{elapsed_precise}] {msg} {bar:40.cyan/blue} {pos}/{len} ({eta})";

static INSTANCE: OnceCell<Logger> = OnceCell::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to register the global logger: {0}")]
    SetLogger(#[from] log::SetLoggerError),

    #[error("Logger was already initialized")]
    AlreadyInitialized,
}

#[derive(Debug)]
pub struct Logger {
    multi_pg: MultiProgress,
}

impl Logger {

    /// Register the global logger. `verbosity` follows the `-q`, `-v`, `-vv`... convention:
    /// `0`: errors only, `1`: warnings, `2`: info, `3`: debug, `4+`: trace.
    pub fn init(verbosity: u8) -> Result<(), LoggerError> {
        let log_level = Self::u8_to_loglevel(verbosity);
        let env = Env::default()
            .filter(LOG_ENV_VAR);

        let logger = Builder::new().filter_level(log_level)
            .format(|buf, record| {
                // ---- Errors get a source traceback and an intense message.
                let (traceback, set_intensity) = match record.level() {
                    Level::Error => (format!("(@ {}:{}) ", record.file().unwrap_or("unknown"), record.line().unwrap_or(0)), true),
                    _            => (String::new(), false),
                };

                let mut arg_style = buf.style();
                arg_style.set_intense(set_intensity);

                let mut level_style = buf.style();
                let color = match record.level() {
                    Level::Error => Color::Red,
                    Level::Warn  => Color::Yellow,
                    Level::Info  => Color::Green,
                    Level::Debug => Color::Blue,
                    Level::Trace => Color::Cyan
                };
                level_style.set_color(color).set_bold(true);

                writeln!(
                    buf,
                    "[{} {: <5} {}] {traceback}{}",
                    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                    level_style.value(record.level()),
                    record.target(),
                    arg_style.value(record.args())
                )
            })
            .parse_env(env)
            .build();

        // ---- Route log lines through indicatif, so that progress bars are not torn apart.
        let max_level = logger.filter();
        let multi_pg = MultiProgress::new();
        LogWrapper::new(multi_pg.clone(), logger).try_init()?;
        log::set_max_level(max_level);
        INSTANCE.set(Self{multi_pg}).map_err(|_| LoggerError::AlreadyInitialized)
    }

    fn u8_to_loglevel(verbosity: u8) -> LevelFilter {
        match verbosity {
            0            => LevelFilter::Error,
            1            => LevelFilter::Warn,
            2            => LevelFilter::Info,
            3            => LevelFilter::Debug,
            4..= u8::MAX => LevelFilter::Trace
        }
    }

    pub fn set_level(verbosity: u8) {
        log::set_max_level(Self::u8_to_loglevel(verbosity));
    }

    /// Shared progress bar container. `None` if `Logger::init()` was never called (library use, tests).
    pub fn multi() -> Option<&'static MultiProgress> {
        INSTANCE.get().map(|logger| &logger.multi_pg)
    }

    /// Register a new progress bar of length `len`, or return `None` if the logger is uninitialized,
    /// or if the current log level hides informative messages.
    pub fn progress_bar(len: u64, msg: &'static str) -> Option<ProgressBar> {
        if log::max_level() < LevelFilter::Info {
            return None
        }
        let multi = Self::multi()?;
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        let pb = multi.add(ProgressBar::new(len).with_style(style).with_message(msg));
        Some(pb)
    }
}
