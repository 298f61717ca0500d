use std::{
    fmt::Arguments,
    str::FromStr,
    sync::{Arc, Mutex, OnceLock},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn name(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

pub type CallbackFn = dyn Fn(Level, Arguments, &str) + Send;

/// Destination of the messages logged through a [`RootLogger`].
pub enum MessageCallback {
    /// Prints to stderr, filtered by the `PATHWAY_LOG` environment variable.
    Default,
    Custom(Box<CallbackFn>),
}

impl std::fmt::Debug for MessageCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl MessageCallback {
    pub fn custom(callback: impl Fn(Level, Arguments, &str) + Send + 'static) -> Self {
        Self::Custom(Box::new(callback))
    }

    fn log(&self, level: Level, fmt: Arguments, module_path: &str) {
        let source = module_path
            .strip_prefix("pathway::")
            .unwrap_or(module_path);

        match self {
            Self::Default => {
                if env_level_filter().allows(level) {
                    eprintln!("[pathway {} {source}] {fmt}", level.name());
                }
            }
            Self::Custom(callback) => callback(level, fmt, source),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

pub trait Logger: sealed::Sealed {
    fn log(&self, level: Level, fmt: Arguments, module_path: &str);
}

/// Shared handle to the destination of log messages.
///
/// Clones refer to the same destination, replacing the callback through one
/// of them affects all.
#[derive(Debug, Clone)]
pub struct RootLogger {
    callback: Arc<Mutex<MessageCallback>>,
}

impl RootLogger {
    pub fn new() -> Self {
        Self {
            callback: Arc::new(Mutex::new(MessageCallback::Default)),
        }
    }

    pub fn set_message_callback(&mut self, callback: MessageCallback) {
        *self
            .callback
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = callback;
    }
}

impl Default for RootLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl sealed::Sealed for RootLogger {}

impl Logger for RootLogger {
    fn log(&self, level: Level, fmt: Arguments, module_path: &str) {
        self.callback
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .log(level, fmt, module_path)
    }
}

/// Anything that can be passed as the first argument of the logging macros.
pub trait AsLogger {
    fn as_logger(&self) -> &impl Logger;
}

impl<T: AsLogger> AsLogger for &T {
    fn as_logger(&self) -> &impl Logger {
        <T as AsLogger>::as_logger(*self)
    }
}

impl AsLogger for RootLogger {
    fn as_logger(&self) -> &impl Logger {
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelFilter {
    AtLeast(Level),
    Off,
}

impl LevelFilter {
    fn allows(self, level: Level) -> bool {
        match self {
            Self::AtLeast(min) => level >= min,
            Self::Off => false,
        }
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::AtLeast(Level::Debug)
        } else {
            Self::AtLeast(Level::Warn)
        }
    }
}

impl FromStr for LevelFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" {
            return Ok(Self::Off);
        }

        [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error]
            .into_iter()
            .find(|level| level.name() == s)
            .map(Self::AtLeast)
            .ok_or(())
    }
}

fn env_level_filter() -> LevelFilter {
    static FILTER: OnceLock<LevelFilter> = OnceLock::new();

    *FILTER.get_or_init(|| {
        std::env::var("PATHWAY_LOG")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or_default()
    })
}

#[macro_export]
macro_rules! log {
    ($logger: expr, $level: expr, $($fmt: tt)*) => {
        $crate::Logger::log(
            $crate::AsLogger::as_logger(&$logger),
            $level, format_args!($($fmt)*), module_path!()
        )
    };
    (@mkmacro $dollar: tt, $name: ident, $level: ident) => {
        #[macro_export]
        #[clippy::format_args]
        macro_rules! $name {
            ($dollar logger: expr, $dollar ($dollar rest: tt)*) => {
                $crate::log!($dollar logger, $crate::Level::$level, $dollar ($dollar rest)*)
            }
        }
    }
}

log!(@mkmacro $, trace, Trace);
log!(@mkmacro $, warning, Warn);
