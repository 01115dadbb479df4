mod logger;
mod tag;
mod tag_list;
mod tag_value;

use logger::log;
pub use logger::{
    add_thread_local_log_tag, clear_thread_local_log_tags, set_global_logger,
    set_thread_local_logger, with_thread_local_log_tags, GlobalLoggerAlreadySetError, LogEvent,
    Logger, StdoutLogger, VecLogger, STDOUT_LOGGER,
};
use std::fmt::{Display, Formatter};
use std::time::SystemTime;
pub use tag::{tag, Tag};
pub use tag_list::TagList;
pub use tag_value::TagValue;

/// Log levels, most severe first.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Level {
    Error,
    Info,
    Debug,
}
impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Level::Error => write!(f, "error"),
            Level::Info => write!(f, "info"),
            Level::Debug => write!(f, "debug"),
        }
    }
}

fn log_with_msg(level: Level, msg: impl Into<String>, tags: impl Into<TagList>) {
    let mut tags = tags.into();
    tags.insert(0, tag("msg", msg.into()));
    log(SystemTime::now(), level, tags);
}

/// Makes a new log event with 'error' level and sends it to the logger.
pub fn error(msg: impl Into<String>, tags: impl Into<TagList>) {
    log_with_msg(Level::Error, msg, tags);
}

/// Makes a new log event with 'info' level and sends it to the logger.
pub fn info(msg: impl Into<String>, tags: impl Into<TagList>) {
    log_with_msg(Level::Info, msg, tags);
}

/// Makes a new log event with 'debug' level and sends it to the logger.
pub fn debug(msg: impl Into<String>, tags: impl Into<TagList>) {
    log_with_msg(Level::Debug, msg, tags);
}
