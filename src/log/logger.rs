use crate::log::tag::Tag;
use crate::log::tag_list::TagList;
use crate::log::tag_value::TagValue;
use crate::log::Level;
use crate::time::FormatTime;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LogEvent {
    time: SystemTime,
    level: Level,
    tags: TagList,
}
impl LogEvent {
    pub fn new(level: Level, tags: impl Into<TagList>) -> Self {
        Self {
            time: SystemTime::now(),
            level,
            tags: tags.into(),
        }
    }

    #[must_use]
    pub fn time(&self) -> SystemTime {
        self.time
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    #[must_use]
    pub fn msg(&self) -> Option<&TagValue> {
        self.tags.get("msg")
    }
}
impl Display for LogEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let time = self.time.imf_fixdate();
        let level = self.level;
        let mut tags = self.tags.clone();
        if let Some(msg_index) = tags.iter().position(|tag| tag.is_named("msg")) {
            let msg = tags.remove(msg_index).value;
            write!(f, "{time} {level} {msg} {tags}")
        } else {
            write!(f, "{time} {level} {tags}")
        }
    }
}

pub trait Logger: Send {
    fn add(&self, event: LogEvent);
}

/// Prints events at `max_level` and more severe levels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StdoutLogger {
    max_level: Level,
}
impl StdoutLogger {
    #[must_use]
    pub const fn new(max_level: Level) -> Self {
        Self { max_level }
    }

    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level <= self.max_level
    }
}
impl Default for StdoutLogger {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}
impl Logger for StdoutLogger {
    fn add(&self, event: LogEvent) {
        if self.enabled(event.level) {
            println!("{event}");
        }
    }
}

/// Keeps events in memory.  Clones share the same events.
#[derive(Clone, Default)]
pub struct VecLogger {
    events: Arc<Mutex<Vec<LogEvent>>>,
}
impl VecLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
impl Logger for VecLogger {
    fn add(&self, event: LogEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

pub static GLOBAL_LOGGER: once_cell::sync::OnceCell<Mutex<Box<dyn Logger>>> =
    once_cell::sync::OnceCell::new();

thread_local! {
    pub static THREAD_LOCAL_LOGGER: RefCell<Option<Rc<dyn Logger>>> = RefCell::new(None);
    pub static THREAD_LOCAL_TAGS: RefCell<Vec<Tag>> = const { RefCell::new(Vec::new()) };
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GlobalLoggerAlreadySetError {}

/// Sets the process-wide logger.  It can be set only once.
///
/// # Errors
/// Returns an error when the global logger was already set.
pub fn set_global_logger(logger: impl Logger + 'static) -> Result<(), GlobalLoggerAlreadySetError> {
    GLOBAL_LOGGER
        .set(Mutex::new(Box::new(logger)))
        .map_err(|_| GlobalLoggerAlreadySetError {})
}

/// Sends this thread's log events to `logger` instead of the global logger.
/// Pass `None` to go back to the global logger.
pub fn set_thread_local_logger(logger: Option<Rc<dyn Logger>>) {
    THREAD_LOCAL_LOGGER.with(|cell| *cell.borrow_mut() = logger);
}

/// Used when no logger is set.  Drops debug events.
pub static STDOUT_LOGGER: StdoutLogger = StdoutLogger::new(Level::Info);

pub fn add_thread_local_log_tag(name: &'static str, value: impl Into<TagValue>) {
    let tag = Tag::new(name, value);
    THREAD_LOCAL_TAGS.with(|cell| cell.borrow_mut().push(tag));
}

pub fn clear_thread_local_log_tags() {
    THREAD_LOCAL_TAGS.with(|cell| cell.borrow_mut().clear());
}

pub fn with_thread_local_log_tags<R, F: FnOnce(&[Tag]) -> R>(f: F) -> R {
    THREAD_LOCAL_TAGS.with(|cell| f(cell.borrow().as_slice()))
}

/// Adds this thread's tags to the event and sends it to the thread-local logger,
/// the global logger, or [`STDOUT_LOGGER`], whichever is set first.
pub fn log(time: SystemTime, level: Level, tags: impl Into<TagList>) {
    let mut tags = tags.into();
    with_thread_local_log_tags(|thread_tags| tags.0.extend_from_slice(thread_tags));
    let event = LogEvent { time, level, tags };
    if let Some(logger) = THREAD_LOCAL_LOGGER.with(|cell| cell.borrow().clone()) {
        logger.add(event);
    } else if let Some(mutex) = GLOBAL_LOGGER.get() {
        mutex
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add(event);
    } else {
        STDOUT_LOGGER.add(event);
    }
}
