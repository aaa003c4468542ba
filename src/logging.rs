//! Log message formatting
//!
//! Messages are built from templates with curly-brace placeholders and
//! prefixed with the application acronym, the caller and an optional runtime
//! context before they are handed to the [`log`] facade:
//!
//! ```text
//! >>> [ABC][Heavy Crunching][pid=42]: some message
//! ```
//!
//! Plain timestamped lines, `[ts][tag]` or `[ts] message | Context: {...}`,
//! come from [`timestamp_prefix`] and [`format_with_context`]. Both take the
//! instant as a parameter.
//!
//! Placeholders come in two forms:
//!
//! - positional `{0}`, `{1}`, filled from a slice of arguments
//! - named `{user.name}`, looked up in a JSON object with dotted paths
//!
//! ```
//! use elfproef::logging::{format_positional, format_named};
//! use serde_json::json;
//!
//! assert_eq!(format_positional("Say {0}-{0}-{1}", &["hip", "hurray"]), "Say hip-hip-hurray");
//! assert_eq!(format_named("{a}-{c}", &json!({"a": "one"})), "one-{c}");
//! ```

use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, error, info, log_enabled, warn};
use regex::{Captures, Regex};
use serde_json::Value;

use crate::config::LoggingConfig;

static POSITIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d+)\}").expect("positional pattern is valid"));

static NAMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("named pattern is valid"));

/// Marker every prefixed message starts with
pub const MESSAGE_MARKER: &str = ">>> ";

/// Replace `{n}` with the n-th argument
///
/// Placeholders without a matching argument are replaced by `undefined`.
#[must_use]
pub fn format_positional<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    POSITIONAL
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map_or_else(|| "undefined".to_string(), |arg| arg.as_ref().to_string())
        })
        .into_owned()
}

/// Replace `{path}` with the value found at the dotted `path` in `params`
///
/// Placeholders that do not resolve are left untouched, so a missing key
/// stays visible as `{key}` in the output instead of turning into
/// `undefined` the way [`format_positional`] renders a missing argument.
/// String values are inserted without quotes, other values in their JSON
/// form.
#[must_use]
pub fn format_named(template: &str, params: &Value) -> String {
    NAMED
        .replace_all(template, |caps: &Captures<'_>| {
            navigate(params, &caps[1]).map_or_else(|| caps[0].to_string(), display_value)
        })
        .into_owned()
}

/// Follow a dotted path through nested objects
#[must_use]
pub fn navigate<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, step| current.get(step))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Timestamp prefix `[2024-03-01T09:00:00.000Z]`, or `[ts][tag]` with a tag
///
/// The timestamp is ISO 8601 in UTC with millisecond precision. An empty tag
/// counts as no tag.
#[must_use]
pub fn timestamp_prefix(now: DateTime<Utc>, tag: Option<&str>) -> String {
    let ts = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    match tag.filter(|t| !t.is_empty()) {
        Some(tag) => format!("[{ts}][{tag}]"),
        None => format!("[{ts}]"),
    }
}

/// `[ts] message`, followed by ` | Context: {json}` when `context` has entries
///
/// Only non-empty objects and arrays count as context; `null` and scalars
/// are dropped.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use elfproef::logging::format_with_context;
/// use serde_json::json;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
/// assert_eq!(
///     format_with_context("saved", &json!({"id": 7}), now),
///     r#"[2024-03-01T09:00:00.000Z] saved | Context: {"id":7}"#
/// );
/// ```
#[must_use]
pub fn format_with_context(message: &str, context: &Value, now: DateTime<Utc>) -> String {
    let has_entries = match context {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    };
    let prefix = timestamp_prefix(now, None);
    if has_entries {
        format!("{prefix} {message} | Context: {context}")
    } else {
        format!("{prefix} {message}")
    }
}

/// Runtime identifiers substituted into the context template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeContext {
    /// Process instance id, for `{pid}`
    pub process_instance: Option<String>,
    /// Task id, for `{tid}`
    pub task: Option<String>,
    /// User login name, for `{uid}`
    pub user: Option<String>,
}

impl RuntimeContext {
    /// Fill `{pid}`, `{tid}` and `{uid}` in `template`
    ///
    /// Missing identifiers become `null`.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        let or_null = |v: &Option<String>| v.clone().unwrap_or_else(|| "null".to_string());
        template
            .replace("{pid}", &or_null(&self.process_instance))
            .replace("{tid}", &or_null(&self.task))
            .replace("{uid}", &or_null(&self.user))
    }
}

/// Log level tags written in front of every message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Regular information
    Info,
    /// Timing information, logged at info level
    Performance,
    /// Debug detail
    Debug,
    /// Warnings
    Warn,
    /// Errors
    Error,
}

impl Level {
    /// The tag written before the prefixed message
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Performance => "PERFORMANCE - INFO",
            Self::Debug => "DEBUG",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Formats and emits prefixed log messages for one caller
#[derive(Debug, Clone)]
pub struct LogHelper {
    acronym: Option<String>,
    caller: String,
    context: Option<String>,
}

impl LogHelper {
    /// Helper for `caller` with the configured acronym and context template
    ///
    /// An empty caller is shown as `?`.
    #[must_use]
    pub fn new(config: &LoggingConfig, caller: &str, runtime: &RuntimeContext) -> Self {
        let caller = if caller.is_empty() { "?" } else { caller };
        Self {
            acronym: config.acronym.clone().filter(|a| !a.is_empty()),
            caller: caller.to_string(),
            context: config
                .context_template
                .as_deref()
                .filter(|t| !t.is_empty())
                .map(|t| runtime.render(t)),
        }
    }

    /// Prepend the marker and the non-empty `[prefix]` segments
    #[must_use]
    pub fn prefix(&self, message: &str) -> String {
        let mut out = String::from(MESSAGE_MARKER);
        for segment in [self.acronym.as_deref(), Some(self.caller.as_str()), self.context.as_deref()]
            .into_iter()
            .flatten()
        {
            out.push('[');
            out.push_str(segment);
            out.push(']');
        }
        out.push_str(": ");
        out.push_str(message);
        out
    }

    /// Full line for `level`: tag, prefix and positional formatting
    #[must_use]
    pub fn line<S: AsRef<str>>(&self, level: Level, template: &str, args: &[S]) -> String {
        let message = if args.is_empty() {
            template.to_string()
        } else {
            format_positional(template, args)
        };
        format!("{} {}", level.tag(), self.prefix(&message))
    }

    /// Emit at `level` through the `log` facade
    ///
    /// Info, performance and debug lines are only formatted when that level
    /// is enabled.
    pub fn emit<S: AsRef<str>>(&self, level: Level, template: &str, args: &[S]) {
        match level {
            Level::Info | Level::Performance if log_enabled!(log::Level::Info) => {
                info!("{}", self.line(level, template, args));
            },
            Level::Debug if log_enabled!(log::Level::Debug) => {
                debug!("{}", self.line(level, template, args));
            },
            Level::Warn => warn!("{}", self.line(level, template, args)),
            Level::Error => error!("{}", self.line(level, template, args)),
            _ => {},
        }
    }

    /// Emit at info level
    pub fn info<S: AsRef<str>>(&self, template: &str, args: &[S]) {
        self.emit(Level::Info, template, args);
    }

    /// Emit a timing message at info level
    pub fn performance<S: AsRef<str>>(&self, template: &str, args: &[S]) {
        self.emit(Level::Performance, template, args);
    }

    /// Emit at debug level
    pub fn debug<S: AsRef<str>>(&self, template: &str, args: &[S]) {
        self.emit(Level::Debug, template, args);
    }

    /// Emit at warn level
    pub fn warn<S: AsRef<str>>(&self, template: &str, args: &[S]) {
        self.emit(Level::Warn, template, args);
    }

    /// Emit at error level
    pub fn error<S: AsRef<str>>(&self, template: &str, args: &[S]) {
        self.emit(Level::Error, template, args);
    }
}
