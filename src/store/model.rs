//! Task entity and the description timestamp convention

use chrono::NaiveDateTime;

/// Layout of the creation stamp that prefixes every description.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const STAMP_LEN: usize = 19;

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub completed: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Task {
    /// Description without its creation stamp.
    pub fn text(&self) -> &str {
        strip_timestamp(&self.description)
    }

    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// One list row: `[x] description` or `[ ] description`.
    pub fn row(&self) -> String {
        format!("{} {}", self.checkbox(), self.description)
    }
}

pub fn stamp_description(text: &str, now: NaiveDateTime) -> String {
    format!("{} {}", now.format(STAMP_FORMAT), text)
}

pub fn strip_timestamp(description: &str) -> &str {
    let Some(stamp) = description.get(..STAMP_LEN) else {
        return description;
    };
    if NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).is_err() {
        return description;
    }
    description[STAMP_LEN..]
        .strip_prefix(' ')
        .unwrap_or(description)
}
