//! FILENAME: core/engine/src/timestamp.rs
//! PURPOSE: Timestamp values and the profiles used to read and write them.
//! CONTEXT: A timestamp remembers the profile it was parsed with so that it is
//! written back the same way. The list of profiles tried while parsing is an
//! explicit `TimeProfiles` value handed to every parse call.

use std::cmp::Ordering;
use std::fmt::{self, Write};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};

use crate::error::{Result, TableError};

/// A way of rendering and recognising a timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeProfile {
    /// RFC 3339 with as many fraction digits as needed. The canonical profile.
    Rfc3339Nano,
    /// RFC 3339 truncated to whole seconds.
    Rfc3339,
    /// RFC 2822 (`Tue, 1 Jul 2003 10:52:37 +0200`).
    Rfc2822,
    /// Any strftime layout. Layouts without an offset are read as UTC.
    /// A trailing ` %Z` stands for a zone abbreviation: any token is accepted
    /// when reading, and `UTC` or the numeric offset is written.
    Layout(String),
}

impl TimeProfile {
    pub fn layout(fmt: impl Into<String>) -> Self {
        TimeProfile::Layout(fmt.into())
    }

    /// Attempts to read `s` with this profile.
    pub fn parse(&self, s: &str) -> Option<DateTime<FixedOffset>> {
        match self {
            TimeProfile::Rfc3339Nano | TimeProfile::Rfc3339 => DateTime::parse_from_rfc3339(s).ok(),
            TimeProfile::Rfc2822 => DateTime::parse_from_rfc2822(s).ok(),
            TimeProfile::Layout(fmt) => match fmt.strip_suffix(ZONE_NAME) {
                Some(base) => {
                    let (head, zone) = s.rsplit_once(' ')?;
                    if zone.is_empty() {
                        return None;
                    }
                    parse_layout(head, base)
                }
                None => parse_layout(s, fmt),
            },
        }
    }

    /// Renders `instant` with this profile. A layout chrono cannot render
    /// falls back to the canonical profile.
    pub fn format(&self, instant: &DateTime<FixedOffset>) -> String {
        match self {
            TimeProfile::Rfc3339Nano => instant.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            TimeProfile::Rfc3339 => instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimeProfile::Rfc2822 => instant.to_rfc2822(),
            TimeProfile::Layout(fmt) => match fmt.strip_suffix(ZONE_NAME) {
                Some(base) => {
                    let zone = if instant.offset().local_minus_utc() == 0 {
                        "UTC".to_string()
                    } else {
                        instant.format("%z").to_string()
                    };
                    format!("{} {}", format_layout(instant, base), zone)
                }
                None => format_layout(instant, fmt),
            },
        }
    }
}

const ZONE_NAME: &str = " %Z";

fn parse_layout(s: &str, fmt: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s, fmt)
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, fmt)
                .ok()
                .map(|naive| naive.and_utc().fixed_offset())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, fmt)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc().fixed_offset())
        })
}

fn format_layout(instant: &DateTime<FixedOffset>, fmt: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", instant.format(fmt)).is_err() {
        return TimeProfile::Rfc3339Nano.format(instant);
    }
    out
}

impl Default for TimeProfile {
    fn default() -> Self {
        TimeProfile::Rfc3339Nano
    }
}

/// Ordered list of profiles tried when a timestamp string is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeProfiles {
    profiles: Vec<TimeProfile>,
}

impl TimeProfiles {
    /// Builds a list from exactly the given profiles, in order.
    pub fn new(profiles: Vec<TimeProfile>) -> Self {
        TimeProfiles { profiles }
    }

    /// Puts `profile` ahead of every profile already in the list.
    pub fn with_preferred(mut self, profile: TimeProfile) -> Self {
        self.profiles.retain(|p| *p != profile);
        self.profiles.insert(0, profile);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Parses `s` with the first profile that accepts it. The resulting
    /// timestamp keeps that profile for display.
    pub fn parse(&self, s: &str) -> Result<Timestamp> {
        self.profiles
            .iter()
            .find_map(|profile| {
                profile
                    .parse(s)
                    .map(|instant| Timestamp::with_profile(instant, profile.clone()))
            })
            .ok_or_else(|| TableError::TimestampFormat(s.to_string()))
    }
}

impl Default for TimeProfiles {
    fn default() -> Self {
        // Most likely first. Rfc3339Nano must stay ahead of Rfc3339.
        TimeProfiles::new(vec![
            TimeProfile::Rfc3339Nano,
            TimeProfile::Rfc3339,
            TimeProfile::layout("%Y-%m-%d %H:%M:%S%.f %z %Z"),
            TimeProfile::layout("%Y-%m-%d %H:%M:%S%.f %z"),
            TimeProfile::Rfc2822,
            TimeProfile::layout("%a %b %e %H:%M:%S %Y"),
            TimeProfile::layout("%d %b %y %H:%M %z"),
            TimeProfile::layout("%Y-%m-%dT%H:%M:%S%.f"),
            TimeProfile::layout("%Y-%m-%d %H:%M:%S%.f"),
        ])
    }
}

/// An instant together with the profile used to display it.
/// Equality and ordering look at the instant only.
#[derive(Debug, Clone)]
pub struct Timestamp {
    instant: DateTime<FixedOffset>,
    profile: TimeProfile,
}

impl Timestamp {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Timestamp {
            instant,
            profile: TimeProfile::default(),
        }
    }

    pub fn with_profile(instant: DateTime<FixedOffset>, profile: TimeProfile) -> Self {
        Timestamp { instant, profile }
    }

    /// Parses with the default profile list.
    pub fn parse(s: &str) -> Result<Self> {
        TimeProfiles::default().parse(s)
    }

    pub fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    pub fn profile(&self) -> &TimeProfile {
        &self.profile
    }

    /// Text in the remembered profile.
    pub fn to_text(&self) -> String {
        self.profile.format(&self.instant)
    }

    /// Text in the canonical RFC 3339 profile, regardless of the remembered one.
    pub fn to_canonical_text(&self) -> String {
        TimeProfile::Rfc3339Nano.format(&self.instant)
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Timestamp {}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        Timestamp::new(instant)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
