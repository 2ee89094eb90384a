//! # Station Line Parser
//!
//! `stations+ils.dat` carries one airbase per line as whitespace-separated
//! positional fields followed by an optional `#` comment. Four positions
//! hold the ATC UHF channels this tool assigns; everything else is carried
//! through untouched.

use std::fmt;

use crate::band::{Band, FreqKhz};
use crate::error::{FreqGenError, Result};

/// Lines carrying any fields must have at least this many.
pub const MIN_STATION_FIELDS: usize = 15;

/// ATC UHF channel held at a fixed field position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtcChannel {
    Tower,
    Ops,
    Ground,
    Approach,
}

impl AtcChannel {
    pub const ALL: [AtcChannel; 4] = [
        AtcChannel::Tower,
        AtcChannel::Ops,
        AtcChannel::Ground,
        AtcChannel::Approach,
    ];

    /// Field position within a station line.
    pub const fn index(self) -> usize {
        match self {
            AtcChannel::Tower => 6,
            AtcChannel::Ops => 12,
            AtcChannel::Ground => 13,
            AtcChannel::Approach => 14,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AtcChannel::Tower => "TwrU",
            AtcChannel::Ops => "OpsU",
            AtcChannel::Ground => "GndU",
            AtcChannel::Approach => "AppU",
        }
    }
}

/// A station line split into positional fields and its trailing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationLine {
    pub fields: Vec<String>,
    /// Empty, or `#` followed by the rest of the line verbatim.
    pub comment: String,
}

impl StationLine {
    /// Split `line` at its first `#` and tokenize the part before it.
    ///
    /// `line_no` is 1-based and only used in errors. Lines with fields but
    /// fewer than [`MIN_STATION_FIELDS`] are rejected with
    /// [`FreqGenError::MalformedStationLine`].
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let line = line.trim();
        let (content, comment) = match line.find('#') {
            Some(pos) => line.split_at(pos),
            None => (line, ""),
        };

        let fields: Vec<String> = content.split_whitespace().map(str::to_string).collect();
        if !fields.is_empty() && fields.len() < MIN_STATION_FIELDS {
            return Err(FreqGenError::MalformedStationLine {
                line: line_no,
                fields: fields.len(),
                min: MIN_STATION_FIELDS,
            });
        }

        Ok(Self {
            fields,
            comment: comment.to_string(),
        })
    }

    /// Blank or comment-only: written back as-is.
    pub fn is_passthrough(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw text of an ATC channel field. `None` on pass-through lines.
    pub fn channel(&self, channel: AtcChannel) -> Option<&str> {
        self.fields.get(channel.index()).map(String::as_str)
    }

    pub fn set_channel(&mut self, channel: AtcChannel, freq: FreqKhz) {
        if let Some(field) = self.fields.get_mut(channel.index()) {
            *field = freq.to_string();
        }
    }

    /// ATC channels already holding an assignable frequency.
    pub fn assigned_channels<'a>(
        &'a self,
        band: &'a Band,
    ) -> impl Iterator<Item = (AtcChannel, FreqKhz)> + 'a {
        AtcChannel::ALL.into_iter().filter_map(move |channel| {
            self.channel(channel)
                .and_then(|field| band.parse_assignable(field))
                .map(|freq| (channel, freq))
        })
    }
}

/// Fields joined by single spaces, then the comment with no separator.
impl fmt::Display for StationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.fields.join(" "), self.comment)
    }
}
