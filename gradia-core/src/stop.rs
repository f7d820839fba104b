use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::random_hex_color;
use crate::errors::{GradientError, Result};

/// Smallest number of stops a gradient may be reduced to.
pub const MIN_STOPS: usize = 2;
/// Upper bound of a stop position, in percent.
pub const MAX_POSITION: u8 = 100;

const ADD_STOP_STEP: i64 = 10;

/// Stable handle of a stop inside one [`StopList`].
///
/// Ids are handed out by the list and never reused by it, so a handle held
/// by the shell stays valid while other stops are inserted or removed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct StopId(u64);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for StopId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(StopId)
    }
}

/// One anchor of a gradient: a CSS color token at a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStop {
    pub color: String,
    pub position: u8,
}

impl ColorStop {
    /// Build a stop, clamping `position` into `0..=100`.
    pub fn new(color: impl Into<String>, position: i64) -> Self {
        Self {
            color: color.into(),
            position: clamp_position(position),
        }
    }
}

/// Clamp an integer into the valid stop position range.
pub fn clamp_position(value: i64) -> u8 {
    // The clamp guarantees the cast is lossless.
    value.clamp(0, i64::from(MAX_POSITION)) as u8
}

/// Read a position the way a browser `parseInt` reads a form value.
///
/// Leading whitespace and a single sign are accepted, then every leading
/// decimal digit; anything after the digits is ignored. Input without a
/// leading digit is rejected.
pub fn parse_position_strict(raw: &str) -> Result<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return Err(GradientError::InvalidNumericInput {
            input: raw.to_string(),
        });
    }

    let magnitude = digits.bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });

    Ok(if negative { -magnitude } else { magnitude })
}

/// Tolerant position parsing: unreadable input counts as `0`, and the
/// result is always clamped into `0..=100`.
pub fn parse_position(raw: &str) -> u8 {
    match parse_position_strict(raw) {
        Ok(value) => clamp_position(value),
        Err(err) => {
            log::debug!("coercing position to 0: {err}");
            0
        },
    }
}

/// Return the stops ordered by position.
///
/// The sort is stable: stops sharing a position keep their relative order.
pub fn sorted_view(stops: &[ColorStop]) -> Vec<ColorStop> {
    let mut sorted = stops.to_vec();
    sorted.sort_by_key(|stop| stop.position);
    sorted
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StopEntry {
    id: StopId,
    stop: ColorStop,
}

/// Live collection of color stops in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StopList {
    entries: Vec<StopEntry>,
    next_id: u64,
}

impl StopList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding `stops`, assigning fresh ids in order.
    pub fn from_stops(stops: impl IntoIterator<Item = ColorStop>) -> Self {
        let mut list = Self::new();
        for stop in stops {
            list.push(stop);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, stop)` pairs in backing order.
    pub fn iter(&self) -> impl Iterator<Item = (StopId, &ColorStop)> + '_ {
        self.entries.iter().map(|entry| (entry.id, &entry.stop))
    }

    /// Return an owned copy of the stops in backing order.
    pub fn stops(&self) -> Vec<ColorStop> {
        self.entries.iter().map(|entry| entry.stop.clone()).collect()
    }

    /// Return ids in backing order.
    pub fn ids(&self) -> Vec<StopId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn get(&self, id: StopId) -> Option<&ColorStop> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.stop)
    }

    /// Return the id of the stop at `index` in backing order.
    pub fn id_at(&self, index: usize) -> Option<StopId> {
        self.entries.get(index).map(|entry| entry.id)
    }

    /// Return the backing index of `id`.
    pub fn index_of(&self, id: StopId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Append `stop` as is and return its id.
    pub fn push(&mut self, stop: ColorStop) -> StopId {
        let id = StopId(self.next_id);
        self.next_id += 1;
        self.entries.push(StopEntry { id, stop });
        id
    }

    /// Append a random color ten points after the last stop in backing
    /// order, capped at 100.
    pub fn add_stop<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StopId {
        let last = self
            .entries
            .last()
            .map(|entry| i64::from(entry.stop.position))
            .unwrap_or(0);
        let stop = ColorStop::new(random_hex_color(rng), last + ADD_STOP_STEP);
        log::debug!("adding stop {} at {}%", stop.color, stop.position);
        self.push(stop)
    }

    /// Remove the stop with `id`.
    ///
    /// # Errors
    /// [`GradientError::InvalidRemoval`] when only [`MIN_STOPS`] stops are
    /// left, [`GradientError::UnknownStop`] for a foreign id. The list is
    /// unchanged in both cases.
    pub fn remove_stop(&mut self, id: StopId) -> Result<ColorStop> {
        if self.entries.len() <= MIN_STOPS {
            return Err(GradientError::InvalidRemoval {
                minimum: MIN_STOPS,
            });
        }
        let index = self.index_of(id).ok_or(GradientError::UnknownStop(id))?;
        Ok(self.entries.remove(index).stop)
    }

    /// Replace the color of `id`.
    ///
    /// # Errors
    /// [`GradientError::UnknownStop`] for a foreign id.
    pub fn set_color(
        &mut self,
        id: StopId,
        color: impl Into<String>,
    ) -> Result<()> {
        self.entry_mut(id)?.stop.color = color.into();
        Ok(())
    }

    /// Set the position of `id` from raw text input and return the stored
    /// value. Non-numeric text is stored as `0`.
    ///
    /// # Errors
    /// [`GradientError::UnknownStop`] for a foreign id.
    pub fn set_position(&mut self, id: StopId, raw: &str) -> Result<u8> {
        let entry = self.entry_mut(id)?;
        entry.stop.position = parse_position(raw);
        Ok(entry.stop.position)
    }

    /// Set the position of `id` from a number, clamped into `0..=100`.
    ///
    /// # Errors
    /// [`GradientError::UnknownStop`] for a foreign id.
    pub fn set_position_value(&mut self, id: StopId, value: i64) -> Result<u8> {
        let entry = self.entry_mut(id)?;
        entry.stop.position = clamp_position(value);
        Ok(entry.stop.position)
    }

    /// Stops ordered by position, ties kept in insertion order.
    pub fn sorted_view(&self) -> Vec<ColorStop> {
        let mut sorted: Vec<&StopEntry> = self.entries.iter().collect();
        sorted.sort_by_key(|entry| entry.stop.position);
        sorted.into_iter().map(|entry| entry.stop.clone()).collect()
    }

    /// Drop every stop and install `stops` with fresh ids.
    pub fn replace(&mut self, stops: impl IntoIterator<Item = ColorStop>) {
        self.entries.clear();
        for stop in stops {
            self.push(stop);
        }
    }

    fn entry_mut(&mut self, id: StopId) -> Result<&mut StopEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(GradientError::UnknownStop(id))
    }
}
