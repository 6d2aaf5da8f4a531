//! Booking lifecycle states and the transition table.
//!
//! The lifecycle is a small total state machine: every (state, event) pair
//! either maps to exactly one next state or is rejected. `Cancelled` and
//! `Completed` are terminal — no event moves a booking out of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Initial state of every new booking.
    Created,
    /// Accepted by the target practitioner.
    Confirmed,
    /// Terminal: withdrawn by the owner or an admin.
    Cancelled,
    /// Terminal: the session took place.
    Completed,
}

/// Events that drive booking transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingEvent {
    /// Practitioner accepts the booking.
    Confirm,
    /// Owner withdraws the booking.
    Cancel,
    /// Practitioner marks the session as held.
    Complete,
}

impl BookingStatus {
    /// Whether no further transition is permitted from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Applies an event to this state.
    ///
    /// Returns the next state for pairs in the transition table, `None`
    /// for every other pair.
    pub fn apply(&self, event: BookingEvent) -> Option<BookingStatus> {
        match (self, event) {
            (Self::Created, BookingEvent::Confirm) => Some(Self::Confirmed),
            (Self::Created, BookingEvent::Cancel) => Some(Self::Cancelled),
            (Self::Confirmed, BookingEvent::Cancel) => Some(Self::Cancelled),
            (Self::Confirmed, BookingEvent::Complete) => Some(Self::Completed),
            _ => None,
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BookingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Confirm => "confirm",
            Self::Cancel => "cancel",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [BookingStatus; 4] = [
        BookingStatus::Created,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ];

    const ALL_EVENTS: [BookingEvent; 3] = [
        BookingEvent::Confirm,
        BookingEvent::Cancel,
        BookingEvent::Complete,
    ];

    #[test]
    fn test_permitted_transitions() {
        assert_eq!(
            BookingStatus::Created.apply(BookingEvent::Confirm),
            Some(BookingStatus::Confirmed)
        );
        assert_eq!(
            BookingStatus::Created.apply(BookingEvent::Cancel),
            Some(BookingStatus::Cancelled)
        );
        assert_eq!(
            BookingStatus::Confirmed.apply(BookingEvent::Cancel),
            Some(BookingStatus::Cancelled)
        );
        assert_eq!(
            BookingStatus::Confirmed.apply(BookingEvent::Complete),
            Some(BookingStatus::Completed)
        );
    }

    #[test]
    fn test_terminal_states_are_immutable() {
        for event in ALL_EVENTS {
            assert_eq!(BookingStatus::Cancelled.apply(event), None);
            assert_eq!(BookingStatus::Completed.apply(event), None);
        }
    }

    #[test]
    fn test_every_pair_outside_the_table_is_rejected() {
        let table = [
            (BookingStatus::Created, BookingEvent::Confirm),
            (BookingStatus::Created, BookingEvent::Cancel),
            (BookingStatus::Confirmed, BookingEvent::Cancel),
            (BookingStatus::Confirmed, BookingEvent::Complete),
        ];

        for state in ALL_STATES {
            for event in ALL_EVENTS {
                let in_table = table.contains(&(state, event));
                assert_eq!(
                    state.apply(event).is_some(),
                    in_table,
                    "unexpected result for ({state}, {event})"
                );
            }
        }
    }
}
