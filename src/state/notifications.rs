//! Transient toast notifications

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Lifecycle phase of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Sliding in from the right edge
    Entering,
    Visible,
    /// Sliding back out to the right edge
    Exiting,
    /// Past its lifetime, about to be removed
    Expired,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    /// Slide-in and slide-out duration
    pub const SLIDE_DURATION: Duration = Duration::from_millis(300);
    /// How long the message stays up before it starts to leave
    pub const DISPLAY_DURATION: Duration = Duration::from_millis(4000);

    pub fn phase(&self, now: Instant) -> NotificationPhase {
        let age = now.saturating_duration_since(self.created_at);
        if age < Self::SLIDE_DURATION {
            NotificationPhase::Entering
        } else if age < Self::DISPLAY_DURATION {
            NotificationPhase::Visible
        } else if age < Self::DISPLAY_DURATION + Self::SLIDE_DURATION {
            NotificationPhase::Exiting
        } else {
            NotificationPhase::Expired
        }
    }

    /// Fraction of the toast that is on screen, 0.0 to 1.0
    pub fn visible_fraction(&self, now: Instant) -> f32 {
        let age = now.saturating_duration_since(self.created_at);
        let slide = Self::SLIDE_DURATION.as_secs_f32();
        match self.phase(now) {
            NotificationPhase::Entering => simple_easing::cubic_out(age.as_secs_f32() / slide),
            NotificationPhase::Visible => 1.0,
            NotificationPhase::Exiting => {
                let out = (age - Self::DISPLAY_DURATION).as_secs_f32() / slide;
                1.0 - simple_easing::cubic_out(out)
            }
            NotificationPhase::Expired => 0.0,
        }
    }
}

/// Stack of live notifications, oldest first. No dedup, no queueing.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        self.items.push(Notification {
            kind,
            message: message.into(),
            created_at: now,
        });
    }

    /// Drop every notification whose lifetime is over
    pub fn prune(&mut self, now: Instant) {
        self.items
            .retain(|n| n.phase(now) != NotificationPhase::Expired);
    }

    /// Dismiss the newest notification right away
    pub fn dismiss_latest(&mut self) -> bool {
        self.items.pop().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Most recent notification of the given kind
    #[cfg(test)]
    pub fn latest(&self, kind: NotificationKind) -> Option<&Notification> {
        self.items.iter().rev().find(|n| n.kind == kind)
    }
}
