//! Disposable listener registrations

/// Events a form listener can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Focus,
    Blur,
    Input,
    Submit,
}

/// Handle for one registered listener. Pass it back to detach the listener.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
    /// Field name, or `None` for form-level events
    pub target: Option<String>,
    pub kind: EventKind,
}

impl Subscription {
    #[cfg(test)]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Live listener registrations of one controller
#[derive(Debug, Default)]
pub struct Subscriptions {
    next_id: u64,
    live: Vec<Subscription>,
}

impl Subscriptions {
    /// Register a listener; registering the same target/kind again returns the
    /// existing handle.
    pub fn subscribe(&mut self, target: Option<&str>, kind: EventKind) -> Subscription {
        if let Some(existing) = self.find(target, kind) {
            return existing.clone();
        }
        self.next_id += 1;
        let sub = Subscription {
            id: self.next_id,
            target: target.map(str::to_string),
            kind,
        };
        self.live.push(sub.clone());
        sub
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn dispose(&mut self, sub: &Subscription) -> bool {
        let before = self.live.len();
        self.live.retain(|s| s.id != sub.id);
        self.live.len() != before
    }

    pub fn dispose_all(&mut self) {
        self.live.clear();
    }

    pub fn is_live(&self, target: Option<&str>, kind: EventKind) -> bool {
        self.find(target, kind).is_some()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    fn find(&self, target: Option<&str>, kind: EventKind) -> Option<&Subscription> {
        self.live
            .iter()
            .find(|s| s.kind == kind && s.target.as_deref() == target)
    }
}
