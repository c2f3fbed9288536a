// SPDX-License-Identifier: MPL-2.0
//! Cancelable lifecycle signals.
//!
//! Host code can observe and veto notification transitions through three
//! signals fired by the area: about-to-show, about-to-update, and
//! about-to-hide. Subscribers run in ascending priority order (ties keep
//! subscription order) and the first [`Outcome::Veto`] short-circuits the
//! transition. A veto is a cooperative refusal, never an error.

use crate::ui::notifications::{Kind, NotificationId, NotificationUpdate};

/// Result of a signal subscriber: let the transition proceed, or veto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Proceed,
    Veto,
}

/// Payload for the about-to-show signal.
#[derive(Debug, Clone)]
pub struct ShowEvent {
    pub id: NotificationId,
    pub kind: Kind,
    pub message: String,
}

/// Payload for the about-to-update signal, carrying the raw options so a
/// subscriber can mirror or veto the visual side of the update.
#[derive(Debug, Clone)]
pub struct UpdateEvent {
    pub id: NotificationId,
    pub options: NotificationUpdate,
}

/// Payload for the about-to-hide signal.
#[derive(Debug, Clone)]
pub struct HideEvent {
    pub id: NotificationId,
    pub kind: Kind,
}

type Handler<E> = Box<dyn FnMut(&E) -> Outcome>;

/// One cancelable signal with priority-ordered subscribers.
pub struct Signal<E> {
    subscribers: Vec<Subscriber<E>>,
    next_seq: u64,
}

struct Subscriber<E> {
    priority: i32,
    seq: u64,
    handler: Handler<E>,
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<E> Signal<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes a handler at the given priority.
    ///
    /// Lower priorities run first; equal priorities run in subscription
    /// order.
    pub fn subscribe(&mut self, priority: i32, handler: impl FnMut(&E) -> Outcome + 'static) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let subscriber = Subscriber {
            priority,
            seq,
            handler: Box::new(handler),
        };
        let at = self
            .subscribers
            .partition_point(|s| (s.priority, s.seq) <= (priority, seq));
        self.subscribers.insert(at, subscriber);
    }

    /// Fires the signal. Stops at the first veto.
    pub fn emit(&mut self, event: &E) -> Outcome {
        for subscriber in &mut self.subscribers {
            if (subscriber.handler)(event) == Outcome::Veto {
                return Outcome::Veto;
            }
        }
        Outcome::Proceed
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E> std::fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// The three lifecycle signals of one notification area.
#[derive(Debug, Default)]
pub struct SignalHub {
    pub about_to_show: Signal<ShowEvent>,
    pub about_to_update: Signal<UpdateEvent>,
    pub about_to_hide: Signal<HideEvent>,
}

impl SignalHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn show_event() -> ShowEvent {
        ShowEvent {
            id: NotificationId::new(),
            kind: Kind::Info,
            message: "saved".to_string(),
        }
    }

    #[test]
    fn emit_with_no_subscribers_proceeds() {
        let mut signal: Signal<ShowEvent> = Signal::new();
        assert_eq!(signal.emit(&show_event()), Outcome::Proceed);
    }

    #[test]
    fn subscribers_run_in_priority_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut signal: Signal<ShowEvent> = Signal::new();

        let o = Rc::clone(&order);
        signal.subscribe(10, move |_| {
            o.borrow_mut().push(10);
            Outcome::Proceed
        });
        let o = Rc::clone(&order);
        signal.subscribe(-5, move |_| {
            o.borrow_mut().push(-5);
            Outcome::Proceed
        });
        let o = Rc::clone(&order);
        signal.subscribe(0, move |_| {
            o.borrow_mut().push(0);
            Outcome::Proceed
        });

        signal.emit(&show_event());
        assert_eq!(*order.borrow(), vec![-5, 0, 10]);
    }

    #[test]
    fn equal_priority_keeps_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut signal: Signal<ShowEvent> = Signal::new();

        for tag in ["first", "second", "third"] {
            let o = Rc::clone(&order);
            signal.subscribe(0, move |_| {
                o.borrow_mut().push(tag);
                Outcome::Proceed
            });
        }

        signal.emit(&show_event());
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn veto_short_circuits_later_subscribers() {
        let reached = Rc::new(RefCell::new(false));
        let mut signal: Signal<ShowEvent> = Signal::new();

        signal.subscribe(0, |_| Outcome::Veto);
        let r = Rc::clone(&reached);
        signal.subscribe(1, move |_| {
            *r.borrow_mut() = true;
            Outcome::Proceed
        });

        assert_eq!(signal.emit(&show_event()), Outcome::Veto);
        assert!(!*reached.borrow());
    }
}
