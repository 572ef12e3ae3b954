use dioxus::logger::tracing;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use super::error::{AppError, AppResult};

/// Identifier handed out to each registered listener
pub type ListenerId = u64;

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct HubState {
    next_id: ListenerId,
    listeners: Vec<(ListenerId, Listener)>,
    // listeners whose rendered region the current pointer-down bubbled through
    claimed: HashSet<ListenerId>,
}

/// Context for broadcasting pointer-down interactions from the application root.
///
/// Components register a listener on mount and claim every pointer-down that bubbles through
/// their own root element. The application root then calls [`InteractionHub::dispatch`], which
/// tells each listener whether the interaction landed inside it.
#[derive(Clone, Default)]
pub struct InteractionHub {
    state: Rc<RefCell<HubState>>,
}

impl InteractionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return a guard that deregisters it when dropped
    pub fn subscribe(&self, listener: impl Fn(bool) + 'static) -> Subscription {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        state.listeners.push((id, Rc::new(listener)));
        tracing::debug!("Interaction listener {} registered", id);

        Subscription {
            id,
            hub: Rc::downgrade(&self.state),
        }
    }

    /// Remove a listener by id.
    ///
    /// Dropping the [`Subscription`] calls this once, so components never need to call it directly.
    /// A second removal of the same id fails with [`AppError::ListenerNotFound`].
    pub fn unsubscribe(&self, id: ListenerId) -> AppResult<()> {
        // removed closures are dropped after the borrow ends, they may own subscriptions themselves
        let removed: Vec<(ListenerId, Listener)> = {
            let mut state = self.state.borrow_mut();
            let (removed, kept) = std::mem::take(&mut state.listeners)
                .into_iter()
                .partition(|(listener_id, _)| *listener_id == id);
            state.listeners = kept;
            state.claimed.remove(&id);
            removed
        };

        if removed.is_empty() {
            return Err(AppError::ListenerNotFound(id));
        }
        tracing::debug!("Interaction listener {} removed", id);
        Ok(())
    }

    /// Mark the in-flight pointer-down as having landed inside the listener's region
    pub fn claim(&self, id: ListenerId) {
        self.state.borrow_mut().claimed.insert(id);
    }

    /// Notify every listener of the finished pointer-down and reset claims.
    /// Returns the number of listeners notified.
    pub fn dispatch(&self) -> usize {
        let (listeners, claimed) = {
            let mut state = self.state.borrow_mut();
            let claimed = std::mem::take(&mut state.claimed);
            (state.listeners.clone(), claimed)
        };

        for (id, listener) in &listeners {
            listener(claimed.contains(id));
        }
        listeners.len()
    }

    /// Number of live listeners, one per mounted searchable input
    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

/// Registration handle returned by [`InteractionHub::subscribe`]
pub struct Subscription {
    id: ListenerId,
    hub: Weak<RefCell<HubState>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // hub already gone means nothing left to deregister from
        let Some(state) = self.hub.upgrade() else {
            return;
        };
        let hub = InteractionHub { state };
        if let Err(e) = hub.unsubscribe(self.id) {
            tracing::warn!("Failed to drop interaction listener: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_outside_interaction_reports_false() {
        let hub = InteractionHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = seen.clone();
        let _sub = hub.subscribe(move |inside| log.borrow_mut().push(inside));

        assert_eq!(hub.dispatch(), 1);
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn test_claimed_interaction_reports_true_once() {
        let hub = InteractionHub::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let log = seen.clone();
        let sub = hub.subscribe(move |inside| log.borrow_mut().push(inside));

        hub.claim(sub.id());
        hub.dispatch();
        // claims do not carry over to the next interaction
        hub.dispatch();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_claim_only_affects_its_own_listener() {
        let hub = InteractionHub::new();
        let first = Rc::new(Cell::new(None));
        let second = Rc::new(Cell::new(None));

        let f = first.clone();
        let a = hub.subscribe(move |inside| f.set(Some(inside)));
        let s = second.clone();
        let _b = hub.subscribe(move |inside| s.set(Some(inside)));

        hub.claim(a.id());
        hub.dispatch();

        assert_eq!(first.get(), Some(true));
        assert_eq!(second.get(), Some(false));
    }

    #[test]
    fn test_dropping_subscription_deregisters_exactly_once() {
        let hub = InteractionHub::new();
        let calls = Rc::new(Cell::new(0));

        let counter = calls.clone();
        let sub = hub.subscribe(move |_| counter.set(counter.get() + 1));
        let id = sub.id();
        assert_eq!(hub.listener_count(), 1);

        drop(sub);
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.dispatch(), 0);
        assert_eq!(calls.get(), 0);
        assert_eq!(hub.unsubscribe(id), Err(AppError::ListenerNotFound(id)));
    }

    #[test]
    fn test_remount_does_not_leak_listeners() {
        let hub = InteractionHub::new();
        for _ in 0..5 {
            let sub = hub.subscribe(|_| {});
            assert_eq!(hub.listener_count(), 1);
            drop(sub);
        }
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_subscribe_during_dispatch() {
        let hub = InteractionHub::new();
        let spawned = Rc::new(RefCell::new(Vec::new()));

        let inner_hub = hub.clone();
        let keep = spawned.clone();
        let sub = hub.subscribe(move |_| keep.borrow_mut().push(inner_hub.subscribe(|_| {})));

        assert_eq!(hub.dispatch(), 1);
        assert_eq!(hub.listener_count(), 2);

        // the listener holds a strong handle to the hub, dropping it breaks the cycle
        drop(sub);
        assert_eq!(hub.listener_count(), 1);
        assert_eq!(Rc::strong_count(&hub.state), 1);

        spawned.borrow_mut().clear();
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_hub_is_harmless() {
        let hub = InteractionHub::new();
        let sub = hub.subscribe(|_| {});
        drop(hub);
        drop(sub);
    }
}
