//! Pub/Sub Event Bus for decoupled panel communication.
//!
//! Architecture:
//! - Listeners subscribe to an event type
//! - emit() invokes matching listeners immediately AND queues the event
//! - poll() drains the queue for batch processing in the egui update loop
//!
//! The editor is single-threaded: all emits and polls happen on the UI
//! thread, so the bus shares its state through `Rc<RefCell<..>>`.
//!
//! Listener order: FIFO (first-subscribed, first-called) within one event type.
//! Cross-type order is undefined.
//!
//! Listeners run with no bus borrow held, so they may emit or subscribe.

use log::warn;
use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Maximum events in queue before oldest are evicted
const MAX_QUEUE_SIZE: usize = 1000;

/// Marker trait for events.
pub trait Event: Any + 'static {
    fn as_any(&self) -> &dyn Any;
    fn type_name(&self) -> &'static str;
}

impl<T: Any + 'static> Event for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Boxed event for queue storage
pub type BoxedEvent = Box<dyn Event>;

type Listener = Rc<dyn Fn(&dyn Any)>;

#[derive(Default)]
struct Shared {
    listeners: RefCell<HashMap<TypeId, Vec<Listener>>>,
    queue: RefCell<Vec<BoxedEvent>>,
}

impl Shared {
    fn dispatch(&self, type_id: TypeId, event: &dyn Any) {
        // Clone the listener list so a listener may subscribe
        let listeners: Vec<Listener> = match self.listeners.borrow().get(&type_id) {
            Some(list) => list.iter().map(Rc::clone).collect(),
            None => return,
        };
        for cb in listeners {
            cb(event);
        }
    }

    fn enqueue(&self, event: BoxedEvent) {
        let mut queue = self.queue.borrow_mut();
        if queue.len() >= MAX_QUEUE_SIZE {
            let evict_count = queue.len() / 2;
            warn!("EventBus queue full ({} events), evicting oldest {}", queue.len(), evict_count);
            queue.drain(0..evict_count);
        }
        queue.push(event);
    }

    fn emit<E: Event>(&self, event: E) {
        self.dispatch(TypeId::of::<E>(), &event);
        self.enqueue(Box::new(event));
    }

    fn emit_boxed(&self, event: BoxedEvent) {
        // Deref to dyn Event so type_id/as_any come from the inner type
        let inner: &dyn Event = &*event;
        self.dispatch(inner.as_any().type_id(), inner.as_any());
        self.enqueue(event);
    }
}

/// Pub/Sub Event Bus with deferred processing support.
///
/// Two modes work together:
/// 1. Immediate: subscribe() + emit() calls listeners instantly
/// 2. Deferred: every emitted event is also queued for poll()
#[derive(Clone, Default)]
pub struct EventBus {
    shared: Rc<Shared>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to events of type E.
    ///
    /// # Example
    /// ```ignore
    /// let edits = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&edits);
    /// bus.subscribe::<LedChangedEvent, _>(move |_| counter.set(counter.get() + 1));
    /// ```
    pub fn subscribe<E, F>(&self, callback: F)
    where
        E: Event,
        F: Fn(&E) + 'static,
    {
        let wrapped: Listener = Rc::new(move |any: &dyn Any| {
            if let Some(event) = any.downcast_ref::<E>() {
                callback(event);
            }
        });
        self.shared
            .listeners
            .borrow_mut()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    /// Emit event: call listeners immediately AND queue for poll().
    pub fn emit<E: Event>(&self, event: E) {
        self.shared.emit(event);
    }

    /// Emit boxed event (for events collected by widgets).
    pub fn emit_boxed(&self, event: BoxedEvent) {
        self.shared.emit_boxed(event);
    }

    /// Drain all queued events.
    pub fn poll(&self) -> Vec<BoxedEvent> {
        std::mem::take(&mut *self.shared.queue.borrow_mut())
    }

    /// Emitter handle for model objects and widgets.
    pub fn emitter(&self) -> EventEmitter {
        EventEmitter {
            shared: Rc::clone(&self.shared),
        }
    }

    pub fn queue_len(&self) -> usize {
        self.shared.queue.borrow().len()
    }
}

/// Lightweight emitter handle. Can emit but not subscribe or poll.
#[derive(Clone)]
pub struct EventEmitter {
    shared: Rc<Shared>,
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listener_types", &self.shared.listeners.borrow().len())
            .field("queue_len", &self.shared.queue.borrow().len())
            .finish()
    }
}

impl EventEmitter {
    pub fn emit<E: Event>(&self, event: E) {
        self.shared.emit(event);
    }

    pub fn emit_boxed(&self, event: BoxedEvent) {
        self.shared.emit_boxed(event);
    }
}

/// Model-side emitter (wraps `Option<EventEmitter>`).
///
/// Model objects start detached so they can be built and tested without a
/// bus; the app attaches the real emitter once.
#[derive(Clone, Default, Debug)]
pub struct CubeEventEmitter {
    inner: Option<EventEmitter>,
}

impl CubeEventEmitter {
    /// No-op emitter
    pub fn detached() -> Self {
        Self { inner: None }
    }

    pub fn from_emitter(emitter: EventEmitter) -> Self {
        Self { inner: Some(emitter) }
    }

    /// Emit event (no-op if detached)
    pub fn emit<E: Event>(&self, event: E) {
        if let Some(ref emitter) = self.inner {
            emitter.emit(event);
        }
    }
}

/// Downcast a queued event to its concrete type.
///
/// Derefs to `dyn Event` first: `Box<dyn Event>` itself implements `Event`
/// through the blanket impl, and calling `as_any()` on the box would yield
/// the box's own TypeId.
#[inline]
pub fn downcast_event<E: Event>(event: &BoxedEvent) -> Option<&E> {
    (**event).as_any().downcast_ref::<E>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Debug)]
    struct TestEvent {
        value: i32,
    }

    #[derive(Clone, Debug)]
    struct OtherEvent;

    #[test]
    fn test_subscribe_emit_immediate() {
        let bus = EventBus::new();
        let total = Rc::new(Cell::new(0));
        let t = Rc::clone(&total);
        bus.subscribe::<TestEvent, _>(move |e| t.set(t.get() + e.value));

        bus.emit(TestEvent { value: 10 });
        assert_eq!(total.get(), 10);
        bus.emit(TestEvent { value: 5 });
        assert_eq!(total.get(), 15);
    }

    #[test]
    fn test_emit_queues_for_poll() {
        let bus = EventBus::new();
        bus.emit(TestEvent { value: 1 });
        bus.emit(OtherEvent);
        assert_eq!(bus.queue_len(), 2);

        let events = bus.poll();
        assert_eq!(events.len(), 2);
        assert_eq!(downcast_event::<TestEvent>(&events[0]).map(|e| e.value), Some(1));
        assert!(downcast_event::<OtherEvent>(&events[1]).is_some());
        assert!(bus.poll().is_empty());
    }

    #[test]
    fn test_listeners_called_in_subscription_order() {
        let bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&order), Rc::clone(&order));
        bus.subscribe::<TestEvent, _>(move |e| a.borrow_mut().push(("first", e.value)));
        bus.subscribe::<TestEvent, _>(move |e| b.borrow_mut().push(("second", e.value)));

        bus.emit(TestEvent { value: 3 });
        assert_eq!(*order.borrow(), vec![("first", 3), ("second", 3)]);
    }

    #[test]
    fn test_emitter_handle_and_boxed() {
        let bus = EventBus::new();
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        bus.subscribe::<TestEvent, _>(move |e| s.set(e.value));

        bus.emitter().emit(TestEvent { value: 42 });
        assert_eq!(seen.get(), 42);

        bus.emit_boxed(Box::new(TestEvent { value: 7 }));
        assert_eq!(seen.get(), 7);
        assert_eq!(bus.poll().len(), 2);
    }

    #[test]
    fn test_detached_emitter_is_noop() {
        let bus = EventBus::new();
        let emitter = CubeEventEmitter::detached();
        emitter.emit(TestEvent { value: 1 });
        assert_eq!(bus.queue_len(), 0);

        let attached = CubeEventEmitter::from_emitter(bus.emitter());
        attached.emit(TestEvent { value: 1 });
        assert_eq!(bus.queue_len(), 1);
    }
}
