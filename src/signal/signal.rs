use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked with every emitted event.
pub type Listener<E> = Rc<dyn Fn(&E)>;

/// Wraps a closure as a [`Listener`]. Keep the returned handle around
/// to unsubscribe later; identity is the allocation, not the closure body.
pub fn listener<E, F>(f: F) -> Listener<E>
where
    F: Fn(&E) + 'static,
{
    Rc::new(f)
}

/// A typed, single-threaded event emitter.
///
/// Listeners are called synchronously, in registration order, before
/// [`Signal::emit`] returns. Registration goes through `&self` so that
/// read-only views of the owner can still be observed.
///
/// A listener must not mutate the object that emitted the event.
/// Subscribing or unsubscribing from inside a listener is allowed and
/// takes effect from the next emission.
pub struct Signal<E> {
    listeners: RefCell<Vec<Listener<E>>>,
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
        }
    }
}

impl<E> Signal<E> {
    /// Registers a listener. Returns false, and changes nothing, if it was
    /// already registered.
    pub fn subscribe(&self, listener: &Listener<E>) -> bool {
        if self.contains(listener) {
            false
        } else {
            self.listeners.borrow_mut().push(Rc::clone(listener));
            true
        }
    }
    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, listener: &Listener<E>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|l| !Rc::ptr_eq(l, listener));
        listeners.len() != before
    }
    pub fn contains(&self, listener: &Listener<E>) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|l| Rc::ptr_eq(l, listener))
    }
    /// Registered listeners, in delivery order.
    pub fn listeners(&self) -> Vec<Listener<E>> {
        self.listeners.borrow().clone()
    }
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
    pub fn emit(&self, event: &E) {
        for listener in self.listeners().iter() {
            listener(event);
        }
    }
}

impl<E> std::fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("listeners", &self.len())
            .finish()
    }
}
