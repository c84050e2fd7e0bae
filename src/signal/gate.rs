use std::cell::RefCell;
use std::rc::Rc;

/// Reason given by a hook that refuses a prospective change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Veto(pub String);

impl Veto {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Veto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pre-commit check on a prospective change.
pub type Hook<E> = Rc<dyn Fn(&E) -> Result<(), Veto>>;

pub fn hook<E, F>(f: F) -> Hook<E>
where
    F: Fn(&E) -> Result<(), Veto> + 'static,
{
    Rc::new(f)
}

/// Registry of veto hooks consulted before a change is committed.
///
/// Hooks run in registration order and the first refusal wins;
/// later hooks are not consulted.
pub struct Gate<E> {
    hooks: RefCell<Vec<Hook<E>>>,
}

impl<E> Default for Gate<E> {
    fn default() -> Self {
        Self {
            hooks: RefCell::new(Vec::new()),
        }
    }
}

impl<E> Gate<E> {
    pub fn subscribe(&self, hook: &Hook<E>) -> bool {
        if self.contains(hook) {
            false
        } else {
            self.hooks.borrow_mut().push(Rc::clone(hook));
            true
        }
    }
    pub fn unsubscribe(&self, hook: &Hook<E>) -> bool {
        let mut hooks = self.hooks.borrow_mut();
        let before = hooks.len();
        hooks.retain(|h| !Rc::ptr_eq(h, hook));
        hooks.len() != before
    }
    pub fn contains(&self, hook: &Hook<E>) -> bool {
        self.hooks.borrow().iter().any(|h| Rc::ptr_eq(h, hook))
    }
    pub fn hooks(&self) -> Vec<Hook<E>> {
        self.hooks.borrow().clone()
    }
    pub fn len(&self) -> usize {
        self.hooks.borrow().len()
    }
    pub fn is_empty(&self) -> bool {
        self.hooks.borrow().is_empty()
    }
    pub fn check(&self, event: &E) -> Result<(), Veto> {
        self.hooks().iter().try_for_each(|hook| hook(event))
    }
}

impl<E> std::fmt::Debug for Gate<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gate").field("hooks", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn empty_gate_accepts() {
        assert_eq!(Gate::<u8>::default().check(&1), Ok(()));
    }

    #[test]
    fn first_refusal_wins() {
        let gate = Gate::<u8>::default();
        let reached = Rc::new(Cell::new(false));
        let odd = hook(|n: &u8| match n % 2 {
            0 => Ok(()),
            _ => Err(Veto::new("odd")),
        });
        let last = {
            let reached = reached.clone();
            hook(move |_: &u8| {
                reached.set(true);
                Err(Veto::new("never"))
            })
        };
        gate.subscribe(&odd);
        gate.subscribe(&last);
        assert_eq!(gate.check(&3), Err(Veto::new("odd")));
        assert!(!reached.get());
        assert_eq!(gate.check(&4), Err(Veto::new("never")));
        assert!(reached.get());
    }

    #[test]
    fn registration_is_idempotent() {
        let gate = Gate::<u8>::default();
        let h = hook(|_: &u8| Ok(()));
        assert!(gate.subscribe(&h));
        assert!(!gate.subscribe(&h));
        assert_eq!(gate.len(), 1);
        assert!(gate.unsubscribe(&h));
        assert!(!gate.unsubscribe(&h));
    }
}
