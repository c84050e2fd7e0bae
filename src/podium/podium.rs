use super::edit::Edit;
use crate::error::Error;
use crate::error::Result;
use crate::signal::Listener;
use crate::signal::Signal;
use crate::tokens::Token;
use std::collections::VecDeque;

/// A bounded podium of tokens.
///
/// Tokens are stacked from the bottom (index 0) to the top (index `size - 1`).
/// The top can be pushed and popped, the bottom can only be popped, and the
/// podium never holds more than its capacity. Every successful mutation is
/// announced on [`Podium::changes`] after it is complete.
///
/// Clones carry the content only, not the listeners.
#[derive(Debug)]
pub struct Podium<T> {
    capacity: usize,
    elements: VecDeque<T>,
    changes: Signal<Edit>,
}

impl<T: Token> Podium<T> {
    /// Builds a podium from bottom to top.
    pub fn new<I>(init: I, capacity: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = init.into_iter().collect::<VecDeque<T>>();
        if elements.len() > capacity {
            return Err(Error::invalid(format!(
                "{} tokens exceed capacity {}",
                elements.len(),
                capacity
            )));
        }
        Ok(Self {
            capacity,
            elements,
            changes: Signal::default(),
        })
    }
    /// For callers that already know `init` fits.
    pub(crate) fn filled(init: &[T], capacity: usize) -> Self {
        debug_assert!(init.len() <= capacity);
        Self {
            capacity,
            elements: init.iter().cloned().collect(),
            changes: Signal::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn size(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }
    pub fn top(&self) -> Result<&T> {
        self.elements.back().ok_or(Error::Empty)
    }
    pub fn bottom(&self) -> Result<&T> {
        self.elements.front().ok_or(Error::Empty)
    }
    /// The token at position `i`, or `None` for a free slot above the top.
    pub fn element_at(&self, i: usize) -> Result<Option<&T>> {
        if i < self.capacity {
            Ok(self.elements.get(i))
        } else {
            Err(Error::Index {
                index: i,
                capacity: self.capacity,
            })
        }
    }
    /// Tokens from bottom to top.
    pub fn elements(&self) -> Vec<T> {
        self.elements.iter().cloned().collect()
    }
    /// Same capacity, same size, same tokens in the same order.
    pub fn similar(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.elements == other.elements
    }

    pub fn push_top(&mut self, token: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::Full);
        }
        self.elements.push_back(token);
        self.announce(Edit::Push);
        Ok(())
    }
    pub fn pop_top(&mut self) -> Result<T> {
        let token = self.elements.pop_back().ok_or(Error::Empty)?;
        self.announce(Edit::PopTop);
        Ok(token)
    }
    pub fn pop_bottom(&mut self) -> Result<T> {
        let token = self.elements.pop_front().ok_or(Error::Empty)?;
        self.announce(Edit::PopBottom);
        Ok(token)
    }

    /// The "content changed" signal.
    pub fn changes(&self) -> &Signal<Edit> {
        &self.changes
    }
    pub fn subscribe(&self, listener: &Listener<Edit>) -> bool {
        self.changes.subscribe(listener)
    }
    pub fn unsubscribe(&self, listener: &Listener<Edit>) -> bool {
        self.changes.unsubscribe(listener)
    }

    fn announce(&self, edit: Edit) {
        log::trace!("{:<10} {}", edit, self);
        self.changes.emit(&edit);
    }
}

impl<T: Token> Clone for Podium<T> {
    fn clone(&self) -> Self {
        Self {
            capacity: self.capacity,
            elements: self.elements.clone(),
            changes: Signal::default(),
        }
    }
}

impl<T: Token> PartialEq for Podium<T> {
    fn eq(&self, other: &Self) -> bool {
        self.similar(other)
    }
}
impl<T: Token> Eq for Podium<T> {}

impl<T: Token> std::fmt::Display for Podium<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filled = self.elements.iter().map(|t| format!("{}|", t));
        let vacant = (self.size()..self.capacity).map(|i| match i + 1 < self.capacity {
            true => String::from(" |"),
            false => String::from(" "),
        });
        write!(f, "[{}]", filled.chain(vacant).collect::<String>())
    }
}
