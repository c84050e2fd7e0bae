use super::deal::Deal;
use super::order::Order;
use super::slot::Slot;
use crate::error::Error;
use crate::error::Result;
use crate::podium::Podium;
use crate::signal::Change;
use crate::signal::Gate;
use crate::signal::Signal;
use crate::tokens::Token;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::time::Duration;
use std::time::Instant;

/// Owns the four podiums of a game and applies orders to them.
///
/// The work podiums start from one random deal of the tokens and the goal
/// podiums from another; the game is finished when each work podium is
/// [`Podium::similar`] to its goal counterpart. Orders only ever touch the
/// work podiums. Goal podiums change on [`Manager::reinit`] alone.
///
/// Three observation points are offered:
/// - [`Manager::orders`] fires after every executed order with the old and
///   new last order;
/// - [`Manager::finishes`] fires when the finished flag flips, and on every
///   reinit;
/// - [`Manager::vetoes`] is consulted with the same payload as `orders`
///   before anything is touched, and any refusal aborts the order.
///
/// Everything happens synchronously on the caller's thread. Listeners and
/// hooks must not call back into the manager.
#[derive(Debug)]
pub struct Manager<T, R = SmallRng> {
    tokens: Vec<T>,
    podiums: [Podium<T>; 4],
    rng: R,
    count: usize,
    start: Instant,
    elapsed: Duration,
    last: Option<Order>,
    finished: bool,
    orders: Signal<Change<Option<Order>>>,
    finishes: Signal<Change<bool>>,
    vetoes: Gate<Change<Option<Order>>>,
}

impl<T: Token> Manager<T, SmallRng> {
    /// A freshly dealt game, seeded from OS entropy.
    pub fn new<I>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_rng(tokens, SmallRng::from_os_rng())
    }
    /// A freshly dealt game that replays identically for the same seed.
    pub fn seeded<I>(tokens: I, seed: u64) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_rng(tokens, SmallRng::seed_from_u64(seed))
    }
    /// A game with hand-picked work and goal podiums.
    pub fn arranged<I>(tokens: I, work: Deal<T>, goal: Deal<T>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut manager = Self::new(tokens)?;
        manager.rearrange(work, goal)?;
        Ok(manager)
    }
}

impl<T: Token, R: Rng> Manager<T, R> {
    pub fn with_rng<I>(tokens: I, mut rng: R) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let tokens = tokens.into_iter().collect::<Vec<T>>();
        if tokens.len() < crate::MIN_TOKENS {
            return Err(Error::invalid(format!(
                "need at least {} tokens, got {}",
                crate::MIN_TOKENS,
                tokens.len()
            )));
        }
        if tokens.iter().collect::<HashSet<&T>>().len() != tokens.len() {
            return Err(Error::invalid(format!("duplicate tokens in {:?}", tokens)));
        }
        let work = Deal::scramble(&tokens, &mut rng);
        let goal = Deal::scramble(&tokens, &mut rng);
        let podiums = Self::build(&work, &goal, tokens.len());
        let mut manager = Self {
            tokens,
            podiums,
            rng,
            count: 0,
            start: Instant::now(),
            elapsed: Duration::ZERO,
            last: None,
            finished: false,
            orders: Signal::default(),
            finishes: Signal::default(),
            vetoes: Gate::default(),
        };
        manager.finished = manager.is_finished();
        log::info!("new game with {} tokens", manager.tokens.len());
        Ok(manager)
    }
}

impl<T: Token, R: Rng> Manager<T, R> {
    /// The full token set, fixed for the lifetime of the manager.
    pub fn tokens(&self) -> &[T] {
        &self.tokens
    }
    pub fn podium(&self, slot: Slot) -> &Podium<T> {
        &self.podiums[usize::from(slot)]
    }
    /// Read-only view of all four podiums.
    pub fn podiums(&self) -> BTreeMap<Slot, &Podium<T>> {
        Slot::all()
            .into_iter()
            .map(|slot| (slot, self.podium(slot)))
            .collect()
    }
    /// Orders executed since the last reinit, no-ops included.
    pub fn count(&self) -> usize {
        self.count
    }
    /// Time from (re)start to completion. Zero while unfinished.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
    /// The last order executed, `None` at the start of a game.
    pub fn last(&self) -> Option<Order> {
        self.last
    }
    pub fn is_finished(&self) -> bool {
        Slot::all()
            .into_iter()
            .filter(Slot::is_work)
            .all(|slot| self.podium(slot).similar(self.podium(slot.counterpart())))
    }

    /// "last order changed" notifications.
    pub fn orders(&self) -> &Signal<Change<Option<Order>>> {
        &self.orders
    }
    /// "finished changed" notifications.
    pub fn finishes(&self) -> &Signal<Change<bool>> {
        &self.finishes
    }
    /// Pre-commit hooks on the prospective last order.
    pub fn vetoes(&self) -> &Gate<Change<Option<Order>>> {
        &self.vetoes
    }
}

impl<T: Token, R: Rng> Manager<T, R> {
    /// Applies `order` to the work podiums.
    ///
    /// An order whose precondition fails leaves the podiums alone but is
    /// still counted and still becomes the last order. A vetoed order
    /// changes nothing at all.
    pub fn execute(&mut self, order: Order) -> Result<()> {
        let change = Change::new(self.last, Some(order));
        if let Err(veto) = self.vetoes.check(&change) {
            log::debug!("order {:?} vetoed: {}", order, veto);
            return Err(Error::Rejected {
                order,
                reason: veto.reason().to_string(),
            });
        }
        match order {
            Order::LO => self.send(Slot::WorkLeft, Slot::WorkRight)?,
            Order::KI => self.send(Slot::WorkRight, Slot::WorkLeft)?,
            Order::MA => self.cycle(Slot::WorkLeft)?,
            Order::NI => self.cycle(Slot::WorkRight)?,
            Order::SO => self.swap()?,
        }
        self.count += 1;
        self.last = Some(order);
        log::debug!(
            "{:>4} {:?} {} {}",
            self.count,
            order,
            self.podium(Slot::WorkLeft),
            self.podium(Slot::WorkRight)
        );
        self.orders.emit(&change);
        self.settle();
        Ok(())
    }

    /// Deals new work and goal podiums and restarts the clock.
    ///
    /// The podiums are replaced, so podium listeners must be registered
    /// again; [`Manager::finishes`] always fires to prompt that.
    pub fn reinit(&mut self) {
        let work = Deal::scramble(&self.tokens, &mut self.rng);
        let goal = Deal::scramble(&self.tokens, &mut self.rng);
        self.install(&work, &goal);
    }

    /// Like [`Manager::reinit`] with explicit deals instead of random ones.
    /// Invalid deals are refused and leave the game untouched.
    pub fn rearrange(&mut self, work: Deal<T>, goal: Deal<T>) -> Result<()> {
        work.check(&self.tokens)?;
        goal.check(&self.tokens)?;
        self.install(&work, &goal);
        Ok(())
    }
}

impl<T: Token, R: Rng> Manager<T, R> {
    fn build(work: &Deal<T>, goal: &Deal<T>, capacity: usize) -> [Podium<T>; 4] {
        [
            Podium::filled(work.left(), capacity),
            Podium::filled(work.right(), capacity),
            Podium::filled(goal.left(), capacity),
            Podium::filled(goal.right(), capacity),
        ]
    }
    fn install(&mut self, work: &Deal<T>, goal: &Deal<T>) {
        self.podiums = Self::build(work, goal, self.tokens.len());
        self.count = 0;
        self.last = None;
        self.elapsed = Duration::ZERO;
        self.start = Instant::now();
        let change = Change::new(self.finished, self.is_finished());
        self.finished = change.new;
        log::info!(
            "dealt {} {} -> {} {}",
            self.podium(Slot::WorkLeft),
            self.podium(Slot::WorkRight),
            self.podium(Slot::GoalLeft),
            self.podium(Slot::GoalRight)
        );
        self.finishes.emit(&change);
    }
    /// Latches the finished flag and announces flips.
    fn settle(&mut self) {
        let change = Change::new(self.finished, self.is_finished());
        if change.is_transition() {
            self.elapsed = match change.new {
                true => self.start.elapsed(),
                false => Duration::ZERO,
            };
            self.finished = change.new;
            if change.new {
                log::info!("finished in {} orders, {:?}", self.count, self.elapsed);
            }
            self.finishes.emit(&change);
        }
    }

    fn podium_mut(&mut self, slot: Slot) -> &mut Podium<T> {
        &mut self.podiums[usize::from(slot)]
    }
    fn send(&mut self, from: Slot, to: Slot) -> Result<()> {
        if !self.podium(from).is_empty() && !self.podium(to).is_full() {
            let token = self.podium_mut(from).pop_top()?;
            self.podium_mut(to).push_top(token)?;
        }
        Ok(())
    }
    fn cycle(&mut self, slot: Slot) -> Result<()> {
        if !self.podium(slot).is_empty() {
            let token = self.podium_mut(slot).pop_bottom()?;
            self.podium_mut(slot).push_top(token)?;
        }
        Ok(())
    }
    fn swap(&mut self) -> Result<()> {
        if !self.podium(Slot::WorkLeft).is_empty() && !self.podium(Slot::WorkRight).is_empty() {
            let left = self.podium_mut(Slot::WorkLeft).pop_top()?;
            let right = self.podium_mut(Slot::WorkRight).pop_top()?;
            self.podium_mut(Slot::WorkLeft).push_top(right)?;
            self.podium_mut(Slot::WorkRight).push_top(left)?;
        }
        Ok(())
    }
}

impl<T: Token, R: Rng> std::fmt::Display for Manager<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "goal {}  {}",
            self.podium(Slot::GoalLeft),
            self.podium(Slot::GoalRight)
        )?;
        write!(
            f,
            "work {}  {}",
            self.podium(Slot::WorkLeft),
            self.podium(Slot::WorkRight)
        )
    }
}
