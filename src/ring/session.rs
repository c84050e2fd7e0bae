use super::args::Args;
use crate::circus::Manager;
use crate::circus::Order;
use crate::error::Error;
use crate::signal::Change;
use crate::signal::Hook;
use crate::signal::Veto;
use crate::signal::hook;
use crate::signal::listener;
use crate::tokens::Animal;
use colored::*;
use dialoguer::Select;
use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// What the player picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    Order(Order),
    ToggleSo,
    Restart,
    Quit,
}

/// Interactive game in the terminal.
///
/// Keeps a one-line history of accepted orders (`*` marks a refused one)
/// and announces the result once the work podiums match the goal.
pub struct Session {
    manager: Manager<Animal>,
    history: Rc<RefCell<String>>,
    won: Rc<Cell<bool>>,
    no_so: Hook<Change<Option<Order>>>,
}

impl Session {
    pub fn new(args: &Args) -> anyhow::Result<Self> {
        let animals = Animal::roster(args.count());
        let manager = match args.seed {
            Some(seed) => Manager::seeded(animals, seed)?,
            None => Manager::new(animals)?,
        };
        let history = Rc::new(RefCell::new(String::new()));
        let won = Rc::new(Cell::new(manager.is_finished()));
        let no_so = hook(|change: &Change<Option<Order>>| match change.new {
            Some(Order::SO) => Err(Veto::new("SO is not allowed")),
            _ => Ok(()),
        });
        {
            let history = history.clone();
            manager.orders().subscribe(&listener(move |c: &Change<Option<Order>>| {
                if let Some(order) = c.new {
                    history.borrow_mut().push_str(order.name());
                    history.borrow_mut().push(' ');
                }
            }));
        }
        {
            let won = won.clone();
            manager
                .finishes()
                .subscribe(&listener(move |c: &Change<bool>| won.set(c.new)));
        }
        if args.no_so {
            manager.vetoes().subscribe(&no_so);
        }
        Ok(Self {
            manager,
            history,
            won,
            no_so,
        })
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            println!("\n{}", self.manager);
            println!("{}", self.history.borrow());
            match self.pick()? {
                Pick::Quit => return Ok(()),
                Pick::Restart => self.restart(),
                Pick::ToggleSo => self.toggle_so(),
                Pick::Order(order) => self.order(order)?,
            }
        }
    }

    fn pick(&self) -> anyhow::Result<Pick> {
        let picks = self.picks();
        let labels = picks.iter().map(|p| self.label(p)).collect::<Vec<String>>();
        let choice = Select::new()
            .with_prompt(format!("{} orders", self.manager.count()))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(picks[choice])
    }
    /// Orders are withdrawn once the game is won.
    fn picks(&self) -> Vec<Pick> {
        let orders = match self.won.get() {
            true => Vec::new(),
            false => Order::all().into_iter().map(Pick::Order).collect(),
        };
        orders
            .into_iter()
            .chain([Pick::ToggleSo, Pick::Restart, Pick::Quit])
            .collect()
    }
    fn label(&self, pick: &Pick) -> String {
        match pick {
            Pick::Order(order) => format!("{}  {}", order, order.label()),
            Pick::ToggleSo if self.manager.vetoes().contains(&self.no_so) => "allow SO".into(),
            Pick::ToggleSo => "forbid SO".into(),
            Pick::Restart => "restart".into(),
            Pick::Quit => "quit".into(),
        }
    }

    fn order(&mut self, order: Order) -> anyhow::Result<()> {
        match self.manager.execute(order) {
            Ok(()) if self.won.get() => {
                let banner = format!(
                    "\nwon in {} moves and {}",
                    self.manager.count(),
                    clock(self.manager.elapsed())
                );
                self.history.borrow_mut().push_str(&banner.green().to_string());
                Ok(())
            }
            Ok(()) => Ok(()),
            Err(Error::Rejected { .. }) => {
                self.history.borrow_mut().push_str("* ");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
    fn restart(&mut self) {
        self.manager.reinit();
        self.history.borrow_mut().clear();
    }
    fn toggle_so(&mut self) {
        let vetoes = self.manager.vetoes();
        if !vetoes.unsubscribe(&self.no_so) {
            vetoes.subscribe(&self.no_so);
        }
    }
}

/// Elapsed time as `MM:SS sec`.
pub fn clock(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{:02}:{:02} sec", seconds / 60, seconds % 60)
}
