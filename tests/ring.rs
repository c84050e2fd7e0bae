use circus::Animal;
use circus::Arbitrary;
use circus::Change;
use circus::Deal;
use circus::Error;
use circus::Manager;
use circus::Order;
use circus::Podium;
use circus::Slot;
use circus::Veto;
use circus::hook;
use circus::listener;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn three_animal_scenario() {
    let [a, b, c] = [Animal::Lion, Animal::Elephant, Animal::Bear];
    let mut manager = Manager::arranged(
        [a, b, c],
        Deal::from((vec![a], vec![b, c])),
        Deal::from((vec![c, b], vec![a])),
    )
    .unwrap();
    manager.execute(Order::LO).unwrap();
    assert!(manager.podium(Slot::WorkLeft).is_empty());
    assert_eq!(manager.podium(Slot::WorkRight).elements(), vec![b, c, a]);
    assert_eq!(manager.count(), 1);
    assert_eq!(manager.last(), Some(Order::LO));
    assert!(!manager.is_finished());
}

#[test]
fn solve_by_hand() {
    let [a, b, c] = [Animal::Lion, Animal::Elephant, Animal::Bear];
    let mut manager = Manager::arranged(
        [a, b, c],
        Deal::from((vec![a, b], vec![c])),
        Deal::from((vec![b], vec![c, a])),
    )
    .unwrap();
    let finished = Rc::new(RefCell::new(Vec::new()));
    manager.finishes().subscribe(&{
        let finished = finished.clone();
        listener(move |change: &Change<bool>| finished.borrow_mut().push(change.new))
    });
    // [a b] [c] -> MA -> [b a] [c] -> LO -> [b] [c a]
    for order in [Order::MA, Order::LO] {
        manager.execute(order).unwrap();
    }
    assert!(manager.is_finished());
    assert_eq!(*finished.borrow(), vec![true]);
    assert_eq!(manager.count(), 2);
}

#[test]
fn podiums_view_is_read_only_and_complete() {
    let manager = Manager::seeded(Animal::roster(6), 2024).unwrap();
    let podiums = manager.podiums();
    assert_eq!(podiums.keys().copied().collect::<Vec<Slot>>(), Slot::all().to_vec());
    let work = podiums[&Slot::WorkLeft].size() + podiums[&Slot::WorkRight].size();
    let goal = podiums[&Slot::GoalLeft].size() + podiums[&Slot::GoalRight].size();
    assert_eq!((work, goal), (6, 6));
    assert!(podiums.values().all(|p| p.capacity() == 6));
}

#[test]
fn sizes_hold_under_random_play_and_reinit() {
    let ref mut rng = SmallRng::seed_from_u64(17);
    let mut manager = Manager::seeded(Animal::roster(5), 17).unwrap();
    for round in 0..2000 {
        if round % 250 == 0 {
            manager.reinit();
        }
        manager.execute(Order::all()[rng.random_range(0..5)]).unwrap();
        let size = |slot: Slot| manager.podium(slot).size();
        assert_eq!(size(Slot::WorkLeft) + size(Slot::WorkRight), 5);
        assert_eq!(size(Slot::GoalLeft) + size(Slot::GoalRight), 5);
        assert!(!manager.is_finished() || manager.podium(Slot::WorkLeft) == manager.podium(Slot::GoalLeft));
    }
}

#[test]
fn veto_on_so() {
    let mut manager = Manager::seeded(Animal::roster(4), 8).unwrap();
    manager.vetoes().subscribe(&hook(|change: &Change<Option<Order>>| {
        match change.new {
            Some(Order::SO) => Err(Veto::new("no swapping")),
            _ => Ok(()),
        }
    }));
    let before = Slot::all().map(|slot| manager.podium(slot).clone());
    match manager.execute(Order::SO) {
        Err(Error::Rejected { order, reason }) => {
            assert_eq!(order, Order::SO);
            assert_eq!(reason, "no swapping");
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
    assert_eq!(Slot::all().map(|slot| manager.podium(slot).clone()), before);
    assert_eq!(manager.count(), 0);
    assert_eq!(manager.last(), None);
    for _ in 0..50 {
        match Order::random() {
            Order::SO => assert!(manager.execute(Order::SO).is_err()),
            order => assert!(manager.execute(order).is_ok()),
        }
    }
}

#[test]
fn standalone_podium_misuse_is_reported() {
    let mut podium = Podium::new([Animal::Cat], 1).unwrap();
    assert_eq!(podium.push_top(Animal::Cow), Err(Error::Full));
    assert_eq!(podium.pop_top(), Ok(Animal::Cat));
    assert_eq!(podium.pop_bottom(), Err(Error::Empty));
    assert!(matches!(podium.element_at(1), Err(Error::Index { .. })));
}
