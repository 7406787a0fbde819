// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn id(name: &str) -> HandlerId {
    HandlerId::new(name)
}

fn begun(effects: &[Effect]) -> Vec<HandlerId> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Begin { handler } => Some(handler.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn queue_starts_empty() {
    let mut queue = HandoffQueue::new();
    assert!(queue.is_empty());
    assert!(queue.holder().is_none());

    let (holder, effects) = queue.select();
    assert!(holder.is_none());
    assert!(effects.is_empty());
}

#[test]
fn first_registration_is_granted() {
    let mut queue = HandoffQueue::new();

    let (granted, effects) = queue.register(id("A"));

    assert!(granted);
    assert_eq!(begun(&effects), vec![id("A")]);
    assert!(queue.is_holder(&id("A")));
}

#[test]
fn later_registration_waits() {
    let mut queue = HandoffQueue::new();
    queue.register(id("A"));

    let (granted, effects) = queue.register(id("B"));

    assert!(!granted);
    assert!(effects.is_empty());
    assert!(queue.is_holder(&id("A")));
    assert_eq!(queue.waiting().collect::<Vec<_>>(), vec![&id("B")]);
}

#[test]
fn fifo_promotion() {
    let mut queue = HandoffQueue::new();
    queue.register(id("A"));
    queue.register(id("B"));
    queue.register(id("C"));

    let effects = queue.remove(&id("A"));
    assert_eq!(begun(&effects), vec![id("B")]);
    assert!(queue.is_holder(&id("B")));

    let effects = queue.remove(&id("B"));
    assert_eq!(begun(&effects), vec![id("C")]);
    assert!(queue.is_holder(&id("C")));

    let effects = queue.remove(&id("C"));
    assert!(effects.is_empty());
    assert!(queue.holder().is_none());
    assert!(queue.is_empty());
}

#[test]
fn removed_waiter_is_skipped_lazily() {
    let mut queue = HandoffQueue::new();
    queue.register(id("A"));
    queue.register(id("B"));
    queue.register(id("C"));

    // B leaves while still waiting; its entry stays until it reaches the front
    let effects = queue.remove(&id("B"));
    assert!(effects.is_empty());
    assert_eq!(queue.len(), 3);

    let effects = queue.remove(&id("A"));
    assert_eq!(begun(&effects), vec![id("C")]);
    assert_eq!(queue.len(), 1);
}

#[test]
fn removed_before_holding_then_new_registration_is_granted() {
    let mut queue = HandoffQueue::new();
    queue.register(id("holder"));
    queue.register(id("A"));
    queue.remove(&id("A"));
    queue.remove(&id("holder"));

    let (granted, effects) = queue.register(id("B"));

    assert!(granted);
    assert_eq!(begun(&effects), vec![id("B")]);
}

#[test]
fn reselection_does_not_regrant() {
    let mut queue = HandoffQueue::new();
    queue.register(id("A"));

    let (holder, effects) = queue.select();
    assert_eq!(holder, Some(id("A")));
    assert!(effects.is_empty());

    let (holder, effects) = queue.select();
    assert_eq!(holder, Some(id("A")));
    assert!(effects.is_empty());
}

#[test]
fn remove_unknown_handler_is_noop() {
    let mut queue = HandoffQueue::new();
    queue.register(id("A"));

    let effects = queue.remove(&id("ghost"));

    assert!(effects.is_empty());
    assert!(queue.is_holder(&id("A")));
}

#[test]
fn remove_marks_every_duplicate_entry() {
    let mut queue = HandoffQueue::new();
    queue.register(id("A"));
    let (granted, _) = queue.register(id("A"));
    assert!(granted, "holder re-registering is still the holder");
    queue.register(id("B"));

    let effects = queue.remove(&id("A"));

    assert_eq!(begun(&effects), vec![id("B")]);
    assert!(queue.entries().all(|e| e.handler != id("A")));
}

#[test]
fn remove_twice_does_not_promote_twice() {
    let mut queue = HandoffQueue::new();
    queue.register(id("A"));
    queue.register(id("B"));
    queue.register(id("C"));

    let first = queue.remove(&id("A"));
    let second = queue.remove(&id("A"));

    assert_eq!(begun(&first), vec![id("B")]);
    assert!(second.is_empty());
    assert!(queue.is_holder(&id("B")));
}

mod yare_tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        none_removed = { &[], Some("A") },
        head_removed = { &["A"], Some("B") },
        middle_removed = { &["B"], Some("A") },
        two_removed = { &["A", "B"], Some("C") },
        all_removed = { &["A", "B", "C"], None },
        unknown_removed = { &["Z"], Some("A") },
    )]
    fn holder_after_removals(removed: &[&str], expected: Option<&str>) {
        let mut queue = HandoffQueue::new();
        for name in ["A", "B", "C"] {
            queue.register(id(name));
        }
        for name in removed {
            queue.remove(&id(name));
        }

        assert_eq!(queue.holder(), expected.map(id).as_ref());
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Register(u8),
        Remove(u8),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..6u8).prop_map(Op::Register),
            (0..6u8).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn at_most_one_active_entry(ops in proptest::collection::vec(arb_op(), 0..60)) {
            let mut queue = HandoffQueue::new();

            for op in ops {
                match op {
                    Op::Register(n) => { queue.register(id(&format!("h{}", n))); }
                    Op::Remove(n) => { queue.remove(&id(&format!("h{}", n))); }
                }
                prop_assert!(queue.active_count() <= 1);
                if let Some(front) = queue.entries().next() {
                    prop_assert!(front.available, "stale entry left at the front");
                    prop_assert!(front.active, "front entry not granted");
                }
            }
        }

        #[test]
        fn holders_are_granted_in_registration_order(count in 1..12usize) {
            let mut queue = HandoffQueue::new();
            let mut granted = Vec::new();

            for n in 0..count {
                let (_, effects) = queue.register(id(&format!("h{}", n)));
                granted.extend(begun(&effects));
            }
            for n in 0..count {
                let effects = queue.remove(&id(&format!("h{}", n)));
                granted.extend(begun(&effects));
            }

            let expected: Vec<_> = (0..count).map(|n| id(&format!("h{}", n))).collect();
            prop_assert_eq!(granted, expected);
            prop_assert!(queue.is_empty());
        }

        #[test]
        fn begin_fires_once_per_entry(ops in proptest::collection::vec(arb_op(), 0..60)) {
            let mut queue = HandoffQueue::new();
            let mut registrations = 0usize;
            let mut begins = 0usize;

            for op in ops {
                let effects = match op {
                    Op::Register(n) => {
                        registrations += 1;
                        queue.register(id(&format!("h{}", n))).1
                    }
                    Op::Remove(n) => queue.remove(&id(&format!("h{}", n))),
                };
                begins += begun(&effects).len();
                let (_, again) = queue.select();
                prop_assert!(again.is_empty());
            }

            prop_assert!(begins <= registrations);
        }
    }
}
