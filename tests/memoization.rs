use orx_lazy_seq::*;
use std::cell::Cell;

/// Sequence `x, x + 1, ...` whose tail generators count their invocations.
fn counting(calls: &Cell<usize>, x: usize) -> Seq<'_, usize> {
    Seq::new(x, move || {
        calls.set(calls.get() + 1);
        counting(calls, x + 1)
    })
}

#[test]
fn tail_is_idempotent() {
    let calls = Cell::new(0);
    let seq = counting(&calls, 0);

    let first = seq.tail().clone();
    let second = seq.tail().clone();

    assert!(first.ptr_eq(&second));
    assert_eq!(calls.get(), 1);
}

#[test]
fn generator_not_rerun_from_other_cursors() {
    let calls = Cell::new(0);
    let seq = counting(&calls, 0);
    let cursors: Vec<_> = (0..4).map(|_| seq.clone()).collect();

    for cursor in &cursors {
        assert_eq!(cursor.get(9), Some(&9));
    }
    assert_eq!(calls.get(), 9);

    for cursor in &cursors {
        assert!(cursor.drop(5).ptr_eq(&seq.drop(5)));
    }
    assert_eq!(calls.get(), 9);
}

#[test]
fn force_is_idempotent() {
    let calls = Cell::new(0);
    let seq = counting(&calls, 0).take(3);

    let forced = seq.force().force();
    assert!(forced.ptr_eq(&seq));

    let mut a = &seq;
    let mut b = forced;
    while let (Some(x), Some(y)) = (a.head(), b.head()) {
        assert_eq!(x, y);
        a = a.tail();
        b = b.tail();
    }
    assert!(a.is_empty() && b.is_empty());
    assert_eq!(calls.get(), 2);
}

#[test]
fn transformations_are_lazy() {
    let calls = Cell::new(0);
    let seq = counting(&calls, 0);

    let derived = seq
        .map(|x| x + 1)
        .take(100)
        .take_while(|x| *x < 50)
        .cut(1)
        .cut_while(|x| *x > 45);
    assert!(calls.get() <= 2);

    assert_eq!(derived.len(), 45);
    assert_eq!(derived.to_vec(), (1..=45).collect::<Vec<_>>());
}

#[test]
fn mapped_side_effects_once_per_element() {
    let applied = Cell::new(0);
    let seq = series(0, 1).take(10).map(|x| {
        applied.set(applied.get() + 1);
        x * x
    });

    seq.force();
    seq.force();
    let _ = seq.len();
    let _ = seq.fold(0, |acc, x| acc + x);
    assert_eq!(applied.get(), 10);
}

#[test]
fn iterate_like_counter() {
    let counter = Cell::new(0);
    let seq = iterate(0, |_| {
        counter.set(counter.get() + 1);
        counter.get()
    })
    .take(3);

    let forced = seq.force().force();
    assert!(forced.ptr_eq(&seq));
    assert_eq!(seq.to_vec(), [0, 1, 2]);
    assert_eq!(counter.get(), 2);
}

#[test]
fn debug_shows_resolved_prefix() {
    let calls = Cell::new(0);
    let seq = counting(&calls, 0);
    assert_eq!(format!("{:?}", seq), "[0, ..]");

    let _ = seq.get(3);
    assert_eq!(format!("{:?}", seq), "[0, 1, 2, 3, ..]");
    assert_eq!(calls.get(), 3);
}
