use crate::TestError;
use error_merge::{append, merge, Failure};


fn fail(message: &str) -> Option<Failure<TestError>> {
    Some(Failure::from(TestError::new(message)))
}

fn leaves(value: Option<Failure<TestError>>) -> Vec<String> {
    value.map(Failure::into_vec).unwrap_or_default().into_iter().map(|e| e.0).collect()
}

#[test]
fn merging_only_absent_values_yields_none() {
    assert_eq!(merge::<TestError, _>([None]), None);
    assert_eq!(merge::<TestError, _>([None, None]), None);
    assert_eq!(merge::<TestError, _>([None, None, None]), None);
    assert_eq!(merge::<TestError, _>(Vec::new()), None);
    assert_eq!(append::<TestError>(None, None), None);
}

#[test]
fn single_failure_is_returned_unwrapped() {
    let err = TestError::new("a");

    assert_eq!(merge([Some(Failure::from(err.clone()))]), Some(Failure::Single(err.clone())));
    assert_eq!(merge([Some(Failure::from(err.clone())), None]), Some(Failure::Single(err.clone())));
    assert_eq!(merge([None, Some(Failure::from(err.clone()))]), Some(Failure::Single(err.clone())));
    assert_eq!(merge([None, Some(Failure::from(err.clone())), None]), Some(Failure::Single(err)));
}

#[test]
fn single_failure_keeps_its_identity() {
    let boxed = Box::new(TestError::new("boxed"));
    let addr: *const TestError = &*boxed;

    let out = merge([None, Some(Failure::from(boxed)), None]).unwrap();

    match out {
        Failure::Single(inner) => assert!(std::ptr::eq(&*inner, addr)),
        Failure::List(_) => panic!("single failure was wrapped in a list"),
    }
}

#[test]
fn two_failures_keep_argument_order() {
    assert_eq!(leaves(merge([fail("a"), fail("b")])), ["a", "b"]);
    assert_eq!(leaves(merge([fail("b"), fail("a")])), ["b", "a"]);
}

#[test]
fn result_is_a_list_only_with_two_or_more() {
    assert!(!merge([fail("a"), None]).unwrap().is_list());
    assert!(merge([fail("a"), None, fail("b")]).unwrap().is_list());
}

#[test]
fn nested_list_is_flattened_in_place() {
    let inner = merge([fail("b"), fail("c")]);
    let out = merge([fail("a"), inner]);

    assert_eq!(leaves(out), ["a", "b", "c"]);
}

#[test]
fn lists_in_every_position_are_flattened() {
    let front = merge([fail("a"), fail("b")]);
    let middle = merge([fail("d"), fail("e")]);
    let back = merge([fail("g"), fail("h")]);

    let out = merge([front, fail("c"), None, middle, fail("f"), back]);

    assert_eq!(leaves(out), ["a", "b", "c", "d", "e", "f", "g", "h"]);
}

#[test]
fn merging_a_list_alone_is_idempotent() {
    let list = merge([fail("a"), fail("b"), fail("c")]);
    let again = merge([list.clone()]);

    assert_eq!(again, list);
    assert_eq!(leaves(again), ["a", "b", "c"]);
}

#[test]
fn first_list_argument_is_extended_and_returned() {
    // Handing a list over as the first non-absent argument authorizes the
    // merge to grow it; the result is that same list with the new leaf at the end.
    let original = merge([fail("a"), fail("b")]).unwrap();
    let snapshot = original.clone();

    let extended = merge([None, Some(original), fail("c")]).unwrap();

    assert_eq!(extended.len(), 3);
    assert_eq!(leaves(Some(extended)), ["a", "b", "c"]);
    assert_eq!(leaves(Some(snapshot)), ["a", "b"]);
}

#[test]
fn accumulating_in_a_loop_preserves_order() {
    let mut acc = None;
    for n in 0..500 {
        acc = append(acc, fail(&format!("number {n}")));
        acc = append(acc, None);
    }

    let out = leaves(acc);
    assert_eq!(out.len(), 500);
    assert_eq!(out[0], "number 0");
    assert_eq!(out[499], "number 499");
}

#[test]
fn appending_absent_to_a_list_returns_it_unchanged() {
    let list = merge([fail("a"), fail("b")]);
    assert_eq!(append(list.clone(), None), list);
    assert_eq!(append(None, list.clone()), list);
}
