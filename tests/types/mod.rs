use crate::TestError;
use error_merge::{merge, render, Failure};
use std::error::Error;


fn fail(message: &str) -> Option<Failure<TestError>> {
    Some(Failure::from(TestError::new(message)))
}

#[test]
fn single_failure_renders_as_itself() {
    let err = fail("disk full");
    assert_eq!(render(err.as_ref()), "disk full");
    assert_eq!(err.unwrap().to_string(), "disk full");
}

#[test]
fn list_renders_one_leaf_per_line() {
    let err = merge([fail("ab"), fail("cd")]);
    assert_eq!(render(err.as_ref()), "ab\ncd");
}

#[test]
fn list_rendering_joins_individual_renderings() {
    let a = fail("first");
    let b = fail("second");
    let joined = format!("{}\n{}", render(a.as_ref()), render(b.as_ref()));

    let err = merge([a, b]);
    assert_eq!(render(err.as_ref()), joined);
}

#[test]
fn nested_list_renders_in_walk_order() {
    let inner = merge([fail("b"), fail("c")]);
    let err = merge([fail("a"), inner, fail("d")]);
    assert_eq!(render(err.as_ref()), "a\nb\nc\nd");
}

#[test]
fn absent_renders_empty() {
    assert_eq!(render::<TestError>(None), "");
}

#[test]
fn list_display_matches_failure_display() {
    let err = merge([fail("a"), fail("b")]).unwrap();
    let list = err.as_list().unwrap();
    assert_eq!(list.to_string(), err.to_string());
}

#[test]
fn failure_is_usable_as_std_error() {
    fn report(err: &dyn Error) -> String {
        err.to_string()
    }

    let err = merge([fail("write failed"), fail("close failed")]).unwrap();
    assert_eq!(report(&err), "write failed\nclose failed");
    assert!(err.source().is_none());

    let boxed: Box<dyn Error> = Box::new(err);
    assert!(boxed.to_string().starts_with("write failed"));
}

#[derive(Debug)]
struct Wrapped(std::io::Error);

impl std::fmt::Display for Wrapped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("wrapped")
    }
}

impl Error for Wrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn single_failure_forwards_source() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "pipe closed");
    let err = Failure::from(Wrapped(io));

    assert_eq!(err.source().map(|s| s.to_string()), Some("pipe closed".to_string()));
}

#[test]
fn map_keeps_shape_and_order() {
    let err = merge([fail("a"), fail("b")]).unwrap();
    let lengths = err.map(|e| e.0.len() * 10);

    assert!(lengths.is_list());
    assert_eq!(lengths.into_vec(), [10, 10]);

    let single = Failure::from(TestError::new("abc")).map(|e| e.0);
    assert_eq!(single, Failure::Single("abc".to_string()));
}

#[test]
fn question_mark_lifts_bare_errors() {
    fn step() -> Result<(), TestError> {
        Err(TestError::new("step failed"))
    }

    fn run() -> Result<(), Failure<TestError>> {
        step()?;
        Ok(())
    }

    assert_eq!(run(), Err(Failure::Single(TestError::new("step failed"))));
}

#[test]
fn single_failure_into_vec_holds_only_that_error() {
    let errors = Failure::from(TestError::new("only")).into_vec();
    assert_eq!(errors, [TestError::new("only")]);
    assert_eq!(errors.len(), 1);
}
