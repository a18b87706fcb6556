use criterion::Criterion;
use error_merge::{append, Failure};
use std::time::Duration;

/// Number of leaves in the lists walked by the traversal benches.
pub const LIST_LEN: usize = 40;
/// How many leaves a bounded walk is allowed to see.
pub const ATTENTION_SPAN: usize = 30;

pub fn numbered(count: usize) -> Option<Failure<String>> {
    let mut list = None;
    for n in 1..=count {
        list = append(list, Some(Failure::from(format!("number {n}"))));
    }
    list
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
