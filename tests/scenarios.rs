//! End-to-end behavior of [`Collector`] as seen by code that returns it.
//!
//! The scenarios cover:
//! - the "no error" status of empty collectors, including after absent values
//!   and empty nested collectors
//! - message rendering for one and several errors
//! - flattening of nested collectors at any depth
//! - using a collector as the error of a function that runs several steps

use std::{fmt, io};

use errcollect::prelude::*;

#[derive(Debug, thiserror::Error)]
#[error("{0} is not an even number")]
struct OddNumber(u32);

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("string {input} wasn't all lowercase")]
struct NotLowercase {
    input: String,
}

fn absent() -> Option<io::Error> {
    None
}

fn messages(collector: &Collector) -> Vec<String> {
    collector.iter().map(|e| e.to_string()).collect()
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

type Step = fn() -> Option<BoxedError>;

fn run(steps: &[Step]) -> Collector {
    let mut errors = Collector::new();
    for step in steps {
        errors.collect(step());
    }
    errors
}

fn no_error() -> Option<BoxedError> {
    None
}

fn beep() -> Option<BoxedError> {
    Some("beep".into())
}

fn boop() -> Option<BoxedError> {
    Some("boop".into())
}

fn baap() -> Option<BoxedError> {
    Some("baap".into())
}

fn nested_collector() -> Option<BoxedError> {
    let mut collector = Collector::new();
    let mut sub_collector = Collector::new();
    collector.push("beep");
    collector.push("boop");
    sub_collector.push("biip");
    sub_collector.collect(absent());
    collector.push(sub_collector);
    Some(Box::new(collector))
}

fn empty_nested_collector() -> Option<BoxedError> {
    let mut collector = Collector::new();
    let sub_collector = Collector::new();
    collector.push(sub_collector);
    Some(Box::new(collector))
}

#[test]
fn test_default_scenario() {
    let mut err = Collector::new();
    assert!(err.is_empty());

    err.collect(absent());
    assert!(err.is_empty());
    assert!(err.clone().into_error().is_none());

    err.collect(Some(io::Error::other("this is a test error")));
    assert!(!err.is_empty());
    assert_eq!(err.to_string(), "collected errors: this is a test error");

    err.collect(Some(io::Error::other("another one")));
    assert_eq!(
        err.to_string(),
        "collected errors: this is a test error, another one"
    );
}

#[test]
fn test_error_returning_function() {
    fn tester(nums: &[u32]) -> Result<(), Collector> {
        let mut err = Collector::new();
        for &num in nums {
            if num % 2 != 0 {
                err.push(OddNumber(num));
            }
        }
        err.into_result()
    }

    assert!(tester(&[2, 4, 6]).is_ok());

    let err = tester(&[1, 3, 5]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "collected errors: 1 is not an even number, 3 is not an even number, 5 is not an even number"
    );
}

#[test]
fn test_no_steps() {
    let errors = run(&[]);
    assert!(errors.into_error().is_none());
}

#[test]
fn test_only_absent_steps() {
    let errors = run(&[no_error, no_error, no_error]);
    assert!(errors.is_empty());
    assert!(errors.into_result().is_ok());
}

#[test]
fn test_one_failing_step() {
    let errors = run(&[beep, no_error, no_error]);
    assert_eq!(errors.to_string(), "collected errors: beep");
}

#[test]
fn test_two_failing_steps() {
    let errors = run(&[beep, no_error, boop]);
    assert_eq!(errors.to_string(), "collected errors: beep, boop");
}

#[test]
fn test_nested_collector_step() {
    let errors = run(&[nested_collector, no_error, baap]);
    assert_eq!(messages(&errors), ["beep", "boop", "biip", "baap"]);
    assert_eq!(errors.to_string(), "collected errors: beep, boop, biip, baap");
}

#[test]
fn test_empty_nested_collector_step() {
    let errors = run(&[empty_nested_collector, no_error, no_error]);
    assert!(errors.is_empty());
    assert!(errors.into_error().is_none());
}

#[test]
fn test_nested_collectors_merge_in_place() {
    let mut c1 = Collector::new();
    let mut c2 = Collector::new();
    c1.push("beep");
    c1.push("boop");
    c2.push("biip");
    c2.collect(absent());
    c1.collect(Some(c2));
    assert_eq!(c1.to_string(), "collected errors: beep, boop, biip");
}

#[test]
fn test_merged_collector_stays_flat_after_many_levels() {
    let mut collector = Collector::new();
    collector.push("leaf 0");
    for depth in 1..10 {
        let mut parent = Collector::new();
        parent.push(format!("leaf {depth}"));
        parent.push(collector);
        collector = parent;
    }

    assert_eq!(collector.len(), 10);
    assert_eq!(messages(&collector).first().map(String::as_str), Some("leaf 9"));
    assert_eq!(messages(&collector).last().map(String::as_str), Some("leaf 0"));
    assert!(collector.iter().all(|e| Collector::as_collector(e).is_none()));
}

#[test]
fn test_lowercase_example() {
    fn make_lower_case(input: &str) -> (String, Option<NotLowercase>) {
        let lowered = input.to_lowercase();
        if lowered != input {
            (
                lowered,
                Some(NotLowercase {
                    input: input.to_string(),
                }),
            )
        } else {
            (lowered, None)
        }
    }

    let mut err = Collector::new();
    let mut result = Vec::new();
    for word in ["beep", "boOp", "Baap"] {
        let (lowered, lc_err) = make_lower_case(word);
        err.collect(lc_err);
        result.push(lowered);
    }

    assert_eq!(
        err.to_string(),
        "collected errors: string boOp wasn't all lowercase, string Baap wasn't all lowercase"
    );
    assert_eq!(result.join(", "), "beep, boop, baap");
}

#[test]
fn test_collector_as_boxed_error() {
    fn fallible() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut errors = Collector::new();
        errors.push(fmt::Error);
        errors.into_result()?;
        Ok(())
    }

    let err = fallible().unwrap_err();
    let collector = Collector::as_collector(&*err).unwrap();
    assert_eq!(
        collector.to_string(),
        "collected errors: an error occurred when formatting an argument"
    );
}

#[test]
fn test_per_branch_collectors_merged_afterwards() {
    let branches: Vec<Collector> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..3)
            .map(|branch| {
                scope.spawn(move || {
                    let mut errors = Collector::new();
                    errors.push(format!("branch {branch} failed"));
                    errors
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let mut merged = Collector::new();
    merged.extend(branches);
    assert_eq!(
        merged.to_string(),
        "collected errors: branch 0 failed, branch 1 failed, branch 2 failed"
    );
}
