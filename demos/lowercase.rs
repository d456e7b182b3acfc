//! Collecting errors while still producing a result.
//!
//! **Run this example:** `cargo run --example lowercase`
//!
//! Every word is lowercased, and each word that was not already lowercase
//! is recorded as an error. The output is both the full list of lowercased
//! words and one error describing every offending word.

use errcollect::Collector;

#[derive(Debug, thiserror::Error)]
#[error("string {0} wasn't all lowercase")]
struct NotLowercase(String);

fn make_lower_case(input: &str) -> (String, Option<NotLowercase>) {
    let lowered = input.to_lowercase();
    if lowered == input {
        (lowered, None)
    } else {
        (lowered, Some(NotLowercase(input.to_string())))
    }
}

fn main() {
    let list = ["beep", "boOp", "Baap"];

    let mut err = Collector::new();
    let mut result = Vec::new();
    for word in list {
        let (lowered, lc_err) = make_lower_case(word);
        err.collect(lc_err);
        result.push(lowered);
    }

    if let Some(err) = err.into_error() {
        println!("got error: {err}");
    }
    println!("lowercased strings: {}", result.join(", "));
}
