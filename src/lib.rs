//! # Behavioral Patterns in Rust
//!
//! Three classic behavioral design patterns, each in its own module, wired
//! together by a small demo binary:
//!
//! ## Strategy (`strategy`)
//! - A family of interchangeable behaviors behind one trait
//! - A `Context` that owns the selected behavior and delegates to it
//! - Closures as ad-hoc strategies via a blanket impl
//!
//! ## Chain of Responsibility (`chain`)
//! - Handler nodes linked by non-owning `&dyn Handler` references
//! - Each node processes its own request token or forwards down the chain
//! - Falling off the end reports "no handler" instead of dropping the request
//!
//! ## Iterator (`iterator`)
//! - A `Collection<T>` that never exposes its internal storage
//! - A cursor with the classic move_next / current / reset protocol
//! - The same cursor doubles as a `std::iter::Iterator`, so `for` loops work
//!
//! Run the demo with: `cargo run`

pub mod chain;
pub mod iterator;
pub mod strategy;
