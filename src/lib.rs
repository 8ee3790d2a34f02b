//! Grouped `perf_event_open` counters around a timed region.
//!
//! A [`Profiler`][profiler::Profiler] selects a named preset of counters,
//! registers them on a [`Stopwatch`][stopwatch::Stopwatch], and prints wall
//! clock time, process CPU time and raw counter values for one
//! start/stop bracket.
//!
//! ## Example
//!
//! ```rust
//! use perf_stopwatch::event::names;
//! use perf_stopwatch::stopwatch::{AnyStopwatch, Stopwatch};
//!
//! // Hardware counters where the kernel supports them, clocks otherwise.
//! let mut stopwatch = AnyStopwatch::probe();
//! if let Err(e) = stopwatch.add_counter(names::INSTRUCTIONS) {
//!     eprintln!("{}", e);
//! }
//!
//! stopwatch.start().unwrap();
//! fn fib(n: usize) -> usize {
//!     match n {
//!         0 => 0,
//!         1 => 1,
//!         n => fib(n - 1) + fib(n - 2),
//!     }
//! }
//! std::hint::black_box(fib(20));
//! stopwatch.stop().unwrap();
//!
//! print!("{}", stopwatch.get_counters().unwrap());
//! ```
//!
//! ## Degrading
//!
//! Counters the kernel refuses are dropped and the rest keep working. When
//! kernel-space counting is not permitted, every counter is reopened for user
//! space only and the report carries `exclude_kernel = 1`. Without
//! `perf_event_open` at all, only the clocks are reported.

pub mod config;
pub mod count;
pub mod error;
pub mod event;
mod ffi;
pub mod profiler;
pub mod stopwatch;

pub use error::{Error, Result};
