//! Library side of the `autoimport` binary.

pub mod args;
#[cfg(test)]
#[path = "tests/args_tests.rs"]
mod args_tests;

pub mod driver;
#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod driver_tests;

pub mod reporter;
