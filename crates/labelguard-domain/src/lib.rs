//! Pure label policy evaluation (no IO).
//!
//! Input: a compiled [`policy::LabelPolicy`] and the [`model::LabelSet`] extracted elsewhere.
//! Output: a [`verdict::Verdict`].

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod verdict;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
