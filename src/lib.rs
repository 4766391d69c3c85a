//! A Poisson-based football match-outcome forecasting engine. Derives per-team
//! attack/defence ratings from historical results, blends them with recent form,
//! and produces a full scoreline probability distribution plus win/draw/loss
//! probabilities for a given fixture.

pub mod data;
pub mod domain;
pub mod factorial;
pub mod forecast;
pub mod form;
pub mod linear;
pub mod poisson;
pub mod print;
pub mod probs;
pub mod projection;
pub mod ratings;
pub mod scoregrid;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
