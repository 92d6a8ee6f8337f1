//! Debate entities and derived views

pub mod dilemma;
pub mod rounds;
pub mod transcript;
pub mod verdict;
