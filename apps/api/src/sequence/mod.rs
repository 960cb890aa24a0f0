//! Sequence Request Handler — the single logical component of Dripline.
//!
//! Turns validated form fields into a rendered prompt, issues exactly one
//! upstream completion call, and normalizes the returned text into the
//! response contract: a strictly parsed email sequence or a pass-through
//! single email.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
