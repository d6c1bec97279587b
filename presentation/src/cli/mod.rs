//! Command-line interface: argument definitions and one-shot requests.

pub mod commands;
pub mod one_shot;
