//! Console output: formatting and the [`QuoteDisplay`](quotebook_application::QuoteDisplay) adapter

pub mod console;
pub mod display;
