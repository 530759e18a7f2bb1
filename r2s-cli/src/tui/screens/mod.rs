//! Screen modules — each exposes render(), handle_key(), and footer_hints().

pub mod form;
pub mod help;
pub mod result;
