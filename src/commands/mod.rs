//! One-shot commands

pub mod list;
pub mod render;
