#![doc = include_str!("../README.md")]

mod item;
pub mod prompt;
mod report;

pub use item::{Item, SLOT_CAPACITY};
pub use report::Report;
