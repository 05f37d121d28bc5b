pub mod chain;
pub mod names;
pub mod search;
