pub mod cards;
pub mod stats;
pub mod study;
