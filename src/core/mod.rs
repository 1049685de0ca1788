pub mod chart;
pub mod clock;
pub mod console;
pub mod display;
pub mod export;
pub mod journal;
pub mod store;
pub mod ticker;
