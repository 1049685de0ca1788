pub mod activity_total;
pub mod running;
pub mod session;
