pub mod calendar;
pub mod judge;
pub mod response;
