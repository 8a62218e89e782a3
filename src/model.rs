pub mod business;
pub mod display;
