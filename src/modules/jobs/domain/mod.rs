pub mod collector;
pub mod entities;
