pub mod atomic;
pub mod input;
