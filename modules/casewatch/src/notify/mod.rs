pub mod backend;
pub mod noop;
pub mod telegram;
