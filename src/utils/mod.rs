pub mod liveness;
pub mod panic_hook;
