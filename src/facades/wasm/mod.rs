pub mod bell;

pub use bell::{start, start_in, BellSession};
