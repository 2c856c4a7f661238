/// Global logger instance, picked at compile time for the build target.

use crate::ports::LoggerPort;
use once_cell::sync::Lazy;

#[cfg(target_arch = "wasm32")]
use crate::adapters::wasm::ConsoleLogger;
#[cfg(not(target_arch = "wasm32"))]
use crate::adapters::native::ConsoleLogger;

static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
