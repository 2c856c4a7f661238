/// Platform - hands out the process-wide ports the player depends on.
///
/// Only the logger lives here; the audio handle and the host application are
/// owned by the player and passed in explicitly at startup.

use crate::ports::LoggerPort;

#[derive(Clone, Copy)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
}

impl Platform {
    /// Creates a Platform with the default logger for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
        }
    }

    /// Creates a Platform that reports to the given logger instead.
    pub fn with_logger(logger: &'static dyn LoggerPort) -> Self {
        Self { logger }
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
