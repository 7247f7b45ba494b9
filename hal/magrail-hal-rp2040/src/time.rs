//! Time source

use embassy_time::Instant;

/// Millisecond clock backed by the embassy time driver
///
/// Truncates the 64-bit tick count; the result wraps every ~49 days.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl magrail_hal::Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
