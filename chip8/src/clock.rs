use std::time::Duration;

use emu8_core::constants::TIMER_FREQUENCY;

/// Paces the interpreter.
///
/// The CPU runs at `frequency` instructions per second and the timers tick at
/// `TIMER_FREQUENCY`, approximated as once every `frequency / TIMER_FREQUENCY` cycles.
pub struct Clock {
    cycle_time: Duration,
    cycles_per_tick: u32,
    cycles_until_tick: u32,
}

impl Clock {
    pub fn new(frequency: u32) -> Self {
        let frequency = frequency.max(1);
        let cycles_per_tick = (frequency / TIMER_FREQUENCY).max(1);
        Clock {
            cycle_time: Duration::from_secs(1) / frequency,
            cycles_per_tick,
            cycles_until_tick: cycles_per_tick,
        }
    }

    /// Wall-clock time a single instruction should take.
    pub fn cycle_time(&self) -> Duration {
        self.cycle_time
    }

    /// Counts off one CPU cycle; returns whether the timers are due a tick.
    pub fn cycle(&mut self) -> bool {
        self.cycles_until_tick -= 1;
        if self.cycles_until_tick == 0 {
            self.cycles_until_tick = self.cycles_per_tick;
            true
        } else {
            false
        }
    }
}
