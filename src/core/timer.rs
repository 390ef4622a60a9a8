use std::time::{
    Duration,
    Instant,
};

const TICK: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Expired,
}

/// Countdown state machine for a study session.
///
/// The GUI drives it by calling [`CountdownTimer::advance`] every frame with
/// the current wall clock. Expiry is edge-triggered: the `Expired` event is
/// returned on the tick that reaches zero and never again while the timer
/// sits at zero.
#[derive(Debug)]
pub struct CountdownTimer {
    configured_secs: u32,
    remaining_secs: u32,
    running: bool,
    next_tick: Option<Instant>,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self { configured_secs: 0, remaining_secs: 0, running: false, next_tick: None }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn configured_secs(&self) -> u32 {
        self.configured_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn minutes(&self) -> u32 {
        self.remaining_secs / 60
    }

    pub fn seconds(&self) -> u32 {
        self.remaining_secs % 60
    }

    /// Replace the minutes part of the duration, keeping the seconds part.
    /// Ignored while the timer is running. Saturates at `u32::MAX` seconds
    /// rather than overflowing on absurd entries.
    pub fn set_minutes(&mut self, minutes: u32) {
        if self.running {
            return;
        }
        self.set_total(minutes.saturating_mul(60).saturating_add(self.remaining_secs % 60));
    }

    /// Replace the seconds part of the duration, keeping the minutes part.
    /// Ignored while the timer is running. Saturates at `u32::MAX` seconds
    /// rather than overflowing on absurd entries.
    pub fn set_seconds(&mut self, seconds: u32) {
        if self.running {
            return;
        }
        self.set_total((self.remaining_secs / 60).saturating_mul(60).saturating_add(seconds));
    }

    fn set_total(&mut self, total_secs: u32) {
        self.configured_secs = total_secs;
        self.remaining_secs = total_secs;
    }

    /// Start counting down. A no-op at zero remaining.
    pub fn start(&mut self) {
        if self.running || self.remaining_secs == 0 {
            return;
        }
        self.running = true;
        // Re-anchored from the wall clock on the next advance() call.
        self.next_tick = None;
    }

    pub fn pause(&mut self) {
        self.running = false;
        self.next_tick = None;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Back to the configured duration, stopped.
    pub fn reset(&mut self) {
        self.remaining_secs = self.configured_secs;
        self.running = false;
        self.next_tick = None;
    }

    /// Advance the timer to `now`, consuming every whole second that elapsed
    /// since the last call. Frames longer than a second catch up instead of
    /// losing ticks.
    pub fn advance(&mut self, now: Instant) -> Option<TimerEvent> {
        if !self.running {
            return None;
        }

        let next = *self.next_tick.get_or_insert(now + TICK);
        if now < next {
            return None;
        }

        let elapsed_ticks = 1 + (now - next).as_secs() as u32;
        for _ in 0..elapsed_ticks {
            if let Some(event) = self.tick_once() {
                self.next_tick = None;
                return Some(event);
            }
        }
        self.next_tick = Some(next + TICK * elapsed_ticks);
        None
    }

    /// One second elapses. Reaching zero stops the timer and reports expiry.
    pub fn tick_once(&mut self) -> Option<TimerEvent> {
        if !self.running || self.remaining_secs == 0 {
            return None;
        }

        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            self.next_tick = None;
            return Some(TimerEvent::Expired);
        }
        None
    }

    /// "M:SS" readout, e.g. 90 seconds left renders as "1:30".
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.minutes(), self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_minutes_preserves_seconds() {
        let mut timer = CountdownTimer::new();
        timer.set_seconds(45);
        timer.set_minutes(2);

        assert_eq!(timer.remaining_secs(), 2 * 60 + 45);
        assert_eq!(timer.configured_secs(), 2 * 60 + 45);
    }

    #[test]
    fn editing_seconds_preserves_minutes() {
        let mut timer = CountdownTimer::new();
        timer.set_minutes(5);
        timer.set_seconds(10);

        assert_eq!(timer.remaining_secs(), 5 * 60 + 10);
        assert_eq!(timer.minutes(), 5);
        assert_eq!(timer.seconds(), 10);
    }

    #[test]
    fn huge_duration_entries_saturate_instead_of_overflowing() {
        // "100000000" minutes is a valid u32 entry in the duration field.
        let mut timer = CountdownTimer::new();
        timer.set_minutes(100_000_000);
        assert_eq!(timer.remaining_secs(), u32::MAX);
        assert_eq!(timer.configured_secs(), u32::MAX);
        assert!(!timer.is_running());

        let mut timer = CountdownTimer::new();
        timer.set_seconds(u32::MAX);
        timer.set_minutes(1);
        assert_eq!(timer.remaining_secs(), 60 + u32::MAX % 60);

        let mut timer = CountdownTimer::new();
        timer.set_minutes(u32::MAX);
        timer.set_seconds(u32::MAX);
        assert_eq!(timer.remaining_secs(), u32::MAX);
    }

    #[test]
    fn duration_edits_ignored_while_running() {
        let mut timer = CountdownTimer::new();
        timer.set_seconds(30);
        timer.start();

        timer.set_minutes(10);
        timer.set_seconds(59);
        assert_eq!(timer.remaining_secs(), 30);
    }

    #[test]
    fn starting_at_zero_is_a_no_op() {
        let mut timer = CountdownTimer::new();
        timer.start();
        assert!(!timer.is_running());

        timer.toggle();
        assert!(!timer.is_running());
    }

    #[test]
    fn ticks_count_down_and_expiry_fires_once() {
        let mut timer = CountdownTimer::new();
        timer.set_seconds(3);
        timer.start();

        assert_eq!(timer.tick_once(), None);
        assert_eq!(timer.remaining_secs(), 2);
        assert_eq!(timer.tick_once(), None);
        assert_eq!(timer.tick_once(), Some(TimerEvent::Expired));
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 0);

        // Level at zero: no repeated expiry events.
        assert_eq!(timer.tick_once(), None);
        assert_eq!(timer.tick_once(), None);
    }

    #[test]
    fn advance_respects_wall_clock() {
        let mut timer = CountdownTimer::new();
        timer.set_seconds(5);
        timer.start();

        let t0 = Instant::now();
        // Anchors the first tick; nothing has elapsed yet.
        assert_eq!(timer.advance(t0), None);
        assert_eq!(timer.remaining_secs(), 5);

        // Half a second in: still no tick.
        assert_eq!(timer.advance(t0 + Duration::from_millis(500)), None);
        assert_eq!(timer.remaining_secs(), 5);

        // One second in: one tick.
        assert_eq!(timer.advance(t0 + Duration::from_millis(1100)), None);
        assert_eq!(timer.remaining_secs(), 4);
    }

    #[test]
    fn advance_catches_up_after_a_long_gap() {
        let mut timer = CountdownTimer::new();
        timer.set_seconds(10);
        timer.start();

        let t0 = Instant::now();
        timer.advance(t0);
        assert_eq!(timer.advance(t0 + Duration::from_secs(3)), None);
        assert_eq!(timer.remaining_secs(), 7);
    }

    #[test]
    fn advance_expires_mid_catchup() {
        let mut timer = CountdownTimer::new();
        timer.set_seconds(2);
        timer.start();

        let t0 = Instant::now();
        timer.advance(t0);
        assert_eq!(timer.advance(t0 + Duration::from_secs(30)), Some(TimerEvent::Expired));
        assert_eq!(timer.remaining_secs(), 0);
        assert!(!timer.is_running());

        // Later frames at zero stay quiet.
        assert_eq!(timer.advance(t0 + Duration::from_secs(60)), None);
    }

    #[test]
    fn reset_restores_configured_duration() {
        let mut timer = CountdownTimer::new();
        timer.set_minutes(1);
        timer.start();
        timer.tick_once();
        timer.tick_once();
        assert_eq!(timer.remaining_secs(), 58);

        timer.reset();
        assert!(!timer.is_running());
        assert_eq!(timer.remaining_secs(), 60);

        // Reset from expired state as well.
        let mut timer = CountdownTimer::new();
        timer.set_seconds(1);
        timer.start();
        assert_eq!(timer.tick_once(), Some(TimerEvent::Expired));
        timer.reset();
        assert_eq!(timer.remaining_secs(), 1);
        assert!(!timer.is_running());
    }

    #[test]
    fn display_pads_seconds() {
        let mut timer = CountdownTimer::new();
        timer.set_minutes(1);
        timer.set_seconds(5);
        assert_eq!(timer.display(), "1:05");

        timer.set_minutes(0);
        assert_eq!(timer.display(), "0:05");
    }
}
