//! Debounced show/hide for hover-triggered overlays.
//!
//! The machine never sleeps on its own: it asks the renderer to schedule or cancel timers and
//! later receives [`HoverEvent::TimerElapsed`] with the token it handed out. Tokens that are no
//! longer pending are ignored, so a late-firing browser timeout cannot reopen or close a panel.

use std::time::Duration;

/// Default delay before a hover opens the overlay.
pub const DEFAULT_SHOW_DELAY: Duration = Duration::from_millis(200);
/// Default delay before leaving the trigger closes the overlay.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Identifies one scheduled timer.
pub struct TimerToken(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Show(TimerToken),
    Hide(TimerToken),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer and timer inputs for [`HoverIntent::handle`].
pub enum HoverEvent {
    /// Pointer entered the trigger element.
    TriggerEnter,
    /// Pointer left the trigger element.
    TriggerLeave,
    /// Pointer entered the floating content.
    ContentEnter,
    /// Pointer left the floating content.
    ContentLeave,
    /// A previously scheduled timer fired.
    TimerElapsed(TimerToken),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Work the renderer must perform after a [`HoverEvent`].
pub enum HoverEffect {
    /// Start a timer and report it back as [`HoverEvent::TimerElapsed`].
    Schedule {
        /// Token to echo back.
        token: TimerToken,
        /// How long to wait.
        delay: Duration,
    },
    /// Cancel the timer with this token.
    Cancel(TimerToken),
    /// Make the overlay visible.
    Show,
    /// Hide the overlay.
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Hover debounce state for one overlay instance.
pub struct HoverIntent {
    show_delay: Duration,
    hide_delay: Duration,
    pending: Option<Pending>,
    next_token: u64,
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(DEFAULT_SHOW_DELAY, DEFAULT_HIDE_DELAY)
    }
}

impl HoverIntent {
    /// Creates a machine with independent show and hide delays.
    pub fn new(show_delay: Duration, hide_delay: Duration) -> Self {
        Self {
            show_delay,
            hide_delay,
            pending: None,
            next_token: 0,
        }
    }

    /// Delay applied before showing.
    pub fn show_delay(&self) -> Duration {
        self.show_delay
    }

    /// Delay applied before hiding.
    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    /// Whether a hide timer is outstanding.
    pub fn hide_pending(&self) -> bool {
        matches!(self.pending, Some(Pending::Hide(_)))
    }

    /// Whether a show timer is outstanding.
    pub fn show_pending(&self) -> bool {
        matches!(self.pending, Some(Pending::Show(_)))
    }

    /// Processes one event given the overlay's current visibility.
    pub fn handle(&mut self, is_open: bool, event: HoverEvent) -> Vec<HoverEffect> {
        let mut effects = Vec::new();
        match event {
            HoverEvent::TriggerEnter | HoverEvent::ContentEnter => {
                if let Some(Pending::Hide(token)) = self.pending {
                    self.pending = None;
                    effects.push(HoverEffect::Cancel(token));
                }
                let from_trigger = matches!(event, HoverEvent::TriggerEnter);
                if from_trigger && !is_open && self.pending.is_none() {
                    self.schedule(true, &mut effects);
                }
            }
            HoverEvent::TriggerLeave | HoverEvent::ContentLeave => {
                if let Some(Pending::Show(token)) = self.pending {
                    self.pending = None;
                    effects.push(HoverEffect::Cancel(token));
                }
                if is_open && self.pending.is_none() {
                    self.schedule(false, &mut effects);
                }
            }
            HoverEvent::TimerElapsed(token) => match self.pending {
                Some(Pending::Show(pending)) if pending == token => {
                    self.pending = None;
                    effects.push(HoverEffect::Show);
                }
                Some(Pending::Hide(pending)) if pending == token => {
                    self.pending = None;
                    effects.push(HoverEffect::Hide);
                }
                _ => {}
            },
        }
        effects
    }

    /// Drops any outstanding timer, returning the cancellation to perform.
    pub fn reset(&mut self) -> Option<HoverEffect> {
        self.pending.take().map(|pending| match pending {
            Pending::Show(token) | Pending::Hide(token) => HoverEffect::Cancel(token),
        })
    }

    fn schedule(&mut self, show: bool, effects: &mut Vec<HoverEffect>) {
        let delay = if show { self.show_delay } else { self.hide_delay };
        if delay.is_zero() {
            effects.push(if show { HoverEffect::Show } else { HoverEffect::Hide });
            return;
        }
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending = Some(if show {
            Pending::Show(token)
        } else {
            Pending::Hide(token)
        });
        effects.push(HoverEffect::Schedule { token, delay });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scheduled(effects: &[HoverEffect]) -> TimerToken {
        effects
            .iter()
            .find_map(|effect| match effect {
                HoverEffect::Schedule { token, .. } => Some(*token),
                _ => None,
            })
            .expect("scheduled timer")
    }

    #[test]
    fn hover_shows_after_show_delay() {
        let mut intent = HoverIntent::default();
        let effects = intent.handle(false, HoverEvent::TriggerEnter);
        assert_eq!(
            effects,
            vec![HoverEffect::Schedule {
                token: TimerToken(1),
                delay: DEFAULT_SHOW_DELAY
            }]
        );
        assert_eq!(
            intent.handle(false, HoverEvent::TimerElapsed(TimerToken(1))),
            vec![HoverEffect::Show]
        );
    }

    #[test]
    fn leaving_before_show_delay_cancels_show() {
        let mut intent = HoverIntent::default();
        let token = scheduled(&intent.handle(false, HoverEvent::TriggerEnter));
        assert_eq!(
            intent.handle(false, HoverEvent::TriggerLeave),
            vec![HoverEffect::Cancel(token)]
        );
        assert!(intent
            .handle(false, HoverEvent::TimerElapsed(token))
            .is_empty());
    }

    #[test]
    fn entering_content_cancels_pending_hide() {
        let mut intent = HoverIntent::default();
        let hide = scheduled(&intent.handle(true, HoverEvent::TriggerLeave));
        assert!(intent.hide_pending());

        assert_eq!(
            intent.handle(true, HoverEvent::ContentEnter),
            vec![HoverEffect::Cancel(hide)]
        );
        assert!(!intent.hide_pending());
        assert!(intent.handle(true, HoverEvent::TimerElapsed(hide)).is_empty());
    }

    #[test]
    fn leaving_content_schedules_hide_with_hide_delay() {
        let mut intent = HoverIntent::new(Duration::from_millis(50), Duration::from_millis(300));
        let effects = intent.handle(true, HoverEvent::ContentLeave);
        assert_eq!(
            effects,
            vec![HoverEffect::Schedule {
                token: TimerToken(1),
                delay: Duration::from_millis(300)
            }]
        );
        assert_eq!(
            intent.handle(true, HoverEvent::TimerElapsed(TimerToken(1))),
            vec![HoverEffect::Hide]
        );
    }

    #[test]
    fn zero_delays_act_immediately() {
        let mut intent = HoverIntent::new(Duration::ZERO, Duration::ZERO);
        assert_eq!(
            intent.handle(false, HoverEvent::TriggerEnter),
            vec![HoverEffect::Show]
        );
        assert_eq!(
            intent.handle(true, HoverEvent::TriggerLeave),
            vec![HoverEffect::Hide]
        );
    }

    #[test]
    fn reset_cancels_outstanding_timer() {
        let mut intent = HoverIntent::default();
        let token = scheduled(&intent.handle(false, HoverEvent::TriggerEnter));
        assert_eq!(intent.reset(), Some(HoverEffect::Cancel(token)));
        assert_eq!(intent.reset(), None);
    }
}
