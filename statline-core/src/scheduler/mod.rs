//! Cooperative display scheduler
//!
//! The scheduler owns every piece of runtime state: current mode,
//! latest snapshot, timers and the animation cursor. The firmware calls
//! [`Scheduler::step`] once per loop iteration with one clock sample and
//! whatever input arrived; the returned [`Step`] says what to draw and
//! what to do with the buzzer.
//!
//! Within a step the order is fixed: input, then transitions, then the
//! render decision, so a render always reflects the input of the same
//! iteration.

mod step;

pub use step::{Input, Rejected, Render, Step};

use statline_protocol::{parse, Snapshot};

use crate::alert::{AlertOutput, Tone};
use crate::animation::AnimationPlayer;
use crate::config::{Profile, SCREEN_WIDTH};
use crate::debounce::Debouncer;
use crate::mode::{Event, Mode};
use crate::pomodoro::{PomodoroSession, PomodoroView};

/// Runtime state of the display
#[derive(Debug, Clone)]
pub struct Scheduler {
    profile: Profile,
    mode: Mode,
    snapshot: Snapshot,
    /// When the stats screen was last (re)entered
    stats_entered_at: u32,
    /// Present only while the Pomodoro screen is up
    pomodoro: Option<PomodoroSession>,
    /// Last Pomodoro view drawn
    last_pomodoro: Option<PomodoroView>,
    animation: AnimationPlayer,
    debouncer: Debouncer,
    /// Completion chime last requested and when
    chime: Option<(u32, Tone)>,
    /// Mode changed since the last render
    needs_full_redraw: bool,
}

impl Scheduler {
    /// Create a scheduler starting on the stats screen at `now`
    pub fn new(profile: Profile, frame_count: usize, now: u32) -> Self {
        Self {
            profile,
            mode: Mode::Stats,
            snapshot: Snapshot::initial(),
            stats_entered_at: now,
            pomodoro: None,
            last_pomodoro: None,
            animation: AnimationPlayer::new(frame_count, profile.timing.frame_interval_ms),
            debouncer: Debouncer::new(profile.timing.debounce_ms),
            chime: None,
            needs_full_redraw: true,
        }
    }

    /// Current mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Latest accepted metrics
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Active profile
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Running Pomodoro session, if any
    pub fn pomodoro(&self) -> Option<&PomodoroSession> {
        self.pomodoro.as_ref()
    }

    /// Animation frame currently shown
    pub fn animation_frame(&self) -> usize {
        self.animation.current()
    }

    /// Run one loop iteration
    pub fn step(&mut self, now: u32, input: Input<'_>) -> Step {
        let mut step = Step::default();
        let mut stats_updated = false;

        // Input
        if self.debouncer.update(input.button_down, now) {
            self.apply(Event::ButtonPressed, now);
        }

        if let Some(line) = input.line {
            let parsed = line
                .map_err(Rejected::Line)
                .and_then(|line| parse(line, self.profile.line_format).map_err(Rejected::Parse));

            match parsed {
                Ok(snapshot) => {
                    let changed = snapshot.differs_from(&self.snapshot);
                    if changed || self.profile.redraw_unchanged {
                        let alert = self.profile.alert.evaluate(snapshot.ram_usage());
                        // A quiet reading must not cut the chime short
                        if !(alert == AlertOutput::Silence && self.chime_sounding(now)) {
                            step.alert = Some(alert);
                        }
                        stats_updated = true;
                    }
                    self.snapshot = snapshot;
                    self.apply(Event::StatsReceived, now);
                }
                Err(rejected) => step.rejected = Some(rejected),
            }
        }

        // Timers
        if self.mode == Mode::Stats
            && now.wrapping_sub(self.stats_entered_at) >= self.profile.timing.stats_hold_ms
        {
            self.apply(Event::StatsHoldElapsed, now);
        }

        if let Some(session) = self.pomodoro.as_mut() {
            if session.poll_finished(now) {
                step.chime = self.profile.completion_chime;
                self.chime = step.chime.map(|tone| (now, tone));
            }
        }

        // Render
        step.render = self.render(now, stats_updated);
        step
    }

    /// Whether the completion chime is still playing at `now`
    fn chime_sounding(&self, now: u32) -> bool {
        self.chime.map_or(false, |(started, tone)| {
            now.wrapping_sub(started) < u32::from(tone.duration_ms)
        })
    }

    /// Feed an event through the state machine and update timers
    fn apply(&mut self, event: Event, now: u32) {
        let previous = self.mode;
        let next = previous.transition(event, &self.profile);

        match next {
            Mode::Stats => self.stats_entered_at = now,
            Mode::Pomodoro { .. } if !previous.is_pomodoro() => {
                self.pomodoro = Some(PomodoroSession::start(now, self.profile.timing.pomodoro_ms));
                self.last_pomodoro = None;
            }
            _ => {}
        }

        if !next.is_pomodoro() {
            self.pomodoro = None;
        }

        if !next.same_screen(&previous) {
            self.needs_full_redraw = true;
        }

        self.mode = next;
    }

    /// Decide what, if anything, to draw this iteration
    fn render(&mut self, now: u32, stats_updated: bool) -> Option<Render> {
        let full = core::mem::take(&mut self.needs_full_redraw);

        match self.mode {
            Mode::Stats => (full || stats_updated).then_some(Render::Stats),
            Mode::Animation => {
                let advanced = self.animation.poll(now);
                if full {
                    Some(Render::Animation(self.animation.current()))
                } else {
                    advanced.map(Render::Animation)
                }
            }
            Mode::Pomodoro { .. } => {
                let view = self.pomodoro.as_ref()?.view(now);
                let changed = self
                    .last_pomodoro
                    .map_or(true, |last| !last.same_frame(&view, SCREEN_WIDTH));
                if full || changed {
                    self.last_pomodoro = Some(view);
                    Some(Render::Pomodoro(view))
                } else {
                    None
                }
            }
        }
    }
}
