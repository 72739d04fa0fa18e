//! Game state machine.
//!
//! ```text
//! Waiting ──LEFT/RIGHT──▶ Countdown ──4 s──▶ Running ──crash──▶ Dead
//!                                              ▲                 │ 3 s
//!                                              └──4 s── RestartCountdown
//! ```
//!
//! [`Game`] owns the whole game context (scene, frame clock, session
//! timestamps and the obstacle generator). The host calls [`Game::update`] on
//! every loop pass with the current time; nothing in here blocks. The fixed
//! presentational waits (countdown digits, crash screen) are deadlines stored
//! in the state itself and never touch the frame clock.
//!
//! # Input
//!
//! Move presses are drained only while `Running`. Presses made during a
//! countdown or the crash screen stay pending and take effect on the first
//! pass of the next session. Presses made before the start gesture are
//! discarded when it arrives.

use core::fmt;

use crate::clock::FrameClock;
use crate::config::{COUNTDOWN_FROM, COUNTDOWN_STEP_MS, DEATH_SCREEN_MS, SCORE_UNIT_MS};
use crate::display::CharDisplay;
use crate::input::{InputFlags, MoveButton, StartButtons};
use crate::scene::{Scene, TickOutcome};
use crate::screens::{draw_countdown, draw_death, draw_restart_countdown, draw_welcome, render_scene};
use crate::spawn::SpawnSource;

/// Progress of a countdown screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Countdown {
    /// Digit currently on screen.
    pub digit: u8,
    /// Time the next digit (or the session) is due.
    pub next_step_at: u64,
}

impl Countdown {
    const fn starting_at(now_ms: u64) -> Self {
        Self {
            digit: COUNTDOWN_FROM,
            next_step_at: now_ms.saturating_add(COUNTDOWN_STEP_MS),
        }
    }
}

/// Top-level game phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Welcome screen, polling LEFT/RIGHT.
    #[default]
    Waiting,
    /// Countdown before the first session.
    Countdown(Countdown),
    /// Session in progress.
    Running,
    /// Crash screen with score, shown until `until`.
    Dead { until: u64 },
    /// Countdown before the next session.
    RestartCountdown(Countdown),
}

impl GameState {
    /// Short name for logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Countdown(_) => "Countdown",
            Self::Running => "Running",
            Self::Dead { .. } => "Dead",
            Self::RestartCountdown(_) => "RestartCountdown",
        }
    }

    #[inline]
    pub const fn is_running(&self) -> bool { matches!(self, Self::Running) }
}

/// Transition reported by [`Game::update`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameEvent {
    /// LEFT or RIGHT pressed on the welcome screen.
    StartRequested,
    /// A countdown moved on to `digit`.
    CountdownStep { digit: u8 },
    /// A fresh session began at `at` ms.
    SessionStarted { at: u64 },
    /// The car crashed.
    Crashed { score: u32, frames: u32 },
    /// The crash screen ended and the restart countdown began.
    RestartScheduled,
}

impl fmt::Display for GameEvent {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::StartRequested => f.write_str("Start pressed"),
            Self::CountdownStep { digit } => write!(f, "Countdown {digit}"),
            Self::SessionStarted { at } => write!(f, "Session start @{at}ms"),
            Self::Crashed { score, frames } => write!(f, "Crash: score {score}, {frames} frames"),
            Self::RestartScheduled => f.write_str("Restarting"),
        }
    }
}

/// Game context owned by the main loop.
pub struct Game<S: SpawnSource> {
    state: GameState,
    scene: Scene,
    clock: FrameClock,
    session_start_ms: u64,
    last_score: Option<u32>,
    pending_event: Option<GameEvent>,
    spawner: S,
}

impl<S: SpawnSource> Game<S> {
    /// Create a game in the `Waiting` state. Call [`Game::begin`] to draw the
    /// welcome screen.
    pub const fn new(spawner: S) -> Self {
        Self {
            state: GameState::Waiting,
            scene: Scene::new(),
            clock: FrameClock::new(),
            session_start_ms: 0,
            last_score: None,
            pending_event: None,
            spawner,
        }
    }

    /// Enter `Waiting` and show the welcome screen.
    pub fn begin<D: CharDisplay>(
        &mut self,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.state = GameState::Waiting;
        draw_welcome(display)
    }

    /// Advance the game to `now_ms`.
    ///
    /// Returns the transition that happened on this pass, if any. The state
    /// moves on before anything is drawn, so a display error never blocks a
    /// transition. The event of a pass that failed to draw is kept for
    /// [`Game::take_event`].
    pub fn update<D: CharDisplay, B: StartButtons>(
        &mut self,
        now_ms: u64,
        input: &InputFlags,
        start: &mut B,
        display: &mut D,
    ) -> Result<Option<GameEvent>, D::Error> {
        self.pending_event = None;
        self.step(now_ms, input, start, display)?;
        Ok(self.pending_event.take())
    }

    /// Take the event of the last pass if [`Game::update`] returned an error
    /// before reporting it. The next `update` discards an untaken event.
    #[inline]
    pub fn take_event(&mut self) -> Option<GameEvent> { self.pending_event.take() }

    fn step<D: CharDisplay, B: StartButtons>(
        &mut self,
        now_ms: u64,
        input: &InputFlags,
        start: &mut B,
        display: &mut D,
    ) -> Result<(), D::Error> {
        match self.state {
            GameState::Waiting => {
                if !start.any_pressed() {
                    return Ok(());
                }
                input.discard();
                self.spawner.reseed(now_ms as u32);
                let countdown = Countdown::starting_at(now_ms);
                self.state = GameState::Countdown(countdown);
                self.pending_event = Some(GameEvent::StartRequested);
                draw_countdown(display, countdown.digit)
            }
            GameState::Countdown(countdown) => {
                if now_ms < countdown.next_step_at {
                    return Ok(());
                }
                if countdown.digit == 0 {
                    return self.countdown_finished(now_ms, display);
                }
                let next = Self::next_step(countdown, now_ms);
                self.state = GameState::Countdown(next);
                self.pending_event = Some(GameEvent::CountdownStep { digit: next.digit });
                draw_countdown(display, next.digit)
            }
            GameState::RestartCountdown(countdown) => {
                if now_ms < countdown.next_step_at {
                    return Ok(());
                }
                if countdown.digit == 0 {
                    return self.countdown_finished(now_ms, display);
                }
                let next = Self::next_step(countdown, now_ms);
                self.state = GameState::RestartCountdown(next);
                self.pending_event = Some(GameEvent::CountdownStep { digit: next.digit });
                draw_restart_countdown(display, next.digit)
            }
            GameState::Running => self.run_pass(now_ms, input, display),
            GameState::Dead { until } => {
                if now_ms < until {
                    return Ok(());
                }
                let countdown = Countdown::starting_at(now_ms);
                self.state = GameState::RestartCountdown(countdown);
                self.pending_event = Some(GameEvent::RestartScheduled);
                draw_restart_countdown(display, countdown.digit)
            }
        }
    }

    fn countdown_finished<D: CharDisplay>(
        &mut self,
        now_ms: u64,
        display: &mut D,
    ) -> Result<(), D::Error> {
        self.pending_event = Some(GameEvent::SessionStarted { at: now_ms });
        self.start_session(now_ms, display).map(|_| ())
    }

    const fn next_step(
        countdown: Countdown,
        now_ms: u64,
    ) -> Countdown {
        Countdown {
            digit: countdown.digit.saturating_sub(1),
            next_step_at: now_ms.saturating_add(COUNTDOWN_STEP_MS),
        }
    }

    /// Reset the session and enter `Running`.
    ///
    /// Clears the grid, puts the car at the top-left, zeroes the frame clock
    /// and captures `now_ms` as the session start. The countdowns end here;
    /// it is public so scripted setups can skip them.
    pub fn start_session<D: CharDisplay>(
        &mut self,
        now_ms: u64,
        display: &mut D,
    ) -> Result<GameEvent, D::Error> {
        self.scene.reset();
        self.clock.reset();
        self.session_start_ms = now_ms;
        self.state = GameState::Running;
        display.clear()?;
        render_scene(display, &self.scene)?;
        Ok(GameEvent::SessionStarted { at: now_ms })
    }

    /// One `Running` loop pass: drain input, maybe tick, render.
    fn run_pass<D: CharDisplay>(
        &mut self,
        now_ms: u64,
        input: &InputFlags,
        display: &mut D,
    ) -> Result<(), D::Error> {
        for button in [MoveButton::Down, MoveButton::Up] {
            if input.take(button) {
                self.scene.apply(button);
            }
        }

        if self.clock.poll(now_ms) && self.scene.tick(|| self.spawner.next_spawn()) == TickOutcome::Collision {
            let score = self.score_at(now_ms);
            self.last_score = Some(score);
            self.state = GameState::Dead {
                until: now_ms.saturating_add(DEATH_SCREEN_MS),
            };
            self.pending_event = Some(GameEvent::Crashed {
                score,
                frames: self.clock.total_frames(),
            });
            return draw_death(display, score);
        }

        render_scene(display, &self.scene)
    }

    /// Score of the current session if it ended at `now_ms`.
    ///
    /// One point per [`SCORE_UNIT_MS`] survived.
    pub fn score_at(
        &self,
        now_ms: u64,
    ) -> u32 {
        let elapsed = now_ms.saturating_sub(self.session_start_ms);
        u32::try_from(elapsed / SCORE_UNIT_MS).unwrap_or(u32::MAX)
    }

    #[inline]
    pub const fn state(&self) -> GameState { self.state }

    #[inline]
    pub const fn scene(&self) -> &Scene { &self.scene }

    /// Mutable scene access for scripted setups.
    #[inline]
    pub const fn scene_mut(&mut self) -> &mut Scene { &mut self.scene }

    #[inline]
    pub const fn clock(&self) -> &FrameClock { &self.clock }

    /// Start timestamp of the current (or last) session.
    #[inline]
    pub const fn session_start(&self) -> u64 { self.session_start_ms }

    /// Score of the last finished session.
    #[inline]
    pub const fn last_score(&self) -> Option<u32> { self.last_score }
}
