//! Game driver
//!
//! Owns the clock, the host-facing input recorder and the simulation. The
//! host calls `frame()` once per display refresh and draws the returned
//! snapshot; between frames it feeds events into `input_mut()`.

use crate::error::ConfigError;
use crate::platform::{SystemClock, TimeSource};
use crate::sim::{Arena, FrameSnapshot, GameEvent, InputState, SimulationState, step};
use crate::tuning::Tuning;

pub struct Game<C: TimeSource = SystemClock> {
    clock: C,
    input: InputState,
    state: SimulationState,
    last_events: Vec<GameEvent>,
}

impl<C: TimeSource> Game<C> {
    pub fn new(clock: C, arena: Arena, tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        let state = SimulationState::new(arena, tuning, seed)?;
        log::info!(
            "New game: arena {}x{} (border {}), seed {}",
            arena.width,
            arena.height,
            arena.border,
            seed
        );
        Ok(Self {
            clock,
            input: InputState::new(),
            state,
            last_events: Vec::new(),
        })
    }

    /// Run one simulation step at the clock's current time
    pub fn frame(&mut self) -> FrameSnapshot {
        let now = self.clock.now_ms();
        let input = self.input.take_tick_input();
        self.last_events = step(&mut self.state, &input, now);
        FrameSnapshot::capture(&self.state)
    }

    /// Snapshot of the latest step without advancing
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state)
    }

    /// Events produced by the latest `frame()`
    pub fn last_events(&self) -> &[GameEvent] {
        &self.last_events
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
