use contagion_common::Point;
use serde::{Deserialize, Serialize};

/// Health of a single cell. Transitions only run forward:
/// `Susceptible -> Infected -> Immune`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthState {
    Susceptible,
    /// `age` counts ticks since infection.
    Infected { age: u32 },
    Immune,
}

impl HealthState {
    /// Symbolic tag used by presentation collaborators.
    pub fn label(&self) -> &'static str {
        match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Infected { .. } => "infected",
            HealthState::Immune => "immune",
        }
    }
}

/// One simulated individual.
#[derive(Debug, Clone)]
pub struct Cell {
    pub location: Point,
    /// Displacement applied every tick. Negated per axis on a wall bounce.
    pub direction: Point,
    health: HealthState,
}

impl Cell {
    /// A susceptible cell at `location` moving by `direction` each tick.
    pub fn new(location: Point, direction: Point) -> Self {
        Self { location, direction, health: HealthState::Susceptible }
    }

    /// Moves the cell one step and ages an active infection.
    /// Infection older than `recovery_period` ticks turns into immunity.
    pub fn tick(&mut self, recovery_period: u32) {
        self.location = self.location.add(self.direction);
        if let HealthState::Infected { age } = self.health {
            let age = age.saturating_add(1);
            self.health = if age > recovery_period {
                HealthState::Immune
            } else {
                HealthState::Infected { age }
            };
        }
    }

    /// Infects the cell with a fresh infection. Immune cells are left alone.
    pub fn contract_disease(&mut self) {
        if !self.is_immune() {
            self.health = HealthState::Infected { age: 0 };
        }
    }

    pub fn immunize(&mut self) {
        self.health = HealthState::Immune;
    }

    pub fn health(&self) -> HealthState {
        self.health
    }

    pub fn is_susceptible(&self) -> bool {
        matches!(self.health, HealthState::Susceptible)
    }

    pub fn is_infected(&self) -> bool {
        matches!(self.health, HealthState::Infected { .. })
    }

    pub fn is_immune(&self) -> bool {
        matches!(self.health, HealthState::Immune)
    }

    pub fn color_tag(&self) -> &'static str {
        self.health.label()
    }

    /// Exposure between two touching cells: whichever side is infected passes
    /// the disease to a susceptible partner. Returns `true` if a transmission happened.
    pub fn contact_with(&mut self, other: &mut Cell) -> bool {
        if self.is_infected() && other.is_susceptible() {
            other.contract_disease();
            true
        } else if self.is_susceptible() && other.is_infected() {
            self.contract_disease();
            true
        } else {
            false
        }
    }
}
