use serde::{Serialize, Deserialize};

/// Position and health label of one cell, as handed to presentation collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
    pub x: f32,
    pub y: f32,
    /// One of "susceptible", "infected", "immune".
    pub health: String,
}

/// A snapshot of the population at a specific tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The simulation tick at which the snapshot was taken.
    pub time: u64,
    pub susceptible: u32,
    pub infected: u32,
    pub immune: u32,
    #[serde(skip_serializing_if = "Option::is_none")] // Don't write "cells": null
    pub cells: Option<Vec<CellRecord>>,
}

impl Snapshot {
    pub fn total(&self) -> u32 {
        self.susceptible + self.infected + self.immune
    }
}
