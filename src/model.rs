use crate::cell::Cell;
use crate::error::{Error, Result};
use contagion_common::{CellRecord, Point, SimParams, SimulationConfig, Snapshot};
use log::{debug, trace};
use rand::distr::{uniform, Distribution, Uniform};
use rand::Rng;

/// Number of cells in each health state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub susceptible: u32,
    pub infected: u32,
    pub immune: u32,
}

/// Owns the population and advances the epidemic one tick at a time.
pub struct Model {
    params: SimParams,
    /// Fixed-size population. Order only drives pairwise iteration.
    population: Vec<Cell>,
    /// Ticks elapsed since construction.
    time: u64,
}

impl Model {
    /// Builds a population of `cells` individuals moving at `speed`.
    ///
    /// Cells are created in three contiguous groups: `immune` immunized cells,
    /// then `infected` infected cells, then the susceptible remainder. Each cell
    /// draws its location uniformly within the bounds and its direction at a
    /// uniformly random angle, in that order, from `rng`.
    ///
    /// Errors:
    /// - `Error::InvalidConfiguration` unless `0 < infected < cells`,
    ///   `0 < immune < cells` and `immune + infected <= cells`, or if the
    ///   bounds, speed or contact radius are unusable.
    pub fn new<R: Rng + ?Sized>(
        params: &SimParams,
        cells: usize,
        speed: f32,
        infected: usize,
        immune: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if infected == 0 || infected >= cells {
            return Err(Error::InvalidConfiguration(format!(
                "infected count {} must be strictly between 0 and {}",
                infected, cells
            )));
        }
        if immune == 0 || immune >= cells {
            return Err(Error::InvalidConfiguration(format!(
                "immune count {} must be strictly between 0 and {}",
                immune, cells
            )));
        }
        if immune + infected > cells {
            return Err(Error::InvalidConfiguration(format!(
                "immune ({}) plus infected ({}) exceeds population {}",
                immune, infected, cells
            )));
        }
        if !speed.is_finite() || speed < 0.0 {
            return Err(Error::InvalidConfiguration(format!("speed {} must be finite and >= 0", speed)));
        }
        if !params.cell_radius.is_finite() || params.cell_radius < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "cell radius {} must be finite and >= 0",
                params.cell_radius
            )));
        }

        let bounds_err = |e: uniform::Error| Error::InvalidConfiguration(format!("bad bounds: {}", e));
        let x_dist = Uniform::new_inclusive(params.min_x, params.max_x).map_err(bounds_err)?;
        let y_dist = Uniform::new_inclusive(params.min_y, params.max_y).map_err(bounds_err)?;
        let angle_dist = Uniform::new(0.0f32, std::f32::consts::TAU).map_err(bounds_err)?;

        let spawn = |rng: &mut R| {
            let location = Point::new(x_dist.sample(rng), y_dist.sample(rng));
            let direction = Point::from_angle(angle_dist.sample(rng), speed);
            Cell::new(location, direction)
        };

        let mut population = Vec::with_capacity(cells);
        for _ in 0..immune {
            let mut cell = spawn(&mut *rng);
            cell.immunize();
            population.push(cell);
        }
        for _ in 0..infected {
            let mut cell = spawn(&mut *rng);
            cell.contract_disease();
            population.push(cell);
        }
        for _ in 0..cells - immune - infected {
            population.push(spawn(&mut *rng));
        }

        debug!(
            "Model created: {} cells ({} immune, {} infected), speed {}",
            cells, immune, infected, speed
        );

        Ok(Self { params: params.clone(), population, time: 0 })
    }

    /// Builds a model from a loaded configuration.
    pub fn from_config<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<Self> {
        let ic = &config.initial_conditions;
        Self::new(
            &config.get_sim_params(),
            ic.num_cells as usize,
            ic.speed,
            ic.num_infected as usize,
            ic.num_immune as usize,
            rng,
        )
    }

    /// Advances the simulation by one tick.
    ///
    /// Every cell moves (and bounces) before any contact is evaluated, so
    /// contacts see the post-motion configuration.
    pub fn step(&mut self) {
        self.time += 1;
        let recovery_period = self.params.recovery_period;
        for cell in self.population.iter_mut() {
            cell.tick(recovery_period);
            enforce_bounds(&self.params, cell);
        }
        let new_infections = self.check_contacts();
        trace!("Tick {} done: {} new infections", self.time, new_infections);
    }

    /// Resolves contacts over every unordered pair `(i, j)`, `i < j`, whose
    /// distance is below the contact radius. Health changes take effect
    /// immediately, so a cell infected earlier in the pass can infect a later
    /// partner. Returns the number of new infections.
    pub fn check_contacts(&mut self) -> u32 {
        let radius = self.params.cell_radius;
        let mut new_infections = 0;
        for i in 0..self.population.len() {
            let (head, tail) = self.population.split_at_mut(i + 1);
            let cell = &mut head[i];
            for (offset, other) in tail.iter_mut().enumerate() {
                if cell.location.distance(other.location) < radius && cell.contact_with(other) {
                    new_infections += 1;
                    debug!("Tick {}: transmission between cells {} and {}", self.time, i, i + 1 + offset);
                }
            }
        }
        new_infections
    }

    /// `true` once no cell is infected. Susceptible cells may remain.
    pub fn is_complete(&self) -> bool {
        self.population.iter().all(|c| c.is_immune() || c.is_susceptible())
    }

    pub fn census(&self) -> Census {
        let mut census = Census::default();
        for cell in &self.population {
            if cell.is_susceptible() {
                census.susceptible += 1;
            } else if cell.is_infected() {
                census.infected += 1;
            } else {
                census.immune += 1;
            }
        }
        census
    }

    /// Captures the current state. Per-cell positions and labels are included
    /// only when `include_cells` is set.
    pub fn snapshot(&self, include_cells: bool) -> Snapshot {
        let census = self.census();
        let cells = include_cells.then(|| {
            self.population
                .iter()
                .map(|c| CellRecord {
                    x: c.location.x,
                    y: c.location.y,
                    health: c.color_tag().to_string(),
                })
                .collect()
        });
        Snapshot {
            time: self.time,
            susceptible: census.susceptible,
            infected: census.infected,
            immune: census.immune,
            cells,
        }
    }

    pub fn time(&self) -> u64 {
        self.time
    }

    /// Read-only view of the population, in creation order.
    pub fn population(&self) -> &[Cell] {
        &self.population
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }
}

/// Reflects `cell` off the walls: a coordinate past a bound is clamped to it
/// and that axis of the direction is negated. Axes are handled independently.
pub fn enforce_bounds(params: &SimParams, cell: &mut Cell) {
    if cell.location.x > params.max_x {
        cell.location.x = params.max_x;
        cell.direction.x = -cell.direction.x;
    }
    if cell.location.x < params.min_x {
        cell.location.x = params.min_x;
        cell.direction.x = -cell.direction.x;
    }
    if cell.location.y > params.max_y {
        cell.location.y = params.max_y;
        cell.direction.y = -cell.direction.y;
    }
    if cell.location.y < params.min_y {
        cell.location.y = params.min_y;
        cell.direction.y = -cell.direction.y;
    }
}
