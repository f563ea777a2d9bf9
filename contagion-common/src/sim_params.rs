use serde::{Deserialize, Serialize};

/// Simulation constants derived from the configuration, consulted every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    // Bounds
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,

    // Disease
    pub cell_radius: f32, // Contact threshold distance
    pub recovery_period: u32, // Ticks from infection to immunity
}

impl SimParams {
    /// Bounds of `width` x `height` centred on the origin.
    pub fn centered(width: f32, height: f32, cell_radius: f32, recovery_period: u32) -> Self {
        let max_x = width / 2.0;
        let max_y = height / 2.0;
        SimParams {
            min_x: -max_x,
            max_x,
            min_y: -max_y,
            max_y,
            cell_radius,
            recovery_period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_bounds_are_symmetric() {
        let p = SimParams::centered(400.0, 200.0, 15.0, 90);
        assert_eq!((p.min_x, p.max_x), (-200.0, 200.0));
        assert_eq!((p.min_y, p.max_y), (-100.0, 100.0));
        assert_eq!(p.cell_radius, 15.0);
        assert_eq!(p.recovery_period, 90);
    }
}
