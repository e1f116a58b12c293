/// Mechanical energy of a scene, in scene units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Energy {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

impl Energy {
    /// Combines kinetic and potential energy.
    #[must_use]
    pub fn new(kinetic: f64, potential: f64) -> Self {
        Self {
            kinetic,
            potential,
            total: kinetic + potential,
        }
    }
}
