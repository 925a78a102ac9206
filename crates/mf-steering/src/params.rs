//! Tunable steering parameters.

/// Per-agent steering knobs.  Distances are in world units; forces in
/// units per frame².
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteeringParams {
    /// Cap on the force applied in one frame.  Default: 0.1.
    pub max_force: f32,
    /// Width of the slow-down band outside the arrival distance.  `0`
    /// disables arrival tapering.  Default: 50.
    pub arrival_threshold: f32,

    /// Distance of the wander circle ahead of the heading.  Default: 10.
    pub wander_distance: f32,
    /// Radius of the wander circle.  Default: 100.
    pub wander_radius: f32,
    /// Max random change of the wander angle per call (radians).  Default: 0.5.
    pub wander_range: f32,

    /// Edge distance at which boundary avoidance starts pushing back, used
    /// when a host asks for "default" avoidance.  Default: 100.
    pub avoid_distance: f32,
    /// Comfort gap kept from obstacles.  Default: 5.
    pub avoid_buffer: f32,

    /// Sight radius for flocking.  Default: 200.
    pub flock_vicinity: f32,
    /// Separation radius: closer neighbors are fled.  Default: 80.
    pub flock_buffer: f32,
    /// Group tag.  `0` flocks with anyone; otherwise only with equal tags.
    pub flock_index: u32,
    /// Taper cohesion seeks using `flock_buffer` as the arrival distance.
    pub flock_arrive: bool,
}

impl Default for SteeringParams {
    fn default() -> Self {
        Self {
            max_force:         0.1,
            arrival_threshold: 50.0,
            wander_distance:   10.0,
            wander_radius:     100.0,
            wander_range:      0.5,
            avoid_distance:    100.0,
            avoid_buffer:      5.0,
            flock_vicinity:    200.0,
            flock_buffer:      80.0,
            flock_index:       0,
            flock_arrive:      false,
        }
    }
}
