//! Masses and the scene that owns them.
//!
//! A scene is a validated, read-only list of compact masses. Validation
//! happens at construction: the tracer's single-mass-at-a-time model is only
//! correct while no two masses' bodies or spheres of influence touch, so a
//! configuration violating that is rejected before any ray is traced.

use thiserror::Error;

use crate::geometry::Sphere;
use crate::types::{Color, Vec3};

/// Default multiplier from Schwarzschild radius to sphere-of-influence
/// radius. Beyond `rs * DEFAULT_SOI_FACTOR` space is treated as flat.
pub const DEFAULT_SOI_FACTOR: f64 = 10.0;

/// A compact gravitating body.
///
/// The visible surface is the embedded [`Sphere`]; the gravitational
/// parameter `mass` determines the Schwarzschild radius and with it the
/// sphere of influence inside which rays are integrated instead of traced
/// analytically.
#[derive(Copy, Clone, Debug)]
pub struct Mass {
    pub shape: Sphere,
    pub mass: f64,
    pub color_primary: Color,
    pub color_secondary: Color,
    pub checkered_subdivision: u32,
}

impl Mass {
    #[must_use]
    pub const fn new(
        position: Vec3,
        radius: f64,
        mass: f64,
        color_primary: Color,
        color_secondary: Color,
        checkered_subdivision: u32,
    ) -> Self {
        Self {
            shape: Sphere::new(position, radius),
            mass,
            color_primary,
            color_secondary,
            checkered_subdivision,
        }
    }

    /// A single-color surface. The checker pattern degenerates when both
    /// tile colors match.
    #[must_use]
    pub const fn solid(position: Vec3, radius: f64, mass: f64, color: Color) -> Self {
        Self::new(position, radius, mass, color, color, 1)
    }

    /// A checkered surface with a bright and a dark tone derived from one
    /// base color.
    #[must_use]
    pub fn checkered(
        position: Vec3,
        radius: f64,
        mass: f64,
        color: Color,
        checkered_subdivision: u32,
    ) -> Self {
        Self::new(
            position,
            radius,
            mass,
            color.scaled(0.8),
            color.scaled(0.2),
            checkered_subdivision,
        )
    }

    #[must_use]
    pub fn schwarzschild_radius(&self) -> f64 {
        2.0 * self.mass
    }

    #[must_use]
    pub fn influence_radius(&self, soi_factor: f64) -> f64 {
        self.schwarzschild_radius() * soi_factor
    }

    /// The sphere of influence as a geometric sphere.
    #[must_use]
    pub fn influence_sphere(&self, soi_factor: f64) -> Sphere {
        Sphere::new(self.shape.position, self.influence_radius(soi_factor))
    }

    /// Largest radius at which this mass still affects a ray: the sphere of
    /// influence, or the body itself for masses so light the influence
    /// sphere lies inside it.
    fn reach(&self, soi_factor: f64) -> f64 {
        self.influence_radius(soi_factor).max(self.shape.radius)
    }
}

/// Scene construction failures.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error(
        "masses {first} and {second} are too close: separation {separation} \
         does not clear the combined body/influence reach {required}; bodies \
         and influence spheres must not touch or overlap"
    )]
    MassesTooClose {
        first: usize,
        second: usize,
        separation: f64,
        required: f64,
    },
    #[error("mass {index} is invalid: {reason}")]
    InvalidMass { index: usize, reason: &'static str },
}

/// A validated, read-only collection of masses.
#[derive(Clone, Debug)]
pub struct Scene {
    masses: Vec<Mass>,
    soi_factor: f64,
}

impl Scene {
    /// An empty scene with the given sphere-of-influence multiplier.
    #[must_use]
    pub const fn new(soi_factor: f64) -> Self {
        Self {
            masses: Vec::new(),
            soi_factor,
        }
    }

    /// Build a scene from a mass list, validating every pair.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError`] if any mass is non-physical or placed too
    /// close to another.
    pub fn with_masses(masses: Vec<Mass>, soi_factor: f64) -> Result<Self, SceneError> {
        let mut scene = Self::new(soi_factor);
        for mass in masses {
            scene.add_mass(mass)?;
        }
        Ok(scene)
    }

    /// Add a mass, rejecting non-physical parameters and any placement
    /// whose body or sphere of influence touches an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidMass`] for a negative radius or
    /// gravitational parameter or a zero subdivision, and
    /// [`SceneError::MassesTooClose`] when the separation invariant fails.
    pub fn add_mass(&mut self, mass: Mass) -> Result<(), SceneError> {
        let index = self.masses.len();
        if !mass.shape.radius.is_finite() || mass.shape.radius < 0.0 {
            return Err(SceneError::InvalidMass {
                index,
                reason: "radius must be finite and non-negative",
            });
        }
        if !mass.mass.is_finite() || mass.mass < 0.0 {
            return Err(SceneError::InvalidMass {
                index,
                reason: "gravitational parameter must be finite and non-negative",
            });
        }
        if mass.checkered_subdivision == 0 {
            return Err(SceneError::InvalidMass {
                index,
                reason: "checkered subdivision must be at least 1",
            });
        }

        let reach = mass.reach(self.soi_factor);
        for (other_index, other) in self.masses.iter().enumerate() {
            let separation = (mass.shape.position - other.shape.position).length();
            let required = reach + other.reach(self.soi_factor);
            if required >= separation {
                return Err(SceneError::MassesTooClose {
                    first: other_index,
                    second: index,
                    separation,
                    required,
                });
            }
        }

        self.masses.push(mass);
        Ok(())
    }

    #[must_use]
    pub fn masses(&self) -> &[Mass] {
        &self.masses
    }

    #[must_use]
    pub const fn soi_factor(&self) -> f64 {
        self.soi_factor
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_SOI_FACTOR)
    }
}
