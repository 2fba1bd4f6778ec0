//! Elastic properties of the ground and of the tunnel lining.

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, MechError, MechResult};

/// Isotropic elastic ground described by its bulk and shear moduli.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundProperties {
    /// Bulk modulus K (Pa).
    pub bulk_modulus: f64,
    /// Shear modulus G (Pa).
    pub shear_modulus: f64,
}

/// Stiff clay, E ≈ 48 MPa and ν ≈ 0.34.
impl Default for GroundProperties {
    fn default() -> Self {
        GroundProperties {
            bulk_modulus: 5e7,
            shear_modulus: 1.791e7,
        }
    }
}

impl GroundProperties {
    /// Creates the ground from bulk and shear moduli.
    ///
    /// Both moduli must be strictly positive, which keeps the derived Poisson's
    /// ratio inside (-1, 0.5).
    pub fn new(bulk_modulus: f64, shear_modulus: f64) -> MechResult<Self> {
        let ground = GroundProperties {
            bulk_modulus,
            shear_modulus,
        };
        ground.validate()?;
        Ok(ground)
    }

    /// Creates the ground from Young's modulus and Poisson's ratio.
    pub fn from_young_poisson(young: f64, poisson: f64) -> MechResult<Self> {
        require_positive("young_modulus", young)?;
        if poisson <= -1.0 || poisson >= 0.5 {
            return Err(MechError::domain(
                "poisson_ratio",
                poisson,
                "must lie in the open interval (-1, 0.5)",
            ));
        }
        GroundProperties::new(
            young / (3.0 * (1.0 - 2.0 * poisson)),
            young / (2.0 * (1.0 + poisson)),
        )
    }

    pub fn validate(&self) -> MechResult<()> {
        require_positive("bulk_modulus", self.bulk_modulus)?;
        require_positive("shear_modulus", self.shear_modulus)?;
        Ok(())
    }

    /// Young's modulus E = 9KG / (3K + G).
    pub fn young(&self) -> f64 {
        let (k, g) = (self.bulk_modulus, self.shear_modulus);
        9.0 * k * g / (3.0 * k + g)
    }

    /// Poisson's ratio ν = (3K - 2G) / (2(3K + G)).
    pub fn poisson(&self) -> f64 {
        let (k, g) = (self.bulk_modulus, self.shear_modulus);
        (3.0 * k - 2.0 * g) / (2.0 * (3.0 * k + g))
    }
}

/// Tunnel lining of unit width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiningProperties {
    /// Young's modulus of the lining material (Pa).
    pub young_modulus: f64,
    /// Poisson's ratio of the lining material.
    pub poisson_ratio: f64,
    /// Cross-sectional area per unit tunnel length (m²/m).
    pub area: f64,
    /// Tunnel radius (m).
    pub radius: f64,
}

/// 125 mm concrete lining of a 5 m radius tunnel.
impl Default for LiningProperties {
    fn default() -> Self {
        LiningProperties {
            young_modulus: 2.5e10,
            poisson_ratio: 0.15,
            area: 0.125,
            radius: 5.0,
        }
    }
}

impl LiningProperties {
    pub fn new(young_modulus: f64, poisson_ratio: f64, area: f64, radius: f64) -> MechResult<Self> {
        let lining = LiningProperties {
            young_modulus,
            poisson_ratio,
            area,
            radius,
        };
        lining.validate()?;
        Ok(lining)
    }

    pub fn validate(&self) -> MechResult<()> {
        require_positive("lining_young_modulus", self.young_modulus)?;
        if self.poisson_ratio <= -1.0 || self.poisson_ratio >= 0.5 {
            return Err(MechError::domain(
                "lining_poisson_ratio",
                self.poisson_ratio,
                "must lie in the open interval (-1, 0.5)",
            ));
        }
        require_positive("lining_area", self.area)?;
        require_positive("radius", self.radius)?;
        Ok(())
    }

    /// Section height of the unit-width rectangle carrying `area`.
    pub fn height(&self) -> f64 {
        self.area
    }

    /// Second moment of area of the unit-width rectangle, h³/12.
    pub fn inertia(&self) -> f64 {
        self.height().powi(3) / 12.0
    }
}
