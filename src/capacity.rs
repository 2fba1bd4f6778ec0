//! Axial force interaction envelopes of a structural section.
//!
//! Two closed forms are provided:
//!
//! - the Q–N curve, shear capacity as a function of axial force, with a
//!   compression branch over `[0, N_max]` and a tension branch over `[N_min, 0]`;
//! - the M–N envelope, the four-segment polygon through the pure axial and pure
//!   bending capacities.
//!
//! Compression is positive: `sigma_max > 0 > sigma_min`.

use serde::{Deserialize, Serialize};

use crate::error::{require_positive, MechError, MechResult};
use crate::sweep::linspace;

/// Section geometry, strength limits and safety factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionProperties {
    /// Cross-sectional area A (m²).
    pub area: f64,
    /// Second moment of area I (m⁴).
    pub inertia: f64,
    /// Distance to the extreme fibre t (m).
    pub extreme_fiber: f64,
    /// Compressive strength limit (Pa), positive.
    pub sigma_max: f64,
    /// Tensile strength limit (Pa), negative.
    pub sigma_min: f64,
    pub factor_of_safety: f64,
}

/// Steel set with 500 MPa symmetric strength limits.
impl Default for SectionProperties {
    fn default() -> Self {
        SectionProperties {
            area: 4.748e-3,
            inertia: 2.231e-5,
            extreme_fiber: 0.160,
            sigma_max: 500e6,
            sigma_min: -500e6,
            factor_of_safety: 1.5,
        }
    }
}

impl SectionProperties {
    pub fn validate(&self) -> MechResult<()> {
        require_positive("factor_of_safety", self.factor_of_safety)?;
        require_positive("area", self.area)?;
        require_positive("inertia", self.inertia)?;
        require_positive("extreme_fiber", self.extreme_fiber)?;
        require_positive("sigma_max", self.sigma_max)?;
        if !(self.sigma_min < 0.0 && self.sigma_min.is_finite()) {
            return Err(MechError::domain(
                "sigma_min",
                self.sigma_min,
                "tensile limit must be negative",
            ));
        }
        Ok(())
    }

    /// Elastic section modulus I / t.
    pub fn section_modulus(&self) -> f64 {
        self.inertia / self.extreme_fiber
    }
}

/// Corner capacities of the interaction diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityLimits {
    pub n_max: f64,
    pub n_min: f64,
    /// Axial force about which the envelope is balanced.
    pub n_cr: f64,
    pub m_max: f64,
    pub m_min: f64,
}

impl CapacityLimits {
    pub fn derive(section: &SectionProperties) -> MechResult<Self> {
        section.validate()?;
        let s = section;
        let fs = s.factor_of_safety;
        let m_max = ((s.sigma_max - s.sigma_min) / fs) * s.section_modulus();
        Ok(CapacityLimits {
            n_max: s.area * s.sigma_max / fs,
            n_min: s.area * s.sigma_min / fs,
            n_cr: s.area * (s.sigma_max + s.sigma_min) / (2.0 * fs),
            m_max,
            m_min: -m_max,
        })
    }
}

/// Which strength limit governs a Q–N branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Compression,
    Tension,
}

impl Branch {
    pub fn strength(&self, section: &SectionProperties) -> f64 {
        match self {
            Branch::Compression => section.sigma_max,
            Branch::Tension => section.sigma_min,
        }
    }

    /// Axial force range swept by this branch, in increasing order.
    pub fn range(&self, limits: &CapacityLimits) -> (f64, f64) {
        match self {
            Branch::Compression => (0.0, limits.n_max),
            Branch::Tension => (limits.n_min, 0.0),
        }
    }
}

/// Shear capacity at axial force `n` on `branch`.
///
/// Q = sqrt((4 σ² A² - 4 N FS σ A) / (9 FS²)). A negative radicand is clamped
/// to zero, so Q is 0 wherever the branch has no shear capacity left.
pub fn shear_capacity(section: &SectionProperties, branch: Branch, n: f64) -> f64 {
    let sigma = branch.strength(section);
    let a = section.area;
    let fs = section.factor_of_safety;
    let radicand = (4.0 * sigma * a * sigma * a - 4.0 * n * fs * sigma * a) / (9.0 * fs * fs);
    radicand.max(0.0).sqrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QnPoint {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "Q")]
    pub q: f64,
}

/// One sampled branch of the Q–N diagram (positive shear side).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QnCurve {
    pub branch: Branch,
    pub points: Vec<QnPoint>,
}

impl QnCurve {
    pub fn sample(section: &SectionProperties, limits: &CapacityLimits, branch: Branch, samples: usize) -> MechResult<Self> {
        let (start, stop) = branch.range(limits);
        let points = linspace(start, stop, samples)?
            .into_iter()
            .map(|n| QnPoint {
                n,
                q: shear_capacity(section, branch, n),
            })
            .collect();
        Ok(QnCurve { branch, points })
    }

    /// The negative-shear half, mirrored about Q = 0.
    pub fn mirrored(&self) -> QnCurve {
        QnCurve {
            branch: self.branch,
            points: self.points.iter().map(|p| QnPoint { n: p.n, q: -p.q }).collect(),
        }
    }

    pub fn n_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.n).collect()
    }

    pub fn q_values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.q).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MnPoint {
    #[serde(rename = "M")]
    pub m: f64,
    #[serde(rename = "N")]
    pub n: f64,
}

/// Closed polygon (0, N_max) → (M_min, 0) → (0, N_min) → (M_max, 0) → (0, N_max).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MnEnvelope {
    vertices: [MnPoint; 5],
}

impl MnEnvelope {
    pub fn new(limits: &CapacityLimits) -> Self {
        let p = |m, n| MnPoint { m, n };
        MnEnvelope {
            vertices: [
                p(0.0, limits.n_max),
                p(limits.m_min, 0.0),
                p(0.0, limits.n_min),
                p(limits.m_max, 0.0),
                p(0.0, limits.n_max),
            ],
        }
    }

    /// Polygon vertices with the first point repeated at the end.
    pub fn vertices(&self) -> &[MnPoint] {
        &self.vertices
    }

    pub fn segments(&self) -> impl Iterator<Item = (MnPoint, MnPoint)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }

    /// Point at parameter `t ∈ [0, 1]` along segment `index` (0..4).
    pub fn point_on_segment(&self, index: usize, t: f64) -> Option<MnPoint> {
        let (a, b) = self.segments().nth(index)?;
        Some(MnPoint {
            m: a.m + t * (b.m - a.m),
            n: a.n + t * (b.n - a.n),
        })
    }

    /// Whether (m, n) lies inside or on the envelope.
    pub fn contains(&self, m: f64, n: f64) -> bool {
        // Vertices run counter-clockwise in (M, N); every edge must keep the point on its left.
        self.segments().all(|(a, b)| {
            let cross = (b.m - a.m) * (n - a.n) - (b.n - a.n) * (m - a.m);
            cross >= 0.0
        })
    }
}

/// Both interaction diagrams for one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapacityEnvelope {
    pub limits: CapacityLimits,
    pub compression: QnCurve,
    pub tension: QnCurve,
    pub mn: MnEnvelope,
}

impl CapacityEnvelope {
    /// Samples each Q–N branch with `samples` points.
    pub fn evaluate(section: &SectionProperties, samples: usize) -> MechResult<Self> {
        let limits = CapacityLimits::derive(section)?;
        Ok(CapacityEnvelope {
            compression: QnCurve::sample(section, &limits, Branch::Compression, samples)?,
            tension: QnCurve::sample(section, &limits, Branch::Tension, samples)?,
            mn: MnEnvelope::new(&limits),
            limits,
        })
    }

    /// Q–N table: tension branch followed by compression branch.
    pub fn qn_table(&self) -> Vec<QnPoint> {
        self.tension
            .points
            .iter()
            .chain(self.compression.points.iter())
            .copied()
            .collect()
    }
}
