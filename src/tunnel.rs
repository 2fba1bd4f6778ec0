//! Ground–lining interaction around a circular tunnel.
//!
//! Closed-form relative stiffness solution for an elastic lining in an elastic
//! ground loaded by a far-field vertical stress `P` and a horizontal stress
//! `K·P`. The interface is either bonded (no-slip) or frictionless (full-slip);
//! the choice selects a different formula set for every coefficient.
//!
//! The pipeline is:
//!
//! 1. [`TunnelCoefficients::derive`] computes the compressibility ratio `C`, the
//!    flexibility ratio `F`, the per-interface coefficients and the response
//!    coefficients for a given lateral stress ratio.
//! 2. [`TunnelSolution::at`] evaluates displacements, interface stresses and
//!    stress resultants at one angle.
//! 3. [`TunnelSolution::field`] samples θ ∈ [0°, 90°] into a [`ResponseField`].

use serde::{Deserialize, Serialize};

use crate::error::{ratio, require_positive, MechError, MechResult};
use crate::material::{GroundProperties, LiningProperties};
use crate::sweep::{double_angle_harmonics, linspace};

/// Shear transfer assumption at the ground–lining interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterfaceCondition {
    /// Full shear transfer.
    #[default]
    NoSlip,
    /// No shear transfer.
    FullSlip,
}

impl InterfaceCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceCondition::NoSlip => "no-slip",
            InterfaceCondition::FullSlip => "full-slip",
        }
    }
}

impl std::str::FromStr for InterfaceCondition {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "no-slip" | "noslip" | "no_slip" => Ok(InterfaceCondition::NoSlip),
            "full-slip" | "fullslip" | "full_slip" => Ok(InterfaceCondition::FullSlip),
            _ => Err(MechError::UnknownOption {
                kind: "interface",
                input: s.to_string(),
                expected: "no-slip or full-slip",
            }),
        }
    }
}

impl std::fmt::Display for InterfaceCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Far-field loading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadState {
    /// Vertical stress P (Pa).
    pub vertical_stress: f64,
    /// Horizontal to vertical stress ratio K.
    pub lateral_ratio: f64,
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState {
            vertical_stress: 6e5,
            lateral_ratio: 0.5,
        }
    }
}

impl LoadState {
    pub fn new(vertical_stress: f64, lateral_ratio: f64) -> MechResult<Self> {
        let load = LoadState {
            vertical_stress,
            lateral_ratio,
        };
        load.validate()?;
        Ok(load)
    }

    pub fn validate(&self) -> MechResult<()> {
        if !self.vertical_stress.is_finite() {
            return Err(MechError::domain("vertical_stress", self.vertical_stress, "must be finite"));
        }
        if !(self.lateral_ratio.is_finite() && self.lateral_ratio >= 0.0) {
            return Err(MechError::domain("lateral_ratio", self.lateral_ratio, "must be finite and non-negative"));
        }
        Ok(())
    }

    pub fn is_hydrostatic(&self) -> bool {
        self.lateral_ratio == 1.0
    }
}

/// Relative stiffness of ground and lining.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StiffnessRatios {
    /// Compressibility ratio C.
    pub compressibility: f64,
    /// Flexibility ratio F.
    pub flexibility: f64,
}

impl StiffnessRatios {
    /// C = E R (1 - νs²) / (Es As (1 - ν²)), F = E R³ (1 - νs²) / (Es Is (1 - ν²)).
    pub fn new(ground: &GroundProperties, lining: &LiningProperties) -> MechResult<Self> {
        let e = ground.young();
        let nu = ground.poisson();
        let r = lining.radius;
        let lining_term = 1.0 - lining.poisson_ratio.powi(2);
        let ground_term = 1.0 - nu * nu;
        Ok(StiffnessRatios {
            compressibility: ratio(
                "compressibility",
                e * r * lining_term,
                lining.young_modulus * lining.area * ground_term,
            )?,
            flexibility: ratio(
                "flexibility",
                e * r.powi(3) * lining_term,
                lining.young_modulus * lining.inertia() * ground_term,
            )?,
        })
    }
}

/// Interface-specific dimensionless coefficients.
///
/// `beta` and `b2` only exist for the bonded interface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "interface", rename_all = "kebab-case")]
pub enum InterfaceCoefficients {
    NoSlip { beta: f64, b2: f64, a0: f64, a2: f64 },
    FullSlip { a0: f64, a2: f64 },
}

impl InterfaceCoefficients {
    pub fn derive(interface: InterfaceCondition, ratios: &StiffnessRatios, nu: f64) -> MechResult<Self> {
        let c = ratios.compressibility;
        let f = ratios.flexibility;
        let a0 = ratio("a0", c * f * (1.0 - nu), c + f + c * f * (1.0 - nu))?;
        match interface {
            InterfaceCondition::NoSlip => {
                let beta = ratio(
                    "beta",
                    (6.0 + f) * c * (1.0 - nu) + 2.0 * f * nu,
                    3.0 * f + 3.0 * c + 2.0 * c * f * (1.0 - nu),
                )?;
                let b2 = ratio(
                    "b2",
                    c * (1.0 - nu),
                    2.0 * c * (1.0 - nu) + 8.0 * nu - 12.0 * beta - 6.0 * beta * c * (1.0 - nu),
                )?;
                Ok(InterfaceCoefficients::NoSlip {
                    beta,
                    b2,
                    a0,
                    a2: beta * b2,
                })
            }
            InterfaceCondition::FullSlip => {
                let a2 = ratio(
                    "a2",
                    (f + 6.0) * (1.0 - nu),
                    2.0 * f * (1.0 - nu) + 6.0 * (5.0 - 6.0 * nu),
                )?;
                Ok(InterfaceCoefficients::FullSlip { a0, a2 })
            }
        }
    }

    pub fn interface(&self) -> InterfaceCondition {
        match self {
            InterfaceCoefficients::NoSlip { .. } => InterfaceCondition::NoSlip,
            InterfaceCoefficients::FullSlip { .. } => InterfaceCondition::FullSlip,
        }
    }

    pub fn a0(&self) -> f64 {
        match *self {
            InterfaceCoefficients::NoSlip { a0, .. } | InterfaceCoefficients::FullSlip { a0, .. } => a0,
        }
    }

    pub fn a2(&self) -> f64 {
        match *self {
            InterfaceCoefficients::NoSlip { a2, .. } | InterfaceCoefficients::FullSlip { a2, .. } => a2,
        }
    }
}

/// Dimensionless amplitudes of the mean and second-harmonic terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseCoefficients {
    pub u1: f64,
    pub u2: f64,
    pub v2: f64,
    pub t1: f64,
    pub t2: f64,
    pub m2: f64,
    pub sig_r1: f64,
    pub sig_r2: f64,
    pub tau_rt2: f64,
}

impl ResponseCoefficients {
    pub fn new(interface: &InterfaceCoefficients, nu: f64, k: f64) -> Self {
        match *interface {
            InterfaceCoefficients::NoSlip { b2, a0, a2, .. } => ResponseCoefficients {
                u1: 0.5 * (1.0 + k) * a0,
                u2: 0.5 * (1.0 - k) * (4.0 * (1.0 - nu) * b2 - 2.0 * a2),
                v2: (k - 1.0) * (a2 + (1.0 - 2.0 * nu) * b2),
                t1: (1.0 + k) * (1.0 - a0),
                t2: (1.0 - k) * (1.0 + 2.0 * a2),
                m2: 0.5 * (1.0 - k) * (1.0 - 2.0 * a2 + 2.0 * b2),
                sig_r1: (1.0 + k) * (1.0 - a0),
                sig_r2: (k - 1.0) * (1.0 - 6.0 * a2 + 4.0 * b2),
                tau_rt2: (1.0 - k) * (1.0 + 6.0 * a2 - 2.0 * b2),
            },
            InterfaceCoefficients::FullSlip { a0, a2 } => {
                let shape = (5.0 - 6.0 * nu) * a2 - (1.0 - nu);
                ResponseCoefficients {
                    u1: 0.5 * (1.0 + k) * a0,
                    u2: (k - 1.0) * shape,
                    v2: 0.5 * (1.0 - k) * shape,
                    t1: (1.0 + k) * (1.0 - a0),
                    t2: (1.0 + k) * (1.0 - 2.0 * a2),
                    m2: (1.0 - k) * (1.0 - 2.0 * a2),
                    sig_r1: (1.0 + k) * (1.0 - a0),
                    sig_r2: (k - 1.0) * (3.0 - 6.0 * a2),
                    tau_rt2: 0.0,
                }
            }
        }
    }
}

/// Complete coefficient set for one ground, lining, interface and load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TunnelCoefficients {
    pub ratios: StiffnessRatios,
    pub interface: InterfaceCoefficients,
    pub response: ResponseCoefficients,
}

impl TunnelCoefficients {
    pub fn derive(
        ground: &GroundProperties,
        lining: &LiningProperties,
        interface: InterfaceCondition,
        load: &LoadState,
    ) -> MechResult<Self> {
        ground.validate()?;
        lining.validate()?;
        load.validate()?;
        let nu = ground.poisson();
        let ratios = StiffnessRatios::new(ground, lining)?;
        let interface = InterfaceCoefficients::derive(interface, &ratios, nu)?;
        let response = ResponseCoefficients::new(&interface, nu, load.lateral_ratio);
        Ok(TunnelCoefficients {
            ratios,
            interface,
            response,
        })
    }
}

/// One row of the response field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseSample {
    #[serde(rename = "theta_deg")]
    pub theta_deg: f64,
    /// Radial displacement.
    #[serde(rename = "ua")]
    pub u: f64,
    /// Tangential displacement.
    #[serde(rename = "va")]
    pub v: f64,
    /// Radial interface stress.
    #[serde(rename = "sigR")]
    pub sigma_r: f64,
    /// Interface shear stress.
    #[serde(rename = "tauRT")]
    pub tau_rt: f64,
    /// Thrust per unit length.
    #[serde(rename = "T")]
    pub thrust: f64,
    /// Bending moment per unit length.
    #[serde(rename = "M")]
    pub moment: f64,
}

/// Evaluator bound to a derived coefficient set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TunnelSolution {
    pub coefficients: TunnelCoefficients,
    pub load: LoadState,
    pub radius: f64,
    displacement_scale: f64,
}

impl TunnelSolution {
    pub fn new(
        ground: &GroundProperties,
        lining: &LiningProperties,
        interface: InterfaceCondition,
        load: &LoadState,
    ) -> MechResult<Self> {
        let coefficients = TunnelCoefficients::derive(ground, lining, interface, load)?;
        let e = require_positive("young_modulus", ground.young())?;
        let r = lining.radius;
        Ok(TunnelSolution {
            coefficients,
            load: *load,
            radius: r,
            displacement_scale: load.vertical_stress * r * (1.0 + ground.poisson()) / e,
        })
    }

    /// P R (1 + ν) / E, the factor in front of both displacement components.
    pub fn displacement_scale(&self) -> f64 {
        self.displacement_scale
    }

    /// Response at `theta_deg`, measured from the horizontal springline.
    pub fn at(&self, theta_deg: f64) -> ResponseSample {
        let c = &self.coefficients.response;
        let p = self.load.vertical_stress;
        let r = self.radius;
        let (cos2, sin2) = double_angle_harmonics(theta_deg);
        ResponseSample {
            theta_deg,
            u: self.displacement_scale * (c.u1 + c.u2 * cos2),
            v: self.displacement_scale * c.v2 * sin2,
            sigma_r: 0.5 * p * (c.sig_r1 + c.sig_r2 * cos2),
            tau_rt: 0.5 * p * c.tau_rt2 * sin2,
            thrust: 0.5 * p * r * (c.t1 + c.t2 * cos2),
            moment: 0.5 * p * r * r * c.m2 * cos2,
        }
    }

    /// `samples` evenly spaced evaluations over θ ∈ [0°, 90°].
    pub fn field(&self, samples: usize) -> MechResult<ResponseField> {
        let thetas = linspace(0.0, 90.0, samples)?;
        Ok(ResponseField {
            interface: self.coefficients.interface.interface(),
            samples: thetas.into_iter().map(|theta| self.at(theta)).collect(),
        })
    }
}

/// Sampled response over a quarter of the lining.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseField {
    pub interface: InterfaceCondition,
    samples: Vec<ResponseSample>,
}

impl ResponseField {
    pub fn samples(&self) -> &[ResponseSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample with the largest absolute value of `component`.
    pub fn peak<F>(&self, component: F) -> Option<&ResponseSample>
    where
        F: Fn(&ResponseSample) -> f64,
    {
        self.samples
            .iter()
            .max_by(|a, b| component(a).abs().total_cmp(&component(b).abs()))
    }

    /// One column of the field, in sweep order.
    pub fn column<F>(&self, component: F) -> Vec<f64>
    where
        F: Fn(&ResponseSample) -> f64,
    {
        self.samples.iter().map(component).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn ground() -> GroundProperties {
        GroundProperties::new(5e7, 1.791e7).unwrap()
    }

    fn lining() -> LiningProperties {
        LiningProperties::new(2.5e10, 0.15, 0.125, 5.0).unwrap()
    }

    fn solution(interface: InterfaceCondition, k: f64) -> TunnelSolution {
        let load = LoadState::new(6e5, k).unwrap();
        TunnelSolution::new(&ground(), &lining(), interface, &load).unwrap()
    }

    #[test]
    fn test_stiffness_ratios() {
        let ratios = StiffnessRatios::new(&ground(), &lining()).unwrap();
        let e = ground().young();
        let nu = ground().poisson();
        let expected_c = e * 5.0 * (1.0 - 0.15 * 0.15) / (2.5e10 * 0.125 * (1.0 - nu * nu));
        assert_relative_eq!(ratios.compressibility, expected_c, max_relative = 1e-12);
        // F / C = R² A / I = 12 R² / h²
        assert_relative_eq!(
            ratios.flexibility / ratios.compressibility,
            12.0 * 25.0 / (0.125 * 0.125),
            max_relative = 1e-10
        );
    }

    #[test]
    fn test_no_slip_carries_beta_and_b2() {
        let load = LoadState::new(6e5, 0.5).unwrap();
        let coeffs = TunnelCoefficients::derive(&ground(), &lining(), InterfaceCondition::NoSlip, &load).unwrap();
        match coeffs.interface {
            InterfaceCoefficients::NoSlip { beta, b2, a2, .. } => {
                assert_relative_eq!(a2, beta * b2);
            }
            other => panic!("expected no-slip coefficients, got {:?}", other),
        }
    }

    #[test]
    fn test_a0_shared_between_interfaces() {
        let ratios = StiffnessRatios::new(&ground(), &lining()).unwrap();
        let nu = ground().poisson();
        let bonded = InterfaceCoefficients::derive(InterfaceCondition::NoSlip, &ratios, nu).unwrap();
        let slip = InterfaceCoefficients::derive(InterfaceCondition::FullSlip, &ratios, nu).unwrap();
        assert_eq!(bonded.a0(), slip.a0());
        assert_eq!(slip.interface(), InterfaceCondition::FullSlip);
        let (c, f) = (ratios.compressibility, ratios.flexibility);
        let expected_a2 = (f + 6.0) * (1.0 - nu) / (2.0 * f * (1.0 - nu) + 6.0 * (5.0 - 6.0 * nu));
        assert_relative_eq!(slip.a2(), expected_a2);
        assert_relative_eq!(bonded.a0(), c * f * (1.0 - nu) / (c + f + c * f * (1.0 - nu)));
    }

    #[test]
    fn test_degenerate_b2_denominator_is_reported() {
        // ν = 0 and C = 0 collapse the b2 denominator to -12β with β = 0.
        let ratios = StiffnessRatios {
            compressibility: 0.0,
            flexibility: 10.0,
        };
        let err = InterfaceCoefficients::derive(InterfaceCondition::NoSlip, &ratios, 0.0).unwrap_err();
        assert_eq!(err.quantity(), Some("b2"));
        let ratios = StiffnessRatios {
            compressibility: 0.0,
            flexibility: 0.0,
        };
        let err = InterfaceCoefficients::derive(InterfaceCondition::FullSlip, &ratios, 0.0).unwrap_err();
        assert_eq!(err.quantity(), Some("a0"));
    }

    #[test]
    fn test_zero_beta_denominator_is_reported() {
        let ratios = StiffnessRatios {
            compressibility: 1.0,
            flexibility: 1.0,
        };
        // 3 + 3 + 2(1 - ν) = 0 when ν = 4; a0 survives since 1 + 1 - 3 ≠ 0.
        let err = InterfaceCoefficients::derive(InterfaceCondition::NoSlip, &ratios, 4.0).unwrap_err();
        assert_eq!(err.quantity(), Some("beta"));
    }

    #[test]
    fn test_full_slip_has_no_interface_shear() {
        for k in [0.0, 0.5, 1.0, 2.0] {
            let field = solution(InterfaceCondition::FullSlip, k).field(200).unwrap();
            assert!(field.samples().iter().all(|s| s.tau_rt == 0.0));
        }
    }

    #[test]
    fn test_tangential_displacement_vanishes_at_endpoints() {
        for interface in [InterfaceCondition::NoSlip, InterfaceCondition::FullSlip] {
            let field = solution(interface, 0.5).field(200).unwrap();
            let samples = field.samples();
            assert_eq!(samples[0].theta_deg, 0.0);
            assert_eq!(samples[199].theta_deg, 90.0);
            assert_eq!(samples[0].v, 0.0);
            assert_eq!(samples[199].v, 0.0);
            assert_eq!(samples[0].tau_rt, 0.0);
            assert_eq!(samples[199].tau_rt, 0.0);
        }
    }

    #[test]
    fn test_even_harmonic_relation_between_endpoints() {
        let sol = solution(InterfaceCondition::NoSlip, 0.5);
        let c = sol.coefficients.response;
        let scale = sol.displacement_scale();
        let (u0, u90) = (sol.at(0.0).u, sol.at(90.0).u);
        assert_relative_eq!(u0 + u90, 2.0 * scale * c.u1, max_relative = 1e-12);
        assert_relative_eq!(u0 - u90, 2.0 * scale * c.u2, max_relative = 1e-12);
    }

    #[test]
    fn test_hydrostatic_scenario() {
        let sol = solution(InterfaceCondition::NoSlip, 1.0);
        let c = sol.coefficients.response;
        let p = 6e5;
        assert_relative_eq!(sol.at(0.0).sigma_r, 0.5 * p * (c.sig_r1 + c.sig_r2));
        assert_eq!(sol.at(45.0).sigma_r, 0.5 * p * c.sig_r1);
    }

    #[test]
    fn test_hydrostatic_response_is_axisymmetric() {
        let c = solution(InterfaceCondition::NoSlip, 1.0).coefficients.response;
        for value in [c.u2, c.v2, c.t2, c.m2, c.sig_r2, c.tau_rt2] {
            assert_abs_diff_eq!(value, 0.0);
        }
        // Full slip keeps a (1 + K) thrust harmonic; everything else vanishes.
        let sol = solution(InterfaceCondition::FullSlip, 1.0);
        let c = sol.coefficients.response;
        for value in [c.u2, c.v2, c.m2, c.sig_r2, c.tau_rt2] {
            assert_abs_diff_eq!(value, 0.0);
        }
        assert_relative_eq!(c.t2, 2.0 * (1.0 - 2.0 * sol.coefficients.interface.a2()));
    }

    /// Reference case: bulk 5e7, shear 1.791e7, Es 2.5e10, νs 0.15, As 0.125, R 5, P 6e5, K 0.5.
    fn assert_coefficients(c: &TunnelCoefficients, interface: &[f64], response: [f64; 9]) {
        let tol = 1e-9;
        assert_relative_eq!(c.ratios.compressibility, 0.08488300502436384, max_relative = tol);
        assert_relative_eq!(c.ratios.flexibility, 1629.7536964677859, max_relative = tol);
        let derived: Vec<f64> = match c.interface {
            InterfaceCoefficients::NoSlip { beta, b2, a0, a2 } => vec![beta, b2, a0, a2],
            InterfaceCoefficients::FullSlip { a0, a2 } => vec![a0, a2],
        };
        assert_eq!(derived.len(), interface.len());
        for (got, want) in derived.iter().zip(interface) {
            assert_relative_eq!(*got, *want, max_relative = tol);
        }
        let r = &c.response;
        let got = [r.u1, r.u2, r.v2, r.t1, r.t2, r.m2, r.sig_r1, r.sig_r2, r.tau_rt2];
        for (got, want) in got.iter().zip(response) {
            assert_relative_eq!(*got, want, max_relative = tol);
        }
    }

    fn assert_sample(s: &ResponseSample, want: [f64; 6]) {
        let got = [s.u, s.v, s.sigma_r, s.tau_rt, s.thrust, s.moment];
        for (got, want) in got.iter().zip(want) {
            assert_relative_eq!(*got, want, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_no_slip_reference_values() {
        let sol = solution(InterfaceCondition::NoSlip, 0.5);
        assert_coefficients(
            &sol.coefficients,
            &[0.23656435618732205, -0.6497901980439865, 0.05304784524226572, -0.15371719985710816],
            [
                0.03978588393169929,
                -0.3520006088573109,
                0.1808227096924258,
                1.4204282321366015,
                0.3462828001428918,
                0.0019635009065608333,
                1.4204282321366015,
                0.3384287965166486,
                0.6886385984726621,
            ],
        );
        assert_sample(
            &sol.at(0.0),
            [-0.026148636928443183, 0.0, 527657.108595975, 0.0, 2650066.54841924, 14726.25679920625],
        );
        assert_sample(
            &sol.at(30.0),
            [
                -0.011408242922693148,
                0.013115331672929597,
                476892.7891184777,
                178913.5560911511,
                2390354.448312071,
                7363.128399603127,
            ],
        );
        assert_sample(
            &sol.at(90.0),
            [0.032812939094556966, 0.0, 324599.83068598586, 0.0, 1611218.1479905648, -14726.25679920625],
        );
    }

    #[test]
    fn test_full_slip_reference_values() {
        let sol = solution(InterfaceCondition::FullSlip, 0.5);
        assert_coefficients(
            &sol.coefficients,
            &[0.05304784524226572, 0.49773171751270645],
            [
                0.03978588393169929,
                -0.4066393928919965,
                0.20331969644599826,
                1.4204282321366015,
                0.006804847461880648,
                0.002268282487293549,
                1.4204282321366015,
                -0.006804847461880703,
                0.0,
            ],
        );
        assert_sample(
            &sol.at(0.0),
            [-0.03072474949416225, 0.0, 424087.01540241623, 0.0, 2140849.619397723, 17012.11865470162],
        );
        assert_sample(
            &sol.at(30.0),
            [
                -0.013696299205552683,
                0.014747070537016344,
                425107.7425216983,
                0.0,
                2135745.9838013127,
                8506.059327350811,
            ],
        );
        assert_sample(
            &sol.at(90.0),
            [0.037389051660276035, 0.0, 428169.92387954466, 0.0, 2120435.077012081, -17012.11865470162],
        );
    }

    #[test]
    fn test_symmetry_about_quadrant_axes() {
        let sol = solution(InterfaceCondition::NoSlip, 0.4);
        for theta in [10.0, 27.5, 40.0] {
            let a = sol.at(theta);
            let b = sol.at(-theta);
            assert_relative_eq!(a.u, b.u, max_relative = 1e-12);
            assert_relative_eq!(a.moment, b.moment, max_relative = 1e-12);
            assert_relative_eq!(a.v, -b.v, max_relative = 1e-12);
            let c = sol.at(180.0 - theta);
            assert_relative_eq!(a.thrust, c.thrust, max_relative = 1e-12);
            assert_relative_eq!(a.tau_rt, -c.tau_rt, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_peak_moment_at_crown_or_springline() {
        let field = solution(InterfaceCondition::FullSlip, 0.5).field(200).unwrap();
        let peak = field.peak(|s| s.moment).unwrap();
        assert!(peak.theta_deg == 0.0 || peak.theta_deg == 90.0);
        assert_eq!(field.column(|s| s.theta_deg).len(), 200);
    }

    #[test]
    fn test_field_rejects_single_sample() {
        let err = solution(InterfaceCondition::NoSlip, 0.5).field(1).unwrap_err();
        assert_eq!(err.quantity(), Some("samples"));
    }

    #[test]
    fn test_interface_parsing() {
        assert_eq!("No-Slip".parse::<InterfaceCondition>().unwrap(), InterfaceCondition::NoSlip);
        assert_eq!("full_slip".parse::<InterfaceCondition>().unwrap(), InterfaceCondition::FullSlip);
        let err = "sticky".parse::<InterfaceCondition>().unwrap_err();
        assert_eq!(err.code(), "OPTION");
        assert!(err.to_string().contains("'sticky'"));
    }
}
