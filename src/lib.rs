// src/lib.rs
//! Closed-form calculators for a lined circular tunnel and for the
//! interaction envelopes of a structural section.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

pub mod capacity;
pub mod error;
pub mod material;
pub mod reference;
pub mod sweep;
pub mod table;
pub mod tunnel;

pub mod config;
#[cfg(feature = "cli")]
pub mod app_logic;
#[cfg(feature = "plot")]
pub mod plot;

pub use error::{MechError, MechResult};

// When the "wasm" feature is enabled, expose the evaluators to the host environment.
#[cfg(feature = "wasm")]
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn tunnel_response(
    full_slip: bool,
    bulk_modulus: f64,
    shear_modulus: f64,
    lining_modulus: f64,
    lining_poisson: f64,
    lining_area: f64,
    radius: f64,
    vertical_stress: f64,
    lateral_ratio: f64,
    samples: usize,
) -> Result<Vec<f64>, JsValue> {
    use tunnel::{InterfaceCondition, LoadState, TunnelSolution};

    let run = || -> MechResult<Vec<f64>> {
        let ground = material::GroundProperties::new(bulk_modulus, shear_modulus)?;
        let lining = material::LiningProperties::new(lining_modulus, lining_poisson, lining_area, radius)?;
        let load = LoadState::new(vertical_stress, lateral_ratio)?;
        let interface = if full_slip {
            InterfaceCondition::FullSlip
        } else {
            InterfaceCondition::NoSlip
        };
        let field = TunnelSolution::new(&ground, &lining, interface, &load)?.field(samples)?;
        // Row-major: theta, u, v, sigR, tauRT, T, M for each sample.
        Ok(field
            .samples()
            .iter()
            .flat_map(|s| [s.theta_deg, s.u, s.v, s.sigma_r, s.tau_rt, s.thrust, s.moment])
            .collect())
    };
    run().map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub fn qn_table(
    area: f64,
    inertia: f64,
    extreme_fiber: f64,
    sigma_max: f64,
    sigma_min: f64,
    factor_of_safety: f64,
    samples: usize,
) -> Result<Vec<f64>, JsValue> {
    let section = capacity::SectionProperties {
        area,
        inertia,
        extreme_fiber,
        sigma_max,
        sigma_min,
        factor_of_safety,
    };
    let envelope = capacity::CapacityEnvelope::evaluate(&section, samples).map_err(|e| JsValue::from_str(&e.to_string()))?;
    // Interleaved N, Q pairs, tension branch first.
    Ok(envelope.qn_table().iter().flat_map(|p| [p.n, p.q]).collect())
}
