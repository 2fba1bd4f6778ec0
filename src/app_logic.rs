//! A module for the main application logic of the calculators
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::capacity::{CapacityEnvelope, CapacityLimits};
use crate::config::{load_config, CapacityConfig, Config, TunnelConfig};
use crate::reference::{load_reference, ReferenceData};
use crate::table::write_table;
use crate::tunnel::{
    InterfaceCoefficients, InterfaceCondition, ResponseField, ResponseSample, TunnelCoefficients, TunnelSolution,
};

/// How results are reported besides the CSV tables.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Directory receiving SVG figures.
    pub plot_dir: Option<PathBuf>,
    /// Print the summary as JSON instead of plain text.
    pub json: bool,
}

/// Reads the scenario file if one is given, otherwise uses the reference case.
pub fn load_scenario(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => {
            info!(path = %path.display(), "loading scenario");
            load_config(path)
        }
        None => Ok(Config::default()),
    }
}

#[derive(Debug, Serialize)]
pub struct TunnelSummary {
    pub interface: InterfaceCondition,
    pub young_modulus: f64,
    pub poisson_ratio: f64,
    pub coefficients: TunnelCoefficients,
    pub peak_thrust: ResponseSample,
    pub peak_moment: ResponseSample,
    pub output: PathBuf,
}

pub fn run_tunnel(config: &TunnelConfig, report: &ReportOptions) -> Result<ResponseField> {
    config.validate()?;
    let solution = TunnelSolution::new(&config.ground, &config.lining, config.interface, &config.load)?;
    debug!(coefficients = ?solution.coefficients, "derived tunnel coefficients");

    let field = solution.field(config.samples)?;
    write_table(&config.output, field.samples())?;
    info!(path = %config.output.display(), rows = field.len(), "wrote response table");

    let summary = TunnelSummary {
        interface: config.interface,
        young_modulus: config.ground.young(),
        poisson_ratio: config.ground.poisson(),
        coefficients: solution.coefficients,
        peak_thrust: *field.peak(|s| s.thrust).context("empty response field")?,
        peak_moment: *field.peak(|s| s.moment).context("empty response field")?,
        output: config.output.clone(),
    };
    if report.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_tunnel_summary(&summary);
    }

    if let Some(dir) = &report.plot_dir {
        plot_tunnel(&field, dir)?;
    }
    Ok(field)
}

fn print_tunnel_summary(summary: &TunnelSummary) {
    let c = &summary.coefficients;
    println!("Interface: {}", summary.interface);
    println!("E  = {:.6e}, nu = {:.6}", summary.young_modulus, summary.poisson_ratio);
    println!("C  = {:.6e}, F  = {:.6e}", c.ratios.compressibility, c.ratios.flexibility);
    match c.interface {
        InterfaceCoefficients::NoSlip { beta, b2, a0, a2 } => {
            println!("beta = {:.6e}, b2 = {:.6e}, a0 = {:.6e}, a2 = {:.6e}", beta, b2, a0, a2)
        }
        InterfaceCoefficients::FullSlip { a0, a2 } => {
            println!("a0 = {:.6e}, a2 = {:.6e}", a0, a2)
        }
    }
    let r = &c.response;
    println!("U1 = {:.6e}, U2 = {:.6e}, V2 = {:.6e}", r.u1, r.u2, r.v2);
    println!("T1 = {:.6e}, T2 = {:.6e}, M2 = {:.6e}", r.t1, r.t2, r.m2);
    println!("sigR1 = {:.6e}, sigR2 = {:.6e}, tauRT2 = {:.6e}", r.sig_r1, r.sig_r2, r.tau_rt2);
    println!(
        "max |T| = {:.6e} at {:.2} deg, max |M| = {:.6e} at {:.2} deg",
        summary.peak_thrust.thrust,
        summary.peak_thrust.theta_deg,
        summary.peak_moment.moment,
        summary.peak_moment.theta_deg
    );
    println!("Results saved to {}", summary.output.display());
}

#[derive(Debug, Serialize)]
pub struct CapacitySummary {
    pub limits: CapacityLimits,
    pub qn_output: PathBuf,
    pub mn_output: PathBuf,
}

pub fn run_capacity(config: &CapacityConfig, report: &ReportOptions) -> Result<CapacityEnvelope> {
    config.validate()?;
    let envelope = CapacityEnvelope::evaluate(&config.section, config.samples)?;
    debug!(limits = ?envelope.limits, "derived capacity limits");

    write_table(&config.output, &envelope.qn_table())?;
    info!(path = %config.output.display(), "wrote Q-N table");
    write_table(&config.mn_output, envelope.mn.vertices())?;
    info!(path = %config.mn_output.display(), "wrote M-N envelope");

    let summary = CapacitySummary {
        limits: envelope.limits,
        qn_output: config.output.clone(),
        mn_output: config.mn_output.clone(),
    };
    if report.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let l = &summary.limits;
        println!("N_max = {:.6e}", l.n_max);
        println!("N_min = {:.6e}", l.n_min);
        println!("M_max = {:.6e}", l.m_max);
        println!("M_min = {:.6e}", l.m_min);
        println!("Ncr   = {:.6e}", l.n_cr);
        println!("Q-N table saved to {}", summary.qn_output.display());
        println!("M-N envelope saved to {}", summary.mn_output.display());
    }

    if let Some(dir) = &report.plot_dir {
        plot_capacity(&envelope, config, dir)?;
    }
    Ok(envelope)
}

fn optional_reference(path: Option<&Path>) -> Result<Option<ReferenceData>> {
    path.map(|p| -> Result<ReferenceData> {
        let data = load_reference(p)?;
        debug!(path = %p.display(), points = data.len(), "loaded reference data");
        Ok(data)
    })
    .transpose()
}

fn figure_path(dir: &Path, name: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    Ok(dir.join(name))
}

#[cfg(feature = "plot")]
fn plot_tunnel(field: &ResponseField, dir: &Path) -> Result<()> {
    let path = figure_path(dir, "tunnel_response.svg")?;
    crate::plot::plot_response(field, &path)?;
    info!(path = %path.display(), "wrote figure");
    Ok(())
}

#[cfg(feature = "plot")]
fn plot_capacity(envelope: &CapacityEnvelope, config: &CapacityConfig, dir: &Path) -> Result<()> {
    let qn_reference = optional_reference(config.reference_qn.as_deref())?;
    let mn_reference = optional_reference(config.reference_mn.as_deref())?;

    let path = figure_path(dir, "qn_interaction.svg")?;
    crate::plot::plot_qn(envelope, qn_reference.as_ref(), &path)?;
    info!(path = %path.display(), "wrote figure");

    let path = figure_path(dir, "mn_interaction.svg")?;
    crate::plot::plot_mn(envelope, mn_reference.as_ref(), &path)?;
    info!(path = %path.display(), "wrote figure");
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn plot_tunnel(_field: &ResponseField, dir: &Path) -> Result<()> {
    tracing::warn!(dir = %dir.display(), "built without the plot feature, figures skipped");
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn plot_capacity(_envelope: &CapacityEnvelope, config: &CapacityConfig, dir: &Path) -> Result<()> {
    // Reference files are still checked so a bad path fails the same way in every build.
    optional_reference(config.reference_qn.as_deref())?;
    optional_reference(config.reference_mn.as_deref())?;
    tracing::warn!(dir = %dir.display(), "built without the plot feature, figures skipped");
    Ok(())
}
