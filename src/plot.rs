//! Figures for the tabulated fields.
//!
//! Rendering goes through `plotpy`, which writes a matplotlib script next to
//! the figure and runs it with `python3`.

use anyhow::{anyhow, Result};
use plotpy::{Curve, Plot};
use std::path::Path;

use crate::capacity::CapacityEnvelope;
use crate::reference::ReferenceData;
use crate::tunnel::ResponseField;

fn line(label: &str, color: &str, x: &[f64], y: &[f64]) -> Curve {
    let mut curve = Curve::new();
    curve.set_label(label).set_line_color(color);
    curve.draw(&x, &y);
    curve
}

fn markers(reference: &ReferenceData, color: &str) -> Curve {
    let name = reference
        .source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut curve = Curve::new();
    curve
        .set_label(&format!("{} data", name))
        .set_line_style("None")
        .set_marker_style("+")
        .set_marker_color(color)
        .set_marker_line_color(color);
    curve.draw(&reference.x(), &reference.y());
    curve
}

fn save(plot: &mut Plot, path: &Path) -> Result<()> {
    plot.save(path).map_err(|e| anyhow!("failed to render {}: {}", path.display(), e))
}

/// Four panels: displacements, interface stresses, thrust and moment against θ.
pub fn plot_response(field: &ResponseField, path: &Path) -> Result<()> {
    let theta = field.column(|s| s.theta_deg);
    let mut plot = Plot::new();

    plot.set_subplot(2, 2, 1)
        .set_title("Support Displacements")
        .add(&line("ua", "#1f77b4", &theta, &field.column(|s| s.u)))
        .add(&line("va", "#ff7f0e", &theta, &field.column(|s| s.v)))
        .grid_labels_legend("Theta (deg)", "Displacement (m)");

    plot.set_subplot(2, 2, 2)
        .set_title("Interface Stresses")
        .add(&line("sigR", "#1f77b4", &theta, &field.column(|s| s.sigma_r)))
        .add(&line("tauRT", "#ff7f0e", &theta, &field.column(|s| s.tau_rt)))
        .grid_labels_legend("Theta (deg)", "Stress (Pa)");

    plot.set_subplot(2, 2, 3)
        .set_title("Stress Resultant T")
        .add(&line("T", "#1f77b4", &theta, &field.column(|s| s.thrust)))
        .grid_labels_legend("Theta (deg)", "Axial Force (N/m)");

    plot.set_subplot(2, 2, 4)
        .set_title("Stress Resultant M")
        .add(&line("M", "#1f77b4", &theta, &field.column(|s| s.moment)))
        .grid_labels_legend("Theta (deg)", "Moment (N.m/m)");

    plot.set_figure_size_points(864.0, 576.0);
    save(&mut plot, path)
}

/// Q–N diagram with both shear signs, optionally overlaid with reference points.
pub fn plot_qn(envelope: &CapacityEnvelope, reference: Option<&ReferenceData>, path: &Path) -> Result<()> {
    let mut plot = Plot::new();
    for (curve, label, color) in [
        (&envelope.compression, "Q-N (Compression)", "b"),
        (&envelope.tension, "Q-N (Tension)", "r"),
    ] {
        let n = curve.n_values();
        plot.add(&line(label, color, &curve.q_values(), &n));
        plot.add(&line("", color, &curve.mirrored().q_values(), &n));
    }
    if let Some(reference) = reference {
        plot.add(&markers(reference, "r"));
    }
    plot.set_title("Q-N Interaction Diagram")
        .grid_labels_legend("Shear Force Q (N)", "Axial Force N (N)")
        .set_figure_size_points(576.0, 504.0);
    save(&mut plot, path)
}

/// M–N polygon, optionally overlaid with reference points.
pub fn plot_mn(envelope: &CapacityEnvelope, reference: Option<&ReferenceData>, path: &Path) -> Result<()> {
    let vertices = envelope.mn.vertices();
    let m: Vec<f64> = vertices.iter().map(|p| p.m).collect();
    let n: Vec<f64> = vertices.iter().map(|p| p.n).collect();
    let mut plot = Plot::new();
    plot.add(&line("M-N Envelope (Analytic)", "r", &m, &n));
    if let Some(reference) = reference {
        plot.add(&markers(reference, "b"));
    }
    plot.set_title("Moment-Axial (M-N) Interaction")
        .grid_labels_legend("Moment M (N.m)", "Axial Force N (N)")
        .set_figure_size_points(576.0, 504.0);
    save(&mut plot, path)
}
