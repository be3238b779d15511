//! Command line tool that fits a polynomial through samples read from a
//! text file and writes an interactive HTML plot of the result.
//!
//! The input file contains one sample per line in the form `x, y`, where
//! `y` is either a number or one of `cos(a)`, `sin(a)`, `tan(a)`. The
//! Unicode minus sign is accepted wherever a minus sign can appear, so
//! data copied out of spreadsheets or typeset documents works as is. For
//! `n` samples the fitted polynomial has degree `n - 1` and passes through
//! every sample exactly.

use clap::Parser;
use plotly::{
    common::{Line, Marker, Mode, Title},
    Layout, Plot, Scatter,
};
use std::path::PathBuf;

use gepp::prelude::*;

/// CLI arguments for the polynomial fit plotter
#[derive(Parser)]
#[command(name = "fitplot")]
#[command(about = "Fit a polynomial through samples from a text file and plot it")]
struct Args {
    /// Input file with one `x, y` sample per line
    input: PathBuf,

    /// Path of the HTML file the plot is written to
    #[arg(short, long, default_value = "fit.html")]
    output: PathBuf,

    /// Number of points on the plotted polynomial curve
    #[arg(long, default_value = "500")]
    curve_points: usize,

    /// Width of the plot in pixels
    #[arg(short = 'W', long, default_value = "900")]
    width: usize,

    /// Height of the plot in pixels
    #[arg(short = 'H', long, default_value = "600")]
    height: usize,
}

fn main() {
    let args = Args::parse();
    if let Err(error) = run(&args) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(&args.input)?;
    let samples = parse_samples(&text)?;

    let problem = PolyFitBuilder::new()
        .samples(samples.iter().copied())
        .build()?;
    println!("coefficient matrix A = {}", problem.matrix());
    println!("right hand side b = {}", problem.rhs());

    // solve the same system with the LU decomposition of nalgebra as a
    // cross check for the elimination solver
    let reference = problem
        .matrix()
        .clone()
        .lu()
        .solve(problem.rhs())
        .ok_or("the reference LU decomposition failed on this system")?;

    let fit = problem.fit()?;
    println!("fitted polynomial: p(x) = {}", fit.polynomial());
    println!(
        "largest residual at the samples: {:.3e}",
        fit.max_residual()
    );
    let deviation = (fit.polynomial().coefficients() - &reference).amax();
    println!("largest deviation from the LU reference: {:.3e}", deviation);

    let plot = build_plot(&fit, args);
    plot.write_html(&args.output);
    println!("plot written to {}", args.output.display());
    Ok(())
}

/// plots the samples as markers and the fitted polynomial as a line over
/// the sampled interval
fn build_plot(fit: &PolyFit<f64>, args: &Args) -> Plot {
    let sample_x: Vec<f64> = fit.samples().iter().map(|sample| sample.x).collect();
    let sample_y: Vec<f64> = fit.samples().iter().map(|sample| sample.y).collect();
    let first = sample_x.iter().copied().fold(f64::INFINITY, f64::min);
    let last = sample_x.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let count = args.curve_points.max(2);
    let curve_x: Vec<f64> = (0..count)
        .map(|idx| first + (last - first) * idx as f64 / (count - 1) as f64)
        .collect();
    let curve_y: Vec<f64> = curve_x.iter().map(|&x| fit.polynomial().eval(x)).collect();

    let sample_trace = Scatter::new(sample_x, sample_y)
        .mode(Mode::Markers)
        .name("samples")
        .marker(Marker::new().color("red").size(8));
    let curve_trace = Scatter::new(curve_x, curve_y)
        .mode(Mode::Lines)
        .name("fitted polynomial")
        .line(Line::new().color("royalblue").width(2.0));

    let layout = Layout::new()
        .title(Title::with_text("Polynomial fit"))
        .width(args.width)
        .height(args.height)
        .x_axis(plotly::layout::Axis::new().title(Title::with_text("x")))
        .y_axis(plotly::layout::Axis::new().title(Title::with_text("y")));

    let mut plot = Plot::new();
    plot.add_trace(sample_trace);
    plot.add_trace(curve_trace);
    plot.set_layout(layout);
    plot
}
