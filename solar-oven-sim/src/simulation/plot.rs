use std::path::{Path, PathBuf};

use oven_model::{CookingPhase, OvenType, TimeSeriesPoint};
use plotters::prelude::*;
use tracing::info;

use crate::error::{Result, SimulationError};
use crate::simulation::stats::phase_averages;
use crate::simulation::thermal::Dataset;

const ORANGE: RGBColor = RGBColor(255, 165, 0);

fn design_color(oven_type: OvenType) -> RGBColor {
    match oven_type {
        OvenType::Box => RED,
        OvenType::Parabolic => BLUE,
        OvenType::Funnel => GREEN,
    }
}

fn phase_color(phase: CookingPhase) -> RGBColor {
    match phase {
        CookingPhase::Warmup => ORANGE,
        CookingPhase::Cooking => RGBColor(220, 20, 60),
        CookingPhase::Maintenance => RGBColor(70, 130, 180),
    }
}

/// Min and max of a value over all records
fn value_range(
    records: &[TimeSeriesPoint],
    value: impl Fn(&TimeSeriesPoint) -> f64,
) -> (f64, f64) {
    records
        .iter()
        .map(value)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

fn ensure_records(dataset: &Dataset) -> Result<()> {
    if dataset.is_empty() {
        return Err(SimulationError::invalid_input("no records to plot"));
    }
    Ok(())
}

/// Line chart of temperature over time per design with the cooking threshold
pub fn plot_temperature_evolution(
    dataset: &Dataset,
    threshold_c: f64,
    filename: &Path,
) -> Result<()> {
    ensure_records(dataset)?;

    let root = BitMapBackend::new(filename, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let (min_temp, max_temp) = value_range(&dataset.records, |p| p.temperature_c);
    let x_max = (dataset.duration_minutes() as f64).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Temperature Evolution by Oven Type", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            0f64..x_max,
            (min_temp * 0.9)..(max_temp.max(threshold_c) * 1.1),
        )?;

    chart
        .configure_mesh()
        .x_desc("Time (minutes)")
        .y_desc("Temperature (°C)")
        .draw()?;

    for oven_type in dataset.oven_types() {
        let color = design_color(oven_type);
        let series: Vec<(f64, f64)> = dataset
            .records_for(oven_type)
            .map(|p| (p.time_minutes as f64, p.temperature_c))
            .collect();

        chart
            .draw_series(LineSeries::new(series.clone(), color.stroke_width(2)))?
            .label(format!("{} Oven", oven_type))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 15, y)], color.stroke_width(2))
            });

        chart.draw_series(
            series
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
        )?;
    }

    chart
        .draw_series(LineSeries::new(
            vec![(0.0, threshold_c), (x_max, threshold_c)],
            BLACK.mix(0.7).stroke_width(1),
        ))?
        .label("Cooking Threshold")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 15, y)], BLACK.mix(0.7)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    info!("Plot saved as {}", filename.display());
    Ok(())
}

/// Box plot of the temperature distribution per design
pub fn plot_temperature_distribution(dataset: &Dataset, filename: &Path) -> Result<()> {
    ensure_records(dataset)?;

    let oven_types = dataset.oven_types();
    let labels: Vec<&str> = oven_types.iter().map(|o| o.name()).collect();
    let quartiles: Vec<Quartiles> = oven_types
        .iter()
        .map(|&oven_type| {
            let temps: Vec<f64> = dataset
                .records_for(oven_type)
                .map(|p| p.temperature_c)
                .collect();
            Quartiles::new(&temps)
        })
        .collect();

    let (min_temp, max_temp) = value_range(&dataset.records, |p| p.temperature_c);

    let root = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Temperature Distribution by Oven Type", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            labels[..].into_segmented(),
            (min_temp as f32 - 5.0)..(max_temp as f32 + 5.0),
        )?;

    chart
        .configure_mesh()
        .x_desc("Oven Type")
        .y_desc("Temperature (°C)")
        .light_line_style(WHITE)
        .draw()?;

    chart.draw_series(
        labels
            .iter()
            .zip(oven_types.iter())
            .zip(quartiles.iter())
            .map(|((label, &oven_type), q)| {
                Boxplot::new_vertical(SegmentValue::CenterOf(label), q)
                    .width(40)
                    .style(design_color(oven_type))
            }),
    )?;

    root.present()?;
    info!("Plot saved as {}", filename.display());
    Ok(())
}

/// Scatter plot of irradiance against temperature per design
pub fn plot_radiation_response(dataset: &Dataset, filename: &Path) -> Result<()> {
    ensure_records(dataset)?;

    let (min_rad, max_rad) = value_range(&dataset.records, |p| p.solar_radiation);
    let (min_temp, max_temp) = value_range(&dataset.records, |p| p.temperature_c);

    let root = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Solar Radiation vs Temperature Response", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (min_rad * 0.95)..(max_rad * 1.05),
            (min_temp * 0.9)..(max_temp * 1.1),
        )?;

    chart
        .configure_mesh()
        .x_desc("Solar Radiation (W/m²)")
        .y_desc("Temperature (°C)")
        .draw()?;

    for oven_type in dataset.oven_types() {
        let color = design_color(oven_type);
        chart
            .draw_series(dataset.records_for(oven_type).map(|p| {
                Circle::new(
                    (p.solar_radiation, p.temperature_c),
                    4,
                    color.mix(0.6).filled(),
                )
            }))?
            .label(oven_type.name())
            .legend(move |(x, y)| Circle::new((x + 5, y), 4, color.mix(0.6).filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    info!("Plot saved as {}", filename.display());
    Ok(())
}

/// Grouped bar chart of the average temperature per design and cooking phase
pub fn plot_phase_averages(dataset: &Dataset, filename: &Path) -> Result<()> {
    let averages = phase_averages(&dataset.records)?;
    let names: Vec<&str> = averages.keys().map(|o| o.name()).collect();

    let max_avg = averages
        .values()
        .flat_map(|phases| phases.values())
        .fold(0f64, |a, &b| a.max(b));

    let root = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let label_formatter = |x: &f64| {
        let index = x.round();
        if (x - index).abs() < 1e-6 && index >= 0.0 && (index as usize) < names.len() {
            names[index as usize].to_string()
        } else {
            String::new()
        }
    };

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Temperature by Cooking Phase", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5f64..(names.len() as f64 - 0.5), 0f64..(max_avg * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Oven Type")
        .y_desc("Average Temperature (°C)")
        .x_labels(names.len())
        .x_label_formatter(&label_formatter)
        .disable_x_mesh()
        .draw()?;

    let bar_width = 0.8 / CookingPhase::ALL.len() as f64;

    for (j, phase) in CookingPhase::ALL.into_iter().enumerate() {
        let color = phase_color(phase);
        chart
            .draw_series(averages.values().enumerate().filter_map(|(i, phases)| {
                phases.get(&phase).map(|&avg| {
                    let x0 = i as f64 - 0.4 + j as f64 * bar_width;
                    Rectangle::new([(x0, 0.0), (x0 + bar_width * 0.9, avg)], color.filled())
                })
            }))?
            .label(phase.name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    info!("Plot saved as {}", filename.display());
    Ok(())
}

/// Render all four charts into `output_dir` and return the written files
pub fn render_all(
    dataset: &Dataset,
    threshold_c: f64,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)?;

    let evolution = output_dir.join("temperature_evolution.png");
    let distribution = output_dir.join("temperature_distribution.png");
    let response = output_dir.join("radiation_response.png");
    let phases = output_dir.join("phase_averages.png");

    plot_temperature_evolution(dataset, threshold_c, &evolution)?;
    plot_temperature_distribution(dataset, &distribution)?;
    plot_radiation_response(dataset, &response)?;
    plot_phase_averages(dataset, &phases)?;

    Ok(vec![evolution, distribution, response, phases])
}
