use oven_model::OvenType;

use crate::simulation::analysis::AnalysisResults;

pub const ENVIRONMENTAL_IMPACT: [&str; 4] = [
    "Zero CO2 emissions during cooking",
    "Reduces dependence on fossil fuels",
    "Can be built with recycled materials",
    "Ideal for off-grid communities",
];

fn heading(lines: &mut Vec<String>, title: &str, width: usize) {
    lines.push(title.to_string());
    lines.push("=".repeat(width));
}

/// Human readable time to cooking temperature
pub fn format_cooking_time(oven_type: OvenType, minutes: Option<u32>) -> String {
    match minutes {
        Some(minutes) => format!("{}: {} minutes", oven_type, minutes),
        None => format!("{}: Never reached cooking temperature", oven_type),
    }
}

/// Build the full console report for an analysis run
pub fn render_report(results: &AnalysisResults) -> String {
    let mut lines: Vec<String> = Vec::new();
    let dataset = &results.dataset;
    let oven_types = dataset.oven_types();

    heading(&mut lines, "🌞 Solar Oven Efficiency Analysis - Sustainable Tech", 50);
    lines.push(format!("📊 Dataset created: {} measurements", dataset.len()));
    let names: Vec<&str> = oven_types.iter().map(|o| o.name()).collect();
    lines.push(format!("🔥 Oven types: {}", names.join(", ")));
    lines.push(format!("⏱️ Duration: {} minutes", dataset.duration_minutes()));
    lines.push(String::new());

    heading(&mut lines, "📈 TEMPERATURE STATISTICS BY OVEN TYPE", 40);
    lines.push(format!("{:<12}{:>10}{:>10}{:>10}", "Oven_Type", "mean", "max", "std"));
    for (oven_type, stats) in &results.temperature {
        lines.push(format!(
            "{:<12}{:>10.2}{:>10.2}{:>10.2}",
            oven_type.name(),
            stats.mean,
            stats.max,
            stats.std
        ));
    }
    lines.push(String::new());

    heading(&mut lines, "⚡ EFFICIENCY ANALYSIS", 25);
    lines.push(format!(
        "{:<12}{:>10}{:>10}{:>17}{:>18}",
        "Oven_Type", "Avg_Temp", "Max_Temp", "Avg_Solar_Input", "Efficiency_Ratio"
    ));
    for (oven_type, stats) in &results.efficiency {
        lines.push(format!(
            "{:<12}{:>10.2}{:>10.2}{:>17.2}{:>18.2}",
            oven_type.name(),
            stats.avg_temp,
            stats.max_temp,
            stats.avg_solar_input,
            stats.efficiency_ratio
        ));
    }
    lines.push(String::new());

    heading(
        &mut lines,
        &format!(
            "🍳 TIME TO COOKING TEMPERATURE ({}°C)",
            results.config.cooking_threshold_c
        ),
        35,
    );
    for (&oven_type, &minutes) in &results.cooking_times {
        lines.push(format_cooking_time(oven_type, minutes));
    }
    lines.push(String::new());

    heading(&mut lines, "🌱 SUSTAINABILITY INSIGHTS", 30);
    for oven_type in OvenType::ALL {
        lines.push(format!("• {} ovens: {}", oven_type, oven_type.insight()));
    }
    lines.push(String::new());

    heading(&mut lines, "💡 COOKING RECOMMENDATIONS", 25);
    for oven_type in OvenType::ALL {
        let (dishes, reason) = oven_type.recommendation();
        lines.push(format!("• {}: {} oven ({})", dishes, oven_type, reason));
    }
    lines.push(String::new());

    heading(&mut lines, "🌍 ENVIRONMENTAL IMPACT", 25);
    for line in ENVIRONMENTAL_IMPACT {
        lines.push(format!("• {}", line));
    }

    lines.join("\n")
}

/// Print the console report
pub fn print_report(results: &AnalysisResults) {
    println!("{}", render_report(results));
    println!("🌞 Topic: Sustainable technology meets data science 🌞");
    println!("Solar Oven Selection Guide: It Depends on Your Needs!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::analysis::analyze;
    use crate::simulation::config::SimulationConfig;

    #[test]
    fn test_format_cooking_time() {
        assert_eq!(
            format_cooking_time(OvenType::Parabolic, Some(45)),
            "Parabolic: 45 minutes"
        );
        assert_eq!(
            format_cooking_time(OvenType::Box, None),
            "Box: Never reached cooking temperature"
        );
    }

    #[test]
    fn test_report_sections() {
        let results = analyze(SimulationConfig::deterministic()).unwrap();
        let report = render_report(&results);

        assert!(report.contains("📊 Dataset created: 72 measurements"));
        assert!(report.contains("🔥 Oven types: Box, Parabolic, Funnel"));
        assert!(report.contains("⏱️ Duration: 115 minutes"));
        assert!(report.contains("TIME TO COOKING TEMPERATURE (80°C)"));
        assert!(report.contains("• Bread/Rice: Box oven (steady temperature)"));
        assert!(report.contains("• Meat/Vegetables: Parabolic oven (high heat)"));
        assert!(report.contains("• Stews/Soups: Funnel oven (moderate, consistent)"));
        for line in ENVIRONMENTAL_IMPACT {
            assert!(report.contains(line));
        }
    }

    #[test]
    fn test_headings_are_underlined() {
        let results = analyze(SimulationConfig::deterministic()).unwrap();
        let report = render_report(&results);
        let lines: Vec<&str> = report.lines().collect();

        let efficiency = lines
            .iter()
            .position(|line| *line == "⚡ EFFICIENCY ANALYSIS")
            .unwrap();
        assert_eq!(lines[efficiency + 1], "=".repeat(25));
        assert_eq!(lines.last().copied(), Some("• Ideal for off-grid communities"));
    }

    #[test]
    fn test_report_lists_every_design_in_tables() {
        let results = analyze(SimulationConfig::seeded(8)).unwrap();
        let report = render_report(&results);

        for oven_type in OvenType::ALL {
            let rows = report
                .lines()
                .filter(|line| line.starts_with(oven_type.name()))
                .count();
            // temperature table, efficiency table and cooking time line
            assert_eq!(rows, 3);
        }
    }
}
