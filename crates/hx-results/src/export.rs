//! Delimited-text and JSON exports.

use hx_engine::CalculationResult;

use crate::ResultsResult;
use crate::types::SavedCalculation;

const HEADER: [&str; 4] = [
    "Height (m)",
    "Material temperature (°C)",
    "Gas temperature (°C)",
    "Temperature difference (°C)",
];

/// Layout of the CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: char,
    /// Prefix with a UTF-8 byte order mark so spreadsheets pick the encoding.
    pub byte_order_mark: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ';',
            byte_order_mark: true,
        }
    }
}

impl CsvOptions {
    pub fn comma() -> Self {
        Self {
            delimiter: ',',
            byte_order_mark: false,
        }
    }
}

/// One header row, then one row per sample.
pub fn to_csv(result: &CalculationResult, options: &CsvOptions) -> String {
    let sep = options.delimiter.to_string();
    let mut csv = String::new();
    if options.byte_order_mark {
        csv.push('\u{feff}');
    }
    csv.push_str(&HEADER.join(&sep));
    csv.push('\n');

    for (height, material, gas, difference) in result.rows() {
        csv.push_str(&format!(
            "{height:.3}{sep}{material:.1}{sep}{gas:.1}{sep}{difference:.1}\n"
        ));
    }
    csv
}

/// `calculation_<name>.csv` with spaces replaced by underscores.
pub fn csv_file_name(name: &str) -> String {
    format!("calculation_{}.csv", name.trim().replace(' ', "_"))
}

/// Pretty-printed JSON array of calculations.
pub fn to_json(calculations: &[SavedCalculation]) -> ResultsResult<String> {
    Ok(serde_json::to_string_pretty(calculations)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hx_engine::SolverKind;

    fn small_result() -> CalculationResult {
        CalculationResult {
            heights: vec![0.0, 1.0, 2.0],
            material_temperatures: vec![20.0, 150.25, 300.0],
            gas_temperatures: vec![400.0, 600.0, 800.0],
            temperature_differences: vec![380.0, 449.75, 500.0],
            heat_transfer_coefficient: 2460.0,
            total_heat_transfer: 1000.0,
            efficiency: 50.0,
            gas_outlet_temperature: 400.0,
            material_outlet_temperature: 300.0,
            solver: SolverKind::Analytical,
            summary: String::new(),
            calculated_at: Utc::now(),
        }
    }

    #[test]
    fn default_csv_is_semicolon_with_bom() {
        let csv = to_csv(&small_result(), &CsvOptions::default());
        assert!(csv.starts_with('\u{feff}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Height (m);Material temperature (°C);Gas temperature (°C);Temperature difference (°C)"
        );
        assert_eq!(lines[1], "0.000;20.0;400.0;380.0");
        assert_eq!(lines[3], "2.000;300.0;800.0;500.0");
    }

    #[test]
    fn comma_csv_has_no_bom() {
        let csv = to_csv(&small_result(), &CsvOptions::comma());
        assert!(csv.starts_with("Height (m),"));
        assert!(csv.lines().nth(2).unwrap().starts_with("1.000,"));
    }

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(csv_file_name("Sinter line 2"), "calculation_Sinter_line_2.csv");
    }
}
