//! Summary Statistics
//!
//! Descriptive statistics over the amount column: count, mean, sample
//! standard deviation, min, quartiles and max.

use super::table::ExpenseTable;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two amounts
    pub std_dev: Option<f64>,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl SummaryStatistics {
    /// Compute statistics for a table, `None` when the table is empty
    pub fn generate(table: &ExpenseTable) -> Option<Self> {
        let mut amounts: Vec<f64> = table.amounts().map(|m| m.as_f64()).collect();
        if amounts.is_empty() {
            return None;
        }
        amounts.sort_by(f64::total_cmp);

        let count = amounts.len();
        let mean = amounts.iter().sum::<f64>() / count as f64;

        let std_dev = if count > 1 {
            let squares: f64 = amounts.iter().map(|a| (a - mean).powi(2)).sum();
            Some((squares / (count - 1) as f64).sqrt())
        } else {
            None
        };

        Some(Self {
            count,
            mean,
            std_dev,
            min: amounts[0],
            p25: percentile(&amounts, 0.25),
            median: percentile(&amounts, 0.50),
            p75: percentile(&amounts, 0.75),
            max: amounts[count - 1],
        })
    }

    /// Format the statistics as a two-column block
    pub fn format_terminal(&self) -> String {
        let std_dev = self
            .std_dev
            .map(|s| format!("{:.2}", s))
            .unwrap_or_else(|| "NaN".to_string());

        let lines = [
            ("count", format!("{:.2}", self.count as f64)),
            ("mean", format!("{:.2}", self.mean)),
            ("std", std_dev),
            ("min", format!("{:.2}", self.min)),
            ("25%", format!("{:.2}", self.p25)),
            ("50%", format!("{:.2}", self.median)),
            ("75%", format!("{:.2}", self.p75)),
            ("max", format!("{:.2}", self.max)),
        ];

        let width = lines.iter().map(|(_, v)| v.len()).max().unwrap_or(0) + 4;
        let mut output = String::new();
        for (label, value) in lines {
            output.push_str(&format!("{:<6}{:>width$}\n", label, value, width = width));
        }
        output.push_str("Name: amount\n");
        output
    }
}

/// Linear interpolation between closest ranks over sorted, non-empty input
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let weight = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}
