//! CSV output format for algorithm reports
//!
//! Each report becomes a header row followed by data rows, suitable for
//! spreadsheets or for feeding a plotting tool.

use crate::complexity::ComplexityTable;
use crate::json_output::{JsonRegression, JsonSearch, JsonStats};

/// CSV table with a fixed header
#[derive(Debug, Clone, PartialEq)]
pub struct CsvOutput {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvOutput {
    /// Create a new CSV table with the given column names
    pub fn new<S: Into<String>>(header: impl IntoIterator<Item = S>) -> Self {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a data row
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(fields: &[String]) -> String {
        fields
            .iter()
            .map(|f| Self::escape_field(f))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(&Self::format_row(&self.header));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }

    /// One row describing a search outcome
    pub fn from_search(search: &JsonSearch) -> Self {
        let mut csv = Self::new(["item", "index", "steps", "max_steps", "comparisons"]);
        csv.add_row(vec![
            search.item.clone(),
            search.index.map(|i| i.to_string()).unwrap_or_default(),
            search.steps.to_string(),
            search.max_steps.to_string(),
            search.comparisons.to_string(),
        ]);
        csv
    }

    /// Several values in one field, space separated
    fn join_values(values: &[f64]) -> String {
        let fields: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        fields.join(" ")
    }

    /// `statistic,value` rows for a summary
    pub fn from_stats(stats: &JsonStats) -> Self {
        let mut csv = Self::new(["statistic", "value"]);
        csv.add_row(vec!["count".to_string(), stats.count.to_string()]);
        csv.add_row(vec!["mean".to_string(), stats.mean.to_string()]);
        csv.add_row(vec!["median".to_string(), stats.median.to_string()]);
        csv.add_row(vec!["median_low".to_string(), Self::join_values(&stats.median_low)]);
        csv.add_row(vec!["median_high".to_string(), Self::join_values(&stats.median_high)]);
        if let Some(q) = &stats.quartiles {
            csv.add_row(vec!["q1".to_string(), q.q1.to_string()]);
            csv.add_row(vec!["q2".to_string(), q.q2.to_string()]);
            csv.add_row(vec!["q3".to_string(), q.q3.to_string()]);
            csv.add_row(vec![
                "inter_quartile_range".to_string(),
                q.inter_quartile_range.to_string(),
            ]);
        }
        csv
    }

    /// Sampled regression line as `x,y` rows
    pub fn from_regression(regression: &JsonRegression) -> Self {
        let mut csv = Self::new(["x", "y"]);
        for point in &regression.line {
            csv.add_row(vec![point.x.to_string(), point.y.to_string()]);
        }
        csv
    }

    /// Growth table with one column per model
    pub fn from_complexity(table: &ComplexityTable) -> Self {
        let header = std::iter::once("n").chain(table.models().iter().map(|m| m.label()));
        let mut csv = Self::new(header);
        for row in &table.rows {
            let mut fields = vec![row.n.to_string()];
            fields.extend(row.values.iter().map(|v| v.to_string()));
            csv.add_row(fields);
        }
        csv
    }
}
