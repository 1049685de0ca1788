//! Pie chart of time per activity, drawn as proportional terminal bars.

use crate::utils::colors::paint_slice;
use crate::utils::formatting::{human_duration, pad_right};
use std::collections::HashMap;
use unicode_width::UnicodeWidthStr;

pub const CHART_TITLE: &str = "Time spent on activities";
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub seconds: f64,
    /// Percentage of the whole, 0..=100.
    pub share: f64,
}

impl Slice {
    /// `Study  62.50%  (1h 2m 30s)`
    pub fn annotation(&self) -> String {
        format!("{:.2}%  ({})", self.share, human_duration(self.seconds))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PieChart {
    pub slices: Vec<Slice>,
    pub total: f64,
}

impl PieChart {
    /// Build slices from per-activity totals, largest first (ties by label).
    /// Labels whose total is not positive cannot form a slice and are left out.
    pub fn from_totals(totals: &HashMap<String, f64>) -> Self {
        let total: f64 = totals.values().filter(|v| **v > 0.0).sum();

        let mut slices: Vec<Slice> = totals
            .iter()
            .filter(|(_, v)| **v > 0.0)
            .map(|(label, seconds)| Slice {
                label: label.clone(),
                seconds: *seconds,
                share: seconds / total * 100.0,
            })
            .collect();

        slices.sort_by(|a, b| {
            b.seconds
                .total_cmp(&a.seconds)
                .then_with(|| a.label.cmp(&b.label))
        });

        Self { slices, total }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn render(&self, color: bool) -> String {
        if self.is_empty() {
            return "No sessions to chart".to_string();
        }

        let label_w = self
            .slices
            .iter()
            .map(|s| UnicodeWidthStr::width(s.label.as_str()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push_str(CHART_TITLE);
        out.push('\n');

        for (i, slice) in self.slices.iter().enumerate() {
            let filled = ((slice.share / 100.0) * BAR_WIDTH as f64).round() as usize;
            let filled = filled.clamp(1, BAR_WIDTH);
            let bar = format!("{}{}", "█".repeat(filled), " ".repeat(BAR_WIDTH - filled));

            out.push_str(&format!(
                "{} {}  {}\n",
                paint_slice(i, &bar, color),
                pad_right(&slice.label, label_w),
                slice.annotation()
            ));
        }

        out.push_str(&format!("Total: {}", human_duration(self.total)));
        out
    }
}
