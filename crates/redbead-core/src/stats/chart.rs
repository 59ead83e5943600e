//! Control chart data.
//!
//! Bundles what a renderer needs to draw the experiment's control chart: one
//! line per worker plus the mean and control limit rules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::control_limits::{calculate_control_limits, ControlLimits};
use crate::worker::{BeadCount, Worker};

/// Dash pattern for the mean and control limit rules: 5 units on, 5 off.
pub const CONTROL_LIMIT_DASH_PATTERN: [f64; 2] = [5.0, 5.0];

/// Display label for a zero-based day index ("Day 1" for index 0).
pub fn day_label(day: usize) -> String {
    format!("Day {}", day + 1)
}

/// One recorded sample positioned on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub day: usize,
    pub label: String,
    pub count: BeadCount,
}

/// All samples of one worker, in day order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSeries {
    pub worker_id: Uuid,
    pub worker_name: String,
    pub points: Vec<ChartPoint>,
}

/// Everything needed to render the control chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlChart {
    pub series: Vec<WorkerSeries>,
    pub limits: ControlLimits,
    pub dash_pattern: [f64; 2],
    pub summary: String,
}

impl ControlChart {
    /// Build the chart for the given workers, in collection order.
    pub fn build(workers: &[Worker]) -> Self {
        let limits = calculate_control_limits(workers);
        let series = workers
            .iter()
            .map(|w| WorkerSeries {
                worker_id: w.id(),
                worker_name: w.name.clone(),
                points: w
                    .daily_bead_counts
                    .iter()
                    .enumerate()
                    .map(|(day, &count)| ChartPoint {
                        day,
                        label: day_label(day),
                        count,
                    })
                    .collect(),
            })
            .collect();

        Self {
            series,
            summary: format!(
                "Control limits at {:.1} plus or minus {:.1} beads",
                limits.mean,
                limits.spread()
            ),
            limits,
            dash_pattern: CONTROL_LIMIT_DASH_PATTERN,
        }
    }

    /// True when there are no workers to plot.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Samples lying outside the control limits, as (worker name, point).
    pub fn points_outside_limits(&self) -> Vec<(&str, &ChartPoint)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().map(move |p| (s.worker_name.as_str(), p)))
            .filter(|(_, p)| !self.limits.contains(f64::from(p.count)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_labels_are_one_based() {
        assert_eq!(day_label(0), "Day 1");
        assert_eq!(day_label(9), "Day 10");
    }

    #[test]
    fn empty_chart() {
        let chart = ControlChart::build(&[]);
        assert!(chart.is_empty());
        assert_eq!(chart.limits, ControlLimits::default());
        assert_eq!(chart.dash_pattern, [5.0, 5.0]);
    }

    #[test]
    fn series_follow_worker_order() {
        let ws = vec![
            Worker::with_counts("Ann", vec![3, 4]),
            Worker::with_counts("Bob", vec![]),
        ];
        let chart = ControlChart::build(&ws);

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].worker_name, "Ann");
        assert_eq!(chart.series[0].worker_id, ws[0].id());
        assert_eq!(chart.series[0].points[1].label, "Day 2");
        assert_eq!(chart.series[0].points[1].count, 4);
        assert!(chart.series[1].points.is_empty());
    }

    #[test]
    fn summary_describes_limits() {
        let ws = vec![Worker::with_counts("Ann", vec![2, 4, 4, 4, 5, 5, 7, 9])];
        let chart = ControlChart::build(&ws);
        assert_eq!(
            chart.summary,
            "Control limits at 5.0 plus or minus 6.0 beads"
        );
    }

    #[test]
    fn identical_samples_are_all_within_limits() {
        let ws = vec![Worker::with_counts("Ann", vec![7, 7, 7])];
        let chart = ControlChart::build(&ws);
        assert!(chart.points_outside_limits().is_empty());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let ws = vec![Worker::with_counts("Ann", vec![1])];
        let json = serde_json::to_value(ControlChart::build(&ws)).unwrap();
        assert_eq!(json["dashPattern"], serde_json::json!([5.0, 5.0]));
        assert_eq!(json["series"][0]["workerName"], "Ann");
        assert!(json["limits"].get("upperLimit").is_some());
    }

    #[test]
    fn points_outside_limits_reports_excursions() {
        let limits_source = vec![Worker::with_counts("Ann", vec![5, 5])];
        let mut chart = ControlChart::build(&limits_source);
        chart.series.push(WorkerSeries {
            worker_id: Uuid::new_v4(),
            worker_name: "Bob".into(),
            points: vec![ChartPoint {
                day: 0,
                label: day_label(0),
                count: 9,
            }],
        });
        let outside = chart.points_outside_limits();
        assert_eq!(outside.len(), 1);
        assert_eq!(outside[0].0, "Bob");
        assert_eq!(outside[0].1.count, 9);
    }
}
