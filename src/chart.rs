use std::fmt::Write;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::events::DeploymentEvent;

const BAR_WIDTH: usize = 40;
const BAR_CHAR: char = '█';

/// Counts deployments per calendar day of `deploy_time`, oldest day first.
pub fn deployments_per_day(events: &[DeploymentEvent]) -> IndexMap<NaiveDate, usize> {
    let mut dates: Vec<NaiveDate> = events.iter().map(|e| e.deploy_time.date_naive()).collect();
    dates.sort_unstable();

    dates.into_iter().fold(IndexMap::new(), |mut counts, date| {
        *counts.entry(date).or_insert(0) += 1;
        counts
    })
}

pub fn render_bar_chart(counts: &IndexMap<NaiveDate, usize>) -> String {
    let mut chart = String::from("Deployments Per Day\n");

    let Some(&max_count) = counts.values().max() else {
        chart.push_str("No deployments\n");
        return chart;
    };

    for (date, &count) in counts {
        let bar = BAR_CHAR.to_string().repeat(bar_length(count, max_count));
        // Writing to a String cannot fail
        let _ = writeln!(chart, "{date} | {bar} {count}");
    }

    chart
}

fn bar_length(count: usize, max_count: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    (count * BAR_WIDTH).div_ceil(max_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{EventSource, SampleSource};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, day).unwrap()
    }

    #[test]
    fn test_deployments_per_day_groups_sample() {
        let events = SampleSource.load().unwrap();
        let counts = deployments_per_day(&events);

        let expected: Vec<(NaiveDate, usize)> = vec![
            (date(1), 1),
            (date(2), 1),
            (date(3), 2),
            (date(5), 1),
            (date(7), 1),
            (date(10), 1),
            (date(12), 1),
        ];
        assert_eq!(counts.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_deployments_per_day_sorts_unordered_input() {
        let mut events = SampleSource.load().unwrap();
        events.reverse();

        let counts = deployments_per_day(&events);
        assert_eq!(counts.keys().next(), Some(&date(1)));
        assert_eq!(counts.keys().last(), Some(&date(12)));
    }

    #[test]
    fn test_render_empty_chart() {
        let chart = render_bar_chart(&IndexMap::new());
        assert_eq!(chart, "Deployments Per Day\nNo deployments\n");
    }

    #[test]
    fn test_render_scales_busiest_day_to_full_width() {
        let counts: IndexMap<NaiveDate, usize> = [(date(1), 1), (date(3), 2)].into_iter().collect();

        let chart = render_bar_chart(&counts);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2025-08-01 | "));
        assert!(lines[1].ends_with(" 1"));
        assert_eq!(lines[1].matches(BAR_CHAR).count(), BAR_WIDTH / 2);
        assert_eq!(lines[2].matches(BAR_CHAR).count(), BAR_WIDTH);
    }
}
