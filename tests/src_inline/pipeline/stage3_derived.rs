use super::*;
use crate::fixtures::{date, dated, installation, sample_records};
use crate::model::Selection;
use crate::pipeline::stage1_filter::filter;

#[test]
fn test_ratio_undefined_for_zero_capacity() {
    let zero = installation("Bern", EnergyCategory::Hydro, 0.0, 5.0);
    let normal = installation("Bern", EnergyCategory::Hydro, 2.0, 5.0);
    assert_eq!(efficiency_ratio(&zero), None);
    assert_eq!(efficiency_ratio(&normal), Some(2.5));
}

#[test]
fn test_zero_capacity_excluded_from_ratio_aggregates() {
    let records = vec![
        installation("Bern", EnergyCategory::Hydro, 0.0, 5.0),
        installation("Bern", EnergyCategory::Hydro, 2.0, 4.0),
        installation("Bern", EnergyCategory::Hydro, 1.0, 4.0),
    ];
    let view = filter(&records, &Selection::all());
    let ratios = with_ratios(view.records());
    assert_eq!(ratios.len(), 2);
    assert_eq!(undefined_ratio_count(view.records()), 1);

    let medians = median_ratio_by_category(view.records());
    assert_eq!(medians.get(&EnergyCategory::Hydro), Some(&3.0));
}

#[test]
fn test_median_ratio_of_five_unit_capacities() {
    let records = (1..=5)
        .map(|p| installation("Uri", EnergyCategory::Solar, 1.0, p as f64))
        .collect::<Vec<_>>();
    let view = filter(&records, &Selection::all());
    let ratios = with_ratios(view.records())
        .iter()
        .map(|rr| rr.ratio)
        .collect::<Vec<_>>();
    assert_eq!(ratios, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    let medians = median_ratio_by_category(view.records());
    assert_eq!(medians.get(&EnergyCategory::Solar), Some(&3.0));
    assert_eq!(medians.len(), 1);
}

#[test]
fn test_ratio_distribution_groups_by_category() {
    let records = sample_records();
    let view = filter(&records, &Selection::all());
    let dist = ratio_distribution(view.records());
    // Bern hydro has zero capacity
    assert_eq!(dist[&EnergyCategory::Hydro].len(), 2);
    assert_eq!(dist[&EnergyCategory::Solar].len(), 4);
    assert_eq!(dist[&EnergyCategory::Wind], vec![1500.0]);
}

#[test]
fn test_cumulative_series_sorted_and_monotone() {
    let records = sample_records();
    let view = filter(&records, &Selection::all());
    for measure in Measure::ALL {
        let series = cumulative_series(view.records(), measure);
        assert!(series.windows(2).all(|w| w[0].date <= w[1].date));
        assert!(series.windows(2).all(|w| w[0].value <= w[1].value));

        let expected: f64 = records
            .iter()
            .filter(|r| r.commissioning_date.is_some())
            .map(|r| measure.value_of(r))
            .sum();
        let last = series.last().unwrap().value;
        assert!((last - expected).abs() < 1e-9, "{:?}", measure);
    }
}

#[test]
fn test_cumulative_series_skips_undated() {
    let records = sample_records();
    let view = filter(&records, &Selection::all());
    let series = cumulative_series(view.records(), Measure::Count);
    assert_eq!(series.len(), records.len() - 1);
    assert_eq!(series[0].date, date(2004, 2, 1));
    assert_eq!(series[0].value, 1.0);
    assert_eq!(series.last().unwrap().value, 8.0);
}

#[test]
fn test_cumulative_series_same_day_keeps_every_record() {
    let d = date(2010, 1, 1);
    let records = vec![
        dated(installation("Uri", EnergyCategory::Wind, 1.0, 2.0), d),
        dated(installation("Uri", EnergyCategory::Wind, 3.0, 4.0), d),
    ];
    let view = filter(&records, &Selection::all());
    let series = cumulative_series(view.records(), Measure::ElectricalCapacity);
    assert_eq!(
        series,
        vec![
            CumulativePoint { date: d, value: 1.0 },
            CumulativePoint { date: d, value: 4.0 },
        ]
    );
}

#[test]
fn test_growth_series_all_has_independent_curves() {
    let records = sample_records();
    let view = filter(&records, &Selection::all());
    let series = growth_series(view.records(), CategoryFilter::All, Measure::Count);
    let labels = series.iter().map(|s| s.label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["All", "Solar", "Hydro", "Bioenergy", "Wind"]);

    let finals = series
        .iter()
        .map(|s| s.points.last().map(|p| p.value).unwrap_or(0.0))
        .collect::<Vec<_>>();
    // Valais solar is undated
    assert_eq!(finals, vec![8.0, 3.0, 3.0, 1.0, 1.0]);
    // curves never share a running total
    assert_eq!(series[1].points[0].value, 1.0);
    assert_eq!(series[2].points[0].value, 1.0);
}

#[test]
fn test_growth_series_single_category() {
    let records = sample_records();
    let selection = Selection::parse(None, Some("Hydro")).unwrap();
    let view = filter(&records, &selection);
    let series = growth_series(view.records(), selection.category, Measure::Production);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].label, "Hydro");
    let values = series[0].points.iter().map(|p| p.value).collect::<Vec<_>>();
    assert_eq!(values, vec![40000.0, 40005.0, 58005.0]);
}
