//! Filter resolver properties and drill-down precedence.

use proptest::prelude::*;

use co2_core::{ChartSource, ChecklistKind, Dashboard, Mutation, NullRenderer, passes_base_filters};
use co2_model::{DashboardOptions, Dataset, Record};

const COUNTRIES: [&str; 4] = ["USA", "China", "India", "Germany"];
const REGIONS: [&str; 3] = ["North America", "East Asia", "Europe"];
const INCOMES: [&str; 2] = ["High income", "Upper middle income"];

fn dashboard(records: Vec<Record>) -> Dashboard<NullRenderer> {
    let dataset = Dataset::new(records);
    Dashboard::with_dataset(NullRenderer, DashboardOptions::default(), dataset)
}

fn sample() -> Vec<Record> {
    vec![
        Record::new("USA", "North America", "High income", 2019, 5000.0),
        Record::new("USA", "North America", "High income", 2020, 4500.0),
        Record::new("China", "East Asia", "Upper middle income", 2019, 10000.0),
        Record::new("China", "East Asia", "Upper middle income", 2020, 10500.0),
        Record::new("Germany", "Europe", "High income", 2020, 650.0),
    ]
}

fn countries(rows: &[&Record]) -> Vec<String> {
    rows.iter().map(|record| record.country.clone()).collect()
}

fn toggle(source: ChartSource, country: &str) -> Mutation {
    Mutation::ToggleDrillDown {
        source,
        country: country.to_string(),
    }
}

#[test]
fn full_filters_return_the_dataset() {
    let dashboard = dashboard(sample());
    let resolver = dashboard.resolver().expect("ready");
    let base = resolver.base_filtered();
    let dataset = dashboard.dataset().expect("ready");
    assert_eq!(base.len(), dataset.len());
    assert!(base.iter().zip(dataset.records()).all(|(a, b)| *a == b));
}

#[test]
fn bar_selection_wins_in_shared_views() {
    let mut dashboard = dashboard(sample());
    dashboard.apply(toggle(ChartSource::Bar, "USA")).unwrap();
    dashboard.apply(toggle(ChartSource::Treemap, "China")).unwrap();

    let resolver = dashboard.resolver().expect("ready");
    assert_eq!(countries(&resolver.shared_view()), ["USA", "USA"]);
    assert_eq!(countries(&resolver.bar_view()), ["USA", "USA"]);
    assert_eq!(countries(&resolver.treemap_view()), ["China", "China"]);
}

#[test]
fn treemap_selection_drives_shared_views_alone() {
    let mut dashboard = dashboard(sample());
    dashboard.apply(toggle(ChartSource::Treemap, "Germany")).unwrap();

    let resolver = dashboard.resolver().expect("ready");
    assert_eq!(countries(&resolver.shared_view()), ["Germany"]);
    assert_eq!(resolver.bar_view().len(), 5);
}

#[test]
fn empty_region_set_empties_every_view() {
    let mut dashboard = dashboard(sample());
    dashboard
        .apply(Mutation::SetAll {
            kind: ChecklistKind::Region,
            checked: false,
        })
        .unwrap();
    dashboard.apply(toggle(ChartSource::Bar, "USA")).unwrap();

    let resolver = dashboard.resolver().expect("ready");
    assert!(resolver.base_filtered().is_empty());
    assert!(resolver.bar_view().is_empty());
    assert!(resolver.treemap_view().is_empty());
    assert!(resolver.shared_view().is_empty());
}

#[test]
fn reversed_year_range_is_normalized() {
    let mut dashboard = dashboard(sample());
    dashboard.apply(Mutation::SetYearStart { year: 2020 }).unwrap();
    dashboard.apply(Mutation::SetYearEnd { year: 2019 }).unwrap();
    let resolver = dashboard.resolver().expect("ready");
    assert_eq!(resolver.base_filtered().len(), 5);

    dashboard.apply(Mutation::SetYearEnd { year: 2020 }).unwrap();
    let resolver = dashboard.resolver().expect("ready");
    assert_eq!(resolver.base_filtered().len(), 3);
}

#[test]
fn rows_without_region_never_pass_filters() {
    let mut records = sample();
    records.push(Record::new("Kosovo", "", "Upper middle income", 2020, 8.0));
    let dashboard = dashboard(records);
    let resolver = dashboard.resolver().expect("ready");
    assert_eq!(resolver.base_filtered().len(), 5);
    assert_eq!(dashboard.dataset().expect("ready").regions().len(), 3);
}

fn record_strategy() -> impl Strategy<Value = Record> {
    (0..COUNTRIES.len(), 0..REGIONS.len(), 0..INCOMES.len(), 1990..2000i32, 0.0..1000.0f64).prop_map(
        |(country, region, income, year, co2)| {
            Record::new(COUNTRIES[country], REGIONS[region], INCOMES[income], year, co2)
        },
    )
}

fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        (1985..2005i32).prop_map(|year| Mutation::SetYearStart { year }),
        (1985..2005i32).prop_map(|year| Mutation::SetYearEnd { year }),
        (0..REGIONS.len(), any::<bool>()).prop_map(|(idx, checked)| Mutation::SetChecked {
            kind: ChecklistKind::Region,
            value: REGIONS[idx].to_string(),
            checked,
        }),
        (0..INCOMES.len(), any::<bool>()).prop_map(|(idx, checked)| Mutation::SetChecked {
            kind: ChecklistKind::IncomeLevel,
            value: INCOMES[idx].to_string(),
            checked,
        }),
        any::<bool>().prop_map(|checked| Mutation::SetAll {
            kind: ChecklistKind::Region,
            checked,
        }),
        (0..COUNTRIES.len()).prop_map(|idx| toggle(ChartSource::Bar, COUNTRIES[idx])),
        (0..COUNTRIES.len()).prop_map(|idx| toggle(ChartSource::Treemap, COUNTRIES[idx])),
    ]
}

proptest! {
    #[test]
    fn base_filtered_is_exactly_the_matching_rows(
        records in prop::collection::vec(record_strategy(), 1..40),
        mutations in prop::collection::vec(mutation_strategy(), 0..12),
    ) {
        let mut dashboard = dashboard(records);
        for mutation in mutations {
            // Options absent from the generated dataset are rejected, which is fine here.
            let _ = dashboard.apply(mutation);
        }
        let state = dashboard.state().expect("ready");
        let dataset = dashboard.dataset().expect("ready");
        let resolver = dashboard.resolver().expect("ready");

        let base = resolver.base_filtered();
        let expected: Vec<&Record> = dataset
            .records()
            .iter()
            .filter(|record| {
                state.year_range().contains(record.year)
                    && state.regions().checked().contains(&record.region)
                    && state.income_levels().checked().contains(&record.income_level)
            })
            .collect();
        prop_assert_eq!(&base, &expected);
        prop_assert!(base.iter().all(|record| passes_base_filters(record, state)));

        let drill = state.drill_down();
        let shared = resolver.shared_view();
        match drill.bar().or(drill.treemap()) {
            Some(country) => prop_assert!(shared.iter().all(|record| record.country == country)),
            None => prop_assert_eq!(shared.len(), base.len()),
        }
        prop_assert!(resolver.bar_view().len() <= base.len());
        prop_assert!(resolver.treemap_view().len() <= base.len());
    }

    #[test]
    fn double_toggle_is_identity(
        records in prop::collection::vec(record_strategy(), 1..20),
        country in 0..COUNTRIES.len(),
        bar in any::<bool>(),
    ) {
        let mut dashboard = dashboard(records);
        let source = if bar { ChartSource::Bar } else { ChartSource::Treemap };
        let before = dashboard.state().expect("ready").clone();
        dashboard.apply(toggle(source, COUNTRIES[country])).unwrap();
        dashboard.apply(toggle(source, COUNTRIES[country])).unwrap();
        prop_assert_eq!(dashboard.state().expect("ready"), &before);
    }
}
