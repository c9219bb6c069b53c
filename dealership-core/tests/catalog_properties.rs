use dealership_core::{
    Catalog, Condition, ConditionFilter, FilterCriteria, Lang, ListingView, LocalizationTable,
    SessionState, Theme, VehicleRecord, filter, project_catalog, project_listing,
};

fn record(make: &str, model: &str, year: i32, condition: Condition) -> VehicleRecord {
    VehicleRecord {
        id: 0,
        make: make.to_string(),
        model: model.to_string(),
        year,
        mileage: if condition == Condition::New { 0 } else { 30_000 },
        price: 25_000,
        condition,
        engine: "2.0L I4".to_string(),
        transmission: "6-Speed Manual".to_string(),
        fuel_type: "Gasoline".to_string(),
        color: "Blue".to_string(),
        drivetrain: "FWD".to_string(),
        description: "A car.".to_string(),
        description_es: None,
        features: vec!["Air conditioning".to_string()],
        features_es: None,
        image: "https://example.com/car.jpg".to_string(),
    }
}

fn three_record_catalog() -> Catalog {
    Catalog::from_records(vec![
        record("Subaru", "Impreza", 2020, Condition::New),
        record("Mazda", "CX-5", 2019, Condition::Used),
        record("Kia", "Soul", 2021, Condition::Used),
    ])
    .unwrap()
}

fn ids(records: &[&VehicleRecord]) -> Vec<u32> {
    records.iter().map(|v| v.id).collect()
}

fn criteria_grid() -> Vec<FilterCriteria> {
    let terms = ["", "a", "BMW", "model", "2022", "20", "rs", "zzz", " "];
    let mut grid = Vec::new();
    for term in terms {
        for condition in ConditionFilter::ALL {
            grid.push(FilterCriteria::new(term, condition));
        }
    }
    grid
}

#[test]
fn three_record_scenario() {
    let catalog = three_record_catalog();
    let by_year = filter(
        catalog.vehicles(),
        &FilterCriteria::new("2019", ConditionFilter::All),
    );
    assert_eq!(ids(&by_year), [1]);

    let used = filter(
        catalog.vehicles(),
        &FilterCriteria::new("", ConditionFilter::Used),
    );
    assert_eq!(ids(&used), [1, 2]);
}

#[test]
fn empty_criteria_is_identity() {
    let catalog = Catalog::load_from_static();
    let all = filter(catalog.vehicles(), &FilterCriteria::default());
    let expected: Vec<&VehicleRecord> = catalog.vehicles().iter().collect();
    assert_eq!(all, expected);
}

#[test]
fn results_are_an_order_preserving_subsequence() {
    let catalog = Catalog::load_from_static();
    for criteria in criteria_grid() {
        let hits = filter(catalog.vehicles(), &criteria);
        let hit_ids = ids(&hits);
        assert!(
            hit_ids.windows(2).all(|w| w[0] < w[1]),
            "out of order for {criteria:?}"
        );
        for vehicle in catalog.vehicles() {
            let kept = hit_ids.contains(&vehicle.id);
            assert_eq!(
                kept,
                criteria.matches(vehicle),
                "{} misclassified for {criteria:?}",
                vehicle.title()
            );
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let catalog = Catalog::load_from_static();
    for criteria in criteria_grid() {
        let once = filter(catalog.vehicles(), &criteria);
        let twice = filter(once.iter().copied(), &criteria);
        assert_eq!(once, twice, "not idempotent for {criteria:?}");
    }
}

#[test]
fn language_toggle_keeps_membership_and_translates_labels() {
    let table = LocalizationTable::builtin();
    let catalog = Catalog::load_from_static();
    let criteria = FilterCriteria::new("20", ConditionFilter::Used);
    let en = project_catalog(
        &catalog,
        &criteria,
        &SessionState::new(Lang::En, Theme::Dark),
        table,
    );
    let es = project_catalog(
        &catalog,
        &criteria,
        &SessionState::new(Lang::Es, Theme::Dark),
        table,
    );
    assert_eq!(en.card_ids(), es.card_ids());
    assert!(!en.cards().is_empty());
    for (en_card, es_card) in en.cards().iter().zip(es.cards()) {
        assert_eq!(en_card.specs[0].label, "Mileage:");
        assert_eq!(es_card.specs[0].label, "Kilometraje:");
        assert_eq!(en_card.badge.label, "Used");
        assert_eq!(es_card.badge.label, "Usado");
    }
}

#[test]
fn no_matches_project_to_empty_message() {
    let table = LocalizationTable::builtin();
    let catalog = three_record_catalog();
    let hits = filter(
        catalog.vehicles(),
        &FilterCriteria::new("ferrari", ConditionFilter::All),
    );
    let view = project_listing(hits, &SessionState::default(), table);
    assert_eq!(
        view,
        ListingView::Empty {
            message: "No cars found matching your criteria.".to_string()
        }
    );
}

#[test]
fn price_and_mileage_formatting_in_cards() {
    let table = LocalizationTable::builtin();
    let catalog = three_record_catalog();
    let view = project_listing(catalog.vehicles(), &SessionState::default(), table);
    let cards = view.cards();
    assert_eq!(cards[0].price, "$25,000");
    assert_eq!(cards[0].specs[0].value, "New");
    assert_eq!(cards[1].specs[0].value, "30,000 miles");
}
