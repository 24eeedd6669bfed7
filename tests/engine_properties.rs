use launch_dashboard::data::filter::{
    compute_outcome_breakdown, compute_payload_scatter, ChartData, FAILURE_LABEL, SUCCESS_LABEL,
};
use launch_dashboard::data::model::{LaunchDataset, LaunchRecord, PayloadRange, SiteSelection};
use proptest::prelude::*;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 3] = ["v1.1", "FT", "B5"];

fn record_strategy() -> impl Strategy<Value = LaunchRecord> {
    (0..SITES.len(), 0.0f64..12_000.0, 0..BOOSTERS.len(), any::<bool>()).prop_map(
        |(site, kg, booster, ok)| LaunchRecord::new(SITES[site], kg.round(), BOOSTERS[booster], ok),
    )
}

fn dataset_strategy() -> impl Strategy<Value = LaunchDataset> {
    prop::collection::vec(record_strategy(), 1..40)
        .prop_map(|records| LaunchDataset::from_records(records).expect("non-empty"))
}

proptest! {
    #[test]
    fn absent_site_is_always_empty(ds in dataset_strategy(), low in 0.0f64..10_000.0, high in 0.0f64..10_000.0) {
        let missing = SiteSelection::Site("Boca Chica".to_string());
        prop_assert_eq!(compute_outcome_breakdown(&ds, &missing), ChartData::Empty);
        prop_assert_eq!(
            compute_payload_scatter(&ds, &missing, PayloadRange::new(low, high)),
            ChartData::Empty
        );
    }

    #[test]
    fn all_sites_breakdown_sums_to_successes(ds in dataset_strategy()) {
        let successes = ds.records().iter().filter(|r| r.outcome_class).count();
        match compute_outcome_breakdown(&ds, &SiteSelection::AllSites) {
            ChartData::Ready(b) => {
                prop_assert_eq!(b.total(), successes);
                prop_assert!(b.slices.iter().all(|s| s.count > 0));
            }
            ChartData::Empty => prop_assert_eq!(successes, 0),
        }
    }

    #[test]
    fn site_breakdown_sums_to_site_launches(ds in dataset_strategy(), pick in 0..SITES.len()) {
        let site = SITES[pick];
        let launches = ds.records().iter().filter(|r| r.launch_site == site).count();
        match compute_outcome_breakdown(&ds, &SiteSelection::Site(site.to_string())) {
            ChartData::Ready(b) => {
                prop_assert_eq!(b.slices.len(), 2);
                prop_assert_eq!(b.slices[0].label.as_str(), SUCCESS_LABEL);
                prop_assert_eq!(b.slices[1].label.as_str(), FAILURE_LABEL);
                prop_assert_eq!(b.total(), launches);
            }
            ChartData::Empty => prop_assert_eq!(launches, 0),
        }
    }

    #[test]
    fn observed_range_keeps_every_record(ds in dataset_strategy(), pick in 0..SITES.len()) {
        // Keep payloads inside the control bounds so clamping does not apply.
        let records: Vec<LaunchRecord> = ds
            .records()
            .iter()
            .filter(|r| r.payload_mass_kg <= 10_000.0)
            .cloned()
            .collect();
        prop_assume!(!records.is_empty());
        let ds = LaunchDataset::from_records(records).expect("non-empty");
        let (min, max) = ds.payload_bounds();
        let range = PayloadRange::new(min, max);

        let all = compute_payload_scatter(&ds, &SiteSelection::AllSites, range);
        prop_assert_eq!(all.ready().map_or(0, Vec::len), ds.len());

        let site = SITES[pick];
        let at_site = ds.records().iter().filter(|r| r.launch_site == site).count();
        let one = compute_payload_scatter(&ds, &SiteSelection::Site(site.to_string()), range);
        prop_assert_eq!(one.ready().map_or(0, Vec::len), at_site);
    }

    #[test]
    fn scatter_points_lie_inside_range(ds in dataset_strategy(), a in 0.0f64..10_000.0, b in 0.0f64..10_000.0) {
        let range = PayloadRange::new(a, b);
        if let ChartData::Ready(points) = compute_payload_scatter(&ds, &SiteSelection::AllSites, range) {
            for p in points {
                prop_assert!(range.low() <= p.payload_mass_kg && p.payload_mass_kg <= range.high());
            }
        }
    }

    #[test]
    fn queries_are_deterministic(ds in dataset_strategy(), pick in 0..=SITES.len()) {
        let selection = SITES
            .get(pick)
            .map_or(SiteSelection::AllSites, |s| SiteSelection::Site(s.to_string()));
        let range = PayloadRange::new(1_000.0, 6_000.0);
        prop_assert_eq!(
            compute_outcome_breakdown(&ds, &selection),
            compute_outcome_breakdown(&ds, &selection)
        );
        prop_assert_eq!(
            compute_payload_scatter(&ds, &selection, range),
            compute_payload_scatter(&ds, &selection, range)
        );
    }
}

#[test]
fn three_launch_scenario() {
    let ds = LaunchDataset::from_records(vec![
        LaunchRecord::new("SiteA", 500.0, "v1", true),
        LaunchRecord::new("SiteA", 2000.0, "v1", false),
        LaunchRecord::new("SiteB", 1500.0, "v2", true),
    ])
    .expect("non-empty");

    let by_site = compute_outcome_breakdown(&ds, &SiteSelection::AllSites);
    let pairs: Vec<(String, usize)> = by_site
        .ready()
        .expect("successes exist")
        .slices
        .iter()
        .map(|s| (s.label.clone(), s.count))
        .collect();
    assert_eq!(pairs, vec![("SiteA".to_string(), 1), ("SiteB".to_string(), 1)]);

    let site_a = compute_outcome_breakdown(&ds, &SiteSelection::Site("SiteA".into()));
    let counts: Vec<usize> = site_a.ready().expect("site has launches").slices.iter().map(|s| s.count).collect();
    assert_eq!(counts, vec![1, 1]);

    let light = compute_payload_scatter(&ds, &SiteSelection::AllSites, PayloadRange::new(0.0, 1000.0));
    let masses: Vec<f64> = light.ready().expect("one match").iter().map(|p| p.payload_mass_kg).collect();
    assert_eq!(masses, vec![500.0]);

    let site_b = compute_payload_scatter(&ds, &SiteSelection::Site("SiteB".into()), PayloadRange::new(0.0, 1000.0));
    assert!(site_b.is_empty());
}
