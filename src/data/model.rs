use std::collections::HashSet;
use std::fmt;

/// Lower bound of the payload range control, in kg.
pub const PAYLOAD_MIN_KG: f64 = 0.0;
/// Upper bound of the payload range control, in kg.
pub const PAYLOAD_MAX_KG: f64 = 10_000.0;

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Always finite and non-negative; the loader rejects anything else.
    pub payload_mass_kg: f64,
    pub booster_version: String,
    /// `true` for a successful landing (`class == 1`).
    pub outcome_class: bool,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version: impl Into<String>,
        outcome_class: bool,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version: booster_version.into(),
            outcome_class,
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed control facts.
///
/// Never mutated after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in first-seen order.
    sites: Vec<String>,
    /// Distinct booster versions in first-seen order.
    booster_versions: Vec<String>,
    /// Observed payload (min, max), clamped into the control bounds.
    payload_bounds: (f64, f64),
}

impl LaunchDataset {
    /// Build the dataset and its derived facts.
    ///
    /// Returns `None` for an empty record list: an empty dataset has no
    /// meaningful payload bounds.
    pub fn from_records(records: Vec<LaunchRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut seen_sites = HashSet::new();
        let mut seen_boosters = HashSet::new();
        let mut sites = Vec::new();
        let mut booster_versions = Vec::new();
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for rec in &records {
            if seen_sites.insert(rec.launch_site.as_str()) {
                sites.push(rec.launch_site.clone());
            }
            if seen_boosters.insert(rec.booster_version.as_str()) {
                booster_versions.push(rec.booster_version.clone());
            }
            min = min.min(rec.payload_mass_kg);
            max = max.max(rec.payload_mass_kg);
        }

        let payload_bounds = (clamp_payload(min), clamp_payload(max));
        Some(LaunchDataset {
            records,
            sites,
            booster_versions,
            payload_bounds,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites, in the order they first appear.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_versions(&self) -> &[String] {
        &self.booster_versions
    }

    /// Observed `(min, max)` payload mass clipped into
    /// `[PAYLOAD_MIN_KG, PAYLOAD_MAX_KG]`.
    pub fn payload_bounds(&self) -> (f64, f64) {
        self.payload_bounds
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn clamp_payload(kg: f64) -> f64 {
    kg.clamp(PAYLOAD_MIN_KG, PAYLOAD_MAX_KG)
}

// ---------------------------------------------------------------------------
// Control state
// ---------------------------------------------------------------------------

/// Dropdown value: either the "all sites" sentinel or one site name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// The site name, or `None` for the sentinel.
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::AllSites => None,
            SiteSelection::Site(s) => Some(s),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::AllSites)
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "All Sites"),
            SiteSelection::Site(s) => write!(f, "{s}"),
        }
    }
}

/// Closed payload interval `[low, high]` in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Clamp both ends into the control bounds and order them so that
    /// `low <= high`.
    pub fn new(a: f64, b: f64) -> Self {
        let a = clamp_payload(a);
        let b = clamp_payload(b);
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Narrow both ends into `[min, max]`, keeping `low <= high`.
    pub fn within(self, min: f64, max: f64) -> Self {
        Self::new(self.low.clamp(min, max), self.high.clamp(min, max))
    }

    /// Inclusive on both ends.
    pub fn contains(&self, kg: f64) -> bool {
        self.low <= kg && kg <= self.high
    }
}

impl Default for PayloadRange {
    fn default() -> Self {
        Self::new(PAYLOAD_MIN_KG, PAYLOAD_MAX_KG)
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}–{:.0} kg", self.low, self.high)
    }
}

/// Everything the charts depend on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlState {
    pub selected_site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// Initial controls: all sites, payload range spanning the dataset.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        let (min, max) = dataset.payload_bounds();
        Self {
            selected_site: SiteSelection::AllSites,
            payload_range: PayloadRange::new(min, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_derives_sites_in_first_seen_order() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC LC-39A", 2000.0, "FT", true),
            LaunchRecord::new("CCAFS LC-40", 500.0, "v1.0", false),
            LaunchRecord::new("KSC LC-39A", 3000.0, "B4", true),
        ])
        .unwrap();

        assert_eq!(ds.sites(), ["KSC LC-39A", "CCAFS LC-40"]);
        assert_eq!(ds.booster_versions(), ["FT", "v1.0", "B4"]);
        assert_eq!(ds.payload_bounds(), (500.0, 3000.0));
    }

    #[test]
    fn payload_bounds_are_clipped_not_rejected() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("A", 0.0, "v1", true),
            LaunchRecord::new("A", 15_600.0, "v1", true),
        ])
        .unwrap();
        assert_eq!(ds.payload_bounds(), (0.0, 10_000.0));
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn empty_records_make_no_dataset() {
        assert!(LaunchDataset::from_records(Vec::new()).is_none());
    }

    #[test]
    fn payload_range_normalises_endpoints() {
        let r = PayloadRange::new(9000.0, 1000.0);
        assert_eq!((r.low(), r.high()), (1000.0, 9000.0));

        let r = PayloadRange::new(-50.0, 12_000.0);
        assert_eq!((r.low(), r.high()), (0.0, 10_000.0));

        assert!(r.contains(0.0));
        assert!(r.contains(10_000.0));
    }

    #[test]
    fn payload_range_narrows_into_bounds() {
        let r = PayloadRange::new(500.0, 9000.0).within(2000.0, 5000.0);
        assert_eq!((r.low(), r.high()), (2000.0, 5000.0));

        let r = PayloadRange::new(0.0, 1000.0).within(2000.0, 5000.0);
        assert_eq!((r.low(), r.high()), (2000.0, 2000.0));
    }

    #[test]
    fn site_selection_display() {
        assert_eq!(SiteSelection::AllSites.to_string(), "All Sites");
        assert_eq!(SiteSelection::Site("X".into()).site(), Some("X"));
        assert!(SiteSelection::default().is_all());
    }
}
