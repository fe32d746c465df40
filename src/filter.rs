//! Filter Engine
//!
//! Pure row selections over the launch table. Every function borrows its
//! input and returns references to the surviving records in their original
//! order; nothing here mutates or copies the table.

use crate::dataset::{LaunchRecord, LaunchTable, PayloadRange, SiteSelector};

/// Records whose payload mass lies in `[min_kg, max_kg]`, both ends inclusive
///
/// An inverted range selects nothing.
pub fn filter_by_payload<'a, I>(records: I, min_kg: f64, max_kg: f64) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|r| r.payload_mass_kg >= min_kg && r.payload_mass_kg <= max_kg)
        .collect()
}

/// Records launched from the selected site; `SiteSelector::All` keeps every record
pub fn filter_by_site<'a, I>(records: I, site: &SiteSelector) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records.into_iter().filter(|r| site.matches(r)).collect()
}

/// Dropdown and slider values for one recomputation
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub site: SiteSelector,
    pub payload: PayloadRange,
}

impl FilterCriteria {
    pub fn new(site: SiteSelector, payload: PayloadRange) -> Self {
        Self { site, payload }
    }

    /// Payload filter first, then site filter
    pub fn apply<'a>(&self, table: &'a LaunchTable) -> Vec<&'a LaunchRecord> {
        let in_range = filter_by_payload(table, self.payload.min, self.payload.max);
        filter_by_site(in_range, &self.site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_table() -> LaunchTable {
        LaunchTable::new(vec![
            LaunchRecord::new("KSC", 2000.0, 1, "v1"),
            LaunchRecord::new("KSC", 6000.0, 0, "v2"),
            LaunchRecord::new("CCAFS", 3000.0, 1, "v1"),
        ])
    }

    #[test]
    fn test_filter_by_payload_example() {
        let table = example_table();
        let result = filter_by_payload(&table, 0.0, 5000.0);

        assert_eq!(result.len(), 2);
        assert_eq!(*result[0], LaunchRecord::new("KSC", 2000.0, 1, "v1"));
        assert_eq!(*result[1], LaunchRecord::new("CCAFS", 3000.0, 1, "v1"));
    }

    #[test]
    fn test_filter_by_payload_bounds_inclusive() {
        let table = example_table();
        let result = filter_by_payload(&table, 2000.0, 3000.0);
        assert_eq!(result.len(), 2);

        let result = filter_by_payload(&table, 6000.0, 6000.0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].payload_mass_kg, 6000.0);
    }

    #[test]
    fn test_filter_by_payload_exact_membership() {
        let table = LaunchTable::new(
            (0..50)
                .map(|i| LaunchRecord::new("KSC", (i * 250) as f64, (i % 2) as u8, "FT"))
                .collect(),
        );

        for (lo, hi) in [(0.0, 0.0), (100.0, 4000.0), (2500.0, 12250.0), (0.0, 20000.0)] {
            let result = filter_by_payload(&table, lo, hi);
            let expected: Vec<&LaunchRecord> = table
                .records()
                .iter()
                .filter(|r| r.payload_mass_kg >= lo && r.payload_mass_kg <= hi)
                .collect();

            assert_eq!(result.len(), expected.len());
            for (got, want) in result.iter().zip(expected.iter()) {
                assert!(std::ptr::eq(*got, *want));
            }
            assert!(result.iter().all(|r| r.payload_mass_kg >= lo && r.payload_mass_kg <= hi));
        }
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let table = example_table();
        assert!(filter_by_payload(&table, 5000.0, 1000.0).is_empty());
    }

    #[test]
    fn test_filter_by_site_all_is_identity() {
        let table = example_table();
        let result = filter_by_site(&table, &SiteSelector::All);

        assert_eq!(result.len(), table.len());
        for (got, want) in result.iter().zip(table.records()) {
            assert!(std::ptr::eq(*got, want));
        }
    }

    #[test]
    fn test_filter_by_site_exact_match() {
        let table = example_table();

        let result = filter_by_site(&table, &SiteSelector::parse("KSC"));
        assert_eq!(result.len(), 2);

        // Case-sensitive
        assert!(filter_by_site(&table, &SiteSelector::parse("ksc")).is_empty());
        // Unknown site is not an error
        assert!(filter_by_site(&table, &SiteSelector::parse("Boca Chica")).is_empty());
    }

    #[test]
    fn test_criteria_conjunctive() {
        let table = example_table();
        let criteria = FilterCriteria::new(
            SiteSelector::parse("KSC"),
            PayloadRange::new(0.0, 5000.0).unwrap(),
        );

        let result = criteria.apply(&table);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].payload_mass_kg, 2000.0);
    }

    #[test]
    fn test_empty_table() {
        let table = LaunchTable::default();
        let criteria = FilterCriteria::new(SiteSelector::All, PayloadRange::new(0.0, 1.0).unwrap());
        assert!(criteria.apply(&table).is_empty());
    }
}
