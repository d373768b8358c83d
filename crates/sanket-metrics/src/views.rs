//! Derived-metric views feeding the corridor charts and tables.

use sanket_common::MigrationFlow;

/// Sum of corridor volumes.
pub fn total_volume(flows: &[MigrationFlow]) -> u64 {
    flows.iter().map(|f| f.value).sum()
}

/// The single largest corridor. Ties keep the first-encountered entry;
/// an empty slice has no answer.
pub fn top_corridor(flows: &[MigrationFlow]) -> Option<&MigrationFlow> {
    flows.iter().reduce(|best, f| if f.value > best.value { f } else { best })
}

/// Arithmetic mean of the corridor growth percentages, sign preserved:
/// `"-2%"` contributes `-2.0`. Entries that don't parse as a percentage
/// are skipped. Empty (or all-unparseable) input averages to `0.0`.
pub fn average_growth(flows: &[MigrationFlow]) -> f64 {
    let parsed: Vec<f64> = flows
        .iter()
        .filter_map(|f| parse_growth(&f.growth))
        .collect();
    if parsed.is_empty() {
        return 0.0;
    }
    parsed.iter().sum::<f64>() / parsed.len() as f64
}

/// Parse a growth string of the form `"+12%"` / `"-2%"` / `"7%"`.
fn parse_growth(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_end_matches('%')
        .trim_start_matches('+')
        .parse::<f64>()
        .ok()
}

/// Group corridors by a caller-chosen key and sum volumes per group,
/// returned descending by sum for pie/bar ordering. Groups with equal
/// sums keep first-encountered order.
pub fn group_by_key<F>(flows: &[MigrationFlow], key_fn: F) -> Vec<(String, u64)>
where
    F: Fn(&MigrationFlow) -> &str,
{
    let mut groups: Vec<(String, u64)> = Vec::new();
    for flow in flows {
        let key = key_fn(flow);
        match groups.iter().position(|(k, _)| k.as_str() == key) {
            Some(i) => groups[i].1 += flow.value,
            None => groups.push((key.to_string(), flow.value)),
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups
}

/// Percentage share of `part` in `total`, rounded to whole percent.
/// A zero total reports `0`, not NaN.
pub fn percent_share(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanket_common::fallback::migration_corridors;

    fn flow(source: &str, value: u64) -> MigrationFlow {
        MigrationFlow::new(source, "Delhi", value, "+1%")
    }

    #[test]
    fn test_total_volume_over_fallback() {
        let flows = migration_corridors();
        let expected: u64 = flows.iter().map(|f| f.value).sum();
        assert_eq!(total_volume(&flows), expected);
        assert_eq!(total_volume(&flows), 692_000);
    }

    #[test]
    fn test_top_corridor_is_bihar_delhi() {
        let flows = migration_corridors();
        let top = top_corridor(&flows).unwrap();
        assert_eq!(top.source, "Bihar");
        assert_eq!(top.target, "Delhi");
        assert_eq!(top.value, 125_000);
    }

    #[test]
    fn test_top_corridor_empty_is_none() {
        assert!(top_corridor(&[]).is_none());
    }

    #[test]
    fn test_top_corridor_tie_keeps_first() {
        let flows = vec![flow("Bihar", 10), flow("UP", 10)];
        assert_eq!(top_corridor(&flows).unwrap().source, "Bihar");
    }

    #[test]
    fn test_average_growth_preserves_sign() {
        let flows = vec![
            MigrationFlow::new("A", "B", 1, "+10%"),
            MigrationFlow::new("C", "D", 1, "-2%"),
        ];
        // (10 - 2) / 2, not (10 + 2) / 2
        assert!((average_growth(&flows) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_growth_skips_unparseable() {
        let flows = vec![
            MigrationFlow::new("A", "B", 1, "6%"),
            MigrationFlow::new("C", "D", 1, "n/a"),
        ];
        assert!((average_growth(&flows) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_growth_empty_is_zero() {
        assert_eq!(average_growth(&[]), 0.0);
    }

    #[test]
    fn test_group_by_source_sums_and_orders() {
        let flows = vec![flow("Bihar", 10), flow("UP", 20), flow("Bihar", 5)];
        let groups = group_by_key(&flows, |f| &f.source);
        assert_eq!(groups, vec![("UP".to_string(), 20), ("Bihar".to_string(), 15)]);
    }

    #[test]
    fn test_group_by_target_over_fallback() {
        let flows = migration_corridors();
        let groups = group_by_key(&flows, |f| &f.target);
        // Delhi receives the most volume in the reference set
        assert_eq!(groups[0].0, "Delhi");
        assert_eq!(groups[0].1, 125_000 + 72_000 + 38_000);
        // descending by sum throughout
        assert!(groups.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_percent_share() {
        assert_eq!(percent_share(50, 200), 25);
        assert_eq!(percent_share(0, 0), 0);
        assert_eq!(percent_share(1, 3), 33);
        assert_eq!(percent_share(2, 3), 67);
    }
}
