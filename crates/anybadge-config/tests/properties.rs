//! Property-based tests for option resolution.

use anybadge_config::{Cli, resolve_badge};
use clap::Parser;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn padding_flags_carry_through(
        padding in 0u8..10,
        label_padding in proptest::option::of(0u8..10),
    ) {
        let mut args = vec!["anybadge".to_string(), "-v".into(), "1".into(), "-d".into(), padding.to_string()];
        if let Some(lp) = label_padding {
            args.push("--label-padding".into());
            args.push(lp.to_string());
        }
        let options = resolve_badge(&Cli::parse_from(&args), None).unwrap();
        prop_assert_eq!(options.padding.value, f64::from(padding));
        prop_assert_eq!(options.padding.label, f64::from(label_padding.unwrap_or(padding)));
    }

    #[test]
    fn pairs_round_trip_into_thresholds(keys in proptest::collection::btree_set(0u32..1000, 1..6)) {
        let mut args = vec!["anybadge".to_string(), "-v".into(), "1".into()];
        args.extend(keys.iter().map(|k| format!("{k}=red")));
        let options = resolve_badge(&Cli::parse_from(&args), None).unwrap();
        prop_assert_eq!(options.thresholds.len(), keys.len());
    }
}
