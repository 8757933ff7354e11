//! Property-based tests for the pagination calculator.

use proptest::prelude::*;

use super::pagination::{PaginationError, paginate};

/// Strategy for page tokens: mostly plausible numbers, some garbage.
fn page_token() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (-5i64..2_000).prop_map(|p| p.to_string()),
        1 => any::<i64>().prop_map(|p| p.to_string()),
        1 => "\\PC{0,8}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Every successfully built pagination satisfies the page invariants.
    #[test]
    fn prop_invariants_hold(
        token in page_token(),
        n in 0i64..100_000,
        per in 1i64..500,
    ) {
        let Ok(p) = paginate(&token, n, per) else {
            return Ok(());
        };

        prop_assert!(p.page() >= 1 && p.page() <= p.count(), "page {} count {}", p.page(), p.count());
        prop_assert!(p.count() >= 1);
        prop_assert!(p.offset() >= 0 && p.offset() <= n, "offset {} n {} per {}", p.offset(), n, per);
        prop_assert_eq!(p.offset(), (p.page() - 1) * per);

        if p.page() == 1 {
            prop_assert_eq!(p.prev(), None);
        } else {
            prop_assert_eq!(p.prev(), Some(p.page() - 1));
        }
        if p.page() == p.count() {
            prop_assert_eq!(p.next(), None);
        } else {
            prop_assert_eq!(p.next(), Some(p.page() + 1));
        }
    }

    /// Every page in range is accepted, everything outside is rejected.
    #[test]
    fn prop_in_range_pages_accepted(
        n in 0i64..100_000,
        per in 1i64..500,
        page in -10i64..2_000,
    ) {
        let count = ((n + per - 1) / per).max(1);
        let result = paginate(&page.to_string(), n, per);
        prop_assert_eq!(result.is_ok(), (1..=count).contains(&page));
    }

    /// A non-positive page size is always rejected.
    #[test]
    fn prop_non_positive_per_rejected(
        token in page_token(),
        n in any::<i64>(),
        per in i64::MIN..=0,
    ) {
        prop_assert!(matches!(paginate(&token, n, per), Err(PaginationError::InvalidInput(_))));
    }

    /// A negative item count is always rejected.
    #[test]
    fn prop_negative_count_rejected(
        token in page_token(),
        n in i64::MIN..0,
        per in any::<i64>(),
    ) {
        prop_assert!(matches!(paginate(&token, n, per), Err(PaginationError::InvalidInput(_))));
    }

    /// Identical inputs give identical outputs.
    #[test]
    fn prop_deterministic(
        token in page_token(),
        n in any::<i64>(),
        per in any::<i64>(),
    ) {
        prop_assert_eq!(paginate(&token, n, per), paginate(&token, n, per));
    }

    /// Extreme counts and sizes never panic.
    #[test]
    fn prop_extremes_never_panic(
        token in page_token(),
        n in any::<i64>(),
        per in any::<i64>(),
    ) {
        if let Ok(p) = paginate(&token, n, per) {
            prop_assert!(p.page() >= 1 && p.page() <= p.count());
            prop_assert!(p.offset() >= 0 && p.offset() <= n);
        }
    }
}
