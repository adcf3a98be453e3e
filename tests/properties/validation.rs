//! Property tests for checkout input validation.

use chrono::NaiveDate;
use proptest::prelude::*;

use tool_rental::checkout::CheckoutService;
use tool_rental::config::ToolCatalog;
use tool_rental::error::RentalError;

fn service() -> CheckoutService {
    CheckoutService::new(ToolCatalog::standard())
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 9, 3).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rental days below one are rejected before anything else is checked.
    #[test]
    fn property_rental_days_below_one_rejected(
        days in i64::MIN..1,
        discount in any::<i64>(),
        code in "[A-Z]{0,6}",
    ) {
        let err = service().checkout(&code, days, discount, date()).unwrap_err();

        prop_assert!(matches!(err, RentalError::InvalidRentalDays { .. }), "unexpected error: {:?}", err);
        prop_assert_eq!(err.to_string(), "Rental day count must be at least 1.");
    }

    /// PROPERTY: Discounts outside 0..=100 are rejected before the tool lookup.
    #[test]
    fn property_discount_out_of_range_rejected(
        days in 1i64..=30,
        discount in prop_oneof![i64::MIN..0, 101i64..=i64::MAX],
        code in "[A-Z]{0,6}",
    ) {
        let err = service().checkout(&code, days, discount, date()).unwrap_err();

        prop_assert!(matches!(err, RentalError::InvalidDiscount { .. }), "unexpected error: {:?}", err);
        prop_assert_eq!(err.to_string(), "Discount percent must be between 0 and 100.");
    }

    /// PROPERTY: Codes outside the catalog are always rejected.
    #[test]
    fn property_unknown_code_rejected(
        code in "[A-Za-z0-9]{0,8}",
        days in 1i64..=30,
        discount in 0i64..=100,
    ) {
        prop_assume!(!["CHNS", "LADW", "JAKD", "JAKR"].contains(&code.as_str()));

        let err = service().checkout(&code, days, discount, date()).unwrap_err();

        prop_assert_eq!(err.to_string(), "Tool code does not correspond to an existing tool.");
    }

    /// PROPERTY: Valid input never fails for dates well inside the calendar.
    #[test]
    fn property_valid_input_accepted(
        days in 1i64..=10_000,
        discount in 0i64..=100,
    ) {
        prop_assert!(service().checkout("JAKD", days, discount, date()).is_ok());
    }
}
