//! Property tests for charge days and pricing.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use tool_rental::checkout::CheckoutService;
use tool_rental::config::ToolCatalog;

fn tool_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("CHNS"), Just("LADW"), Just("JAKD"), Just("JAKR")]
}

/// Checkout dates between 2000-01-01 and roughly 2049.
fn checkout_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..18_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Charge days are bounded by the rental length.
    #[test]
    fn property_charge_days_within_rental_days(
        code in tool_code(),
        days in 1i64..=400,
        discount in 0i64..=100,
        date in checkout_date(),
    ) {
        let service = CheckoutService::new(ToolCatalog::standard());
        let agreement = service.checkout(code, days, discount, date).unwrap();

        prop_assert!(i64::from(agreement.charge_days) <= days);
        prop_assert_eq!(i64::from(agreement.rental_days), days);
    }

    /// PROPERTY: The due date is the checkout date plus the rental days.
    #[test]
    fn property_due_date_is_checkout_plus_days(
        code in tool_code(),
        days in 1u64..=400,
        date in checkout_date(),
    ) {
        let service = CheckoutService::new(ToolCatalog::standard());
        let agreement = service.checkout(code, days as i64, 0, date).unwrap();

        prop_assert_eq!(agreement.checkout_date, date);
        prop_assert_eq!(agreement.due_date, date.checked_add_days(Days::new(days)).unwrap());
    }

    /// PROPERTY: Final charge is pre-discount minus discount and never negative.
    #[test]
    fn property_final_charge_is_consistent(
        code in tool_code(),
        days in 1i64..=400,
        discount in 0i64..=100,
        date in checkout_date(),
    ) {
        let service = CheckoutService::new(ToolCatalog::standard());
        let agreement = service.checkout(code, days, discount, date).unwrap();

        prop_assert_eq!(
            agreement.pre_discount_charge,
            Decimal::from(agreement.charge_days) * agreement.daily_rental_charge
        );
        prop_assert_eq!(
            agreement.final_charge,
            agreement.pre_discount_charge - agreement.discount_amount
        );
        prop_assert!(agreement.final_charge >= Decimal::ZERO);
        prop_assert!(agreement.discount_amount <= agreement.pre_discount_charge);
        prop_assert!(agreement.final_charge.scale() <= 2);
    }

    /// PROPERTY: Ladders are only ever exempt on holidays, so at most two
    /// days per calendar year touched are free.
    #[test]
    fn property_ladder_exempts_only_holidays(
        days in 1i64..=60,
        date in checkout_date(),
    ) {
        let service = CheckoutService::new(ToolCatalog::standard());
        let agreement = service.checkout("LADW", days, 0, date).unwrap();

        let free = days - i64::from(agreement.charge_days);
        prop_assert!((0..=2).contains(&free));
    }

    /// PROPERTY: A full discount always yields a zero final charge.
    #[test]
    fn property_full_discount_is_free(
        code in tool_code(),
        days in 1i64..=60,
        date in checkout_date(),
    ) {
        let service = CheckoutService::new(ToolCatalog::standard());
        let agreement = service.checkout(code, days, 100, date).unwrap();

        prop_assert_eq!(agreement.final_charge, Decimal::ZERO);
    }
}
