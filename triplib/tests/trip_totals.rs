use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use triplib::{
    model::{Accommodation, Leg, Meal, Staff, Transportation},
    BusinessTrip,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, d).unwrap()
}

fn at(h: u32) -> NaiveDateTime {
    day(1).and_hms_opt(h, 0, 0).unwrap()
}

fn money(cents: u32) -> Decimal {
    Decimal::new(i64::from(cents), 2)
}

fn empty_trip() -> BusinessTrip {
    BusinessTrip::new("T-1", "Audit", day(1), day(3)).expect("trip")
}

fn leg(kind: u8, fare: Decimal, fuel: Decimal) -> Transportation {
    let leg = Leg {
        start: at(8),
        end: at(9),
        departure: "A".into(),
        arrival: "B".into(),
        fare,
        mileage: Decimal::ONE,
    };
    match kind % 4 {
        0 => Transportation::rail(leg, "R1"),
        1 => Transportation::self_driven(leg, "Car", fuel),
        2 => Transportation::flight(leg, "F1"),
        _ => Transportation::taxi(leg, "X1"),
    }
    .expect("leg")
}

#[test]
fn empty_trip_totals_are_zero() {
    let trip = empty_trip();
    assert_eq!(trip.total_transportation_cost(), Decimal::ZERO);
    assert_eq!(trip.total_other_spending(), Decimal::ZERO);
    assert_eq!(trip.total_cost(), Decimal::ZERO);
}

#[test]
fn appends_keep_insertion_order() {
    let mut trip = empty_trip();
    trip.add_staff(Staff::new("Alice", "001"));
    trip.add_staff(Staff::new("Bob", "002"));
    trip.add_staff(Staff::new("Alice", "001"));
    trip.add_meal(Meal::new(day(1), "Lunch", Decimal::ONE).unwrap());
    trip.add_meal(Meal::new(day(2), "Dinner", Decimal::new(2, 0)).unwrap());

    let names: Vec<_> = trip.staff().iter().map(Staff::name).collect();
    assert_eq!(names, ["Alice", "Bob", "Alice"]);
    let meals: Vec<_> = trip.meals().iter().map(Meal::meal_type).collect();
    assert_eq!(meals, ["Lunch", "Dinner"]);
}

#[test]
fn staff_display_form() {
    assert_eq!(Staff::new("Alice", "001").to_string(), "Alice (001)");
}

#[test]
fn totals_are_recomputed_after_append() {
    let mut trip = empty_trip();
    trip.add_meal(Meal::new(day(1), "Lunch", Decimal::TEN).unwrap());
    assert_eq!(trip.total_cost(), Decimal::TEN);
    trip.add_accommodation(Accommodation::new(day(1), day(2), "Inn", Decimal::TEN).unwrap());
    assert_eq!(trip.total_cost(), Decimal::new(20, 0));
}

proptest! {
    #[test]
    fn totals_sum_their_parts(
        legs in prop::collection::vec((0u8..4, 0u32..=100_000, 0u32..=100_000), 0..=12),
        stays in prop::collection::vec(0u32..=100_000, 0..=5),
        meals in prop::collection::vec(0u32..=10_000, 0..=12),
    ) {
        let mut trip = empty_trip();
        let mut expected_legs = Decimal::ZERO;
        for (kind, fare, fuel) in &legs {
            let t = leg(*kind, money(*fare), money(*fuel));
            expected_legs += t.cost();
            trip.add_transportation(t);
        }
        let mut expected_other = Decimal::ZERO;
        for cost in &stays {
            expected_other += money(*cost);
            trip.add_accommodation(Accommodation::new(day(1), day(2), "Inn", money(*cost)).unwrap());
        }
        for cost in &meals {
            expected_other += money(*cost);
            trip.add_meal(Meal::new(day(1), "Meal", money(*cost)).unwrap());
        }

        prop_assert_eq!(trip.transportations().len(), legs.len());
        prop_assert_eq!(trip.accommodations().len(), stays.len());
        prop_assert_eq!(trip.meals().len(), meals.len());

        prop_assert_eq!(trip.total_transportation_cost(), expected_legs);
        prop_assert_eq!(trip.total_other_spending(), expected_other);
        prop_assert_eq!(
            trip.total_cost(),
            trip.total_transportation_cost() + trip.total_other_spending()
        );
        // повторный вызов без изменений даёт то же значение
        prop_assert_eq!(trip.total_cost(), trip.total_cost());
    }

    #[test]
    fn transportation_kept_in_insertion_order(kinds in prop::collection::vec(0u8..4, 0..=16)) {
        let mut trip = empty_trip();
        for k in &kinds {
            trip.add_transportation(leg(*k, Decimal::ONE, Decimal::ONE));
        }
        let labels: Vec<_> = trip.transportations().iter().map(|t| t.mode().label()).collect();
        let expected: Vec<_> = kinds
            .iter()
            .map(|k| ["rail", "self_driven", "flight", "taxi"][usize::from(*k)])
            .collect();
        prop_assert_eq!(labels, expected);
    }
}
