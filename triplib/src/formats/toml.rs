//! Сценарий командировки в TOML:
//! trip_id, purpose, start_date, end_date и массивы таблиц staff, transportation, accommodation, meal.
//! Даты в виде "YYYY-MM-DD", метки времени "YYYY-MM-DDTHH:MM:SS", суммы десятичными строками.

use crate::{
    error::{Result, TripError},
    model::{Accommodation, Leg, Meal, Mode, Staff, Transportation},
    traits::ReadScenario,
    trip::BusinessTrip,
};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::{BufRead, Read};
use tracing::debug;

#[derive(Deserialize, Debug)]
struct TomlTrip {
    trip_id: String,
    purpose: String,
    start_date: String,
    end_date: String,
    #[serde(default)]
    staff: Vec<TomlStaff>,
    #[serde(default)]
    transportation: Vec<TomlLeg>,
    #[serde(default)]
    accommodation: Vec<TomlAccommodation>,
    #[serde(default)]
    meal: Vec<TomlMeal>,
}

#[derive(Deserialize, Debug)]
struct TomlStaff {
    name: String,
    company_id: String,
}

#[derive(Deserialize, Debug)]
struct TomlLeg {
    mode: String,
    start: String,
    end: String,
    from: String,
    to: String,
    fare: String,
    mileage: String,

    train_number: Option<String>,
    vehicle_type: Option<String>,
    fuel_cost: Option<String>,
    flight_number: Option<String>,
    taxi_number: Option<String>,
}

#[derive(Deserialize, Debug)]
struct TomlAccommodation {
    start_date: String,
    end_date: String,
    place: String,
    cost: String,
}

#[derive(Deserialize, Debug)]
struct TomlMeal {
    date: String,
    meal_type: String,
    cost: String,
}

pub struct TomlScenario;

impl ReadScenario for TomlScenario {
    fn read<R: BufRead>(mut r: R) -> Result<BusinessTrip> {
        let mut raw = String::new();
        r.read_to_string(&mut raw)?;
        let doc: TomlTrip = toml::from_str(&raw)?;

        let mut trip = BusinessTrip::new(
            doc.trip_id,
            doc.purpose,
            parse_date(&doc.start_date, "start_date")?,
            parse_date(&doc.end_date, "end_date")?,
        )?;

        for s in doc.staff {
            trip.add_staff(Staff::new(s.name, s.company_id));
        }
        for (idx, row) in doc.transportation.into_iter().enumerate() {
            trip.add_transportation(leg_from_row(idx, row)?);
        }
        for a in doc.accommodation {
            trip.add_accommodation(Accommodation::new(
                parse_date(&a.start_date, "accommodation start_date")?,
                parse_date(&a.end_date, "accommodation end_date")?,
                a.place,
                parse_amount(&a.cost, "accommodation cost")?,
            )?);
        }
        for m in doc.meal {
            trip.add_meal(Meal::new(
                parse_date(&m.date, "meal date")?,
                m.meal_type,
                parse_amount(&m.cost, "meal cost")?,
            )?);
        }

        debug!(
            trip_id = trip.trip_id(),
            staff = trip.staff().len(),
            transportation = trip.transportations().len(),
            accommodation = trip.accommodations().len(),
            meal = trip.meals().len(),
            "scenario loaded"
        );
        Ok(trip)
    }
}

fn leg_from_row(idx: usize, row: TomlLeg) -> Result<Transportation> {
    // обязательные поля конкретного вида транспорта
    let req = |value: Option<String>, name: &str| {
        value.ok_or_else(|| {
            TripError::Parse(format!("transportation #{idx} ({}): missing {name}", row.mode))
        })
    };

    let mode = match row.mode.as_str() {
        "rail" => Mode::Rail {
            train_number: req(row.train_number, "train_number")?,
        },
        "self_driven" => Mode::SelfDriven {
            vehicle_type: req(row.vehicle_type, "vehicle_type")?,
            fuel_cost: parse_amount(&req(row.fuel_cost, "fuel_cost")?, "fuel_cost")?,
        },
        "flight" => Mode::Flight {
            flight_number: req(row.flight_number, "flight_number")?,
        },
        "taxi" => Mode::Taxi {
            taxi_number: req(row.taxi_number, "taxi_number")?,
        },
        other => {
            return Err(TripError::Parse(format!(
                "transportation #{idx}: unknown mode {other}"
            )))
        }
    };

    let leg = Leg {
        start: parse_timestamp(&row.start, "transportation start")?,
        end: parse_timestamp(&row.end, "transportation end")?,
        departure: row.from,
        arrival: row.to,
        fare: parse_amount(&row.fare, "fare")?,
        mileage: parse_amount(&row.mileage, "mileage")?,
    };
    Ok(Transportation::new(leg, mode)?)
}

fn parse_date(s: &str, what: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| TripError::Parse(format!("{what}: {e}")))
}

fn parse_timestamp(s: &str, what: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| TripError::Parse(format!("{what}: {e}")))
}

fn parse_amount(s: &str, what: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|e| TripError::Parse(format!("{what}: {e}")))
}
