//! JSON-сводка по командировке: реквизиты, участники, количество записей,
//! подытоги по видам транспорта и общие суммы (суммы строками).

use crate::{error::Result, traits::WriteReport, trip::BusinessTrip};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize, Debug)]
struct JsonCounts {
    staff: usize,
    transportation: usize,
    accommodation: usize,
    meal: usize,
}

#[derive(Serialize, Debug)]
struct JsonModeTotal {
    mode: &'static str,
    legs: usize,
    #[serde(with = "rust_decimal::serde::str")]
    cost: Decimal,
}

#[derive(Serialize, Debug)]
struct JsonTotals {
    #[serde(with = "rust_decimal::serde::str")]
    transportation: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    other_spending: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    total: Decimal,
}

#[derive(Serialize, Debug)]
struct JsonSummary<'a> {
    trip_id: &'a str,
    purpose: &'a str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    staff: Vec<String>,
    counts: JsonCounts,
    by_mode: Vec<JsonModeTotal>,
    totals: JsonTotals,
}

pub struct JsonReport;

impl WriteReport for JsonReport {
    fn write<W: Write>(mut w: W, trip: &BusinessTrip) -> Result<()> {
        let summary = JsonSummary {
            trip_id: trip.trip_id(),
            purpose: trip.purpose(),
            start_date: trip.start_date(),
            end_date: trip.end_date(),
            staff: trip.staff().iter().map(ToString::to_string).collect(),
            counts: JsonCounts {
                staff: trip.staff().len(),
                transportation: trip.transportations().len(),
                accommodation: trip.accommodations().len(),
                meal: trip.meals().len(),
            },
            by_mode: mode_totals(trip),
            totals: JsonTotals {
                transportation: trip.total_transportation_cost(),
                other_spending: trip.total_other_spending(),
                total: trip.total_cost(),
            },
        };
        serde_json::to_writer_pretty(&mut w, &summary)?;
        writeln!(w)?;
        Ok(())
    }
}

// порядок по первому появлению вида транспорта
fn mode_totals(trip: &BusinessTrip) -> Vec<JsonModeTotal> {
    let mut out: Vec<JsonModeTotal> = Vec::new();
    for t in trip.transportations() {
        let mode = t.mode().label();
        match out.iter_mut().find(|m| m.mode == mode) {
            Some(m) => {
                m.legs += 1;
                m.cost += t.cost();
            }
            None => out.push(JsonModeTotal {
                mode,
                legs: 1,
                cost: t.cost(),
            }),
        }
    }
    out
}
