//! Текстовый отчёт фиксированного построчного формата:
//! TripID, Purpose, Staff Involved, Start Date, End Date, три итога и пустая строка.

use crate::{error::Result, model::midnight, traits::WriteReport, trip::BusinessTrip};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::{fmt, io::Write};

// даты поездки выводятся как полночь по UTC
const DATE_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

pub struct TextReport;

impl WriteReport for TextReport {
    fn write<W: Write>(mut w: W, trip: &BusinessTrip) -> Result<()> {
        writeln!(w, "TripID: {}", trip.trip_id())?;
        writeln!(w, "Purpose: {}", trip.purpose())?;
        write!(w, "Staff Involved: ")?;
        for s in trip.staff() {
            write!(w, "{s} ")?;
        }
        writeln!(w)?;
        writeln!(w, "Start Date: {}", date(trip.start_date()))?;
        writeln!(w, "End Date: {}", date(trip.end_date()))?;
        writeln!(
            w,
            "Transportation (Sum): {}",
            amount(trip.total_transportation_cost())
        )?;
        writeln!(
            w,
            "Other Spending (Total): {}",
            amount(trip.total_other_spending())
        )?;
        writeln!(w, "Total Cost: {}", amount(trip.total_cost()))?;
        writeln!(w)?;
        Ok(())
    }
}

/// Итоговая строка за период поездки, печатается после отчёта.
pub fn write_period_total<W: Write>(mut w: W, trip: &BusinessTrip) -> Result<()> {
    writeln!(
        w,
        "Total Cost for a Period (Start Date, End Date): {}",
        amount(trip.total_cost())
    )?;
    Ok(())
}

fn date(d: NaiveDate) -> impl fmt::Display {
    midnight(d).format(DATE_FORMAT)
}

/// Сумма минимум с одним знаком после точки: 220 -> 220.0, 12.345 не трогаем.
pub fn amount(mut value: Decimal) -> Decimal {
    if value.scale() < 1 {
        value.rescale(1);
    }
    value
}
