//! Доменные модели командировки. Все записи неизменяемы после создания,
//! инварианты проверяются в конструкторах.

use crate::error::ValidationError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::fmt;

/// Верхняя граница любой суммы: 10^15. Сумма отрезка не больше 2 * 10^15,
/// итоги поездки не переполняют Decimal.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    name: String,
    company_id: String,
}

impl Staff {
    pub fn new(name: impl Into<String>, company_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            company_id: company_id.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }
}

impl fmt::Display for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.company_id)
    }
}

/// Общие поля любого отрезка пути.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub departure: String,
    pub arrival: String,
    pub fare: Decimal,
    pub mileage: Decimal,
}

/// Закрытый набор видов транспорта.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Rail {
        train_number: String,
    },
    SelfDriven {
        vehicle_type: String,
            fuel_cost: Decimal,
    },
    Flight {
        flight_number: String,
    },
    Taxi {
        taxi_number: String,
    },
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Rail { .. } => "rail",
            Mode::SelfDriven { .. } => "self_driven",
            Mode::Flight { .. } => "flight",
            Mode::Taxi { .. } => "taxi",
        }
    }

    /// Номер поезда/рейса/такси либо тип автомобиля.
    pub fn identifier(&self) -> &str {
        match self {
            Mode::Rail { train_number } => train_number,
            Mode::SelfDriven { vehicle_type, .. } => vehicle_type,
            Mode::Flight { flight_number } => flight_number,
            Mode::Taxi { taxi_number } => taxi_number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transportation {
    leg: Leg,
    mode: Mode,
}

impl Transportation {
    pub fn new(leg: Leg, mode: Mode) -> Result<Self, ValidationError> {
        ensure_ordered("transportation", leg.start, leg.end)?;
        ensure_amount("fare", leg.fare)?;
        ensure_amount("mileage", leg.mileage)?;
        if let Mode::SelfDriven { fuel_cost, .. } = &mode {
            ensure_amount("fuel cost", *fuel_cost)?;
        }
        Ok(Self { leg, mode })
    }

    pub fn rail(leg: Leg, train_number: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(
            leg,
            Mode::Rail {
                train_number: train_number.into(),
            },
        )
    }

    pub fn self_driven(
        leg: Leg,
        vehicle_type: impl Into<String>,
        fuel_cost: Decimal,
    ) -> Result<Self, ValidationError> {
        Self::new(
            leg,
            Mode::SelfDriven {
                vehicle_type: vehicle_type.into(),
                fuel_cost,
            },
        )
    }

    pub fn flight(leg: Leg, flight_number: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(
            leg,
            Mode::Flight {
                flight_number: flight_number.into(),
            },
        )
    }

    pub fn taxi(leg: Leg, taxi_number: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(
            leg,
            Mode::Taxi {
                taxi_number: taxi_number.into(),
            },
        )
    }

    /// Стоимость отрезка: тариф, для личного автомобиля ещё и топливо.
    pub fn cost(&self) -> Decimal {
        match &self.mode {
            Mode::SelfDriven { fuel_cost, .. } => self.leg.fare + *fuel_cost,
            Mode::Rail { .. } | Mode::Flight { .. } | Mode::Taxi { .. } => self.leg.fare,
        }
    }

    pub fn leg(&self) -> &Leg {
        &self.leg
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accommodation {
    start_date: NaiveDate,
    end_date: NaiveDate,
    place: String,
    cost: Decimal,
}

impl Accommodation {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        place: impl Into<String>,
        cost: Decimal,
    ) -> Result<Self, ValidationError> {
        ensure_ordered("accommodation", midnight(start_date), midnight(end_date))?;
        ensure_amount("accommodation cost", cost)?;
        Ok(Self {
            start_date,
            end_date,
            place: place.into(),
            cost,
        })
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    date: NaiveDate,
    meal_type: String,
    cost: Decimal,
}

impl Meal {
    pub fn new(
        date: NaiveDate,
        meal_type: impl Into<String>,
        cost: Decimal,
    ) -> Result<Self, ValidationError> {
        ensure_amount("meal cost", cost)?;
        Ok(Self {
            date,
            meal_type: meal_type.into(),
            cost,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn meal_type(&self) -> &str {
        &self.meal_type
    }

    pub fn cost(&self) -> Decimal {
        self.cost
    }
}

pub(crate) fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub(crate) fn ensure_ordered(
    what: &'static str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::EndBeforeStart { what, start, end });
    }
    Ok(())
}

fn ensure_amount(field: &'static str, value: Decimal) -> Result<(), ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeAmount { field, value });
    }
    if value > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge {
            field,
            value,
            limit: MAX_AMOUNT,
        });
    }
    Ok(())
}
