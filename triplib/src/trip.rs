//! Командировка: накопление записей и подсчёт итогов. Итоги не кэшируются,
//! каждый вызов пересчитывает их по текущему содержимому.

use crate::{
    error::{Result, ValidationError},
    formats::text::TextReport,
    model::{ensure_ordered, midnight, Accommodation, Meal, Staff, Transportation},
    traits::WriteReport,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::io;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessTrip {
    trip_id: String,
    purpose: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    staff: Vec<Staff>,
    transportations: Vec<Transportation>,
    accommodations: Vec<Accommodation>,
    meals: Vec<Meal>,
}

impl BusinessTrip {
    pub fn new(
        trip_id: impl Into<String>,
        purpose: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> std::result::Result<Self, ValidationError> {
        ensure_ordered("trip", midnight(start_date), midnight(end_date))?;
        Ok(Self {
            trip_id: trip_id.into(),
            purpose: purpose.into(),
            start_date,
            end_date,
            staff: Vec::new(),
            transportations: Vec::new(),
            accommodations: Vec::new(),
            meals: Vec::new(),
        })
    }

    pub fn add_staff(&mut self, staff: Staff) {
        debug!(trip_id = %self.trip_id, staff = %staff, "staff added");
        self.staff.push(staff);
    }

    pub fn add_transportation(&mut self, transportation: Transportation) {
        debug!(
            trip_id = %self.trip_id,
            mode = transportation.mode().label(),
            cost = %transportation.cost(),
            "transportation added"
        );
        self.transportations.push(transportation);
    }

    pub fn add_accommodation(&mut self, accommodation: Accommodation) {
        debug!(
            trip_id = %self.trip_id,
            place = accommodation.place(),
            cost = %accommodation.cost(),
            "accommodation added"
        );
        self.accommodations.push(accommodation);
    }

    pub fn add_meal(&mut self, meal: Meal) {
        debug!(
            trip_id = %self.trip_id,
            meal_type = meal.meal_type(),
            cost = %meal.cost(),
            "meal added"
        );
        self.meals.push(meal);
    }

    pub fn total_transportation_cost(&self) -> Decimal {
        self.transportations
            .iter()
            .enumerate()
            .map(|(idx, t)| {
                let cost = t.cost();
                trace!(idx, mode = t.mode().label(), cost = %cost, "leg cost");
                cost
            })
            .sum()
    }

    /// Проживание плюс питание.
    pub fn total_other_spending(&self) -> Decimal {
        let lodging: Decimal = self.accommodations.iter().map(Accommodation::cost).sum();
        let meals: Decimal = self.meals.iter().map(Meal::cost).sum();
        lodging + meals
    }

    pub fn total_cost(&self) -> Decimal {
        self.total_transportation_cost() + self.total_other_spending()
    }

    /// Печатает текстовый отчёт в stdout.
    pub fn print_report(&self) -> Result<()> {
        TextReport::write(io::stdout().lock(), self)
    }

    pub fn trip_id(&self) -> &str {
        &self.trip_id
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn staff(&self) -> &[Staff] {
        &self.staff
    }

    pub fn transportations(&self) -> &[Transportation] {
        &self.transportations
    }

    pub fn accommodations(&self) -> &[Accommodation] {
        &self.accommodations
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }
}
