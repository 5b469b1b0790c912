//! Form state for the five budget steps, and parsing of user-typed values.
//!
//! The form is the only place bounds are enforced: sliders clamp, lookups fail
//! with an [`InputError`]. Whatever leaves through [`BudgetForm::to_input`] is
//! already valid for the calculator.

use thiserror::Error;

use crate::budget::{BudgetInput, MAX_INCOME, MAX_SAVINGS_PERCENT, MIN_INCOME};
use crate::models::{LifestyleOption, Neighborhood, TransportOption};

pub const DEFAULT_INCOME: i64 = 120_000;
pub const DEFAULT_SAVINGS_PERCENT: u8 = 15;
const DEFAULT_NEIGHBORHOOD: &str = "Kilimani";
const DEFAULT_RIDES: &[&str] = &["Matatus"];
const DEFAULT_TREATS: &[&str] = &["Groceries", "Entertainment"];

pub const INCOME_STEP: i64 = 1_000;
pub const INCOME_BIG_STEP: i64 = 10_000;
pub const SAVINGS_STEP: i64 = 1;
pub const SAVINGS_BIG_STEP: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown {kind} '{name}' (choose from: {choices})")]
    UnknownOption {
        kind: &'static str,
        name: String,
        choices: String,
    },
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetForm {
    income: i64,
    neighborhood: usize,
    transport: Vec<bool>,
    lifestyle: Vec<bool>,
    savings_percent: u8,
}

impl Default for BudgetForm {
    fn default() -> Self {
        let neighborhood = Neighborhood::all()
            .iter()
            .position(|n| n.name == DEFAULT_NEIGHBORHOOD)
            .unwrap_or(0);
        Self {
            income: DEFAULT_INCOME,
            neighborhood,
            transport: TransportOption::all()
                .iter()
                .map(|t| DEFAULT_RIDES.contains(&t.name))
                .collect(),
            lifestyle: LifestyleOption::all()
                .iter()
                .map(|l| DEFAULT_TREATS.contains(&l.name))
                .collect(),
            savings_percent: DEFAULT_SAVINGS_PERCENT,
        }
    }
}

impl BudgetForm {
    pub fn income(&self) -> i64 {
        self.income
    }

    pub fn savings_percent(&self) -> u8 {
        self.savings_percent
    }

    pub fn neighborhood_index(&self) -> usize {
        self.neighborhood
    }

    pub fn neighborhood(&self) -> &'static Neighborhood {
        let all = Neighborhood::all();
        all.get(self.neighborhood).unwrap_or(&all[0])
    }

    pub fn is_transport_selected(&self, index: usize) -> bool {
        self.transport.get(index).copied().unwrap_or(false)
    }

    pub fn is_lifestyle_selected(&self, index: usize) -> bool {
        self.lifestyle.get(index).copied().unwrap_or(false)
    }

    pub fn selected_transport(&self) -> Vec<&'static TransportOption> {
        TransportOption::all()
            .iter()
            .zip(&self.transport)
            .filter(|(_, on)| **on)
            .map(|(t, _)| t)
            .collect()
    }

    pub fn selected_lifestyle(&self) -> Vec<&'static LifestyleOption> {
        LifestyleOption::all()
            .iter()
            .zip(&self.lifestyle)
            .filter(|(_, on)| **on)
            .map(|(l, _)| l)
            .collect()
    }

    // Mutators return whether anything changed, so callers can invalidate
    // a stale breakdown.

    pub fn set_income(&mut self, value: i64) -> bool {
        let clamped = value.clamp(MIN_INCOME, MAX_INCOME);
        std::mem::replace(&mut self.income, clamped) != clamped
    }

    pub fn adjust_income(&mut self, delta: i64) -> bool {
        self.set_income(self.income.saturating_add(delta))
    }

    pub fn set_savings(&mut self, value: i64) -> bool {
        let clamped = value.clamp(0, i64::from(MAX_SAVINGS_PERCENT)) as u8;
        std::mem::replace(&mut self.savings_percent, clamped) != clamped
    }

    pub fn adjust_savings(&mut self, delta: i64) -> bool {
        self.set_savings(i64::from(self.savings_percent).saturating_add(delta))
    }

    pub fn select_neighborhood(&mut self, index: usize) -> bool {
        if index >= Neighborhood::all().len() || index == self.neighborhood {
            return false;
        }
        self.neighborhood = index;
        true
    }

    pub fn toggle_transport(&mut self, index: usize) -> bool {
        toggle(&mut self.transport, index)
    }

    pub fn toggle_lifestyle(&mut self, index: usize) -> bool {
        toggle(&mut self.lifestyle, index)
    }

    pub fn set_transport(&mut self, index: usize, on: bool) -> bool {
        set_flag(&mut self.transport, index, on)
    }

    pub fn set_lifestyle(&mut self, index: usize, on: bool) -> bool {
        set_flag(&mut self.lifestyle, index, on)
    }

    pub fn clear_transport(&mut self) -> bool {
        clear(&mut self.transport)
    }

    pub fn clear_lifestyle(&mut self) -> bool {
        clear(&mut self.lifestyle)
    }

    pub fn choose_neighborhood(&mut self, neighborhood: &Neighborhood) -> bool {
        position(Neighborhood::all(), neighborhood).is_some_and(|i| self.select_neighborhood(i))
    }

    pub fn toggle_transport_option(&mut self, option: &TransportOption) -> bool {
        position(TransportOption::all(), option).is_some_and(|i| self.toggle_transport(i))
    }

    pub fn toggle_lifestyle_option(&mut self, option: &LifestyleOption) -> bool {
        position(LifestyleOption::all(), option).is_some_and(|i| self.toggle_lifestyle(i))
    }

    pub fn include_transport(&mut self, option: &TransportOption) -> bool {
        position(TransportOption::all(), option).is_some_and(|i| self.set_transport(i, true))
    }

    pub fn include_lifestyle(&mut self, option: &LifestyleOption) -> bool {
        position(LifestyleOption::all(), option).is_some_and(|i| self.set_lifestyle(i, true))
    }

    pub fn reset(&mut self) -> bool {
        let fresh = Self::default();
        std::mem::replace(self, fresh.clone()) != fresh
    }

    pub fn to_input(&self) -> BudgetInput {
        BudgetInput {
            monthly_income: self.income,
            neighborhood: self.neighborhood(),
            transport: self.selected_transport(),
            lifestyle: self.selected_lifestyle(),
            savings_percent: self.savings_percent,
        }
    }
}

fn position<T: PartialEq>(all: &[T], item: &T) -> Option<usize> {
    all.iter().position(|candidate| candidate == item)
}

fn toggle(flags: &mut [bool], index: usize) -> bool {
    match flags.get_mut(index) {
        Some(flag) => {
            *flag = !*flag;
            true
        }
        None => false,
    }
}

fn set_flag(flags: &mut [bool], index: usize, on: bool) -> bool {
    match flags.get_mut(index) {
        Some(flag) => std::mem::replace(flag, on) != on,
        None => false,
    }
}

fn clear(flags: &mut [bool]) -> bool {
    let any = flags.iter().any(|f| *f);
    flags.iter_mut().for_each(|f| *f = false);
    any
}

// ── Parsing ──────────────────────────────────────────────────

/// Parse a whole number, tolerating thousands separators and a "KSh" prefix.
pub fn parse_amount(s: &str) -> Result<i64, InputError> {
    let trimmed = s.trim();
    let without_currency = trimmed
        .strip_prefix("KSh")
        .or_else(|| trimmed.strip_prefix("ksh"))
        .unwrap_or(trimmed);
    let digits: String = without_currency
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    digits
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(s.trim().to_string()))
}

pub fn parse_income(s: &str) -> Result<i64, InputError> {
    let value = parse_amount(s)?;
    if !(MIN_INCOME..=MAX_INCOME).contains(&value) {
        return Err(InputError::OutOfRange {
            field: "income",
            value,
            min: MIN_INCOME,
            max: MAX_INCOME,
        });
    }
    Ok(value)
}

pub fn parse_savings(s: &str) -> Result<u8, InputError> {
    let value = parse_amount(s)?;
    let max = i64::from(MAX_SAVINGS_PERCENT);
    if !(0..=max).contains(&value) {
        return Err(InputError::OutOfRange {
            field: "savings percent",
            value,
            min: 0,
            max,
        });
    }
    Ok(value as u8)
}

pub fn neighborhood(name: &str) -> Result<&'static Neighborhood, InputError> {
    Neighborhood::find_by_name(name).ok_or_else(|| InputError::UnknownOption {
        kind: "neighborhood",
        name: name.to_string(),
        choices: choices(Neighborhood::all().iter().map(|n| n.name)),
    })
}

pub fn transport(name: &str) -> Result<&'static TransportOption, InputError> {
    TransportOption::find_by_name(name).ok_or_else(|| InputError::UnknownOption {
        kind: "transport option",
        name: name.to_string(),
        choices: choices(TransportOption::all().iter().map(|t| t.name)),
    })
}

pub fn lifestyle(name: &str) -> Result<&'static LifestyleOption, InputError> {
    LifestyleOption::find_by_name(name).ok_or_else(|| InputError::UnknownOption {
        kind: "lifestyle option",
        name: name.to_string(),
        choices: choices(LifestyleOption::all().iter().map(|l| l.name)),
    })
}

fn choices<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests;
