//! The budget calculator: a pure function from a [`BudgetInput`] to a
//! [`BudgetResult`], plus the outlook classification and chart allocations
//! derived from a result.

use rust_decimal::Decimal;

use crate::models::{LifestyleOption, Neighborhood, TransportOption};

pub const MIN_INCOME: i64 = 20_000;
pub const MAX_INCOME: i64 = 500_000;
pub const MAX_SAVINGS_PERCENT: u8 = 50;

/// Remaining money below this (but not negative) is a tight budget.
pub const TIGHT_THRESHOLD: i64 = 10_000;

/// One month of choices, already constrained by the form that collected them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetInput {
    /// Whole shillings, within `MIN_INCOME..=MAX_INCOME`.
    pub monthly_income: i64,
    pub neighborhood: &'static Neighborhood,
    /// Treated as a set; the form never hands over duplicates.
    pub transport: Vec<&'static TransportOption>,
    pub lifestyle: Vec<&'static LifestyleOption>,
    /// Within `0..=MAX_SAVINGS_PERCENT`.
    pub savings_percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetResult {
    pub income: Decimal,
    pub rent: Decimal,
    pub transport_cost: Decimal,
    pub lifestyle_cost: Decimal,
    pub savings_amount: Decimal,
    pub total_expenses: Decimal,
    /// Negative when the plan runs a deficit.
    pub remaining: Decimal,
}

pub fn compute(input: &BudgetInput) -> BudgetResult {
    let income = Decimal::from(input.monthly_income);
    let rent = Decimal::from(input.neighborhood.monthly_rent);
    let transport_cost: Decimal = input
        .transport
        .iter()
        .map(|t| Decimal::from(t.monthly_cost))
        .sum();
    let lifestyle_cost: Decimal = input
        .lifestyle
        .iter()
        .map(|l| Decimal::from(l.monthly_cost))
        .sum();
    // Exact fixed-point: at most two decimal places for whole-shilling income
    let savings_amount = income * Decimal::from(input.savings_percent) / Decimal::ONE_HUNDRED;

    let total_expenses = rent + transport_cost + lifestyle_cost;
    let remaining = income - total_expenses - savings_amount;

    BudgetResult {
        income,
        rent,
        transport_cost,
        lifestyle_cost,
        savings_amount,
        total_expenses,
        remaining,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlook {
    Deficit,
    Tight,
    Comfortable,
}

impl Outlook {
    pub fn classify(remaining: Decimal) -> Self {
        if remaining < Decimal::ZERO {
            Self::Deficit
        } else if remaining < Decimal::from(TIGHT_THRESHOLD) {
            Self::Tight
        } else {
            Self::Comfortable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deficit => "deficit",
            Self::Tight => "tight",
            Self::Comfortable => "comfortable",
        }
    }
}

impl std::fmt::Display for Outlook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node under the Income root of the breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slice {
    Housing,
    Transport,
    Lifestyle,
    Savings,
    Remaining,
}

impl Slice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Transport => "Transport",
            Self::Lifestyle => "Lifestyle",
            Self::Savings => "Savings",
            Self::Remaining => "Remaining",
        }
    }
}

impl std::fmt::Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub slice: Slice,
    pub amount: Decimal,
}

impl BudgetResult {
    pub fn outlook(&self) -> Outlook {
        Outlook::classify(self.remaining)
    }

    /// Chart nodes in display order. Remaining is clamped at zero here only;
    /// `self.remaining` keeps the deficit.
    pub fn allocations(&self) -> [Allocation; 5] {
        [
            Allocation {
                slice: Slice::Housing,
                amount: self.rent,
            },
            Allocation {
                slice: Slice::Transport,
                amount: self.transport_cost,
            },
            Allocation {
                slice: Slice::Lifestyle,
                amount: self.lifestyle_cost,
            },
            Allocation {
                slice: Slice::Savings,
                amount: self.savings_amount,
            },
            Allocation {
                slice: Slice::Remaining,
                amount: self.remaining.max(Decimal::ZERO),
            },
        ]
    }

    /// `amount` as a percentage of income, rounded to one decimal place.
    pub fn share_of_income(&self, amount: Decimal) -> Decimal {
        if self.income.is_zero() {
            return Decimal::ZERO;
        }
        (amount * Decimal::ONE_HUNDRED / self.income).round_dp(1)
    }
}

/// A computed plan together with the choices that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub input: BudgetInput,
    pub result: BudgetResult,
}

impl Breakdown {
    pub fn new(input: BudgetInput) -> Self {
        let result = compute(&input);
        Self { input, result }
    }

    pub fn outlook(&self) -> Outlook {
        self.result.outlook()
    }
}

#[cfg(test)]
mod tests;
