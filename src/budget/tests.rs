#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::{LifestyleOption, Neighborhood, TransportOption};

fn area(name: &str) -> &'static Neighborhood {
    Neighborhood::find_by_name(name).unwrap()
}

fn ride(name: &str) -> &'static TransportOption {
    TransportOption::find_by_name(name).unwrap()
}

fn treat(name: &str) -> &'static LifestyleOption {
    LifestyleOption::find_by_name(name).unwrap()
}

fn make_input(income: i64, neighborhood: &str, savings_percent: u8) -> BudgetInput {
    BudgetInput {
        monthly_income: income,
        neighborhood: area(neighborhood),
        transport: Vec::new(),
        lifestyle: Vec::new(),
        savings_percent,
    }
}

// ── compute ───────────────────────────────────────────────────

#[test]
fn test_default_plan_is_tight() {
    let mut input = make_input(120_000, "Kilimani", 15);
    input.transport = vec![ride("Matatus")];
    input.lifestyle = vec![treat("Groceries"), treat("Entertainment")];

    let result = compute(&input);
    assert_eq!(result.income, dec!(120000));
    assert_eq!(result.rent, dec!(65000));
    assert_eq!(result.transport_cost, dec!(8000));
    assert_eq!(result.lifestyle_cost, dec!(20000));
    assert_eq!(result.savings_amount, dec!(18000));
    assert_eq!(result.total_expenses, dec!(93000));
    assert_eq!(result.remaining, dec!(9000));
    assert_eq!(result.outlook(), Outlook::Tight);
}

#[test]
fn test_westlands_on_low_income_is_deficit() {
    let result = compute(&make_input(50_000, "Westlands", 0));
    assert_eq!(result.savings_amount, Decimal::ZERO);
    assert_eq!(result.total_expenses, dec!(75000));
    assert_eq!(result.remaining, dec!(-25000));
    assert_eq!(result.outlook(), Outlook::Deficit);
}

#[test]
fn test_max_income_max_savings_is_comfortable() {
    let result = compute(&make_input(500_000, "South B", 50));
    assert_eq!(result.savings_amount, dec!(250000));
    assert_eq!(result.total_expenses, dec!(45000));
    assert_eq!(result.remaining, dec!(205000));
    assert_eq!(result.outlook(), Outlook::Comfortable);
}

#[test]
fn test_empty_selections_cost_nothing() {
    let result = compute(&make_input(80_000, "Kileleshwa", 10));
    assert_eq!(result.transport_cost, Decimal::ZERO);
    assert_eq!(result.lifestyle_cost, Decimal::ZERO);
    assert_eq!(result.total_expenses, result.rent);
}

#[test]
fn test_everything_selected() {
    let mut input = make_input(200_000, "Westlands", 20);
    input.transport = TransportOption::all().iter().collect();
    input.lifestyle = LifestyleOption::all().iter().collect();

    let result = compute(&input);
    assert_eq!(result.transport_cost, dec!(53000));
    assert_eq!(result.lifestyle_cost, dec!(44000));
    assert_eq!(result.total_expenses, dec!(172000));
    assert_eq!(result.savings_amount, dec!(40000));
    assert_eq!(result.remaining, dec!(-12000));
}

#[test]
fn test_savings_keeps_cents() {
    let result = compute(&make_input(123_457, "South B", 15));
    assert_eq!(result.savings_amount, dec!(18518.55));
    assert_eq!(result.remaining, dec!(59938.45));
}

#[test]
fn test_totals_hold_for_every_neighborhood_and_rate() {
    for neighborhood in Neighborhood::all() {
        for pct in [0u8, 1, 15, 33, 50] {
            for income in [MIN_INCOME, 77_777, MAX_INCOME] {
                let input = BudgetInput {
                    monthly_income: income,
                    neighborhood,
                    transport: vec![ride("Boda"), ride("Uber")],
                    lifestyle: vec![treat("Gym")],
                    savings_percent: pct,
                };
                let r = compute(&input);
                assert_eq!(
                    r.total_expenses,
                    r.rent + r.transport_cost + r.lifestyle_cost
                );
                assert_eq!(r.remaining, r.income - r.total_expenses - r.savings_amount);
            }
        }
    }
}

#[test]
fn test_compute_is_idempotent() {
    let mut input = make_input(250_000, "Kilimani", 25);
    input.transport = vec![ride("Personal Car")];
    input.lifestyle = vec![treat("Eating Out"), treat("Self-Care")];

    let first = compute(&input);
    let second = compute(&input);
    assert_eq!(first, second);
}

// ── Outlook ───────────────────────────────────────────────────

#[test]
fn test_outlook_boundaries() {
    assert_eq!(Outlook::classify(dec!(-1)), Outlook::Deficit);
    assert_eq!(Outlook::classify(dec!(-0.01)), Outlook::Deficit);
    assert_eq!(Outlook::classify(Decimal::ZERO), Outlook::Tight);
    assert_eq!(Outlook::classify(dec!(9999)), Outlook::Tight);
    assert_eq!(Outlook::classify(dec!(9999.99)), Outlook::Tight);
    assert_eq!(Outlook::classify(dec!(10000)), Outlook::Comfortable);
}

#[test]
fn test_outlook_display() {
    assert_eq!(format!("{}", Outlook::Deficit), "deficit");
    assert_eq!(format!("{}", Outlook::Tight), "tight");
    assert_eq!(format!("{}", Outlook::Comfortable), "comfortable");
}

// ── Allocations ───────────────────────────────────────────────

#[test]
fn test_allocations_order_and_amounts() {
    let mut input = make_input(120_000, "Kilimani", 15);
    input.transport = vec![ride("Matatus")];
    input.lifestyle = vec![treat("Groceries"), treat("Entertainment")];
    let allocations = compute(&input).allocations();

    let slices: Vec<Slice> = allocations.iter().map(|a| a.slice).collect();
    assert_eq!(
        slices,
        vec![
            Slice::Housing,
            Slice::Transport,
            Slice::Lifestyle,
            Slice::Savings,
            Slice::Remaining,
        ]
    );
    let amounts: Vec<Decimal> = allocations.iter().map(|a| a.amount).collect();
    assert_eq!(
        amounts,
        vec![dec!(65000), dec!(8000), dec!(20000), dec!(18000), dec!(9000)]
    );
}

#[test]
fn test_allocations_clamp_deficit_for_display_only() {
    let result = compute(&make_input(50_000, "Westlands", 0));
    let remaining = result.allocations()[4];
    assert_eq!(remaining.slice, Slice::Remaining);
    assert_eq!(remaining.amount, Decimal::ZERO);
    assert_eq!(result.remaining, dec!(-25000));
}

#[test]
fn test_share_of_income() {
    let result = compute(&make_input(120_000, "Kilimani", 15));
    assert_eq!(result.share_of_income(result.savings_amount), dec!(15.0));
    assert_eq!(result.share_of_income(result.rent), dec!(54.2));
}

// ── Breakdown ─────────────────────────────────────────────────

#[test]
fn test_breakdown_keeps_input() {
    let input = make_input(500_000, "South B", 50);
    let breakdown = Breakdown::new(input.clone());
    assert_eq!(breakdown.input, input);
    assert_eq!(breakdown.result, compute(&input));
    assert_eq!(breakdown.outlook(), Outlook::Comfortable);
}
