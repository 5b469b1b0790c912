use crate::budget::{Breakdown, Outlook};
use crate::models::Neighborhood;
use crate::ui::util::format_ksh;

pub(crate) const BUDGET_TIPS: &[&str] = &[
    "Matatus save you money but add adventure!",
    "South B = 3x more savings than Westlands",
    "Cooking at home = more shillings for safari!",
];

pub(crate) const FUN_FACT: &str =
    "Did you know? Nairobi means 'cool water' in Maasai. Budget wisely and enjoy Kenya's vibrant capital!";

/// The message shown under a breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Advice {
    pub(crate) outlook: Outlook,
    pub(crate) headline: String,
    pub(crate) details: Vec<String>,
}

pub(crate) fn advice(breakdown: &Breakdown) -> Advice {
    let outlook = breakdown.outlook();
    let remaining = breakdown.result.remaining;
    let (headline, details) = match outlook {
        Outlook::Deficit => {
            let cheapest = Neighborhood::cheapest();
            let suggestion = if breakdown.input.neighborhood == cheapest {
                "Try dropping a ride or a treat?".to_string()
            } else {
                format!(
                    "Try {} instead? Rent there is {}.",
                    cheapest.name,
                    format_ksh(cheapest.monthly_rent.into())
                )
            };
            (
                format!(
                    "Whoops! Your expenses exceed income by {}.",
                    format_ksh(remaining.abs())
                ),
                vec![suggestion],
            )
        }
        Outlook::Tight => (
            "Tight budget! Maybe fewer Uber rides this month?".to_string(),
            vec![format!("Only {} left after savings.", format_ksh(remaining))],
        ),
        Outlook::Comfortable => (
            "You're rocking it!".to_string(),
            vec![
                format!("With {} left, you could:", format_ksh(remaining)),
                format!(
                    "  - Treat yourself at {}'s best cafe",
                    breakdown.input.neighborhood.name
                ),
                "  - Add to your savings".to_string(),
                "  - Plan a weekend getaway".to_string(),
            ],
        ),
    };
    Advice {
        outlook,
        headline,
        details,
    }
}
