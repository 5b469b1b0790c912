#![allow(clippy::unwrap_used)]

use super::advice::*;
use crate::budget::{Breakdown, BudgetInput, Outlook};
use crate::input::BudgetForm;
use crate::models::Neighborhood;

fn breakdown(income: i64, area: &str, savings_percent: u8) -> Breakdown {
    Breakdown::new(BudgetInput {
        monthly_income: income,
        neighborhood: Neighborhood::find_by_name(area).unwrap(),
        transport: Vec::new(),
        lifestyle: Vec::new(),
        savings_percent,
    })
}

#[test]
fn test_deficit_suggests_cheapest_area() {
    let advice = advice(&breakdown(50_000, "Westlands", 0));
    assert_eq!(advice.outlook, Outlook::Deficit);
    assert_eq!(
        advice.headline,
        "Whoops! Your expenses exceed income by KSh 25,000."
    );
    assert_eq!(
        advice.details,
        vec!["Try South B instead? Rent there is KSh 45,000.".to_string()]
    );
}

#[test]
fn test_deficit_in_cheapest_area() {
    let advice = advice(&breakdown(40_000, "South B", 0));
    assert_eq!(advice.outlook, Outlook::Deficit);
    assert_eq!(advice.details, vec!["Try dropping a ride or a treat?".to_string()]);
}

#[test]
fn test_tight_default_plan() {
    let advice = advice(&Breakdown::new(BudgetForm::default().to_input()));
    assert_eq!(advice.outlook, Outlook::Tight);
    assert_eq!(advice.headline, "Tight budget! Maybe fewer Uber rides this month?");
    assert_eq!(advice.details, vec!["Only KSh 9,000 left after savings.".to_string()]);
}

#[test]
fn test_comfortable_names_the_neighborhood() {
    let advice = advice(&breakdown(500_000, "South B", 50));
    assert_eq!(advice.outlook, Outlook::Comfortable);
    assert_eq!(advice.headline, "You're rocking it!");
    assert_eq!(advice.details[0], "With KSh 205,000 left, you could:");
    assert_eq!(advice.details[1], "  - Treat yourself at South B's best cafe");
    assert_eq!(advice.details.len(), 4);
}
