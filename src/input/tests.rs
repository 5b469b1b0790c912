#![allow(clippy::unwrap_used)]

use super::*;

// ── Defaults ──────────────────────────────────────────────────

#[test]
fn test_form_defaults() {
    let form = BudgetForm::default();
    assert_eq!(form.income(), 120_000);
    assert_eq!(form.savings_percent(), 15);
    assert_eq!(form.neighborhood().name, "Kilimani");

    let rides: Vec<&str> = form.selected_transport().iter().map(|t| t.name).collect();
    assert_eq!(rides, vec!["Matatus"]);
    let treats: Vec<&str> = form.selected_lifestyle().iter().map(|l| l.name).collect();
    assert_eq!(treats, vec!["Groceries", "Entertainment"]);
}

#[test]
fn test_default_form_to_input() {
    let input = BudgetForm::default().to_input();
    assert_eq!(input.monthly_income, 120_000);
    assert_eq!(input.neighborhood.monthly_rent, 65_000);
    assert_eq!(input.transport.len(), 1);
    assert_eq!(input.lifestyle.len(), 2);
    assert_eq!(input.savings_percent, 15);
}

// ── Sliders ───────────────────────────────────────────────────

#[test]
fn test_income_clamps_to_bounds() {
    let mut form = BudgetForm::default();
    assert!(form.set_income(1_000_000));
    assert_eq!(form.income(), 500_000);
    assert!(!form.adjust_income(INCOME_STEP));
    assert_eq!(form.income(), 500_000);

    assert!(form.set_income(5));
    assert_eq!(form.income(), 20_000);
    assert!(!form.adjust_income(-INCOME_BIG_STEP));
    assert_eq!(form.income(), 20_000);
}

#[test]
fn test_income_steps() {
    let mut form = BudgetForm::default();
    assert!(form.adjust_income(INCOME_STEP));
    assert_eq!(form.income(), 121_000);
    assert!(form.adjust_income(-INCOME_BIG_STEP));
    assert_eq!(form.income(), 111_000);
}

#[test]
fn test_income_adjust_does_not_overflow() {
    let mut form = BudgetForm::default();
    form.adjust_income(i64::MAX);
    assert_eq!(form.income(), 500_000);
    form.adjust_income(i64::MIN);
    assert_eq!(form.income(), 20_000);
}

#[test]
fn test_savings_clamps_to_bounds() {
    let mut form = BudgetForm::default();
    assert!(form.set_savings(80));
    assert_eq!(form.savings_percent(), 50);
    assert!(form.set_savings(-3));
    assert_eq!(form.savings_percent(), 0);
    assert!(!form.adjust_savings(-SAVINGS_STEP));
    assert!(form.adjust_savings(SAVINGS_BIG_STEP));
    assert_eq!(form.savings_percent(), 5);
}

#[test]
fn test_set_same_value_reports_no_change() {
    let mut form = BudgetForm::default();
    assert!(!form.set_income(120_000));
    assert!(!form.set_savings(15));
    assert!(!form.select_neighborhood(0));
}

// ── Selections ────────────────────────────────────────────────

#[test]
fn test_select_neighborhood() {
    let mut form = BudgetForm::default();
    assert!(form.select_neighborhood(3));
    assert_eq!(form.neighborhood().name, "South B");
    assert!(!form.select_neighborhood(99));
    assert_eq!(form.neighborhood_index(), 3);
}

#[test]
fn test_choose_neighborhood_by_option() {
    let mut form = BudgetForm::default();
    let westlands = neighborhood("westlands").unwrap();
    assert!(form.choose_neighborhood(westlands));
    assert_eq!(form.neighborhood().name, "Westlands");
    assert!(!form.choose_neighborhood(westlands));
}

#[test]
fn test_toggle_transport() {
    let mut form = BudgetForm::default();
    assert!(form.is_transport_selected(0));
    assert!(form.toggle_transport(0));
    assert!(!form.is_transport_selected(0));
    assert!(form.toggle_transport(1));
    assert!(form.is_transport_selected(1));
    assert!(!form.toggle_transport(42));
}

#[test]
fn test_toggle_by_option() {
    let mut form = BudgetForm::default();
    assert!(form.toggle_lifestyle_option(lifestyle("gym").unwrap()));
    assert!(form.is_lifestyle_selected(4));
    assert!(form.toggle_transport_option(transport("matatus").unwrap()));
    assert!(form.selected_transport().is_empty());
}

#[test]
fn test_include_is_idempotent() {
    let mut form = BudgetForm::default();
    let matatus = transport("Matatus").unwrap();
    assert!(!form.include_transport(matatus));
    let eating_out = lifestyle("eating out").unwrap();
    assert!(form.include_lifestyle(eating_out));
    assert!(!form.include_lifestyle(eating_out));
    assert_eq!(form.selected_lifestyle().len(), 3);
}

#[test]
fn test_clear_selections() {
    let mut form = BudgetForm::default();
    assert!(form.clear_transport());
    assert!(form.clear_lifestyle());
    assert!(!form.clear_transport());
    let input = form.to_input();
    assert!(input.transport.is_empty());
    assert!(input.lifestyle.is_empty());
}

#[test]
fn test_reset() {
    let mut form = BudgetForm::default();
    form.set_income(300_000);
    form.select_neighborhood(2);
    form.toggle_lifestyle(0);
    assert!(form.reset());
    assert_eq!(form, BudgetForm::default());
    assert!(!form.reset());
}

#[test]
fn test_selection_follows_table_order() {
    let mut form = BudgetForm::default();
    form.toggle_transport(3);
    form.toggle_transport(1);
    let names: Vec<&str> = form.selected_transport().iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Matatus", "Uber/Bolt", "Boda Bodas"]);
}

// ── Parsing ───────────────────────────────────────────────────

#[test]
fn test_parse_amount_formats() {
    assert_eq!(parse_amount("120000").unwrap(), 120_000);
    assert_eq!(parse_amount(" 120,000 ").unwrap(), 120_000);
    assert_eq!(parse_amount("KSh 85_000").unwrap(), 85_000);
    assert_eq!(parse_amount("15%").unwrap(), 15);
    assert_eq!(parse_amount("-5").unwrap(), -5);
}

#[test]
fn test_parse_amount_rejects_garbage() {
    assert_eq!(
        parse_amount("lots"),
        Err(InputError::NotANumber("lots".into()))
    );
    assert!(parse_amount("").is_err());
    assert!(parse_amount("12.5").is_err());
}

#[test]
fn test_parse_income_range() {
    assert_eq!(parse_income("20000").unwrap(), 20_000);
    assert_eq!(parse_income("500,000").unwrap(), 500_000);
    let err = parse_income("19999").unwrap_err();
    assert_eq!(
        err,
        InputError::OutOfRange {
            field: "income",
            value: 19_999,
            min: 20_000,
            max: 500_000,
        }
    );
    assert_eq!(
        err.to_string(),
        "income must be between 20000 and 500000, got 19999"
    );
}

#[test]
fn test_parse_savings_range() {
    assert_eq!(parse_savings("0").unwrap(), 0);
    assert_eq!(parse_savings("50%").unwrap(), 50);
    assert!(parse_savings("51").is_err());
    assert!(parse_savings("-1").is_err());
}

#[test]
fn test_lookup_errors_list_choices() {
    let err = neighborhood("Karen").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown neighborhood 'Karen' (choose from: Kilimani, Westlands, Kileleshwa, South B)"
    );
    assert!(transport("helicopter").is_err());
    assert!(lifestyle("golf").is_err());
}
