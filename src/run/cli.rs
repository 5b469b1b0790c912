use anyhow::{Context, Result};
use rust_decimal::prelude::ToPrimitive;

use crate::budget::Breakdown;
use crate::input::{self, BudgetForm};
use crate::models::{LifestyleOption, Neighborhood, TransportOption};
use crate::ui::advice::advice;
use crate::ui::util::{format_ksh, proportional_widths};

const CHART_WIDTH: u16 = 40;

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "budget" | "b" => cli_budget(&args[2..]),
        "options" | "o" => {
            cli_options();
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("nairobi-budget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("Nairobi Budget Adventure - plan your dream Nairobi lifestyle while saving for tomorrow");
    println!();
    println!("Usage: nairobi-budget [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  budget                        Print a budget breakdown");
    println!("    --income <KSh>              Monthly income, 20,000-500,000 (default: 120,000)");
    println!("    --area <name>               Neighborhood (default: Kilimani)");
    println!("    --ride <name>               Transport option, repeatable (default: Matatus)");
    println!("    --no-rides                  Select no transport");
    println!("    --treat <name>              Lifestyle choice, repeatable (default: Groceries, Entertainment)");
    println!("    --no-treats                 Select no lifestyle choices");
    println!("    --save <percent>            Savings rate, 0-50 (default: 15)");
    println!("  options                       List neighborhoods, rides and treats");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Logs go to the data directory; set NAIROBI_BUDGET_LOG=debug for more detail.");
}

fn cli_budget(args: &[String]) -> Result<()> {
    let form = parse_budget_args(args)?;
    let breakdown = Breakdown::new(form.to_input());
    tracing::info!(
        income = breakdown.input.monthly_income,
        neighborhood = %breakdown.input.neighborhood,
        remaining = %breakdown.result.remaining,
        outlook = %breakdown.outlook(),
        "calculated budget from cli"
    );
    for line in budget_report(&breakdown) {
        println!("{line}");
    }
    Ok(())
}

/// Start from the form defaults and apply each flag in order. The first
/// `--ride`/`--treat` replaces the default selection; later ones add to it.
fn parse_budget_args(args: &[String]) -> Result<BudgetForm> {
    let mut form = BudgetForm::default();
    let mut rides_given = false;
    let mut treats_given = false;

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .map(String::as_str)
                .with_context(|| format!("{flag} needs a value"))
        };
        match flag.as_str() {
            "--income" => {
                form.set_income(input::parse_income(value()?)?);
            }
            "--area" => {
                form.choose_neighborhood(input::neighborhood(value()?)?);
            }
            "--save" => {
                form.set_savings(i64::from(input::parse_savings(value()?)?));
            }
            "--ride" => {
                let ride = input::transport(value()?)?;
                if !rides_given {
                    form.clear_transport();
                    rides_given = true;
                }
                form.include_transport(ride);
            }
            "--treat" => {
                let treat = input::lifestyle(value()?)?;
                if !treats_given {
                    form.clear_lifestyle();
                    treats_given = true;
                }
                form.include_lifestyle(treat);
            }
            "--no-rides" => {
                form.clear_transport();
                rides_given = true;
            }
            "--no-treats" => {
                form.clear_lifestyle();
                treats_given = true;
            }
            other => anyhow::bail!("Unknown option: {other}"),
        }
    }
    Ok(form)
}

fn budget_report(breakdown: &Breakdown) -> Vec<String> {
    let input = &breakdown.input;
    let result = &breakdown.result;
    let mut lines = Vec::new();

    lines.push(format!("Nairobi Budget Breakdown — {}", input.neighborhood));
    lines.push("─".repeat(44));
    let mut row = |label: &str, amount| {
        lines.push(format!(
            "  {label:<16} {:>16} {:>7}%",
            format_ksh(amount),
            result.share_of_income(amount)
        ));
    };
    row("Income", result.income);
    row("Housing", result.rent);
    row("Transport", result.transport_cost);
    row("Lifestyle", result.lifestyle_cost);
    row(&format!("Savings ({}%)", input.savings_percent), result.savings_amount);
    row("Remaining", result.remaining);

    let allocations = result.allocations();
    let values: Vec<u64> = allocations
        .iter()
        .map(|a| a.amount.to_u64().unwrap_or(0))
        .collect();
    lines.push(String::new());
    lines.push("Where your shillings go:".to_string());
    for (a, width) in allocations.iter().zip(proportional_widths(&values, CHART_WIDTH)) {
        lines.push(format!(
            "  {:<10} {}",
            a.slice.as_str(),
            "█".repeat(width as usize)
        ));
    }

    let advice = advice(breakdown);
    lines.push(String::new());
    lines.push(format!(
        "[{}] {}",
        advice.outlook.as_str().to_uppercase(),
        advice.headline
    ));
    lines.extend(advice.details);
    lines
}

fn cli_options() {
    println!("Neighborhoods (rent per month):");
    for n in Neighborhood::all() {
        println!(
            "  {:<14} {:>12}  {}",
            n.name,
            format_ksh(n.monthly_rent.into()),
            n.vibe
        );
    }
    println!();
    println!("Rides:");
    for t in TransportOption::all() {
        println!(
            "  {:<14} {:>12}  {}",
            t.name,
            format_ksh(t.monthly_cost.into()),
            t.description
        );
    }
    println!();
    println!("Treats:");
    for l in LifestyleOption::all() {
        println!("  {:<14} {:>12}", l.name, format_ksh(l.monthly_cost.into()));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rust_decimal::Decimal;

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_flags_uses_defaults() {
        let form = parse_budget_args(&[]).unwrap();
        assert_eq!(form, BudgetForm::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let form = parse_budget_args(&args(&[
            "--income", "50,000", "--area", "westlands", "--save", "0", "--no-rides",
            "--no-treats",
        ]))
        .unwrap();
        let breakdown = Breakdown::new(form.to_input());
        assert_eq!(breakdown.result.remaining, Decimal::from(-25_000));
    }

    #[test]
    fn test_first_ride_replaces_default_then_adds() {
        let form = parse_budget_args(&args(&["--ride", "boda", "--ride", "uber"])).unwrap();
        let names: Vec<&str> = form.selected_transport().iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Uber/Bolt", "Boda Bodas"]);
    }

    #[test]
    fn test_treat_flags() {
        let form = parse_budget_args(&args(&["--treat", "gym"])).unwrap();
        let names: Vec<&str> = form.selected_lifestyle().iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Gym"]);
    }

    #[test]
    fn test_out_of_range_income_is_rejected() {
        let err = parse_budget_args(&args(&["--income", "900000"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "income must be between 20000 and 500000, got 900000"
        );
    }

    #[test]
    fn test_unknown_area_is_rejected() {
        let err = parse_budget_args(&args(&["--area", "Karen"])).unwrap_err();
        assert!(err.to_string().starts_with("unknown neighborhood 'Karen'"));
    }

    #[test]
    fn test_missing_value_and_unknown_flag() {
        let err = parse_budget_args(&args(&["--save"])).unwrap_err();
        assert_eq!(err.to_string(), "--save needs a value");
        let err = parse_budget_args(&args(&["--yolo"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown option: --yolo");
    }

    #[test]
    fn test_report_for_default_plan() {
        let report = budget_report(&Breakdown::new(BudgetForm::default().to_input()));
        assert_eq!(report[0], "Nairobi Budget Breakdown — Kilimani");
        assert!(report.iter().any(|l| l.contains("Savings (15%)") && l.contains("KSh 18,000")));
        assert!(report.iter().any(|l| l.contains("Remaining") && l.contains("KSh 9,000")));
        assert!(report
            .iter()
            .any(|l| l == "[TIGHT] Tight budget! Maybe fewer Uber rides this month?"));
    }

    #[test]
    fn test_report_chart_fills_width() {
        let report = budget_report(&Breakdown::new(BudgetForm::default().to_input()));
        let cells: usize = report
            .iter()
            .filter(|l| l.starts_with("  ") && l.contains('█'))
            .map(|l| l.chars().filter(|c| *c == '█').count())
            .sum();
        assert_eq!(cells, CHART_WIDTH as usize);
    }
}
