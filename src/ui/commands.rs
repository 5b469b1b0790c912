use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::input;
use crate::ui::util::format_ksh;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit", cmd_quit, r);
    register_command!("quit", "Quit", cmd_quit, r);
    register_command!("p", "Go to Plan", cmd_plan, r);
    register_command!("plan", "Go to Plan", cmd_plan, r);
    register_command!("b", "Go to Breakdown", cmd_breakdown, r);
    register_command!("breakdown", "Go to Breakdown", cmd_breakdown, r);
    register_command!("c", "Calculate my Nairobi budget", cmd_calc, r);
    register_command!("calc", "Calculate my Nairobi budget", cmd_calc, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "income",
        "Set monthly income (e.g. :income 150,000)",
        cmd_income,
        r
    );
    register_command!("i", "Set monthly income (e.g. :i 150000)", cmd_income, r);
    register_command!(
        "area",
        "Pick neighborhood (e.g. :area Westlands)",
        cmd_area,
        r
    );
    register_command!("a", "Pick neighborhood (e.g. :a south b)", cmd_area, r);
    register_command!(
        "ride",
        "Toggle a ride, or 'none' (e.g. :ride boda)",
        cmd_ride,
        r
    );
    register_command!(
        "treat",
        "Toggle a lifestyle choice, or 'none' (e.g. :treat gym)",
        cmd_treat,
        r
    );
    register_command!("save", "Set savings percent (e.g. :save 20)", cmd_save, r);
    register_command!("s", "Set savings percent (e.g. :s 20)", cmd_save, r);
    register_command!("reset", "Restore the default plan", cmd_reset, r);
    register_command!("journey", "Cycle your Nairobi journey stage", cmd_journey, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, args, "running command");
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        tracing::warn!(command = cmd_name, "unknown command");
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_plan(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Plan;
    Ok(())
}

fn cmd_breakdown(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.screen = Screen::Breakdown;
    Ok(())
}

fn cmd_calc(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.calculate();
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_income(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :income <amount>");
        return Ok(());
    }
    match input::parse_amount(args) {
        Ok(value) => {
            app.edit(|form| form.set_income(value));
            let income = format_ksh(app.form.income().into());
            if app.form.income() == value {
                app.set_status(format!("Income: {income}"));
            } else {
                app.set_status(format!("Income clamped to {income}"));
            }
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_save(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :save <percent>");
        return Ok(());
    }
    match input::parse_amount(args) {
        Ok(value) => {
            app.edit(|form| form.set_savings(value));
            let pct = app.form.savings_percent();
            if i64::from(pct) == value {
                app.set_status(format!("Saving {pct}% of income"));
            } else {
                app.set_status(format!("Savings clamped to {pct}%"));
            }
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_area(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :area <neighborhood>");
        return Ok(());
    }
    match input::neighborhood(args) {
        Ok(area) => {
            app.edit(|form| form.choose_neighborhood(area));
            app.set_status(format!("Neighborhood: {} - {}", area.name, area.vibe));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_ride(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :ride <option|none>");
        return Ok(());
    }
    if args.eq_ignore_ascii_case("none") {
        app.edit(|form| form.clear_transport());
        app.set_status("No rides selected");
        return Ok(());
    }
    match input::transport(args) {
        Ok(ride) => {
            app.edit(|form| form.toggle_transport_option(ride));
            let on = app.form.selected_transport().contains(&ride);
            app.set_status(format!("{} {}", ride.name, if on { "added" } else { "removed" }));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_treat(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :treat <option|none>");
        return Ok(());
    }
    if args.eq_ignore_ascii_case("none") {
        app.edit(|form| form.clear_lifestyle());
        app.set_status("No lifestyle choices selected");
        return Ok(());
    }
    match input::lifestyle(args) {
        Ok(treat) => {
            app.edit(|form| form.toggle_lifestyle_option(treat));
            let on = app.form.selected_lifestyle().contains(&treat);
            app.set_status(format!("{} {}", treat.name, if on { "added" } else { "removed" }));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.reset();
    Ok(())
}

fn cmd_journey(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.journey = app.journey.next();
    app.set_status(format!("Journey: {}", app.journey));
    Ok(())
}
