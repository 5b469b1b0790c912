use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use rust_decimal::Decimal;

use crate::budget::{MAX_INCOME, MAX_SAVINGS_PERCENT, MIN_INCOME};
use crate::models::{LifestyleOption, Neighborhood, TransportOption};
use crate::ui::advice::BUDGET_TIPS;
use crate::ui::app::{App, Field, Journey};
use crate::ui::theme;
use crate::ui::util::{format_ksh, scroll_offset, slider_bar};

const SLIDER_WIDTH: usize = 24;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(area);

    render_sidebar(f, chunks[0], app);
    render_steps(f, chunks[1], app);
}

fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(5)])
        .split(area);

    let tips: Vec<Line> = BUDGET_TIPS
        .iter()
        .map(|tip| Line::from(Span::styled(format!("- {tip}"), theme::normal_style())))
        .collect();
    let tips = Paragraph::new(tips)
        .wrap(Wrap { trim: true })
        .block(titled_block("Budget Tips"));
    f.render_widget(tips, chunks[0]);

    let stages: Vec<Line> = Journey::all()
        .iter()
        .map(|stage| {
            if *stage == app.journey {
                Line::from(Span::styled(
                    format!("(•) {stage}"),
                    Style::default()
                        .fg(theme::GREEN)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(format!("( ) {stage}"), theme::dim_style()))
            }
        })
        .collect();
    let journey = Paragraph::new(stages).block(titled_block("Your Nairobi Journey (J)"));
    f.render_widget(journey, chunks[1]);
}

fn step_header(number: usize, title: &str, total: Option<Decimal>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("STEP {number}: {title}"),
        theme::step_style(),
    )];
    if let Some(total) = total {
        spans.push(Span::styled(
            format!("  ({}/month)", format_ksh(total)),
            theme::dim_style(),
        ));
    }
    Line::from(spans)
}

fn render_steps(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.current_field();
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;

    // Marks the focused field and records where it landed
    let mut push_field = |lines: &mut Vec<Line<'static>>, field: Field, body: Vec<Span<'static>>| {
        let is_focused = field == focused;
        if is_focused {
            cursor_line = lines.len();
        }
        let marker = if is_focused { " > " } else { "   " };
        let mut spans = vec![Span::styled(marker, Style::default().fg(theme::ACCENT))];
        if is_focused {
            spans.extend(body.into_iter().map(|s| {
                let style = s.style.add_modifier(Modifier::BOLD);
                s.style(style)
            }));
        } else {
            spans.extend(body);
        }
        lines.push(Line::from(spans));
    };

    // Step 1
    lines.push(step_header(1, "Your Monthly Income", None));
    let income = app.form.income();
    push_field(
        &mut lines,
        Field::Income,
        vec![
            Span::styled(
                slider_bar(income, MIN_INCOME, MAX_INCOME, SLIDER_WIDTH),
                Style::default().fg(theme::ORANGE),
            ),
            Span::styled(format!("  {}", format_ksh(income.into())), theme::income_style()),
        ],
    );
    lines.push(Line::from(""));

    // Step 2
    lines.push(step_header(2, "Pick Your Neighborhood", None));
    for (i, n) in Neighborhood::all().iter().enumerate() {
        let chosen = app.form.neighborhood_index() == i;
        push_field(
            &mut lines,
            Field::Neighborhood(i),
            option_spans(
                if chosen { "(•)" } else { "( )" },
                chosen,
                n.name,
                n.monthly_rent,
                n.vibe,
            ),
        );
    }
    lines.push(Line::from(""));

    // Step 3
    let rides_total: Decimal = app
        .form
        .selected_transport()
        .iter()
        .map(|t| Decimal::from(t.monthly_cost))
        .sum();
    lines.push(step_header(3, "How You'll Get Around", Some(rides_total)));
    for (i, t) in TransportOption::all().iter().enumerate() {
        let on = app.form.is_transport_selected(i);
        push_field(
            &mut lines,
            Field::Transport(i),
            option_spans(
                if on { "[x]" } else { "[ ]" },
                on,
                t.name,
                t.monthly_cost,
                t.description,
            ),
        );
    }
    lines.push(Line::from(""));

    // Step 4
    let treats_total: Decimal = app
        .form
        .selected_lifestyle()
        .iter()
        .map(|l| Decimal::from(l.monthly_cost))
        .sum();
    lines.push(step_header(4, "Lifestyle Choices", Some(treats_total)));
    for (i, l) in LifestyleOption::all().iter().enumerate() {
        let on = app.form.is_lifestyle_selected(i);
        push_field(
            &mut lines,
            Field::Lifestyle(i),
            option_spans(if on { "[x]" } else { "[ ]" }, on, l.name, l.monthly_cost, ""),
        );
    }
    lines.push(Line::from(""));

    // Step 5
    lines.push(step_header(5, "Savings Goal", None));
    let pct = app.form.savings_percent();
    let saved = Decimal::from(income) * Decimal::from(pct) / Decimal::ONE_HUNDRED;
    push_field(
        &mut lines,
        Field::Savings,
        vec![
            Span::styled(
                slider_bar(
                    i64::from(pct),
                    0,
                    i64::from(MAX_SAVINGS_PERCENT),
                    SLIDER_WIDTH,
                ),
                Style::default().fg(theme::GREEN),
            ),
            Span::styled(format!("  {pct}%"), theme::income_style()),
            Span::styled(format!("  ({})", format_ksh(saved)), theme::dim_style()),
        ],
    );
    lines.push(Line::from(Span::styled(
        "   Even 10% adds up over time!",
        theme::dim_style(),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "   Press c to calculate my Nairobi budget",
        Style::default()
            .fg(theme::ORANGE)
            .add_modifier(Modifier::BOLD),
    )));

    let height = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(cursor_line, height) as u16;
    let steps = Paragraph::new(lines)
        .scroll((offset, 0))
        .block(titled_block("Plan your dream Nairobi lifestyle while saving for tomorrow!"));
    f.render_widget(steps, area);
}

fn option_spans(
    mark: &'static str,
    on: bool,
    name: &'static str,
    cost: i64,
    note: &'static str,
) -> Vec<Span<'static>> {
    let style = if on {
        theme::normal_style()
    } else {
        theme::dim_style()
    };
    vec![
        Span::styled(format!("{mark} "), Style::default().fg(theme::ACCENT)),
        Span::styled(format!("{name:<14}"), style),
        Span::styled(format!("{:>12}", format_ksh(cost.into())), theme::expense_style()),
        Span::styled(format!("  {note}"), theme::dim_style()),
    ]
}
