use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::budget::{Breakdown, Outlook};
use crate::ui::advice::{advice, FUN_FACT};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{center, format_compact, format_ksh, proportional_widths};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let Some(breakdown) = app.breakdown.as_ref() else {
        render_empty(f, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Table + bar chart
            Constraint::Length(3),  // Proportional strip
            Constraint::Min(4),     // Outlook message
            Constraint::Length(1),  // Footer
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[0]);

    render_table(f, top[0], breakdown);
    render_bar_chart(f, top[1], breakdown);
    render_strip(f, chunks[1], breakdown);
    render_advice(f, chunks[2], breakdown);

    let footer = Paragraph::new(Line::from(Span::styled(FUN_FACT, theme::dim_style())));
    f.render_widget(footer, chunks[3]);
}

fn titled_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(title, theme::title_style()))
}

fn amount_cell(amount: Decimal, style: Style) -> Cell<'static> {
    Cell::from(Line::from(Span::styled(format_ksh(amount), style)).alignment(Alignment::Right))
}

fn share_cell(share: Decimal) -> Cell<'static> {
    Cell::from(Line::from(Span::styled(format!("{share}%"), theme::dim_style())).alignment(Alignment::Right))
}

fn render_table(f: &mut Frame, area: Rect, breakdown: &Breakdown) {
    let result = &breakdown.result;
    let outlook_style = Style::default()
        .fg(theme::outlook_color(result.outlook()))
        .add_modifier(Modifier::BOLD);

    let line = |label: String, amount: Decimal, style: Style| {
        Row::new(vec![
            Cell::from(Span::styled(label, theme::normal_style())),
            amount_cell(amount, style),
            share_cell(result.share_of_income(amount)),
        ])
    };

    let rows = vec![
        line("Income".into(), result.income, theme::income_style()),
        line("Housing".into(), result.rent, theme::expense_style()),
        line("Transport".into(), result.transport_cost, theme::expense_style()),
        line("Lifestyle".into(), result.lifestyle_cost, theme::expense_style()),
        line(
            format!("Savings ({}%)", breakdown.input.savings_percent),
            result.savings_amount,
            theme::income_style(),
        ),
        line("Expenses".into(), result.total_expenses, theme::dim_style()),
        line("Remaining".into(), result.remaining, outlook_style),
    ];

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from(Line::from("Amount").alignment(Alignment::Right)),
        Cell::from(Line::from("Share").alignment(Alignment::Right)),
    ])
    .style(theme::header_style());

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Min(14),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(titled_block(format!(
        " Your Nairobi Budget Breakdown: {} ",
        breakdown.input.neighborhood
    )));

    f.render_widget(table, area);
}

fn render_bar_chart(f: &mut Frame, area: Rect, breakdown: &Breakdown) {
    let bars: Vec<Bar> = breakdown
        .result
        .allocations()
        .iter()
        .map(|a| {
            let color = theme::slice_color(a.slice);
            Bar::default()
                .value(a.amount.to_u64().unwrap_or(0))
                .label(Line::from(a.slice.as_str()))
                .text_value(format_compact(a.amount))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block(format!(
            " Out of {} ",
            format_ksh(breakdown.result.income)
        )))
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1);

    f.render_widget(chart, area);
}

/// Income split into side-by-side segments, each as wide as its share.
fn render_strip(f: &mut Frame, area: Rect, breakdown: &Breakdown) {
    let block = titled_block(" Where your shillings go ".to_string());
    let inner = block.inner(area);

    let allocations = breakdown.result.allocations();
    let values: Vec<u64> = allocations
        .iter()
        .map(|a| a.amount.to_u64().unwrap_or(0))
        .collect();
    let widths = proportional_widths(&values, inner.width);

    let spans: Vec<Span> = allocations
        .iter()
        .zip(widths)
        .filter(|(_, width)| *width > 0)
        .map(|(a, width)| {
            Span::styled(
                center(a.slice.as_str(), width as usize),
                Style::default()
                    .fg(theme::HEADER_BG)
                    .bg(theme::slice_color(a.slice))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_advice(f: &mut Frame, area: Rect, breakdown: &Breakdown) {
    let advice = advice(breakdown);
    let color = theme::outlook_color(advice.outlook);

    let mut lines = vec![Line::from(Span::styled(
        advice.headline,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        advice
            .details
            .into_iter()
            .map(|d| Line::from(Span::styled(d, theme::normal_style()))),
    );

    let title = match advice.outlook {
        Outlook::Deficit => " Deficit ",
        Outlook::Tight => " Tight ",
        Outlook::Comfortable => " Comfortable ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Nothing calculated yet", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Pick your income, neighborhood, rides, treats and savings, then press c",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(titled_block(" Breakdown ".to_string()));
    f.render_widget(msg, area);
}
