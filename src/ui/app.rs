use crate::budget::Breakdown;
use crate::input::{
    BudgetForm, INCOME_BIG_STEP, INCOME_STEP, SAVINGS_BIG_STEP, SAVINGS_STEP,
};
use crate::models::{LifestyleOption, Neighborhood, TransportOption};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Plan,
    Breakdown,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Plan, Self::Breakdown]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plan => write!(f, "Plan"),
            Self::Breakdown => write!(f, "Breakdown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

/// Self-assessment shown in the sidebar. Purely cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Journey {
    Seedling,
    Sprouting,
    MightyBaobab,
}

impl Journey {
    pub(crate) fn all() -> &'static [Journey] {
        &[Self::Seedling, Self::Sprouting, Self::MightyBaobab]
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Seedling => Self::Sprouting,
            Self::Sprouting => Self::MightyBaobab,
            Self::MightyBaobab => Self::Seedling,
        }
    }
}

impl std::fmt::Display for Journey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seedling => write!(f, "Seedling"),
            Self::Sprouting => write!(f, "Sprouting"),
            Self::MightyBaobab => write!(f, "Mighty Baobab"),
        }
    }
}

/// One focusable line of the plan form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Income,
    Neighborhood(usize),
    Transport(usize),
    Lifestyle(usize),
    Savings,
}

impl Field {
    /// Every field in display order, steps 1 through 5.
    pub(crate) fn all() -> Vec<Field> {
        std::iter::once(Self::Income)
            .chain((0..Neighborhood::all().len()).map(Self::Neighborhood))
            .chain((0..TransportOption::all().len()).map(Self::Transport))
            .chain((0..LifestyleOption::all().len()).map(Self::Lifestyle))
            .chain(std::iter::once(Self::Savings))
            .collect()
    }

    /// 1-based step number the field belongs to.
    pub(crate) fn step(&self) -> usize {
        match self {
            Self::Income => 1,
            Self::Neighborhood(_) => 2,
            Self::Transport(_) => 3,
            Self::Lifestyle(_) => 4,
            Self::Savings => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Small,
    Big,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Plan
    pub(crate) form: BudgetForm,
    pub(crate) fields: Vec<Field>,
    pub(crate) cursor: usize,
    pub(crate) journey: Journey,

    // Breakdown, cleared whenever the form changes
    pub(crate) breakdown: Option<Breakdown>,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Plan,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            form: BudgetForm::default(),
            fields: Field::all(),
            cursor: 0,
            journey: Journey::Sprouting,

            breakdown: None,
        }
    }

    pub(crate) fn current_field(&self) -> Field {
        self.fields.get(self.cursor).copied().unwrap_or(Field::Income)
    }

    pub(crate) fn move_down(&mut self) {
        if self.cursor + 1 < self.fields.len() {
            self.cursor += 1;
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn goto_top(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn goto_bottom(&mut self) {
        self.cursor = self.fields.len().saturating_sub(1);
    }

    /// Jump to the first field of the next (or previous) step.
    pub(crate) fn jump_step(&mut self, forward: bool) {
        let step = self.current_field().step();
        let target = if forward {
            self.fields.iter().position(|f| f.step() > step)
        } else {
            let prev = step.saturating_sub(1);
            self.fields.iter().position(|f| f.step() == prev)
        };
        if let Some(index) = target {
            self.cursor = index;
        }
    }

    /// Apply an edit to the form; a change invalidates any shown breakdown.
    pub(crate) fn edit(&mut self, change: impl FnOnce(&mut BudgetForm) -> bool) -> bool {
        let changed = change(&mut self.form);
        if changed && self.breakdown.take().is_some() {
            tracing::debug!("form changed, breakdown cleared");
        }
        changed
    }

    /// Slide the focused slider. List fields ignore it.
    pub(crate) fn adjust(&mut self, step: Step, direction: i64) {
        let field = self.current_field();
        let changed = match field {
            Field::Income => {
                let size = match step {
                    Step::Small => INCOME_STEP,
                    Step::Big => INCOME_BIG_STEP,
                };
                self.edit(|form| form.adjust_income(size * direction))
            }
            Field::Savings => {
                let size = match step {
                    Step::Small => SAVINGS_STEP,
                    Step::Big => SAVINGS_BIG_STEP,
                };
                self.edit(|form| form.adjust_savings(size * direction))
            }
            _ => {
                self.set_status("Space selects; h/l only move sliders");
                return;
            }
        };
        if !changed {
            self.set_status("Already at the limit");
        } else {
            self.status_message.clear();
        }
    }

    /// Space/Enter on the focused field: pick a neighborhood or toggle an option.
    pub(crate) fn activate(&mut self) {
        match self.current_field() {
            Field::Neighborhood(i) => {
                self.edit(|form| form.select_neighborhood(i));
                self.set_status(format!("Neighborhood: {}", self.form.neighborhood()));
            }
            Field::Transport(i) => {
                self.edit(|form| form.toggle_transport(i));
            }
            Field::Lifestyle(i) => {
                self.edit(|form| form.toggle_lifestyle(i));
            }
            Field::Income | Field::Savings => {
                self.set_status("Use h/l to slide, c to calculate");
            }
        }
    }

    pub(crate) fn calculate(&mut self) {
        let breakdown = Breakdown::new(self.form.to_input());
        let outlook = breakdown.outlook();
        tracing::info!(
            income = breakdown.input.monthly_income,
            neighborhood = %breakdown.input.neighborhood,
            rides = breakdown.input.transport.len(),
            treats = breakdown.input.lifestyle.len(),
            savings_percent = breakdown.input.savings_percent,
            remaining = %breakdown.result.remaining,
            %outlook,
            "calculated budget"
        );
        self.breakdown = Some(breakdown);
        self.screen = Screen::Breakdown;
        self.set_status(format!("Budget calculated: {outlook}"));
    }

    pub(crate) fn reset(&mut self) {
        self.edit(BudgetForm::reset);
        self.cursor = 0;
        self.screen = Screen::Plan;
        self.set_status("Back to the default plan");
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
