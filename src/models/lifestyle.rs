use super::find_by_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifestyleOption {
    pub name: &'static str,
    pub monthly_cost: i64,
}

pub static LIFESTYLE_OPTIONS: [LifestyleOption; 5] = [
    LifestyleOption {
        name: "Eating Out",
        monthly_cost: 15_000,
    },
    LifestyleOption {
        name: "Groceries",
        monthly_cost: 12_000,
    },
    LifestyleOption {
        name: "Entertainment",
        monthly_cost: 8_000,
    },
    LifestyleOption {
        name: "Self-Care",
        monthly_cost: 5_000,
    },
    LifestyleOption {
        name: "Gym",
        monthly_cost: 4_000,
    },
];

impl LifestyleOption {
    pub fn all() -> &'static [LifestyleOption] {
        &LIFESTYLE_OPTIONS
    }

    pub fn find_by_name(name: &str) -> Option<&'static LifestyleOption> {
        find_by_name(&LIFESTYLE_OPTIONS, name, |l| l.name)
    }
}

impl std::fmt::Display for LifestyleOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
