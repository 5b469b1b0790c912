use super::find_by_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportOption {
    pub name: &'static str,
    pub monthly_cost: i64,
    pub description: &'static str,
}

pub static TRANSPORT_OPTIONS: [TransportOption; 4] = [
    TransportOption {
        name: "Matatus",
        monthly_cost: 8_000,
        description: "Colorful & adventurous!",
    },
    TransportOption {
        name: "Uber/Bolt",
        monthly_cost: 20_000,
        description: "Comfy but pricey rides",
    },
    TransportOption {
        name: "Personal Car",
        monthly_cost: 15_000,
        description: "Freedom + fuel costs",
    },
    TransportOption {
        name: "Boda Bodas",
        monthly_cost: 10_000,
        description: "Fast but hold tight!",
    },
];

impl TransportOption {
    pub fn all() -> &'static [TransportOption] {
        &TRANSPORT_OPTIONS
    }

    pub fn find_by_name(name: &str) -> Option<&'static TransportOption> {
        find_by_name(&TRANSPORT_OPTIONS, name, |t| t.name)
    }
}

impl std::fmt::Display for TransportOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
