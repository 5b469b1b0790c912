use super::find_by_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighborhood {
    pub name: &'static str,
    /// Monthly rent in whole shillings.
    pub monthly_rent: i64,
    pub vibe: &'static str,
}

pub static NEIGHBORHOODS: [Neighborhood; 4] = [
    Neighborhood {
        name: "Kilimani",
        monthly_rent: 65_000,
        vibe: "Trendy urban lifestyle",
    },
    Neighborhood {
        name: "Westlands",
        monthly_rent: 75_000,
        vibe: "Upscale nightlife hub",
    },
    Neighborhood {
        name: "Kileleshwa",
        monthly_rent: 60_000,
        vibe: "Quiet leafy streets",
    },
    Neighborhood {
        name: "South B",
        monthly_rent: 45_000,
        vibe: "Affordable and central",
    },
];

impl Neighborhood {
    pub fn all() -> &'static [Neighborhood] {
        &NEIGHBORHOODS
    }

    /// Case-insensitive lookup; a unique prefix is enough ("west" → Westlands).
    pub fn find_by_name(name: &str) -> Option<&'static Neighborhood> {
        find_by_name(&NEIGHBORHOODS, name, |n| n.name)
    }

    pub fn cheapest() -> &'static Neighborhood {
        NEIGHBORHOODS
            .iter()
            .min_by_key(|n| n.monthly_rent)
            .unwrap_or(&NEIGHBORHOODS[0])
    }
}

impl std::fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
