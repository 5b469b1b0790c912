pub(crate) mod breakdown;
pub(crate) mod plan;
