//! Bundled dataset: 1959 snakebite incidence baselines, venomous species
//! counts and the state to FIPS mapping used by the US states artwork.

use choropleth_core::{Baseline, Fips, ReferenceCount, Region, StateCode};

const BASELINES: [(&str, f64); 47] = [
    ("AL", 4.35),
    ("AZ", 10.84),
    ("AR", 9.50),
    ("CA", 0.09),
    ("CO", 0.36),
    ("CT", 0.00),
    ("DE", 0.00),
    ("FL", 4.70),
    ("GA", 13.44),
    ("ID", 0.44),
    ("IL", 0.07),
    ("IN", 0.04),
    ("IA", 0.00),
    ("KS", 0.56),
    ("KY", 7.87),
    ("LA", 6.66),
    ("MD", 0.11),
    ("MA", 0.00),
    ("MI", 0.06),
    ("MN", 0.00),
    ("MS", 8.40),
    ("MO", 3.07),
    ("MT", 0.36),
    ("NE", 0.46),
    ("NV", 1.13),
    ("NH", 0.00),
    ("NJ", 0.00),
    ("NM", 3.20),
    ("NY", 0.00),
    ("NC", 18.79),
    ("ND", 0.00),
    ("OH", 0.15),
    ("OK", 6.83),
    ("OR", 0.40),
    ("PA", 0.00),
    ("RI", 0.00),
    ("SC", 11.25),
    ("SD", 0.00),
    ("TN", 7.83),
    ("TX", 14.70),
    ("UT", 0.55),
    ("VT", 0.00),
    ("VA", 5.57),
    ("WA", 0.12),
    ("WV", 3.70),
    ("WI", 0.06),
    ("WY", 0.57),
];

const REFERENCES: [(&str, u32); 50] = [
    ("AL", 6),
    ("AK", 0),
    ("AZ", 13),
    ("AR", 7),
    ("CA", 6),
    ("CO", 3),
    ("CT", 0),
    ("DE", 0),
    ("FL", 6),
    ("GA", 7),
    ("HI", 0),
    ("ID", 3),
    ("IL", 2),
    ("IN", 2),
    ("IA", 1),
    ("KS", 5),
    ("KY", 4),
    ("LA", 6),
    ("ME", 0),
    ("MD", 2),
    ("MA", 0),
    ("MI", 0),
    ("MN", 0),
    ("MS", 6),
    ("MO", 5),
    ("MT", 4),
    ("NE", 3),
    ("NV", 5),
    ("NH", 0),
    ("NJ", 1),
    ("NM", 7),
    ("NY", 1),
    ("NC", 6),
    ("ND", 1),
    ("OH", 2),
    ("OK", 7),
    ("OR", 3),
    ("PA", 2),
    ("RI", 0),
    ("SC", 6),
    ("SD", 1),
    ("TN", 5),
    ("TX", 15),
    ("UT", 5),
    ("VT", 0),
    ("VA", 4),
    ("WA", 2),
    ("WV", 3),
    ("WI", 2),
    ("WY", 4),
];

const REGIONS: [(&str, &str); 50] = [
    ("AL", "01"),
    ("AK", "02"),
    ("AZ", "04"),
    ("AR", "05"),
    ("CA", "06"),
    ("CO", "08"),
    ("CT", "09"),
    ("DE", "10"),
    ("FL", "12"),
    ("GA", "13"),
    ("HI", "15"),
    ("ID", "16"),
    ("IL", "17"),
    ("IN", "18"),
    ("IA", "19"),
    ("KS", "20"),
    ("KY", "21"),
    ("LA", "22"),
    ("ME", "23"),
    ("MD", "24"),
    ("MA", "25"),
    ("MI", "26"),
    ("MN", "27"),
    ("MS", "28"),
    ("MO", "29"),
    ("MT", "30"),
    ("NE", "31"),
    ("NV", "32"),
    ("NH", "33"),
    ("NJ", "34"),
    ("NM", "35"),
    ("NY", "36"),
    ("NC", "37"),
    ("ND", "38"),
    ("OH", "39"),
    ("OK", "40"),
    ("OR", "41"),
    ("PA", "42"),
    ("RI", "44"),
    ("SC", "45"),
    ("SD", "46"),
    ("TN", "47"),
    ("TX", "48"),
    ("UT", "49"),
    ("VT", "50"),
    ("VA", "51"),
    ("WA", "53"),
    ("WV", "54"),
    ("WI", "55"),
    ("WY", "56"),
];

pub(crate) fn baselines() -> Vec<Baseline> {
    BASELINES
        .iter()
        .map(|(state, value)| Baseline::new(StateCode::new(*state), *value))
        .collect()
}

pub(crate) fn references() -> Vec<ReferenceCount> {
    REFERENCES
        .iter()
        .map(|(state, count)| ReferenceCount::new(StateCode::new(*state), *count))
        .collect()
}

pub(crate) fn regions() -> Vec<Region> {
    REGIONS
        .iter()
        .map(|(state, fips)| Region::new(StateCode::new(*state), Fips::new(*fips)))
        .collect()
}
