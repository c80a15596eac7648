mod stats_routes;

pub use stats_routes::{get_internship_distribution_handler, get_kpis_handler};
