mod attestation_routes;

pub use attestation_routes::{
    generate_attestation_handler, get_attestation_data_handler,
    list_validated_internships_handler,
};
