pub mod generate_attestation;
pub mod get_attestation_data;
pub mod list_validated_internships;
