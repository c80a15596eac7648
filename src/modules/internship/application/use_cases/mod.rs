pub mod assign_subject;
pub mod create_internship;
pub mod internship_notes;
pub mod list_internships;
pub mod supervisor_listings;
pub mod update_internship;
pub mod update_status;
