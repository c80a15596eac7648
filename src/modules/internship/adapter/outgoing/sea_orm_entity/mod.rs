pub mod internship_notes;
pub mod internships;
