mod assign_subject;
mod create_internship;
mod internship_notes;
mod list_internships;
mod supervisor_listings;
mod update_internship;
mod update_internship_status;

pub use assign_subject::assign_subject_handler;
pub use create_internship::create_internship_handler;
pub use internship_notes::{add_internship_note_handler, get_internship_notes_handler};
pub use list_internships::list_internships_handler;
pub use supervisor_listings::{
    list_finished_internships_handler, list_my_internships_handler,
    list_proposed_internships_handler,
};
pub use update_internship::update_internship_handler;
pub use update_internship_status::update_internship_status_handler;
