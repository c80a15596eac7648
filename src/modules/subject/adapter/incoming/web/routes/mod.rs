mod subject_routes;

pub use subject_routes::{
    create_subject_handler, delete_subject_handler, get_subjects_handler, update_subject_handler,
};
