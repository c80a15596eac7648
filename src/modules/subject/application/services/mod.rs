mod subject_services;

pub use subject_services::{
    CreateSubjectService, DeleteSubjectService, GetSubjectsService, UpdateSubjectService,
};
