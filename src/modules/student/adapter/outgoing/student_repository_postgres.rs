use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::student::application::domain::entities::Student;
use crate::student::application::ports::outgoing::{
    CreateStudentData, StudentRepository, StudentRepositoryError, UpdateStudentData,
};

use super::sea_orm_entity::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};

#[derive(Debug, Clone)]
pub struct StudentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StudentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(super) fn to_domain(model: StudentModel) -> Student {
    Student {
        id: model.id,
        username: model.username,
        lastname: model.lastname,
        email: model.email,
        cin: model.cin,
        study_level: model.study_level,
        faculty: model.faculty,
        cycle: model.cycle,
        speciality: model.speciality,
    }
}

/// Uniqueness and referential integrity live on the schema; this maps the
/// violations back onto the repository vocabulary.
fn map_db_err(e: DbErr) -> StudentRepositoryError {
    let text = e.to_string();
    if text.contains("duplicate key") {
        if text.contains("cin") {
            return StudentRepositoryError::CinTaken;
        }
        if text.contains("email") {
            return StudentRepositoryError::EmailTaken;
        }
    }
    if text.contains("violates foreign key constraint") {
        return StudentRepositoryError::Referenced;
    }
    StudentRepositoryError::DatabaseError(text)
}

#[async_trait]
impl StudentRepository for StudentRepositoryPostgres {
    async fn insert(&self, data: CreateStudentData) -> Result<Student, StudentRepositoryError> {
        let active = StudentActiveModel {
            username: Set(data.username),
            lastname: Set(data.lastname),
            email: Set(data.email),
            cin: Set(data.cin),
            study_level: Set(data.study_level),
            faculty: Set(data.faculty),
            cycle: Set(data.cycle),
            speciality: Set(data.speciality),
            ..Default::default()
        };

        let inserted: StudentModel = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(to_domain(inserted))
    }

    async fn update(
        &self,
        student_id: i32,
        data: UpdateStudentData,
    ) -> Result<Student, StudentRepositoryError> {
        let existing = Students::find_by_id(student_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(StudentRepositoryError::NotFound)?;

        let mut active: StudentActiveModel = existing.into();

        if let Some(username) = data.username {
            active.username = Set(username);
        }
        if let Some(lastname) = data.lastname {
            active.lastname = Set(lastname);
        }
        if let Some(email) = data.email {
            active.email = Set(email);
        }
        if let Some(cin) = data.cin {
            active.cin = Set(cin);
        }
        if let Some(study_level) = data.study_level {
            active.study_level = Set(Some(study_level));
        }
        if let Some(faculty) = data.faculty {
            active.faculty = Set(Some(faculty));
        }
        if let Some(cycle) = data.cycle {
            active.cycle = Set(Some(cycle));
        }
        if let Some(speciality) = data.speciality {
            active.speciality = Set(Some(speciality));
        }

        let updated = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(to_domain(updated))
    }

    async fn delete(&self, student_id: i32) -> Result<(), StudentRepositoryError> {
        let result = Students::delete_by_id(student_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(StudentRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn student_model(id: i32) -> StudentModel {
        StudentModel {
            id,
            username: "Yassine".to_string(),
            lastname: "Gharbi".to_string(),
            email: "yassine@uni.tn".to_string(),
            cin: "09551234".to_string(),
            study_level: Some("L3".to_string()),
            faculty: Some("FST".to_string()),
            cycle: None,
            speciality: None,
            created_at: chrono::Utc::now().fixed_offset(),
        }
    }

    fn create_data() -> CreateStudentData {
        CreateStudentData {
            username: "Yassine".to_string(),
            lastname: "Gharbi".to_string(),
            email: "yassine@uni.tn".to_string(),
            cin: "09551234".to_string(),
            study_level: Some("L3".to_string()),
            faculty: Some("FST".to_string()),
            cycle: None,
            speciality: None,
        }
    }

    #[tokio::test]
    async fn insert_returns_stored_student() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![student_model(3)]])
            .into_connection();

        let repo = StudentRepositoryPostgres::new(Arc::new(db));
        let student = repo.insert(create_data()).await.unwrap();

        assert_eq!(student.id, 3);
        assert_eq!(student.cin, "09551234");
    }

    #[tokio::test]
    async fn duplicate_cin_maps_to_cin_taken() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"students_cin_key\"".into(),
            ))])
            .into_connection();

        let repo = StudentRepositoryPostgres::new(Arc::new(db));
        let result = repo.insert(create_data()).await;

        assert!(matches!(result, Err(StudentRepositoryError::CinTaken)));
    }

    #[tokio::test]
    async fn duplicate_email_maps_to_email_taken() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"students_email_key\"".into(),
            ))])
            .into_connection();

        let repo = StudentRepositoryPostgres::new(Arc::new(db));
        let result = repo.insert(create_data()).await;

        assert!(matches!(result, Err(StudentRepositoryError::EmailTaken)));
    }

    #[tokio::test]
    async fn delete_referenced_student_maps_to_referenced() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Exec(RuntimeErr::Internal(
                "update or delete on table \"students\" violates foreign key constraint \
                 \"fk_internships_student_id\" on table \"internships\""
                    .into(),
            ))])
            .into_connection();

        let repo = StudentRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(3).await;

        assert!(matches!(result, Err(StudentRepositoryError::Referenced)));
    }

    #[tokio::test]
    async fn delete_missing_student_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = StudentRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(404).await;

        assert!(matches!(result, Err(StudentRepositoryError::NotFound)));
    }
}
