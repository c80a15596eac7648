use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionError, TransactionTrait,
};
use std::sync::Arc;

use crate::evaluation::application::ports::outgoing::{
    EvaluationRepository, EvaluationRepositoryError, SubmitAction, SubmitOutcome,
};
use crate::internship::adapter::outgoing::sea_orm_entity::internships;
use crate::internship::application::domain::status::InternshipStatus;

use super::sea_orm_entity::evaluations::{
    ActiveModel as EvaluationActiveModel, Column, Entity as Evaluations,
};

#[derive(Debug, Clone)]
pub struct EvaluationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EvaluationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_txn_err(e: TransactionError<DbErr>) -> EvaluationRepositoryError {
    let inner = match e {
        TransactionError::Connection(e) => e,
        TransactionError::Transaction(e) => e,
    };
    match inner {
        DbErr::RecordNotFound(_) => EvaluationRepositoryError::NotFound,
        other => EvaluationRepositoryError::DatabaseError(other.to_string()),
    }
}

async fn set_internship_status(
    txn: &DatabaseTransaction,
    internship_id: i32,
    status: InternshipStatus,
) -> Result<(), DbErr> {
    let result = internships::Entity::update_many()
        .col_expr(internships::Column::Status, status.as_str().into())
        .col_expr(
            internships::Column::UpdatedAt,
            chrono::Utc::now().fixed_offset().into(),
        )
        .filter(internships::Column::Id.eq(internship_id))
        .exec(txn)
        .await?;

    if result.rows_affected == 0 {
        return Err(DbErr::RecordNotFound(format!(
            "internship {internship_id}"
        )));
    }
    Ok(())
}

#[async_trait]
impl EvaluationRepository for EvaluationRepositoryPostgres {
    async fn submit(
        &self,
        internship_id: i32,
        supervisor_id: i32,
        action: SubmitAction,
    ) -> Result<SubmitOutcome, EvaluationRepositoryError> {
        // Evaluation write and status write commit or roll back together;
        // a failure after the upsert leaves no half-applied evaluation.
        self.db
            .transaction::<_, SubmitOutcome, DbErr>(move |txn| {
                Box::pin(async move {
                    let existing = Evaluations::find()
                        .filter(Column::InternshipId.eq(internship_id))
                        .filter(Column::SupervisorId.eq(supervisor_id))
                        .one(txn)
                        .await?;

                    let today = chrono::Utc::now().date_naive();

                    let (evaluation_id, new_status) = match action {
                        SubmitAction::Validate { ratings, comments } => {
                            let evaluation_id = match existing {
                                Some(row) => {
                                    let id = row.id;
                                    let mut active: EvaluationActiveModel = row.into();
                                    active.evaluated_on = Set(today);
                                    active.missed_days = Set(ratings.missed_days);
                                    active.comments = Set(comments);
                                    active.discipline =
                                        Set(Some(ratings.discipline.as_str().to_string()));
                                    active.interest =
                                        Set(Some(ratings.interest.as_str().to_string()));
                                    active.presence =
                                        Set(Some(ratings.presence.as_str().to_string()));
                                    active.update(txn).await?;
                                    id
                                }
                                None => {
                                    let active = EvaluationActiveModel {
                                        internship_id: Set(internship_id),
                                        supervisor_id: Set(supervisor_id),
                                        evaluated_on: Set(today),
                                        missed_days: Set(ratings.missed_days),
                                        comments: Set(comments),
                                        discipline: Set(Some(
                                            ratings.discipline.as_str().to_string(),
                                        )),
                                        interest: Set(Some(
                                            ratings.interest.as_str().to_string(),
                                        )),
                                        presence: Set(Some(
                                            ratings.presence.as_str().to_string(),
                                        )),
                                        ..Default::default()
                                    };
                                    active.insert(txn).await?.id
                                }
                            };
                            (Some(evaluation_id), InternshipStatus::Finished)
                        }
                        SubmitAction::Unvalidate => {
                            let evaluation_id = match existing {
                                Some(row) => {
                                    let id = row.id;
                                    let mut active: EvaluationActiveModel = row.into();
                                    active.evaluated_on = Set(today);
                                    active.missed_days = Set(None);
                                    active.comments = Set(None);
                                    active.discipline = Set(None);
                                    active.interest = Set(None);
                                    active.presence = Set(None);
                                    active.update(txn).await?;
                                    Some(id)
                                }
                                None => None,
                            };
                            (evaluation_id, InternshipStatus::Refused)
                        }
                    };

                    set_internship_status(txn, internship_id, new_status).await?;

                    Ok(SubmitOutcome {
                        evaluation_id,
                        new_status,
                    })
                })
            })
            .await
            .map_err(map_txn_err)
    }

    async fn counter_validate(
        &self,
        evaluation_id: i32,
        chef_id: i32,
        approve: bool,
    ) -> Result<InternshipStatus, EvaluationRepositoryError> {
        self.db
            .transaction::<_, InternshipStatus, DbErr>(move |txn| {
                Box::pin(async move {
                    let row = Evaluations::find_by_id(evaluation_id)
                        .one(txn)
                        .await?
                        .ok_or_else(|| {
                            DbErr::RecordNotFound(format!("evaluation {evaluation_id}"))
                        })?;

                    let internship_id = row.internship_id;
                    let mut active: EvaluationActiveModel = row.into();

                    let new_status = if approve {
                        active.validated_by = Set(Some(chef_id));
                        active.validated_at = Set(Some(chrono::Utc::now().fixed_offset()));
                        InternshipStatus::Validated
                    } else {
                        active.validated_by = Set(None);
                        active.validated_at = Set(None);
                        InternshipStatus::Rejected
                    };

                    active.update(txn).await?;

                    set_internship_status(txn, internship_id, new_status).await?;

                    Ok(new_status)
                })
            })
            .await
            .map_err(map_txn_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::adapter::outgoing::sea_orm_entity::evaluations::Model as EvaluationModel;
    use crate::evaluation::application::domain::entities::EvaluationRatings;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn evaluation_model(id: i32) -> EvaluationModel {
        EvaluationModel {
            id,
            internship_id: 5,
            supervisor_id: 2,
            evaluated_on: chrono::Utc::now().date_naive(),
            missed_days: None,
            comments: None,
            discipline: Some("Average".to_string()),
            interest: Some("Average".to_string()),
            presence: Some("Excellent".to_string()),
            validated_by: None,
            validated_at: None,
        }
    }

    fn ratings() -> EvaluationRatings {
        EvaluationRatings::new(
            Some("Excellent"),
            Some("Excellent"),
            Some("Poor"),
            Some(2),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn resubmission_updates_the_existing_row() {
        let updated = EvaluationModel {
            missed_days: Some(2),
            discipline: Some("Excellent".to_string()),
            interest: Some("Excellent".to_string()),
            presence: Some("Poor".to_string()),
            ..evaluation_model(12)
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // find existing evaluation
            .append_query_results(vec![vec![evaluation_model(12)]])
            // update evaluation (exec + returning row)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![updated]])
            // status update
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = EvaluationRepositoryPostgres::new(Arc::new(db));
        let outcome = repo
            .submit(
                5,
                2,
                SubmitAction::Validate {
                    ratings: ratings(),
                    comments: None,
                },
            )
            .await
            .unwrap();

        // Same id as the pre-existing row: update, not duplicate.
        assert_eq!(outcome.evaluation_id, Some(12));
        assert_eq!(outcome.new_status, InternshipStatus::Finished);
    }

    #[tokio::test]
    async fn first_submission_inserts_a_row() {
        let inserted = EvaluationModel {
            missed_days: Some(2),
            ..evaluation_model(13)
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // find: none
            .append_query_results(vec![Vec::<EvaluationModel>::new()])
            // insert evaluation
            .append_query_results(vec![vec![inserted]])
            // status update
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = EvaluationRepositoryPostgres::new(Arc::new(db));
        let outcome = repo
            .submit(
                5,
                2,
                SubmitAction::Validate {
                    ratings: ratings(),
                    comments: Some("ok".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(outcome.evaluation_id, Some(13));
    }

    #[tokio::test]
    async fn failed_status_update_rolls_the_transaction_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // find existing evaluation
            .append_query_results(vec![vec![evaluation_model(12)]])
            // update evaluation (UPDATE ... RETURNING -> query channel)
            .append_query_results(vec![vec![evaluation_model(12)]])
            // the status write blows up -> whole transaction must fail
            .append_exec_errors(vec![DbErr::Exec(RuntimeErr::Internal(
                "constraint violation".into(),
            ))])
            .into_connection();

        let repo = EvaluationRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .submit(
                5,
                2,
                SubmitAction::Validate {
                    ratings: ratings(),
                    comments: None,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(EvaluationRepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn counter_validate_stamps_and_validates() {
        let stamped = EvaluationModel {
            validated_by: Some(7),
            ..evaluation_model(12)
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // find by id
            .append_query_results(vec![vec![evaluation_model(12)]])
            // update evaluation
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![stamped]])
            // status update
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = EvaluationRepositoryPostgres::new(Arc::new(db));
        let status = repo.counter_validate(12, 7, true).await.unwrap();

        assert_eq!(status, InternshipStatus::Validated);
    }

    #[tokio::test]
    async fn counter_validate_missing_evaluation_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<EvaluationModel>::new()])
            .into_connection();

        let repo = EvaluationRepositoryPostgres::new(Arc::new(db));
        let result = repo.counter_validate(404, 7, true).await;

        assert!(matches!(result, Err(EvaluationRepositoryError::NotFound)));
    }
}
