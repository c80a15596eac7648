use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
    TransactionError, TransactionTrait,
};
use std::sync::Arc;

use crate::attestation::application::domain::entities::Attestation;
use crate::attestation::application::ports::outgoing::{
    AttestationRepository, AttestationRepositoryError, GenerateOutcome,
};

use super::sea_orm_entity::{
    ActiveModel as AttestationActiveModel, Column, Entity as Attestations,
    Model as AttestationModel,
};

#[derive(Debug, Clone)]
pub struct AttestationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AttestationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: AttestationModel) -> Attestation {
    Attestation {
        id: model.id,
        internship_id: model.internship_id,
        generated_on: model.generated_on,
        qr_code_data: model.qr_code_data,
    }
}

#[async_trait]
impl AttestationRepository for AttestationRepositoryPostgres {
    async fn generate(
        &self,
        internship_id: i32,
        qr_base_url: &str,
    ) -> Result<GenerateOutcome, AttestationRepositoryError> {
        let qr_base_url = qr_base_url.to_string();

        // The QR payload embeds the generated id, so the insert and the
        // stamp have to travel in the same transaction.
        self.db
            .transaction::<_, GenerateOutcome, DbErr>(move |txn| {
                Box::pin(async move {
                    if let Some(existing) = Attestations::find()
                        .filter(Column::InternshipId.eq(internship_id))
                        .one(txn)
                        .await?
                    {
                        return Ok(GenerateOutcome::AlreadyExists(to_domain(existing)));
                    }

                    let inserted = AttestationActiveModel {
                        internship_id: Set(internship_id),
                        generated_on: Set(chrono::Utc::now().date_naive()),
                        qr_code_data: Set(String::new()),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    let qr_code_data =
                        format!("{}?attestationID={}", qr_base_url, inserted.id);

                    let mut active: AttestationActiveModel = inserted.into();
                    active.qr_code_data = Set(qr_code_data);
                    let stamped = active.update(txn).await?;

                    Ok(GenerateOutcome::Created(to_domain(stamped)))
                })
            })
            .await
            .map_err(|e| {
                let inner = match e {
                    TransactionError::Connection(e) => e,
                    TransactionError::Transaction(e) => e,
                };
                AttestationRepositoryError::DatabaseError(inner.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, qr: &str) -> AttestationModel {
        AttestationModel {
            id,
            internship_id: 5,
            generated_on: chrono::Utc::now().date_naive(),
            qr_code_data: qr.to_string(),
        }
    }

    #[tokio::test]
    async fn existing_attestation_is_returned_untouched() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(
                1,
                "http://localhost/#/attestation_viewer?attestationID=1",
            )]])
            .into_connection();

        let repo = AttestationRepositoryPostgres::new(Arc::new(db));
        let outcome = repo
            .generate(5, "http://localhost/#/attestation_viewer")
            .await
            .unwrap();

        assert!(matches!(outcome, GenerateOutcome::AlreadyExists(a) if a.id == 1));
    }

    #[tokio::test]
    async fn fresh_generation_stamps_qr_with_new_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // existence check: none
            .append_query_results(vec![Vec::<AttestationModel>::new()])
            // insert
            .append_query_results(vec![vec![model(2, "")]])
            // qr update
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![model(
                2,
                "http://localhost/#/attestation_viewer?attestationID=2",
            )]])
            .into_connection();

        let repo = AttestationRepositoryPostgres::new(Arc::new(db));
        let outcome = repo
            .generate(5, "http://localhost/#/attestation_viewer")
            .await
            .unwrap();

        match outcome {
            GenerateOutcome::Created(a) => {
                assert_eq!(a.id, 2);
                assert!(a.qr_code_data.ends_with("attestationID=2"));
            }
            other => panic!("Expected Created, got {:?}", other),
        }
    }
}
