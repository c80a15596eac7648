use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};
use std::sync::Arc;

use crate::stats::application::domain::entities::{
    DistributionData, FacultySummary, KpiData, LabelCount, SupervisorWorkload,
};
use crate::stats::application::ports::outgoing::StatsQuery;

/// Aggregate reads over the whole schema. Plain SQL through the SeaORM
/// statement API; none of these shapes map onto a single entity.
#[derive(Debug, Clone)]
pub struct StatsQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl StatsQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn stmt(&self, sql: &str) -> Statement {
        Statement::from_string(self.db.get_database_backend(), sql)
    }
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct LabelCountRow {
    label: String,
    count: i64,
}

#[derive(Debug, FromQueryResult)]
struct WorkloadRow {
    supervisor_name: String,
    internship_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct FacultyRow {
    faculty_name: String,
    total_students: i64,
    total_internships: i64,
    validated_internships: i64,
}

#[async_trait]
impl StatsQuery for StatsQueryPostgres {
    async fn kpis(&self) -> Result<KpiData, String> {
        let active = CountRow::find_by_statement(self.stmt(
            "SELECT COUNT(*) AS count FROM internships WHERE status = 'InProgress'",
        ))
        .one(&*self.db)
        .await
        .map_err(|e| e.to_string())?
        .map(|r| r.count)
        .unwrap_or(0);

        let supervisors = CountRow::find_by_statement(self.stmt(
            "SELECT COUNT(DISTINCT id) AS count FROM users WHERE role = 'Encadrant'",
        ))
        .one(&*self.db)
        .await
        .map_err(|e| e.to_string())?
        .map(|r| r.count)
        .unwrap_or(0);

        let pending = CountRow::find_by_statement(self.stmt(
            "SELECT COUNT(*) AS count FROM evaluations WHERE validated_by IS NULL",
        ))
        .one(&*self.db)
        .await
        .map_err(|e| e.to_string())?
        .map(|r| r.count)
        .unwrap_or(0);

        Ok(KpiData {
            active_internships_count: active,
            supervisors_count: supervisors,
            pending_evaluations_count: pending,
        })
    }

    async fn distribution(&self) -> Result<DistributionData, String> {
        let status_distribution = LabelCountRow::find_by_statement(self.stmt(
            "SELECT status AS label, COUNT(*) AS count \
             FROM internships GROUP BY status ORDER BY count DESC",
        ))
        .all(&*self.db)
        .await
        .map_err(|e| e.to_string())?;

        let type_distribution = LabelCountRow::find_by_statement(self.stmt(
            "SELECT internship_type AS label, COUNT(*) AS count \
             FROM internships GROUP BY internship_type ORDER BY count DESC",
        ))
        .all(&*self.db)
        .await
        .map_err(|e| e.to_string())?;

        let duration_distribution = LabelCountRow::find_by_statement(self.stmt(
            "SELECT CASE \
                 WHEN (end_date - start_date) <= 30 THEN '1 Month or Less' \
                 WHEN (end_date - start_date) <= 60 THEN '1-2 Months' \
                 WHEN (end_date - start_date) <= 90 THEN '2-3 Months' \
                 WHEN (end_date - start_date) <= 120 THEN '3-4 Months' \
                 ELSE 'Over 4 Months' \
             END AS label, COUNT(*) AS count \
             FROM internships GROUP BY label ORDER BY count DESC",
        ))
        .all(&*self.db)
        .await
        .map_err(|e| e.to_string())?;

        let supervisor_workload = WorkloadRow::find_by_statement(self.stmt(
            "SELECT u.username AS supervisor_name, COUNT(i.id) AS internship_count \
             FROM internships i \
             JOIN users u ON i.supervisor_id = u.id \
             WHERE u.role = 'Encadrant' \
             GROUP BY u.username ORDER BY internship_count DESC",
        ))
        .all(&*self.db)
        .await
        .map_err(|e| e.to_string())?;

        let faculty_summary = FacultyRow::find_by_statement(self.stmt(
            "SELECT s.faculty AS faculty_name, \
                 COUNT(DISTINCT s.id) AS total_students, \
                 COUNT(i.id) AS total_internships, \
                 COUNT(CASE WHEN i.status = 'Validated' THEN i.id END) AS validated_internships \
             FROM students s \
             LEFT JOIN internships i ON s.id = i.student_id \
             WHERE s.faculty IS NOT NULL AND s.faculty != '' \
             GROUP BY s.faculty ORDER BY total_internships DESC",
        ))
        .all(&*self.db)
        .await
        .map_err(|e| e.to_string())?;

        Ok(DistributionData {
            status_distribution: status_distribution
                .into_iter()
                .map(|r| LabelCount {
                    label: r.label,
                    count: r.count,
                })
                .collect(),
            type_distribution: type_distribution
                .into_iter()
                .map(|r| LabelCount {
                    label: r.label,
                    count: r.count,
                })
                .collect(),
            duration_distribution: duration_distribution
                .into_iter()
                .map(|r| LabelCount {
                    label: r.label,
                    count: r.count,
                })
                .collect(),
            supervisor_workload: supervisor_workload
                .into_iter()
                .map(|r| SupervisorWorkload {
                    supervisor_name: r.supervisor_name,
                    internship_count: r.internship_count,
                })
                .collect(),
            faculty_summary: faculty_summary
                .into_iter()
                .map(|r| FacultySummary {
                    faculty_name: r.faculty_name,
                    total_students: r.total_students,
                    total_internships: r.total_internships,
                    validated_internships: r.validated_internships,
                })
                .collect(),
        })
    }
}
