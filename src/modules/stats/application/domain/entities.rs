use serde::Serialize;

/// Headline counters for the manager dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiData {
    pub active_internships_count: i64,
    pub supervisors_count: i64,
    pub pending_evaluations_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupervisorWorkload {
    pub supervisor_name: String,
    pub internship_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacultySummary {
    pub faculty_name: String,
    pub total_students: i64,
    pub total_internships: i64,
    pub validated_internships: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionData {
    pub status_distribution: Vec<LabelCount>,
    pub type_distribution: Vec<LabelCount>,
    pub duration_distribution: Vec<LabelCount>,
    pub supervisor_workload: Vec<SupervisorWorkload>,
    pub faculty_summary: Vec<FacultySummary>,
}
