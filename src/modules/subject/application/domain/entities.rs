use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Attached topic sheet, uploaded separately by the manager.
    pub pdf_url: Option<String>,
}
