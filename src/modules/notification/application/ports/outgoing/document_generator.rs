use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    /// Where the artifact landed on disk.
    pub file_path: String,
    /// The URL handed to the student.
    pub file_url: String,
}

/// Renders the acceptance letter from the fixed template and stores it.
/// Rasterizing to PDF is an adapter concern behind this port.
#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    async fn generate_acceptance_letter(
        &self,
        student_name: &str,
        subject_title: &str,
        internship_id: i32,
    ) -> Result<GeneratedDocument, String>;
}
