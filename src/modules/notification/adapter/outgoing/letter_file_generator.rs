use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::notification::application::ports::outgoing::{DocumentGenerator, GeneratedDocument};

/// Renders the fixed acceptance-letter template and stores it under the
/// configured files directory. The artifact is self-contained HTML; a PDF
/// rasterizer can replace this adapter without touching the port.
pub struct LetterFileGenerator {
    output_dir: String,
    public_base_url: String,
}

impl LetterFileGenerator {
    pub fn new(output_dir: String, public_base_url: String) -> Self {
        Self {
            output_dir,
            public_base_url,
        }
    }

    fn render(student_name: &str, subject_title: &str, date_line: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Internship Acceptance Letter</title>
    <style>
        body {{ font-family: DejaVu Sans, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ width: 90%; margin: 20px auto; padding: 30px; border: 1px solid #ddd; }}
        h1 {{ color: #0056b3; text-align: center; border-bottom: 2px solid #0056b3; }}
        .date {{ text-align: right; font-style: italic; color: #555; }}
        .signature {{ margin-top: 60px; text-align: right; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="date">{date_line}</div>
        <h1>Internship Acceptance Letter</h1>
        <p>Dear {student_name},</p>
        <p>We are pleased to inform you that your internship application:</p>
        <p style="font-size: 1.2em; text-align: center;"><strong>"{subject_title}"</strong></p>
        <p>has been officially <strong>accepted</strong>.</p>
        <p>Further details regarding the start date, duration, your supervisor, and other
        arrangements will be communicated to you shortly by the internship office.</p>
        <p>We look forward to welcoming you to our team.</p>
        <p>Sincerely,</p>
        <div class="signature">
            <p><strong>The Director of Internships</strong></p>
        </div>
    </div>
</body>
</html>"#
        )
    }
}

#[async_trait]
impl DocumentGenerator for LetterFileGenerator {
    async fn generate_acceptance_letter(
        &self,
        student_name: &str,
        subject_title: &str,
        internship_id: i32,
    ) -> Result<GeneratedDocument, String> {
        let date_line = Utc::now().format("%B %-d, %Y").to_string();
        let html = Self::render(student_name, subject_title, &date_line);

        // Unique name per generation, never overwriting an earlier letter.
        let filename = format!(
            "Internship_Acceptance_{}_{}.html",
            internship_id,
            Uuid::new_v4().simple()
        );

        let dir = std::path::Path::new(&self.output_dir);
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| format!("Failed to create output directory: {e}"))?;

        let file_path = dir.join(&filename);
        tokio::fs::write(&file_path, html)
            .await
            .map_err(|e| format!("Could not write letter to file: {e}"))?;

        Ok(GeneratedDocument {
            file_path: file_path.to_string_lossy().into_owned(),
            file_url: format!(
                "{}/{}",
                self.public_base_url.trim_end_matches('/'),
                filename
            ),
        })
    }
}
