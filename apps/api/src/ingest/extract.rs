//! In-memory text extraction for uploaded resume files.
//!
//! PDF via pdf-extract, DOCX via docx-rs. Legacy .doc is not supported.

use crate::errors::AppError;

/// Accepted upload formats, decided by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Docx,
}

impl UploadKind {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

pub fn extract_text(kind: UploadKind, data: &[u8]) -> Result<String, AppError> {
    match kind {
        UploadKind::Pdf => extract_pdf(data),
        UploadKind::Docx => extract_docx(data),
    }
}

fn extract_pdf(data: &[u8]) -> Result<String, AppError> {
    pdf_extract::extract_text_from_mem(data)
        .map_err(|e| AppError::FileParse(format!("Error parsing PDF: {e}")))
}

/// Walks paragraph -> run -> text, one line per paragraph.
fn extract_docx(data: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(data)
        .map_err(|e| AppError::FileParse(format!("Error parsing DOCX: {e}")))?;

    let mut text = String::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            for paragraph_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            text.push('\n');
        }
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_kind_from_filename() {
        assert_eq!(UploadKind::from_filename("resume.pdf"), Some(UploadKind::Pdf));
        assert_eq!(UploadKind::from_filename("Resume.PDF"), Some(UploadKind::Pdf));
        assert_eq!(UploadKind::from_filename("cv.docx"), Some(UploadKind::Docx));
        assert_eq!(UploadKind::from_filename("cv.doc"), None);
        assert_eq!(UploadKind::from_filename("notes.txt"), None);
        assert_eq!(UploadKind::from_filename("no-extension"), None);
    }

    #[test]
    fn test_content_types_match_extensions() {
        assert_eq!(UploadKind::Pdf.extension(), "pdf");
        assert_eq!(UploadKind::Docx.extension(), "docx");
        assert!(UploadKind::Docx.content_type().contains("wordprocessingml"));
    }

    #[test]
    fn test_garbage_bytes_fail_cleanly() {
        assert!(extract_text(UploadKind::Pdf, b"not a pdf").is_err());
        assert!(extract_text(UploadKind::Docx, b"not a docx").is_err());
    }
}
