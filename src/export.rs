// src/export.rs

use chrono::{DateTime, Local};
use std::{fs, path::PathBuf};

use crate::chat::{Message, Sender};
use crate::constants::{EXPORT_HTML_FILENAME, EXPORT_TITLE, EXPORT_TXT_FILENAME};
use crate::errors::{DecoraiError, DecoraiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Txt,
    Pdf,
}

impl ExportFormat {
    /// Unknown format strings are not an error; they simply select nothing.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "txt" => Some(ExportFormat::Txt),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }
}

/// Plain-text transcript: title and localized date header, then one
/// paragraph per message.
pub fn render_transcript(messages: &[Message], exported_at: DateTime<Local>) -> String {
    let mut out = format!("{}\nDate: {}\n\n", EXPORT_TITLE, exported_at.format("%c"));

    for message in messages {
        out.push_str(&format!(
            "[{}]: {}\n\n",
            message.sender.label(),
            message.content.trim()
        ));
    }

    out
}

/// Print-styled HTML document reconstructing each message as a block with a
/// role-dependent background. The browser's print dialog does the actual
/// PDF conversion.
pub fn render_print_html(messages: &[Message]) -> String {
    let mut html = String::from("<html><head><title>DecorAI Chat History</title><style>\n");
    html.push_str("body { font-family: sans-serif; margin: 40px; }\n");
    html.push_str("h1 { border-bottom: 1px solid #ccc; padding-bottom: 10px; margin-bottom: 20px; }\n");
    html.push_str(".message-block { margin-bottom: 15px; padding: 10px; border-radius: 5px; }\n");
    html.push_str(".user { background-color: #e0f7fa; text-align: right; }\n");
    html.push_str(".ai { background-color: #f1f8e9; }\n");
    html.push_str(".role { font-weight: bold; margin-bottom: 5px; }\n");
    html.push_str("</style></head><body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", EXPORT_TITLE));

    for message in messages {
        let role_class = match message.sender {
            Sender::User => "user",
            Sender::AI => "ai",
        };
        html.push_str(&format!(
            "<div class=\"message-block {}\"><div class=\"role\">{}:</div><div>{}</div></div>\n",
            role_class,
            message.sender.label(),
            escape_html(message.content.trim())
        ));
    }

    html.push_str("</body></html>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Writes transcripts under the user's download directory, falling back to
/// the working directory.
#[derive(Debug)]
pub struct Exporter {
    out_dir: PathBuf,
}

impl Exporter {
    pub fn new() -> Self {
        Exporter {
            out_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn with_dir(out_dir: PathBuf) -> Self {
        Exporter { out_dir }
    }

    /// Exports the given transcript and returns the written path. The pdf
    /// path writes a print-styled HTML file and hands it to the system
    /// browser so the user can print to PDF from there.
    pub fn export(&self, format: ExportFormat, messages: &[Message]) -> DecoraiResult<PathBuf> {
        match format {
            ExportFormat::Txt => {
                let path = self.out_dir.join(EXPORT_TXT_FILENAME);
                fs::write(&path, render_transcript(messages, Local::now()))?;
                Ok(path)
            }
            ExportFormat::Pdf => {
                let path = self.out_dir.join(EXPORT_HTML_FILENAME);
                fs::write(&path, render_print_html(messages))?;
                open::that(&path).map_err(|e| {
                    DecoraiError::export_error(format!("failed to open print view: {}", e))
                })?;
                Ok(path)
            }
        }
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Exporter::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_messages() -> Vec<Message> {
        vec![Message::user("Hello"), Message::ai("Hi there")]
    }

    #[test]
    fn test_unknown_format_parses_to_none() {
        assert_eq!(ExportFormat::parse("txt"), Some(ExportFormat::Txt));
        assert_eq!(ExportFormat::parse("pdf"), Some(ExportFormat::Pdf));
        assert_eq!(ExportFormat::parse("docx"), None);
        assert_eq!(ExportFormat::parse(""), None);
    }

    #[test]
    fn test_transcript_has_header_and_role_lines() {
        let transcript = render_transcript(&sample_messages(), Local::now());

        let mut lines = transcript.lines();
        assert_eq!(lines.next(), Some(EXPORT_TITLE));
        assert!(lines.next().unwrap().starts_with("Date: "));
        assert!(transcript.contains("[You]: Hello"));
        assert!(transcript.contains("[AI]: Hi there"));
    }

    #[test]
    fn test_transcript_trims_message_content() {
        let messages = vec![Message::user("  padded  ")];
        let transcript = render_transcript(&messages, Local::now());
        assert!(transcript.contains("[You]: padded\n"));
    }

    #[test]
    fn test_print_html_carries_role_classes() {
        let html = render_print_html(&sample_messages());
        assert!(html.contains("message-block user"));
        assert!(html.contains("message-block ai"));
        assert!(html.contains("<h1>DecorAI Chat History</h1>"));
    }

    #[test]
    fn test_print_html_escapes_content() {
        let messages = vec![Message::user("<b>bold & brash</b>")];
        let html = render_print_html(&messages);
        assert!(html.contains("&lt;b&gt;bold &amp; brash&lt;/b&gt;"));
        assert!(!html.contains("<b>bold"));
    }

    #[test]
    fn test_txt_export_writes_fixed_filename() {
        let dir = tempdir().unwrap();
        let exporter = Exporter::with_dir(dir.path().to_path_buf());

        let path = exporter
            .export(ExportFormat::Txt, &sample_messages())
            .unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_TXT_FILENAME);
        let body = std::fs::read_to_string(path).unwrap();
        assert!(body.contains("[You]: Hello"));
        assert!(body.contains("[AI]: Hi there"));
    }
}
