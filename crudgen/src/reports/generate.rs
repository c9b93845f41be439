//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from scaffold generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Project (module) name as entered.
    pub project: String,

    /// Entity name as entered.
    pub entity: String,

    /// Number of fields on the entity.
    pub field_count: usize,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of scaffold generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Written files, in emission order.
    pub files: Vec<PathBuf>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.newline();
        out.key_value("Project", &self.project);
        out.key_value(
            "Entity",
            &format!("{} ({} fields)", self.entity, self.field_count),
        );
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for path in &written.files {
            let shown = path.strip_prefix(&written.output_dir).unwrap_or(path);
            out.added_item(&shown.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<String>,
    }

    impl Output for Recorder {
        fn section(&mut self, name: &str) {
            self.lines.push(format!("[{name}]"));
        }

        fn key_value(&mut self, key: &str, value: &str) {
            self.lines.push(format!("{key}={value}"));
        }

        fn added_item(&mut self, text: &str) {
            self.lines.push(format!("+{text}"));
        }

        fn divider(&mut self, label: &str) {
            self.lines.push(format!("--{label}"));
        }

        fn preformatted(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn newline(&mut self) {}
    }

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            project: "shop".to_string(),
            entity: "Order".to_string(),
            field_count: 2,
            result,
        }
    }

    #[test]
    fn test_written_lists_files_relative_to_output() {
        let base = PathBuf::from("outputs");
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: base.clone(),
            files: vec![base.join(".env"), base.join("app").join("main.go")],
        }));

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "Project=shop",
                "Entity=Order (2 fields)",
                "[Generated in outputs]",
                "+.env",
                "+app/main.go",
            ]
        );
    }

    #[test]
    fn test_preview_prints_each_file_then_summary() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: ".env".to_string(),
                content: "MONGO_URI=x".to_string(),
            }],
        }));

        let mut out = Recorder::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "--.env",
                "MONGO_URI=x",
                "--Summary",
                "1 files would be generated",
            ]
        );
    }
}
