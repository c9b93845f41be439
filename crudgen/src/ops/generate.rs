//! Generate operation - render a scaffold and write it out.

use std::path::Path;

use crudgen_codegen::{EntityRequest, Generator, Result};

use crate::reports::{
    GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output base directory.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    generator: &Generator,
    request: &EntityRequest,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let result = if opts.dry_run {
        let files = generator
            .preview(request)?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.relative_path().display().to_string(),
                content: f.content().to_string(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let report = generator.generate(request, opts.output_dir)?;
        GenerationResult::Written(WrittenResult {
            output_dir: report.base,
            files: report.written,
        })
    };

    Ok(GenerateReport {
        project: request.project().to_string(),
        entity: request.entity().to_string(),
        field_count: request.fields().len(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use tempfile::TempDir;

    use super::*;
    use crate::input::{LinePrompter, collect_request};

    fn scripted(script: &str) -> EntityRequest {
        let mut sink = Vec::new();
        collect_request(&mut LinePrompter::new(Cursor::new(script), &mut sink)).unwrap()
    }

    #[test]
    fn test_end_to_end_order_scaffold() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("outputs");
        let request = scripted("shop\nOrder\nTotal\nfloat64\nStatus\nstring\n\n");

        let report = generate(
            &Generator::new().unwrap(),
            &request,
            GenerateOptions {
                output_dir: &base,
                dry_run: false,
            },
        )
        .unwrap();

        assert_eq!(report.entity, "Order");
        assert_eq!(report.field_count, 2);

        let read = |rel: &str| fs::read_to_string(base.join(rel)).unwrap();

        let model = read("app/models/order.go");
        assert!(model.contains("type Order struct"));
        assert!(model.contains("Total float64 `bson:\"total\" json:\"total\"`"));
        assert!(model.contains("Status string `bson:\"status\" json:\"status\"`"));

        let routes = read("app/routes/order.go");
        assert!(routes.contains("api.Group(\"/orders\")"));

        let handler = read("app/handler/order.go");
        for name in [
            "CreateOrder",
            "GetOrders",
            "GetOrder",
            "EditOrder",
            "DeleteOrder",
        ] {
            assert!(handler.contains(&format!("func {name}(")), "missing {name}");
        }

        assert!(read("app/main.go").contains("routes.SetupOrderRoutes(app)"));
        assert!(read("app/responses/order.go").contains("type OrderResponse struct"));
        assert!(read("app/configs/setup.go").contains("func ConnectDB()"));
        assert!(read(".env").starts_with("MONGO_URI="));
    }

    #[test]
    fn test_dry_run_leaves_disk_untouched() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("outputs");
        let request = scripted("shop\nOrder\n\n");

        let report = generate(
            &Generator::new().unwrap(),
            &request,
            GenerateOptions {
                output_dir: &base,
                dry_run: true,
            },
        )
        .unwrap();

        assert!(!base.exists());
        match report.result {
            GenerationResult::Preview(preview) => {
                assert_eq!(preview.files.len(), 7);
                assert_eq!(preview.files[0].path, "app/main.go");
            }
            GenerationResult::Written(_) => panic!("dry run wrote files"),
        }
    }
}
