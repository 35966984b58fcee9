// src/services/csv_import/report.rs

use crate::{
    common::error::AppError,
    models::import::{CsvDocument, ErrorRow},
};

pub const ERROR_REPORT_FILE_NAME: &str = "reporte_errores_importacion.csv";
pub const TEMPLATE_FILE_NAME: &str = "plantilla_oportunidades.csv";

const ERROR_REPORT_HEADER: &str = "RowData,Reason";
const TEMPLATE_CONTENT: &str = "nombre,telefono,proceso_ventas,etapa\n\
Ejemplo Oportunidad,555-123-4567,Proceso de Ventas Estándar,Calificación\n";

/// Relatório `RowData,Reason`: valores sempre entre aspas, aspas internas
/// duplicadas, linhas separadas por `\n`.
pub fn error_report(rows: &[ErrorRow]) -> Result<CsvDocument, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record([row.row_data.as_str(), row.reason.as_str()])
            .map_err(anyhow::Error::from)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush error report: {}", e.error()))?;
    let body = String::from_utf8(bytes).map_err(anyhow::Error::from)?;

    // O writer termina cada registro com '\n'; o relatório não tem '\n' final.
    let body = body.strip_suffix('\n').unwrap_or(&body);

    Ok(CsvDocument {
        file_name: ERROR_REPORT_FILE_NAME.to_string(),
        content: format!("{ERROR_REPORT_HEADER}\n{body}"),
    })
}

/// Modelo de CSV com os quatro cabeçalhos e uma linha de exemplo.
pub fn template() -> CsvDocument {
    CsvDocument {
        file_name: TEMPLATE_FILE_NAME.to_string(),
        content: TEMPLATE_CONTENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_every_value_and_doubles_embedded_quotes() {
        let rows = vec![
            ErrorRow {
                row_data: ",555,Proceso SMB,Oferta".into(),
                reason: "Missing 'nombre' (Opportunity Name).".into(),
            },
            ErrorRow {
                row_data: "\"Big\" Deal,1,X,Y".into(),
                reason: "Process 'X' not found in configuration.".into(),
            },
        ];

        let report = error_report(&rows).unwrap();

        assert_eq!(report.file_name, "reporte_errores_importacion.csv");
        assert_eq!(
            report.content,
            "RowData,Reason\n\
             \",555,Proceso SMB,Oferta\",\"Missing 'nombre' (Opportunity Name).\"\n\
             \"\"\"Big\"\" Deal,1,X,Y\",\"Process 'X' not found in configuration.\""
        );
    }

    #[test]
    fn template_has_required_headers_and_one_example_row() {
        let doc = template();
        let lines: Vec<_> = doc.content.lines().collect();
        assert_eq!(doc.file_name, "plantilla_oportunidades.csv");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "nombre,telefono,proceso_ventas,etapa");
    }
}
