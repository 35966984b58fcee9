// src/services/csv_import/parser.rs

use crate::{common::error::AppError, models::import::ImportRow};

/// Colunas obrigatórias, na ordem em que são reportadas quando faltam.
pub const REQUIRED_HEADERS: [&str; 4] = ["nombre", "telefono", "proceso_ventas", "etapa"];

/// Quebra o texto em linhas (CRLF ou LF), valida o cabeçalho e devolve as
/// linhas de dados não vazias, em ordem.
///
/// Erros fatais (abortam o lote inteiro):
/// - texto vazio → `ImportFileEmpty`
/// - nenhuma linha de dados → `ImportNoData`
/// - cabeçalho sem alguma coluna obrigatória → `ImportMissingHeaders`
pub fn parse_rows(text: &str) -> Result<Vec<ImportRow>, AppError> {
    // Remove o BOM UTF-8 se existir
    let text = text.trim_start_matches('\u{FEFF}');
    if text.trim().is_empty() {
        return Err(AppError::ImportFileEmpty);
    }

    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    let data_lines: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, *line))
        .collect();

    if data_lines.is_empty() {
        return Err(AppError::ImportNoData);
    }

    let headers: Vec<String> = split_fields(lines[0])
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();

    let missing: Vec<String> = REQUIRED_HEADERS
        .into_iter()
        .filter(|required| !headers.iter().any(|h| h == required))
        .map(|required| required.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::ImportMissingHeaders(missing));
    }

    // Cabeçalho duplicado: vale a primeira ocorrência
    let column = |name: &str| headers.iter().position(|h| h == name);
    let (nombre, telefono, proceso, etapa) = (
        column("nombre"),
        column("telefono"),
        column("proceso_ventas"),
        column("etapa"),
    );

    let rows = data_lines
        .into_iter()
        .map(|(line_number, line)| {
            let fields = split_fields(line);
            let field = |idx: Option<usize>| {
                idx.and_then(|i| fields.get(i)).cloned().unwrap_or_default()
            };

            ImportRow {
                line_number,
                raw: line.to_string(),
                nombre: field(nombre),
                telefono: field(telefono),
                proceso_ventas: field(proceso),
                etapa: field(etapa),
            }
        })
        .collect();

    Ok(rows)
}

/// Separa uma linha em campos já aparados. Aceita campos entre aspas com
/// vírgulas dentro; se a linha estiver malformada, cai para o split simples.
fn split_fields(line: &str) -> Vec<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        _ => line.split(',').map(|f| f.trim().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "nombre,telefono,proceso_ventas,etapa";

    #[test]
    fn maps_fields_by_header_position_case_insensitively() {
        let text = "ETAPA , Nombre,telefono,proceso_ventas,extra\nCalificación,Acme Deal,555-9999,Proceso SMB,ignored\n";
        let rows = parse_rows(text).unwrap();

        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.nombre, "Acme Deal");
        assert_eq!(row.telefono, "555-9999");
        assert_eq!(row.proceso_ventas, "Proceso SMB");
        assert_eq!(row.etapa, "Calificación");
        assert_eq!(row.line_number, 2);
    }

    #[test]
    fn handles_crlf_bom_and_blank_lines() {
        let text = format!("\u{FEFF}{HEADER}\r\n\r\nA,1,P,S\r\n   \r\nB,2,P,S");
        let rows = parse_rows(&text).unwrap();

        let names: Vec<_> = rows.iter().map(|r| r.nombre.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(rows[0].raw, "A,1,P,S");
        assert_eq!(rows[1].line_number, 5);
    }

    #[test]
    fn short_rows_read_missing_columns_as_empty() {
        let rows = parse_rows(&format!("{HEADER}\nSolo Nombre")).unwrap();
        assert_eq!(rows[0].nombre, "Solo Nombre");
        assert_eq!(rows[0].etapa, "");
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let rows = parse_rows(&format!("{HEADER}\n\"Deal, Inc\",555,P,S")).unwrap();
        assert_eq!(rows[0].nombre, "Deal, Inc");
        assert_eq!(rows[0].raw, "\"Deal, Inc\",555,P,S");
    }

    #[test]
    fn empty_text_is_unreadable() {
        assert!(matches!(parse_rows(""), Err(AppError::ImportFileEmpty)));
        assert!(matches!(parse_rows("\u{FEFF}"), Err(AppError::ImportFileEmpty)));
    }

    #[test]
    fn header_only_reports_no_data() {
        assert!(matches!(parse_rows(HEADER), Err(AppError::ImportNoData)));
        assert!(matches!(parse_rows(&format!("{HEADER}\n\n")), Err(AppError::ImportNoData)));
    }

    #[test]
    fn missing_etapa_header_is_fatal_and_named() {
        let err = parse_rows("nombre,telefono,proceso_ventas\nA,1,P").unwrap_err();
        match err {
            AppError::ImportMissingHeaders(missing) => assert_eq!(missing, vec!["etapa"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_headers_are_listed_in_canonical_order() {
        let err = parse_rows("etapa,nombre\nS,A").unwrap_err();
        match err {
            AppError::ImportMissingHeaders(missing) => {
                assert_eq!(missing, vec!["telefono", "proceso_ventas"])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
