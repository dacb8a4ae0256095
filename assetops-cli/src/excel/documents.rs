//! Bulk-upload template for documents, with dropdown validation on the
//! entity and document type columns.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use rust_xlsxwriter::{DataValidation, Format, Workbook};

use super::templates::header_format;

pub const DOCUMENTS_TEMPLATE_FILE: &str = "documents_bulk_upload_template.xlsx";

const HEADERS: &[&str] = &["entity_type", "entity_id", "file_name", "file_path", "doc_type"];

const COLUMN_WIDTHS: &[f64] = &[15.0, 12.0, 25.0, 50.0, 15.0];

const ENTITY_TYPES: &[&str] = &[
    "ASSET",
    "COMPONENT",
    "AMC",
    "WARRANTY",
    "CATEGORY",
    "SUBCATEGORY",
    "MAKE",
    "MODEL",
    "OUTLET",
    "VENDOR",
];

const DOC_TYPES: &[&str] = &["PDF", "IMAGE", "RECEIPT", "AGREEMENT"];

/// (entity_type, entity_id, file_name, file_path, doc_type)
const SAMPLE_ROWS: &[(&str, u32, &str, &str, &str)] = &[
    ("ASSET", 1, "invoice_001.pdf", "/uploads/documents/invoice_001.pdf", "PDF"),
    ("ASSET", 2, "receipt_002.jpg", "/uploads/documents/receipt_002.jpg", "IMAGE"),
    ("COMPONENT", 1, "manual_001.pdf", "/uploads/documents/manual_001.pdf", "PDF"),
    ("WARRANTY", 1, "warranty_001.pdf", "/uploads/documents/warranty_001.pdf", "PDF"),
    ("AMC", 1, "amc_agreement_001.pdf", "/uploads/documents/amc_agreement_001.pdf", "AGREEMENT"),
    ("CATEGORY", 1, "category_image_001.jpg", "/uploads/documents/category_image_001.jpg", "IMAGE"),
    (
        "SUBCATEGORY",
        1,
        "subcategory_image_001.jpg",
        "/uploads/documents/subcategory_image_001.jpg",
        "IMAGE",
    ),
    ("MAKE", 1, "make_logo_001.png", "/uploads/documents/make_logo_001.png", "IMAGE"),
    ("MODEL", 1, "model_spec_001.pdf", "/uploads/documents/model_spec_001.pdf", "PDF"),
    ("OUTLET", 1, "outlet_photo_001.jpg", "/uploads/documents/outlet_photo_001.jpg", "IMAGE"),
    ("VENDOR", 1, "vendor_contract_001.pdf", "/uploads/documents/vendor_contract_001.pdf", "PDF"),
];

/// Write the documents bulk-upload template to `path`.
pub fn write_documents_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Documents")?;

    let header = header_format();
    for (col, name) in HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
        worksheet.set_column_width(col as u16, COLUMN_WIDTHS[col])?;
    }

    let id_format = Format::new().set_num_format("0");
    for (row_idx, &(entity_type, entity_id, file_name, file_path, doc_type)) in
        SAMPLE_ROWS.iter().enumerate()
    {
        let row = (row_idx + 1) as u32;
        worksheet.write_string(row, 0, entity_type)?;
        worksheet.write_number_with_format(row, 1, entity_id as f64, &id_format)?;
        worksheet.write_string(row, 2, file_name)?;
        worksheet.write_string(row, 3, file_path)?;
        worksheet.write_string(row, 4, doc_type)?;
    }

    worksheet.set_freeze_panes(1, 0)?;

    // Dropdowns cover rows 2-1000 so pasted data stays validated.
    let entity_validation = DataValidation::new().allow_list_strings(ENTITY_TYPES)?;
    worksheet.add_data_validation(1, 0, 999, 0, &entity_validation)?;

    let doc_validation = DataValidation::new().allow_list_strings(DOC_TYPES)?;
    worksheet.add_data_validation(1, 4, 999, 4, &doc_validation)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save template: {}", path.display()))?;

    Ok(())
}

pub fn run(output: &Path) -> Result<PathBuf> {
    write_documents_template(output)?;

    println!("{} {}", "Created:".green(), output.display());
    println!("   Headers: {}", HEADERS.join(", "));
    println!("   Sample rows: {}", SAMPLE_ROWS.len());
    println!("   entity_type values: {}", ENTITY_TYPES.join(", "));
    println!("   doc_type values: {}", DOC_TYPES.join(", "));

    Ok(output.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};

    #[test]
    fn test_documents_template_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DOCUMENTS_TEMPLATE_FILE);

        write_documents_template(&path).unwrap();

        let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
        let range = workbook.worksheet_range("Documents").unwrap();
        let rows: Vec<Vec<Data>> = range.rows().map(|r| r.to_vec()).collect();

        assert_eq!(rows.len(), 1 + SAMPLE_ROWS.len());
        assert_eq!(rows[0][0], Data::String("entity_type".into()));
        assert_eq!(rows[0][4], Data::String("doc_type".into()));

        assert_eq!(rows[1][0], Data::String("ASSET".into()));
        assert_eq!(rows[1][1], Data::Float(1.0));
        assert_eq!(rows[2][1], Data::Float(2.0));
        assert_eq!(rows[11][0], Data::String("VENDOR".into()));
    }

    #[test]
    fn test_sample_rows_use_known_codes() {
        for &(entity_type, _, _, _, doc_type) in SAMPLE_ROWS {
            assert!(ENTITY_TYPES.contains(&entity_type), "{}", entity_type);
            assert!(DOC_TYPES.contains(&doc_type), "{}", doc_type);
        }
    }
}
