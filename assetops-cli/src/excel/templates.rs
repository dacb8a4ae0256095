//! Bulk-upload templates for the master-data entities.
//!
//! One .xlsx per entity, each with a styled header row and a couple of
//! sample rows showing the expected values.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};

/// One bulk-upload template definition.
pub struct TemplateSpec {
    pub file_name: &'static str,
    pub sheet_name: &'static str,
    /// Column headers. The first column is the required one and is rendered
    /// with a ` *` suffix.
    pub headers: &'static [&'static str],
    pub samples: &'static [&'static [&'static str]],
}

pub const MASTER_TEMPLATES: &[TemplateSpec] = &[
    TemplateSpec {
        file_name: "vendors_template.xlsx",
        sheet_name: "Vendors",
        headers: &["Vendor Name", "Contact Person", "Email", "Mobile", "Address"],
        samples: &[
            &["ABC Suppliers", "John Doe", "john@abc.com", "1234567890", "123 Main St"],
            &["XYZ Corporation", "Jane Smith", "jane@xyz.com", "9876543210", "456 Oak Ave"],
        ],
    },
    TemplateSpec {
        file_name: "outlets_template.xlsx",
        sheet_name: "Outlets",
        headers: &["Outlet Name", "Outlet Address", "Contact Info"],
        samples: &[
            &["Amazon Online", "Online Portal", "support@amazon.in"],
            &["Croma Store", "Khar West Store", "022-11112222"],
            &["Reliance Digital", "Andheri East", "022-44443333"],
        ],
    },
    TemplateSpec {
        file_name: "categories_template.xlsx",
        sheet_name: "Categories",
        headers: &["Category Name", "Description"],
        samples: &[
            &["Electronics", "Electronic devices and gadgets"],
            &["Home Appliances", "Household appliances"],
            &["Smart Home Devices", "IoT and smart home products"],
        ],
    },
    TemplateSpec {
        file_name: "subcategories_template.xlsx",
        sheet_name: "SubCategories",
        headers: &["SubCategory Name", "Category Name", "Description"],
        samples: &[
            &["Smartphones", "Electronics", "Mobile phones"],
            &["Smart TVs", "Electronics", "Television sets"],
            &["Refrigerators", "Home Appliances", "Cooling appliances"],
            &["Washing Machines", "Home Appliances", "Laundry appliances"],
        ],
    },
    TemplateSpec {
        file_name: "makes_template.xlsx",
        sheet_name: "Makes",
        headers: &["Make Name", "SubCategory Name"],
        samples: &[
            &["Samsung", "Smart TVs"],
            &["LG", "Refrigerators"],
            &["Apple", "Smartphones"],
        ],
    },
    TemplateSpec {
        file_name: "models_template.xlsx",
        sheet_name: "Models",
        headers: &["Model Name", "Make Name", "Description"],
        samples: &[
            &["iPhone 15 Pro", "Apple", "Latest iPhone model"],
            &["Samsung QLED 65", "Samsung", "65-inch QLED TV"],
            &["LG InstaView 260L", "LG", "260L refrigerator"],
        ],
    },
    TemplateSpec {
        file_name: "components_template.xlsx",
        sheet_name: "Components",
        headers: &["Component Name", "Description"],
        samples: &[
            &["Battery Pack", "Device rechargeable battery unit"],
            &["Charger", "Device adapter or charging cable"],
            &["Remote Control", "TV or AC remote controller"],
        ],
    },
];

pub(crate) fn header_format() -> Format {
    Format::new()
        .set_background_color(Color::RGB(0x366092))
        .set_bold()
        .set_font_color(Color::White)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
}

/// Write a single template into `out_dir`, returning the path of the file.
pub fn write_template(spec: &TemplateSpec, out_dir: &Path) -> Result<PathBuf> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(spec.sheet_name)?;

    let header = header_format();
    for (col, name) in spec.headers.iter().enumerate() {
        let label = if col == 0 {
            format!("{} *", name)
        } else {
            (*name).to_string()
        };
        worksheet.write_string_with_format(0, col as u16, &label, &header)?;
        worksheet.set_column_width(col as u16, 25)?;
    }

    for (row_idx, row) in spec.samples.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet.write_string((row_idx + 1) as u32, col as u16, *value)?;
        }
    }

    let path = out_dir.join(spec.file_name);
    workbook
        .save(&path)
        .with_context(|| format!("Failed to save template: {}", path.display()))?;

    Ok(path)
}

/// Generate every master-data template into `out_dir`.
pub fn generate_all(out_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    println!("Generating bulk-upload templates in {}", out_dir.display());
    for spec in MASTER_TEMPLATES {
        let path = write_template(spec, out_dir)?;
        println!(
            "  {} {} ({} sample rows)",
            "Created:".green(),
            path.display(),
            spec.samples.len()
        );
    }
    println!("{} {} templates generated", "Done:".green(), MASTER_TEMPLATES.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{open_workbook, Data, Reader, Xlsx};

    fn read_rows(path: &Path, sheet: &str) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range(sheet).unwrap();
        range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_template_headers_and_samples_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        for spec in MASTER_TEMPLATES {
            let path = write_template(spec, dir.path()).unwrap();
            let rows = read_rows(&path, spec.sheet_name);

            assert_eq!(rows.len(), 1 + spec.samples.len(), "{}", spec.file_name);
            assert_eq!(rows[0][0], format!("{} *", spec.headers[0]), "{}", spec.file_name);
            assert_eq!(rows[0][1..], spec.headers[1..], "{}", spec.file_name);
            for (row, sample) in rows[1..].iter().zip(spec.samples) {
                assert_eq!(row, sample, "{}", spec.file_name);
            }
        }
    }

    #[test]
    fn test_generate_all_writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        generate_all(dir.path()).unwrap();

        for spec in MASTER_TEMPLATES {
            assert!(dir.path().join(spec.file_name).exists(), "{}", spec.file_name);
        }
    }

    #[test]
    fn test_sample_rows_match_header_width() {
        for spec in MASTER_TEMPLATES {
            for row in spec.samples {
                assert_eq!(row.len(), spec.headers.len(), "{}", spec.file_name);
            }
        }
    }
}
