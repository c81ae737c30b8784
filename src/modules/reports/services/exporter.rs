use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet};

use crate::core::Result;
use crate::modules::reports::models::CategoryAggregate;

/// Worksheet name; also the base of the download file name
pub const SHEET_NAME: &str = "SalesReport";

/// Attachment file name served by the export endpoint
pub const EXPORT_FILE_NAME: &str = "SalesReport.xlsx";

/// Rupiah with two decimal places and thousands separators
const CURRENCY_FORMAT: &str = "Rp#,##0.00";

const COLUMN_WIDTH: f64 = 15.0;

/// First body row, 0-indexed (rows 0 and 1 hold the merged header)
const BODY_START_ROW: u32 = 2;

/// Render the aggregate tree into an XLSX workbook.
///
/// Layout: merged "Menu" label (A1:A2), merged "Periode" banner across the
/// date columns, one date per column in row 2, merged "Total" column, then
/// per category a merged label row with the category total, one row per
/// product with per-date and total currency cells, and finally a
/// "Grand Total" row of live SUM formulas (vertical over the body rows per
/// period column, horizontal across the period cells for the Total column)
/// so the document stays self-auditable when opened and edited by hand.
pub fn render_workbook(categories: &[CategoryAggregate], period: &[String]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let currency = Format::new().set_num_format(CURRENCY_FORMAT);
    let header = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // Label column, one column per period date, trailing total column
    let total_col: u16 = 1 + period.len() as u16;

    for col in 0..=total_col {
        worksheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    write_label(worksheet, 0, 1, 0, 0, "Menu", &header)?;
    if !period.is_empty() {
        write_label(worksheet, 0, 0, 1, total_col - 1, "Periode", &header)?;
        for (i, date) in period.iter().enumerate() {
            worksheet.write_string_with_format(1, 1 + i as u16, date, &header)?;
        }
    }
    write_label(worksheet, 0, 1, total_col, total_col, "Total", &header)?;

    let mut row = BODY_START_ROW;
    for category in categories {
        // Category label row spans the period columns; its running total
        // sits in the total column like every other currency cell
        write_label(worksheet, row, row, 0, total_col - 1, &category.category_name, &header)?;
        worksheet.write_number_with_format(row, total_col, category.category_total, &currency)?;

        for product in &category.products {
            row += 1;
            worksheet.write_string(row, 0, &product.product_name)?;

            for (i, date) in period.iter().enumerate() {
                worksheet.write_number_with_format(
                    row,
                    1 + i as u16,
                    product.sales_on(date),
                    &currency,
                )?;
            }

            worksheet.write_number_with_format(
                row,
                total_col,
                product.transactions_total,
                &currency,
            )?;
        }

        row += 1;
    }

    // Grand total row: each period column gets a live SUM over the body
    // rows rather than a precomputed literal
    worksheet.write_string_with_format(row, 0, "Grand Total", &header)?;
    for col in 1..total_col {
        let formula = if row > BODY_START_ROW {
            let letter = column_letter(col);
            // Formula ranges are 1-indexed: body occupies sheet rows 3..=row
            format!("SUM({letter}{}:{letter}{})", BODY_START_ROW + 1, row)
        } else {
            // No body rows to sum over
            "SUM(0)".to_string()
        };
        worksheet.write_formula_with_format(row, col, formula.as_str(), &currency)?;
    }

    // The Total column sums this row horizontally across the period columns.
    // A vertical sum there would count both the category label rows and the
    // product rows they already total, doubling the figure.
    let grand_formula = if period.is_empty() {
        "SUM(0)".to_string()
    } else {
        let sheet_row = row + 1;
        let last_period = column_letter(total_col - 1);
        format!("SUM(B{sheet_row}:{last_period}{sheet_row})")
    };
    worksheet.write_formula_with_format(row, total_col, grand_formula.as_str(), &currency)?;

    Ok(workbook.save_to_buffer()?)
}

/// Write a label over a cell range, merging only when the range spans more
/// than one cell (merge_range rejects single-cell ranges)
fn write_label(
    worksheet: &mut Worksheet,
    first_row: u32,
    last_row: u32,
    first_col: u16,
    last_col: u16,
    label: &str,
    format: &Format,
) -> Result<()> {
    if first_row == last_row && first_col == last_col {
        worksheet.write_string_with_format(first_row, first_col, label, format)?;
    } else {
        worksheet.merge_range(first_row, first_col, last_row, last_col, label, format)?;
    }

    Ok(())
}

/// 0-based column index to spreadsheet column label (0 → A, 25 → Z, 26 → AA).
/// Proper base-26 conversion; valid for arbitrarily wide periods.
pub fn column_letter(mut col: u16) -> String {
    let mut label = String::new();

    loop {
        label.insert(0, (b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }

    label
}
