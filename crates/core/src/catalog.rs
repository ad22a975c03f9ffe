//! Item catalog: schema validation and normalization of tabular item input.
//!
//! The catalog is the only gate in front of the placement engine. It checks
//! that every required column is present and converts each row into an
//! [`ItemDefinition`]. It deliberately performs no range validation: cells that
//! fail to parse become `NaN` and flow through to the engine unchanged.

use crate::item::ItemDefinition;
use crate::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column holding the item identifier.
pub const COL_ID: &str = "ItemID";
/// Column holding the unit length.
pub const COL_LENGTH: &str = "Length";
/// Column holding the unit width.
pub const COL_WIDTH: &str = "Width";
/// Column holding the unit height.
pub const COL_HEIGHT: &str = "Height";
/// Column holding the unit weight.
pub const COL_WEIGHT: &str = "Weight";
/// Column holding the number of units.
pub const COL_QUANTITY: &str = "Quantity";
/// Column holding the stackable flag.
pub const COL_STACKABLE: &str = "Stackable (yes/no)";
/// Column holding the fragile flag.
pub const COL_FRAGILE: &str = "Fragile (yes/no)";

/// Every column an item table must carry, in schema order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COL_ID,
    COL_LENGTH,
    COL_WIDTH,
    COL_HEIGHT,
    COL_WEIGHT,
    COL_QUANTITY,
    COL_STACKABLE,
    COL_FRAGILE,
];

/// An in-memory, row-oriented table of string cells with a header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from headers and rows.
    ///
    /// Rows may be ragged; missing cells read as empty.
    pub fn new<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Reads a comma-separated table with a header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in csv.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Reads a comma-separated table from a file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the index of the named column, matched exactly.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Returns the required columns this table lacks, in schema order.
    pub fn missing_columns(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|col| self.column_index(col).is_none())
            .map(|col| col.to_string())
            .collect()
    }
}

/// Resolved positions of the required columns within a table.
struct ColumnMap {
    id: usize,
    length: usize,
    width: usize,
    height: usize,
    weight: usize,
    quantity: usize,
    stackable: usize,
    fragile: usize,
}

impl ColumnMap {
    fn resolve(table: &Table) -> Result<Self> {
        let missing = table.missing_columns();
        if !missing.is_empty() {
            return Err(Error::Schema { missing });
        }

        let col = |name: &str| table.column_index(name).unwrap_or_default();
        Ok(Self {
            id: col(COL_ID),
            length: col(COL_LENGTH),
            width: col(COL_WIDTH),
            height: col(COL_HEIGHT),
            weight: col(COL_WEIGHT),
            quantity: col(COL_QUANTITY),
            stackable: col(COL_STACKABLE),
            fragile: col(COL_FRAGILE),
        })
    }
}

/// Validates the table schema and converts its rows into item definitions.
///
/// Fails with [`Error::Schema`] if any required column is absent; in that case
/// no rows are converted. Rows are otherwise passed through in order, without
/// deduplication or range checks.
pub fn load(table: &Table) -> Result<Vec<ItemDefinition>> {
    let cols = ColumnMap::resolve(table)?;

    let items: Vec<ItemDefinition> = table
        .rows
        .iter()
        .enumerate()
        .map(|(row_idx, row)| convert_row(row_idx, row, &cols))
        .collect();

    log::info!(
        "Loaded {} item definition(s) covering {} unit(s)",
        items.len(),
        items.iter().map(ItemDefinition::quantity).sum::<usize>()
    );

    Ok(items)
}

/// Reads and loads a CSV item file in one step.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<Vec<ItemDefinition>> {
    load(&Table::from_csv_path(path)?)
}

fn convert_row(row_idx: usize, row: &[String], cols: &ColumnMap) -> ItemDefinition {
    let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");
    let number = |idx: usize, name: &str| parse_number(cell(idx), row_idx, name);

    let quantity = quantity_from(number(cols.quantity, COL_QUANTITY));

    ItemDefinition::new(
        cell(cols.id),
        number(cols.length, COL_LENGTH),
        number(cols.width, COL_WIDTH),
        number(cols.height, COL_HEIGHT),
    )
    .with_weight(number(cols.weight, COL_WEIGHT))
    .with_quantity(quantity)
    .with_stackable(parse_flag(cell(cols.stackable)))
    .with_fragile(parse_flag(cell(cols.fragile)))
}

fn parse_number(cell: &str, row_idx: usize, column: &str) -> f64 {
    match cell.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            log::warn!(
                "Row {}: column '{}' value {:?} is not numeric",
                row_idx + 1,
                column,
                cell
            );
            f64::NAN
        }
    }
}

/// Truncates a parsed quantity toward zero. Negative and `NaN` counts give
/// zero units.
pub fn quantity_from(value: f64) -> usize {
    // Float-to-int `as` saturates and maps NaN to 0.
    value.trunc() as usize
}

/// Interprets a yes/no cell. Anything not recognised as "yes" is false.
pub fn parse_flag(cell: &str) -> bool {
    matches!(
        cell.trim().to_ascii_lowercase().as_str(),
        "yes" | "y" | "true" | "1"
    )
}
