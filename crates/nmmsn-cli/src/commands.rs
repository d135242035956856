//! Command implementations, independent of argument parsing.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use nmmsn_core::{Expression, request_failure, respond};
use nmmsn_locale::{Catalog, Transliterator};
use nmmsn_model::{NameElementRecord, NamingResponse, NmmCategory, Side};
use tracing::{debug, info_span};

/// A response document was written.
pub const EXIT_OK: i32 = 0;
/// The command could not complete.
pub const EXIT_ERROR: i32 = 1;
/// The request did not have the shape of a name-element record.
pub const EXIT_BAD_REQUEST: i32 = 2;

/// Response to a naming request and the exit code it maps to.
#[derive(Debug)]
pub struct NameOutcome {
    pub response: NamingResponse,
    pub exit_code: i32,
}

/// Reads the request body from `path`, or stdin for `None` and `-`.
pub fn read_request(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("read request {}", path.display())),
        _ => io::read_to_string(io::stdin()).context("read request from stdin"),
    }
}

/// Names the record in `body`.
///
/// A body that is not a name-element record produces a failure document
/// with [`EXIT_BAD_REQUEST`]; naming failures are still [`EXIT_OK`].
pub fn name_request(
    body: &str,
    catalog: &Catalog,
    transliterator: &dyn Transliterator,
) -> Result<NameOutcome> {
    let span = info_span!("name_request", bytes = body.len());
    let _guard = span.enter();
    let start = Instant::now();

    let record: NameElementRecord = match serde_json::from_str(body) {
        Ok(record) => record,
        Err(error) => {
            return Ok(NameOutcome {
                response: request_failure(&error.to_string(), catalog),
                exit_code: EXIT_BAD_REQUEST,
            });
        }
    };
    let response = respond(&record, catalog, transliterator).context("transliterate name")?;
    debug!(
        success = response.is_success(),
        duration_ms = start.elapsed().as_millis(),
        "request named"
    );
    Ok(NameOutcome {
        response,
        exit_code: EXIT_OK,
    })
}

pub fn render_response(response: &NamingResponse, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    };
    json.context("serialize response")
}

/// Parses the text form of an expression and returns its wire form.
///
/// With `canonical`, the expression is first put in canonical order on its
/// primary labels.
pub fn parse_expression(text: &str, canonical: bool, preserve_and_order: bool) -> Result<String> {
    let expression = Expression::parse_text(text).context("parse name-element text")?;
    let expression = if canonical {
        expression.canonicalize(Side::Primary, preserve_and_order)
    } else {
        expression
    };
    serde_json::to_string(&expression.to_items()).context("serialize name elements")
}

/// Table of the material categories.
pub fn categories_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("中文"),
        header_cell("PAFA"),
        header_cell("Processed"),
        header_cell("Nameable"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for category in NmmCategory::ALL {
        table.add_row(vec![
            Cell::new(category.as_str()),
            Cell::new(category.label_zh()),
            flag_cell(category.is_pafa()),
            flag_cell(category.is_processed()),
            flag_cell(category.is_processable()),
        ]);
    }
    for index in 2..5 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Center);
        }
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("-").fg(Color::DarkGrey)
    }
}
