//! Settings-object table builder
//!
//! [`TableBuilder`] is the second design variant of the rendering
//! engine: instead of a per-container attribute bag, the row, cell, and
//! column roles are configured through standalone settings objects that
//! can be swapped in wholesale. Rendering walks the accumulated rows and
//! reads whichever settings are installed at that moment.

use serde_json::Value;

use crate::container::scalar_text;
use crate::settings::{CellSettings, ColSettings, RowSettings, Settings};

/// Renders accumulated rows into one table-shaped markup block, styled
/// per three independent settings objects.
///
/// The builder's own element always brackets the output, even with no
/// data. Row elements come from [`RowSettings`], cell elements from
/// [`CellSettings`]; [`ColSettings`] contributes an optional per-row
/// position counter on each cell.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tabgen::TableBuilder;
///
/// let mut table = TableBuilder::new();
/// table.add_data(json!(["a", "b"]));
///
/// assert_eq!(
///     table.to_html(),
///     "<div class=\"container\"><div class=\"row\"><div class=\"cell\">a</div><div class=\"cell\">b</div></div></div>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
	tag_name: String,
	class: String,
	style: String,
	row: RowSettings,
	cell: CellSettings,
	col: ColSettings,
	data: Vec<Vec<String>>,
}

impl TableBuilder {
	/// Creates a builder with the default configuration: a `div`
	/// carrying the `container` class, default settings objects, no
	/// data.
	pub fn new() -> Self {
		Self {
			tag_name: "div".to_string(),
			class: "container".to_string(),
			style: String::new(),
			row: RowSettings::default(),
			cell: CellSettings::default(),
			col: ColSettings::default(),
			data: Vec::new(),
		}
	}

	/// Sets the outer element tag, consuming and returning the builder.
	pub fn with_tag_name(mut self, tag_name: &str) -> Self {
		self.tag_name = tag_name.to_string();
		self
	}

	/// Sets the outer element class string, consuming and returning the
	/// builder.
	pub fn with_class(mut self, class: &str) -> Self {
		self.class = class.to_string();
		self
	}

	/// Sets the outer element style string, consuming and returning the
	/// builder.
	pub fn with_style(mut self, style: &str) -> Self {
		self.style = style.to_string();
		self
	}

	/// Replaces the outer element tag.
	pub fn set_tag_name(&mut self, tag_name: &str) {
		self.tag_name = tag_name.to_string();
	}

	/// Replaces the outer element class string.
	pub fn set_class(&mut self, class: &str) {
		self.class = class.to_string();
	}

	/// Replaces the outer element style string.
	pub fn set_style(&mut self, style: &str) {
		self.style = style.to_string();
	}

	/// Appends one row of data.
	///
	/// An array value contributes one cell per element; any other value
	/// becomes a one-cell row.
	pub fn add_data(&mut self, row: impl Into<Value>) {
		let row = match row.into() {
			Value::Array(cells) => cells.iter().map(scalar_text).collect(),
			other => vec![scalar_text(&other)],
		};
		self.data.push(row);
	}

	/// Installs a settings object into the slot matching its role,
	/// leaving the other two slots untouched.
	///
	/// ```
	/// use tabgen::{CellSettings, TableBuilder};
	///
	/// let mut table = TableBuilder::new();
	/// table.replace_settings(CellSettings::new("td", "", "", false));
	/// assert_eq!(table.cell_settings().tag_name(), "td");
	/// assert_eq!(table.row_settings().tag_name(), "div");
	/// ```
	pub fn replace_settings(&mut self, settings: impl Into<Settings>) {
		match settings.into() {
			Settings::Row(row) => self.row = row,
			Settings::Cell(cell) => self.cell = cell,
			Settings::Col(col) => self.col = col,
		}
	}

	/// Returns the installed row settings.
	pub fn row_settings(&self) -> &RowSettings {
		&self.row
	}

	/// Returns the installed cell settings.
	pub fn cell_settings(&self) -> &CellSettings {
		&self.cell
	}

	/// Returns the installed column settings.
	pub fn col_settings(&self) -> &ColSettings {
		&self.col
	}

	/// Returns the accumulated rows.
	pub fn rows(&self) -> &[Vec<String>] {
		&self.data
	}

	/// Renders the accumulated rows into one markup block.
	///
	/// The outer element opens with its class and style (each emitted
	/// only when non-empty, in that order). Every row element may carry
	/// the row counter, every cell element the cell counter followed by
	/// the column counter, each emitted only when the owning settings
	/// object enables it and named per that object's counter name.
	///
	/// All counters are zero-based. The row counter increments per row
	/// and the column counter restarts at every row, but the cell
	/// counter runs over the whole table without resetting; on a
	/// multi-row table the cell and column counters diverge.
	pub fn to_html(&self) -> String {
		tracing::trace!(rows = self.data.len(), "rendering table");
		let mut html = format!("<{}", self.tag_name);
		if !self.class.is_empty() {
			html.push_str(&format!(" class=\"{}\"", self.class));
		}
		if !self.style.is_empty() {
			html.push_str(&format!(" style=\"{}\"", self.style));
		}
		html.push('>');

		// Runs over the whole table, unlike the per-row column counter
		let mut cell_iteration = 0usize;
		for (row_iteration, row) in self.data.iter().enumerate() {
			html.push_str(&format!("<{}", self.row.tag_name()));
			if !self.row.class().is_empty() {
				html.push_str(&format!(" class=\"{}\"", self.row.class()));
			}
			if !self.row.style().is_empty() {
				html.push_str(&format!(" style=\"{}\"", self.row.style()));
			}
			if self.row.counter_enabled() {
				html.push_str(&format!(" {}=\"{}\"", self.row.counter_name(), row_iteration));
			}
			html.push('>');

			for (col_iteration, cell) in row.iter().enumerate() {
				html.push_str(&format!("<{}", self.cell.tag_name()));
				if !self.cell.class().is_empty() {
					html.push_str(&format!(" class=\"{}\"", self.cell.class()));
				}
				if !self.cell.style().is_empty() {
					html.push_str(&format!(" style=\"{}\"", self.cell.style()));
				}
				if self.cell.counter_enabled() {
					html.push_str(&format!(
						" {}=\"{}\"",
						self.cell.counter_name(),
						cell_iteration
					));
				}
				if self.col.counter_enabled() {
					html.push_str(&format!(" {}=\"{}\"", self.col.counter_name(), col_iteration));
				}
				html.push('>');
				html.push_str(cell);
				html.push_str(&format!("</{}>", self.cell.tag_name()));
				cell_iteration += 1;
			}
			html.push_str(&format!("</{}>", self.row.tag_name()));
		}
		html.push_str(&format!("</{}>", self.tag_name));

		html
	}
}

impl Default for TableBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Display for TableBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_html())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_empty_table_is_bare_element_pair() {
		let table = TableBuilder::new();
		assert_eq!(table.to_html(), "<div class=\"container\"></div>");
	}

	#[test]
	fn test_scalar_row_becomes_one_cell() {
		let mut table = TableBuilder::new();
		table.add_data(json!("single"));
		assert_eq!(table.rows(), vec![vec!["single".to_string()]]);
	}

	#[test]
	fn test_display_matches_to_html() {
		let mut table = TableBuilder::new();
		table.add_data(json!([1]));
		assert_eq!(table.to_string(), table.to_html());
	}
}
