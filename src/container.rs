//! Reusable markup-emitting container node
//!
//! A [`Container`] accumulates rows of cell text and renders each row as
//! one wrapped element whose children are the row's cells. Its own
//! element and the cell elements are configured independently through
//! two embedded [`ElementAttrs`] bags.
//!
//! Rendering is a pure read of the accumulated state: it can be repeated
//! and never mutates the data.

use serde_json::Value;

use crate::attrs::ElementAttrs;
use crate::error::{Result, TableError};

/// Converts one scalar data value to cell text.
///
/// JSON strings contribute their content without quotes, null becomes
/// the empty string, and any non-scalar value falls back to its compact
/// JSON form.
pub(crate) fn scalar_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

/// A markup-emitting node accumulating rows of tabular data.
///
/// Cell values are plain text and pass into the output unescaped; the
/// container is a string-composition layer that trusts its caller.
///
/// # Examples
///
/// ```
/// use tabgen::Container;
///
/// let mut body = Container::new("div", "body", "", "");
/// body.add_data_string("a").add_data_string("b");
///
/// assert_eq!(
///     body.render(),
///     "<div class=\"body\"><div class=\"col\">a</div><div class=\"col\">b</div></div>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Container {
	attrs: ElementAttrs,
	cell: ElementAttrs,
	data: Vec<Vec<String>>,
	// Current-row cursor for incremental ingestion
	array_index: usize,
}

impl Container {
	/// Creates a container with the given configuration for its own
	/// element. Cell elements start at their defaults (`div` tag, `col`
	/// class).
	pub fn new(tag: &str, class: &str, style: &str, attribute: &str) -> Self {
		Self {
			attrs: ElementAttrs::new(tag, class, style, attribute),
			cell: ElementAttrs::cell_defaults(),
			data: Vec::new(),
			array_index: 0,
		}
	}

	/// Replaces the container element tag.
	pub fn set_tag(&mut self, tag: &str) {
		self.attrs.set_tag(tag);
	}

	/// Appends CSS classes to the container element.
	///
	/// ```
	/// use tabgen::Container;
	///
	/// let mut container = Container::new("div", "", "", "");
	/// container.set_class("table").set_class("striped");
	/// assert_eq!(container.attrs().class(), "table striped");
	/// ```
	pub fn set_class(&mut self, class: &str) -> &mut Self {
		self.attrs.append_class(class);
		self
	}

	/// Appends CSS declarations to the container element.
	pub fn set_style(&mut self, style: &str) -> &mut Self {
		self.attrs.append_style(style);
		self
	}

	/// Appends a `name='value'` pair to the container element's raw
	/// attribute fragment.
	pub fn set_attribute(&mut self, name: &str, value: &str) -> &mut Self {
		self.attrs.append_attribute(name, value);
		self
	}

	/// Replaces the cell element tag.
	pub fn set_cell_tag(&mut self, tag: &str) {
		self.cell.set_tag(tag);
	}

	/// Appends CSS classes to the cell elements.
	pub fn set_cell_class(&mut self, class: &str) -> &mut Self {
		self.cell.append_class(class);
		self
	}

	/// Appends CSS declarations to the cell elements.
	pub fn set_cell_style(&mut self, style: &str) -> &mut Self {
		self.cell.append_style(style);
		self
	}

	/// Appends a `name='value'` pair to the cell elements' raw attribute
	/// fragment.
	pub fn set_cell_attribute(&mut self, name: &str, value: &str) -> &mut Self {
		self.cell.append_attribute(name, value);
		self
	}

	/// Appends one scalar to the current row.
	///
	/// The current row stays open across calls; [`commit_row`] advances
	/// to the next one.
	///
	/// [`commit_row`]: Container::commit_row
	pub fn add_data_string(&mut self, text: impl Into<String>) -> &mut Self {
		while self.data.len() <= self.array_index {
			self.data.push(Vec::new());
		}
		self.data[self.array_index].push(text.into());
		self
	}

	/// Closes the current row; subsequent [`add_data_string`] calls fill
	/// the next one.
	///
	/// [`add_data_string`]: Container::add_data_string
	pub fn commit_row(&mut self) -> &mut Self {
		self.array_index += 1;
		self
	}

	/// Ingests a whole data set at once, inferring its shape.
	///
	/// A flat array is appended as one row. A two-dimensional array
	/// replaces all previously accumulated rows. A non-array value is
	/// appended as a one-cell row. Nesting deeper than two levels is
	/// rejected with [`TableError::UnsupportedDepth`], leaving the
	/// accumulated data untouched.
	///
	/// # Examples
	///
	/// ```
	/// use serde_json::json;
	/// use tabgen::Container;
	///
	/// let mut body = Container::new("div", "body", "", "");
	/// body.add_data_array(json!([[1, 2], [3, 4]]))?;
	/// assert_eq!(body.rows().len(), 2);
	///
	/// assert!(body.add_data_array(json!([[[1]]])).is_err());
	/// assert_eq!(body.rows().len(), 2);
	/// # Ok::<(), tabgen::TableError>(())
	/// ```
	pub fn add_data_array(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
		let value = value.into();
		let items = match value {
			Value::Array(items) => items,
			other => {
				self.data.push(vec![scalar_text(&other)]);
				return Ok(self);
			}
		};
		match items.first() {
			Some(first) if first.is_array() => {
				let too_deep = first
					.as_array()
					.and_then(|row| row.first())
					.is_some_and(Value::is_array);
				if too_deep {
					tracing::warn!("add_data_array rejected a three-dimensional array");
					return Err(TableError::UnsupportedDepth);
				}
				// Two-dimensional input replaces the accumulated rows
				self.data = items
					.iter()
					.map(|row| match row {
						Value::Array(cells) => cells.iter().map(scalar_text).collect(),
						other => vec![scalar_text(other)],
					})
					.collect();
			}
			_ => {
				// Flat input becomes one row
				self.data.push(items.iter().map(scalar_text).collect());
			}
		}
		Ok(self)
	}

	/// Returns the accumulated rows.
	pub fn rows(&self) -> &[Vec<String>] {
		&self.data
	}

	/// Returns the container element configuration.
	pub fn attrs(&self) -> &ElementAttrs {
		&self.attrs
	}

	/// Returns the cell element configuration.
	pub fn cell_attrs(&self) -> &ElementAttrs {
		&self.cell
	}

	/// Renders one markup fragment per accumulated row, concatenated in
	/// insertion order. A container with no rows renders the empty
	/// string.
	///
	/// Each fragment wraps the row's cells in the container element;
	/// each cell value is emitted as the text content of one cell
	/// element. Optional attributes keep a fixed order: class, style,
	/// then the raw attribute fragment.
	pub fn render(&self) -> String {
		tracing::trace!(rows = self.data.len(), "rendering container");
		let mut html = String::new();
		for row in &self.data {
			self.attrs.open_tag(&mut html);
			for cell in row {
				self.cell.open_tag(&mut html);
				html.push_str(cell);
				self.cell.close_tag(&mut html);
			}
			self.attrs.close_tag(&mut html);
		}
		html
	}

	pub(crate) fn open_tag(&self, html: &mut String) {
		self.attrs.open_tag(html);
	}

	pub(crate) fn close_tag(&self, html: &mut String) {
		self.attrs.close_tag(html);
	}
}

impl Default for Container {
	fn default() -> Self {
		Self::new("", "", "", "")
	}
}

impl std::fmt::Display for Container {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.render())
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_render_empty_container() {
		let container = Container::new("div", "body", "", "");
		assert_eq!(container.render(), "");
	}

	#[test]
	fn test_commit_row_starts_new_row() {
		let mut container = Container::new("div", "", "", "");
		container
			.add_data_string("a")
			.commit_row()
			.add_data_string("b");
		assert_eq!(
			container.rows(),
			vec![vec!["a".to_string()], vec!["b".to_string()]]
		);
	}

	#[test]
	fn test_flat_array_is_one_row() {
		let mut container = Container::new("div", "", "", "");
		container.add_data_array(json!([1, 2, 3])).unwrap();
		assert_eq!(
			container.rows(),
			vec![vec!["1".to_string(), "2".to_string(), "3".to_string()]]
		);
	}

	#[test]
	fn test_scalar_text_conversions() {
		assert_eq!(scalar_text(&json!("plain")), "plain");
		assert_eq!(scalar_text(&json!(42)), "42");
		assert_eq!(scalar_text(&json!(true)), "true");
		assert_eq!(scalar_text(&json!(null)), "");
	}

	#[test]
	fn test_render_is_repeatable() {
		let mut container = Container::new("div", "body", "", "");
		container.add_data_string("x");
		assert_eq!(container.render(), container.render());
	}
}
