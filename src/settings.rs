//! Per-role settings value objects for the settings-object table builder
//!
//! Each structural role of a rendered table (row, cell, column) owns a
//! standalone settings object. [`TableBuilder`] consumes one of each and
//! reads them during rendering; the objects themselves are plain state
//! with getter/setter pairs and deterministic defaults.
//!
//! [`TableBuilder`]: crate::builder::TableBuilder

use serde::{Deserialize, Serialize};

/// Settings for the row elements of a rendered table.
///
/// Defaults: tag `div`, class `row`, empty style, counter disabled,
/// counter attribute name `row`.
///
/// # Examples
///
/// ```
/// use tabgen::RowSettings;
///
/// let mut row = RowSettings::default();
/// assert_eq!(row.tag_name(), "div");
/// assert_eq!(row.class(), "row");
///
/// row.set_counter_enabled(true);
/// assert!(row.counter_enabled());
/// assert_eq!(row.counter_name(), "row");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSettings {
	tag_name: String,
	class: String,
	style: String,
	counter_enabled: bool,
	counter_name: String,
}

impl RowSettings {
	/// Creates row settings with the given overrides. The counter
	/// attribute name always starts at the role default `row`.
	pub fn new(tag_name: &str, class: &str, style: &str, counter_enabled: bool) -> Self {
		Self {
			tag_name: tag_name.to_string(),
			class: class.to_string(),
			style: style.to_string(),
			counter_enabled,
			counter_name: "row".to_string(),
		}
	}

	/// Replaces the row element tag.
	pub fn set_tag_name(&mut self, tag_name: &str) {
		self.tag_name = tag_name.to_string();
	}

	/// Replaces the row element class string.
	pub fn set_class(&mut self, class: &str) {
		self.class = class.to_string();
	}

	/// Replaces the row element style string.
	pub fn set_style(&mut self, style: &str) {
		self.style = style.to_string();
	}

	/// Enables or disables emission of the zero-based row counter
	/// attribute.
	pub fn set_counter_enabled(&mut self, counter_enabled: bool) {
		self.counter_enabled = counter_enabled;
	}

	/// Replaces the name of the row counter attribute.
	pub fn set_counter_name(&mut self, counter_name: &str) {
		self.counter_name = counter_name.to_string();
	}

	/// Returns the row element tag.
	pub fn tag_name(&self) -> &str {
		&self.tag_name
	}

	/// Returns the row element class string.
	pub fn class(&self) -> &str {
		&self.class
	}

	/// Returns the row element style string.
	pub fn style(&self) -> &str {
		&self.style
	}

	/// Returns whether the row counter attribute is emitted.
	pub fn counter_enabled(&self) -> bool {
		self.counter_enabled
	}

	/// Returns the name of the row counter attribute.
	pub fn counter_name(&self) -> &str {
		&self.counter_name
	}
}

impl Default for RowSettings {
	fn default() -> Self {
		Self::new("div", "row", "", false)
	}
}

/// Settings for the cell elements of a rendered table.
///
/// Defaults: tag `div`, class `cell`, empty style, counter disabled,
/// counter attribute name `cell`. The cell counter increments for every
/// cell of the table and is never reset between rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSettings {
	tag_name: String,
	class: String,
	style: String,
	counter_enabled: bool,
	counter_name: String,
}

impl CellSettings {
	/// Creates cell settings with the given overrides. The counter
	/// attribute name always starts at the role default `cell`.
	pub fn new(tag_name: &str, class: &str, style: &str, counter_enabled: bool) -> Self {
		Self {
			tag_name: tag_name.to_string(),
			class: class.to_string(),
			style: style.to_string(),
			counter_enabled,
			counter_name: "cell".to_string(),
		}
	}

	/// Replaces the cell element tag.
	pub fn set_tag_name(&mut self, tag_name: &str) {
		self.tag_name = tag_name.to_string();
	}

	/// Replaces the cell element class string.
	pub fn set_class(&mut self, class: &str) {
		self.class = class.to_string();
	}

	/// Replaces the cell element style string.
	pub fn set_style(&mut self, style: &str) {
		self.style = style.to_string();
	}

	/// Enables or disables emission of the zero-based cell counter
	/// attribute.
	pub fn set_counter_enabled(&mut self, counter_enabled: bool) {
		self.counter_enabled = counter_enabled;
	}

	/// Replaces the name of the cell counter attribute.
	pub fn set_counter_name(&mut self, counter_name: &str) {
		self.counter_name = counter_name.to_string();
	}

	/// Returns the cell element tag.
	pub fn tag_name(&self) -> &str {
		&self.tag_name
	}

	/// Returns the cell element class string.
	pub fn class(&self) -> &str {
		&self.class
	}

	/// Returns the cell element style string.
	pub fn style(&self) -> &str {
		&self.style
	}

	/// Returns whether the cell counter attribute is emitted.
	pub fn counter_enabled(&self) -> bool {
		self.counter_enabled
	}

	/// Returns the name of the cell counter attribute.
	pub fn counter_name(&self) -> &str {
		&self.counter_name
	}
}

impl Default for CellSettings {
	fn default() -> Self {
		Self::new("div", "cell", "", false)
	}
}

/// Settings for the column position of cells in a rendered table.
///
/// Columns contribute no element of their own, only an optional
/// counter attribute on each cell, holding the cell's zero-based
/// position within its row. Defaults: counter disabled, counter
/// attribute name `col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColSettings {
	counter_enabled: bool,
	counter_name: String,
}

impl ColSettings {
	/// Creates column settings with the counter flag set as given. The
	/// counter attribute name always starts at the role default `col`.
	pub fn new(counter_enabled: bool) -> Self {
		Self {
			counter_enabled,
			counter_name: "col".to_string(),
		}
	}

	/// Enables or disables emission of the zero-based column counter
	/// attribute.
	pub fn set_counter_enabled(&mut self, counter_enabled: bool) {
		self.counter_enabled = counter_enabled;
	}

	/// Replaces the name of the column counter attribute.
	pub fn set_counter_name(&mut self, counter_name: &str) {
		self.counter_name = counter_name.to_string();
	}

	/// Returns whether the column counter attribute is emitted.
	pub fn counter_enabled(&self) -> bool {
		self.counter_enabled
	}

	/// Returns the name of the column counter attribute.
	pub fn counter_name(&self) -> &str {
		&self.counter_name
	}
}

impl Default for ColSettings {
	fn default() -> Self {
		Self::new(false)
	}
}

/// A settings object tagged with the role slot it belongs to.
///
/// [`TableBuilder::replace_settings`] accepts this enum and routes the
/// payload to the matching slot, leaving the other two slots untouched.
/// The `From` impls let call sites pass a bare settings object:
///
/// ```
/// use tabgen::{RowSettings, TableBuilder};
///
/// let mut table = TableBuilder::new();
/// table.replace_settings(RowSettings::new("tr", "", "", false));
/// ```
///
/// [`TableBuilder::replace_settings`]: crate::builder::TableBuilder::replace_settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settings {
	/// Settings destined for the row slot
	Row(RowSettings),
	/// Settings destined for the cell slot
	Cell(CellSettings),
	/// Settings destined for the column slot
	Col(ColSettings),
}

impl From<RowSettings> for Settings {
	fn from(settings: RowSettings) -> Self {
		Self::Row(settings)
	}
}

impl From<CellSettings> for Settings {
	fn from(settings: CellSettings) -> Self {
		Self::Cell(settings)
	}
}

impl From<ColSettings> for Settings {
	fn from(settings: ColSettings) -> Self {
		Self::Col(settings)
	}
}
