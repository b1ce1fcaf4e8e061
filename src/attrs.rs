//! Element attribute bag shared by the container node types
//!
//! [`ElementAttrs`] holds the markup configuration of one structural role:
//! the wrapping tag, the accumulated `class` string, the accumulated
//! `style` string, and a raw attribute fragment. A [`Container`] embeds
//! two of these by value, one for its own element and one for the cell
//! elements it emits.
//!
//! [`Container`]: crate::container::Container

/// Markup configuration for a single element role.
///
/// Class, style, and the raw attribute fragment accumulate across calls;
/// only the tag is replaced. All strings are taken verbatim apart from
/// space-trimming of the individual tokens. No validation, no escaping.
///
/// # Examples
///
/// ```
/// use tabgen::ElementAttrs;
///
/// let mut attrs = ElementAttrs::new("div", "panel", "color:red", "");
/// attrs.append_class("wide");
/// assert_eq!(attrs.class(), "panel wide");
/// assert_eq!(attrs.style(), "color:red;");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementAttrs {
	tag: String,
	class: String,
	style: String,
	attribute: String,
}

impl ElementAttrs {
	/// Creates an attribute bag from the caller's initial configuration.
	///
	/// The tag and class are space-trimmed; a non-empty style is
	/// space-trimmed and terminated with `;`; the attribute fragment is
	/// kept exactly as passed.
	pub fn new(tag: &str, class: &str, style: &str, attribute: &str) -> Self {
		Self {
			tag: tag.trim_matches(' ').to_string(),
			class: if class.is_empty() {
				String::new()
			} else {
				class.trim_matches(' ').to_string()
			},
			style: if style.is_empty() {
				String::new()
			} else {
				format!("{};", style.trim_matches(' '))
			},
			attribute: attribute.to_string(),
		}
	}

	/// Creates the default configuration for cell elements: a `div`
	/// carrying the `col` class.
	pub fn cell_defaults() -> Self {
		Self {
			tag: "div".to_string(),
			class: "col".to_string(),
			style: String::new(),
			attribute: String::new(),
		}
	}

	/// Replaces the tag. The only non-accumulating setter.
	pub fn set_tag(&mut self, tag: &str) {
		self.tag = tag.trim_matches(' ').to_string();
	}

	/// Appends one or more CSS classes to the accumulated class string.
	///
	/// Successive calls space-join in insertion order:
	///
	/// ```
	/// use tabgen::ElementAttrs;
	///
	/// let mut attrs = ElementAttrs::default();
	/// attrs.append_class("first");
	/// attrs.append_class("second");
	/// assert_eq!(attrs.class(), "first second");
	/// ```
	pub fn append_class(&mut self, class: &str) {
		self.class = format!("{} {}", self.class, class.trim_matches(' '))
			.trim_start_matches(' ')
			.to_string();
	}

	/// Appends one or more CSS declarations to the accumulated style
	/// string. Each appended fragment is individually `;`-terminated.
	///
	/// ```
	/// use tabgen::ElementAttrs;
	///
	/// let mut attrs = ElementAttrs::default();
	/// attrs.append_style("color:red");
	/// attrs.append_style("font-size:1px");
	/// assert_eq!(attrs.style(), "color:red; font-size:1px;");
	/// ```
	pub fn append_style(&mut self, style: &str) {
		self.style = format!("{} {};", self.style, style.trim_matches(' '))
			.trim_start_matches(' ')
			.to_string();
	}

	/// Appends a `name='value'` pair to the raw attribute fragment.
	///
	/// The fragment is later spliced into the opening tag exactly as
	/// accumulated.
	pub fn append_attribute(&mut self, name: &str, value: &str) {
		self.attribute = format!(
			"{} {}='{}'",
			self.attribute,
			name.trim_matches(' '),
			value.trim_matches(' ')
		)
		.trim_start_matches(' ')
		.to_string();
	}

	/// Returns the tag.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the accumulated class string.
	pub fn class(&self) -> &str {
		&self.class
	}

	/// Returns the accumulated style string.
	pub fn style(&self) -> &str {
		&self.style
	}

	/// Returns the raw attribute fragment.
	pub fn attribute(&self) -> &str {
		&self.attribute
	}

	/// Writes the opening tag for this element into `html`.
	///
	/// `class` and `style` are emitted only when non-empty, in that
	/// order; the raw attribute fragment follows verbatim. The emission
	/// order is fixed, so output bytes are deterministic for a given state.
	pub(crate) fn open_tag(&self, html: &mut String) {
		html.push('<');
		html.push_str(&self.tag);
		if !self.class.is_empty() {
			html.push_str(" class=\"");
			html.push_str(&self.class);
			html.push('"');
		}
		if !self.style.is_empty() {
			html.push_str(" style=\"");
			html.push_str(&self.style);
			html.push('"');
		}
		if !self.attribute.is_empty() {
			html.push_str(&self.attribute);
		}
		html.push('>');
	}

	/// Writes the closing tag for this element into `html`.
	pub(crate) fn close_tag(&self, html: &mut String) {
		html.push_str("</");
		html.push_str(&self.tag);
		html.push('>');
	}
}
