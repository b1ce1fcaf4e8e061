//! Table sections and the wrapper composition
//!
//! A [`Section`] tags an independently configured [`Container`] with the
//! structural role its rendered fragment occupies: header, body, or
//! footer. [`Container::wrapper`] composes any subset of sections into
//! one combined block, always header first, body second, footer last,
//! regardless of the order the sections are passed in.

use serde::{Deserialize, Serialize};

use crate::container::Container;

/// Structural role of a section within a composed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
	/// Leading region of the composed table
	Header,
	/// Main data region of the composed table
	Body,
	/// Trailing region of the composed table
	Footer,
}

impl Role {
	/// Returns the role name as a lowercase string.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Header => "header",
			Self::Body => "body",
			Self::Footer => "footer",
		}
	}
}

/// A role-tagged container.
///
/// Carries no state beyond the container itself; the role only selects
/// which slot the rendered fragment occupies during composition.
///
/// # Examples
///
/// ```
/// use tabgen::{Container, Role, Section};
///
/// let mut body = Container::new("div", "body", "", "");
/// body.add_data_string("x");
///
/// let section = Section::body(body);
/// assert_eq!(section.role, Role::Body);
/// assert_eq!(
///     section.render(),
///     "<div class=\"body\"><div class=\"col\">x</div></div>"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Section {
	/// Slot this section's fragment occupies during composition
	pub role: Role,
	/// The container holding the section's data and configuration
	pub container: Container,
}

impl Section {
	/// Tags a container with the given role.
	pub fn new(role: Role, container: Container) -> Self {
		Self { role, container }
	}

	/// Tags a container as the header section.
	pub fn header(container: Container) -> Self {
		Self::new(Role::Header, container)
	}

	/// Tags a container as the body section.
	pub fn body(container: Container) -> Self {
		Self::new(Role::Body, container)
	}

	/// Tags a container as the footer section.
	pub fn footer(container: Container) -> Self {
		Self::new(Role::Footer, container)
	}

	/// Renders the section's own fragment.
	pub fn render(&self) -> String {
		self.container.render()
	}
}

impl Container {
	/// Composes rendered section fragments inside this container's
	/// element.
	///
	/// The sections are scanned once; each one's fragment is retained
	/// under its role's slot, the last section winning when a role
	/// appears more than once. Roles not present contribute nothing.
	/// The output is always header, then body, then footer, bracketed
	/// by this container's own opening and closing tags.
	///
	/// # Examples
	///
	/// ```
	/// use tabgen::{Container, Section};
	///
	/// let mut body = Container::new("div", "body", "", "");
	/// body.add_data_string("x");
	///
	/// let table = Container::new("div", "table", "", "");
	/// let sections = vec![Section::body(body)];
	/// assert_eq!(
	///     table.wrapper(&sections),
	///     "<div class=\"table\"><div class=\"body\"><div class=\"col\">x</div></div></div>"
	/// );
	/// ```
	pub fn wrapper<'a, I>(&self, sections: I) -> String
	where
		I: IntoIterator<Item = &'a Section>,
	{
		let mut header = String::new();
		let mut body = String::new();
		let mut footer = String::new();

		for section in sections {
			match section.role {
				Role::Header => header = section.render(),
				Role::Body => body = section.render(),
				Role::Footer => footer = section.render(),
			}
		}

		let mut html = String::new();
		self.open_tag(&mut html);
		html.push_str(&header);
		html.push_str(&body);
		html.push_str(&footer);
		self.close_tag(&mut html);
		html
	}
}
