use proptest::prelude::*;
use tabgen::Container;

proptest! {
	// Successive class appends always space-join in insertion order
	#[test]
	fn class_append_space_joins(tokens in prop::collection::vec("[a-z][a-z0-9]{0,7}", 1..6)) {
		let mut container = Container::new("div", "", "", "");
		for token in &tokens {
			container.set_class(token);
		}
		prop_assert_eq!(container.attrs().class(), tokens.join(" "));
	}

	// Every appended style fragment is individually `;`-terminated
	#[test]
	fn style_append_terminates_fragments(tokens in prop::collection::vec("[a-z]{1,6}:[a-z0-9]{1,6}", 1..6)) {
		let mut container = Container::new("div", "", "", "");
		for token in &tokens {
			container.set_style(token);
		}
		let expected = tokens
			.iter()
			.map(|token| format!("{token};"))
			.collect::<Vec<_>>()
			.join(" ");
		prop_assert_eq!(container.attrs().style(), expected);
	}

	// Attribute appends accumulate as space-joined name='value' pairs
	#[test]
	fn attribute_append_builds_pairs(pairs in prop::collection::vec(("[a-z][a-z0-9-]{0,6}", "[a-z0-9]{0,6}"), 1..5)) {
		let mut container = Container::new("div", "", "", "");
		for (name, value) in &pairs {
			container.set_attribute(name, value);
		}
		let expected = pairs
			.iter()
			.map(|(name, value)| format!("{name}='{value}'"))
			.collect::<Vec<_>>()
			.join(" ");
		prop_assert_eq!(container.attrs().attribute(), expected);
	}

	// Rendering is a pure read: repeated calls agree byte for byte
	#[test]
	fn render_is_deterministic(cells in prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 0..8)) {
		let mut container = Container::new("div", "grid", "", "");
		for cell in &cells {
			container.add_data_string(cell.as_str());
		}
		prop_assert_eq!(container.render(), container.render());
	}

	// Cell text passes through to the output unmodified
	#[test]
	fn cell_text_is_verbatim(cell in "[a-zA-Z0-9 .,:-]{1,16}") {
		let mut container = Container::new("div", "", "", "");
		container.add_data_string(cell.as_str());
		prop_assert_eq!(
			container.render(),
			format!("<div><div class=\"col\">{cell}</div></div>")
		);
	}
}
