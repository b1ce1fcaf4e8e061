//! Composes a small score table from header, body, and footer sections
//! and prints the markup produced by both engine variants.

use serde_json::json;
use tabgen::{CellSettings, ColSettings, Container, RowSettings, Section, TableBuilder};

fn main() -> tabgen::Result<()> {
	let rows = [("ada", 10, 12), ("grace", 9, 14), ("edsger", 11, 8)];

	// Composable-container variant
	let mut header = Container::new("div", "header", "", "");
	header
		.add_data_string("player")
		.add_data_string("round 1")
		.add_data_string("round 2")
		.add_data_string("total");

	let mut body = Container::new("div", "body", "", "");
	let mut first_total = 0;
	let mut second_total = 0;
	for (name, first, second) in rows {
		body.add_data_string(name)
			.add_data_string(first.to_string())
			.add_data_string(second.to_string())
			.add_data_string((first + second).to_string())
			.commit_row();
		first_total += first;
		second_total += second;
	}

	let mut footer = Container::new("div", "footer", "", "");
	footer.add_data_array(json!([[
		"",
		first_total,
		second_total,
		first_total + second_total
	]]))?;

	let table = Container::new("div", "table", "", "");
	println!(
		"{}",
		table.wrapper(&[
			Section::header(header),
			Section::body(body),
			Section::footer(footer)
		])
	);

	// Settings-object variant with positional counters on rows and columns
	let mut builder = TableBuilder::new();
	builder.replace_settings(RowSettings::new("div", "row", "", true));
	builder.replace_settings(CellSettings::new("div", "cell", "", false));
	builder.replace_settings(ColSettings::new(true));
	for (name, first, second) in rows {
		builder.add_data(json!([name, first, second]));
	}
	println!("{builder}");

	Ok(())
}
