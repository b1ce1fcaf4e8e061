use rstest::*;
use serde_json::json;
use tabgen::{CellSettings, ColSettings, RowSettings, TableBuilder};

#[fixture]
fn two_by_two() -> TableBuilder {
	let mut table = TableBuilder::new();
	table.add_data(json!(["a", "b"]));
	table.add_data(json!(["c", "d"]));
	table
}

#[rstest]
fn test_empty_table_renders_bare_container() {
	let table = TableBuilder::new();
	assert_eq!(table.to_html(), "<div class=\"container\"></div>");
}

#[rstest]
fn test_default_rendering(two_by_two: TableBuilder) {
	assert_eq!(
		two_by_two.to_html(),
		"<div class=\"container\">\
		 <div class=\"row\"><div class=\"cell\">a</div><div class=\"cell\">b</div></div>\
		 <div class=\"row\"><div class=\"cell\">c</div><div class=\"cell\">d</div></div>\
		 </div>"
	);
}

#[rstest]
fn test_row_counter_on_three_rows() {
	let mut table = TableBuilder::new();
	for value in ["r0", "r1", "r2"] {
		table.add_data(json!([value]));
	}
	table.replace_settings(RowSettings::new("div", "row", "", true));

	assert_eq!(
		table.to_html(),
		"<div class=\"container\">\
		 <div class=\"row\" row=\"0\"><div class=\"cell\">r0</div></div>\
		 <div class=\"row\" row=\"1\"><div class=\"cell\">r1</div></div>\
		 <div class=\"row\" row=\"2\"><div class=\"cell\">r2</div></div>\
		 </div>"
	);
}

#[rstest]
fn test_cell_counter_runs_over_whole_table(mut two_by_two: TableBuilder) {
	two_by_two.replace_settings(CellSettings::new("div", "cell", "", true));
	two_by_two.replace_settings(ColSettings::new(true));

	// The cell counter never resets; the column counter restarts per row
	assert_eq!(
		two_by_two.to_html(),
		"<div class=\"container\">\
		 <div class=\"row\">\
		 <div class=\"cell\" cell=\"0\" col=\"0\">a</div>\
		 <div class=\"cell\" cell=\"1\" col=\"1\">b</div>\
		 </div>\
		 <div class=\"row\">\
		 <div class=\"cell\" cell=\"2\" col=\"0\">c</div>\
		 <div class=\"cell\" cell=\"3\" col=\"1\">d</div>\
		 </div>\
		 </div>"
	);
}

#[rstest]
fn test_counter_attribute_order_is_cell_then_col(mut two_by_two: TableBuilder) {
	two_by_two.replace_settings(CellSettings::new("div", "", "", true));
	two_by_two.replace_settings(ColSettings::new(true));

	let html = two_by_two.to_html();
	assert!(html.contains("<div cell=\"0\" col=\"0\">a</div>"));
}

#[rstest]
fn test_custom_counter_names() {
	let mut table = TableBuilder::new();
	table.add_data(json!(["x"]));

	let mut row = RowSettings::new("div", "row", "", true);
	row.set_counter_name("data-row");
	table.replace_settings(row);

	assert!(table.to_html().contains("<div class=\"row\" data-row=\"0\">"));
}

#[rstest]
fn test_replace_settings_routes_by_role(mut two_by_two: TableBuilder) {
	two_by_two.replace_settings(CellSettings::new("td", "", "", false));

	assert_eq!(two_by_two.cell_settings().tag_name(), "td");
	assert_eq!(two_by_two.row_settings().tag_name(), "div");
	assert_eq!(two_by_two.row_settings().class(), "row");
	assert!(!two_by_two.col_settings().counter_enabled());
}

#[rstest]
fn test_classic_table_markup(two_by_two: TableBuilder) {
	let mut table = two_by_two.with_tag_name("table").with_class("");
	table.replace_settings(RowSettings::new("tr", "", "", false));
	table.replace_settings(CellSettings::new("td", "", "", false));

	assert_eq!(
		table.to_html(),
		"<table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>"
	);
}

#[rstest]
fn test_outer_setters_replace() {
	let mut table = TableBuilder::new();
	table.set_class("first");
	table.set_class("second");
	table.set_style("width:50%");
	table.set_style("width:100%");

	assert_eq!(
		table.to_html(),
		"<div class=\"second\" style=\"width:100%\"></div>"
	);
}

#[rstest]
fn test_builder_configuration_chain() {
	let table = TableBuilder::new()
		.with_tag_name("section")
		.with_class("grid")
		.with_style("display:grid");

	assert_eq!(
		table.to_html(),
		"<section class=\"grid\" style=\"display:grid\"></section>"
	);
}

#[rstest]
fn test_row_settings_style_emission() {
	let mut table = TableBuilder::new();
	table.add_data(json!(["x"]));
	table.replace_settings(RowSettings::new("div", "", "color:blue", false));

	assert!(table.to_html().contains("<div style=\"color:blue\">"));
}
