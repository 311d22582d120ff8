use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;
use crate::view::RecordingView;

const SAMPLE: &str = r#"
label = "Tags"
token_separator = ","
order = "unsorted"
items = ["rust", "java", "kotlin"]
selected = ["kotlin", "cobol"]
allow_new_items = true
"#;

#[test]
fn parse_full_settings() {
	let settings = FieldSettings::parse(SAMPLE).unwrap();
	assert_eq!(settings.label, "Tags");
	assert_eq!(settings.token_separator.as_char(), ',');
	assert_eq!(settings.order, OrderSetting::Unsorted);
	assert_eq!(settings.items, ["rust", "java", "kotlin"]);
	assert!(settings.allow_new_items);
}

#[test]
fn empty_settings_use_defaults() {
	let settings = FieldSettings::parse("").unwrap();
	assert_eq!(settings, FieldSettings::default());
	assert_eq!(settings.token_separator, TokenSeparator::SPACE);
	assert_eq!(settings.order, OrderSetting::Label);
}

#[test]
fn invalid_separator_is_rejected() {
	let err = FieldSettings::parse(r#"token_separator = "ab""#).unwrap_err();
	assert!(matches!(err, FieldError::Settings(_)), "{err}");
}

#[test]
fn unknown_keys_are_rejected() {
	assert!(FieldSettings::parse("colour = 1").is_err());
}

#[test]
fn build_applies_settings() {
	let settings = FieldSettings::parse(SAMPLE).unwrap();
	let field = settings.build(RecordingView::default());

	assert_eq!(field.label(), "Tags");
	assert_eq!(field.view().label, "Tags");
	assert_eq!(field.view().token_separator, Some(','));
	assert_eq!(field.view().item_ids(), ["rust", "java", "kotlin"]);
	assert_eq!(field.view().token_ids(), ["kotlin"]);
	assert!(field.has_new_item_handler());
}

#[test]
fn built_field_registers_and_selects_typed_tokens() {
	let settings = FieldSettings::parse(SAMPLE).unwrap();
	let mut field = settings.build(RecordingView::default());
	field.on_token_added("zig");

	assert!(field.resolve("zig").is_some());
	assert_eq!(field.view().token_ids(), ["kotlin", "zig"]);
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(SAMPLE.as_bytes()).unwrap();

	let settings = FieldSettings::load(file.path()).unwrap();
	assert_eq!(settings.label, "Tags");
}

#[test]
fn load_reports_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");
	let err = FieldSettings::load(&path).unwrap_err();
	assert!(matches!(err, FieldError::Io { path: p, .. } if p == path));
}
