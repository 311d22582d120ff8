use pretty_assertions::assert_eq;

use super::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Tag {
	key: &'static str,
	name: &'static str,
	weight: u32,
}

const fn tag(key: &'static str, name: &'static str, weight: u32) -> Tag {
	Tag { key, name, weight }
}

fn tag_formatter() -> TokenFormatter<Tag> {
	TokenFormatter::new(|t: &Tag| t.key.to_string(), |t: &Tag| t.name.to_string())
}

#[test]
fn default_generators_use_display_form() {
	let formatter = TokenFormatter::<String>::default();
	let item = "TokenA".to_string();
	assert_eq!(formatter.token(&item), Token::new("TokenA", "TokenA"));
}

#[test]
fn default_order_sorts_by_label() {
	let items = [tag("c", "C", 0), tag("a", "A", 0), tag("b", "B", 0)];
	let tokens = tag_formatter().format(&items);
	assert_eq!(tokens, vec![Token::new("a", "A"), Token::new("b", "B"), Token::new("c", "C")]);
}

#[test]
fn label_order_uses_generated_label_not_id() {
	let items = [tag("1", "Zebra", 0), tag("2", "Apple", 0)];
	let tokens = tag_formatter().format(&items);
	assert_eq!(tokens, vec![Token::new("2", "Apple"), Token::new("1", "Zebra")]);
}

#[test]
fn label_order_is_stable_for_equal_labels() {
	let items = [tag("x", "Same", 0), tag("y", "Same", 0), tag("w", "Before", 0)];
	let ids: Vec<_> = tag_formatter().format(&items).into_iter().map(|t| t.id).collect();
	assert_eq!(ids, ["w", "x", "y"]);
}

#[test]
fn label_order_is_natural_string_order() {
	let formatter = TokenFormatter::<String>::default();
	let items = ["b", "B", "a", "A"].map(String::from);
	let labels: Vec<_> = formatter.format(&items).into_iter().map(|t| t.label).collect();
	assert_eq!(labels, ["A", "B", "a", "b"]);
}

#[test]
fn custom_comparator_orders_tokens() {
	let formatter = tag_formatter().with_order(ItemOrder::custom(|a: &Tag, b: &Tag| b.weight.cmp(&a.weight)));
	let items = [tag("light", "L", 1), tag("heavy", "H", 9), tag("mid", "M", 5)];
	let ids: Vec<_> = formatter.format(&items).into_iter().map(|t| t.id).collect();
	assert_eq!(ids, ["heavy", "mid", "light"]);
}

#[test]
fn unsorted_keeps_encounter_order() {
	let formatter = tag_formatter().with_order(ItemOrder::Unsorted);
	let items = [tag("c", "C", 0), tag("a", "A", 0), tag("b", "B", 0)];
	let ids: Vec<_> = formatter.format(&items).into_iter().map(|t| t.id).collect();
	assert_eq!(ids, ["c", "a", "b"]);
}

#[test]
fn label_generator_change_affects_order() {
	let mut formatter = tag_formatter();
	formatter.set_label_generator(|t: &Tag| format!("{:03}", 100 - t.weight));
	let items = [tag("a", "A", 1), tag("b", "B", 2)];
	let ids: Vec<_> = formatter.format(&items).into_iter().map(|t| t.id).collect();
	assert_eq!(ids, ["b", "a"]);
}

#[test]
fn sort_returns_references_in_order() {
	let formatter = TokenFormatter::<String>::default();
	let items = ["b", "a"].map(String::from);
	let sorted = formatter.sort(&items);
	assert_eq!(sorted.first().map(|s| s.as_str()), Some("a"));
	assert_eq!(sorted.len(), 2);
	assert!(matches!(formatter.order(), ItemOrder::ByLabel));
}
