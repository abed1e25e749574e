use tracing::{debug, trace};

use super::operators::{
    is_atom_char, is_item_separator, RuleOp, AND_JOINER, DIRECTIVE_PREFIX, GROUP_CLOSE,
    GROUP_OPEN, GROUP_SEPARATOR, STRENGTH_DIRECTIVE,
};
use super::RuleItem;
use crate::error::ParseError;

/// Parses a cipher rule string into its items, in input order.
pub fn parse_rules(rule: &str) -> Result<Vec<RuleItem>, ParseError> {
    let mut items = Vec::new();
    let mut has_group = false;
    let mut has_special = false;

    for (offset, text) in split_items(rule) {
        let item = parse_item(text, offset)?;
        trace!(offset, item = ?item, "parsed rule item");

        has_group |= matches!(item, RuleItem::Group(_));
        has_special |= item.is_special();
        items.push(item);
    }

    if has_group && has_special {
        return Err(ParseError::GroupWithOperators);
    }

    debug!(count = items.len(), "parsed cipher rule");
    Ok(items)
}

/// Splits on item separators, dropping empty items. Yields each item with its
/// byte offset into the rule.
fn split_items(rule: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut items = Vec::new();
    let mut start = 0;
    for (i, c) in rule.char_indices() {
        if is_item_separator(c) {
            if i > start {
                items.push((start, &rule[start..i]));
            }
            start = i + c.len_utf8();
        }
    }
    if start < rule.len() {
        items.push((start, &rule[start..]));
    }
    items.into_iter()
}

fn parse_item(text: &str, offset: usize) -> Result<RuleItem, ParseError> {
    let Some(first) = text.chars().next() else {
        return Err(ParseError::missing_selector(' ', offset));
    };

    if first == GROUP_OPEN {
        return parse_group(text, offset).map(RuleItem::Group);
    }

    if first == DIRECTIVE_PREFIX {
        let directive = &text[1..];
        if directive == STRENGTH_DIRECTIVE {
            return Ok(RuleItem::Strength);
        }
        return Err(ParseError::unknown_directive(directive, offset));
    }

    if let Some(op) = RuleOp::parse(first) {
        let rest = &text[1..];
        if rest.is_empty() {
            return Err(ParseError::missing_selector(first, offset));
        }
        return parse_compound(rest, offset + 1).map(|atoms| op.with_atoms(atoms));
    }

    if is_atom_char(first) {
        return parse_compound(text, offset).map(RuleItem::Select);
    }

    if first == GROUP_CLOSE {
        return Err(ParseError::unbalanced_bracket(offset));
    }

    Err(ParseError::invalid_command(first, offset))
}

fn parse_compound(text: &str, offset: usize) -> Result<Vec<String>, ParseError> {
    let mut atoms = Vec::new();
    let mut start = 0;

    for (i, c) in text.char_indices() {
        if c == AND_JOINER {
            if i == start {
                return Err(ParseError::missing_selector(c, offset + i));
            }
            atoms.push(text[start..i].to_string());
            start = i + 1;
            continue;
        }
        if is_atom_char(c) {
            continue;
        }
        return Err(match c {
            GROUP_OPEN | GROUP_CLOSE => ParseError::unbalanced_bracket(offset + i),
            _ => ParseError::invalid_character(c, offset + i),
        });
    }

    if start == text.len() {
        return Err(ParseError::missing_selector(AND_JOINER, offset + text.len()));
    }
    atoms.push(text[start..].to_string());
    Ok(atoms)
}

fn parse_group(text: &str, offset: usize) -> Result<Vec<String>, ParseError> {
    let body = &text[1..];
    let close = match body.find([GROUP_OPEN, GROUP_CLOSE]) {
        Some(i) if body[i..].starts_with(GROUP_OPEN) => {
            return Err(ParseError::NestedBracket {
                offset: offset + 1 + i,
            });
        }
        Some(i) => i,
        None => return Err(ParseError::unbalanced_bracket(offset)),
    };

    if close + 1 != body.len() {
        return Err(ParseError::unbalanced_bracket(offset + 1 + close + 1));
    }

    let mut names = Vec::new();
    let mut name_offset = offset + 1;
    for name in body[..close].split(GROUP_SEPARATOR) {
        check_group_name(name, name_offset)?;
        names.push(name.to_string());
        name_offset += name.len() + 1;
    }
    Ok(names)
}

fn check_group_name(name: &str, offset: usize) -> Result<(), ParseError> {
    let Some(first) = name.chars().next() else {
        return Err(ParseError::EmptyGroup { offset });
    };
    if RuleOp::parse(first).is_some() {
        return Err(ParseError::operator_in_group(first, offset));
    }

    for (i, c) in name.char_indices() {
        if c == AND_JOINER || c == '!' || c == DIRECTIVE_PREFIX {
            return Err(ParseError::operator_in_group(c, offset + i));
        }
        if !is_atom_char(c) {
            return Err(ParseError::invalid_character(c, offset + i));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_single_select() {
        let items = parse_rules("ALL").unwrap();
        assert_eq!(items, vec![RuleItem::Select(atoms(&["ALL"]))]);
    }

    #[test]
    fn test_parse_operators() {
        let items = parse_rules("ALL:+aRSA:-kDHE:!eNULL").unwrap();
        assert_eq!(
            items,
            vec![
                RuleItem::Select(atoms(&["ALL"])),
                RuleItem::Add(atoms(&["aRSA"])),
                RuleItem::Remove(atoms(&["kDHE"])),
                RuleItem::Delete(atoms(&["eNULL"])),
            ]
        );
    }

    #[test]
    fn test_interior_plus_joins_atoms() {
        let items = parse_rules("kRSA+AESGCM+AES128").unwrap();
        assert_eq!(
            items,
            vec![RuleItem::Select(atoms(&["kRSA", "AESGCM", "AES128"]))]
        );

        let items = parse_rules("+aRSA+AES").unwrap();
        assert_eq!(items, vec![RuleItem::Add(atoms(&["aRSA", "AES"]))]);
    }

    #[test]
    fn test_strength_directive() {
        let items = parse_rules("kECDHE:@STRENGTH").unwrap();
        assert_eq!(items[1], RuleItem::Strength);
    }

    #[test]
    fn test_parse_group() {
        let items = parse_rules("[AES128-SHA|AES256-SHA]:DES-CBC3-SHA").unwrap();
        assert_eq!(
            items,
            vec![
                RuleItem::Group(atoms(&["AES128-SHA", "AES256-SHA"])),
                RuleItem::Select(atoms(&["DES-CBC3-SHA"])),
            ]
        );
    }

    #[test]
    fn test_alternate_separators_and_empty_items() {
        let items = parse_rules("ALL, !eNULL;;-kRSA  ").unwrap();
        assert_eq!(items.len(), 3);
        assert!(parse_rules("").unwrap().is_empty());
        assert!(parse_rules(":::").unwrap().is_empty());
    }

    #[test]
    fn test_missing_selector() {
        assert_eq!(
            parse_rules("+"),
            Err(ParseError::missing_selector('+', 0))
        );
        assert_eq!(
            parse_rules("ALL:!"),
            Err(ParseError::missing_selector('!', 4))
        );
        assert!(matches!(
            parse_rules("RSA+"),
            Err(ParseError::MissingSelector { .. })
        ));
        assert!(matches!(
            parse_rules("RSA++AES"),
            Err(ParseError::MissingSelector { .. })
        ));
    }

    #[test]
    fn test_unknown_directive() {
        assert_eq!(
            parse_rules("@BOGUS"),
            Err(ParseError::unknown_directive("BOGUS", 0))
        );
        assert!(matches!(
            parse_rules("@STRENGTH+RSA"),
            Err(ParseError::UnknownDirective { .. })
        ));
    }

    #[test]
    fn test_invalid_command() {
        assert_eq!(
            parse_rules("?BAR"),
            Err(ParseError::invalid_command('?', 0))
        );
    }

    #[test]
    fn test_invalid_character_in_atom() {
        assert_eq!(
            parse_rules("AES|RSA"),
            Err(ParseError::invalid_character('|', 3))
        );
    }

    #[test]
    fn test_bracket_errors() {
        assert!(matches!(
            parse_rules("[ECDHE-RSA-CHACHA20-POLY1305|ECDHE-RSA-AES128-GCM-SHA256"),
            Err(ParseError::UnbalancedBracket { .. })
        ));
        assert!(matches!(
            parse_rules("RSA]"),
            Err(ParseError::UnbalancedBracket { offset: 3 })
        ));
        assert!(matches!(
            parse_rules("[[RSA]]"),
            Err(ParseError::NestedBracket { offset: 1 })
        ));
        assert!(matches!(
            parse_rules("[RSA]]"),
            Err(ParseError::UnbalancedBracket { .. })
        ));
        assert!(matches!(
            parse_rules("[]"),
            Err(ParseError::EmptyGroup { .. })
        ));
        assert!(matches!(
            parse_rules("[RSA||AES]"),
            Err(ParseError::EmptyGroup { offset: 5 })
        ));
    }

    #[test]
    fn test_operator_in_group() {
        assert_eq!(
            parse_rules("[+RSA]"),
            Err(ParseError::operator_in_group('+', 1))
        );
        assert!(matches!(
            parse_rules("[RSA|-AES]"),
            Err(ParseError::OperatorInGroup { operator: '-', .. })
        ));
        assert!(matches!(
            parse_rules("[RSA+AES]"),
            Err(ParseError::OperatorInGroup { operator: '+', .. })
        ));
    }

    #[test]
    fn test_groups_exclude_special_operators() {
        for rule in [
            "[AES128-SHA|AES256-SHA]:+FOO",
            "[AES128-SHA|AES256-SHA]:!FOO",
            "[AES128-SHA|AES256-SHA]:-FOO",
            "[AES128-SHA|AES256-SHA]:@STRENGTH",
            "!FOO:[AES128-SHA]",
        ] {
            assert_eq!(
                parse_rules(rule),
                Err(ParseError::GroupWithOperators),
                "{rule}"
            );
        }
    }

    #[test]
    fn test_dash_inside_name_is_not_an_operator() {
        let items = parse_rules("[ECDHE-RSA-AES128-SHA]").unwrap();
        assert_eq!(items, vec![RuleItem::Group(atoms(&["ECDHE-RSA-AES128-SHA"]))]);
    }
}
