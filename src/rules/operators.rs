use super::RuleItem;

/// Separators accepted between rule items.
pub const ITEM_SEPARATORS: [char; 4] = [':', ' ', ';', ','];

/// Joins atoms into a compound within one item.
pub const AND_JOINER: char = '+';

pub const GROUP_OPEN: char = '[';
pub const GROUP_CLOSE: char = ']';
pub const GROUP_SEPARATOR: char = '|';
pub const DIRECTIVE_PREFIX: char = '@';
pub const STRENGTH_DIRECTIVE: &str = "STRENGTH";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOp {
    Select,
    Add,
    Remove,
    Delete,
}

impl RuleOp {
    /// Parses a leading operator character. Plain selection has none.
    pub fn parse(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Remove),
            '!' => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Select => None,
            Self::Add => Some('+'),
            Self::Remove => Some('-'),
            Self::Delete => Some('!'),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Delete => "delete",
        }
    }

    /// Operators that cannot appear alongside bracket groups.
    pub fn is_special(&self) -> bool {
        !matches!(self, Self::Select)
    }

    pub fn with_atoms(self, atoms: Vec<String>) -> RuleItem {
        match self {
            Self::Select => RuleItem::Select(atoms),
            Self::Add => RuleItem::Add(atoms),
            Self::Remove => RuleItem::Remove(atoms),
            Self::Delete => RuleItem::Delete(atoms),
        }
    }
}

pub fn is_item_separator(c: char) -> bool {
    ITEM_SEPARATORS.contains(&c)
}

pub fn is_atom_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '=')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operators() {
        assert_eq!(RuleOp::parse('+'), Some(RuleOp::Add));
        assert_eq!(RuleOp::parse('-'), Some(RuleOp::Remove));
        assert_eq!(RuleOp::parse('!'), Some(RuleOp::Delete));
        assert_eq!(RuleOp::parse('A'), None);
        assert_eq!(RuleOp::parse('?'), None);
    }

    #[test]
    fn test_as_char_round_trips() {
        for op in [RuleOp::Add, RuleOp::Remove, RuleOp::Delete] {
            assert_eq!(RuleOp::parse(op.as_char().unwrap()), Some(op));
        }
        assert_eq!(RuleOp::Select.as_char(), None);
    }

    #[test]
    fn test_is_special() {
        assert!(!RuleOp::Select.is_special());
        assert!(RuleOp::Add.is_special());
        assert!(RuleOp::Remove.is_special());
        assert!(RuleOp::Delete.is_special());
    }

    #[test]
    fn test_atom_chars() {
        assert!("ECDHE-RSA-AES128-GCM-SHA256".chars().all(is_atom_char));
        assert!("TLSv1.2".chars().all(is_atom_char));
        assert!(!is_atom_char('+'));
        assert!(!is_atom_char('['));
        assert!(!is_atom_char('?'));
    }

    #[test]
    fn test_separators() {
        for c in [':', ' ', ';', ','] {
            assert!(is_item_separator(c));
        }
        assert!(!is_item_separator('|'));
    }
}
