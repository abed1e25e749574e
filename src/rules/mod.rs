//! Cipher rule language: colon-separated items, each a selection with an
//! optional `+`, `-` or `!` operator, a `@STRENGTH` directive, or a bracketed
//! equal-preference group.

pub mod operators;
mod parser;

pub use operators::RuleOp;
pub use parser::parse_rules;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleItem {
    /// Activates matching suites at the end of the list.
    Select(Vec<String>),
    /// Moves matching active suites to the end of the list.
    Add(Vec<String>),
    /// Deactivates matching suites; they can be selected again later.
    Remove(Vec<String>),
    /// Permanently excludes matching suites.
    Delete(Vec<String>),
    /// Stable sort of the active suites by descending strength.
    Strength,
    /// Appends the named suites as one equal-preference group.
    Group(Vec<String>),
}

impl RuleItem {
    pub fn op(&self) -> Option<RuleOp> {
        match self {
            Self::Select(_) => Some(RuleOp::Select),
            Self::Add(_) => Some(RuleOp::Add),
            Self::Remove(_) => Some(RuleOp::Remove),
            Self::Delete(_) => Some(RuleOp::Delete),
            Self::Strength | Self::Group(_) => None,
        }
    }

    pub fn atoms(&self) -> &[String] {
        match self {
            Self::Select(atoms)
            | Self::Add(atoms)
            | Self::Remove(atoms)
            | Self::Delete(atoms)
            | Self::Group(atoms) => atoms,
            Self::Strength => &[],
        }
    }

    pub fn is_special(&self) -> bool {
        match self {
            Self::Strength => true,
            Self::Group(_) => false,
            _ => self.op().is_some_and(|op| op.is_special()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_item_op() {
        assert_eq!(RuleItem::Select(vec![]).op(), Some(RuleOp::Select));
        assert_eq!(RuleItem::Delete(vec![]).op(), Some(RuleOp::Delete));
        assert_eq!(RuleItem::Strength.op(), None);
    }

    #[test]
    fn test_rule_item_is_special() {
        assert!(!RuleItem::Select(vec!["ALL".into()]).is_special());
        assert!(RuleItem::Add(vec!["ALL".into()]).is_special());
        assert!(RuleItem::Strength.is_special());
        assert!(!RuleItem::Group(vec!["ALL".into()]).is_special());
    }

    #[test]
    fn test_rule_item_atoms() {
        let item = RuleItem::Remove(vec!["kRSA".into(), "AES".into()]);
        assert_eq!(item.atoms(), &["kRSA".to_string(), "AES".to_string()]);
        assert!(RuleItem::Strength.atoms().is_empty());
    }
}
