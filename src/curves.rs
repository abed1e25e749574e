//! Elliptic-curve preference lists.

use tracing::debug;

use crate::error::CurveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Curve {
    /// TLS NamedGroup id.
    pub id: u16,
    pub name: &'static str,
    pub alias: &'static str,
}

pub const CURVES: &[Curve] = &[
    Curve {
        id: 23,
        name: "P-256",
        alias: "prime256v1",
    },
    Curve {
        id: 24,
        name: "P-384",
        alias: "secp384r1",
    },
    Curve {
        id: 25,
        name: "P-521",
        alias: "secp521r1",
    },
    Curve {
        id: 29,
        name: "X25519",
        alias: "x25519",
    },
];

const CURVE_SEPARATOR: char = ':';

pub fn curve_by_id(id: u16) -> Option<&'static Curve> {
    CURVES.iter().find(|curve| curve.id == id)
}

/// Looks up a curve by its name or alias. Names are case-sensitive.
pub fn curve_by_name(name: &str) -> Option<&'static Curve> {
    CURVES
        .iter()
        .find(|curve| curve.name == name || curve.alias == name)
}

/// Parses a colon-separated curve list into NamedGroup ids, in order.
/// Repeated curves are kept.
pub fn parse_curves_list(list: &str) -> Result<Vec<u16>, CurveError> {
    if list.is_empty() {
        return Err(CurveError::malformed(list));
    }

    let mut ids = Vec::new();
    for name in list.split(CURVE_SEPARATOR) {
        if name.is_empty() {
            return Err(CurveError::malformed(list));
        }
        let curve = curve_by_name(name).ok_or_else(|| CurveError::unknown_curve(name))?;
        ids.push(curve.id);
    }

    debug!(count = ids.len(), "parsed curves list");
    Ok(ids)
}
