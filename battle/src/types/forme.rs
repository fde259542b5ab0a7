//! Forme alias resolution
//!
//! Some species appear in switch events under a battle-time forme name
//! that differs from the name revealed at team preview. The alias table
//! maps those forme identities back to the base species registered in
//! the roster. Data, not control flow: new aliases are one row here.

/// How an alias row matches the incoming species name
#[derive(Debug, Clone, Copy)]
enum Pattern {
    Exact(&'static str),
    /// Matches any forme in the family, e.g. "Ogerpon-Wellspring-Tera"
    Prefix(&'static str),
}

/// (pattern, canonical base species)
const FORME_ALIASES: &[(Pattern, &str)] = &[
    (Pattern::Exact("Zamazenta-Crowned"), "Zamazenta"),
    (Pattern::Exact("Zacian-Crowned"), "Zacian"),
    (Pattern::Exact("Urshifu-Rapid-Strike"), "Urshifu"),
    (Pattern::Exact("Urshifu-Single-Strike"), "Urshifu"),
    (Pattern::Exact("Mimikyu-Busted"), "Mimikyu"),
    (Pattern::Prefix("Ogerpon-"), "Ogerpon"),
    (Pattern::Exact("Indeedee-F"), "Indeedee"),
];

/// Look up the canonical base species for a forme name, if any
pub(crate) fn canonical_species(name: &str) -> Option<&'static str> {
    FORME_ALIASES
        .iter()
        .find(|(pattern, _)| match pattern {
            Pattern::Exact(exact) => name == *exact,
            Pattern::Prefix(prefix) => name.starts_with(prefix),
        })
        .map(|(_, canonical)| *canonical)
}
