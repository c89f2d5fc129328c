use crate::foundation::core::Color;
use crate::foundation::error::{FiguraError, FiguraResult};
use std::collections::BTreeMap;

/// Named lookup table of literal colors.
///
/// Entries are always literals. A palette value that names another palette entry is rejected when
/// the palette is built: aliases are never chained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: BTreeMap<String, Color>,
}

impl Palette {
    /// An empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a palette from raw `name -> token` pairs in one step.
    ///
    /// Every value is resolved against an empty palette, so only `#RRGGBB` and `(R,G,B)` literals
    /// are accepted. The first failure aborts the whole build.
    pub fn from_literals<'a, I>(raw: I) -> FiguraResult<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let empty = Palette::new();
        let mut entries = BTreeMap::new();
        for (name, token) in raw {
            let color = resolve(token, &empty)?;
            entries.insert(name.clone(), color);
        }
        Ok(Self { entries })
    }

    /// Look up a palette entry by exact name.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries.get(name).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Resolve a color token: literal first, then a single palette lookup.
pub fn resolve(token: &str, palette: &Palette) -> FiguraResult<Color> {
    if let Some(c) = parse_literal(token) {
        return Ok(c);
    }
    palette
        .get(token)
        .ok_or_else(|| FiguraError::color_not_found(token))
}

/// Parse `#RRGGBB` or `(R,G,B)`; anything else is not a literal.
pub fn parse_literal(token: &str) -> Option<Color> {
    parse_hex(token).or_else(|| parse_triple(token))
}

fn parse_hex(token: &str) -> Option<Color> {
    let digits = token.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u64::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::pack(byte(0)?, byte(2)?, byte(4)?))
}

fn parse_triple(token: &str) -> Option<Color> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    let mut parts = inner.split(',');
    let mut next = || -> Option<u64> {
        let part = parts.next()?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Any digit run is a channel; values past u64 wrap like the packed result does.
        Some(part.bytes().fold(0u64, |acc, d| {
            acc.wrapping_mul(10).wrapping_add(u64::from(d - b'0'))
        }))
    };
    let (r, g, b) = (next()?, next()?, next()?);
    if parts.next().is_some() {
        return None;
    }
    Some(Color::pack(r, g, b))
}

#[cfg(test)]
#[path = "../../tests/unit/color/resolve.rs"]
mod tests;
