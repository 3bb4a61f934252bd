use std::fmt;

use serde::Serialize;

/// Structural class named by the first two characters of an apgcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectClass {
    StillLife,
    Oscillator,
    Spaceship,
    Growing,
    Oversized,
    Undetermined,
}

impl ObjectClass {
    pub fn from_prefix(tag: &str) -> ObjectClass {
        match tag.get(..2) {
            Some("xs") => ObjectClass::StillLife,
            Some("xp") => ObjectClass::Oscillator,
            Some("xq") => ObjectClass::Spaceship,
            Some("yl") => ObjectClass::Growing,
            Some("ov") => ObjectClass::Oversized,
            _ => ObjectClass::Undetermined,
        }
    }
}

/// The classification tag of an object, e.g. `xs12`, `xp3`, `ov_p24` or empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Meta {
    tag: String,
}

impl Meta {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tag.is_empty()
    }

    #[inline]
    pub fn class(&self) -> ObjectClass {
        ObjectClass::from_prefix(&self.tag)
    }

    /// Still lifes have period 1 whatever follows `xs`; oscillators and spaceships read the
    /// digits after `xp`/`xq`; oversized oscillators (`ov_p<N>`) read the digits after `ov_p`.
    pub fn period(&self) -> Option<u32> {
        match self.class() {
            ObjectClass::StillLife => Some(1),
            ObjectClass::Oscillator | ObjectClass::Spaceship => leading_number(&self.tag[2..]),
            ObjectClass::Oversized => self.tag.strip_prefix("ov_p").and_then(leading_number),
            _ => None,
        }
    }

    /// Population recorded in an `xs<N>` tag.
    pub fn cell_count(&self) -> Option<u32> {
        self.tag.strip_prefix("xs").and_then(leading_number)
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

fn leading_number(s: &str) -> Option<u32> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        let class = |t: &str| Meta::new(t).class();
        assert_eq!(class("xs12"), ObjectClass::StillLife);
        assert_eq!(class("xp3"), ObjectClass::Oscillator);
        assert_eq!(class("xq4"), ObjectClass::Spaceship);
        assert_eq!(class("yl144_1_16_afb5f3db909e60548f086e22ee3353ac"), ObjectClass::Growing);
        assert_eq!(class("ov_p24"), ObjectClass::Oversized);
        assert_eq!(class("zz_REPLICATOR"), ObjectClass::Undetermined);
        assert_eq!(class("PATHOLOGICAL"), ObjectClass::Undetermined);
        assert_eq!(class(""), ObjectClass::Undetermined);
        assert_eq!(class("x"), ObjectClass::Undetermined);
    }

    #[test]
    fn periods() {
        assert_eq!(Meta::new("xs4").period(), Some(1));
        assert_eq!(Meta::new("xs").period(), Some(1));
        assert_eq!(Meta::new("xp3").period(), Some(3));
        assert_eq!(Meta::new("xp15").period(), Some(15));
        assert_eq!(Meta::new("xq4").period(), Some(4));
        assert_eq!(Meta::new("xp").period(), None);
        assert_eq!(Meta::new("ov_p24").period(), Some(24));
        assert_eq!(Meta::new("ov_s32").period(), None);
        assert_eq!(Meta::new("yl144_1_16_x").period(), None);
        assert_eq!(Meta::new("").period(), None);
    }

    #[test]
    fn cell_counts() {
        assert_eq!(Meta::new("xs12").cell_count(), Some(12));
        assert_eq!(Meta::new("xp2").cell_count(), None);
        assert_eq!(Meta::new("xs").cell_count(), None);
    }
}
