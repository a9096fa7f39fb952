/// Margins applied to the root's bounding box before the intersection test.
///
/// Positive values grow the root outward (a target starts intersecting
/// before it reaches the root's edge); negative values shrink it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub fn uniform(px: f64) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }

    /// Parses a CSS-style margin shorthand: one to four `px` components,
    /// negatives allowed (`"50px"`, `"10px 20px"`, `"-10px 0px 5px 0px"`).
    ///
    /// Returns `None` for anything else, including other units.
    pub fn parse(s: &str) -> Option<Self> {
        let mut values = [0.0f64; 4];
        let mut n = 0usize;
        for part in s.split_whitespace() {
            if n == 4 {
                return None;
            }
            values[n] = parse_px(part)?;
            n += 1;
        }
        let [a, b, c, d] = values;
        match n {
            1 => Some(Self::uniform(a)),
            2 => Some(Self {
                top: a,
                right: b,
                bottom: a,
                left: b,
            }),
            3 => Some(Self {
                top: a,
                right: b,
                bottom: c,
                left: b,
            }),
            4 => Some(Self {
                top: a,
                right: b,
                bottom: c,
                left: d,
            }),
            _ => None,
        }
    }

    /// Parses like [`RootMargin::parse`], degrading to zero margins when the
    /// input is unparsable. Matches the engine's silent-tolerance contract.
    pub fn parse_or_zero(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }
}

fn parse_px(part: &str) -> Option<f64> {
    let number = part.strip_suffix("px")?;
    let value: f64 = number.parse().ok()?;
    value.is_finite().then_some(value)
}
