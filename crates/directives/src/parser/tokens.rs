//! Positional token reader for one directive instance.

use georadar_foundation::Point3;

use crate::error::{DirectiveError, DirectiveErrorKind, Result};
use crate::scene::{SnapshotTrigger, is_integer_shaped};
use crate::schema::parse_pole_count;

/// Cursor over the whitespace-split tokens of a directive instance.
///
/// Each read names the field it is filling so a conversion failure can say
/// which value was wrong. Errors always carry the full token list.
pub struct Tokens<'a> {
    directive: &'static str,
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(directive: &'static str, tokens: &'a [&'a str]) -> Self {
        Self {
            directive,
            tokens,
            pos: 0,
        }
    }

    pub fn directive(&self) -> &'static str {
        self.directive
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    pub fn error(&self, kind: DirectiveErrorKind) -> DirectiveError {
        DirectiveError::new(self.directive, self.tokens, kind)
    }

    fn next(&mut self, field: &'static str) -> Result<&'a str> {
        let token = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.error(DirectiveErrorKind::MissingValue { field }))?;
        self.pos += 1;
        Ok(token)
    }

    /// Raw string, case preserved (identifiers, file names).
    pub fn string(&mut self, field: &'static str) -> Result<String> {
        self.next(field).map(str::to_string)
    }

    /// Lower-cased string (polarisations).
    pub fn lower(&mut self, field: &'static str) -> Result<String> {
        self.next(field).map(str::to_lowercase)
    }

    pub fn float(&mut self, field: &'static str) -> Result<f64> {
        let token = self.next(field)?;
        token.parse::<f64>().map_err(|_| {
            self.error(DirectiveErrorKind::InvalidFloat {
                field,
                token: token.to_string(),
            })
        })
    }

    /// A float, or `None` spelled out in any case.
    pub fn optional_float(&mut self, field: &'static str) -> Result<Option<f64>> {
        let token = self.next(field)?;
        if token.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        token.parse::<f64>().map(Some).map_err(|_| {
            self.error(DirectiveErrorKind::InvalidFloat {
                field,
                token: token.to_string(),
            })
        })
    }

    /// Three floats forming a coordinate.
    pub fn point(&mut self, field: &'static str) -> Result<Point3> {
        Ok((self.float(field)?, self.float(field)?, self.float(field)?))
    }

    /// Leading pole count of a dispersion directive.
    pub fn pole_count(&mut self) -> Result<usize> {
        let token = self.next("pole count")?;
        parse_pole_count(token).map_err(|kind| self.error(kind))
    }

    /// Iteration count if the token is an integer, otherwise a time.
    pub fn trigger(&mut self, field: &'static str) -> Result<SnapshotTrigger> {
        let token = self.next(field)?;
        SnapshotTrigger::parse(token).ok_or_else(|| {
            let token = token.to_string();
            if is_integer_shaped(&token) {
                self.error(DirectiveErrorKind::InvalidInteger { field, token })
            } else {
                self.error(DirectiveErrorKind::InvalidFloat { field, token })
            }
        })
    }

    /// Every remaining token, consumed.
    pub fn rest(&mut self) -> Vec<String> {
        let rest = self.tokens[self.pos..]
            .iter()
            .map(|t| t.to_string())
            .collect();
        self.pos = self.tokens.len();
        rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_in_order() {
        let raw = ["Z", "0.1", "0.2", "0.3", "w1"];
        let mut tokens = Tokens::new("hertzian_dipole", &raw);
        assert_eq!(tokens.lower("polarisation").unwrap(), "z");
        assert_eq!(tokens.point("position").unwrap(), (0.1, 0.2, 0.3));
        assert_eq!(tokens.remaining(), 1);
        assert_eq!(tokens.rest(), ["w1"]);
        assert_eq!(tokens.remaining(), 0);
    }

    #[test]
    fn test_bad_float_names_field() {
        let raw = ["abc"];
        let mut tokens = Tokens::new("material", &raw);
        let err = tokens.float("permittivity").unwrap_err();
        assert_eq!(err.directive, "material");
        assert_eq!(err.tokens, ["abc"]);
        assert!(matches!(
            err.kind,
            DirectiveErrorKind::InvalidFloat { field: "permittivity", .. }
        ));
    }

    #[test]
    fn test_missing_value() {
        let raw: [&str; 0] = [];
        let mut tokens = Tokens::new("rx", &raw);
        let err = tokens.string("id").unwrap_err();
        assert!(matches!(err.kind, DirectiveErrorKind::MissingValue { field: "id" }));
    }
}
