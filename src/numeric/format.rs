// ============================================================================
// Fraction Formatting
// Configuration for rendering fractions as text
// ============================================================================

use super::fraction::Fraction;
use std::fmt;

/// Controls how a [`Fraction`] is rendered.
///
/// The default is the canonical form used by `Display`: `(N)` for a
/// denominator of 1 and `(N/D)` otherwise. The denominator is printed as
/// stored, without reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Wrap the output in parentheses
    pub parenthesize: bool,

    /// Character between numerator and denominator
    pub separator: char,

    /// Print the denominator even when it is 1
    pub show_unit_denominator: bool,
}

impl FormatConfig {
    /// Canonical `(N)` / `(N/D)` rendering
    pub const fn canonical() -> Self {
        Self {
            parenthesize: true,
            separator: '/',
            show_unit_denominator: false,
        }
    }

    /// Bare `N` / `N/D` rendering
    pub const fn plain() -> Self {
        Self {
            parenthesize: false,
            ..Self::canonical()
        }
    }

    /// Builder method: Toggle the surrounding parentheses
    pub fn with_parentheses(mut self, parenthesize: bool) -> Self {
        self.parenthesize = parenthesize;
        self
    }

    /// Builder method: Set the numerator/denominator separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Builder method: Always print the denominator
    pub fn with_unit_denominator(mut self, show: bool) -> Self {
        self.show_unit_denominator = show;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        // A digit or sign would make the output ambiguous
        if self.separator.is_ascii_digit() || self.separator == '-' {
            return Err(format!(
                "Separator '{}' cannot be a digit or a sign",
                self.separator
            ));
        }

        if self.separator.is_whitespace() {
            return Err("Separator cannot be whitespace".to_string());
        }

        Ok(())
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

/// `Display` adapter returned by [`Fraction::display_with`] and
/// [`Fraction::try_display_with`].
pub struct FractionDisplay<'a> {
    fraction: &'a Fraction,
    config: &'a FormatConfig,
}

impl<'a> FractionDisplay<'a> {
    pub(crate) fn new(fraction: &'a Fraction, config: &'a FormatConfig) -> Self {
        Self { fraction, config }
    }
}

impl fmt::Display for FractionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        if self.config.parenthesize {
            out.push('(');
        }

        out.push_str(&self.fraction.numerator().to_string());
        if self.fraction.denominator() != 1 || self.config.show_unit_denominator {
            out.push(self.config.separator);
            out.push_str(&self.fraction.denominator().to_string());
        }

        if self.config.parenthesize {
            out.push(')');
        }

        // Honor width, fill and alignment like the native numbers do
        f.pad(&out)
    }
}
