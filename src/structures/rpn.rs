/*!
The compiled, postfix form of an expression.

An [Rpn] is produced by the [compiler](crate::compiler) and contains no parentheses.
Each unary application is a two-character unit, the operand immediately followed by `!`, so `!` is always immediately preceded by the single variable it applies to.

Consumers read an [Rpn] by [units](Rpn::units) rather than by characters, so the folding of `!` is handled in one place.
*/

use crate::structures::{op::Op, variable::Variable};

/// A compiled postfix expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rpn(String);

/// A single unit of a postfix expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RpnUnit {
    /// A variable.
    Variable(Variable),

    /// A variable under negation, read from a `<VAR>!` pair.
    NegatedVariable(Variable),

    /// A binary connective.
    Operator(Op),
}

impl Rpn {
    pub(crate) fn new(compiled: String) -> Self {
        Rpn(compiled)
    }

    /// The underlying postfix string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An iterator over the units of the expression.
    pub fn units(&self) -> Units<'_> {
        Units {
            characters: self.0.chars().peekable(),
        }
    }

    /// The variables appearing in the expression, with whether each occurrence is negated, in order of appearance.
    pub fn variable_units(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.units().filter_map(|unit| match unit {
            RpnUnit::Variable(variable) => Some((variable, false)),
            RpnUnit::NegatedVariable(variable) => Some((variable, true)),
            RpnUnit::Operator(_) => None,
        })
    }
}

impl std::fmt::Display for Rpn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// See [Rpn::units].
pub struct Units<'e> {
    characters: std::iter::Peekable<std::str::Chars<'e>>,
}

impl Iterator for Units<'_> {
    type Item = RpnUnit;

    fn next(&mut self) -> Option<Self::Item> {
        let character = self.characters.next()?;

        if character.is_ascii_uppercase() {
            if self.characters.peek() == Some(&'!') {
                self.characters.next();
                return Some(RpnUnit::NegatedVariable(character));
            }
            return Some(RpnUnit::Variable(character));
        }

        // A compiled expression contains only variable units and connectives.
        Op::from_char(character).map(RpnUnit::Operator)
    }
}
