/*!
The expression compiler --- infix rule text to postfix ([Rpn]) form.

# Overview

[compile] is a shunting-yard pass over the operators `!`, `^`, `|`, and `+`, with `!` binding tightest and `+` loosest, binary operators left-associative, and parentheses adjusting grouping only.

`!` is strictly unary prefix and must be immediately followed by a variable.
Rather than placing `!` on the operator stack, the pair is emitted directly as a postfix `<VAR>!` unit, so the output satisfies the contract of [Rpn]: no parentheses, and `!` always immediately preceded by its single operand.

[is_valid_rpn] re-walks a postfix string with a synthetic stack-depth counter and accepts exactly the strings [compile] can produce.
It is the contract boundary between the compiler and the [tree builder](crate::builder): trees are built only from validated strings.

# Example

```rust
use entail::compiler::{compile, is_valid_rpn};

let rpn = compile("!A+(B|C)").unwrap();
assert_eq!(rpn.as_str(), "A!BC|+");
assert!(is_valid_rpn(rpn.as_str()));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::rpn::Rpn,
    types::err::CompileError,
};

/// The binding strength of an operator character.
///
/// `(` carries the lowest strength so a pending group never pops past its opening parenthesis.
fn precedence(operator: char) -> u8 {
    match operator {
        '!' => 4,
        '^' => 3,
        '|' => 2,
        '+' => 1,
        _ => 0,
    }
}

/// Compiles an infix expression to postfix form.
///
/// The expression must be whitespace-free; the registry strips whitespace before compiling.
pub fn compile(expression: &str) -> Result<Rpn, CompileError> {
    let characters: Vec<char> = expression.chars().collect();

    let mut output = String::with_capacity(characters.len());
    let mut stack: Vec<char> = Vec::new();

    let mut index = 0;
    while index < characters.len() {
        match characters[index] {
            variable if variable.is_ascii_uppercase() => output.push(variable),

            '!' => match characters.get(index + 1) {
                Some(variable) if variable.is_ascii_uppercase() => {
                    output.push(*variable);
                    output.push('!');
                    index += 1;
                }

                _ => return Err(CompileError::UnaryOperatorMismatch),
            },

            '(' => stack.push('('),

            ')' => {
                loop {
                    match stack.pop() {
                        Some('(') => break,
                        Some(operator) => output.push(operator),
                        None => return Err(CompileError::ParenthesisMismatch),
                    }
                }

                // A closed group is only ever followed by a binary operator, another close, or the end of the expression.
                if let Some(follower) = characters.get(index + 1) {
                    if !matches!(follower, '^' | '|' | '+' | ')') {
                        return Err(CompileError::InvalidCharacter(*follower));
                    }
                }
            }

            operator @ ('^' | '|' | '+') => {
                while stack
                    .last()
                    .is_some_and(|top| precedence(operator) <= precedence(*top))
                {
                    if let Some(top) = stack.pop() {
                        output.push(top);
                    }
                }
                stack.push(operator);
            }

            unexpected => return Err(CompileError::InvalidCharacter(unexpected)),
        }

        index += 1;
    }

    while let Some(operator) = stack.pop() {
        if operator == '(' {
            return Err(CompileError::ParenthesisMismatch);
        }
        output.push(operator);
    }

    log::trace!(target: targets::COMPILER, "Compiled {expression} to {output}");

    Ok(Rpn::new(output))
}

/// Whether a postfix string is well-formed.
///
/// The walk keeps a synthetic stack depth: a variable unit (with or without its folded `!`) nets +1, a binary operator requires depth at least two and nets −1, and a `!` detached from the variable directly before it is rejected outright.
/// The string is well-formed when the final depth is exactly one.
pub fn is_valid_rpn(rpn: &str) -> bool {
    let characters: Vec<char> = rpn.chars().collect();

    let mut depth: usize = 0;
    let mut index = 0;

    while index < characters.len() {
        match characters[index] {
            variable if variable.is_ascii_uppercase() => {
                depth += 1;
                // The folded negation contributes nothing beyond its operand.
                if characters.get(index + 1) == Some(&'!') {
                    index += 1;
                }
            }

            '^' | '|' | '+' => {
                if depth < 2 {
                    return false;
                }
                depth -= 1;
            }

            _ => return false,
        }

        index += 1;
    }

    depth == 1
}
