/*!
(The representation of) a variable.

Broadly, variables are things to which assigning a (boolean) value is of interest.

Each variable is a single uppercase ASCII letter, and uniqueness is per-letter.
There is no namespacing, so a run works over at most 26 distinct variables, and the letter itself is used to index the definition table.

# Notes
- In the literature on expert systems these are sometimes called 'facts', though here a fact is specifically a variable asserted true by a fact line.
*/

/// A variable, a single uppercase ASCII letter.
pub type Variable = char;

/// Whether `character` is usable as a [Variable].
pub fn is_variable(character: char) -> bool {
    character.is_ascii_uppercase()
}
