use crate::{
    builder::{LineKind, LoadReport},
    context::Context,
    misc::log::targets::{self},
    structures::{node::Node, variable},
    types::err::{ErrorKind, RuleError, ValidationError},
};

impl Context {
    /// Loads a sequence of categorized lines into the context.
    ///
    /// The pass is all-or-nothing: the first error aborts the load.
    /// See the [builder](crate::builder) module documentation for the line grammar.
    pub fn load_lines<'l>(
        &mut self,
        lines: impl IntoIterator<Item = (LineKind, &'l str)>,
    ) -> Result<LoadReport, ErrorKind> {
        let mut report = LoadReport::default();

        for (kind, content) in lines {
            match kind {
                LineKind::Comment | LineKind::Empty => continue,

                LineKind::Unknown => {
                    log::warn!(target: targets::REGISTRY, "Unknown line: {content}");
                    return Err(ErrorKind::from(ValidationError::UnknownLineKind));
                }

                LineKind::Rule => {
                    report.derivations += self.register_rule(content)?;
                    report.rules += 1;
                }

                LineKind::Fact => {
                    self.register_facts(content)?;
                    report.facts += 1;
                }

                LineKind::Query => {
                    self.register_queries(content)?;
                    report.queries += 1;
                }
            }
        }

        if report.rules == 0 {
            return Err(ErrorKind::from(ValidationError::MissingRules));
        }
        if report.facts == 0 {
            return Err(ErrorKind::from(ValidationError::MissingFacts));
        }
        if report.queries == 0 {
            return Err(ErrorKind::from(ValidationError::MissingQueries));
        }

        log::debug!(
            target: targets::REGISTRY,
            "Loaded {} rule(s) as {} derivation(s): {} node(s) over {} table entries, {} queries",
            report.rules,
            report.derivations,
            self.nodes.count(),
            self.definitions.count(),
            self.queries.count()
        );

        Ok(report)
    }

    /// Registers each variable of a fact section as known true.
    ///
    /// An empty section is permitted; it asserts nothing but satisfies the requirement that a fact section be present.
    fn register_facts(&mut self, content: &str) -> Result<(), ErrorKind> {
        let content = content.trim();

        if !content.chars().all(variable::is_variable) {
            return Err(ErrorKind::from(RuleError::InvalidCharacters));
        }

        for fact in content.chars() {
            if self.definitions.entry(fact).is_some_and(|entry| entry.is_fact()) {
                continue;
            }
            let root = self.nodes.insert(Node::resolved_leaf(fact, true));
            self.definitions.add_fact(fact, root);
        }

        Ok(())
    }

    /// Registers each variable of a query section.
    fn register_queries(&mut self, content: &str) -> Result<(), ErrorKind> {
        let content = content.trim();

        if content.is_empty() || !content.chars().all(variable::is_variable) {
            return Err(ErrorKind::from(RuleError::InvalidCharacters));
        }

        for query in content.chars() {
            self.queries.push(query)?;
        }

        Ok(())
    }
}
