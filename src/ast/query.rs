use crate::ast::Step;

/// Parsed query pipeline.
///
/// `Each{...}` bodies are nested `Query` values, so both the evaluator and
/// the code generator recurse over this tree instead of re-tokenizing text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Pipeline steps in execution order
    pub steps: Vec<Step>,
}

impl Query {
    pub fn new(steps: Vec<Step>) -> Self {
        Query { steps }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether any step, at any nesting depth, satisfies `pred`.
    pub fn any_step(&self, pred: &dyn Fn(&Step) -> bool) -> bool {
        self.steps.iter().any(|step| match step {
            Step::Each(inner) => pred(step) || inner.any_step(pred),
            _ => pred(step),
        })
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
