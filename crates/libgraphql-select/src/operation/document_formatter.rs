use crate::operation::OperationKind;
use crate::selection::Argument;
use crate::selection::Directive;
use crate::selection::FieldSelection;
use crate::selection::Selection;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Variables hoisted out of a document: name -> (value, GraphQL input type).
pub type VariableMap = IndexMap<String, (Value, String)>;

/// Writes [`Selection`] trees as GraphQL document text, accumulating the
/// variables hoisted along the way.
///
/// A single formatter should be used per operation so that variable names
/// stay unique across the whole document.
#[derive(Clone, Debug)]
pub struct DocumentFormatter {
    drop_null_input_values: bool,
    use_variables: bool,
    variables: VariableMap,
}
impl DocumentFormatter {
    pub fn new(use_variables: bool, drop_null_input_values: bool) -> Self {
        Self {
            drop_null_input_values,
            use_variables,
            variables: IndexMap::new(),
        }
    }

    /// Seed the formatter with previously hoisted variables. Newly minted
    /// variable names will not collide with these.
    pub fn with_variables(mut self, variables: VariableMap) -> Self {
        self.variables = variables;
        self
    }

    pub fn variables(&self) -> &VariableMap {
        &self.variables
    }

    pub fn into_variables(self) -> VariableMap {
        self.variables
    }

    /// Write a full operation:
    /// `<keyword>[ <name>][(<$var: Type>,...)]{<selections>}`.
    pub fn format_operation(
        mut self,
        kind: OperationKind,
        name: Option<&str>,
        selections: &[Selection],
    ) -> (String, VariableMap) {
        let fields = self.format_selection_set(selections);

        let mut document = kind.keyword().to_string();
        if let Some(name) = name {
            document.push(' ');
            document.push_str(name);
        }
        if !self.variables.is_empty() {
            let var_defs =
                self.variables.iter()
                    .map(|(var_name, (_, type_name))| format!("${var_name}: {type_name}"))
                    .collect::<Vec<_>>()
                    .join(",");
            document.push('(');
            document.push_str(&var_defs);
            document.push(')');
        }
        document.push('{');
        document.push_str(&fields);
        document.push('}');

        (document, self.into_variables())
    }

    /// Write the body of a selection set (without the surrounding braces).
    ///
    /// Sibling fields that share an effective name are emitted under
    /// `<effective name><identity>` aliases so the response keeps them apart.
    pub fn format_selection_set(&mut self, selections: &[Selection]) -> String {
        let mut name_counts = HashMap::<&str, usize>::new();
        for selection in selections {
            if let Selection::Field(field) = selection {
                *name_counts.entry(field.selected_name()).or_default() += 1;
            }
        }

        let mut formatted = Vec::with_capacity(selections.len());
        for selection in selections {
            formatted.push(match selection {
                Selection::Field(field) => {
                    let collides =
                        name_counts.get(field.selected_name())
                            .is_some_and(|count| *count > 1);
                    self.format_field(field, collides)
                },

                Selection::InlineFragment(fragment) => format!(
                    "... on {}{{{}}}",
                    fragment.on_type(),
                    self.format_selection_set(fragment.selection_set()),
                ),
            });
        }
        formatted.join(" ")
    }

    fn format_field(&mut self, field: &FieldSelection, collides: bool) -> String {
        let mut out = String::new();

        if collides {
            out.push_str(field.selected_name());
            out.push_str(&field.identity().to_string());
            out.push(':');
        } else if let Some(alias) = field.alias() {
            out.push_str(alias);
            out.push(':');
        }

        out.push_str(field.name());
        out.push_str(&self.format_arguments(field.arguments()));

        if !field.directives().is_empty() {
            let directives =
                field.directives().iter()
                    .map(|directive| self.format_directive(directive))
                    .collect::<Vec<_>>()
                    .join(" ");
            out.push(' ');
            out.push_str(&directives);
        }

        if !field.selection_set().is_empty() {
            let sub_selections = self.format_selection_set(field.selection_set());
            out.push('{');
            out.push_str(&sub_selections);
            out.push('}');
        }

        out
    }

    fn format_directive(&mut self, directive: &Directive) -> String {
        format!(
            "@{}{}",
            directive.name(),
            self.format_arguments(directive.arguments()),
        )
    }

    fn format_arguments(&mut self, arguments: &[Argument]) -> String {
        if arguments.is_empty() {
            return String::new();
        }
        let formatted =
            arguments.iter()
                .map(|argument| self.format_argument(argument))
                .collect::<Vec<_>>()
                .join(",");
        format!("({formatted})")
    }

    fn format_argument(&mut self, argument: &Argument) -> String {
        let value =
            if self.drop_null_input_values {
                argument.value().without_null_fields()
            } else {
                argument.value().to_owned()
            };

        if self.use_variables {
            let var_name = self.hoist_variable(
                argument.name(),
                value,
                argument.type_name(),
            );
            format!("{}:${var_name}", argument.name())
        } else {
            format!("{}:{}", argument.name(), value.to_graphql_literal())
        }
    }

    /// Record `value` under a variable name derived from `base_name`
    /// (`base_name`, `base_name1`, `base_name2`, ...). An existing variable
    /// holding the identical value and type is reused.
    fn hoist_variable(
        &mut self,
        base_name: &str,
        value: Value,
        type_name: &str,
    ) -> String {
        let mut index = 0usize;
        loop {
            let candidate =
                if index == 0 {
                    base_name.to_string()
                } else {
                    format!("{base_name}{index}")
                };

            match self.variables.get(&candidate) {
                None => {
                    self.variables.insert(
                        candidate.to_owned(),
                        (value, type_name.to_string()),
                    );
                    return candidate;
                },
                Some((existing_value, existing_type))
                    if *existing_value == value && existing_type == type_name
                    => return candidate,
                Some(_) => index += 1,
            }
        }
    }
}
