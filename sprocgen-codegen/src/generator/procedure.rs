//! Stored-procedure wrapper around a clause.

use super::{GeneratorOptions, clause::Clause};
use crate::builder::{CodeFragment, Renderable};

/// A `CREATE PROCEDURE ... BEGIN ... END;` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProcedure {
    pub name: String,
    /// `(parameter name, SQL type)` pairs in declaration order.
    pub params: Vec<(String, String)>,
    pub body: Vec<String>,
}

impl StoredProcedure {
    pub fn from_clause(table: &str, clause: Clause<'_>, options: &GeneratorOptions) -> Self {
        Self {
            name: clause.kind.procedure_name(table),
            params: clause
                .params
                .iter()
                .map(|c| (options.param_name(&c.name), c.sql_type.clone()))
                .collect(),
            body: clause.lines,
        }
    }

    /// `IN _a INT, IN _b TEXT`
    pub fn param_list(&self) -> String {
        self.params
            .iter()
            .map(|(name, ty)| format!("IN {} {}", name, ty))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn header(&self) -> String {
        format!("CREATE PROCEDURE {} ({})", self.name, self.param_list())
    }
}

impl Renderable for StoredProcedure {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(self.header()),
            CodeFragment::block(
                "BEGIN",
                self.body.iter().map(CodeFragment::line).collect(),
                Some("END;".to_string()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use sprocgen_core::{ColumnDescriptor, ProcedureKind};

    use super::*;
    use crate::builder::{CodeBuilder, Indent};

    #[test]
    fn test_render_procedure() {
        let columns = vec![
            ColumnDescriptor::new("id", "INT").primary_key(),
            ColumnDescriptor::new("label", "VARCHAR(64)"),
        ];
        let options = GeneratorOptions::default();
        let clause = Clause::build(ProcedureKind::Delete, "tags", &columns, &options).unwrap();
        let procedure = StoredProcedure::from_clause("tags", clause, &options);

        let mut builder = CodeBuilder::new(Indent::SQL);
        builder.emit(&procedure);

        assert_eq!(
            builder.build(),
            "CREATE PROCEDURE usp_tags_delete (IN _id INT)\n\
             BEGIN\n    \
             DELETE FROM tags\n    \
             WHERE id = :_id;\n\
             END;\n"
        );
    }

    #[test]
    fn test_empty_param_list() {
        let procedure = StoredProcedure {
            name: "usp_t_insert".to_string(),
            params: Vec::new(),
            body: vec!["INSERT INTO t () VALUES();".to_string()],
        };
        assert_eq!(procedure.header(), "CREATE PROCEDURE usp_t_insert ()");
    }
}
