//! Clause assembly for each procedure kind.

use std::fmt;

use sprocgen_core::{ColumnDescriptor, ProcedureKind};

use super::GeneratorOptions;

/// Why a section was replaced by a diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Update and Delete need at least one primary-key column.
    MissingPrimaryKey,
    /// Update has a primary key but every column is autoincrement.
    NothingToUpdate,
}

impl SkipReason {
    /// The diagnostic text written into the script.
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingPrimaryKey => "table should have a primary key",
            Self::NothingToUpdate => "table should have at least one updatable column",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A clause body plus the columns bound as procedure parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause<'a> {
    pub kind: ProcedureKind,
    /// Columns that become `IN` parameters, in declaration order.
    pub params: Vec<&'a ColumnDescriptor>,
    /// Statement lines; the last one carries the terminating `;`.
    pub lines: Vec<String>,
}

impl<'a> Clause<'a> {
    /// Build the clause for `kind`, or the reason it can't be generated.
    pub fn build(
        kind: ProcedureKind,
        table: &str,
        columns: &'a [ColumnDescriptor],
        options: &GeneratorOptions,
    ) -> Result<Self, SkipReason> {
        let writable: Vec<&ColumnDescriptor> =
            columns.iter().filter(|c| c.is_writable()).collect();
        let keys: Vec<&ColumnDescriptor> = columns.iter().filter(|c| c.is_primary_key).collect();

        if kind.requires_primary_key() && keys.is_empty() {
            return Err(SkipReason::MissingPrimaryKey);
        }

        let clause = match kind {
            ProcedureKind::Insert => {
                let names: Vec<&str> = writable.iter().map(|c| c.name.as_str()).collect();
                let values: Vec<String> = writable.iter().map(|c| options.bind(&c.name)).collect();
                Self {
                    kind,
                    lines: vec![
                        format!("INSERT INTO {} ({})", table, names.join(", ")),
                        format!("VALUES({});", values.join(", ")),
                    ],
                    params: writable,
                }
            }
            ProcedureKind::Update => {
                if writable.is_empty() {
                    return Err(SkipReason::NothingToUpdate);
                }
                Self {
                    kind,
                    lines: vec![
                        format!("UPDATE {}", table),
                        format!("SET {}", assignments(&writable, options).join(", ")),
                        format!("WHERE {};", assignments(&keys, options).join(" AND ")),
                    ],
                    params: writable,
                }
            }
            ProcedureKind::Delete => Self {
                kind,
                lines: vec![
                    format!("DELETE FROM {}", table),
                    format!("WHERE {};", assignments(&keys, options).join(" AND ")),
                ],
                params: keys,
            },
        };

        Ok(clause)
    }
}

fn assignments(columns: &[&ColumnDescriptor], options: &GeneratorOptions) -> Vec<String> {
    columns.iter().map(|c| options.assignment(&c.name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id", "INT").primary_key().auto_increment(),
            ColumnDescriptor::new("name", "VARCHAR(255)").nullable(),
            ColumnDescriptor::new("email", "VARCHAR(255)"),
        ]
    }

    fn param_names(clause: &Clause<'_>) -> Vec<String> {
        clause.params.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_insert_skips_auto_increment() {
        let columns = users();
        let clause = Clause::build(
            ProcedureKind::Insert,
            "users",
            &columns,
            &GeneratorOptions::default(),
        )
        .unwrap();

        assert_eq!(
            clause.lines,
            vec![
                "INSERT INTO users (name, email)",
                "VALUES(:_name, :_email);"
            ]
        );
        assert_eq!(param_names(&clause), vec!["name", "email"]);
    }

    #[test]
    fn test_update_separates_set_and_where() {
        let columns = users();
        let clause = Clause::build(
            ProcedureKind::Update,
            "users",
            &columns,
            &GeneratorOptions::default(),
        )
        .unwrap();

        assert_eq!(
            clause.lines,
            vec![
                "UPDATE users",
                "SET name = :_name, email = :_email",
                "WHERE id = :_id;"
            ]
        );
        assert_eq!(param_names(&clause), vec!["name", "email"]);
    }

    #[test]
    fn test_delete_binds_only_keys() {
        let columns = users();
        let clause = Clause::build(
            ProcedureKind::Delete,
            "users",
            &columns,
            &GeneratorOptions::default(),
        )
        .unwrap();

        assert_eq!(clause.lines, vec!["DELETE FROM users", "WHERE id = :_id;"]);
        assert_eq!(param_names(&clause), vec!["id"]);
    }

    #[test]
    fn test_composite_key_joined_with_and() {
        let columns = vec![
            ColumnDescriptor::new("tenant_id", "INT").primary_key(),
            ColumnDescriptor::new("user_id", "INT").primary_key(),
            ColumnDescriptor::new("role", "VARCHAR(32)"),
        ];
        let clause = Clause::build(
            ProcedureKind::Delete,
            "memberships",
            &columns,
            &GeneratorOptions::default(),
        )
        .unwrap();

        assert_eq!(
            clause.lines[1],
            "WHERE tenant_id = :_tenant_id AND user_id = :_user_id;"
        );
    }

    #[test]
    fn test_missing_primary_key() {
        let columns = vec![ColumnDescriptor::new("line", "TEXT")];
        let options = GeneratorOptions::default();

        assert!(Clause::build(ProcedureKind::Insert, "logs", &columns, &options).is_ok());
        assert_eq!(
            Clause::build(ProcedureKind::Update, "logs", &columns, &options),
            Err(SkipReason::MissingPrimaryKey)
        );
        assert_eq!(
            Clause::build(ProcedureKind::Delete, "logs", &columns, &options),
            Err(SkipReason::MissingPrimaryKey)
        );
    }

    #[test]
    fn test_nothing_to_update() {
        let columns = vec![ColumnDescriptor::new("id", "INT").primary_key().auto_increment()];
        let options = GeneratorOptions::default();

        assert_eq!(
            Clause::build(ProcedureKind::Update, "counters", &columns, &options),
            Err(SkipReason::NothingToUpdate)
        );
        assert!(Clause::build(ProcedureKind::Delete, "counters", &columns, &options).is_ok());
    }

    #[test]
    fn test_skip_reason_message() {
        assert_eq!(
            SkipReason::MissingPrimaryKey.to_string(),
            "table should have a primary key"
        );
    }
}
