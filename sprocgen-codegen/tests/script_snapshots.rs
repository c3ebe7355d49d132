//! Snapshot and property tests for generated procedure scripts.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use sprocgen_codegen::{
    GeneratorOptions, ScriptGenerator, SkipReason,
    generator::SectionOutcome,
    testing::{logs, memberships, sequence, users},
};
use sprocgen_core::{ColumnDescriptor, ProcedureKind};

fn generate(table: &sprocgen_core::Table) -> String {
    ScriptGenerator::default().generate_table(table).into_string()
}

/// Slice of the script between one section header and the next.
fn section<'a>(script: &'a str, kind: ProcedureKind) -> &'a str {
    let header = format!("----- {}\n", kind.label());
    let start = script.find(&header).expect("section header") + header.len();
    let rest = &script[start..];
    match rest.find("----- ") {
        Some(end) => &rest[..end],
        None => rest,
    }
}

#[test]
fn test_users_script() {
    insta::assert_snapshot!(generate(&users()), @r"
    ----- TABLE: users
    ----- INSERT
    CREATE PROCEDURE usp_users_insert (IN _name VARCHAR(255))
    BEGIN
        INSERT INTO users (name)
        VALUES(:_name);
    END;

    ----- UPDATE
    CREATE PROCEDURE usp_users_update (IN _name VARCHAR(255))
    BEGIN
        UPDATE users
        SET name = :_name
        WHERE id = :_id;
    END;

    ----- DELETE
    CREATE PROCEDURE usp_users_delete (IN _id INT)
    BEGIN
        DELETE FROM users
        WHERE id = :_id;
    END;
    ");
}

#[test]
fn test_logs_script_without_primary_key() {
    insta::assert_snapshot!(generate(&logs()), @r"
    ----- TABLE: logs
    ----- INSERT
    CREATE PROCEDURE usp_logs_insert (IN _created_at DATETIME, IN _message TEXT)
    BEGIN
        INSERT INTO logs (created_at, message)
        VALUES(:_created_at, :_message);
    END;

    ----- UPDATE
    -- table should have a primary key

    ----- DELETE
    -- table should have a primary key
    ");
}

#[test]
fn test_keyed_table_has_three_procedures() {
    for table in [users(), memberships()] {
        let script = generate(&table);
        for kind in ProcedureKind::ALL {
            let header = format!("CREATE PROCEDURE {} (", kind.procedure_name(&table.name));
            assert_eq!(script.matches(&header).count(), 1, "{}", header);
        }
        assert_eq!(script.matches("CREATE PROCEDURE").count(), 3);
    }
}

#[test]
fn test_unkeyed_table_insert_unaffected() {
    let script = generate(&logs());
    assert!(section(&script, ProcedureKind::Insert).starts_with("CREATE PROCEDURE usp_logs_insert"));
    for kind in [ProcedureKind::Update, ProcedureKind::Delete] {
        let body = section(&script, kind);
        assert!(body.contains("table should have a primary key"));
        assert!(!body.contains("CREATE PROCEDURE"));
    }
}

#[test]
fn test_auto_increment_excluded_from_writes_but_kept_in_where() {
    let script = generate(&users());

    let insert = section(&script, ProcedureKind::Insert);
    assert!(!insert.contains("_id"));
    assert!(insert.contains("INSERT INTO users (name)"));

    let update = section(&script, ProcedureKind::Update);
    assert!(update.contains("SET name = :_name\n"));
    assert!(!update.contains("IN _id"));
    assert!(update.contains("WHERE id = :_id;"));

    let delete = section(&script, ProcedureKind::Delete);
    assert!(delete.contains("(IN _id INT)"));
}

#[test]
fn test_column_order_preserved() {
    let script = generate(&memberships());
    let insert = section(&script, ProcedureKind::Insert);

    assert!(insert.contains(
        "(IN _tenant_id INT, IN _user_id INT, IN _role VARCHAR(32), IN _joined_at DATETIME)"
    ));
    assert!(insert.contains("INSERT INTO memberships (tenant_id, user_id, role, joined_at)"));
    assert!(insert.contains("VALUES(:_tenant_id, :_user_id, :_role, :_joined_at);"));

    let delete = section(&script, ProcedureKind::Delete);
    assert!(delete.contains("WHERE tenant_id = :_tenant_id AND user_id = :_user_id;"));
}

#[test]
fn test_generation_is_deterministic() {
    let generator = ScriptGenerator::default();
    let first = generator.generate_table(&memberships());
    let second = generator.generate_table(&memberships());
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_only_auto_increment_columns() {
    let script = ScriptGenerator::default().generate_table(&sequence());

    assert_eq!(
        script.sections()[1].outcome,
        SectionOutcome::Skipped(SkipReason::NothingToUpdate)
    );
    assert!(script.as_str().contains("INSERT INTO sequence ()\n"));
    assert!(script.as_str().contains("-- table should have at least one updatable column"));
    assert!(script.as_str().contains("CREATE PROCEDURE usp_sequence_delete (IN _id BIGINT)"));
}

#[test]
fn test_custom_naming_options() {
    let generator = ScriptGenerator::new(
        GeneratorOptions::default()
            .with_param_prefix("p_")
            .with_bind_marker(""),
    );
    let script = generator.generate(
        "tags",
        &[
            ColumnDescriptor::new("id", "INT").primary_key(),
            ColumnDescriptor::new("label", "VARCHAR(64)"),
        ],
    );

    assert!(script.as_str().contains("(IN p_id INT, IN p_label VARCHAR(64))"));
    assert!(script.as_str().contains("SET id = p_id, label = p_label"));
    assert!(script.as_str().contains("WHERE id = p_id;"));
}

#[test]
fn test_distinct_columns_yield_distinct_params() {
    let options = GeneratorOptions::default();
    let table = memberships();
    let mut params: Vec<String> = table
        .columns
        .iter()
        .map(|c| options.param_name(&c.name))
        .collect();
    params.sort();
    params.dedup();
    assert_eq!(params.len(), table.columns.len());
}
