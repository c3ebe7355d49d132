//! Tables operation - list what the schema source exposes.

use eyre::{Context, Result};
use sprocgen_schema::SchemaProvider;

use super::TableFilter;
use crate::reports::TablesReport;

pub async fn tables(provider: &dyn SchemaProvider, filter: &TableFilter) -> Result<TablesReport> {
    let names = filter.apply(
        provider
            .list_tables()
            .await
            .wrap_err("can't get the list of all tables")?,
    );

    let mut report = TablesReport {
        source: provider.kind().to_string(),
        tables: Vec::with_capacity(names.len()),
    };
    for name in &names {
        let table = provider
            .table(name)
            .await
            .wrap_err_with(|| format!("can't get the list of all columns for {name} table"))?;
        report.tables.push(table);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use sprocgen_codegen::testing;
    use sprocgen_schema::SchemaFile;

    use super::*;

    #[tokio::test]
    async fn test_lists_tables_with_columns() {
        let schema = SchemaFile::from_tables([testing::users(), testing::logs()]);
        let report = tables(&schema, &TableFilter::default()).await.unwrap();

        assert_eq!(report.source, "schema-file");
        assert_eq!(report.tables, vec![testing::users(), testing::logs()]);
    }

    #[tokio::test]
    async fn test_unknown_table_fails() {
        let schema = SchemaFile::from_tables([testing::users()]);
        let filter = TableFilter::new(vec!["ghost".to_string()], Vec::new());
        let err = tables(&schema, &filter).await.unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }
}
