use sea_orm::sea_query::IntoValueTuple;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, Iterable, PrimaryKeyToColumn,
    PrimaryKeyTrait, QueryFilter, Select,
};
use tracing::instrument;

use crate::SoftDeleteTrait;

/// Label for the bulk soft delete action, to be shown in place of the
/// host's physical delete action
pub const SOFT_DELETE_ACTION_LABEL: &str = "Soft delete selected";

/// The queryset an administrative listing should be built from.
///
/// This is the unfiltered view: the console must be able to show (and
/// restore) soft deleted rows, which the active-only view hides, and the
/// [`DeletedStateFilter`](crate::admin::DeletedStateFilter) states only
/// partition the row set consistently when they all start from it.
pub fn listing<E>() -> Select<E>
where
    E: SoftDeleteTrait,
{
    E::find_with_deleted()
}

/// Soft delete the selected records and return the number of rows
/// affected.
///
/// The selection is a list of primary key values, the shape an admin
/// console submits a bulk action with. Routing goes through
/// [`soft_delete_many`](SoftDeleteTrait::soft_delete_many), so rows that
/// are already soft deleted are left as they are and do not count. An
/// empty selection returns zero without touching the database.
#[instrument(level = "trace", skip_all)]
pub async fn soft_delete_selected<E, C, I>(db: &C, ids: I) -> Result<u64, DbErr>
where
    E: SoftDeleteTrait,
    C: ConnectionTrait,
    I: IntoIterator<Item = <E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    let mut selected = Condition::any();
    let mut is_empty = true;
    for id in ids {
        let mut row = Condition::all();
        let mut keys = <E as EntityTrait>::PrimaryKey::iter();
        for value in id.into_value_tuple() {
            if let Some(key) = keys.next() {
                row = row.add(key.into_column().eq(value));
            }
        }
        selected = selected.add(row);
        is_empty = false;
    }
    if is_empty {
        return Ok(0);
    }

    let result = E::soft_delete_many().filter(selected).exec(db).await?;
    tracing::debug!(
        rows_affected = result.rows_affected,
        "soft deleted selected records"
    );
    Ok(result.rows_affected)
}

/// Operator-facing report for the action's outcome
pub fn soft_delete_report(rows_affected: u64) -> String {
    format!("Soft deleted {rows_affected} record(s)")
}

#[cfg(test)]
mod tests {
    use super::{soft_delete_report, soft_delete_selected};
    use crate::tests_cfg::post;
    use pretty_assertions::assert_eq;
    use sea_orm::{DbBackend, DbErr, MockDatabase, MockExecResult, Transaction};

    #[smol_potat::test]
    async fn soft_deletes_the_selection() -> Result<(), DbErr> {
        let db = MockDatabase::new(DbBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        let rows_affected = soft_delete_selected::<post::Entity, _, _>(&db, vec![1, 2, 3]).await?;
        assert_eq!(rows_affected, 3);
        assert_eq!(soft_delete_report(rows_affected), "Soft deleted 3 record(s)");

        assert_eq!(
            db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DbBackend::Postgres,
                [
                    r#"UPDATE "post" SET "deleted_at" = CURRENT_TIMESTAMP"#,
                    r#"WHERE "post"."deleted_at" IS NULL"#,
                    r#"AND ("post"."id" = $1 OR "post"."id" = $2 OR "post"."id" = $3)"#,
                ]
                .join(" ")
                .as_str(),
                vec![1i32.into(), 2i32.into(), 3i32.into()],
            )]
        );

        Ok(())
    }

    #[smol_potat::test]
    async fn empty_selection_is_a_noop() -> Result<(), DbErr> {
        let db = MockDatabase::new(DbBackend::Postgres).into_connection();

        let rows_affected = soft_delete_selected::<post::Entity, _, _>(&db, vec![]).await?;
        assert_eq!(rows_affected, 0);

        assert_eq!(db.into_transaction_log(), vec![]);

        Ok(())
    }
}
