use sea_orm::sea_query::{Expr, Keyword, SimpleExpr};
use sea_orm::{ColumnTrait, DeleteMany, EntityTrait, QueryFilter, Select, UpdateMany};

/// A trait for entities that support soft delete.
///
/// Rows are marked as deleted by writing a timestamp into a nullable
/// column instead of being removed from the table. `NULL` means the row
/// is active; any other value records the instant it was soft deleted.
/// The column is only ever written by the operations of this trait and
/// of [`SoftDeleteModelTrait`](crate::SoftDeleteModelTrait): soft
/// deleting stamps the database server's current time, and restoring is
/// the only operation that clears it.
pub trait SoftDeleteTrait: EntityTrait {
    /// Specify the column that carries the soft delete timestamp.
    ///
    /// The schema should declare it nullable, and indexed so the scoped
    /// views stay cheap on large tables.
    fn soft_delete_column() -> Self::Column;

    /// Mark a row as being soft deleted by filling the soft delete column
    /// with this expression (value)
    fn soft_delete_expr() -> SimpleExpr {
        Expr::current_timestamp().into()
    }

    /// Mark a row as restored by filling the soft delete column with this
    /// expression (value)
    fn restore_expr() -> SimpleExpr {
        SimpleExpr::Keyword(Keyword::Null)
    }

    /// Condition matching active rows
    fn active_condition() -> SimpleExpr {
        Self::soft_delete_column().is_null()
    }

    /// Condition matching soft deleted rows
    fn deleted_condition() -> SimpleExpr {
        Self::soft_delete_column().is_not_null()
    }

    /// Select only active rows; the default view of the table.
    ///
    /// ```
    /// use sea_orm::{DbBackend, QueryTrait};
    /// use sea_orm_soft_delete::{tests_cfg::post, SoftDeleteTrait};
    ///
    /// assert_eq!(
    ///     post::Entity::find_active().build(DbBackend::MySql).to_string(),
    ///     [
    ///         "SELECT `post`.`id`, `post`.`title`, `post`.`text`, `post`.`deleted_at`",
    ///         "FROM `post`",
    ///         "WHERE `post`.`deleted_at` IS NULL",
    ///     ]
    ///     .join(" ")
    /// );
    /// ```
    fn find_active() -> Select<Self> {
        Self::find().filter(Self::active_condition())
    }

    /// Select every row regardless of deletion state.
    ///
    /// Restore paths and administrative listings go through this view,
    /// since soft deleted rows are invisible to [`find_active`][Self::find_active].
    fn find_with_deleted() -> Select<Self> {
        Self::find()
    }

    /// Select only soft deleted rows.
    fn find_deleted() -> Select<Self> {
        Self::find().filter(Self::deleted_condition())
    }

    /// Soft delete every active row matching the filters added to the
    /// returned update; the bulk counterpart of
    /// [`SoftDeleteModelTrait::soft_delete`](crate::SoftDeleteModelTrait::soft_delete).
    ///
    /// Executing it against an empty match set is a no-op reporting zero
    /// affected rows.
    ///
    /// ```
    /// use sea_orm::{ColumnTrait, DbBackend, QueryFilter, QueryTrait};
    /// use sea_orm_soft_delete::{tests_cfg::post, SoftDeleteTrait};
    ///
    /// assert_eq!(
    ///     post::Entity::soft_delete_many()
    ///         .filter(post::Column::Title.contains("Apple"))
    ///         .build(DbBackend::MySql)
    ///         .to_string(),
    ///     [
    ///         "UPDATE `post` SET `deleted_at` = CURRENT_TIMESTAMP",
    ///         "WHERE `post`.`deleted_at` IS NULL",
    ///         "AND `post`.`title` LIKE '%Apple%'",
    ///     ]
    ///     .join(" ")
    /// );
    /// ```
    fn soft_delete_many() -> UpdateMany<Self> {
        Self::update_many()
            .col_expr(Self::soft_delete_column(), Self::soft_delete_expr())
            .filter(Self::active_condition())
    }

    /// Restore every soft deleted row matching the filters added to the
    /// returned update, clearing the soft delete column in one statement.
    fn restore_many() -> UpdateMany<Self> {
        Self::update_many()
            .col_expr(Self::soft_delete_column(), Self::restore_expr())
            .filter(Self::deleted_condition())
    }

    /// Physically delete rows; a pass-through to the unscoped
    /// [`EntityTrait::delete_many`], so soft deleted rows are reachable too.
    fn hard_delete_many() -> DeleteMany<Self> {
        Self::delete_many()
    }
}
