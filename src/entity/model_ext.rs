use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, Iterable, ModelTrait, PrimaryKeyToColumn, QueryFilter,
    UpdateMany, UpdateResult,
};

use crate::SoftDeleteTrait;

/// Soft delete operations on a single record.
///
/// Implemented for every [`ModelTrait`] model whose entity implements
/// [`SoftDeleteTrait`]. Each mutation is one partial `UPDATE` writing
/// only the soft delete column, addressed by primary key; the model held
/// by the caller is left untouched and can be re-fetched to observe the
/// new state.
#[async_trait]
pub trait SoftDeleteModelTrait: ModelTrait
where
    <Self as ModelTrait>::Entity: SoftDeleteTrait,
{
    /// Mark this record as deleted, stamping the soft delete column with
    /// the current timestamp. It disappears from
    /// [`find_active`](SoftDeleteTrait::find_active) but stays in storage.
    ///
    /// Calling this on an already soft deleted record re-stamps the
    /// column with the later instant.
    async fn soft_delete<C>(&self, db: &C) -> Result<UpdateResult, DbErr>
    where
        C: ConnectionTrait,
    {
        let update = <Self::Entity as EntityTrait>::update_many().col_expr(
            <Self::Entity as SoftDeleteTrait>::soft_delete_column(),
            <Self::Entity as SoftDeleteTrait>::soft_delete_expr(),
        );
        filter_by_primary_key(update, self).exec(db).await
    }

    /// Clear the soft delete column, making the record visible to
    /// [`find_active`](SoftDeleteTrait::find_active) again. A no-op on a
    /// record that is already active.
    async fn restore<C>(&self, db: &C) -> Result<UpdateResult, DbErr>
    where
        C: ConnectionTrait,
    {
        let update = <Self::Entity as EntityTrait>::update_many().col_expr(
            <Self::Entity as SoftDeleteTrait>::soft_delete_column(),
            <Self::Entity as SoftDeleteTrait>::restore_expr(),
        );
        filter_by_primary_key(update, self).exec(db).await
    }

    /// Physically delete the row, bypassing soft delete. Delegates to
    /// [`ActiveModelTrait::delete`] unchanged; afterwards the record is
    /// gone from every view.
    async fn hard_delete<'a, A, C>(self, db: &'a C) -> Result<DeleteResult, DbErr>
    where
        Self: IntoActiveModel<A>,
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'a,
    {
        let am: A = self.into_active_model();
        am.delete(db).await
    }
}

impl<M> SoftDeleteModelTrait for M
where
    M: ModelTrait,
    M::Entity: SoftDeleteTrait,
{
}

/// Narrow an update down to the row identified by the model's primary key.
fn filter_by_primary_key<M>(
    mut update: UpdateMany<M::Entity>,
    model: &M,
) -> UpdateMany<M::Entity>
where
    M: ModelTrait,
{
    for key in <M::Entity as EntityTrait>::PrimaryKey::iter() {
        let col = key.into_column();
        update = update.filter(col.eq(model.get(col)));
    }
    update
}
