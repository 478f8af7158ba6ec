use sea_orm::{QueryFilter, Select};

use crate::SoftDeleteTrait;

/// Helper trait to apply a soft delete scope to a select built elsewhere,
/// e.g. an administrative listing or a relation query.
pub trait SoftDeleteSelectExt: Sized {
    /// Keep only rows that have not been soft deleted
    fn exclude_deleted(self) -> Self;

    /// Keep only rows that have been soft deleted
    fn deleted_only(self) -> Self;
}

impl<E> SoftDeleteSelectExt for Select<E>
where
    E: SoftDeleteTrait,
{
    fn exclude_deleted(self) -> Self {
        self.filter(E::active_condition())
    }

    fn deleted_only(self) -> Self {
        self.filter(E::deleted_condition())
    }
}
