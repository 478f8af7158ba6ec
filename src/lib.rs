#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # SeaORM Soft Delete
//!
//! Soft delete support for [SeaORM](https://www.sea-ql.org/SeaORM):
//! mark rows as deleted with a nullable timestamp column instead of
//! removing them, and query around the marker with scoped selects.
//!
//! ## Opting in
//!
//! An entity opts in by implementing [`SoftDeleteTrait`], naming the
//! column that carries the deletion timestamp:
//!
//! ```
//! mod post {
//!     use sea_orm::entity::prelude::*;
//!     use sea_orm_soft_delete::SoftDeleteTrait;
//!
//!     #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
//!     #[sea_orm(table_name = "post")]
//!     pub struct Model {
//!         #[sea_orm(primary_key)]
//!         pub id: i32,
//!         pub title: String,
//!         pub deleted_at: Option<DateTime>,
//!     }
//!
//!     #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
//!     pub enum Relation {}
//!
//!     impl ActiveModelBehavior for ActiveModel {}
//!
//!     impl SoftDeleteTrait for Entity {
//!         fn soft_delete_column() -> Column {
//!             Column::DeletedAt
//!         }
//!     }
//! }
//! ```
//!
//! ## Scoped selects
//!
//! Three views over the same table: [`find_active`][SoftDeleteTrait::find_active]
//! (the default view, hiding soft deleted rows),
//! [`find_with_deleted`][SoftDeleteTrait::find_with_deleted] (no filter) and
//! [`find_deleted`][SoftDeleteTrait::find_deleted] (only soft deleted rows).
//!
//! ```
//! # mod post {
//! #     use sea_orm::entity::prelude::*;
//! #     use sea_orm_soft_delete::SoftDeleteTrait;
//! #     #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
//! #     #[sea_orm(table_name = "post")]
//! #     pub struct Model {
//! #         #[sea_orm(primary_key)]
//! #         pub id: i32,
//! #         pub title: String,
//! #         pub deleted_at: Option<DateTime>,
//! #     }
//! #     #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
//! #     pub enum Relation {}
//! #     impl ActiveModelBehavior for ActiveModel {}
//! #     impl SoftDeleteTrait for Entity {
//! #         fn soft_delete_column() -> Column {
//! #             Column::DeletedAt
//! #         }
//! #     }
//! # }
//! use sea_orm::{DbBackend, QueryTrait};
//! use sea_orm_soft_delete::SoftDeleteTrait;
//!
//! assert_eq!(
//!     post::Entity::find_active()
//!         .build(DbBackend::MySql)
//!         .to_string(),
//!     [
//!         "SELECT `post`.`id`, `post`.`title`, `post`.`deleted_at`",
//!         "FROM `post`",
//!         "WHERE `post`.`deleted_at` IS NULL",
//!     ]
//!     .join(" ")
//! );
//! ```
//!
//! ## Mutations
//!
//! Soft deleting writes the current timestamp into the column with a
//! single partial `UPDATE`; restoring clears it the same way. Both exist
//! per record ([`SoftDeleteModelTrait`]) and in bulk
//! ([`soft_delete_many`][SoftDeleteTrait::soft_delete_many] /
//! [`restore_many`][SoftDeleteTrait::restore_many]), composing with the
//! usual [`QueryFilter`](sea_orm::QueryFilter) verbs. Physical removal
//! stays available through
//! [`hard_delete`][SoftDeleteModelTrait::hard_delete] and
//! [`hard_delete_many`][SoftDeleteTrait::hard_delete_many], which
//! delegate to SeaORM's own delete operations untouched.
//!
//! ## Admin glue
//!
//! The [`admin`] module carries the pieces an administrative console
//! needs: an unfiltered [`listing`][admin::listing] queryset, a
//! three-state [`DeletedStateFilter`][admin::DeletedStateFilter] and a
//! bulk [`soft_delete_selected`][admin::soft_delete_selected] action
//! reporting the affected row count.

pub mod admin;
pub mod entity;
pub mod query;
#[cfg(feature = "tests-cfg")]
#[doc(hidden)]
pub mod tests_cfg;

pub use entity::*;
pub use query::*;
