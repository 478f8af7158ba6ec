use sea_orm::entity::prelude::*;
use sea_orm::sea_query::{Expr, SimpleExpr};

use crate::SoftDeleteTrait;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "access_token")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub revoked_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDeleteTrait for Entity {
    fn soft_delete_column() -> Column {
        Column::RevokedAt
    }

    // revocation instants need sub-second precision
    fn soft_delete_expr() -> SimpleExpr {
        Expr::cust("CURRENT_TIMESTAMP(6)").into()
    }
}
