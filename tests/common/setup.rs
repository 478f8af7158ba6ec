use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use sea_orm_soft_delete::tests_cfg::post;

pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    db.execute(builder.build(&schema.create_table_from_entity(post::Entity)))
        .await?;
    Ok(db)
}
