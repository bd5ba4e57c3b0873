use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection, EntityTrait, Schema, Set};

pub mod item {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "item")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// In-memory SQLite database holding items 1 to 25.
pub async fn seeded_db() -> DatabaseConnection {
    let _ = env_logger::builder().is_test(true).try_init();

    // every pooled connection would open its own in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    let db = paginator_storage::connect_with(options).await.unwrap();

    let backend = db.get_database_backend();
    let create_table = Schema::new(backend).create_table_from_entity(item::Entity);
    db.execute(backend.build(&create_table)).await.unwrap();

    let items = (1..=25).map(|id| item::ActiveModel {
        id: Set(id),
        name: Set(format!("item-{id}")),
    });
    item::Entity::insert_many(items).exec_without_returning(&db).await.unwrap();
    db
}
