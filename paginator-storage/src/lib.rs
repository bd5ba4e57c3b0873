use paginator_core::source::PageSource;
use sea_orm::sea_query::{Alias, Asterisk, Expr, Query, SelectStatement};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, QueryTrait, Select,
};

#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum Error {
    #[from]
    #[display("database error: {source}")]
    Db { source: sea_orm::DbErr },
    #[from]
    #[display("{source}")]
    Paging { source: paginator_core::error::Error },
}

pub async fn connect(url: &str, log_statement: bool) -> Result<DatabaseConnection, Error> {
    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(log_statement);
    connect_with(options).await
}

pub async fn connect_with(options: ConnectOptions) -> Result<DatabaseConnection, Error> {
    log::info!("Connecting to database");
    let db = Database::connect(options).await?;
    log::info!("Connected to database successfully");
    Ok(db)
}

const SUBQUERY_ALIAS: &str = "page_source";
const COUNT_ALIAS: &str = "num_items";

/// A [`PageSource`] backed by a `sea-orm` select.
///
/// The select is used as is, including any `OFFSET`/`LIMIT` already on it. Slicing narrows a
/// window that is applied on top of the select as a subquery, and counting runs `COUNT(*)`
/// over the same statement. Ordering is left to the caller.
#[derive(Debug)]
pub struct SelectSource<'c, E: EntityTrait, C> {
    select: Select<E>,
    window: Option<Window>,
    conn: &'c C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    skip: u64,
    take: u64,
}

impl<'c, E: EntityTrait, C> Clone for SelectSource<'c, E, C> {
    fn clone(&self) -> Self {
        Self {
            select: self.select.clone(),
            window: self.window,
            conn: self.conn,
        }
    }
}

impl<'c, E: EntityTrait, C> SelectSource<'c, E, C> {
    pub fn new(select: Select<E>, conn: &'c C) -> Self {
        Self {
            select,
            window: None,
            conn,
        }
    }

    fn statement(&self) -> SelectStatement {
        let inner = self.select.clone().into_query();
        match self.window {
            Some(Window { skip, take }) => Query::select()
                .column(Asterisk)
                .from_subquery(inner, Alias::new(SUBQUERY_ALIAS))
                .limit(take)
                .offset(skip)
                .to_owned(),
            None => inner,
        }
    }
}

#[async_trait::async_trait]
impl<'c, E, C> PageSource for SelectSource<'c, E, C>
where
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
    C: ConnectionTrait,
{
    type Item = E::Model;
    type Error = Error;

    fn skip_take(&self, skip: u64, take: u64) -> Self {
        let window = match self.window {
            Some(current) => Window {
                skip: current.skip.saturating_add(skip),
                take: current.take.saturating_sub(skip).min(take),
            },
            None => Window { skip, take },
        };
        Self {
            select: self.select.clone(),
            window: Some(window),
            conn: self.conn,
        }
    }

    async fn count(&self) -> Result<u64, Self::Error> {
        let stmt = Query::select()
            .expr_as(Expr::cust("COUNT(*)"), Alias::new(COUNT_ALIAS))
            .from_subquery(self.statement(), Alias::new(SUBQUERY_ALIAS))
            .to_owned();
        let backend = self.conn.get_database_backend();
        let count = match self.conn.query_one(backend.build(&stmt)).await? {
            Some(row) => row.try_get::<i64>("", COUNT_ALIAS)?,
            None => 0,
        };
        Ok(count.max(0) as u64)
    }

    async fn fetch(&self) -> Result<Vec<Self::Item>, Self::Error> {
        let models = match self.window {
            Some(_) => {
                let backend = self.conn.get_database_backend();
                E::find().from_raw_sql(backend.build(&self.statement())).all(self.conn).await?
            }
            None => self.select.clone().all(self.conn).await?,
        };
        Ok(models)
    }
}

pub trait SelectExt<E: EntityTrait> {
    fn into_page_source<C: ConnectionTrait>(self, conn: &C) -> SelectSource<'_, E, C>;
}

impl<E: EntityTrait> SelectExt<E> for Select<E> {
    fn into_page_source<C: ConnectionTrait>(self, conn: &C) -> SelectSource<'_, E, C> {
        SelectSource::new(self, conn)
    }
}
