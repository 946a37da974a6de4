//! Generic CRUD execution against PostgreSQL.

use crate::error::AppError;
use crate::model::Resource;
use crate::service::RequestValidator;
use crate::sql::{self, bind_all, QueryBuf};
use sqlx::PgPool;

/// Zero-based page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 0;
    pub const DEFAULT_SIZE: u32 = 10;

    /// `size` must be at least 1 and at most `max_size`.
    pub fn new(page: u32, size: u32, max_size: u32) -> Result<Self, AppError> {
        if size == 0 || size > max_size {
            return Err(AppError::BadRequest(format!(
                "size must be between 1 and {}",
                max_size
            )));
        }
        Ok(PageRequest { page, size })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: Self::DEFAULT_PAGE,
            size: Self::DEFAULT_SIZE,
        }
    }
}

/// One page of rows plus the total row count.
#[derive(Clone, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub request: PageRequest,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.request.size))
    }
}

pub struct CrudService;

impl CrudService {
    /// List one page ordered by primary key.
    pub async fn list<R: Resource>(pool: &PgPool, request: PageRequest) -> Result<Page<R>, AppError> {
        let q = sql::select_page::<R>(request.size, request.offset());
        let items = Self::query_many::<R>(pool, &q).await?;
        let c = sql::count::<R>();
        tracing::debug!(sql = %c.sql, "query");
        let (total,): (i64,) = sqlx::query_as(&c.sql).fetch_one(pool).await?;
        Ok(Page {
            items,
            request,
            total_elements: u64::try_from(total).unwrap_or(0),
        })
    }

    /// Fetch one row by primary key; `NotFound` when absent.
    pub async fn read<R: Resource>(pool: &PgPool, id: i64) -> Result<R, AppError> {
        let q = sql::select_by_id::<R>(id);
        Self::query_optional::<R>(pool, &q)
            .await?
            .ok_or_else(|| AppError::NotFound(R::not_found_message(id)))
    }

    /// Validate and insert; returns the stored row with its generated key.
    pub async fn create<R: Resource>(pool: &PgPool, payload: &R::Payload) -> Result<R, AppError> {
        let values = R::values(payload);
        RequestValidator::validate(R::COLUMNS, &values)?;
        let q = sql::insert::<R>(values);
        let row = Self::query_optional::<R>(pool, &q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
        tracing::info!(resource = R::PATH, id = row.id(), "created");
        Ok(row)
    }

    /// Validate and overwrite the updatable columns of one row; `NotFound` when absent.
    pub async fn update<R: Resource>(
        pool: &PgPool,
        id: i64,
        payload: &R::Payload,
    ) -> Result<R, AppError> {
        let values = R::values(payload);
        RequestValidator::validate(R::COLUMNS, &values)?;
        let q = sql::update::<R>(id, values);
        let row = Self::query_optional::<R>(pool, &q)
            .await?
            .ok_or_else(|| AppError::NotFound(R::not_found_message(id)))?;
        tracing::info!(resource = R::PATH, id, "updated");
        Ok(row)
    }

    /// Delete one row (children cascade); `NotFound` when absent.
    pub async fn delete<R: Resource>(pool: &PgPool, id: i64) -> Result<R, AppError> {
        let q = sql::delete::<R>(id);
        let row = Self::query_optional::<R>(pool, &q)
            .await?
            .ok_or_else(|| AppError::NotFound(R::not_found_message(id)))?;
        tracing::info!(resource = R::PATH, id, "deleted");
        Ok(row)
    }

    async fn query_optional<R: Resource>(pool: &PgPool, q: &QueryBuf) -> Result<Option<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query_as::<_, R>(&q.sql), &q.params)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    async fn query_many<R: Resource>(pool: &PgPool, q: &QueryBuf) -> Result<Vec<R>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query_as::<_, R>(&q.sql), &q.params)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
