//! Generic list/get/create/update/soft-delete over any [`Entity`].
//!
//! Each operation is split into a `*_statement` builder, which only compiles
//! SQL and values, and an async function that runs it on a [`GenericClient`].
//!
//! ```ignore
//! let client = pool.get().await?;
//! let logs: Vec<StateLog> = repo::list(&client, StateLogFilter { asset_id: Some(3), ..Default::default() }, Page::new(50, 0)).await?;
//! let target = repo::update(&client, &(3, 8), PerformanceTargetPatch { target_value: Some(42.5), ..Default::default() }).await?;
//! ```

use crate::client::GenericClient;
use crate::error::{DataError, DataResult};
use crate::input::{Insertable, Patch};
use crate::row::{FromRow, map_rows};
use crate::table::{Entity, KeyValues, Mutable, SOFT_DELETE_COLUMN, Table, key_pairs, visible};
use mes_query::{
    Changes, Filter, Page, Statement, compile_conditions, compile_filter, compile_insert_values,
    compile_key_predicate, compile_update_set,
};

/// `SELECT * FROM t WHERE <filter> AND removed = $n [ORDER BY ..] [LIMIT ..]`
pub fn list_statement(table: &Table, filter: Filter, page: Page) -> DataResult<Statement> {
    let mut stmt = Statement::new(format!("SELECT * FROM {}", table.name));
    let filter = compile_filter(&visible(filter), stmt.next_index());
    stmt.push_fragment(filter)?;
    if let Some(order_by) = table.order_by {
        stmt.push("ORDER BY").push(order_by);
    }
    stmt.push(&page.to_sql());
    Ok(stmt)
}

/// `SELECT * FROM t WHERE <key> AND removed = $n`
pub fn get_statement<K: KeyValues + ?Sized>(table: &Table, key: &K) -> DataResult<Statement> {
    let mut stmt = Statement::new(format!("SELECT * FROM {}", table.name));
    push_visible_key(&mut stmt, table, key)?;
    Ok(stmt)
}

/// `INSERT INTO t (cols) VALUES ($1, ..) RETURNING *`
pub fn insert_statement(table: &Table, changes: &Changes) -> DataResult<Statement> {
    let mut stmt = Statement::new(format!("INSERT INTO {}", table.name));
    let values = compile_insert_values(changes, stmt.next_index());
    stmt.push_fragment(values)?.push("RETURNING *");
    Ok(stmt)
}

/// `UPDATE t SET <changes> WHERE <key> AND removed = $n RETURNING *`
///
/// Fails with `NoFieldsToUpdate` when `changes` is empty.
pub fn update_statement<K: KeyValues + ?Sized>(
    table: &Table,
    key: &K,
    changes: &Changes,
) -> DataResult<Statement> {
    let mut stmt = Statement::new(format!("UPDATE {} SET", table.name));
    let set = compile_update_set(changes, stmt.next_index())?;
    stmt.push_fragment(set)?;
    push_visible_key(&mut stmt, table, key)?;
    stmt.push("RETURNING *");
    Ok(stmt)
}

/// `UPDATE t SET removed = $1 WHERE <key> AND removed = $n RETURNING *`
pub fn soft_delete_statement<K: KeyValues + ?Sized>(table: &Table, key: &K) -> DataResult<Statement> {
    update_statement(table, key, &Changes::new().set(SOFT_DELETE_COLUMN, true))
}

/// `WHERE <key> AND removed = $n`, numbered from the statement's next index.
fn push_visible_key<K: KeyValues + ?Sized>(
    stmt: &mut Statement,
    table: &Table,
    key: &K,
) -> DataResult<()> {
    let key = compile_key_predicate(key_pairs(table, key), stmt.next_index());
    stmt.push("WHERE").push_fragment(key)?;
    let not_removed = compile_conditions(&visible(Filter::new()), stmt.next_index());
    stmt.push_fragment_after("AND", not_removed)?;
    Ok(())
}

/// Visible rows matching `filter`, in the table's default order.
pub async fn list<E: Entity>(
    client: &impl GenericClient,
    filter: impl Into<Filter>,
    page: Page,
) -> DataResult<Vec<E>> {
    let stmt = list_statement(&E::TABLE, filter.into(), page)?;
    let rows = client.query(stmt.sql(), &stmt.params_ref()).await?;
    map_rows(&rows)
}

/// The visible row with `key`, or `None`.
pub async fn get<E: Entity>(client: &impl GenericClient, key: &E::Key) -> DataResult<Option<E>> {
    let stmt = get_statement(&E::TABLE, key)?;
    client
        .query_opt(stmt.sql(), &stmt.params_ref())
        .await?
        .as_ref()
        .map(E::from_row)
        .transpose()
}

/// Insert `input` and return the stored row.
pub async fn create<N: Insertable>(client: &impl GenericClient, input: N) -> DataResult<N::Entity> {
    let table = <N::Entity as Entity>::TABLE;
    let stmt = insert_statement(&table, &input.into_changes())?;
    let row = client
        .query_opt(stmt.sql(), &stmt.params_ref())
        .await?
        .ok_or_else(|| DataError::not_found(format!("{} insert returned no row", table.label)))?;
    N::Entity::from_row(&row)
}

/// Apply `patch` to the visible row with `key` and return the updated row.
///
/// Errors with `NoFieldsToUpdate` for an empty patch (before touching the
/// database) and `NotFound("<label> not found")` when no visible row matched.
pub async fn update<P: Patch>(
    client: &impl GenericClient,
    key: &<P::Entity as Entity>::Key,
    patch: P,
) -> DataResult<P::Entity> {
    let table = <P::Entity as Entity>::TABLE;
    let stmt = update_statement(&table, key, &patch.into_changes())?;
    let row = client
        .query_opt(stmt.sql(), &stmt.params_ref())
        .await?
        .ok_or_else(|| DataError::not_found(table.not_found_message()))?;
    P::Entity::from_row(&row)
}

/// Mark the visible row with `key` as removed and return it.
///
/// Errors with `NotFound("<label> not found or already deleted")` when no
/// visible row matched.
pub async fn soft_delete<E: Mutable>(client: &impl GenericClient, key: &E::Key) -> DataResult<E> {
    let stmt = soft_delete_statement(&E::TABLE, key)?;
    let row = client
        .query_opt(stmt.sql(), &stmt.params_ref())
        .await?
        .ok_or_else(|| DataError::not_found(E::TABLE.not_deleted_message()))?;
    E::from_row(&row)
}

#[cfg(test)]
mod tests;
