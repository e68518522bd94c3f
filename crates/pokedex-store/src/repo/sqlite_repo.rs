//! SQLite repository implementation
//!
//! Reads the `pokemon` table through compiled filters and writes it for
//! the seed importer.

use crate::errors::{from_rusqlite, Result};
use pokedex_core::filter::{CompiledFilter, SqlParam};
use pokedex_core::model::{Pokemon, Stat};
use pokedex_core::source::{ObservedRange, PokemonSource, StatRanges};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, Transaction};

const SELECT_COLUMNS: &str =
    "id, name, type1, type2, hp, attack, defense, sp_attack, sp_defense, speed";

const UPSERT_SQL: &str =
    "INSERT INTO pokemon (id, name, type1, type2, hp, attack, defense, sp_attack, sp_defense, speed)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
     ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        type1 = excluded.type1,
        type2 = excluded.type2,
        hp = excluded.hp,
        attack = excluded.attack,
        defense = excluded.defense,
        sp_attack = excluded.sp_attack,
        sp_defense = excluded.sp_defense,
        speed = excluded.speed";

/// SQLite repository for Pokemon records
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert or replace one record
    pub fn upsert_pokemon(conn: &Connection, pokemon: &Pokemon) -> Result<()> {
        conn.execute(UPSERT_SQL, rusqlite::params_from_iter(upsert_params(pokemon)))
            .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Insert or replace one record within a transaction
    pub fn upsert_pokemon_tx(tx: &Transaction, pokemon: &Pokemon) -> Result<()> {
        tx.execute(UPSERT_SQL, rusqlite::params_from_iter(upsert_params(pokemon)))
            .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Count rows accepted by the filter
    pub fn count(conn: &Connection, filter: &CompiledFilter) -> Result<u64> {
        let fragment = filter.sql();
        let sql = format!("SELECT COUNT(*) FROM pokemon{}", fragment.where_clause());
        let values = to_values(fragment.params());

        let count: i64 = conn
            .query_row(&sql, rusqlite::params_from_iter(values.iter()), |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    /// One page of rows accepted by the filter, ordered by id
    pub fn fetch(
        conn: &Connection,
        filter: &CompiledFilter,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Pokemon>> {
        let fragment = filter.sql();
        let sql = format!(
            "SELECT {} FROM pokemon{} ORDER BY id ASC LIMIT ? OFFSET ?",
            SELECT_COLUMNS,
            fragment.where_clause()
        );

        let mut values = to_values(fragment.params());
        values.push(Value::Integer(clamp_i64(limit)));
        values.push(Value::Integer(clamp_i64(offset)));

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(values.iter()), pokemon_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }

    /// Get a record by id
    pub fn get_pokemon(conn: &Connection, id: u32) -> Result<Option<Pokemon>> {
        let sql = format!("SELECT {} FROM pokemon WHERE id = ?", SELECT_COLUMNS);
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

        stmt.query_row([id], pokemon_from_row)
            .optional()
            .map_err(from_rusqlite)
    }

    /// MIN/MAX of every stat column over the whole table
    pub fn stat_ranges(conn: &Connection) -> Result<StatRanges> {
        let aggregates: Vec<String> = Stat::ALL
            .iter()
            .map(|stat| format!("MIN({col}), MAX({col})", col = stat.column()))
            .collect();
        let sql = format!("SELECT {} FROM pokemon", aggregates.join(", "));

        conn.query_row(&sql, [], |row| {
            let mut ranges = StatRanges::new();
            for (i, stat) in Stat::ALL.iter().enumerate() {
                let min: Option<u32> = row.get(i * 2)?;
                let max: Option<u32> = row.get(i * 2 + 1)?;
                // Both are NULL only when the table is empty
                if let (Some(min), Some(max)) = (min, max) {
                    ranges.insert(*stat, ObservedRange { min, max });
                }
            }
            Ok(ranges)
        })
        .map_err(from_rusqlite)
    }

    /// Total number of rows
    pub fn count_all(conn: &Connection) -> Result<u64> {
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM pokemon", [], |row| row.get(0))
            .map_err(from_rusqlite)?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}

/// `PokemonSource` over a single borrowed connection
pub struct SqliteSource<'c> {
    conn: &'c Connection,
}

impl<'c> SqliteSource<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }
}

impl PokemonSource for SqliteSource<'_> {
    fn count(&self, filter: &CompiledFilter) -> Result<u64> {
        SqliteRepo::count(self.conn, filter)
    }

    fn fetch(&self, filter: &CompiledFilter, limit: u64, offset: u64) -> Result<Vec<Pokemon>> {
        SqliteRepo::fetch(self.conn, filter, limit, offset)
    }

    fn get(&self, id: u32) -> Result<Option<Pokemon>> {
        SqliteRepo::get_pokemon(self.conn, id)
    }

    fn stat_ranges(&self) -> Result<StatRanges> {
        SqliteRepo::stat_ranges(self.conn)
    }
}

fn upsert_params(pokemon: &Pokemon) -> [Value; 10] {
    [
        Value::Integer(i64::from(pokemon.id)),
        Value::Text(pokemon.name.clone()),
        Value::Text(pokemon.type1.clone()),
        pokemon.type2.clone().map_or(Value::Null, Value::Text),
        Value::Integer(i64::from(pokemon.hp)),
        Value::Integer(i64::from(pokemon.attack)),
        Value::Integer(i64::from(pokemon.defense)),
        Value::Integer(i64::from(pokemon.sp_attack)),
        Value::Integer(i64::from(pokemon.sp_defense)),
        Value::Integer(i64::from(pokemon.speed)),
    ]
}

fn to_values(params: &[SqlParam]) -> Vec<Value> {
    params
        .iter()
        .map(|param| match param {
            SqlParam::Text(s) => Value::Text(s.clone()),
            SqlParam::Integer(n) => Value::Integer(*n),
        })
        .collect()
}

fn clamp_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn pokemon_from_row(row: &Row<'_>) -> rusqlite::Result<Pokemon> {
    Ok(Pokemon {
        id: row.get(0)?,
        name: row.get(1)?,
        type1: row.get(2)?,
        type2: row.get(3)?,
        hp: row.get(4)?,
        attack: row.get(5)?,
        defense: row.get(6)?,
        sp_attack: row.get(7)?,
        sp_defense: row.get(8)?,
        speed: row.get(9)?,
    })
}
