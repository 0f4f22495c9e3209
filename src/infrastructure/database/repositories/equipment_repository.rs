//! SeaORM implementation of EquipmentRepository
//!
//! Saves are compare-and-swap on the `version` column: the UPDATE only
//! matches the row version the caller read, and bumps it.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, SqlErr, TransactionTrait,
};
use tracing::debug;

use crate::domain::{
    Cell, CellStatus, CellType, DomainError, DomainResult, EquipmentRepository, EquipmentUnit,
    NewCell, UnitNameplate, UnitType,
};
use crate::infrastructure::database::entities::{cell, ru};

pub struct SeaOrmEquipmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmEquipmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn unit_type_to_entity(t: UnitType) -> ru::UnitKind {
    match t {
        UnitType::Kru => ru::UnitKind::Kru,
        UnitType::Tp => ru::UnitKind::Tp,
    }
}

fn unit_type_to_domain(t: ru::UnitKind) -> UnitType {
    match t {
        ru::UnitKind::Kru => UnitType::Kru,
        ru::UnitKind::Tp => UnitType::Tp,
    }
}

fn cell_type_to_entity(t: CellType) -> cell::CellKind {
    match t {
        CellType::Input => cell::CellKind::Input,
        CellType::Sr => cell::CellKind::Sr,
        CellType::Sv => cell::CellKind::Sv,
        CellType::Transformer => cell::CellKind::Transformer,
        CellType::Reserve => cell::CellKind::Reserve,
        CellType::Bus => cell::CellKind::Bus,
        CellType::LowVoltage => cell::CellKind::LowVoltage,
        CellType::Output => cell::CellKind::Output,
        CellType::Protection => cell::CellKind::Protection,
        CellType::Measurement => cell::CellKind::Measurement,
    }
}

fn cell_type_to_domain(t: cell::CellKind) -> CellType {
    match t {
        cell::CellKind::Input => CellType::Input,
        cell::CellKind::Sr => CellType::Sr,
        cell::CellKind::Sv => CellType::Sv,
        cell::CellKind::Transformer => CellType::Transformer,
        cell::CellKind::Reserve => CellType::Reserve,
        cell::CellKind::Bus => CellType::Bus,
        cell::CellKind::LowVoltage => CellType::LowVoltage,
        cell::CellKind::Output => CellType::Output,
        cell::CellKind::Protection => CellType::Protection,
        cell::CellKind::Measurement => CellType::Measurement,
    }
}

fn cell_status_to_entity(s: CellStatus) -> cell::CellState {
    match s {
        CellStatus::On => cell::CellState::On,
        CellStatus::Off => cell::CellState::Off,
        CellStatus::Reserve => cell::CellState::Reserve,
        CellStatus::Error => cell::CellState::Error,
        CellStatus::Maintenance => cell::CellState::Maintenance,
    }
}

fn cell_status_to_domain(s: cell::CellState) -> CellStatus {
    match s {
        cell::CellState::On => CellStatus::On,
        cell::CellState::Off => CellStatus::Off,
        cell::CellState::Reserve => CellStatus::Reserve,
        cell::CellState::Error => CellStatus::Error,
        cell::CellState::Maintenance => CellStatus::Maintenance,
    }
}

fn unit_to_domain(m: ru::Model) -> EquipmentUnit {
    EquipmentUnit {
        id: m.id,
        name: m.name,
        unit_type: unit_type_to_domain(m.unit_type),
        status: m.status,
        substation_id: m.substation_id,
        nameplate: UnitNameplate {
            voltage: m.voltage,
            sections: m.sections,
            cells_count: m.cells_count,
            transformers: m.transformers,
            transformer_power: m.transformer_power,
            location: m.location,
            installation_date: m.installation_date,
            manufacturer: m.manufacturer,
            last_maintenance: m.last_maintenance,
            next_maintenance: m.next_maintenance,
            scheme_type: m.scheme_type,
            total_load_high: m.total_load_high,
            total_load_low: m.total_load_low,
            total_power_high: m.total_power_high,
            total_power_low: m.total_power_low,
            max_capacity_high: m.max_capacity_high,
            max_capacity_low: m.max_capacity_low,
            operational_hours: m.operational_hours,
            last_inspection: m.last_inspection,
            has_high_side: m.has_high_side,
            has_low_side: m.has_low_side,
            bus_sections: m.bus_sections,
            cells_per_section: m.cells_per_section,
        },
        version: m.version,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn unit_to_active(u: &EquipmentUnit, version: i32) -> ru::ActiveModel {
    let n = &u.nameplate;
    ru::ActiveModel {
        id: Set(u.id.clone()),
        name: Set(u.name.clone()),
        unit_type: Set(unit_type_to_entity(u.unit_type)),
        status: Set(u.status.clone()),
        substation_id: Set(u.substation_id.clone()),
        voltage: Set(n.voltage.clone()),
        sections: Set(n.sections),
        cells_count: Set(n.cells_count),
        transformers: Set(n.transformers),
        transformer_power: Set(n.transformer_power.clone()),
        location: Set(n.location.clone()),
        installation_date: Set(n.installation_date.clone()),
        manufacturer: Set(n.manufacturer.clone()),
        last_maintenance: Set(n.last_maintenance.clone()),
        next_maintenance: Set(n.next_maintenance.clone()),
        scheme_type: Set(n.scheme_type.clone()),
        total_load_high: Set(n.total_load_high.clone()),
        total_load_low: Set(n.total_load_low.clone()),
        total_power_high: Set(n.total_power_high.clone()),
        total_power_low: Set(n.total_power_low.clone()),
        max_capacity_high: Set(n.max_capacity_high.clone()),
        max_capacity_low: Set(n.max_capacity_low.clone()),
        operational_hours: Set(n.operational_hours),
        last_inspection: Set(n.last_inspection.clone()),
        has_high_side: Set(n.has_high_side),
        has_low_side: Set(n.has_low_side),
        bus_sections: Set(n.bus_sections),
        cells_per_section: Set(n.cells_per_section),
        version: Set(version),
        created_at: Set(u.created_at),
        updated_at: Set(u.updated_at),
    }
}

fn cell_to_domain(m: cell::Model) -> Cell {
    Cell {
        id: m.id,
        ru_id: m.ru_id,
        number: m.number,
        name: m.name,
        cell_type: cell_type_to_domain(m.cell_type),
        status: cell_status_to_domain(m.status),
        voltage: m.voltage,
        voltage_level: m.voltage_level,
        power: m.power,
        description: m.description,
        is_grounded: m.is_grounded,
        last_operation: m.last_operation,
        last_grounded_operation: m.last_grounded_operation,
        transformer_number: m.transformer_number,
        bus_section: m.bus_section,
        current: m.current,
        temperature: m.temperature,
        load: m.load,
        version: m.version,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn cell_to_active(c: &Cell, version: i32) -> cell::ActiveModel {
    cell::ActiveModel {
        ru_id: Set(c.ru_id.clone()),
        id: Set(c.id),
        number: Set(c.number.clone()),
        name: Set(c.name.clone()),
        cell_type: Set(cell_type_to_entity(c.cell_type)),
        status: Set(cell_status_to_entity(c.status)),
        voltage: Set(c.voltage.clone()),
        voltage_level: Set(c.voltage_level.clone()),
        power: Set(c.power.clone()),
        description: Set(c.description.clone()),
        is_grounded: Set(c.is_grounded),
        last_operation: Set(c.last_operation),
        last_grounded_operation: Set(c.last_grounded_operation),
        transformer_number: Set(c.transformer_number.clone()),
        bus_section: Set(c.bus_section),
        current: Set(c.current),
        temperature: Set(c.temperature),
        load: Set(c.load),
        version: Set(version),
        created_at: Set(c.created_at),
        updated_at: Set(c.updated_at),
    }
}

fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl EquipmentRepository for SeaOrmEquipmentRepository {
    async fn find_all_units(&self) -> DomainResult<Vec<EquipmentUnit>> {
        let models = ru::Entity::find()
            .order_by_desc(ru::Column::CreatedAt)
            .order_by_asc(ru::Column::Id)
            .all(&self.db)
            .await
            .map_err(DomainError::storage("list units"))?;

        Ok(models.into_iter().map(unit_to_domain).collect())
    }

    async fn find_unit(&self, id: &str) -> DomainResult<Option<EquipmentUnit>> {
        let model = ru::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(DomainError::storage("find unit"))?;

        Ok(model.map(unit_to_domain))
    }

    async fn find_units_by_substation(&self, substation_id: &str) -> DomainResult<Vec<EquipmentUnit>> {
        let models = ru::Entity::find()
            .filter(ru::Column::SubstationId.eq(substation_id))
            .order_by_asc(ru::Column::Id)
            .all(&self.db)
            .await
            .map_err(DomainError::storage("list substation units"))?;

        Ok(models.into_iter().map(unit_to_domain).collect())
    }

    async fn insert_unit(&self, unit: EquipmentUnit) -> DomainResult<EquipmentUnit> {
        let stored = unit_to_active(&unit, 0)
            .insert(&self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Conflict(format!("unit {}", unit.id))
                } else {
                    DomainError::storage("create unit")(e)
                }
            })?;

        Ok(unit_to_domain(stored))
    }

    async fn save_unit(&self, unit: &EquipmentUnit) -> DomainResult<EquipmentUnit> {
        let result = ru::Entity::update_many()
            .set(unit_to_active(unit, unit.version + 1))
            .filter(ru::Column::Id.eq(unit.id.as_str()))
            .filter(ru::Column::Version.eq(unit.version))
            .exec(&self.db)
            .await
            .map_err(DomainError::storage("update unit"))?;

        if result.rows_affected == 0 {
            return Err(match self.find_unit(&unit.id).await? {
                Some(_) => DomainError::StaleWrite {
                    entity: "Unit",
                    value: unit.id.clone(),
                },
                None => DomainError::not_found("Unit", "id", &unit.id),
            });
        }

        self.find_unit(&unit.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Unit", "id", &unit.id))
    }

    async fn find_cells(&self, ru_id: &str) -> DomainResult<Vec<Cell>> {
        let models = cell::Entity::find()
            .filter(cell::Column::RuId.eq(ru_id))
            .order_by_asc(cell::Column::Id)
            .all(&self.db)
            .await
            .map_err(DomainError::storage("list cells"))?;

        Ok(models.into_iter().map(cell_to_domain).collect())
    }

    async fn find_cell(&self, ru_id: &str, cell_id: i32) -> DomainResult<Option<Cell>> {
        let model = cell::Entity::find_by_id((ru_id.to_string(), cell_id))
            .one(&self.db)
            .await
            .map_err(DomainError::storage("find cell"))?;

        Ok(model.map(cell_to_domain))
    }

    async fn insert_cells(&self, ru_id: &str, cells: Vec<NewCell>) -> DomainResult<Vec<Cell>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(DomainError::storage("add cells"))?;

        if ru::Entity::find_by_id(ru_id)
            .one(&txn)
            .await
            .map_err(DomainError::storage("add cells"))?
            .is_none()
        {
            return Err(DomainError::not_found("Unit", "id", ru_id));
        }

        let max_id: Option<i32> = cell::Entity::find()
            .select_only()
            .column_as(Expr::col(cell::Column::Id).max(), "max_id")
            .filter(cell::Column::RuId.eq(ru_id))
            .into_tuple::<Option<i32>>()
            .one(&txn)
            .await
            .map_err(DomainError::storage("add cells"))?
            .flatten();
        let mut next_id = max_id.unwrap_or(0).saturating_add(1);

        let now = chrono::Utc::now();
        let mut stored = Vec::with_capacity(cells.len());

        for new in cells {
            let id = match new.id {
                Some(id) => id,
                None => next_id,
            };
            let after = id.checked_add(1).ok_or_else(|| {
                DomainError::Validation(format!("cell id {} is out of range", id))
            })?;
            next_id = next_id.max(after);

            let c = Cell {
                id,
                ru_id: ru_id.to_string(),
                number: new.number,
                name: new.name,
                cell_type: new.cell_type,
                status: new.status,
                voltage: new.voltage,
                voltage_level: new.voltage_level,
                power: new.power,
                description: new.description,
                is_grounded: new.is_grounded,
                last_operation: None,
                last_grounded_operation: None,
                transformer_number: new.transformer_number,
                bus_section: new.bus_section,
                current: new.current,
                temperature: new.temperature,
                load: new.load,
                version: 0,
                created_at: now,
                updated_at: now,
            };

            let model = cell_to_active(&c, 0).insert(&txn).await.map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Conflict(format!("cell {} in unit {}", id, ru_id))
                } else {
                    DomainError::storage("add cells")(e)
                }
            })?;
            stored.push(cell_to_domain(model));
        }

        txn.commit()
            .await
            .map_err(DomainError::storage("add cells"))?;

        debug!(ru_id, count = stored.len(), "Cells inserted");
        Ok(stored)
    }

    async fn save_cell(&self, c: &Cell) -> DomainResult<Cell> {
        let result = cell::Entity::update_many()
            .set(cell_to_active(c, c.version + 1))
            .filter(cell::Column::RuId.eq(c.ru_id.as_str()))
            .filter(cell::Column::Id.eq(c.id))
            .filter(cell::Column::Version.eq(c.version))
            .exec(&self.db)
            .await
            .map_err(DomainError::storage("update cell"))?;

        if result.rows_affected == 0 {
            return Err(match self.find_cell(&c.ru_id, c.id).await? {
                Some(_) => DomainError::StaleWrite {
                    entity: "Cell",
                    value: format!("{}/{}", c.ru_id, c.id),
                },
                None => DomainError::not_found("Cell", "id", c.id),
            });
        }

        self.find_cell(&c.ru_id, c.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Cell", "id", c.id))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::infrastructure::database::memory_db;
    use chrono::Utc;

    pub(crate) fn unit(id: &str) -> EquipmentUnit {
        let now = Utc::now();
        EquipmentUnit {
            id: id.into(),
            name: format!("Unit {}", id),
            unit_type: UnitType::Kru,
            status: "active".into(),
            substation_id: None,
            nameplate: UnitNameplate {
                voltage: "10 kV".into(),
                sections: 2,
                ..Default::default()
            },
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn new_cell(id: Option<i32>, name: &str) -> NewCell {
        NewCell {
            id,
            number: id.map(|i| i.to_string()).unwrap_or_default(),
            name: name.into(),
            cell_type: CellType::Output,
            status: CellStatus::Off,
            voltage: "10 kV".into(),
            voltage_level: "HIGH".into(),
            power: None,
            description: String::new(),
            is_grounded: false,
            transformer_number: None,
            bus_section: Some(1),
            current: None,
            temperature: None,
            load: None,
        }
    }

    async fn seeded() -> SeaOrmEquipmentRepository {
        let repo = SeaOrmEquipmentRepository::new(memory_db().await);
        repo.insert_unit(unit("ru-a")).await.unwrap();
        repo.insert_unit(unit("ru-b")).await.unwrap();
        repo.insert_cells("ru-a", vec![new_cell(Some(1), "A1"), new_cell(Some(2), "A2")])
            .await
            .unwrap();
        repo.insert_cells("ru-b", vec![new_cell(Some(1), "B1")])
            .await
            .unwrap();
        repo
    }

    #[tokio::test]
    async fn cell_lookup_is_scoped_to_its_unit() {
        let repo = seeded().await;

        assert_eq!(repo.find_cell("ru-a", 2).await.unwrap().unwrap().name, "A2");
        assert!(repo.find_cell("ru-b", 2).await.unwrap().is_none());
        assert_eq!(repo.find_cell("ru-b", 1).await.unwrap().unwrap().name, "B1");
    }

    #[tokio::test]
    async fn cells_are_ordered_by_id() {
        let repo = seeded().await;
        repo.insert_cells("ru-a", vec![new_cell(None, "A3")]).await.unwrap();

        let ids: Vec<i32> = repo.find_cells("ru-a").await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn duplicate_cell_id_rolls_back_the_batch() {
        let repo = seeded().await;
        let err = repo
            .insert_cells("ru-a", vec![new_cell(Some(7), "A7"), new_cell(Some(1), "dup")])
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)), "{err:?}");
        assert!(repo.find_cell("ru-a", 7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn max_cell_id_is_rejected_without_panicking() {
        let repo = seeded().await;
        let err = repo
            .insert_cells("ru-a", vec![new_cell(Some(i32::MAX), "M")])
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)), "{err:?}");
        assert!(repo.find_cell("ru-a", i32::MAX).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn units_are_listed_newest_first() {
        let repo = SeaOrmEquipmentRepository::new(memory_db().await);
        let base = Utc::now();
        for (id, age) in [("ru-old", 2), ("ru-new-b", 0), ("ru-new-a", 0), ("ru-mid", 1)] {
            let mut u = unit(id);
            u.created_at = base - chrono::Duration::minutes(age);
            u.updated_at = u.created_at;
            repo.insert_unit(u).await.unwrap();
        }

        let ids: Vec<String> = repo.find_all_units().await.unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["ru-new-a", "ru-new-b", "ru-mid", "ru-old"]);
    }

    #[tokio::test]
    async fn cells_for_missing_unit() {
        let repo = seeded().await;
        let err = repo.insert_cells("ru-x", vec![new_cell(None, "X")]).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn save_cell_bumps_version() {
        let repo = seeded().await;
        let mut c = repo.find_cell("ru-a", 1).await.unwrap().unwrap();
        c.apply_status(CellStatus::On, Some(true), Utc::now());

        let saved = repo.save_cell(&c).await.unwrap();
        assert_eq!(saved.version, c.version + 1);
        assert_eq!(saved.status, CellStatus::On);
        assert!(saved.is_grounded);
        assert!(saved.last_grounded_operation.is_some());
    }

    #[tokio::test]
    async fn stale_cell_write_is_rejected() {
        let repo = seeded().await;
        let first = repo.find_cell("ru-a", 1).await.unwrap().unwrap();
        let mut second = first.clone();

        let mut winner = first;
        winner.apply_status(CellStatus::On, None, Utc::now());
        repo.save_cell(&winner).await.unwrap();

        second.apply_status(CellStatus::Error, None, Utc::now());
        let err = repo.save_cell(&second).await.unwrap_err();
        assert!(matches!(err, DomainError::StaleWrite { .. }), "{err:?}");

        let stored = repo.find_cell("ru-a", 1).await.unwrap().unwrap();
        assert_eq!(stored.status, CellStatus::On);
    }

    #[tokio::test]
    async fn save_unit_round_trips_nameplate() {
        let repo = seeded().await;
        let mut u = repo.find_unit("ru-a").await.unwrap().unwrap();
        u.status = "maintenance".into();
        u.substation_id = Some("sub-1".into());

        let saved = repo.save_unit(&u).await.unwrap();
        assert_eq!(saved.status, "maintenance");
        assert_eq!(saved.nameplate.voltage, "10 kV");
        assert_eq!(saved.version, 1);

        let on_sub = repo.find_units_by_substation("sub-1").await.unwrap();
        assert_eq!(on_sub.len(), 1);
        assert_eq!(on_sub[0].id, "ru-a");
    }

    #[tokio::test]
    async fn duplicate_unit_is_a_conflict() {
        let repo = seeded().await;
        let err = repo.insert_unit(unit("ru-a")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
