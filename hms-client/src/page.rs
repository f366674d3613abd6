//! Role-gated entity pages.

use hms_grid::{DataGrid, GridActions, GridConfig, Record, id_field};

use crate::access::{AuthContext, Resource};
use crate::entities::Entity;
use crate::error::AccessError;

/// A list page for one entity: its data grid, opened under an
/// authorization context.
#[derive(Debug)]
pub struct EntityPage {
    entity: Entity,
    grid: DataGrid,
}

impl EntityPage {
    /// Open the page for `entity`.
    ///
    /// Fails if `auth` may not open the entity's resource. Backend records are
    /// normalized before they reach the grid; rows are identified by `id`.
    pub fn open(auth: &AuthContext, entity: Entity, records: Vec<Record>) -> Result<Self, AccessError> {
        auth.authorize(entity.resource())?;

        let records: Vec<Record> = records.into_iter().map(|r| entity.normalize(r)).collect();
        log::debug!("Opening {} with {} records", entity.title(), records.len());

        let grid = DataGrid::new(entity.columns(), id_field("id")).with_records(records);
        Ok(Self { entity, grid })
    }

    /// Set the grid configuration.
    pub fn with_config(mut self, config: GridConfig) -> Self {
        self.grid = self.grid.with_config(config);
        self
    }

    /// Attach row action callbacks.
    pub fn with_actions(mut self, actions: GridActions) -> Self {
        self.grid = self.grid.with_actions(actions);
        self
    }

    /// The listed entity.
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// The page resource.
    pub fn resource(&self) -> Resource {
        self.entity.resource()
    }

    /// Page title.
    pub fn title(&self) -> &'static str {
        self.entity.title()
    }

    /// The page's grid.
    pub fn grid(&self) -> &DataGrid {
        &self.grid
    }

    /// The page's grid, for search, sort, paging and selection.
    pub fn grid_mut(&mut self) -> &mut DataGrid {
        &mut self.grid
    }

    /// Replace the listed records (e.g. after a refetch), normalizing them.
    pub fn reload(&mut self, records: Vec<Record>) {
        let entity = self.entity;
        self.grid
            .set_records(records.into_iter().map(|r| entity.normalize(r)).collect());
    }

    /// Navigation target of the view action for row `id`.
    pub fn detail_path(&self, id: &str) -> Option<String> {
        self.entity.detail_path(id)
    }
}
