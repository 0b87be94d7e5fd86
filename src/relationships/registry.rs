//! Schema Registry - entity definitions and runtime relation lookup
//!
//! The registry is the relation metadata provider consumed by the join
//! translator: an explicit mapping from (entity name, relation name) to
//! [`RelationMetadata`], populated by the host application at startup.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use super::metadata::RelationMetadata;
use crate::error::{JoinError, JoinResult};
use crate::query::QueryBuilder;

/// Definition of one entity participating in the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDef {
    /// Entity name, the registry key
    pub name: String,

    /// Backing table name
    pub table: String,

    /// Primary key column(s)
    pub primary_key: Vec<String>,

    /// Whether queries over this entity carry a soft-delete scope
    pub soft_deletes: bool,
}

impl EntityDef {
    /// Create an entity definition with an `id` primary key and no
    /// soft deletes
    pub fn new(name: &str, table: &str) -> Self {
        Self {
            name: name.to_string(),
            table: table.to_string(),
            primary_key: vec!["id".to_string()],
            soft_deletes: false,
        }
    }

    /// Set the primary key column(s)
    pub fn with_primary_key(mut self, columns: &[&str]) -> Self {
        self.primary_key = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Enable the soft-delete scope
    pub fn with_soft_deletes(mut self, soft_deletes: bool) -> Self {
        self.soft_deletes = soft_deletes;
        self
    }
}

/// Thread-safe registry for entity definitions and their relations
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    /// Map of entity name -> definition
    entities: Arc<DashMap<String, EntityDef>>,

    /// Map of entity name -> relation name -> metadata
    relations: Arc<DashMap<String, HashMap<String, RelationMetadata>>>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity definition, replacing any previous one of the
    /// same name
    pub fn register_entity(&self, entity: EntityDef) {
        self.entities.insert(entity.name.clone(), entity);
    }

    /// Register a relation on an entity
    pub fn register_relation(&self, entity: &str, metadata: RelationMetadata) -> JoinResult<()> {
        if !self.entities.contains_key(entity) {
            return Err(JoinError::Configuration(format!(
                "cannot register relation '{}' on unknown entity '{}'",
                metadata.name, entity
            )));
        }
        if metadata.key_pairs.is_empty() && !metadata.kind.is_polymorphic() {
            return Err(JoinError::Configuration(format!(
                "relation '{}' on entity '{}' has no correlation key pairs",
                metadata.name, entity
            )));
        }

        self.relations
            .entry(entity.to_string())
            .or_default()
            .insert(metadata.name.clone(), metadata);
        Ok(())
    }

    /// Resolve an entity definition by name
    pub fn entity(&self, name: &str) -> JoinResult<EntityDef> {
        self.entities
            .get(name)
            .map(|entry| entry.clone())
            .ok_or_else(|| JoinError::Configuration(format!("unknown entity '{}'", name)))
    }

    /// Resolve relation metadata by entity and relation name
    pub fn relation(&self, entity: &str, name: &str) -> JoinResult<RelationMetadata> {
        self.relations
            .get(entity)
            .and_then(|relations| relations.get(name).cloned())
            .ok_or_else(|| JoinError::UnknownRelation {
                entity: entity.to_string(),
                relation: name.to_string(),
            })
    }

    /// Check if a relation exists
    pub fn has_relation(&self, entity: &str, name: &str) -> bool {
        self.relations
            .get(entity)
            .map(|relations| relations.contains_key(name))
            .unwrap_or(false)
    }

    /// Get all relation names registered on an entity
    pub fn relation_names(&self, entity: &str) -> Vec<String> {
        self.relations
            .get(entity)
            .map(|relations| relations.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Seed a query over an entity's table, with its soft-delete scope
    /// when the entity uses one
    pub fn query(&self, entity: &str) -> JoinResult<QueryBuilder> {
        let definition = self.entity(entity)?;
        let mut query = QueryBuilder::new().from(&definition.table);
        if definition.soft_deletes {
            query = query.with_soft_delete_scope(&definition.table);
        }
        Ok(query)
    }
}
