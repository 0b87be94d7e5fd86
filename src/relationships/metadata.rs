//! Relation Metadata - kinds, correlation key pairs and per-relation constraints

use serde::{Deserialize, Serialize};

use crate::query::{JoinClause, WhereCondition};

/// Defines the type of relationship between entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// One-to-one relationship (hasOne)
    HasOne,
    /// One-to-many relationship (hasMany)
    HasMany,
    /// Many-to-one relationship (belongsTo)
    BelongsTo,
    /// Many-to-many relationship through a pivot table
    ManyToMany,
    /// Polymorphic one-to-one relationship
    MorphOne,
    /// Polymorphic one-to-many relationship
    MorphMany,
    /// Inverse polymorphic relationship
    MorphTo,
}

impl RelationKind {
    /// Returns true if this relationship type is polymorphic
    pub fn is_polymorphic(self) -> bool {
        matches!(self, Self::MorphOne | Self::MorphMany | Self::MorphTo)
    }

    /// Returns true if this relationship returns a collection
    pub fn is_collection(self) -> bool {
        matches!(self, Self::HasMany | Self::ManyToMany | Self::MorphMany)
    }
}

/// One correlation column pair: `parent_table.parent = related_table.related`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub parent: String,
    pub related: String,
}

/// Metadata describing one named relation on an entity.
///
/// `wheres` and `joins` are the relation's own constraints recorded at
/// definition time against the literal related table name; they are merged
/// into the existence predicate and forbid aliasing the hop. Read-only once
/// registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationMetadata {
    /// The kind of relation
    pub kind: RelationKind,

    /// Name of the relation on the parent entity
    pub name: String,

    /// The related entity's name
    pub related: String,

    /// Correlation key pairs, one condition each; more than one models a
    /// composite key
    pub key_pairs: Vec<KeyPair>,

    /// Extra WHERE constraints attached to the relation definition
    pub wheres: Vec<WhereCondition>,

    /// Extra JOIN clauses attached to the relation definition
    pub joins: Vec<JoinClause>,
}

impl RelationMetadata {
    /// Create metadata with no key pairs yet
    pub fn new(kind: RelationKind, name: &str, related: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            related: related.to_string(),
            key_pairs: Vec::new(),
            wheres: Vec::new(),
            joins: Vec::new(),
        }
    }

    /// A belongs-to relation: the foreign key lives on the parent entity
    pub fn belongs_to(name: &str, related: &str, foreign_key: &str, owner_key: &str) -> Self {
        Self::new(RelationKind::BelongsTo, name, related).with_key_pair(foreign_key, owner_key)
    }

    /// A has-one relation: the foreign key lives on the related entity
    pub fn has_one(name: &str, related: &str, foreign_key: &str, local_key: &str) -> Self {
        Self::new(RelationKind::HasOne, name, related).with_key_pair(local_key, foreign_key)
    }

    /// A has-many relation: the foreign key lives on the related entity
    pub fn has_many(name: &str, related: &str, foreign_key: &str, local_key: &str) -> Self {
        Self::new(RelationKind::HasMany, name, related).with_key_pair(local_key, foreign_key)
    }

    /// Add a correlation key pair
    pub fn with_key_pair(mut self, parent: &str, related: &str) -> Self {
        self.key_pairs.push(KeyPair {
            parent: parent.to_string(),
            related: related.to_string(),
        });
        self
    }

    /// Attach an extra WHERE constraint to the relation definition
    pub fn with_where(mut self, condition: WhereCondition) -> Self {
        self.wheres.push(condition);
        self
    }

    /// Attach an extra JOIN clause to the relation definition
    pub fn with_join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// True when the relation definition carries extra wheres or joins
    pub fn has_extra_constraints(&self) -> bool {
        !self.wheres.is_empty() || !self.joins.is_empty()
    }
}
