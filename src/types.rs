use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

//==============================================================================
// Entity Kinds
//==============================================================================

/// The object types the OTRS admin console can create from a workbook row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Agent,
    Customer,
    CustomerUser,
    Ci,
}

impl EntityKind {
    /// Every kind, in processing order
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Agent,
        EntityKind::Customer,
        EntityKind::CustomerUser,
        EntityKind::Ci,
    ];

    /// Sheet-name token for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Agent => "agent",
            EntityKind::Customer => "customer",
            EntityKind::CustomerUser => "customer_user",
            EntityKind::Ci => "ci",
        }
    }

    /// Resolve a sheet-name token. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        EntityKind::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// otrs.Console.pl subcommand that creates one entity of this kind
    pub fn subcommand(&self) -> &'static str {
        match self {
            EntityKind::Agent => "Admin::User::Add",
            EntityKind::Customer => "Admin::CustomerCompany::Add",
            EntityKind::CustomerUser => "Admin::CustomerUser::Add",
            EntityKind::Ci => "Admin::ITSM::ConfigItem::Add",
        }
    }

    /// Only config items carry `attr*-` dynamic field columns
    pub fn flattens_attributes(&self) -> bool {
        matches!(self, EntityKind::Ci)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==============================================================================
// Sheet Classification
//==============================================================================

/// Kind token and optional sub-class derived from a worksheet name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetClassification {
    pub kind: String,
    pub subclass: Option<String>,
}

impl SheetClassification {
    pub fn new(kind: impl Into<String>, subclass: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            subclass,
        }
    }

    /// The known entity kind, if the token names one
    pub fn entity_kind(&self) -> Option<EntityKind> {
        EntityKind::from_name(&self.kind)
    }
}

//==============================================================================
// Entities
//==============================================================================

/// Key holding the sub-class injected from the sheet name
pub const CLASS_KEY: &str = "class";

/// One worksheet row: header text → cell text
///
/// Keys keep insertion order. An injected `class` always comes first;
/// a repeated header keeps its first position and takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Entity {
    attributes: IndexMap<String, String>,
}

impl Entity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an entity tagged with a sheet sub-class
    pub fn with_class(class: impl Into<String>) -> Self {
        let mut entity = Self::new();
        entity.insert(CLASS_KEY, class);
        entity
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn class(&self) -> Option<&str> {
        self.get(CLASS_KEY)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Entity {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut entity = Entity::new();
        for (key, value) in iter {
            entity.insert(key, value);
        }
        entity
    }
}

/// Entities grouped by the kind token of the sheet they came from
///
/// Groups appear in sheet encounter order; rows keep sheet order within a group.
/// Tokens that name no [`EntityKind`] are kept so they show up in the dump.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntityCollection {
    groups: IndexMap<String, Vec<Entity>>,
}

impl EntityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entities to a group, creating it if needed
    pub fn extend(&mut self, kind: impl Into<String>, entities: impl IntoIterator<Item = Entity>) {
        self.groups.entry(kind.into()).or_default().extend(entities);
    }

    pub fn push(&mut self, kind: impl Into<String>, entity: Entity) {
        self.extend(kind, std::iter::once(entity));
    }

    /// Entities of a known kind (empty if no sheet produced any)
    pub fn entities(&self, kind: EntityKind) -> &[Entity] {
        self.group(kind.as_str()).unwrap_or(&[])
    }

    pub fn group(&self, name: &str) -> Option<&[Entity]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Group names no kind handler will ever read
    pub fn unknown_groups(&self) -> impl Iterator<Item = &str> {
        self.group_names()
            .filter(|name| EntityKind::from_name(name).is_none())
    }

    pub fn total_entities(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

//==============================================================================
// Selection
//==============================================================================

/// Entity kinds requested on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub agent: bool,
    pub customer: bool,
    pub customer_user: bool,
    pub ci: bool,
}

impl Selection {
    /// Selection with exactly one kind requested
    pub fn only(kind: EntityKind) -> Self {
        let mut selection = Self::default();
        selection.request(kind);
        selection
    }

    pub fn request(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Agent => self.agent = true,
            EntityKind::Customer => self.customer = true,
            EntityKind::CustomerUser => self.customer_user = true,
            EntityKind::Ci => self.ci = true,
        }
    }

    pub fn is_requested(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Agent => self.agent,
            EntityKind::Customer => self.customer,
            EntityKind::CustomerUser => self.customer_user,
            EntityKind::Ci => self.ci,
        }
    }

    /// True when no kind was explicitly requested
    pub fn is_empty(&self) -> bool {
        !EntityKind::ALL.iter().any(|kind| self.is_requested(*kind))
    }
}
