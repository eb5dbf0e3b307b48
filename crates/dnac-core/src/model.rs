// ── Cleanup domain types ──
//
// Everything here is built fresh from one listing response and thrown
// away after the run.

use serde::Serialize;
use strum::{Display, EnumIter};

/// The two resource families a run cleans up, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Family {
    Pools,
    Sites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    Pool,
    SubPool,
    Area,
    Building,
    Floor,
}

impl ResourceKind {
    pub fn family(self) -> Family {
        match self {
            Self::Pool | Self::SubPool => Family::Pools,
            Self::Area | Self::Building | Self::Floor => Family::Sites,
        }
    }

    /// Human label used in progress output ("IP sub pool", "floor", ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Pool => "IP pool",
            Self::SubPool => "IP sub pool",
            Self::Area => "area",
            Self::Building => "building",
            Self::Floor => "floor",
        }
    }

    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Pool => "IP pools",
            Self::SubPool => "IP sub pools",
            Self::Area => "areas",
            Self::Building => "buildings",
            Self::Floor => "floors",
        }
    }

    /// Parse the controller's site `type` field.
    pub fn from_site_type(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "area" => Some(Self::Area),
            "building" => Some(Self::Building),
            "floor" => Some(Self::Floor),
            _ => None,
        }
    }
}

/// One deletable object on the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub id: String,
    pub display_name: String,
    pub kind: ResourceKind,
    /// Slash-delimited ancestry, e.g. `Global/Building1/Floor2`.
    /// Only site-family resources carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy_path: Option<String>,
}

impl Resource {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            kind,
            hierarchy_path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.hierarchy_path = Some(path.into());
        self
    }

    /// The hierarchy path if it is present and non-empty.
    pub fn path(&self) -> Option<&str> {
        self.hierarchy_path
            .as_deref()
            .filter(|p| !p.trim().is_empty())
    }

    /// What to show a human: the full path for sites, the name otherwise.
    pub fn label(&self) -> &str {
        self.path().unwrap_or(&self.display_name)
    }
}

/// Resources of one kind that are processed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionGroup {
    pub kind: ResourceKind,
    pub resources: Vec<Resource>,
}

impl DeletionGroup {
    pub fn new(kind: ResourceKind, resources: Vec<Resource>) -> Self {
        Self { kind, resources }
    }

    pub fn ids(&self) -> Vec<&str> {
        self.resources.iter().map(|r| r.id.as_str()).collect()
    }
}

/// Ordered groups; each group is fully processed before the next starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionPlan {
    pub family: Family,
    pub groups: Vec<DeletionGroup>,
}

impl DeletionPlan {
    /// Total resources across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.resources.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Group ids in plan order, handy for assertions and logging.
    pub fn ids(&self) -> Vec<Vec<&str>> {
        self.groups.iter().map(DeletionGroup::ids).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeletionStatus {
    Deleted,
    Failed,
}

/// Result of one attempted delete. Never discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionOutcome {
    pub resource: Resource,
    pub status: DeletionStatus,
    pub detail: String,
}

impl DeletionOutcome {
    pub fn deleted(resource: Resource, detail: impl Into<String>) -> Self {
        Self {
            resource,
            status: DeletionStatus::Deleted,
            detail: detail.into(),
        }
    }

    pub fn failed(resource: Resource, detail: impl Into<String>) -> Self {
        Self {
            resource,
            status: DeletionStatus::Failed,
            detail: detail.into(),
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.status == DeletionStatus::Deleted
    }
}
