// ── API record → domain conversions ──
//
// Display names fall back to the id when the controller omits them;
// site records with an unknown `type` do not convert at all.

use dnac_api::{GlobalPoolRecord, SiteRecord, SubPoolRecord};

use crate::model::{Resource, ResourceKind};

impl From<SubPoolRecord> for Resource {
    fn from(r: SubPoolRecord) -> Self {
        let name = r.group_name.unwrap_or_else(|| r.id.clone());
        Resource::new(r.id, name, ResourceKind::SubPool)
    }
}

impl From<GlobalPoolRecord> for Resource {
    fn from(r: GlobalPoolRecord) -> Self {
        let name = r.ip_pool_name.unwrap_or_else(|| r.id.clone());
        Resource::new(r.id, name, ResourceKind::Pool)
    }
}

/// Convert a site record, or `None` if its type is not area/building/floor.
pub(crate) fn site_resource(r: SiteRecord) -> Option<Resource> {
    let kind = ResourceKind::from_site_type(r.site_type.as_deref()?)?;
    let name = r
        .name
        .or_else(|| {
            r.name_hierarchy
                .as_deref()
                .and_then(|p| p.rsplit('/').next())
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| r.id.clone());

    Some(Resource {
        id: r.id,
        display_name: name,
        kind,
        hierarchy_path: r.name_hierarchy,
    })
}
