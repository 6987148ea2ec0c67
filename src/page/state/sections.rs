use crate::page::messages::Extent;

/// Named page region, identified by its `id` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub(in crate::page) id: String,
}

/// Navigation entry; `section` is resolved once from the link's href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub(in crate::page) section: Option<usize>,
}

/// Section list plus which one currently owns the highlight.
#[derive(Debug, Clone, Default)]
pub struct SectionState {
    pub(in crate::page) sections: Vec<Section>,
    pub(in crate::page) links: Vec<NavLink>,
    pub(in crate::page) active: Option<usize>,
}

impl SectionState {
    pub(in crate::page) fn new(section_ids: &[String], link_hrefs: &[String]) -> Self {
        let sections = section_ids
            .iter()
            .map(|id| Section { id: id.clone() })
            .collect::<Vec<_>>();
        let links = link_hrefs
            .iter()
            .map(|href| NavLink {
                section: href
                    .strip_prefix('#')
                    .and_then(|fragment| sections.iter().position(|s| s.id == fragment)),
            })
            .collect();
        SectionState {
            sections,
            links,
            active: None,
        }
    }

    /// Section whose extent contains `position`. When extents overlap the
    /// last one in document order wins.
    pub(in crate::page) fn section_at(&self, position: f64, extents: &[Extent]) -> Option<usize> {
        self.sections
            .iter()
            .zip(extents)
            .enumerate()
            .filter(|(_, (_, extent))| extent.contains(position))
            .map(|(idx, _)| idx)
            .last()
    }

    pub(in crate::page) fn section_id(&self, idx: usize) -> Option<&str> {
        self.sections.get(idx).map(|s| s.id.as_str())
    }
}
