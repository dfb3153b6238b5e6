//! Host CMS collaborators.
//!
//! Widgets never talk to the CMS directly; they go through [`ContentQuery`]
//! and [`Viewer`]. [`InMemoryContent`] is a YAML-backed implementation used by
//! the preview CLI and by tests.
//!
//! # Fixture format
//!
//! ```yaml
//! menus:
//!   - id: 3
//!     name: Other Resources
//!     slug: other-resources
//!     items:
//!       - title: Catalog
//!         url: catalog.ucf.edu
//!         classes: [menu-item, external]
//! posts:
//!   - id: 12
//!     post_type: contact
//!     title: Main
//!     meta:
//!       contact_phone: 407-823-0000
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::HostError;
use crate::types::PostId;

/// A navigation menu as listed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// One entry of a navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub title: String,
    pub url: String,
    /// CSS classes the host assigns to the item.
    #[serde(default)]
    pub classes: Vec<String>,
}

/// Minimal view of a published post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: PostId,
    pub title: String,
}

/// Content lookups the widgets need from the host CMS.
pub trait ContentQuery {
    /// Every navigation menu.
    fn nav_menus(&self) -> Result<Vec<NavMenu>, HostError>;

    /// Items of the menu whose id, slug or name equals `menu`.
    /// `Ok(None)` means no such menu exists.
    fn nav_menu_items(&self, menu: &str) -> Result<Option<Vec<MenuItem>>, HostError>;

    /// Published posts of `post_type`, in host order.
    fn posts_of_type(&self, post_type: &str) -> Result<Vec<PostSummary>, HostError>;

    /// Metadata fields of a post. Unknown posts have no fields.
    fn post_meta(&self, id: PostId) -> Result<BTreeMap<String, String>, HostError>;
}

/// The current viewer's privileges.
pub trait Viewer {
    /// Whether the viewer may edit content (and so may see error detail).
    fn can_edit_posts(&self) -> bool;
}

impl Viewer for bool {
    fn can_edit_posts(&self) -> bool {
        *self
    }
}

// ---------------------------------------------------------------------------
// In-memory host
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureMenu {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixturePost {
    pub id: PostId,
    pub post_type: String,
    pub title: String,
    #[serde(default = "publish")]
    pub status: String,
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

fn publish() -> String {
    "publish".to_string()
}

/// [`ContentQuery`] over menus and posts held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InMemoryContent {
    #[serde(default)]
    pub menus: Vec<FixtureMenu>,
    #[serde(default)]
    pub posts: Vec<FixturePost>,
}

impl InMemoryContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a YAML fixture from `path`.
    pub fn load_at(path: &Path) -> Result<Self, HostError> {
        let contents = std::fs::read_to_string(path).map_err(|source| HostError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| HostError::Fixture {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_menu(mut self, name: &str, slug: &str, items: Vec<MenuItem>) -> Self {
        let id = self.menus.len() as u64 + 1;
        self.menus.push(FixtureMenu {
            id,
            name: name.to_owned(),
            slug: slug.to_owned(),
            items,
        });
        self
    }

    pub fn with_post(
        mut self,
        id: u64,
        post_type: &str,
        title: &str,
        meta: &[(&str, &str)],
    ) -> Self {
        self.posts.push(FixturePost {
            id: PostId(id),
            post_type: post_type.to_owned(),
            title: title.to_owned(),
            status: publish(),
            meta: meta
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        });
        self
    }

    fn find_menu(&self, menu: &str) -> Option<&FixtureMenu> {
        self.menus
            .iter()
            .find(|m| m.slug == menu || m.name == menu || m.id.to_string() == menu)
    }
}

impl ContentQuery for InMemoryContent {
    fn nav_menus(&self) -> Result<Vec<NavMenu>, HostError> {
        Ok(self
            .menus
            .iter()
            .map(|m| NavMenu {
                id: m.id,
                name: m.name.clone(),
                slug: m.slug.clone(),
            })
            .collect())
    }

    fn nav_menu_items(&self, menu: &str) -> Result<Option<Vec<MenuItem>>, HostError> {
        Ok(self.find_menu(menu).map(|m| m.items.clone()))
    }

    fn posts_of_type(&self, post_type: &str) -> Result<Vec<PostSummary>, HostError> {
        Ok(self
            .posts
            .iter()
            .filter(|p| p.post_type == post_type && p.status == "publish")
            .map(|p| PostSummary {
                id: p.id,
                title: p.title.clone(),
            })
            .collect())
    }

    fn post_meta(&self, id: PostId) -> Result<BTreeMap<String, String>, HostError> {
        Ok(self
            .posts
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.meta.clone())
            .unwrap_or_default())
    }
}
