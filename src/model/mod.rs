// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project model entities as seen by the ordering core.
//!
//! ```text
//! ProjectModel
//!   elements:   ElementId   --> Element   { name?, path?, parent? }
//!   references: ReferenceId --> Reference { file? }
//!   targets:    TargetKey   --> ElementId
//!
//! Reference.file  --> Element
//! Element.parent  --> Element (one level read for sort keys)
//! ```
//!
//! Entities are owned by the model; the ordering core only reads them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{OrderError, OrderResult};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from its canonical string form.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Canonical string form.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// Unique identifier of an [`Element`].
    ElementId
}

string_id! {
    /// Unique identifier of a [`Reference`].
    ReferenceId
}

string_id! {
    /// Identifier of a build target, used as a tie-break dimension.
    ///
    /// Ordering is lexicographic over the canonical string form.
    TargetKey
}

/// A named and/or pathed entity that can be ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    id: ElementId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<ElementId>,
}

impl Element {
    /// Create an element with neither name, path nor parent.
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            path: None,
            parent: None,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the parent element.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<ElementId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> &ElementId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    #[must_use]
    pub const fn parent(&self) -> Option<&ElementId> {
        self.parent.as_ref()
    }

    /// Name if present, else path, else the empty string.
    #[must_use]
    pub fn display(&self) -> &str {
        self.name().or_else(|| self.path()).unwrap_or_default()
    }
}

/// An entity pointing at exactly one [`Element`].
///
/// A reference has no name or path of its own; it is ordered entirely by
/// the element it points to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    id: ReferenceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    file: Option<ElementId>,
}

impl Reference {
    /// Create a reference to `file`.
    pub fn new(id: impl Into<ReferenceId>, file: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            file: Some(file.into()),
        }
    }

    /// Create a reference that is not linked to any element.
    pub fn unlinked(id: impl Into<ReferenceId>) -> Self {
        Self {
            id: id.into(),
            file: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ReferenceId {
        &self.id
    }

    #[must_use]
    pub const fn file(&self) -> Option<&ElementId> {
        self.file.as_ref()
    }
}

/// Read access to elements by identifier.
///
/// Implemented by [`ProjectModel`]; callers with their own model storage can
/// implement it to order references without building a `ProjectModel`.
pub trait ElementLookup {
    /// Look up an element by identifier.
    fn element(&self, id: &ElementId) -> Option<&Element>;

    /// Resolve the element a reference points to.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::UnlinkedReference`] if the reference has no
    /// associated element, or [`OrderError::UnknownElement`] if it points at
    /// an identifier this lookup does not know.
    fn resolve_file(&self, reference: &Reference) -> OrderResult<&Element> {
        let id = reference
            .file()
            .ok_or_else(|| OrderError::UnlinkedReference {
                reference: reference.id().to_string(),
            })?;
        self.element(id)
            .ok_or_else(|| OrderError::UnknownElement { id: id.to_string() })
    }

    /// Resolve the parent of an element, if it has one.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::UnknownElement`] if the parent identifier is
    /// dangling.
    fn parent_of(&self, element: &Element) -> OrderResult<Option<&Element>> {
        element
            .parent()
            .map(|id| {
                self.element(id)
                    .ok_or_else(|| OrderError::UnknownElement { id: id.to_string() })
            })
            .transpose()
    }
}

/// Arena of elements and references addressed by identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectModel {
    #[serde(with = "by_id::elements")]
    elements: BTreeMap<ElementId, Element>,
    #[serde(with = "by_id::references")]
    references: BTreeMap<ReferenceId, Reference>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    targets: BTreeMap<TargetKey, ElementId>,
}

impl ProjectModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a model from its JSON dump.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Model`] if the content is not a valid model.
    pub fn from_json_str(content: &str) -> OrderResult<Self> {
        serde_json::from_str(content).map_err(|e| OrderError::Model {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a model from a JSON dump on disk.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::Model`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> OrderResult<Self> {
        let path = path.as_ref();
        let model_err = |message: String| OrderError::Model {
            path: path.display().to_string(),
            message,
        };
        let content = std::fs::read_to_string(path).map_err(|e| model_err(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| model_err(e.to_string()))
    }

    /// Insert an element, replacing any element with the same identifier.
    pub fn insert_element(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    /// Insert a reference, replacing any reference with the same identifier.
    pub fn insert_reference(&mut self, reference: Reference) {
        self.references.insert(reference.id.clone(), reference);
    }

    /// Associate a target with the element it references.
    pub fn insert_target(&mut self, target: impl Into<TargetKey>, file: impl Into<ElementId>) {
        self.targets.insert(target.into(), file.into());
    }

    #[must_use]
    pub fn reference(&self, id: &ReferenceId) -> Option<&Reference> {
        self.references.get(id)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn references(&self) -> impl Iterator<Item = &Reference> {
        self.references.values()
    }

    /// Target → element pairs, resolved against the model.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::UnknownElement`] if a target points at an
    /// identifier that is not in the model.
    pub fn target_files(&self) -> OrderResult<Vec<(&TargetKey, &Element)>> {
        self.targets
            .iter()
            .map(|(target, id)| {
                self.element(id)
                    .map(|element| (target, element))
                    .ok_or_else(|| OrderError::UnknownElement { id: id.to_string() })
            })
            .collect()
    }
}

impl ElementLookup for ProjectModel {
    fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }
}

impl ElementLookup for BTreeMap<ElementId, Element> {
    fn element(&self, id: &ElementId) -> Option<&Element> {
        self.get(id)
    }
}

impl ElementLookup for std::collections::HashMap<ElementId, Element> {
    fn element(&self, id: &ElementId) -> Option<&Element> {
        self.get(id)
    }
}

/// Serde adapters storing id-keyed maps as plain JSON arrays.
mod by_id {
    macro_rules! id_list {
        ($module:ident, $id:ty, $entity:ty) => {
            pub(super) mod $module {
                use serde::{Deserialize, Deserializer, Serializer};
                use std::collections::BTreeMap;

                pub(crate) fn serialize<S>(
                    map: &BTreeMap<$id, $entity>,
                    serializer: S,
                ) -> std::result::Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.collect_seq(map.values())
                }

                pub(crate) fn deserialize<'de, D>(
                    deserializer: D,
                ) -> std::result::Result<BTreeMap<$id, $entity>, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let list = Vec::<$entity>::deserialize(deserializer)?;
                    Ok(list.into_iter().map(|e| (e.id.clone(), e)).collect())
                }
            }
        };
    }

    id_list!(elements, crate::model::ElementId, crate::model::Element);
    id_list!(references, crate::model::ReferenceId, crate::model::Reference);
}

#[cfg(test)]
mod tests;
