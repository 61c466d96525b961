//! Containment hierarchy construction.
//!
//! Converts the flat resource list plus typed connections into a forest of
//! containment nodes. One relationship kind (`belongs_to`) is the
//! containment signal; an edge nests its source under its target only when
//! the target exists and its kind is container-eligible. Everything else
//! stays a plain relationship and is rendered as a line.
//!
//! Nodes never hold parent back-pointers. Parent queries go through a
//! child-id → parent-id lookup built once here, which keeps ownership
//! acyclic and makes the renderer's nesting check a single map probe.

use indexmap::IndexMap;
use log::{debug, warn};

use cumulus_core::resource::{Connection, ConnectionKind, Inventory, Resource};

use crate::error::CumulusError;

/// A node in the containment forest, wrapping exactly one resource.
///
/// Children are stored as indices into the owning [`Hierarchy`] in the
/// order their containment edges were processed.
#[derive(Debug)]
pub struct HierarchyNode<'a> {
    resource: &'a Resource,
    children: Vec<usize>,
    level: usize,
}

impl<'a> HierarchyNode<'a> {
    /// The wrapped resource.
    pub fn resource(&self) -> &'a Resource {
        self.resource
    }

    /// Indices of this node's children, in containment-edge order.
    pub fn children(&self) -> &[usize] {
        &self.children
    }

    /// Containment depth: roots are 0, each nesting step adds 1.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Whether this node visually encloses children.
    ///
    /// A container-eligible resource with no children is treated as a leaf
    /// for layout and rendering purposes.
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }
}

/// The containment forest plus the child → parent lookup.
#[derive(Debug)]
pub struct Hierarchy<'a> {
    nodes: Vec<HierarchyNode<'a>>,
    index_by_id: IndexMap<&'a str, usize>,
    parent_of: IndexMap<&'a str, &'a str>,
    roots: Vec<usize>,
}

impl<'a> Hierarchy<'a> {
    /// Build the containment forest from an inventory.
    ///
    /// Containment edges are applied in connection-list order with a
    /// first-match-wins policy: once a resource has a parent, later
    /// `belongs_to` edges for it stay ordinary relationships. Edges with
    /// dangling endpoints, ineligible targets, or that would close a
    /// containment cycle are skipped without failing; the affected
    /// resource still renders, merely unparented.
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::Hierarchy`] if two resources share an id.
    pub fn build(inventory: &'a Inventory) -> Result<Self, CumulusError> {
        let mut nodes = Vec::with_capacity(inventory.resources.len());
        let mut index_by_id = IndexMap::with_capacity(inventory.resources.len());

        for resource in &inventory.resources {
            if index_by_id.contains_key(resource.id.as_str()) {
                return Err(CumulusError::Hierarchy(format!(
                    "duplicate resource id `{}`",
                    resource.id
                )));
            }
            index_by_id.insert(resource.id.as_str(), nodes.len());
            nodes.push(HierarchyNode {
                resource,
                children: Vec::new(),
                level: 0,
            });
        }

        let mut parent_of: IndexMap<&str, &str> = IndexMap::new();

        for connection in &inventory.connections {
            if connection.kind != ConnectionKind::BelongsTo {
                continue;
            }
            Self::apply_containment_edge(connection, &mut nodes, &index_by_id, &mut parent_of);
        }

        // Roots are the nodes never recorded as a child; orphans with no
        // eligible containment edge at all land here too.
        let roots: Vec<usize> = index_by_id
            .iter()
            .filter(|(id, _)| !parent_of.contains_key(*id))
            .map(|(_, &idx)| idx)
            .collect();

        let mut hierarchy = Self {
            nodes,
            index_by_id,
            parent_of,
            roots,
        };
        hierarchy.assign_levels();

        Ok(hierarchy)
    }

    /// Try to nest `connection.source` under `connection.target`.
    fn apply_containment_edge(
        connection: &'a Connection,
        nodes: &mut [HierarchyNode<'a>],
        index_by_id: &IndexMap<&'a str, usize>,
        parent_of: &mut IndexMap<&'a str, &'a str>,
    ) {
        let (Some(&child_idx), Some(&parent_idx)) = (
            index_by_id.get(connection.source.as_str()),
            index_by_id.get(connection.target.as_str()),
        ) else {
            warn!(
                source = connection.source,
                target = connection.target;
                "Skipping containment edge with dangling endpoint"
            );
            return;
        };

        if !nodes[parent_idx].resource.kind.is_container() {
            debug!(
                source = connection.source,
                target = connection.target;
                "Containment target is not container-eligible, keeping edge as a relationship"
            );
            return;
        }

        let child_id = connection.source.as_str();
        let parent_id = connection.target.as_str();

        // First match wins when a resource claims multiple parents.
        if parent_of.contains_key(child_id) {
            debug!(
                source = connection.source,
                target = connection.target;
                "Resource already has a parent, keeping edge as a relationship"
            );
            return;
        }

        if Self::would_close_cycle(parent_of, child_id, parent_id) {
            warn!(
                source = connection.source,
                target = connection.target;
                "Skipping containment edge that would close a cycle"
            );
            return;
        }

        nodes[parent_idx].children.push(child_idx);
        parent_of.insert(child_id, parent_id);
    }

    /// Whether nesting `child` under `parent` would make the forest cyclic,
    /// i.e. `child` is already an ancestor of `parent` (or is `parent`).
    fn would_close_cycle(parent_of: &IndexMap<&str, &str>, child_id: &str, parent_id: &str) -> bool {
        let mut current = Some(parent_id);
        while let Some(id) = current {
            if id == child_id {
                return true;
            }
            current = parent_of.get(id).copied();
        }
        false
    }

    /// Top-down traversal from the roots setting each child's level to its
    /// parent's level + 1.
    fn assign_levels(&mut self) {
        let mut stack: Vec<(usize, usize)> = self.roots.iter().map(|&idx| (idx, 0)).collect();

        while let Some((idx, level)) = stack.pop() {
            self.nodes[idx].level = level;
            for &child in &self.nodes[idx].children {
                stack.push((child, level + 1));
            }
        }
    }

    /// All nodes, in resource input order.
    pub fn nodes(&self) -> &[HierarchyNode<'a>] {
        &self.nodes
    }

    /// The node at the given index.
    pub fn node(&self, idx: usize) -> &HierarchyNode<'a> {
        &self.nodes[idx]
    }

    /// Number of nodes (one per resource).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Indices of the root nodes, in resource input order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// The node index for a resource id.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// The parent's resource id for a child's resource id, if nested.
    pub fn parent_of(&self, id: &str) -> Option<&'a str> {
        self.parent_of.get(id).copied()
    }

    /// Whether the drawn nesting already implies `child` sitting inside
    /// `parent`. This is the renderer's check for skipping `belongs_to`
    /// lines.
    pub fn is_direct_child(&self, child: &str, parent: &str) -> bool {
        self.parent_of(child) == Some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cumulus_core::resource::ResourceKind;

    fn resource(id: &str, kind: ResourceKind) -> Resource {
        Resource {
            id: id.to_string(),
            kind,
            name: id.to_uppercase(),
            properties: serde_json::Map::new(),
        }
    }

    fn belongs_to(source: &str, target: &str) -> Connection {
        Connection {
            source: source.to_string(),
            target: target.to_string(),
            kind: ConnectionKind::BelongsTo,
        }
    }

    #[test]
    fn test_nested_forest_and_levels() {
        let inventory = Inventory {
            resources: vec![
                resource("net", ResourceKind::Network),
                resource("sub", ResourceKind::Subnet),
                resource("vm", ResourceKind::Instance),
                resource("bucket", ResourceKind::ObjectStore),
            ],
            connections: vec![belongs_to("sub", "net"), belongs_to("vm", "sub")],
        };

        let hierarchy = Hierarchy::build(&inventory).unwrap();

        assert_eq!(hierarchy.len(), 4);
        // "net" and the orphan "bucket" are roots
        let root_ids: Vec<_> = hierarchy
            .roots()
            .iter()
            .map(|&idx| hierarchy.node(idx).resource().id.as_str())
            .collect();
        assert_eq!(root_ids, vec!["net", "bucket"]);

        let net = hierarchy.node(hierarchy.index_of("net").unwrap());
        let sub = hierarchy.node(hierarchy.index_of("sub").unwrap());
        let vm = hierarchy.node(hierarchy.index_of("vm").unwrap());
        assert_eq!(net.level(), 0);
        assert_eq!(sub.level(), 1);
        assert_eq!(vm.level(), 2);

        assert_eq!(hierarchy.parent_of("vm"), Some("sub"));
        assert_eq!(hierarchy.parent_of("sub"), Some("net"));
        assert_eq!(hierarchy.parent_of("net"), None);
        assert!(hierarchy.is_direct_child("vm", "sub"));
        assert!(!hierarchy.is_direct_child("vm", "net"));
    }

    #[test]
    fn test_children_keep_connection_order() {
        let inventory = Inventory {
            resources: vec![
                resource("net", ResourceKind::Network),
                resource("b", ResourceKind::Instance),
                resource("a", ResourceKind::Instance),
                resource("c", ResourceKind::Instance),
            ],
            connections: vec![
                belongs_to("b", "net"),
                belongs_to("a", "net"),
                belongs_to("c", "net"),
            ],
        };

        let hierarchy = Hierarchy::build(&inventory).unwrap();
        let net = hierarchy.node(hierarchy.index_of("net").unwrap());
        let child_ids: Vec<_> = net
            .children()
            .iter()
            .map(|&idx| hierarchy.node(idx).resource().id.as_str())
            .collect();
        assert_eq!(child_ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_first_match_wins_for_multiple_parents() {
        let inventory = Inventory {
            resources: vec![
                resource("sub1", ResourceKind::Subnet),
                resource("sub2", ResourceKind::Subnet),
                resource("vm", ResourceKind::Instance),
            ],
            connections: vec![belongs_to("vm", "sub1"), belongs_to("vm", "sub2")],
        };

        let hierarchy = Hierarchy::build(&inventory).unwrap();
        assert_eq!(hierarchy.parent_of("vm"), Some("sub1"));
        let sub2 = hierarchy.node(hierarchy.index_of("sub2").unwrap());
        assert!(sub2.children().is_empty());
    }

    #[test]
    fn test_ineligible_target_leaves_source_as_root() {
        let inventory = Inventory {
            resources: vec![
                resource("vm1", ResourceKind::Instance),
                resource("vm2", ResourceKind::Instance),
            ],
            connections: vec![belongs_to("vm1", "vm2")],
        };

        let hierarchy = Hierarchy::build(&inventory).unwrap();
        assert_eq!(hierarchy.roots().len(), 2);
        assert_eq!(hierarchy.parent_of("vm1"), None);
    }

    #[test]
    fn test_dangling_endpoints_are_skipped() {
        let inventory = Inventory {
            resources: vec![resource("vm", ResourceKind::Instance)],
            connections: vec![belongs_to("vm", "ghost"), belongs_to("phantom", "vm")],
        };

        let hierarchy = Hierarchy::build(&inventory).unwrap();
        assert_eq!(hierarchy.len(), 1);
        assert_eq!(hierarchy.roots(), &[0]);
    }

    #[test]
    fn test_duplicate_resource_id_is_rejected() {
        let inventory = Inventory {
            resources: vec![
                resource("dup", ResourceKind::Instance),
                resource("dup", ResourceKind::Database),
            ],
            connections: vec![],
        };

        let err = Hierarchy::build(&inventory).unwrap_err();
        assert!(matches!(err, CumulusError::Hierarchy(_)));
        assert!(err.to_string().contains("dup"));
    }

    #[test]
    fn test_containment_cycle_is_broken() {
        let inventory = Inventory {
            resources: vec![
                resource("sub1", ResourceKind::Subnet),
                resource("sub2", ResourceKind::Subnet),
            ],
            connections: vec![belongs_to("sub1", "sub2"), belongs_to("sub2", "sub1")],
        };

        let hierarchy = Hierarchy::build(&inventory).unwrap();
        // The second edge would close a cycle and is demoted to a plain
        // relationship, so sub2 stays the single root.
        assert_eq!(hierarchy.parent_of("sub1"), Some("sub2"));
        assert_eq!(hierarchy.parent_of("sub2"), None);
        assert_eq!(hierarchy.roots().len(), 1);

        let sub1 = hierarchy.node(hierarchy.index_of("sub1").unwrap());
        assert_eq!(sub1.level(), 1);
    }

    #[test]
    fn test_self_containment_is_skipped() {
        let inventory = Inventory {
            resources: vec![resource("sub", ResourceKind::Subnet)],
            connections: vec![belongs_to("sub", "sub")],
        };

        let hierarchy = Hierarchy::build(&inventory).unwrap();
        assert_eq!(hierarchy.parent_of("sub"), None);
        assert_eq!(hierarchy.roots().len(), 1);
    }
}
