//! The cloud-resource semantic model.
//!
//! This module defines the input contract of the diagram pipeline: a flat
//! [`Inventory`] of [`Resource`]s plus typed [`Connection`]s between them,
//! as produced by an external collector and consumed by the hierarchy
//! builder. The model is deserialized from JSON with serde.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The closed set of known resource categories.
///
/// Kinds are serialized in kebab-case (`"security-group"`, `"object-store"`).
/// Unknown kinds in the input are a deserialization error; the collector
/// contract only emits these categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Network,
    Subnet,
    SecurityGroup,
    Instance,
    InternetGateway,
    NatGateway,
    ObjectStore,
    Database,
    Function,
    KeyValueStore,
    LoadBalancer,
}

impl ResourceKind {
    /// Whether this kind may visually enclose other resources.
    ///
    /// The container-eligible set is fixed: network boundaries, subnets and
    /// security groups. Every other kind is always a leaf.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            ResourceKind::Network | ResourceKind::Subnet | ResourceKind::SecurityGroup
        )
    }

    /// The kebab-case label used on the wire and in rendered diagrams.
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Network => "network",
            ResourceKind::Subnet => "subnet",
            ResourceKind::SecurityGroup => "security-group",
            ResourceKind::Instance => "instance",
            ResourceKind::InternetGateway => "internet-gateway",
            ResourceKind::NatGateway => "nat-gateway",
            ResourceKind::ObjectStore => "object-store",
            ResourceKind::Database => "database",
            ResourceKind::Function => "function",
            ResourceKind::KeyValueStore => "key-value-store",
            ResourceKind::LoadBalancer => "load-balancer",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single collected cloud resource.
///
/// Identity is `id`; ids must be unique across the inventory (duplicates are
/// rejected when the hierarchy is built). `properties` is an open map that
/// rides along for future use; the layout pipeline does not interpret it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub kind: ResourceKind,
    pub name: String,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// The semantic type of a relationship between two resources.
///
/// `BelongsTo` is the containment signal consumed by the hierarchy builder;
/// all other kinds are rendered as relationship lines. Kinds outside the
/// known set are preserved verbatim in `Other` so their label still renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    BelongsTo,
    Uses,
    AttachedTo,
    RoutesTo,
    Calls,
    Invokes,
    Other(String),
}

impl ConnectionKind {
    /// The snake_case label used on the wire and for midpoint labels.
    pub fn label(&self) -> &str {
        match self {
            ConnectionKind::BelongsTo => "belongs_to",
            ConnectionKind::Uses => "uses",
            ConnectionKind::AttachedTo => "attached_to",
            ConnectionKind::RoutesTo => "routes_to",
            ConnectionKind::Calls => "calls",
            ConnectionKind::Invokes => "invokes",
            ConnectionKind::Other(label) => label,
        }
    }
}

impl From<&str> for ConnectionKind {
    fn from(s: &str) -> Self {
        match s {
            "belongs_to" => ConnectionKind::BelongsTo,
            "uses" => ConnectionKind::Uses,
            "attached_to" => ConnectionKind::AttachedTo,
            "routes_to" => ConnectionKind::RoutesTo,
            "calls" => ConnectionKind::Calls,
            "invokes" => ConnectionKind::Invokes,
            other => ConnectionKind::Other(other.to_string()),
        }
    }
}

impl FromStr for ConnectionKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ConnectionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ConnectionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(ConnectionKind::from(s.as_str()))
    }
}

/// A directed, typed relationship between two resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
}

/// The full input contract from the data-collection collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Inventory {
    /// Deserialize an inventory from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_labels_round_trip() {
        let kinds = [
            ResourceKind::Network,
            ResourceKind::Subnet,
            ResourceKind::SecurityGroup,
            ResourceKind::Instance,
            ResourceKind::InternetGateway,
            ResourceKind::NatGateway,
            ResourceKind::ObjectStore,
            ResourceKind::Database,
            ResourceKind::Function,
            ResourceKind::KeyValueStore,
            ResourceKind::LoadBalancer,
        ];
        for kind in kinds {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
            let back: ResourceKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_container_eligible_set_is_fixed() {
        assert!(ResourceKind::Network.is_container());
        assert!(ResourceKind::Subnet.is_container());
        assert!(ResourceKind::SecurityGroup.is_container());
        assert!(!ResourceKind::Instance.is_container());
        assert!(!ResourceKind::Database.is_container());
        assert!(!ResourceKind::LoadBalancer.is_container());
    }

    #[test]
    fn test_connection_kind_parses_known_labels() {
        let kind: ConnectionKind = "belongs_to".parse().unwrap();
        assert_eq!(kind, ConnectionKind::BelongsTo);

        let kind: ConnectionKind = "routes_to".parse().unwrap();
        assert_eq!(kind, ConnectionKind::RoutesTo);
    }

    #[test]
    fn test_connection_kind_preserves_unknown_labels() {
        let kind: ConnectionKind = "replicates_to".parse().unwrap();
        assert_eq!(kind, ConnectionKind::Other("replicates_to".to_string()));
        assert_eq!(kind.label(), "replicates_to");
    }

    #[test]
    fn test_inventory_from_json() {
        let json = r#"{
            "resources": [
                {
                    "id": "net-1",
                    "kind": "network",
                    "name": "Main Network",
                    "properties": { "cidr": "10.0.0.0/16" }
                },
                {
                    "id": "vm-1",
                    "kind": "instance",
                    "name": "Web Server"
                }
            ],
            "connections": [
                { "source": "vm-1", "target": "net-1", "type": "belongs_to" }
            ]
        }"#;

        let inventory = Inventory::from_json(json).unwrap();
        assert_eq!(inventory.resources.len(), 2);
        assert_eq!(inventory.connections.len(), 1);
        assert_eq!(inventory.resources[0].kind, ResourceKind::Network);
        assert_eq!(inventory.connections[0].kind, ConnectionKind::BelongsTo);
    }

    #[test]
    fn test_inventory_rejects_unknown_resource_kind() {
        let json = r#"{
            "resources": [
                { "id": "x", "kind": "quantum-computer", "name": "X" }
            ],
            "connections": []
        }"#;

        assert!(Inventory::from_json(json).is_err());
    }

    #[test]
    fn test_empty_inventory_defaults() {
        let inventory = Inventory::from_json("{}").unwrap();
        assert!(inventory.resources.is_empty());
        assert!(inventory.connections.is_empty());
    }
}
