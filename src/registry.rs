//! Instance arena with node-identity deduplication.
//!
//! The registry is the only place instances are created, which keeps the
//! "one instance per syntactic node" rule in a single spot. It also owns the
//! mirrored edge writers, so no caller can write one half of an edge.

use std::collections::HashMap;

use crate::dependency::{DepNodeRef, NodeKey};
use crate::instance::{Instance, InstanceId, InstanceNode};
use crate::semantic_type::{AttributeType, SemanticType};

#[derive(Debug, Default)]
pub struct InstanceRegistry {
    instances: Vec<Instance>,
    by_node: HashMap<NodeKey, InstanceId>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the instance for `node`, creating it on first encounter.
    ///
    /// `sentence` is recorded only when the instance is created.
    pub fn get_or_create(&mut self, node: DepNodeRef<'_>, sentence: usize) -> InstanceId {
        let key = node.key();
        if let Some(&id) = self.by_node.get(&key) {
            return id;
        }

        let id = InstanceId(self.instances.len());
        self.instances
            .push(Instance::new(id, InstanceNode::from_dep(node), sentence));
        self.by_node.insert(key, id);
        id
    }

    pub fn lookup(&self, key: NodeKey) -> Option<InstanceId> {
        self.by_node.get(&key).copied()
    }

    pub fn get(&self, id: InstanceId) -> Option<&Instance> {
        self.instances.get(id.0)
    }

    /// All instances in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Instance> + '_ {
        self.instances.iter()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Write `predicate -role-> argument` and its mirror on `argument`.
    pub(crate) fn link_argument(
        &mut self,
        predicate: InstanceId,
        role: SemanticType,
        argument: InstanceId,
    ) {
        self.instances[predicate.0].put_argument(role, argument);
        self.instances[argument.0].put_predicate(role, predicate);
    }

    /// Write a symmetric attribute edge between `a` and `b`.
    pub(crate) fn link_attribute(&mut self, a: InstanceId, category: AttributeType, b: InstanceId) {
        self.instances[a.0].put_attribute(category, b);
        self.instances[b.0].put_attribute(category, a);
    }
}
