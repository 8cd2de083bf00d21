use serde::Serialize;
use std::collections::BTreeMap;

use crate::es::api::IndexSegments;
use crate::utils::{format_bytes, format_number};

/// Jedna fyzická kopie shardu v přehledové tabulce
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ShardSummary {
    pub id: String,
    pub primary: bool,
    pub node: Option<String>,
}

impl ShardSummary {
    /// "p" pro primary, "r" pro repliku
    pub fn prirep(&self) -> &'static str {
        if self.primary {
            "p"
        } else {
            "r"
        }
    }

    pub fn node_label(&self) -> &str {
        self.node.as_deref().unwrap_or("unassigned")
    }
}

/// Jeden index se součtem segment memory přes všechny jeho shardy
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct IndexGroup {
    pub index: String,
    pub memory: u64,
    pub shards: Vec<ShardSummary>,
}

/// Souhrnné statistiky pro hlavičku stránky
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SegmentTotals {
    pub indices: usize,
    pub shard_instances: usize,
    pub memory_bytes: u64,
}

impl SegmentTotals {
    pub fn from_groups(groups: &[IndexGroup]) -> Self {
        Self {
            indices: groups.len(),
            shard_instances: groups.iter().map(|g| g.shards.len()).sum(),
            memory_bytes: groups.iter().map(|g| g.memory).sum(),
        }
    }

    /// Vrátí celkovou memory jako human-readable formát
    pub fn memory_formatted(&self) -> String {
        format_bytes(self.memory_bytes)
    }

    /// Vrátí celkovou memory v bytech s oddělovači
    pub fn memory_bytes_formatted(&self) -> String {
        format_number(self.memory_bytes)
    }
}

/// Sečte segment memory per shard a per index a seřadí indexy
/// vzestupně podle celkové memory. Řazení je stabilní - indexy se
/// stejnou memory zůstávají v pořadí vstupní iterace.
pub fn aggregate(indices: &BTreeMap<String, IndexSegments>) -> Vec<IndexGroup> {
    let mut groups: Vec<IndexGroup> = indices
        .iter()
        .map(|(name, index)| {
            let mut memory: u64 = 0;
            let mut shards = Vec::new();

            for (shard_id, instances) in &index.shards {
                for instance in instances {
                    memory += instance
                        .segments
                        .values()
                        .map(|segment| segment.memory_in_bytes)
                        .sum::<u64>();

                    shards.push(ShardSummary {
                        id: shard_id.clone(),
                        primary: instance.routing.primary,
                        node: instance.routing.node.clone(),
                    });
                }
            }

            IndexGroup {
                index: name.clone(),
                memory,
                shards,
            }
        })
        .collect();

    groups.sort_by_key(|group| group.memory);
    groups
}
