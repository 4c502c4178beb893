//! Per-operation write policy for canvas mutations.
//!
//! DESIGN
//! ======
//! The store applies some mutations before the remote write and some only
//! after it. That asymmetry is deliberate: structural graph changes must
//! never show state the server refused, while cosmetic moves and removals
//! may diverge transiently. Encoding the split here, rather than ad hoc at
//! each call site, keeps the action layer honest about which side of the
//! request a mutation lands on and lets failure notices say the right thing.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

/// When a mutation lands in local state relative to its remote write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePolicy {
    /// Local state changes first; a remote failure is reported but the
    /// local change stands.
    Optimistic,
    /// Local state changes only after the server confirms.
    Pessimistic,
}

/// Every canvas mutation that involves a remote write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasOp {
    MoveNode,
    DeleteNode,
    CreateEdge,
    DeleteEdge,
    RenameNode,
    ChangeStatus,
    AddScreen,
}

impl CanvasOp {
    /// Which side of the remote write this operation's local mutation is on.
    #[must_use]
    pub fn write_policy(self) -> WritePolicy {
        match self {
            Self::MoveNode | Self::DeleteNode => WritePolicy::Optimistic,
            Self::CreateEdge | Self::DeleteEdge | Self::RenameNode | Self::ChangeStatus | Self::AddScreen => {
                WritePolicy::Pessimistic
            }
        }
    }

    /// Short human-readable name used in failure notices.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MoveNode => "move screen",
            Self::DeleteNode => "delete screen",
            Self::CreateEdge => "create connection",
            Self::DeleteEdge => "delete connection",
            Self::RenameNode => "rename screen",
            Self::ChangeStatus => "update status",
            Self::AddScreen => "add screen",
        }
    }

    /// Notice text for a failed remote write, phrased per policy: an
    /// optimistic failure means local and saved copies now differ, while a
    /// pessimistic failure means nothing changed.
    #[must_use]
    pub fn failure_notice(self, detail: &str) -> String {
        match self.write_policy() {
            WritePolicy::Optimistic => {
                format!("Could not save {}: {detail}. The canvas may be out of sync.", self.label())
            }
            WritePolicy::Pessimistic => {
                format!("Could not {}: {detail}. Nothing was changed.", self.label())
            }
        }
    }
}
