//! 跟踪客户端已加入的逻辑频道。
//! Tracks which logical channels the client has joined.

use std::collections::BTreeSet;

/// The set of channels the client considers itself joined to.
///
/// Membership is client-side intent, independent of transport connectivity:
/// it survives disconnects and is replayed as join requests after every
/// successful reconnect. Entries leave the set only through an explicit
/// leave.
///
/// 客户端认为自己已加入的频道集合。
///
/// 成员关系是客户端侧的意图，与传输连通性无关：它在断线后仍然保留，
/// 并在每次成功重连后作为加入请求被重放。条目只会通过显式离开而移除。
#[derive(Debug, Default)]
pub(crate) struct ChannelMembership {
    channels: BTreeSet<String>,
}

impl ChannelMembership {
    pub(crate) fn insert(&mut self, id: &str) -> bool {
        self.channels.insert(id.to_string())
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        self.channels.remove(id)
    }

    /// The channels to replay after a reconnect, in stable order.
    /// 重连后需要重放的频道，顺序稳定。
    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_a_set_with_explicit_removal() {
        let mut membership = ChannelMembership::default();
        assert!(membership.insert("conv-42"));
        assert!(!membership.insert("conv-42"));
        assert!(membership.insert("workspace-7"));
        assert_eq!(membership.len(), 2);

        assert!(membership.remove("conv-42"));
        assert!(!membership.remove("conv-42"));
        assert_eq!(membership.len(), 1);
    }

    #[test]
    fn replay_order_is_stable() {
        let mut membership = ChannelMembership::default();
        membership.insert("b");
        membership.insert("a");
        membership.insert("c");
        let order: Vec<&str> = membership.iter().collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }
}
