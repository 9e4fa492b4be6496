//! 认证令牌提供者的抽象接口。
//! Abstraction over the authentication token provider.

/// Source of the bearer token used to authenticate the transport handshake.
///
/// The provider is queried synchronously immediately before every connection
/// attempt; an expired token must abort the attempt without touching the
/// network, so the checks here must not block.
///
/// 用于认证传输握手的 bearer 令牌来源。
///
/// 每次连接尝试之前都会同步查询该提供者；过期的令牌必须在不接触网络的情况下
/// 中止尝试，因此这里的检查不得阻塞。
pub trait TokenProvider: Send + Sync + 'static {
    /// Returns the current bearer token, if any.
    /// 返回当前的 bearer 令牌（如果有）。
    fn token(&self) -> Option<String>;

    /// Returns whether the given token is already expired.
    /// 返回给定令牌是否已过期。
    fn is_expired(&self, token: &str) -> bool;
}
