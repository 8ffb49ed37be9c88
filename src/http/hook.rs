//! Post-exchange observer hooks.

use super::{HttpRequest, HttpResponse};

/// Observer invoked after an exchange completes.
///
/// Hooks are passed explicitly to each dispatch call; there is no global
/// registry and no shared state. They run synchronously in registration
/// order on the caller's task, exactly once per call, and cannot alter
/// the exchange or its result. A slow hook delays the caller's return,
/// so implementations should be fast or hand work off themselves.
///
/// Hooks fire only when the exchange reached the transport. `response`
/// is `None` when the transport itself failed before a response arrived.
///
/// Any matching closure is a hook:
///
/// ```
/// use wacloud::http::{Hook, HttpRequest, HttpResponse};
///
/// let hook = |name: &str, _req: &HttpRequest, resp: Option<&HttpResponse>| {
///     if let Some(resp) = resp {
///         println!("{name}: {}", resp.status);
///     }
/// };
/// let _hooks: [&dyn Hook; 1] = [&hook];
/// ```
pub trait Hook: Send + Sync {
    /// Observes one completed exchange.
    ///
    /// `name` is the diagnostic label from the request's context, possibly
    /// empty.
    fn observe(&self, name: &str, request: &HttpRequest, response: Option<&HttpResponse>);
}

impl<F> Hook for F
where
    F: Fn(&str, &HttpRequest, Option<&HttpResponse>) + Send + Sync,
{
    fn observe(&self, name: &str, request: &HttpRequest, response: Option<&HttpResponse>) {
        self(name, request, response);
    }
}

/// Invokes every hook once, in registration order.
pub(crate) fn notify(
    hooks: &[&dyn Hook],
    name: &str,
    request: &HttpRequest,
    response: Option<&HttpResponse>,
) {
    for hook in hooks {
        hook.observe(name, request, response);
    }
}

/// Hook that logs every exchange through `tracing`.
///
/// Emits one debug event per call carrying the request name, method, URL,
/// and status (or the fact that the transport failed). Install a
/// `tracing` subscriber in the host application to see the output; the
/// library never installs one itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceHook;

impl Hook for TraceHook {
    fn observe(&self, name: &str, request: &HttpRequest, response: Option<&HttpResponse>) {
        match response {
            Some(response) => tracing::debug!(
                request = name,
                method = %request.method,
                url = %request.url,
                status = %response.status,
                "request completed"
            ),
            None => tracing::debug!(
                request = name,
                method = %request.method,
                url = %request.url,
                "request failed in transport"
            ),
        }
    }
}
