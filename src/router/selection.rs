//! The fallback walk over candidate tiers.

use crate::router::gate::Availability;
use crate::router::types::RouteEvent;
use crate::tier::ProviderTier;

/// Walk the preferred tier and then the fallback chain, returning the first
/// tier whose gate passes.
///
/// `gate` is evaluated once per candidate in order; its verdicts for gated
/// candidates are collected as [`RouteEvent`]s so the caller can surface
/// them however it likes. Returns `None` when every candidate is gated —
/// the caller decides what exhaustion means. This function performs no
/// logging and no mutation of its own.
pub fn select_tier(
    preferred: ProviderTier,
    fallback_chain: &[ProviderTier],
    mut gate: impl FnMut(ProviderTier) -> Availability,
) -> (Option<ProviderTier>, Vec<RouteEvent>) {
    let mut events = Vec::new();

    let verdict = gate(preferred);
    if verdict.is_available() {
        return (Some(preferred), events);
    }
    events.push(RouteEvent::GateFailed {
        tier: preferred,
        verdict,
    });
    events.push(RouteEvent::FallbackEngaged { preferred });

    for &candidate in fallback_chain {
        let verdict = gate(candidate);
        if verdict.is_available() {
            return (Some(candidate), events);
        }
        events.push(RouteEvent::GateFailed {
            tier: candidate,
            verdict,
        });
    }

    (None, events)
}
