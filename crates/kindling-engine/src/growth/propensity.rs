//! Per-user degree-growth diagnostic.

use kindling_core::UserId;

use crate::graph::GraphSnapshot;
use crate::ratio::ratio_or_zero;

/// How eagerly `user_id` has been making friends:
///
/// ```text
/// (deg_today - deg_yesterday) / deg_today  +  deg_yesterday / |V_yesterday|
/// ```
///
/// The first term is 0 for users with no friends today and the second is 0
/// for an empty `yesterday`. Users missing from `yesterday` have degree 0 there.
pub fn degree_growth_propensity(today: &GraphSnapshot, yesterday: &GraphSnapshot, user_id: UserId) -> f64 {
    let degree_today = today.degree_or_zero(user_id) as f64;
    let degree_yesterday = yesterday.degree_or_zero(user_id) as f64;
    let recent = ratio_or_zero(degree_today - degree_yesterday, degree_today);
    let established = ratio_or_zero(degree_yesterday, yesterday.node_count() as f64);
    recent + established
}
