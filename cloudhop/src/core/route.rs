//! Route planning: the landing clouds of an optimal traversal.

use serde::Serialize;

use crate::core::counter::next_step;
use crate::core::error::JumpError;
use crate::core::types::{Sequence, Step};

/// Landing indices of a minimum-jump traversal, from `0` to the last cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub jumps: usize,
    pub path: Vec<usize>,
}

impl Route {
    /// Width of each jump along the path.
    pub fn steps(&self) -> Vec<Step> {
        self.path
            .windows(2)
            .map(|pair| {
                if pair[1] - pair[0] == 2 {
                    Step::Double
                } else {
                    Step::Single
                }
            })
            .collect()
    }
}

/// Plan the same greedy traversal as [`min_jumps`](crate::core::counter::min_jumps),
/// recording every landing.
pub fn plan_route(sequence: &Sequence) -> Result<Route, JumpError> {
    let clouds = sequence.as_slice();
    let last = sequence.last_index();
    let mut path = vec![0];
    let mut index = 0;
    while index < last {
        index += next_step(clouds, index)?.width();
        path.push(index);
    }
    Ok(Route {
        jumps: path.len() - 1,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counter::min_jumps;
    use proptest::prelude::*;

    fn seq(codes: &[i64]) -> Sequence {
        Sequence::from_codes(codes).expect("valid sequence")
    }

    #[test]
    fn route_visits_only_safe_clouds() {
        let route = plan_route(&seq(&[0, 0, 1, 0, 0, 1, 0])).expect("route");
        assert_eq!(route.path, vec![0, 1, 3, 4, 6]);
        assert_eq!(route.jumps, 4);
        assert_eq!(
            route.steps(),
            vec![Step::Single, Step::Double, Step::Single, Step::Double]
        );
    }

    #[test]
    fn single_cloud_route_is_trivial() {
        let route = plan_route(&seq(&[0])).expect("route");
        assert_eq!(route.path, vec![0]);
        assert_eq!(route.jumps, 0);
        assert!(route.steps().is_empty());
    }

    #[test]
    fn unsolvable_route_errors_like_counter() {
        let sequence = seq(&[0, 1, 1, 0]);
        assert_eq!(plan_route(&sequence), Err(JumpError::Unsolvable { index: 1 }));
    }

    #[test]
    fn route_serializes_as_json_object() {
        let route = plan_route(&seq(&[0, 0, 0, 1, 0, 0])).expect("route");
        let value = serde_json::to_value(&route).expect("serialize");
        assert_eq!(value, serde_json::json!({ "jumps": 3, "path": [0, 2, 4, 5] }));
    }

    proptest! {
        #[test]
        fn prop_route_agrees_with_counter(codes in prop::collection::vec(0i64..=1, 1..48)) {
            prop_assume!(codes[0] == 0);
            let sequence = seq(&codes);
            match (plan_route(&sequence), min_jumps(&sequence)) {
                (Ok(route), Ok(jumps)) => {
                    prop_assert_eq!(route.jumps, jumps);
                    prop_assert_eq!(route.path.last().copied(), Some(codes.len() - 1));
                    prop_assert!(route.path.iter().all(|&i| codes[i] == 0));
                }
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                (a, b) => prop_assert!(false, "route {:?} disagrees with count {:?}", a, b),
            }
        }
    }
}
