//! Work distribution heuristic for processing a set of documentation URLs
//! with several agents.

use serde::{Deserialize, Serialize};

/// Upper bound on agents for small sets processed in parallel.
const SMALL_SET_MAX_AGENTS: usize = 5;

/// Agent count used once the URL set exceeds ten entries.
const LARGE_SET_AGENTS: usize = 7;

/// Number of phases in the phased strategy.
const PHASE_COUNT: u32 = 2;

/// How agents should work through the URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One agent handles everything.
    Single,
    /// All agents run at once over disjoint slices.
    Parallel,
    /// Critical URLs first, everything else in a second phase.
    Phased,
}

/// Recommended distribution plan for a URL count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDistribution {
    /// Number of agents to deploy.
    pub agent_count: usize,
    /// Distribution strategy.
    pub strategy: Strategy,
    /// URLs assigned to each agent (the last agent may get fewer).
    pub urls_per_agent: usize,
    /// Number of phases, only for [`Strategy::Phased`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phases: Option<u32>,
    /// Human readable summary.
    pub description: String,
}

/// Recommend a distribution for `url_count` URLs.
///
/// | URLs    | Agents              | Strategy |
/// |---------|---------------------|----------|
/// | 0–3     | 1                   | single   |
/// | 4–10    | min(ceil(n/2), 5)   | parallel |
/// | 11–20   | 7                   | parallel |
/// | 21+     | 7                   | phased (2 phases) |
#[must_use]
pub fn recommend_distribution(url_count: usize) -> AgentDistribution {
    match url_count {
        0..=3 => AgentDistribution {
            agent_count: 1,
            strategy: Strategy::Single,
            urls_per_agent: url_count,
            phases: None,
            description: "Single agent can handle all URLs".to_string(),
        },
        4..=10 => {
            let agents = url_count.div_ceil(2).min(SMALL_SET_MAX_AGENTS);
            AgentDistribution {
                agent_count: agents,
                strategy: Strategy::Parallel,
                urls_per_agent: url_count.div_ceil(agents),
                phases: None,
                description: format!("Deploy {agents} agents in parallel"),
            }
        },
        11..=20 => AgentDistribution {
            agent_count: LARGE_SET_AGENTS,
            strategy: Strategy::Parallel,
            urls_per_agent: url_count.div_ceil(LARGE_SET_AGENTS),
            phases: None,
            description: format!("Deploy {LARGE_SET_AGENTS} agents with balanced workload"),
        },
        _ => AgentDistribution {
            agent_count: LARGE_SET_AGENTS,
            strategy: Strategy::Phased,
            urls_per_agent: url_count.div_ceil(LARGE_SET_AGENTS),
            phases: Some(PHASE_COUNT),
            description: "Use two-phase approach: critical first, then important".to_string(),
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use super::Strategy;
    use proptest::prelude::*;

    #[test]
    fn test_small_set_single_agent() {
        let plan = recommend_distribution(2);
        assert_eq!(plan.agent_count, 1);
        assert_eq!(plan.strategy, Strategy::Single);
        assert_eq!(plan.urls_per_agent, 2);
        assert_eq!(plan.phases, None);
    }

    #[test]
    fn test_medium_set_parallel() {
        let plan = recommend_distribution(8);
        assert_eq!(plan.strategy, Strategy::Parallel);
        assert_eq!(plan.agent_count, 4);
        assert_eq!(plan.urls_per_agent, 2);

        let plan = recommend_distribution(10);
        assert_eq!(plan.agent_count, 5);
        assert_eq!(plan.urls_per_agent, 2);
        assert_eq!(plan.description, "Deploy 5 agents in parallel");
    }

    #[test]
    fn test_large_set_seven_agents() {
        let plan = recommend_distribution(15);
        assert_eq!(plan.agent_count, 7);
        assert_eq!(plan.strategy, Strategy::Parallel);
        assert_eq!(plan.urls_per_agent, 3);
    }

    #[test]
    fn test_huge_set_phased() {
        let plan = recommend_distribution(25);
        assert_eq!(plan.strategy, Strategy::Phased);
        assert_eq!(plan.phases, Some(2));
        assert_eq!(plan.agent_count, 7);
        assert_eq!(plan.urls_per_agent, 4);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(recommend_distribution(0).strategy, Strategy::Single);
        assert_eq!(recommend_distribution(3).strategy, Strategy::Single);
        assert_eq!(recommend_distribution(4).agent_count, 2);
        assert_eq!(recommend_distribution(11).agent_count, 7);
        assert_eq!(recommend_distribution(20).strategy, Strategy::Parallel);
        assert_eq!(recommend_distribution(21).strategy, Strategy::Phased);
    }

    #[test]
    fn test_phases_omitted_from_json_unless_phased() {
        let json = serde_json::to_value(recommend_distribution(5)).unwrap();
        assert!(json.get("phases").is_none());
        assert_eq!(json["strategy"], "parallel");
        assert_eq!(json["agentCount"], 3);

        let json = serde_json::to_value(recommend_distribution(30)).unwrap();
        assert_eq!(json["phases"], 2);
    }

    proptest! {
        #[test]
        fn prop_plan_covers_every_url(n in 0usize..200) {
            let plan = recommend_distribution(n);
            prop_assert!(plan.agent_count >= 1);
            prop_assert!(plan.agent_count * plan.urls_per_agent >= n);
            prop_assert_eq!(plan.phases.is_some(), plan.strategy == Strategy::Phased);
        }
    }
}
