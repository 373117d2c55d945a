use boostline_entities::campaigns::PlanType;

/// Minimum withdrawal request, whole kwanzas.
pub const MIN_WITHDRAWAL: i64 = 500;

/// How long a worker has to submit proofs for a claimed task. Surfaced in
/// listings and the CLI; no sweep reclaims expired slots.
pub const CLAIM_WINDOW_HOURS: i64 = 24;

/// One purchasable tier of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanTier {
    pub name: &'static str,
    /// Number of follows (or full engagements) the client is buying.
    pub target_count: i32,
    /// Whole kwanzas.
    pub price: i64,
}

const FOLLOW_GROWTH_PLANS: &[PlanTier] = &[
    PlanTier { name: "Basico", target_count: 30, price: 6_000 },
    PlanTier { name: "Super Basico", target_count: 50, price: 8_000 },
    PlanTier { name: "Ta Fixe", target_count: 100, price: 15_000 },
    PlanTier { name: "Bronze", target_count: 200, price: 27_000 },
    PlanTier { name: "Prata", target_count: 500, price: 75_000 },
    PlanTier { name: "Ouro", target_count: 1_000, price: 125_000 },
    PlanTier { name: "Premium", target_count: 3_500, price: 400_000 },
];

const FULL_ENGAGEMENT_PLANS: &[PlanTier] = &[
    PlanTier { name: "Basico", target_count: 50, price: 30_000 },
    PlanTier { name: "Super Basico", target_count: 100, price: 50_000 },
    PlanTier { name: "Ta Fixe", target_count: 150, price: 70_000 },
    PlanTier { name: "Bronze", target_count: 200, price: 100_000 },
    PlanTier { name: "Prata", target_count: 500, price: 250_000 },
    PlanTier { name: "Ouro", target_count: 1_000, price: 400_000 },
    PlanTier { name: "Premium", target_count: 2_500, price: 850_000 },
];

/// All tiers purchasable under a plan type.
pub fn plans_for(plan_type: PlanType) -> &'static [PlanTier] {
    match plan_type {
        PlanType::FollowGrowth => FOLLOW_GROWTH_PLANS,
        PlanType::FullEngagement => FULL_ENGAGEMENT_PLANS,
    }
}

/// Look up a tier by name (case-insensitive) within a plan type.
pub fn find_plan(plan_type: PlanType, plan_name: &str) -> Option<&'static PlanTier> {
    plans_for(plan_type)
        .iter()
        .find(|tier| tier.name.eq_ignore_ascii_case(plan_name.trim()))
}

/// Per-task worker reward, whole kwanzas, fixed by plan type.
pub fn reward_for(plan_type: PlanType) -> i64 {
    match plan_type {
        PlanType::FollowGrowth => 100,
        PlanType::FullEngagement => 200,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_is_findable_by_name() {
        for plan_type in [PlanType::FollowGrowth, PlanType::FullEngagement] {
            for tier in plans_for(plan_type) {
                assert_eq!(find_plan(plan_type, tier.name), Some(tier));
            }
        }
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        let tier = find_plan(PlanType::FollowGrowth, "  ta fixe ").expect("tier");
        assert_eq!(tier.target_count, 100);
        assert_eq!(tier.price, 15_000);
    }

    #[test]
    fn unknown_tier_is_none() {
        assert!(find_plan(PlanType::FullEngagement, "Diamante").is_none());
    }

    #[test]
    fn rewards_match_plan_type() {
        assert_eq!(reward_for(PlanType::FollowGrowth), 100);
        assert_eq!(reward_for(PlanType::FullEngagement), 200);
    }
}
