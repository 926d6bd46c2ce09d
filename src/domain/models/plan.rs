#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanAudience {
    Personal,
    Business,
}

impl PlanAudience {
    pub fn toggled(&self) -> PlanAudience {
        match self {
            PlanAudience::Personal => return PlanAudience::Business,
            PlanAudience::Business => return PlanAudience::Personal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanAudience::Personal => return "Personal",
            PlanAudience::Business => return "Business",
        }
    }
}

/// Copy for one card in the upgrade overlay. Purely presentational; nothing
/// here triggers a transaction.
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub blurb: &'static str,
    pub cta: &'static str,
    pub current: bool,
    pub features: Vec<&'static str>,
}

impl Plan {
    pub fn catalog() -> Vec<Plan> {
        return vec![
            Plan {
                name: "Free",
                price: "$0/month",
                blurb: "Explore how AI can help you with everyday tasks",
                cta: "Your current plan",
                current: true,
                features: vec![
                    "Assistance with writing, problem solving and more",
                    "Access to the standard assistant",
                    "Limited access to the extended assistant",
                ],
            },
            Plan {
                name: "Plus",
                price: "$20/month",
                blurb: "Boost your productivity with expanded access",
                cta: "Upgrade to Plus",
                current: false,
                features: vec![
                    "Everything in Free",
                    "Access to the extended assistant",
                    "Up to 5x more messages",
                ],
            },
        ];
    }
}
