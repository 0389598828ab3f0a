//! Keyword tables used when an expense carries no explicit payable hint.
//!
//! Each subcategory owns an ordered list of rules. The first rule whose
//! condition matches the (lowercased) expense name decides which keywords are
//! searched for among the payable names; later rules are never consulted, even
//! if that search comes back empty.

pub(crate) const TRANSFERS_SUB_CATEGORY: &str = "B-05";

#[derive(Debug, Clone, Copy)]
pub(crate) enum PayableTarget {
    /// Keywords searched among payable names, in order.
    Keywords(&'static [&'static str]),
    /// No payable; settled in cash when incurred.
    PaidImmediately,
}

pub(crate) struct NameRule {
    pub(crate) applies: fn(&str) -> bool,
    pub(crate) target: PayableTarget,
}

pub(crate) enum SubCategoryRules {
    ByName(&'static [NameRule]),
    AlwaysPaid,
}

const fn keywords(k: &'static [&'static str]) -> PayableTarget {
    PayableTarget::Keywords(k)
}

// B-01: Human resources (+ bonus).
const HUMAN_RESOURCES: [NameRule; 1] = [NameRule {
    applies: |_| true,
    target: keywords(&["salaries"]),
}];

// B-02: Monitoring & evaluation.
const MONITORING_EVALUATION: [NameRule; 10] = [
    NameRule {
        applies: |n| n.contains("support group"),
        target: keywords(&["support group"]),
    },
    NameRule {
        applies: |n| n.contains("census") || n.contains("training"),
        target: keywords(&["census", "training"]),
    },
    NameRule {
        applies: |n| n.contains("mentorship"),
        target: keywords(&["mentorship"]),
    },
    NameRule {
        applies: |n| n.contains("annual") && n.contains("meeting"),
        target: keywords(&["annual", "cordination", "coordination"]),
    },
    NameRule {
        applies: |n| n.contains("mdt") || n.contains("quarterly"),
        target: keywords(&["mdt"]),
    },
    NameRule {
        applies: |n| n.contains("supervision") && n.contains("dqa"),
        target: keywords(&["supervision dqa", "dqa"]),
    },
    NameRule {
        applies: |n| n.contains("supervision"),
        target: keywords(&["supervision"]),
    },
    // "cordination" is a misspelling present in seeded names.
    NameRule {
        applies: |n| n.contains("cordination") || n.contains("coordination"),
        target: keywords(&["cordination", "coordination", "meeting"]),
    },
    NameRule {
        applies: |n| n.contains("mission"),
        target: keywords(&["mission"]),
    },
    NameRule {
        applies: |n| n.contains("transport") || n.contains("travel"),
        target: keywords(&["transport", "travel"]),
    },
];

// B-03: Living support to clients.
const LIVING_SUPPORT: [NameRule; 4] = [
    NameRule {
        applies: |n| n.contains("sample") && n.contains("transport"),
        target: keywords(&["sample"]),
    },
    NameRule {
        applies: |n| n.contains("home") && n.contains("visit"),
        target: keywords(&["home", "visit"]),
    },
    NameRule {
        applies: |n| n.contains("outreach"),
        target: keywords(&["outreach"]),
    },
    NameRule {
        applies: |n| n.contains("wad") || n.contains("celebration"),
        target: keywords(&["wad", "celebration"]),
    },
];

// B-04: Overheads.
const OVERHEADS: [NameRule; 8] = [
    NameRule {
        applies: |n| n.contains("communication"),
        target: keywords(&["communication"]),
    },
    NameRule {
        applies: |n| n.contains("maintenance"),
        target: keywords(&["maintenance"]),
    },
    NameRule {
        applies: |n| n.contains("fuel"),
        target: keywords(&["fuel"]),
    },
    // Must precede "supplies": the consumables line also mentions supplies.
    NameRule {
        applies: |n| n.contains("consumable"),
        target: keywords(&["consumable"]),
    },
    NameRule {
        applies: |n| n.contains("supplies"),
        target: keywords(&["supplies"]),
    },
    NameRule {
        applies: |n| n.contains("car") && n.contains("hiring"),
        target: keywords(&["car", "hiring"]),
    },
    NameRule {
        applies: |n| n.contains("transport") || n.contains("travel"),
        target: keywords(&["transport", "travel"]),
    },
    NameRule {
        applies: |n| n.contains("bank"),
        target: PayableTarget::PaidImmediately,
    },
];

pub(crate) fn rules_for(sub_category: &str) -> Option<SubCategoryRules> {
    match sub_category {
        "B-01" => Some(SubCategoryRules::ByName(&HUMAN_RESOURCES)),
        "B-02" => Some(SubCategoryRules::ByName(&MONITORING_EVALUATION)),
        "B-03" => Some(SubCategoryRules::ByName(&LIVING_SUPPORT)),
        "B-04" => Some(SubCategoryRules::ByName(&OVERHEADS)),
        TRANSFERS_SUB_CATEGORY => Some(SubCategoryRules::AlwaysPaid),
        _ => None,
    }
}

/// Target chosen for the given subcategory and lowercased expense name.
/// `None` when no rule applies.
pub(crate) fn target_for(sub_category: &str, expense_name: &str) -> Option<PayableTarget> {
    match rules_for(sub_category)? {
        SubCategoryRules::AlwaysPaid => Some(PayableTarget::PaidImmediately),
        SubCategoryRules::ByName(rules) => rules
            .iter()
            .find(|rule| (rule.applies)(expense_name))
            .map(|rule| rule.target),
    }
}
