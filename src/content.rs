//! Copy tables shared by the landing sections.

pub struct Seller {
    pub name: &'static str,
    pub address: &'static str,
    pub description: &'static str,
    pub house_alt: &'static str,
    pub image: &'static str,
    pub avatar: &'static str,
}

pub const SELLERS: [Seller; 6] = [
    Seller {
        name: "Bob Eastman",
        address: "2847 Maple Grove Drive, Plainfield, IL 60544",
        description: "The four-bedroom Colonial on Maple Grove Drive",
        house_alt: "Colonial House",
        image: "/properties/frank-house Medium.jpeg",
        avatar: "/properties/bob-avatar Medium.jpeg",
    },
    Seller {
        name: "Frank Reeves",
        address: "1847 Cedar Street, Pittsburgh, PA 15212",
        description: "Owner of a historic brick Tudor in Manchester, Pittsburgh",
        house_alt: "Tudor House",
        image: "/properties/bob-house Medium.jpeg",
        avatar: "/properties/Frank-avatar Medium.jpeg",
    },
    Seller {
        name: "Michael Harrison",
        address: "3847 Brookside Drive Rochester Hills, MI 48309",
        description: "Lawyer - Inherited Family Property",
        house_alt: "Snow House",
        image: "/properties/Michael-house.webp",
        avatar: "/properties/Michael-Avatar.webp",
    },
    Seller {
        name: "Linda Martinez",
        address: "8847 Mockingbird Lane, Dallas, TX 75238",
        description: "The Dallas School Teacher Who Talks \"Way\" Too Much.",
        house_alt: "Ranch House",
        image: "/properties/Linda-house Medium.jpeg",
        avatar: "/properties/Linda-avatar Medium.jpeg",
    },
    Seller {
        name: "Douglas Warner",
        address: "3847 Elmwood Avenue, Naperville, IL 60540",
        description: "Ready-to-Sell, but on his terms.",
        house_alt: "Tudor Snow House",
        image: "/properties/Douglas-house.webp",
        avatar: "/properties/douglas-avatar Medium.jpeg",
    },
    Seller {
        name: "James Wilson",
        address: "4572 Sycamore Lane, Riverside, CA 92506",
        description: "Retired teacher considering downsizing",
        house_alt: "Palm House",
        image: "/properties/james-house Medium.jpeg",
        avatar: "/properties/James-avatar Medium.jpeg",
    },
];

pub struct Comparable {
    pub address: &'static str,
    pub condition: &'static str,
    pub price: u32,
}

pub const COMPARABLES: [Comparable; 3] = [
    Comparable { address: "8832 Mockingbird Lane", condition: "Updated", price: 282_000 },
    Comparable { address: "8915 Easton Road", condition: "Original", price: 285_000 },
    Comparable { address: "8756 Lanshire Drive", condition: "Partially Updated", price: 289_000 },
];

pub struct Pillar {
    pub label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PILLARS: [Pillar; 3] = [
    Pillar {
        label: "Cognitive",
        title: "Cognitive Enhancement",
        body: "Build confidence and conviction through repeated exposure to real-time problem-solving scenarios. Learn to create emotional connections and handle unexpected situations naturally, developing the mental agility needed for successful negotiations.",
    },
    Pillar {
        label: "Neural",
        title: "Neural Adaptation",
        body: "Instead of pretending or \"practicing,\" you'll engage in deep reality-based scenarios. Build muscle memory through emotional investment, creating lasting neural pathways that transform how you naturally respond in real-world situations.",
    },
    Pillar {
        label: "Behavioral",
        title: "Behavioral Integration",
        body: "Experience genuine reactions and emotions, face real fears, and encounter actual objections. Develop authentic responses versus scripted answers across millions of possible scenarios, ensuring you're prepared for any situation.",
    },
];

pub struct Finding {
    pub title: &'static str,
    pub lead: &'static str,
    pub stat: &'static str,
    pub tail: &'static str,
    pub source: &'static str,
}

pub const FINDINGS: [Finding; 3] = [
    Finding {
        title: "VERIFIED PERFORMANCE IMPROVEMENT",
        lead: "Military research proves simulation training improves real-world execution by ",
        stat: "45%",
        tail: " compared to traditional methods. Think about that - nearly half again better at executing when it matters most.",
        source: "Study: Flight Simulator Training Effectiveness, Military Psychology - Meta-analysis of 247 studies",
    },
    Finding {
        title: "PROVEN DECISION-MAKING MASTERY",
        lead: "Under extreme pressure, simulation-trained professionals achieve ",
        stat: "71%",
        tail: " higher accuracy in critical decision-making. When you're negotiating six and seven-figure deals, this is the difference between good and exceptional.",
        source: "Study: Flight Simulator Training Effectiveness, Military Psychology",
    },
    Finding {
        title: "ACCELERATED SKILL RETENTION",
        lead: "Medical research demonstrates a ",
        stat: "55%",
        tail: " improvement in knowledge retention through simulation training compared to conventional methods. Your skills don't just improve temporarily - they become permanently integrated.",
        source: "Study: Effectiveness of simulation-based nursing education, NCBI",
    },
];

pub struct Benefit {
    pub title: &'static str,
    pub highlight: &'static str,
    pub bullets: [&'static str; 4],
}

pub const BENEFITS: [Benefit; 6] = [
    Benefit {
        title: "Converting",
        highlight: "More Deals",
        bullets: [
            "Build confidence that comes through in your calls",
            "Handle tough objections smoothly because you've faced them before",
            "Get the reps in before you speak to a real seller",
            "Turn around challenging situations that would've killed deals before",
        ],
    },
    Benefit {
        title: "Better Deal",
        highlight: "Negotiations",
        bullets: [
            "Stay calm when sellers test your limits",
            "Handle price discussions without getting flustered",
            "Navigate emotional sellers with genuine confidence",
            "Keep conversations on track even when they get heated",
        ],
    },
    Benefit {
        title: "Faster Learning",
        highlight: "Curve",
        bullets: [
            "Compress months of learning into focused training",
            "Learn from mistakes without losing real deals",
            "Master common scenarios before you face them live",
            "Build skills faster than \"learning on the job\"",
        ],
    },
    Benefit {
        title: "Higher Quality",
        highlight: "Conversations",
        bullets: [
            "Build genuine rapport that sellers respond to",
            "Read between the lines of what sellers are saying",
            "Ask better questions that get to the heart of the deal",
            "Handle emotional situations with real empathy",
        ],
    },
    Benefit {
        title: "More Consistent",
        highlight: "Performance",
        bullets: [
            "Get the same results whether you're feeling great or stressed",
            "Handle calls confidently even on your worst days",
            "Maintain composure during tough conversations",
            "Deliver your message clearly every time",
        ],
    },
    Benefit {
        title: "Better",
        highlight: "Results",
        bullets: [
            "Close more deals with less effort",
            "Get better prices through skilled negotiation",
            "Amplify your Sales and Negotiation Skills",
            "Create a sustainable, growing business",
        ],
    },
];

pub struct PlanItem {
    pub label: &'static str,
    /// Whole dollars per month.
    pub monthly_value: u32,
}

pub const PLAN_ITEMS: [PlanItem; 6] = [
    PlanItem { label: "1-on-1 AI Sales Simulation with deeply authentic property owners", monthly_value: 897 },
    PlanItem { label: "Personal AI Sales coach available 24/7", monthly_value: 499 },
    PlanItem { label: "Millions of Sellers scenario possibilities", monthly_value: 399 },
    PlanItem { label: "Deep Reality Protocol Driven Feedback and growth Dashboard", monthly_value: 399 },
    PlanItem { label: "Direct Feedback post call to review", monthly_value: 299 },
    PlanItem { label: "10hrs of conversation time with AI Sellers", monthly_value: 399 },
];

pub const MONTHLY_PRICE: u32 = 299;

pub fn total_value(items: &[PlanItem]) -> u32 {
    items.iter().map(|item| item.monthly_value).sum()
}

/// `2892` -> `"$2,892"`
pub fn format_usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_total_matches_advertised_value() {
        assert_eq!(total_value(&PLAN_ITEMS), 2892);
        assert_eq!(format_usd(total_value(&PLAN_ITEMS)), "$2,892");
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(299), "$299");
        assert_eq!(format_usd(282_000), "$282,000");
        assert_eq!(format_usd(1_234_567), "$1,234,567");
    }

    #[test]
    fn every_benefit_has_copy() {
        for benefit in BENEFITS.iter() {
            assert!(!benefit.highlight.is_empty());
            assert!(benefit.bullets.iter().all(|b| !b.is_empty()));
        }
    }
}
