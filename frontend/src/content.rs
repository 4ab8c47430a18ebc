//! Static copy for the page sections.

pub const TAGLINE: &str = "Entrepreneur · Growth Strategist · Builder";
pub const HERO_DESCRIPTION: &str = "Marketing systems that drive real revenue. Built from scratch, proven across 10+ industries. Now building the future of growth with Revvoo.";

pub const BRANDS: &[&str] = &[
    "Harris Farms",
    "Revvoo",
    "Creative Electron",
    "Hero Ink Tattoo",
    "Madera Community College",
    "Milan Institute",
    "Strength Valley",
];

pub struct Milestone {
    pub phase: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        phase: "Early Days",
        title: "The Spark",
        description: "Started learning the game. Studying marketing, sales psychology, and what actually makes businesses grow. Not theory. Real-world, hands-on testing.",
    },
    Milestone {
        phase: "Building",
        title: "Xander Cayetano Consulting",
        description: "Launched my consulting practice and started working with businesses across California. Built funnels, ran ads, created systems that delivered 10-30x ROAS for clients across 10+ industries.",
    },
    Milestone {
        phase: "Scaling",
        title: "Creative Electron & Beyond",
        description: "Worked with companies like Creative Electron and Harris Farms. Real businesses with real revenue goals. Helped build marketing infrastructure that drove measurable growth.",
    },
    Milestone {
        phase: "Now",
        title: "Revvoo",
        description: "Building Revvoo. A platform born from everything I've learned. Taking the systems, strategies, and frameworks that worked for clients and turning them into something bigger.",
    },
];

pub struct Service {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        number: "01",
        title: "Growth Strategy",
        description: "Full-funnel marketing strategy designed to attract, convert, and retain customers predictably.",
    },
    Service {
        number: "02",
        title: "Paid Advertising",
        description: "High-performance ad campaigns across Meta, Google, and beyond. Built for ROI, not vanity metrics.",
    },
    Service {
        number: "03",
        title: "Funnels & Systems",
        description: "End-to-end sales funnels, automation, and CRM systems that turn leads into revenue on autopilot.",
    },
    Service {
        number: "04",
        title: "Brand & Web",
        description: "Websites, landing pages, and brand identities that look premium and convert like machines.",
    },
];

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { number: "10+", label: "Industries", detail: "Strategies tested across diverse markets." },
    Stat { number: "80+", label: "Projects Launched", detail: "Funnels, brands, and campaigns built to perform." },
    Stat { number: "10-30x", label: "ROAS", detail: "$10-$30 back for every $1 spent on ads." },
];

pub struct Question {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Question] = &[
    Question {
        question: "How soon can I see results?",
        answer: "Most clients start seeing traction within the first 30-60 days. The timeline depends on your industry, budget, and how aggressively we move, but I don't waste time. Every system is built to produce results fast.",
    },
    Question {
        question: "What makes you different from agencies?",
        answer: "Agencies sell you a package and hand you off to a junior. I build custom systems based on what your business actually needs. No fluff, no filler, no 6-month contracts with nothing to show for it.",
    },
    Question {
        question: "What is Revvoo?",
        answer: "Revvoo is the company I'm building. It takes everything I've learned from 80+ projects and packages it into scalable growth systems. It's the future of how businesses will approach marketing.",
    },
    Question {
        question: "Who is this consultation for?",
        answer: "Founders, business owners, and marketing leaders who are tired of guessing and want a clear, actionable plan to grow. If you're serious about results, this is for you.",
    },
];

pub const CONSULT_PITCH: &str = "Want real, actionable advice from someone who's been in the trenches? Book a 1-on-1 consultation and get tailored strategy, honest feedback, and a clear plan for your next move.";
pub const CONSULT_PRICE: &str = "$250";
pub const CONSULT_FORMAT: &str = "60 minutes · Video call · Tailored to your business";
pub const CONSULT_POINTS: &[&str] = &[
    "Growth strategy tailored to your business",
    "Funnel & campaign audit",
    "Ad spend optimization",
    "Clear action plan you can execute immediately",
];

pub const CONTACT_PITCH: &str = "Whether you're looking to partner, collaborate, or just want to connect, I'm always open to conversations that lead somewhere real.";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn brands_are_unique() {
        let unique: HashSet<_> = BRANDS.iter().collect();
        assert_eq!(unique.len(), BRANDS.len());
    }

    #[test]
    fn services_are_numbered_in_order() {
        for (i, service) in SERVICES.iter().enumerate() {
            assert_eq!(service.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn faq_entries_have_answers() {
        assert!(FAQS.iter().all(|faq| faq.question.ends_with('?') && !faq.answer.is_empty()));
    }

    #[test]
    fn journey_ends_at_present() {
        assert_eq!(MILESTONES.last().map(|m| m.phase), Some("Now"));
    }
}
