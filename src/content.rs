//! Static page copy, typed.
//!
//! Single source of truth for everything the sections render, so nav links
//! and the anchors they point at cannot drift apart.

pub const BRAND: &str = "Ice Factory";
pub const BRAND_TAG: &str = "Wholesale";

pub const CONTACT_PHONE: &str = "+44 74420 83245";
pub const CONTACT_EMAIL: &str = "sales@icefactory.store";

/// Shown after the inquiry form is submitted. Nothing is sent anywhere;
/// catalog access is handled over direct channels.
pub const INQUIRY_ACK: &str = "Thanks! We'll review your application and send you \
    our private catalog. For immediate access, contact us on WhatsApp.";

/// In-page anchor ids, in page order. Each id appears on exactly one section.
pub const SECTION_IDS: [&str; 5] = ["products", "services", "process", "policy", "contact"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Products", target: "#products" },
    NavLink { label: "Services", target: "#services" },
    NavLink { label: "Process", target: "#process" },
    NavLink { label: "Policy", target: "#policy" },
    NavLink { label: "Contact", target: "#contact" },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "D/VVS", label: "Stone Spec" },
    Stat { value: "5\u{2013}10d", label: "Typical Lead Time" },
    Stat { value: ">60", label: "Partner Retailers" },
];

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub name: &'static str,
    pub blurb: &'static str,
}

pub const TOP_CATEGORIES: [Category; 4] = [
    Category {
        name: "Bust Down Presidential",
        blurb: "Classic round with full pavé setting.",
    },
    Category {
        name: "Skeleton Iced",
        blurb: "Open dial, handset moissanite across case & bezel.",
    },
    Category {
        name: "Classic Round",
        blurb: "Timeless iced design, pavé dial & strap options.",
    },
    Category {
        name: "Custom Orders",
        blurb: "Client-requested patterns, colors, or stone layouts.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const PRODUCTS: [Product; 3] = [
    Product {
        title: "Bust Down Presidential",
        blurb: "Full pavé setting, premium moissanite stones, multiple color options available.",
    },
    Product {
        title: "Skeleton Iced Collection",
        blurb: "Open dial designs with handset moissanite across case, bezel, and strap.",
    },
    Product {
        title: "Classic Round Iced",
        blurb: "Timeless designs with pavé dial, bezel options, and premium finishing.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICE_FEATURES: [Feature; 4] = [
    Feature {
        icon: "🛡",
        title: "Quality Control",
        blurb: "Every piece undergoes strict quality inspection with photos shared before shipment.",
    },
    Feature {
        icon: "💎",
        title: "Premium Stones",
        blurb: "D color, VVS clarity moissanite with tight size tolerances for consistent pavé.",
    },
    Feature {
        icon: "⏱",
        title: "Fast Turnaround",
        blurb: "Typical turnaround 7\u{2013}14 business days after approval depending on complexity.",
    },
    Feature {
        icon: "🚚",
        title: "Secure Shipping",
        blurb: "Insured shipping with tamper-evident packaging and tracking provided.",
    },
];

pub const SERVICE_REQUIREMENTS: [&str; 5] = [
    "Signed work order & service terms",
    "Business verification and trade references",
    "Clear specifications and design requirements",
    "Payment terms agreed before work begins",
    "Quality photos shared for approval before shipment",
];

#[derive(Debug, Clone, Copy)]
pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        icon: "🌐",
        title: "Apply",
        blurb: "Submit trade application and get access to our private catalog.",
    },
    ProcessStep {
        icon: "🔒",
        title: "Quote",
        blurb: "Send specs or reference images; receive quote and timeline.",
    },
    ProcessStep {
        icon: "⚖",
        title: "Produce",
        blurb: "We manufacture/ice your pieces, perform QC, share photos for approval.",
    },
    ProcessStep {
        icon: "🚚",
        title: "Deliver",
        blurb: "Securely ship with documentation and care instructions.",
    },
];

pub const POLICY_FEATURES: [Feature; 4] = [
    Feature {
        icon: "🛡",
        title: "Trade-Only Access",
        blurb: "We work exclusively with verified business accounts and trade partners.",
    },
    Feature {
        icon: "⚖",
        title: "Quality Guarantee",
        blurb: "All products come with quality assurance and photos shared before shipment.",
    },
    Feature {
        icon: "🔒",
        title: "Private Catalog",
        blurb: "Full product catalog available only to approved trade partners.",
    },
    Feature {
        icon: "🌐",
        title: "Secure Transactions",
        blurb: "All transactions conducted through secure business channels with proper documentation.",
    },
];

pub const POLICY_NOTES: [&str; 5] = [
    "Trade-only; not for direct consumer purchase",
    "Catalog access requires business verification",
    "All products sold under neutral descriptions",
    "Quality photos shared before shipment",
    "Secure payment methods only",
];

pub const NEXT_STEPS: [&str; 3] = [
    "We review your application within 1\u{2013}2 business days.",
    "Approved accounts receive our private catalog & pricing.",
    "We can sample initial products or quote custom work.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_hit_existing_sections() {
        for link in NAV_LINKS {
            let id = link.target.strip_prefix('#').expect("anchor target");
            assert!(
                SECTION_IDS.contains(&id),
                "nav link {} has no matching section",
                link.target
            );
        }
    }

    #[test]
    fn every_section_is_reachable_from_nav() {
        for id in SECTION_IDS {
            let target = format!("#{id}");
            assert!(
                NAV_LINKS.iter().any(|link| link.target == target),
                "section #{id} is not linked from the nav"
            );
        }
    }

    #[test]
    fn section_ids_are_unique_and_ordered() {
        let mut seen = SECTION_IDS.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), SECTION_IDS.len());
        assert_eq!(
            SECTION_IDS,
            ["products", "services", "process", "policy", "contact"]
        );
    }

    #[test]
    fn copy_is_nonempty() {
        for stat in HERO_STATS {
            assert!(!stat.value.is_empty() && !stat.label.is_empty());
        }
        for cat in TOP_CATEGORIES {
            assert!(!cat.name.is_empty() && !cat.blurb.is_empty());
        }
        for product in PRODUCTS {
            assert!(!product.title.is_empty() && !product.blurb.is_empty());
        }
        for feature in SERVICE_FEATURES.iter().chain(POLICY_FEATURES.iter()) {
            assert!(!feature.title.is_empty() && !feature.blurb.is_empty());
        }
        for step in PROCESS_STEPS {
            assert!(!step.title.is_empty() && !step.blurb.is_empty());
        }
        for line in SERVICE_REQUIREMENTS
            .iter()
            .chain(POLICY_NOTES.iter())
            .chain(NEXT_STEPS.iter())
        {
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn contact_details_look_sane() {
        assert!(CONTACT_EMAIL.contains('@'));
        assert!(CONTACT_PHONE.starts_with('+'));
        assert!(!INQUIRY_ACK.is_empty());
    }
}
