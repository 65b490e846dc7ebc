//! Static pricing table.

use serde::Serialize;

/// External checkout page for the Pro plan.
pub const CHECKOUT_URL: &str = "https://razorpay.me/@abdulbaasitmohajamshaikh";

/// Contact address for the Agency plan.
pub const SALES_CONTACT: &str = "sales@captionstudio.ai";

/// Shown next to the checkout link. Payment on the checkout page does not
/// change the local plan; Pro must be provisioned after the payment has
/// been verified server-side.
pub const ENTITLEMENT_NOTICE: &str = "Pro access is enabled by your administrator once payment \
     has been verified. Completing checkout does not unlock Pro on this device by itself.";

/// One column of the pricing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    /// Tier name
    pub name: &'static str,
    /// Display price
    pub price: &'static str,
    /// Who the tier is for
    pub description: &'static str,
    /// Feature bullets
    pub features: &'static [&'static str],
    /// Call to action label
    pub call_to_action: &'static str,
    /// Highlighted in the table
    pub recommended: bool,
}

/// Free, Pro and Agency tiers in display order.
pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Free",
        price: "$0",
        description: "For individuals starting out.",
        features: &[
            "10 captions/day",
            "Basic templates",
            "Standard hashtags",
            "Watermarked content",
        ],
        call_to_action: "Current Plan",
        recommended: false,
    },
    PricingTier {
        name: "Pro",
        price: "₹2600",
        description: "For creators & small businesses.",
        features: &[
            "Unlimited captions",
            "Advanced AI models",
            "Video caption generation",
            "Multi-language support",
            "Custom brand voice",
            "Basic analytics & insights",
            "No watermarks",
            "Priority support",
        ],
        call_to_action: "Upgrade to Pro",
        recommended: true,
    },
    PricingTier {
        name: "Agency",
        price: "₹10000",
        description: "For teams and large agencies.",
        features: &[
            "All features in Pro",
            "Multiple brand profiles",
            "Team collaboration",
            "Advanced analytics dashboard",
            "Exclusive Chrome Extension",
            "Zapier integrations",
            "API access",
        ],
        call_to_action: "Contact Sales",
        recommended: false,
    },
];
