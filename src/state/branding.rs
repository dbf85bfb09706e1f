//! Per-tenant branding reference data.
//!
//! A tenant is a hotel brand with its own look; it is unrelated to the
//! `client` user role except that client users belong to one tenant.

#[cfg(test)]
#[path = "branding_test.rs"]
mod branding_test;

/// Visual identity of one hotel brand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Branding {
    pub tenant_id: &'static str,
    pub display_name: &'static str,
    pub logo: &'static str,
    pub tagline: &'static str,
    pub primary_color: &'static str,
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub welcome_message: &'static str,
    pub industry: &'static str,
}

pub const DEFAULT_TENANT_ID: &str = "sunshine-hotels";

pub static HOTEL_TENANTS: [Branding; 8] = [
    Branding {
        tenant_id: "sunshine-hotels",
        display_name: "Sunshine Hotels",
        logo: "☀️",
        tagline: "Brighten Your Stay",
        primary_color: "#FF6B35",
        background_color: "#FFF8E1",
        text_color: "#FF6B35",
        welcome_message: "Welcome back! Ready to brighten your day with Sunshine Hotels?",
        industry: "Luxury Hotels",
    },
    Branding {
        tenant_id: "mountain-view",
        display_name: "Mountain View Resorts",
        logo: "🏔️",
        tagline: "Reach New Heights",
        primary_color: "#2E7D32",
        background_color: "#E8F5E8",
        text_color: "#2E7D32",
        welcome_message: "Welcome to Mountain View! Experience nature at its finest.",
        industry: "Mountain Resorts",
    },
    Branding {
        tenant_id: "ocean-breeze",
        display_name: "Ocean Breeze Villas",
        logo: "🌊",
        tagline: "Where Ocean Meets Luxury",
        primary_color: "#0277BD",
        background_color: "#E3F2FD",
        text_color: "#0277BD",
        welcome_message: "Welcome to Ocean Breeze! Dive into luxury by the sea.",
        industry: "Beach Resorts",
    },
    Branding {
        tenant_id: "urban-elite",
        display_name: "Urban Elite Suites",
        logo: "🏙️",
        tagline: "City Living Redefined",
        primary_color: "#424242",
        background_color: "#FAFAFA",
        text_color: "#424242",
        welcome_message: "Welcome to Urban Elite! Sophistication in the heart of the city.",
        industry: "Business Hotels",
    },
    Branding {
        tenant_id: "royal-palace",
        display_name: "Royal Palace Hotels",
        logo: "👑",
        tagline: "Luxury Beyond Imagination",
        primary_color: "#7B1FA2",
        background_color: "#F3E5F5",
        text_color: "#7B1FA2",
        welcome_message: "Welcome to Royal Palace! Experience true luxury and elegance.",
        industry: "Luxury Palaces",
    },
    Branding {
        tenant_id: "adventure-lodge",
        display_name: "Adventure Base Lodges",
        logo: "🏕️",
        tagline: "Your Adventure Starts Here",
        primary_color: "#D84315",
        background_color: "#FBE9E7",
        text_color: "#D84315",
        welcome_message: "Welcome to Adventure Base! Ready for your next expedition?",
        industry: "Adventure Tourism",
    },
    Branding {
        tenant_id: "zen-wellness",
        display_name: "Zen Wellness Retreats",
        logo: "🧘",
        tagline: "Find Your Inner Peace",
        primary_color: "#00695C",
        background_color: "#E0F2F1",
        text_color: "#00695C",
        welcome_message: "Welcome to Zen Wellness! Begin your journey to inner peace.",
        industry: "Wellness & Spa",
    },
    Branding {
        tenant_id: "family-fun",
        display_name: "Happy Family Resorts",
        logo: "👨‍👩‍👧‍👦",
        tagline: "Creating Family Memories",
        primary_color: "#E65100",
        background_color: "#FFF3E0",
        text_color: "#E65100",
        welcome_message: "Welcome to Happy Family Resorts! Making memories together.",
        industry: "Family Hotels",
    },
];

/// Look up a tenant by id.
#[must_use]
pub fn branding_for(tenant_id: &str) -> Option<&'static Branding> {
    HOTEL_TENANTS.iter().find(|b| b.tenant_id == tenant_id)
}

/// Tenant a new client account belongs to, from its email domain.
#[must_use]
pub fn tenant_for_email(email: &str) -> &'static str {
    let domain = email.rsplit_once('@').map_or("", |(_, domain)| domain);
    match domain.to_ascii_lowercase().as_str() {
        "mountainview.com" => "mountain-view",
        "oceanbreeze.com" => "ocean-breeze",
        _ => DEFAULT_TENANT_ID,
    }
}
