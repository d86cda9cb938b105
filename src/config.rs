//! Site-wide contact points. Everything the footer and the contact page
//! agree on lives here; page-local listings stay with their page.

pub const COMPANY_NAME: &str = "Shree Ashtavinayak Logistics";

pub const PRIMARY_PHONE: &str = "+91 98765 43210";
pub const PRIMARY_PHONE_URI: &str = "tel:+919876543210";
pub const SECONDARY_PHONE: &str = "+91 98765 43211";

pub const INFO_EMAIL: &str = "info@ashtavinayaklogistics.com";
pub const INFO_EMAIL_URI: &str = "mailto:info@ashtavinayaklogistics.com";
pub const SUPPORT_EMAIL: &str = "support@ashtavinayaklogistics.com";
pub const EMERGENCY_EMAIL: &str = "emergency@ashtavinayaklogistics.com";
pub const EMERGENCY_EMAIL_URI: &str = "mailto:emergency@ashtavinayaklogistics.com";

pub const HEAD_OFFICE_ADDRESS: &str = "123 Logistics Park, Andheri East, Mumbai";
pub const MAP_URL: &str = "https://maps.google.com";
