use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

struct QuickLink {
    label: &'static str,
    route: Route,
}

const QUICK_LINKS: [QuickLink; 4] = [
    QuickLink { label: "Home", route: Route::Home },
    QuickLink { label: "Services", route: Route::Services },
    QuickLink { label: "About Us", route: Route::About },
    QuickLink { label: "Contact", route: Route::Contact },
];

const SERVICES: [&str; 6] = [
    "Road Transportation",
    "Warehousing & Storage",
    "International Shipping",
    "Express Delivery",
    "Ocean Freight",
    "Air Freight",
];

struct ContactEntry {
    icon: &'static str,
    text: &'static str,
    link: Option<&'static str>,
}

const CONTACT_INFO: [ContactEntry; 4] = [
    ContactEntry {
        icon: "phone-icon",
        text: config::PRIMARY_PHONE,
        link: Some(config::PRIMARY_PHONE_URI),
    },
    ContactEntry {
        icon: "mail-icon",
        text: config::INFO_EMAIL,
        link: Some(config::INFO_EMAIL_URI),
    },
    ContactEntry {
        icon: "map-icon",
        text: config::HEAD_OFFICE_ADDRESS,
        link: Some(config::MAP_URL),
    },
    ContactEntry {
        icon: "clock-icon",
        text: "Mon-Fri: 8AM-8PM, Sat: 9AM-6PM",
        link: None,
    },
];

struct SocialLink {
    icon: &'static str,
    url: &'static str,
    label: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink { icon: "facebook-icon", url: "https://facebook.com", label: "Facebook" },
    SocialLink { icon: "twitter-icon", url: "https://twitter.com", label: "Twitter" },
    SocialLink { icon: "instagram-icon", url: "https://instagram.com", label: "Instagram" },
    SocialLink { icon: "linkedin-icon", url: "https://linkedin.com", label: "LinkedIn" },
    SocialLink { icon: "youtube-icon", url: "https://youtube.com", label: "YouTube" },
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-grid">
                    <div class="footer-section">
                        <div class="footer-logo">
                            <i class="truck-icon"></i>
                            <span>{config::COMPANY_NAME}</span>
                        </div>
                        <p>
                            {"Your trusted partner in logistics for over a decade. We provide \
                              comprehensive transportation and warehousing solutions across India \
                              with a commitment to reliability, efficiency, and customer satisfaction."}
                        </p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a
                                    href={social.url}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="social-link"
                                    aria-label={social.label}
                                >
                                    <i class={social.icon}></i>
                                </a>
                            }) }
                        </div>
                    </div>

                    <div class="footer-section">
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-links">
                            { for QUICK_LINKS.iter().map(|link| html! {
                                <li>
                                    <Link<Route> to={link.route.clone()}>{link.label}</Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h3>{"Our Services"}</h3>
                        <ul class="footer-links">
                            { for SERVICES.iter().map(|service| html! {
                                <li>
                                    <Link<Route> to={Route::Services}>{*service}</Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h3>{"Contact Information"}</h3>
                        <div class="contact-list">
                            { for CONTACT_INFO.iter().map(|contact| html! {
                                <div class="contact-item">
                                    <i class={classes!("contact-icon", contact.icon)}></i>
                                    {
                                        if let Some(link) = contact.link {
                                            html! { <a href={link} class="contact-link">{contact.text}</a> }
                                        } else {
                                            html! { <span class="contact-text">{contact.text}</span> }
                                        }
                                    }
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <div class="footer-bottom-content">
                    <p>{format!("© {} {}. All rights reserved.", current_year, config::COMPANY_NAME)}</p>
                    <div class="footer-bottom-links">
                        <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                        <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                        <Link<Route> to={Route::Sitemap}>{"Sitemap"}</Link<Route>>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .footer {
                    background: #0d2137;
                    color: #fff;
                    margin-top: auto;
                }

                .footer-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 2rem 2rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1.5fr;
                    gap: 3rem;
                }

                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.2rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .footer-section p {
                    color: #9fb3c8;
                    line-height: 1.6;
                }

                .footer-section h3 {
                    font-size: 1.1rem;
                    margin-bottom: 1.25rem;
                    color: #f5a623;
                }

                .footer-links {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .footer-links li {
                    margin-bottom: 0.6rem;
                }

                .footer-links a {
                    color: #9fb3c8;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-links a:hover {
                    color: #fff;
                }

                .social-links {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.25rem;
                }

                .social-link {
                    width: 36px;
                    height: 36px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.08);
                    color: #9fb3c8;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .social-link:hover {
                    background: #f5a623;
                    color: #0d2137;
                }

                .contact-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.6rem;
                    margin-bottom: 0.75rem;
                }

                .contact-item a,
                .contact-text {
                    color: #9fb3c8;
                    text-decoration: none;
                }

                .contact-item a:hover {
                    color: #fff;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 1.25rem 2rem;
                }

                .footer-bottom-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    color: #9fb3c8;
                    font-size: 0.9rem;
                }

                .footer-bottom-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-bottom-links a {
                    color: #9fb3c8;
                    text-decoration: none;
                }

                .footer-bottom-links a:hover {
                    color: #fff;
                }

                @media (max-width: 900px) {
                    .footer-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (max-width: 600px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
