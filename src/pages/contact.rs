use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::inquiry::{
    Confirmation, ConsoleSender, Field, InquiryDraft, InquirySender, CONFIRMATION_MILLIS,
};

struct ContactCard {
    icon: &'static str,
    title: &'static str,
    details: [&'static str; 2],
    action: Option<(&'static str, &'static str)>,
}

const CONTACT_CARDS: [ContactCard; 4] = [
    ContactCard {
        icon: "phone-icon",
        title: "Phone",
        details: [config::PRIMARY_PHONE, config::SECONDARY_PHONE],
        action: Some((config::PRIMARY_PHONE_URI, "Call Now")),
    },
    ContactCard {
        icon: "mail-icon",
        title: "Email",
        details: [config::INFO_EMAIL, config::SUPPORT_EMAIL],
        action: Some((config::INFO_EMAIL_URI, "Send Email")),
    },
    ContactCard {
        icon: "map-icon",
        title: "Address",
        details: [
            "123 Logistics Park, Andheri East",
            "Mumbai, Maharashtra 400069, India",
        ],
        action: Some((config::MAP_URL, "View on Map")),
    },
    ContactCard {
        icon: "clock-icon",
        title: "Business Hours",
        details: [
            "Monday - Friday: 8:00 AM - 8:00 PM",
            "Saturday: 9:00 AM - 6:00 PM",
        ],
        action: None,
    },
];

/// Everything a visitor can ask for in the inquiry form's service dropdown.
pub const SERVICE_OPTIONS: [&str; 10] = [
    "Road Transportation",
    "Warehousing & Storage",
    "International Shipping",
    "Express Delivery",
    "Ocean Freight",
    "Air Freight",
    "Supply Chain Management",
    "Project Cargo",
    "E-commerce Logistics",
    "Cold Chain Logistics",
];

const FORM_FEATURES: [&str; 3] = ["Quick Response", "Free Consultation", "Custom Solutions"];

struct Branch {
    city: &'static str,
    address: &'static str,
    phone: &'static str,
    email: &'static str,
}

const BRANCHES: [Branch; 4] = [
    Branch {
        city: "Mumbai",
        address: "123 Logistics Park, Andheri East",
        phone: "+91 22 1234 5678",
        email: "mumbai@ashtavinayaklogistics.com",
    },
    Branch {
        city: "Delhi",
        address: "456 Transport Hub, Okhla Industrial Area",
        phone: "+91 11 2345 6789",
        email: "delhi@ashtavinayaklogistics.com",
    },
    Branch {
        city: "Bangalore",
        address: "789 Cargo Center, Whitefield",
        phone: "+91 80 3456 7890",
        email: "bangalore@ashtavinayaklogistics.com",
    },
    Branch {
        city: "Chennai",
        address: "321 Logistics Zone, Ambattur",
        phone: "+91 44 4567 8901",
        email: "chennai@ashtavinayaklogistics.com",
    },
];

struct FaqEntry {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "What areas do you serve?",
        answer: "We provide logistics services across all major cities in India and international destinations.",
    },
    FaqEntry {
        question: "How quickly can you deliver?",
        answer: "Delivery times vary by service type. Express delivery is available for same-day or next-day delivery in select cities.",
    },
    FaqEntry {
        question: "Do you provide insurance?",
        answer: "Yes, all our shipments come with comprehensive insurance coverage for your peace of mind.",
    },
    FaqEntry {
        question: "Can I track my shipment?",
        answer: "Yes, we provide real-time tracking for all shipments through our online portal and mobile app.",
    },
];

pub enum Msg {
    Edit(Field, String),
    Submit,
    ConfirmationElapsed(u32),
}

/// The inquiry form. Draft and confirmation state never leave this
/// component; the completed inquiry goes to the sender and nowhere else.
pub struct InquiryForm {
    draft: InquiryDraft,
    confirmation: Confirmation,
    reset_timer: Option<Timeout>,
    sender: Box<dyn InquirySender>,
}

impl Component for InquiryForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: InquiryDraft::default(),
            confirmation: Confirmation::default(),
            reset_timer: None,
            sender: Box::new(ConsoleSender),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.draft.set(field, value);
                true
            }
            Msg::Submit => {
                let inquiry = self.draft.finish();
                if let Err(err) = self.sender.send(inquiry) {
                    log::error!("Failed to record inquiry: {err}");
                }
                let generation = self.confirmation.arm();

                let link = ctx.link().clone();
                // Replacing the handle drops a pending timer from an earlier
                // submission, cancelling it. Teardown drops the last one.
                self.reset_timer = Some(Timeout::new(CONFIRMATION_MILLIS, move || {
                    link.send_message(Msg::ConfirmationElapsed(generation));
                }));
                true
            }
            Msg::ConfirmationElapsed(generation) => {
                self.confirmation.timer_elapsed(generation);
                self.reset_timer = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.confirmation.is_visible() {
            return html! {
                <div class="success-message">
                    <i class="check-icon"></i>
                    <h3>{"Thank You!"}</h3>
                    <p>{"Your message has been sent successfully. We'll get back to you soon."}</p>
                </div>
            };
        }

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let edit_input = |field: Field| {
            ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Edit(field, input.value())
            })
        };

        let edit_service = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::Edit(Field::Service, select.value())
        });

        let edit_message = ctx.link().callback(|e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::Edit(Field::Message, textarea.value())
        });

        html! {
            <form onsubmit={onsubmit}>
                <div class="form-row">
                    <div class="form-group">
                        <label for="name">{"Full Name *"}</label>
                        <input
                            type="text"
                            id="name"
                            value={self.draft.name.clone()}
                            oninput={edit_input(Field::Name)}
                            required={true}
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email Address *"}</label>
                        <input
                            type="email"
                            id="email"
                            value={self.draft.email.clone()}
                            oninput={edit_input(Field::Email)}
                            required={true}
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="phone">{"Phone Number"}</label>
                        <input
                            type="tel"
                            id="phone"
                            value={self.draft.phone.clone()}
                            oninput={edit_input(Field::Phone)}
                        />
                    </div>
                    <div class="form-group">
                        <label for="company">{"Company Name"}</label>
                        <input
                            type="text"
                            id="company"
                            value={self.draft.company.clone()}
                            oninput={edit_input(Field::Company)}
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="service">{"Service Required"}</label>
                    <select id="service" onchange={edit_service}>
                        <option value="" selected={self.draft.service.is_empty()}>
                            {"Select a service"}
                        </option>
                        { for SERVICE_OPTIONS.iter().map(|service| html! {
                            <option value={*service} selected={self.draft.service == *service}>
                                {*service}
                            </option>
                        }) }
                    </select>
                </div>

                <div class="form-group">
                    <label for="message">{"Message *"}</label>
                    <textarea
                        id="message"
                        rows="5"
                        value={self.draft.message.clone()}
                        oninput={edit_message}
                        placeholder="Tell us about your logistics requirements..."
                        required={true}
                    />
                </div>

                <button type="submit" class="btn-primary">
                    {"Send Message"}
                    <i class="send-icon"></i>
                </button>
            </form>
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="page-hero">
                <div class="hero-content fade-up">
                    <h1>{"Contact Us"}</h1>
                    <p>{"Get in touch with our logistics experts today"}</p>
                </div>
            </section>

            <section class="contact-info">
                <div class="contact-grid">
                    { for CONTACT_CARDS.iter().enumerate().map(|(index, card)| html! {
                        <div class="contact-card fade-up" style={format!("animation-delay: {}ms", index * 100)}>
                            <i class={classes!("card-icon", card.icon)}></i>
                            <h3>{card.title}</h3>
                            { for card.details.iter().map(|detail| html! { <p>{*detail}</p> }) }
                            {
                                if let Some((href, label)) = card.action {
                                    html! { <a href={href} class="card-action">{label}</a> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }) }
                </div>
            </section>

            <section class="contact-form-section">
                <div class="form-content">
                    <div class="form-text fade-up">
                        <h2>{"Send Us a Message"}</h2>
                        <p>
                            {"Ready to streamline your logistics operations? Fill out the form below \
                              and our team will get back to you within 24 hours with a customized solution."}
                        </p>

                        <div class="form-features">
                            { for FORM_FEATURES.iter().map(|feature| html! {
                                <div class="feature">
                                    <i class="check-icon"></i>
                                    <span>{*feature}</span>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="contact-form fade-up">
                        <InquiryForm />
                    </div>
                </div>
            </section>

            <section class="branch-offices">
                <div class="section-header fade-up">
                    <h2>{"Our Branch Offices"}</h2>
                    <p>{"Visit us at any of our locations across India"}</p>
                </div>

                <div class="branches-grid">
                    { for BRANCHES.iter().enumerate().map(|(index, branch)| html! {
                        <div class="branch-card fade-up" style={format!("animation-delay: {}ms", index * 100)}>
                            <div class="branch-header">
                                <i class="map-icon"></i>
                                <h3>{branch.city}</h3>
                            </div>
                            <div class="branch-details">
                                <p><strong>{"Address: "}</strong>{branch.address}</p>
                                <p>
                                    <strong>{"Phone: "}</strong>
                                    <a href={format!("tel:{}", branch.phone)}>{branch.phone}</a>
                                </p>
                                <p>
                                    <strong>{"Email: "}</strong>
                                    <a href={format!("mailto:{}", branch.email)}>{branch.email}</a>
                                </p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="emergency-contact">
                <div class="emergency-content fade-up">
                    <div class="emergency-text">
                        <h2>{"24/7 Emergency Support"}</h2>
                        <p>{"For urgent shipments and emergency logistics requirements"}</p>
                        <div class="emergency-items">
                            <div class="emergency-item">
                                <i class="phone-icon"></i>
                                <div>
                                    <h4>{"Emergency Hotline"}</h4>
                                    <a href={config::PRIMARY_PHONE_URI}>{config::PRIMARY_PHONE}</a>
                                </div>
                            </div>
                            <div class="emergency-item">
                                <i class="mail-icon"></i>
                                <div>
                                    <h4>{"Emergency Email"}</h4>
                                    <a href={config::EMERGENCY_EMAIL_URI}>{config::EMERGENCY_EMAIL}</a>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="emergency-visual">
                        <i class="truck-icon"></i>
                    </div>
                </div>
            </section>

            <section class="faq-section">
                <div class="section-header fade-up">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <p>{"Quick answers to common questions"}</p>
                </div>

                <div class="faq-grid">
                    { for FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| html! {
                        <div class="faq-item fade-up" style={format!("animation-delay: {}ms", index * 100)}>
                            <h3>{entry.question}</h3>
                            <p>{entry.answer}</p>
                        </div>
                    }) }
                </div>
            </section>

            <style>
                {r#"
                .contact-page {
                    background: #f4f7fa;
                    color: #1c2b39;
                }

                @keyframes fadeUp {
                    from {
                        opacity: 0;
                        transform: translateY(30px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .fade-up {
                    opacity: 0;
                    animation: fadeUp 0.6s ease forwards;
                }

                .page-hero {
                    background: linear-gradient(135deg, #0d2137, #16395c);
                    color: #fff;
                    padding: 10rem 2rem 6rem;
                    text-align: center;
                }

                .page-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .page-hero p {
                    font-size: 1.2rem;
                    color: #9fb3c8;
                }

                .contact-info {
                    max-width: 1200px;
                    margin: -3rem auto 0;
                    padding: 0 2rem 3rem;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .contact-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 2rem 1.5rem;
                    text-align: center;
                    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
                }

                .contact-card h3 {
                    margin: 1rem 0 0.75rem;
                }

                .contact-card p {
                    color: #5a6b7b;
                    font-size: 0.95rem;
                    margin: 0.25rem 0;
                }

                .card-action {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #f5a623;
                    font-weight: 600;
                    text-decoration: none;
                }

                .contact-form-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }

                .form-content {
                    display: grid;
                    grid-template-columns: 1fr 1.2fr;
                    gap: 3rem;
                    align-items: start;
                }

                .form-text h2 {
                    font-size: 2.2rem;
                    margin-bottom: 1rem;
                }

                .form-text p {
                    color: #5a6b7b;
                    line-height: 1.7;
                }

                .form-features {
                    margin-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .feature {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    color: #1c2b39;
                    font-weight: 500;
                }

                .contact-form {
                    background: #fff;
                    border-radius: 12px;
                    padding: 2.5rem;
                    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }

                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.25rem;
                }

                .form-group label {
                    font-size: 0.9rem;
                    font-weight: 600;
                    margin-bottom: 0.4rem;
                }

                .form-group input,
                .form-group select,
                .form-group textarea {
                    border: 1px solid #d4dde6;
                    border-radius: 8px;
                    padding: 0.7rem 0.9rem;
                    font-size: 1rem;
                    font-family: inherit;
                    transition: border-color 0.3s ease;
                }

                .form-group input:focus,
                .form-group select:focus,
                .form-group textarea:focus {
                    outline: none;
                    border-color: #f5a623;
                }

                .btn-primary {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #f5a623;
                    color: #0d2137;
                    border: none;
                    border-radius: 8px;
                    padding: 0.85rem 2rem;
                    font-size: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .btn-primary:hover {
                    background: #ffb84d;
                }

                .success-message {
                    text-align: center;
                    padding: 3rem 1rem;
                }

                .success-message h3 {
                    font-size: 1.6rem;
                    margin: 1rem 0 0.5rem;
                }

                .success-message p {
                    color: #5a6b7b;
                }

                .branch-offices {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .section-header h2 {
                    font-size: 2.2rem;
                    margin-bottom: 0.5rem;
                }

                .section-header p {
                    color: #5a6b7b;
                }

                .branches-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .branch-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1.75rem;
                    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
                }

                .branch-header {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }

                .branch-details p {
                    color: #5a6b7b;
                    font-size: 0.92rem;
                    margin: 0.4rem 0;
                }

                .branch-details a {
                    color: #16395c;
                    text-decoration: none;
                }

                .branch-details a:hover {
                    color: #f5a623;
                }

                .emergency-contact {
                    background: #0d2137;
                    color: #fff;
                    padding: 4rem 2rem;
                }

                .emergency-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }

                .emergency-text p {
                    color: #9fb3c8;
                    margin: 0.5rem 0 1.5rem;
                }

                .emergency-items {
                    display: flex;
                    gap: 3rem;
                    flex-wrap: wrap;
                }

                .emergency-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .emergency-item h4 {
                    margin: 0 0 0.25rem;
                }

                .emergency-item a {
                    color: #f5a623;
                    text-decoration: none;
                }

                .faq-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 3rem 2rem 5rem;
                }

                .faq-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .faq-item {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1.75rem;
                    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
                }

                .faq-item h3 {
                    margin-bottom: 0.6rem;
                }

                .faq-item p {
                    color: #5a6b7b;
                    line-height: 1.6;
                }

                @media (max-width: 900px) {
                    .contact-grid,
                    .branches-grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .form-content {
                        grid-template-columns: 1fr;
                    }

                    .emergency-content {
                        flex-direction: column;
                        text-align: center;
                    }

                    .emergency-items {
                        justify-content: center;
                    }
                }

                @media (max-width: 600px) {
                    .contact-grid,
                    .branches-grid,
                    .faq-grid,
                    .form-row {
                        grid-template-columns: 1fr;
                    }

                    .page-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
